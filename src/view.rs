use raylib::prelude::*;

use crate::config::SliderConfig;
use crate::constants::{MOBILE_BREAKPOINT, VIEW_ZOOM};

/// Maps the fixed-size stage onto the window: scaled to cover it, zoomed
/// about the centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageView {
    pub stage: Vector2,
    pub viewport: Vector2,
    scale: f32,
    offset: Vector2,
}

impl StageView {
    pub fn new(stage: Vector2, viewport: Vector2) -> Self {
        let cover = (viewport.x / stage.x).max(viewport.y / stage.y);
        let scale = if cover.is_finite() && cover > 0.0 { cover * VIEW_ZOOM } else { 1.0 };
        let offset = Vector2::new(
            (viewport.x - stage.x * scale) / 2.0,
            (viewport.y - stage.y * scale) / 2.0,
        );
        Self { stage, viewport, scale, offset }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Where the stage lands in the window.
    pub fn dest(&self) -> Rectangle {
        Rectangle::new(self.offset.x, self.offset.y, self.stage.x * self.scale, self.stage.y * self.scale)
    }

    pub fn to_stage(&self, window: Vector2) -> Vector2 {
        Vector2::new(
            (window.x - self.offset.x) / self.scale,
            (window.y - self.offset.y) / self.scale,
        )
    }

    pub fn to_window(&self, stage: Vector2) -> Vector2 {
        Vector2::new(stage.x * self.scale + self.offset.x, stage.y * self.scale + self.offset.y)
    }
}

/// Text sizes picked for the current viewport width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub title_size: f32,
    pub subtitle_size: f32,
    pub subtitle_offset: f32,
    pub title_wrap: f32,
    pub subtitle_wrap: f32,
}

impl TextMetrics {
    pub fn for_viewport(config: &SliderConfig, viewport: Vector2, stage: Vector2) -> Self {
        if is_mobile(viewport) {
            Self {
                title_size: config.mobile_text_title_size,
                subtitle_size: config.mobile_text_sub_title_size,
                subtitle_offset: config.mobile_text_sub_title_offset_top,
                title_wrap: viewport.x * 1.5,
                subtitle_wrap: stage.x / 1.5,
            }
        } else {
            Self {
                title_size: config.text_title_size,
                subtitle_size: config.text_sub_title_size,
                subtitle_offset: config.text_sub_title_offset_top,
                title_wrap: viewport.x / 2.0,
                subtitle_wrap: stage.x / 2.0,
            }
        }
    }
}

pub fn is_mobile(viewport: Vector2) -> bool {
    viewport.x < MOBILE_BREAKPOINT
}

/// Greedy word wrap. A single word wider than `max_width` gets a line of
/// its own rather than being split.
pub fn wrap_words(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if line.is_empty() {
                line.push_str(word);
                continue;
            }
            let candidate = format!("{line} {word}");
            if measure(&candidate) > max_width {
                lines.push(std::mem::replace(&mut line, word.to_string()));
            } else {
                line = candidate;
            }
        }
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAGE: Vector2 = Vector2 { x: 1920.0, y: 1080.0 };

    #[test]
    fn cover_fit_fills_the_window() {
        let view = StageView::new(STAGE, Vector2::new(800.0, 800.0));
        let dest = view.dest();
        assert!(dest.width >= 800.0 && dest.height >= 800.0);
        // centred
        assert!((dest.x + dest.width / 2.0 - 400.0).abs() < 1e-3);
        assert!((dest.y + dest.height / 2.0 - 400.0).abs() < 1e-3);
    }

    #[test]
    fn window_centre_is_stage_centre() {
        let view = StageView::new(STAGE, Vector2::new(1280.0, 720.0));
        let centre = view.to_stage(Vector2::new(640.0, 360.0));
        assert!((centre.x - 960.0).abs() < 1e-3);
        assert!((centre.y - 540.0).abs() < 1e-3);
        let back = view.to_window(Vector2::new(100.0, 200.0));
        let there = view.to_stage(back);
        assert!((there.x - 100.0).abs() < 1e-3 && (there.y - 200.0).abs() < 1e-3);
    }

    #[test]
    fn narrow_viewports_use_mobile_metrics() {
        let config = SliderConfig::default();
        let mobile = TextMetrics::for_viewport(&config, Vector2::new(400.0, 800.0), STAGE);
        assert_eq!(mobile.title_size, 45.0);
        assert_eq!(mobile.subtitle_offset, 40.0);
        assert_eq!(mobile.title_wrap, 600.0);
        assert_eq!(mobile.subtitle_wrap, 1280.0);

        let desktop = TextMetrics::for_viewport(&config, Vector2::new(1600.0, 900.0), STAGE);
        assert_eq!(desktop.title_size, 125.0);
        assert_eq!(desktop.subtitle_offset, 120.0);
        assert_eq!(desktop.title_wrap, 800.0);
        assert_eq!(desktop.subtitle_wrap, 960.0);
    }

    #[test]
    fn wraps_on_word_boundaries() {
        let measure = |s: &str| s.chars().count() as f32;
        assert_eq!(
            wrap_words("the quick brown fox jumps", 10.0, measure),
            vec!["the quick", "brown fox", "jumps"]
        );
        assert_eq!(wrap_words("incomprehensibilities ok", 5.0, measure), vec!["incomprehensibilities", "ok"]);
        assert_eq!(wrap_words("a\nb c", 10.0, measure), vec!["a", "b c"]);
        assert_eq!(wrap_words("", 10.0, measure), vec![""]);
    }
}
