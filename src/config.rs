use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use raylib::prelude::*;
use serde::Deserialize;

use crate::error::{Result, SliderError};

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SliderConfig {
    pub slide_images: Vec<PathBuf>,
    /// `[title, subtitle]` pairs sharing indices with `slide_images`.
    pub items_titles: Vec<Vec<String>>,
    pub background_displacement_sprite: Option<PathBuf>,
    pub cursor_displacement_sprite: Option<PathBuf>,

    pub cursor_img_effect: bool,
    pub cursor_text_effect: bool,
    pub cursor_scale_intensity: f32,
    pub cursor_momentum: f32,

    pub swipe: bool,
    pub swipe_distance: f32,
    pub swipe_scale_intensity: f32,

    pub slide_transition_duration: f32,
    pub transition_scale_intensity: f32,
    pub transition_scale_amplitude: f32,
    pub transition_sprite_rotation: f32,

    pub nav: bool,
    pub button_mode: bool,

    pub texts_rgb_effect: bool,
    pub images_rgb_effect: bool,
    pub texts_display: bool,
    pub texts_sub_title_display: bool,
    pub texts_tilt_effect: bool,

    pub fonts: Vec<FontSpec>,

    pub text_title_color: String,
    pub text_title_size: f32,
    pub mobile_text_title_size: f32,
    pub text_title_letterspacing: f32,
    pub text_sub_title_color: String,
    pub text_sub_title_size: f32,
    pub mobile_text_sub_title_size: f32,
    pub text_sub_title_letterspacing: f32,
    pub text_sub_title_offset_top: f32,
    pub mobile_text_sub_title_offset_top: f32,

    pub texts_rgb_intensity: f32,
    pub nav_texts_rgb_intensity: f32,
    pub images_rgb_intensity: f32,
    pub nav_images_rgb_intensity: f32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            slide_images: Vec::new(),
            items_titles: Vec::new(),
            background_displacement_sprite: None,
            cursor_displacement_sprite: None,
            cursor_img_effect: true,
            cursor_text_effect: true,
            cursor_scale_intensity: 0.25,
            cursor_momentum: 0.14,
            swipe: true,
            swipe_distance: 500.0,
            swipe_scale_intensity: 0.3,
            slide_transition_duration: 1.0,
            transition_scale_intensity: 40.0,
            transition_scale_amplitude: 300.0,
            transition_sprite_rotation: 0.0,
            nav: true,
            button_mode: true,
            texts_rgb_effect: true,
            images_rgb_effect: false,
            texts_display: false,
            texts_sub_title_display: false,
            texts_tilt_effect: true,
            fonts: Vec::new(),
            text_title_color: "white".to_string(),
            text_title_size: 125.0,
            mobile_text_title_size: 45.0,
            text_title_letterspacing: 3.0,
            text_sub_title_color: "white".to_string(),
            text_sub_title_size: 21.0,
            mobile_text_sub_title_size: 14.0,
            text_sub_title_letterspacing: 3.0,
            text_sub_title_offset_top: 120.0,
            mobile_text_sub_title_offset_top: 40.0,
            texts_rgb_intensity: 0.09,
            nav_texts_rgb_intensity: 10.0,
            images_rgb_intensity: 0.9,
            nav_images_rgb_intensity: 100.0,
        }
    }
}

impl SliderConfig {
    /// Reads a JSON config file. Relative asset paths are resolved against
    /// the directory holding the file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| SliderError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_json(&text).map_err(|source| SliderError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        for warning in config.warnings() {
            warn!("{}: {}", path.display(), warning);
        }
        Ok(config)
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn resolve_paths(&mut self, base: &Path) {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        self.slide_images.iter_mut().for_each(resolve);
        self.background_displacement_sprite.iter_mut().for_each(resolve);
        self.cursor_displacement_sprite.iter_mut().for_each(resolve);
        for font in self.fonts.iter_mut() {
            resolve(&mut font.path);
        }
    }

    pub fn slide_count(&self) -> usize {
        self.slide_images.len()
    }

    pub fn title(&self, index: usize) -> Option<&str> {
        self.items_titles.get(index)?.first().map(String::as_str)
    }

    pub fn subtitle(&self, index: usize) -> Option<&str> {
        self.items_titles.get(index)?.get(1).map(String::as_str)
    }

    /// Whether the title layer exists at all.
    pub fn shows_titles(&self) -> bool {
        self.texts_display && !self.items_titles.is_empty()
    }

    pub fn shows_subtitles(&self) -> bool {
        self.shows_titles() && self.texts_sub_title_display
    }

    pub fn title_font(&self) -> Option<&FontSpec> {
        self.fonts.first()
    }

    /// Subtitles use the second font, falling back to the title font.
    pub fn subtitle_font(&self) -> Option<&FontSpec> {
        self.fonts.get(1).or_else(|| self.fonts.first())
    }

    pub fn title_color(&self) -> Color {
        parse_color(&self.text_title_color).unwrap_or_else(|| {
            warn!("unknown title color '{}', using white", self.text_title_color);
            Color::WHITE
        })
    }

    pub fn subtitle_color(&self) -> Color {
        parse_color(&self.text_sub_title_color).unwrap_or_else(|| {
            warn!("unknown subtitle color '{}', using white", self.text_sub_title_color);
            Color::WHITE
        })
    }

    /// Inconsistencies that are tolerated but worth reporting.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.slide_images.is_empty() {
            warnings.push("no slide images configured".to_string());
        }
        if self.texts_display && !self.items_titles.is_empty() && self.items_titles.len() != self.slide_images.len() {
            warnings.push(format!(
                "{} titles for {} images, titles are matched by index",
                self.items_titles.len(),
                self.slide_images.len()
            ));
        }
        if !(self.cursor_momentum > 0.0 && self.cursor_momentum < 1.0) {
            warnings.push(format!("cursorMomentum {} is outside (0, 1)", self.cursor_momentum));
        }
        if self.slide_transition_duration <= 0.0 {
            warnings.push("slideTransitionDuration is not positive, transitions will be instant".to_string());
        }
        warnings
    }
}

/// A font file with an optional weight, written `"path/to/font.ttf:400"`.
/// The weight is informational; the font file decides the glyphs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "String")]
pub struct FontSpec {
    pub path: PathBuf,
    pub weight: Option<u16>,
}

impl From<String> for FontSpec {
    fn from(spec: String) -> Self {
        // Only a numeric suffix is a weight, so "C:\fonts\a.ttf" stays intact.
        match spec.rsplit_once(':') {
            Some((path, weight)) if !path.is_empty() => match weight.parse::<u16>() {
                Ok(weight) => FontSpec { path: PathBuf::from(path), weight: Some(weight) },
                Err(_) => FontSpec { path: PathBuf::from(spec), weight: None },
            },
            _ => FontSpec { path: PathBuf::from(spec), weight: None },
        }
    }
}

/// Parses a CSS-style color: a handful of names or `#rgb`, `#rrggbb`,
/// `#rrggbbaa`.
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        return match hex.len() {
            3 => {
                let short = |i: usize| u8::from_str_radix(hex.get(i..i + 1)?, 16).ok().map(|v| v * 17);
                Some(Color::new(short(0)?, short(1)?, short(2)?, 255))
            }
            6 => Some(Color::new(channel(0)?, channel(2)?, channel(4)?, 255)),
            8 => Some(Color::new(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        };
    }
    match value.to_lowercase().as_str() {
        "white" => Some(Color::WHITE),
        "black" => Some(Color::BLACK),
        "red" => Some(Color::new(255, 0, 0, 255)),
        "green" => Some(Color::new(0, 128, 0, 255)),
        "blue" => Some(Color::new(0, 0, 255, 255)),
        "yellow" => Some(Color::new(255, 255, 0, 255)),
        "pink" => Some(Color::new(255, 192, 203, 255)),
        "gray" | "grey" => Some(Color::new(128, 128, 128, 255)),
        "transparent" => Some(Color::new(0, 0, 0, 0)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = SliderConfig::from_json("{}").unwrap();
        assert_eq!(config.swipe_distance, 500.0);
        assert_eq!(config.cursor_momentum, 0.14);
        assert!(config.cursor_img_effect);
        assert!(!config.images_rgb_effect);
        assert_eq!(config.nav_images_rgb_intensity, 100.0);
    }

    #[test]
    fn camel_case_keys_are_read() {
        let config = SliderConfig::from_json(
            r#"{
                "slideImages": ["a.jpg", "b.jpg"],
                "itemsTitles": [["Alpha", "first"], ["Beta"]],
                "textsDisplay": true,
                "swipeDistance": 120,
                "fonts": ["fonts/Playfair.ttf:900", "fonts/Roboto.ttf"]
            }"#,
        )
        .unwrap();
        assert_eq!(config.slide_count(), 2);
        assert_eq!(config.swipe_distance, 120.0);
        assert_eq!(config.title(0), Some("Alpha"));
        assert_eq!(config.subtitle(0), Some("first"));
        assert_eq!(config.subtitle(1), None);
        assert_eq!(config.title(2), None);
        assert_eq!(config.fonts[0].weight, Some(900));
        assert_eq!(config.fonts[1].path, PathBuf::from("fonts/Roboto.ttf"));
        assert!(config.shows_titles());
        assert!(!config.shows_subtitles());
    }

    #[test]
    fn font_spec_keeps_drive_letters() {
        let spec = FontSpec::from("C:\\fonts\\Roboto.ttf".to_string());
        assert_eq!(spec.path, PathBuf::from("C:\\fonts\\Roboto.ttf"));
        assert_eq!(spec.weight, None);

        let spec = FontSpec::from("C:\\fonts\\Roboto.ttf:300".to_string());
        assert_eq!(spec.path, PathBuf::from("C:\\fonts\\Roboto.ttf"));
        assert_eq!(spec.weight, Some(300));
    }

    #[test]
    fn subtitle_font_falls_back_to_title_font() {
        let mut config = SliderConfig::default();
        assert!(config.subtitle_font().is_none());
        config.fonts.push(FontSpec::from("title.ttf".to_string()));
        assert_eq!(config.subtitle_font(), config.title_font());
    }

    #[test]
    fn colors_parse() {
        assert_eq!(parse_color("white"), Some(Color::WHITE));
        assert_eq!(parse_color("#ff8000"), Some(Color::new(255, 128, 0, 255)));
        assert_eq!(parse_color("#fff"), Some(Color::new(255, 255, 255, 255)));
        assert_eq!(parse_color("#00000080"), Some(Color::new(0, 0, 0, 128)));
        assert_eq!(parse_color("#12"), None);
        assert_eq!(parse_color("chartreuse-ish"), None);
    }

    #[test]
    fn mismatched_titles_are_reported() {
        let mut config = SliderConfig::default();
        config.slide_images = vec!["a.png".into(), "b.png".into()];
        config.items_titles = vec![vec!["only".to_string()]];
        config.texts_display = true;
        let warnings = config.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("1 titles for 2 images"));
    }

    #[test]
    fn relative_paths_resolve_against_base() {
        let mut config = SliderConfig::default();
        config.slide_images = vec!["img/a.png".into()];
        config.cursor_displacement_sprite = Some("maps/cursor.png".into());
        config.resolve_paths(Path::new("/srv/slider"));
        assert_eq!(config.slide_images[0], PathBuf::from("/srv/slider/img/a.png"));
        assert_eq!(
            config.cursor_displacement_sprite,
            Some(PathBuf::from("/srv/slider/maps/cursor.png"))
        );
    }
}
