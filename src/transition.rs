// Duration D spans 2D: swell [0, D], cross-fade [D/2, 3D/2], settle [D, 2D].

use log::debug;
use raylib::prelude::*;

use crate::config::SliderConfig;
use crate::scene::{Scene, SceneProperty};
use crate::tween::{Ease, Timeline, Track};

/// Channel offset of the RGB sweep at `progress`: rises from zero to
/// `intensity` over the first half and falls back over the second.
pub fn sweep_offset(progress: f32, intensity: f32) -> f32 {
    let p = progress.clamp(0.0, 1.0);
    let ramp = if p < 0.5 { p * 2.0 } else { (1.0 - p) * 2.0 };
    intensity * ramp
}

pub struct Transition {
    from: Option<usize>,
    to: usize,
    timeline: Timeline<SceneProperty>,
    rgb_sweep: bool,
}

impl Transition {
    /// Builds the timeline moving the scene from its current slide to `to`.
    /// `loaded` is false only for the very first transition, which neither
    /// swells the displacement nor sweeps the RGB channels.
    pub fn new(scene: &Scene, from: Option<usize>, to: usize, config: &SliderConfig, loaded: bool) -> Self {
        let d = config.slide_transition_duration.max(0.0);
        let amplitude = if loaded { config.transition_scale_amplitude } else { 0.0 };
        let kinds = scene.layer_kinds();

        let mut timeline = Timeline::new();
        for axis in [SceneProperty::BackgroundScaleX, SceneProperty::BackgroundScaleY] {
            timeline.add(Track::new(axis, 0.0, d, amplitude, Ease::CubicIn));
        }
        for index in (0..scene.slide_count()).filter(|&i| i != to) {
            for &kind in &kinds {
                timeline.add(Track::new(SceneProperty::Alpha(kind, index), d * 0.5, d, 0.0, Ease::CubicOut));
            }
        }
        for &kind in &kinds {
            timeline.add(Track::new(SceneProperty::Alpha(kind, to), d * 0.5, d, 1.0, Ease::CubicOut));
        }
        for axis in [SceneProperty::BackgroundScaleX, SceneProperty::BackgroundScaleY] {
            timeline.add(Track::new(axis, d, d, 0.0, Ease::QuadOut));
        }

        debug!("transition {:?} -> {} over {}s", from, to, timeline.duration());

        Self {
            from,
            to,
            timeline,
            rgb_sweep: loaded,
        }
    }

    pub fn from(&self) -> Option<usize> {
        self.from
    }

    pub fn to(&self) -> usize {
        self.to
    }

    pub fn progress(&self) -> f32 {
        self.timeline.progress()
    }

    pub fn duration(&self) -> f32 {
        self.timeline.duration()
    }

    pub fn is_complete(&self) -> bool {
        self.timeline.is_complete()
    }

    /// Called once when the transition starts.
    pub fn begin(&self, scene: &mut Scene) {
        scene.background.position = scene.centre();
        scene.background.rotation = 0.0;
    }

    /// Advances the timeline and applies the progress-driven effects.
    pub fn advance(&mut self, dt: f32, scene: &mut Scene, config: &SliderConfig) {
        self.timeline.advance(dt, scene);

        let progress = self.timeline.progress();
        scene.background.rotation = config.transition_sprite_rotation;
        scene.background.sprite_scale = progress * config.transition_scale_intensity;

        if self.rgb_sweep {
            if config.texts_rgb_effect {
                let offset = sweep_offset(progress, config.nav_texts_rgb_intensity);
                scene.text_split.set_horizontal(offset, -offset);
            }
            if config.images_rgb_effect {
                let offset = sweep_offset(progress, config.nav_images_rgb_intensity);
                scene.image_split.set_horizontal(-offset, offset);
            }
        }
    }

    /// Final touches once the timeline has run out.
    pub fn finish(&self, scene: &mut Scene) {
        scene.reset_rgb();
        for kind in scene.layer_kinds() {
            if let Some(layer) = scene.layer_mut(kind) {
                for (index, node) in layer.nodes.iter_mut().enumerate() {
                    node.alpha = if index == self.to { 1.0 } else { 0.0 };
                }
            }
        }
        scene.background.filter_scale = Vector2::new(0.0, 0.0);
    }
}
