use log::{debug, info, warn};
use raylib::prelude::*;

use crate::config::SliderConfig;
use crate::constants::*;
use crate::pointer::{PointerSample, PointerTracker};
use crate::scene::{LayerKind, Scene};
use crate::state::{Direction, SliderPhase};
use crate::swipe::{swipe_direction, swipe_split};
use crate::transition::Transition;
use crate::tween::{Chase, Ease};
use crate::view::{StageView, TextMetrics};

/// Everything the slider needs from the outside world for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    pub dt: f32,
    /// Pointer in window pixels, `None` when it is outside the window.
    pub pointer: Option<Vector2>,
    pub viewport: Vector2,
}

/// A pair of chases driving one 2D property.
struct Chase2 {
    x: Chase,
    y: Chase,
}

impl Chase2 {
    fn new(value: Vector2, ease: Ease, duration: f32) -> Self {
        Self {
            x: Chase::new(value.x, ease, duration),
            y: Chase::new(value.y, ease, duration),
        }
    }

    fn set_target(&mut self, target: Vector2) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    fn snap(&mut self, value: Vector2) {
        self.x.snap(value.x);
        self.y.snap(value.y);
    }

    fn step(&mut self, dt: f32) -> Vector2 {
        Vector2::new(self.x.step(dt), self.y.step(dt))
    }

    fn is_running(&self) -> bool {
        self.x.is_running() || self.y.is_running()
    }
}

pub struct Slider {
    config: SliderConfig,
    scene: Scene,
    tracker: PointerTracker,
    phase: SliderPhase,
    loaded: bool,
    current: usize,
    view: StageView,
    metrics: TextMetrics,
    cursor_scale: Chase2,
    background_relax: Option<Chase2>,
    title_tilt: Vec<Chase2>,
    subtitle_tilt: Vec<Chase2>,
}

impl Slider {
    pub fn new(config: SliderConfig, viewport: Vector2) -> Self {
        for warning in config.warnings() {
            warn!("{}", warning);
        }

        let stage = Vector2::new(RENDER_WIDTH as f32, RENDER_HEIGHT as f32);
        let view = StageView::new(stage, viewport);
        let metrics = TextMetrics::for_viewport(&config, viewport, stage);
        let scene = Scene::build(&config, stage, metrics.subtitle_offset);

        let tilt_chases = |kind: LayerKind| -> Vec<Chase2> {
            scene
                .layer(kind)
                .map(|layer| {
                    layer
                        .nodes
                        .iter()
                        .map(|node| Chase2::new(node.position, Ease::ExpoOut, TILT_CHASE_DURATION))
                        .collect()
                })
                .unwrap_or_default()
        };
        let title_tilt = tilt_chases(LayerKind::Titles);
        let subtitle_tilt = tilt_chases(LayerKind::Subtitles);

        Self {
            tracker: PointerTracker::new(config.cursor_momentum, viewport),
            cursor_scale: Chase2::new(Vector2::new(0.0, 0.0), Ease::ExpoOut, CURSOR_CHASE_DURATION),
            config,
            scene,
            phase: SliderPhase::Idle,
            loaded: false,
            current: 0,
            view,
            metrics,
            background_relax: None,
            title_tilt,
            subtitle_tilt,
        }
    }

    /// Fades the first slide in. Runs through the regular transition path,
    /// without displacement swell or RGB sweep.
    pub fn start(&mut self) {
        if self.scene.slide_count() == 0 {
            warn!("slider started without slides");
            return;
        }
        info!(
            "slider started with {} slides, layers {:?}",
            self.scene.slide_count(),
            self.scene.layer_kinds()
        );
        self.begin_transition(None, self.current);
    }

    // --- Accessors ---

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn phase(&self) -> &SliderPhase {
        &self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Target of the running transition, if any.
    pub fn pending_index(&self) -> Option<usize> {
        match &self.phase {
            SliderPhase::Transitioning(transition) => Some(transition.to()),
            _ => None,
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase.is_transitioning()
    }

    /// True once the first transition has completed.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn pointer(&self) -> PointerSample {
        self.tracker.sample()
    }

    pub fn view(&self) -> &StageView {
        &self.view
    }

    pub fn metrics(&self) -> &TextMetrics {
        &self.metrics
    }

    // --- Input ---

    /// Requests the neighbouring slide. Refused while a transition runs.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        if self.is_transitioning() {
            debug!("navigation {:?} ignored, transition running", direction);
            return false;
        }
        match direction.step(self.current, self.scene.slide_count()) {
            Some(to) => {
                self.begin_transition(Some(self.current), to);
                true
            }
            None => false,
        }
    }

    /// Pointer pressed over the stage. Starts a swipe unless swiping is
    /// disabled or a transition is running.
    pub fn pointer_down(&mut self, position: Vector2) -> bool {
        if !self.config.swipe || self.is_transitioning() {
            return false;
        }
        let origin = self.view.to_stage(position);
        debug!("swipe started at {:?}", origin);
        self.phase = SliderPhase::Swiping { origin };
        self.background_relax = None;
        self.scene.reset_rgb();
        true
    }

    /// Pointer moved. While swiping, crossing the distance threshold commits
    /// a transition. Returns true when one was started.
    pub fn pointer_move(&mut self, position: Vector2) -> bool {
        let SliderPhase::Swiping { origin } = self.phase else {
            return false;
        };
        let position = self.view.to_stage(position);
        match swipe_direction(origin, position, self.config.swipe_distance) {
            Some(direction) => self.navigate(direction),
            None => false,
        }
    }

    /// Pointer released: drop the swipe and let the background settle.
    pub fn pointer_up(&mut self) {
        if !self.config.swipe || self.is_transitioning() {
            return;
        }
        self.scene.reset_rgb();
        let mut relax = Chase2::new(self.scene.background.filter_scale, Ease::ExpoOut, SWIPE_RELAX_DURATION);
        relax.set_target(Vector2::new(0.0, 0.0));
        self.background_relax = Some(relax);
        self.phase = SliderPhase::Idle;
    }

    // --- Update ---

    /// Advances one frame.
    pub fn update(&mut self, input: FrameInput) {
        if input.viewport != self.view.viewport {
            self.set_viewport(input.viewport);
        }

        self.tracker.set_raw(input.pointer);
        let sample = self.tracker.step(input.viewport);
        let trailing = self.view.to_stage(sample.trailing);

        self.update_tilt(input.dt, sample.kinetic);

        if sample.moving {
            self.scene.cursor.position = trailing;
            self.cursor_scale.set_target(Vector2::new(
                sample.kinetic.x * self.config.cursor_scale_intensity,
                sample.kinetic.y * self.config.cursor_scale_intensity,
            ));
        }
        self.scene.cursor.filter_scale = self.cursor_scale.step(input.dt);

        let mut finished = false;
        match &mut self.phase {
            SliderPhase::Transitioning(transition) => {
                self.scene.background.position = trailing;
                transition.advance(input.dt, &mut self.scene, &self.config);
                finished = transition.is_complete();
            }
            SliderPhase::Swiping { .. } => {
                self.scene.background.position = trailing;
                self.scene.background.filter_scale = Vector2::new(
                    sample.kinetic.x * self.config.swipe_scale_intensity,
                    sample.kinetic.y * self.config.swipe_scale_intensity,
                );
                if self.config.texts_rgb_effect {
                    let (red, blue) = swipe_split(sample.kinetic.x, self.config.texts_rgb_intensity);
                    self.scene.text_split.set_horizontal(red, blue);
                }
                if self.config.images_rgb_effect {
                    let (red, blue) = swipe_split(sample.kinetic.x, self.config.images_rgb_intensity);
                    self.scene.image_split.set_horizontal(red, blue);
                }
            }
            SliderPhase::Idle => {
                if let Some(relax) = self.background_relax.as_mut() {
                    self.scene.background.filter_scale = relax.step(input.dt);
                    if !relax.is_running() {
                        self.background_relax = None;
                    }
                }
            }
        }

        if finished {
            self.finish_transition();
        }
    }

    fn set_viewport(&mut self, viewport: Vector2) {
        self.view = StageView::new(self.scene.stage, viewport);
        let metrics = TextMetrics::for_viewport(&self.config, viewport, self.scene.stage);
        if metrics.subtitle_offset != self.metrics.subtitle_offset {
            self.scene.set_subtitle_offset(metrics.subtitle_offset);
            if let Some(layer) = self.scene.layer(LayerKind::Subtitles) {
                for (chase, node) in self.subtitle_tilt.iter_mut().zip(&layer.nodes) {
                    chase.snap(node.position);
                }
            }
        }
        self.metrics = metrics;
    }

    fn update_tilt(&mut self, dt: f32, kinetic: Vector2) {
        if !self.config.texts_tilt_effect {
            return;
        }
        let index = self.current;
        let layers = [
            (LayerKind::Titles, &mut self.title_tilt, TITLE_TILT),
            (LayerKind::Subtitles, &mut self.subtitle_tilt, SUBTITLE_TILT),
        ];
        for (kind, chases, (tilt_x, tilt_y)) in layers {
            let Some(layer) = self.scene.layer_mut(kind) else {
                continue;
            };
            if let (Some(chase), Some(node)) = (chases.get_mut(index), layer.nodes.get(index)) {
                chase.set_target(Vector2::new(
                    node.home.x - kinetic.x * tilt_x,
                    node.home.y - kinetic.y * tilt_y,
                ));
            }
            for (chase, node) in chases.iter_mut().zip(layer.nodes.iter_mut()) {
                node.position = chase.step(dt);
            }
        }
    }

    fn begin_transition(&mut self, from: Option<usize>, to: usize) {
        self.background_relax = None;
        let transition = Transition::new(&self.scene, from, to, &self.config, self.loaded);
        transition.begin(&mut self.scene);
        self.phase = SliderPhase::Transitioning(transition);
    }

    fn finish_transition(&mut self) {
        if let SliderPhase::Transitioning(transition) = std::mem::replace(&mut self.phase, SliderPhase::Idle) {
            transition.finish(&mut self.scene);
            self.current = transition.to();
            self.loaded = true;
            debug!("now showing slide {}", self.current);
        }
    }
}
