use raylib::prelude::*;

use crate::config::SliderConfig;
use crate::error::Result;
use crate::scene::Scene;
use crate::view::{StageView, TextMetrics};

/// Something that can draw a slider scene into the window.
pub trait Surface {
    fn load(rl: &mut RaylibHandle, thread: &RaylibThread, config: &SliderConfig, metrics: &TextMetrics) -> Result<Self>
    where
        Self: Sized;
    fn relayout(&mut self, metrics: &TextMetrics);
    /// Stage-space bounds of a slide's title, if it has one.
    fn title_bounds(&self, scene: &Scene, index: usize) -> Option<Rectangle>;
    fn render(&mut self, d: &mut RaylibDrawHandle, thread: &RaylibThread, scene: &Scene, view: &StageView);
}
