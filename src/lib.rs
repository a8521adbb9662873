//! Kinetic image/text slider rendered with raylib, plus tic-tac-toe.

pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod nav;
pub mod pointer;
pub mod render;
pub mod scene;
pub mod shaders;
pub mod slide;
pub mod slider;
pub mod state;
pub mod swipe;
pub mod texture_loader;
pub mod tictactoe;
pub mod transition;
pub mod tween;
pub mod view;

pub use config::SliderConfig;
pub use error::{Result, SliderError};
pub use slider::{FrameInput, Slider};
