pub mod board;
pub mod game;
pub mod starfield;

pub use board::{Board, Sign};
pub use game::{Game, Outcome};
pub use starfield::StarField;
