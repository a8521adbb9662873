use raylib::prelude::*;

use crate::state::Direction;

/// Direction requested by a drag from `origin` to `position`, if the
/// horizontal distance strictly exceeds `threshold`. Dragging right asks for
/// the next slide, dragging left for the previous one.
pub fn swipe_direction(origin: Vector2, position: Vector2, threshold: f32) -> Option<Direction> {
    let dx = position.x - origin.x;
    if dx > threshold {
        Some(Direction::Next)
    } else if dx < -threshold {
        Some(Direction::Prev)
    } else {
        None
    }
}

/// Swipe-time RGB split: red and blue pushed apart along x proportionally
/// to the horizontal kinetic delta.
pub fn swipe_split(kinetic_x: f32, intensity: f32) -> (f32, f32) {
    (kinetic_x * intensity, -kinetic_x * intensity)
}
