use raylib::prelude::*;

use crate::constants::VIEWPORT_EDGE;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub trailing: Vector2,
    pub kinetic: Vector2,
    pub moving: bool,
}

#[derive(Debug, Clone)]
pub struct PointerTracker {
    raw: Vector2,
    trailing: Vector2,
    kinetic: Vector2,
    moving: bool,
    momentum: f32,
}

impl PointerTracker {
    pub fn new(momentum: f32, viewport: Vector2) -> Self {
        let centre = Vector2::new(viewport.x / 2.0, viewport.y / 2.0);
        Self {
            raw: centre,
            trailing: centre,
            kinetic: Vector2::new(0.0, 0.0),
            moving: false,
            momentum,
        }
    }

    /// Latest pointer position in viewport pixels, `None` when the pointer
    /// left the window.
    pub fn set_raw(&mut self, position: Option<Vector2>) {
        // Anything at or below zero reads as "outside" in `step`.
        self.raw = position.unwrap_or(Vector2::new(-1.0, -1.0));
    }

    pub fn raw(&self) -> Vector2 {
        self.raw
    }

    pub fn sample(&self) -> PointerSample {
        PointerSample {
            trailing: self.trailing,
            kinetic: self.kinetic,
            moving: self.moving,
        }
    }

    /// Advances the smoothing by one frame.
    pub fn step(&mut self, viewport: Vector2) -> PointerSample {
        if is_outside(self.raw, viewport) {
            let centre = Vector2::new(viewport.x / 2.0, viewport.y / 2.0);
            self.raw = centre;
            self.trailing = centre;
            self.kinetic = Vector2::new(0.0, 0.0);
            self.moving = false;
        } else {
            self.moving = true;
        }

        self.trailing.x += (self.raw.x - self.trailing.x) * self.momentum;
        self.trailing.y += (self.raw.y - self.trailing.y) * self.momentum;

        self.kinetic = Vector2::new(
            (self.raw.x - self.trailing.x).floor(),
            (self.raw.y - self.trailing.y).floor(),
        );

        self.sample()
    }
}

fn is_outside(p: Vector2, viewport: Vector2) -> bool {
    p.x <= 0.0 || p.y <= 0.0 || p.x >= viewport.x - VIEWPORT_EDGE || p.y >= viewport.y - VIEWPORT_EDGE
}
