use std::f32::consts::PI;

use rand::Rng;
use raylib::prelude::*;

pub const STAR_COUNT: usize = 100;
pub const STAR_RADIUS: f32 = 10.0;     // Outer radius, the inner one is half of it
pub const STAR_POINTS: usize = 5;
pub const STAR_SPEED: f32 = 0.5;       // Pixels per frame
pub const STAR_COLOR: Color = Color::new(0xff, 0x69, 0xb4, 0xff);

/// Distance from the top tip of a star to its lowest points.
pub fn star_height() -> f32 {
    STAR_RADIUS * (1.0 + (PI / STAR_POINTS as f32).cos())
}

/// Outline of a star centred on `centre`, tip up, counter-clockwise on
/// screen and closed, ready for a triangle fan around the centre.
pub fn star_outline(centre: Vector2) -> Vec<Vector2> {
    let corners = STAR_POINTS * 2;
    (0..=corners)
        .map(|i| {
            let radius = if i % 2 == 0 { STAR_RADIUS } else { STAR_RADIUS / 2.0 };
            let angle = -PI / 2.0 - i as f32 * 2.0 * PI / corners as f32;
            Vector2::new(centre.x + radius * angle.cos(), centre.y + radius * angle.sin())
        })
        .collect()
}

/// Stars drifting down the window, wrapping back above the top.
#[derive(Debug, Clone, Default)]
pub struct StarField {
    stars: Vec<Vector2>,
}

impl StarField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stars(&self) -> &[Vector2] {
        &self.stars
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Adds `STAR_COUNT` stars at random positions inside `size`.
    pub fn spawn(&mut self, size: Vector2) {
        let mut rng = rand::rng();
        self.stars.extend((0..STAR_COUNT).map(|_| {
            Vector2::new(
                rng.random_range(0.0..size.x.max(1.0)),
                rng.random_range(0.0..size.y.max(1.0)),
            )
        }));
    }

    /// One frame of drift.
    pub fn update(&mut self, height: f32) {
        for star in self.stars.iter_mut() {
            star.y += STAR_SPEED;
            if star.y > height {
                star.y = -star_height();
            }
        }
    }

    pub fn clear(&mut self) {
        self.stars.clear();
    }

    pub fn draw(&self, d: &mut impl RaylibDraw) {
        for &star in &self.stars {
            let mut fan = vec![star];
            fan.extend(star_outline(star));
            d.draw_triangle_fan(&fan, STAR_COLOR);
        }
    }
}
