use log::debug;
use raylib::prelude::*;

use crate::slider::Slider;
use crate::state::Direction;

const BUTTON_WIDTH: f32 = 120.0;
const BUTTON_HEIGHT: f32 = 44.0;
const BUTTON_GAP: f32 = 16.0;
const BOTTOM_MARGIN: f32 = 32.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavButton {
    pub direction: Direction,
    pub label: &'static str,
    pub bounds: Rectangle,
}

/// The two nav buttons and which one was clicked last.
#[derive(Debug, Clone, PartialEq)]
pub struct NavBar {
    buttons: [NavButton; 2],
    active: Option<Direction>,
}

impl NavBar {
    pub fn new(viewport: Vector2) -> Self {
        Self {
            buttons: layout(viewport),
            active: None,
        }
    }

    pub fn relayout(&mut self, viewport: Vector2) {
        self.buttons = layout(viewport);
    }

    pub fn buttons(&self) -> &[NavButton] {
        &self.buttons
    }

    pub fn active(&self) -> Option<Direction> {
        self.active
    }

    pub fn hit(&self, point: Vector2) -> Option<&NavButton> {
        self.buttons.iter().find(|button| contains(button.bounds, point))
    }

    /// Handles a click at `point`. Returns true when the click landed on a
    /// button, whether or not the slider accepted the request; such clicks
    /// must not start a swipe.
    pub fn click(&mut self, point: Vector2, slider: &mut Slider) -> bool {
        let Some(direction) = self.hit(point).map(|button| button.direction) else {
            return false;
        };
        self.press(direction, slider);
        true
    }

    /// Requests `direction`, marking it active if the slider was free.
    pub fn press(&mut self, direction: Direction, slider: &mut Slider) -> bool {
        if slider.is_transitioning() {
            return false;
        }
        self.active = Some(direction);
        debug!("nav {:?}", direction);
        slider.navigate(direction)
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, hover: Option<Vector2>) {
        for button in &self.buttons {
            let active = self.active == Some(button.direction);
            let hovered = hover.is_some_and(|p| contains(button.bounds, p));
            let fill = if active {
                Color::new(255, 255, 255, 200)
            } else if hovered {
                Color::new(255, 255, 255, 90)
            } else {
                Color::new(255, 255, 255, 40)
            };
            let text = if active { Color::BLACK } else { Color::WHITE };
            d.draw_rectangle_rec(button.bounds, fill);
            d.draw_rectangle_lines_ex(button.bounds, 1.0, Color::WHITE);
            let font_size = 20;
            let width = d.measure_text(button.label, font_size) as f32;
            d.draw_text(
                button.label,
                (button.bounds.x + (button.bounds.width - width) / 2.0) as i32,
                (button.bounds.y + (button.bounds.height - font_size as f32) / 2.0) as i32,
                font_size,
                text,
            );
        }
    }
}

fn layout(viewport: Vector2) -> [NavButton; 2] {
    let total = BUTTON_WIDTH * 2.0 + BUTTON_GAP;
    let left = (viewport.x - total) / 2.0;
    let top = viewport.y - BOTTOM_MARGIN - BUTTON_HEIGHT;
    [
        NavButton {
            direction: Direction::Prev,
            label: "prev",
            bounds: Rectangle::new(left, top, BUTTON_WIDTH, BUTTON_HEIGHT),
        },
        NavButton {
            direction: Direction::Next,
            label: "next",
            bounds: Rectangle::new(left + BUTTON_WIDTH + BUTTON_GAP, top, BUTTON_WIDTH, BUTTON_HEIGHT),
        },
    ]
}

fn contains(r: Rectangle, p: Vector2) -> bool {
    p.x >= r.x && p.x <= r.x + r.width && p.y >= r.y && p.y <= r.y + r.height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SliderConfig;
    use crate::slider::FrameInput;

    const VIEWPORT: Vector2 = Vector2 { x: 1280.0, y: 720.0 };

    fn slider() -> Slider {
        let mut config = SliderConfig::default();
        config.slide_images = vec!["a.png".into(), "b.png".into(), "c.png".into()];
        let mut slider = Slider::new(config, VIEWPORT);
        slider.start();
        while slider.is_transitioning() {
            slider.update(FrameInput { dt: 0.1, pointer: None, viewport: VIEWPORT });
        }
        slider
    }

    fn centre(r: Rectangle) -> Vector2 {
        Vector2::new(r.x + r.width / 2.0, r.y + r.height / 2.0)
    }

    #[test]
    fn buttons_sit_bottom_centre() {
        let nav = NavBar::new(VIEWPORT);
        let [prev, next] = nav.buttons() else { panic!("two buttons") };
        assert_eq!(prev.direction, Direction::Prev);
        assert_eq!(next.direction, Direction::Next);
        assert!(prev.bounds.x < next.bounds.x);
        assert_eq!(prev.bounds.y + prev.bounds.height, VIEWPORT.y - BOTTOM_MARGIN);
        assert_eq!(prev.bounds.x + next.bounds.x + BUTTON_WIDTH, VIEWPORT.x);
    }

    #[test]
    fn click_navigates_and_marks_active() {
        let mut slider = slider();
        let mut nav = NavBar::new(VIEWPORT);
        let prev = centre(nav.buttons()[0].bounds);
        assert!(nav.click(prev, &mut slider));
        assert_eq!(nav.active(), Some(Direction::Prev));
        assert_eq!(slider.pending_index(), Some(2));
    }

    #[test]
    fn clicks_while_transitioning_keep_active_marker() {
        let mut slider = slider();
        let mut nav = NavBar::new(VIEWPORT);
        let prev = centre(nav.buttons()[0].bounds);
        let next = centre(nav.buttons()[1].bounds);
        nav.click(next, &mut slider);
        // still lands on a button, but the request is refused
        assert!(nav.click(prev, &mut slider));
        assert_eq!(nav.active(), Some(Direction::Next));
        assert_eq!(slider.pending_index(), Some(1));
    }

    #[test]
    fn clicks_elsewhere_are_not_consumed() {
        let mut slider = slider();
        let mut nav = NavBar::new(VIEWPORT);
        assert!(!nav.click(Vector2::new(10.0, 10.0), &mut slider));
        assert_eq!(nav.active(), None);
        assert!(!slider.is_transitioning());
    }
}
