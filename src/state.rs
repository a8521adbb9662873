use raylib::prelude::*;

use crate::transition::Transition;

pub enum SliderPhase {
    Idle,                          // Showing the current slide, ready for input
    Swiping { origin: Vector2 },   // Pointer held down, origin in stage coordinates
    Transitioning(Transition),     // A slide transition timeline is running
}

impl SliderPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, SliderPhase::Idle)
    }

    pub fn is_swiping(&self) -> bool {
        matches!(self, SliderPhase::Swiping { .. })
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self, SliderPhase::Transitioning(_))
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    /// Index reached from `current` in a sequence of `count` slides,
    /// wrapping at both ends. `None` when there are no slides.
    pub fn step(self, current: usize, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        let current = current.min(count - 1);
        Some(match self {
            Direction::Next => (current + 1) % count,
            Direction::Prev => (current + count - 1) % count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_wrap_at_both_ends() {
        assert_eq!(Direction::Next.step(0, 3), Some(1));
        assert_eq!(Direction::Next.step(2, 3), Some(0));
        assert_eq!(Direction::Prev.step(0, 3), Some(2));
        assert_eq!(Direction::Prev.step(2, 3), Some(1));
        assert_eq!(Direction::Next.step(0, 1), Some(0));
        assert_eq!(Direction::Prev.step(0, 0), None);
    }
}
