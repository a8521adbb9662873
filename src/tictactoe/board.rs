use std::fmt;

pub const FIELD_COUNT: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    X,
    O,
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::X => write!(f, "X"),
            Sign::O => write!(f, "O"),
        }
    }
}

/// Nine fields, row by row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    fields: [Option<Sign>; FIELD_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, sign: Sign) {
        if let Some(field) = self.fields.get_mut(index) {
            *field = Some(sign);
        }
    }

    pub fn get(&self, index: usize) -> Option<Sign> {
        self.fields.get(index).copied().flatten()
    }

    pub fn is_empty(&self, index: usize) -> bool {
        index < FIELD_COUNT && self.fields[index].is_none()
    }

    pub fn reset(&mut self) {
        self.fields = [None; FIELD_COUNT];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_fields_are_ignored() {
        let mut board = Board::new();
        board.set(9, Sign::X);
        board.set(100, Sign::O);
        assert_eq!(board, Board::new());
        assert_eq!(board.get(9), None);
        assert!(!board.is_empty(9));
    }

    #[test]
    fn reset_clears_every_field() {
        let mut board = Board::new();
        board.set(0, Sign::X);
        board.set(8, Sign::O);
        assert_eq!(board.get(8), Some(Sign::O));
        board.reset();
        assert!((0..FIELD_COUNT).all(|i| board.is_empty(i)));
    }
}
