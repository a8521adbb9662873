use log::debug;

use crate::tictactoe::board::{Board, FIELD_COUNT, Sign};

const WIN_CONDITIONS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

const LAST_ROUND: u8 = FIELD_COUNT as u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Next(Sign),
    Won(Sign),
    Draw,
}

impl Outcome {
    pub fn message(&self) -> String {
        match self {
            Outcome::Next(sign) => format!("Player {sign}'s turn"),
            Outcome::Won(sign) => format!("Player {sign} has won!"),
            Outcome::Draw => "No one has won!".to_string(),
        }
    }

    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::Next(_))
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    round: u8,
    outcome: Outcome,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            round: 1,
            outcome: Outcome::Next(Sign::X),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn round(&self) -> u8 {
        self.round
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    pub fn message(&self) -> String {
        self.outcome.message()
    }

    /// Odd rounds play X, even rounds O.
    pub fn current_sign(&self) -> Sign {
        if self.round % 2 == 1 { Sign::X } else { Sign::O }
    }

    /// Places the current sign on `index`. Returns `None` when the move is
    /// ignored: game over, occupied or out-of-range field.
    pub fn play(&mut self, index: usize) -> Option<Outcome> {
        if self.is_over() || !self.board.is_empty(index) {
            return None;
        }
        let sign = self.current_sign();
        self.board.set(index, sign);

        self.outcome = if self.has_won(index, sign) {
            Outcome::Won(sign)
        } else if self.round == LAST_ROUND {
            Outcome::Draw
        } else {
            self.round += 1;
            Outcome::Next(self.current_sign())
        };
        debug!("round {}: {} at {} -> {:?}", self.round, sign, index, self.outcome);
        Some(self.outcome)
    }

    /// Only lines through the field just played can have been completed.
    fn has_won(&self, index: usize, sign: Sign) -> bool {
        WIN_CONDITIONS
            .iter()
            .filter(|line| line.contains(&index))
            .any(|line| line.iter().all(|&i| self.board.get(i) == Some(sign)))
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(game: &mut Game, moves: &[usize]) -> Option<Outcome> {
        moves.iter().map(|&m| game.play(m)).last().flatten()
    }

    #[test]
    fn players_alternate() {
        let mut game = Game::new();
        assert_eq!(game.message(), "Player X's turn");
        assert_eq!(game.play(4), Some(Outcome::Next(Sign::O)));
        assert_eq!(game.message(), "Player O's turn");
        assert_eq!(game.play(0), Some(Outcome::Next(Sign::X)));
        assert_eq!(game.board().get(4), Some(Sign::X));
        assert_eq!(game.board().get(0), Some(Sign::O));
        assert_eq!(game.round(), 3);
    }

    #[test]
    fn occupied_and_out_of_range_fields_are_ignored() {
        let mut game = Game::new();
        game.play(4);
        assert_eq!(game.play(4), None);
        assert_eq!(game.play(9), None);
        assert_eq!(game.current_sign(), Sign::O);
    }

    #[test]
    fn completing_a_line_wins() {
        let mut game = Game::new();
        // X: 0 1 2, O: 3 4
        assert_eq!(play_all(&mut game, &[0, 3, 1, 4, 2]), Some(Outcome::Won(Sign::X)));
        assert_eq!(game.message(), "Player X has won!");
        assert!(game.is_over());
        assert_eq!(game.play(8), None);
    }

    #[test]
    fn o_can_win_on_a_diagonal() {
        let mut game = Game::new();
        assert_eq!(play_all(&mut game, &[0, 2, 1, 4, 8, 6]), Some(Outcome::Won(Sign::O)));
        assert_eq!(game.message(), "Player O has won!");
    }

    #[test]
    fn full_board_without_a_line_is_a_draw() {
        let mut game = Game::new();
        // X O X / X O O / O X X
        assert_eq!(play_all(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]), Some(Outcome::Draw));
        assert_eq!(game.message(), "No one has won!");
    }

    #[test]
    fn win_on_the_last_move_beats_draw() {
        let mut game = Game::new();
        // X O X / O X O / O X X, X completes 0-4-8 on round 9
        assert_eq!(play_all(&mut game, &[0, 1, 2, 3, 4, 5, 7, 6, 8]), Some(Outcome::Won(Sign::X)));
    }

    #[test]
    fn reset_starts_over() {
        let mut game = Game::new();
        play_all(&mut game, &[0, 3, 1, 4, 2]);
        game.reset();
        assert!(!game.is_over());
        assert_eq!(game.round(), 1);
        assert_eq!(game.message(), "Player X's turn");
        assert_eq!(game.board(), &Board::new());
    }
}
