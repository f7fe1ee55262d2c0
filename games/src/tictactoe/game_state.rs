use thiserror::Error;

use super::board::Board;
use super::types::{IllegalMoveError, Mark, Outcome, WinningLine};
use super::win_detector::{classify, winning_line};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("the game is already over")]
    GameFinished,
    #[error(transparent)]
    IllegalMove(#[from] IllegalMoveError),
}

/// Turn sequencer for one game: owns the board, alternates the mark to move
/// and caches the outcome. Created once per game and discarded on restart.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    current_mark: Mark,
    status: Outcome,
    last_move: Option<usize>,
}

impl GameState {
    pub fn new(first_mark: Mark) -> Self {
        debug_assert!(first_mark != Mark::Empty, "a player mark must open the game");
        Self {
            board: Board::new(),
            current_mark: first_mark,
            status: Outcome::InProgress,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> Outcome {
        self.status
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            Outcome::Win(mark) => Some(mark),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        winning_line(&self.board)
    }

    /// Plays the current mark at `index`, re-classifies the board and hands
    /// the turn over while the game is still open.
    pub fn place_mark(&mut self, index: usize) -> Result<(), PlayError> {
        if self.status != Outcome::InProgress {
            return Err(PlayError::GameFinished);
        }

        self.board.place(index, self.current_mark)?;
        self.last_move = Some(index);
        self.status = classify(&self.board);

        if self.status == Outcome::InProgress {
            self.current_mark = match self.current_mark {
                Mark::X => Mark::O,
                _ => Mark::X,
            };
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_alternate_between_moves() {
        let mut state = GameState::new(Mark::X);
        assert_eq!(state.current_mark(), Mark::X);

        state.place_mark(0).unwrap();
        assert_eq!(state.current_mark(), Mark::O);

        state.place_mark(4).unwrap();
        assert_eq!(state.current_mark(), Mark::X);
    }

    #[test]
    fn test_win_is_reported_and_turn_stops_advancing() {
        let mut state = GameState::new(Mark::X);
        for index in [0, 3, 1, 4, 2] {
            state.place_mark(index).unwrap();
        }

        assert_eq!(state.status(), Outcome::Win(Mark::X));
        assert_eq!(state.winner(), Some(Mark::X));
        assert_eq!(state.winning_line().unwrap().cells, [0, 1, 2]);
        assert_eq!(state.current_mark(), Mark::X);
    }

    #[test]
    fn test_moves_after_the_game_is_over_are_rejected() {
        let mut state = GameState::new(Mark::X);
        for index in [0, 3, 1, 4, 2] {
            state.place_mark(index).unwrap();
        }

        assert_eq!(state.place_mark(5), Err(PlayError::GameFinished));
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_switching_turn() {
        let mut state = GameState::new(Mark::O);
        state.place_mark(4).unwrap();

        let result = state.place_mark(4);
        assert_eq!(
            result,
            Err(PlayError::IllegalMove(IllegalMoveError {
                index: 4,
                occupant: Mark::O
            }))
        );
        assert_eq!(state.current_mark(), Mark::X);
    }

    #[test]
    fn test_full_game_without_winner_ends_in_a_draw() {
        let mut state = GameState::new(Mark::X);
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            state.place_mark(index).unwrap();
        }
        assert_eq!(state.status(), Outcome::Draw);
        assert_eq!(state.winner(), None);
    }
}
