use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Content of one board cell. `X` always moves against `O`; whose turn it is
/// lives with the caller, not in the cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Mark::Empty => ".",
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Terminal classification of a board position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Mark),
    Draw,
}

/// The completed triple of a decided game, for callers that highlight it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("cell {index} is already occupied by {occupant}")]
pub struct IllegalMoveError {
    pub index: usize,
    pub occupant: Mark,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("no empty cell left to play")]
pub struct NoMoveAvailableError;
