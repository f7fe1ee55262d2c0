mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT, CENTER};
pub use bot_controller::{BotKind, best_move, calculate_move};
pub use game_state::{GameState, PlayError};
pub use types::{IllegalMoveError, Mark, NoMoveAvailableError, Outcome, WinningLine};
pub use win_detector::{WIN_LINES, classify, winner, winning_line};
