use super::board::Board;
use super::types::{Mark, Outcome, WinningLine};

/// Three rows, three columns, two diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|line| line.mark)
}

pub fn winning_line(board: &Board) -> Option<WinningLine> {
    for cells in WIN_LINES {
        let mark = board.get(cells[0]);
        if mark != Mark::Empty && board.get(cells[1]) == mark && board.get(cells[2]) == mark {
            return Some(WinningLine { mark, cells });
        }
    }
    None
}

/// A win takes precedence over a full board, so a board cannot classify as
/// both a win and a draw.
pub fn classify(board: &Board) -> Outcome {
    if let Some(mark) = winner(board) {
        return Outcome::Win(mark);
    }
    if board.is_full() {
        return Outcome::Draw;
    }
    Outcome::InProgress
}
