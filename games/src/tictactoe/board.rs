use super::types::{IllegalMoveError, Mark};

pub const CELL_COUNT: usize = 9;
pub const CENTER: usize = 4;

/// The 3x3 grid as a flat row-major array, cells indexed 0..=8.
///
/// The board is a passive value type: it enforces that a placement lands on an
/// empty cell, but turn alternation is the caller's job. Indices outside
/// 0..=8 are a caller bug and panic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn get(&self, index: usize) -> Mark {
        self.cells[index]
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn is_legal(&self, index: usize) -> bool {
        index < CELL_COUNT && self.cells[index] == Mark::Empty
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    /// Places `mark` on an empty cell. On an occupied cell the board is left
    /// untouched and the occupant is reported back.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), IllegalMoveError> {
        debug_assert!(mark != Mark::Empty, "cannot place an empty mark");

        let occupant = self.cells[index];
        if occupant != Mark::Empty {
            return Err(IllegalMoveError { index, occupant });
        }

        self.cells[index] = mark;
        Ok(())
    }

    /// Empty-cell indices in ascending order, recomputed fresh on every call.
    pub fn legal_moves(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(index, _)| index)
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        debug_assert!(self.cells[index] == Mark::Empty && mark != Mark::Empty);
        self.cells[index] = mark;
    }

    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Mark::Empty;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
