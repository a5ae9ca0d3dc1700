//! Rule violations.

use derive_more::{Display, Error};

/// A placement that the board refuses.
///
/// The input layer only offers empty, in-range cells, so this is a caller
/// bug when it surfaces. The board is left untouched either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidMove {
    /// Index is not one of the nine cells.
    #[display("Cell {} is off the board (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// Cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(#[error(not(source))] usize),
}

impl InvalidMove {
    /// The index that was rejected.
    pub fn index(&self) -> usize {
        match self {
            InvalidMove::OutOfRange(index) | InvalidMove::Occupied(index) => *index,
        }
    }
}

/// A winning-line triple that does not describe three distinct cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, derive_new::new)]
#[display("Malformed winning line {:?}: indices must be distinct and below 9", cells)]
pub struct MalformedLine {
    #[error(not(source))]
    cells: [usize; 3],
}

impl MalformedLine {
    /// The offending triple.
    pub fn cells(&self) -> [usize; 3] {
        self.cells
    }
}
