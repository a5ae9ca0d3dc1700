//! The eight winning lines of a 3x3 board.

use crate::error::MalformedLine;
use crate::BOARD_CELLS;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// An ordered triple of cell indices whose equal occupation wins a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[usize; 3]", into = "[usize; 3]")]
pub struct WinningLine([usize; 3]);

/// Rows, then columns, then diagonals. Scanned in this order.
pub const WINNING_LINES: [WinningLine; 8] = [
    // Rows
    WinningLine([0, 1, 2]),
    WinningLine([3, 4, 5]),
    WinningLine([6, 7, 8]),
    // Columns
    WinningLine([0, 3, 6]),
    WinningLine([1, 4, 7]),
    WinningLine([2, 5, 8]),
    // Diagonals
    WinningLine([0, 4, 8]),
    WinningLine([2, 4, 6]),
];

const fn is_well_formed(cells: [usize; 3]) -> bool {
    let [a, b, c] = cells;
    a < BOARD_CELLS && b < BOARD_CELLS && c < BOARD_CELLS && a != b && b != c && a != c
}

const fn table_is_well_formed(lines: &[WinningLine]) -> bool {
    let mut i = 0;
    while i < lines.len() {
        if !is_well_formed(lines[i].0) {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(
    table_is_well_formed(&WINNING_LINES),
    "winning line table references a cell outside the board"
);

impl WinningLine {
    /// Builds a line from three indices.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedLine`] if any index is off the board or repeated.
    #[instrument]
    pub fn try_new(cells: [usize; 3]) -> Result<Self, MalformedLine> {
        if is_well_formed(cells) {
            Ok(Self(cells))
        } else {
            Err(MalformedLine::new(cells))
        }
    }

    /// The three cell indices, in table order.
    pub fn cells(&self) -> [usize; 3] {
        self.0
    }

    /// Whether `index` is part of this line.
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

impl TryFrom<[usize; 3]> for WinningLine {
    type Error = MalformedLine;

    fn try_from(cells: [usize; 3]) -> Result<Self, Self::Error> {
        Self::try_new(cells)
    }
}

impl From<WinningLine> for [usize; 3] {
    fn from(line: WinningLine) -> Self {
        line.0
    }
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{{{}, {}, {}}}", a, b, c)
    }
}
