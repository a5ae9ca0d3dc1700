//! Win detection.

use crate::line::{WINNING_LINES, WinningLine};
use crate::types::{Mark, Square};
use crate::BOARD_CELLS;
use tracing::instrument;

/// Finds the first completed line in table order.
///
/// Returns the line and the mark holding it. A legal sequential game can
/// complete at most one line per placement, so the order only matters for
/// hand-built grids; it is fixed so results are reproducible.
#[instrument(skip(squares))]
pub fn completed_line(squares: &[Square; BOARD_CELLS]) -> Option<(WinningLine, Mark)> {
    WINNING_LINES.into_iter().find_map(|line| {
        let [a, b, c] = line.cells();
        match squares[a] {
            Square::Occupied(mark) if squares[b] == squares[a] && squares[c] == squares[a] => {
                Some((line, mark))
            }
            _ => None,
        }
    })
}
