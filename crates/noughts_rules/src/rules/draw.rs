//! Draw detection.

use crate::types::Square;
use crate::BOARD_CELLS;
use tracing::instrument;

/// Checks if every square is occupied.
///
/// A full board with no completed line is a draw.
#[instrument(skip(squares))]
pub fn is_full(squares: &[Square; BOARD_CELLS]) -> bool {
    squares.iter().all(|s| *s != Square::Empty)
}
