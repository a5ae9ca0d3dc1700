//! Board state for a single session.

use crate::error::InvalidMove;
use crate::outcome::SessionOutcome;
use crate::rules::{completed_line, is_full};
use crate::types::{Mark, Square};
use crate::BOARD_CELLS;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The nine squares plus whose turn it is.
///
/// Mutated only through [`place`](Self::place) and
/// [`toggle_player`](Self::toggle_player); cleared through
/// [`reset`](Self::reset). A placement never overwrites an occupied square.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    /// Squares in row-major order (0-8).
    squares: [Square; BOARD_CELLS],
    /// Mark placed by the next call to `place`.
    current_mark: Mark,
    /// Mark restored by `reset`.
    starting_mark: Mark,
}

impl BoardState {
    /// Creates an empty board where X moves first.
    #[instrument]
    pub fn new() -> Self {
        Self::with_starting_mark(Mark::X)
    }

    /// Creates an empty board where `starting_mark` moves first.
    #[instrument]
    pub fn with_starting_mark(starting_mark: Mark) -> Self {
        Self {
            squares: [Square::Empty; BOARD_CELLS],
            current_mark: starting_mark,
            starting_mark,
        }
    }

    /// Empties every square and hands the turn back to the starting mark.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; BOARD_CELLS];
        self.current_mark = self.starting_mark;
        debug!(starting_mark = %self.starting_mark, "Board reset");
    }

    /// Places the current mark at `index`.
    ///
    /// Does not advance the turn; see [`toggle_player`](Self::toggle_player).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove::OutOfRange`] for an index past 8 and
    /// [`InvalidMove::Occupied`] for a square that already holds a mark.
    /// The board is unchanged on error.
    #[instrument(skip(self), fields(mark = %self.current_mark))]
    pub fn place(&mut self, index: usize) -> Result<(), InvalidMove> {
        match self.squares.get(index) {
            None => Err(InvalidMove::OutOfRange(index)),
            Some(Square::Occupied(_)) => Err(InvalidMove::Occupied(index)),
            Some(Square::Empty) => {
                self.squares[index] = Square::Occupied(self.current_mark);
                Ok(())
            }
        }
    }

    /// Hands the turn to the other mark.
    #[instrument(skip(self))]
    pub fn toggle_player(&mut self) {
        self.current_mark = self.current_mark.opponent();
    }

    /// Checks for a terminal condition.
    ///
    /// Returns `Some(Win(line))` for the first completed line in
    /// [`WINNING_LINES`](crate::WINNING_LINES) order, `Some(Draw)` for a
    /// full board with no completed line, and `None` while play continues.
    #[instrument(skip(self))]
    pub fn evaluate(&self) -> Option<SessionOutcome> {
        if let Some((line, mark)) = completed_line(&self.squares) {
            debug!(%line, %mark, "Line completed");
            return Some(SessionOutcome::Win(line));
        }
        if is_full(&self.squares) {
            return Some(SessionOutcome::Draw);
        }
        None
    }

    /// Returns the mark whose turn it is.
    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    /// Returns the mark that moves first after a reset.
    pub fn starting_mark(&self) -> Mark {
        self.starting_mark
    }

    /// Gets the square at `index`, or `None` past the edge.
    pub fn square(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; BOARD_CELLS] {
        &self.squares
    }

    /// Checks if `index` is on the board and empty.
    pub fn is_vacant(&self, index: usize) -> bool {
        matches!(self.square(index), Some(Square::Empty))
    }

    /// Indices of the empty squares, ascending.
    pub fn vacant(&self) -> impl Iterator<Item = usize> + '_ {
        (0..BOARD_CELLS).filter(|&index| self.is_vacant(index))
    }

    /// Number of squares holding a mark.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based number so a reader can type it.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.squares[index] {
                    Square::Empty => result.push_str(&(index + 1).to_string()),
                    Square::Occupied(mark) => result.push_str(&mark.to_string()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
