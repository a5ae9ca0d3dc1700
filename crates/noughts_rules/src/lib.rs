//! Pure tic-tac-toe rules.
//!
//! A [`BoardState`] holds the nine squares and whose turn it is. Callers
//! place the current mark, ask [`BoardState::evaluate`] for a terminal
//! [`SessionOutcome`], and toggle the turn while play continues. Nothing in
//! this crate performs I/O.
//!
//! ```
//! use noughts_rules::{BoardState, SessionOutcome, WINNING_LINES};
//!
//! let mut board = BoardState::new();
//! for (index, toggle) in [(0, true), (3, true), (1, true), (4, true), (2, false)] {
//!     board.place(index).unwrap();
//!     if toggle {
//!         board.toggle_player();
//!     }
//! }
//! assert_eq!(board.evaluate(), Some(SessionOutcome::Win(WINNING_LINES[0])));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod line;
mod outcome;
pub mod rules;
mod types;

/// Number of cells on the board.
pub const BOARD_CELLS: usize = 9;

pub use board::BoardState;
pub use error::{InvalidMove, MalformedLine};
pub use line::{WINNING_LINES, WinningLine};
pub use outcome::SessionOutcome;
pub use types::{Mark, Square};
