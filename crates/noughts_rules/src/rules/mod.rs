//! Terminal-condition rules.
//!
//! Pure functions over the nine squares. Kept apart from [`BoardState`]
//! storage so each check can be tested on hand-built grids.
//!
//! [`BoardState`]: crate::BoardState

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::completed_line;
