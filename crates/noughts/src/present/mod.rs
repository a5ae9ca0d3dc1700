//! The presentation collaborator the session and match loops talk to.
//!
//! Everything a human sees or does goes through [`Presenter`]. The core
//! never touches a terminal; it only awaits the presenter's suspension
//! points and tells it what changed.

mod lines;
mod panel;

pub use lines::LinePresenter;
pub use panel::CellPanel;

use derive_more::{Display, Error};
use noughts_rules::{Mark, SessionOutcome};

/// Why a presenter could not continue.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum PresentError {
    /// The input source is exhausted.
    #[display("Input closed")]
    Closed,

    /// The user asked to leave.
    #[display("Quit requested")]
    Quit,

    /// Reading input or drawing output failed.
    #[display("Presentation I/O failed: {}", _0)]
    Io(#[error(not(source))] String),
}

impl PresentError {
    /// True for the two ways a user ends a match on purpose.
    pub fn is_stop(&self) -> bool {
        matches!(self, PresentError::Closed | PresentError::Quit)
    }
}

impl From<std::io::Error> for PresentError {
    fn from(err: std::io::Error) -> Self {
        PresentError::Io(err.to_string())
    }
}

/// Renders the game and supplies user input.
///
/// The `await_*` methods are the only suspension points of a match. They
/// wait without a timeout.
#[async_trait::async_trait]
pub trait Presenter: Send {
    /// Suspends until the one-shot start trigger fires.
    async fn await_start(&mut self) -> Result<(), PresentError>;

    /// Announces a fresh session and whose turn it is.
    fn render_session_start(&mut self, mark: Mark) -> Result<(), PresentError>;

    /// Suspends until the user picks an enabled, empty cell.
    ///
    /// The presenter paints the current mark into the chosen cell and keeps
    /// it disabled until [`clear_board`](Self::clear_board).
    async fn await_cell_selection(&mut self) -> Result<usize, PresentError>;

    /// Announces a turn change.
    fn update_current_player(&mut self, mark: Mark) -> Result<(), PresentError>;

    /// Shows the result: a draw, or `last_mark` as winner with its line highlighted.
    fn present_outcome(
        &mut self,
        outcome: &SessionOutcome,
        last_mark: Mark,
    ) -> Result<(), PresentError>;

    /// Suspends until the user confirms another session.
    async fn await_play_again(&mut self) -> Result<(), PresentError>;

    /// Removes all marks and highlights.
    fn clear_board(&mut self) -> Result<(), PresentError>;
}
