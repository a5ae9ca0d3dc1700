//! One play-through from an empty board to a terminal outcome.

use crate::present::{PresentError, Presenter};
use derive_getters::Getters;
use noughts_rules::{BoardState, InvalidMove, Mark, SessionOutcome};
use tracing::{debug, info, instrument, warn};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Created, board not yet shown.
    Idle,
    /// Waiting for the next cell selection.
    AwaitingMove,
    /// Outcome decided; no further moves are accepted.
    Terminal,
}

/// Result of feeding one cell selection to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Mark placed, play continues with the given mark.
    Continue(Mark),
    /// Mark placed and the session is over.
    Concluded(SessionOutcome),
    /// The board refused the placement. Nothing changed.
    Rejected(InvalidMove),
    /// The session is not awaiting a move. Nothing changed.
    Ignored,
}

/// What a finished session hands back to the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, derive_new::new)]
pub struct Concluded {
    /// How the session ended.
    outcome: SessionOutcome,
    /// Mark that made the final placement.
    last_mark: Mark,
    /// Number of accepted placements.
    moves: usize,
}

/// A single session. Owns its board exclusively.
///
/// Drive it either step by step with [`begin`](Self::begin) and
/// [`apply`](Self::apply), or all at once with [`run`](Self::run).
#[derive(Debug, Clone)]
pub struct Session {
    board: BoardState,
    phase: SessionPhase,
    moves: usize,
    outcome: Option<SessionOutcome>,
}

impl Session {
    /// Creates an idle session whose first move belongs to `starting_mark`.
    #[instrument]
    pub fn new(starting_mark: Mark) -> Self {
        Self {
            board: BoardState::with_starting_mark(starting_mark),
            phase: SessionPhase::Idle,
            moves: 0,
            outcome: None,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// The outcome, once the session is terminal.
    pub fn outcome(&self) -> Option<SessionOutcome> {
        self.outcome
    }

    /// Resets the board and announces the starting mark.
    ///
    /// Only moves an `Idle` session to `AwaitingMove`; later calls are
    /// ignored.
    #[instrument(skip(self, presenter))]
    pub fn begin<P>(&mut self, presenter: &mut P) -> Result<(), PresentError>
    where
        P: Presenter + ?Sized,
    {
        if self.phase != SessionPhase::Idle {
            warn!(phase = ?self.phase, "Session already begun");
            return Ok(());
        }
        self.board.reset();
        self.phase = SessionPhase::AwaitingMove;
        info!(mark = %self.board.current_mark(), "Session started");
        presenter.render_session_start(self.board.current_mark())
    }

    /// Places the current mark at `index` and evaluates the board.
    ///
    /// Placement, evaluation and the turn toggle happen inside this call, so
    /// no other selection can be observed halfway through.
    #[instrument(skip(self), fields(mark = %self.board.current_mark()))]
    pub fn apply(&mut self, index: usize) -> Step {
        if self.phase != SessionPhase::AwaitingMove {
            debug!(phase = ?self.phase, "Move outside of AwaitingMove");
            return Step::Ignored;
        }
        if let Err(err) = self.board.place(index) {
            return Step::Rejected(err);
        }
        self.moves += 1;

        match self.board.evaluate() {
            Some(outcome) => {
                self.phase = SessionPhase::Terminal;
                self.outcome = Some(outcome);
                info!(%outcome, moves = self.moves, "Session concluded");
                Step::Concluded(outcome)
            }
            None => {
                self.board.toggle_player();
                Step::Continue(self.board.current_mark())
            }
        }
    }

    /// Plays the session to its end.
    ///
    /// Consumes the session, so it resolves at most once. Waits for each
    /// selection without a timeout. Presenter errors abort the session.
    #[instrument(skip_all)]
    pub async fn run<P>(mut self, presenter: &mut P) -> Result<Concluded, PresentError>
    where
        P: Presenter + ?Sized,
    {
        self.begin(presenter)?;

        loop {
            let index = presenter.await_cell_selection().await?;
            match self.apply(index) {
                Step::Continue(mark) => presenter.update_current_player(mark)?,
                Step::Concluded(outcome) => {
                    return Ok(Concluded::new(
                        outcome,
                        self.board.current_mark(),
                        self.moves,
                    ));
                }
                Step::Rejected(err) => {
                    warn!(
                        index = err.index(),
                        error = %err,
                        "Presenter offered an unavailable cell"
                    );
                }
                Step::Ignored => {
                    // Only reachable if the phase changed outside `apply`.
                    warn!(phase = ?self.phase, "Selection ignored");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_rules::{Square, WINNING_LINES};

    fn started(mark: Mark) -> Session {
        let mut session = Session::new(mark);
        session.board.reset();
        session.phase = SessionPhase::AwaitingMove;
        session
    }

    #[test]
    fn test_idle_session_ignores_moves() {
        let mut session = Session::new(Mark::X);
        assert_eq!(session.apply(0), Step::Ignored);
        assert_eq!(session.board().occupied_count(), 0);
    }

    #[test]
    fn test_apply_toggles_while_ongoing() {
        let mut session = started(Mark::X);
        assert_eq!(session.apply(4), Step::Continue(Mark::O));
        assert_eq!(session.apply(0), Step::Continue(Mark::X));
        assert_eq!(session.board().square(0), Some(Square::Occupied(Mark::O)));
    }

    #[test]
    fn test_apply_rejects_occupied_without_toggle() {
        let mut session = started(Mark::X);
        session.apply(4);
        let before = session.board().clone();
        assert_eq!(session.apply(4), Step::Rejected(InvalidMove::Occupied(4)));
        assert_eq!(session.board(), &before);
        assert_eq!(session.phase(), SessionPhase::AwaitingMove);
    }

    #[test]
    fn test_terminal_session_ignores_moves() {
        let mut session = started(Mark::X);
        for index in [0, 1, 4, 2] {
            session.apply(index);
        }
        assert_eq!(
            session.apply(8),
            Step::Concluded(SessionOutcome::Win(WINNING_LINES[6]))
        );
        assert_eq!(session.phase(), SessionPhase::Terminal);
        assert_eq!(session.apply(5), Step::Ignored);
        assert!(session.board().is_vacant(5));
        assert_eq!(session.outcome(), Some(SessionOutcome::Win(WINNING_LINES[6])));
    }
}
