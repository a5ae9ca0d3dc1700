//! The play-again loop around sessions.

use crate::present::{PresentError, Presenter};
use crate::session::{Concluded, Session};
use derive_getters::Getters;
use noughts_rules::{Mark, SessionOutcome};
use std::convert::Infallible;
use tracing::{info, instrument};

/// In-memory tally of the sessions a driver has finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct MatchSummary {
    /// Sessions played to a terminal outcome.
    sessions: usize,
    /// Sessions won by X.
    x_wins: usize,
    /// Sessions won by O.
    o_wins: usize,
    /// Sessions drawn.
    draws: usize,
}

impl MatchSummary {
    fn record(&mut self, concluded: &Concluded) {
        self.sessions += 1;
        match (concluded.outcome(), concluded.last_mark()) {
            (SessionOutcome::Draw, _) => self.draws += 1,
            (SessionOutcome::Win(_), Mark::X) => self.x_wins += 1,
            (SessionOutcome::Win(_), Mark::O) => self.o_wins += 1,
        }
    }
}

/// Runs sessions back to back until the presenter stops it.
///
/// Construct once, then [`run`](Self::run). There is no exit condition of
/// its own: the match ends when the user quits, input runs out, or the host
/// drops the future.
pub struct MatchDriver<P> {
    presenter: P,
    starting_mark: Mark,
}

impl<P: Presenter> MatchDriver<P> {
    /// Creates a driver whose sessions open with `starting_mark`.
    pub fn new(presenter: P, starting_mark: Mark) -> Self {
        Self {
            presenter,
            starting_mark,
        }
    }

    /// Returns the presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Releases the presenter.
    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Waits for the start trigger, then plays sessions forever.
    ///
    /// # Errors
    ///
    /// [`PresentError::Closed`] and [`PresentError::Quit`] end the match
    /// normally and yield the summary. Other presenter errors propagate.
    #[instrument(skip(self), fields(starting_mark = %self.starting_mark))]
    pub async fn run(&mut self) -> Result<MatchSummary, PresentError> {
        let mut summary = MatchSummary::default();
        match self.play(&mut summary).await {
            Ok(never) => match never {},
            Err(err) if err.is_stop() => {
                info!(reason = %err, sessions = summary.sessions, "Match stopped");
                Ok(summary)
            }
            Err(err) => Err(err),
        }
    }

    async fn play(&mut self, summary: &mut MatchSummary) -> Result<Infallible, PresentError> {
        self.presenter.await_start().await?;
        info!("Match started");

        loop {
            let concluded = Session::new(self.starting_mark)
                .run(&mut self.presenter)
                .await?;
            summary.record(&concluded);
            info!(
                outcome = %concluded.outcome(),
                last_mark = %concluded.last_mark(),
                sessions = summary.sessions,
                "Presenting outcome"
            );

            self.presenter
                .present_outcome(concluded.outcome(), *concluded.last_mark())?;
            self.presenter.await_play_again().await?;
            self.presenter.clear_board()?;
        }
    }
}
