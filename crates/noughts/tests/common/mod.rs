//! Scripted presenter shared by the integration tests.

#![allow(dead_code)]

use noughts::{Mark, PresentError, Presenter, SessionOutcome};
use std::collections::VecDeque;

/// One presenter call, in the order the core made it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Start,
    SessionStart(Mark),
    Select(usize),
    Player(Mark),
    Outcome(SessionOutcome, Mark),
    PlayAgain,
    Clear,
}

/// Presenter fed from a fixed list of cell selections.
///
/// Selections are handed over unfiltered, so the core's own rejection
/// path is exercised. Running out of selections yields `Closed`; play-again
/// confirmations are granted `play_again` times and then answered with
/// `Quit`.
pub struct ScriptedPresenter {
    cells: VecDeque<usize>,
    play_again: usize,
    calls: Vec<Call>,
    fail_on_outcome: Option<PresentError>,
}

impl ScriptedPresenter {
    pub fn new(cells: impl IntoIterator<Item = usize>, play_again: usize) -> Self {
        Self {
            cells: cells.into_iter().collect(),
            play_again,
            calls: Vec::new(),
            fail_on_outcome: None,
        }
    }

    pub fn failing_on_outcome(mut self, err: PresentError) -> Self {
        self.fail_on_outcome = Some(err);
        self
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn remaining(&self) -> usize {
        self.cells.len()
    }
}

#[async_trait::async_trait]
impl Presenter for ScriptedPresenter {
    async fn await_start(&mut self) -> Result<(), PresentError> {
        self.calls.push(Call::Start);
        Ok(())
    }

    fn render_session_start(&mut self, mark: Mark) -> Result<(), PresentError> {
        self.calls.push(Call::SessionStart(mark));
        Ok(())
    }

    async fn await_cell_selection(&mut self) -> Result<usize, PresentError> {
        let index = self.cells.pop_front().ok_or(PresentError::Closed)?;
        self.calls.push(Call::Select(index));
        Ok(index)
    }

    fn update_current_player(&mut self, mark: Mark) -> Result<(), PresentError> {
        self.calls.push(Call::Player(mark));
        Ok(())
    }

    fn present_outcome(
        &mut self,
        outcome: &SessionOutcome,
        last_mark: Mark,
    ) -> Result<(), PresentError> {
        self.calls.push(Call::Outcome(*outcome, last_mark));
        match self.fail_on_outcome.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn await_play_again(&mut self) -> Result<(), PresentError> {
        self.calls.push(Call::PlayAgain);
        if self.play_again == 0 {
            return Err(PresentError::Quit);
        }
        self.play_again -= 1;
        Ok(())
    }

    fn clear_board(&mut self) -> Result<(), PresentError> {
        self.calls.push(Call::Clear);
        Ok(())
    }
}

/// Diagonal win for X: X@0, O@1, X@4, O@2, X@8.
pub const DIAGONAL_WIN: [usize; 5] = [0, 1, 4, 2, 8];

/// Full-board draw: X@0, O@1, X@2, O@3, X@4, O@6, X@5, O@8, X@7.
pub const FULL_DRAW: [usize; 9] = [0, 1, 2, 3, 4, 6, 5, 8, 7];
