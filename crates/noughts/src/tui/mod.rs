//! Full-screen terminal presenter.

mod input;
mod ui;

use crate::config::PresentationConfig;
use crate::present::{CellPanel, PresentError, Presenter};
use crossterm::{
    cursor::Show,
    event::{KeyCode, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts_rules::{Mark, SessionOutcome};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io::{self, Stdout};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

const START_HINT: &str = "Enter: start   q: quit";
const MOVE_HINT: &str = "Arrows + Enter or 1-9: place mark   q: quit";
const AGAIN_HINT: &str = "Enter or r: play again   q: quit";

/// Raw mode and the alternate screen, left again on drop.
struct ScreenGuard;

impl ScreenGuard {
    fn enter() -> Result<Self, PresentError> {
        enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        Ok(Self)
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to leave raw mode");
        }
        if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
    }
}

/// Presenter that draws with ratatui and reads keys through crossterm.
///
/// Raw mode and the alternate screen are entered by [`new`](Self::new) and
/// restored on drop. Keys pressed while a pause is running are discarded, so
/// only presses made after a prompt appears count.
pub struct TerminalPresenter<B: Backend = CrosstermBackend<Stdout>> {
    terminal: Terminal<B>,
    keys: mpsc::UnboundedReceiver<KeyEvent>,
    panel: CellPanel,
    cursor: Option<usize>,
    hint: &'static str,
    presentation: PresentationConfig,
    _screen: Option<ScreenGuard>,
}

impl TerminalPresenter {
    /// Takes over the terminal.
    #[instrument(skip(presentation))]
    pub fn new(presentation: PresentationConfig) -> Result<Self, PresentError> {
        info!("Entering terminal UI");
        let screen = ScreenGuard::enter()?;
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

        let mut presenter = Self::with_parts(terminal, input::spawn_key_reader(), presentation);
        presenter._screen = Some(screen);
        Ok(presenter)
    }
}

impl<B: Backend> TerminalPresenter<B> {
    /// Builds a presenter around an existing terminal and key source.
    ///
    /// The terminal mode is left alone.
    pub fn with_parts(
        terminal: Terminal<B>,
        keys: mpsc::UnboundedReceiver<KeyEvent>,
        presentation: PresentationConfig,
    ) -> Self {
        Self {
            terminal,
            keys,
            panel: CellPanel::new(),
            cursor: None,
            hint: START_HINT,
            presentation,
            _screen: None,
        }
    }

    /// Presentation-side board state.
    pub fn panel(&self) -> &CellPanel {
        &self.panel
    }

    fn redraw(&mut self) -> Result<(), PresentError> {
        let panel = &self.panel;
        let cursor = self.cursor;
        let hint = self.hint;
        self.terminal
            .draw(|frame| ui::draw(frame, panel, cursor, hint))
            .map_err(|e| PresentError::Io(e.to_string()))?;
        Ok(())
    }

    async fn next_key(&mut self) -> Result<KeyEvent, PresentError> {
        let key = self.keys.recv().await.ok_or(PresentError::Closed)?;
        if input::is_quit(&key) {
            info!("User quit");
            return Err(PresentError::Quit);
        }
        Ok(key)
    }

    /// Drops keys pressed before the current prompt was shown.
    fn discard_pending_keys(&mut self) {
        let mut discarded = 0usize;
        while self.keys.try_recv().is_ok() {
            discarded += 1;
        }
        if discarded > 0 {
            debug!(discarded, "Discarded early key presses");
        }
    }
}

#[async_trait::async_trait]
impl<B: Backend + Send> Presenter for TerminalPresenter<B> {
    #[instrument(skip(self))]
    async fn await_start(&mut self) -> Result<(), PresentError> {
        self.panel.set_status("Press Enter to start");
        self.hint = START_HINT;
        self.redraw()?;

        loop {
            let key = self.next_key().await?;
            if input::is_confirm(&key) || key.code == KeyCode::Char('s') {
                break;
            }
        }

        self.panel.set_status("Get ready...");
        self.redraw()?;
        tokio::time::sleep(self.presentation.start_delay()).await;
        self.discard_pending_keys();
        Ok(())
    }

    fn render_session_start(&mut self, mark: Mark) -> Result<(), PresentError> {
        self.panel.start(mark);
        self.cursor = Some(4);
        self.hint = MOVE_HINT;
        self.redraw()
    }

    #[instrument(skip(self), fields(mark = %self.panel.current()))]
    async fn await_cell_selection(&mut self) -> Result<usize, PresentError> {
        loop {
            self.redraw()?;
            let key = self.next_key().await?;
            let cursor = self.cursor.unwrap_or(4);

            let target = if let Some(index) = input::digit_cell(key.code) {
                self.cursor = Some(index);
                Some(index)
            } else if input::is_confirm(&key) {
                Some(cursor)
            } else {
                self.cursor = Some(input::move_cursor(cursor, key.code));
                None
            };

            if let Some(index) = target {
                if self.panel.select(index) {
                    debug!(index, "Cell selected");
                    self.redraw()?;
                    return Ok(index);
                }
                debug!(index, "Cell not selectable");
            }
        }
    }

    fn update_current_player(&mut self, mark: Mark) -> Result<(), PresentError> {
        self.panel.announce(mark);
        self.redraw()
    }

    fn present_outcome(
        &mut self,
        outcome: &SessionOutcome,
        last_mark: Mark,
    ) -> Result<(), PresentError> {
        self.panel.conclude(outcome, last_mark);
        self.cursor = None;
        self.hint = "";
        self.redraw()
    }

    #[instrument(skip(self))]
    async fn await_play_again(&mut self) -> Result<(), PresentError> {
        tokio::time::sleep(self.presentation.prompt_delay()).await;
        self.discard_pending_keys();
        self.hint = AGAIN_HINT;
        self.redraw()?;

        loop {
            let key = self.next_key().await?;
            if input::is_confirm(&key) || key.code == KeyCode::Char('r') {
                return Ok(());
            }
        }
    }

    fn clear_board(&mut self) -> Result<(), PresentError> {
        self.panel.clear();
        self.redraw()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use noughts_rules::WINNING_LINES;
    use ratatui::backend::TestBackend;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn presenter(keys: mpsc::UnboundedReceiver<KeyEvent>) -> TerminalPresenter<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        let presentation = PresentationConfig::default()
            .with_start_delay_ms(10)
            .with_prompt_delay_ms(10);
        TerminalPresenter::with_parts(terminal, keys, presentation)
    }

    fn in_session() -> (mpsc::UnboundedSender<KeyEvent>, TerminalPresenter<TestBackend>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut presenter = presenter(rx);
        presenter.render_session_start(Mark::X).unwrap();
        (tx, presenter)
    }

    #[tokio::test]
    async fn test_play_again_ignores_keys_pressed_during_outcome() {
        let (tx, mut presenter) = in_session();
        presenter
            .present_outcome(&SessionOutcome::Win(WINNING_LINES[0]), Mark::X)
            .unwrap();
        tx.send(key(KeyCode::Enter)).unwrap();

        let waited =
            tokio::time::timeout(Duration::from_millis(200), presenter.await_play_again()).await;
        assert!(waited.is_err(), "Enter from before the prompt restarted the match");
    }

    #[tokio::test]
    async fn test_play_again_accepts_key_after_prompt() {
        let (tx, mut presenter) = in_session();
        tx.send(key(KeyCode::Enter)).unwrap();

        let press_later = async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            tx.send(key(KeyCode::Char('r'))).unwrap();
        };
        let (result, ()) = tokio::join!(presenter.await_play_again(), press_later);
        assert_eq!(result, Ok(()));
        assert!(presenter.keys.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_start_discards_keys_pressed_while_getting_ready() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut presenter = presenter(rx);
        tx.send(key(KeyCode::Enter)).unwrap();
        tx.send(key(KeyCode::Char('5'))).unwrap();

        presenter.await_start().await.unwrap();
        assert_eq!(presenter.panel().status(), "Get ready...");
        assert!(presenter.keys.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_digit_selects_cell() {
        let (tx, mut presenter) = in_session();
        tx.send(key(KeyCode::Char('3'))).unwrap();

        assert_eq!(presenter.await_cell_selection().await, Ok(2));
        assert_eq!(presenter.panel().mark(2), Some(Mark::X));
        assert!(!presenter.panel().is_enabled(2));
    }

    #[tokio::test]
    async fn test_cursor_then_confirm_selects_cell() {
        let (tx, mut presenter) = in_session();
        tx.send(key(KeyCode::Right)).unwrap();
        tx.send(key(KeyCode::Down)).unwrap();
        tx.send(key(KeyCode::Enter)).unwrap();

        assert_eq!(presenter.await_cell_selection().await, Ok(8));
    }

    #[tokio::test]
    async fn test_disabled_cell_is_refused() {
        let (tx, mut presenter) = in_session();
        tx.send(key(KeyCode::Char('5'))).unwrap();
        assert_eq!(presenter.await_cell_selection().await, Ok(4));

        presenter.update_current_player(Mark::O).unwrap();
        tx.send(key(KeyCode::Char('5'))).unwrap();
        tx.send(key(KeyCode::Enter)).unwrap();
        tx.send(key(KeyCode::Char('1'))).unwrap();

        assert_eq!(presenter.await_cell_selection().await, Ok(0));
        assert_eq!(presenter.panel().mark(4), Some(Mark::X));
        assert_eq!(presenter.panel().mark(0), Some(Mark::O));
    }

    #[tokio::test]
    async fn test_quit_key_during_session() {
        let (tx, mut presenter) = in_session();
        tx.send(key(KeyCode::Char('q'))).unwrap();
        assert_eq!(presenter.await_cell_selection().await, Err(PresentError::Quit));
    }

    #[tokio::test]
    async fn test_closed_key_source() {
        let (tx, mut presenter) = in_session();
        drop(tx);
        assert_eq!(presenter.await_cell_selection().await, Err(PresentError::Closed));
    }
}
