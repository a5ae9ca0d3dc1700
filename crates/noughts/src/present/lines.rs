//! Line-oriented presenter for pipes and plain terminals.

use super::{CellPanel, PresentError, Presenter};
use noughts_rules::{Mark, SessionOutcome};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, instrument, warn};

/// One parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Start,
    Again,
    Quit,
    Cell(usize),
    Unknown,
}

impl Command {
    fn parse(line: &str) -> Self {
        let line = line.trim().to_lowercase();
        match line.as_str() {
            "start" | "s" => Command::Start,
            "" | "again" | "a" | "y" => Command::Again,
            "quit" | "q" | "exit" => Command::Quit,
            other => match other.parse::<usize>() {
                Ok(n) if (1..=9).contains(&n) => Command::Cell(n - 1),
                _ => Command::Unknown,
            },
        }
    }
}

/// Presenter that prints the board as text and reads one command per line.
///
/// Commands: `start`, a cell number `1`-`9`, `again` (or an empty line) and
/// `quit`. End of input stops the match with [`PresentError::Closed`].
///
/// Output from the synchronous render calls is buffered and written at the
/// next suspension point.
pub struct LinePresenter<R, W> {
    input: R,
    output: W,
    panel: CellPanel,
    outbox: String,
}

impl<R, W> LinePresenter<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    /// Creates a presenter over an input and output stream.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            panel: CellPanel::new(),
            outbox: String::new(),
        }
    }

    /// Returns the panel as last shown.
    pub fn panel(&self) -> &CellPanel {
        &self.panel
    }

    /// Releases the underlying streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn say(&mut self, text: &str) {
        self.outbox.push_str(text);
        self.outbox.push('\n');
    }

    fn show_board(&mut self) {
        let grid = self.panel.grid_text();
        let status = self.panel.status().to_string();
        self.say(&grid);
        self.say(&status);
    }

    async fn flush(&mut self) -> Result<(), PresentError> {
        if !self.outbox.is_empty() {
            let text = std::mem::take(&mut self.outbox);
            self.output.write_all(text.as_bytes()).await?;
        }
        self.output.flush().await?;
        Ok(())
    }

    /// Flushes pending output and reads the next command.
    async fn next_command(&mut self, prompt: &str) -> Result<Command, PresentError> {
        self.say(prompt);
        self.flush().await?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).await?;
        if read == 0 {
            debug!("Input exhausted");
            return Err(PresentError::Closed);
        }
        let command = Command::parse(&line);
        debug!(?command, "Command read");
        Ok(command)
    }
}

#[async_trait::async_trait]
impl<R, W> Presenter for LinePresenter<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    #[instrument(skip(self))]
    async fn await_start(&mut self) -> Result<(), PresentError> {
        loop {
            match self.next_command("Type 'start' to begin.").await? {
                Command::Start => {
                    info!("Start requested");
                    return Ok(());
                }
                Command::Quit => return Err(PresentError::Quit),
                _ => {}
            }
        }
    }

    fn render_session_start(&mut self, mark: Mark) -> Result<(), PresentError> {
        self.panel.start(mark);
        self.show_board();
        Ok(())
    }

    #[instrument(skip(self), fields(mark = %self.panel.current()))]
    async fn await_cell_selection(&mut self) -> Result<usize, PresentError> {
        loop {
            let prompt = format!("Cell for {} (1-9):", self.panel.current());
            match self.next_command(&prompt).await? {
                Command::Cell(index) => {
                    if self.panel.select(index) {
                        return Ok(index);
                    }
                    warn!(index, "Selection on a disabled cell");
                    self.say(&format!("Cell {} is not available.", index + 1));
                }
                Command::Quit => return Err(PresentError::Quit),
                _ => self.say("Pick a cell number from 1 to 9, or 'quit'."),
            }
        }
    }

    fn update_current_player(&mut self, mark: Mark) -> Result<(), PresentError> {
        self.panel.announce(mark);
        self.show_board();
        Ok(())
    }

    fn present_outcome(
        &mut self,
        outcome: &SessionOutcome,
        last_mark: Mark,
    ) -> Result<(), PresentError> {
        self.panel.conclude(outcome, last_mark);
        self.show_board();
        Ok(())
    }

    #[instrument(skip(self))]
    async fn await_play_again(&mut self) -> Result<(), PresentError> {
        loop {
            match self
                .next_command("Type 'again' to play again or 'quit' to leave.")
                .await?
            {
                Command::Again => return Ok(()),
                Command::Quit => return Err(PresentError::Quit),
                _ => {}
            }
        }
    }

    fn clear_board(&mut self) -> Result<(), PresentError> {
        self.panel.clear();
        Ok(())
    }
}
