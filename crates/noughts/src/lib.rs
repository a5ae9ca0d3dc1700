//! Noughts - a play-again tic-tac-toe loop
//!
//! The rules live in [`noughts_rules`]. This crate drives them:
//!
//! - **Session**: one game from an empty board to a win or draw
//! - **MatchDriver**: sessions back to back, with a play-again prompt between them
//! - **Presenter**: the rendering and input layer both of them talk to
//!
//! # Example
//!
//! ```no_run
//! use noughts::{LinePresenter, MatchDriver, Mark};
//! use tokio::io::BufReader;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let presenter = LinePresenter::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout());
//! let mut driver = MatchDriver::new(presenter, Mark::X);
//! let summary = driver.run().await?;
//! println!("{} sessions", summary.sessions());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod driver;
mod present;
mod session;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, NoughtsConfig, PresentationConfig};

// Crate-level exports - Orchestration
pub use driver::{MatchDriver, MatchSummary};
pub use session::{Concluded, Session, SessionPhase, Step};

// Crate-level exports - Presentation
pub use present::{CellPanel, LinePresenter, PresentError, Presenter};
pub use tui::TerminalPresenter;

// Crate-level exports - Game types
pub use noughts_rules::{BoardState, InvalidMove, Mark, SessionOutcome, WINNING_LINES, WinningLine};
