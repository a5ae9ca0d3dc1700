//! Terminal result of a session.

use crate::line::WinningLine;
use serde::{Deserialize, Serialize};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionOutcome {
    /// Every cell is occupied and no line is complete.
    Draw,
    /// One mark holds all three cells of the line.
    Win(WinningLine),
}

impl SessionOutcome {
    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            SessionOutcome::Win(line) => Some(*line),
            SessionOutcome::Draw => None,
        }
    }

    /// Returns true if the session was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, SessionOutcome::Draw)
    }
}

impl std::fmt::Display for SessionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionOutcome::Win(line) => write!(f, "Win {}", line),
            SessionOutcome::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::WINNING_LINES;

    #[test]
    fn test_win_carries_line() {
        let outcome = SessionOutcome::Win(WINNING_LINES[4]);
        assert_eq!(outcome.winning_line(), Some(WINNING_LINES[4]));
        assert!(!outcome.is_draw());
    }

    #[test]
    fn test_draw_has_no_line() {
        assert_eq!(SessionOutcome::Draw.winning_line(), None);
        assert!(SessionOutcome::Draw.is_draw());
    }
}
