//! Presentation-side view of the board.

use noughts_rules::{BOARD_CELLS, Mark, SessionOutcome, WinningLine};
use tracing::{debug, instrument};

/// What a presenter shows: painted marks, which cells accept clicks, the
/// highlighted winning line and the status line.
///
/// This is not the authoritative board. It mirrors what the user has been
/// shown so a presenter can refuse clicks on cells it already disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellPanel {
    marks: [Option<Mark>; BOARD_CELLS],
    enabled: [bool; BOARD_CELLS],
    highlight: Option<WinningLine>,
    current: Mark,
    status: String,
}

impl CellPanel {
    /// Creates a blank panel with every cell disabled.
    pub fn new() -> Self {
        Self {
            marks: [None; BOARD_CELLS],
            enabled: [false; BOARD_CELLS],
            highlight: None,
            current: Mark::X,
            status: String::from("Waiting for the game to start..."),
        }
    }

    /// Enables every empty cell and announces `mark`.
    #[instrument(skip(self))]
    pub fn start(&mut self, mark: Mark) {
        for (enabled, painted) in self.enabled.iter_mut().zip(self.marks.iter()) {
            *enabled = painted.is_none();
        }
        self.announce(mark);
    }

    /// Paints the current mark into `index` and disables it.
    ///
    /// Returns `false` without changing anything if the cell is off the
    /// board or disabled.
    #[instrument(skip(self))]
    pub fn select(&mut self, index: usize) -> bool {
        match self.enabled.get(index) {
            Some(true) => {
                self.marks[index] = Some(self.current);
                self.enabled[index] = false;
                debug!(index, mark = %self.current, "Cell painted");
                true
            }
            _ => false,
        }
    }

    /// Updates the status line to `mark`'s turn.
    pub fn announce(&mut self, mark: Mark) {
        self.current = mark;
        self.status = format!("Current player: {}", mark);
    }

    /// Disables every cell and shows the result.
    #[instrument(skip(self))]
    pub fn conclude(&mut self, outcome: &SessionOutcome, last_mark: Mark) {
        self.enabled = [false; BOARD_CELLS];
        self.highlight = outcome.winning_line();
        self.status = if outcome.is_draw() {
            String::from("Draw!")
        } else {
            format!("{} won.", last_mark)
        };
    }

    /// Removes marks and highlights. Cells stay disabled until the next start.
    pub fn clear(&mut self) {
        self.marks = [None; BOARD_CELLS];
        self.enabled = [false; BOARD_CELLS];
        self.highlight = None;
    }

    /// Replaces the status line.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Mark painted at `index`.
    pub fn mark(&self, index: usize) -> Option<Mark> {
        self.marks.get(index).copied().flatten()
    }

    /// Whether `index` currently accepts a selection.
    pub fn is_enabled(&self, index: usize) -> bool {
        self.enabled.get(index).copied().unwrap_or(false)
    }

    /// Whether `index` is part of the highlighted winning line.
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlight.is_some_and(|line| line.contains(index))
    }

    /// Mark the panel believes is moving.
    pub fn current(&self) -> Mark {
        self.current
    }

    /// Current status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Text grid with 1-based numbers in empty cells and `*` around winners.
    pub fn grid_text(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.marks[index] {
                    Some(mark) => mark.to_string(),
                    None => (index + 1).to_string(),
                };
                if self.is_highlighted(index) {
                    result.push_str(&format!("*{}*", symbol));
                } else {
                    result.push_str(&format!(" {} ", symbol));
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n---+---+---\n");
            }
        }
        result
    }
}

impl Default for CellPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_rules::WINNING_LINES;

    #[test]
    fn test_cells_disabled_until_start() {
        let mut panel = CellPanel::new();
        assert!(!panel.select(0));
        panel.start(Mark::X);
        assert!((0..BOARD_CELLS).all(|i| panel.is_enabled(i)));
    }

    #[test]
    fn test_select_disables_cell() {
        let mut panel = CellPanel::new();
        panel.start(Mark::X);
        assert!(panel.select(4));
        assert_eq!(panel.mark(4), Some(Mark::X));
        assert!(!panel.is_enabled(4));
        panel.announce(Mark::O);
        assert!(!panel.select(4));
        assert_eq!(panel.mark(4), Some(Mark::X));
    }

    #[test]
    fn test_select_out_of_range() {
        let mut panel = CellPanel::new();
        panel.start(Mark::X);
        assert!(!panel.select(BOARD_CELLS));
    }

    #[test]
    fn test_conclude_win_highlights_line() {
        let mut panel = CellPanel::new();
        panel.start(Mark::O);
        panel.conclude(&SessionOutcome::Win(WINNING_LINES[3]), Mark::O);
        assert_eq!(panel.status(), "O won.");
        assert!(panel.is_highlighted(0));
        assert!(panel.is_highlighted(3));
        assert!(panel.is_highlighted(6));
        assert!(!panel.is_highlighted(1));
        assert!(!panel.is_enabled(1));
    }

    #[test]
    fn test_conclude_draw() {
        let mut panel = CellPanel::new();
        panel.start(Mark::X);
        panel.conclude(&SessionOutcome::Draw, Mark::X);
        assert_eq!(panel.status(), "Draw!");
        assert!((0..BOARD_CELLS).all(|i| !panel.is_highlighted(i)));
    }

    #[test]
    fn test_clear_removes_marks() {
        let mut panel = CellPanel::new();
        panel.start(Mark::X);
        panel.select(0);
        panel.conclude(&SessionOutcome::Win(WINNING_LINES[0]), Mark::X);
        panel.clear();
        assert_eq!(panel.mark(0), None);
        assert!(!panel.is_highlighted(0));
    }

    #[test]
    fn test_grid_text_marks_winners() {
        let mut panel = CellPanel::new();
        panel.start(Mark::X);
        panel.select(0);
        panel.select(4);
        panel.select(8);
        panel.conclude(&SessionOutcome::Win(WINNING_LINES[6]), Mark::X);
        assert_eq!(
            panel.grid_text(),
            "*X*| 2 | 3 \n---+---+---\n 4 |*X*| 6 \n---+---+---\n 7 | 8 |*X*"
        );
    }
}
