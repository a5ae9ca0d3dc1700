//! Keyboard handling for the terminal UI.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// How long the reader blocks before checking whether anyone is listening.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Moves the cursor one cell on the 3x3 grid. Stops at the edges.
pub fn move_cursor(cursor: usize, key: KeyCode) -> usize {
    let (row, col) = (cursor / 3, cursor % 3);
    match key {
        KeyCode::Right if col < 2 => cursor + 1,
        KeyCode::Left if col > 0 => cursor - 1,
        KeyCode::Down if row < 2 => cursor + 3,
        KeyCode::Up if row > 0 => cursor - 3,
        _ => cursor,
    }
}

/// Maps `1`-`9` to a cell index.
pub fn digit_cell(key: KeyCode) -> Option<usize> {
    match key {
        KeyCode::Char(c) => match c.to_digit(10) {
            Some(digit @ 1..=9) => Some(digit as usize - 1),
            _ => None,
        },
        _ => None,
    }
}

/// `q`, Esc and Ctrl+C leave the match.
pub fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Enter and Space confirm.
pub fn is_confirm(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Enter | KeyCode::Char(' '))
}

/// Forwards key presses from a reader thread.
///
/// The thread exits once the receiver is dropped or the terminal stops
/// producing events; the receiver then yields `None`.
pub fn spawn_key_reader() -> mpsc::UnboundedReceiver<KeyEvent> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        while !tx.is_closed() {
            match event::poll(POLL_INTERVAL) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        if tx.send(key).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        warn!(error = %e, "Failed to read terminal event");
                        break;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    warn!(error = %e, "Failed to poll terminal events");
                    break;
                }
            }
        }
        debug!("Key reader stopped");
    });
    rx
}
