//! Stateless rendering of a [`CellPanel`].

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::present::CellPanel;
use noughts_rules::Mark;

/// Renders title, board and status. `cursor` is `None` when no cell is selectable.
pub fn draw(frame: &mut Frame, panel: &CellPanel, cursor: Option<usize>, hint: &str) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Key hint
        ])
        .split(area);

    let title = Paragraph::new("Noughts - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], panel, cursor);

    let status = Paragraph::new(panel.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let hint = Paragraph::new(hint)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hint, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, panel: &CellPanel, cursor: Option<usize>) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], panel, cursor, row * 3);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, panel: &CellPanel, cursor: Option<usize>, first: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        draw_cell(frame, cols[col * 2], panel, cursor, first + col);
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, panel: &CellPanel, cursor: Option<usize>, index: usize) {
    let label = (index + 1).to_string();
    let (symbol, base_style) = match panel.mark(index) {
        None if panel.is_enabled(index) => (label.as_str(), Style::default().fg(Color::Gray)),
        None => (" ", Style::default().fg(Color::DarkGray)),
        Some(Mark::X) => ("X", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Some(Mark::O) => ("O", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };

    let style = if panel.is_highlighted(index) {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if cursor == Some(index) {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let text = vec![
        Line::default(),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("──────────────────────────────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
