//! TUI rendering with ratatui
//!
//! Grid, keyboard and popups for the game screen.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{KEYBOARD_ROWS, LetterStatus};
use crate::game::{Cell, GridRow, MAX_ATTEMPTS};
use crate::output::formatters::{DELETE_LABEL, ENTER_LABEL, HOW_TO_PLAY};
use crate::store::StateStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};
use std::time::Instant;

/// Main UI rendering function
pub fn ui<S: StateStore>(f: &mut Frame, app: &App<S>, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                        // Header
            Constraint::Length(MAX_ATTEMPTS as u16 + 2), // Grid
            Constraint::Length(5),                        // Keyboard
            Constraint::Min(3),                           // Messages
            Constraint::Length(1),                        // Help line
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_grid(f, app, chunks[1], now);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_help_line(f, app, chunks[4]);

    match app.input_mode {
        InputMode::Playing => {}
        InputMode::Help => render_help_popup(f),
        InputMode::Summary => render_summary_popup(f, app),
        InputMode::Share => render_share_popup(f, app),
    }
}

/// Tile style for a status; `None` is an unrevealed letter
fn tile_style(status: Option<LetterStatus>) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match status {
        Some(LetterStatus::Correct) => base.fg(Color::Black).bg(Color::Green),
        Some(LetterStatus::Present) => base.fg(Color::Black).bg(Color::Yellow),
        Some(LetterStatus::Absent) => base.fg(Color::White).bg(Color::DarkGray),
        None => base.fg(Color::White),
    }
}

fn render_header<S: StateStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let stats = app.controller.stats();
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "WORDLE PRO",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::raw(format!("Score: {}", stats.score)),
        Span::raw("   "),
        Span::raw(format!("Streak: {}", stats.streak)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn grid_line(row: &GridRow, shaking: bool) -> Line<'static> {
    let mut spans = Vec::with_capacity(row.len() * 2);
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(cell_span(cell, shaking));
    }
    Line::from(spans)
}

fn cell_span(cell: &Cell, shaking: bool) -> Span<'static> {
    let text = format!(" {} ", cell.letter.unwrap_or('·'));
    let style = if shaking && cell.status.is_none() {
        tile_style(None).fg(Color::Red)
    } else {
        tile_style(cell.status)
    };
    Span::styled(text, style)
}

fn render_grid<S: StateStore>(f: &mut Frame, app: &App<S>, area: Rect, now: Instant) {
    let current_row = app.controller.state().attempts().len();
    let shaking = app.is_shaking(now);

    let lines: Vec<Line> = app
        .controller
        .grid()
        .iter()
        .enumerate()
        .map(|(i, row)| grid_line(row, shaking && i == current_row))
        .collect();

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_keyboard<S: StateStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let last = KEYBOARD_ROWS.len() - 1;
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut spans = Vec::new();
            if i == last {
                spans.push(Span::styled(
                    format!(" {ENTER_LABEL} "),
                    Style::default().fg(Color::Cyan),
                ));
            }
            for c in row.chars() {
                spans.push(Span::styled(
                    format!(" {c} "),
                    tile_style(app.controller.key_status(c)),
                ));
                spans.push(Span::raw(" "));
            }
            if i == last {
                spans.push(Span::styled(
                    format!(" {DELETE_LABEL} "),
                    Style::default().fg(Color::Cyan),
                ));
            }
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_messages<S: StateStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_help_line<S: StateStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::Playing => "Letters: type | Enter: submit | Backspace: delete | ?: rules | Esc: quit",
        InputMode::Help => "Press any key to start",
        InputMode::Summary => "n: New game | s: Share | q: Quit",
        InputMode::Share => "Press any key to go back",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

/// Rectangle of the given size centered in `area`, clamped to fit
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn popup_block(title: &str, color: Color) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .style(Style::default().fg(color))
}

fn render_help_popup(f: &mut Frame) {
    let area = centered_rect(72, HOW_TO_PLAY.len() as u16 + 4, f.area());
    let lines: Vec<Line> = HOW_TO_PLAY.iter().map(|&l| Line::from(l)).collect();

    let popup = Paragraph::new(lines)
        .block(popup_block(" How to play ", Color::Cyan))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn render_summary_popup<S: StateStore>(f: &mut Frame, app: &App<S>) {
    let Some(summary) = app.controller.summary() else {
        return;
    };

    let (title, color) = if summary.won {
        (" 🎉 YOU GOT IT! 🎉 ", Color::Green)
    } else {
        (" SO CLOSE! ", Color::Red)
    };

    let content = vec![
        Line::from(vec![
            Span::raw("The word was: "),
            Span::styled(
                summary.target.text().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Points: +{}", summary.points)),
        Line::from(format!("Streak: {}", summary.stats.streak)),
        Line::from(format!("Score:  {}", summary.stats.score)),
        Line::from(""),
        Line::from("n: new game   s: share   q: quit"),
    ];

    let area = centered_rect(40, content.len() as u16 + 2, f.area());
    let popup = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(popup_block(title, color));

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn render_share_popup<S: StateStore>(f: &mut Frame, app: &App<S>) {
    let Some(text) = app.controller.share_text() else {
        return;
    };
    let lines: Vec<Line> = text.lines().map(|l| Line::from(l.to_string())).collect();

    let area = centered_rect(60, lines.len() as u16 + 2, f.area());
    let popup = Paragraph::new(lines)
        .block(popup_block(" Share (copy the text) ", Color::Cyan))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let r = centered_rect(40, 10, area);
        assert_eq!(r, Rect::new(30, 15, 40, 10));

        let small = Rect::new(5, 5, 20, 4);
        let r = centered_rect(40, 10, small);
        assert_eq!(r, small);
    }

    #[test]
    fn grid_line_marks_unrevealed_cells_when_shaking() {
        let mut row = [Cell::default(); 5];
        row[0].letter = Some('A');
        let line = grid_line(&row, true);
        // five tiles and four separators
        assert_eq!(line.spans.len(), 9);
        assert_eq!(line.spans[0].content, " A ");
        assert_eq!(line.spans[0].style.fg, Some(Color::Red));

        let calm = grid_line(&row, false);
        assert_eq!(calm.spans[0].style.fg, Some(Color::White));
    }
}
