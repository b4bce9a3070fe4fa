//! TUI rendering with ratatui
//!
//! Panels for the puzzle layout, its solutions and the search statistics.

use super::app::{App, MessageStyle};
use crate::core::Difficulty;
use crate::output::formatters::{column_layout, substituted_equation};
use crate::solver::SearchMode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("ALPHAMETICS - Interactive Solver")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45), // Column layout
            Constraint::Percentage(55), // Solutions
        ])
        .split(area);

    render_puzzle(f, app, chunks[0]);
    render_solutions(f, app, chunks[1]);
}

fn render_puzzle(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Puzzle ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(result) = &app.current else {
        let paragraph = Paragraph::new("No puzzle solved yet").block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let mut lines: Vec<Line> = column_layout(&result.puzzle)
        .into_iter()
        .map(|row| {
            Line::styled(
                row,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect();

    if let Some(first) = result.solutions.first() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                substituted_equation(&result.puzzle, first),
                Style::default().fg(Color::Green),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, area);
}

fn render_solutions(f: &mut Frame, app: &App, area: Rect) {
    let (title, items): (String, Vec<ListItem>) = match &app.current {
        None => (" Solutions ".to_string(), Vec::new()),
        Some(result) => {
            let title = format!(" Solutions ({}) ", result.outcome.solutions);
            let red = Style::default().fg(Color::Red);
            let items = if let Some(reason) = &result.outcome.infeasible {
                vec![ListItem::new(format!("No solutions: {reason}")).style(red)]
            } else if result.solutions.is_empty() {
                vec![ListItem::new("No solutions").style(red)]
            } else {
                result
                    .solutions
                    .iter()
                    .enumerate()
                    .skip(app.scroll)
                    .map(|(i, solution)| {
                        ListItem::new(Line::from(vec![
                            Span::styled(
                                format!("{:>4}. ", i + 1),
                                Style::default().fg(Color::DarkGray),
                            ),
                            Span::raw(solution.to_string()),
                        ]))
                    })
                    .collect()
            };
            (title, items)
        }
    };

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Difficulty gauge
            Constraint::Percentage(50), // Messages
            Constraint::Min(3),         // History
        ])
        .split(area);

    render_difficulty(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_difficulty(f: &mut Frame, app: &App, area: Rect) {
    let outcome = app.current.as_ref().map(|r| &r.outcome);
    let difficulty = outcome.and_then(|o| o.difficulty);

    let (percent, label) = match (difficulty, outcome) {
        (Some(d), Some(o)) => (
            u16::from(d.level()) * 100 / u16::from(Difficulty::HARDEST.level()),
            format!("{}/5 {} | {} backtracks", d, d.label(), o.backtracks),
        ),
        _ => (0, "-".to_string()),
    };

    let color = match difficulty.map(Difficulty::level) {
        Some(1 | 2) => Color::Green,
        Some(3) => Color::Yellow,
        Some(_) => Color::Red,
        None => Color::DarkGray,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Difficulty ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(label);

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
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

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .take(8)
        .map(|entry| {
            let difficulty = entry
                .difficulty
                .map_or_else(|| "-".to_string(), |d| d.to_string());
            ListItem::new(format!(
                "{} (base {}) → {} [{}]",
                entry.equation, entry.base, entry.solutions, difficulty
            ))
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Enter Equation (e.g. SEND + MORE = MONEY) | Enter to solve ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let base_text = format!("Base: {}", app.base);
    let base = Paragraph::new(base_text).alignment(Alignment::Center);
    f.render_widget(base, chunks[0]);

    let mode_text = match app.mode {
        SearchMode::All => "Mode: All solutions",
        SearchMode::First => "Mode: First solution",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[1]);

    let solved = Paragraph::new(format!("Puzzles: {}", app.history.len()))
        .alignment(Alignment::Center);
    f.render_widget(solved, chunks[2]);

    let help = Paragraph::new("Esc: Quit | ↑/↓: Base | TAB: Mode | PgUp/PgDn: Scroll")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
