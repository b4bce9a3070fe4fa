//! TUI application state and logic

use crate::commands::{SolveResult, solve_parsed};
use crate::core::{Difficulty, MAX_BASE, MIN_BASE, Puzzle};
use crate::solver::SearchMode;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest equation the input line accepts
const MAX_INPUT: usize = 120;

/// Application state
pub struct App {
    pub base: u8,
    pub mode: SearchMode,
    pub input_buffer: String,
    pub current: Option<SolveResult>,
    /// First solution row shown in the solutions panel
    pub scroll: usize,
    pub history: Vec<HistoryEntry>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub equation: String,
    pub base: u8,
    pub solutions: usize,
    pub difficulty: Option<Difficulty>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(base: u8) -> Self {
        Self {
            base: base.clamp(MIN_BASE, MAX_BASE),
            mode: SearchMode::All,
            input_buffer: String::new(),
            current: None,
            scroll: 0,
            history: Vec::new(),
            messages: vec![
                Message {
                    text: "Welcome! Type an addition puzzle such as SEND + MORE = MONEY."
                        .to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Enter solves it, Up/Down change the base.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        }
    }

    /// Parse and solve the equation in the input buffer
    pub fn submit(&mut self) {
        let equation = self.input_buffer.trim().to_string();
        if equation.is_empty() {
            self.add_message("Type an equation first", MessageStyle::Error);
            return;
        }

        let puzzle = match Puzzle::parse(&equation, self.base) {
            Ok(puzzle) => puzzle,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };

        let result = solve_parsed(puzzle, self.mode);
        let outcome = &result.outcome;

        if let Some(reason) = &outcome.infeasible {
            self.add_message(&format!("No solutions: {reason}"), MessageStyle::Error);
        } else {
            match (outcome.solutions, self.mode) {
                (0, _) => self.add_message("No solutions", MessageStyle::Error),
                (1, SearchMode::All) => {
                    self.add_message("Exactly one solution", MessageStyle::Success);
                }
                (_, SearchMode::First) => {
                    self.add_message("First solution found", MessageStyle::Success);
                }
                (n, SearchMode::All) => {
                    self.add_message(&format!("{n} solutions"), MessageStyle::Info);
                }
            }
        }

        self.history.push(HistoryEntry {
            equation: result.puzzle.to_string(),
            base: self.base,
            solutions: outcome.solutions,
            difficulty: outcome.difficulty,
        });
        self.current = Some(result);
        self.scroll = 0;
        self.input_buffer.clear();
    }

    pub fn base_up(&mut self) {
        if self.base < MAX_BASE {
            self.base += 1;
        }
    }

    pub fn base_down(&mut self) {
        if self.base > MIN_BASE {
            self.base -= 1;
        }
    }

    /// Switch between enumerating every solution and stopping at the first
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            SearchMode::All => SearchMode::First,
            SearchMode::First => SearchMode::All,
        };
        let text = match self.mode {
            SearchMode::All => "Finding all solutions",
            SearchMode::First => "Stopping at the first solution",
        };
        self.add_message(text, MessageStyle::Info);
    }

    pub fn scroll_down(&mut self, rows: usize) {
        let total = self.current.as_ref().map_or(0, |r| r.solutions.len());
        self.scroll = (self.scroll + rows).min(total.saturating_sub(1));
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    /// Append a typed character if it can be part of an equation
    pub fn push_char(&mut self, c: char) {
        if self.input_buffer.len() < MAX_INPUT
            && (c.is_ascii_alphabetic() || matches!(c, '+' | '=' | ' '))
        {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => app.should_quit = true,
                KeyCode::Up => app.base_up(),
                KeyCode::Down => app.base_down(),
                KeyCode::Tab => app.toggle_mode(),
                KeyCode::PageDown => app.scroll_down(10),
                KeyCode::PageUp => app.scroll_up(10),
                KeyCode::Enter => app.submit(),
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Char(c) => app.push_char(c),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
