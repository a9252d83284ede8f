//! TUI application state and logic

use crate::game::{GameSession, KeyInput, KeyOutcome, SessionState, SubmitOutcome};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub session: GameSession,
    pub messages: Vec<Message>,
    pub theme: Theme,
    /// The current row was just rejected and is drawn as invalid
    pub invalid_row: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(session: GameSession) -> Self {
        let mut app = Self {
            session,
            messages: Vec::new(),
            theme: Theme::Dark,
            invalid_row: false,
            should_quit: false,
        };
        app.add_message(
            &format!(
                "Guess the five-letter word in {} tries.",
                app.session.max_guesses()
            ),
            MessageStyle::Info,
        );
        app
    }

    /// Route a terminal key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('r') if ctrl => self.new_game(),
            KeyCode::Char('t') if ctrl => self.theme = self.theme.toggled(),
            KeyCode::Enter if self.session.state().is_terminal() => self.new_game(),
            KeyCode::Enter => self.apply_key(KeyInput::Enter),
            KeyCode::Backspace => self.apply_key(KeyInput::Backspace),
            KeyCode::Char(c) if !ctrl => {
                if let Some(input) = KeyInput::from_char(c) {
                    self.apply_key(input);
                }
            }
            _ => {}
        }
    }

    /// Feed a normalized key into the session and react to the outcome
    pub fn apply_key(&mut self, input: KeyInput) {
        match self.session.press(input) {
            KeyOutcome::Typed | KeyOutcome::Erased => self.invalid_row = false,
            KeyOutcome::IncompleteRow => {
                self.invalid_row = true;
                if input == KeyInput::Enter {
                    self.add_message("Not enough letters", MessageStyle::Error);
                }
            }
            KeyOutcome::Submitted(SubmitOutcome::InvalidGuess) => {
                self.invalid_row = true;
                self.add_message("Not in word list", MessageStyle::Error);
            }
            KeyOutcome::Submitted(SubmitOutcome::Accepted { state, .. }) => {
                self.invalid_row = false;
                self.announce(state);
            }
            KeyOutcome::Submitted(SubmitOutcome::GameOver) | KeyOutcome::Ignored => {}
        }
    }

    fn announce(&mut self, state: SessionState) {
        match state {
            SessionState::Won => {
                let celebration = match self.session.attempts() {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press Enter to play again.", MessageStyle::Info);
            }
            SessionState::Lost => {
                let reveal = format!(
                    "Out of guesses. The word was {}.",
                    self.session.target().text().to_uppercase()
                );
                self.add_message(&reveal, MessageStyle::Error);
                self.add_message("Press Enter to play again.", MessageStyle::Info);
            }
            SessionState::InProgress => {}
        }
    }

    pub fn new_game(&mut self) {
        self.session.reset();
        self.invalid_row = false;
        self.messages.clear();
        self.add_message("New word chosen. Good luck!", MessageStyle::Info);
        debug!("TUI started a new round");
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

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordBank;
    use crate::wordlists::loader::words_from_slice;

    fn app(target: &str) -> App {
        let bank = WordBank::new(
            words_from_slice(&["crane", "slate", "irate"]),
            Some(words_from_slice(&[target])),
        );
        App::new(GameSession::new(bank, 6))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_fills_pending_row() {
        let mut app = app("crane");
        type_word(&mut app, "Sla");
        assert_eq!(app.session.pending(), b"sla");
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.session.pending(), b"sl");
    }

    #[test]
    fn short_row_enter_marks_invalid() {
        let mut app = app("crane");
        type_word(&mut app, "sla");
        app.handle_key(key(KeyCode::Enter));
        assert!(app.invalid_row);
        assert!(app.messages.iter().any(|m| m.text == "Not enough letters"));

        app.handle_key(key(KeyCode::Char('t')));
        assert!(!app.invalid_row);
    }

    #[test]
    fn unknown_word_marks_invalid_without_attempt() {
        let mut app = app("crane");
        type_word(&mut app, "zzzzz");
        app.handle_key(key(KeyCode::Enter));
        assert!(app.invalid_row);
        assert_eq!(app.session.attempts(), 0);
    }

    #[test]
    fn win_then_enter_starts_new_round() {
        let mut app = app("crane");
        type_word(&mut app, "crane");
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.session.state(), SessionState::Won);
        assert!(
            app.messages
                .iter()
                .any(|m| m.style == MessageStyle::Success)
        );

        // Letters are ignored once the round is over
        type_word(&mut app, "s");
        assert!(app.session.pending().is_empty());

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.session.state(), SessionState::InProgress);
        assert_eq!(app.session.attempts(), 0);
    }

    #[test]
    fn control_keys() {
        let mut app = app("crane");
        app.handle_key(ctrl('t'));
        assert_eq!(app.theme, Theme::Light);
        app.handle_key(ctrl('t'));
        assert_eq!(app.theme, Theme::Dark);

        type_word(&mut app, "slate");
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(ctrl('r'));
        assert_eq!(app.session.attempts(), 0);

        app.handle_key(ctrl('c'));
        assert!(app.should_quit);
    }

    #[test]
    fn escape_quits() {
        let mut app = app("crane");
        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app("crane");
        for i in 0..10 {
            app.add_message(&format!("msg {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "msg 9");
    }
}
