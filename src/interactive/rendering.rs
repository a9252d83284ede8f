//! TUI rendering with ratatui
//!
//! Board, keyboard, and message panels for the game.

use super::app::{App, MessageStyle, Theme};
use crate::core::{LetterState, WORD_LENGTH};
use crate::game::SessionState;
use crate::output::formatters::KEYBOARD_LAYOUT;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Colours for one theme
struct Palette {
    text: Color,
    background: Color,
    correct: Color,
    present: Color,
    absent: Color,
    empty: Color,
    invalid: Color,
}

const fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            text: Color::White,
            background: Color::Black,
            correct: Color::Green,
            present: Color::Yellow,
            absent: Color::DarkGray,
            empty: Color::Gray,
            invalid: Color::Red,
        },
        Theme::Light => Palette {
            text: Color::Black,
            background: Color::White,
            correct: Color::LightGreen,
            present: Color::LightYellow,
            absent: Color::Gray,
            empty: Color::DarkGray,
            invalid: Color::LightRed,
        },
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let colors = palette(app.theme);
    let board_height = u16::try_from(app.session.max_guesses() * 2 + 1).unwrap_or(u16::MAX);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                // Header
            Constraint::Length(board_height + 2), // Board
            Constraint::Length(5),                // Keyboard
            Constraint::Min(3),                   // Messages
            Constraint::Length(1),                // Status bar
        ])
        .split(f.area());

    f.render_widget(
        Block::default().style(Style::default().bg(colors.background)),
        f.area(),
    );

    render_header(f, &colors, chunks[0]);
    render_board(f, app, &colors, chunks[1]);
    render_keyboard(f, app, &colors, chunks[2]);
    render_messages(f, app, &colors, chunks[3]);
    render_status(f, app, &colors, chunks[4]);
}

fn render_header(f: &mut Frame, colors: &Palette, area: Rect) {
    let header = Paragraph::new("🟩 WORD GAME 🟨")
        .style(
            Style::default()
                .fg(colors.correct)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(colors.text)),
        );
    f.render_widget(header, area);
}

fn tile_style(state: LetterState, colors: &Palette) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match state {
        LetterState::Correct => base.fg(Color::Black).bg(colors.correct),
        LetterState::Present => base.fg(Color::Black).bg(colors.present),
        LetterState::Absent => base.fg(Color::White).bg(colors.absent),
        LetterState::Entered => base.fg(colors.text),
        LetterState::Initial => Style::default().fg(colors.empty),
    }
}

fn tile(letter: Option<u8>, style: Style) -> Span<'static> {
    let text = letter.map_or_else(
        || " · ".to_string(),
        |l| format!(" {} ", char::from(l.to_ascii_uppercase())),
    );
    Span::styled(text, style)
}

/// One board row: scored, being typed, or empty
fn board_row(app: &App, row: usize, colors: &Palette) -> Line<'static> {
    let session = &app.session;
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);

    for col in 0..WORD_LENGTH {
        if col > 0 {
            spans.push(Span::raw(" "));
        }

        let span = if let Some(record) = session.history().get(row) {
            let state = record.evaluation.state_at(col);
            tile(Some(record.word.char_at(col)), tile_style(state, colors))
        } else if row == session.attempts() && session.state() == SessionState::InProgress {
            let letter = session.pending().get(col).copied();
            let style = if app.invalid_row {
                Style::default()
                    .fg(colors.invalid)
                    .add_modifier(Modifier::BOLD)
            } else if letter.is_some() {
                tile_style(LetterState::Entered, colors)
            } else {
                tile_style(LetterState::Initial, colors)
            };
            tile(letter, style)
        } else {
            tile(None, tile_style(LetterState::Initial, colors))
        };
        spans.push(span);
    }

    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, colors: &Palette, area: Rect) {
    let mut lines = Vec::with_capacity(app.session.max_guesses() * 2);
    for row in 0..app.session.max_guesses() {
        lines.push(Line::from(""));
        lines.push(board_row(app, row, colors));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .style(Style::default().fg(colors.text)),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, colors: &Palette, area: Rect) {
    let hints = app.session.keyboard();
    let lines: Vec<Line> = KEYBOARD_LAYOUT
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|letter| tile(Some(letter), tile_style(key_state(hints.state_of(letter)), colors)))
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .style(Style::default().fg(colors.text)),
    );
    f.render_widget(keyboard, area);
}

/// Untouched keys render as entered so their letters stay readable
const fn key_state(state: LetterState) -> LetterState {
    match state {
        LetterState::Initial => LetterState::Entered,
        other => other,
    }
}

fn render_messages(f: &mut Frame, app: &App, colors: &Palette, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(colors.text),
                MessageStyle::Success => Style::default().fg(colors.correct),
                MessageStyle::Error => Style::default().fg(colors.invalid),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list = List::new(messages).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .style(Style::default().fg(colors.text)),
    );

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, colors: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats = app.session.stats();
    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}% | Streak: {}",
        stats.games_played,
        stats.win_rate(),
        stats.current_streak
    );
    let stats = Paragraph::new(stats_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors.text));
    f.render_widget(stats, chunks[0]);

    let help_text = if app.session.state().is_terminal() {
        "Enter: New Game | Ctrl-T: Theme | Esc: Quit"
    } else {
        "Enter: Submit | Ctrl-R: New Word | Ctrl-T: Theme | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors.empty));
    f.render_widget(help, chunks[1]);
}
