//! Normalized key events
//!
//! Physical and on-screen keyboards both reduce to `KeyInput` before they
//! reach the session.

/// A single key press relevant to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// A lowercase ASCII letter
    Letter(u8),
    Backspace,
    Enter,
}

impl KeyInput {
    /// Map a character to a key, if it is one the game understands
    ///
    /// Letters are lowercased; newline and carriage return act as Enter;
    /// backspace and delete act as Backspace.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a'..='z' | 'A'..='Z' => Some(Self::Letter(c.to_ascii_lowercase() as u8)),
            '\n' | '\r' => Some(Self::Enter),
            '\u{8}' | '\u{7f}' => Some(Self::Backspace),
            _ => None,
        }
    }
}

/// What a key press did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// A letter was added to the pending row
    Typed,
    /// The last pending letter was removed
    Erased,
    /// The pending row was submitted as a guess
    Submitted(super::SubmitOutcome),
    /// Enter on a short row, or a letter on a full row
    IncompleteRow,
    /// The round is over, or the key had nothing to act on
    Ignored,
}
