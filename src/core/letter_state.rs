//! Per-letter feedback states

/// Classification of a letter on the board or the keyboard
///
/// Variants are declared in precedence order, so the derived `Ord` gives
/// `Initial < Entered < Absent < Present < Correct`. Keyboard hints rely on
/// this ordering to only ever move a key towards `Correct`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterState {
    /// Nothing typed yet
    #[default]
    Initial,
    /// Typed into a tile but not yet submitted
    Entered,
    /// Not in the target (or every occurrence already accounted for)
    Absent,
    /// In the target at a different position
    Present,
    /// In the target at this exact position
    Correct,
}

impl LetterState {
    /// Whether this state can appear in a scored guess
    #[inline]
    #[must_use]
    pub const fn is_scored(self) -> bool {
        matches!(self, Self::Absent | Self::Present | Self::Correct)
    }

    /// Combine two states, keeping the one with higher precedence
    #[inline]
    #[must_use]
    pub fn upgrade(self, other: Self) -> Self {
        self.max(other)
    }

    /// Emoji tile for a scored state; unscored states render as empty
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Initial | Self::Entered => '⬜',
        }
    }
}
