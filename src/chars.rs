//! Annotated characters produced by a typing-session tracker.
//!
//! A [`Char`] pairs one code point with the feedback state the tracker
//! assigned to it after comparing the learner's keystrokes against the
//! practice text. The display layers never mutate characters; they only
//! group and style them.

/// Feedback state of a single practice character.
///
/// Produced by an external typing-accuracy tracker and immutable afterwards.
/// Adding a variant is a compile-time event: every style lookup in the crate
/// matches exhaustively on this enum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Attrs {
    /// Not yet typed.
    #[default]
    Normal,
    /// Typed correctly.
    Hit,
    /// Typed correctly after one or more errors.
    Miss,
    /// An extraneous character the learner typed that is not in the text.
    Garbage,
    /// The character the cursor currently sits on.
    Cursor,
}

/// One code point plus its feedback annotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Char {
    pub code_point: char,
    pub attrs: Attrs,
}

impl Char {
    /// Create a character with the given annotation.
    #[must_use]
    pub const fn new(code_point: char, attrs: Attrs) -> Self {
        Self { code_point, attrs }
    }

    /// True if this character renders as regular text (code point above 32).
    #[must_use]
    pub const fn is_printable(self) -> bool {
        is_printable(self.code_point)
    }

    /// True if this character separates words (tab, newline, or space).
    #[must_use]
    pub const fn is_separator(self) -> bool {
        is_separator(self.code_point)
    }
}

/// True for code points above 32: everything that renders as itself.
#[must_use]
pub const fn is_printable(c: char) -> bool {
    c as u32 > 32
}

/// True for the word-separator set: tab, newline, space.
#[must_use]
pub const fn is_separator(c: char) -> bool {
    matches!(c, '\t' | '\n' | ' ')
}

/// Annotate every character of `text` with the same attrs.
///
/// Convenience for hosts and tests; real trackers assign attrs per keystroke.
#[must_use]
pub fn annotate(text: &str, attrs: Attrs) -> Vec<Char> {
    text.chars().map(|c| Char::new(c, attrs)).collect()
}
