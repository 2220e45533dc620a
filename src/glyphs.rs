//! Substitution glyphs for non-printable characters.
//!
//! Tab, newline, and space are represented in render output by private-use
//! codepoints so the styling layer can tell them apart from literal text.
//! At paint time [`visible_glyph`] maps each stand-in to a character a
//! terminal can actually draw. Control characters outside this set get a
//! `U+xxxx` hex label instead.

use crate::settings::WhitespaceStyle;

/// Stand-in for a space under [`WhitespaceStyle::Space`].
pub const SPACE_GLYPH: char = '\u{00A0}';
/// Stand-in for a space under [`WhitespaceStyle::Bullet`].
pub const SPACE_BULLET_GLYPH: char = '\u{E000}';
/// Stand-in for a space under [`WhitespaceStyle::Bar`].
pub const SPACE_BAR_GLYPH: char = '\u{E001}';
/// Stand-in for a tab.
pub const TAB_GLYPH: char = '\u{E002}';
/// Stand-in for a newline.
pub const NEWLINE_GLYPH: char = '\u{E003}';

/// Select the space stand-in for a whitespace style.
#[must_use]
pub const fn whitespace_glyph(style: WhitespaceStyle) -> char {
    match style {
        WhitespaceStyle::Space => SPACE_GLYPH,
        WhitespaceStyle::Bar => SPACE_BAR_GLYPH,
        WhitespaceStyle::Bullet => SPACE_BULLET_GLYPH,
    }
}

/// Format a control character as a `U+xxxx` label.
///
/// Lowercase hex, zero-padded to four digits; astral code points widen as
/// needed.
#[must_use]
pub fn hex_label(c: char) -> String {
    format!("U+{:04x}", c as u32)
}

/// Map a substitution glyph to the character a terminal draws for it.
///
/// Identity for anything outside the stand-in set.
#[must_use]
pub const fn visible_glyph(c: char) -> char {
    match c {
        SPACE_GLYPH => ' ',
        SPACE_BULLET_GLYPH => '\u{00B7}', // middle dot
        SPACE_BAR_GLYPH => '\u{2423}',    // open box
        TAB_GLYPH => '\u{2192}',          // rightwards arrow
        NEWLINE_GLYPH => '\u{21B5}',      // return symbol
        _ => c,
    }
}
