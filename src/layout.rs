//! Greedy word wrapping of annotated text into display rows.
//!
//! The wrapper consumes word spans from [`crate::words`] and fills rows up
//! to a column budget. A word and the separator that terminates it move as
//! one unit, so a soft-wrapped separator stays on the row of the word it
//! closes. Words wider than the budget fall back to character-boundary
//! splitting. Newlines force a hard break and belong to the row they end.

use crate::chars::Char;
use crate::glyphs::hex_label;
use crate::words::word_spans;
use std::ops::Range;
use unicode_width::UnicodeWidthChar;

/// One wrapped display row: an index range into the input sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineSpan {
    pub start: usize,
    pub end: usize,
    /// Total display columns of the row's characters.
    pub width: usize,
    /// True when the row was ended by a newline character.
    pub hard_break: bool,
}

impl LineSpan {
    /// The row's character range.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Display columns one character occupies in rendered output.
///
/// Printable characters use their Unicode display width; tab, newline, and
/// space each render as a single substitution glyph; other control
/// characters render as their `U+xxxx` label.
#[must_use]
pub fn char_width(c: Char) -> usize {
    if c.is_printable() {
        UnicodeWidthChar::width(c.code_point).unwrap_or(0)
    } else if c.is_separator() {
        1
    } else {
        hex_label(c.code_point).len()
    }
}

/// Wrap `chars` into rows of at most `max_cols` display columns.
///
/// `max_cols == 0` disables soft wrapping; only newlines break rows. The
/// returned spans tile the input exactly: every index appears in exactly one
/// span, in order. Empty input produces no spans. A row exceeds the budget
/// only when a single unit is wider than the budget.
#[must_use]
pub fn wrap(chars: &[Char], max_cols: usize) -> Vec<LineSpan> {
    let mut lines = Vec::new();
    let mut start = 0usize;
    let mut width = 0usize;

    for seg in word_spans(chars) {
        // A segment is one word plus the separator glyph that closes it.
        let seg_end = seg.terminator.map_or(seg.end, |i| i + 1);
        let seg_width: usize = (seg.start..seg_end).map(|i| char_width(chars[i])).sum();

        let fits = max_cols == 0 || width + seg_width <= max_cols;
        if !fits && width > 0 && seg_width <= max_cols {
            lines.push(LineSpan {
                start,
                end: seg.start,
                width,
                hard_break: false,
            });
            start = seg.start;
            width = 0;
        }

        if max_cols == 0 || seg_width <= max_cols {
            width += seg_width;
        } else {
            // Oversized segment: fill character by character.
            for i in seg.start..seg_end {
                let w = char_width(chars[i]);
                if width > 0 && width + w > max_cols {
                    lines.push(LineSpan {
                        start,
                        end: i,
                        width,
                        hard_break: false,
                    });
                    start = i;
                    width = 0;
                }
                width += w;
            }
        }

        if seg.terminator.map(|i| chars[i].code_point) == Some('\n') {
            lines.push(LineSpan {
                start,
                end: seg_end,
                width,
                hard_break: true,
            });
            start = seg_end;
            width = 0;
        }
    }

    if start < chars.len() {
        lines.push(LineSpan {
            start,
            end: chars.len(),
            width,
            hard_break: false,
        });
    }
    lines
}
