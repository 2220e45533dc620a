//! Word splitting at whitespace boundaries.
//!
//! Partitions a flat annotated-character sequence into words for the
//! line-wrapping layer. Tab, newline, and space close the pending word and
//! are consumed as separators; they never appear inside a word's character
//! sequence, but the separator that closed a word is retained as that word's
//! terminator so layout can account for its glyph width.

use crate::chars::Char;
use std::ops::Range;

/// A maximal run of characters between whitespace separators.
///
/// `chars` is never empty. `terminator` is the separator that closed this
/// word, or `None` for a final word at end of input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    pub chars: Vec<Char>,
    pub terminator: Option<Char>,
}

/// Borrowed equivalent of [`Word`]: an index range into the input slice.
///
/// Unlike [`split_words`], the span iterator also yields empty-range spans
/// for separators that closed no word (leading or consecutive whitespace),
/// so that spans plus terminators tile the input exactly. Consumers wanting
/// the word-splitter contract skip spans with an empty range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordSpan {
    /// Indexes of the word's characters (terminator excluded).
    pub start: usize,
    pub end: usize,
    /// Index of the separator that closed this span, if any.
    pub terminator: Option<usize>,
}

impl WordSpan {
    /// The word's character range (terminator excluded).
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of characters in the word (terminator excluded).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// True when this span carries only a separator.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Split an annotated-character sequence into words.
///
/// Left-to-right scan: a separator closes the pending word (if non-empty)
/// and becomes its terminator; at end of input any pending characters flush
/// as a final, unterminated word. Leading, trailing, and consecutive
/// separators produce no empty words. Total over any input.
#[must_use]
pub fn split_words(chars: &[Char]) -> Vec<Word> {
    word_spans(chars)
        .filter(|span| !span.is_empty())
        .map(|span| Word {
            chars: chars[span.range()].to_vec(),
            terminator: span.terminator.map(|i| chars[i]),
        })
        .collect()
}

/// Iterate word spans over `chars`, including separator-only spans.
///
/// Every input index appears in exactly one span (as a word character or a
/// terminator), in order.
pub fn word_spans(chars: &[Char]) -> WordSpans<'_> {
    WordSpans { chars, pos: 0 }
}

/// Iterator returned by [`word_spans`].
#[derive(Clone, Debug)]
pub struct WordSpans<'a> {
    chars: &'a [Char],
    pos: usize,
}

impl Iterator for WordSpans<'_> {
    type Item = WordSpan;

    fn next(&mut self) -> Option<WordSpan> {
        if self.pos >= self.chars.len() {
            return None;
        }
        let start = self.pos;
        let mut end = start;
        while end < self.chars.len() && !self.chars[end].is_separator() {
            end += 1;
        }
        let terminator = (end < self.chars.len()).then_some(end);
        self.pos = if terminator.is_some() { end + 1 } else { end };
        Some(WordSpan {
            start,
            end,
            terminator,
        })
    }
}
