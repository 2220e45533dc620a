//! Property-based tests for word splitting, run compaction, and layout.
//!
//! Uses proptest to verify the structural laws of the display pipeline:
//! content preservation, non-printable isolation, non-empty runs, and
//! layout tiling.

use keydrill::chars::{Attrs, Char, is_printable};
use keydrill::glyphs::{
    NEWLINE_GLYPH, SPACE_BAR_GLYPH, SPACE_BULLET_GLYPH, SPACE_GLYPH, TAB_GLYPH,
};
use keydrill::layout::{LineSpan, char_width, wrap};
use keydrill::runs::{RenderUnit, render_units};
use keydrill::settings::{TextDisplaySettings, WhitespaceStyle};
use keydrill::words::{split_words, word_spans};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn attrs_strategy() -> impl Strategy<Value = Attrs> {
    prop::sample::select(vec![
        Attrs::Normal,
        Attrs::Hit,
        Attrs::Miss,
        Attrs::Garbage,
        Attrs::Cursor,
    ])
}

/// Code points weighted toward the interesting boundary: separators, other
/// control characters, ASCII text, and some wider printables.
fn code_point_strategy() -> impl Strategy<Value = char> {
    prop_oneof![
        3 => prop::sample::select(vec![' ', '\t', '\n']),
        1 => prop::sample::select(vec!['\u{01}', '\u{02}', '\u{1f}', '\r', '\u{0b}']),
        5 => prop::char::range('!', '~'),
        1 => prop::char::range('\u{a1}', '\u{2ff}'),
        1 => prop::char::range('\u{4e00}', '\u{4eff}'),
    ]
}

fn char_strategy() -> impl Strategy<Value = Char> {
    (code_point_strategy(), attrs_strategy()).prop_map(|(c, a)| Char::new(c, a))
}

fn chars_strategy() -> impl Strategy<Value = Vec<Char>> {
    prop::collection::vec(char_strategy(), 0..64)
}

fn settings_strategy() -> impl Strategy<Value = TextDisplaySettings> {
    prop::sample::select(vec![
        WhitespaceStyle::Space,
        WhitespaceStyle::Bar,
        WhitespaceStyle::Bullet,
    ])
    .prop_map(|style| TextDisplaySettings::default().with_whitespace_style(style))
}

// ============================================================================
// Word splitter properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Interleaving words with their consumed separators reproduces the
    /// input up to separators that closed no word.
    #[test]
    fn words_preserve_content(chars in chars_strategy()) {
        let words = split_words(&chars);
        let flattened: Vec<Char> = words
            .iter()
            .flat_map(|w| w.chars.iter().copied())
            .collect();
        let expected: Vec<Char> = chars
            .iter()
            .copied()
            .filter(|c| !c.is_separator())
            .collect();
        prop_assert_eq!(flattened, expected);
    }

    /// No word is empty, and no word contains a separator.
    #[test]
    fn words_are_nonempty_and_separator_free(chars in chars_strategy()) {
        for word in split_words(&chars) {
            prop_assert!(!word.chars.is_empty());
            prop_assert!(word.chars.iter().all(|c| !c.is_separator()));
            if let Some(term) = word.terminator {
                prop_assert!(term.is_separator());
            }
        }
    }

    /// Spans plus their terminators tile the input exactly, in order.
    #[test]
    fn word_spans_tile_input(chars in chars_strategy()) {
        let mut covered = Vec::new();
        for span in word_spans(&chars) {
            covered.extend(span.range());
            covered.extend(span.terminator);
        }
        prop_assert_eq!(covered, (0..chars.len()).collect::<Vec<_>>());
    }

    /// All-whitespace input yields no words.
    #[test]
    fn all_whitespace_yields_no_words(
        seps in prop::collection::vec(
            prop::sample::select(vec![' ', '\t', '\n']), 0..32),
        attrs in attrs_strategy(),
    ) {
        let chars: Vec<Char> = seps.iter().map(|&c| Char::new(c, attrs)).collect();
        prop_assert!(split_words(&chars).is_empty());
    }
}

// ============================================================================
// Run renderer properties
// ============================================================================

/// Reconstruct the input code points a unit accounts for.
fn unit_source_count(unit: &RenderUnit) -> usize {
    match unit {
        RenderUnit::Run { text, .. } => text.chars().count(),
        RenderUnit::Glyph { .. } | RenderUnit::Escape { .. } => 1,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// One visual unit per semantic unit: unit source counts sum to the
    /// input length, and run text reproduces the printable characters.
    #[test]
    fn units_are_count_faithful(
        settings in settings_strategy(),
        chars in chars_strategy(),
    ) {
        let units = render_units(settings, &chars);
        let total: usize = units.iter().map(unit_source_count).sum();
        prop_assert_eq!(total, chars.len());

        let run_text: String = units
            .iter()
            .filter_map(|u| match u {
                RenderUnit::Run { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        let printable: String = chars
            .iter()
            .filter(|c| c.is_printable())
            .map(|c| c.code_point)
            .collect();
        prop_assert_eq!(run_text, printable);
    }

    /// No run unit is empty, and every run holds only printable characters
    /// of one annotation.
    #[test]
    fn runs_are_nonempty_and_uniform(
        settings in settings_strategy(),
        chars in chars_strategy(),
    ) {
        for unit in render_units(settings, &chars) {
            if let RenderUnit::Run { text, .. } = &unit {
                prop_assert!(!text.is_empty());
                prop_assert!(text.chars().all(is_printable));
            }
        }
    }

    /// Adjacent runs never share an annotation: they would have merged.
    #[test]
    fn adjacent_runs_have_distinct_attrs(
        settings in settings_strategy(),
        chars in chars_strategy(),
    ) {
        let units = render_units(settings, &chars);
        for pair in units.windows(2) {
            if let (RenderUnit::Run { attrs: a, .. }, RenderUnit::Run { attrs: b, .. }) =
                (&pair[0], &pair[1])
            {
                prop_assert_ne!(a, b);
            }
        }
    }

    /// Every non-printable input character appears as its own standalone
    /// unit, never merged into a run.
    #[test]
    fn non_printables_are_isolated(
        settings in settings_strategy(),
        chars in chars_strategy(),
    ) {
        let units = render_units(settings, &chars);
        let standalone = units
            .iter()
            .filter(|u| !matches!(u, RenderUnit::Run { .. }))
            .count();
        let non_printable = chars.iter().filter(|c| !c.is_printable()).count();
        prop_assert_eq!(standalone, non_printable);
    }

    /// Separators map to the configured substitution glyphs.
    #[test]
    fn separator_glyphs_match_settings(
        settings in settings_strategy(),
        chars in chars_strategy(),
    ) {
        let expected_space = match settings.whitespace_style {
            WhitespaceStyle::Space => SPACE_GLYPH,
            WhitespaceStyle::Bar => SPACE_BAR_GLYPH,
            WhitespaceStyle::Bullet => SPACE_BULLET_GLYPH,
        };
        let glyphs: Vec<char> = render_units(settings, &chars)
            .iter()
            .filter_map(|u| match u {
                RenderUnit::Glyph { glyph, .. } => Some(*glyph),
                _ => None,
            })
            .collect();
        let expected: Vec<char> = chars
            .iter()
            .filter_map(|c| match c.code_point {
                '\t' => Some(TAB_GLYPH),
                '\n' => Some(NEWLINE_GLYPH),
                ' ' => Some(expected_space),
                _ => None,
            })
            .collect();
        prop_assert_eq!(glyphs, expected);
    }

    /// Unit order preserves input order: attrs read left to right match.
    #[test]
    fn units_preserve_order(
        settings in settings_strategy(),
        chars in chars_strategy(),
    ) {
        let unit_attrs: Vec<Attrs> = render_units(settings, &chars)
            .iter()
            .flat_map(|u| std::iter::repeat_n(u.attrs(), unit_source_count(u)))
            .collect();
        let input_attrs: Vec<Attrs> = chars.iter().map(|c| c.attrs).collect();
        prop_assert_eq!(unit_attrs, input_attrs);
    }
}

// ============================================================================
// Layout properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Line spans tile the input exactly.
    #[test]
    fn layout_tiles_input(chars in chars_strategy(), cols in 0usize..20) {
        let lines = wrap(&chars, cols);
        let covered: Vec<usize> = lines.iter().flat_map(LineSpan::range).collect();
        prop_assert_eq!(covered, (0..chars.len()).collect::<Vec<_>>());
    }

    /// Recorded widths match the sum of character widths.
    #[test]
    fn layout_widths_are_consistent(chars in chars_strategy(), cols in 0usize..20) {
        for line in wrap(&chars, cols) {
            let width: usize = chars[line.range()].iter().map(|&c| char_width(c)).sum();
            prop_assert_eq!(line.width, width);
        }
    }

    /// A row exceeds the budget only when some single unit in it is wider
    /// than the budget.
    #[test]
    fn layout_respects_budget(chars in chars_strategy(), cols in 1usize..20) {
        for line in wrap(&chars, cols) {
            if line.width > cols {
                let oversized = chars[line.range()]
                    .iter()
                    .any(|&c| char_width(c) > cols);
                prop_assert!(oversized, "row of width {} over budget {}", line.width, cols);
            }
        }
    }

    /// Hard breaks happen exactly at newlines, which end their own row.
    #[test]
    fn layout_hard_breaks_at_newlines(chars in chars_strategy(), cols in 0usize..20) {
        for line in wrap(&chars, cols) {
            if line.hard_break {
                prop_assert_eq!(chars[line.end - 1].code_point, '\n');
            } else {
                prop_assert!(
                    chars[line.range()].iter().all(|c| c.code_point != '\n')
                );
            }
        }
    }

    /// No line span is empty.
    #[test]
    fn layout_spans_are_nonempty(chars in chars_strategy(), cols in 0usize..20) {
        for line in wrap(&chars, cols) {
            prop_assert!(line.start < line.end);
        }
    }
}
