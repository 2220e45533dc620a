//! Fuzz target for run compaction.
//!
//! Checks totality, the one-visual-unit-per-character law, and that no
//! empty run is ever produced.

#![no_main]

use arbitrary::Arbitrary;
use keydrill::chars::{Attrs, Char};
use keydrill::runs::{RenderUnit, render_units};
use keydrill::settings::{TextDisplaySettings, WhitespaceStyle};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    style: u8,
    chars: Vec<(char, u8)>,
}

fn attrs_from(tag: u8) -> Attrs {
    match tag % 5 {
        0 => Attrs::Normal,
        1 => Attrs::Hit,
        2 => Attrs::Miss,
        3 => Attrs::Garbage,
        _ => Attrs::Cursor,
    }
}

fuzz_target!(|input: Input| {
    let style = match input.style % 3 {
        0 => WhitespaceStyle::Space,
        1 => WhitespaceStyle::Bar,
        _ => WhitespaceStyle::Bullet,
    };
    let settings = TextDisplaySettings::default().with_whitespace_style(style);
    let chars: Vec<Char> = input
        .chars
        .iter()
        .map(|&(c, tag)| Char::new(c, attrs_from(tag)))
        .collect();

    let units = render_units(settings, &chars);

    let mut total = 0;
    for unit in &units {
        match unit {
            RenderUnit::Run { text, .. } => {
                assert!(!text.is_empty());
                total += text.chars().count();
            }
            RenderUnit::Glyph { .. } | RenderUnit::Escape { .. } => total += 1,
        }
    }
    assert_eq!(total, chars.len());
});
