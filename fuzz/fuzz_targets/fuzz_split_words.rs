//! Fuzz target for the word splitter.
//!
//! Checks totality plus the content-preservation law on arbitrary input.

#![no_main]

use arbitrary::Arbitrary;
use keydrill::chars::{Attrs, Char};
use keydrill::words::{split_words, word_spans};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
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
    let chars: Vec<Char> = input
        .chars
        .iter()
        .map(|&(c, tag)| Char::new(c, attrs_from(tag)))
        .collect();

    let words = split_words(&chars);
    let flattened: Vec<Char> = words.iter().flat_map(|w| w.chars.iter().copied()).collect();
    let expected: Vec<Char> = chars
        .iter()
        .copied()
        .filter(|c| !c.is_separator())
        .collect();
    assert_eq!(flattened, expected);

    let mut covered = 0;
    for span in word_spans(&chars) {
        covered += span.len() + usize::from(span.terminator.is_some());
    }
    assert_eq!(covered, chars.len());
});
