//! `keydrill` - typing-trainer text display engine
//!
//! Renders a block of practice text with per-keystroke feedback styling.
//! Annotated characters from a typing tracker are compacted into minimal
//! styled runs, whitespace is swapped for visible substitution glyphs,
//! rows are word-wrapped to a column budget, and output is emitted as
//! plain or SGR-styled text. Focus changes are reported to the host
//! through a callback registry.

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Intentional color math casts
#![allow(clippy::missing_errors_doc)] // Error conditions documented on Error
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine

pub mod ansi;
pub mod chars;
pub mod color;
pub mod display;
pub mod error;
pub mod event;
pub mod glyphs;
pub mod layout;
pub mod runs;
pub mod settings;
pub mod style;
pub mod theme;
pub mod words;

// Re-export core types at crate root
pub use ansi::ColorMode;
pub use chars::{Attrs, Char, annotate};
pub use color::Rgba;
pub use display::TextDisplay;
pub use error::{Error, Result};
pub use event::{LogLevel, emit_event, emit_log, set_event_callback, set_log_callback};
pub use layout::{LineSpan, wrap};
pub use runs::{RenderUnit, render_units};
pub use settings::{TextDisplaySettings, WhitespaceStyle};
pub use style::{Style, TextAttributes};
pub use theme::Theme;
pub use words::{Word, WordSpan, split_words, word_spans};
