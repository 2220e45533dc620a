//! The text display: wrapped, styled practice text plus host integration.
//!
//! A [`TextDisplay`] owns the display settings, theme, the annotated
//! characters supplied by the host's typing tracker, and the focus state.
//! Focus changes are reported to the host through the global event
//! callbacks; overlay messages (focus prompt, caps-lock warning) are plain
//! string constants.

use crate::ansi::{self, ColorMode};
use crate::chars::Char;
use crate::event::{LogLevel, emit_event, emit_log};
use crate::glyphs::visible_glyph;
use crate::layout::wrap;
use crate::runs::{RenderUnit, render_units};
use crate::settings::TextDisplaySettings;
use crate::style::Style;
use crate::theme::Theme;
use std::io::Write;

/// Prompt shown while the display is not focused.
pub const FOCUS_MESSAGE: &str = "Click or press Enter to activate...";
/// Warning shown while focused with caps lock engaged.
pub const CAPS_LOCK_MESSAGE: &str = "Caps Lock is on";

/// A block of practice text with feedback styling and focus state.
#[derive(Clone, Debug)]
pub struct TextDisplay {
    settings: TextDisplaySettings,
    theme: Theme,
    chars: Vec<Char>,
    focused: bool,
    caps_lock: bool,
}

impl TextDisplay {
    /// Create an empty display.
    #[must_use]
    pub fn new(settings: TextDisplaySettings, theme: Theme) -> Self {
        Self {
            settings,
            theme,
            chars: Vec::new(),
            focused: false,
            caps_lock: false,
        }
    }

    /// Replace the practice text with a new tracker snapshot.
    pub fn set_chars(&mut self, chars: Vec<Char>) {
        self.chars = chars;
    }

    /// The current annotated characters.
    #[must_use]
    pub fn chars(&self) -> &[Char] {
        &self.chars
    }

    /// The display settings.
    #[must_use]
    pub const fn settings(&self) -> TextDisplaySettings {
        self.settings
    }

    /// The active theme.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Whether the display currently has focus.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Give the display focus. Emits a `"focus"` event on the transition;
    /// focusing an already-focused display is a no-op.
    pub fn focus(&mut self) {
        if !self.focused {
            self.focused = true;
            emit_event("focus", "");
        }
    }

    /// Remove focus. Emits a `"blur"` event on the transition.
    pub fn blur(&mut self) {
        if self.focused {
            self.focused = false;
            emit_event("blur", "");
        }
    }

    /// Record the caps-lock modifier state supplied by the host.
    pub fn set_caps_lock(&mut self, on: bool) {
        self.caps_lock = on;
    }

    /// The overlay message to show, if any.
    ///
    /// Caps-lock warning while focused with caps lock on; focus prompt while
    /// unfocused; nothing otherwise.
    #[must_use]
    pub const fn message(&self) -> Option<&'static str> {
        if self.focused {
            if self.caps_lock {
                Some(CAPS_LOCK_MESSAGE)
            } else {
                None
            }
        } else {
            Some(FOCUS_MESSAGE)
        }
    }

    /// Render wrapped rows of visible characters without escape sequences.
    ///
    /// Substitution glyphs map through [`visible_glyph`]; escape labels
    /// render as their `U+xxxx` text.
    #[must_use]
    pub fn render_plain(&self, max_cols: usize) -> Vec<String> {
        wrap(&self.chars, max_cols)
            .iter()
            .map(|line| {
                let mut row = String::new();
                for unit in render_units(self.settings, &self.chars[line.range()]) {
                    push_visible(&mut row, &unit);
                }
                row
            })
            .collect()
    }

    /// Render wrapped rows with SGR styling. Every row ends in a reset.
    #[must_use]
    pub fn render_ansi(&self, max_cols: usize, mode: ColorMode) -> Vec<String> {
        let lines = wrap(&self.chars, max_cols);
        let rows: Vec<String> = lines
            .iter()
            .map(|line| {
                let mut row = String::new();
                let mut open_style = Style::NONE;
                for unit in render_units(self.settings, &self.chars[line.range()]) {
                    let style = self.theme.style_for_unit(&unit);
                    if style != open_style {
                        if !open_style.is_empty() {
                            row.push_str(ansi::RESET);
                        }
                        ansi::push_style(&mut row, style, mode);
                        open_style = style;
                    }
                    push_visible(&mut row, &unit);
                }
                row.push_str(ansi::RESET);
                row
            })
            .collect();
        emit_log(
            LogLevel::Debug,
            &format!("render: {} rows at {} cols", rows.len(), max_cols),
        );
        rows
    }

    /// Stream the styled rows plus the overlay message line to a writer.
    pub fn write_to(
        &self,
        writer: &mut impl Write,
        max_cols: usize,
        mode: ColorMode,
    ) -> crate::error::Result<()> {
        for row in self.render_ansi(max_cols, mode) {
            writer.write_all(row.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        if let Some(message) = self.message() {
            let style = self.theme.style_for(crate::chars::Attrs::Normal).merge(Style::dim());
            let mut line = ansi::style_sgr(style, mode);
            line.push_str(message);
            line.push_str(ansi::RESET);
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        Ok(())
    }
}

impl Default for TextDisplay {
    fn default() -> Self {
        Self::new(TextDisplaySettings::default(), Theme::default())
    }
}

/// Append a render unit's visible text to a row.
fn push_visible(row: &mut String, unit: &RenderUnit) {
    match unit {
        RenderUnit::Run { text, .. } => row.push_str(text),
        RenderUnit::Glyph { glyph, .. } => row.push(visible_glyph(*glyph)),
        RenderUnit::Escape { label, .. } => row.push_str(label),
    }
}
