//! Run compaction: annotated characters to minimal render units.
//!
//! Consecutive printable characters sharing one annotation collapse into a
//! single [`RenderUnit::Run`]; tab, newline, and space each become a
//! standalone substitution-glyph unit; any other control character becomes a
//! standalone `U+xxxx` escape label. Output order is input order.

use crate::chars::{Attrs, Char};
use crate::glyphs::{NEWLINE_GLYPH, TAB_GLYPH, hex_label, whitespace_glyph};
use crate::settings::TextDisplaySettings;

/// One visual unit of the rendered text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderUnit {
    /// A maximal run of printable characters with one annotation.
    /// `text` is never empty.
    Run { text: String, attrs: Attrs },
    /// A single substitution glyph standing in for tab, newline, or space.
    Glyph { glyph: char, attrs: Attrs },
    /// A `U+xxxx` label for a control character outside the glyph set.
    Escape { label: String, attrs: Attrs },
}

impl RenderUnit {
    /// The annotation carried by this unit.
    #[must_use]
    pub const fn attrs(&self) -> Attrs {
        match self {
            Self::Run { attrs, .. } | Self::Glyph { attrs, .. } | Self::Escape { attrs, .. } => {
                *attrs
            }
        }
    }
}

/// A run under construction. `None` in the accumulator means no run is open;
/// there is no sentinel attrs value.
struct OpenRun {
    text: String,
    attrs: Attrs,
}

impl OpenRun {
    fn close_into(self, units: &mut Vec<RenderUnit>) {
        debug_assert!(!self.text.is_empty());
        units.push(RenderUnit::Run {
            text: self.text,
            attrs: self.attrs,
        });
    }
}

/// Compact a character sequence into render units.
///
/// A run boundary is forced both by an attrs change and by any non-printable
/// character, even when attrs is unchanged: non-printables are never merged
/// into a run and never merged with each other. Total over any input; empty
/// input produces empty output.
#[must_use]
pub fn render_units(settings: TextDisplaySettings, chars: &[Char]) -> Vec<RenderUnit> {
    let mut units = Vec::new();
    let mut open: Option<OpenRun> = None;

    for &Char { code_point, attrs } in chars {
        if crate::chars::is_printable(code_point) {
            match &mut open {
                Some(run) if run.attrs == attrs => run.text.push(code_point),
                _ => {
                    if let Some(run) = open.take() {
                        run.close_into(&mut units);
                    }
                    let mut text = String::new();
                    text.push(code_point);
                    open = Some(OpenRun { text, attrs });
                }
            }
            continue;
        }

        if let Some(run) = open.take() {
            run.close_into(&mut units);
        }
        units.push(match code_point {
            '\t' => RenderUnit::Glyph {
                glyph: TAB_GLYPH,
                attrs,
            },
            '\n' => RenderUnit::Glyph {
                glyph: NEWLINE_GLYPH,
                attrs,
            },
            ' ' => RenderUnit::Glyph {
                glyph: whitespace_glyph(settings.whitespace_style),
                attrs,
            },
            c => RenderUnit::Escape {
                label: hex_label(c),
                attrs,
            },
        });
    }

    if let Some(run) = open.take() {
        run.close_into(&mut units);
    }
    units
}
