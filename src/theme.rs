//! Themes mapping feedback annotations to terminal styles.
//!
//! The lookup is an exhaustive `match` over [`Attrs`], so adding a feedback
//! variant fails to compile until every theme call site handles it.

use crate::chars::Attrs;
use crate::color::Rgba;
use crate::runs::RenderUnit;
use crate::style::Style;

/// Styles for each feedback annotation plus the substitution-glyph overlay.
#[derive(Clone, Debug)]
pub struct Theme {
    name: String,
    normal: Style,
    hit: Style,
    miss: Style,
    garbage: Style,
    cursor: Style,
    /// Overlay merged onto the annotation style for substitution glyphs.
    special: Style,
    background: Rgba,
}

impl Theme {
    /// Create an unstyled theme. Every annotation renders with the terminal
    /// default style until set.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            normal: Style::NONE,
            hit: Style::NONE,
            miss: Style::NONE,
            garbage: Style::NONE,
            cursor: Style::inverse(),
            special: Style::dim(),
            background: Rgba::BLACK,
        }
    }

    /// Dark-terminal palette.
    #[must_use]
    pub fn dark() -> Self {
        Self::new("dark")
            .with_style(Attrs::Normal, Style::fg(Rgba::from_rgb_u8(148, 148, 148)))
            .with_style(Attrs::Hit, Style::fg(Rgba::from_rgb_u8(230, 230, 230)))
            .with_style(
                Attrs::Miss,
                Style::fg(Rgba::from_rgb_u8(255, 92, 92)).with_underline(),
            )
            .with_style(
                Attrs::Garbage,
                Style::fg(Rgba::from_rgb_u8(255, 92, 92)).with_strikethrough(),
            )
            .with_style(
                Attrs::Cursor,
                Style::fg(Rgba::BLACK).with_bg(Rgba::from_rgb_u8(230, 230, 230)),
            )
            .with_background(Rgba::from_rgb_u8(24, 24, 24))
    }

    /// Light-terminal palette.
    #[must_use]
    pub fn light() -> Self {
        Self::new("light")
            .with_style(Attrs::Normal, Style::fg(Rgba::from_rgb_u8(120, 120, 120)))
            .with_style(Attrs::Hit, Style::fg(Rgba::from_rgb_u8(32, 32, 32)))
            .with_style(
                Attrs::Miss,
                Style::fg(Rgba::from_rgb_u8(200, 32, 32)).with_underline(),
            )
            .with_style(
                Attrs::Garbage,
                Style::fg(Rgba::from_rgb_u8(200, 32, 32)).with_strikethrough(),
            )
            .with_style(
                Attrs::Cursor,
                Style::fg(Rgba::WHITE).with_bg(Rgba::from_rgb_u8(32, 32, 32)),
            )
            .with_background(Rgba::from_rgb_u8(250, 250, 250))
    }

    /// Theme name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Theme background color.
    #[must_use]
    pub const fn background(&self) -> Rgba {
        self.background
    }

    /// Style for a feedback annotation.
    #[must_use]
    pub const fn style_for(&self, attrs: Attrs) -> Style {
        match attrs {
            Attrs::Normal => self.normal,
            Attrs::Hit => self.hit,
            Attrs::Miss => self.miss,
            Attrs::Garbage => self.garbage,
            Attrs::Cursor => self.cursor,
        }
    }

    /// Style for one render unit.
    ///
    /// Substitution glyphs take the annotation style merged with the special
    /// overlay; runs and escape labels take the plain annotation style.
    #[must_use]
    pub fn style_for_unit(&self, unit: &RenderUnit) -> Style {
        match unit {
            RenderUnit::Run { attrs, .. } | RenderUnit::Escape { attrs, .. } => {
                self.style_for(*attrs)
            }
            RenderUnit::Glyph { attrs, .. } => self.style_for(*attrs).merge(self.special),
        }
    }

    /// Set the style for a feedback annotation.
    pub fn set_style(&mut self, attrs: Attrs, style: Style) -> &mut Self {
        match attrs {
            Attrs::Normal => self.normal = style,
            Attrs::Hit => self.hit = style,
            Attrs::Miss => self.miss = style,
            Attrs::Garbage => self.garbage = style,
            Attrs::Cursor => self.cursor = style,
        }
        self
    }

    /// Builder-style annotation style setter.
    #[must_use]
    pub fn with_style(mut self, attrs: Attrs, style: Style) -> Self {
        self.set_style(attrs, style);
        self
    }

    /// Builder-style substitution-glyph overlay setter.
    #[must_use]
    pub const fn with_special(mut self, style: Style) -> Self {
        self.special = style;
        self
    }

    /// Builder-style background setter.
    #[must_use]
    pub const fn with_background(mut self, color: Rgba) -> Self {
        self.background = color;
        self
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::TextAttributes;

    #[test]
    fn test_style_for_all_attrs() {
        let theme = Theme::dark();
        // Every variant resolves; the match is exhaustive by construction.
        for attrs in [
            Attrs::Normal,
            Attrs::Hit,
            Attrs::Miss,
            Attrs::Garbage,
            Attrs::Cursor,
        ] {
            let _ = theme.style_for(attrs);
        }
        assert!(
            theme
                .style_for(Attrs::Miss)
                .attributes
                .contains(TextAttributes::UNDERLINE)
        );
    }

    #[test]
    fn test_glyph_units_take_special_overlay() {
        let theme = Theme::dark();
        let glyph = RenderUnit::Glyph {
            glyph: crate::glyphs::TAB_GLYPH,
            attrs: Attrs::Normal,
        };
        let style = theme.style_for_unit(&glyph);
        assert!(style.attributes.contains(TextAttributes::DIM));
    }

    #[test]
    fn test_escape_units_skip_special_overlay() {
        let theme = Theme::dark();
        let escape = RenderUnit::Escape {
            label: "U+0001".to_string(),
            attrs: Attrs::Normal,
        };
        let style = theme.style_for_unit(&escape);
        assert!(!style.attributes.contains(TextAttributes::DIM));
        assert_eq!(style, theme.style_for(Attrs::Normal));
    }

    #[test]
    fn test_set_style_overrides() {
        let mut theme = Theme::new("custom");
        theme.set_style(Attrs::Hit, Style::fg(Rgba::GREEN));
        assert_eq!(theme.style_for(Attrs::Hit).fg, Some(Rgba::GREEN));
    }
}
