//! Display settings supplied by the host application.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Which glyph stands in for a literal space in rendered output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WhitespaceStyle {
    /// Plain non-breaking space; spaces are invisible.
    #[default]
    Space,
    /// Low bar marker at every space.
    Bar,
    /// Bullet marker at every space.
    Bullet,
}

impl WhitespaceStyle {
    /// All recognized styles, in configuration order.
    pub const ALL: [Self; 3] = [Self::Space, Self::Bar, Self::Bullet];

    /// The configuration name of this style.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Space => "space",
            Self::Bar => "bar",
            Self::Bullet => "bullet",
        }
    }
}

impl fmt::Display for WhitespaceStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WhitespaceStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "space" => Ok(Self::Space),
            "bar" => Ok(Self::Bar),
            "bullet" => Ok(Self::Bullet),
            _ => Err(Error::InvalidSetting {
                name: "whitespace_style",
                value: s.to_string(),
            }),
        }
    }
}

/// Settings for the text display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextDisplaySettings {
    pub whitespace_style: WhitespaceStyle,
}

impl TextDisplaySettings {
    /// Builder-style whitespace style setter.
    #[must_use]
    pub const fn with_whitespace_style(mut self, style: WhitespaceStyle) -> Self {
        self.whitespace_style = style;
        self
    }
}
