//! Error types for keydrill.

use std::fmt;
use std::io;

/// Result type alias for keydrill operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for keydrill operations.
///
/// The core algorithms are total and never fail; errors arise only at the
/// edges, when parsing settings from configuration strings or writing
/// rendered output.
#[derive(Debug)]
pub enum Error {
    /// I/O error while writing rendered output.
    Io(io::Error),
    /// A setting string did not name a recognized value.
    InvalidSetting {
        name: &'static str,
        value: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidSetting { name, value } => {
                write!(f, "invalid value for {name}: {value:?}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidSetting { .. } => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
