//! Crate-level error types.

use std::fmt;

/// Errors produced by the limn crate.
///
/// The runtime core is infallible: guard failures (wrong mode, distance
/// gate, already in target state) are silent no-ops. Errors only arise
/// from the options preset I/O surface.
#[derive(Debug)]
pub enum LimnError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for LimnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for LimnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for LimnError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
