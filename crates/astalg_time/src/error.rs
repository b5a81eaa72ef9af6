//! Error types for date parsing and clock access.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the fallible edges of the time crate.
///
/// The conversions themselves never fail; only text input and the
/// system clock can.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date string did not match `YYYY-MM-DD[Thh:mm[:ss]][Z]`.
    InvalidFormat(String),
    /// A numeric field could not be parsed.
    InvalidField { field: &'static str, value: String },
    /// System clock reads earlier than the Unix epoch.
    Clock(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(input) => {
                write!(f, "invalid date '{input}', expected YYYY-MM-DDThh:mm:ssZ")
            }
            Self::InvalidField { field, value } => write!(f, "invalid {field}: '{value}'"),
            Self::Clock(msg) => write!(f, "system clock error: {msg}"),
        }
    }
}

impl Error for TimeError {}

impl From<std::time::SystemTimeError> for TimeError {
    fn from(e: std::time::SystemTimeError) -> Self {
        Self::Clock(e.to_string())
    }
}
