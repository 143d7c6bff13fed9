//! Basic error reporting.

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

/// Represents a failure to convert to or from one of the
/// twisted-balanced-binary types defined in this crate.
///
/// Arithmetic never produces this type; failed arithmetic yields the
/// error word of the result type instead.  Conversions are the one
/// boundary where an explicit indication is available, so that a
/// caller obtaining a native integer can never mistake the error word
/// for a number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConversionFailed {
    TooLarge,
    TooSmall,
    /// The source value was the reserved error word.
    ErrorValue,
}

impl Error for ConversionFailed {}

impl Display for ConversionFailed {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            ConversionFailed::TooLarge => f.write_str("value is too large"),
            ConversionFailed::TooSmall => f.write_str("value is too small"),
            ConversionFailed::ErrorValue => f.write_str("value is the reserved error word"),
        }
    }
}
