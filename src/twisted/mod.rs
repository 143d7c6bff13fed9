//! This module implements the twisted-balanced-binary fixed-width
//! signed types.  Each type reserves the most negative bit pattern of
//! its storage as an error word, leaving a symmetric range of valid
//! values; arithmetic substitutes the error word for any result it
//! cannot represent and propagates it through further operations.

pub mod error;
pub mod scalar;

/// The sign of a valid value.  The error word has no sign, which is
/// why [`TwistedWord::signum`] returns an `Option`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sign {
    Negative = -1,
    Zero = 0,
    Positive = 1,
}

/// Trait common to all of the twisted-balanced-binary types defined
/// in the [`scalar`] module.
pub trait TwistedWord {
    /// True if this value is the reserved error word.
    fn is_error(&self) -> bool;

    /// True for every representable value other than the error word.
    fn is_valid(&self) -> bool {
        !self.is_error()
    }

    /// The sign of a valid value; `None` for the error word.
    fn signum(&self) -> Option<Sign>;
}
