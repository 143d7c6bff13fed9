//! The prelude exports the scalar types, the conversion error and
//! the literal macros.  Providing this prelude is the main purpose of
//! the crate.
pub use super::twisted::error::*;
pub use super::twisted::scalar::*;
pub use super::twisted::{Sign, TwistedWord};
pub use super::{t16, t32, t64, t8};
