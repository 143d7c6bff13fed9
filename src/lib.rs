//! The `tbb` crate defines the twisted-balanced-binary integer
//! family: fixed-width signed types whose most negative bit pattern
//! is permanently reserved as an error word.  The remaining range is
//! symmetric, so negation never overflows, and every arithmetic
//! operation is total: a result the width cannot hold, a division by
//! zero, or an operand that was already the error word all yield the
//! error word, which then propagates through any further arithmetic.
//! The idea is that an embedding language maps its operators onto
//! these types and checks for the error word once, at the end of an
//! expression, instead of after every step.

mod twisted;

pub mod prelude;
pub use crate::twisted::error::ConversionFailed;
pub use crate::twisted::scalar::*;
pub use crate::twisted::{Sign, TwistedWord};

#[macro_export]
macro_rules! t8 {
    ($n:expr) => {
        $crate::prelude::Twisted8Bit::new::<{ $n }>()
    };
}

#[macro_export]
macro_rules! t16 {
    ($n:expr) => {
        $crate::prelude::Twisted16Bit::new::<{ $n }>()
    };
}

#[macro_export]
macro_rules! t32 {
    ($n:expr) => {
        $crate::prelude::Twisted32Bit::new::<{ $n }>()
    };
}

#[macro_export]
macro_rules! t64 {
    ($n:expr) => {
        $crate::prelude::Twisted64Bit::new::<{ $n }>()
    };
}

#[test]
fn test_t8() {
    use prelude::Twisted8Bit;
    let m: Twisted8Bit = t8!(40_i8);
    let n: Twisted8Bit = Twisted8Bit::try_from(40_i8).expect("test data should be in range");
    assert_eq!(m, n);

    let p: Twisted8Bit = t8!(-127_i8);
    assert_eq!(p, Twisted8Bit::MIN);
}

#[test]
fn test_t64() {
    use prelude::Twisted64Bit;
    let p: Twisted64Bit = t64!(1_i64 << 60);
    let q: Twisted64Bit =
        Twisted64Bit::try_from(1_i64 << 60).expect("test data should be in range");
    assert_eq!(p, q);
}
