//! Twisted-balanced-binary scalar types of 8, 16, 32 and 64 bits.
//!
//! Each type stores an ordinary two's-complement integer of its
//! width, but the most negative bit pattern (`-2^(w-1)`) is reserved
//! as the error word, so the valid range is the symmetric
//! `[-(2^(w-1) - 1), 2^(w-1) - 1]`.  Reserving that one slot buys two
//! things: negation of a valid value can never overflow, and every
//! arithmetic operation becomes total, because any result that the
//! width cannot hold (overflow, underflow, division by zero, or an
//! operand that was already the error word) is reported as the error
//! word itself.  The error word sticks: once it enters an expression,
//! every value derived from it downstream is also the error word, so
//! a caller can chain arbitrarily long computations and check
//! [`is_error`](Twisted8Bit::is_error) once at the end.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use serde::Serialize;

use super::error::ConversionFailed;
use super::{Sign, TwistedWord};


// This macro implements conversions from native types to Twisted*Bit
// which are always possible because every value of the source type
// lies inside the destination's valid range (e.g. From<i8> for
// Twisted16Bit).
macro_rules! from_native_type_to_self {
    ($SelfT:ident, $($from:ty)*) => {
        $(
            impl From<$from> for $SelfT {
                fn from(n: $from) -> Self {
                    Self { bits: n.into() }
                }
            }
        )*
    }
}

// This macro implements conversions from native types to Twisted*Bit
// which may fail, either because the input does not fit the storage
// width or because it equals the reserved error word (which is below
// the smallest valid value, so it is reported as TooSmall).
macro_rules! try_from_native_type_to_self {
    ($SelfT:ident, $InnerT:ty, $($from:ty)*) => {
        $(
            impl TryFrom<$from> for $SelfT {
                type Error = ConversionFailed;
                fn try_from(n: $from) -> Result<$SelfT, ConversionFailed> {
                    match <$InnerT>::try_from(n) {
                        Err(_) if n > 0 => Err(ConversionFailed::TooLarge),
                        Err(_) => Err(ConversionFailed::TooSmall),
                        Ok(bits) if bits == <$InnerT>::MIN => Err(ConversionFailed::TooSmall),
                        Ok(bits) => Ok(Self { bits }),
                    }
                }
            }
        )*
    }
}

// This macro implements conversions from Twisted*Bit to native types.
// These are always TryFrom, never From, even for targets wide enough
// to hold every valid value: the error word must not be readable as a
// number, so extracting it fails with ErrorValue.
macro_rules! try_from_self_to_native_type {
    ($SelfT:ty, $($to:ty)*) => {
        $(
            impl TryFrom<$SelfT> for $to {
                type Error = ConversionFailed;
                fn try_from(n: $SelfT) -> Result<$to, ConversionFailed> {
                    if n.is_error() {
                        return Err(ConversionFailed::ErrorValue);
                    }
                    <$to>::try_from(n.bits).map_err(|_| {
                        if n.bits < 0 {
                            ConversionFailed::TooSmall
                        } else {
                            ConversionFailed::TooLarge
                        }
                    })
                }
            }
        )*
    }
}

// Widening between twisted types is lossless: a valid value keeps its
// numeric value and the error word becomes the wider error word.
macro_rules! widening_from_twisted_to_twisted {
    ($SelfT:ident, $($from:ty)*) => {
        $(
            impl From<$from> for $SelfT {
                fn from(n: $from) -> Self {
                    if n.is_error() {
                        Self::ERROR
                    } else {
                        Self { bits: n.bits.into() }
                    }
                }
            }
        )*
    }
}

// Narrowing between twisted types is validated.  The error word
// propagates to the narrower error word (propagation stays inside the
// family; explicit failures are reserved for the native-integer
// boundary).  A valid value outside the destination's range fails,
// including one that would collide with the destination's error word.
macro_rules! narrowing_from_twisted_to_twisted {
    ($SelfT:ident, $InnerT:ty, $($from:ty)*) => {
        $(
            impl TryFrom<$from> for $SelfT {
                type Error = ConversionFailed;
                fn try_from(n: $from) -> Result<$SelfT, ConversionFailed> {
                    if n.is_error() {
                        return Ok(Self::ERROR);
                    }
                    match <$InnerT>::try_from(n.bits) {
                        Ok(bits) if bits == <$InnerT>::MIN => Err(ConversionFailed::TooSmall),
                        Ok(bits) => Ok(Self { bits }),
                        Err(_) if n.bits < 0 => Err(ConversionFailed::TooSmall),
                        Err(_) => Err(ConversionFailed::TooLarge),
                    }
                }
            }
        )*
    }
}

/// This macro implements the base functionality of the twisted types.
/// `SelfT` is the name of the type being defined, `BITS` its width,
/// `InnerT` the native signed type which stores it, and `WideT` a
/// signed type wide enough to hold the exact result of any single
/// operation on two `InnerT` values, so that overflow detection never
/// itself wraps around.
macro_rules! twisted_impl {
    ($SelfT:ident, $BITS:expr, $InnerT:ty, $WideT:ty) => {
        impl $SelfT {
            /// Storage width in bits.
            pub const BITS: u32 = $BITS;

            /// The reserved error word.  Numerically it occupies the
            /// most negative bit pattern of the storage type, which
            /// is exactly the slot excluded from the valid range.
            pub const ERROR: Self = Self {
                bits: <$InnerT>::MIN,
            };

            /// The smallest valid value, `-(2^(w-1) - 1)`.
            pub const MIN: Self = Self {
                bits: <$InnerT>::MIN + 1,
            };

            /// The largest valid value, `2^(w-1) - 1`.
            pub const MAX: Self = Self {
                bits: <$InnerT>::MAX,
            };

            pub const ZERO: Self = Self { bits: 0 };
            pub const ONE: Self = Self { bits: 1 };

            // If the input collides with the error word this fails at
            // compile time.  It's pub so that it can be used in t8!()
            // and similar.
            pub const fn new<const N: $InnerT>() -> $SelfT {
                type Word = $SelfT;
                struct Helper<const M: $InnerT>;
                impl<const M: $InnerT> Helper<M> {
                    const W: Word = {
                        if M == <$InnerT>::MIN {
                            panic!("input value collides with the reserved error word")
                        } else {
                            Word { bits: M }
                        }
                    };
                }
                Helper::<N>::W
            }

            /// True if this value is the reserved error word.
            pub const fn is_error(&self) -> bool {
                self.bits == <$InnerT>::MIN
            }

            /// True for every value other than the error word.
            pub const fn is_valid(&self) -> bool {
                !self.is_error()
            }

            pub const fn is_zero(&self) -> bool {
                self.bits == 0
            }

            pub const fn is_negative(&self) -> bool {
                self.is_valid() && self.bits < 0
            }

            pub const fn is_positive(&self) -> bool {
                self.bits > 0
            }

            // Narrows an exactly-computed wide result back to the
            // working width, substituting the error word for anything
            // outside the valid range.  Every arithmetic result flows
            // through here, which is what guarantees that no
            // constructed value can carry an out-of-range bit
            // pattern.
            const fn from_wide(wide: $WideT) -> Self {
                if wide < Self::MIN.bits as $WideT || wide > Self::MAX.bits as $WideT {
                    Self::ERROR
                } else {
                    Self {
                        bits: wide as $InnerT,
                    }
                }
            }

            /// Absolute value.  Always in range for a valid input,
            /// because the valid range is symmetric; the error word
            /// stays the error word.
            pub const fn abs(self) -> Self {
                if self.is_error() {
                    self
                } else if self.bits < 0 {
                    Self { bits: -self.bits }
                } else {
                    self
                }
            }
        }

        impl Default for $SelfT {
            fn default() -> Self {
                Self { bits: 0 }
            }
        }

        impl Debug for $SelfT {
            fn fmt(&self, f: &mut Formatter) -> fmt::Result {
                write!(f, concat!(stringify!($SelfT), "{{bits: {}}}"), self.bits)
            }
        }

        impl Display for $SelfT {
            fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
                if self.is_error() {
                    f.write_str("ERR")
                } else {
                    Display::fmt(&self.bits, f)
                }
            }
        }

        impl PartialEq<$InnerT> for $SelfT {
            fn eq(&self, other: &$InnerT) -> bool {
                self.is_valid() && self.bits == *other
            }
        }

        // Ordering is partial: comparing the error word against a
        // valid value yields None, so <, <=, > and >= are all false.
        // The source material specifies equality over the error word
        // but leaves its ordering unspecified; we refuse to order it
        // rather than expose the accident of its bit pattern.  Two
        // error words compare equal, consistently with PartialEq.
        impl PartialOrd for $SelfT {
            fn partial_cmp(&self, other: &$SelfT) -> Option<Ordering> {
                if self.is_error() || other.is_error() {
                    if self.bits == other.bits {
                        Some(Ordering::Equal)
                    } else {
                        None
                    }
                } else {
                    Some(self.bits.cmp(&other.bits))
                }
            }
        }

        impl PartialOrd<$InnerT> for $SelfT {
            fn partial_cmp(&self, other: &$InnerT) -> Option<Ordering> {
                if self.is_error() {
                    None
                } else {
                    Some(self.bits.cmp(other))
                }
            }
        }

        impl std::ops::Add for $SelfT {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                if self.is_error() || rhs.is_error() {
                    return Self::ERROR;
                }
                Self::from_wide(self.bits as $WideT + rhs.bits as $WideT)
            }
        }

        impl std::ops::Sub for $SelfT {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                if self.is_error() || rhs.is_error() {
                    return Self::ERROR;
                }
                Self::from_wide(self.bits as $WideT - rhs.bits as $WideT)
            }
        }

        impl std::ops::Mul for $SelfT {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                if self.is_error() || rhs.is_error() {
                    return Self::ERROR;
                }
                Self::from_wide(self.bits as $WideT * rhs.bits as $WideT)
            }
        }

        impl std::ops::Div for $SelfT {
            type Output = Self;
            fn div(self, rhs: Self) -> Self {
                // Zero is a valid value, so the divisor check comes
                // before the error-word check.  Division truncates
                // toward zero.  MIN / -1 is MAX, which is in range;
                // the reserved error word removes the usual
                // two's-complement overflow trap here.
                if rhs.is_zero() {
                    return Self::ERROR;
                }
                if self.is_error() || rhs.is_error() {
                    return Self::ERROR;
                }
                Self::from_wide(self.bits as $WideT / rhs.bits as $WideT)
            }
        }

        impl std::ops::Rem for $SelfT {
            type Output = Self;
            fn rem(self, rhs: Self) -> Self {
                if rhs.is_zero() {
                    return Self::ERROR;
                }
                if self.is_error() || rhs.is_error() {
                    return Self::ERROR;
                }
                Self::from_wide(self.bits as $WideT % rhs.bits as $WideT)
            }
        }

        impl std::ops::Neg for $SelfT {
            type Output = Self;
            fn neg(self) -> Self {
                if self.is_error() {
                    self
                } else {
                    // Cannot overflow: the valid range is symmetric.
                    Self { bits: -self.bits }
                }
            }
        }

        impl TwistedWord for $SelfT {
            fn is_error(&self) -> bool {
                <$SelfT>::is_error(self)
            }

            fn signum(&self) -> Option<Sign> {
                if self.is_error() {
                    None
                } else if self.bits == 0 {
                    Some(Sign::Zero)
                } else if self.bits < 0 {
                    Some(Sign::Negative)
                } else {
                    Some(Sign::Positive)
                }
            }
        }
    };
}

////////////////////////////////////////////////////////////////////////
// Twisted8Bit
////////////////////////////////////////////////////////////////////////

/// 8-bit twisted-balanced-binary value: valid range [-127, 127],
/// error word at the bit pattern of -128.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Twisted8Bit {
    pub(crate) bits: i8,
}

twisted_impl!(Twisted8Bit, 8, i8, i16);

// No native type fits entirely inside the 8-bit valid range (i8
// itself contains the error-word pattern), so every conversion in is
// checked.
try_from_native_type_to_self!(Twisted8Bit, i8, i8 u8 i16 u16 i32 u32 i64 u64);

try_from_self_to_native_type!(Twisted8Bit, i8 u8 i16 u16 i32 u32 i64 u64);

////////////////////////////////////////////////////////////////////////
// Twisted16Bit
////////////////////////////////////////////////////////////////////////

/// 16-bit twisted-balanced-binary value: valid range [-32767, 32767],
/// error word at the bit pattern of -32768.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Twisted16Bit {
    pub(crate) bits: i16,
}

twisted_impl!(Twisted16Bit, 16, i16, i32);

// i8 -> Twisted16Bit
// u8 -> Twisted16Bit
from_native_type_to_self!(Twisted16Bit, i8 u8);

// i16 -> Twisted16Bit
// u16 -> Twisted16Bit
// i32 -> Twisted16Bit
// u32 -> Twisted16Bit
// i64 -> Twisted16Bit
// u64 -> Twisted16Bit
try_from_native_type_to_self!(Twisted16Bit, i16, i16 u16 i32 u32 i64 u64);

try_from_self_to_native_type!(Twisted16Bit, i8 u8 i16 u16 i32 u32 i64 u64);

widening_from_twisted_to_twisted!(Twisted16Bit, Twisted8Bit);
narrowing_from_twisted_to_twisted!(Twisted8Bit, i8, Twisted16Bit);

////////////////////////////////////////////////////////////////////////
// Twisted32Bit
////////////////////////////////////////////////////////////////////////

/// 32-bit twisted-balanced-binary value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Twisted32Bit {
    pub(crate) bits: i32,
}

twisted_impl!(Twisted32Bit, 32, i32, i64);

// i8 -> Twisted32Bit
// u8 -> Twisted32Bit
// i16 -> Twisted32Bit
// u16 -> Twisted32Bit
from_native_type_to_self!(Twisted32Bit, i8 u8 i16 u16);

// i32 -> Twisted32Bit
// u32 -> Twisted32Bit
// i64 -> Twisted32Bit
// u64 -> Twisted32Bit
try_from_native_type_to_self!(Twisted32Bit, i32, i32 u32 i64 u64);

try_from_self_to_native_type!(Twisted32Bit, i8 u8 i16 u16 i32 u32 i64 u64);

widening_from_twisted_to_twisted!(Twisted32Bit, Twisted8Bit Twisted16Bit);
narrowing_from_twisted_to_twisted!(Twisted8Bit, i8, Twisted32Bit);
narrowing_from_twisted_to_twisted!(Twisted16Bit, i16, Twisted32Bit);

////////////////////////////////////////////////////////////////////////
// Twisted64Bit
////////////////////////////////////////////////////////////////////////

/// 64-bit twisted-balanced-binary value.  Exact intermediate
/// arithmetic uses i128.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Twisted64Bit {
    pub(crate) bits: i64,
}

twisted_impl!(Twisted64Bit, 64, i64, i128);

// i8 -> Twisted64Bit
// u8 -> Twisted64Bit
// i16 -> Twisted64Bit
// u16 -> Twisted64Bit
// i32 -> Twisted64Bit
// u32 -> Twisted64Bit
from_native_type_to_self!(Twisted64Bit, i8 u8 i16 u16 i32 u32);

// i64 -> Twisted64Bit
// u64 -> Twisted64Bit
try_from_native_type_to_self!(Twisted64Bit, i64, i64 u64);

try_from_self_to_native_type!(Twisted64Bit, i8 u8 i16 u16 i32 u32 i64 u64);

widening_from_twisted_to_twisted!(Twisted64Bit, Twisted8Bit Twisted16Bit Twisted32Bit);
narrowing_from_twisted_to_twisted!(Twisted8Bit, i8, Twisted64Bit);
narrowing_from_twisted_to_twisted!(Twisted16Bit, i16, Twisted64Bit);
narrowing_from_twisted_to_twisted!(Twisted32Bit, i32, Twisted64Bit);
