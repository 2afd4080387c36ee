//! Normalization of the right-hand side of duration operations.
//!
//! Comparison and scaling are *loose*: they accept another duration (by its seconds) or any
//! number. Addition and subtraction are *tight*: they accept only another duration.

use crate::duration::Duration;
use crate::error::{InvalidDurationError, Result};
use std::any::Any;
use std::cmp::Ordering;

// 2^64, the smallest real that no second count can reach.
const SECONDS_LIMIT: f64 = u64::MAX as f64;

/// A value that a duration can be compared with, added to, or scaled by.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Operand {
    Duration(Duration),
    Integer(i128),
    Real(f64),
}

/// A loosely coerced operand: durations have been reduced to their seconds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Scalar {
    Integer(i128),
    Real(f64),
}

impl Operand {
    pub fn loose(self) -> Scalar {
        match self {
            Operand::Duration(d) => Scalar::Integer(d.as_seconds() as i128),
            Operand::Integer(i) => Scalar::Integer(i),
            Operand::Real(r) => Scalar::Real(r),
        }
    }

    pub fn tight(self) -> Result<u64> {
        match self {
            Operand::Duration(d) => Ok(d.as_seconds()),
            _ => Err(InvalidDurationError::NotADuration),
        }
    }

    /// Recovers an operand from a type-erased value.
    ///
    /// Returns `None` for anything that isn't a duration or a primitive number, which callers
    /// should treat as "not applicable" rather than as an error.
    pub fn from_any(value: &dyn Any) -> Option<Operand> {
        if let Some(d) = value.downcast_ref::<Duration>() {
            return Some(Operand::Duration(*d));
        }

        macro_rules! downcast {
            ($($ty:ty)*) => {
                $(
                    if let Some(n) = value.downcast_ref::<$ty>() {
                        return Some(Operand::from(*n));
                    }
                )*
            };
        }

        downcast! {
            u8 i8
            u16 i16
            u32 i32
            u64 i64
            i128
            usize isize
            f32 f64
        }

        None
    }
}

impl Scalar {
    /// Orders a second count against this scalar. Unordered only when the scalar is NaN.
    pub(crate) fn cmp_seconds(self, seconds: u64) -> Option<Ordering> {
        match self {
            Scalar::Integer(i) => Some((seconds as i128).cmp(&i)),
            Scalar::Real(r) if r.is_nan() => None,
            Scalar::Real(r) if r < 0.0 => Some(Ordering::Greater),
            Scalar::Real(r) if r >= SECONDS_LIMIT => Some(Ordering::Less),
            Scalar::Real(r) => {
                // `r` is in [0, 2^64) here, so its integer part is exact as a u64.
                let fraction = if r.fract() > 0.0 { Ordering::Less } else { Ordering::Equal };
                Some(seconds.cmp(&(r.trunc() as u64)).then(fraction))
            }
        }
    }

    /// Multiplies a second count by this scalar.
    ///
    /// The raw product is validated before anything is truncated, so `10 * -0.01` fails even
    /// though it would truncate to zero. Real products are truncated toward zero.
    pub(crate) fn mul_seconds(self, seconds: u64) -> Result<u64> {
        match self {
            Scalar::Integer(i) => {
                let product = (seconds as i128)
                    .checked_mul(i)
                    .ok_or(InvalidDurationError::OutOfRange)?;
                crate::duration::seconds_from_signed(product)
            }
            Scalar::Real(r) => {
                let product = seconds as f64 * r;
                if product.is_nan() || product.is_infinite() {
                    return Err(InvalidDurationError::OutOfRange);
                }
                if product < 0.0 {
                    return Err(InvalidDurationError::Negative {
                        seconds: product.floor() as i128,
                    });
                }
                if product >= SECONDS_LIMIT {
                    return Err(InvalidDurationError::OutOfRange);
                }
                Ok(product.trunc() as u64)
            }
        }
    }
}

impl From<Duration> for Operand {
    fn from(d: Duration) -> Self {
        Operand::Duration(d)
    }
}

impl From<&Duration> for Operand {
    fn from(d: &Duration) -> Self {
        Operand::Duration(*d)
    }
}

macro_rules! impl_operand_from {
    ($variant:ident $($ty:ident)*) => {
        $(
            impl From<$ty> for Operand {
                fn from(n: $ty) -> Self {
                    Operand::$variant(n as _)
                }
            }
        )*
    };
}

impl_operand_from! {
    Integer

    u8 i8
    u16 i16
    u32 i32
    u64 i64
    i128
    usize isize
}

impl_operand_from! {
    Real

    f32 f64
}
