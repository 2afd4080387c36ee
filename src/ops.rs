//! Comparison and arithmetic between durations and numbers.
//!
//! Every arithmetic operator returns a [Result], because any of them can produce a negative or
//! unrepresentable total. Comparisons never fail.
//!
//! ```
//! use hms::{Duration, InvalidDurationError};
//!
//! let ten = Duration::from_secs(10);
//!
//! assert_eq!(Duration::from_secs(30), (ten + Duration::from_secs(20))?);
//! assert_eq!(Duration::from_secs(50), (ten * 5)?);
//! assert_eq!(Duration::from_hours(1)?, (60 * 60 * Duration::from_secs(1))?);
//!
//! // Adding a raw number is rejected, even though scaling by one is fine.
//! assert_eq!(Err(InvalidDurationError::NotADuration), ten + 5);
//!
//! assert!(ten < 11 && ten == 10.0 && 9 < ten);
//! # Ok::<(), InvalidDurationError>(())
//! ```

use crate::duration::{seconds_from_signed, Duration};
use crate::error::{InvalidDurationError, Result};
use crate::operand::Operand;
use std::any::Any;
use std::cmp::Ordering;
use std::ops::{Add, Mul, Sub};

impl Duration {
    /// Compares against another duration or a raw number of seconds.
    ///
    /// Returns `None` only when comparing with NaN.
    pub fn compare(&self, other: impl Into<Operand>) -> Option<Ordering> {
        let other: Operand = other.into();
        other.loose().cmp_seconds(self.as_seconds())
    }

    pub fn equals(&self, other: impl Into<Operand>) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }

    pub fn less_than(&self, other: impl Into<Operand>) -> bool {
        self.compare(other) == Some(Ordering::Less)
    }

    /// Adds another duration. Any other operand, including a number, is an error.
    pub fn try_add(self, other: impl Into<Operand>) -> Result<Duration> {
        let other: Operand = other.into();
        let rhs = other.tight()?;
        self.as_seconds()
            .checked_add(rhs)
            .map(Duration::from_secs)
            .ok_or(InvalidDurationError::OutOfRange)
    }

    /// Subtracts another duration. Fails on a non-duration operand or a negative result.
    pub fn try_sub(self, other: impl Into<Operand>) -> Result<Duration> {
        let other: Operand = other.into();
        let rhs = other.tight()?;
        seconds_from_signed(self.as_seconds() as i128 - rhs as i128).map(Duration::from_secs)
    }

    /// Multiplies by a number, or by another duration's second count.
    ///
    /// Real-valued products are truncated toward zero, after checking that they are not negative.
    pub fn scale(self, other: impl Into<Operand>) -> Result<Duration> {
        let other: Operand = other.into();
        other
            .loose()
            .mul_seconds(self.as_seconds())
            .map(Duration::from_secs)
    }

    /// Like [compare][Duration::compare], but for a value whose type is only known at runtime.
    ///
    /// `None` means the operand type is not comparable with a duration (or the operand is NaN).
    pub fn compare_dyn(&self, other: &dyn Any) -> Option<Ordering> {
        Operand::from_any(other).and_then(|op| self.compare(op))
    }

    /// `None` means the operand type is not comparable with a duration.
    pub fn equals_dyn(&self, other: &dyn Any) -> Option<bool> {
        Operand::from_any(other).map(|op| self.equals(op))
    }

    /// `None` means the operand type cannot scale a duration.
    pub fn scale_dyn(&self, other: &dyn Any) -> Option<Result<Duration>> {
        Operand::from_any(other).map(|op| self.scale(op))
    }

    /// Unlike scaling, unsupported types are an error here, the same as numbers are.
    pub fn try_add_dyn(&self, other: &dyn Any) -> Result<Duration> {
        let op = Operand::from_any(other).ok_or(InvalidDurationError::NotADuration)?;
        self.try_add(op)
    }

    pub fn try_sub_dyn(&self, other: &dyn Any) -> Result<Duration> {
        let op = Operand::from_any(other).ok_or(InvalidDurationError::NotADuration)?;
        self.try_sub(op)
    }
}

/// Scales a duration, with the operand first.
///
/// Identical to `duration.scale(operand)`.
pub fn scale(operand: impl Into<Operand>, duration: Duration) -> Result<Duration> {
    duration.scale(operand)
}

impl Add for Duration {
    type Output = Result<Duration>;

    fn add(self, rhs: Duration) -> Self::Output {
        self.try_add(rhs)
    }
}

impl Sub for Duration {
    type Output = Result<Duration>;

    fn sub(self, rhs: Duration) -> Self::Output {
        self.try_sub(rhs)
    }
}

impl Mul for Duration {
    type Output = Result<Duration>;

    fn mul(self, rhs: Duration) -> Self::Output {
        self.scale(rhs)
    }
}

macro_rules! impl_numeric_ops {
    ($($ty:ident)*) => {
        $(
            impl PartialEq<$ty> for Duration {
                fn eq(&self, other: &$ty) -> bool {
                    self.equals(*other)
                }
            }

            impl PartialEq<Duration> for $ty {
                fn eq(&self, other: &Duration) -> bool {
                    other.equals(*self)
                }
            }

            impl PartialOrd<$ty> for Duration {
                fn partial_cmp(&self, other: &$ty) -> Option<Ordering> {
                    self.compare(*other)
                }
            }

            impl PartialOrd<Duration> for $ty {
                fn partial_cmp(&self, other: &Duration) -> Option<Ordering> {
                    other.compare(*self).map(Ordering::reverse)
                }
            }

            impl Mul<$ty> for Duration {
                type Output = Result<Duration>;

                fn mul(self, rhs: $ty) -> Self::Output {
                    self.scale(rhs)
                }
            }

            impl Mul<Duration> for $ty {
                type Output = Result<Duration>;

                fn mul(self, rhs: Duration) -> Self::Output {
                    rhs.scale(self)
                }
            }

            // Numbers are never valid in addition or subtraction, on either side.
            impl Add<$ty> for Duration {
                type Output = Result<Duration>;

                fn add(self, rhs: $ty) -> Self::Output {
                    self.try_add(rhs)
                }
            }

            impl Add<Duration> for $ty {
                type Output = Result<Duration>;

                fn add(self, rhs: Duration) -> Self::Output {
                    rhs.try_add(self)
                }
            }

            impl Sub<$ty> for Duration {
                type Output = Result<Duration>;

                fn sub(self, rhs: $ty) -> Self::Output {
                    self.try_sub(rhs)
                }
            }

            impl Sub<Duration> for $ty {
                type Output = Result<Duration>;

                fn sub(self, rhs: Duration) -> Self::Output {
                    rhs.try_sub(self)
                }
            }
        )*
    };
}

// One integer and one real type only: with more, an unsuffixed literal like `d * 5` can't
// pick an impl. The named methods above still take every primitive.
impl_numeric_ops! {
    i64 f64
}
