//! # hms
//!
//! A small value type for spans of time measured in whole seconds and written as `H:MM:SS`.
//!
//! A [Duration] is never negative. Every way of making one (components, strings, arithmetic)
//! checks the resulting total and returns an [InvalidDurationError] instead of wrapping,
//! clamping, or panicking.
//!
//! ## Construction
//!
//! ```
//! use hms::{hms, Components, Duration};
//!
//! let a = Duration::from_components(Components {
//!     hours: 1,
//!     minutes: 30,
//!     ..Default::default()
//! })?;
//! let b: Duration = "1:30:00".parse()?;
//! const C: Duration = hms!("1:30:00");
//!
//! assert_eq!(a, b);
//! assert_eq!(b, C);
//! assert_eq!(1.5, C.as_hours());
//! # Ok::<(), hms::InvalidDurationError>(())
//! ```
//!
//! The [hms!] macro checks its literal at compile time, so it can't fail at runtime.
//!
//! ## Operand rules
//!
//! Comparison and multiplication are lenient about their other operand: it can be a [Duration]
//! or a number, which is read as a count of seconds. Addition and subtraction are strict: only
//! another [Duration] is accepted, and a number is an [InvalidDurationError::NotADuration] error.
//! See the [ops] module.
//!
//! The operators work with `i64` and `f64`, so plain literals like `d * 5` and `d < 1.5` need no
//! suffix. The named methods ([Duration::compare], [Duration::scale], ...) take any primitive
//! number.
//!
//! Operand types that aren't numbers at all are rejected by the compiler. For values whose type
//! is only known at runtime, the `*_dyn` methods (like [Duration::compare_dyn]) return `None`
//! for unsupported types instead of failing.
//!
//! ## Serialization
//!
//! With serde, a duration is its bare second count. Negative numbers don't deserialize.

pub mod duration;
pub mod error;
pub mod operand;
pub mod ops;

pub use duration::{Components, Duration};
pub use error::{InvalidDurationError, Result};
pub use operand::{Operand, Scalar};
pub use ops::scale;

/// Creates a [Duration] from an `H:MM:SS` literal, checked at compile time.
///
/// ```
/// # use hms::{hms, Duration};
/// const LUNCH: Duration = hms!("0:45:00");
/// assert_eq!(45 * 60, LUNCH.as_seconds());
/// ```
///
/// The literal follows the same rules as [Duration::from_string]; anything it would reject is a
/// compile error.
///
/// ```compile_fail
/// # use hms::hms;
/// let _ = hms!("1:-1:00");
/// ```
pub use hms_macros::hms;
