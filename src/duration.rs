use crate::error::{InvalidDurationError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;

/// A non-negative span of time, stored as a whole number of seconds.
///
/// Durations are immutable; all arithmetic returns a new value. Anything that could produce a
/// negative total fails with [InvalidDurationError] instead, so a `Duration` that exists is
/// always valid.
///
/// ```
/// use hms::{Components, Duration};
///
/// let d = Duration::from_components(Components {
///     minutes: 2,
///     seconds: 1,
///     ..Default::default()
/// })?;
///
/// assert_eq!(121, d.as_seconds());
/// assert_eq!("0:02:01", d.to_string());
/// assert_eq!(d, "0:2:1".parse::<Duration>()?);
/// # Ok::<(), hms::InvalidDurationError>(())
/// ```
#[repr(transparent)]
#[derive(
    Copy, Clone, Debug, Default, Serialize, Deserialize, Ord, PartialOrd, Eq, PartialEq, Hash,
)]
#[serde(transparent)]
pub struct Duration(u64);

/// Signed inputs to [Duration::from_components].
///
/// Name the fields you need and default the rest. Individual fields may be negative, as long as
/// the combined total is not.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Components {
    pub seconds: i64,
    pub minutes: i64,
    pub hours: i64,
}

impl Duration {
    pub const ZERO: Duration = Duration(0);

    pub const fn from_secs(seconds: u64) -> Self {
        Duration(seconds)
    }

    pub fn new(seconds: i64) -> Result<Self> {
        Self::from_components(Components {
            seconds,
            ..Default::default()
        })
    }

    pub fn from_minutes(minutes: i64) -> Result<Self> {
        Self::from_components(Components {
            minutes,
            ..Default::default()
        })
    }

    pub fn from_hours(hours: i64) -> Result<Self> {
        Self::from_components(Components {
            hours,
            ..Default::default()
        })
    }

    /// Builds a duration from seconds, minutes, and hours.
    ///
    /// Only the total is validated, not each field.
    pub fn from_components(components: Components) -> Result<Self> {
        let Components {
            seconds,
            minutes,
            hours,
        } = components;
        total_seconds(seconds as i128, minutes as i128, hours as i128).map(Duration)
    }

    /// Parses `H:MM:SS`.
    ///
    /// Every colon-separated component must be a non-empty run of ASCII digits; signs and
    /// whitespace are rejected. Minutes and seconds are not required to be zero-padded or
    /// below 60, so `"0:1:1"` and `"0:90:00"` are both accepted.
    pub fn from_string(input: &str) -> Result<Self> {
        let parts = input.split(':').collect::<Vec<_>>();

        if !parts.iter().all(|part| is_digits(part)) {
            tracing::trace!(input, "rejected duration with non-numeric component");
            return Err(InvalidDurationError::Malformed {
                input: input.to_string(),
            });
        }

        let [hours, minutes, seconds] = parts[..] else {
            tracing::trace!(input, found = parts.len(), "rejected duration with wrong component count");
            return Err(InvalidDurationError::ComponentCount { found: parts.len() });
        };

        let [seconds, minutes, hours] = [seconds, minutes, hours].map(|part| {
            part.parse::<u64>()
                .map(i128::from)
                .map_err(|_| InvalidDurationError::OutOfRange)
        });

        total_seconds(seconds?, minutes?, hours?).map(Duration)
    }

    pub const fn as_seconds(&self) -> u64 {
        self.0
    }

    pub fn as_minutes(&self) -> f64 {
        self.0 as f64 / SECONDS_PER_MINUTE as f64
    }

    pub fn as_hours(&self) -> f64 {
        self.0 as f64 / SECONDS_PER_HOUR as f64
    }

    /// Splits into `(hours, minutes, seconds)`, with minutes and seconds below 60.
    pub const fn components(&self) -> (u64, u64, u64) {
        (
            self.0 / SECONDS_PER_HOUR,
            self.0 % SECONDS_PER_HOUR / SECONDS_PER_MINUTE,
            self.0 % SECONDS_PER_MINUTE,
        )
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

/// Sums the components and checks that the result is a valid duration.
pub(crate) fn total_seconds(seconds: i128, minutes: i128, hours: i128) -> Result<u64> {
    let total = minutes
        .checked_mul(SECONDS_PER_MINUTE as i128)
        .zip(hours.checked_mul(SECONDS_PER_HOUR as i128))
        .and_then(|(m, h)| seconds.checked_add(m)?.checked_add(h))
        .ok_or(InvalidDurationError::OutOfRange)?;

    seconds_from_signed(total)
}

pub(crate) fn seconds_from_signed(total: i128) -> Result<u64> {
    if total < 0 {
        return Err(InvalidDurationError::Negative { seconds: total });
    }
    u64::try_from(total).map_err(|_| InvalidDurationError::OutOfRange)
}

fn is_digits(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}

impl Display for Duration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (hours, minutes, seconds) = self.components();
        write!(f, "{hours}:{minutes:02}:{seconds:02}")
    }
}

impl FromStr for Duration {
    type Err = InvalidDurationError;

    fn from_str(s: &str) -> Result<Self> {
        Duration::from_string(s)
    }
}

impl TryFrom<&str> for Duration {
    type Error = InvalidDurationError;

    fn try_from(s: &str) -> Result<Self> {
        Duration::from_string(s)
    }
}

impl From<Duration> for std::time::Duration {
    fn from(d: Duration) -> Self {
        std::time::Duration::from_secs(d.0)
    }
}
