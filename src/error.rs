use derive_more::{Display, Error};

/// The single error raised by [Duration][crate::Duration] construction, parsing and arithmetic.
///
/// Every variant describes a value that cannot become a valid duration. Operand types that a
/// comparison or scaling simply doesn't support are *not* errors; those are reported as `None`
/// by the `*_dyn` methods, or rejected at compile time.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum InvalidDurationError {
    /// The combined total of seconds would be negative.
    #[display("duration cannot be negative (total of {seconds} seconds)")]
    Negative { seconds: i128 },

    /// A string component contained something other than ASCII digits.
    #[display("invalid duration {input:?}: expected `H:MM:SS` with only numeric components")]
    Malformed { input: String },

    /// A string split into some number of components other than three.
    #[display("invalid duration: expected 3 colon-separated components, found {found}")]
    ComponentCount { found: usize },

    /// Addition and subtraction only accept another duration.
    #[display("durations can only be added to or subtracted from other durations")]
    NotADuration,

    /// The total does not fit in 64 unsigned bits, or a real-valued product was not finite.
    #[display("duration out of range")]
    OutOfRange,
}

pub type Result<T, E = InvalidDurationError> = std::result::Result<T, E>;

impl From<InvalidDurationError> for std::io::Error {
    fn from(err: InvalidDurationError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
    }
}
