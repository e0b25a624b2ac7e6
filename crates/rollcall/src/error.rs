use core::fmt;

/// A result type that is infallible by default.
///
/// Generating identifiers never fails. Only conversions from untrusted raw
/// values (integers, strings, deserialized input) produce an [`Error`].
pub type Result<T, E = core::convert::Infallible> = core::result::Result<T, E>;

/// All error variants that `rollcall` can emit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The raw value lies outside `[0, 999999]`.
    OutOfRange {
        /// The rejected value.
        value: u64,
    },

    /// The input string is not a decimal integer.
    Parse(core::num::ParseIntError),
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::OutOfRange { value } => {
                write!(fmt, "record id {value} is outside the range 0..=999999")
            }
            Self::Parse(e) => write!(fmt, "invalid record id: {e}"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::OutOfRange { .. } => None,
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<core::num::ParseIntError> for Error {
    fn from(err: core::num::ParseIntError) -> Self {
        Self::Parse(err)
    }
}
