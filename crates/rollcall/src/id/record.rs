use crate::Error;
use core::{fmt, str::FromStr};

/// Size of the identifier space. Every [`RecordId`] is reduced modulo this
/// value.
pub const ID_SPACE: u64 = 1_000_000;

/// Exclusive upper bound of the random jitter added to the reduced
/// timestamp.
pub const JITTER_SPACE: u64 = 1_000;

/// A bounded record identifier in `[0, 999999]`.
///
/// `RecordId` is a transient label: it carries no identity beyond its value
/// and makes no uniqueness promise. See [`RecordId::from_components`] for how
/// a clock reading and a random draw combine into one.
///
/// # Example
///
/// ```
/// use rollcall::RecordId;
///
/// let id = RecordId::try_from(4_207_u32).unwrap();
/// assert_eq!(id.to_string(), "4207");
/// assert_eq!(id.padded().to_string(), "004207");
/// assert!(RecordId::try_from(1_000_000_u32).is_err());
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct RecordId(u32);

impl RecordId {
    /// The smallest identifier, `0`.
    pub const MIN: Self = Self(0);

    /// The largest identifier, `999999`.
    pub const MAX: Self = Self((ID_SPACE - 1) as u32);

    /// Combines a millisecond timestamp and a random draw into an identifier.
    ///
    /// The result is `(millis % 1_000_000 + jitter) % 1_000_000`. `jitter` is
    /// first reduced into `[0, 1000)`, so any `u64` input is accepted and no
    /// intermediate sum can overflow.
    ///
    /// ```
    /// use rollcall::RecordId;
    ///
    /// assert_eq!(RecordId::from_components(1_999_999, 999).to_raw(), 998);
    /// assert_eq!(RecordId::from_components(5_000_000, 0).to_raw(), 0);
    /// ```
    #[must_use]
    pub const fn from_components(millis: u64, jitter: u64) -> Self {
        let base = millis % ID_SPACE;
        let jitter = jitter % JITTER_SPACE;
        Self(((base + jitter) % ID_SPACE) as u32)
    }

    /// Returns the identifier for `raw`, or `None` if it exceeds
    /// [`RecordId::MAX`].
    #[must_use]
    pub const fn new(raw: u32) -> Option<Self> {
        if raw <= Self::MAX.0 {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// Returns the raw integer value.
    #[must_use]
    pub const fn to_raw(self) -> u32 {
        self.0
    }

    /// Returns a display adapter that renders the identifier zero-padded to
    /// six digits.
    #[must_use]
    pub const fn padded(self) -> Padded {
        Padded(self)
    }
}

/// Six-digit, zero-padded rendering of a [`RecordId`].
///
/// Returned by [`RecordId::padded`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Padded(RecordId);

impl fmt::Display for Padded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06}", self.0.0)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RecordId").field(&self.0).finish()
    }
}

impl TryFrom<u32> for RecordId {
    type Error = Error;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::new(raw).ok_or(Error::OutOfRange {
            value: u64::from(raw),
        })
    }
}

impl TryFrom<u64> for RecordId {
    type Error = Error;

    fn try_from(raw: u64) -> Result<Self, Self::Error> {
        u32::try_from(raw)
            .ok()
            .and_then(Self::new)
            .ok_or(Error::OutOfRange { value: raw })
    }
}

impl From<RecordId> for u32 {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl From<RecordId> for u64 {
    fn from(id: RecordId) -> Self {
        u64::from(id.0)
    }
}

impl FromStr for RecordId {
    type Err = Error;

    /// Parses a decimal integer. Leading zeros are accepted, so the output of
    /// [`RecordId::padded`] parses back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: u64 = s.parse()?;
        Self::try_from(raw)
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn from_components_reduces_timestamp() {
        assert_eq!(RecordId::from_components(1_735_689_600_123, 0).to_raw(), 600_123);
        assert_eq!(RecordId::from_components(999_999, 0), RecordId::MAX);
    }

    #[test]
    fn from_components_wraps_around() {
        assert_eq!(RecordId::from_components(999_999, 999).to_raw(), 998);
        assert_eq!(RecordId::from_components(999_500, 500).to_raw(), 0);
        assert_eq!(RecordId::from_components(0, 0), RecordId::MIN);
    }

    #[test]
    fn from_components_accepts_extreme_inputs() {
        let id = RecordId::from_components(u64::MAX, u64::MAX);
        // u64::MAX % 1_000_000 == 551_615, u64::MAX % 1_000 == 615
        assert_eq!(id.to_raw(), 552_230);
        assert!(id <= RecordId::MAX);
    }

    #[test]
    fn jitter_above_range_is_reduced() {
        assert_eq!(
            RecordId::from_components(10, 1_999),
            RecordId::from_components(10, 999)
        );
    }

    #[test]
    fn new_rejects_values_above_max() {
        assert_eq!(RecordId::new(999_999), Some(RecordId::MAX));
        assert_eq!(RecordId::new(1_000_000), None);
        assert_eq!(
            RecordId::try_from(1_000_000_u32),
            Err(Error::OutOfRange { value: 1_000_000 })
        );
        assert_eq!(
            RecordId::try_from(u64::MAX),
            Err(Error::OutOfRange { value: u64::MAX })
        );
    }

    #[test]
    fn display_and_padded() {
        let id = RecordId::new(42).unwrap();
        assert_eq!(id.to_string(), "42");
        assert_eq!(id.padded().to_string(), "000042");
        assert_eq!(RecordId::MAX.padded().to_string(), "999999");
        assert_eq!(format!("{id:?}"), "RecordId(42)");
    }

    #[test]
    fn parses_plain_and_padded() {
        assert_eq!("42".parse::<RecordId>(), Ok(RecordId::new(42).unwrap()));
        assert_eq!("000042".parse::<RecordId>(), Ok(RecordId::new(42).unwrap()));
        assert_eq!(
            "1000000".parse::<RecordId>(),
            Err(Error::OutOfRange { value: 1_000_000 })
        );
        assert!(matches!("-1".parse::<RecordId>(), Err(Error::Parse(_))));
        assert!(matches!("".parse::<RecordId>(), Err(Error::Parse(_))));
    }

    #[test]
    fn ordering_follows_raw_value() {
        let a = RecordId::new(7).unwrap();
        let b = RecordId::new(700_000).unwrap();
        assert!(a < b);
        assert!(RecordId::MIN <= a && b <= RecordId::MAX);
        assert_eq!(u32::from(b), 700_000);
        assert_eq!(u64::from(b), 700_000);
    }
}
