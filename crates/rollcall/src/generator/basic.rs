#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{IdGenerator, RandSource, RecordId, Result, TimeSource};

/// A stateless record-id generator.
///
/// Each call reads the clock, reduces the timestamp modulo `1_000_000`, adds a
/// random jitter in `[0, 1000)` and wraps the sum back into `[0, 999999]`.
///
/// ## Properties
/// - ✅ Thread-safe when both sources are
/// - ✅ Always in range `[0, 999999]`
/// - ❌ Not unique: identical clock readings and jitter draws produce
///   identical ids
/// - ❌ Not monotonic: the reduced timestamp wraps every 1,000 seconds
///
/// ## Recommended When
/// - You need short, human-facing labels and the storage layer enforces
///   uniqueness
///
/// ## See Also
/// - [`generate_id`] for a ready-made generator on the system clock
///
/// [`generate_id`]: crate::generate_id
#[derive(Clone, Debug, Default)]
pub struct BasicIdGenerator<T, R>
where
    T: TimeSource<u64>,
    R: RandSource<u64>,
{
    time: T,
    rng: R,
}

impl<T, R> BasicIdGenerator<T, R>
where
    T: TimeSource<u64>,
    R: RandSource<u64>,
{
    /// Creates a new [`BasicIdGenerator`] with the provided time source and
    /// RNG.
    ///
    /// # Parameters
    /// - `time`: A [`TimeSource`] used to retrieve the current timestamp
    /// - `rng`: A [`RandSource`] used to draw the jitter
    ///
    /// # Example
    /// ```
    /// use rollcall::{BasicIdGenerator, RecordId, SystemClock, ThreadRandom};
    ///
    /// let generator = BasicIdGenerator::new(SystemClock, ThreadRandom);
    /// let id = generator.next_id();
    /// assert!(id <= RecordId::MAX);
    /// ```
    pub const fn new(time: T, rng: R) -> Self {
        Self { time, rng }
    }

    /// Generates a new identifier.
    ///
    /// # Example
    /// ```
    /// use rollcall::{BasicIdGenerator, SystemClock, ThreadRandom};
    ///
    /// let generator = BasicIdGenerator::new(SystemClock, ThreadRandom);
    /// println!("fee category {}", generator.next_id());
    /// ```
    pub fn next_id(&self) -> RecordId {
        match self.try_next_id() {
            Ok(id) => id,
            Err(e) => match e {},
        }
    }

    /// Generates a new identifier with fallible error handling.
    ///
    /// # Errors
    ///
    /// This method is infallible for this generator. Use the
    /// [`Self::next_id`] method instead.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn try_next_id(&self) -> Result<RecordId> {
        let millis = self.time.current_millis();
        let jitter = self.rng.rand();
        Ok(RecordId::from_components(millis, jitter))
    }
}

impl<T, R> IdGenerator<T, R> for BasicIdGenerator<T, R>
where
    T: TimeSource<u64>,
    R: RandSource<u64>,
{
    type Err = core::convert::Infallible;

    fn new(time: T, rng: R) -> Self {
        Self::new(time, rng)
    }

    fn next_id(&self) -> RecordId {
        self.next_id()
    }

    fn try_next_id(&self) -> Result<RecordId, Self::Err> {
        self.try_next_id()
    }
}
