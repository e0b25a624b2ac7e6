use crate::{RandSource, RecordId, Result, TimeSource};
use core::fmt;

/// A minimal interface for generating record identifiers.
pub trait IdGenerator<T, R>
where
    T: TimeSource<u64>,
    R: RandSource<u64>,
{
    type Err: fmt::Debug;

    /// Creates a new generator from a time source and a random source.
    fn new(time: T, rng: R) -> Self;

    /// Returns the next identifier.
    fn next_id(&self) -> RecordId;

    /// A fallible version of [`Self::next_id`] that returns a [`Result`].
    ///
    /// # Errors
    /// - Implementations backed by fallible sources may surface their errors
    ///   here. [`BasicIdGenerator`] never fails.
    ///
    /// [`BasicIdGenerator`]: crate::BasicIdGenerator
    fn try_next_id(&self) -> Result<RecordId, Self::Err>;
}
