use crate::{JITTER_SPACE, RandSource};
use rand::{Rng, rng};

/// A `RandSource` that uses the thread-local RNG (`rand::rng()`).
///
/// Each call draws uniformly from `[0, JITTER_SPACE)`, which is exactly the
/// jitter range a [`BasicIdGenerator`] adds to the reduced timestamp.
///
/// The underlying `ThreadRng` is neither `Send` nor `Sync`, but this type only
/// reaches for the current thread's generator on each call and stores nothing,
/// so it may be shared freely across threads.
///
/// [`BasicIdGenerator`]: crate::BasicIdGenerator
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource<u64> for ThreadRandom {
    fn rand(&self) -> u64 {
        rng().random_range(0..JITTER_SPACE)
    }
}
