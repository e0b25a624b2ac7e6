//! Process-wide generation on the system clock.
//!
//! Both sources are zero-sized and hold no state, so a single `static`
//! generator serves every thread without locking.
//!
//! # Example
//! ```rust
//! use rollcall::{RecordId, generate_id, generate_ids};
//!
//! let id = generate_id();
//! assert!(id <= RecordId::MAX);
//!
//! let batch = generate_ids(3);
//! assert_eq!(batch.len(), 3);
//! ```

use crate::{BasicIdGenerator, RecordId, SystemClock, ThreadRandom};

static SYSTEM_GENERATOR: BasicIdGenerator<SystemClock, ThreadRandom> =
    BasicIdGenerator::new(SystemClock, ThreadRandom);

/// Generates a record identifier from the system clock and the thread-local
/// RNG.
///
/// The result lies in `[0, 999999]` and is not guaranteed to be unique.
pub fn generate_id() -> RecordId {
    SYSTEM_GENERATOR.next_id()
}

/// Generates `count` record identifiers.
///
/// Ids drawn in the same millisecond differ only by their jitter, so
/// duplicates inside a batch are expected for large `count`.
pub fn generate_ids(count: usize) -> Vec<RecordId> {
    (0..count).map(|_| SYSTEM_GENERATOR.next_id()).collect()
}
