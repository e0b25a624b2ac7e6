//! Bounded record identifiers.
//!
//! `rollcall` produces short numeric labels for records created by a
//! school-management backend: fee categories, enrolments, sessions. Each
//! identifier is an integer in `[0, 999999]` built from the current
//! millisecond timestamp plus a small random jitter.
//!
//! These identifiers are **not** unique. Two calls in the same millisecond
//! collide whenever their jitter draws match, and the timestamp itself wraps
//! every 1,000 seconds. Callers that need uniqueness must enforce it at the
//! storage layer.
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "std")]
//! # {
//! use rollcall::{RecordId, generate_id};
//!
//! let id = generate_id();
//! assert!(id <= RecordId::MAX);
//! # }
//! ```
//!
//! Clock and randomness are injected, so generators can be pinned in tests:
//!
//! ```
//! use rollcall::{BasicIdGenerator, RandSource, RecordId, TimeSource};
//!
//! struct FixedTime;
//! impl TimeSource<u64> for FixedTime {
//!     fn current_millis(&self) -> u64 {
//!         1_700_000_999_999
//!     }
//! }
//!
//! struct FixedRand;
//! impl RandSource<u64> for FixedRand {
//!     fn rand(&self) -> u64 {
//!         999
//!     }
//! }
//!
//! let generator = BasicIdGenerator::new(FixedTime, FixedRand);
//! assert_eq!(generator.next_id(), RecordId::try_from(998_u32).unwrap());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod generator;
mod id;
mod rand;
#[cfg(feature = "serde")]
mod serde;
mod time;

pub use crate::error::*;
pub use crate::generator::*;
pub use crate::id::*;
pub use crate::rand::*;
pub use crate::time::*;
