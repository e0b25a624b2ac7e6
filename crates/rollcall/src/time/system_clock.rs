use crate::TimeSource;
#[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
use std::time::{SystemTime, UNIX_EPOCH};
#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
use web_time::{SystemTime, UNIX_EPOCH};

/// A time source that reads the host wall clock on every call.
///
/// Readings follow the system clock exactly, including any backward jumps
/// caused by NTP or manual adjustment. A clock set before 1970 reads as `0`.
/// Use [`MonotonicClock`] when readings must never decrease.
///
/// [`MonotonicClock`]: crate::MonotonicClock
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClock;

impl TimeSource<u64> for SystemClock {
    fn current_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| {
                u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
            })
    }
}
