use crate::TimeSource;
use portable_atomic::{AtomicU64, Ordering};
use std::{
    sync::Arc,
    thread,
    time::{Duration, Instant, SystemTime, UNIX_EPOCH},
};

/// Elapsed milliseconds since the clock was created, updated by the ticker
/// thread.
struct Ticker {
    elapsed: AtomicU64,
}

/// A monotonic time source aligned to the Unix epoch.
///
/// The wall clock is read once at construction to compute an offset from the
/// Unix epoch. After that, a background thread advances a shared atomic once
/// per millisecond using [`Instant`], so readings never go backward even if
/// the system clock is adjusted.
///
/// Clones share the same ticker. The thread exits on its next tick after the
/// last clone is dropped.
#[derive(Clone)]
pub struct MonotonicClock {
    inner: Arc<Ticker>,
    epoch_offset: u64,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    /// Starts a new ticker thread and anchors it to the current wall-clock
    /// time.
    ///
    /// A system clock set before 1970 anchors the clock at `0`.
    ///
    /// # Example
    ///
    /// ```
    /// use rollcall::{MonotonicClock, TimeSource};
    ///
    /// let clock = MonotonicClock::new();
    /// let a = clock.current_millis();
    /// std::thread::sleep(std::time::Duration::from_millis(5));
    /// let b = clock.current_millis();
    /// assert!(b >= a);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let epoch_offset = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| {
                u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
            });

        let inner = Arc::new(Ticker {
            elapsed: AtomicU64::new(0),
        });

        let weak_inner = Arc::downgrade(&inner);
        thread::spawn(move || {
            let start = Instant::now();
            let mut tick = 0;

            loop {
                let Some(inner_ref) = weak_inner.upgrade() else {
                    break;
                };

                // Absolute target time of the next tick
                let target = start + Duration::from_millis(tick);

                let now = Instant::now();
                if now < target {
                    thread::sleep(target - now);
                }

                let now_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                inner_ref.elapsed.store(now_ms, Ordering::Release);

                tick = now_ms + 1;
            }
        });

        Self {
            inner,
            epoch_offset,
        }
    }
}

impl TimeSource<u64> for MonotonicClock {
    fn current_millis(&self) -> u64 {
        self.epoch_offset
            .saturating_add(self.inner.elapsed.load(Ordering::Acquire))
    }
}

impl core::fmt::Debug for MonotonicClock {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MonotonicClock")
            .field("epoch_offset", &self.epoch_offset)
            .field("now", &self.current_millis())
            .finish()
    }
}
