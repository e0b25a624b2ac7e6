use crate::config::ClockKind;
use rollcall::{MonotonicClock, SystemClock, TimeSource};

/// Time source picked at runtime from [`ClockKind`].
#[derive(Debug, Clone)]
pub enum Clock {
    System(SystemClock),
    Monotonic(MonotonicClock),
}

impl From<ClockKind> for Clock {
    fn from(kind: ClockKind) -> Self {
        match kind {
            ClockKind::System => Self::System(SystemClock),
            ClockKind::Monotonic => Self::Monotonic(MonotonicClock::new()),
        }
    }
}

impl TimeSource<u64> for Clock {
    fn current_millis(&self) -> u64 {
        match self {
            Self::System(clock) => clock.current_millis(),
            Self::Monotonic(clock) => clock.current_millis(),
        }
    }
}
