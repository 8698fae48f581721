//! Injectable monotonic time source

use std::time::{Duration, Instant};

/// Monotonic time source driving the recognizer
///
/// One clock serves both internal windowing (double-tap, hold, tap) and the
/// timestamps stamped onto emitted samples, keeping behavior deterministic
/// under test and immune to system clock adjustments.
pub trait Clock {
    /// Time elapsed since the clock's origin
    fn now(&self) -> Duration;
}

/// Production clock backed by [`std::time::Instant`]
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Creates a clock whose origin is the moment of construction
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}
