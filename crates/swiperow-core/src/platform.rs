//! Platform abstraction for the looper's notion of time.
//!
//! The looper itself only counts whole milliseconds. Hosts that run on a real
//! clock feed it through [`Clock`]; tests advance it by hand.

use web_time::Instant;

/// Provides timing information for the looper.
pub trait Clock {
    /// Instant type produced by this clock implementation.
    type Instant: Copy;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;

    /// Returns the number of milliseconds elapsed since `since`.
    fn elapsed_millis(&self, since: Self::Instant) -> u64;
}

/// Wall clock backed by `web_time::Instant`, usable on native and WASM hosts.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Milliseconds since this clock was created.
    pub fn uptime_millis(&self) -> u64 {
        self.elapsed_millis(self.origin)
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn elapsed_millis(&self, since: Instant) -> u64 {
        Instant::now().saturating_duration_since(since).as_millis() as u64
    }
}
