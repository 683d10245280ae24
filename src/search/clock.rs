//! Time source for the search deadline
//!
//! The search only ever asks "what time is it now", so the source is
//! injectable: real games use [`SystemClock`], tests pin time with
//! [`FixedClock`].

use std::time::Instant;

/// Monotonic time source
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock frozen at one instant. With a non-zero budget the deadline is
/// never reached, so only the depth limit cuts the search off.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: Instant,
}

impl FixedClock {
    pub fn new(at: Instant) -> Self {
        Self { at }
    }

    /// Frozen at the moment of construction
    pub fn frozen() -> Self {
        Self::new(Instant::now())
    }
}

impl Clock for FixedClock {
    #[inline]
    fn now(&self) -> Instant {
        self.at
    }
}
