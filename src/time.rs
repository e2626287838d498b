//! Time source used by the receive loop.

/// A monotonic millisecond clock with a blocking delay.
///
/// The receive loop uses `now_millis` to measure how long the peer has been
/// silent and `delay_millis` to back off between drain passes. On a
/// microcontroller this is typically a thin wrapper around the HAL's system
/// timer and delay provider.
pub trait Clock {
    /// Milliseconds since an arbitrary, fixed origin. Must never go backwards.
    fn now_millis(&self) -> u64;
    /// Block the caller for roughly `ms` milliseconds.
    fn delay_millis(&mut self, ms: u32);
}

/// [`Clock`] backed by `std::time::Instant` and `std::thread::sleep`.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    /// Starts a clock whose origin is now.
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn now_millis(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    fn delay_millis(&mut self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
    }
}
