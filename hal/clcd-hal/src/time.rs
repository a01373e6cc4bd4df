//! Time abstractions
//!
//! The drivers only need a monotonic millisecond counter to bound their
//! busy-waits and to pace input polling. Blocking delays use
//! [`embedded_hal::delay::DelayNs`] directly.
//!
//! [`embedded_hal::delay::DelayNs`]: https://docs.rs/embedded-hal/1/embedded_hal/delay/trait.DelayNs.html

/// Monotonic millisecond uptime source
pub trait Clock {
    /// Milliseconds since an arbitrary fixed point (usually boot)
    fn now_ms(&self) -> u64;

    /// Milliseconds elapsed since `since`
    fn elapsed_ms(&self, since: u64) -> u64 {
        self.now_ms().wrapping_sub(since)
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_ms(&self) -> u64 {
        T::now_ms(self)
    }
}

/// Clock backed by the embassy time driver
#[cfg(feature = "embassy-time")]
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

#[cfg(feature = "embassy-time")]
impl Clock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        embassy_time::Instant::now().as_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct FixedClock(Cell<u64>);

    impl Clock for FixedClock {
        fn now_ms(&self) -> u64 {
            self.0.get()
        }
    }

    #[test]
    fn test_elapsed() {
        let clock = FixedClock(Cell::new(150));
        assert_eq!(clock.elapsed_ms(100), 50);
        clock.0.set(250);
        assert_eq!(clock.elapsed_ms(100), 150);
    }

    #[test]
    fn test_elapsed_through_reference() {
        let clock = FixedClock(Cell::new(42));
        let by_ref = &clock;
        assert_eq!(by_ref.elapsed_ms(40), 2);
    }
}
