//! Blocking delay abstraction

/// Millisecond-resolution blocking delay
///
/// Used for controller settle times and retry backoff. Implementations may
/// spin or sleep, but must not return early.
pub trait DelayMs {
    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}

impl<T: DelayMs + ?Sized> DelayMs for &mut T {
    fn delay_ms(&mut self, ms: u32) {
        T::delay_ms(self, ms)
    }
}
