//! Bounded retry with backoff for bus transactions

use tapdeck_core::config::RetryPolicy;
use tapdeck_hal::DelayMs;

/// A [`RetryPolicy`] paired with the delay used to wait between attempts
///
/// Drivers keep one of these next to their bus handle; the bus is passed
/// into [`Retry::run`] so the two can be borrowed independently.
pub struct Retry<D> {
    policy: RetryPolicy,
    delay: D,
}

impl<D: DelayMs> Retry<D> {
    pub fn new(policy: RetryPolicy, delay: D) -> Self {
        Self { policy, delay }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Plain blocking wait, for controller settle times
    pub fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    /// Run `op` until it succeeds or the attempt budget is spent
    ///
    /// Returns the last error if every attempt fails. A policy with zero
    /// attempts still runs `op` once.
    pub fn run<B, T, E>(
        &mut self,
        bus: &mut B,
        mut op: impl FnMut(&mut B) -> Result<T, E>,
    ) -> Result<T, E> {
        let attempts = self.policy.max_attempts.max(1);
        let mut retry = 0u8;
        loop {
            match op(bus) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    retry += 1;
                    if retry >= attempts {
                        return Err(e);
                    }
                    let wait = self.policy.backoff_for(retry);
                    debug!("bus error, retry {} of {} in {} ms", retry, attempts - 1, wait);
                    if wait > 0 {
                        self.delay.delay_ms(wait);
                    }
                }
            }
        }
    }

    pub fn release(self) -> D {
        self.delay
    }
}
