//! Consecutive-failure monitor

/// Default number of consecutive failures before the link is degraded
pub const DEFAULT_DEGRADED_AFTER: u8 = 3;

/// Link condition as seen by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkStatus {
    /// Last operation succeeded, or failures are below the threshold
    Healthy,
    /// Too many consecutive failures; show "no data"
    Degraded,
}

/// Tracks consecutive transport failures on one bus
#[derive(Debug, Clone)]
pub struct LinkMonitor {
    /// Failures since the last success
    consecutive_failures: u8,
    /// Threshold for [`LinkStatus::Degraded`]
    degraded_after: u8,
    /// Lifetime failure count (diagnostics only)
    total_failures: u32,
}

impl Default for LinkMonitor {
    fn default() -> Self {
        Self::new(DEFAULT_DEGRADED_AFTER)
    }
}

impl LinkMonitor {
    /// Create a monitor; a threshold of 0 is treated as 1
    pub fn new(degraded_after: u8) -> Self {
        Self {
            consecutive_failures: 0,
            degraded_after: degraded_after.max(1),
            total_failures: 0,
        }
    }

    /// Record a completed operation
    pub fn record_success(&mut self) {
        self.consecutive_failures = 0;
    }

    /// Record a failed operation
    pub fn record_failure(&mut self) {
        self.consecutive_failures = self.consecutive_failures.saturating_add(1);
        self.total_failures = self.total_failures.saturating_add(1);
    }

    pub fn status(&self) -> LinkStatus {
        if self.consecutive_failures >= self.degraded_after {
            LinkStatus::Degraded
        } else {
            LinkStatus::Healthy
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status() == LinkStatus::Healthy
    }

    pub fn consecutive_failures(&self) -> u8 {
        self.consecutive_failures
    }

    pub fn total_failures(&self) -> u32 {
        self.total_failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_healthy() {
        let monitor = LinkMonitor::default();
        assert_eq!(monitor.status(), LinkStatus::Healthy);
        assert_eq!(monitor.consecutive_failures(), 0);
    }

    #[test]
    fn test_degrades_at_threshold() {
        let mut monitor = LinkMonitor::new(3);

        monitor.record_failure();
        monitor.record_failure();
        assert!(monitor.is_healthy());

        monitor.record_failure();
        assert_eq!(monitor.status(), LinkStatus::Degraded);
    }

    #[test]
    fn test_success_resets_counter() {
        let mut monitor = LinkMonitor::new(2);

        monitor.record_failure();
        monitor.record_failure();
        assert_eq!(monitor.status(), LinkStatus::Degraded);

        monitor.record_success();
        assert!(monitor.is_healthy());
        assert_eq!(monitor.consecutive_failures(), 0);
        assert_eq!(monitor.total_failures(), 2);
    }

    #[test]
    fn test_zero_threshold_clamped() {
        let mut monitor = LinkMonitor::new(0);
        assert!(monitor.is_healthy());
        monitor.record_failure();
        assert!(!monitor.is_healthy());
    }
}
