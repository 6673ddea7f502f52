//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::display::Rgb;
use crate::health::monitor::DEFAULT_DEGRADED_AFTER;
use crate::text::StringOrder;

/// Largest pixel batch the panel driver will stage per data transaction
pub const MAX_PIXELS_PER_TRANSFER: u16 = 64;

/// Depth of the reader's internal tag queue
pub const MAX_TAG_QUEUE_DEPTH: u8 = 20;

/// Default reader address on the tag bus
pub const DEFAULT_READER_ADDRESS: u8 = 0x28;

/// Rejected configuration value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Retry policy must allow at least one attempt
    ZeroAttempts,
    /// Backoff multiplier must be at least 1
    ZeroBackoffMultiplier,
    /// Pixel batch outside 1..=MAX_PIXELS_PER_TRANSFER
    InvalidTransferSize,
    /// Not a usable 7-bit device address
    InvalidAddress,
    /// Drain reads outside 1..=MAX_TAG_QUEUE_DEPTH
    InvalidDrainDepth,
    /// Poll interval must be non-zero
    ZeroPollInterval,
}

/// Bounded retry with exponential backoff for transport calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RetryPolicy {
    /// Total attempts including the first (1 = no retry)
    pub max_attempts: u8,
    /// Wait before the first retry
    pub backoff_ms: u16,
    /// Factor applied to the wait after each retry
    pub backoff_multiplier: u8,
}

impl RetryPolicy {
    /// Single attempt, failures surface immediately
    pub const NONE: Self = Self {
        max_attempts: 1,
        backoff_ms: 0,
        backoff_multiplier: 1,
    };

    /// Wait before retry number `retry` (1-based)
    pub fn backoff_for(&self, retry: u8) -> u32 {
        let mut wait = self.backoff_ms as u32;
        for _ in 1..retry {
            wait = wait.saturating_mul(self.backoff_multiplier as u32);
        }
        wait
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        if self.backoff_multiplier == 0 {
            return Err(ConfigError::ZeroBackoffMultiplier);
        }
        Ok(())
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_ms: 2,
            backoff_multiplier: 2,
        }
    }
}

/// Panel driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Character cell background
    pub background: Rgb,
    /// Character order for string drawing
    pub string_order: StringOrder,
    /// Pixels per fill data transaction (1 = one transaction per pixel)
    pub pixels_per_transfer: u16,
    pub retry: RetryPolicy,
}

impl DisplayConfig {
    /// Stock panel behaviour: mirrored string order, unbatched and unretried transfers
    pub const fn reference() -> Self {
        Self {
            background: Rgb::WHITE,
            string_order: StringOrder::Mirrored,
            pixels_per_transfer: 1,
            retry: RetryPolicy::NONE,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pixels_per_transfer == 0 || self.pixels_per_transfer > MAX_PIXELS_PER_TRANSFER {
            return Err(ConfigError::InvalidTransferSize);
        }
        self.retry.validate()
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            background: Rgb::WHITE,
            string_order: StringOrder::LeftToRight,
            pixels_per_transfer: 1,
            retry: RetryPolicy::default(),
        }
    }
}

/// Tag reader driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReaderConfig {
    /// 7-bit bus address
    pub address: u8,
    /// Block reads issued by the buffer-clear transaction
    pub clear_drain_reads: u8,
    /// Treat an all-zero tag id as "no tag"
    pub ignore_zero_tag: bool,
    /// Consecutive failed polls before the link is reported degraded
    pub degraded_after: u8,
    pub retry: RetryPolicy,
}

impl ReaderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.address == 0 || self.address > 0x7E {
            return Err(ConfigError::InvalidAddress);
        }
        if self.clear_drain_reads == 0 || self.clear_drain_reads > MAX_TAG_QUEUE_DEPTH {
            return Err(ConfigError::InvalidDrainDepth);
        }
        self.retry.validate()
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_READER_ADDRESS,
            clear_drain_reads: 1,
            ignore_zero_tag: true,
            degraded_after: DEFAULT_DEGRADED_AFTER,
            retry: RetryPolicy::default(),
        }
    }
}

/// Scheduling of the poll tick (consumed by the board's timer setup)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PollerConfig {
    /// Fixed interval between poll ticks
    pub interval_ms: u32,
}

impl PollerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        Ok(())
    }
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self { interval_ms: 250 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(RetryPolicy::default().validate(), Ok(()));
        assert_eq!(DisplayConfig::default().validate(), Ok(()));
        assert_eq!(DisplayConfig::reference().validate(), Ok(()));
        assert_eq!(ReaderConfig::default().validate(), Ok(()));
        assert_eq!(PollerConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_backoff_growth() {
        let policy = RetryPolicy {
            max_attempts: 4,
            backoff_ms: 5,
            backoff_multiplier: 3,
        };
        assert_eq!(policy.backoff_for(1), 5);
        assert_eq!(policy.backoff_for(2), 15);
        assert_eq!(policy.backoff_for(3), 45);
        assert_eq!(RetryPolicy::NONE.backoff_for(1), 0);
    }

    #[test]
    fn test_rejects_bad_values() {
        let retry = RetryPolicy {
            max_attempts: 0,
            ..RetryPolicy::default()
        };
        assert_eq!(retry.validate(), Err(ConfigError::ZeroAttempts));

        let display = DisplayConfig {
            pixels_per_transfer: MAX_PIXELS_PER_TRANSFER + 1,
            ..DisplayConfig::default()
        };
        assert_eq!(display.validate(), Err(ConfigError::InvalidTransferSize));

        let reader = ReaderConfig {
            address: 0x7F,
            ..ReaderConfig::default()
        };
        assert_eq!(reader.validate(), Err(ConfigError::InvalidAddress));

        let reader = ReaderConfig {
            clear_drain_reads: 0,
            ..ReaderConfig::default()
        };
        assert_eq!(reader.validate(), Err(ConfigError::InvalidDrainDepth));

        assert_eq!(
            PollerConfig { interval_ms: 0 }.validate(),
            Err(ConfigError::ZeroPollInterval)
        );
    }
}
