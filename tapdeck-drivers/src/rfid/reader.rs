//! Polled tag reader

use tapdeck_core::config::{ConfigError, ReaderConfig};
use tapdeck_core::health::{LinkMonitor, LinkStatus};
use tapdeck_core::state::{PollerState, TagDebouncer};
use tapdeck_core::tag::{decode_block, TagRecord};
use tapdeck_core::traits::TagSource;
use tapdeck_hal::{DelayMs, I2cBus};

use super::link::{RfidError, RfidLink};
use super::scan::BusScan;
use super::{reg, STATUS_TAG_PRESENT};

/// Identification read at bring-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReaderInfo {
    pub version: u8,
    pub status: u8,
}

impl ReaderInfo {
    pub fn tag_present(&self) -> bool {
        self.status & STATUS_TAG_PRESENT != 0
    }
}

/// Reader driver with debouncing and link health
///
/// Each [`poll`](TagReader::poll) reads one block, decodes it, emits a
/// record only when the tag id changes, then clears the reader's queue.
pub struct TagReader<I2C, D> {
    link: RfidLink<I2C, D>,
    config: ReaderConfig,
    debouncer: TagDebouncer,
    monitor: LinkMonitor,
}

impl<I2C: I2cBus, D: DelayMs> TagReader<I2C, D> {
    /// Create a reader after checking `config`
    ///
    /// Does not touch the bus; call [`init`](Self::init) to identify the
    /// device.
    pub fn new(i2c: I2C, delay: D, config: ReaderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            link: RfidLink::new(i2c, config.address, delay, config.retry),
            config,
            debouncer: TagDebouncer::new(config.ignore_zero_tag),
            monitor: LinkMonitor::new(config.degraded_after),
        })
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn state(&self) -> &PollerState {
        self.debouncer.state()
    }

    pub fn monitor(&self) -> &LinkMonitor {
        &self.monitor
    }

    /// Raw register access for diagnostics
    pub fn link(&mut self) -> &mut RfidLink<I2C, D> {
        &mut self.link
    }

    pub fn release(self) -> (I2C, D) {
        self.link.release()
    }

    /// Read the version and status registers
    pub fn init(&mut self) -> Result<ReaderInfo, RfidError<I2C::Error>> {
        let result = self.read_info();
        match &result {
            Ok(info) => {
                self.monitor.record_success();
                info!("rfid version {=u8:#x}, status {=u8:#x}", info.version, info.status);
            }
            Err(_) => {
                self.monitor.record_failure();
                warn!("rfid init failed at {=u8:#x}", self.config.address);
            }
        }
        result
    }

    fn read_info(&mut self) -> Result<ReaderInfo, RfidError<I2C::Error>> {
        let version = self.link.read_register(reg::VERSION)?;
        let status = self.link.read_register(reg::STATUS)?;
        Ok(ReaderInfo { version, status })
    }

    /// One poll tick: read, decode, debounce, clear
    ///
    /// A failed block read aborts the tick before any state change. A
    /// failed clear after a new tag was seen still returns the record;
    /// the failure only counts against link health.
    pub fn poll(&mut self) -> Result<Option<TagRecord>, RfidError<I2C::Error>> {
        let block = match self.link.read_block() {
            Ok(block) => block,
            Err(e) => {
                self.record_failure("block read");
                return Err(e);
            }
        };

        let emitted = self.debouncer.observe(decode_block(&block));
        if let Some(record) = &emitted {
            info!("tag {} at {} ms", record.tag_id, record.timestamp);
        }

        match self.link.clear_tags(self.config.clear_drain_reads) {
            Ok(()) => self.monitor.record_success(),
            Err(e) => {
                self.record_failure("queue clear");
                if emitted.is_none() {
                    return Err(e);
                }
            }
        }
        Ok(emitted)
    }

    fn record_failure(&mut self, stage: &str) {
        let was_healthy = self.monitor.is_healthy();
        self.monitor.record_failure();
        warn!(
            "rfid {=str} failed ({} in a row)",
            stage,
            self.monitor.consecutive_failures()
        );
        if was_healthy && !self.monitor.is_healthy() {
            warn!("rfid link degraded");
        }
    }

    /// Whether the status register reports a tag in the field
    pub fn tag_present(&mut self) -> Result<bool, RfidError<I2C::Error>> {
        let status = self.link.read_register(reg::STATUS)?;
        Ok(status & STATUS_TAG_PRESENT != 0)
    }

    /// Clear the reader's tag queue outside the poll cycle
    pub fn clear_tags(&mut self) -> Result<(), RfidError<I2C::Error>> {
        self.link.clear_tags(self.config.clear_drain_reads)
    }

    pub fn bus_scan(&mut self) -> BusScan {
        self.link.bus_scan()
    }

    pub fn link_status(&self) -> LinkStatus {
        self.monitor.status()
    }
}

impl<I2C: I2cBus, D: DelayMs> TagSource for TagReader<I2C, D> {
    type Error = RfidError<I2C::Error>;

    fn poll(&mut self) -> Result<Option<TagRecord>, Self::Error> {
        TagReader::poll(self)
    }

    fn link_status(&self) -> LinkStatus {
        TagReader::link_status(self)
    }
}
