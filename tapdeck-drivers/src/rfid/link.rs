//! Register transport to the reader

use tapdeck_core::config::RetryPolicy;
use tapdeck_core::tag::TAG_BLOCK_LEN;
use tapdeck_hal::i2c::{FIRST_PROBE_ADDRESS, LAST_PROBE_ADDRESS};
use tapdeck_hal::{DelayMs, I2cBus};

use super::reg;
use super::scan::BusScan;
use crate::retry::Retry;

/// Reader transport error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RfidError<E> {
    /// I2C transaction failed after retries
    Bus(E),
}

/// One reader at a fixed address on an owned I2C bus
pub struct RfidLink<I2C, D> {
    i2c: I2C,
    address: u8,
    retry: Retry<D>,
}

impl<I2C: I2cBus, D: DelayMs> RfidLink<I2C, D> {
    pub fn new(i2c: I2C, address: u8, delay: D, retry: RetryPolicy) -> Self {
        Self {
            i2c,
            address,
            retry: Retry::new(retry, delay),
        }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.retry.release())
    }

    /// Write the register address, repeated start, read one byte
    pub fn read_register(&mut self, register: u8) -> Result<u8, RfidError<I2C::Error>> {
        let address = self.address;
        let mut value = [0u8];
        self.retry
            .run(&mut self.i2c, |i2c| {
                i2c.write_read(address, &[register], &mut value)
            })
            .map_err(RfidError::Bus)?;
        Ok(value[0])
    }

    /// Single write of `[register, value]`
    pub fn write_register(&mut self, register: u8, value: u8) -> Result<(), RfidError<I2C::Error>> {
        let address = self.address;
        self.retry
            .run(&mut self.i2c, |i2c| i2c.write(address, &[register, value]))
            .map_err(RfidError::Bus)
    }

    /// Read the head of the tag queue
    pub fn read_block(&mut self) -> Result<[u8; TAG_BLOCK_LEN], RfidError<I2C::Error>> {
        let address = self.address;
        let mut block = [0u8; TAG_BLOCK_LEN];
        self.retry
            .run(&mut self.i2c, |i2c| i2c.read(address, &mut block))
            .map_err(RfidError::Bus)?;
        Ok(block)
    }

    /// Write the request byte, then drain `drain_reads` blocks
    pub fn clear_tags(&mut self, drain_reads: u8) -> Result<(), RfidError<I2C::Error>> {
        let address = self.address;
        self.retry
            .run(&mut self.i2c, |i2c| i2c.write(address, &[reg::TAG_REQUEST]))
            .map_err(RfidError::Bus)?;
        for _ in 0..drain_reads {
            self.read_block()?;
        }
        Ok(())
    }

    /// Probe every usable 7-bit address with a zero-length write
    ///
    /// Diagnostic only; probes are not retried.
    pub fn bus_scan(&mut self) -> BusScan {
        let mut scan = BusScan::new();
        for address in FIRST_PROBE_ADDRESS..=LAST_PROBE_ADDRESS {
            if self.i2c.probe(address) {
                scan.mark(address);
            }
        }
        info!("i2c scan: {} device(s)", scan.count());
        scan
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use heapless::{Deque, Vec};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MockError;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Op {
        Write(u8, Vec<u8, 4>),
        Read(u8, usize),
        WriteRead(u8, u8),
    }

    /// Scripted reader
    ///
    /// Plain reads pop queued blocks (all zeroes once empty); register
    /// reads come from `registers`.
    pub struct MockI2c {
        pub ops: Vec<Op, 64>,
        pub blocks: Deque<[u8; TAG_BLOCK_LEN], 16>,
        pub registers: [u8; 64],
        pub responders: Vec<u8, 4>,
        pub fail_ops: u8,
        /// Fail only non-empty plain writes
        pub fail_writes: u8,
    }

    impl MockI2c {
        pub fn new() -> Self {
            Self {
                ops: Vec::new(),
                blocks: Deque::new(),
                registers: [0; 64],
                responders: Vec::new(),
                fail_ops: 0,
                fail_writes: 0,
            }
        }

        pub fn queue(&mut self, block: [u8; TAG_BLOCK_LEN]) {
            self.blocks.push_back(block).unwrap();
        }

        fn fail(&mut self) -> bool {
            if self.fail_ops > 0 {
                self.fail_ops -= 1;
                true
            } else {
                false
            }
        }
    }

    impl I2cBus for MockI2c {
        type Error = MockError;

        fn write(&mut self, address: u8, data: &[u8]) -> Result<(), MockError> {
            if data.is_empty() {
                return if self.responders.contains(&address) {
                    Ok(())
                } else {
                    Err(MockError)
                };
            }
            if self.fail_writes > 0 {
                self.fail_writes -= 1;
                return Err(MockError);
            }
            if self.fail() {
                return Err(MockError);
            }
            self.ops
                .push(Op::Write(address, Vec::from_slice(data).unwrap()))
                .unwrap();
            Ok(())
        }

        fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), MockError> {
            if self.fail() {
                return Err(MockError);
            }
            self.ops.push(Op::Read(address, buf.len())).unwrap();
            let block = self.blocks.pop_front().unwrap_or([0; TAG_BLOCK_LEN]);
            buf.copy_from_slice(&block[..buf.len()]);
            Ok(())
        }

        fn write_read(
            &mut self,
            address: u8,
            write_data: &[u8],
            read_buf: &mut [u8],
        ) -> Result<(), MockError> {
            if self.fail() {
                return Err(MockError);
            }
            let register = write_data[0];
            self.ops.push(Op::WriteRead(address, register)).unwrap();
            read_buf[0] = self.registers[register as usize];
            Ok(())
        }
    }

    pub struct NoDelay;

    impl DelayMs for NoDelay {
        fn delay_ms(&mut self, _ms: u32) {}
    }

    fn link(i2c: MockI2c) -> RfidLink<MockI2c, NoDelay> {
        RfidLink::new(i2c, 0x28, NoDelay, RetryPolicy::default())
    }

    #[test]
    fn test_read_register_two_phase() {
        let mut i2c = MockI2c::new();
        i2c.registers[reg::VERSION as usize] = 0x92;
        let mut link = link(i2c);

        assert_eq!(link.read_register(reg::VERSION), Ok(0x92));
        let (i2c, _) = link.release();
        assert_eq!(i2c.ops.as_slice(), &[Op::WriteRead(0x28, reg::VERSION)]);
    }

    #[test]
    fn test_write_register_single_phase() {
        let mut link = link(MockI2c::new());
        link.write_register(0x10, 0xAB).unwrap();
        let (i2c, _) = link.release();
        assert_eq!(
            i2c.ops.as_slice(),
            &[Op::Write(0x28, Vec::from_slice(&[0x10, 0xAB]).unwrap())]
        );
    }

    #[test]
    fn test_clear_tags_writes_request_then_drains() {
        let mut link = link(MockI2c::new());
        link.clear_tags(2).unwrap();
        let (i2c, _) = link.release();
        assert_eq!(
            i2c.ops.as_slice(),
            &[
                Op::Write(0x28, Vec::from_slice(&[reg::TAG_REQUEST]).unwrap()),
                Op::Read(0x28, TAG_BLOCK_LEN),
                Op::Read(0x28, TAG_BLOCK_LEN),
            ]
        );
    }

    #[test]
    fn test_transient_failure_retried() {
        let mut i2c = MockI2c::new();
        i2c.fail_ops = 2;
        let mut link = link(i2c);
        assert!(link.read_block().is_ok());
    }

    #[test]
    fn test_persistent_failure_reported() {
        let mut i2c = MockI2c::new();
        i2c.fail_ops = 3;
        let mut link = link(i2c);
        assert_eq!(link.read_block(), Err(RfidError::Bus(MockError)));
    }

    #[test]
    fn test_bus_scan_finds_responders() {
        let mut i2c = MockI2c::new();
        i2c.responders.push(0x28).unwrap();
        i2c.responders.push(0x3C).unwrap();
        let mut link = link(i2c);

        let scan = link.bus_scan();
        assert!(scan.is_present(0x28));
        assert!(scan.is_present(0x3C));
        assert_eq!(scan.count(), 2);
    }
}
