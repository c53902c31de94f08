//! Unit tests for the I2C interface, driven through a simulated bus

use crate::common::MockDelay;
use ltr559::{Config, Error, I2C_ADDRESS, I2cInterface, Ltr559};

/// Simulated LTR-559 on an I2C bus
///
/// The first byte of a write sets the register pointer; further bytes are
/// written from there with auto-increment. Reads continue from the pointer.
struct MockI2c {
    registers: [u8; 256],
    pointer: u8,
    /// Every (address, bytes written) pair seen on the bus
    writes: Vec<(u8, Vec<u8>)>,
    transactions: usize,
    fail_next: bool,
}

impl MockI2c {
    fn new() -> Self {
        let mut registers = [0u8; 256];
        registers[0x82] = 0x7F;
        registers[0x83] = 0x01;
        registers[0x84] = 0x02;
        registers[0x85] = 0x03;
        registers[0x86] = 0x92;
        registers[0x87] = 0x05;
        registers[0x8F] = 0x08;
        Self {
            registers,
            pointer: 0,
            writes: Vec::new(),
            transactions: 0,
            fail_next: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct MockError;

impl embedded_hal::i2c::Error for MockError {
    fn kind(&self) -> embedded_hal::i2c::ErrorKind {
        embedded_hal::i2c::ErrorKind::Other
    }
}

impl embedded_hal::i2c::ErrorType for MockI2c {
    type Error = MockError;
}

impl embedded_hal::i2c::I2c for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [embedded_hal::i2c::Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.fail_next {
            self.fail_next = false;
            return Err(MockError);
        }
        self.transactions += 1;

        for operation in operations {
            match operation {
                embedded_hal::i2c::Operation::Write(bytes) => {
                    self.writes.push((address, bytes.to_vec()));
                    let Some((&register, data)) = bytes.split_first() else {
                        continue;
                    };
                    self.pointer = register;
                    for &byte in data {
                        // The reset completes instantly on this bus
                        let value = if self.pointer == 0x80 { byte & !0x02 } else { byte };
                        self.registers[usize::from(self.pointer)] = value;
                        self.pointer = self.pointer.wrapping_add(1);
                    }
                }
                embedded_hal::i2c::Operation::Read(buffer) => {
                    for byte in buffer.iter_mut() {
                        *byte = self.registers[usize::from(self.pointer)];
                        self.pointer = self.pointer.wrapping_add(1);
                    }
                }
            }
        }
        Ok(())
    }
}

#[test]
fn test_default_address() {
    let interface = I2cInterface::default(MockI2c::new());
    assert_eq!(interface.address(), I2C_ADDRESS);
    assert_eq!(I2C_ADDRESS, 0x23);

    let interface = I2cInterface::new(MockI2c::new(), 0x42);
    assert_eq!(interface.address(), 0x42);
}

#[test]
fn test_bring_up_over_i2c() {
    let interface = I2cInterface::default(MockI2c::new());
    let driver = Ltr559::new(interface, Config::default(), &mut MockDelay::new()).unwrap();

    let i2c = driver.release().release();
    assert!(i2c.writes.iter().all(|(address, _)| *address == 0x23));
    assert_eq!(i2c.registers[0x80], 0x09);
    assert_eq!(i2c.registers[0x81], 0x23);
    assert_eq!(i2c.registers[0x82], 0x1B);
    assert_eq!(i2c.registers[0x85], 0x08);
}

#[test]
fn test_write_is_prefixed_with_register_address() {
    let interface = I2cInterface::default(MockI2c::new());
    let mut driver = Ltr559::new(interface, Config::default(), &mut MockDelay::new()).unwrap();

    driver.set_als_thresholds(0x1234, 0xBEEF).unwrap();

    let i2c = driver.release().release();
    let tail: Vec<_> = i2c.writes.iter().rev().take(2).rev().cloned().collect();
    assert_eq!(
        tail,
        vec![(0x23, vec![0x99, 0x34, 0x12]), (0x23, vec![0x97, 0xEF, 0xBE])]
    );
}

#[test]
fn test_burst_read_uses_one_transaction() {
    let mut i2c = MockI2c::new();
    i2c.registers[0x88..0x8C].copy_from_slice(&[0x01, 0x02, 0x03, 0x04]);

    let mut driver = Ltr559::new(
        I2cInterface::default(&mut i2c),
        Config::default(),
        &mut MockDelay::new(),
    )
    .unwrap();
    let channels = driver.read_als_channels().unwrap();
    drop(driver);

    assert_eq!(channels.ch1, 0x0201);
    assert_eq!(channels.ch0, 0x0403);
    // The last transaction wrote only the start register, then read four bytes
    assert_eq!(i2c.writes.last(), Some(&(0x23, vec![0x88])));
}

#[test]
fn test_bus_error_is_wrapped() {
    let mut i2c = MockI2c::new();
    i2c.fail_next = true;

    let result = Ltr559::new(
        I2cInterface::default(&mut i2c),
        Config::default(),
        &mut MockDelay::new(),
    );
    assert_eq!(result.err(), Some(Error::Bus(MockError)));
    assert_eq!(i2c.transactions, 0);
}

#[test]
fn test_driver_usable_after_release() {
    let interface = I2cInterface::default(MockI2c::new());
    let driver = Ltr559::new(interface, Config::default(), &mut MockDelay::new()).unwrap();

    // Hand the bus back and build a new driver on it
    let i2c = driver.release().release();
    let mut driver =
        Ltr559::new(I2cInterface::default(i2c), Config::default(), &mut MockDelay::new()).unwrap();
    assert_eq!(driver.read_identity().unwrap().part_number, 0x09);
}

#[test]
fn test_longest_register_write_reaches_bus() {
    use device_driver::RegisterInterface;

    let mut interface = I2cInterface::default(MockI2c::new());
    let data = [0x01, 0x02, 0x03, 0x04];
    assert_eq!(data.len(), ltr559::interface::MAX_WRITE_LEN);
    interface.write_register(0x97, 32, &data).unwrap();

    let i2c = interface.release();
    assert_eq!(i2c.writes, vec![(0x23, vec![0x97, 0x01, 0x02, 0x03, 0x04])]);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "register write longer than MAX_WRITE_LEN")]
fn test_oversized_register_write_is_caught() {
    use device_driver::RegisterInterface;

    let mut interface = I2cInterface::default(MockI2c::new());
    let _ = interface.write_register(0x88, 48, &[1, 2, 3, 4, 5, 6]);
}
