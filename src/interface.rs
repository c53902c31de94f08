//! Bus interface implementation for the LTR-559
//!
//! This module provides an implementation of the `device-driver` register
//! traits on top of an `embedded-hal` I2C bus.

use crate::I2C_ADDRESS;

use device_driver::RegisterInterface;

/// Largest register write `I2cInterface` accepts, in bytes
pub const MAX_WRITE_LEN: usize = 4;

/// I2C interface for the LTR-559
///
/// Register writes are framed in a stack buffer and may carry at most
/// [`MAX_WRITE_LEN`] data bytes. The driver itself writes one or two.
/// Longer writes trip a debug assertion. Reads have no length limit.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Create a new I2C interface with the fixed LTR-559 address (0x23)
    ///
    /// # Arguments
    /// * `i2c` - The I2C peripheral
    ///
    /// # Example
    /// ```ignore
    /// let interface = I2cInterface::default(i2c);
    /// let mut sensor = Ltr559::new(interface, Config::default(), &mut delay)?;
    /// ```
    pub const fn default(i2c: I2C) -> Self {
        Self {
            i2c,
            address: I2C_ADDRESS,
        }
    }

    /// Create a new I2C interface with a custom device address
    ///
    /// Useful behind address translators or multiplexers that remap the
    /// chip. For a directly attached chip, prefer [`default()`](Self::default).
    ///
    /// # Arguments
    /// * `i2c` - The I2C peripheral
    /// * `address` - The I2C device address
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// The 7-bit device address this interface talks to
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Consume the interface and return the I2C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }
}

/// Prefix `data` with the register address
fn frame(address: u8, data: &[u8]) -> ([u8; MAX_WRITE_LEN + 1], usize) {
    debug_assert!(
        data.len() <= MAX_WRITE_LEN,
        "register write longer than MAX_WRITE_LEN"
    );
    let mut buffer = [0u8; MAX_WRITE_LEN + 1];
    buffer[0] = address;
    let len = data.len().min(MAX_WRITE_LEN);
    buffer[1..=len].copy_from_slice(&data[..len]);
    (buffer, len + 1)
}

impl<I2C, E> RegisterInterface for I2cInterface<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.i2c.write_read(self.address, &[address], read_data)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let (buffer, len) = frame(address, write_data);
        self.i2c.write(self.address, &buffer[..len])
    }
}

#[cfg(feature = "async")]
impl<I2C, E> device_driver::AsyncRegisterInterface for I2cInterface<I2C>
where
    I2C: embedded_hal_async::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    async fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.i2c
            .write_read(self.address, &[address], read_data)
            .await
    }

    async fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let (buffer, len) = frame(address, write_data);
        self.i2c.write(self.address, &buffer[..len]).await
    }
}
