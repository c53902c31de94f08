//! High-level driver API for the LTR-559
//!
//! This module provides the [`Ltr559`] driver: the generic field accessor
//! used for every register field, the bring-up sequence run on construction,
//! and typed helpers layered on top of the accessor.
//!
//! ## Bring-up
//!
//! [`Ltr559::new`] walks the chip through
//! [`Uninitialized`](State::Uninitialized) →
//! [`Resetting`](State::Resetting) → [`Configuring`](State::Configuring) →
//! [`Active`](State::Active). Each step must succeed before the next one
//! starts; on any error the partially initialized driver is dropped.

use crate::config::{
    AlsGain, AlsIntegrationTime, AlsMeasurementRate, Config, InterruptMode, InterruptPolarity,
    LedConfig, PsMeasurementRate, RESET_POLL_INTERVAL_MS,
};
use crate::registers::{self, Field};
use crate::{Error, PART_ID, REVISION_ID};

// Only import RegisterInterface when not using async feature
#[cfg(not(feature = "async"))]
use device_driver::RegisterInterface;

/// Widest field, in register bytes
const MAX_SPAN: usize = 2;

/// ALS channel registers read as one burst (CH1 low/high, CH0 low/high)
const ALS_DATA_LEN: usize = 4;

/// Bring-up progress of the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Identity not yet verified
    Uninitialized,
    /// Software reset issued, waiting for it to complete
    Resetting,
    /// Writing interrupt, LED and measurement settings
    Configuring,
    /// Both sensors sampling continuously
    Active,
}

/// Chip identification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Identity {
    /// Part number (0x09 for the LTR-559)
    pub part_number: u8,
    /// Silicon revision (0x02)
    pub revision: u8,
    /// Manufacturer ID (0x05)
    pub manufacturer_id: u8,
}

/// Decoded `ALS_PS_STATUS` register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct Status {
    /// The current ALS sample is invalid
    pub als_data_invalid: bool,
    /// Raw gain encoding the current ALS sample was taken with
    pub als_data_gain: u8,
    /// ALS interrupt pending
    pub als_interrupt_active: bool,
    /// New ALS data since the last read
    pub als_new_data: bool,
    /// PS interrupt pending
    pub ps_interrupt_active: bool,
    /// New PS data since the last read
    pub ps_new_data: bool,
}

impl Status {
    /// Decode a raw `ALS_PS_STATUS` value
    #[must_use]
    pub fn from_register(raw: u8) -> Self {
        let raw = [raw];
        let flag = |field: Field| field.extract(&raw) != 0;
        Self {
            als_data_invalid: flag(registers::ALS_DATA_INVALID),
            als_data_gain: registers::ALS_DATA_GAIN.extract(&raw) as u8,
            als_interrupt_active: flag(registers::ALS_INTERRUPT_ACTIVE),
            als_new_data: flag(registers::ALS_NEW_DATA),
            ps_interrupt_active: flag(registers::PS_INTERRUPT_ACTIVE),
            ps_new_data: flag(registers::PS_NEW_DATA),
        }
    }

    /// The gain of the current ALS sample, `None` for a reserved encoding
    #[must_use]
    pub const fn als_gain(&self) -> Option<AlsGain> {
        AlsGain::from_bits(self.als_data_gain)
    }
}

/// Raw ALS channel counts from one conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlsChannels {
    /// Channel 0 (visible + infrared)
    pub ch0: u16,
    /// Channel 1 (infrared)
    pub ch1: u16,
}

impl AlsChannels {
    /// Decode the four data bytes starting at `ALS_DATA_CH1`
    #[must_use]
    pub fn from_bytes(raw: &[u8; 4]) -> Self {
        Self {
            ch1: registers::ALS_DATA_CH1.extract(&raw[0..2]),
            ch0: registers::ALS_DATA_CH0.extract(&raw[2..4]),
        }
    }
}

/// Raw proximity reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Proximity {
    /// 11-bit PS count
    pub count: u16,
    /// The photodiode saturated during the measurement
    pub saturated: bool,
}

impl Proximity {
    /// Decode the two data bytes starting at `PS_DATA`
    #[must_use]
    pub fn from_bytes(raw: &[u8; 2]) -> Self {
        Self {
            count: registers::PS_DATA.extract(raw),
            saturated: registers::PS_SATURATION.extract(&raw[1..]) != 0,
        }
    }
}

/// Main driver for the LTR-559
pub struct Ltr559<I> {
    interface: I,
    state: State,
}

impl<I> Ltr559<I> {
    /// Current bring-up state
    ///
    /// A driver returned by [`new()`](Self::new) is always [`State::Active`].
    pub const fn state(&self) -> State {
        self.state
    }

    /// Consume the driver and return the bus interface
    pub fn release(self) -> I {
        self.interface
    }
}

const fn size_bits(len: usize) -> u32 {
    (len * 8) as u32
}

fn check_identity<E>(part_number: u16, revision: u16) -> Result<(), Error<E>> {
    if (part_number, revision) == (u16::from(PART_ID), u16::from(REVISION_ID)) {
        Ok(())
    } else {
        Err(Error::DeviceNotFound {
            part_number: part_number as u8,
            revision: revision as u8,
        })
    }
}

fn decode_gain<E>(raw: u16) -> Result<AlsGain, Error<E>> {
    AlsGain::from_bits(raw as u8).ok_or(Error::InvalidValue(raw as u8))
}

fn decode_integration_time<E>(raw: u16) -> Result<AlsIntegrationTime, Error<E>> {
    AlsIntegrationTime::from_bits(raw as u8).ok_or(Error::InvalidValue(raw as u8))
}

#[cfg(not(feature = "async"))]
impl<I> Ltr559<I>
where
    I: RegisterInterface<AddressType = u8>,
{
    /// Create a new LTR-559 driver and bring the chip up
    ///
    /// Verifies the part number and revision, issues a software reset and
    /// waits for it to complete, then configures the chip so both sensors
    /// sample continuously:
    ///
    /// - interrupt mode and polarity (only if `config.enable_interrupts`),
    ///   written before anything is switched to active mode
    /// - LED: 50 mA, 100 % duty cycle, 30 kHz, one pulse
    /// - PS active with the saturation indicator, 50 ms repeat rate
    /// - ALS 50 ms repeat rate and integration time, 4x gain, active
    /// - full-range ALS and PS thresholds, zero PS offset
    ///
    /// # Arguments
    ///
    /// * `interface` - Bus interface, e.g. [`I2cInterface`](crate::I2cInterface)
    /// * `config` - Interrupt and reset timeout settings
    /// * `delay` - Delay provider for the reset poll
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The part number or revision do not match an LTR-559
    ///   ([`Error::DeviceNotFound`], nothing is written)
    /// - The reset does not complete within `config.reset_timeout_ms`
    ///   ([`Error::ResetTimeout`])
    /// - Communication with the device fails ([`Error::Bus`])
    ///
    /// # Example
    ///
    /// ```ignore
    /// use embassy_time::Delay;
    /// let interface = I2cInterface::default(i2c);
    /// let mut sensor = Ltr559::new(interface, Config::default(), &mut Delay)?;
    /// ```
    pub fn new<D>(interface: I, config: Config, delay: &mut D) -> Result<Self, Error<I::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        let mut driver = Self {
            interface,
            state: State::Uninitialized,
        };
        driver.bring_up(&config, delay)?;
        Ok(driver)
    }

    fn bring_up<D>(&mut self, config: &Config, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        let part_number = self.read_field(registers::PART_NUMBER)?;
        let revision = self.read_field(registers::REVISION)?;
        check_identity(part_number, revision)?;

        self.state = State::Resetting;
        self.reset(config, delay)?;

        self.state = State::Configuring;

        // The interrupt register must be set before the chip goes active
        if config.enable_interrupts {
            self.set_interrupt_mode(InterruptMode::Both)?;
            self.set_interrupt_polarity(config.interrupt_polarity)?;
        }

        self.set_led(&LedConfig::default())?;

        self.write_field(registers::PS_ACTIVE, 0b11)?;
        self.write_field(registers::PS_SATURATION_INDICATOR_ENABLE, 1)?;
        self.set_ps_measurement_rate(PsMeasurementRate::Ms50)?;

        self.set_als_measurement_rate(AlsMeasurementRate::Ms50)?;
        self.set_als_integration_time(AlsIntegrationTime::Ms50)?;

        self.set_als_thresholds(0x0000, registers::ALS_THRESHOLD_UPPER.max_value())?;
        self.write_field(registers::ALS_MODE, 1)?;
        self.set_als_gain(AlsGain::X4)?;

        self.set_ps_thresholds(0x0000, registers::PS_THRESHOLD_UPPER.max_value())?;
        self.set_ps_offset(0)?;

        self.state = State::Active;

        #[cfg(feature = "defmt")]
        defmt::info!("LTR-559 active");

        Ok(())
    }

    /// Set the software reset bit and poll until the chip clears it
    fn reset<D>(&mut self, config: &Config, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        self.write_field(registers::SW_RESET, 1)?;

        for _ in 0..config.reset_polls() {
            if self.read_field(registers::SW_RESET)? == 0 {
                #[cfg(feature = "defmt")]
                defmt::debug!("Software reset complete");
                return Ok(());
            }
            delay.delay_ms(RESET_POLL_INTERVAL_MS);
        }

        if self.read_field(registers::SW_RESET)? == 0 {
            Ok(())
        } else {
            #[cfg(feature = "defmt")]
            defmt::warn!("Software reset timed out after {} ms", config.reset_timeout_ms);
            Err(Error::ResetTimeout)
        }
    }

    /// Read a register field
    ///
    /// Performs one bus read covering the field's registers and returns the
    /// field value right-aligned.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let gain = sensor.read_field(ltr559::registers::ALS_GAIN)?;
    /// ```
    pub fn read_field(&mut self, field: Field) -> Result<u16, Error<I::Error>> {
        let mut raw = [0u8; MAX_SPAN];
        let bytes = &mut raw[..field.len()];
        self.interface
            .read_register(field.address(), size_bits(field.len()), bytes)?;
        Ok(field.extract(bytes))
    }

    /// Write a register field
    ///
    /// `value` is truncated to the field width. Fields that share their
    /// registers with other fields are read first and merged, so sibling
    /// fields keep their values. Fields that cover their registers entirely
    /// are written without a read.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadOnlyField`] without touching the bus if the field
    /// is read-only, or an error if communication with the device fails.
    pub fn write_field(&mut self, field: Field, value: u16) -> Result<(), Error<I::Error>> {
        if field.is_read_only() {
            return Err(Error::ReadOnlyField(field.name()));
        }

        let mut raw = [0u8; MAX_SPAN];
        let bytes = &mut raw[..field.len()];
        if !field.covers_registers() {
            self.interface
                .read_register(field.address(), size_bits(field.len()), bytes)?;
        }
        field.insert(bytes, value);
        self.interface
            .write_register(field.address(), size_bits(field.len()), bytes)?;
        Ok(())
    }

    /// Read part number, revision and manufacturer ID
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_identity(&mut self) -> Result<Identity, Error<I::Error>> {
        let mut raw = [0u8; 2];
        self.interface
            .read_register(registers::address::PART_ID, size_bits(raw.len()), &mut raw)?;
        Ok(Identity {
            part_number: registers::PART_NUMBER.extract(&raw) as u8,
            revision: registers::REVISION.extract(&raw) as u8,
            manufacturer_id: registers::MANUFACTURER_ID.extract(&raw[1..]) as u8,
        })
    }

    /// Read the ALS/PS status register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_status(&mut self) -> Result<Status, Error<I::Error>> {
        let mut raw = [0u8; 1];
        self.interface.read_register(
            registers::address::ALS_PS_STATUS,
            size_bits(raw.len()),
            &mut raw,
        )?;
        Ok(Status::from_register(raw[0]))
    }

    /// Read both ALS channels
    ///
    /// All four data bytes are read in one burst so both channels belong to
    /// the same conversion.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_als_channels(&mut self) -> Result<AlsChannels, Error<I::Error>> {
        let mut raw = [0u8; ALS_DATA_LEN];
        self.interface.read_register(
            registers::address::ALS_DATA_CH1,
            size_bits(raw.len()),
            &mut raw,
        )?;
        Ok(AlsChannels::from_bytes(&raw))
    }

    /// Read the PS count and saturation flag
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_proximity(&mut self) -> Result<Proximity, Error<I::Error>> {
        let mut raw = [0u8; 2];
        self.interface
            .read_register(registers::address::PS_DATA, size_bits(raw.len()), &mut raw)?;
        Ok(Proximity::from_bytes(&raw))
    }

    /// Read the configured ALS gain
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] for a reserved encoding, or an error if
    /// communication with the device fails.
    pub fn als_gain(&mut self) -> Result<AlsGain, Error<I::Error>> {
        let raw = self.read_field(registers::ALS_GAIN)?;
        decode_gain(raw)
    }

    /// Set the ALS gain
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_als_gain(&mut self, gain: AlsGain) -> Result<(), Error<I::Error>> {
        self.write_field(registers::ALS_GAIN, gain as u16)
    }

    /// Read the configured ALS integration time
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn als_integration_time(&mut self) -> Result<AlsIntegrationTime, Error<I::Error>> {
        let raw = self.read_field(registers::ALS_INTEGRATION_TIME)?;
        decode_integration_time(raw)
    }

    /// Set the ALS integration time
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_als_integration_time(
        &mut self,
        time: AlsIntegrationTime,
    ) -> Result<(), Error<I::Error>> {
        self.write_field(registers::ALS_INTEGRATION_TIME, time as u16)
    }

    /// Set the ALS measurement repeat rate
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_als_measurement_rate(
        &mut self,
        rate: AlsMeasurementRate,
    ) -> Result<(), Error<I::Error>> {
        self.write_field(registers::ALS_REPEAT_RATE, rate as u16)
    }

    /// Set the PS measurement repeat rate
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_ps_measurement_rate(
        &mut self,
        rate: PsMeasurementRate,
    ) -> Result<(), Error<I::Error>> {
        self.write_field(registers::PS_RATE, rate as u16)
    }

    /// Configure the proximity LED drive
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_led(&mut self, led: &LedConfig) -> Result<(), Error<I::Error>> {
        self.write_field(registers::LED_CURRENT, led.current as u16)?;
        self.write_field(registers::LED_DUTY_CYCLE, led.duty_cycle as u16)?;
        self.write_field(registers::LED_PULSE_FREQ, led.pulse_freq as u16)?;
        self.write_field(registers::LED_PULSE_COUNT, u16::from(led.pulse_count))
    }

    /// Select which measurements drive the INT pin
    ///
    /// The chip only accepts a new interrupt mode while both sensors are in
    /// standby.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_interrupt_mode(&mut self, mode: InterruptMode) -> Result<(), Error<I::Error>> {
        self.write_field(registers::INTERRUPT_MODE, mode as u16)
    }

    /// Set the INT pin polarity
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_interrupt_polarity(
        &mut self,
        polarity: InterruptPolarity,
    ) -> Result<(), Error<I::Error>> {
        self.write_field(registers::INTERRUPT_POLARITY, polarity as u16)
    }

    /// Set how many consecutive out-of-threshold readings raise an interrupt
    ///
    /// Each count is truncated to 4 bits; 0 interrupts on every reading
    /// outside the thresholds.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_interrupt_persist(&mut self, als: u8, ps: u8) -> Result<(), Error<I::Error>> {
        self.write_field(registers::ALS_INTERRUPT_PERSIST, u16::from(als))?;
        self.write_field(registers::PS_INTERRUPT_PERSIST, u16::from(ps))
    }

    /// Set the ALS interrupt thresholds
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_als_thresholds(&mut self, lower: u16, upper: u16) -> Result<(), Error<I::Error>> {
        self.write_field(registers::ALS_THRESHOLD_LOWER, lower)?;
        self.write_field(registers::ALS_THRESHOLD_UPPER, upper)
    }

    /// Set the PS interrupt thresholds (11 bits each, higher bits are dropped)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_ps_thresholds(&mut self, lower: u16, upper: u16) -> Result<(), Error<I::Error>> {
        self.write_field(registers::PS_THRESHOLD_LOWER, lower)?;
        self.write_field(registers::PS_THRESHOLD_UPPER, upper)
    }

    /// Set the PS crosstalk offset (10 bits)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_ps_offset(&mut self, offset: u16) -> Result<(), Error<I::Error>> {
        self.write_field(registers::PS_OFFSET, offset)
    }
}

#[cfg(feature = "async")]
impl<I> Ltr559<I>
where
    I: device_driver::AsyncRegisterInterface<AddressType = u8>,
{
    /// Create a new LTR-559 driver and bring the chip up (async)
    ///
    /// See the blocking variant for the exact sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The part number or revision do not match an LTR-559
    ///   ([`Error::DeviceNotFound`], nothing is written)
    /// - The reset does not complete within `config.reset_timeout_ms`
    ///   ([`Error::ResetTimeout`])
    /// - Communication with the device fails ([`Error::Bus`])
    pub async fn new<D>(
        interface: I,
        config: Config,
        delay: &mut D,
    ) -> Result<Self, Error<I::Error>>
    where
        D: embedded_hal_async::delay::DelayNs,
    {
        let mut driver = Self {
            interface,
            state: State::Uninitialized,
        };
        driver.bring_up(&config, delay).await?;
        Ok(driver)
    }

    async fn bring_up<D>(&mut self, config: &Config, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal_async::delay::DelayNs,
    {
        let part_number = self.read_field(registers::PART_NUMBER).await?;
        let revision = self.read_field(registers::REVISION).await?;
        check_identity(part_number, revision)?;

        self.state = State::Resetting;
        self.reset(config, delay).await?;

        self.state = State::Configuring;

        // The interrupt register must be set before the chip goes active
        if config.enable_interrupts {
            self.set_interrupt_mode(InterruptMode::Both).await?;
            self.set_interrupt_polarity(config.interrupt_polarity).await?;
        }

        self.set_led(&LedConfig::default()).await?;

        self.write_field(registers::PS_ACTIVE, 0b11).await?;
        self.write_field(registers::PS_SATURATION_INDICATOR_ENABLE, 1).await?;
        self.set_ps_measurement_rate(PsMeasurementRate::Ms50).await?;

        self.set_als_measurement_rate(AlsMeasurementRate::Ms50).await?;
        self.set_als_integration_time(AlsIntegrationTime::Ms50).await?;

        self.set_als_thresholds(0x0000, registers::ALS_THRESHOLD_UPPER.max_value())
            .await?;
        self.write_field(registers::ALS_MODE, 1).await?;
        self.set_als_gain(AlsGain::X4).await?;

        self.set_ps_thresholds(0x0000, registers::PS_THRESHOLD_UPPER.max_value())
            .await?;
        self.set_ps_offset(0).await?;

        self.state = State::Active;

        #[cfg(feature = "defmt")]
        defmt::info!("LTR-559 active");

        Ok(())
    }

    async fn reset<D>(&mut self, config: &Config, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal_async::delay::DelayNs,
    {
        self.write_field(registers::SW_RESET, 1).await?;

        for _ in 0..config.reset_polls() {
            if self.read_field(registers::SW_RESET).await? == 0 {
                #[cfg(feature = "defmt")]
                defmt::debug!("Software reset complete");
                return Ok(());
            }
            delay.delay_ms(RESET_POLL_INTERVAL_MS).await;
        }

        if self.read_field(registers::SW_RESET).await? == 0 {
            Ok(())
        } else {
            #[cfg(feature = "defmt")]
            defmt::warn!("Software reset timed out after {} ms", config.reset_timeout_ms);
            Err(Error::ResetTimeout)
        }
    }

    /// Read a register field (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_field(&mut self, field: Field) -> Result<u16, Error<I::Error>> {
        let mut raw = [0u8; MAX_SPAN];
        let bytes = &mut raw[..field.len()];
        self.interface
            .read_register(field.address(), size_bits(field.len()), bytes)
            .await?;
        Ok(field.extract(bytes))
    }

    /// Write a register field (async)
    ///
    /// Same truncation and read-modify-write rules as the blocking variant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadOnlyField`] without touching the bus if the field
    /// is read-only, or an error if communication with the device fails.
    pub async fn write_field(&mut self, field: Field, value: u16) -> Result<(), Error<I::Error>> {
        if field.is_read_only() {
            return Err(Error::ReadOnlyField(field.name()));
        }

        let mut raw = [0u8; MAX_SPAN];
        let bytes = &mut raw[..field.len()];
        if !field.covers_registers() {
            self.interface
                .read_register(field.address(), size_bits(field.len()), bytes)
                .await?;
        }
        field.insert(bytes, value);
        self.interface
            .write_register(field.address(), size_bits(field.len()), bytes)
            .await?;
        Ok(())
    }

    /// Read part number, revision and manufacturer ID (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_identity(&mut self) -> Result<Identity, Error<I::Error>> {
        let mut raw = [0u8; 2];
        self.interface
            .read_register(registers::address::PART_ID, size_bits(raw.len()), &mut raw)
            .await?;
        Ok(Identity {
            part_number: registers::PART_NUMBER.extract(&raw) as u8,
            revision: registers::REVISION.extract(&raw) as u8,
            manufacturer_id: registers::MANUFACTURER_ID.extract(&raw[1..]) as u8,
        })
    }

    /// Read the ALS/PS status register (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_status(&mut self) -> Result<Status, Error<I::Error>> {
        let mut raw = [0u8; 1];
        self.interface
            .read_register(
                registers::address::ALS_PS_STATUS,
                size_bits(raw.len()),
                &mut raw,
            )
            .await?;
        Ok(Status::from_register(raw[0]))
    }

    /// Read both ALS channels in one burst (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_als_channels(&mut self) -> Result<AlsChannels, Error<I::Error>> {
        let mut raw = [0u8; ALS_DATA_LEN];
        self.interface
            .read_register(
                registers::address::ALS_DATA_CH1,
                size_bits(raw.len()),
                &mut raw,
            )
            .await?;
        Ok(AlsChannels::from_bytes(&raw))
    }

    /// Read the PS count and saturation flag (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_proximity(&mut self) -> Result<Proximity, Error<I::Error>> {
        let mut raw = [0u8; 2];
        self.interface
            .read_register(registers::address::PS_DATA, size_bits(raw.len()), &mut raw)
            .await?;
        Ok(Proximity::from_bytes(&raw))
    }

    /// Read the configured ALS gain (async)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] for a reserved encoding, or an error if
    /// communication with the device fails.
    pub async fn als_gain(&mut self) -> Result<AlsGain, Error<I::Error>> {
        let raw = self.read_field(registers::ALS_GAIN).await?;
        decode_gain(raw)
    }

    /// Set the ALS gain (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_als_gain(&mut self, gain: AlsGain) -> Result<(), Error<I::Error>> {
        self.write_field(registers::ALS_GAIN, gain as u16).await
    }

    /// Read the configured ALS integration time (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn als_integration_time(&mut self) -> Result<AlsIntegrationTime, Error<I::Error>> {
        let raw = self.read_field(registers::ALS_INTEGRATION_TIME).await?;
        decode_integration_time(raw)
    }

    /// Set the ALS integration time (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_als_integration_time(
        &mut self,
        time: AlsIntegrationTime,
    ) -> Result<(), Error<I::Error>> {
        self.write_field(registers::ALS_INTEGRATION_TIME, time as u16)
            .await
    }

    /// Set the ALS measurement repeat rate (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_als_measurement_rate(
        &mut self,
        rate: AlsMeasurementRate,
    ) -> Result<(), Error<I::Error>> {
        self.write_field(registers::ALS_REPEAT_RATE, rate as u16).await
    }

    /// Set the PS measurement repeat rate (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_ps_measurement_rate(
        &mut self,
        rate: PsMeasurementRate,
    ) -> Result<(), Error<I::Error>> {
        self.write_field(registers::PS_RATE, rate as u16).await
    }

    /// Configure the proximity LED drive (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_led(&mut self, led: &LedConfig) -> Result<(), Error<I::Error>> {
        self.write_field(registers::LED_CURRENT, led.current as u16)
            .await?;
        self.write_field(registers::LED_DUTY_CYCLE, led.duty_cycle as u16)
            .await?;
        self.write_field(registers::LED_PULSE_FREQ, led.pulse_freq as u16)
            .await?;
        self.write_field(registers::LED_PULSE_COUNT, u16::from(led.pulse_count))
            .await
    }

    /// Select which measurements drive the INT pin (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_interrupt_mode(&mut self, mode: InterruptMode) -> Result<(), Error<I::Error>> {
        self.write_field(registers::INTERRUPT_MODE, mode as u16).await
    }

    /// Set the INT pin polarity (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_interrupt_polarity(
        &mut self,
        polarity: InterruptPolarity,
    ) -> Result<(), Error<I::Error>> {
        self.write_field(registers::INTERRUPT_POLARITY, polarity as u16)
            .await
    }

    /// Set interrupt persistence for ALS and PS (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_interrupt_persist(&mut self, als: u8, ps: u8) -> Result<(), Error<I::Error>> {
        self.write_field(registers::ALS_INTERRUPT_PERSIST, u16::from(als))
            .await?;
        self.write_field(registers::PS_INTERRUPT_PERSIST, u16::from(ps))
            .await
    }

    /// Set the ALS interrupt thresholds (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_als_thresholds(
        &mut self,
        lower: u16,
        upper: u16,
    ) -> Result<(), Error<I::Error>> {
        self.write_field(registers::ALS_THRESHOLD_LOWER, lower).await?;
        self.write_field(registers::ALS_THRESHOLD_UPPER, upper).await
    }

    /// Set the PS interrupt thresholds (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_ps_thresholds(
        &mut self,
        lower: u16,
        upper: u16,
    ) -> Result<(), Error<I::Error>> {
        self.write_field(registers::PS_THRESHOLD_LOWER, lower).await?;
        self.write_field(registers::PS_THRESHOLD_UPPER, upper).await
    }

    /// Set the PS crosstalk offset (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_ps_offset(&mut self, offset: u16) -> Result<(), Error<I::Error>> {
        self.write_field(registers::PS_OFFSET, offset).await
    }
}
