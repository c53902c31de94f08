//! Register map and field descriptors for the LTR-559
//!
//! The LTR-559 exposes its configuration and measurement data through a flat
//! map of 8-bit registers between 0x80 and 0x9E. Most registers pack several
//! independent settings, and some values (channel data, thresholds, offset)
//! span two consecutive registers in little-endian order.
//!
//! Each setting is described by a [`Field`] constant. The driver reads and
//! writes any of them through one generic accessor
//! ([`Ltr559::read_field`](crate::Ltr559::read_field) /
//! [`Ltr559::write_field`](crate::Ltr559::write_field)), which performs the
//! read-modify-write needed to leave sibling fields untouched.
//!
//! ## Field widths
//! - Proximity data and proximity thresholds are 11 bits wide (the upper
//!   register of each pair only implements bits 2:0).
//! - The proximity offset is 10 bits wide.
//! - ALS channel data and ALS thresholds use all 16 bits.

/// Register addresses
pub mod address {
    /// ALS operation mode, gain and software reset
    pub const ALS_CONTR: u8 = 0x80;
    /// PS operation mode and saturation indicator
    pub const PS_CONTR: u8 = 0x81;
    /// PS LED pulse frequency, duty cycle and peak current
    pub const PS_LED: u8 = 0x82;
    /// Number of LED pulses per PS measurement
    pub const PS_N_PULSES: u8 = 0x83;
    /// PS measurement repeat rate
    pub const PS_MEAS_RATE: u8 = 0x84;
    /// ALS integration time and measurement repeat rate
    pub const ALS_MEAS_RATE: u8 = 0x85;
    /// Part number and revision
    pub const PART_ID: u8 = 0x86;
    /// Manufacturer ID
    pub const MANUFAC_ID: u8 = 0x87;
    /// ALS channel 1 data, low byte (high byte at 0x89)
    pub const ALS_DATA_CH1: u8 = 0x88;
    /// ALS channel 0 data, low byte (high byte at 0x8B)
    pub const ALS_DATA_CH0: u8 = 0x8A;
    /// ALS and PS status flags
    pub const ALS_PS_STATUS: u8 = 0x8C;
    /// PS data, low byte (high bits and saturation flag at 0x8E)
    pub const PS_DATA: u8 = 0x8D;
    /// PS data high bits and saturation flag
    pub const PS_DATA_SAT: u8 = 0x8E;
    /// Interrupt mode and polarity
    pub const INTERRUPT: u8 = 0x8F;
    /// PS upper interrupt threshold, low byte
    pub const PS_THRES_UP: u8 = 0x90;
    /// PS lower interrupt threshold, low byte
    pub const PS_THRES_LOW: u8 = 0x92;
    /// PS offset, low byte
    pub const PS_OFFSET: u8 = 0x94;
    /// ALS upper interrupt threshold, low byte
    pub const ALS_THRES_UP: u8 = 0x97;
    /// ALS lower interrupt threshold, low byte
    pub const ALS_THRES_LOW: u8 = 0x99;
    /// ALS and PS interrupt persistence
    pub const INTERRUPT_PERSIST: u8 = 0x9E;
}

/// Whether a field may be written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Access {
    /// Status, identity and data fields
    ReadOnly,
    /// Configuration fields
    ReadWrite,
}

/// Descriptor of one bit field inside one or two consecutive registers
///
/// Multi-byte fields are little-endian: the byte at `address` holds the
/// least significant bits. The layout is checked once in [`Field::new`], so
/// every descriptor fits the accessor's two-byte buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Field {
    name: &'static str,
    address: u8,
    offset: u8,
    width: u8,
    span: u8,
    access: Access,
}

impl Field {
    /// Describe a field
    ///
    /// # Panics
    ///
    /// Panics if `span` is not 1 or 2, `width` is 0, or the field does not
    /// fit in `span` registers. In a `const` item this is a compile error.
    ///
    /// ```
    /// use ltr559::registers::{Access, Field};
    ///
    /// const PERSIST: Field = Field::new("persist", 0x9E, 0, 8, 1, Access::ReadWrite);
    /// assert!(PERSIST.covers_registers());
    /// ```
    pub const fn new(
        name: &'static str,
        address: u8,
        offset: u8,
        width: u8,
        span: u8,
        access: Access,
    ) -> Self {
        assert!(span == 1 || span == 2, "fields span one or two registers");
        assert!(width >= 1, "fields are at least one bit wide");
        assert!(
            offset as u32 + width as u32 <= span as u32 * 8,
            "field does not fit in its registers"
        );
        Self {
            name,
            address,
            offset,
            width,
            span,
            access,
        }
    }

    const fn rw(name: &'static str, address: u8, offset: u8, width: u8) -> Self {
        Self::new(name, address, offset, width, 1, Access::ReadWrite)
    }

    const fn ro(name: &'static str, address: u8, offset: u8, width: u8) -> Self {
        Self::new(name, address, offset, width, 1, Access::ReadOnly)
    }

    const fn rw_word(name: &'static str, address: u8, width: u8) -> Self {
        Self::new(name, address, 0, width, 2, Access::ReadWrite)
    }

    const fn ro_word(name: &'static str, address: u8, width: u8) -> Self {
        Self::new(name, address, 0, width, 2, Access::ReadOnly)
    }

    /// Field name, as listed in [`FIELDS`]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Address of the first (least significant) register
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Bit offset of the field's LSB within the assembled register value
    pub const fn offset(&self) -> u8 {
        self.offset
    }

    /// Width in bits (1..=16)
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Number of consecutive registers the field lives in (1 or 2)
    pub const fn span(&self) -> u8 {
        self.span
    }

    /// Read-only or read-write
    pub const fn access(&self) -> Access {
        self.access
    }

    /// Returns `true` if the field cannot be written
    pub const fn is_read_only(&self) -> bool {
        matches!(self.access, Access::ReadOnly)
    }

    /// Largest value the field can hold
    pub const fn max_value(&self) -> u16 {
        ((1u32 << self.width) - 1) as u16
    }

    /// Mask of the field's bits within the assembled register value
    pub const fn mask(&self) -> u16 {
        (((1u32 << self.width) - 1) << self.offset) as u16
    }

    /// Number of register bytes the field occupies
    pub const fn len(&self) -> usize {
        self.span as usize
    }

    /// Returns `true` if the field covers every bit of its registers, so a
    /// write does not need to read the current contents first
    pub const fn covers_registers(&self) -> bool {
        self.offset == 0 && self.width as u32 == self.span as u32 * 8
    }

    /// Extracts the field value from raw register bytes
    ///
    /// `raw` must hold at least [`len`](Self::len) bytes.
    pub fn extract(&self, raw: &[u8]) -> u16 {
        (assemble(&raw[..self.len()]) & self.mask()) >> self.offset
    }

    /// Merges `value` into raw register bytes, leaving every bit outside the
    /// field unchanged
    ///
    /// Bits of `value` above the field width are discarded.
    pub fn insert(&self, raw: &mut [u8], value: u16) {
        let bytes = &mut raw[..self.len()];
        let shifted = ((u32::from(value) << self.offset) as u16) & self.mask();
        let merged = (assemble(bytes) & !self.mask()) | shifted;
        disassemble(merged, bytes);
    }
}

fn assemble(bytes: &[u8]) -> u16 {
    bytes
        .iter()
        .rev()
        .fold(0u16, |acc, &byte| (acc << 8) | u16::from(byte))
}

fn disassemble(value: u16, bytes: &mut [u8]) {
    let le = value.to_le_bytes();
    bytes.copy_from_slice(&le[..bytes.len()]);
}

// ==================== DEVICE CONTROL ====================

/// Software reset, self-clearing once the reset completes
pub const SW_RESET: Field = Field::rw("sw_reset", address::ALS_CONTR, 1, 1);
/// Part number, 0x09 for the LTR-559
pub const PART_NUMBER: Field = Field::ro("part_number", address::PART_ID, 4, 4);
/// Silicon revision, 0x02 for the LTR-559
pub const REVISION: Field = Field::ro("revision", address::PART_ID, 0, 4);
/// Manufacturer ID, 0x05 for Lite-On
pub const MANUFACTURER_ID: Field = Field::ro("manufacturer_id", address::MANUFAC_ID, 0, 8);
/// LED pulse modulation frequency, see [`LedPulseFreq`](crate::LedPulseFreq)
pub const LED_PULSE_FREQ: Field = Field::rw("led_pulse_freq", address::PS_LED, 5, 3);
/// LED current duty cycle, see [`LedDutyCycle`](crate::LedDutyCycle)
pub const LED_DUTY_CYCLE: Field = Field::rw("led_duty_cycle", address::PS_LED, 3, 2);
/// LED peak current, see [`LedCurrent`](crate::LedCurrent)
pub const LED_CURRENT: Field = Field::rw("led_current", address::PS_LED, 0, 3);
/// LED pulses per PS measurement (1..=15)
pub const LED_PULSE_COUNT: Field = Field::rw("led_pulse_count", address::PS_N_PULSES, 0, 4);
/// Interrupt pin polarity (0 = active low, 1 = active high)
pub const INTERRUPT_POLARITY: Field = Field::rw("interrupt_polarity", address::INTERRUPT, 2, 1);
/// Interrupt source, see [`InterruptMode`](crate::InterruptMode)
pub const INTERRUPT_MODE: Field = Field::rw("interrupt_mode", address::INTERRUPT, 0, 2);

// ==================== AMBIENT LIGHT ====================

/// ALS gain, see [`AlsGain`](crate::AlsGain)
pub const ALS_GAIN: Field = Field::rw("als_gain", address::ALS_CONTR, 2, 3);
/// ALS mode (0 = standby, 1 = active)
pub const ALS_MODE: Field = Field::rw("als_mode", address::ALS_CONTR, 0, 1);
/// ALS integration time, see [`AlsIntegrationTime`](crate::AlsIntegrationTime)
pub const ALS_INTEGRATION_TIME: Field =
    Field::rw("als_integration_time", address::ALS_MEAS_RATE, 3, 3);
/// ALS measurement repeat rate, see [`AlsMeasurementRate`](crate::AlsMeasurementRate)
pub const ALS_REPEAT_RATE: Field = Field::rw("als_repeat_rate", address::ALS_MEAS_RATE, 0, 3);
/// ALS channel 1 (infrared) count
pub const ALS_DATA_CH1: Field = Field::ro_word("als_data_ch1", address::ALS_DATA_CH1, 16);
/// ALS channel 0 (visible + infrared) count
pub const ALS_DATA_CH0: Field = Field::ro_word("als_data_ch0", address::ALS_DATA_CH0, 16);
/// ALS upper interrupt threshold
pub const ALS_THRESHOLD_UPPER: Field =
    Field::rw_word("als_threshold_upper", address::ALS_THRES_UP, 16);
/// ALS lower interrupt threshold
pub const ALS_THRESHOLD_LOWER: Field =
    Field::rw_word("als_threshold_lower", address::ALS_THRES_LOW, 16);
/// Consecutive out-of-threshold ALS readings before an interrupt fires
pub const ALS_INTERRUPT_PERSIST: Field =
    Field::rw("als_interrupt_persist", address::INTERRUPT_PERSIST, 4, 4);
/// ALS data invalid flag (1 = the current sample is invalid)
pub const ALS_DATA_INVALID: Field = Field::ro("als_data_invalid", address::ALS_PS_STATUS, 7, 1);
/// Gain the current ALS sample was taken with
pub const ALS_DATA_GAIN: Field = Field::ro("als_data_gain", address::ALS_PS_STATUS, 4, 3);
/// ALS interrupt pending
pub const ALS_INTERRUPT_ACTIVE: Field =
    Field::ro("als_interrupt_active", address::ALS_PS_STATUS, 3, 1);
/// New ALS data available
pub const ALS_NEW_DATA: Field = Field::ro("als_new_data", address::ALS_PS_STATUS, 2, 1);

// ==================== PROXIMITY ====================

/// PS saturation indicator enable
pub const PS_SATURATION_INDICATOR_ENABLE: Field =
    Field::rw("ps_saturation_indicator_enable", address::PS_CONTR, 5, 1);
/// PS mode (0b00/0b01 = standby, 0b10/0b11 = active)
pub const PS_ACTIVE: Field = Field::rw("ps_active", address::PS_CONTR, 0, 2);
/// PS measurement repeat rate, see [`PsMeasurementRate`](crate::PsMeasurementRate)
pub const PS_RATE: Field = Field::rw("ps_rate", address::PS_MEAS_RATE, 0, 4);
/// PS count
pub const PS_DATA: Field = Field::ro_word("ps_data", address::PS_DATA, 11);
/// PS saturation flag
pub const PS_SATURATION: Field = Field::ro("ps_saturation", address::PS_DATA_SAT, 7, 1);
/// PS upper interrupt threshold
pub const PS_THRESHOLD_UPPER: Field =
    Field::rw_word("ps_threshold_upper", address::PS_THRES_UP, 11);
/// PS lower interrupt threshold
pub const PS_THRESHOLD_LOWER: Field =
    Field::rw_word("ps_threshold_lower", address::PS_THRES_LOW, 11);
/// PS crosstalk offset, subtracted from each PS count
pub const PS_OFFSET: Field = Field::rw_word("ps_offset", address::PS_OFFSET, 10);
/// Consecutive out-of-threshold PS readings before an interrupt fires
pub const PS_INTERRUPT_PERSIST: Field =
    Field::rw("ps_interrupt_persist", address::INTERRUPT_PERSIST, 0, 4);
/// New PS data available
pub const PS_NEW_DATA: Field = Field::ro("ps_new_data", address::ALS_PS_STATUS, 0, 1);
/// PS interrupt pending
pub const PS_INTERRUPT_ACTIVE: Field =
    Field::ro("ps_interrupt_active", address::ALS_PS_STATUS, 1, 1);

/// Every documented field of the chip
pub const FIELDS: &[Field] = &[
    SW_RESET,
    PART_NUMBER,
    REVISION,
    MANUFACTURER_ID,
    LED_PULSE_FREQ,
    LED_DUTY_CYCLE,
    LED_CURRENT,
    LED_PULSE_COUNT,
    INTERRUPT_POLARITY,
    INTERRUPT_MODE,
    ALS_GAIN,
    ALS_MODE,
    ALS_INTEGRATION_TIME,
    ALS_REPEAT_RATE,
    ALS_DATA_CH1,
    ALS_DATA_CH0,
    ALS_THRESHOLD_UPPER,
    ALS_THRESHOLD_LOWER,
    ALS_INTERRUPT_PERSIST,
    ALS_DATA_INVALID,
    ALS_DATA_GAIN,
    ALS_INTERRUPT_ACTIVE,
    ALS_NEW_DATA,
    PS_SATURATION_INDICATOR_ENABLE,
    PS_ACTIVE,
    PS_RATE,
    PS_DATA,
    PS_SATURATION,
    PS_THRESHOLD_UPPER,
    PS_THRESHOLD_LOWER,
    PS_OFFSET,
    PS_INTERRUPT_PERSIST,
    PS_NEW_DATA,
    PS_INTERRUPT_ACTIVE,
];

/// Looks up a field by its name
///
/// ```
/// # use ltr559::registers;
/// assert_eq!(registers::field_by_name("als_gain"), Some(registers::ALS_GAIN));
/// assert_eq!(registers::field_by_name("nope"), None);
/// ```
pub fn field_by_name(name: &str) -> Option<Field> {
    FIELDS.iter().copied().find(|field| field.name == name)
}
