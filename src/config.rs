//! Typed register settings and bring-up configuration
//!
//! The discrete encodings of the LTR-559 configuration fields, plus the
//! [`Config`] consumed by [`Ltr559::new`](crate::Ltr559::new).
//!
//! # Example
//!
//! ```ignore
//! # use ltr559::{Config, InterruptPolarity, Ltr559, I2cInterface};
//! let config = Config::default()
//!     .with_interrupts(InterruptPolarity::ActiveLow)
//!     .with_reset_timeout_ms(1000);
//! let mut sensor = Ltr559::new(I2cInterface::default(i2c), config, &mut delay)?;
//! # Ok::<(), ltr559::Error<()>>(())
//! ```

/// Default time to wait for the software reset to complete
pub const DEFAULT_RESET_TIMEOUT_MS: u32 = 5000;

/// Interval between polls of the software reset bit
pub const RESET_POLL_INTERVAL_MS: u32 = 50;

/// Bring-up configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Route PS and ALS threshold events to the INT pin
    pub enable_interrupts: bool,
    /// INT pin polarity, only written when `enable_interrupts` is set
    pub interrupt_polarity: InterruptPolarity,
    /// How long to wait for the software reset to complete
    pub reset_timeout_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Interrupts disabled, active-high polarity, 5 s reset timeout
    #[must_use]
    pub const fn new() -> Self {
        Self {
            enable_interrupts: false,
            interrupt_polarity: InterruptPolarity::ActiveHigh,
            reset_timeout_ms: DEFAULT_RESET_TIMEOUT_MS,
        }
    }

    /// Enable interrupts with the given pin polarity
    #[must_use]
    pub const fn with_interrupts(mut self, polarity: InterruptPolarity) -> Self {
        self.enable_interrupts = true;
        self.interrupt_polarity = polarity;
        self
    }

    /// Override the software reset timeout
    #[must_use]
    pub const fn with_reset_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.reset_timeout_ms = timeout_ms;
        self
    }

    /// Number of reset polls that fit in the timeout (rounded up)
    pub(crate) const fn reset_polls(&self) -> u32 {
        self.reset_timeout_ms.div_ceil(RESET_POLL_INTERVAL_MS)
    }
}

/// ALS gain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlsGain {
    /// 1x, 1 lux to 64k lux (default)
    X1 = 0b000,
    /// 2x, 0.5 lux to 32k lux
    X2 = 0b001,
    /// 4x, 0.25 lux to 16k lux
    X4 = 0b010,
    /// 8x, 0.125 lux to 8k lux
    X8 = 0b011,
    /// 48x, 0.02 lux to 1.3k lux
    X48 = 0b110,
    /// 96x, 0.01 lux to 600 lux
    X96 = 0b111,
}

impl AlsGain {
    /// Gain multiplier
    #[must_use]
    pub const fn factor(self) -> u8 {
        match self {
            Self::X1 => 1,
            Self::X2 => 2,
            Self::X4 => 4,
            Self::X8 => 8,
            Self::X48 => 48,
            Self::X96 => 96,
        }
    }

    /// Decode a register value; `0b100` and `0b101` are reserved
    #[must_use]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0b000 => Some(Self::X1),
            0b001 => Some(Self::X2),
            0b010 => Some(Self::X4),
            0b011 => Some(Self::X8),
            0b110 => Some(Self::X48),
            0b111 => Some(Self::X96),
            _ => None,
        }
    }
}

/// ALS integration time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlsIntegrationTime {
    /// 100 ms (default)
    Ms100 = 0b000,
    /// 50 ms
    Ms50 = 0b001,
    /// 200 ms
    Ms200 = 0b010,
    /// 400 ms
    Ms400 = 0b011,
    /// 150 ms
    Ms150 = 0b100,
    /// 250 ms
    Ms250 = 0b101,
    /// 300 ms
    Ms300 = 0b110,
    /// 350 ms
    Ms350 = 0b111,
}

impl AlsIntegrationTime {
    /// Integration time in milliseconds
    #[must_use]
    pub const fn millis(self) -> u16 {
        match self {
            Self::Ms100 => 100,
            Self::Ms50 => 50,
            Self::Ms200 => 200,
            Self::Ms400 => 400,
            Self::Ms150 => 150,
            Self::Ms250 => 250,
            Self::Ms300 => 300,
            Self::Ms350 => 350,
        }
    }

    /// Decode a register value
    #[must_use]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0b000 => Some(Self::Ms100),
            0b001 => Some(Self::Ms50),
            0b010 => Some(Self::Ms200),
            0b011 => Some(Self::Ms400),
            0b100 => Some(Self::Ms150),
            0b101 => Some(Self::Ms250),
            0b110 => Some(Self::Ms300),
            0b111 => Some(Self::Ms350),
            _ => None,
        }
    }
}

/// ALS measurement repeat rate
///
/// Must not be shorter than the integration time; the chip stretches the
/// period to the integration time if it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlsMeasurementRate {
    /// 50 ms
    Ms50 = 0b000,
    /// 100 ms
    Ms100 = 0b001,
    /// 200 ms
    Ms200 = 0b010,
    /// 500 ms (default)
    Ms500 = 0b011,
    /// 1000 ms
    Ms1000 = 0b100,
    /// 2000 ms
    Ms2000 = 0b101,
}

/// PS measurement repeat rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PsMeasurementRate {
    /// 50 ms
    Ms50 = 0b0000,
    /// 70 ms
    Ms70 = 0b0001,
    /// 100 ms (default)
    Ms100 = 0b0010,
    /// 200 ms
    Ms200 = 0b0011,
    /// 500 ms
    Ms500 = 0b0100,
    /// 1000 ms
    Ms1000 = 0b0101,
    /// 2000 ms
    Ms2000 = 0b0110,
    /// 10 ms
    Ms10 = 0b1000,
}

/// LED pulse modulation frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedPulseFreq {
    /// 30 kHz
    Khz30 = 0b000,
    /// 40 kHz
    Khz40 = 0b001,
    /// 50 kHz
    Khz50 = 0b010,
    /// 60 kHz (default)
    Khz60 = 0b011,
    /// 70 kHz
    Khz70 = 0b100,
    /// 80 kHz
    Khz80 = 0b101,
    /// 90 kHz
    Khz90 = 0b110,
    /// 100 kHz
    Khz100 = 0b111,
}

/// LED current duty cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedDutyCycle {
    /// 25 %
    Percent25 = 0b00,
    /// 50 %
    Percent50 = 0b01,
    /// 75 %
    Percent75 = 0b10,
    /// 100 % (default)
    Percent100 = 0b11,
}

/// LED peak current
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedCurrent {
    /// 5 mA
    Ma5 = 0b000,
    /// 10 mA
    Ma10 = 0b001,
    /// 20 mA
    Ma20 = 0b010,
    /// 50 mA
    Ma50 = 0b011,
    /// 100 mA (default)
    Ma100 = 0b100,
}

/// Proximity LED drive settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedConfig {
    /// Pulse modulation frequency
    pub pulse_freq: LedPulseFreq,
    /// Current duty cycle
    pub duty_cycle: LedDutyCycle,
    /// Peak current
    pub current: LedCurrent,
    /// Pulses per measurement (1-15, truncated to 4 bits)
    pub pulse_count: u8,
}

impl Default for LedConfig {
    /// 30 kHz, 100 % duty cycle, 50 mA, one pulse
    fn default() -> Self {
        Self {
            pulse_freq: LedPulseFreq::Khz30,
            duty_cycle: LedDutyCycle::Percent100,
            current: LedCurrent::Ma50,
            pulse_count: 1,
        }
    }
}

/// Which measurements drive the INT pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptMode {
    /// INT pin inactive (default)
    Off = 0b00,
    /// Only PS threshold events
    Proximity = 0b01,
    /// Only ALS threshold events
    Light = 0b10,
    /// Both PS and ALS threshold events
    Both = 0b11,
}

/// INT pin polarity
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptPolarity {
    /// Logic 0 signals an interrupt (chip reset default)
    ActiveLow = 0,
    /// Logic 1 signals an interrupt
    #[default]
    ActiveHigh = 1,
}
