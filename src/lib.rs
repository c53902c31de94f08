#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod device;
pub mod interface;
pub mod registers;

// Re-export main types
pub use config::{
    AlsGain, AlsIntegrationTime, AlsMeasurementRate, Config, DEFAULT_RESET_TIMEOUT_MS,
    InterruptMode, InterruptPolarity, LedConfig, LedCurrent, LedDutyCycle, LedPulseFreq,
    PsMeasurementRate, RESET_POLL_INTERVAL_MS,
};
pub use device::{AlsChannels, Identity, Ltr559, Proximity, State, Status};
pub use interface::I2cInterface;
pub use registers::{Access, Field};

/// LTR-559 I2C address (fixed, 0x23)
pub const I2C_ADDRESS: u8 = 0x23;

/// Expected value of the part number field
pub const PART_ID: u8 = 0x09;

/// Expected value of the revision field
pub const REVISION_ID: u8 = 0x02;

/// Expected value of the manufacturer ID register (Lite-On)
pub const MANUFACTURER_ID: u8 = 0x05;

/// Driver errors
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
    /// Part number or revision did not match an LTR-559 (contains the values read)
    DeviceNotFound {
        /// Part number read from the chip
        part_number: u8,
        /// Revision read from the chip
        revision: u8,
    },
    /// The software reset bit did not clear within the configured timeout
    ResetTimeout,
    /// Attempted to write a read-only field (contains the field name)
    ReadOnlyField(&'static str),
    /// A field held a reserved encoding (contains the raw value)
    InvalidValue(u8),
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
