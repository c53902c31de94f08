//! Unit tests for the typed configuration helpers

use crate::common::{Operation, create_mock_driver};
use ltr559::registers;
use ltr559::{
    AlsGain, AlsIntegrationTime, AlsMeasurementRate, InterruptMode, InterruptPolarity, LedConfig,
    LedCurrent, LedDutyCycle, LedPulseFreq, PsMeasurementRate,
};

#[test]
fn test_als_gain_round_trip() {
    let (mut driver, interface) = create_mock_driver();

    for gain in [
        AlsGain::X1,
        AlsGain::X2,
        AlsGain::X4,
        AlsGain::X8,
        AlsGain::X48,
        AlsGain::X96,
    ] {
        driver.set_als_gain(gain).unwrap();
        assert_eq!(driver.als_gain().unwrap(), gain);
        // ALS stays active
        assert_eq!(interface.get_register(0x80) & 0x01, 0x01);
    }
}

#[test]
fn test_als_integration_time_shares_register_with_rate() {
    let (mut driver, interface) = create_mock_driver();

    driver
        .set_als_measurement_rate(AlsMeasurementRate::Ms2000)
        .unwrap();
    driver
        .set_als_integration_time(AlsIntegrationTime::Ms400)
        .unwrap();

    assert_eq!(interface.get_register(0x85), (0b011 << 3) | 0b101);
    assert_eq!(
        driver.als_integration_time().unwrap(),
        AlsIntegrationTime::Ms400
    );
}

#[test]
fn test_ps_measurement_rate_encodings() {
    let (mut driver, interface) = create_mock_driver();

    driver
        .set_ps_measurement_rate(PsMeasurementRate::Ms10)
        .unwrap();
    assert_eq!(interface.get_register(0x84), 0x08);

    driver
        .set_ps_measurement_rate(PsMeasurementRate::Ms2000)
        .unwrap();
    assert_eq!(interface.get_register(0x84), 0x06);
}

#[test]
fn test_set_led() {
    let (mut driver, interface) = create_mock_driver();

    let led = LedConfig {
        pulse_freq: LedPulseFreq::Khz60,
        duty_cycle: LedDutyCycle::Percent50,
        current: LedCurrent::Ma100,
        pulse_count: 4,
    };
    driver.set_led(&led).unwrap();

    assert_eq!(
        interface.get_register(0x82),
        ((LedPulseFreq::Khz60 as u8) << 5) | (0b01 << 3) | 0b100
    );
    assert_eq!(interface.get_register(0x83), 4);
}

#[test]
fn test_default_led_config() {
    let led = LedConfig::default();
    assert_eq!(led.pulse_freq, LedPulseFreq::Khz30);
    assert_eq!(led.duty_cycle, LedDutyCycle::Percent100);
    assert_eq!(led.current, LedCurrent::Ma50);
    assert_eq!(led.pulse_count, 1);
}

#[test]
fn test_interrupt_mode_and_polarity() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_register(0x8F, 0x00);
    driver.set_interrupt_mode(InterruptMode::Light).unwrap();
    driver
        .set_interrupt_polarity(InterruptPolarity::ActiveHigh)
        .unwrap();
    assert_eq!(interface.get_register(0x8F), 0b110);

    driver.set_interrupt_mode(InterruptMode::Off).unwrap();
    assert_eq!(interface.get_register(0x8F), 0b100);
}

#[test]
fn test_interrupt_persist() {
    let (mut driver, interface) = create_mock_driver();

    driver.set_interrupt_persist(0x3, 0xA).unwrap();
    assert_eq!(interface.get_register(0x9E), 0x3A);

    // Counts above 15 are truncated
    driver.set_interrupt_persist(0x12, 0x01).unwrap();
    assert_eq!(interface.get_register(0x9E), 0x21);
}

#[test]
fn test_als_thresholds_little_endian() {
    let (mut driver, interface) = create_mock_driver();

    driver.set_als_thresholds(0x0102, 0xA0B0).unwrap();

    assert_eq!(
        interface.writes(),
        vec![(0x99, vec![0x02, 0x01]), (0x97, vec![0xB0, 0xA0])]
    );
}

#[test]
fn test_ps_thresholds_are_eleven_bits() {
    let (mut driver, interface) = create_mock_driver();

    driver.set_ps_thresholds(0x0100, 0xFFFF).unwrap();

    assert_eq!(driver.read_field(registers::PS_THRESHOLD_LOWER).unwrap(), 0x100);
    assert_eq!(driver.read_field(registers::PS_THRESHOLD_UPPER).unwrap(), 0x7FF);
    // Lower threshold is written first
    let lower = interface.first_write_index(0x92).unwrap();
    let upper = interface.first_write_index(0x90).unwrap();
    assert!(lower < upper);
}

#[test]
fn test_ps_offset_is_ten_bits() {
    let (mut driver, interface) = create_mock_driver();

    driver.set_ps_offset(0x7FF).unwrap();
    assert_eq!(driver.read_field(registers::PS_OFFSET).unwrap(), 0x3FF);
    assert_eq!(interface.get_register(0x94), 0xFF);
    assert_eq!(interface.get_register(0x95), 0x03);
}

#[test]
fn test_read_identity() {
    let (mut driver, interface) = create_mock_driver();

    let identity = driver.read_identity().unwrap();
    assert_eq!(identity.part_number, ltr559::PART_ID);
    assert_eq!(identity.revision, ltr559::REVISION_ID);
    assert_eq!(identity.manufacturer_id, ltr559::MANUFACTURER_ID);

    // One burst read covering PART_ID and MANUFAC_ID
    assert_eq!(
        interface.operations(),
        vec![Operation::ReadRegister {
            address: 0x86,
            data: vec![0x92, 0x05],
        }]
    );
}

#[test]
fn test_read_status() {
    let (mut driver, interface) = create_mock_driver();

    // New ALS data taken at 8x gain, PS interrupt pending
    interface.set_register(0x8C, 0b0011_0110);
    let status = driver.read_status().unwrap();

    assert!(!status.als_data_invalid);
    assert_eq!(status.als_gain(), Some(AlsGain::X8));
    assert!(!status.als_interrupt_active);
    assert!(status.als_new_data);
    assert!(status.ps_interrupt_active);
    assert!(!status.ps_new_data);
}

#[test]
fn test_read_als_channels_single_burst() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_register(0x88, 0x34);
    interface.set_register(0x89, 0x12);
    interface.set_register(0x8A, 0x78);
    interface.set_register(0x8B, 0x56);

    let channels = driver.read_als_channels().unwrap();
    assert_eq!(channels.ch1, 0x1234);
    assert_eq!(channels.ch0, 0x5678);
    assert_eq!(interface.read_count(), 1);
}

#[test]
fn test_read_proximity_saturation() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_register(0x8D, 0x00);
    interface.set_register(0x8E, 0x84);

    let proximity = driver.read_proximity().unwrap();
    assert_eq!(proximity.count, 0x400);
    assert!(proximity.saturated);
}
