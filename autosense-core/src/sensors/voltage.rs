//! Voltage drivers
//!
//! A voltage input has no rail check: a reading at full scale is a real (if
//! high) voltage. Instead, codes below [`DISCONNECTED_THRESHOLD`] mean the
//! input is floating and read as NaN.

use crate::{
    adc::sample_channel,
    calibration::CalibrationType,
    constants::adc::DISCONNECTED_THRESHOLD,
    errors::{AcquisitionError, AcquisitionResult},
    sensor::SensorRecord,
    traits::Board,
};

fn connected_code<B: Board + ?Sized>(record: &SensorRecord, board: &mut B) -> AcquisitionResult<u16> {
    let sample = sample_channel(board, record.channel)?;
    if sample.code < DISCONNECTED_THRESHOLD {
        return Err(AcquisitionError::Disconnected { code: sample.code });
    }
    Ok(sample.code)
}

/// Voltage behind a resistor divider (battery, supply rails)
pub fn read_divider<B: Board + ?Sized>(record: &mut SensorRecord, board: &mut B) -> AcquisitionResult<f32> {
    let code = connected_code(record, board)?;
    let adc_volts = board.adc_config().code_to_voltage(code);

    let calibration = record.resolve_calibration(CalibrationType::VoltageDivider)?;
    calibration.voltage_divider()?.apply(adc_volts)
}

/// Voltage wired straight to the ADC pin
pub fn read_direct<B: Board + ?Sized>(record: &mut SensorRecord, board: &mut B) -> AcquisitionResult<f32> {
    let code = connected_code(record, board)?;
    Ok(board.adc_config().code_to_voltage(code))
}
