//! Analog drivers: linear voltage senders and resistive senders
//!
//! Every driver here starts with a rail-checked double sample. A rejected
//! sample ends the read before any calibration runs.

use crate::{
    adc::sample_channel,
    calibration::CalibrationType,
    errors::{AcquisitionError, AcquisitionResult},
    sensor::SensorRecord,
    traits::Board,
};

/// Linear voltage sender: sample, scale to volts, map through the resolved
/// linear calibration.
pub fn read_linear<B: Board + ?Sized>(record: &mut SensorRecord, board: &mut B) -> AcquisitionResult<f32> {
    let code = sample_channel(board, record.channel)?.checked()?;
    let volts = board.adc_config().code_to_voltage(code);

    let calibration = record.resolve_calibration(CalibrationType::Linear)?;
    calibration.linear()?.apply(volts)
}

/// Resistive sender (polynomial, table, Beta or Steinhart-Hart): sample,
/// invert the bias divider, convert the resistance.
pub fn read_resistive<B: Board + ?Sized>(
    record: &mut SensorRecord,
    board: &mut B,
    family: CalibrationType,
) -> AcquisitionResult<f32> {
    let code = sample_channel(board, record.channel)?.checked()?;

    let calibration = record.resolve_calibration(family)?;
    let bias = calibration
        .bias_resistor()
        .ok_or(AcquisitionError::CalibrationUnavailable { family })?;

    let ohms = board.adc_config().divider_resistance(code, bias)?;
    calibration.convert_resistance(ohms)
}
