//! Pulse-rate drivers (alternator W-phase RPM, hall vehicle speed)
//!
//! The edge interrupt feeds the board's [`PulseCapture`](crate::pulse::PulseCapture);
//! these drivers only observe it and run the record's converter.

use crate::{
    calibration::{CalibrationType, PulseCalibration},
    errors::{AcquisitionError, AcquisitionResult},
    pulse::PulseChannel,
    sensor::{SensorKind, SensorRecord},
    traits::Board,
};

fn channel_for(kind: SensorKind) -> AcquisitionResult<PulseChannel> {
    match kind {
        SensorKind::WPhaseRpm => Ok(PulseChannel::Rpm),
        SensorKind::HallSpeed => Ok(PulseChannel::Speed),
        other => Err(AcquisitionError::CalibrationUnavailable {
            family: other.calibration_type(),
        }),
    }
}

/// Attach the edge interrupt and clear any stale capture state
pub fn init<B: Board + ?Sized>(record: &mut SensorRecord, board: &mut B) -> AcquisitionResult<()> {
    let channel = channel_for(record.kind)?;

    if board.attach_pulse_interrupt(record.channel, channel).is_err() {
        log_warn!(target: "pulse", "no edge interrupt on pin {} for {}", record.channel, record.label.as_str());
        return Err(AcquisitionError::BusFault {
            reason: "pulse input not attached",
        });
    }

    if let Some(capture) = board.pulse_capture(channel) {
        capture.reset();
    }
    *record.pulse_converter_mut() = Default::default();

    log_info!(
        target: "pulse",
        "{:?} input on pin {} for {} (debounce {} us)",
        channel,
        record.channel,
        record.label.as_str(),
        channel.debounce_us()
    );
    Ok(())
}

fn convert<P, B>(record: &mut SensorRecord, board: &mut B, channel: PulseChannel, calibration: &P) -> AcquisitionResult<f32>
where
    P: PulseCalibration + ?Sized,
    B: Board + ?Sized,
{
    let capture = board.pulse_capture(channel).ok_or(AcquisitionError::BusFault {
        reason: "pulse input not attached",
    })?;
    let observation = capture.observe(&*board);

    let previous = record.value();
    record.pulse_converter_mut().update(observation, calibration, previous)
}

/// Current RPM or speed: `0.0` while idle or stalled, NaN on a range fault
pub fn read<B: Board + ?Sized>(record: &mut SensorRecord, board: &mut B) -> AcquisitionResult<f32> {
    let channel = channel_for(record.kind)?;

    // Parameters are copied out so the record can be borrowed mutably below
    match channel {
        PulseChannel::Rpm => {
            let calibration = *record.resolve_calibration(CalibrationType::Rpm)?.rpm()?;
            convert(record, board, channel, &calibration)
        }
        PulseChannel::Speed => {
            let calibration = *record.resolve_calibration(CalibrationType::Speed)?.speed()?;
            convert(record, board, channel, &calibration)
        }
    }
}
