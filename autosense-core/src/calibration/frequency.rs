//! Pulse-rate calibrations (engine RPM, vehicle speed)
//!
//! Both families turn the last inter-pulse interval into an engineering
//! value and carry their own stall timeout and plausibility bounds.
//!
//! ```text
//! RPM   = 60·10⁶ / (interval_µs · poles/2 · pulley_ratio) · mult
//!
//! f     = 10⁶ / interval_µs
//! km/h  = f / pulses_per_rev · tire_mm/1000 / final_drive · 3.6 · mult
//! ```

use fugit::MicrosDurationU32;

use crate::{
    constants::{
        physics::{MM_PER_M, MPS_TO_KPH},
        pulse::{
            DEFAULT_ALTERNATOR_POLES, DEFAULT_FINAL_DRIVE_RATIO, DEFAULT_MAX_RPM, DEFAULT_MAX_SPEED_KPH,
            DEFAULT_MIN_RPM, DEFAULT_PULLEY_RATIO, DEFAULT_PULSES_PER_REV, DEFAULT_PULSE_TIMEOUT_MS,
            DEFAULT_TIRE_CIRCUMFERENCE_MM, RPM_SMOOTHING_PREVIOUS, SPEED_SMOOTHING_PREVIOUS,
        },
        time::{US_PER_MINUTE_F, US_PER_SECOND},
    },
    errors::{AcquisitionError, AcquisitionResult},
};

/// What the pulse converter needs from a pulse-family calibration
pub trait PulseCalibration {
    /// Engineering value for one inter-pulse interval, range-checked
    fn convert_interval(&self, interval_us: u32) -> AcquisitionResult<f32>;

    /// Silence longer than this means stopped
    fn stall_timeout(&self) -> MicrosDurationU32;

    /// Weight of the previous value in the exponential filter
    fn smoothing(&self) -> f32;
}

fn checked_range(value: f32, min: f32, max: f32) -> AcquisitionResult<f32> {
    if value >= min && value <= max {
        Ok(value)
    } else {
        Err(AcquisitionError::OutOfRange { value, min, max })
    }
}

fn nonzero_interval(interval_us: u32) -> AcquisitionResult<f32> {
    if interval_us == 0 {
        Err(AcquisitionError::NumericDomain {
            reason: "zero pulse interval",
        })
    } else {
        Ok(interval_us as f32)
    }
}

/// Alternator W-phase RPM parameters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RpmCalibration {
    /// Alternator pole count (pulses per alternator rev = poles / 2)
    pub poles: u8,
    /// Alternator revolutions per engine revolution
    pub pulley_ratio: f32,
    /// Fine-tuning multiplier
    pub calibration_mult: f32,
    /// Stall timeout (ms)
    pub timeout_ms: u16,
    /// Lowest plausible engine speed
    pub min_rpm: u16,
    /// Highest plausible engine speed
    pub max_rpm: u16,
}

impl RpmCalibration {
    /// 12-pole alternator on a 3:1 pulley
    pub const DEFAULT: Self = Self {
        poles: DEFAULT_ALTERNATOR_POLES,
        pulley_ratio: DEFAULT_PULLEY_RATIO,
        calibration_mult: 1.0,
        timeout_ms: DEFAULT_PULSE_TIMEOUT_MS,
        min_rpm: DEFAULT_MIN_RPM,
        max_rpm: DEFAULT_MAX_RPM,
    };

    /// Pulses per engine revolution
    pub fn pulses_per_engine_rev(&self) -> f32 {
        self.poles as f32 / 2.0 * self.pulley_ratio
    }
}

impl PulseCalibration for RpmCalibration {
    fn convert_interval(&self, interval_us: u32) -> AcquisitionResult<f32> {
        let interval = nonzero_interval(interval_us)?;
        let factor = self.pulses_per_engine_rev();
        if !(factor > 0.0) {
            return Err(AcquisitionError::NumericDomain {
                reason: "RPM calibration has no pulses per revolution",
            });
        }

        let rpm = US_PER_MINUTE_F / (interval * factor) * self.calibration_mult;
        checked_range(rpm, self.min_rpm as f32, self.max_rpm as f32)
    }

    fn stall_timeout(&self) -> MicrosDurationU32 {
        MicrosDurationU32::millis(self.timeout_ms as u32)
    }

    fn smoothing(&self) -> f32 {
        RPM_SMOOTHING_PREVIOUS
    }
}

/// Hall-effect vehicle speed parameters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedCalibration {
    /// Sender pulses per shaft revolution (tooth count)
    pub pulses_per_rev: u8,
    /// Rolling circumference (mm)
    pub tire_circumference_mm: u16,
    /// Shaft revolutions per wheel revolution
    pub final_drive_ratio: f32,
    /// Fine-tuning multiplier
    pub calibration_mult: f32,
    /// Stall timeout (ms)
    pub timeout_ms: u16,
    /// Highest plausible speed
    pub max_speed_kph: u16,
}

impl SpeedCalibration {
    /// 100-tooth sender, 2000 mm tyre, 3.73 final drive
    pub const DEFAULT: Self = Self {
        pulses_per_rev: DEFAULT_PULSES_PER_REV,
        tire_circumference_mm: DEFAULT_TIRE_CIRCUMFERENCE_MM,
        final_drive_ratio: DEFAULT_FINAL_DRIVE_RATIO,
        calibration_mult: 1.0,
        timeout_ms: DEFAULT_PULSE_TIMEOUT_MS,
        max_speed_kph: DEFAULT_MAX_SPEED_KPH,
    };
}

impl PulseCalibration for SpeedCalibration {
    fn convert_interval(&self, interval_us: u32) -> AcquisitionResult<f32> {
        let interval = nonzero_interval(interval_us)?;
        if self.pulses_per_rev == 0 || !(self.final_drive_ratio > 0.0) {
            return Err(AcquisitionError::NumericDomain {
                reason: "speed calibration has zero ratio",
            });
        }

        let freq_hz = US_PER_SECOND as f32 / interval;
        let revs_per_second = freq_hz / self.pulses_per_rev as f32;
        let metres_per_second =
            revs_per_second * (self.tire_circumference_mm as f32 / MM_PER_M) / self.final_drive_ratio;
        let kph = metres_per_second * MPS_TO_KPH * self.calibration_mult;

        checked_range(kph, 0.0, self.max_speed_kph as f32)
    }

    fn stall_timeout(&self) -> MicrosDurationU32 {
        MicrosDurationU32::millis(self.timeout_ms as u32)
    }

    fn smoothing(&self) -> f32 {
        SPEED_SMOOTHING_PREVIOUS
    }
}
