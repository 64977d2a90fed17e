//! Linear voltage calibration (ratiometric 0.5–4.5 V senders and the like)

use crate::errors::{AcquisitionError, AcquisitionResult};

/// `[voltage_min, voltage_max]` mapped affinely onto `[output_min, output_max]`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearCalibration {
    /// Sender output at the bottom of its range (V)
    pub voltage_min: f32,
    /// Sender output at the top of its range (V)
    pub voltage_max: f32,
    /// Engineering value at `voltage_min` (base units)
    pub output_min: f32,
    /// Engineering value at `voltage_max` (base units)
    pub output_max: f32,
}

impl LinearCalibration {
    /// Generic three-wire 0.5–4.5 V sender reading 0–5 bar
    pub const GENERIC_0_5_BAR: Self = Self::new(0.5, 4.5, 0.0, 5.0);

    /// Build from the two calibration points
    pub const fn new(voltage_min: f32, voltage_max: f32, output_min: f32, output_max: f32) -> Self {
        Self {
            voltage_min,
            voltage_max,
            output_min,
            output_max,
        }
    }

    fn voltage_span(&self) -> AcquisitionResult<f32> {
        let span = self.voltage_max - self.voltage_min;
        if span > 0.0 {
            Ok(span)
        } else {
            Err(AcquisitionError::NumericDomain {
                reason: "linear voltage span is empty",
            })
        }
    }

    /// Clamp `volts` to the calibrated window, then map to the output range
    pub fn apply(&self, volts: f32) -> AcquisitionResult<f32> {
        let span = self.voltage_span()?;
        let v = volts.clamp(self.voltage_min, self.voltage_max);
        Ok((v - self.voltage_min) / span * (self.output_max - self.output_min) + self.output_min)
    }

    /// Voltage that [`apply`](Self::apply) maps to `output`
    pub fn invert(&self, output: f32) -> AcquisitionResult<f32> {
        let span = self.voltage_span()?;
        let out_span = self.output_max - self.output_min;
        if out_span == 0.0 {
            return Err(AcquisitionError::NumericDomain {
                reason: "linear output span is empty",
            });
        }
        Ok((output - self.output_min) / out_span * span + self.voltage_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_endpoints_and_midpoint() {
        let cal = LinearCalibration::GENERIC_0_5_BAR;
        assert_eq!(cal.apply(0.5).unwrap(), 0.0);
        assert_eq!(cal.apply(4.5).unwrap(), 5.0);
        assert!((cal.apply(2.5).unwrap() - 2.5).abs() < 1e-6);
    }

    #[test]
    fn clamps_outside_window() {
        let cal = LinearCalibration::new(0.5, 4.5, -40.0, 150.0);
        assert_eq!(cal.apply(0.0).unwrap(), -40.0);
        assert_eq!(cal.apply(5.0).unwrap(), 150.0);
    }

    #[test]
    fn inverse_recovers_voltage() {
        let cal = LinearCalibration::new(0.2, 4.7, 0.15, 7.0);
        let v = 3.1;
        let back = cal.invert(cal.apply(v).unwrap()).unwrap();
        assert!((back - v).abs() < 1e-5);
    }

    #[test]
    fn empty_span_is_a_domain_fault() {
        let cal = LinearCalibration::new(2.0, 2.0, 0.0, 1.0);
        assert!(cal.apply(2.0).is_err());
    }
}
