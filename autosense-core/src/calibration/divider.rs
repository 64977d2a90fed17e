//! Resistor divider in front of an ADC input (battery and supply rails)

use crate::{
    constants::adc::{VOLTAGE_DIVIDER_BASE_OHMS, VOLTAGE_DIVIDER_RATIO},
    errors::{AcquisitionError, AcquisitionResult},
};

/// `Vin = Vadc · (r1 + r2) / r2 · correction + offset`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoltageDividerCalibration {
    /// High-side resistor (Ω)
    pub r1: f32,
    /// Low-side resistor, ADC side (Ω)
    pub r2: f32,
    /// Gain trim
    pub correction: f32,
    /// Offset trim (V)
    pub offset: f32,
}

impl VoltageDividerCalibration {
    /// Platform divider: `r2` fixed, `r1` chosen to give the configured ratio
    pub const DEFAULT: Self = Self {
        r1: (VOLTAGE_DIVIDER_RATIO - 1.0) * VOLTAGE_DIVIDER_BASE_OHMS,
        r2: VOLTAGE_DIVIDER_BASE_OHMS,
        correction: 1.0,
        offset: 0.0,
    };

    /// Build from resistor values and trims
    pub const fn new(r1: f32, r2: f32, correction: f32, offset: f32) -> Self {
        Self { r1, r2, correction, offset }
    }

    /// `(r1 + r2) / r2`
    pub fn ratio(&self) -> AcquisitionResult<f32> {
        if self.r2 > 0.0 && self.r1 >= 0.0 {
            Ok((self.r1 + self.r2) / self.r2)
        } else {
            Err(AcquisitionError::NumericDomain {
                reason: "invalid divider resistors",
            })
        }
    }

    /// Input voltage for a voltage measured at the ADC pin
    pub fn apply(&self, adc_volts: f32) -> AcquisitionResult<f32> {
        Ok(adc_volts * self.ratio()? * self.correction + self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_platform_ratio() {
        let ratio = VoltageDividerCalibration::DEFAULT.ratio().unwrap();
        assert!((ratio - VOLTAGE_DIVIDER_RATIO).abs() < 1e-5);
    }

    #[test]
    fn trims_apply_after_ratio() {
        let cal = VoltageDividerCalibration::new(100_000.0, 10_000.0, 1.02, -0.1);
        let v = cal.apply(1.2).unwrap();
        assert!((v - (1.2 * 11.0 * 1.02 - 0.1)).abs() < 1e-4);
    }

    #[test]
    fn zero_low_side_is_rejected() {
        let cal = VoltageDividerCalibration::new(1000.0, 0.0, 1.0, 0.0);
        assert!(cal.apply(1.0).is_err());
    }
}
