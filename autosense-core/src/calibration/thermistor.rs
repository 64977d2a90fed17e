//! NTC thermistor equations
//!
//! ## Beta model
//!
//! ```text
//! 1/T = 1/T0 + ln(R/R0)/β          (T, T0 in kelvin)
//! ```
//!
//! Two parameters, good to a degree or two over a ~50 K window around `T0`.
//!
//! ## Steinhart-Hart
//!
//! ```text
//! 1/T = A + B·ln(R) + C·ln(R)³
//! ```
//!
//! Three coefficients fitted to the sender's curve; holds across the full
//! coolant/oil range. Both report Celsius.

use crate::{
    constants::physics::KELVIN_OFFSET,
    errors::{AcquisitionError, AcquisitionResult},
};

fn kelvin_from_inverse(inverse_kelvin: f32) -> AcquisitionResult<f32> {
    let kelvin = 1.0 / inverse_kelvin;
    if kelvin > 0.0 && kelvin.is_finite() {
        Ok(kelvin - KELVIN_OFFSET)
    } else {
        Err(AcquisitionError::NumericDomain {
            reason: "thermistor equation has no physical solution",
        })
    }
}

fn checked_ln(ohms: f32) -> AcquisitionResult<f32> {
    if ohms > 0.0 && ohms.is_finite() {
        Ok(libm::logf(ohms))
    } else {
        Err(AcquisitionError::NumericDomain {
            reason: "non-positive resistance",
        })
    }
}

/// Beta-model NTC parameters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BetaCalibration {
    /// Pull-up resistor in front of the thermistor (Ω)
    pub bias_resistor: f32,
    /// Beta coefficient (K)
    pub beta: f32,
    /// Resistance at `t0_c` (Ω)
    pub r0: f32,
    /// Reference temperature (°C)
    pub t0_c: f32,
}

impl BetaCalibration {
    /// Typical 10 kΩ / 3950 K NTC behind a 10 kΩ pull-up
    pub const DEFAULT: Self = Self::new(10_000.0, 3950.0, 10_000.0, 25.0);

    /// Build from bias resistor and Beta-model parameters
    pub const fn new(bias_resistor: f32, beta: f32, r0: f32, t0_c: f32) -> Self {
        Self {
            bias_resistor,
            beta,
            r0,
            t0_c,
        }
    }

    /// Temperature (°C) for a measured resistance
    pub fn temperature_from_resistance(&self, ohms: f32) -> AcquisitionResult<f32> {
        if !(self.r0 > 0.0) || self.beta == 0.0 {
            return Err(AcquisitionError::NumericDomain {
                reason: "invalid Beta parameters",
            });
        }
        let ln_ratio = checked_ln(ohms / self.r0)?;
        let t0_k = self.t0_c + KELVIN_OFFSET;
        kelvin_from_inverse(1.0 / t0_k + ln_ratio / self.beta)
    }
}

/// Steinhart-Hart NTC coefficients
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SteinhartCalibration {
    /// Pull-up resistor in front of the thermistor (Ω)
    pub bias_resistor: f32,
    /// Constant term
    pub a: f32,
    /// `ln(R)` term
    pub b: f32,
    /// `ln(R)³` term
    pub c: f32,
}

impl SteinhartCalibration {
    /// Published coefficients for a 10 kΩ @ 25 °C NTC behind a 10 kΩ pull-up
    pub const DEFAULT: Self = Self::new(10_000.0, 1.129241e-3, 2.341077e-4, 8.775468e-8);

    /// Build from bias resistor and coefficients
    pub const fn new(bias_resistor: f32, a: f32, b: f32, c: f32) -> Self {
        Self { bias_resistor, a, b, c }
    }

    /// Temperature (°C) for a measured resistance
    pub fn temperature_from_resistance(&self, ohms: f32) -> AcquisitionResult<f32> {
        let ln_r = checked_ln(ohms)?;
        kelvin_from_inverse(self.a + self.b * ln_r + self.c * ln_r * ln_r * ln_r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beta_reference_point() {
        let t = BetaCalibration::DEFAULT.temperature_from_resistance(10_000.0).unwrap();
        assert!((t - 25.0).abs() < 1e-3);
    }

    #[test]
    fn beta_is_monotonic_decreasing_in_resistance() {
        let cal = BetaCalibration::DEFAULT;
        let hot = cal.temperature_from_resistance(2_000.0).unwrap();
        let cold = cal.temperature_from_resistance(30_000.0).unwrap();
        assert!(hot > 25.0 && cold < 25.0);
    }

    #[test]
    fn steinhart_default_at_ten_kilohm() {
        let t = SteinhartCalibration::DEFAULT.temperature_from_resistance(10_000.0).unwrap();
        assert!((t - 25.0).abs() < 0.05, "got {t}");
    }

    #[test]
    fn vdo_120_fit_tracks_table() {
        // 97.05 Ω is the 70 °C point of the VDO 120 °C sender table
        let cal = SteinhartCalibration::new(1000.0, 1.764445997570e-03, 2.499534389889e-04, 6.773335597401e-08);
        let t = cal.temperature_from_resistance(97.05).unwrap();
        assert!((t - 70.0).abs() < 1.5, "got {t}");
    }

    #[test]
    fn rejects_non_positive_resistance() {
        assert!(BetaCalibration::DEFAULT.temperature_from_resistance(0.0).is_err());
        assert!(SteinhartCalibration::DEFAULT.temperature_from_resistance(-1.0).is_err());
    }
}
