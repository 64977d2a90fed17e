//! Quadratic pressure curves
//!
//! VDO-style resistive pressure senders are characterised by a curve fit
//!
//! ```text
//! R(P) = a·P² + b·P + c
//! ```
//!
//! Reading a pressure means solving `a·P² + b·P + (c − R) = 0` for `P`. The
//! fits have a negative `a`, so the parabola has two roots: the physical one
//! near zero and a far one beyond the curve's apex (≈29 bar for the VDO 2 bar
//! sender at 55 Ω). The physical root is taken on the `−√disc` branch of the
//! cancellation-free form of the quadratic formula:
//!
//! ```text
//! disc = b² − 4a(c − R)
//! P    = 2(c − R) / (−b − √disc)
//! ```
//!
//! which equals `(−b + √disc) / 2a` but stays well conditioned when `a` is
//! small, and degrades to the linear solution when `a` is zero.

use crate::errors::{AcquisitionError, AcquisitionResult};

/// Resistance-vs-pressure quadratic with the divider bias resistor
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolynomialCalibration {
    /// Pull-up resistor in front of the sender (Ω)
    pub bias_resistor: f32,
    /// Quadratic coefficient (Ω/bar²)
    pub a: f32,
    /// Linear coefficient (Ω/bar)
    pub b: f32,
    /// Resistance at zero pressure (Ω)
    pub c: f32,
}

impl PolynomialCalibration {
    /// Build from bias resistor and curve coefficients
    pub const fn new(bias_resistor: f32, a: f32, b: f32, c: f32) -> Self {
        Self { bias_resistor, a, b, c }
    }

    /// Sender resistance at `pressure_bar`
    pub fn resistance_at(&self, pressure_bar: f32) -> f32 {
        self.a * pressure_bar * pressure_bar + self.b * pressure_bar + self.c
    }

    /// Invert the curve: pressure (bar) for a measured resistance.
    ///
    /// # Errors
    ///
    /// `NumericDomain` if the resistance is not positive, the discriminant is
    /// negative (no real root), or the curve is flat.
    pub fn pressure_from_resistance(&self, ohms: f32) -> AcquisitionResult<f32> {
        if !(ohms > 0.0) {
            return Err(AcquisitionError::NumericDomain {
                reason: "non-positive resistance",
            });
        }
        let c = self.c - ohms;
        let discriminant = self.b * self.b - 4.0 * self.a * c;
        if discriminant < 0.0 {
            return Err(AcquisitionError::NumericDomain {
                reason: "negative discriminant",
            });
        }

        let denominator = -self.b - libm::sqrtf(discriminant);
        if denominator == 0.0 {
            return Err(AcquisitionError::NumericDomain {
                reason: "flat polynomial",
            });
        }

        Ok(2.0 * c / denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VDO_2BAR: PolynomialCalibration = PolynomialCalibration::new(1000.0, -3.1515, 93.686, 9.6307);
    const VDO_5BAR: PolynomialCalibration = PolynomialCalibration::new(1000.0, -0.3682, 36.465, 10.648);

    #[test]
    fn vdo_2bar_near_half_bar_point() {
        let p = VDO_2BAR.pressure_from_resistance(55.0).unwrap();
        assert!(p > 0.46 && p < 0.5, "got {p}");
    }

    #[test]
    fn recovers_pressure_from_curve() {
        for &p in &[0.0f32, 0.8, 2.0, 4.5] {
            let r = VDO_5BAR.resistance_at(p);
            let back = VDO_5BAR.pressure_from_resistance(r).unwrap();
            assert!((back - p).abs() < 1e-3, "{p} -> {r} -> {back}");
        }
    }

    #[test]
    fn rejects_domain_faults() {
        assert!(VDO_2BAR.pressure_from_resistance(0.0).is_err());
        assert!(VDO_2BAR.pressure_from_resistance(-5.0).is_err());
        // Past the curve's apex there is no real root
        assert!(VDO_2BAR.pressure_from_resistance(5000.0).is_err());
    }

    #[test]
    fn picks_root_near_zero() {
        // The other root of the 2 bar fit at 55 Ω sits near 29 bar
        let p = VDO_2BAR.pressure_from_resistance(55.0).unwrap();
        let far = -VDO_2BAR.b / VDO_2BAR.a - p;
        assert!(far > 25.0);
        assert!(p < 1.0);
    }

    #[test]
    fn linear_curve_is_accepted() {
        let cal = PolynomialCalibration::new(1000.0, 0.0, 40.0, 10.0);
        let p = cal.pressure_from_resistance(90.0).unwrap();
        assert!((p - 2.0).abs() < 1e-5);
    }
}
