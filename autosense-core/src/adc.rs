//! ADC Sampling and Resistance Primitives
//!
//! ## Overview
//!
//! Every analog sensor starts here. A read goes through three steps:
//!
//! ```text
//! channel ──► sample_channel ──► AdcSample { code, valid }
//!                                    │
//!             ┌──────────────────────┴───────────────────┐
//!             ▼                                          ▼
//!      code_to_voltage(code)               divider_resistance(code, Rbias)
//!      (linear / voltage sensors)          (thermistors / resistive senders)
//! ```
//!
//! ## Double Sampling
//!
//! The first conversion after switching the multiplexer is unreliable: the
//! sample-and-hold capacitor is still charging from the previous channel.
//! [`sample_channel`] converts twice and keeps the second result.
//!
//! ## Rail Detection
//!
//! A resistive sender is wired as the low side of a divider with a pull-up
//! bias resistor:
//!
//! ```text
//!   Vref ── Rbias ──┬── ADC
//!                   │
//!                Rsensor
//!                   │
//!                  GND
//! ```
//!
//! An open sender pulls the ADC to full scale, a shorted one to zero. Codes
//! within [`ADC_RAIL_MARGIN`] of either rail are flagged invalid so that no
//! calibration math ever runs on them.
//!
//! ## Divider Inversion
//!
//! With the sender on the low side, `code / FS = Rs / (Rbias + Rs)`, which
//! solves to:
//!
//! ```text
//! Rs = code · Rbias / (FS − code)
//! ```

use crate::{
    constants::adc::{ADC_FULL_SCALE, ADC_RAIL_MARGIN, AREF_VOLTAGE},
    errors::{AcquisitionError, AcquisitionResult},
    traits::AnalogInput,
};

/// Converter characteristics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdcConfig {
    /// Highest code the converter returns
    pub full_scale: u16,
    /// Reference voltage mapped to full scale (V)
    pub reference_voltage: f32,
    /// Distance from either rail that marks a code invalid
    pub rail_margin: u16,
}

impl Default for AdcConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AdcConfig {
    /// Platform defaults from [`crate::constants::adc`]
    pub const fn new() -> Self {
        Self {
            full_scale: ADC_FULL_SCALE,
            reference_voltage: AREF_VOLTAGE,
            rail_margin: ADC_RAIL_MARGIN,
        }
    }

    /// Override the full-scale code
    pub const fn with_full_scale(mut self, full_scale: u16) -> Self {
        self.full_scale = full_scale;
        self
    }

    /// Override the reference voltage
    pub const fn with_reference_voltage(mut self, volts: f32) -> Self {
        self.reference_voltage = volts;
        self
    }

    /// Override the rail margin
    pub const fn with_rail_margin(mut self, margin: u16) -> Self {
        self.rail_margin = margin;
        self
    }

    /// True if `code` is strictly inside the rails
    pub fn is_valid_code(&self, code: u16) -> bool {
        code > self.rail_margin && code < self.full_scale.saturating_sub(self.rail_margin)
    }

    /// Scale an ADC code to volts
    pub fn code_to_voltage(&self, code: u16) -> f32 {
        code as f32 * (self.reference_voltage / self.full_scale as f32)
    }

    /// Sender resistance for `code` behind a pull-up of `bias_ohms`
    pub fn divider_resistance(&self, code: u16, bias_ohms: f32) -> AcquisitionResult<f32> {
        voltage_divider_resistance(code, bias_ohms, self.full_scale)
    }
}

/// Result of a double-sampled conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdcSample {
    /// Second (settled) conversion result
    pub code: u16,
    /// False if the code is within the rail margin
    pub valid: bool,
}

impl AdcSample {
    /// The code, or a rail fault if the sample was rejected
    pub fn checked(self) -> AcquisitionResult<u16> {
        if self.valid {
            Ok(self.code)
        } else {
            Err(AcquisitionError::RailPinned { code: self.code })
        }
    }
}

/// Sample `channel` twice, keep the second conversion, and flag rail codes.
///
/// Only a converter failure is an `Err`; a rail-pinned code comes back as an
/// [`AdcSample`] with `valid == false`.
pub fn sample_channel<A>(adc: &mut A, channel: u8) -> AcquisitionResult<AdcSample>
where
    A: AnalogInput + ?Sized,
{
    let config = adc.adc_config();

    // Multiplexer settling: discard the first conversion
    nb::block!(adc.convert(channel)).map_err(|_| AcquisitionError::BusFault {
        reason: "ADC conversion failed",
    })?;
    let code = nb::block!(adc.convert(channel)).map_err(|_| AcquisitionError::BusFault {
        reason: "ADC conversion failed",
    })?;

    let valid = config.is_valid_code(code);
    if !valid {
        log_debug!(target: "adc", "channel {} rail-pinned at code {}", channel, code);
    }

    Ok(AdcSample { code, valid })
}

/// Scale an ADC code to volts with the platform default configuration
pub fn code_to_voltage(code: u16) -> f32 {
    AdcConfig::new().code_to_voltage(code)
}

/// Invert a pull-up divider: `R = code · Rbias / (full_scale − code)`.
///
/// Fails when `code >= full_scale` (open circuit, division guard) or when the
/// result is not a positive resistance.
pub fn voltage_divider_resistance(code: u16, bias_ohms: f32, full_scale: u16) -> AcquisitionResult<f32> {
    if code >= full_scale {
        return Err(AcquisitionError::NumericDomain {
            reason: "ADC code at full scale",
        });
    }

    let resistance = code as f32 * bias_ohms / (full_scale - code) as f32;

    if !(resistance > 0.0) || !resistance.is_finite() {
        return Err(AcquisitionError::NumericDomain {
            reason: "non-positive resistance",
        });
    }

    Ok(resistance)
}

/// ADC code a sender of `resistance_ohms` produces behind `bias_ohms`.
///
/// Inverse of [`voltage_divider_resistance`], rounded to the nearest code.
/// Used by bench fixtures and to pre-compute expected codes.
pub fn code_for_resistance(resistance_ohms: f32, bias_ohms: f32, full_scale: u16) -> u16 {
    let ratio = resistance_ohms / (resistance_ohms + bias_ohms);
    libm::roundf(ratio * full_scale as f32) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::AdcError;

    struct Scripted {
        codes: [u16; 2],
        next: usize,
        busy_polls: u8,
    }

    impl AnalogInput for Scripted {
        fn convert(&mut self, _channel: u8) -> nb::Result<u16, AdcError> {
            if self.busy_polls > 0 {
                self.busy_polls -= 1;
                return Err(nb::Error::WouldBlock);
            }
            let code = self.codes[self.next];
            self.next += 1;
            Ok(code)
        }
    }

    #[test]
    fn keeps_second_conversion() {
        let mut adc = Scripted { codes: [1000, 512], next: 0, busy_polls: 2 };
        let sample = sample_channel(&mut adc, 0).unwrap();
        assert_eq!(sample.code, 512);
        assert!(sample.valid);
    }

    #[test]
    fn rail_codes_are_invalid() {
        let config = AdcConfig::new().with_full_scale(1023).with_rail_margin(3);
        assert!(!config.is_valid_code(0));
        assert!(!config.is_valid_code(3));
        assert!(config.is_valid_code(4));
        assert!(config.is_valid_code(1019));
        assert!(!config.is_valid_code(1020));
        assert!(!config.is_valid_code(1023));
    }

    #[test]
    fn rail_sample_fails_check() {
        let sample = AdcSample { code: 1, valid: false };
        assert_eq!(sample.checked(), Err(AcquisitionError::RailPinned { code: 1 }));
    }

    #[test]
    fn voltage_scaling() {
        let config = AdcConfig::new().with_full_scale(1000).with_reference_voltage(5.0);
        assert!((config.code_to_voltage(500) - 2.5).abs() < 1e-6);
        assert_eq!(config.code_to_voltage(0), 0.0);
    }

    #[test]
    fn divider_midpoint_equals_bias() {
        let r = voltage_divider_resistance(500, 1000.0, 1000).unwrap();
        assert!((r - 1000.0).abs() < 1e-3);
    }

    #[test]
    fn divider_guards() {
        assert!(voltage_divider_resistance(1023, 1000.0, 1023).is_err());
        assert!(voltage_divider_resistance(2000, 1000.0, 1023).is_err());
        assert!(voltage_divider_resistance(0, 1000.0, 1023).is_err());
    }

    #[test]
    fn code_for_resistance_inverts_divider() {
        let code = code_for_resistance(55.0, 1000.0, 1023);
        let r = voltage_divider_resistance(code, 1000.0, 1023).unwrap();
        // One code step at this point is about 1 Ω
        assert!((r - 55.0).abs() < 1.5);
    }
}
