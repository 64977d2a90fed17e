//! Sensor acquisition and calibration engine for AutoSense
//!
//! Turns raw electrical measurements (ADC codes, SPI frames, pulse
//! intervals, pin levels) into engineering values: °C, bar, V, RPM, km/h.
//! Built for 8/32-bit microcontrollers.
//!
//! Key constraints:
//! - No heap allocation anywhere
//! - A failed read yields `NaN`, never a panic or a stale value
//! - Interrupt and polling contexts share pulse state only through
//!   `critical-section`
//!
//! ```rust
//! use autosense_core::calibration::{Calibration, PolynomialCalibration};
//!
//! // VDO 2-bar oil pressure sender on a 1 kΩ bias resistor
//! let vdo = Calibration::PolynomialPressure(PolynomialCalibration::new(1000.0, -3.1515, 93.686, 9.6307));
//! let bar = vdo.convert_resistance(55.0).unwrap();
//! assert!(bar > 0.4 && bar < 0.5);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod adc;
pub mod calibration;
pub mod constants;
pub mod errors;
pub mod lookup;
pub mod pulse;
pub mod sensor;
pub mod sensors;
pub mod traits;

// Public API
pub use adc::{AdcConfig, AdcSample};
pub use calibration::{Calibration, CalibrationSource, CalibrationType, ResolvedCalibration};
pub use errors::{AcquisitionError, AcquisitionResult};
pub use lookup::Direction;
pub use pulse::{PulseCapture, PulseChannel, PulseState};
pub use sensor::{MeasurementType, SensorFlags, SensorKind, SensorRecord};
pub use traits::Board;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
