//! Error Types for Acquisition and Calibration Faults
//!
//! ## Design Philosophy
//!
//! Errors in this crate never leave a sensor read. Every numeric step returns
//! an [`AcquisitionResult`], the steps chain with `?`, and the sensor record
//! collapses whatever comes out into its `value`: the physical reading on
//! success, `NaN` on any fault. The scheduler only ever sees the value.
//!
//! 1. **Small Size**: variants carry at most three `f32`s or a `&'static str`.
//!
//! 2. **No Heap Allocation**: messages are `&'static str` only.
//!
//! 3. **Copy Semantics**: errors are `Copy` so they can be returned from
//!    interrupt-adjacent code without moves.
//!
//! ## Error Categories
//!
//! ### Acquisition
//! - `RailPinned`: ADC code at or near a rail (open or shorted sender)
//! - `Disconnected`: voltage input floating near zero
//! - `BusFault`: chip transport failed or chip reported a fault
//!
//! ### Calibration
//! - `CalibrationUnavailable`: no usable parameter tier for a family that
//!   has no safe default (tables, polynomials)
//! - `TableDegenerate`: interpolation table empty, mismatched or flat
//!
//! ### Numeric
//! - `NumericDomain`: negative discriminant, non-positive resistance,
//!   division guard
//! - `OutOfRange`: calibrated value outside the sensor's validity band
//!
//! A stalled pulse sensor is not an error; it reads `0.0`.
//!
//! ```rust
//! use autosense_core::{AcquisitionError, AcquisitionResult};
//!
//! fn checked_resistance(r: f32) -> AcquisitionResult<f32> {
//!     if r > 0.0 {
//!         Ok(r)
//!     } else {
//!         Err(AcquisitionError::NumericDomain { reason: "non-positive resistance" })
//!     }
//! }
//!
//! assert!(checked_resistance(-1.0).is_err());
//! ```

use thiserror_no_std::Error;

use crate::calibration::CalibrationType;

/// Result type for acquisition and calibration steps
pub type AcquisitionResult<T> = Result<T, AcquisitionError>;

/// Faults that stop a single sensor read
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum AcquisitionError {
    /// ADC sample within the rail margin of 0 or full scale
    #[error("ADC code {code} is pinned at a rail")]
    RailPinned {
        /// The rejected ADC code
        code: u16,
    },

    /// Voltage input reads below the disconnect threshold
    #[error("ADC code {code} below disconnect threshold")]
    Disconnected {
        /// The rejected ADC code
        code: u16,
    },

    /// Chip transport failed or the chip flagged a fault
    #[error("Bus fault: {reason}")]
    BusFault {
        /// What failed
        reason: &'static str,
    },

    /// No calibration tier usable for a family without a safe default
    #[error("No calibration available for {family:?}")]
    CalibrationUnavailable {
        /// The family that could not be resolved
        family: CalibrationType,
    },

    /// Interpolation table is empty, mismatched, or has a flat segment
    #[error("Interpolation table is degenerate")]
    TableDegenerate,

    /// Math left its valid domain
    #[error("Numeric domain fault: {reason}")]
    NumericDomain {
        /// Which guard tripped
        reason: &'static str,
    },

    /// Calibrated value outside the sensor's validity band
    #[error("Value {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// The discarded value
        value: f32,
        /// Lowest plausible value
        min: f32,
        /// Highest plausible value
        max: f32,
    },
}

impl AcquisitionError {
    /// Short subsystem name for log output
    pub fn subsystem(&self) -> &'static str {
        match self {
            Self::RailPinned { .. } | Self::Disconnected { .. } => "adc",
            Self::BusFault { .. } => "bus",
            Self::CalibrationUnavailable { .. } | Self::TableDegenerate => "calibration",
            Self::NumericDomain { .. } | Self::OutOfRange { .. } => "sensor",
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AcquisitionError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::RailPinned { code } =>
                defmt::write!(fmt, "ADC code {} pinned at rail", code),
            Self::Disconnected { code } =>
                defmt::write!(fmt, "ADC code {} disconnected", code),
            Self::BusFault { reason } =>
                defmt::write!(fmt, "Bus fault: {}", reason),
            Self::CalibrationUnavailable { family } =>
                defmt::write!(fmt, "No calibration for {}", family.name()),
            Self::TableDegenerate =>
                defmt::write!(fmt, "Degenerate table"),
            Self::NumericDomain { reason } =>
                defmt::write!(fmt, "Numeric domain: {}", reason),
            Self::OutOfRange { value, min, max } =>
                defmt::write!(fmt, "Value {} outside [{}, {}]", value, min, max),
        }
    }
}
