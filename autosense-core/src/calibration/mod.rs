//! Calibration Families and Parameter Sets
//!
//! ## Overview
//!
//! A calibration turns an electrical measurement into an engineering value.
//! Each sensor belongs to exactly one family, and each family has its own
//! parameter struct and its own algorithm:
//!
//! | Family                | Input            | Parameters                          |
//! |-----------------------|------------------|-------------------------------------|
//! | `Linear`              | voltage          | `Vmin, Vmax, outMin, outMax`        |
//! | `PolynomialPressure`  | resistance       | `Rbias, a, b, c`                    |
//! | `TableThermistor`     | resistance       | `Rbias, (R, °C)` descending         |
//! | `TablePressure`       | resistance       | `Rbias, (R, bar)` ascending         |
//! | `ThermistorBeta`      | resistance       | `Rbias, β, R0, T0`                  |
//! | `ThermistorSteinhart` | resistance       | `Rbias, A, B, C`                    |
//! | `VoltageDivider`      | voltage          | `R1, R2, correction, offset`        |
//! | `Rpm`                 | pulse interval   | poles, pulley ratio, bounds         |
//! | `Speed`               | pulse interval   | pulses/rev, tire, final drive       |
//!
//! [`Calibration`] is the tagged union of all of them. Algorithms match on
//! the tag, so adding a family is a compile error everywhere it is not yet
//! handled.
//!
//! ## Ownership
//!
//! Preset calibrations are `&'static Calibration` values compiled into the
//! firmware image. A custom calibration is an owned `Calibration` inside the
//! sensor record. [`resolve`] picks one of them (or a hard default) per read
//! and hands back a [`ResolvedCalibration`] that remembers which tier it came
//! from.

mod divider;
mod frequency;
mod linear;
mod polynomial;
mod resolver;
mod table;
mod thermistor;

pub use divider::VoltageDividerCalibration;
pub use frequency::{PulseCalibration, RpmCalibration, SpeedCalibration};
pub use linear::LinearCalibration;
pub use polynomial::PolynomialCalibration;
pub use resolver::{default_for, resolve, CalibrationSource, CalibrationSources, ResolvedCalibration};
pub use table::{TableCalibration, TableData, MAX_CUSTOM_TABLE_POINTS};
pub use thermistor::{BetaCalibration, SteinhartCalibration};

use crate::{
    errors::{AcquisitionError, AcquisitionResult},
    lookup::Direction,
};

/// Calibration family discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CalibrationType {
    /// No calibration (chip sensors, digital inputs)
    #[default]
    None,
    /// Voltage mapped affinely to the output range
    Linear,
    /// Resistance inverted through a quadratic pressure curve
    PolynomialPressure,
    /// Resistance looked up in a descending thermistor table
    TableThermistor,
    /// Resistance looked up in an ascending pressure table
    TablePressure,
    /// NTC Beta equation
    ThermistorBeta,
    /// NTC Steinhart-Hart equation
    ThermistorSteinhart,
    /// Resistor divider in front of the ADC
    VoltageDivider,
    /// Engine speed from alternator pulses
    Rpm,
    /// Vehicle speed from a hall sender
    Speed,
}

impl CalibrationType {
    /// Stable upper-case name used in logs and configuration
    pub const fn name(self) -> &'static str {
        match self {
            CalibrationType::None => "NONE",
            CalibrationType::Linear => "LINEAR",
            CalibrationType::PolynomialPressure => "PRESSURE_POLYNOMIAL",
            CalibrationType::TableThermistor => "THERMISTOR_TABLE",
            CalibrationType::TablePressure => "PRESSURE_TABLE",
            CalibrationType::ThermistorBeta => "THERMISTOR_BETA",
            CalibrationType::ThermistorSteinhart => "THERMISTOR_STEINHART",
            CalibrationType::VoltageDivider => "VOLTAGE_DIVIDER",
            CalibrationType::Rpm => "RPM",
            CalibrationType::Speed => "SPEED",
        }
    }

    /// Families with no safe numeric fallback
    pub const fn requires_explicit_parameters(self) -> bool {
        matches!(
            self,
            CalibrationType::PolynomialPressure
                | CalibrationType::TableThermistor
                | CalibrationType::TablePressure
        )
    }

    /// Families driven by the pulse-timing subsystem
    pub const fn is_pulse(self) -> bool {
        matches!(self, CalibrationType::Rpm | CalibrationType::Speed)
    }
}

/// One calibration parameter set, tagged by family
#[derive(Debug, Clone, PartialEq)]
pub enum Calibration {
    /// Linear voltage mapping
    Linear(LinearCalibration),
    /// Quadratic resistance curve for pressure senders
    PolynomialPressure(PolynomialCalibration),
    /// Descending resistance → temperature table
    TableThermistor(TableCalibration),
    /// Ascending resistance → pressure table
    TablePressure(TableCalibration),
    /// Beta-model thermistor
    ThermistorBeta(BetaCalibration),
    /// Steinhart-Hart thermistor
    ThermistorSteinhart(SteinhartCalibration),
    /// Battery / supply voltage divider
    VoltageDivider(VoltageDividerCalibration),
    /// Alternator W-phase RPM
    Rpm(RpmCalibration),
    /// Hall-effect vehicle speed
    Speed(SpeedCalibration),
}

impl Calibration {
    /// Family of this parameter set
    pub const fn calibration_type(&self) -> CalibrationType {
        match self {
            Calibration::Linear(_) => CalibrationType::Linear,
            Calibration::PolynomialPressure(_) => CalibrationType::PolynomialPressure,
            Calibration::TableThermistor(_) => CalibrationType::TableThermistor,
            Calibration::TablePressure(_) => CalibrationType::TablePressure,
            Calibration::ThermistorBeta(_) => CalibrationType::ThermistorBeta,
            Calibration::ThermistorSteinhart(_) => CalibrationType::ThermistorSteinhart,
            Calibration::VoltageDivider(_) => CalibrationType::VoltageDivider,
            Calibration::Rpm(_) => CalibrationType::Rpm,
            Calibration::Speed(_) => CalibrationType::Speed,
        }
    }

    /// Bias resistor of a resistive family, if any
    pub fn bias_resistor(&self) -> Option<f32> {
        match self {
            Calibration::PolynomialPressure(p) => Some(p.bias_resistor),
            Calibration::TableThermistor(t) | Calibration::TablePressure(t) => Some(t.bias_resistor),
            Calibration::ThermistorBeta(b) => Some(b.bias_resistor),
            Calibration::ThermistorSteinhart(s) => Some(s.bias_resistor),
            _ => None,
        }
    }

    /// Convert a sensor resistance with whichever resistive algorithm this
    /// calibration carries.
    ///
    /// Voltage and pulse families return `CalibrationUnavailable`.
    pub fn convert_resistance(&self, ohms: f32) -> AcquisitionResult<f32> {
        match self {
            Calibration::PolynomialPressure(p) => p.pressure_from_resistance(ohms),
            Calibration::TableThermistor(t) => t.lookup(ohms, Direction::Descending),
            Calibration::TablePressure(t) => t.lookup(ohms, Direction::Ascending),
            Calibration::ThermistorBeta(b) => b.temperature_from_resistance(ohms),
            Calibration::ThermistorSteinhart(s) => s.temperature_from_resistance(ohms),
            other => Err(AcquisitionError::CalibrationUnavailable {
                family: other.calibration_type(),
            }),
        }
    }
}

macro_rules! family_accessor {
    ($(#[$doc:meta])* $fn_name:ident, $variant:ident, $ty:ty) => {
        $(#[$doc])*
        pub fn $fn_name(&self) -> AcquisitionResult<&$ty> {
            match self {
                Calibration::$variant(params) => Ok(params),
                _ => Err(AcquisitionError::CalibrationUnavailable {
                    family: CalibrationType::$variant,
                }),
            }
        }
    };
}

impl Calibration {
    family_accessor!(
        /// Linear parameters, or `CalibrationUnavailable`
        linear, Linear, LinearCalibration
    );
    family_accessor!(
        /// Voltage divider parameters, or `CalibrationUnavailable`
        voltage_divider, VoltageDivider, VoltageDividerCalibration
    );
    family_accessor!(
        /// RPM parameters, or `CalibrationUnavailable`
        rpm, Rpm, RpmCalibration
    );
    family_accessor!(
        /// Speed parameters, or `CalibrationUnavailable`
        speed, Speed, SpeedCalibration
    );
}
