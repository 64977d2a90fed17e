//! Sensor Registry
//!
//! ## Overview
//!
//! Every sensor model the firmware knows is one [`SensorDescriptor`] in the
//! static [`SENSORS`] table. A descriptor names the driver, the measured
//! quantity, the calibration family and preset, the read interval and the
//! plausible value band. Configuration refers to entries by index or by name
//! hash; [`SensorDescriptor::instantiate`] turns an entry into a live
//! [`SensorRecord`] on a given channel.
//!
//! ## Stability
//!
//! The table is append-only. Index 0 is the `NONE` placeholder, indices are
//! persisted by the configuration store, and name hashes appear in saved
//! configurations, so existing entries never move or change name.
//!
//! ```rust
//! use autosense_library::registry;
//!
//! let vdo = registry::by_name("vdo_2bar_curve").unwrap();
//! let record = vdo.instantiate(3).unwrap();
//! assert_eq!(record.valid_range, Some((0.0, 2.0)));
//! ```

use autosense_core::{
    calibration::{Calibration, CalibrationType},
    constants::time::DEFAULT_READ_INTERVAL_MS,
    sensor::{MeasurementType, SensorKind, SensorRecord},
};

use crate::{
    category::SensorCategory,
    errors::{RegistryError, RegistryResult},
    hash::name_hash,
    presets::{aem, generic, nxp, system, vdo},
};

use CalibrationType as Cal;
use MeasurementType as Meas;
use SensorKind as Kind;

/// One known sensor model
#[derive(Debug, Clone, Copy)]
pub struct SensorDescriptor {
    /// Primary key, upper-case
    pub name: &'static str,
    /// Display label
    pub label: &'static str,
    /// Driver
    pub kind: SensorKind,
    /// Quantity reported
    pub measurement: MeasurementType,
    /// Calibration family
    pub calibration_type: CalibrationType,
    /// Firmware-resident calibration, if the model has one
    pub preset: Option<&'static Calibration>,
    /// Minimum time between reads (ms), 0 for the global default
    pub min_read_interval_ms: u32,
    /// Plausible value band `(min, max)` in base units
    pub valid_range: (f32, f32),
    /// [`name_hash`] of `name`
    pub name_hash: u16,
}

impl SensorDescriptor {
    /// Descriptor with its name hash computed at compile time
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        name: &'static str,
        label: &'static str,
        kind: SensorKind,
        measurement: MeasurementType,
        calibration_type: CalibrationType,
        preset: Option<&'static Calibration>,
        min_read_interval_ms: u32,
        valid_range: (f32, f32),
    ) -> Self {
        Self {
            name,
            label,
            kind,
            measurement,
            calibration_type,
            preset,
            min_read_interval_ms,
            valid_range,
            name_hash: name_hash(name),
        }
    }

    /// True for the `NONE` placeholder
    pub fn is_placeholder(&self) -> bool {
        self.kind == SensorKind::None
    }

    /// Technology group
    pub fn category(&self) -> SensorCategory {
        SensorCategory::derive(self.kind, self.measurement, self.calibration_type)
    }

    /// Build a sensor record for this model on `channel`.
    ///
    /// The record borrows the preset, carries the validity band and read
    /// interval, and takes the first characters of the name as its label.
    pub fn instantiate(&self, channel: u8) -> RegistryResult<SensorRecord> {
        if self.is_placeholder() {
            return Err(RegistryError::Placeholder);
        }

        let (min, max) = self.valid_range;
        let mut record = SensorRecord::new(channel, self.kind, self.measurement)
            .with_label(self.name)
            .with_valid_range(min, max)
            .with_read_interval(self.min_read_interval_ms);
        record.calibration_type = self.calibration_type;
        record.preset = self.preset;

        Ok(record)
    }
}

const DEFAULT: u32 = DEFAULT_READ_INTERVAL_MS;

/// Every known sensor model. Append only.
pub static SENSORS: [SensorDescriptor; 28] = [
    SensorDescriptor::new("NONE", "", Kind::None, Meas::Temperature, Cal::None, None, 0, (0.0, 0.0)),
    // Thermocouples
    SensorDescriptor::new(
        "MAX6675",
        "K-Type Thermocouple (0-1024°C)",
        Kind::Max6675,
        Meas::Temperature,
        Cal::None,
        None,
        250,
        (0.0, 1024.0),
    ),
    SensorDescriptor::new(
        "MAX31855",
        "K-Type Thermocouple (-270-1372°C)",
        Kind::Max31855,
        Meas::Temperature,
        Cal::None,
        None,
        100,
        (-200.0, 1350.0),
    ),
    // Thermistors
    SensorDescriptor::new(
        "VDO_120C_TABLE",
        "VDO 120C (table)",
        Kind::ThermistorTable,
        Meas::Temperature,
        Cal::TableThermistor,
        Some(&vdo::VDO_120C_TABLE),
        DEFAULT,
        (-40.0, 150.0),
    ),
    SensorDescriptor::new(
        "VDO_150C_TABLE",
        "VDO 150C (table)",
        Kind::ThermistorTable,
        Meas::Temperature,
        Cal::TableThermistor,
        Some(&vdo::VDO_150C_TABLE),
        DEFAULT,
        (-40.0, 180.0),
    ),
    SensorDescriptor::new(
        "VDO_120C_STEINHART",
        "VDO 120C (Steinhart-Hart)",
        Kind::ThermistorSteinhart,
        Meas::Temperature,
        Cal::ThermistorSteinhart,
        Some(&vdo::VDO_120C_STEINHART),
        DEFAULT,
        (-40.0, 150.0),
    ),
    SensorDescriptor::new(
        "VDO_150C_STEINHART",
        "VDO 150C (Steinhart-Hart)",
        Kind::ThermistorSteinhart,
        Meas::Temperature,
        Cal::ThermistorSteinhart,
        Some(&vdo::VDO_150C_STEINHART),
        DEFAULT,
        (-40.0, 180.0),
    ),
    SensorDescriptor::new(
        "GENERIC_NTC_TABLE",
        "Generic NTC (custom table)",
        Kind::ThermistorTable,
        Meas::Temperature,
        Cal::TableThermistor,
        None,
        0,
        (-40.0, 150.0),
    ),
    SensorDescriptor::new(
        "GENERIC_NTC_STEINHART",
        "Generic NTC (custom Steinhart-Hart)",
        Kind::ThermistorSteinhart,
        Meas::Temperature,
        Cal::ThermistorSteinhart,
        None,
        0,
        (-40.0, 150.0),
    ),
    SensorDescriptor::new(
        "GENERIC_NTC_BETA",
        "Generic NTC (custom Beta equation)",
        Kind::ThermistorBeta,
        Meas::Temperature,
        Cal::ThermistorBeta,
        None,
        0,
        (-40.0, 150.0),
    ),
    SensorDescriptor::new(
        "GENERIC_TEMP_LINEAR",
        "0.5-4.5V linear (-40 to 150°C)",
        Kind::Linear,
        Meas::Temperature,
        Cal::Linear,
        Some(&generic::GENERIC_TEMP_LINEAR),
        DEFAULT,
        (-40.0, 150.0),
    ),
    // Pressure
    SensorDescriptor::new(
        "GENERIC_BOOST",
        "0.5-4.5V linear (0-5 bar)",
        Kind::Linear,
        Meas::Pressure,
        Cal::Linear,
        Some(&generic::GENERIC_BOOST),
        DEFAULT,
        (-1.0, 5.0),
    ),
    SensorDescriptor::new(
        "GENERIC_PRESSURE_150PSI",
        "0.5-4.5V linear (0-150 PSI / 10 bar)",
        Kind::Linear,
        Meas::Pressure,
        Cal::Linear,
        Some(&generic::GENERIC_PRESSURE_150PSI),
        DEFAULT,
        (0.0, 10.34),
    ),
    SensorDescriptor::new(
        "AEM_30_2130_150",
        "AEM 150 PSI (0-150 PSI / 10 bar)",
        Kind::Linear,
        Meas::Pressure,
        Cal::Linear,
        Some(&aem::AEM_30_2130_150),
        DEFAULT,
        (0.0, 10.34),
    ),
    SensorDescriptor::new(
        "MPX4250AP",
        "Freescale/NXP (20-250 kPa)",
        Kind::Linear,
        Meas::Pressure,
        Cal::Linear,
        Some(&nxp::MPX4250AP),
        DEFAULT,
        (0.2, 2.5),
    ),
    SensorDescriptor::new(
        "MPX5700AP",
        "Freescale/NXP (15-700 kPa)",
        Kind::Linear,
        Meas::Pressure,
        Cal::Linear,
        Some(&nxp::MPX5700AP),
        DEFAULT,
        (0.15, 7.0),
    ),
    SensorDescriptor::new(
        "VDO_2BAR_CURVE",
        "VDO 2 Bar (curve fit)",
        Kind::PressurePolynomial,
        Meas::Pressure,
        Cal::PolynomialPressure,
        Some(&vdo::VDO_2BAR_CURVE),
        DEFAULT,
        (0.0, 2.0),
    ),
    SensorDescriptor::new(
        "VDO_5BAR_CURVE",
        "VDO 5 Bar (curve fit)",
        Kind::PressurePolynomial,
        Meas::Pressure,
        Cal::PolynomialPressure,
        Some(&vdo::VDO_5BAR_CURVE),
        DEFAULT,
        (0.0, 5.0),
    ),
    SensorDescriptor::new(
        "VDO_2BAR_TABLE",
        "VDO 2 Bar (table)",
        Kind::PressureTable,
        Meas::Pressure,
        Cal::TablePressure,
        Some(&vdo::VDO_2BAR_TABLE),
        DEFAULT,
        (0.0, 2.0),
    ),
    SensorDescriptor::new(
        "VDO_5BAR_TABLE",
        "VDO 5 Bar (table)",
        Kind::PressureTable,
        Meas::Pressure,
        Cal::TablePressure,
        Some(&vdo::VDO_5BAR_TABLE),
        DEFAULT,
        (0.0, 5.0),
    ),
    // Voltage
    SensorDescriptor::new(
        "VOLTAGE_DIVIDER",
        "Battery voltage (12V divider)",
        Kind::VoltageDivider,
        Meas::Voltage,
        Cal::VoltageDivider,
        None,
        DEFAULT,
        (0.0, 30.0),
    ),
    // Frequency
    SensorDescriptor::new(
        "W_PHASE_RPM",
        "W-phase alternator RPM",
        Kind::WPhaseRpm,
        Meas::Rpm,
        Cal::Rpm,
        Some(&system::RPM_12P_3TO1),
        DEFAULT,
        (0.0, 10_000.0),
    ),
    SensorDescriptor::new(
        "HALL_SPEED",
        "Hall Effect Speed Sensor",
        Kind::HallSpeed,
        Meas::Speed,
        Cal::Speed,
        Some(&generic::HALL_SPEED),
        DEFAULT,
        (0.0, 300.0),
    ),
    // Environmental
    SensorDescriptor::new(
        "BME280_TEMP",
        "BME280 temperature (I2C)",
        Kind::EnvironmentTemperature,
        Meas::Temperature,
        Cal::None,
        None,
        DEFAULT,
        (-40.0, 85.0),
    ),
    SensorDescriptor::new(
        "BME280_PRESSURE",
        "BME280 barometric pressure (I2C)",
        Kind::EnvironmentPressure,
        Meas::Pressure,
        Cal::None,
        None,
        DEFAULT,
        (0.3, 1.1),
    ),
    SensorDescriptor::new(
        "BME280_HUMIDITY",
        "BME280 relative humidity (I2C)",
        Kind::EnvironmentHumidity,
        Meas::Humidity,
        Cal::None,
        None,
        DEFAULT,
        (0.0, 100.0),
    ),
    SensorDescriptor::new(
        "BME280_ELEVATION",
        "BME280 altitude (I2C)",
        Kind::EnvironmentElevation,
        Meas::Elevation,
        Cal::None,
        None,
        DEFAULT,
        (-500.0, 9000.0),
    ),
    // Digital
    SensorDescriptor::new(
        "FLOAT_SWITCH",
        "Float/level switch (digital)",
        Kind::FloatSwitch,
        Meas::Digital,
        Cal::None,
        None,
        DEFAULT,
        (0.0, 1.0),
    ),
];

/// Entry at `index`, placeholder included
pub fn by_index(index: u8) -> RegistryResult<&'static SensorDescriptor> {
    SENSORS
        .get(index as usize)
        .ok_or(RegistryError::UnknownIndex { index })
}

/// Index of the entry with this name hash
pub fn index_by_hash(hash: u16) -> RegistryResult<u8> {
    SENSORS
        .iter()
        .position(|sensor| sensor.name_hash == hash)
        .map(|index| index as u8)
        .ok_or(RegistryError::UnknownSensor { hash })
}

/// Entry with this name hash
pub fn by_hash(hash: u16) -> RegistryResult<&'static SensorDescriptor> {
    index_by_hash(hash).and_then(by_index)
}

/// Entry by name, case-insensitive
pub fn by_name(name: &str) -> RegistryResult<&'static SensorDescriptor> {
    by_hash(name_hash(name))
}

/// Real (non-placeholder) entries in `category`
pub fn in_category(category: SensorCategory) -> impl Iterator<Item = &'static SensorDescriptor> {
    SENSORS
        .iter()
        .filter(move |sensor| !sensor.is_placeholder() && sensor.category() == category)
}

/// Entry named `name` within `category` ("category, then model" selection)
pub fn by_category_and_name(category: SensorCategory, name: &str) -> RegistryResult<&'static SensorDescriptor> {
    let hash = name_hash(name);
    in_category(category)
        .find(|sensor| sensor.name_hash == hash)
        .ok_or(RegistryError::UnknownSensor { hash })
}

/// Real entries reporting `measurement`
pub fn with_measurement(measurement: MeasurementType) -> impl Iterator<Item = &'static SensorDescriptor> {
    SENSORS
        .iter()
        .filter(move |sensor| !sensor.is_placeholder() && sensor.measurement == measurement)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_first() {
        let none = by_index(0).unwrap();
        assert!(none.is_placeholder());
        assert_eq!(none.instantiate(0).unwrap_err(), RegistryError::Placeholder);
        assert!(by_index(SENSORS.len() as u8).is_err());
    }

    #[test]
    fn names_are_unique_and_upper_case() {
        for (i, a) in SENSORS.iter().enumerate() {
            assert!(!a.name.bytes().any(|b| b.is_ascii_lowercase()), "{}", a.name);
            for b in &SENSORS[i + 1..] {
                assert_ne!(a.name_hash, b.name_hash, "{} / {}", a.name, b.name);
            }
        }
    }

    #[test]
    fn preset_family_matches_descriptor() {
        for sensor in SENSORS.iter() {
            if let Some(preset) = sensor.preset {
                assert_eq!(preset.calibration_type(), sensor.calibration_type, "{}", sensor.name);
            }
            assert_eq!(sensor.kind.calibration_type(), sensor.calibration_type, "{}", sensor.name);
        }
    }

    #[test]
    fn category_counts() {
        assert_eq!(in_category(SensorCategory::Thermocouple).count(), 2);
        assert_eq!(in_category(SensorCategory::Thermistor).count(), 8);
        assert_eq!(in_category(SensorCategory::Pressure).count(), 9);
        assert_eq!(in_category(SensorCategory::Voltage).count(), 1);
        assert_eq!(in_category(SensorCategory::Frequency).count(), 2);
        assert_eq!(in_category(SensorCategory::Environmental).count(), 4);
        assert_eq!(in_category(SensorCategory::Digital).count(), 1);
    }

    #[test]
    fn category_scoped_lookup() {
        assert!(by_category_and_name(SensorCategory::Pressure, "vdo_5bar_table").is_ok());
        assert!(by_category_and_name(SensorCategory::Thermistor, "vdo_5bar_table").is_err());
    }

    #[test]
    fn measurement_filter() {
        assert_eq!(with_measurement(MeasurementType::Humidity).count(), 1);
        assert_eq!(with_measurement(MeasurementType::Temperature).count(), 11);
    }
}
