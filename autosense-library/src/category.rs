//! Sensor categories
//!
//! Categories group registry entries by technology for two-level selection
//! ("category, then model"). They are not stored: each entry's category is
//! derived from its driver, measurement and calibration family.
//!
//! Derivation order:
//!
//! ```text
//! environmental chip driver        → Environmental
//! Digital                          → Digital
//! Rpm, Speed                       → Frequency
//! Voltage                          → Voltage
//! Humidity, Elevation              → Environmental
//! Pressure                         → Pressure
//! Temperature, no calibration      → Thermocouple
//! Temperature, any calibration     → Thermistor
//! ```

use autosense_core::{
    calibration::CalibrationType,
    sensor::{MeasurementType, SensorKind},
};

use crate::{
    errors::{RegistryError, RegistryResult},
    hash::name_hash,
};

/// Technology group of a registry entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorCategory {
    /// K-type thermocouple amplifiers
    Thermocouple,
    /// NTC thermistors and linear temperature senders
    Thermistor,
    /// Linear and resistive pressure senders
    Pressure,
    /// Voltage inputs
    Voltage,
    /// RPM and speed
    Frequency,
    /// Temperature / pressure / humidity chip
    Environmental,
    /// Digital level inputs
    Digital,
}

/// Extra names accepted by [`SensorCategory::by_name`]
const ALIASES: [(u16, SensorCategory); 4] = [
    (name_hash("NTC"), SensorCategory::Thermistor),
    (name_hash("TC"), SensorCategory::Thermocouple),
    (name_hash("RPM"), SensorCategory::Frequency),
    (name_hash("SPEED"), SensorCategory::Frequency),
];

impl SensorCategory {
    /// Every category, in display order
    pub const ALL: [SensorCategory; 7] = [
        SensorCategory::Thermocouple,
        SensorCategory::Thermistor,
        SensorCategory::Pressure,
        SensorCategory::Voltage,
        SensorCategory::Frequency,
        SensorCategory::Environmental,
        SensorCategory::Digital,
    ];

    /// Primary key
    pub const fn name(self) -> &'static str {
        match self {
            SensorCategory::Thermocouple => "THERMOCOUPLE",
            SensorCategory::Thermistor => "THERMISTOR",
            SensorCategory::Pressure => "PRESSURE",
            SensorCategory::Voltage => "VOLTAGE",
            SensorCategory::Frequency => "FREQUENCY",
            SensorCategory::Environmental => "ENVIRONMENTAL",
            SensorCategory::Digital => "DIGITAL",
        }
    }

    /// Display label
    pub const fn label(self) -> &'static str {
        match self {
            SensorCategory::Thermocouple => "K-Type Thermocouples",
            SensorCategory::Thermistor => "Thermistor Temperature Sensors",
            SensorCategory::Pressure => "Pressure Sensors",
            SensorCategory::Voltage => "Voltage Sensors",
            SensorCategory::Frequency => "RPM and Speed Sensors",
            SensorCategory::Environmental => "Environmental Sensors",
            SensorCategory::Digital => "Digital Input Sensors",
        }
    }

    /// Hash of [`name`](Self::name)
    pub const fn name_hash(self) -> u16 {
        name_hash(self.name())
    }

    /// Category by primary name or alias, case-insensitive
    pub fn by_name(name: &str) -> RegistryResult<SensorCategory> {
        Self::by_hash(name_hash(name))
    }

    /// Category by name hash; primary names win over aliases
    pub fn by_hash(hash: u16) -> RegistryResult<SensorCategory> {
        Self::ALL
            .iter()
            .copied()
            .find(|cat| cat.name_hash() == hash)
            .or_else(|| ALIASES.iter().find(|(alias, _)| *alias == hash).map(|(_, cat)| *cat))
            .ok_or(RegistryError::UnknownCategory { hash })
    }

    /// Category of a sensor with this driver, measurement and calibration
    pub fn derive(kind: SensorKind, measurement: MeasurementType, calibration: CalibrationType) -> SensorCategory {
        if matches!(
            kind,
            SensorKind::EnvironmentTemperature
                | SensorKind::EnvironmentPressure
                | SensorKind::EnvironmentHumidity
                | SensorKind::EnvironmentElevation
        ) {
            return SensorCategory::Environmental;
        }

        match measurement {
            MeasurementType::Digital => SensorCategory::Digital,
            MeasurementType::Rpm | MeasurementType::Speed => SensorCategory::Frequency,
            MeasurementType::Voltage => SensorCategory::Voltage,
            MeasurementType::Humidity | MeasurementType::Elevation => SensorCategory::Environmental,
            MeasurementType::Pressure => SensorCategory::Pressure,
            MeasurementType::Temperature if calibration == CalibrationType::None => SensorCategory::Thermocouple,
            MeasurementType::Temperature => SensorCategory::Thermistor,
        }
    }
}

impl core::fmt::Display for SensorCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
