//! Sensor Records
//!
//! One [`SensorRecord`] per physical sensor. The record owns its latest value,
//! its flags, and its custom calibration; it borrows its preset from the
//! sensor library for the life of the program.
//!
//! ```text
//! scheduler ── due(now)? ──► read(board) ──► SensorKind::read ──► Result<f32>
//!                                                                    │
//!                              value ◄── store ◄── range check ◄─────┘
//!                          (NaN on any fault)
//! ```
//!
//! ```rust
//! use autosense_core::calibration::{Calibration, BetaCalibration, CalibrationSource, CalibrationType};
//! use autosense_core::sensor::{MeasurementType, SensorKind, SensorRecord};
//!
//! let mut record = SensorRecord::new(2, SensorKind::ThermistorBeta, MeasurementType::Temperature)
//!     .with_label("CHT");
//! record.set_custom_calibration(Calibration::ThermistorBeta(BetaCalibration::DEFAULT));
//!
//! let resolved = record.resolve_calibration(CalibrationType::ThermistorBeta).unwrap();
//! assert_eq!(resolved.source(), CalibrationSource::Custom);
//! assert!(record.value().is_nan());
//! ```

use heapless::String;

use crate::{
    calibration::{resolve, Calibration, CalibrationSources, CalibrationType, ResolvedCalibration},
    constants::time::DEFAULT_READ_INTERVAL_MS,
    errors::{AcquisitionError, AcquisitionResult},
    pulse::{PulseConverter, PulseState},
    sensors,
    traits::Board,
};

/// Capacity of a sensor's short display label
pub const LABEL_CAPACITY: usize = 8;

/// Physical quantity a sensor reports, and its base unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeasurementType {
    /// °C
    #[default]
    Temperature,
    /// bar
    Pressure,
    /// V
    Voltage,
    /// RPM
    Rpm,
    /// km/h
    Speed,
    /// % relative humidity
    Humidity,
    /// m above sea level
    Elevation,
    /// 0.0 / 1.0
    Digital,
}

impl MeasurementType {
    /// Unit every value of this type is stored in
    pub const fn base_unit(self) -> &'static str {
        match self {
            MeasurementType::Temperature => "°C",
            MeasurementType::Pressure => "bar",
            MeasurementType::Voltage => "V",
            MeasurementType::Rpm => "RPM",
            MeasurementType::Speed => "km/h",
            MeasurementType::Humidity => "%",
            MeasurementType::Elevation => "m",
            MeasurementType::Digital => "",
        }
    }
}

/// Per-record switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorFlags {
    /// Sensor participates in acquisition
    pub enabled: bool,
    /// Prefer the record's custom calibration over its preset
    pub use_custom_calibration: bool,
    /// Invert a digital reading (normally-open switches)
    pub inverted: bool,
}

impl Default for SensorFlags {
    fn default() -> Self {
        Self {
            enabled: true,
            use_custom_calibration: false,
            inverted: false,
        }
    }
}

/// Read/init behaviour of a sensor, one variant per driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SensorKind {
    /// Placeholder; always reads NaN
    #[default]
    None,
    /// Linear voltage sender (pressure or temperature)
    Linear,
    /// Resistive pressure sender, quadratic curve
    PressurePolynomial,
    /// Resistive pressure sender, ascending table
    PressureTable,
    /// NTC thermistor, descending table
    ThermistorTable,
    /// NTC thermistor, Beta equation
    ThermistorBeta,
    /// NTC thermistor, Steinhart-Hart equation
    ThermistorSteinhart,
    /// Voltage behind a resistor divider
    VoltageDivider,
    /// Voltage straight into the ADC
    VoltageDirect,
    /// MAX6675 K-type amplifier
    Max6675,
    /// MAX31855 K-type amplifier
    Max31855,
    /// Environmental chip, temperature
    EnvironmentTemperature,
    /// Environmental chip, barometric pressure
    EnvironmentPressure,
    /// Environmental chip, relative humidity
    EnvironmentHumidity,
    /// Environmental chip, altitude
    EnvironmentElevation,
    /// Float / level switch
    FloatSwitch,
    /// Alternator W-phase RPM
    WPhaseRpm,
    /// Hall-effect vehicle speed
    HallSpeed,
}

impl SensorKind {
    /// Calibration family this driver reads with
    pub const fn calibration_type(self) -> CalibrationType {
        match self {
            SensorKind::Linear => CalibrationType::Linear,
            SensorKind::PressurePolynomial => CalibrationType::PolynomialPressure,
            SensorKind::PressureTable => CalibrationType::TablePressure,
            SensorKind::ThermistorTable => CalibrationType::TableThermistor,
            SensorKind::ThermistorBeta => CalibrationType::ThermistorBeta,
            SensorKind::ThermistorSteinhart => CalibrationType::ThermistorSteinhart,
            SensorKind::VoltageDivider => CalibrationType::VoltageDivider,
            SensorKind::WPhaseRpm => CalibrationType::Rpm,
            SensorKind::HallSpeed => CalibrationType::Speed,
            SensorKind::None
            | SensorKind::VoltageDirect
            | SensorKind::Max6675
            | SensorKind::Max31855
            | SensorKind::EnvironmentTemperature
            | SensorKind::EnvironmentPressure
            | SensorKind::EnvironmentHumidity
            | SensorKind::EnvironmentElevation
            | SensorKind::FloatSwitch => CalibrationType::None,
        }
    }

    /// True for drivers fed by the pulse-timing subsystem
    pub const fn is_pulse(self) -> bool {
        matches!(self, SensorKind::WPhaseRpm | SensorKind::HallSpeed)
    }

    /// One-time hardware setup for this driver
    pub fn init<B: Board + ?Sized>(self, record: &mut SensorRecord, board: &mut B) -> AcquisitionResult<()> {
        match self {
            SensorKind::Max6675 | SensorKind::Max31855 => {
                sensors::thermocouple::init(record, board);
                Ok(())
            }
            SensorKind::EnvironmentTemperature
            | SensorKind::EnvironmentPressure
            | SensorKind::EnvironmentHumidity
            | SensorKind::EnvironmentElevation => sensors::environmental::init(record, board),
            SensorKind::FloatSwitch => {
                sensors::digital::init(record, board);
                Ok(())
            }
            SensorKind::WPhaseRpm | SensorKind::HallSpeed => sensors::frequency::init(record, board),
            SensorKind::None
            | SensorKind::Linear
            | SensorKind::PressurePolynomial
            | SensorKind::PressureTable
            | SensorKind::ThermistorTable
            | SensorKind::ThermistorBeta
            | SensorKind::ThermistorSteinhart
            | SensorKind::VoltageDivider
            | SensorKind::VoltageDirect => Ok(()),
        }
    }

    /// Acquire and calibrate one reading
    pub fn read<B: Board + ?Sized>(self, record: &mut SensorRecord, board: &mut B) -> AcquisitionResult<f32> {
        match self {
            SensorKind::None => Err(AcquisitionError::CalibrationUnavailable {
                family: CalibrationType::None,
            }),
            SensorKind::Linear => sensors::analog::read_linear(record, board),
            SensorKind::PressurePolynomial
            | SensorKind::PressureTable
            | SensorKind::ThermistorTable
            | SensorKind::ThermistorBeta
            | SensorKind::ThermistorSteinhart => sensors::analog::read_resistive(record, board, self.calibration_type()),
            SensorKind::VoltageDivider => sensors::voltage::read_divider(record, board),
            SensorKind::VoltageDirect => sensors::voltage::read_direct(record, board),
            SensorKind::Max6675 => sensors::thermocouple::read_max6675(record, board),
            SensorKind::Max31855 => sensors::thermocouple::read_max31855(record, board),
            SensorKind::EnvironmentTemperature => sensors::environmental::read_temperature(board),
            SensorKind::EnvironmentPressure => sensors::environmental::read_pressure(board),
            SensorKind::EnvironmentHumidity => sensors::environmental::read_humidity(board),
            SensorKind::EnvironmentElevation => sensors::environmental::read_elevation(board),
            SensorKind::FloatSwitch => Ok(sensors::digital::read_float_switch(record, board)),
            SensorKind::WPhaseRpm | SensorKind::HallSpeed => sensors::frequency::read(record, board),
        }
    }
}

/// One physical sensor instance
#[derive(Debug, Clone)]
pub struct SensorRecord {
    /// ADC channel, GPIO pin, or chip-select line
    pub channel: u8,
    /// Short display label
    pub label: String<LABEL_CAPACITY>,
    /// Driver
    pub kind: SensorKind,
    /// Quantity and base unit of `value`
    pub measurement: MeasurementType,
    /// Calibration family the record is configured for
    pub calibration_type: CalibrationType,
    /// Switches
    pub flags: SensorFlags,
    /// Per-instance override, used when `flags.use_custom_calibration` is set
    pub custom: Option<Calibration>,
    /// Preset from the sensor library
    pub preset: Option<&'static Calibration>,
    /// Plausible value band; values outside it are discarded
    pub valid_range: Option<(f32, f32)>,
    /// Minimum time between reads (ms), 0 for the global default
    pub min_read_interval_ms: u32,
    value: f32,
    last_read_ms: Option<u32>,
    pulse: PulseConverter,
}

impl SensorRecord {
    /// Record for `kind` on `channel`, calibration family taken from the driver
    pub fn new(channel: u8, kind: SensorKind, measurement: MeasurementType) -> Self {
        Self {
            channel,
            label: String::new(),
            kind,
            measurement,
            calibration_type: kind.calibration_type(),
            flags: SensorFlags::default(),
            custom: None,
            preset: None,
            valid_range: None,
            min_read_interval_ms: 0,
            value: f32::NAN,
            last_read_ms: None,
            pulse: PulseConverter::new(),
        }
    }

    /// Set the display label, truncated to [`LABEL_CAPACITY`] bytes on a
    /// character boundary
    pub fn with_label(mut self, label: &str) -> Self {
        self.set_label(label);
        self
    }

    /// Borrow a preset from the sensor library
    pub fn with_preset(mut self, preset: &'static Calibration) -> Self {
        self.preset = Some(preset);
        self
    }

    /// Discard values outside `[min, max]`
    pub fn with_valid_range(mut self, min: f32, max: f32) -> Self {
        self.valid_range = Some((min, max));
        self
    }

    /// Minimum time between reads (ms)
    pub fn with_read_interval(mut self, interval_ms: u32) -> Self {
        self.min_read_interval_ms = interval_ms;
        self
    }

    /// Replace the display label
    pub fn set_label(&mut self, label: &str) {
        self.label.clear();
        for ch in label.chars() {
            if self.label.push(ch).is_err() {
                break;
            }
        }
    }

    /// Install a custom calibration and switch it on
    pub fn set_custom_calibration(&mut self, calibration: Calibration) {
        self.custom = Some(calibration);
        self.flags.use_custom_calibration = true;
    }

    /// Remove the custom calibration and fall back to preset / default
    pub fn clear_custom_calibration(&mut self) {
        self.custom = None;
        self.flags.use_custom_calibration = false;
    }

    /// Enable or disable acquisition
    pub fn set_enabled(&mut self, enabled: bool) {
        self.flags.enabled = enabled;
    }

    /// Latest value in base units; NaN if the last read failed
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Pulse converter state (Idle for non-pulse sensors)
    pub fn pulse_state(&self) -> PulseState {
        self.pulse.state()
    }

    pub(crate) fn pulse_converter_mut(&mut self) -> &mut PulseConverter {
        &mut self.pulse
    }

    /// Calibration tiers this record offers
    pub fn calibration_sources(&self) -> CalibrationSources<'_> {
        CalibrationSources {
            declared: self.calibration_type,
            use_custom: self.flags.use_custom_calibration,
            custom: self.custom.as_ref(),
            preset: self.preset,
        }
    }

    /// Resolve the calibration for one read of a `family` driver
    pub fn resolve_calibration(&self, family: CalibrationType) -> AcquisitionResult<ResolvedCalibration<'_>> {
        resolve(&self.calibration_sources(), family)
    }

    /// Reject values outside the validity band
    pub fn check_range(&self, value: f32) -> AcquisitionResult<f32> {
        match self.valid_range {
            Some((min, max)) if !(value >= min && value <= max) => Err(AcquisitionError::OutOfRange { value, min, max }),
            _ => Ok(value),
        }
    }

    /// Collapse a read result into the stored value: the reading, or NaN
    pub fn store(&mut self, result: AcquisitionResult<f32>) -> f32 {
        self.value = match result {
            Ok(value) => value,
            Err(err @ AcquisitionError::OutOfRange { .. }) => {
                log_warn!(target: "sensor", "{} on channel {}: {}", self.label.as_str(), self.channel, err);
                f32::NAN
            }
            Err(err) => {
                log_debug!(target: err.subsystem(), "{} on channel {}: {}", self.label.as_str(), self.channel, err);
                f32::NAN
            }
        };
        self.value
    }

    /// True if enabled and the read interval has passed since the last read
    pub fn due(&self, now_ms: u32) -> bool {
        if !self.flags.enabled {
            return false;
        }
        let interval = match self.min_read_interval_ms {
            0 => DEFAULT_READ_INTERVAL_MS,
            ms => ms,
        };
        match self.last_read_ms {
            None => true,
            Some(last) => now_ms.wrapping_sub(last) >= interval,
        }
    }

    /// Record that a read happened at `now_ms`
    pub fn mark_read(&mut self, now_ms: u32) {
        self.last_read_ms = Some(now_ms);
    }

    /// Run the driver's one-time setup
    pub fn init<B: Board + ?Sized>(&mut self, board: &mut B) -> AcquisitionResult<()> {
        let kind = self.kind;
        kind.init(self, board)
    }

    /// Read, range-check and store. Returns the stored value.
    ///
    /// Disabled records are left untouched.
    pub fn read<B: Board + ?Sized>(&mut self, board: &mut B) -> f32 {
        if !self.flags.enabled {
            return self.value;
        }

        let kind = self.kind;
        let result = kind.read(self, board);
        // Pulse drivers range-check against their own calibration bounds
        let result = if kind.is_pulse() {
            result
        } else {
            result.and_then(|value| self.check_range(value))
        };

        self.store(result)
    }

    /// [`read`](Self::read) if [`due`](Self::due), then mark the read
    pub fn poll<B: Board + ?Sized>(&mut self, board: &mut B, now_ms: u32) -> Option<f32> {
        if !self.due(now_ms) {
            return None;
        }
        let value = self.read(board);
        self.mark_read(now_ms);
        Some(value)
    }
}
