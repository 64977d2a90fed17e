//! Three-tier calibration resolution
//!
//! ```text
//!            ┌─────────────────────────┐
//!  read ───► │ custom, flag set, type  │── yes ──► Custom(&record.custom)
//!            │ matches?                │
//!            └───────────┬─────────────┘
//!                        no
//!            ┌───────────▼─────────────┐
//!            │ preset present, type    │── yes ──► Preset(&'static)
//!            │ matches?                │
//!            └───────────┬─────────────┘
//!                        no
//!            ┌───────────▼─────────────┐
//!            │ family has a default?   │── yes ──► Default(owned)
//!            └───────────┬─────────────┘
//!                        no
//!                        ▼
//!             Err(CalibrationUnavailable)
//! ```
//!
//! Exactly one tier supplies every parameter of a read; fields are never
//! mixed across tiers.

use core::ops::Deref;

use super::{
    BetaCalibration, Calibration, CalibrationType, LinearCalibration, RpmCalibration, SpeedCalibration,
    SteinhartCalibration, VoltageDividerCalibration,
};
use crate::errors::{AcquisitionError, AcquisitionResult};

/// Tier that supplied a resolved calibration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationSource {
    /// Per-instance override
    Custom,
    /// Firmware-resident preset
    Preset,
    /// Family hard default
    Default,
}

/// Everything a sensor record knows about its calibration
#[derive(Debug, Clone, Copy)]
pub struct CalibrationSources<'r> {
    /// Family the record is configured for
    pub declared: CalibrationType,
    /// Whether the custom override is switched on
    pub use_custom: bool,
    /// Custom override owned by the record
    pub custom: Option<&'r Calibration>,
    /// Preset borrowed from the sensor library
    pub preset: Option<&'static Calibration>,
}

/// A calibration borrowed from the record, borrowed from flash, or built
/// from the family default
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedCalibration<'r> {
    /// Borrowed from the sensor record
    Custom(&'r Calibration),
    /// Borrowed from the preset library
    Preset(&'static Calibration),
    /// Family hard default
    Default(Calibration),
}

impl ResolvedCalibration<'_> {
    /// Which tier this came from
    pub fn source(&self) -> CalibrationSource {
        match self {
            ResolvedCalibration::Custom(_) => CalibrationSource::Custom,
            ResolvedCalibration::Preset(_) => CalibrationSource::Preset,
            ResolvedCalibration::Default(_) => CalibrationSource::Default,
        }
    }
}

impl Deref for ResolvedCalibration<'_> {
    type Target = Calibration;

    fn deref(&self) -> &Calibration {
        match self {
            ResolvedCalibration::Custom(cal) => *cal,
            ResolvedCalibration::Preset(cal) => *cal,
            ResolvedCalibration::Default(cal) => cal,
        }
    }
}

/// Hard default for `family`.
///
/// Table and polynomial families have no safe numeric default and return
/// `CalibrationUnavailable`, as does `None`.
pub fn default_for(family: CalibrationType) -> AcquisitionResult<Calibration> {
    let cal = match family {
        CalibrationType::Linear => Calibration::Linear(LinearCalibration::GENERIC_0_5_BAR),
        CalibrationType::ThermistorBeta => Calibration::ThermistorBeta(BetaCalibration::DEFAULT),
        CalibrationType::ThermistorSteinhart => Calibration::ThermistorSteinhart(SteinhartCalibration::DEFAULT),
        CalibrationType::VoltageDivider => Calibration::VoltageDivider(VoltageDividerCalibration::DEFAULT),
        CalibrationType::Rpm => Calibration::Rpm(RpmCalibration::DEFAULT),
        CalibrationType::Speed => Calibration::Speed(SpeedCalibration::DEFAULT),
        CalibrationType::None
        | CalibrationType::PolynomialPressure
        | CalibrationType::TableThermistor
        | CalibrationType::TablePressure => {
            return Err(AcquisitionError::CalibrationUnavailable { family });
        }
    };
    Ok(cal)
}

/// Pick the calibration for one read of a `family` sensor.
pub fn resolve<'r>(sources: &CalibrationSources<'r>, family: CalibrationType) -> AcquisitionResult<ResolvedCalibration<'r>> {
    let declared_matches = sources.declared == family;
    let usable = |cal: &Calibration| declared_matches && cal.calibration_type() == family;

    if sources.use_custom {
        if let Some(custom) = sources.custom.filter(|cal| usable(*cal)) {
            return Ok(ResolvedCalibration::Custom(custom));
        }
    }

    if let Some(preset) = sources.preset.filter(|cal| usable(*cal)) {
        return Ok(ResolvedCalibration::Preset(preset));
    }

    let fallback = default_for(family)?;
    log_debug!(target: "calibration", "{} using hard default", family.name());
    Ok(ResolvedCalibration::Default(fallback))
}

#[cfg(test)]
mod tests {
    use super::*;

    static PRESET: Calibration = Calibration::ThermistorBeta(BetaCalibration::new(1000.0, 3435.0, 2252.0, 25.0));
    static PRESET_OTHER_FAMILY: Calibration = Calibration::Linear(LinearCalibration::GENERIC_0_5_BAR);

    fn sources<'r>(use_custom: bool, custom: Option<&'r Calibration>, preset: Option<&'static Calibration>) -> CalibrationSources<'r> {
        CalibrationSources {
            declared: CalibrationType::ThermistorBeta,
            use_custom,
            custom,
            preset,
        }
    }

    #[test]
    fn custom_wins_over_preset() {
        let custom = Calibration::ThermistorBeta(BetaCalibration::new(4700.0, 3950.0, 10_000.0, 25.0));
        let resolved = resolve(&sources(true, Some(&custom), Some(&PRESET)), CalibrationType::ThermistorBeta).unwrap();
        assert_eq!(resolved.source(), CalibrationSource::Custom);
        assert_eq!(&*resolved, &custom);
    }

    #[test]
    fn custom_ignored_when_flag_clear() {
        let custom = Calibration::ThermistorBeta(BetaCalibration::DEFAULT);
        let resolved = resolve(&sources(false, Some(&custom), Some(&PRESET)), CalibrationType::ThermistorBeta).unwrap();
        assert_eq!(resolved.source(), CalibrationSource::Preset);
    }

    #[test]
    fn mismatched_custom_falls_through() {
        let custom = Calibration::Linear(LinearCalibration::GENERIC_0_5_BAR);
        let resolved = resolve(&sources(true, Some(&custom), Some(&PRESET)), CalibrationType::ThermistorBeta).unwrap();
        assert_eq!(resolved.source(), CalibrationSource::Preset);
    }

    #[test]
    fn mismatched_preset_falls_to_default() {
        let resolved = resolve(&sources(false, None, Some(&PRESET_OTHER_FAMILY)), CalibrationType::ThermistorBeta).unwrap();
        assert_eq!(resolved.source(), CalibrationSource::Default);
        assert_eq!(&*resolved, &Calibration::ThermistorBeta(BetaCalibration::DEFAULT));
    }

    #[test]
    fn declared_type_must_match_family() {
        let mut s = sources(false, None, Some(&PRESET));
        s.declared = CalibrationType::Linear;
        let resolved = resolve(&s, CalibrationType::ThermistorBeta).unwrap();
        assert_eq!(resolved.source(), CalibrationSource::Default);
    }

    #[test]
    fn explicit_families_have_no_default() {
        for family in [
            CalibrationType::PolynomialPressure,
            CalibrationType::TableThermistor,
            CalibrationType::TablePressure,
            CalibrationType::None,
        ] {
            assert_eq!(default_for(family), Err(AcquisitionError::CalibrationUnavailable { family }));
        }
    }
}
