//! Alternator W-phase RPM pickups

use autosense_core::calibration::{Calibration, RpmCalibration};

/// 12-pole alternator on a 3:1 pulley, the common automotive setup
pub static RPM_12P_3TO1: Calibration = Calibration::Rpm(RpmCalibration::DEFAULT);

/// 12-pole alternator on a 2:1 pulley (older vehicles, light trucks)
pub static RPM_12P_2TO1: Calibration = Calibration::Rpm(RpmCalibration {
    pulley_ratio: 2.0,
    ..RpmCalibration::DEFAULT
});
