//! NXP (Freescale) MPX integrated pressure sensors
//!
//! Both parts are ratiometric 5 V devices with on-chip signal conditioning;
//! the output spans 0.2–4.7 V over the rated absolute pressure range.

use autosense_core::calibration::{Calibration, LinearCalibration};

/// MPX4250AP: 20–250 kPa absolute
pub static MPX4250AP: Calibration = Calibration::Linear(LinearCalibration::new(0.2, 4.7, 0.2, 2.5));

/// MPX5700AP: 15–700 kPa absolute
pub static MPX5700AP: Calibration = Calibration::Linear(LinearCalibration::new(0.2, 4.7, 0.15, 7.0));
