//! Generic aftermarket senders
//!
//! Three-wire 0.5–4.5 V sensors without a specific manufacturer part, and a
//! starting-point hall-effect speed sender. The speed values are typical,
//! not universal: tooth count, tyre and final drive need checking per car.

use autosense_core::calibration::{Calibration, LinearCalibration, SpeedCalibration};

/// 0.5–4.5 V → 0–5 bar (MAP / boost)
pub static GENERIC_BOOST: Calibration = Calibration::Linear(LinearCalibration::GENERIC_0_5_BAR);

/// 0.5–4.5 V → 0–150 psi (10.34 bar), oil and fuel pressure
pub static GENERIC_PRESSURE_150PSI: Calibration =
    Calibration::Linear(LinearCalibration::new(0.5, 4.5, 0.0, 10.34));

/// 0.5–4.5 V → −40–150 °C
pub static GENERIC_TEMP_LINEAR: Calibration = Calibration::Linear(LinearCalibration::new(0.5, 4.5, -40.0, 150.0));

/// 100 teeth, 2000 mm tyre (≈205/55R16), 3.73 final drive
pub static HALL_SPEED: Calibration = Calibration::Speed(SpeedCalibration::DEFAULT);
