//! AEM Electronics 30-series stainless pressure sensors

use autosense_core::calibration::{Calibration, LinearCalibration};

/// 30-2130-150: 150 psig, 0.5–4.5 V → 0–10.34 bar (`psi = 37.5·V − 18.75`).
/// 5 V sensor; 3.3 V boards need an input divider.
pub static AEM_30_2130_150: Calibration = Calibration::Linear(LinearCalibration::new(0.5, 4.5, 0.0, 10.34));
