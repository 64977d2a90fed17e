//! Environmental chip (BME280-class temperature / pressure / humidity)
//!
//! Four sensor records can share one chip; each reads its own field from the
//! board's latest [`EnvironmentSample`](crate::traits::EnvironmentSample).
//! Altitude comes from the standard-atmosphere barometric formula:
//!
//! ```text
//! h = T₀/L · (1 − (P/P₀)^(R·L / g·M))
//! ```

use crate::{
    constants::physics::{
        AIR_MOLAR_MASS_KG_PER_MOL, GAS_CONSTANT, GRAVITY_M_PER_S2, PA_PER_BAR, PA_PER_HPA, SEA_LEVEL_PRESSURE_HPA,
        SEA_LEVEL_TEMP_K, TEMP_LAPSE_K_PER_M,
    },
    errors::{AcquisitionError, AcquisitionResult},
    sensor::SensorRecord,
    traits::{Board, EnvironmentSample},
};

/// Altitude (m) for an absolute pressure against a sea-level reference
pub fn altitude_m(pressure_pa: f32, sea_level_hpa: f32) -> AcquisitionResult<f32> {
    let reference_pa = sea_level_hpa * PA_PER_HPA;
    if !(pressure_pa > 0.0) || !(reference_pa > 0.0) {
        return Err(AcquisitionError::NumericDomain {
            reason: "non-positive pressure",
        });
    }

    let exponent = GAS_CONSTANT * TEMP_LAPSE_K_PER_M / (GRAVITY_M_PER_S2 * AIR_MOLAR_MASS_KG_PER_MOL);
    let ratio = libm::powf(pressure_pa / reference_pa, exponent);
    Ok(SEA_LEVEL_TEMP_K / TEMP_LAPSE_K_PER_M * (1.0 - ratio))
}

fn sample<B: Board + ?Sized>(board: &mut B) -> AcquisitionResult<EnvironmentSample> {
    board.environment().ok_or(AcquisitionError::BusFault {
        reason: "environmental sensor not present",
    })
}

/// Probe the chip. A missing chip is logged and reported; its sensors then
/// read NaN.
pub fn init<B: Board + ?Sized>(record: &mut SensorRecord, board: &mut B) -> AcquisitionResult<()> {
    if board.init_environment() {
        log_info!(target: "sensor", "environmental sensor ready for {}", record.label.as_str());
        Ok(())
    } else {
        log_warn!(target: "sensor", "environmental sensor not found; {} will read NaN", record.label.as_str());
        Err(AcquisitionError::BusFault {
            reason: "environmental sensor not present",
        })
    }
}

/// Air temperature (°C)
pub fn read_temperature<B: Board + ?Sized>(board: &mut B) -> AcquisitionResult<f32> {
    Ok(sample(board)?.temperature_c)
}

/// Barometric pressure (bar)
pub fn read_pressure<B: Board + ?Sized>(board: &mut B) -> AcquisitionResult<f32> {
    Ok(sample(board)?.pressure_pa / PA_PER_BAR)
}

/// Relative humidity (%)
pub fn read_humidity<B: Board + ?Sized>(board: &mut B) -> AcquisitionResult<f32> {
    Ok(sample(board)?.humidity_pct)
}

/// Altitude (m) against the standard 1013.25 hPa sea level
pub fn read_elevation<B: Board + ?Sized>(board: &mut B) -> AcquisitionResult<f32> {
    altitude_m(sample(board)?.pressure_pa, SEA_LEVEL_PRESSURE_HPA)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sea_level_is_zero() {
        let h = altitude_m(101_325.0, SEA_LEVEL_PRESSURE_HPA).unwrap();
        assert!(h.abs() < 0.5);
    }

    #[test]
    fn standard_atmosphere_points() {
        // ISA: 89 875 Pa at 1000 m, 79 495 Pa at 2000 m
        let h1 = altitude_m(89_875.0, SEA_LEVEL_PRESSURE_HPA).unwrap();
        let h2 = altitude_m(79_495.0, SEA_LEVEL_PRESSURE_HPA).unwrap();
        assert!((h1 - 1000.0).abs() < 5.0, "got {h1}");
        assert!((h2 - 2000.0).abs() < 5.0, "got {h2}");
    }

    #[test]
    fn rejects_zero_pressure() {
        assert!(altitude_m(0.0, SEA_LEVEL_PRESSURE_HPA).is_err());
    }
}
