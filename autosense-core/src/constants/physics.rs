//! Physical Constants
//!
//! Unit conversions and the standard-atmosphere values used for elevation.

/// Offset between Kelvin and Celsius.
pub const KELVIN_OFFSET: f32 = 273.15;

/// Standard sea-level pressure (hPa).
///
/// Source: ICAO standard atmosphere
pub const SEA_LEVEL_PRESSURE_HPA: f32 = 1013.25;

/// Pascals per bar.
pub const PA_PER_BAR: f32 = 100_000.0;

/// Pascals per hectopascal.
pub const PA_PER_HPA: f32 = 100.0;

/// Metres per second to kilometres per hour.
pub const MPS_TO_KPH: f32 = 3.6;

/// Millimetres per metre.
pub const MM_PER_M: f32 = 1000.0;

// ===== STANDARD ATMOSPHERE (TROPOSPHERE) =====

/// Temperature lapse rate (K/m).
pub const TEMP_LAPSE_K_PER_M: f32 = 0.0065;

/// Standard temperature at sea level (K).
pub const SEA_LEVEL_TEMP_K: f32 = 288.15;

/// Standard gravitational acceleration (m/s²).
pub const GRAVITY_M_PER_S2: f32 = 9.80665;

/// Molar mass of dry air (kg/mol).
pub const AIR_MOLAR_MASS_KG_PER_MOL: f32 = 0.0289644;

/// Universal gas constant (J/(mol·K)).
pub const GAS_CONSTANT: f32 = 8.31432;
