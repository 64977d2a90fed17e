//! ADC and Analog Front-End Constants
//!
//! The default profile is a 5 V AVR-class board with a 10-bit converter.
//! Enable the `adc-12bit` feature for 3.3 V boards with a 12-bit converter.

// ===== CONVERTER =====

/// Full-scale ADC code (highest code the converter can return).
#[cfg(not(feature = "adc-12bit"))]
pub const ADC_FULL_SCALE: u16 = 1023;

/// Full-scale ADC code (highest code the converter can return).
#[cfg(feature = "adc-12bit")]
pub const ADC_FULL_SCALE: u16 = 4095;

/// ADC reference voltage (V).
#[cfg(not(feature = "adc-12bit"))]
pub const AREF_VOLTAGE: f32 = 5.0;

/// ADC reference voltage (V).
#[cfg(feature = "adc-12bit")]
pub const AREF_VOLTAGE: f32 = 3.3;

/// Codes within this many counts of 0 or full scale are rail-pinned.
///
/// A reading this close to a rail means an open or shorted sender, not a
/// measurement.
pub const ADC_RAIL_MARGIN: u16 = 3;

/// Codes below this are treated as a disconnected voltage input.
///
/// Voltage inputs have no pull-up, so a floating pin reads near zero rather
/// than pinning to a rail.
pub const DISCONNECTED_THRESHOLD: u16 = 10;

// ===== ANALOG FRONT END =====

/// Bias (pull-up) resistor used with resistive senders (Ω).
///
/// VDO senders span roughly 10 Ω to 3.2 kΩ, so 1 kΩ keeps the divider
/// midpoint well inside the converter range.
pub const DEFAULT_BIAS_RESISTOR_OHMS: f32 = 1000.0;

/// Battery divider ratio `(r1 + r2) / r2` when nothing else is configured.
///
/// 100 kΩ over 10 kΩ gives 11:1, so a 5 V reference reads up to 55 V.
pub const VOLTAGE_DIVIDER_RATIO: f32 = 11.0;

/// Base resistor used to rebuild `r1`/`r2` from [`VOLTAGE_DIVIDER_RATIO`] (Ω).
pub const VOLTAGE_DIVIDER_BASE_OHMS: f32 = 1000.0;
