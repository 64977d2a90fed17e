//! Constants for AutoSense Core
//!
//! Every numeric value the engine depends on is defined here, with its unit
//! in the name and a note on where it comes from. Platform-dependent values
//! (ADC width, reference voltage) are selected by Cargo feature.
//!
//! ## Organization
//!
//! - **ADC**: converter width, reference voltage, rail margin, bias resistor
//! - **Physics**: unit conversions and atmosphere model constants
//! - **Pulse**: debounce windows, smoothing weights, pulse-sensor defaults
//! - **Time**: unit conversions and scheduling intervals

/// ADC converter characteristics and analog front-end defaults.
pub mod adc;

/// Physical constants and unit conversions.
pub mod physics;

/// Pulse-timing (RPM / speed) constants.
pub mod pulse;

/// Time-related constants for scheduling and timeouts.
pub mod time;

pub use adc::{
    ADC_FULL_SCALE, ADC_RAIL_MARGIN, AREF_VOLTAGE, DEFAULT_BIAS_RESISTOR_OHMS,
    DISCONNECTED_THRESHOLD, VOLTAGE_DIVIDER_RATIO,
};

pub use physics::{KELVIN_OFFSET, SEA_LEVEL_PRESSURE_HPA};

pub use pulse::{RPM_DEBOUNCE_US, SPEED_DEBOUNCE_US};

pub use time::{DEFAULT_READ_INTERVAL_MS, US_PER_SECOND};
