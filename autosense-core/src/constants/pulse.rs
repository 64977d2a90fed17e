//! Pulse-Timing Constants
//!
//! Debounce windows are picked from the fastest pulse rate each sensor can
//! physically produce; anything quicker is electrical noise.

// ===== DEBOUNCE =====

/// Minimum accepted interval between RPM edges (µs).
///
/// 100 µs is 10 kHz, far beyond any alternator W-phase signal at redline.
pub const RPM_DEBOUNCE_US: u32 = 100;

/// Minimum accepted interval between speed edges (µs).
///
/// Caps the accepted rate at 2 kHz. Hall sensors on long harness runs pick
/// up ignition noise well above that.
pub const SPEED_DEBOUNCE_US: u32 = 500;

// ===== SMOOTHING =====

/// Weight of the previous RPM value in the one-pole filter.
pub const RPM_SMOOTHING_PREVIOUS: f32 = 0.8;

/// Weight of the previous speed value in the one-pole filter.
pub const SPEED_SMOOTHING_PREVIOUS: f32 = 0.7;

// ===== RPM DEFAULTS =====

/// Alternator pole count (most common automotive alternator).
pub const DEFAULT_ALTERNATOR_POLES: u8 = 12;

/// Alternator-to-crank pulley ratio (typical range 2.5 to 3.5).
pub const DEFAULT_PULLEY_RATIO: f32 = 3.0;

/// Silence after which the engine is considered stopped (ms).
pub const DEFAULT_PULSE_TIMEOUT_MS: u16 = 2000;

/// Lowest plausible engine speed (RPM).
pub const DEFAULT_MIN_RPM: u16 = 100;

/// Highest plausible engine speed (RPM).
pub const DEFAULT_MAX_RPM: u16 = 10_000;

// ===== SPEED DEFAULTS =====

/// Pulses per revolution of the sensed shaft (typical tone-wheel tooth count).
pub const DEFAULT_PULSES_PER_REV: u8 = 100;

/// Rolling circumference of a 205/55R16 tire (mm).
pub const DEFAULT_TIRE_CIRCUMFERENCE_MM: u16 = 2000;

/// Final drive ratio between the sensed shaft and the wheels.
pub const DEFAULT_FINAL_DRIVE_RATIO: f32 = 3.73;

/// Highest plausible vehicle speed (km/h).
pub const DEFAULT_MAX_SPEED_KPH: u16 = 300;
