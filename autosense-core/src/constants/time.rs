//! Time-Related Constants

/// Microseconds per second.
pub const US_PER_SECOND: u32 = 1_000_000;

/// Microseconds per minute, as a float for RPM conversion.
pub const US_PER_MINUTE_F: f32 = 60_000_000.0;

/// Read interval used when a sensor declares none (ms).
pub const DEFAULT_READ_INTERVAL_MS: u32 = 100;
