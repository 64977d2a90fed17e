//! Sensor library for AutoSense
//!
//! Firmware-resident data consumed by the acquisition engine:
//! - Preset calibrations for known sensor models, by manufacturer
//! - The append-only sensor registry, addressed by index or name hash
//! - Sensor categories for grouped selection
//!
//! Everything here is immutable `static` data; nothing allocates.
//!
//! ```rust
//! use autosense_library::{registry, SensorCategory};
//!
//! let tach = registry::by_name("W_PHASE_RPM").unwrap();
//! assert_eq!(tach.category(), SensorCategory::Frequency);
//! assert_eq!(SensorCategory::by_name("rpm"), Ok(SensorCategory::Frequency));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod category;
pub mod errors;
pub mod hash;
pub mod presets;
pub mod registry;

// Public API
pub use category::SensorCategory;
pub use errors::{RegistryError, RegistryResult};
pub use hash::name_hash;
pub use registry::{SensorDescriptor, SENSORS};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
