//! Registry lookup errors

use thiserror_no_std::Error;

/// Result type for registry lookups
pub type RegistryResult<T> = Result<T, RegistryError>;

/// A registry lookup that matched nothing
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// Index past the end of the registry
    #[error("No sensor at index {index}")]
    UnknownIndex {
        /// Requested index
        index: u8,
    },

    /// No sensor with this name hash
    #[error("No sensor with name hash {hash:#06X}")]
    UnknownSensor {
        /// djb2 hash of the requested name
        hash: u16,
    },

    /// No category with this name or alias
    #[error("No sensor category with name hash {hash:#06X}")]
    UnknownCategory {
        /// djb2 hash of the requested name
        hash: u16,
    },

    /// The `NONE` placeholder cannot be instantiated as a sensor
    #[error("Placeholder entry has no driver")]
    Placeholder,
}
