//! Table calibrations
//!
//! Preset tables live in flash as `&'static` slices. Custom tables are
//! copied into a fixed-capacity `heapless::Vec` owned by the sensor record,
//! so installing one never allocates.

use heapless::Vec;

use crate::{
    constants::adc::DEFAULT_BIAS_RESISTOR_OHMS,
    errors::{AcquisitionError, AcquisitionResult},
    lookup::{self, Direction},
};

/// Largest custom table a sensor record can own
pub const MAX_CUSTOM_TABLE_POINTS: usize = 40;

/// `(resistance Ω, value)` points, borrowed from flash or owned
#[derive(Debug, Clone, PartialEq)]
pub enum TableData {
    /// Firmware-resident preset table
    Static(&'static [(f32, f32)]),
    /// Per-sensor override
    Owned(Vec<(f32, f32), MAX_CUSTOM_TABLE_POINTS>),
}

impl TableData {
    /// The points, whichever way they are stored
    pub fn points(&self) -> &[(f32, f32)] {
        match self {
            TableData::Static(points) => *points,
            TableData::Owned(points) => points.as_slice(),
        }
    }
}

/// Resistance-to-value table behind a bias resistor
#[derive(Debug, Clone, PartialEq)]
pub struct TableCalibration {
    /// Pull-up resistor in front of the sender (Ω)
    pub bias_resistor: f32,
    /// Table points
    pub table: TableData,
}

impl TableCalibration {
    /// Wrap a flash-resident table
    pub const fn from_static(bias_resistor: f32, points: &'static [(f32, f32)]) -> Self {
        Self {
            bias_resistor,
            table: TableData::Static(points),
        }
    }

    /// Copy `points` into an owned table after checking it is sorted per
    /// `direction` and fits in [`MAX_CUSTOM_TABLE_POINTS`].
    pub fn owned(bias_resistor: Option<f32>, points: &[(f32, f32)], direction: Direction) -> AcquisitionResult<Self> {
        lookup::validate_table(points, direction)?;
        let owned = Vec::from_slice(points).map_err(|_| AcquisitionError::TableDegenerate)?;

        Ok(Self {
            bias_resistor: bias_resistor.unwrap_or(DEFAULT_BIAS_RESISTOR_OHMS),
            table: TableData::Owned(owned),
        })
    }

    /// Interpolate `ohms` in the table
    pub fn lookup(&self, ohms: f32, direction: Direction) -> AcquisitionResult<f32> {
        if !(ohms > 0.0) {
            return Err(AcquisitionError::NumericDomain {
                reason: "non-positive resistance",
            });
        }
        lookup::interpolate(ohms, self.table.points(), direction)
    }
}
