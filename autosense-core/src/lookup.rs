//! Bounded Table Interpolation
//!
//! ## Motivation
//!
//! Many automotive senders are specified only by a datasheet curve: a
//! handful of (resistance, value) points measured by the manufacturer. The
//! engine stores those points verbatim and interpolates between them instead
//! of fitting an equation that may misbehave between or beyond the points.
//!
//! ## Traversal Order
//!
//! Two physical conventions meet here:
//!
//! ```text
//! NTC thermistor            Resistive pressure sender
//! R (Ω)   T (°C)            R (Ω)   P (bar)
//! 1743     0                 10     0.0
//! 1364     5                 55     0.5
//!  ...    ...               ...     ...
//!   11   150                184     2.0
//! (x descending)            (x ascending)
//! ```
//!
//! The interpolator never guesses the order from the data. The caller states
//! it with [`Direction`]. A table with fewer than two points, or whose first
//! and last `x` are not strictly in that order, is reported as degenerate
//! before any lookup. [`validate_table`] checks every segment, and runs when
//! a custom table is installed.
//!
//! ## Algorithm
//!
//! 1. Reject tables with no segment or with endpoints against `direction`
//! 2. `x` beyond either end returns that end's `y` exactly (no extrapolation)
//! 3. Otherwise find the segment `[x0, x1]` containing `x`
//! 4. `y = y0 + (x − x0) / (x1 − x0) · (y1 − y0)`
//!
//! The result is clamped to the segment's `y` span, so rounding can never
//! push an interpolated value outside the table.
//!
//! ```rust
//! use autosense_core::lookup::{interpolate, Direction};
//!
//! let sender = [(10.0, 0.0), (55.0, 0.5), (100.0, 1.0)];
//! let p = interpolate(77.5, &sender, Direction::Ascending).unwrap();
//! assert!((p - 0.75).abs() < 1e-6);
//!
//! // Beyond the table: nearest endpoint, exactly
//! assert_eq!(interpolate(500.0, &sender, Direction::Ascending).unwrap(), 1.0);
//! ```

use crate::errors::{AcquisitionError, AcquisitionResult};

/// Sort order of a table's independent variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// `x` increases with index (pressure senders)
    Ascending,
    /// `x` decreases with index (NTC thermistors)
    Descending,
}

impl Direction {
    /// True if `a` comes before `b` in this order (or equals it)
    #[inline]
    fn ordered(self, a: f32, b: f32) -> bool {
        match self {
            Direction::Ascending => a <= b,
            Direction::Descending => a >= b,
        }
    }
}

/// Interpolate `x` in `table`, whose `x` column is sorted per `direction`.
///
/// # Errors
///
/// [`AcquisitionError::TableDegenerate`] if the table has fewer than two
/// points, if its endpoints are not strictly ordered per `direction`, if no
/// segment brackets `x` (unsorted interior, or `x` is NaN), or if the
/// bracketing segment has zero width.
pub fn interpolate(x: f32, table: &[(f32, f32)], direction: Direction) -> AcquisitionResult<f32> {
    let (&(first_x, first_y), &(last_x, last_y)) = match (table.first(), table.last()) {
        (Some(first), Some(last)) if table.len() >= 2 => (first, last),
        _ => return Err(AcquisitionError::TableDegenerate),
    };
    if first_x == last_x || !direction.ordered(first_x, last_x) {
        return Err(AcquisitionError::TableDegenerate);
    }

    // Clamp to endpoints
    if direction.ordered(x, first_x) {
        if x != first_x {
            log_debug!(target: "calibration", "lookup {} clamped to first point {}", x, first_x);
        }
        return Ok(first_y);
    }
    if direction.ordered(last_x, x) {
        if x != last_x {
            log_debug!(target: "calibration", "lookup {} clamped to last point {}", x, last_x);
        }
        return Ok(last_y);
    }

    for pair in table.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];

        if direction.ordered(x0, x) && direction.ordered(x, x1) {
            let span = x1 - x0;
            if span == 0.0 {
                return Err(AcquisitionError::TableDegenerate);
            }

            let y = y0 + (x - x0) / span * (y1 - y0);
            let (lo, hi) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
            return Ok(y.clamp(lo, hi));
        }
    }

    Err(AcquisitionError::TableDegenerate)
}

/// Check that `table` has at least two points and is strictly monotonic in
/// `direction`.
///
/// Run once when a custom table is installed, so a bad table is rejected at
/// configuration time rather than turning every read into `NaN`.
pub fn validate_table(table: &[(f32, f32)], direction: Direction) -> AcquisitionResult<()> {
    if table.len() < 2 {
        return Err(AcquisitionError::TableDegenerate);
    }

    let finite = table.iter().all(|&(x, y)| x.is_finite() && y.is_finite());
    let strictly_sorted = table.windows(2).all(|pair| {
        let (a, b) = (pair[0].0, pair[1].0);
        a != b && direction.ordered(a, b)
    });

    if finite && strictly_sorted {
        Ok(())
    } else {
        Err(AcquisitionError::TableDegenerate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THERMISTOR: [(f32, f32); 4] = [(1743.15, 0.0), (1364.07, 5.0), (1075.63, 10.0), (850.09, 15.0)];
    const SENDER: [(f32, f32); 3] = [(10.0, 0.0), (55.0, 0.5), (100.0, 1.0)];

    #[test]
    fn interpolates_inside_segment() {
        let t = interpolate(1553.61, &THERMISTOR, Direction::Descending).unwrap();
        assert!((t - 2.5).abs() < 0.01);

        let p = interpolate(32.5, &SENDER, Direction::Ascending).unwrap();
        assert!((p - 0.25).abs() < 1e-6);
    }

    #[test]
    fn exact_points_return_table_values() {
        assert_eq!(interpolate(55.0, &SENDER, Direction::Ascending).unwrap(), 0.5);
        assert_eq!(interpolate(1364.07, &THERMISTOR, Direction::Descending).unwrap(), 5.0);
    }

    #[test]
    fn clamps_beyond_both_ends() {
        assert_eq!(interpolate(5000.0, &THERMISTOR, Direction::Descending).unwrap(), 0.0);
        assert_eq!(interpolate(1.0, &THERMISTOR, Direction::Descending).unwrap(), 15.0);
        assert_eq!(interpolate(-3.0, &SENDER, Direction::Ascending).unwrap(), 0.0);
        assert_eq!(interpolate(1e6, &SENDER, Direction::Ascending).unwrap(), 1.0);
    }

    #[test]
    fn empty_table_is_degenerate() {
        assert_eq!(
            interpolate(1.0, &[], Direction::Ascending),
            Err(AcquisitionError::TableDegenerate)
        );
    }

    #[test]
    fn single_point_table_is_degenerate() {
        let table = [(100.0, 42.0)];
        assert_eq!(
            interpolate(1.0, &table, Direction::Ascending),
            Err(AcquisitionError::TableDegenerate)
        );
        assert_eq!(
            interpolate(100.0, &table, Direction::Descending),
            Err(AcquisitionError::TableDegenerate)
        );
        assert_eq!(validate_table(&table, Direction::Ascending), Err(AcquisitionError::TableDegenerate));
    }

    #[test]
    fn wrong_direction_is_degenerate() {
        // Inside, beyond and exactly at the ends: never an endpoint value
        for x in [32.5, -3.0, 10.0, 100.0, 1e6] {
            assert_eq!(
                interpolate(x, &SENDER, Direction::Descending),
                Err(AcquisitionError::TableDegenerate),
                "x = {x}"
            );
        }
        assert_eq!(
            interpolate(1553.61, &THERMISTOR, Direction::Ascending),
            Err(AcquisitionError::TableDegenerate)
        );
    }

    #[test]
    fn flat_endpoints_are_degenerate() {
        let table = [(50.0, 0.0), (80.0, 1.0), (50.0, 2.0)];
        assert_eq!(
            interpolate(60.0, &table, Direction::Ascending),
            Err(AcquisitionError::TableDegenerate)
        );
    }

    #[test]
    fn nan_input_is_degenerate() {
        assert_eq!(
            interpolate(f32::NAN, &SENDER, Direction::Ascending),
            Err(AcquisitionError::TableDegenerate)
        );
    }

    #[test]
    fn validation() {
        assert!(validate_table(&SENDER, Direction::Ascending).is_ok());
        assert!(validate_table(&THERMISTOR, Direction::Descending).is_ok());
        assert!(validate_table(&SENDER, Direction::Descending).is_err());
        assert!(validate_table(&[(1.0, 0.0), (1.0, 1.0)], Direction::Ascending).is_err());
        assert!(validate_table(&[], Direction::Ascending).is_err());
    }
}
