//! Polling-side pulse converter
//!
//! ```text
//!            first interval              no edge for timeout
//!   Idle ─────────────────────► Active ─────────────────────► Stalled
//!                                  ▲                              │
//!                                  └────────── next edge ─────────┘
//! ```
//!
//! Idle and Stalled both read `0.0`: a stopped engine or a parked vehicle is
//! a valid measurement. Once stalled, the converter stays stalled until the
//! edge counter moves, so a counter wrap can never revive a stale interval.

use super::capture::PulseObservation;
use crate::{calibration::PulseCalibration, errors::AcquisitionResult};

/// Converter state for one pulse sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PulseState {
    /// No interval measured yet
    #[default]
    Idle,
    /// Fresh interval available
    Active,
    /// No edge within the stall timeout
    Stalled,
}

/// Per-sensor converter state kept between reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PulseConverter {
    state: PulseState,
    stalled_at_count: u32,
}

impl PulseConverter {
    /// Converter in the `Idle` state
    pub const fn new() -> Self {
        Self {
            state: PulseState::Idle,
            stalled_at_count: 0,
        }
    }

    /// Current state
    pub fn state(&self) -> PulseState {
        self.state
    }

    /// Turn one observation into an engineering value.
    ///
    /// `previous` is the sensor's last stored value; a positive finite
    /// previous value is blended with the new reading using the family's
    /// smoothing weight, anything else is replaced outright.
    ///
    /// # Errors
    ///
    /// Whatever the calibration reports for the interval (range or domain
    /// faults). Stall and idle are `Ok(0.0)`.
    pub fn update<P>(&mut self, observation: PulseObservation, calibration: &P, previous: f32) -> AcquisitionResult<f32>
    where
        P: PulseCalibration + ?Sized,
    {
        let snapshot = observation.snapshot;

        let elapsed = match snapshot.elapsed_since_edge(observation.now_us) {
            Some(elapsed) => elapsed,
            None => {
                self.state = PulseState::Idle;
                return Ok(0.0);
            }
        };

        if self.state == PulseState::Stalled && snapshot.count == self.stalled_at_count {
            return Ok(0.0);
        }

        if elapsed > calibration.stall_timeout() {
            if self.state != PulseState::Stalled {
                log_debug!(target: "pulse", "stalled after {} us without an edge", elapsed.ticks());
            }
            self.state = PulseState::Stalled;
            self.stalled_at_count = snapshot.count;
            return Ok(0.0);
        }

        if snapshot.interval_us == 0 {
            self.state = PulseState::Idle;
            return Ok(0.0);
        }

        self.state = PulseState::Active;
        let raw = calibration.convert_interval(snapshot.interval_us)?;

        Ok(smooth(previous, raw, calibration.smoothing()))
    }
}

/// One-pole exponential filter: `previous·w + raw·(1 − w)`.
///
/// The raw value passes straight through when there is no usable previous
/// value (first sample, after a fault, after a stall).
pub fn smooth(previous: f32, raw: f32, weight_previous: f32) -> f32 {
    if previous.is_finite() && previous > 0.0 {
        previous * weight_previous + raw * (1.0 - weight_previous)
    } else {
        raw
    }
}
