//! Pulse-Timing Subsystem
//!
//! ## Overview
//!
//! Engine RPM (alternator W-phase) and vehicle speed (hall sender) are
//! measured from the time between rising edges. Two execution contexts
//! cooperate:
//!
//! ```text
//!  edge interrupt                         polling loop
//!  ──────────────                         ────────────
//!  PulseCapture::on_edge(now)             PulseCapture::observe(clock)
//!    debounce                               ┌ critical section ┐
//!    ┌ critical section ┐                   │ copy snapshot    │
//!    │ interval, count, │ ◄── shared ──►    │ read clock       │
//!    │ last edge        │                   └──────────────────┘
//!    └──────────────────┘                 PulseConverter::update(obs, cal)
//!                                           stall check, convert,
//!                                           range check, smoothing
//! ```
//!
//! The interrupt never computes engineering units and never logs; the loop
//! never writes the shared record. Every multi-field access happens inside
//! `critical_section::with`, so a read can never observe a half-updated
//! record.
//!
//! ## Debounce
//!
//! An edge closer than the channel's debounce window to the previous
//! accepted edge is dropped outright: no count, no interval, no timestamp.
//!
//! | Channel | Window | Accepted rate ceiling |
//! |---------|--------|-----------------------|
//! | RPM     | 100 µs | 10 kHz                |
//! | Speed   | 500 µs | 2 kHz                 |

mod capture;
mod converter;

pub use capture::{PulseCapture, PulseObservation, PulseSnapshot};
pub use converter::{smooth, PulseConverter, PulseState};

use crate::constants::pulse::{RPM_DEBOUNCE_US, SPEED_DEBOUNCE_US};

/// Pulse-measured quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PulseChannel {
    /// Engine speed
    Rpm,
    /// Vehicle speed
    Speed,
}

impl PulseChannel {
    /// Debounce window for this channel (µs)
    pub const fn debounce_us(self) -> u32 {
        match self {
            PulseChannel::Rpm => RPM_DEBOUNCE_US,
            PulseChannel::Speed => SPEED_DEBOUNCE_US,
        }
    }

    /// Process-wide capture for boards with one input per channel
    pub fn shared_capture(self) -> &'static PulseCapture {
        match self {
            PulseChannel::Rpm => &RPM_CAPTURE,
            PulseChannel::Speed => &SPEED_CAPTURE,
        }
    }
}

/// Capture for the RPM edge interrupt
pub static RPM_CAPTURE: PulseCapture = PulseCapture::new(RPM_DEBOUNCE_US);

/// Capture for the speed edge interrupt
pub static SPEED_CAPTURE: PulseCapture = PulseCapture::new(SPEED_DEBOUNCE_US);
