//! Interrupt-side pulse capture

use core::cell::Cell;

use critical_section::Mutex;
use fugit::MicrosDurationU32;

use crate::traits::Clock;

/// Consistent copy of one capture's shared state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PulseSnapshot {
    /// Timestamp of the last accepted edge (µs), `None` before the first edge
    pub last_edge_us: Option<u32>,
    /// Interval between the last two accepted edges (µs), 0 until known
    pub interval_us: u32,
    /// Accepted edges since reset (wrapping)
    pub count: u32,
}

impl PulseSnapshot {
    const EMPTY: Self = Self {
        last_edge_us: None,
        interval_us: 0,
        count: 0,
    };

    /// Last interval as a typed duration
    pub fn interval(&self) -> MicrosDurationU32 {
        MicrosDurationU32::from_ticks(self.interval_us)
    }

    /// Time since the last accepted edge, `None` before the first edge.
    ///
    /// The counter wraps every ~71.6 minutes; the subtraction wraps with it.
    pub fn elapsed_since_edge(&self, now_us: u32) -> Option<MicrosDurationU32> {
        self.last_edge_us
            .map(|last| MicrosDurationU32::from_ticks(now_us.wrapping_sub(last)))
    }
}

/// Snapshot plus the clock reading taken in the same critical section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseObservation {
    /// Capture state at `now_us`
    pub snapshot: PulseSnapshot,
    /// Clock reading (µs)
    pub now_us: u32,
}

/// Shared state between one edge interrupt and the polling loop.
///
/// The interrupt calls [`on_edge`](Self::on_edge); the loop calls
/// [`observe`](Self::observe). Both go through a critical section, so the
/// loop never sees a half-written record.
///
/// ```rust
/// use autosense_core::pulse::PulseCapture;
///
/// static CAPTURE: PulseCapture = PulseCapture::new(100);
///
/// CAPTURE.on_edge(1_000);
/// CAPTURE.on_edge(1_050); // bounce, ignored
/// CAPTURE.on_edge(3_000);
///
/// let snap = CAPTURE.snapshot();
/// assert_eq!(snap.count, 2);
/// assert_eq!(snap.interval_us, 2_000);
/// ```
pub struct PulseCapture {
    debounce_us: u32,
    state: Mutex<Cell<PulseSnapshot>>,
}

impl PulseCapture {
    /// Capture that ignores intervals of `debounce_us` or less
    pub const fn new(debounce_us: u32) -> Self {
        Self {
            debounce_us,
            state: Mutex::new(Cell::new(PulseSnapshot::EMPTY)),
        }
    }

    /// Minimum accepted interval (µs)
    pub fn debounce_us(&self) -> u32 {
        self.debounce_us
    }

    /// Record a qualifying edge at `now_us`. Call from the edge interrupt.
    ///
    /// Bounded time, no allocation, no logging.
    pub fn on_edge(&self, now_us: u32) {
        critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let mut state = cell.get();

            match state.last_edge_us {
                None => {
                    state.last_edge_us = Some(now_us);
                    state.count = state.count.wrapping_add(1);
                }
                Some(last) => {
                    let interval = now_us.wrapping_sub(last);
                    if interval <= self.debounce_us {
                        return;
                    }
                    state.interval_us = interval;
                    state.last_edge_us = Some(now_us);
                    state.count = state.count.wrapping_add(1);
                }
            }

            cell.set(state);
        });
    }

    /// Consistent copy of the shared state
    pub fn snapshot(&self) -> PulseSnapshot {
        critical_section::with(|cs| self.state.borrow(cs).get())
    }

    /// Snapshot and clock reading taken together, so an edge cannot land
    /// between them and make the elapsed time negative.
    pub fn observe<C: Clock + ?Sized>(&self, clock: &C) -> PulseObservation {
        critical_section::with(|cs| PulseObservation {
            snapshot: self.state.borrow(cs).get(),
            now_us: clock.now_us(),
        })
    }

    /// Forget all edges (sensor re-init)
    pub fn reset(&self) {
        critical_section::with(|cs| self.state.borrow(cs).set(PulseSnapshot::EMPTY));
    }
}

impl core::fmt::Debug for PulseCapture {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PulseCapture")
            .field("debounce_us", &self.debounce_us)
            .field("state", &self.snapshot())
            .finish()
    }
}
