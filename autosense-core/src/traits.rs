//! Hardware seam traits
//!
//! The engine never touches registers. Each capability it needs from the
//! board is one small trait; a board implements all of them and gets
//! [`Board`] for free. Capabilities a board does not have keep their default
//! method bodies, which report "unavailable" and make the affected sensors
//! read `NaN`.
//!
//! ```rust
//! use autosense_core::traits::*;
//!
//! struct Bench {
//!     code: u16,
//!     micros: u32,
//! }
//!
//! impl AnalogInput for Bench {
//!     fn convert(&mut self, _channel: u8) -> nb::Result<u16, AdcError> {
//!         Ok(self.code)
//!     }
//! }
//! impl DigitalInput for Bench {}
//! impl Clock for Bench {
//!     fn now_us(&self) -> u32 { self.micros }
//! }
//! impl SpiBus for Bench {}
//! impl EnvironmentalSensor for Bench {}
//! impl PulseInputs for Bench {}
//!
//! fn needs_board<B: Board>(_board: &mut B) {}
//! needs_board(&mut Bench { code: 512, micros: 0 });
//! ```

use crate::adc::AdcConfig;
use crate::pulse::{PulseCapture, PulseChannel};

/// ADC conversion failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdcError {
    /// Channel not routed to the converter on this board
    ChannelUnavailable,
    /// Converter reported an overrun or timeout
    Conversion,
}

/// Chip transport failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusError {
    /// Board has no such bus or chip
    Unavailable,
    /// Transfer started but did not complete
    Transfer,
}

/// Input pin bias for digital sensors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pull {
    /// High impedance
    None,
    /// Internal pull-up enabled
    Up,
}

/// One reading from an environmental chip, in chip-native units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentSample {
    /// Air temperature (°C)
    pub temperature_c: f32,
    /// Absolute pressure (Pa)
    pub pressure_pa: f32,
    /// Relative humidity (%)
    pub humidity_pct: f32,
}

/// Single-shot analog converter
pub trait AnalogInput {
    /// Start or poll one conversion on `channel`.
    ///
    /// Returns `WouldBlock` while the conversion is running.
    fn convert(&mut self, channel: u8) -> nb::Result<u16, AdcError>;

    /// Converter characteristics for code-to-voltage scaling
    fn adc_config(&self) -> AdcConfig {
        AdcConfig::default()
    }
}

/// Digital GPIO input
pub trait DigitalInput {
    /// Configure `pin` as an input with the given bias
    fn configure_input(&mut self, _pin: u8, _pull: Pull) {}

    /// Current logic level of `pin`
    fn level(&mut self, _pin: u8) -> bool {
        false
    }
}

/// Free-running microsecond counter
///
/// The counter is expected to wrap at `u32::MAX`; every consumer in this
/// crate compares instants with wrapping arithmetic.
pub trait Clock {
    /// Microseconds since an arbitrary epoch
    fn now_us(&self) -> u32;
}

/// Chip-select addressed SPI transport
pub trait SpiBus {
    /// Drive the chip-select line idle (high)
    fn release(&mut self, _cs: u8) {}

    /// Clock `buf.len()` bytes in from the chip on `cs`, MSB first
    fn transfer(&mut self, _cs: u8, _buf: &mut [u8]) -> Result<(), BusError> {
        Err(BusError::Unavailable)
    }
}

/// Combined temperature / pressure / humidity chip
pub trait EnvironmentalSensor {
    /// Probe and configure the chip. Returns `false` if nothing answered.
    fn init_environment(&mut self) -> bool {
        false
    }

    /// Latest sample, or `None` if the chip is absent
    fn environment(&mut self) -> Option<EnvironmentSample> {
        None
    }
}

/// Edge-triggered pulse inputs feeding [`PulseCapture`]s
pub trait PulseInputs {
    /// Route rising edges on `pin` to the capture for `channel`
    fn attach_pulse_interrupt(&mut self, _pin: u8, _channel: PulseChannel) -> Result<(), BusError> {
        Err(BusError::Unavailable)
    }

    /// Capture state shared with the edge interrupt for `channel`
    fn pulse_capture(&self, _channel: PulseChannel) -> Option<&PulseCapture> {
        None
    }
}

/// Everything a sensor read may ask of the hardware
pub trait Board: AnalogInput + DigitalInput + Clock + SpiBus + EnvironmentalSensor + PulseInputs {}

impl<T> Board for T where
    T: AnalogInput + DigitalInput + Clock + SpiBus + EnvironmentalSensor + PulseInputs
{
}
