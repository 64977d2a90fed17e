//! Common test utilities for integration tests
//!
//! This module provides:
//! - A bench board implementing every hardware seam trait
//! - Helpers that turn sender resistances into the ADC codes they produce
//! - Tolerance assertions

#![allow(dead_code)]

use std::collections::HashMap;

use autosense_core::{
    adc::{code_for_resistance, AdcConfig},
    pulse::{PulseCapture, PulseChannel},
    traits::{
        AdcError, AnalogInput, BusError, Clock, DigitalInput, EnvironmentSample, EnvironmentalSensor, Pull,
        PulseInputs, SpiBus,
    },
};

/// Bias resistor every resistive fixture is wired behind
pub const BIAS_OHMS: f32 = 1000.0;

/// Bench board with scripted hardware
///
/// - ADC: one fixed code per channel, each conversion reports `WouldBlock`
///   once before completing
/// - SPI: one canned frame per chip-select
/// - Pulses: owned captures, fed by [`MockBoard::edge`]
pub struct MockBoard {
    pub config: AdcConfig,
    pub codes: HashMap<u8, u16>,
    pub conversions: u32,
    busy: bool,
    pub micros: u32,
    pub frames: HashMap<u8, Vec<u8>>,
    pub released: Vec<u8>,
    pub environment: Option<EnvironmentSample>,
    pub levels: HashMap<u8, bool>,
    pub pulls: HashMap<u8, Pull>,
    pub pulse_pins: Vec<(u8, PulseChannel)>,
    pub pulse_supported: bool,
    rpm: PulseCapture,
    speed: PulseCapture,
}

impl MockBoard {
    pub fn new() -> Self {
        Self {
            config: AdcConfig::default(),
            codes: HashMap::new(),
            conversions: 0,
            busy: false,
            micros: 0,
            frames: HashMap::new(),
            released: Vec::new(),
            environment: None,
            levels: HashMap::new(),
            pulls: HashMap::new(),
            pulse_pins: Vec::new(),
            pulse_supported: true,
            rpm: PulseCapture::new(PulseChannel::Rpm.debounce_us()),
            speed: PulseCapture::new(PulseChannel::Speed.debounce_us()),
        }
    }

    /// Present `code` on `channel`
    pub fn with_code(mut self, channel: u8, code: u16) -> Self {
        self.codes.insert(channel, code);
        self
    }

    /// Present the code a sender of `ohms` produces behind [`BIAS_OHMS`]
    pub fn with_resistance(self, channel: u8, ohms: f32) -> Self {
        let code = code_for_resistance(ohms, BIAS_OHMS, self.config.full_scale);
        self.with_code(channel, code)
    }

    /// Present `volts` on `channel`
    pub fn with_voltage(self, channel: u8, volts: f32) -> Self {
        let code = (volts / self.config.reference_voltage * self.config.full_scale as f32).round() as u16;
        self.with_code(channel, code)
    }

    /// Queue a SPI frame for chip-select `cs`
    pub fn with_frame(mut self, cs: u8, frame: &[u8]) -> Self {
        self.frames.insert(cs, frame.to_vec());
        self
    }

    /// Fit an environmental chip reporting `sample`
    pub fn with_environment(mut self, sample: EnvironmentSample) -> Self {
        self.environment = Some(sample);
        self
    }

    /// Drive `pin` to `level`
    pub fn with_level(mut self, pin: u8, level: bool) -> Self {
        self.levels.insert(pin, level);
        self
    }

    /// Deliver a rising edge on `channel` at `at_us`, as the edge interrupt would
    pub fn edge(&mut self, channel: PulseChannel, at_us: u32) {
        self.micros = at_us;
        self.capture(channel).on_edge(at_us);
    }

    /// Deliver edges `period_us` apart starting at `start_us`
    pub fn edge_train(&mut self, channel: PulseChannel, start_us: u32, period_us: u32, edges: u32) {
        for i in 0..edges {
            self.edge(channel, start_us.wrapping_add(i * period_us));
        }
    }

    pub fn capture(&self, channel: PulseChannel) -> &PulseCapture {
        match channel {
            PulseChannel::Rpm => &self.rpm,
            PulseChannel::Speed => &self.speed,
        }
    }
}

impl Default for MockBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalogInput for MockBoard {
    fn convert(&mut self, channel: u8) -> nb::Result<u16, AdcError> {
        let code = *self.codes.get(&channel).ok_or(nb::Error::Other(AdcError::ChannelUnavailable))?;
        if !self.busy {
            self.busy = true;
            return Err(nb::Error::WouldBlock);
        }
        self.busy = false;
        self.conversions += 1;
        Ok(code)
    }

    fn adc_config(&self) -> AdcConfig {
        self.config
    }
}

impl DigitalInput for MockBoard {
    fn configure_input(&mut self, pin: u8, pull: Pull) {
        self.pulls.insert(pin, pull);
    }

    fn level(&mut self, pin: u8) -> bool {
        self.levels.get(&pin).copied().unwrap_or(false)
    }
}

impl Clock for MockBoard {
    fn now_us(&self) -> u32 {
        self.micros
    }
}

impl SpiBus for MockBoard {
    fn release(&mut self, cs: u8) {
        self.released.push(cs);
    }

    fn transfer(&mut self, cs: u8, buf: &mut [u8]) -> Result<(), BusError> {
        let frame = self.frames.get(&cs).ok_or(BusError::Unavailable)?;
        if frame.len() != buf.len() {
            return Err(BusError::Transfer);
        }
        buf.copy_from_slice(frame);
        Ok(())
    }
}

impl EnvironmentalSensor for MockBoard {
    fn init_environment(&mut self) -> bool {
        self.environment.is_some()
    }

    fn environment(&mut self) -> Option<EnvironmentSample> {
        self.environment
    }
}

impl PulseInputs for MockBoard {
    fn attach_pulse_interrupt(&mut self, pin: u8, channel: PulseChannel) -> Result<(), BusError> {
        if !self.pulse_supported {
            return Err(BusError::Unavailable);
        }
        self.pulse_pins.push((pin, channel));
        Ok(())
    }

    fn pulse_capture(&self, channel: PulseChannel) -> Option<&PulseCapture> {
        if self.pulse_pins.iter().any(|(_, attached)| *attached == channel) {
            Some(self.capture(channel))
        } else {
            None
        }
    }
}

/// Assert `actual` is within `tolerance` of `expected`
#[track_caller]
pub fn assert_close(actual: f32, expected: f32, tolerance: f32) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
