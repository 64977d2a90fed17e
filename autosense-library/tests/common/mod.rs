//! Common test utilities for registry integration tests

#![allow(dead_code)]

use autosense_core::{
    adc::{code_for_resistance, AdcConfig},
    constants::DEFAULT_BIAS_RESISTOR_OHMS,
    traits::{AdcError, AnalogInput, Clock, DigitalInput, EnvironmentalSensor, PulseInputs, SpiBus},
};

/// Board with one analog input and nothing else
pub struct AnalogBench {
    pub code: u16,
}

impl AnalogBench {
    /// Sender of `ohms` behind the default bias resistor
    pub fn resistance(ohms: f32) -> Self {
        Self {
            code: code_for_resistance(ohms, DEFAULT_BIAS_RESISTOR_OHMS, AdcConfig::default().full_scale),
        }
    }

    /// `volts` on the ADC pin
    pub fn voltage(volts: f32) -> Self {
        let config = AdcConfig::default();
        Self {
            code: (volts / config.reference_voltage * config.full_scale as f32).round() as u16,
        }
    }
}

impl AnalogInput for AnalogBench {
    fn convert(&mut self, _channel: u8) -> nb::Result<u16, AdcError> {
        Ok(self.code)
    }
}

impl DigitalInput for AnalogBench {}
impl Clock for AnalogBench {
    fn now_us(&self) -> u32 {
        0
    }
}
impl SpiBus for AnalogBench {}
impl EnvironmentalSensor for AnalogBench {}
impl PulseInputs for AnalogBench {}

/// Assert `actual` is within `tolerance` of `expected`
#[track_caller]
pub fn assert_close(actual: f32, expected: f32, tolerance: f32) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
