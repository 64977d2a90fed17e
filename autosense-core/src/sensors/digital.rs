//! Digital level inputs (float switches)

use crate::{
    sensor::SensorRecord,
    traits::{Board, Pull},
};

/// Configure the pin with a pull-up; most float switches switch to ground
pub fn init<B: Board + ?Sized>(record: &mut SensorRecord, board: &mut B) {
    board.configure_input(record.channel, Pull::Up);
    log_info!(target: "sensor", "digital input on pin {} for {}", record.channel, record.label.as_str());
}

/// `1.0` when the pin is high, `0.0` when low; swapped for inverted records
pub fn read_float_switch<B: Board + ?Sized>(record: &SensorRecord, board: &mut B) -> f32 {
    let high = board.level(record.channel);
    if high != record.flags.inverted {
        1.0
    } else {
        0.0
    }
}
