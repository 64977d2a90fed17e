//! K-type thermocouple amplifiers (MAX6675, MAX31855)
//!
//! Both chips are read-only SPI devices: pull CS low, clock out one frame,
//! release CS. Only frame decoding lives here; the transport is the board's.
//!
//! ```text
//! MAX6675 (16 bit)
//!  15 | 14 ............ 3 | 2    | 1  | 0
//!   0 | temp, 0.25 °C/LSB | open | id | tri
//!
//! MAX31855 (32 bit)
//!  31 ........... 18 | 17 | 16    | 15 ..... 4 | 3 | 2   | 1   | 0
//!  temp, signed 14b  | -  | fault | cold junct | - | SCV | SCG | OC
//! ```

use crate::{
    errors::{AcquisitionError, AcquisitionResult},
    sensor::SensorRecord,
    traits::Board,
};

const DEGREES_PER_LSB: f32 = 0.25;

/// Decode a MAX6675 frame to °C
pub fn decode_max6675(frame: u16) -> AcquisitionResult<f32> {
    if frame & 0x0004 != 0 {
        return Err(AcquisitionError::BusFault {
            reason: "thermocouple open",
        });
    }
    Ok((frame >> 3) as f32 * DEGREES_PER_LSB)
}

/// Decode a MAX31855 frame to °C (hot junction)
pub fn decode_max31855(frame: u32) -> AcquisitionResult<f32> {
    if frame & 0x0000_0007 != 0 {
        return Err(AcquisitionError::BusFault {
            reason: "thermocouple fault",
        });
    }
    // Arithmetic shift sign-extends the 14-bit field
    let raw = (frame as i32) >> 18;
    Ok(raw as f32 * DEGREES_PER_LSB)
}

fn transfer<B: Board + ?Sized>(board: &mut B, cs: u8, buf: &mut [u8]) -> AcquisitionResult<()> {
    board.transfer(cs, buf).map_err(|_| AcquisitionError::BusFault {
        reason: "thermocouple transfer failed",
    })
}

/// Park the chip-select line idle
pub fn init<B: Board + ?Sized>(record: &mut SensorRecord, board: &mut B) {
    board.release(record.channel);
    log_info!(target: "sensor", "thermocouple CS {} for {}", record.channel, record.label.as_str());
}

/// Read a MAX6675 on chip-select `record.channel`
pub fn read_max6675<B: Board + ?Sized>(record: &mut SensorRecord, board: &mut B) -> AcquisitionResult<f32> {
    let mut buf = [0u8; 2];
    transfer(board, record.channel, &mut buf)?;
    decode_max6675(u16::from_be_bytes(buf))
}

/// Read a MAX31855 on chip-select `record.channel`
pub fn read_max31855<B: Board + ?Sized>(record: &mut SensorRecord, board: &mut B) -> AcquisitionResult<f32> {
    let mut buf = [0u8; 4];
    transfer(board, record.channel, &mut buf)?;
    decode_max31855(u32::from_be_bytes(buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max6675_frames() {
        // 100 °C = 400 LSB
        assert_eq!(decode_max6675(400 << 3), Ok(100.0));
        assert!(decode_max6675((400 << 3) | 0x4).is_err());
    }

    #[test]
    fn max31855_positive_and_negative() {
        assert_eq!(decode_max31855(100 << 18), Ok(25.0));

        // -25 °C = -100 LSB in the top 14 bits
        let negative = ((-100i32) << 18) as u32;
        assert_eq!(decode_max31855(negative), Ok(-25.0));
    }

    #[test]
    fn max31855_fault_bits() {
        for bit in 0..3 {
            assert!(decode_max31855((100u32 << 18) | (1u32 << bit)).is_err());
        }
    }
}
