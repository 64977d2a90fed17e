//! Sensor drivers
//!
//! One module per hardware interface. Every driver takes the sensor record
//! and the board, and returns an [`AcquisitionResult`](crate::AcquisitionResult);
//! the record turns faults into `NaN`.
//!
//! | Module          | Interface        | Kinds                                  |
//! |-----------------|------------------|----------------------------------------|
//! | `analog`        | ADC              | linear, polynomial, tables, thermistors |
//! | `voltage`       | ADC              | divider, direct                        |
//! | `thermocouple`  | SPI              | MAX6675, MAX31855                      |
//! | `environmental` | I²C chip         | temperature, pressure, humidity, altitude |
//! | `digital`       | GPIO             | float switch                           |
//! | `frequency`     | edge interrupt   | W-phase RPM, hall speed                |

pub mod analog;
pub mod digital;
pub mod environmental;
pub mod frequency;
pub mod thermocouple;
pub mod voltage;
