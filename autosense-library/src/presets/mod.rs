//! Preset calibrations
//!
//! Firmware-resident parameter sets for known sensor models, grouped by
//! manufacturer. Every preset is a `static` [`Calibration`](autosense_core::Calibration),
//! so sensor records borrow them for the life of the program.
//!
//! | Module    | Parts                                              |
//! |-----------|----------------------------------------------------|
//! | `vdo`     | 323 095, 323 057 temperature; 360 043, 360 003 pressure |
//! | `aem`     | 30-2130-150                                        |
//! | `nxp`     | MPX4250AP, MPX5700AP                               |
//! | `generic` | 0.5–4.5 V pressure / temperature, hall speed       |
//! | `system`  | W-phase RPM pulley ratios                          |

pub mod aem;
pub mod generic;
pub mod nxp;
pub mod system;
pub mod vdo;
