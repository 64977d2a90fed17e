//! VDO senders
//!
//! Temperature senders 323 095 (120 °C) and 323 057 (150 °C), pressure
//! senders 360 043 (2 bar) and 360 003 (5 bar). All are resistive and read
//! behind the default 1 kΩ bias resistor.
//!
//! Tables are from the VDO datasheets; the Steinhart-Hart and polynomial
//! coefficients are least-squares fits to the same tables.

use autosense_core::{
    calibration::{Calibration, PolynomialCalibration, SteinhartCalibration, TableCalibration},
    constants::DEFAULT_BIAS_RESISTOR_OHMS,
};

// ===== TEMPERATURE TABLES =====

/// 323 095 resistance (Ω) vs temperature (°C), 5 °C steps, descending
/// resistance. Points above 120 °C are extrapolated.
pub static VDO_120C_POINTS: [(f32, f32); 31] = [
    (1743.15, 0.0),
    (1364.07, 5.0),
    (1075.63, 10.0),
    (850.09, 15.0),
    (676.95, 20.0),
    (543.54, 25.0),
    (439.29, 30.0),
    (356.64, 35.0),
    (291.46, 40.0),
    (239.56, 45.0),
    (197.29, 50.0),
    (161.46, 55.0),
    (134.03, 60.0),
    (113.96, 65.0),
    (97.05, 70.0),
    (82.36, 75.0),
    (70.12, 80.0),
    (59.73, 85.0),
    (51.21, 90.0),
    (44.32, 95.0),
    (38.47, 100.0),
    (33.4, 105.0),
    (29.12, 110.0),
    (25.53, 115.0),
    (22.44, 120.0),
    (19.75, 125.0),
    (17.44, 130.0),
    (15.46, 135.0),
    (13.75, 140.0),
    (12.26, 145.0),
    (10.96, 150.0),
];

/// 323 057 resistance (Ω) vs temperature (°C), 5 °C steps, descending
/// resistance.
pub static VDO_150C_POINTS: [(f32, f32); 37] = [
    (3240.18, 0.0),
    (2473.60, 5.0),
    (1905.87, 10.0),
    (1486.65, 15.0),
    (1168.64, 20.0),
    (926.71, 25.0),
    (739.98, 30.0),
    (594.90, 35.0),
    (481.53, 40.0),
    (392.57, 45.0),
    (322.17, 50.0),
    (266.19, 55.0),
    (221.17, 60.0),
    (184.72, 65.0),
    (155.29, 70.0),
    (131.38, 75.0),
    (112.08, 80.0),
    (96.40, 85.0),
    (82.96, 90.0),
    (71.44, 95.0),
    (61.92, 100.0),
    (54.01, 105.0),
    (47.24, 110.0),
    (41.42, 115.0),
    (36.51, 120.0),
    (32.38, 125.0),
    (28.81, 130.0),
    (25.70, 135.0),
    (23.0, 140.0),
    (20.66, 145.0),
    (18.59, 150.0),
    (16.74, 155.0),
    (15.11, 160.0),
    (13.66, 165.0),
    (12.38, 170.0),
    (11.25, 175.0),
    (10.24, 180.0),
];

// ===== PRESSURE TABLES =====

/// 360 043 resistance (Ω) vs pressure (bar), ascending
pub static VDO_2BAR_POINTS: [(f32, f32); 6] = [
    (10.0, 0.0),
    (55.0, 0.5),
    (100.0, 1.0),
    (144.0, 1.5),
    (168.0, 1.8),
    (184.0, 2.0),
];

/// 360 003 resistance (Ω) vs pressure (bar), ascending
pub static VDO_5BAR_POINTS: [(f32, f32); 5] = [(10.0, 0.0), (48.0, 1.0), (82.0, 2.0), (116.0, 3.0), (184.0, 5.0)];

// ===== CALIBRATIONS =====

/// 323 095 by table lookup
pub static VDO_120C_TABLE: Calibration =
    Calibration::TableThermistor(TableCalibration::from_static(DEFAULT_BIAS_RESISTOR_OHMS, &VDO_120C_POINTS));

/// 323 057 by table lookup
pub static VDO_150C_TABLE: Calibration =
    Calibration::TableThermistor(TableCalibration::from_static(DEFAULT_BIAS_RESISTOR_OHMS, &VDO_150C_POINTS));

/// 323 095 Steinhart-Hart fit, ±1 °C over 20–120 °C
pub static VDO_120C_STEINHART: Calibration = Calibration::ThermistorSteinhart(SteinhartCalibration::new(
    DEFAULT_BIAS_RESISTOR_OHMS,
    1.764445997570e-03,
    2.499534389889e-04,
    6.773335597401e-08,
));

/// 323 057 Steinhart-Hart fit, ±1 °C over 20–150 °C
pub static VDO_150C_STEINHART: Calibration = Calibration::ThermistorSteinhart(SteinhartCalibration::new(
    DEFAULT_BIAS_RESISTOR_OHMS,
    1.591623373219e-03,
    2.659356969556e-04,
    -1.610552525653e-07,
));

/// 360 043: `R = −3.1515·P² + 93.686·P + 9.6307`
pub static VDO_2BAR_CURVE: Calibration = Calibration::PolynomialPressure(PolynomialCalibration::new(
    DEFAULT_BIAS_RESISTOR_OHMS,
    -3.1515,
    93.686,
    9.6307,
));

/// 360 003: `R = −0.3682·P² + 36.465·P + 10.648`
pub static VDO_5BAR_CURVE: Calibration = Calibration::PolynomialPressure(PolynomialCalibration::new(
    DEFAULT_BIAS_RESISTOR_OHMS,
    -0.3682,
    36.465,
    10.648,
));

/// 360 043 by table lookup
pub static VDO_2BAR_TABLE: Calibration =
    Calibration::TablePressure(TableCalibration::from_static(DEFAULT_BIAS_RESISTOR_OHMS, &VDO_2BAR_POINTS));

/// 360 003 by table lookup
pub static VDO_5BAR_TABLE: Calibration =
    Calibration::TablePressure(TableCalibration::from_static(DEFAULT_BIAS_RESISTOR_OHMS, &VDO_5BAR_POINTS));

#[cfg(test)]
mod tests {
    use super::*;
    use autosense_core::lookup::{validate_table, Direction};

    #[test]
    fn tables_are_well_formed() {
        assert!(validate_table(&VDO_120C_POINTS, Direction::Descending).is_ok());
        assert!(validate_table(&VDO_150C_POINTS, Direction::Descending).is_ok());
        assert!(validate_table(&VDO_2BAR_POINTS, Direction::Ascending).is_ok());
        assert!(validate_table(&VDO_5BAR_POINTS, Direction::Ascending).is_ok());
    }

    #[test]
    fn steinhart_fits_track_tables() {
        for (table, fit) in [(&VDO_120C_TABLE, &VDO_120C_STEINHART), (&VDO_150C_TABLE, &VDO_150C_STEINHART)] {
            for ohms in [300.0f32, 120.0, 60.0] {
                let by_table = table.convert_resistance(ohms).unwrap();
                let by_fit = fit.convert_resistance(ohms).unwrap();
                assert!((by_table - by_fit).abs() < 2.0, "{ohms} Ω: {by_table} vs {by_fit}");
            }
        }
    }

    #[test]
    fn polynomial_and_table_agree() {
        for (curve, table) in [(&VDO_2BAR_CURVE, &VDO_2BAR_TABLE), (&VDO_5BAR_CURVE, &VDO_5BAR_TABLE)] {
            for ohms in [30.0f32, 80.0, 110.0] {
                let a = curve.convert_resistance(ohms).unwrap();
                let b = table.convert_resistance(ohms).unwrap();
                assert!((a - b).abs() < 0.15, "{ohms} Ω: {a} vs {b}");
            }
        }
    }
}
