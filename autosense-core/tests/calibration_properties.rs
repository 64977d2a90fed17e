//! Property tests for the calibration algorithms
//!
//! - Interpolation never leaves the table's value span
//! - Ascending and descending tables give the same answer for reversed or
//!   mirrored data
//! - Linear calibrations invert
//! - The polynomial root satisfies the sender curve
//! - The divider inversion matches the forward model

#![cfg(test)]

use autosense_core::{
    adc::{code_for_resistance, voltage_divider_resistance},
    calibration::{BetaCalibration, LinearCalibration, PolynomialCalibration},
    lookup::{interpolate, Direction},
};
use proptest::prelude::*;

const VDO_120: [(f32, f32); 7] = [
    (1743.15, 0.0),
    (439.29, 30.0),
    (134.03, 60.0),
    (97.05, 70.0),
    (51.21, 90.0),
    (22.44, 120.0),
    (10.96, 150.0),
];

const VDO_5BAR: [(f32, f32); 5] = [(10.0, 0.0), (48.0, 1.0), (82.0, 2.0), (116.0, 3.0), (184.0, 5.0)];

proptest! {
    #[test]
    fn interpolation_stays_within_table(ohms in 0.1f32..5_000.0) {
        let t = interpolate(ohms, &VDO_120, Direction::Descending).unwrap();
        prop_assert!((0.0..=150.0).contains(&t));

        let p = interpolate(ohms, &VDO_5BAR, Direction::Ascending).unwrap();
        prop_assert!((0.0..=5.0).contains(&p));
    }

    #[test]
    fn interpolation_is_monotonic(a in 11.0f32..1_700.0, b in 11.0f32..1_700.0) {
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let t_lo = interpolate(lo, &VDO_120, Direction::Descending).unwrap();
        let t_hi = interpolate(hi, &VDO_120, Direction::Descending).unwrap();
        // Higher resistance, colder sender
        prop_assert!(t_hi <= t_lo + 1e-3);
    }

    #[test]
    fn reversed_table_agrees(ohms in 0.1f32..300.0) {
        let reversed: Vec<(f32, f32)> = VDO_5BAR.iter().rev().copied().collect();

        let up = interpolate(ohms, &VDO_5BAR, Direction::Ascending).unwrap();
        let down = interpolate(ohms, &reversed, Direction::Descending).unwrap();
        prop_assert!((up - down).abs() < 1e-4, "{up} vs {down}");
    }

    #[test]
    fn mirrored_tables_agree(ohms in 0.1f32..300.0) {
        // Negating x turns the ascending table into a descending one
        let mirrored: Vec<(f32, f32)> = VDO_5BAR.iter().map(|&(x, y)| (-x, y)).collect();

        let up = interpolate(ohms, &VDO_5BAR, Direction::Ascending).unwrap();
        let down = interpolate(-ohms, &mirrored, Direction::Descending).unwrap();
        prop_assert!((up - down).abs() < 1e-4, "{up} vs {down}");
    }

    #[test]
    fn linear_round_trips(
        voltage_min in 0.0f32..2.0,
        voltage_span in 0.5f32..3.0,
        output_min in -50.0f32..50.0,
        output_span in 0.5f32..200.0,
        falling in any::<bool>(),
        t in 0.0f32..=1.0,
    ) {
        let output_span = if falling { -output_span } else { output_span };
        let cal = LinearCalibration::new(
            voltage_min,
            voltage_min + voltage_span,
            output_min,
            output_min + output_span,
        );
        let v = voltage_min + t * voltage_span;

        let back = cal.invert(cal.apply(v).unwrap()).unwrap();
        prop_assert!((back - v).abs() < 1e-3, "{v} V -> {back} V");
    }

    #[test]
    fn polynomial_root_satisfies_curve(pressure in 0.0f32..5.0) {
        let cal = PolynomialCalibration::new(1000.0, -0.3682, 36.465, 10.648);
        let ohms = cal.resistance_at(pressure);
        let solved = cal.pressure_from_resistance(ohms).unwrap();
        prop_assert!((solved - pressure).abs() < 1e-3, "{pressure} -> {ohms} Ω -> {solved}");
    }

    #[test]
    fn divider_inversion_matches_forward_model(ohms in 20.0f32..20_000.0) {
        let code = code_for_resistance(ohms, 1000.0, 1023);
        prop_assume!(code > 3 && code < 1020);

        let measured = voltage_divider_resistance(code, 1000.0, 1023).unwrap();
        let recoded = code_for_resistance(measured, 1000.0, 1023);
        prop_assert_eq!(recoded, code);
    }

    #[test]
    fn beta_is_strictly_decreasing(r in 100.0f32..100_000.0) {
        let cal = BetaCalibration::DEFAULT;
        let t1 = cal.temperature_from_resistance(r).unwrap();
        let t2 = cal.temperature_from_resistance(r * 1.1).unwrap();
        prop_assert!(t2 < t1);
    }
}
