//! Property tests: invariants of the stability pipeline that must hold for
//! any well-formed input.

use proptest::prelude::*;
use stability_core::calculations::areas::area_between;
use stability_core::calculations::{
    analyze, compute_gz_curve, compute_loading_summary, integrate_areas, interpolate,
    CriteriaResult,
};
use stability_core::config::AngleRange;
use stability_core::errors::IssueLog;
use stability_core::loading::{LoadingCase, LoadingItem, PassengerGroup, TankFilling, VehicleGroup};
use stability_core::sample::sample_vessel;

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

/// A strictly increasing axis with a value column of the same length.
fn arb_table() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    prop::collection::vec((0.1f64..10.0, -100.0f64..100.0), 2..12).prop_map(|rows| {
        let mut x = -5.0;
        rows.into_iter()
            .map(|(step, y)| {
                x += step;
                (x, y)
            })
            .unzip()
    })
}

fn arb_item() -> impl Strategy<Value = LoadingItem> {
    (0.0f64..2000.0, 0.0f64..100.0, -6.0f64..6.0, 0.5f64..12.0)
        .prop_map(|(w, lcg, tcg, vcg)| LoadingItem::new("Cargo", w, lcg, tcg, vcg))
}

fn arb_fillings() -> impl Strategy<Value = Vec<TankFilling>> {
    prop::collection::vec(
        (prop_oneof![Just("DB1P"), Just("DB1S"), Just("FO1"), Just("FW1")], 0.0f64..=100.0),
        0..4,
    )
    .prop_map(|fills| {
        fills
            .into_iter()
            .map(|(id, pct)| TankFilling::new(id, pct))
            .collect()
    })
}

fn arb_passengers() -> impl Strategy<Value = PassengerGroup> {
    (0u32..400, 60.0f64..120.0, 20.0f64..80.0, 8.0f64..14.0).prop_map(|(count, kg, lcg, vcg)| {
        PassengerGroup {
            area: "Passenger deck".to_string(),
            count,
            average_weight_kg: kg,
            lcg_m: lcg,
            tcg_m: 0.0,
            vcg_m: vcg,
        }
    })
}

fn arb_vehicles() -> impl Strategy<Value = VehicleGroup> {
    (0u32..20, 1.0f64..30.0, 20.0f64..80.0, -3.0f64..3.0).prop_map(|(count, t, lcg, tcg)| {
        VehicleGroup {
            deck: "Weather deck".to_string(),
            count,
            average_weight_t: t,
            lcg_m: lcg,
            tcg_m: tcg,
            vcg_m: 10.5,
        }
    })
}

fn arb_case() -> impl Strategy<Value = LoadingCase> {
    (
        prop::collection::vec(arb_item(), 0..6),
        arb_fillings(),
        prop::collection::vec(arb_passengers(), 0..3),
        prop::collection::vec(arb_vehicles(), 0..3),
    )
        .prop_map(|(items, tanks, passengers, vehicles)| LoadingCase {
            name: "Generated".to_string(),
            items,
            tanks,
            passengers,
            vehicles,
        })
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn interpolation_is_monotonic_between_knots(
        (axis, values) in arb_table(),
        segment in any::<prop::sample::Index>(),
        t1 in 0.0f64..=1.0,
        t2 in 0.0f64..=1.0,
    ) {
        let i = segment.index(axis.len() - 1);
        let (lo, hi) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
        let x_lo = axis[i] + lo * (axis[i + 1] - axis[i]);
        let x_hi = axis[i] + hi * (axis[i + 1] - axis[i]);

        let y_lo = interpolate(&axis, &values, x_lo).unwrap().value;
        let y_hi = interpolate(&axis, &values, x_hi).unwrap().value;

        if values[i + 1] >= values[i] {
            prop_assert!(y_hi >= y_lo - 1e-9);
        } else {
            prop_assert!(y_hi <= y_lo + 1e-9);
        }
    }

    #[test]
    fn interpolation_clamps_exactly(
        (axis, values) in arb_table(),
        below in 0.001f64..1000.0,
        above in 0.001f64..1000.0,
    ) {
        let low = interpolate(&axis, &values, axis[0] - below).unwrap();
        let high = interpolate(&axis, &values, axis[axis.len() - 1] + above).unwrap();
        prop_assert_eq!(low.value, values[0]);
        prop_assert_eq!(high.value, values[values.len() - 1]);
        prop_assert!(low.clamped.is_some());
        prop_assert!(high.clamped.is_some());
    }

    #[test]
    fn weight_is_conserved(case in arb_case()) {
        let vessel = sample_vessel();
        let mut issues = IssueLog::new();
        let summary = compute_loading_summary(&vessel, &case, &mut issues);

        let items: f64 = case.items.iter().map(|i| i.weight_t).sum();
        let tanks: f64 = case
            .tanks
            .iter()
            .map(|f| {
                let tank = vessel.tank(&f.id).unwrap();
                tank.capacity_m3 * f.fill_percent / 100.0 * tank.density_t_per_m3
            })
            .sum();
        let passengers: f64 = case
            .passengers
            .iter()
            .map(|g| f64::from(g.count) * g.average_weight_kg / 1000.0)
            .sum();
        let vehicles: f64 = case
            .vehicles
            .iter()
            .map(|g| f64::from(g.count) * g.average_weight_t)
            .sum();
        let expected = vessel.lightship.weight_t + items + tanks + passengers + vehicles;
        prop_assert!((summary.total_displacement_t - expected).abs() < 1e-9 * expected.max(1.0));
        prop_assert!((summary.passengers_weight_t - passengers).abs() < 1e-9 * passengers.max(1.0));
        prop_assert!((summary.vehicles_weight_t - vehicles).abs() < 1e-9 * vehicles.max(1.0));
    }

    #[test]
    fn gm_identity_holds(case in arb_case()) {
        let result = analyze(&sample_vessel(), &case, None).unwrap();
        let recomputed = result.draft_trim.kmt_m - result.kg_corrected_m;
        prop_assert_eq!(result.gm_m, recomputed);
    }

    #[test]
    fn threshold_equality_passes(threshold in -10.0f64..10.0) {
        prop_assert!(CriteriaResult::at_least("Boundary", threshold, threshold, true).passed);
    }

    #[test]
    fn displayed_gz_is_never_negative(draft in 3.0f64..11.0, kg in 0.0f64..15.0) {
        let vessel = sample_vessel();
        let mut issues = IssueLog::new();
        let range = AngleRange::default();
        let curve =
            compute_gz_curve(&vessel.hydrostatics.kn, draft, kg, 12000.0, &range, &mut issues);
        prop_assert!(curve.gz_m.iter().all(|gz| *gz >= 0.0));
        prop_assert_eq!(curve.gz_m.len(), curve.gz_signed_m.len());
    }

    #[test]
    fn areas_are_additive_for_linear_gz(slope in -0.05f64..0.05, intercept in -1.0f64..1.0) {
        let angles: Vec<f64> = (0..=90).map(f64::from).collect();
        let gz: Vec<f64> = angles.iter().map(|a| intercept + slope * a).collect();
        let table = integrate_areas(&gz, &angles, &[[0.0, 30.0], [0.0, 40.0], [30.0, 40.0]]);
        let whole = table.get(0.0, 40.0).unwrap();
        let parts = table.get(0.0, 30.0).unwrap() + table.get(30.0, 40.0).unwrap();
        prop_assert!((whole - parts).abs() < 1e-9);

        // Trapezoids are exact on a straight line
        let exact = (intercept * 40.0 + 0.5 * slope * 1600.0).to_radians();
        prop_assert!((area_between(&gz, &angles, 0.0, 40.0) - exact).abs() < 1e-9);
    }
}
