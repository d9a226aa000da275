//! Worked scenarios with hand-checkable answers.

use stability_core::calculations::areas::{AreaEntry, AreaTable};
use stability_core::calculations::{
    analyze, check_criteria, compute_gz_curve, compute_loading_summary, integrate_areas,
    interpolate, wind_heeling,
};
use stability_core::config::{AngleRange, CriteriaConfig};
use stability_core::errors::IssueLog;
use stability_core::loading::{LoadingCase, TankFilling};
use stability_core::sample::sample_vessel;
use stability_core::vessel::{KnTable, TankGeometry};

#[test]
fn lightship_floats_at_interpolated_draft() {
    // Sample hull: 1000 t per 0.5 m from 4 m to 10 m
    let vessel = sample_vessel();
    let result = analyze(&vessel, &LoadingCase::new("Lightship"), None).unwrap();

    let h = &vessel.hydrostatics;
    let expected_draft = interpolate(&h.displacement_t, &h.draft_m, vessel.lightship.weight_t)
        .unwrap()
        .value;
    let expected_kmt = interpolate(&h.draft_m, &h.kmt_m, expected_draft).unwrap().value;

    assert!((result.draft_trim.mean_draft_m - expected_draft).abs() < 1e-12);
    assert_eq!(result.loading_summary.fsm_sum_tm, 0.0);
    assert!((result.gm_m - (expected_kmt - vessel.lightship.kg_m)).abs() < 1e-12);
    assert!(result.reliable);
}

#[test]
fn half_full_tank_weight_and_free_surface() {
    let mut vessel = sample_vessel();
    vessel.tanks = vec![TankGeometry {
        id: "WB1".to_string(),
        density_t_per_m3: 1.025,
        capacity_m3: 200.0,
        fsm_table: vec![[0.0, 0.0], [50.0, 120.0], [100.0, 0.0]],
        lcg_m: 45.0,
        tcg_m: 0.0,
        vcg_m: 1.0,
    }];
    let case = LoadingCase::new("Half tank").with_tank(TankFilling::new("WB1", 50.0));

    let mut issues = IssueLog::new();
    let summary = compute_loading_summary(&vessel, &case, &mut issues);

    assert!((summary.tanks_weight_t - 102.5).abs() < 1e-9);
    assert_eq!(summary.fsm_sum_tm, 120.0);
    assert!(issues.is_empty());
}

#[test]
fn sine_curve_area_matches_closed_form() {
    // KN = 1.2 sin φ with KG = 1.0 leaves GZ = 0.2 sin φ
    let kg = 1.0;
    let angles: Vec<f64> = (0..=90).map(f64::from).collect();
    let kn = angles.iter().map(|a| (0.2 + kg) * a.to_radians().sin()).collect();
    let table = KnTable::new(angles).with_curve(6.0, kn);

    let mut issues = IssueLog::new();
    let curve = compute_gz_curve(&table, 6.0, kg, 12000.0, &AngleRange::default(), &mut issues);
    let areas = integrate_areas(&curve.gz_signed_m, &curve.angles_deg, &[[0.0, 30.0]]);

    let exact = 0.2 * (1.0 - 30f64.to_radians().cos());
    let area = areas.get(0.0, 30.0).unwrap();
    // Trapezoid error for 1° steps is a few parts in 10⁶
    assert!((area - exact).abs() < 1e-5, "area {} vs {}", area, exact);
    assert!(issues.is_empty());
}

#[test]
fn area_exactly_at_threshold_passes() {
    let vessel = sample_vessel();
    let mut issues = IssueLog::new();
    let range = AngleRange::default();
    let curve =
        compute_gz_curve(&vessel.hydrostatics.kn, 7.0, 6.6, 14000.0, &range, &mut issues);
    let areas = AreaTable {
        entries: vec![AreaEntry {
            start_deg: 0.0,
            end_deg: 30.0,
            integrated_to_deg: 30.0,
            area_mrad: 0.055,
        }],
    };

    let criteria = check_criteria(&CriteriaConfig::default(), 1.0, &curve, &areas);
    let check = criteria.compliance.iter().find(|c| c.name == "Area 0-30°").unwrap();
    assert_eq!(check.value, 0.055);
    assert!(check.passed);
}

#[test]
fn zero_wind_leaves_gm_untouched() {
    let gm = 0.734;
    let wind = wind_heeling(0.0, 1100.0, 6.5, 14217.0, gm).unwrap();
    assert_eq!(wind.heel_angle_deg, 0.0);
    assert_eq!(wind.stability_margin_m, gm);
}
