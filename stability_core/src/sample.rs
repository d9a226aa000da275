//! # Sample Data
//!
//! A small general cargo vessel and a handful of loading conditions. Used by
//! the CLI `sample` command as a template book and by the test suites.

use crate::damage::CompartmentData;
use crate::loading::{LoadingCase, LoadingItem, PassengerGroup, TankFilling};
use crate::vessel::{
    HydrostaticTables, KnTable, LightshipData, TankGeometry, VesselData, WindageData,
};

/// Draft axis of the sample hydrostatic table: 4.0 m to 10.0 m in 0.5 m steps
fn draft_axis() -> Vec<f64> {
    (0..13).map(|i| 4.0 + 0.5 * f64::from(i)).collect()
}

/// Heel axis of the sample cross curves: 0° to 90° in 10° steps
fn heel_axis() -> Vec<f64> {
    (0..10).map(|i| 10.0 * f64::from(i)).collect()
}

/// Sample 100 m general cargo vessel.
///
/// Displacement grows 1000 t per 0.5 m of draft, so TPC is a constant 20 t/cm.
pub fn sample_vessel() -> VesselData {
    let drafts = draft_axis();
    let displacement_t = drafts.iter().map(|t| 2000.0 * t).collect();
    let lcb_m = drafts.iter().map(|t| 51.2 - 0.12 * (t - 4.0)).collect();
    let lcf_m = drafts.iter().map(|t| 49.0 - 0.3 * (t - 4.0)).collect();
    let tpc_t_per_cm = vec![20.0; drafts.len()];
    let mtc_tm_per_cm = drafts.iter().map(|t| 170.0 + 6.0 * (t - 4.0)).collect();

    let kb_m = vec![
        2.12, 2.385, 2.65, 2.915, 3.18, 3.445, 3.71, 3.975, 4.24, 4.505, 4.77, 5.035, 5.3,
    ];
    let kmt_m = vec![
        8.4, 8.185, 7.99, 7.815, 7.66, 7.525, 7.41, 7.315, 7.24, 7.185, 7.15, 7.135, 7.14,
    ];
    let bmt_m = kmt_m.iter().zip(&kb_m).map(|(km, kb)| km - kb).collect();

    let kn = KnTable::new(heel_axis())
        .with_curve(5.0, vec![0.0, 1.44, 2.921, 4.353, 5.639, 6.687, 7.432, 7.844, 7.933, 7.74])
        .with_curve(6.0, vec![0.0, 1.382, 2.808, 4.188, 5.427, 6.434, 7.146, 7.534, 7.608, 7.41])
        .with_curve(7.0, vec![0.0, 1.339, 2.722, 4.063, 5.266, 6.243, 6.93, 7.299, 7.362, 7.16])
        .with_curve(8.0, vec![0.0, 1.309, 2.664, 3.978, 5.157, 6.113, 6.783, 7.14, 7.194, 6.99]);

    let ballast_fsm = vec![[0.0, 0.0], [10.0, 300.0], [50.0, 320.0], [90.0, 300.0], [100.0, 0.0]];

    VesselData {
        name: "MV Sample Trader".to_string(),
        lpp_m: 100.0,
        breadth_m: 16.0,
        depth_m: 9.0,
        lightship: LightshipData::new(8600.0, 7.4, 52.0, 0.0),
        hydrostatics: HydrostaticTables {
            draft_m: drafts,
            displacement_t,
            kb_m,
            kmt_m,
            bmt_m: Some(bmt_m),
            lcb_m: Some(lcb_m),
            lcf_m: Some(lcf_m),
            tpc_t_per_cm: Some(tpc_t_per_cm),
            mtc_tm_per_cm: Some(mtc_tm_per_cm),
            kn,
        },
        tanks: vec![
            TankGeometry {
                id: "DB1P".to_string(),
                density_t_per_m3: 1.025,
                capacity_m3: 400.0,
                fsm_table: ballast_fsm.clone(),
                lcg_m: 50.0,
                tcg_m: -4.0,
                vcg_m: 0.8,
            },
            TankGeometry {
                id: "DB1S".to_string(),
                density_t_per_m3: 1.025,
                capacity_m3: 400.0,
                fsm_table: ballast_fsm,
                lcg_m: 50.0,
                tcg_m: 4.0,
                vcg_m: 0.8,
            },
            TankGeometry {
                id: "FO1".to_string(),
                density_t_per_m3: 0.95,
                capacity_m3: 300.0,
                fsm_table: vec![[0.0, 0.0], [50.0, 180.0], [100.0, 0.0]],
                lcg_m: 85.0,
                tcg_m: 0.0,
                vcg_m: 1.2,
            },
            TankGeometry {
                id: "FW1".to_string(),
                density_t_per_m3: 1.0,
                capacity_m3: 150.0,
                fsm_table: vec![[0.0, 0.0], [50.0, 60.0], [100.0, 0.0]],
                lcg_m: 95.0,
                tcg_m: 0.0,
                vcg_m: 8.0,
            },
        ],
        downflooding_angle_deg: 45.0,
        windage: Some(WindageData {
            lateral_area_m2: 1100.0,
            center_height_m: 6.5,
        }),
        compartments: vec![
            CompartmentData {
                id: "HOLD1".to_string(),
                volume_m3: 3200.0,
                permeability: 0.7,
                lcg_m: 25.0,
                tcg_m: 0.0,
                vcg_m: 5.0,
            },
            CompartmentData {
                id: "HOLD2".to_string(),
                volume_m3: 3600.0,
                permeability: 0.7,
                lcg_m: 48.0,
                tcg_m: 0.0,
                vcg_m: 5.0,
            },
        ],
    }
}

fn general_cargo() -> LoadingCase {
    LoadingCase::new("")
        .with_item(LoadingItem::new("Hold 1 general cargo", 1500.0, 25.0, 0.0, 6.5))
        .with_item(LoadingItem::new("Hold 2 general cargo", 1700.0, 48.0, 0.0, 6.8))
        .with_item(LoadingItem::new("Hold 3 general cargo", 1100.0, 72.0, 0.0, 7.0))
        .with_item(LoadingItem::new("Stores and crew", 150.0, 90.0, 0.0, 9.0))
}

/// Full departure condition
pub fn departure_case() -> LoadingCase {
    LoadingCase {
        name: "Departure".to_string(),
        ..general_cargo()
    }
    .with_tank(TankFilling::new("DB1P", 100.0))
    .with_tank(TankFilling::new("DB1S", 100.0))
    .with_tank(TankFilling::new("FO1", 85.0))
    .with_tank(TankFilling::new("FW1", 70.0))
}

/// Arrival condition with slack consumables and a slack ballast tank
pub fn arrival_case() -> LoadingCase {
    LoadingCase {
        name: "Arrival".to_string(),
        ..general_cargo()
    }
    .with_tank(TankFilling::new("DB1P", 100.0))
    .with_tank(TankFilling::new("DB1S", 60.0))
    .with_tank(TankFilling::new("FO1", 20.0))
    .with_tank(TankFilling::new("FW1", 30.0))
    .with_passengers(PassengerGroup {
        area: "Accommodation".to_string(),
        count: 12,
        average_weight_kg: 90.0,
        lcg_m: 92.0,
        tcg_m: 0.0,
        vcg_m: 14.0,
    })
}

/// Ballast passage without cargo
pub fn ballast_case() -> LoadingCase {
    LoadingCase::new("Ballast")
        .with_tank(TankFilling::new("DB1P", 100.0))
        .with_tank(TankFilling::new("DB1S", 100.0))
        .with_tank(TankFilling::new("FO1", 40.0))
        .with_tank(TankFilling::new("FW1", 50.0))
}

/// Cargo stowed high on deck: negative GM
pub fn deck_cargo_case() -> LoadingCase {
    LoadingCase::new("Deck cargo")
        .with_item(LoadingItem::new("Hold 1 deck stow", 1500.0, 25.0, 0.0, 10.5))
        .with_item(LoadingItem::new("Hold 2 deck stow", 1700.0, 48.0, 0.0, 10.8))
        .with_item(LoadingItem::new("Hold 3 deck stow", 1100.0, 72.0, 0.0, 11.0))
        .with_item(LoadingItem::new("Stores and crew", 150.0, 90.0, 0.0, 9.0))
        .with_tank(TankFilling::new("FO1", 20.0))
        .with_tank(TankFilling::new("FW1", 30.0))
}

/// All sample conditions
pub fn sample_cases() -> Vec<LoadingCase> {
    vec![departure_case(), arrival_case(), ballast_case(), deck_cargo_case()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_tables_are_parallel() {
        let vessel = sample_vessel();
        let h = &vessel.hydrostatics;
        let n = h.draft_m.len();
        assert_eq!(h.displacement_t.len(), n);
        assert_eq!(h.kb_m.len(), n);
        assert_eq!(h.kmt_m.len(), n);
        for curve in &h.kn.curves {
            assert_eq!(curve.kn_m.len(), h.kn.heel_angles_deg.len());
        }
    }

    #[test]
    fn test_sample_cases_are_valid() {
        for case in sample_cases() {
            assert!(case.validate().is_ok(), "{} should validate", case.name);
            assert!(!case.name.is_empty());
        }
    }
}
