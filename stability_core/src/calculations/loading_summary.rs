//! # Loading Aggregator
//!
//! Combines lightship, cargo items, tank contents, passengers and vehicles
//! into total displacement, combined centers of gravity and the total
//! free-surface moment.
//!
//! Tank fillings are joined to the vessel's tank geometry by id at this
//! point; the resolved per-tank state is reported in
//! [`LoadingSummary::tank_states`].
//!
//! ## Example
//!
//! ```rust
//! use stability_core::calculations::loading_summary::compute_loading_summary;
//! use stability_core::errors::IssueLog;
//! use stability_core::sample::{sample_vessel, departure_case};
//!
//! let mut issues = IssueLog::new();
//! let summary = compute_loading_summary(&sample_vessel(), &departure_case(), &mut issues);
//! assert!(summary.total_displacement_t > 8600.0);
//! assert!(issues.is_empty());
//! ```

use serde::{Deserialize, Serialize};

use super::interpolation::Table;
use crate::errors::{IssueLog, Stage, StabilityError};
use crate::loading::LoadingCase;
use crate::vessel::VesselData;

/// Resolved contents of one tank for this loading case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TankState {
    pub id: String,
    pub fill_percent: f64,
    /// Liquid volume (m³)
    pub volume_m3: f64,
    /// Liquid weight (t)
    pub weight_t: f64,
    pub lcg_m: f64,
    pub tcg_m: f64,
    pub vcg_m: f64,
    /// Free-surface moment at this fill (t·m)
    pub fsm_tm: f64,
}

/// Totals for one loading condition.
///
/// `kg_m` is the solid (uncorrected) KG; the free-surface correction is a
/// separate stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadingSummary {
    /// Total displacement (t)
    pub total_displacement_t: f64,
    /// Weight breakdown (t)
    pub lightship_weight_t: f64,
    pub items_weight_t: f64,
    pub tanks_weight_t: f64,
    pub passengers_weight_t: f64,
    pub vehicles_weight_t: f64,
    /// Combined vertical center of gravity, no free-surface correction (m)
    pub kg_m: f64,
    /// Combined longitudinal center of gravity (m)
    pub lcg_m: f64,
    /// Combined transverse center of gravity (m)
    pub tcg_m: f64,
    /// Sum of tank free-surface moments (t·m)
    pub fsm_sum_tm: f64,
    /// Per-tank resolved state, in filling order
    pub tank_states: Vec<TankState>,
}

impl LoadingSummary {
    /// Deadweight: everything on board except the lightship (t)
    pub fn deadweight_t(&self) -> f64 {
        self.total_displacement_t - self.lightship_weight_t
    }
}

/// Running weight and first moments about the three reference planes.
#[derive(Debug, Default, Clone, Copy)]
struct Moments {
    weight: f64,
    longitudinal: f64,
    transverse: f64,
    vertical: f64,
}

impl Moments {
    fn add(&mut self, weight_t: f64, lcg_m: f64, tcg_m: f64, vcg_m: f64) {
        self.weight += weight_t;
        self.longitudinal += weight_t * lcg_m;
        self.transverse += weight_t * tcg_m;
        self.vertical += weight_t * vcg_m;
    }

    fn merge(&mut self, other: Moments) {
        self.weight += other.weight;
        self.longitudinal += other.longitudinal;
        self.transverse += other.transverse;
        self.vertical += other.vertical;
    }
}

/// Aggregate a loading case against its vessel.
///
/// Unknown tank ids are skipped and recorded as `TankNotFound`. A zero total
/// weight is recorded as `EmptyLoadingCase` and the centers fall back to zero.
pub fn compute_loading_summary(
    vessel: &VesselData,
    loading: &LoadingCase,
    issues: &mut IssueLog,
) -> LoadingSummary {
    let ls = &vessel.lightship;
    let mut total = Moments::default();
    total.add(ls.weight_t, ls.lcg_m, ls.tcg_m, ls.kg_m);

    let mut items = Moments::default();
    for item in &loading.items {
        items.add(item.weight_t, item.lcg_m, item.tcg_m, item.vcg_m);
    }

    let mut tanks = Moments::default();
    let mut tank_states = Vec::with_capacity(loading.tanks.len());
    let mut fsm_sum_tm = 0.0;

    for filling in &loading.tanks {
        let Some(geometry) = vessel.tank(&filling.id) else {
            issues.record(Stage::Loading, StabilityError::tank_not_found(&filling.id));
            continue;
        };

        let volume_m3 = geometry.capacity_m3 * (filling.fill_percent / 100.0);
        let weight_t = volume_m3 * geometry.density_t_per_m3;

        let (fill_axis, fsm_values): (Vec<f64>, Vec<f64>) =
            geometry.fsm_table.iter().map(|p| (p[0], p[1])).unzip();
        let table_name = format!("fsm_table[{}]", geometry.id);
        let fsm_tm = Table::new(&table_name, &fill_axis, &fsm_values).resolve(
            filling.fill_percent,
            Stage::Loading,
            issues,
        );

        tanks.add(weight_t, geometry.lcg_m, geometry.tcg_m, geometry.vcg_m);
        fsm_sum_tm += fsm_tm;
        tank_states.push(TankState {
            id: filling.id.clone(),
            fill_percent: filling.fill_percent,
            volume_m3,
            weight_t,
            lcg_m: geometry.lcg_m,
            tcg_m: geometry.tcg_m,
            vcg_m: geometry.vcg_m,
            fsm_tm,
        });
    }

    let mut passengers = Moments::default();
    for group in &loading.passengers {
        passengers.add(group.weight_t(), group.lcg_m, group.tcg_m, group.vcg_m);
    }

    let mut vehicles = Moments::default();
    for group in &loading.vehicles {
        vehicles.add(group.weight_t(), group.lcg_m, group.tcg_m, group.vcg_m);
    }

    for part in [items, tanks, passengers, vehicles] {
        total.merge(part);
    }

    let (kg_m, lcg_m, tcg_m) = if total.weight > 0.0 {
        (
            total.vertical / total.weight,
            total.longitudinal / total.weight,
            total.transverse / total.weight,
        )
    } else {
        issues.record(
            Stage::Loading,
            StabilityError::EmptyLoadingCase {
                total_weight_t: total.weight,
            },
        );
        (0.0, 0.0, 0.0)
    };

    tracing::debug!(
        case = %loading.name,
        displacement_t = total.weight,
        kg_m,
        lcg_m,
        tcg_m,
        fsm_sum_tm,
        "loading aggregated"
    );

    LoadingSummary {
        total_displacement_t: total.weight,
        lightship_weight_t: ls.weight_t,
        items_weight_t: items.weight,
        tanks_weight_t: tanks.weight,
        passengers_weight_t: passengers.weight,
        vehicles_weight_t: vehicles.weight,
        kg_m,
        lcg_m,
        tcg_m,
        fsm_sum_tm,
        tank_states,
    }
}
