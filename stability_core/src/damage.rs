//! # Damage Stability Interface
//!
//! Types for describing flooded compartments and the resulting damaged
//! condition. The engine ships no damage algorithm; a model plugs in by
//! implementing [`DamageStabilityModel`] against the same vessel data the
//! intact pipeline uses.

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::vessel::VesselData;

/// A watertight compartment that may flood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompartmentData {
    pub id: String,
    /// Moulded volume (m³)
    pub volume_m3: f64,
    /// Fraction of the volume water can occupy, 0-1
    pub permeability: f64,
    pub lcg_m: f64,
    pub tcg_m: f64,
    pub vcg_m: f64,
}

/// One flooding scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageCase {
    /// Ids of the flooded compartments
    pub compartments: Vec<String>,
    /// Average permeability applied to the flooded set, 0-1
    pub permeability: f64,
    /// Time to flood (minutes)
    pub flooding_time_min: f64,
}

/// Final equilibrium of a damaged vessel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageCondition {
    pub heel_angle_deg: f64,
    pub trim_angle_deg: f64,
    pub residual_gm_m: f64,
    /// Survival probability, 0-1
    pub survival_factor: f64,
}

/// A damage stability method.
pub trait DamageStabilityModel {
    /// Evaluate one flooding scenario on a vessel.
    fn evaluate(&self, vessel: &VesselData, case: &DamageCase) -> CalcResult<DamageCondition>;
}
