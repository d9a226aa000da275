//! # Criteria Evaluator
//!
//! Compares GM, the GZ areas and the curve maximum against the thresholds in
//! [`CriteriaConfig`]. A value equal to its requirement passes.
//!
//! | Criterion | Value | Critical |
//! |---|---|---|
//! | Initial GM | GM (m) | yes |
//! | Area 0-30° | m·rad | yes |
//! | Area 0-40° | m·rad | yes |
//! | Area 30-40° | m·rad | yes |
//! | Maximum GZ | m | yes |
//! | Max GZ at >30° | angle of max GZ (°) | no |
//!
//! The overall result passes when every critical criterion passes; advisory
//! criteria are reported only.

use serde::{Deserialize, Serialize};

use super::areas::AreaTable;
use super::righting_arm::StabilityCurve;
use crate::config::CriteriaConfig;

/// One named check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriteriaResult {
    pub name: String,
    /// Attained value
    pub value: f64,
    /// Minimum required value
    pub requirement: f64,
    pub passed: bool,
    /// Whether a failure fails the analysis
    pub critical: bool,
}

impl CriteriaResult {
    /// Build a `value >= requirement` check
    pub fn at_least(name: impl Into<String>, value: f64, requirement: f64, critical: bool) -> Self {
        Self {
            name: name.into(),
            value,
            requirement,
            passed: value >= requirement,
            critical,
        }
    }
}

/// Intact stability compliance for one loading condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StabilityCriteria {
    /// Area under GZ 0-30° (m·rad)
    pub area_0_30_mrad: f64,
    /// Area under GZ 0-40° (m·rad)
    pub area_0_40_mrad: f64,
    /// Area under GZ 30-40° (m·rad)
    pub area_30_40_mrad: f64,
    pub max_gz_m: f64,
    pub initial_gm_m: f64,
    /// Individual checks, in evaluation order
    pub compliance: Vec<CriteriaResult>,
}

impl StabilityCriteria {
    /// True when every critical criterion passes
    pub fn passes(&self) -> bool {
        self.compliance.iter().filter(|c| c.critical).all(|c| c.passed)
    }

    /// Critical criteria that failed
    pub fn failed_critical(&self) -> impl Iterator<Item = &CriteriaResult> {
        self.compliance.iter().filter(|c| c.critical && !c.passed)
    }
}

/// Evaluate the intact stability criteria.
///
/// Areas not present in `areas` count as zero.
pub fn check_criteria(
    config: &CriteriaConfig,
    gm_m: f64,
    curve: &StabilityCurve,
    areas: &AreaTable,
) -> StabilityCriteria {
    let area_0_30_mrad = areas.get(0.0, 30.0).unwrap_or(0.0);
    let area_0_40_mrad = areas.get(0.0, 40.0).unwrap_or(0.0);
    let area_30_40_mrad = areas.get(30.0, 40.0).unwrap_or(0.0);

    let compliance = vec![
        CriteriaResult::at_least("Initial GM", gm_m, config.min_gm_m, true),
        CriteriaResult::at_least("Area 0-30°", area_0_30_mrad, config.min_area_0_30_mrad, true),
        CriteriaResult::at_least("Area 0-40°", area_0_40_mrad, config.min_area_0_40_mrad, true),
        CriteriaResult::at_least("Area 30-40°", area_30_40_mrad, config.min_area_30_40_mrad, true),
        CriteriaResult::at_least("Maximum GZ", curve.max_gz_m, config.min_max_gz_m, true),
        CriteriaResult::at_least(
            "Max GZ at >30°",
            curve.max_gz_angle_deg,
            config.min_max_gz_angle_deg,
            false,
        ),
    ];

    StabilityCriteria {
        area_0_30_mrad,
        area_0_40_mrad,
        area_30_40_mrad,
        max_gz_m: curve.max_gz_m,
        initial_gm_m: gm_m,
        compliance,
    }
}
