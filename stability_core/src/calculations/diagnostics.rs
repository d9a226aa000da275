//! # Diagnostics
//!
//! Plain-text warnings classified from already computed results. Order is
//! fixed: GM, free surface, vanishing angle, failed criteria.

use super::criteria::StabilityCriteria;
use super::loading_summary::LoadingSummary;
use super::righting_arm::StabilityCurve;

/// GM below this is reported as low (m)
pub const LOW_GM_M: f64 = 0.15;

/// FSM / Δ above this is reported as a high free-surface effect (m)
pub const HIGH_FREE_SURFACE_RATIO: f64 = 0.2;

/// Vanishing angle below this is reported as a limited range (degrees)
pub const LOW_VANISHING_ANGLE_DEG: f64 = 60.0;

/// Derive the warning list for one analysis.
pub fn generate_warnings(
    loading: &LoadingSummary,
    gm_m: f64,
    curve: &StabilityCurve,
    criteria: &StabilityCriteria,
) -> Vec<String> {
    let mut warnings = Vec::new();

    if gm_m <= 0.0 {
        warnings.push("DANGER: Negative GM - Ship may capsize!".to_string());
    } else if gm_m < LOW_GM_M {
        warnings.push("WARNING: Low GM - Insufficient initial stability".to_string());
    }

    if loading.total_displacement_t > 0.0
        && loading.fsm_sum_tm / loading.total_displacement_t > HIGH_FREE_SURFACE_RATIO
    {
        warnings.push("WARNING: High free surface effect".to_string());
    }

    if curve.vanishing_angle_deg < LOW_VANISHING_ANGLE_DEG {
        warnings.push("WARNING: Low vanishing angle - Limited stability range".to_string());
    }

    let failed = criteria.failed_critical().count();
    if failed > 0 {
        warnings.push(format!("CRITICAL: {} stability criteria failed", failed));
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::criteria::CriteriaResult;

    fn summary(displacement: f64, fsm: f64) -> LoadingSummary {
        LoadingSummary {
            total_displacement_t: displacement,
            lightship_weight_t: displacement,
            items_weight_t: 0.0,
            tanks_weight_t: 0.0,
            passengers_weight_t: 0.0,
            vehicles_weight_t: 0.0,
            kg_m: 6.0,
            lcg_m: 50.0,
            tcg_m: 0.0,
            fsm_sum_tm: fsm,
            tank_states: Vec::new(),
        }
    }

    fn curve(vanishing: f64) -> StabilityCurve {
        StabilityCurve {
            angles_deg: Vec::new(),
            gz_m: Vec::new(),
            gz_signed_m: Vec::new(),
            kn_m: Vec::new(),
            righting_moments_knm: Vec::new(),
            max_gz_m: 0.5,
            max_gz_angle_deg: 40.0,
            vanishing_angle_deg: vanishing,
            kn_draft_m: Some(6.0),
        }
    }

    fn criteria(failed: usize) -> StabilityCriteria {
        let compliance = (0..4)
            .map(|i| {
                let value = if i < failed { 0.0 } else { 1.0 };
                CriteriaResult::at_least(format!("C{}", i), value, 0.5, true)
            })
            .chain(std::iter::once(CriteriaResult::at_least("Advisory", 0.0, 1.0, false)))
            .collect();
        StabilityCriteria {
            area_0_30_mrad: 0.1,
            area_0_40_mrad: 0.2,
            area_30_40_mrad: 0.1,
            max_gz_m: 0.5,
            initial_gm_m: 1.0,
            compliance,
        }
    }

    #[test]
    fn test_clean_condition() {
        let warnings = generate_warnings(&summary(10000.0, 500.0), 1.0, &curve(75.0), &criteria(0));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_all_warnings_in_order() {
        let warnings =
            generate_warnings(&summary(10000.0, 2500.0), -0.1, &curve(40.0), &criteria(2));
        assert_eq!(
            warnings,
            vec![
                "DANGER: Negative GM - Ship may capsize!",
                "WARNING: High free surface effect",
                "WARNING: Low vanishing angle - Limited stability range",
                "CRITICAL: 2 stability criteria failed",
            ]
        );
    }

    #[test]
    fn test_low_gm() {
        let warnings = generate_warnings(&summary(10000.0, 0.0), 0.1, &curve(75.0), &criteria(0));
        assert_eq!(warnings, vec!["WARNING: Low GM - Insufficient initial stability"]);
    }

    #[test]
    fn test_zero_gm_is_negative() {
        let warnings = generate_warnings(&summary(10000.0, 0.0), 0.0, &curve(75.0), &criteria(0));
        assert_eq!(warnings[0], "DANGER: Negative GM - Ship may capsize!");
    }

    #[test]
    fn test_free_surface_ratio_boundary() {
        // exactly 0.2 is not reported
        let warnings =
            generate_warnings(&summary(10000.0, 2000.0), 1.0, &curve(75.0), &criteria(0));
        assert!(warnings.is_empty());
    }
}
