//! # Righting-Arm (GZ) Curve
//!
//! Builds the GZ curve from the KN cross curves and the corrected KG:
//!
//! ```text
//! GZ(φ) = KN(φ) − KG_corrected · sin φ
//! ```
//!
//! The KN curve used is the one tabulated at the reference draft nearest the
//! solved mean draft; curves are not blended between drafts. An exact tie
//! between two reference drafts resolves to the smaller draft.
//!
//! The signed curve is kept in [`StabilityCurve::gz_signed_m`] and drives the
//! maximum, the vanishing angle and the areas. [`StabilityCurve::gz_m`] is
//! the same curve floored at zero for display.

use serde::{Deserialize, Serialize};

use super::interpolation::Table;
use crate::config::AngleRange;
use crate::errors::{ClampSide, IssueLog, Stage, StabilityError};
use crate::units::{Degrees, KiloNewtons, Tonnes};
use crate::vessel::{KnCurve, KnTable};

/// GZ at or below this is treated as zero when locating the vanishing angle (m)
pub const VANISHING_EPSILON_M: f64 = 0.001;

/// Righting-arm curve over the sampled heel range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StabilityCurve {
    /// Heel angles (degrees)
    pub angles_deg: Vec<f64>,
    /// GZ floored at zero (m)
    pub gz_m: Vec<f64>,
    /// GZ with sign preserved (m)
    pub gz_signed_m: Vec<f64>,
    /// KN read at each angle (m)
    pub kn_m: Vec<f64>,
    /// Righting moment Δ·g·GZ (kN·m), signed
    pub righting_moments_knm: Vec<f64>,
    /// Largest signed GZ (m)
    pub max_gz_m: f64,
    /// Angle of the largest GZ (degrees)
    pub max_gz_angle_deg: f64,
    /// First angle past the maximum where GZ returns to zero (degrees)
    pub vanishing_angle_deg: f64,
    /// Reference draft of the KN curve used (m)
    pub kn_draft_m: Option<f64>,
}

impl StabilityCurve {
    /// Signed GZ at a sampled angle, if that angle was sampled
    pub fn gz_at(&self, angle_deg: f64) -> Option<f64> {
        self.angles_deg
            .iter()
            .position(|a| (a - angle_deg).abs() < 1e-9)
            .map(|i| self.gz_signed_m[i])
    }
}

/// Pick the KN curve whose reference draft is nearest `draft_m`.
///
/// Exact distance ties go to the smaller reference draft.
pub fn select_kn_curve(table: &KnTable, draft_m: f64) -> Option<&KnCurve> {
    table.curves.iter().min_by(|a, b| {
        let da = (a.draft_m - draft_m).abs();
        let db = (b.draft_m - draft_m).abs();
        da.total_cmp(&db).then(a.draft_m.total_cmp(&b.draft_m))
    })
}

/// Compute the GZ curve at `draft_m` for a corrected KG.
///
/// `displacement_t` scales GZ into righting moments. KN queries beyond the
/// tabulated heel angles are clamped and reported once per curve.
pub fn compute_gz_curve(
    kn: &KnTable,
    draft_m: f64,
    kg_corrected_m: f64,
    displacement_t: f64,
    range: &AngleRange,
    issues: &mut IssueLog,
) -> StabilityCurve {
    let stage = Stage::RightingArm;
    let angles_deg = range.angles();
    let weight = KiloNewtons::from(Tonnes(displacement_t));

    let curve = select_kn_curve(kn, draft_m);
    let table_name = curve.map_or_else(
        || "kn_m".to_string(),
        |c| format!("kn_m[T={}]", c.draft_m),
    );
    let table = curve.map(|c| Table::new(&table_name, &kn.heel_angles_deg, &c.kn_m));
    let usable = match &table {
        None => {
            issues.record(
                stage,
                StabilityError::malformed_table(&table_name, "no cross curves tabulated"),
            );
            false
        }
        Some(t) => match t.check() {
            Ok(()) => true,
            Err(e) => {
                issues.record(stage, e);
                false
            }
        },
    };

    let mut kn_m = Vec::with_capacity(angles_deg.len());
    let mut gz_signed_m = Vec::with_capacity(angles_deg.len());
    let mut first_clamp: Option<(f64, ClampSide)> = None;

    for &angle in &angles_deg {
        let kn_value = match (&table, usable) {
            (Some(t), true) => match t.at(angle) {
                Ok(hit) => {
                    if let (Some(side), None) = (hit.clamped, first_clamp) {
                        first_clamp = Some((angle, side));
                    }
                    hit.value
                }
                Err(_) => 0.0,
            },
            _ => 0.0,
        };
        kn_m.push(kn_value);
        gz_signed_m.push(kn_value - kg_corrected_m * Degrees(angle).sin());
    }

    if let (Some((angle, side)), Some(t)) = (first_clamp, &table) {
        issues.record(stage, t.clamp_error(angle, side));
    }

    let gz_m: Vec<f64> = gz_signed_m.iter().map(|gz| gz.max(0.0)).collect();
    let righting_moments_knm = gz_signed_m.iter().map(|gz| weight.value() * gz).collect();

    let (max_index, max_gz_m) = gz_signed_m
        .iter()
        .copied()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, gz)| match best {
            Some((_, top)) if gz <= top => best,
            _ => Some((i, gz)),
        })
        .unwrap_or((0, 0.0));

    let max_gz_angle_deg = angles_deg.get(max_index).copied().unwrap_or(range.start_deg);
    let vanishing_angle_deg = gz_signed_m
        .iter()
        .enumerate()
        .skip(max_index + 1)
        .find(|(_, gz)| **gz <= VANISHING_EPSILON_M)
        .map(|(i, _)| angles_deg[i])
        .or_else(|| angles_deg.last().copied())
        .unwrap_or(range.start_deg);

    tracing::debug!(
        kn_draft_m = curve.map(|c| c.draft_m),
        max_gz_m,
        max_gz_angle_deg,
        vanishing_angle_deg,
        "GZ curve computed"
    );

    StabilityCurve {
        angles_deg,
        gz_m,
        gz_signed_m,
        kn_m,
        righting_moments_knm,
        max_gz_m,
        max_gz_angle_deg,
        vanishing_angle_deg,
        kn_draft_m: curve.map(|c| c.draft_m),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_vessel;

    fn sine_table(amplitude: f64) -> KnTable {
        let angles: Vec<f64> = (0..=90).map(f64::from).collect();
        let kn = angles.iter().map(|a| amplitude * Degrees(*a).sin()).collect();
        KnTable::new(angles).with_curve(6.0, kn)
    }

    #[test]
    fn test_nearest_draft_selection() {
        let table = sample_vessel().hydrostatics.kn;
        assert_eq!(select_kn_curve(&table, 6.3).unwrap().draft_m, 6.0);
        assert_eq!(select_kn_curve(&table, 6.7).unwrap().draft_m, 7.0);
        assert_eq!(select_kn_curve(&table, 12.0).unwrap().draft_m, 8.0);
    }

    #[test]
    fn test_tie_goes_to_smaller_draft() {
        let table = KnTable::new(vec![0.0, 30.0])
            .with_curve(7.0, vec![0.0, 4.0])
            .with_curve(6.0, vec![0.0, 4.2]);
        assert_eq!(select_kn_curve(&table, 6.5).unwrap().draft_m, 6.0);
    }

    #[test]
    fn test_gz_formula() {
        let vessel = sample_vessel();
        let mut issues = IssueLog::new();
        let range = AngleRange::default();
        let curve =
            compute_gz_curve(&vessel.hydrostatics.kn, 6.0, 6.5, 12000.0, &range, &mut issues);
        // KN(30°) at T=6.0 is 4.188
        let gz30 = curve.gz_at(30.0).unwrap();
        assert!((gz30 - (4.188 - 6.5 * 0.5)).abs() < 1e-9);
        assert!(issues.is_empty());
        assert_eq!(curve.kn_draft_m, Some(6.0));
    }

    #[test]
    fn test_sign_preserved_but_display_clamped() {
        let table = sine_table(0.2);
        let mut issues = IssueLog::new();
        // KG above the "KN metacenter": GZ = (0.2 - 1.0) sin φ < 0
        let curve = compute_gz_curve(&table, 6.0, 1.0, 1000.0, &AngleRange::default(), &mut issues);
        assert!(curve.gz_m.iter().all(|gz| *gz >= 0.0));
        assert!(curve.gz_signed_m[45] < 0.0);
        assert!(curve.righting_moments_knm[45] < 0.0);
        assert_eq!(curve.max_gz_angle_deg, 0.0);
        assert_eq!(curve.vanishing_angle_deg, 1.0);
    }

    #[test]
    fn test_max_and_vanishing_angle() {
        let vessel = sample_vessel();
        let mut issues = IssueLog::new();
        let range = AngleRange::default();
        let curve =
            compute_gz_curve(&vessel.hydrostatics.kn, 8.0, 7.3, 16000.0, &range, &mut issues);
        // Tabulated GZ at T=8.0, KG=7.3 peaks at 50° and turns negative before 90°
        assert_eq!(curve.max_gz_angle_deg, 50.0);
        assert!(curve.vanishing_angle_deg > 80.0 && curve.vanishing_angle_deg < 90.0);
        let i = curve.angles_deg.iter().position(|a| *a == curve.vanishing_angle_deg).unwrap();
        assert!(curve.gz_signed_m[i] <= VANISHING_EPSILON_M);
        assert!(curve.gz_signed_m[i - 1] > VANISHING_EPSILON_M);
    }

    #[test]
    fn test_vanishing_defaults_to_top_of_range() {
        let vessel = sample_vessel();
        let mut issues = IssueLog::new();
        let range = AngleRange::new(0.0, 60.0, 1.0);
        let curve =
            compute_gz_curve(&vessel.hydrostatics.kn, 6.0, 6.5, 12000.0, &range, &mut issues);
        assert_eq!(curve.vanishing_angle_deg, 60.0);
    }

    #[test]
    fn test_righting_moment_scales_with_displacement() {
        let table = sine_table(1.0);
        let mut issues = IssueLog::new();
        let range = AngleRange::new(0.0, 90.0, 90.0);
        let curve = compute_gz_curve(&table, 6.0, 0.0, 1000.0, &range, &mut issues);
        // 1000 t × 9.81 × 1.0 m
        assert!((curve.righting_moments_knm[1] - 9810.0).abs() < 1e-6);
    }

    #[test]
    fn test_range_beyond_table_reported_once() {
        let table = KnTable::new(vec![0.0, 30.0, 60.0]).with_curve(6.0, vec![0.0, 2.0, 3.0]);
        let mut issues = IssueLog::new();
        let curve = compute_gz_curve(&table, 6.0, 1.0, 1000.0, &AngleRange::default(), &mut issues);
        assert_eq!(curve.kn_m[75], 3.0);
        assert_eq!(issues.len(), 1);
        match &issues.iter().next().unwrap().error {
            StabilityError::OutOfRangeQuery { query, side, .. } => {
                assert_eq!(*query, 61.0);
                assert_eq!(*side, ClampSide::Above);
            }
            other => panic!("expected OutOfRangeQuery, got {:?}", other),
        };
    }

    #[test]
    fn test_missing_curves_reported() {
        let table = KnTable::new(vec![0.0, 30.0]);
        let mut issues = IssueLog::new();
        let range = AngleRange::new(0.0, 30.0, 10.0);
        let curve = compute_gz_curve(&table, 6.0, 1.0, 1000.0, &range, &mut issues);
        assert!(curve.kn_m.iter().all(|kn| *kn == 0.0));
        assert_eq!(curve.kn_draft_m, None);
        assert_eq!(issues.iter().next().unwrap().error.error_code(), "MALFORMED_TABLE");
    }

    #[test]
    fn test_unordered_heel_axis_keeps_reason() {
        let table = KnTable::new(vec![0.0, 30.0, 20.0]).with_curve(6.0, vec![0.0, 2.0, 3.0]);
        let mut issues = IssueLog::new();
        let range = AngleRange::new(0.0, 30.0, 10.0);
        let curve = compute_gz_curve(&table, 6.0, 1.0, 1000.0, &range, &mut issues);
        assert!(curve.kn_m.iter().all(|kn| *kn == 0.0));
        assert_eq!(issues.len(), 1);
        match &issues.iter().next().unwrap().error {
            StabilityError::MalformedTable { table, reason } => {
                assert_eq!(table, "kn_m[T=6]");
                assert!(reason.contains("not strictly increasing"), "reason: {}", reason);
            }
            other => panic!("expected MalformedTable, got {:?}", other),
        };
    }
}
