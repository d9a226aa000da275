//! # Draft & Trim Solver
//!
//! Finds the mean draft at which the hull displaces the loaded weight, reads
//! the hydrostatic particulars at that draft, and derives trim from the
//! LCG/LCB lever.
//!
//! ## Method
//!
//! - Mean draft: inverse lookup, interpolating the draft axis over the
//!   displacement column (displacement must be strictly increasing)
//! - Trimming moment: Δ × (LCG − LCB), t·m
//! - Trim: moment / MTC gives centimeters, divided by 100 for meters.
//!   Positive trim is by the stern.
//! - Forward/aft drafts: mean ∓ trim/2
//! - Trim angle: atan(trim / Lpp)

use serde::{Deserialize, Serialize};

use super::interpolation::Table;
use crate::errors::{CalcResult, IssueLog, Stage, StabilityError};
use crate::units::{Degrees, Radians};
use crate::vessel::HydrostaticTables;

/// Floating position and hydrostatics at the solved draft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DraftTrimSolution {
    /// Mean draft (m)
    pub mean_draft_m: f64,
    /// Draft at the forward perpendicular (m)
    pub forward_draft_m: f64,
    /// Draft at the aft perpendicular (m)
    pub aft_draft_m: f64,
    /// Trim, positive by the stern (m)
    pub trim_m: f64,
    /// Trim angle (degrees)
    pub trim_angle_deg: f64,
    /// Hydrostatics at the mean draft
    pub kb_m: f64,
    pub kmt_m: f64,
    pub bmt_m: f64,
    pub lcb_m: f64,
    pub lcf_m: f64,
    pub tpc_t_per_cm: f64,
    pub mtc_tm_per_cm: f64,
}

impl DraftTrimSolution {
    /// Parallel sinkage caused by adding `added_weight_t` at the LCF (m).
    ///
    /// # Errors
    ///
    /// * `DegenerateHydrostatics` - TPC at this draft is zero or missing
    pub fn sinkage_m(&self, added_weight_t: f64) -> CalcResult<f64> {
        if self.tpc_t_per_cm <= 0.0 {
            return Err(StabilityError::degenerate(
                "TPC",
                format!("{} t/cm at draft {:.3} m", self.tpc_t_per_cm, self.mean_draft_m),
            ));
        }
        Ok(added_weight_t / self.tpc_t_per_cm / 100.0)
    }
}

/// Solve mean draft and trim for a displacement and LCG.
///
/// `lpp_m` is the vessel's length between perpendiculars, used for the trim
/// angle. Missing or zero MTC, or a missing LCB column, leaves the vessel on
/// an even keel and records `DegenerateHydrostatics`.
pub fn solve_draft_and_trim(
    tables: &HydrostaticTables,
    displacement_t: f64,
    lcg_m: f64,
    lpp_m: f64,
    issues: &mut IssueLog,
) -> DraftTrimSolution {
    let stage = Stage::DraftTrim;
    let axis = tables.draft_m.as_slice();

    let mean_draft_m = Table::new("displacement_t", &tables.displacement_t, axis).resolve(
        displacement_t,
        stage,
        issues,
    );

    let at = |name: &str, column: &[f64], issues: &mut IssueLog| {
        Table::new(name, axis, column).resolve(mean_draft_m, stage, issues)
    };

    let kb_m = at("kb_m", tables.kb_m.as_slice(), issues);
    let kmt_m = at("kmt_m", tables.kmt_m.as_slice(), issues);
    let bmt_m = match &tables.bmt_m {
        Some(column) => at("bmt_m", column.as_slice(), issues),
        None => kmt_m - kb_m,
    };
    let lcb_m = tables.lcb_m.as_deref().map(|c| at("lcb_m", c, issues));
    let lcf_m = tables.lcf_m.as_deref().map_or(0.0, |c| at("lcf_m", c, issues));
    let tpc_t_per_cm = tables
        .tpc_t_per_cm
        .as_deref()
        .map_or(0.0, |c| at("tpc_t_per_cm", c, issues));
    let mtc_tm_per_cm = tables
        .mtc_tm_per_cm
        .as_deref()
        .map_or(0.0, |c| at("mtc_tm_per_cm", c, issues));

    let trim_m = match lcb_m {
        None => {
            issues.record(
                stage,
                StabilityError::degenerate("LCB", "column missing; trim not resolved"),
            );
            0.0
        }
        Some(_) if mtc_tm_per_cm <= 0.0 => {
            issues.record(
                stage,
                StabilityError::degenerate(
                    "MTC",
                    format!(
                        "{} t·m/cm at draft {:.3} m; trim not resolved",
                        mtc_tm_per_cm, mean_draft_m
                    ),
                ),
            );
            0.0
        }
        Some(lcb) => {
            let trimming_moment_tm = displacement_t * (lcg_m - lcb);
            trimming_moment_tm / mtc_tm_per_cm / 100.0
        }
    };

    let trim_angle_deg = Degrees::from(Radians(trim_m.atan2(lpp_m))).value();

    tracing::debug!(mean_draft_m, trim_m, kmt_m, "draft and trim solved");

    DraftTrimSolution {
        mean_draft_m,
        forward_draft_m: mean_draft_m - trim_m / 2.0,
        aft_draft_m: mean_draft_m + trim_m / 2.0,
        trim_m,
        trim_angle_deg,
        kb_m,
        kmt_m,
        bmt_m,
        lcb_m: lcb_m.unwrap_or(0.0),
        lcf_m,
        tpc_t_per_cm,
        mtc_tm_per_cm,
    }
}
