//! # Stability Calculations
//!
//! The intact stability pipeline. Every stage is a free function over plain
//! data:
//!
//! 1. [`interpolation`] - table lookup used by every later stage
//! 2. [`loading_summary`] - displacement, centers of gravity, free-surface moment
//! 3. [`draft_trim`] - mean draft, trim and hydrostatics at that draft
//! 4. [`free_surface`] - corrected KG and GM
//! 5. [`righting_arm`] - GZ curve from the KN cross curves
//! 6. [`areas`] - areas under the GZ curve
//! 7. [`criteria`] - IMO intact stability criteria
//! 8. [`wind`] - wind heeling (also callable standalone)
//! 9. [`diagnostics`] - plain-text warnings
//!
//! [`analyze`] runs the whole chain for one loading case. Recoverable
//! problems met on the way (clamped lookups, malformed tables, unknown
//! tanks) do not stop the analysis; they are collected in
//! [`AnalysisResult::issues`] and clear [`AnalysisResult::reliable`].
//!
//! ## Example
//!
//! ```rust
//! use stability_core::calculations::analyze;
//! use stability_core::sample::{departure_case, sample_vessel};
//!
//! let result = analyze(&sample_vessel(), &departure_case(), None).unwrap();
//! println!("GM = {:.3} m, pass: {}", result.gm_m, result.passes());
//! assert!(result.reliable);
//! ```

pub mod areas;
pub mod criteria;
pub mod diagnostics;
pub mod draft_trim;
pub mod free_surface;
pub mod interpolation;
pub mod loading_summary;
pub mod righting_arm;
pub mod wind;

use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::errors::{CalcResult, Issue, IssueLog, Stage, StabilityError};
use crate::loading::LoadingCase;
use crate::units::{Degrees, Radians};
use crate::vessel::VesselData;

pub use areas::{integrate_areas, AreaTable};
pub use criteria::{check_criteria, CriteriaResult, StabilityCriteria};
pub use diagnostics::generate_warnings;
pub use draft_trim::{solve_draft_and_trim, DraftTrimSolution};
pub use free_surface::{apply_free_surface, compute_gm};
pub use interpolation::{interpolate, interpolate_pairs, Lookup};
pub use loading_summary::{compute_loading_summary, LoadingSummary, TankState};
pub use righting_arm::{compute_gz_curve, select_kn_curve, StabilityCurve};
pub use wind::{wind_heeling, WindHeeling};

/// Everything computed for one loading case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub case_name: String,
    pub loading_summary: LoadingSummary,
    pub draft_trim: DraftTrimSolution,
    /// KG including the free-surface correction (m)
    pub kg_corrected_m: f64,
    /// Transverse metacentric height (m)
    pub gm_m: f64,
    /// Static list from the transverse center of gravity (degrees)
    pub list_angle_deg: f64,
    pub stability_curve: StabilityCurve,
    pub areas: AreaTable,
    pub criteria: StabilityCriteria,
    pub warnings: Vec<String>,
    /// Present when a wind speed was configured and the vessel has windage data
    pub wind: Option<WindHeeling>,
    /// Recoverable problems met during the analysis
    pub issues: Vec<Issue>,
    /// False when any issue was recorded
    pub reliable: bool,
}

impl AnalysisResult {
    /// True when every critical criterion passes
    pub fn passes(&self) -> bool {
        self.criteria.passes()
    }
}

/// Static list angle for a transverse center of gravity offset.
///
/// With GM ≤ 0 any offset lays the vessel over, reported as ±90°.
pub fn list_angle_deg(tcg_m: f64, gm_m: f64) -> f64 {
    if gm_m > 0.0 {
        Degrees::from(Radians((tcg_m / gm_m).atan())).value()
    } else if tcg_m != 0.0 {
        90.0_f64.copysign(tcg_m)
    } else {
        0.0
    }
}

/// Run the full intact stability analysis for one loading case.
///
/// `config` defaults to [`AnalysisConfig::default`].
///
/// # Errors
///
/// * `InvalidInput` - the vessel, loading case or configuration fails validation
pub fn analyze(
    vessel: &VesselData,
    loading: &LoadingCase,
    config: Option<&AnalysisConfig>,
) -> CalcResult<AnalysisResult> {
    let default_config;
    let config = match config {
        Some(c) => c,
        None => {
            default_config = AnalysisConfig::default();
            &default_config
        }
    };

    vessel.validate()?;
    loading.validate()?;
    config.validate()?;

    let span = tracing::debug_span!("analyze", case = %loading.name);
    let _enter = span.enter();

    let mut issues = IssueLog::new();

    let summary = compute_loading_summary(vessel, loading, &mut issues);
    let displacement_t = summary.total_displacement_t;

    let draft_trim = solve_draft_and_trim(
        &vessel.hydrostatics,
        displacement_t,
        summary.lcg_m,
        vessel.lpp_m,
        &mut issues,
    );

    let kg_corrected_m = apply_free_surface(summary.kg_m, summary.fsm_sum_tm, displacement_t);
    let gm_m = compute_gm(draft_trim.kmt_m, kg_corrected_m);
    tracing::debug!(kg_corrected_m, gm_m, "free-surface correction applied");

    let stability_curve = compute_gz_curve(
        &vessel.hydrostatics.kn,
        draft_trim.mean_draft_m,
        kg_corrected_m,
        displacement_t,
        &config.heel_range,
        &mut issues,
    );

    let cap_deg = config.cap_areas_at_downflooding.then_some(vessel.downflooding_angle_deg);
    let areas = areas::integrate_areas_capped(
        &stability_curve.gz_signed_m,
        &stability_curve.angles_deg,
        &config.area_ranges,
        cap_deg,
    );
    areas::check_coverage(&areas, &stability_curve.angles_deg, &mut issues);

    let criteria = check_criteria(&config.criteria, gm_m, &stability_curve, &areas);
    let warnings = generate_warnings(&summary, gm_m, &stability_curve, &criteria);

    let wind = match (config.wind_speed_mps, &vessel.windage) {
        (Some(speed), Some(windage)) => {
            let heeling = wind_heeling(
                speed,
                windage.lateral_area_m2,
                windage.center_height_m,
                displacement_t,
                gm_m,
            );
            match heeling {
                Ok(w) => Some(w),
                Err(e) => {
                    issues.record(Stage::Wind, e);
                    None
                }
            }
        }
        (Some(_), None) => {
            tracing::debug!("wind speed configured but vessel has no windage data");
            None
        }
        _ => None,
    };

    let issues = issues.into_vec();
    let reliable = issues.is_empty();
    let passed = criteria.passes();

    tracing::info!(
        displacement_t,
        mean_draft_m = draft_trim.mean_draft_m,
        gm_m,
        passed,
        issues = issues.len(),
        "analysis complete"
    );

    Ok(AnalysisResult {
        case_name: loading.name.clone(),
        list_angle_deg: list_angle_deg(summary.tcg_m, gm_m),
        loading_summary: summary,
        draft_trim,
        kg_corrected_m,
        gm_m,
        stability_curve,
        areas,
        criteria,
        warnings,
        wind,
        issues,
        reliable,
    })
}

/// Analyze independent loading cases on worker threads.
///
/// Results come back in the order of `cases`; one case failing validation
/// does not affect the others.
pub fn analyze_batch(
    vessel: &VesselData,
    cases: &[LoadingCase],
    config: Option<&AnalysisConfig>,
) -> Vec<CalcResult<AnalysisResult>> {
    if cases.is_empty() {
        return Vec::new();
    }

    let workers = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .min(cases.len());
    let chunk_size = cases.len().div_ceil(workers);

    tracing::debug!(cases = cases.len(), workers, "batch analysis started");

    let mut results = Vec::with_capacity(cases.len());

    std::thread::scope(|scope| {
        let handles: Vec<_> = cases
            .chunks(chunk_size)
            .map(|chunk| {
                let handle = scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|case| analyze(vessel, case, config))
                        .collect::<Vec<_>>()
                });
                (chunk, handle)
            })
            .collect();

        for (chunk, handle) in handles {
            match handle.join() {
                Ok(chunk_results) => results.extend(chunk_results),
                Err(_) => results.extend(chunk.iter().map(|case| {
                    Err(StabilityError::Internal {
                        message: format!("analysis worker for case '{}' panicked", case.name),
                    })
                })),
            }
        }
    });

    results
}
