//! # Area Integrator
//!
//! Trapezoidal areas under the signed GZ curve, in meter-radians.
//!
//! A segment `[a_i, a_{i+1}]` belongs to the range `[start, end)` when its
//! start angle satisfies `start <= a_i < end`. Segments are taken whole: a
//! range end that falls between two samples is not interpolated, so with 1°
//! sampling the quantization error is at most one partial segment per end.
//! Adjacent ranges never share a segment, so `A(0,40) = A(0,30) + A(30,40)`.

use serde::{Deserialize, Serialize};

use crate::errors::{ClampSide, IssueLog, Stage, StabilityError};
use crate::units::{Degrees, Radians};

/// Tolerance on angle comparisons, absorbs fractional-step drift (degrees)
const ANGLE_EPSILON_DEG: f64 = 1e-9;

/// Area under the GZ curve for one requested range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaEntry {
    /// Range as requested (degrees)
    pub start_deg: f64,
    pub end_deg: f64,
    /// Upper bound actually integrated to, after any downflooding cap
    pub integrated_to_deg: f64,
    /// Area (m·rad)
    pub area_mrad: f64,
}

/// Computed areas, keyed by the requested range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaTable {
    pub entries: Vec<AreaEntry>,
}

impl AreaTable {
    /// Area for a requested range, if it was computed
    pub fn get(&self, start_deg: f64, end_deg: f64) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| {
                (e.start_deg - start_deg).abs() < ANGLE_EPSILON_DEG
                    && (e.end_deg - end_deg).abs() < ANGLE_EPSILON_DEG
            })
            .map(|e| e.area_mrad)
    }
}

/// Area under `gz` between `start_deg` (inclusive) and `end_deg` (exclusive).
pub fn area_between(gz: &[f64], angles_deg: &[f64], start_deg: f64, end_deg: f64) -> f64 {
    angles_deg
        .windows(2)
        .zip(gz.windows(2))
        .filter(|(a, _)| {
            a[0] >= start_deg - ANGLE_EPSILON_DEG && a[0] < end_deg - ANGLE_EPSILON_DEG
        })
        .map(|(a, g)| {
            let width = Radians::from(Degrees(a[1] - a[0])).value();
            0.5 * (g[0] + g[1]) * width
        })
        .sum()
}

/// Integrate every range in `ranges` (`[start_deg, end_deg]` pairs).
pub fn integrate_areas(gz: &[f64], angles_deg: &[f64], ranges: &[[f64; 2]]) -> AreaTable {
    integrate_areas_capped(gz, angles_deg, ranges, None)
}

/// As [`integrate_areas`], lowering every range end above `cap_deg` to it.
pub fn integrate_areas_capped(
    gz: &[f64],
    angles_deg: &[f64],
    ranges: &[[f64; 2]],
    cap_deg: Option<f64>,
) -> AreaTable {
    let entries = ranges
        .iter()
        .map(|&[start_deg, end_deg]| {
            let integrated_to_deg = cap_deg.map_or(end_deg, |cap| end_deg.min(cap));
            AreaEntry {
                start_deg,
                end_deg,
                integrated_to_deg,
                area_mrad: area_between(gz, angles_deg, start_deg, integrated_to_deg),
            }
        })
        .collect();
    AreaTable { entries }
}

/// Record an `OutOfRangeQuery` for every range that reaches past the sampled
/// angles. Those areas are truncated to the samples that exist.
pub fn check_coverage(table: &AreaTable, angles_deg: &[f64], issues: &mut IssueLog) {
    let (Some(&first), Some(&last)) = (angles_deg.first(), angles_deg.last()) else {
        return;
    };
    for entry in &table.entries {
        let outside = if entry.start_deg < first - ANGLE_EPSILON_DEG {
            Some((entry.start_deg, ClampSide::Below))
        } else if entry.integrated_to_deg > last + ANGLE_EPSILON_DEG {
            Some((entry.integrated_to_deg, ClampSide::Above))
        } else {
            None
        };
        if let Some((query, side)) = outside {
            issues.record(
                Stage::Areas,
                StabilityError::OutOfRangeQuery {
                    table: format!("area[{}-{}]", entry.start_deg, entry.end_deg),
                    query,
                    min: first,
                    max: last,
                    side,
                },
            );
        }
    }
}
