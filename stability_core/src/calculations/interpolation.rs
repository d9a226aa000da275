//! # Hydrostatic Interpolator
//!
//! Piecewise-linear lookup over tabulated curves. Every later stage reads
//! its tables through this module.
//!
//! Queries outside the tabulated domain are clamped to the boundary value,
//! never extrapolated, and the clamp is reported in [`Lookup::clamped`].
//! Malformed tables (length mismatch, empty, axis not strictly increasing)
//! are an error rather than a silent zero; the pipeline decides the fallback.
//!
//! ## Example
//!
//! ```rust
//! use stability_core::calculations::interpolation::interpolate;
//!
//! let draft = [4.0, 5.0, 6.0];
//! let kmt = [8.4, 7.99, 7.66];
//!
//! let hit = interpolate(&draft, &kmt, 5.5).unwrap();
//! assert!((hit.value - 7.825).abs() < 1e-9);
//! assert!(hit.clamped.is_none());
//!
//! let low = interpolate(&draft, &kmt, 3.0).unwrap();
//! assert_eq!(low.value, 8.4);
//! assert!(low.clamped.is_some());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcResult, ClampSide, IssueLog, Stage, StabilityError};

/// Result of one table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lookup {
    /// Interpolated (or boundary) value
    pub value: f64,
    /// Set when the query fell outside the axis and was clamped
    pub clamped: Option<ClampSide>,
}

/// Interpolate `values` over a strictly increasing `axis` at `x`.
///
/// # Errors
///
/// * `MalformedTable` - arrays differ in length, are empty, or the axis is not strictly increasing
/// * `InvalidInput` - `x` is not finite
pub fn interpolate(axis: &[f64], values: &[f64], x: f64) -> CalcResult<Lookup> {
    Table::new("table", axis, values).at(x)
}

/// Interpolate a two-column `[key, value]` table (e.g. fill percent → FSM).
pub fn interpolate_pairs(pairs: &[[f64; 2]], x: f64) -> CalcResult<Lookup> {
    let (axis, values): (Vec<f64>, Vec<f64>) = pairs.iter().map(|p| (p[0], p[1])).unzip();
    Table::new("pairs", &axis, &values).at(x)
}

/// A named axis/value pair, so errors say which table was bad.
#[derive(Debug, Clone, Copy)]
pub struct Table<'a> {
    pub name: &'a str,
    pub axis: &'a [f64],
    pub values: &'a [f64],
}

impl<'a> Table<'a> {
    pub fn new(name: &'a str, axis: &'a [f64], values: &'a [f64]) -> Self {
        Self { name, axis, values }
    }

    /// Check the table invariants.
    pub fn check(&self) -> CalcResult<()> {
        if self.axis.len() != self.values.len() {
            return Err(StabilityError::malformed_table(
                self.name,
                format!(
                    "{} values against an axis of {} points",
                    self.values.len(),
                    self.axis.len()
                ),
            ));
        }
        if self.axis.is_empty() {
            return Err(StabilityError::malformed_table(self.name, "table is empty"));
        }
        if let Some(i) = self.axis.windows(2).position(|w| !(w[1] > w[0])) {
            return Err(StabilityError::malformed_table(
                self.name,
                format!(
                    "axis is not strictly increasing at index {} ({} then {})",
                    i + 1,
                    self.axis[i],
                    self.axis[i + 1]
                ),
            ));
        }
        Ok(())
    }

    /// Look up `x`, clamping outside the axis.
    pub fn at(&self, x: f64) -> CalcResult<Lookup> {
        self.check()?;
        if !x.is_finite() {
            return Err(StabilityError::invalid_input(
                format!("{} query", self.name),
                x.to_string(),
                "Query must be finite",
            ));
        }

        let n = self.axis.len();
        let first = self.axis[0];
        let last = self.axis[n - 1];

        if x <= first {
            let clamped = (x < first).then_some(ClampSide::Below);
            return Ok(Lookup { value: self.values[0], clamped });
        }
        if x >= last {
            let clamped = (x > last).then_some(ClampSide::Above);
            return Ok(Lookup { value: self.values[n - 1], clamped });
        }

        // first < x < last, so 1 <= upper <= n - 1
        let upper = self.axis.partition_point(|a| *a <= x);
        let lower = upper - 1;
        let (x0, x1) = (self.axis[lower], self.axis[upper]);
        let (y0, y1) = (self.values[lower], self.values[upper]);
        let ratio = (x - x0) / (x1 - x0);

        Ok(Lookup {
            value: y0 + ratio * (y1 - y0),
            clamped: None,
        })
    }

    /// Build the OutOfRangeQuery error for a clamped lookup
    pub fn clamp_error(&self, x: f64, side: ClampSide) -> StabilityError {
        StabilityError::OutOfRangeQuery {
            table: self.name.to_string(),
            query: x,
            min: self.axis.first().copied().unwrap_or(f64::NAN),
            max: self.axis.last().copied().unwrap_or(f64::NAN),
            side,
        }
    }

    /// Look up `x` inside the pipeline: clamps and malformed tables are
    /// recorded against `stage`, and a malformed table reads as zero.
    pub fn resolve(&self, x: f64, stage: Stage, issues: &mut IssueLog) -> f64 {
        match self.at(x) {
            Ok(Lookup { value, clamped: None }) => value,
            Ok(Lookup {
                value,
                clamped: Some(side),
            }) => {
                issues.record(stage, self.clamp_error(x, side));
                value
            }
            Err(e) => {
                issues.record(stage, e);
                0.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DRAFT: [f64; 4] = [4.0, 5.0, 6.0, 8.0];
    const DISP: [f64; 4] = [8000.0, 10000.0, 12000.0, 16000.0];

    #[test]
    fn test_exact_knots() {
        for (x, y) in DRAFT.iter().zip(DISP.iter()) {
            let hit = interpolate(&DRAFT, &DISP, *x).unwrap();
            assert_eq!(hit.value, *y);
            assert!(hit.clamped.is_none());
        }
    }

    #[test]
    fn test_between_knots() {
        let hit = interpolate(&DRAFT, &DISP, 7.0).unwrap();
        assert!((hit.value - 14000.0).abs() < 1e-9);
    }

    #[test]
    fn test_clamps_at_both_ends() {
        let low = interpolate(&DRAFT, &DISP, 1.0).unwrap();
        assert_eq!(low.value, 8000.0);
        assert_eq!(low.clamped, Some(ClampSide::Below));

        let high = interpolate(&DRAFT, &DISP, 12.0).unwrap();
        assert_eq!(high.value, 16000.0);
        assert_eq!(high.clamped, Some(ClampSide::Above));
    }

    #[test]
    fn test_inverse_lookup_by_swapping_axes() {
        let draft = interpolate(&DISP, &DRAFT, 11000.0).unwrap();
        assert!((draft.value - 5.5).abs() < 1e-12);
    }

    #[test]
    fn test_length_mismatch_is_malformed() {
        let err = interpolate(&DRAFT, &DISP[..3], 5.0).unwrap_err();
        assert_eq!(err.error_code(), "MALFORMED_TABLE");
    }

    #[test]
    fn test_non_increasing_axis_is_malformed() {
        let err = interpolate(&[1.0, 2.0, 2.0], &[0.0, 1.0, 2.0], 1.5).unwrap_err();
        match err {
            StabilityError::MalformedTable { reason, .. } => assert!(reason.contains("index 2")),
            other => panic!("expected MalformedTable, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_table_is_malformed() {
        assert!(interpolate(&[], &[], 1.0).is_err());
    }

    #[test]
    fn test_single_point_table() {
        let hit = interpolate(&[5.0], &[42.0], 5.0).unwrap();
        assert_eq!(hit.value, 42.0);
        assert!(hit.clamped.is_none());
        assert_eq!(interpolate(&[5.0], &[42.0], 6.0).unwrap().clamped, Some(ClampSide::Above));
    }

    #[test]
    fn test_nan_query_rejected() {
        assert!(interpolate(&DRAFT, &DISP, f64::NAN).is_err());
    }

    #[test]
    fn test_fsm_pairs_at_knot() {
        let table = [[0.0, 0.0], [50.0, 120.0], [100.0, 0.0]];
        assert_eq!(interpolate_pairs(&table, 50.0).unwrap().value, 120.0);
        assert!((interpolate_pairs(&table, 75.0).unwrap().value - 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_resolve_records_clamp_and_malformed() {
        let mut issues = IssueLog::new();
        let table = Table::new("Delta", &DRAFT, &DISP);
        assert_eq!(table.resolve(20.0, Stage::DraftTrim, &mut issues), 16000.0);
        assert_eq!(issues.len(), 1);

        let bad = Table::new("KMt", &DRAFT, &DISP[..2]);
        assert_eq!(bad.resolve(5.0, Stage::DraftTrim, &mut issues), 0.0);
        let codes: Vec<_> = issues.iter().map(|i| i.error.error_code()).collect();
        assert_eq!(codes, vec!["OUT_OF_RANGE_QUERY", "MALFORMED_TABLE"]);
    }
}
