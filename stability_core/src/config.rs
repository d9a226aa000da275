//! # Analysis Configuration
//!
//! Tunable inputs for one analysis: regulatory thresholds, the heel range
//! the GZ curve is sampled over, the area ranges, and optional wind. Every
//! field has a default, so `{}` is a valid configuration document.
//!
//! ## Defaults
//!
//! Thresholds follow the IMO Intact Stability Code general criteria:
//!
//! | Criterion | Default |
//! |---|---|
//! | Initial GM | 0.15 m |
//! | Area 0-30° | 0.055 m·rad |
//! | Area 0-40° | 0.090 m·rad |
//! | Area 30-40° | 0.030 m·rad |
//! | Maximum GZ | 0.20 m |
//! | Angle of maximum GZ (advisory) | 30° |
//!
//! ## Example
//!
//! ```rust
//! use stability_core::config::AnalysisConfig;
//!
//! let json = r#"{ "criteria": { "min_gm_m": 0.30 } }"#;
//! let config: AnalysisConfig = serde_json::from_str(json).unwrap();
//! assert_eq!(config.criteria.min_gm_m, 0.30);
//! assert_eq!(config.criteria.min_max_gz_m, 0.20);
//! assert_eq!(config.heel_range.end_deg, 90.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcResult, StabilityError};

/// Configuration for [`crate::calculations::analyze`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Regulatory thresholds
    pub criteria: CriteriaConfig,

    /// Heel angles the GZ curve is sampled at
    pub heel_range: AngleRange,

    /// Angle ranges to integrate GZ over, `[start_deg, end_deg]`
    pub area_ranges: Vec<[f64; 2]>,

    /// Lower any range end above the downflooding angle to that angle
    pub cap_areas_at_downflooding: bool,

    /// Beam wind speed for the wind heeling check (m/s)
    pub wind_speed_mps: Option<f64>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            criteria: CriteriaConfig::default(),
            heel_range: AngleRange::default(),
            area_ranges: vec![[0.0, 30.0], [0.0, 40.0], [30.0, 40.0]],
            cap_areas_at_downflooding: false,
            wind_speed_mps: None,
        }
    }
}

impl AnalysisConfig {
    /// Validate ranges and wind speed.
    pub fn validate(&self) -> CalcResult<()> {
        self.heel_range.validate()?;
        for [start, end] in &self.area_ranges {
            if !(start.is_finite() && end.is_finite() && end > start) {
                return Err(StabilityError::invalid_input(
                    "area_ranges",
                    format!("[{}, {}]", start, end),
                    "Area range end must be greater than its start",
                ));
            }
        }
        if let Some(speed) = self.wind_speed_mps {
            if !(speed.is_finite() && speed >= 0.0) {
                return Err(StabilityError::invalid_input(
                    "wind_speed_mps",
                    speed.to_string(),
                    "Wind speed cannot be negative",
                ));
            }
        }
        Ok(())
    }
}

/// Thresholds for the intact stability criteria. Each is individually
/// overridable; omitted fields take the IMO default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CriteriaConfig {
    pub min_gm_m: f64,
    pub min_area_0_30_mrad: f64,
    pub min_area_0_40_mrad: f64,
    pub min_area_30_40_mrad: f64,
    pub min_max_gz_m: f64,
    pub min_max_gz_angle_deg: f64,
}

impl Default for CriteriaConfig {
    fn default() -> Self {
        CriteriaConfig {
            min_gm_m: 0.15,
            min_area_0_30_mrad: 0.055,
            min_area_0_40_mrad: 0.090,
            min_area_30_40_mrad: 0.030,
            min_max_gz_m: 0.20,
            min_max_gz_angle_deg: 30.0,
        }
    }
}

/// Upper bound on the number of sampled angles in a range
pub const MAX_ANGLE_SAMPLES: usize = 10_000;

/// An evenly stepped angle range, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AngleRange {
    pub start_deg: f64,
    pub end_deg: f64,
    pub step_deg: f64,
}

impl Default for AngleRange {
    fn default() -> Self {
        AngleRange {
            start_deg: 0.0,
            end_deg: 90.0,
            step_deg: 1.0,
        }
    }
}

impl AngleRange {
    pub fn new(start_deg: f64, end_deg: f64, step_deg: f64) -> Self {
        Self {
            start_deg,
            end_deg,
            step_deg,
        }
    }

    pub fn validate(&self) -> CalcResult<()> {
        if !(self.step_deg.is_finite() && self.step_deg > 0.0) {
            return Err(StabilityError::invalid_input(
                "heel_range.step_deg",
                self.step_deg.to_string(),
                "Step must be positive",
            ));
        }
        if !(self.start_deg.is_finite()
            && self.end_deg.is_finite()
            && self.end_deg >= self.start_deg)
        {
            return Err(StabilityError::invalid_input(
                "heel_range",
                format!("{}..{}", self.start_deg, self.end_deg),
                "End must not be below start",
            ));
        }
        let samples = (self.end_deg - self.start_deg) / self.step_deg + 1.0;
        if samples > MAX_ANGLE_SAMPLES as f64 {
            return Err(StabilityError::invalid_input(
                "heel_range.step_deg",
                self.step_deg.to_string(),
                format!("Range would sample more than {} angles", MAX_ANGLE_SAMPLES),
            ));
        }
        Ok(())
    }

    /// Sampled angles. The end is included when it falls on a step.
    pub fn angles(&self) -> Vec<f64> {
        if self.validate().is_err() {
            return Vec::new();
        }
        let steps = ((self.end_deg - self.start_deg) / self.step_deg + 1e-9).floor() as usize;
        (0..=steps).map(|i| self.start_deg + i as f64 * self.step_deg).collect()
    }
}
