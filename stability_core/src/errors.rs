//! # Error Types
//!
//! Structured error types for stability_core. The same enum serves two roles:
//!
//! - Hard failures returned as `Err` (invalid input, unreadable files)
//! - Recoverable conditions recorded as [`Issue`]s inside an analysis result,
//!   where the pipeline continued with a documented fallback
//!
//! ## Example
//!
//! ```rust
//! use stability_core::errors::{StabilityError, CalcResult};
//!
//! fn validate_lpp(lpp_m: f64) -> CalcResult<()> {
//!     if lpp_m <= 0.0 {
//!         return Err(StabilityError::InvalidInput {
//!             field: "lpp_m".to_string(),
//!             value: lpp_m.to_string(),
//!             reason: "Length between perpendiculars must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for stability_core operations
pub type CalcResult<T> = Result<T, StabilityError>;

/// Which side of a tabulated domain a query fell off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClampSide {
    /// Query was below the first axis point
    Below,
    /// Query was above the last axis point
    Above,
}

impl std::fmt::Display for ClampSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClampSide::Below => write!(f, "below"),
            ClampSide::Above => write!(f, "above"),
        }
    }
}

/// Structured error type for stability operations.
///
/// Each variant carries enough context to locate the offending table or
/// input without re-running the analysis.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum StabilityError {
    /// Axis/value arrays disagree in length, are empty, or the axis is not strictly increasing
    #[error("Malformed table '{table}': {reason}")]
    MalformedTable { table: String, reason: String },

    /// Total weight is zero, so no center of gravity exists
    #[error("Empty loading case: total displacement is {total_weight_t} t")]
    EmptyLoadingCase { total_weight_t: f64 },

    /// A hydrostatic quantity needed for trim or sinkage is zero or missing
    #[error("Degenerate hydrostatics: {quantity} - {reason}")]
    DegenerateHydrostatics { quantity: String, reason: String },

    /// A lookup fell outside the tabulated domain and was clamped to the boundary
    #[error("Query {query} on '{table}' is {side} the tabulated range [{min}, {max}]; clamped")]
    OutOfRangeQuery {
        table: String,
        query: f64,
        min: f64,
        max: f64,
        side: ClampSide,
    },

    /// An input value is invalid (out of range, not finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A tank filling references a tank the vessel does not have
    #[error("Tank not found: {tank_id}")]
    TankNotFound { tank_id: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl StabilityError {
    /// Create a MalformedTable error
    pub fn malformed_table(table: impl Into<String>, reason: impl Into<String>) -> Self {
        StabilityError::MalformedTable {
            table: table.into(),
            reason: reason.into(),
        }
    }

    /// Create a DegenerateHydrostatics error
    pub fn degenerate(quantity: impl Into<String>, reason: impl Into<String>) -> Self {
        StabilityError::DegenerateHydrostatics {
            quantity: quantity.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        StabilityError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a TankNotFound error
    pub fn tank_not_found(tank_id: impl Into<String>) -> Self {
        StabilityError::TankNotFound {
            tank_id: tank_id.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        StabilityError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Recoverable conditions have a defined fallback and never abort an analysis
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            StabilityError::MalformedTable { .. }
                | StabilityError::EmptyLoadingCase { .. }
                | StabilityError::DegenerateHydrostatics { .. }
                | StabilityError::OutOfRangeQuery { .. }
                | StabilityError::TankNotFound { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            StabilityError::MalformedTable { .. } => "MALFORMED_TABLE",
            StabilityError::EmptyLoadingCase { .. } => "EMPTY_LOADING_CASE",
            StabilityError::DegenerateHydrostatics { .. } => "DEGENERATE_HYDROSTATICS",
            StabilityError::OutOfRangeQuery { .. } => "OUT_OF_RANGE_QUERY",
            StabilityError::InvalidInput { .. } => "INVALID_INPUT",
            StabilityError::TankNotFound { .. } => "TANK_NOT_FOUND",
            StabilityError::FileError { .. } => "FILE_ERROR",
            StabilityError::SerializationError { .. } => "SERIALIZATION_ERROR",
            StabilityError::VersionMismatch { .. } => "VERSION_MISMATCH",
            StabilityError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

// ============================================================================
// Pipeline Issues
// ============================================================================

/// Pipeline stage that raised an [`Issue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Loading,
    DraftTrim,
    RightingArm,
    Areas,
    Wind,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Loading => "loading",
            Stage::DraftTrim => "draft/trim",
            Stage::RightingArm => "righting arm",
            Stage::Areas => "areas",
            Stage::Wind => "wind",
        };
        write!(f, "{}", name)
    }
}

/// A recoverable condition met while computing an analysis.
///
/// The numeric result is still produced using the documented fallback; the
/// issue tells the caller which numbers to distrust.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Issue {
    /// Stage that hit the condition
    pub stage: Stage,
    /// The condition itself
    pub error: StabilityError,
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.stage, self.error)
    }
}

/// Ordered collector for [`Issue`]s raised by the pipeline stages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssueLog {
    issues: Vec<Issue>,
}

impl IssueLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a condition and emit it as a warning event.
    pub fn record(&mut self, stage: Stage, error: StabilityError) {
        tracing::warn!(stage = %stage, code = error.error_code(), "{}", error);
        self.issues.push(Issue { stage, error });
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter()
    }

    pub fn into_vec(self) -> Vec<Issue> {
        self.issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error =
            StabilityError::malformed_table("KMt", "length 12 does not match axis length 13");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"MalformedTable\""));
        let roundtrip: StabilityError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(StabilityError::tank_not_found("FO1").error_code(), "TANK_NOT_FOUND");
        assert_eq!(
            StabilityError::EmptyLoadingCase { total_weight_t: 0.0 }.error_code(),
            "EMPTY_LOADING_CASE"
        );
        assert_eq!(
            StabilityError::degenerate("MTC", "zero").error_code(),
            "DEGENERATE_HYDROSTATICS"
        );
    }

    #[test]
    fn test_recoverable_split() {
        assert!(StabilityError::degenerate("TPC", "zero").is_recoverable());
        assert!(StabilityError::OutOfRangeQuery {
            table: "Delta".into(),
            query: 1.0,
            min: 2.0,
            max: 3.0,
            side: ClampSide::Below,
        }
        .is_recoverable());
        assert!(!StabilityError::invalid_input("lpp_m", "-1", "must be positive").is_recoverable());
        assert!(!StabilityError::file_error("open", "x.json", "missing").is_recoverable());
    }

    #[test]
    fn test_issue_log_preserves_order() {
        let mut log = IssueLog::new();
        log.record(Stage::Loading, StabilityError::tank_not_found("WB9"));
        log.record(Stage::DraftTrim, StabilityError::degenerate("MTC", "zero"));
        assert_eq!(log.len(), 2);
        let issues = log.into_vec();
        assert_eq!(issues[0].stage, Stage::Loading);
        assert_eq!(issues[1].stage, Stage::DraftTrim);
        assert!(issues[1].to_string().starts_with("[draft/trim]"));
    }
}
