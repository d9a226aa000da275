//! # Stability Book
//!
//! The `StabilityBook` is the root document for one vessel: its static data,
//! the analysis settings, and the loading conditions to check. Books are
//! human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! StabilityBook
//! ├── meta: BookMetadata (schema version, vessel name, prepared by, timestamps)
//! ├── config: AnalysisConfig (criteria thresholds, heel range, wind)
//! ├── vessel: VesselData (hull, hydrostatics, tanks)
//! └── cases: Vec<LoadingCase> (named loading conditions)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use stability_core::book::StabilityBook;
//! use stability_core::sample::{departure_case, sample_vessel};
//!
//! let mut book = StabilityBook::new(sample_vessel(), "Chief Officer");
//! book.add_case(departure_case());
//!
//! let json = serde_json::to_string_pretty(&book).unwrap();
//! assert!(json.contains("MV Sample Trader"));
//! assert!(book.case("Departure").is_some());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculations::{analyze, analyze_batch, AnalysisResult};
use crate::config::AnalysisConfig;
use crate::errors::{CalcResult, StabilityError};
use crate::loading::LoadingCase;
use crate::vessel::VesselData;

/// Current schema version for stability book files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root stability book container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StabilityBook {
    /// Book metadata (version, vessel, author)
    pub meta: BookMetadata,

    /// Analysis settings shared by every case
    #[serde(default)]
    pub config: AnalysisConfig,

    /// The vessel these conditions apply to
    pub vessel: VesselData,

    /// Loading conditions, in book order
    #[serde(default)]
    pub cases: Vec<LoadingCase>,
}

impl StabilityBook {
    /// Create a book for a vessel with default settings and no cases.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stability_core::book::StabilityBook;
    /// use stability_core::sample::sample_vessel;
    ///
    /// let book = StabilityBook::new(sample_vessel(), "J. Mate");
    /// assert_eq!(book.meta.vessel_name, "MV Sample Trader");
    /// assert!(book.cases.is_empty());
    /// ```
    pub fn new(vessel: VesselData, prepared_by: impl Into<String>) -> Self {
        let now = Utc::now();
        StabilityBook {
            meta: BookMetadata {
                version: SCHEMA_VERSION.to_string(),
                vessel_name: vessel.name.clone(),
                prepared_by: prepared_by.into(),
                created: now,
                modified: now,
            },
            config: AnalysisConfig::default(),
            vessel,
            cases: Vec::new(),
        }
    }

    /// Append a loading case.
    pub fn add_case(&mut self, case: LoadingCase) {
        self.cases.push(case);
        self.touch();
    }

    /// Find a loading case by name.
    pub fn case(&self, name: &str) -> Option<&LoadingCase> {
        self.cases.iter().find(|c| c.name == name)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Analyze one named case with the book's settings.
    ///
    /// # Errors
    ///
    /// * `InvalidInput` - no case has that name, or validation fails
    pub fn analyze_case(&self, name: &str) -> CalcResult<AnalysisResult> {
        let case = self.case(name).ok_or_else(|| {
            StabilityError::invalid_input(
                "case",
                name,
                "No loading case with this name in the book",
            )
        })?;
        analyze(&self.vessel, case, Some(&self.config))
    }

    /// Analyze every case with the book's settings, in book order.
    pub fn analyze_all(&self) -> Vec<CalcResult<AnalysisResult>> {
        analyze_batch(&self.vessel, &self.cases, Some(&self.config))
    }
}

/// Book metadata stored in the file header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Vessel the book was prepared for
    pub vessel_name: String,

    /// Who prepared the conditions
    pub prepared_by: String,

    /// When the book was created
    pub created: DateTime<Utc>,

    /// When the book was last modified
    pub modified: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{arrival_case, departure_case, sample_vessel};

    #[test]
    fn test_new_book() {
        let book = StabilityBook::new(sample_vessel(), "Master");
        assert_eq!(book.meta.version, SCHEMA_VERSION);
        assert_eq!(book.meta.prepared_by, "Master");
        assert_eq!(book.meta.created, book.meta.modified);
    }

    #[test]
    fn test_case_lookup() {
        let mut book = StabilityBook::new(sample_vessel(), "Master");
        book.add_case(departure_case());
        book.add_case(arrival_case());
        assert_eq!(book.case("Arrival").map(|c| c.tanks.len()), Some(4));
        assert!(book.case("Dry dock").is_none());
        assert!(book.meta.modified >= book.meta.created);
    }

    #[test]
    fn test_analyze_case_by_name() {
        let mut book = StabilityBook::new(sample_vessel(), "Master");
        book.add_case(departure_case());
        assert_eq!(book.analyze_case("Departure").unwrap().case_name, "Departure");
        assert!(book.analyze_case("Missing").is_err());
        assert_eq!(book.analyze_all().len(), 1);
    }

    #[test]
    fn test_missing_config_defaults() {
        let book = StabilityBook::new(sample_vessel(), "Master");
        let mut value = serde_json::to_value(&book).unwrap();
        value.as_object_mut().unwrap().remove("config");
        let parsed: StabilityBook = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.config, AnalysisConfig::default());
    }
}
