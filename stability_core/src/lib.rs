//! # stability_core - Intact Ship Stability Engine
//!
//! `stability_core` computes a vessel's floating position, righting-arm
//! curve and intact stability compliance from tabulated hydrostatics and a
//! loading plan. All inputs and outputs are JSON-serializable, so the engine
//! sits behind any front end, report generator or API.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Honest Results**: Clamped lookups and malformed tables are reported
//!   alongside the numbers, never hidden
//!
//! ## Quick Start
//!
//! ```rust
//! use stability_core::calculations::analyze;
//! use stability_core::sample::{departure_case, sample_vessel};
//!
//! let result = analyze(&sample_vessel(), &departure_case(), None).unwrap();
//!
//! println!("Draft {:.2} m, GM {:.3} m", result.draft_trim.mean_draft_m, result.gm_m);
//! for check in &result.criteria.compliance {
//!     println!("{}: {}", check.name, if check.passed { "OK" } else { "FAIL" });
//! }
//! ```
//!
//! ## Modules
//!
//! - [`vessel`] - Hull particulars, hydrostatic tables, KN cross curves, tanks
//! - [`loading`] - Loading cases: cargo items, tank fillings, passengers, vehicles
//! - [`calculations`] - The stability pipeline and wind heeling
//! - [`config`] - Criteria thresholds and analysis settings
//! - [`book`] - Stability book document (vessel + settings + cases)
//! - [`file_io`] - Book loading and JSON export
//! - [`damage`] - Damage stability extension point
//! - [`sample`] - A complete sample vessel and loading conditions
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types and pipeline issues

pub mod book;
pub mod calculations;
pub mod config;
pub mod damage;
pub mod errors;
pub mod file_io;
pub mod loading;
pub mod sample;
pub mod units;
pub mod vessel;

// Re-export commonly used types at crate root for convenience
pub use book::StabilityBook;
pub use calculations::{analyze, analyze_batch, wind_heeling, AnalysisResult};
pub use config::{AnalysisConfig, CriteriaConfig};
pub use errors::{CalcResult, Issue, StabilityError};
pub use file_io::{load_book, to_json_pretty};
pub use loading::LoadingCase;
pub use vessel::VesselData;
