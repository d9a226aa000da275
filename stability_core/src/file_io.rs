//! # File I/O Module
//!
//! Reads stability books and exports results:
//! - **Load**: read, parse, and validate the schema version of a book
//! - **Export**: pretty JSON for any result record
//!
//! ## File Format
//!
//! Books are JSON documents whose `meta.version` carries the schema version.
//! Files from a newer minor version than this build understands are refused
//! while the schema is 0.x.
//!
//! ## Example
//!
//! ```rust,no_run
//! use stability_core::file_io::{load_book, to_json_pretty};
//! use std::path::Path;
//!
//! let book = load_book(Path::new("trader.book.json"))?;
//! for result in book.analyze_all() {
//!     println!("{}", to_json_pretty(&result?)?);
//! }
//! # Ok::<(), stability_core::errors::StabilityError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::book::{StabilityBook, SCHEMA_VERSION};
use crate::errors::{CalcResult, StabilityError};

/// Load a stability book from disk.
///
/// # Errors
///
/// * `FileError` - the file cannot be read
/// * `SerializationError` - the contents are not a valid book
/// * `VersionMismatch` - the schema version is not supported
pub fn load_book(path: &Path) -> CalcResult<StabilityBook> {
    let contents = fs::read_to_string(path).map_err(|e| {
        StabilityError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let book = parse_book(&contents).map_err(|e| match e {
        StabilityError::SerializationError { reason } => StabilityError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), reason),
        },
        other => other,
    })?;

    tracing::debug!(
        path = %path.display(),
        vessel = %book.meta.vessel_name,
        cases = book.cases.len(),
        "book loaded"
    );
    Ok(book)
}

/// Parse a stability book from a JSON string.
pub fn parse_book(json: &str) -> CalcResult<StabilityBook> {
    let book: StabilityBook =
        serde_json::from_str(json).map_err(|e| StabilityError::SerializationError {
            reason: e.to_string(),
        })?;
    validate_version(&book.meta.version)?;
    Ok(book)
}

/// Serialize any record as indented JSON.
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> CalcResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| StabilityError::SerializationError {
        reason: e.to_string(),
    })
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || StabilityError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let parse = |v: &str| -> Option<Vec<u32>> { v.split('.').map(|p| p.parse().ok()).collect() };
    let (Some(file_parts), Some(current_parts)) = (parse(file_version), parse(SCHEMA_VERSION))
    else {
        return Err(mismatch());
    };
    if file_parts.is_empty() || file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // 0.x: the file's minor must not exceed ours
    if current_parts[0] == 0 {
        if let (Some(file_minor), Some(our_minor)) = (file_parts.get(1), current_parts.get(1)) {
            if file_minor > our_minor {
                return Err(mismatch());
            }
        }
    }

    Ok(())
}
