//! JSON output formatter for scan results.
//!
//! # Output Schema
//!
//! ```json
//! {
//!   "duplicates": [
//!     {
//!       "fingerprint": "abc123...",
//!       "original": "/docs/a.pdf",
//!       "duplicates": ["/docs/copy-of-a.pdf"]
//!     }
//!   ],
//!   "summary": {
//!     "total_files": 100,
//!     "pdf_files": 40,
//!     "unique_pdfs": 38,
//!     "duplicate_groups": 2,
//!     "duplicate_files": 2,
//!     "skipped": [],
//!     "exit_code": 0,
//!     "exit_code_name": "PD000"
//!   }
//! }
//! ```

use serde::Serialize;

use crate::duplicates::{DuplicateGroup, ScanResult, ScanStats};
use crate::error::ExitCode;

/// A single duplicate group in JSON form.
#[derive(Debug, Clone, Serialize)]
pub struct JsonDuplicateGroup {
    /// Content fingerprint as a 32-character hexadecimal string
    pub fingerprint: String,
    /// First-discovered path in the group
    pub original: String,
    /// Remaining paths with identical content
    pub duplicates: Vec<String>,
}

impl JsonDuplicateGroup {
    /// Create a JSON group from a [`DuplicateGroup`].
    #[must_use]
    pub fn from_duplicate_group(group: &DuplicateGroup) -> Self {
        Self {
            fingerprint: group.fingerprint.clone(),
            original: group.original.display().to_string(),
            duplicates: group
                .duplicates
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
        }
    }
}

/// A skipped file with its reason.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSkipped {
    /// Path of the skipped file
    pub path: String,
    /// Why the file was skipped
    pub reason: String,
}

/// Summary statistics in JSON form.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSummary {
    /// All files visited by the walk, PDFs or not
    pub total_files: usize,
    /// Files selected for hashing by the `.pdf` extension match
    pub pdf_files: usize,
    /// Total size of successfully hashed PDFs, in bytes
    pub bytes_hashed: u64,
    /// Number of distinct content fingerprints
    pub unique_pdfs: usize,
    /// Number of groups with at least one duplicate
    pub duplicate_groups: usize,
    /// Total redundant copies across all groups (excluding originals)
    pub duplicate_files: usize,
    /// Files skipped because they could not be read
    pub skipped: Vec<JsonSkipped>,
    /// The exit code number
    pub exit_code: i32,
    /// The machine-readable exit code name (e.g., "PD000")
    pub exit_code_name: String,
}

/// Complete JSON report for one scan run.
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    /// Duplicate groups in discovery order
    pub duplicates: Vec<JsonDuplicateGroup>,
    /// Scan summary statistics
    pub summary: JsonSummary,
}

impl JsonReport {
    /// Build a report from the scan outputs and the chosen exit code.
    #[must_use]
    pub fn new(
        groups: &[DuplicateGroup],
        result: &ScanResult,
        stats: &ScanStats,
        exit_code: ExitCode,
    ) -> Self {
        Self {
            duplicates: groups
                .iter()
                .map(JsonDuplicateGroup::from_duplicate_group)
                .collect(),
            summary: JsonSummary {
                total_files: stats.total_files,
                pdf_files: stats.pdf_files,
                bytes_hashed: stats.bytes_hashed,
                unique_pdfs: result.len(),
                duplicate_groups: groups.len(),
                duplicate_files: groups.iter().map(DuplicateGroup::duplicate_count).sum(),
                skipped: stats
                    .skipped
                    .iter()
                    .map(|(path, reason)| JsonSkipped {
                        path: path.display().to_string(),
                        reason: reason.clone(),
                    })
                    .collect(),
                exit_code: exit_code.as_i32(),
                exit_code_name: exit_code.code_prefix().to_string(),
            },
        }
    }

    /// Serialize as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
