//! Output formatters for scan results and previews.
//!
//! - Text for humans: duplicate groups plus a summary, and the properties
//!   block shown next to a preview
//! - JSON for automation and scripting
//!
//! # Example
//!
//! ```no_run
//! use pdfdupe::duplicates::{derive_duplicates, ScanResult, ScanStats};
//! use pdfdupe::error::ExitCode;
//! use pdfdupe::output::JsonReport;
//!
//! let result = ScanResult::new();
//! let groups = derive_duplicates(&result);
//! let report = JsonReport::new(&groups, &result, &ScanStats::default(), ExitCode::NoDuplicates);
//! println!("{}", report.to_json_pretty().unwrap());
//! ```

pub mod json;
pub mod text;

pub use json::JsonReport;
pub use text::{format_properties, render_scan_report};
