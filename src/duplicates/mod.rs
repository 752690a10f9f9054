//! Duplicate grouping: the scan result model and the original/duplicate
//! derivation.

pub mod groups;

pub use groups::{derive_duplicates, DuplicateGroup, FingerprintGroup, ScanResult, ScanStats};
