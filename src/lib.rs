//! pdfdupe - Duplicate PDF Finder
//!
//! A cross-platform Rust CLI application for finding duplicate PDFs by
//! content fingerprint (XXH3-128), with first-page thumbnail previews and
//! document metadata for side-by-side comparison.

pub mod app;
pub mod cli;
pub mod config;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod output;
pub mod preview;
pub mod progress;
pub mod scanner;
pub mod signal;

pub use app::run_app;
