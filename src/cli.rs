//! Command-line interface definitions for pdfdupe.
//!
//! All CLI arguments, subcommands, and options are defined with the clap
//! derive API: global options (verbosity, error format) plus `scan` and
//! `preview` subcommands.
//!
//! # Example
//!
//! ```bash
//! # Scan a directory tree for duplicate PDFs
//! pdfdupe scan ~/Documents
//!
//! # Scan with JSON output for scripting
//! pdfdupe scan ~/Documents --output json
//!
//! # Render a first-page thumbnail and print document properties
//! pdfdupe preview ~/Documents/report.pdf --thumbnail report.png
//!
//! # Verbose mode for debugging
//! pdfdupe -v scan ~/Documents
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Duplicate PDF finder with first-page previews.
///
/// pdfdupe walks a directory tree, fingerprints every PDF by content, groups
/// identical files into original/duplicate sets, and can render a first-page
/// thumbnail with document metadata for side-by-side comparison.
#[derive(Debug, Parser)]
#[command(name = "pdfdupe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Emit errors as JSON on stderr
    #[arg(long, global = true)]
    pub json_errors: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for pdfdupe.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan a directory tree for duplicate PDFs
    Scan(ScanArgs),
    /// Render a first-page thumbnail and show document properties
    Preview(PreviewArgs),
}

/// Arguments for the scan subcommand.
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Directory to scan for duplicate PDFs
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Output format (text for humans, json for scripting)
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Follow symbolic links during the scan
    ///
    /// Warning: may cause infinite loops if symlinks form cycles.
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Abort the scan on the first unreadable PDF instead of skipping it
    #[arg(long)]
    pub abort_on_error: bool,
}

/// Arguments for the preview subcommand.
#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// PDF file to preview
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Target width for the rendered thumbnail, in pixels
    #[arg(long, value_name = "N")]
    pub width: Option<u32>,

    /// Target height for the rendered thumbnail, in pixels
    #[arg(long, value_name = "N")]
    pub height: Option<u32>,

    /// Write the rendered thumbnail to a PNG file
    #[arg(long, value_name = "OUT.png")]
    pub thumbnail: Option<PathBuf>,
}

/// Output formats for scan results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text report
    Text,
    /// Machine-readable JSON
    Json,
}
