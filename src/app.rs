//! Application orchestration: wires the CLI to the scanner, the duplicate
//! derivation, the previewer, and the output formatters.
//!
//! [`run_app`] is the single entry point used by `main`. It initializes
//! logging, loads persistent configuration, and dispatches on the parsed
//! subcommand. Scan interruption is handled here: the Ctrl+C flag cancels
//! the background worker, which stops at the next file boundary, and the
//! process exits with code 130.

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::cli::{Cli, Commands, OutputFormat, PreviewArgs, ScanArgs};
use crate::config::Config;
use crate::duplicates::{derive_duplicates, DuplicateGroup, ScanStats};
use crate::error::ExitCode;
use crate::output::{format_properties, render_scan_report, JsonReport};
use crate::preview::Previewer;
use crate::progress::ScanProgress;
use crate::scanner::{ScanConfig, ScanEvent, Scanner};
use crate::{logging, signal};

/// How often the event loop wakes to poll the shutdown flag.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Run the application with parsed CLI arguments.
///
/// # Errors
///
/// Returns an error for unexpected failures (walk errors, unreadable preview
/// targets, serialization failures). Expected outcomes, including "no
/// duplicates" and interruption, are reported through the returned
/// [`ExitCode`].
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);
    let config = Config::load();

    match cli.command {
        Commands::Scan(args) => run_scan(&args, &config, cli.quiet),
        Commands::Preview(args) => run_preview(&args, &config),
    }
}

/// Execute the scan subcommand: spawn the worker, relay progress, print the
/// report, and pick the exit code.
fn run_scan(args: &ScanArgs, config: &Config, quiet: bool) -> Result<ExitCode> {
    let handler = signal::install_handler();

    let scan_config = ScanConfig {
        follow_symlinks: args.follow_symlinks || config.follow_symlinks,
        abort_on_error: args.abort_on_error,
    };

    log::info!("Scanning {} for duplicate PDFs", args.path.display());
    let handle = Scanner::new(scan_config).spawn(&args.path)?;
    let progress = ScanProgress::new(quiet);

    loop {
        match handle.events().recv_timeout(POLL_INTERVAL) {
            Ok(ScanEvent::Progress(pct)) => progress.update(pct),
            Ok(ScanEvent::Completed { result, stats }) => {
                progress.finish();
                let groups = derive_duplicates(&result);
                let exit_code = scan_exit_code(&groups, &stats);

                match args.output {
                    OutputFormat::Text => {
                        print!("{}", render_scan_report(&groups, &stats));
                    }
                    OutputFormat::Json => {
                        let report = JsonReport::new(&groups, &result, &stats, exit_code);
                        println!(
                            "{}",
                            report
                                .to_json_pretty()
                                .context("failed to serialize scan report")?
                        );
                    }
                }
                return Ok(exit_code);
            }
            Ok(ScanEvent::Failed(msg)) => {
                progress.abandon();
                bail!("scan failed: {msg}");
            }
            Err(crossbeam_channel::RecvTimeoutError::Timeout) => {
                if handler.is_shutdown_requested() {
                    progress.abandon();
                    handle.cancel();
                    handle.join();
                    log::info!("Scan interrupted, partial results discarded");
                    return Ok(ExitCode::Interrupted);
                }
            }
            Err(crossbeam_channel::RecvTimeoutError::Disconnected) => {
                progress.abandon();
                if handler.is_shutdown_requested() {
                    return Ok(ExitCode::Interrupted);
                }
                bail!("scan worker exited without reporting a result");
            }
        }
    }
}

/// Pick the exit code for a completed scan.
fn scan_exit_code(groups: &[DuplicateGroup], stats: &ScanStats) -> ExitCode {
    if !stats.skipped.is_empty() {
        ExitCode::PartialSuccess
    } else if groups.is_empty() {
        ExitCode::NoDuplicates
    } else {
        ExitCode::Success
    }
}

/// Execute the preview subcommand: render page 0, print the properties
/// block, and optionally save the thumbnail as PNG.
fn run_preview(args: &PreviewArgs, config: &Config) -> Result<ExitCode> {
    let (width, height) = preview_geometry(args, config);

    let previewer = Previewer::with_pdfium()?;
    let preview = previewer.render(&args.file, width, height)?;

    print!("{}", format_properties(&preview.metadata));

    if let Some(out) = &args.thumbnail {
        save_thumbnail(&preview.bitmap, out)?;
        log::info!("Thumbnail written to {}", out.display());
    }

    Ok(ExitCode::Success)
}

/// Resolve the preview target size: CLI flags win over the config file.
fn preview_geometry(args: &PreviewArgs, config: &Config) -> (u32, u32) {
    (
        args.width.unwrap_or(config.preview_width),
        args.height.unwrap_or(config.preview_height),
    )
}

fn save_thumbnail(bitmap: &image::RgbImage, out: &Path) -> Result<()> {
    bitmap
        .save(out)
        .with_context(|| format!("failed to write thumbnail to {}", out.display()))
}
