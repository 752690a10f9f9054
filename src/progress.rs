//! Progress reporting using indicatif.
//!
//! Wraps a single 0-100 percent bar driven by the scan worker's progress
//! events. In quiet mode the bar is hidden entirely; the scan still runs and
//! the final report is still printed.

use indicatif::{ProgressBar, ProgressStyle};

/// A percent-based progress bar for one scan run.
pub struct ScanProgress {
    bar: Option<ProgressBar>,
}

impl ScanProgress {
    /// Create a progress bar, or a no-op reporter when `quiet` is set.
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        if quiet {
            return Self { bar: None };
        }

        let bar = ProgressBar::new(100);
        bar.set_style(
            ProgressStyle::with_template(
                "{msg} [{bar:40.cyan/blue}] {pos}% [{elapsed_precise}]",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-"),
        );
        bar.set_message("Scanning");
        Self { bar: Some(bar) }
    }

    /// Move the bar to `percent` (clamped to 100).
    pub fn update(&self, percent: u8) {
        if let Some(bar) = &self.bar {
            bar.set_position(u64::from(percent.min(100)));
        }
    }

    /// Finish the bar with a completion message.
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message("Scan complete");
        }
    }

    /// Clear the bar without a completion message, e.g. on failure or
    /// interruption.
    pub fn abandon(&self) {
        if let Some(bar) = &self.bar {
            bar.abandon();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_mode_has_no_bar() {
        let progress = ScanProgress::new(true);
        assert!(progress.bar.is_none());
        // No-op calls must not panic.
        progress.update(50);
        progress.finish();
        progress.abandon();
    }

    #[test]
    fn test_update_clamps_to_hundred() {
        let progress = ScanProgress::new(false);
        progress.update(250);
        if let Some(bar) = &progress.bar {
            assert_eq!(bar.position(), 100);
        }
        progress.abandon();
    }
}
