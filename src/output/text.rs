//! Human-readable text output.
//!
//! Two renderings live here: the scan report printed after a completed scan,
//! and the properties block shown alongside a preview.

use std::fmt::Write;

use bytesize::ByteSize;

use crate::duplicates::{DuplicateGroup, ScanStats};
use crate::preview::DocumentMetadata;

/// Render the scan report: one block per duplicate group, then a summary.
#[must_use]
pub fn render_scan_report(groups: &[DuplicateGroup], stats: &ScanStats) -> String {
    let mut out = String::new();

    if groups.is_empty() {
        out.push_str("No duplicate PDFs found.\n");
    } else {
        for (i, group) in groups.iter().enumerate() {
            let _ = writeln!(
                out,
                "Group {} ({} duplicate{}):",
                i + 1,
                group.duplicate_count(),
                if group.duplicate_count() == 1 { "" } else { "s" }
            );
            let _ = writeln!(out, "  original:  {}", group.original.display());
            for dup in &group.duplicates {
                let _ = writeln!(out, "  duplicate: {}", dup.display());
            }
            out.push('\n');
        }
    }

    let duplicate_files: usize = groups.iter().map(DuplicateGroup::duplicate_count).sum();
    let _ = writeln!(
        out,
        "Scanned {} files ({} PDFs, {} hashed), {} duplicate group{}, {} redundant file{}.",
        stats.total_files,
        stats.pdf_files,
        ByteSize::b(stats.bytes_hashed),
        groups.len(),
        if groups.len() == 1 { "" } else { "s" },
        duplicate_files,
        if duplicate_files == 1 { "" } else { "s" },
    );

    if !stats.skipped.is_empty() {
        let _ = writeln!(out, "Skipped {} unreadable file(s):", stats.skipped.len());
        for (path, reason) in &stats.skipped {
            let _ = writeln!(out, "  {} ({})", path.display(), reason);
        }
    }

    out
}

/// Render the properties block for a previewed document.
///
/// The file size is shown in KB with two decimals; metadata entries follow
/// in the order the document declares them.
#[must_use]
pub fn format_properties(metadata: &DocumentMetadata) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "File: {}", metadata.file_name);
    let _ = writeln!(out, "Path: {}", metadata.path.display());
    let _ = writeln!(out, "Pages: {}", metadata.page_count);
    let _ = writeln!(
        out,
        "File size: {:.2} KB",
        metadata.file_size as f64 / 1024.0
    );
    for (key, value) in &metadata.info {
        let _ = writeln!(out, "{key}: {value}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_groups() -> Vec<DuplicateGroup> {
        vec![DuplicateGroup {
            fingerprint: "00000000000000000000000000000001".into(),
            original: PathBuf::from("/docs/a.pdf"),
            duplicates: vec![PathBuf::from("/docs/b.pdf"), PathBuf::from("/docs/c.pdf")],
        }]
    }

    #[test]
    fn test_report_lists_original_and_duplicates() {
        let stats = ScanStats {
            total_files: 4,
            pdf_files: 3,
            bytes_hashed: 3072,
            skipped: vec![],
        };
        let report = render_scan_report(&sample_groups(), &stats);

        assert!(report.contains("Group 1 (2 duplicates):"));
        assert!(report.contains("original:  /docs/a.pdf"));
        assert!(report.contains("duplicate: /docs/b.pdf"));
        assert!(report.contains("duplicate: /docs/c.pdf"));
        assert!(report.contains("1 duplicate group"));
        assert!(report.contains("2 redundant files"));
    }

    #[test]
    fn test_report_with_no_duplicates() {
        let report = render_scan_report(&[], &ScanStats::default());
        assert!(report.starts_with("No duplicate PDFs found."));
    }

    #[test]
    fn test_report_lists_skipped_files() {
        let stats = ScanStats {
            total_files: 2,
            pdf_files: 2,
            bytes_hashed: 1024,
            skipped: vec![(PathBuf::from("/docs/locked.pdf"), "permission denied".into())],
        };
        let report = render_scan_report(&[], &stats);
        assert!(report.contains("Skipped 1 unreadable file(s):"));
        assert!(report.contains("/docs/locked.pdf (permission denied)"));
    }

    #[test]
    fn test_properties_block() {
        let metadata = DocumentMetadata {
            file_name: "report.pdf".into(),
            path: PathBuf::from("/docs/report.pdf"),
            page_count: 12,
            file_size: 2560,
            info: vec![
                ("Author".into(), "Ada".into()),
                ("Title".into(), "Quarterly".into()),
            ],
        };
        let block = format_properties(&metadata);

        assert!(block.contains("File: report.pdf"));
        assert!(block.contains("Path: /docs/report.pdf"));
        assert!(block.contains("Pages: 12"));
        assert!(block.contains("File size: 2.50 KB"));
        assert!(block.contains("Author: Ada"));
        assert!(block.contains("Title: Quarterly"));
    }
}
