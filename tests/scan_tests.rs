//! End-to-end scan tests over real directory fixtures.

use std::fs;
use std::path::Path;

use pdfdupe::duplicates::{derive_duplicates, ScanResult, ScanStats};
use pdfdupe::scanner::{ScanConfig, ScanEvent, Scanner};
use tempfile::TempDir;

/// Minimal PDF-shaped content. The scanner keys on the extension and the
/// bytes, not on PDF validity, so any payload works.
fn write_pdf(dir: &Path, name: &str, content: &[u8]) {
    let mut bytes = b"%PDF-1.4\n".to_vec();
    bytes.extend_from_slice(content);
    fs::write(dir.join(name), bytes).unwrap();
}

fn run_to_completion(root: &Path, config: ScanConfig) -> (ScanResult, ScanStats) {
    let handle = Scanner::new(config).spawn(root).unwrap();
    let events: Vec<ScanEvent> = handle.events().iter().collect();
    match events.into_iter().last().unwrap() {
        ScanEvent::Completed { result, stats } => (result, stats),
        other => panic!("expected Completed, got {:?}", other),
    }
}

#[test]
fn test_copied_pdf_is_detected_as_duplicate() {
    let dir = TempDir::new().unwrap();
    write_pdf(dir.path(), "a.pdf", b"alpha document");
    write_pdf(dir.path(), "b.pdf", b"alpha document");
    write_pdf(dir.path(), "c.pdf", b"gamma document");

    let (result, stats) = run_to_completion(dir.path(), ScanConfig::default());
    let groups = derive_duplicates(&result);

    assert_eq!(result.len(), 2);
    assert_eq!(stats.pdf_files, 3);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].original, dir.path().join("a.pdf"));
    assert_eq!(groups[0].duplicates, vec![dir.path().join("b.pdf")]);
}

#[test]
fn test_duplicates_found_across_subdirectories() {
    let dir = TempDir::new().unwrap();
    let sub = dir.path().join("archive").join("old");
    fs::create_dir_all(&sub).unwrap();

    write_pdf(dir.path(), "report.pdf", b"the same bytes");
    write_pdf(&sub, "report-backup.pdf", b"the same bytes");

    let (result, _) = run_to_completion(dir.path(), ScanConfig::default());
    let groups = derive_duplicates(&result);

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].duplicate_count(), 1);
}

#[test]
fn test_non_pdf_files_are_ignored() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), b"same bytes").unwrap();
    fs::write(dir.path().join("b.txt"), b"same bytes").unwrap();
    write_pdf(dir.path(), "only.pdf", b"lone document");

    let (result, stats) = run_to_completion(dir.path(), ScanConfig::default());

    assert_eq!(stats.total_files, 3);
    assert_eq!(stats.pdf_files, 1);
    assert_eq!(result.len(), 1);
    assert!(derive_duplicates(&result).is_empty());
}

#[test]
fn test_extension_match_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    write_pdf(dir.path(), "lower.pdf", b"shared");
    write_pdf(dir.path(), "UPPER.PDF", b"shared");

    let (result, stats) = run_to_completion(dir.path(), ScanConfig::default());

    assert_eq!(stats.pdf_files, 2);
    assert_eq!(derive_duplicates(&result).len(), 1);
}

#[test]
fn test_same_name_different_content_not_grouped() {
    let dir = TempDir::new().unwrap();
    let sub = dir.path().join("other");
    fs::create_dir(&sub).unwrap();

    write_pdf(dir.path(), "invoice.pdf", b"january");
    write_pdf(&sub, "invoice.pdf", b"february");

    let (result, _) = run_to_completion(dir.path(), ScanConfig::default());

    assert_eq!(result.len(), 2);
    assert!(derive_duplicates(&result).is_empty());
}

#[test]
fn test_discovery_order_determines_original() {
    // Sorted traversal: the lexicographically first file becomes the
    // original on every run.
    let dir = TempDir::new().unwrap();
    write_pdf(dir.path(), "zz.pdf", b"payload");
    write_pdf(dir.path(), "aa.pdf", b"payload");
    write_pdf(dir.path(), "mm.pdf", b"payload");

    for _ in 0..3 {
        let (result, _) = run_to_completion(dir.path(), ScanConfig::default());
        let groups = derive_duplicates(&result);
        assert_eq!(groups[0].original, dir.path().join("aa.pdf"));
        assert_eq!(
            groups[0].duplicates,
            vec![dir.path().join("mm.pdf"), dir.path().join("zz.pdf")]
        );
    }
}

#[test]
fn test_empty_tree_completes_with_no_groups() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("empty-sub")).unwrap();

    let (result, stats) = run_to_completion(dir.path(), ScanConfig::default());

    assert!(result.is_empty());
    assert_eq!(stats.total_files, 0);
    assert_eq!(stats.bytes_hashed, 0);
}
