//! Fingerprint grouping and original/duplicate derivation.
//!
//! # Overview
//!
//! [`ScanResult`] maps each [`FileFingerprint`] to the paths that hashed to
//! it, preserving insertion order: group order follows the order fingerprints
//! were first seen, and paths within a group follow directory-walk discovery
//! order. [`derive_duplicates`] splits every group of two or more paths into
//! an original and its duplicates.
//!
//! The "original" designation is purely positional: the first path discovered
//! by the walk is canonical, by documented policy, not by any claim about
//! authorship. Directory walk order is deterministic here (sorted traversal),
//! so the derivation is stable and reproducible for a given tree.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::scanner::FileFingerprint;

/// All paths that share one content fingerprint, in discovery order.
#[derive(Debug, Clone)]
pub struct FingerprintGroup {
    /// The shared content fingerprint.
    pub fingerprint: FileFingerprint,
    /// Paths with this fingerprint; never empty.
    pub paths: Vec<PathBuf>,
}

/// The complete grouping produced by one scan run.
///
/// Created per scan and fully replaced by the next scan; nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    groups: Vec<FingerprintGroup>,
    index: HashMap<FileFingerprint, usize>,
}

impl ScanResult {
    /// Create an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `path` to the group for `fingerprint`, creating the group on
    /// first occurrence.
    pub fn insert(&mut self, fingerprint: FileFingerprint, path: PathBuf) {
        match self.index.get(&fingerprint) {
            Some(&i) => self.groups[i].paths.push(path),
            None => {
                self.index.insert(fingerprint, self.groups.len());
                self.groups.push(FingerprintGroup {
                    fingerprint,
                    paths: vec![path],
                });
            }
        }
    }

    /// Groups in insertion order.
    #[must_use]
    pub fn groups(&self) -> &[FingerprintGroup] {
        &self.groups
    }

    /// Paths recorded for `fingerprint`, if any.
    #[must_use]
    pub fn paths_for(&self, fingerprint: FileFingerprint) -> Option<&[PathBuf]> {
        self.index
            .get(&fingerprint)
            .map(|&i| self.groups[i].paths.as_slice())
    }

    /// Number of distinct fingerprints (unique PDFs).
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the scan found no PDFs at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of hashed paths across all groups.
    #[must_use]
    pub fn path_count(&self) -> usize {
        self.groups.iter().map(|g| g.paths.len()).sum()
    }
}

/// Counters and per-file skip records for one scan run.
#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    /// All files visited by the walk, PDFs or not.
    pub total_files: usize,
    /// Files selected for hashing by the `.pdf` extension match.
    pub pdf_files: usize,
    /// Total size of successfully hashed PDFs, in bytes.
    pub bytes_hashed: u64,
    /// PDFs skipped because they could not be read, with the reason.
    pub skipped: Vec<(PathBuf, String)>,
}

/// An original file and the duplicates sharing its content.
#[derive(Debug, Clone, Serialize)]
pub struct DuplicateGroup {
    /// Content fingerprint shared by every path in the group, as hex.
    pub fingerprint: String,
    /// First-discovered path; canonical by position only.
    pub original: PathBuf,
    /// Remaining paths with identical content.
    pub duplicates: Vec<PathBuf>,
}

impl DuplicateGroup {
    /// Number of redundant copies (excludes the original).
    #[must_use]
    pub fn duplicate_count(&self) -> usize {
        self.duplicates.len()
    }
}

/// Derive the original/duplicates split from a scan result.
///
/// Pure function: filters groups with two or more paths, takes the first path
/// as the original and the rest as duplicates. Output order follows the
/// result's insertion order, and repeated calls on the same result yield
/// identical output.
#[must_use]
pub fn derive_duplicates(result: &ScanResult) -> Vec<DuplicateGroup> {
    result
        .groups()
        .iter()
        .filter(|group| group.paths.len() > 1)
        .map(|group| DuplicateGroup {
            fingerprint: group.fingerprint.to_hex(),
            original: group.paths[0].clone(),
            duplicates: group.paths[1..].to_vec(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fp(n: u128) -> FileFingerprint {
        FileFingerprint::from_u128(n)
    }

    fn sample_result() -> ScanResult {
        let mut result = ScanResult::new();
        result.insert(fp(1), PathBuf::from("/docs/a.pdf"));
        result.insert(fp(2), PathBuf::from("/docs/c.pdf"));
        result.insert(fp(1), PathBuf::from("/docs/sub/b.pdf"));
        result.insert(fp(3), PathBuf::from("/docs/d.pdf"));
        result.insert(fp(1), PathBuf::from("/docs/sub/e.pdf"));
        result
    }

    #[test]
    fn test_insert_preserves_discovery_order() {
        let result = sample_result();
        assert_eq!(result.len(), 3);
        assert_eq!(result.path_count(), 5);

        let fingerprints: Vec<_> = result.groups().iter().map(|g| g.fingerprint).collect();
        assert_eq!(fingerprints, vec![fp(1), fp(2), fp(3)]);

        assert_eq!(
            result.paths_for(fp(1)).unwrap(),
            &[
                PathBuf::from("/docs/a.pdf"),
                PathBuf::from("/docs/sub/b.pdf"),
                PathBuf::from("/docs/sub/e.pdf"),
            ]
        );
    }

    #[test]
    fn test_derive_splits_first_path_as_original() {
        let groups = derive_duplicates(&sample_result());

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].original, PathBuf::from("/docs/a.pdf"));
        assert_eq!(
            groups[0].duplicates,
            vec![
                PathBuf::from("/docs/sub/b.pdf"),
                PathBuf::from("/docs/sub/e.pdf"),
            ]
        );
        assert_eq!(groups[0].duplicate_count(), 2);
        assert_eq!(groups[0].fingerprint, fp(1).to_hex());
    }

    #[test]
    fn test_derive_is_idempotent() {
        let result = sample_result();
        let first = derive_duplicates(&result);
        let second = derive_duplicates(&result);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.fingerprint, b.fingerprint);
            assert_eq!(a.original, b.original);
            assert_eq!(a.duplicates, b.duplicates);
        }
    }

    #[test]
    fn test_derive_empty_result() {
        assert!(derive_duplicates(&ScanResult::new()).is_empty());
    }

    #[test]
    fn test_singleton_groups_are_not_duplicates() {
        let mut result = ScanResult::new();
        result.insert(fp(7), PathBuf::from("/only.pdf"));
        assert!(derive_duplicates(&result).is_empty());
    }
}
