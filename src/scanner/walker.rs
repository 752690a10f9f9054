//! Directory walker for file discovery.
//!
//! # Overview
//!
//! This module provides the [`Walker`] struct for enumerating every file under
//! a root directory. Traversal is single-threaded and sorted by file name, so
//! discovery order is deterministic for a given tree. That matters because
//! the first-discovered path in a fingerprint group becomes the "original".
//!
//! # Symlinks
//!
//! Symbolic links are not followed unless [`WalkerConfig::follow_symlinks`] is
//! set. Non-followed symlink entries are skipped entirely: they count neither
//! toward progress totals nor toward fingerprint groups. This also makes
//! directory cycles impossible in the default configuration.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{ScanError, WalkerConfig};

/// Enumerates all regular files under a root directory.
#[derive(Debug)]
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root.
    #[must_use]
    pub fn new(root: &Path, config: WalkerConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            config,
        }
    }

    /// Collect every regular file under the root, in sorted discovery order.
    ///
    /// The returned list includes files of every type; extension filtering is
    /// the scanner's job, since non-PDF files still count toward progress.
    ///
    /// # Errors
    ///
    /// Any enumeration failure aborts the walk: a missing root, a root that is
    /// not a directory, or an unreadable subtree all return [`ScanError`] and
    /// discard partial results.
    pub fn collect_files(&self) -> Result<Vec<PathBuf>, ScanError> {
        let metadata = std::fs::metadata(&self.root)
            .map_err(|e| ScanError::from_io(&self.root, e))?;
        if !metadata.is_dir() {
            return Err(ScanError::NotADirectory(self.root.clone()));
        }

        let mut files = Vec::new();
        let walk = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .sort_by_file_name();

        for entry in walk {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map_or_else(|| self.root.clone(), Path::to_path_buf);
                match e.into_io_error() {
                    Some(io) => ScanError::from_io(&path, io),
                    None => ScanError::WalkLoop(path),
                }
            })?;

            if entry.file_type().is_file() {
                files.push(entry.into_path());
            } else if entry.file_type().is_symlink() {
                log::trace!("Skipping symlink: {}", entry.path().display());
            }
        }

        log::debug!(
            "Walked {}: {} files discovered",
            self.root.display(),
            files.len()
        );
        Ok(files)
    }
}
