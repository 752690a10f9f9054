//! Scanner module: directory traversal, content hashing, and the background
//! scan worker.
//!
//! # Architecture
//!
//! The scanner is divided into submodules:
//! - [`walker`]: deterministic recursive file enumeration
//! - [`hasher`]: streaming XXH3-128 content fingerprints
//!
//! [`Scanner::spawn`] runs one scan on a background worker thread and hands
//! back a [`ScanHandle`]. The worker communicates exclusively through a
//! channel of [`ScanEvent`]s: zero or more `Progress` updates in
//! non-decreasing order, then exactly one terminal `Completed` or `Failed`.
//! There is no shared mutable scan state between the worker and its consumer.
//!
//! # Example
//!
//! ```no_run
//! use pdfdupe::scanner::{ScanConfig, ScanEvent, Scanner};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), pdfdupe::scanner::ScanError> {
//! let scanner = Scanner::new(ScanConfig::default());
//! let handle = scanner.spawn(Path::new("/home/user/Documents"))?;
//! for event in handle.events() {
//!     match event {
//!         ScanEvent::Progress(pct) => println!("{pct}%"),
//!         ScanEvent::Completed { result, .. } => {
//!             println!("{} unique PDFs", result.len());
//!             break;
//!         }
//!         ScanEvent::Failed(msg) => {
//!             eprintln!("scan failed: {msg}");
//!             break;
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod hasher;
pub mod walker;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

use crossbeam_channel::{Receiver, Sender};

use crate::duplicates::{ScanResult, ScanStats};

pub use hasher::{FileFingerprint, Hasher, CHUNK_SIZE};
pub use walker::Walker;

/// File extension selecting files for hashing, matched case-insensitively.
pub const PDF_EXTENSION: &str = "pdf";

/// Check whether a path has the `.pdf` extension, case-insensitively.
#[must_use]
pub fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(PDF_EXTENSION))
}

/// Configuration for directory walking.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Follow symbolic links during traversal. Off by default; non-followed
    /// symlink entries are skipped entirely.
    pub follow_symlinks: bool,
}

/// Configuration for a scan run.
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// Follow symbolic links during the walk.
    pub follow_symlinks: bool,

    /// Treat a per-file read failure as fatal to the whole scan.
    ///
    /// Off by default: unreadable PDFs are skipped with a warning and
    /// recorded in [`ScanStats::skipped`].
    pub abort_on_error: bool,
}

/// Errors that abort a directory walk.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// Permission was denied when accessing a file or directory.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// The specified path was not found.
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// The specified path is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A symlink loop was detected while following links.
    #[error("Symlink loop detected at {0}")]
    WalkLoop(PathBuf),

    /// An I/O error occurred while enumerating the tree.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The scan worker thread could not be spawned.
    #[error("Failed to spawn scan worker: {0}")]
    Spawn(#[source] std::io::Error),
}

impl ScanError {
    pub(crate) fn from_io(path: &Path, error: std::io::Error) -> Self {
        use std::io::ErrorKind;
        match error.kind() {
            ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: error,
            },
        }
    }
}

/// Errors that can occur while hashing a single file.
#[derive(thiserror::Error, Debug)]
pub enum HashError {
    /// The specified file was not found.
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Permission was denied when reading the file.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// An I/O error occurred while reading the file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl HashError {
    pub(crate) fn from_io(path: &Path, error: std::io::Error) -> Self {
        use std::io::ErrorKind;
        match error.kind() {
            ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: error,
            },
        }
    }
}

/// An event emitted by a scan worker.
///
/// For a given scan, `Progress` percentages are non-decreasing and exactly
/// one terminal event (`Completed` or `Failed`) is emitted, always last. A
/// cancelled scan emits no terminal event; its channel simply disconnects.
#[derive(Debug, Clone)]
pub enum ScanEvent {
    /// Integer percentage of files processed so far (0-100).
    Progress(u8),

    /// The walk finished; carries the full grouping and run statistics.
    Completed {
        /// Fingerprint groups in discovery order.
        result: ScanResult,
        /// Counters and per-file skip records for the run.
        stats: ScanStats,
    },

    /// The scan aborted; partial results are discarded.
    Failed(String),
}

/// Handle to an in-flight background scan.
///
/// Dropping the handle cancels the scan and joins the worker, so at most one
/// scan owned by a caller can ever be writing results.
#[derive(Debug)]
pub struct ScanHandle {
    events: Receiver<ScanEvent>,
    cancel: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl ScanHandle {
    /// The event receiver for this scan.
    #[must_use]
    pub fn events(&self) -> &Receiver<ScanEvent> {
        &self.events
    }

    /// Request cancellation. The worker stops between files and emits no
    /// further events.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::SeqCst)
    }

    /// Wait for the worker thread to finish.
    pub fn join(mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for ScanHandle {
    fn drop(&mut self) {
        self.cancel();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

/// Runs duplicate scans on background worker threads.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    /// Create a scanner with the given configuration.
    #[must_use]
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Start scanning `root` on a background worker thread.
    ///
    /// Only one scan should be in flight per caller; drop (or cancel and
    /// join) the previous handle before spawning a new scan.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Spawn`] if the worker thread cannot be created.
    pub fn spawn(&self, root: &Path) -> Result<ScanHandle, ScanError> {
        let (tx, rx) = crossbeam_channel::unbounded();
        let cancel = Arc::new(AtomicBool::new(false));
        let config = self.config.clone();
        let root = root.to_path_buf();
        let flag = Arc::clone(&cancel);

        let worker = std::thread::Builder::new()
            .name("pdfdupe-scan".into())
            .spawn(move || run_scan(&root, &config, &flag, &tx))
            .map_err(ScanError::Spawn)?;

        Ok(ScanHandle {
            events: rx,
            cancel,
            worker: Some(worker),
        })
    }
}

/// The worker loop: enumerate, hash, group, report.
fn run_scan(root: &Path, config: &ScanConfig, cancel: &AtomicBool, tx: &Sender<ScanEvent>) {
    let walker_config = WalkerConfig {
        follow_symlinks: config.follow_symlinks,
    };
    let files = match Walker::new(root, walker_config).collect_files() {
        Ok(files) => files,
        Err(e) => {
            log::error!("Scan of {} aborted: {}", root.display(), e);
            let _ = tx.send(ScanEvent::Failed(e.to_string()));
            return;
        }
    };

    let total = files.len();
    let mut result = ScanResult::new();
    let mut stats = ScanStats {
        total_files: total,
        ..ScanStats::default()
    };

    if total == 0 {
        // Defined zero-file behavior: guaranteed success, no division.
        let _ = tx.send(ScanEvent::Progress(100));
        let _ = tx.send(ScanEvent::Completed { result, stats });
        return;
    }

    let hasher = Hasher::new();
    for (processed, path) in files.into_iter().enumerate() {
        if cancel.load(Ordering::SeqCst) {
            log::debug!("Scan of {} cancelled", root.display());
            return;
        }

        if is_pdf(&path) {
            stats.pdf_files += 1;
            match hasher.hash_file(&path) {
                Ok(fingerprint) => {
                    stats.bytes_hashed += fs::metadata(&path).map_or(0, |m| m.len());
                    result.insert(fingerprint, path);
                }
                Err(e) if config.abort_on_error => {
                    log::error!("Scan aborted: {}", e);
                    let _ = tx.send(ScanEvent::Failed(e.to_string()));
                    return;
                }
                Err(e) => {
                    log::warn!("Skipping unreadable PDF: {}", e);
                    stats.skipped.push((path, e.to_string()));
                }
            }
        }

        // Integer floor of processed/total, including non-PDF files.
        let pct = ((processed + 1) * 100 / total) as u8;
        let _ = tx.send(ScanEvent::Progress(pct));
    }

    log::info!(
        "Scan complete: {} unique PDFs across {} files",
        result.len(),
        stats.total_files
    );
    let _ = tx.send(ScanEvent::Completed { result, stats });
}
