//! Streaming XXH3-128 file hasher.
//!
//! # Overview
//!
//! This module computes a [`FileFingerprint`] for a file: a 128-bit digest of
//! its entire byte content, read in fixed-size chunks so memory use stays
//! bounded regardless of file size. Two files with identical bytes always
//! produce equal fingerprints; any byte difference produces a different
//! fingerprint with overwhelming probability.
//!
//! XXH3-128 is non-cryptographic. That is sufficient here: the fingerprint is
//! a duplicate-detection key, not a security boundary.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use twox_hash::XxHash3_128;

use super::HashError;

/// Default read chunk size: 64 KiB.
pub const CHUNK_SIZE: usize = 64 * 1024;

/// A 128-bit content digest identifying a file's full byte content.
///
/// Equal fingerprints mean the files are treated as duplicates regardless of
/// name or location.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileFingerprint(u128);

impl FileFingerprint {
    /// Construct a fingerprint from its raw 128-bit value.
    #[must_use]
    pub fn from_u128(value: u128) -> Self {
        Self(value)
    }

    /// The raw 128-bit value.
    #[must_use]
    pub fn as_u128(self) -> u128 {
        self.0
    }

    /// Render as 32 lowercase hex characters.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("{:032x}", self.0)
    }
}

impl fmt::Display for FileFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

impl fmt::Debug for FileFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileFingerprint({:032x})", self.0)
    }
}

/// Computes content fingerprints for files.
#[derive(Debug, Clone)]
pub struct Hasher {
    chunk_size: usize,
}

impl Hasher {
    /// Create a hasher with the default chunk size.
    #[must_use]
    pub fn new() -> Self {
        Self {
            chunk_size: CHUNK_SIZE,
        }
    }

    /// Create a hasher with a custom chunk size (minimum 1 byte).
    #[must_use]
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
        }
    }

    /// Hash the entire content of the file at `path`.
    ///
    /// Deterministic pure function of the file's bytes: the same content
    /// always yields the same fingerprint, and the streamed digest equals
    /// the one-shot digest of the full content regardless of chunk size.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] if the file cannot be opened or read.
    pub fn hash_file(&self, path: &Path) -> Result<FileFingerprint, HashError> {
        let mut file = File::open(path).map_err(|e| HashError::from_io(path, e))?;
        let mut buf = vec![0u8; self.chunk_size];
        let mut hasher = XxHash3_128::with_seed(0);

        loop {
            let n = file
                .read(&mut buf)
                .map_err(|e| HashError::from_io(path, e))?;
            if n == 0 {
                break;
            }
            hasher.write(&buf[..n]);
        }

        Ok(FileFingerprint(hasher.finish_128()))
    }

    /// Hash a byte slice in one shot. Used by tests to cross-check streaming.
    #[must_use]
    pub fn hash_bytes(&self, bytes: &[u8]) -> FileFingerprint {
        FileFingerprint(XxHash3_128::oneshot_with_seed(0, bytes))
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}
