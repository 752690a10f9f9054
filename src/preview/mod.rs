//! First-page thumbnail rendering and document metadata extraction.
//!
//! # Overview
//!
//! [`Previewer::render`] opens a document, rasterizes page 0 into an RGB
//! bitmap scaled to fit a target display region, and extracts descriptive
//! metadata for side-by-side comparison. The document handle is scoped to the
//! call: it is released on every exit path, success or failure.
//!
//! Preview failures are local and recoverable. A corrupt file, an empty
//! document, or an unavailable rendering backend degrade the single preview
//! that requested them; they never abort a scan or crash the process.

pub mod backend;
pub mod pdfium;

use std::path::{Path, PathBuf};

use image::RgbImage;
use serde::Serialize;
use thiserror::Error;

pub use backend::{Document, DocumentBackend, RawBitmap};
pub use pdfium::PdfiumBackend;

/// Fraction of the target region the page may occupy on its constraining
/// axis. The 5% margin is a visual-fit choice.
pub const FIT_MARGIN: f32 = 0.95;

/// Errors that can occur while rendering a preview.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// The rendering backend could not be initialised.
    #[error("PDF rendering backend unavailable: {0}")]
    Backend(String),

    /// The file could not be opened as a document.
    #[error("cannot open {path}: {reason}")]
    Open {
        /// The document path.
        path: PathBuf,
        /// Backend-reported reason.
        reason: String,
    },

    /// The document declares zero pages.
    #[error("document has no pages: {0}")]
    EmptyDocument(PathBuf),

    /// A page could not be loaded.
    #[error("cannot load page {page} of {path}: {reason}")]
    Page {
        /// The document path.
        path: PathBuf,
        /// Zero-based page index.
        page: usize,
        /// Backend-reported reason.
        reason: String,
    },

    /// A page could not be rasterized.
    #[error("cannot render page {page} of {path}: {reason}")]
    Render {
        /// The document path.
        path: PathBuf,
        /// Zero-based page index.
        page: usize,
        /// Backend-reported reason.
        reason: String,
    },

    /// The page reports non-positive dimensions.
    #[error("invalid page geometry in {0}")]
    InvalidGeometry(PathBuf),

    /// The file itself could not be stat'ed or read.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// The document path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Descriptive metadata for one previewed document.
///
/// Transient: recomputed on every preview request, never cached or persisted.
/// `file_size` stays in raw bytes; formatting belongs to the presentation
/// layer.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentMetadata {
    /// Base name of the file.
    pub file_name: String,
    /// Full path.
    pub path: PathBuf,
    /// Number of pages in the document.
    pub page_count: usize,
    /// File size in bytes.
    pub file_size: u64,
    /// Declared metadata entries with non-empty values, e.g. Author or Title.
    pub info: Vec<(String, String)>,
}

/// A rendered preview: the page-0 bitmap plus document metadata.
#[derive(Debug, Clone)]
pub struct Preview {
    /// Page 0 rasterized to fit the requested target region.
    pub bitmap: RgbImage,
    /// Metadata extracted from the same document handle.
    pub metadata: DocumentMetadata,
}

/// Uniform scale factor fitting a `page_w` x `page_h` page into a
/// `target_w` x `target_h` region with the [`FIT_MARGIN`] applied.
///
/// Returns `None` for non-positive page dimensions.
#[must_use]
pub fn fit_scale(page_w: f32, page_h: f32, target_w: u32, target_h: u32) -> Option<f32> {
    if page_w <= 0.0 || page_h <= 0.0 {
        return None;
    }
    let zoom_w = target_w as f32 / page_w;
    let zoom_h = target_h as f32 / page_h;
    Some(zoom_w.min(zoom_h) * FIT_MARGIN)
}

/// Renders previews through a [`DocumentBackend`].
pub struct Previewer<B: DocumentBackend> {
    backend: B,
}

impl Previewer<PdfiumBackend> {
    /// Create a previewer over the system pdfium library.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::Backend`] if pdfium cannot be bound.
    pub fn with_pdfium() -> Result<Self, PreviewError> {
        Ok(Self::new(PdfiumBackend::new()?))
    }
}

impl<B: DocumentBackend> Previewer<B> {
    /// Create a previewer over an arbitrary backend.
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Render page 0 of `path` to fit within `target_width` x `target_height`
    /// and extract the document's metadata.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError`] if the file cannot be opened, has no pages,
    /// or cannot be rasterized. All failures are recoverable; the caller
    /// substitutes a placeholder for the failed preview.
    pub fn render(
        &self,
        path: &Path,
        target_width: u32,
        target_height: u32,
    ) -> Result<Preview, PreviewError> {
        let file_size = std::fs::metadata(path)
            .map_err(|e| PreviewError::Io {
                path: path.to_path_buf(),
                source: e,
            })?
            .len();

        // The document handle lives exactly as long as this scope; dropping
        // it releases the backend's native resources on every exit path.
        let document = self.backend.open(path)?;

        let page_count = document.page_count();
        if page_count == 0 {
            return Err(PreviewError::EmptyDocument(path.to_path_buf()));
        }

        let (page_w, page_h) = document.page_size(0)?;
        let scale = fit_scale(page_w, page_h, target_width, target_height)
            .ok_or_else(|| PreviewError::InvalidGeometry(path.to_path_buf()))?;

        let raw = document.render_page(0, scale)?;
        let bitmap = raw.into_image().map_err(|reason| PreviewError::Render {
            path: path.to_path_buf(),
            page: 0,
            reason,
        })?;

        let info: Vec<(String, String)> = document
            .metadata()
            .into_iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .collect();

        let metadata = DocumentMetadata {
            file_name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            path: path.to_path_buf(),
            page_count,
            file_size,
            info,
        };

        Ok(Preview { bitmap, metadata })
    }
}
