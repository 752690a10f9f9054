//! Pdfium-backed document rendering.
//!
//! Binds to the system pdfium library at startup. Documents are reopened per
//! preview request rather than cached: pdfium handles are not Send+Sync, and
//! the library does its own internal caching.

use std::path::{Path, PathBuf};

use pdfium_render::prelude::*;

use super::backend::{Document, DocumentBackend, RawBitmap};
use super::PreviewError;

/// Document backend over the pdfium library.
pub struct PdfiumBackend {
    pdfium: Pdfium,
}

impl PdfiumBackend {
    /// Bind to the system pdfium library.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::Backend`] if no pdfium library can be bound;
    /// callers degrade the preview rather than aborting.
    pub fn new() -> Result<Self, PreviewError> {
        let bindings = Pdfium::bind_to_system_library()
            .map_err(|e| PreviewError::Backend(e.to_string()))?;
        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }
}

impl DocumentBackend for PdfiumBackend {
    fn open<'a>(&'a self, path: &Path) -> Result<Box<dyn Document + 'a>, PreviewError> {
        let document = self
            .pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| PreviewError::Open {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        Ok(Box::new(PdfiumDocument {
            document,
            path: path.to_path_buf(),
        }))
    }
}

/// An open pdfium document. The native handle is released on drop.
struct PdfiumDocument<'a> {
    document: PdfDocument<'a>,
    path: PathBuf,
}

impl Document for PdfiumDocument<'_> {
    fn page_count(&self) -> usize {
        self.document.pages().len() as usize
    }

    fn page_size(&self, index: usize) -> Result<(f32, f32), PreviewError> {
        let page = self
            .document
            .pages()
            .get(index as u16)
            .map_err(|e| PreviewError::Page {
                path: self.path.clone(),
                page: index,
                reason: e.to_string(),
            })?;
        Ok((page.width().value, page.height().value))
    }

    fn render_page(&self, index: usize, scale: f32) -> Result<RawBitmap, PreviewError> {
        let page = self
            .document
            .pages()
            .get(index as u16)
            .map_err(|e| PreviewError::Page {
                path: self.path.clone(),
                page: index,
                reason: e.to_string(),
            })?;

        let config = PdfRenderConfig::new().scale_page_by_factor(scale);
        let bitmap = page
            .render_with_config(&config)
            .map_err(|e| PreviewError::Render {
                path: self.path.clone(),
                page: index,
                reason: e.to_string(),
            })?;

        let rgb = bitmap.as_image().into_rgb8();
        let (width, height) = rgb.dimensions();
        Ok(RawBitmap::packed(width, height, rgb.into_raw()))
    }

    fn metadata(&self) -> Vec<(String, String)> {
        self.document
            .metadata()
            .iter()
            .map(|tag| (format!("{:?}", tag.tag_type()), tag.value().to_string()))
            .collect()
    }
}
