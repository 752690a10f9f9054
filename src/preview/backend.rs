//! Document-rendering collaborator boundary.
//!
//! The previewer depends on exactly this capability set and nothing
//! PDF-specific beyond it: open a document, count its pages, measure a page,
//! rasterize a page at a scale into raw RGB pixels with a known stride, and
//! read the declared metadata dictionary. [`super::pdfium::PdfiumBackend`] is
//! the production implementation; tests substitute a fake.

use std::path::Path;

use image::RgbImage;

use super::PreviewError;

/// Opens documents. One backend instance serves many preview requests;
/// document handles themselves are scoped to a single render.
pub trait DocumentBackend {
    /// Open the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::Open`] if the file is not a valid, openable
    /// document.
    fn open<'a>(&'a self, path: &Path) -> Result<Box<dyn Document + 'a>, PreviewError>;
}

/// An open document handle. Dropping it releases the underlying native
/// resources, so the handle is closed on every exit path.
pub trait Document {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Width and height of the page at `index`, in document units.
    fn page_size(&self, index: usize) -> Result<(f32, f32), PreviewError>;

    /// Rasterize the page at `index` with a uniform scale factor.
    fn render_page(&self, index: usize, scale: f32) -> Result<RawBitmap, PreviewError>;

    /// The document's declared metadata dictionary, as key/value pairs.
    /// Empty values may be included; the previewer filters them.
    fn metadata(&self) -> Vec<(String, String)>;
}

/// Raw RGB pixel data produced by a backend.
///
/// Rows are `stride` bytes apart; only the first `width * 3` bytes of each
/// row are meaningful.
#[derive(Debug, Clone)]
pub struct RawBitmap {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Bytes per row, at least `width * 3`.
    pub stride: usize,
    /// Pixel data, `height * stride` bytes of RGB24.
    pub pixels: Vec<u8>,
}

impl RawBitmap {
    /// Construct a tightly-packed bitmap (stride == width * 3).
    #[must_use]
    pub fn packed(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            stride: width as usize * 3,
            pixels,
        }
    }

    /// Convert into an [`RgbImage`], honoring the row stride.
    ///
    /// Returns a reason string when the dimensions and buffer disagree.
    pub fn into_image(self) -> Result<RgbImage, String> {
        let row_bytes = self.width as usize * 3;
        if self.stride < row_bytes {
            return Err(format!(
                "stride {} is smaller than row width {}",
                self.stride, row_bytes
            ));
        }
        if self.pixels.len() < self.stride * self.height as usize {
            return Err(format!(
                "pixel buffer holds {} bytes, expected at least {}",
                self.pixels.len(),
                self.stride * self.height as usize
            ));
        }

        if self.stride == row_bytes {
            return RgbImage::from_raw(self.width, self.height, self.pixels)
                .ok_or_else(|| "pixel buffer does not match dimensions".to_string());
        }

        // Padded rows: copy the meaningful prefix of each row.
        let mut packed = Vec::with_capacity(row_bytes * self.height as usize);
        for row in 0..self.height as usize {
            let start = row * self.stride;
            packed.extend_from_slice(&self.pixels[start..start + row_bytes]);
        }
        RgbImage::from_raw(self.width, self.height, packed)
            .ok_or_else(|| "pixel buffer does not match dimensions".to_string())
    }
}
