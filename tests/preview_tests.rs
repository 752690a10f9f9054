//! Preview tests against the real pdfium backend.
//!
//! These need a system pdfium library, which most CI images lack, so the
//! rendering tests are ignored by default. The failure-path tests run
//! everywhere: they only require that the backend binds, and are skipped
//! when it does not.

use std::fs;
use std::path::Path;

use pdfdupe::preview::Previewer;
use tempfile::TempDir;

/// A one-page PDF with a 200x100pt media box, hand-assembled.
const MINIMAL_PDF: &[u8] = b"%PDF-1.4
1 0 obj << /Type /Catalog /Pages 2 0 R >> endobj
2 0 obj << /Type /Pages /Kids [3 0 R] /Count 1 >> endobj
3 0 obj << /Type /Page /Parent 2 0 R /MediaBox [0 0 200 100] >> endobj
xref
0 4
0000000000 65535 f
trailer << /Size 4 /Root 1 0 R >>
startxref
0
%%EOF
";

fn write_minimal_pdf(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("minimal.pdf");
    fs::write(&path, MINIMAL_PDF).unwrap();
    path
}

#[test]
#[ignore = "requires a system pdfium library"]
fn test_render_minimal_pdf_first_page() {
    let dir = TempDir::new().unwrap();
    let path = write_minimal_pdf(dir.path());

    let previewer = Previewer::with_pdfium().unwrap();
    let preview = previewer.render(&path, 400, 400).unwrap();

    assert_eq!(preview.metadata.page_count, 1);
    assert_eq!(preview.metadata.file_name, "minimal.pdf");
    assert!(preview.metadata.file_size > 0);

    let (w, h) = preview.bitmap.dimensions();
    assert!(w > 0 && h > 0);
    assert!(w <= 400 && h <= 400);
}

#[test]
fn test_corrupt_file_fails_without_panicking() {
    let Ok(previewer) = Previewer::with_pdfium() else {
        // No pdfium on this machine; nothing to exercise.
        return;
    };

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("garbage.pdf");
    fs::write(&path, b"this is not a pdf at all").unwrap();

    assert!(previewer.render(&path, 300, 300).is_err());
}

#[test]
fn test_missing_file_fails_without_panicking() {
    let Ok(previewer) = Previewer::with_pdfium() else {
        return;
    };

    assert!(previewer
        .render(Path::new("/nonexistent/absent.pdf"), 300, 300)
        .is_err());
}
