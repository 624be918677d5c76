//! PDF compression helper
//!
//! Uses lopdf to compress PDF streams after printpdf generates uncompressed output.

use std::io::Cursor;

use crate::error::RenderError;

/// Compress PDF streams to reduce file size.
///
/// printpdf writes image and content streams uncompressed, so the saved bytes
/// are parsed with lopdf, every stream compressed, and the result re-saved.
pub fn compress_pdf(uncompressed: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut doc = lopdf::Document::load_mem(uncompressed).map_err(|e| {
        RenderError::PdfGeneration(format!("Failed to parse PDF for compression: {}", e))
    })?;

    doc.compress();

    let mut output = Cursor::new(Vec::new());
    doc.save_to(&mut output).map_err(|e| {
        RenderError::PdfGeneration(format!("Failed to save compressed PDF: {}", e))
    })?;

    Ok(output.into_inner())
}
