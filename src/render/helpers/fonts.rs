use std::fs;
use std::path::Path;

use printpdf::{FontId, ParsedFont, PdfDocument};

use crate::error::RenderError;
use crate::render::helpers::text_metrics::TextMeasurer;

/// The font captions are set in, embedded in the document and measurable
pub struct CaptionFont {
    pub id: FontId,
    pub measurer: TextMeasurer,
}

impl CaptionFont {
    /// Read a TrueType/OpenType font from disk and add it to the document.
    ///
    /// printpdf subsets the font when the document is saved.
    pub fn load(doc: &mut PdfDocument, path: &Path) -> Result<Self, RenderError> {
        let bytes = fs::read(path).map_err(|e| {
            RenderError::FontLoad(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let mut warnings = Vec::new();
        let parsed = ParsedFont::from_bytes(&bytes, 0, &mut warnings).ok_or_else(|| {
            RenderError::FontLoad(format!("Failed to parse {}", path.display()))
        })?;
        let id = doc.add_font(&parsed);

        let measurer = TextMeasurer::new(bytes).ok_or_else(|| {
            RenderError::FontLoad(format!("Failed to read metrics from {}", path.display()))
        })?;

        Ok(Self { id, measurer })
    }
}
