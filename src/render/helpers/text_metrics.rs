//! Text measurement using rustybuzz for accurate font metrics
//!
//! Captions are centred and truncated before they are drawn, so their width
//! has to be known up front.

use rustybuzz::{Face, UnicodeBuffer};

/// Font metrics for layout calculations
#[derive(Debug, Clone)]
pub struct FontMetrics {
    /// Units per em (for scaling)
    pub units_per_em: i32,
    /// Ascender height in font units
    pub ascender: i16,
}

impl FontMetrics {
    /// Create metrics from a font face
    pub fn from_face(face: &Face) -> Self {
        Self {
            units_per_em: face.units_per_em() as i32,
            ascender: face.ascender(),
        }
    }

    /// Convert font units to points at a given font size
    pub fn to_points(&self, font_units: i16, font_size: f64) -> f64 {
        (font_units as f64 / self.units_per_em as f64) * font_size
    }

    /// Ascender height in points
    pub fn ascender_pt(&self, font_size: f64) -> f64 {
        self.to_points(self.ascender, font_size)
    }
}

/// Measures text set in one font
pub struct TextMeasurer {
    font_bytes: Vec<u8>,
    metrics: FontMetrics,
}

impl TextMeasurer {
    /// Create a text measurer from font bytes
    pub fn new(font_bytes: Vec<u8>) -> Option<Self> {
        let metrics = FontMetrics::from_face(&Face::from_slice(&font_bytes, 0)?);
        Some(Self {
            font_bytes,
            metrics,
        })
    }

    pub fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    /// Measure the width of text in points
    pub fn measure_width_pt(&self, text: &str, font_size: f64) -> f64 {
        let Some(face) = Face::from_slice(&self.font_bytes, 0) else {
            return 0.0;
        };

        let mut buffer = UnicodeBuffer::new();
        buffer.push_str(text);

        let output = rustybuzz::shape(&face, &[], buffer);

        let scale = font_size / face.units_per_em() as f64;
        let total_advance: i32 = output
            .glyph_positions()
            .iter()
            .map(|pos| pos.x_advance)
            .sum();

        total_advance as f64 * scale
    }
}
