//! Conversions between physical millimetres and PDF points.
//!
//! Every measurement the user supplies is in millimetres; the document is laid
//! out in points (1/72 inch).

/// Inches per millimetre
pub const INCH_PER_MM: f64 = 0.0393701;

/// PDF points per inch
pub const POINTS_PER_INCH: f64 = 72.0;

/// Convert millimetres to inches
pub fn mm_to_inches(mm: f64) -> f64 {
    mm * INCH_PER_MM
}

/// Convert millimetres to document units (points)
pub fn to_doc_units(mm: f64) -> f64 {
    mm_to_inches(mm) * POINTS_PER_INCH
}

/// Convert document units back to millimetres
pub fn points_to_mm(pt: f64) -> f64 {
    pt / POINTS_PER_INCH / INCH_PER_MM
}
