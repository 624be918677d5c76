//! Rendering of image cells onto a document

pub mod canvas;
pub mod caption;
pub mod cell;
pub mod helpers;
pub mod pdf;

// Re-export commonly used items for convenience
pub use canvas::{Canvas, ImageFit, ImageHandle, StrokeStyle, TextAlign, TextOptions};
pub use caption::{caption_text, fit_line, CaptionSpec};
pub use cell::{CellRenderer, CellReport, Decoration};
pub use pdf::PdfCanvas;
