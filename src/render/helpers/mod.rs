//! Helper utilities for PDF rendering

pub mod colors;
pub mod compress;
pub mod fonts;
pub mod layer;
pub mod text_metrics;

pub use colors::{BLACK, RED};
pub use compress::compress_pdf;
pub use fonts::CaptionFont;
pub use layer::LayerBuilder;
pub use text_metrics::{FontMetrics, TextMeasurer};
