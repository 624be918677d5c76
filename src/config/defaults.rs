/// Default number of grid rows per page
pub const DEFAULT_ROWS: u16 = 4;

/// Default number of grid columns per page
pub const DEFAULT_COLUMNS: u16 = 4;

/// Default cell width in mm
pub const DEFAULT_CELL_WIDTH: f64 = 65.0;

/// Default cell height in mm
pub const DEFAULT_CELL_HEIGHT: f64 = 105.0;

/// Default gap between cells in mm
pub const DEFAULT_GAP: f64 = 1.6;

/// Default page margin in mm
pub const DEFAULT_MARGIN: f64 = 10.0;

/// Print resolution the source images are prepared for (informational)
pub const DEFAULT_DPI: u32 = 300;

/// Default caption font size in points
pub const DEFAULT_CAPTION_FONT_SIZE: f64 = 14.0;

/// Inset of the subject image from the cell edges in mm
pub const DEFAULT_IMAGE_PADDING: f64 = 5.0;

/// Inset of the fallback cross drawn when the subject image fails, in mm
pub const DEFAULT_FALLBACK_PADDING: f64 = 2.0;

/// Height of the caption band at the bottom of each cell in mm
pub const DEFAULT_CAPTION_BAND: f64 = 14.0;

/// Horizontal padding on each side of the caption text in mm
pub const DEFAULT_TEXT_PADDING: f64 = 3.0;

/// Extra vertical nudge applied to the caption in points (positive moves down)
pub const DEFAULT_CAPTION_OFFSET: f64 = 1.0;
