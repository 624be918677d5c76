use std::path::PathBuf;

use crate::cli::{Args, Mode};
use crate::error::ConfigError;

use super::defaults::*;

/// Physical description of the grid, in millimetres.
///
/// Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    rows: usize,
    columns: usize,
    cell_width: f64,
    cell_height: f64,
    margin: f64,
    gap: f64,
    dpi: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS as usize,
            columns: DEFAULT_COLUMNS as usize,
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
            margin: DEFAULT_MARGIN,
            gap: DEFAULT_GAP,
            dpi: DEFAULT_DPI,
        }
    }
}

impl LayoutConfig {
    /// Validate and build a layout. Cell sizes must be positive; margin and gap
    /// may be zero.
    pub fn new(
        rows: usize,
        columns: usize,
        cell_width: f64,
        cell_height: f64,
        margin: f64,
        gap: f64,
    ) -> Result<Self, ConfigError> {
        if rows == 0 {
            return Err(ConfigError::EmptyGrid("row"));
        }
        if columns == 0 {
            return Err(ConfigError::EmptyGrid("column"));
        }
        positive("cell width", cell_width)?;
        positive("cell height", cell_height)?;
        non_negative("margin", margin)?;
        non_negative("gap", gap)?;

        Ok(Self {
            rows,
            columns,
            cell_width,
            cell_height,
            margin,
            gap,
            dpi: DEFAULT_DPI,
        })
    }

    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    pub fn gap(&self) -> f64 {
        self.gap
    }

    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    /// Page width in mm
    pub fn page_width_mm(&self) -> f64 {
        span(self.columns, self.cell_width, self.gap, self.margin)
    }

    /// Page height in mm
    pub fn page_height_mm(&self) -> f64 {
        span(self.rows, self.cell_height, self.gap, self.margin)
    }
}

fn span(count: usize, cell: f64, gap: f64, margin: f64) -> f64 {
    margin * 2.0 + count as f64 * cell + (count - 1) as f64 * gap
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}

/// Style values for captioned cells.
///
/// Paddings and band height are in mm; font size and offset in points.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionStyle {
    pub font_size: f64,
    pub image_padding: f64,
    pub fallback_padding: f64,
    pub caption_band: f64,
    pub text_padding: f64,
    pub caption_offset: f64,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_CAPTION_FONT_SIZE,
            image_padding: DEFAULT_IMAGE_PADDING,
            fallback_padding: DEFAULT_FALLBACK_PADDING,
            caption_band: DEFAULT_CAPTION_BAND,
            text_padding: DEFAULT_TEXT_PADDING,
            caption_offset: DEFAULT_CAPTION_OFFSET,
        }
    }
}

/// Everything a run needs, resolved from the command line
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub layout: LayoutConfig,
    pub mode: Mode,
    pub sorted: bool,
    pub images_dir: PathBuf,
    pub output: PathBuf,
    pub font: PathBuf,
    pub background: PathBuf,
    pub caption: CaptionStyle,
}

impl RunConfig {
    /// Create a validated run configuration from CLI arguments
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let layout = LayoutConfig::new(
            args.rows as usize,
            args.cols as usize,
            args.cell_width,
            args.cell_height,
            args.margin,
            args.gap,
        )?
        .with_dpi(args.dpi);

        positive("font size", args.font_size)?;

        Ok(Self {
            layout,
            mode: args.mode,
            sorted: args.sorted(),
            images_dir: args.images.clone(),
            output: args.output.clone(),
            font: args.font.clone(),
            background: args.background.clone(),
            caption: CaptionStyle {
                font_size: args.font_size,
                ..Default::default()
            },
        })
    }
}
