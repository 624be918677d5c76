use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::defaults::*;

#[derive(Parser, Debug)]
#[command(name = "grid-sheet")]
#[command(
    author,
    version,
    about = "Arrange a directory of images into a printable grid and write a paginated PDF"
)]
pub struct Args {
    /// Directory containing the images (jpg, jpeg, png)
    #[arg(short, long, default_value = "images")]
    pub images: PathBuf,

    /// Output PDF file path
    #[arg(short, long, default_value = "output.pdf")]
    pub output: PathBuf,

    /// Number of grid rows per page
    #[arg(long, default_value_t = DEFAULT_ROWS, value_parser = clap::value_parser!(u16).range(1..=32))]
    pub rows: u16,

    /// Number of grid columns per page
    #[arg(long, default_value_t = DEFAULT_COLUMNS, value_parser = clap::value_parser!(u16).range(1..=32))]
    pub cols: u16,

    /// Cell width in mm
    #[arg(long, default_value_t = DEFAULT_CELL_WIDTH)]
    pub cell_width: f64,

    /// Cell height in mm
    #[arg(long, default_value_t = DEFAULT_CELL_HEIGHT)]
    pub cell_height: f64,

    /// Page margin in mm
    #[arg(long, default_value_t = DEFAULT_MARGIN)]
    pub margin: f64,

    /// Gap between cells in mm
    #[arg(long, default_value_t = DEFAULT_GAP)]
    pub gap: f64,

    /// Resolution the images were prepared for (informational only)
    #[arg(long, default_value_t = DEFAULT_DPI)]
    pub dpi: u32,

    /// Cell decoration mode
    #[arg(short, long, value_enum, default_value = "plain")]
    pub mode: Mode,

    /// Sort images by name (always on in captioned mode)
    #[arg(long)]
    pub sort: bool,

    /// Caption font file (captioned mode)
    #[arg(long, default_value = "font.ttf")]
    pub font: PathBuf,

    /// Shared background image drawn behind every cell (captioned mode)
    #[arg(long, default_value = "background.png")]
    pub background: PathBuf,

    /// Caption font size in points
    #[arg(long, default_value_t = DEFAULT_CAPTION_FONT_SIZE)]
    pub font_size: f64,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// How each cell is decorated
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum Mode {
    /// Image stretched to fill the cell
    #[default]
    Plain,
    /// Border, shared background, fitted image and filename caption
    Captioned,
}

impl Args {
    /// Whether the image listing should be sorted by name
    pub fn sorted(&self) -> bool {
        self.sort || self.mode == Mode::Captioned
    }

    /// Log filter derived from the -v count
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}
