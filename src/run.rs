//! One complete run: checks, layout, rendering and output

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Mode;
use crate::config::{LayoutConfig, RunConfig};
use crate::error::{RenderError, RunError};
use crate::layout::PageGeometry;
use crate::paginate::{page_count, Paginator, RenderStats};
use crate::render::canvas::Canvas;
use crate::render::cell::{CellRenderer, Decoration};
use crate::render::pdf::PdfCanvas;
use crate::source::{self, DirStatus, Ordering};
use crate::units::mm_to_inches;

/// Result of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output: PathBuf,
    pub images: usize,
    pub stats: RenderStats,
}

/// Log the computed page and cell dimensions
pub fn log_layout(layout: &LayoutConfig) {
    let width = layout.page_width_mm();
    let height = layout.page_height_mm();
    log::info!("Calculated Page Size: {}mm x {}mm", width, height);
    log::info!(
        "({:.2}in x {:.2}in)",
        mm_to_inches(width),
        mm_to_inches(height)
    );
    log::info!(
        "Image Size: {}mm x {}mm",
        layout.cell_width(),
        layout.cell_height()
    );
    log::info!(
        "Margin: {}mm, Gap: {}mm, {} dpi",
        layout.margin(),
        layout.gap(),
        layout.dpi()
    );
}

/// Find the images to lay out, creating the directory when it is missing.
///
/// Fails with a guidance error when the directory had to be created or holds
/// no supported images.
pub fn collect_images(dir: &Path, sorted: bool) -> Result<Vec<String>, RunError> {
    if source::prepare_image_dir(dir)? == DirStatus::Created {
        return Err(RunError::ImageDirCreated(dir.to_path_buf()));
    }

    let ordering = if sorted {
        Ordering::CaseInsensitive
    } else {
        Ordering::Directory
    };
    let images = source::list_images(dir, ordering)?;
    if images.is_empty() {
        return Err(RunError::NoImages(dir.to_path_buf()));
    }

    log::info!("Found {} images.", images.len());
    Ok(images)
}

/// Make sure the captioned-mode resources exist before anything is drawn
pub fn check_resources(config: &RunConfig) -> Result<(), RunError> {
    if config.mode != Mode::Captioned {
        return Ok(());
    }
    if !config.font.is_file() {
        return Err(RunError::MissingFont(config.font.clone()));
    }
    if !config.background.is_file() {
        return Err(RunError::MissingBackground(config.background.clone()));
    }
    Ok(())
}

/// Lay out `images` on `canvas`, one cell each, paging as needed
pub fn render_images<C: Canvas + ?Sized>(
    canvas: &mut C,
    geometry: &PageGeometry,
    config: &RunConfig,
    images: &[String],
) -> RenderStats {
    let decoration = match config.mode {
        Mode::Plain => Decoration::Plain,
        Mode::Captioned => {
            Decoration::captioned(canvas, &config.background, config.caption.clone())
        }
    };

    let renderer = CellRenderer::new(geometry, &config.images_dir, decoration);
    Paginator::new(&renderer).render(canvas, images)
}

/// Render `images` into finished PDF bytes
pub fn build_pdf(
    geometry: &PageGeometry,
    config: &RunConfig,
    images: &[String],
) -> Result<(Vec<u8>, RenderStats), RenderError> {
    let font = (config.mode == Mode::Captioned).then_some(config.font.as_path());
    let mut canvas = PdfCanvas::new(geometry, font)?;

    let stats = render_images(&mut canvas, geometry, config, images);
    log::debug!("Rendered {} pages", canvas.page_count());

    let bytes = canvas.finalize()?;
    Ok((bytes, stats))
}

/// Execute a run end to end and write the output PDF
pub fn run(config: &RunConfig) -> Result<RunSummary, RunError> {
    let geometry = PageGeometry::from_config(&config.layout);
    log_layout(&config.layout);

    let images = collect_images(&config.images_dir, config.sorted)?;
    check_resources(config)?;

    log::info!(
        "Grid: {} cols x {} rows ({} per page), {} page(s)",
        geometry.columns,
        geometry.rows,
        geometry.cells_per_page(),
        page_count(images.len(), geometry.cells_per_page())
    );

    let (bytes, stats) = build_pdf(&geometry, config, &images)?;
    fs::write(&config.output, bytes)?;

    if stats.placeholders > 0 {
        log::warn!(
            "{} image(s) could not be drawn and were replaced by placeholders",
            stats.placeholders
        );
    }

    Ok(RunSummary {
        output: config.output.clone(),
        images: images.len(),
        stats,
    })
}
