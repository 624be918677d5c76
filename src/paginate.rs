//! Splitting images into pages and driving page creation

use crate::render::canvas::Canvas;
use crate::render::cell::CellRenderer;

/// The images assigned to one page, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageBatch<'a, T> {
    /// 0-based page number
    pub page: usize,
    pub images: &'a [T],
}

/// Number of pages needed for `count` images
pub fn page_count(count: usize, cells_per_page: usize) -> usize {
    count.div_ceil(cells_per_page)
}

/// Split `images` into page-sized batches. Every batch is full except possibly
/// the last, and no batch is empty.
pub fn paginate<T>(images: &[T], cells_per_page: usize) -> Vec<ImageBatch<'_, T>> {
    assert!(cells_per_page > 0, "a page must hold at least one cell");

    images
        .chunks(cells_per_page)
        .enumerate()
        .map(|(page, images)| ImageBatch { page, images })
        .collect()
}

/// Totals for a rendered document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub pages: usize,
    pub cells: usize,
    pub placeholders: usize,
}

/// Lays out batches page by page onto a canvas
pub struct Paginator<'r, 'g> {
    renderer: &'r CellRenderer<'g>,
}

impl<'r, 'g> Paginator<'r, 'g> {
    pub fn new(renderer: &'r CellRenderer<'g>) -> Self {
        Self { renderer }
    }

    /// Render every image, starting on the canvas's current page and opening a
    /// new page before each later batch.
    pub fn render<C, S>(&self, canvas: &mut C, images: &[S]) -> RenderStats
    where
        C: Canvas + ?Sized,
        S: AsRef<str>,
    {
        let cells_per_page = self.renderer.geometry().cells_per_page();
        let mut stats = RenderStats::default();

        for batch in paginate(images, cells_per_page) {
            if batch.page > 0 {
                canvas.new_page();
            }
            log::info!("Processing page {}...", batch.page + 1);

            for (index, image) in batch.images.iter().enumerate() {
                let report = self.renderer.render_cell(canvas, index, image.as_ref());
                stats.placeholders += report.placeholders;
                stats.cells += 1;
            }
            stats.pages += 1;
        }

        stats
    }
}
