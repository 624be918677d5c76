//! Page geometry and cell placement
//!
//! All values here are in document units (points). Coordinates use a top-left
//! origin with y growing downward; the PDF backend flips them when drawing.

use crate::config::LayoutConfig;
use crate::units::to_doc_units;

/// An axis-aligned rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Shrink by `amount` on every side, clamping at zero size
    pub fn inset(&self, amount: f64) -> Rect {
        Rect {
            x: self.x + amount,
            y: self.y + amount,
            width: (self.width - amount * 2.0).max(0.0),
            height: (self.height - amount * 2.0).max(0.0),
        }
    }

    /// Remove `amount` from the bottom edge
    pub fn trim_bottom(&self, amount: f64) -> Rect {
        Rect {
            height: (self.height - amount).max(0.0),
            ..*self
        }
    }
}

/// Page and cell dimensions derived from a [`LayoutConfig`]
#[derive(Debug, Clone, PartialEq)]
pub struct PageGeometry {
    pub rows: usize,
    pub columns: usize,
    pub page_width: f64,
    pub page_height: f64,
    pub cell_width: f64,
    pub cell_height: f64,
    pub margin: f64,
    pub gap: f64,
}

impl PageGeometry {
    pub fn from_config(config: &LayoutConfig) -> Self {
        let rows = config.rows();
        let columns = config.columns();
        let cell_width = to_doc_units(config.cell_width());
        let cell_height = to_doc_units(config.cell_height());
        let margin = to_doc_units(config.margin());
        let gap = to_doc_units(config.gap());

        let page_width =
            margin * 2.0 + columns as f64 * cell_width + (columns - 1) as f64 * gap;
        let page_height = margin * 2.0 + rows as f64 * cell_height + (rows - 1) as f64 * gap;

        Self {
            rows,
            columns,
            page_width,
            page_height,
            cell_width,
            cell_height,
            margin,
            gap,
        }
    }

    pub fn cells_per_page(&self) -> usize {
        self.rows * self.columns
    }

    /// Top-left corner of the cell at `index` (row-major, 0-based).
    ///
    /// Panics when `index >= cells_per_page()`.
    pub fn cell_origin(&self, index: usize) -> (f64, f64) {
        assert!(
            index < self.cells_per_page(),
            "cell index {} out of range for {}x{} grid",
            index,
            self.columns,
            self.rows
        );

        let row = index / self.columns;
        let col = index % self.columns;

        let x = self.margin + col as f64 * (self.cell_width + self.gap);
        let y = self.margin + row as f64 * (self.cell_height + self.gap);
        (x, y)
    }

    /// Full bounds of the cell at `index`
    pub fn cell_rect(&self, index: usize) -> Rect {
        let (x, y) = self.cell_origin(index);
        Rect::new(x, y, self.cell_width, self.cell_height)
    }
}

/// Largest rectangle with the image's aspect ratio that fits in `bounds`,
/// centred on both axes.
pub fn fit_within(image_width: f64, image_height: f64, bounds: Rect) -> Rect {
    if image_width <= 0.0 || image_height <= 0.0 {
        return bounds;
    }

    let scale = (bounds.width / image_width).min(bounds.height / image_height);
    let width = image_width * scale;
    let height = image_height * scale;

    Rect {
        x: bounds.x + (bounds.width - width) / 2.0,
        y: bounds.y + (bounds.height - height) / 2.0,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn geometry(rows: usize, columns: usize, margin: f64, gap: f64) -> PageGeometry {
        let config = LayoutConfig::new(rows, columns, 65.0, 105.0, margin, gap).unwrap();
        PageGeometry::from_config(&config)
    }

    #[test]
    fn test_page_size_identity() {
        for &(rows, cols) in &[(1, 1), (1, 5), (4, 4), (3, 7), (10, 2)] {
            for &(margin, gap) in &[(0.0, 0.0), (10.0, 1.6), (3.3, 7.25)] {
                let g = geometry(rows, cols, margin, gap);
                let expected_w = 2.0 * g.margin
                    + cols as f64 * g.cell_width
                    + (cols as f64 - 1.0) * g.gap;
                let expected_h = 2.0 * g.margin
                    + rows as f64 * g.cell_height
                    + (rows as f64 - 1.0) * g.gap;
                assert!((g.page_width - expected_w).abs() < EPS);
                assert!((g.page_height - expected_h).abs() < EPS);
            }
        }
    }

    #[test]
    fn test_page_size_matches_converted_mm() {
        let config = LayoutConfig::default();
        let g = PageGeometry::from_config(&config);
        assert!((g.page_width - to_doc_units(config.page_width_mm())).abs() < EPS);
        assert!((g.page_height - to_doc_units(config.page_height_mm())).abs() < EPS);
    }

    #[test]
    fn test_first_cell_at_margin() {
        let g = geometry(4, 4, 10.0, 1.6);
        let (x, y) = g.cell_origin(0);
        assert!((x - g.margin).abs() < EPS);
        assert!((y - g.margin).abs() < EPS);
    }

    #[test]
    fn test_second_row_wraps() {
        let g = geometry(4, 3, 10.0, 1.6);
        let (x, y) = g.cell_origin(3);
        assert!((x - g.margin).abs() < EPS);
        assert!((y - (g.margin + g.cell_height + g.gap)).abs() < EPS);
    }

    #[test]
    fn test_first_row_monotonic() {
        let g = geometry(2, 5, 10.0, 1.6);
        let origins: Vec<(f64, f64)> = (0..5).map(|i| g.cell_origin(i)).collect();
        for pair in origins.windows(2) {
            assert_eq!(pair[0].1, pair[1].1);
            assert!(pair[1].0 > pair[0].0);
        }
    }

    #[test]
    fn test_last_cell_touches_margin() {
        let g = geometry(4, 4, 10.0, 1.6);
        let last = g.cell_rect(15);
        assert!((last.right() + g.margin - g.page_width).abs() < EPS);
        assert!((last.bottom() + g.margin - g.page_height).abs() < EPS);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_index_panics() {
        let g = geometry(2, 2, 10.0, 1.6);
        g.cell_origin(4);
    }

    #[test]
    fn test_fit_within_wide_image() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        let fitted = fit_within(200.0, 100.0, bounds);
        assert!((fitted.width - 100.0).abs() < EPS);
        assert!((fitted.height - 50.0).abs() < EPS);
        assert!((fitted.y - 25.0).abs() < EPS);
        assert!(fitted.x.abs() < EPS);
    }

    #[test]
    fn test_fit_within_tall_image() {
        let bounds = Rect::new(10.0, 10.0, 100.0, 50.0);
        let fitted = fit_within(100.0, 100.0, bounds);
        assert!((fitted.width - 50.0).abs() < EPS);
        assert!((fitted.x - 35.0).abs() < EPS);
        assert!((fitted.y - 10.0).abs() < EPS);
    }

    #[test]
    fn test_inset_clamps() {
        let r = Rect::new(0.0, 0.0, 10.0, 4.0).inset(3.0);
        assert_eq!(r.height, 0.0);
        assert!((r.width - 4.0).abs() < EPS);
    }
}
