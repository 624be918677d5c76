//! Rendering of a single grid cell
//!
//! A cell either shows its image stretched edge to edge ([`Decoration::Plain`]) or
//! gets a border, the shared background, the image fitted above a caption band,
//! and the caption itself ([`Decoration::Captioned`]). Any image that cannot be
//! loaded is replaced by a red dashed mark and rendering carries on.

use std::path::{Path, PathBuf};

use crate::config::CaptionStyle;
use crate::layout::{PageGeometry, Rect};
use crate::render::canvas::{stroke_cross, Canvas, ImageFit, ImageHandle, StrokeStyle};
use crate::render::caption::CaptionSpec;
use crate::units::to_doc_units;

/// Extra drawing applied to every cell
#[derive(Debug, Clone)]
pub enum Decoration {
    Plain,
    Captioned {
        style: CaptionStyle,
        /// Shared background, `None` when it failed to load
        background: Option<ImageHandle>,
    },
}

impl Decoration {
    /// Captioned decoration, loading the shared background once up front.
    ///
    /// A background that fails to load is logged here and every cell gets a
    /// placeholder cross in its place.
    pub fn captioned<C: Canvas + ?Sized>(
        canvas: &mut C,
        background: &Path,
        style: CaptionStyle,
    ) -> Self {
        let background = match canvas.load_image(background) {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::warn!("Background unavailable, drawing placeholders instead: {}", e);
                None
            }
        };
        Decoration::Captioned { style, background }
    }
}

/// What happened while drawing one cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellReport {
    /// Number of placeholder marks drawn instead of images
    pub placeholders: usize,
}

/// Draws image cells at grid positions
pub struct CellRenderer<'a> {
    geometry: &'a PageGeometry,
    images_dir: PathBuf,
    decoration: Decoration,
}

impl<'a> CellRenderer<'a> {
    pub fn new(
        geometry: &'a PageGeometry,
        images_dir: impl Into<PathBuf>,
        decoration: Decoration,
    ) -> Self {
        Self {
            geometry,
            images_dir: images_dir.into(),
            decoration,
        }
    }

    pub fn geometry(&self) -> &PageGeometry {
        self.geometry
    }

    /// Render `filename` into the cell at `index` on the current page.
    ///
    /// Never fails: unreadable images become placeholders.
    pub fn render_cell<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        index: usize,
        filename: &str,
    ) -> CellReport {
        let cell = self.geometry.cell_rect(index);
        let path = self.images_dir.join(filename);

        match &self.decoration {
            Decoration::Plain => self.render_plain(canvas, cell, &path),
            Decoration::Captioned { style, background } => {
                self.render_captioned(canvas, cell, &path, filename, style, background.as_ref())
            }
        }
    }

    fn render_plain<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        cell: Rect,
        path: &Path,
    ) -> CellReport {
        match canvas.load_image(path) {
            Ok(image) => {
                canvas.draw_image(&image, cell, ImageFit::Fill);
                CellReport::default()
            }
            Err(e) => {
                log::warn!("Error skipping image: {}", e.path().display());
                log::debug!("{}", e);
                canvas.stroke_rect(cell, &StrokeStyle::placeholder());
                CellReport { placeholders: 1 }
            }
        }
    }

    fn render_captioned<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        cell: Rect,
        path: &Path,
        filename: &str,
        style: &CaptionStyle,
        background: Option<&ImageHandle>,
    ) -> CellReport {
        let mut report = CellReport::default();

        canvas.stroke_rect(cell, &StrokeStyle::border());

        match background {
            Some(image) => canvas.draw_image(image, cell, ImageFit::Fill),
            None => {
                stroke_cross(canvas, cell, &StrokeStyle::placeholder());
                report.placeholders += 1;
            }
        }

        let above_band = cell.trim_bottom(to_doc_units(style.caption_band));
        match canvas.load_image(path) {
            Ok(image) => {
                let area = above_band.inset(to_doc_units(style.image_padding));
                canvas.draw_image(&image, area, ImageFit::Contain);
            }
            Err(e) => {
                log::warn!("Error skipping image: {}", e.path().display());
                log::debug!("{}", e);
                let area = above_band.inset(to_doc_units(style.fallback_padding));
                stroke_cross(canvas, area, &StrokeStyle::placeholder());
                report.placeholders += 1;
            }
        }

        let caption = CaptionSpec::for_cell(filename, cell, style);
        canvas.draw_text(&caption.text, caption.x, caption.y, &caption.options);

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::error::ImageLoadError;
    use crate::render::canvas::TextOptions;

    #[derive(Debug, PartialEq)]
    enum Call {
        Image(usize, Rect, ImageFit),
        Rect(Rect, Option<f32>),
        Line,
        Text(String),
    }

    /// Loads every image except ones whose name contains "bad"
    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
        loaded: usize,
    }

    impl Canvas for Recorder {
        fn load_image(&mut self, path: &Path) -> Result<ImageHandle, ImageLoadError> {
            if path.to_string_lossy().contains("bad") {
                return Err(ImageLoadError::Decode {
                    path: path.to_path_buf(),
                    message: "corrupt".to_string(),
                });
            }
            self.loaded += 1;
            Ok(ImageHandle::new(self.loaded, 100, 200))
        }

        fn draw_image(&mut self, image: &ImageHandle, rect: Rect, fit: ImageFit) {
            self.calls.push(Call::Image(image.key(), rect, fit));
        }

        fn stroke_rect(&mut self, rect: Rect, style: &StrokeStyle) {
            self.calls.push(Call::Rect(rect, style.dash));
        }

        fn stroke_line(&mut self, _from: (f64, f64), _to: (f64, f64), _style: &StrokeStyle) {
            self.calls.push(Call::Line);
        }

        fn draw_text(&mut self, text: &str, _x: f64, _y: f64, _options: &TextOptions) {
            self.calls.push(Call::Text(text.to_string()));
        }

        fn new_page(&mut self) {}
    }

    fn geometry() -> PageGeometry {
        PageGeometry::from_config(&LayoutConfig::default())
    }

    #[test]
    fn test_plain_fills_cell() {
        let geometry = geometry();
        let renderer = CellRenderer::new(&geometry, "images", Decoration::Plain);
        let mut canvas = Recorder::default();

        let report = renderer.render_cell(&mut canvas, 5, "a.png");

        assert_eq!(report.placeholders, 0);
        assert_eq!(
            canvas.calls,
            vec![Call::Image(1, geometry.cell_rect(5), ImageFit::Fill)]
        );
    }

    #[test]
    fn test_plain_failure_draws_dashed_outline() {
        let geometry = geometry();
        let renderer = CellRenderer::new(&geometry, "images", Decoration::Plain);
        let mut canvas = Recorder::default();

        let report = renderer.render_cell(&mut canvas, 0, "bad.png");

        assert_eq!(report.placeholders, 1);
        assert_eq!(
            canvas.calls,
            vec![Call::Rect(geometry.cell_rect(0), Some(5.0))]
        );
    }

    #[test]
    fn test_captioned_draw_order() {
        let geometry = geometry();
        let mut canvas = Recorder::default();
        let decoration =
            Decoration::captioned(&mut canvas, Path::new("bg.png"), CaptionStyle::default());
        let renderer = CellRenderer::new(&geometry, "images", decoration);

        let report = renderer.render_cell(&mut canvas, 0, "my_Photo.JPG");

        assert_eq!(report.placeholders, 0);
        let cell = geometry.cell_rect(0);
        assert_eq!(canvas.calls[0], Call::Rect(cell, None));
        assert_eq!(canvas.calls[1], Call::Image(1, cell, ImageFit::Fill));
        match &canvas.calls[2] {
            Call::Image(2, area, ImageFit::Contain) => {
                assert!(area.x > cell.x && area.bottom() < cell.bottom());
            }
            other => panic!("expected subject image, got {:?}", other),
        }
        assert_eq!(canvas.calls[3], Call::Text("MY_PHOTO".to_string()));
        assert_eq!(canvas.calls.len(), 4);
    }

    #[test]
    fn test_captioned_failures_are_independent() {
        let geometry = geometry();
        let mut canvas = Recorder::default();
        let decoration =
            Decoration::captioned(&mut canvas, Path::new("bad_bg.png"), CaptionStyle::default());
        let renderer = CellRenderer::new(&geometry, "images", decoration);

        let report = renderer.render_cell(&mut canvas, 1, "bad_subject.png");

        assert_eq!(report.placeholders, 2);
        let lines = canvas.calls.iter().filter(|c| **c == Call::Line).count();
        assert_eq!(lines, 4);
        assert!(!canvas.calls.iter().any(|c| matches!(c, Call::Image(..))));
        assert_eq!(
            canvas.calls.last(),
            Some(&Call::Text("BAD_SUBJECT".to_string()))
        );
    }
}
