//! printpdf implementation of [`Canvas`]
//!
//! Pages are collected in memory and the document is written out once by
//! [`PdfCanvas::finalize`]. Layout coordinates (top-left origin) are flipped to
//! PDF user space here.

use std::fs;
use std::path::Path;

use printpdf::{
    Color, Mm, PaintMode, PdfDocument, PdfPage, PdfSaveOptions, Pt, RawImage, RawImageData,
    RawImageFormat, XObjectId, XObjectTransform,
};

use crate::error::{ImageLoadError, RenderError};
use crate::layout::{fit_within, PageGeometry, Rect};
use crate::render::caption::fit_line;
use crate::render::canvas::{Canvas, ImageFit, ImageHandle, StrokeStyle, TextOptions};
use crate::render::helpers::colors::BLACK;
use crate::render::helpers::compress::compress_pdf;
use crate::render::helpers::fonts::CaptionFont;
use crate::render::helpers::layer::LayerBuilder;
use crate::units::points_to_mm;

/// Images are registered at 72 dpi so one pixel is one point before scaling
const IMAGE_DPI: f32 = 72.0;

const DOCUMENT_TITLE: &str = "Image Grid";

/// A PDF document being drawn page by page
pub struct PdfCanvas {
    doc: PdfDocument,
    page_width: f64,
    page_height: f64,
    pages: Vec<PdfPage>,
    layer: LayerBuilder,
    images: Vec<XObjectId>,
    caption_font: Option<CaptionFont>,
}

impl PdfCanvas {
    /// Open a document whose pages match `geometry`, starting on page one.
    ///
    /// `font` is only needed when text will be drawn.
    pub fn new(geometry: &PageGeometry, font: Option<&Path>) -> Result<Self, RenderError> {
        let mut doc = PdfDocument::new(DOCUMENT_TITLE);
        let caption_font = font
            .map(|path| CaptionFont::load(&mut doc, path))
            .transpose()?;

        Ok(Self {
            doc,
            page_width: geometry.page_width,
            page_height: geometry.page_height,
            pages: Vec::new(),
            layer: LayerBuilder::new(),
            images: Vec::new(),
            caption_font,
        })
    }

    /// Number of pages so far, including the one being drawn
    pub fn page_count(&self) -> usize {
        self.pages.len() + 1
    }

    /// Close the last page and serialize the document.
    ///
    /// Streams are compressed with lopdf; if that fails the uncompressed bytes
    /// are returned instead.
    pub fn finalize(mut self) -> Result<Vec<u8>, RenderError> {
        self.finish_page();

        let mut doc = self.doc;
        doc.with_pages(self.pages);

        let mut warnings = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
        for warning in &warnings {
            log::debug!("printpdf: {:?}", warning);
        }
        if bytes.is_empty() {
            return Err(RenderError::PdfGeneration(
                "printpdf produced no output".to_string(),
            ));
        }

        match compress_pdf(&bytes) {
            Ok(compressed) => Ok(compressed),
            Err(e) => {
                log::warn!("{}; writing uncompressed PDF", e);
                Ok(bytes)
            }
        }
    }

    fn finish_page(&mut self) {
        let layer = std::mem::take(&mut self.layer);
        self.pages.push(PdfPage::new(
            Mm(points_to_mm(self.page_width) as f32),
            Mm(points_to_mm(self.page_height) as f32),
            layer.into_ops(),
        ));
    }

    /// Flip a top-left-origin y coordinate into PDF user space
    fn flip_y(&self, y: f64) -> Pt {
        Pt((self.page_height - y) as f32)
    }

    fn apply_stroke(&mut self, style: &StrokeStyle) {
        self.layer.set_outline_color(Color::Rgb(style.color.clone()));
        self.layer.set_outline_thickness(style.thickness);
        self.layer.set_line_dash(style.dash);
    }
}

/// Decode an image file into raw RGB pixels printpdf can embed
fn decode_image(path: &Path) -> Result<RawImage, ImageLoadError> {
    let bytes = fs::read(path).map_err(|source| ImageLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let decoded = image::load_from_memory(&bytes).map_err(|e| ImageLoadError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();

    Ok(RawImage {
        pixels: RawImageData::U8(rgb.into_raw()),
        width: width as usize,
        height: height as usize,
        data_format: RawImageFormat::RGB8,
        tag: Vec::new(),
    })
}

impl Canvas for PdfCanvas {
    fn load_image(&mut self, path: &Path) -> Result<ImageHandle, ImageLoadError> {
        let raw = decode_image(path)?;
        let (width, height) = (raw.width as u32, raw.height as u32);
        if width == 0 || height == 0 {
            return Err(ImageLoadError::Decode {
                path: path.to_path_buf(),
                message: "image has no pixels".to_string(),
            });
        }

        let id = self.doc.add_image(&raw);
        self.images.push(id);
        log::debug!("Loaded {} ({}x{} px)", path.display(), width, height);

        Ok(ImageHandle::new(self.images.len() - 1, width, height))
    }

    fn draw_image(&mut self, image: &ImageHandle, rect: Rect, fit: ImageFit) {
        let Some(id) = self.images.get(image.key()).cloned() else {
            log::warn!("Unknown image handle {}", image.key());
            return;
        };

        let (px_width, px_height) = image.size();
        let target = match fit {
            ImageFit::Fill => rect,
            ImageFit::Contain => fit_within(px_width as f64, px_height as f64, rect),
        };

        let transform = XObjectTransform {
            translate_x: Some(Pt(target.x as f32)),
            translate_y: Some(self.flip_y(target.bottom())),
            rotate: None,
            scale_x: Some((target.width / px_width as f64) as f32),
            scale_y: Some((target.height / px_height as f64) as f32),
            dpi: Some(IMAGE_DPI),
        };
        self.layer.use_xobject(id, transform);
    }

    fn stroke_rect(&mut self, rect: Rect, style: &StrokeStyle) {
        self.apply_stroke(style);
        let (x1, y1) = (Pt(rect.x as f32), self.flip_y(rect.bottom()));
        let (x2, y2) = (Pt(rect.right() as f32), self.flip_y(rect.y));
        self.layer.add_rect(x1, y1, x2, y2, PaintMode::Stroke);
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), style: &StrokeStyle) {
        self.apply_stroke(style);
        let (y1, y2) = (self.flip_y(from.1), self.flip_y(to.1));
        self.layer.add_line(Pt(from.0 as f32), y1, Pt(to.0 as f32), y2);
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, options: &TextOptions) {
        let Some(font) = &self.caption_font else {
            log::debug!("No caption font loaded, skipping text {:?}", text);
            return;
        };

        let (line, offset) = fit_line(text, options, |s: &str| {
            font.measurer.measure_width_pt(s, options.font_size)
        });
        let baseline = y + font.measurer.metrics().ascender_pt(options.font_size);
        let font_id = font.id.clone();

        self.layer.set_fill_color(Color::Rgb(BLACK));
        let baseline = self.flip_y(baseline);
        self.layer.use_text(
            line,
            options.font_size as f32,
            Pt((x + offset) as f32),
            baseline,
            &font_id,
        );
    }

    fn new_page(&mut self) {
        self.finish_page();
    }
}
