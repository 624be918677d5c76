//! The drawing surface the grid is rendered onto
//!
//! Everything the cell renderer needs from a document backend goes through
//! [`Canvas`]. Coordinates are in points with a top-left origin.

use std::path::Path;

use printpdf::Rgb;

use crate::error::ImageLoadError;
use crate::layout::Rect;
use crate::render::helpers::colors::{BLACK, RED};

/// Dash length used for placeholder marks, in points
pub const PLACEHOLDER_DASH: f32 = 5.0;

/// An image registered with a canvas, ready to be drawn any number of times
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHandle {
    key: usize,
    width: u32,
    height: u32,
}

impl ImageHandle {
    pub fn new(key: usize, width: u32, height: u32) -> Self {
        Self { key, width, height }
    }

    /// Backend-specific identifier
    pub fn key(&self) -> usize {
        self.key
    }

    /// Pixel dimensions (width, height)
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// How an image is scaled into its target rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFit {
    /// Stretch to exactly cover the rectangle
    Fill,
    /// Keep aspect ratio, centred inside the rectangle
    Contain,
}

#[derive(Debug, Clone)]
pub struct StrokeStyle {
    pub color: Rgb,
    pub thickness: f32,
    /// Dash and gap length in points; `None` for a solid line
    pub dash: Option<f32>,
}

impl StrokeStyle {
    pub fn solid(color: Rgb) -> Self {
        Self {
            color,
            thickness: 1.0,
            dash: None,
        }
    }

    /// The red dashed line used wherever an image could not be drawn
    pub fn placeholder() -> Self {
        Self {
            color: RED,
            thickness: 1.0,
            dash: Some(PLACEHOLDER_DASH),
        }
    }

    pub fn border() -> Self {
        Self::solid(BLACK)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Layout of a single line of text
#[derive(Debug, Clone, PartialEq)]
pub struct TextOptions {
    /// Width of the text box in points
    pub width: f64,
    pub align: TextAlign,
    pub font_size: f64,
    /// Cut overflowing text and end it with an ellipsis
    pub ellipsis: bool,
}

/// Rendering backend capabilities used by the grid renderer
pub trait Canvas {
    /// Load an image from disk so it can be drawn
    fn load_image(&mut self, path: &Path) -> Result<ImageHandle, ImageLoadError>;

    fn draw_image(&mut self, image: &ImageHandle, rect: Rect, fit: ImageFit);

    fn stroke_rect(&mut self, rect: Rect, style: &StrokeStyle);

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), style: &StrokeStyle);

    /// Draw one line of text whose box has its top-left corner at (x, y)
    fn draw_text(&mut self, text: &str, x: f64, y: f64, options: &TextOptions);

    /// Finish the current page and start a fresh one
    fn new_page(&mut self);
}

/// Draw both diagonals of `rect`
pub fn stroke_cross<C: Canvas + ?Sized>(canvas: &mut C, rect: Rect, style: &StrokeStyle) {
    canvas.stroke_line((rect.x, rect.y), (rect.right(), rect.bottom()), style);
    canvas.stroke_line((rect.right(), rect.y), (rect.x, rect.bottom()), style);
}
