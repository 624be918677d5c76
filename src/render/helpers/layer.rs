//! Operation collector for one PDF page
//!
//! `LayerBuilder` offers a small drawing API and records the equivalent
//! printpdf `Op`s. Coordinates here are PDF user space: points, origin at the
//! bottom-left of the page.

use printpdf::{
    Color, FontId, LineDashPattern, LinePoint, Op, PaintMode, PdfFontHandle, Point, Polygon,
    PolygonRing, Pt, TextItem, WindingOrder, XObjectId, XObjectTransform,
};

/// A builder that collects PDF operations for a page
#[derive(Default)]
pub struct LayerBuilder {
    ops: Vec<Op>,
}

fn point(x: f32, y: f32) -> LinePoint {
    LinePoint {
        p: Point { x: Pt(x), y: Pt(y) },
        bezier: false,
    }
}

impl LayerBuilder {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Get the collected operations
    pub fn into_ops(self) -> Vec<Op> {
        self.ops
    }

    /// Set the fill color
    pub fn set_fill_color(&mut self, color: Color) {
        self.ops.push(Op::SetFillColor { col: color });
    }

    /// Set the outline/stroke color
    pub fn set_outline_color(&mut self, color: Color) {
        self.ops.push(Op::SetOutlineColor { col: color });
    }

    /// Set the outline thickness
    pub fn set_outline_thickness(&mut self, thickness: f32) {
        self.ops.push(Op::SetOutlineThickness { pt: Pt(thickness) });
    }

    /// Dash subsequent strokes with equal dash and gap lengths, or go back to
    /// solid lines with `None`
    pub fn set_line_dash(&mut self, dash: Option<f32>) {
        let length = dash.map(|d| d.round().max(1.0) as i64);
        self.ops.push(Op::SetLineDashPattern {
            dash: LineDashPattern {
                offset: 0,
                dash_1: length,
                gap_1: length,
                dash_2: None,
                gap_2: None,
                dash_3: None,
                gap_3: None,
            },
        });
    }

    /// Draw text with its baseline starting at (x, y)
    pub fn use_text<S: Into<String>>(
        &mut self,
        text: S,
        font_size: f32,
        x: Pt,
        y: Pt,
        font: &FontId,
    ) {
        let text_str = text.into();
        if text_str.is_empty() {
            return;
        }

        self.ops.push(Op::StartTextSection);
        self.ops.push(Op::SetTextCursor {
            pos: Point { x, y },
        });
        self.ops.push(Op::SetFont {
            size: Pt(font_size),
            font: PdfFontHandle::External(font.clone()),
        });
        self.ops.push(Op::ShowText {
            items: vec![TextItem::Text(text_str)],
        });
        self.ops.push(Op::EndTextSection);
    }

    /// Add a filled or stroked rectangle
    ///
    /// Takes lower-left x, y and upper-right x, y coordinates with a paint mode
    pub fn add_rect(&mut self, x1: Pt, y1: Pt, x2: Pt, y2: Pt, mode: PaintMode) {
        let points = vec![
            point(x1.0, y1.0),
            point(x2.0, y1.0),
            point(x2.0, y2.0),
            point(x1.0, y2.0),
        ];

        let polygon = Polygon {
            rings: vec![PolygonRing { points }],
            mode,
            winding_order: WindingOrder::NonZero,
        };

        self.ops.push(Op::DrawPolygon { polygon });
    }

    /// Draw a line from (x1, y1) to (x2, y2)
    pub fn add_line(&mut self, x1: Pt, y1: Pt, x2: Pt, y2: Pt) {
        let polygon = Polygon {
            rings: vec![PolygonRing {
                points: vec![point(x1.0, y1.0), point(x2.0, y2.0)],
            }],
            mode: PaintMode::Stroke,
            winding_order: WindingOrder::NonZero,
        };

        self.ops.push(Op::DrawPolygon { polygon });
    }

    /// Place an XObject (image) with the given transform
    ///
    /// Use `PdfDocument::add_image()` to register an image and get the XObjectId.
    pub fn use_xobject(&mut self, id: XObjectId, transform: XObjectTransform) {
        self.ops.push(Op::UseXobject { id, transform });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_is_one_polygon() {
        let mut layer = LayerBuilder::new();
        layer.add_rect(Pt(0.0), Pt(0.0), Pt(10.0), Pt(5.0), PaintMode::Stroke);
        let ops = layer.into_ops();
        assert_eq!(ops.len(), 1);
        match &ops[0] {
            Op::DrawPolygon { polygon } => assert_eq!(polygon.rings[0].points.len(), 4),
            _ => panic!("expected polygon"),
        }
    }

    #[test]
    fn test_dash_pattern() {
        let mut layer = LayerBuilder::new();
        layer.set_line_dash(Some(5.0));
        layer.set_line_dash(None);
        match &layer.into_ops()[..] {
            [Op::SetLineDashPattern { dash: dashed }, Op::SetLineDashPattern { dash: solid }] => {
                assert_eq!(dashed.dash_1, Some(5));
                assert_eq!(dashed.gap_1, Some(5));
                assert_eq!(solid.dash_1, None);
            }
            _ => panic!("expected two dash ops"),
        }
    }
}
