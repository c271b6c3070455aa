use egui::{Color32, Painter, Rect, Stroke};

use crate::stroke::{DisplayList, Segment};
use crate::surface::BACKGROUND;

/// Paints the live vector layer.
///
/// Segments are drawn with round caps so that consecutive pieces of a drag
/// join up the same way they do in the raster.
#[derive(Debug, Default)]
pub struct Renderer {
    /// Outline around the canvas area
    border: Option<Stroke>,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            border: Some(Stroke::new(1.0, Color32::from_gray(120))),
        }
    }

    /// Draw the canvas background and every segment, clipped to `rect`.
    pub fn render(&self, painter: &Painter, rect: Rect, display: &DisplayList) {
        let painter = painter.with_clip_rect(rect);
        painter.rect_filled(rect, 0.0, BACKGROUND);

        for segment in display.segments() {
            Self::paint_segment(&painter, rect, segment);
        }

        if let Some(border) = self.border {
            painter.rect_stroke(rect, 0.0, border);
        }
    }

    fn paint_segment(painter: &Painter, rect: Rect, segment: &Segment) {
        let offset = rect.min.to_vec2();
        let from = segment.from.to_pos() + offset;
        let to = segment.to.to_pos() + offset;
        let width = segment.width as f32;

        // Caps on both ends; a zero-length segment is just a dot.
        let radius = width / 2.0;
        painter.circle_filled(from, radius, segment.color);
        if !segment.is_point() {
            painter.line_segment([from, to], Stroke::new(width, segment.color));
            painter.circle_filled(to, radius, segment.color);
        }
    }
}
