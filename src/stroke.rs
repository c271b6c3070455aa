use egui::Color32;

use crate::geometry::Point;

/// One straight piece of a freehand stroke.
///
/// The stroke engine produces exactly one of these per pointer move while
/// dragging; the same segment is rasterized into the surface and pushed to the
/// live display layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub color: Color32,
    pub width: u32,
}

impl Segment {
    pub fn new(from: Point, to: Point, color: Color32, width: u32) -> Self {
        Self {
            from,
            to,
            color,
            width,
        }
    }

    pub fn is_point(&self) -> bool {
        self.from == self.to
    }
}

/// The on-screen vector layer: every segment drawn since the last clear, in
/// draw order.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    segments: Vec<Segment>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }
}
