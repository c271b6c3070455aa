//! The stroke state machine.
//!
//! Turns a stream of pointer events into line segments. Each segment is
//! rasterized straight into the [`RasterSurface`] and also returned to the
//! caller so the on-screen layer can show the same thing immediately.
//!
//! # State Transitions
//!
//! ```text
//!                 pointer_down(p)
//!   ┌──────────┐ ───────────────► ┌──────────────────┐ ──┐
//!   │          │                  │                  │   │ pointer_move(p):
//!   │   Idle   │                  │ Dragging(anchor) │   │ draw anchor→p,
//!   │          │ ◄─────────────── │                  │ ◄─┘ anchor := p
//!   └──────────┘    pointer_up    └──────────────────┘
//! ```
//!
//! A pointer-down with no motion draws nothing. A pointer-up in `Idle` is
//! ignored. Color and width are read at every move, so changing them mid-drag
//! affects the next segment onward.
use egui::Color32;
use log::debug;

use crate::brush::{BrushWidth, Step};
use crate::error::CanvasResult;
use crate::geometry::Point;
use crate::stroke::Segment;
use crate::surface::{BACKGROUND, RasterSurface};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        anchor: Point,
    },
}

impl DragState {
    pub fn anchor(&self) -> Option<Point> {
        match self {
            DragState::Dragging { anchor } => Some(*anchor),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}

#[derive(Debug, Clone)]
pub struct StrokeEngine {
    drag: DragState,
    color: Color32,
    previous_color: Color32,
    width: BrushWidth,
}

impl Default for StrokeEngine {
    fn default() -> Self {
        Self::new(Color32::BLACK, BrushWidth::default())
    }
}

impl StrokeEngine {
    pub fn new(color: Color32, width: BrushWidth) -> Self {
        Self {
            drag: DragState::Idle,
            color,
            previous_color: color,
            width,
        }
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn anchor(&self) -> Option<Point> {
        self.drag.anchor()
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn previous_color(&self) -> Color32 {
        self.previous_color
    }

    pub fn brush_width(&self) -> BrushWidth {
        self.width
    }

    /// True while the active color is the background color
    pub fn is_erasing(&self) -> bool {
        self.color == BACKGROUND
    }

    pub fn pointer_down(&mut self, p: Point) {
        if let DragState::Dragging { anchor } = self.drag {
            debug!("pointer down at {:?} while dragging from {:?}; re-anchoring", p, anchor);
        }
        self.drag = DragState::Dragging { anchor: p };
    }

    /// Extend the current stroke to `p`.
    ///
    /// Returns the segment that was drawn, or `None` when no drag is active.
    pub fn pointer_move(&mut self, p: Point, surface: &mut RasterSurface) -> Option<Segment> {
        let anchor = self.drag.anchor()?;
        let segment = Segment::new(anchor, p, self.color, self.width.pixels());
        surface.draw_line(segment.from, segment.to, segment.color, segment.width);
        self.drag = DragState::Dragging { anchor: p };
        Some(segment)
    }

    pub fn pointer_up(&mut self) {
        if !self.drag.is_dragging() {
            debug!("ignoring pointer up without an active stroke");
        }
        self.drag = DragState::Idle;
    }

    pub fn set_color(&mut self, color: Color32) {
        self.previous_color = self.color;
        self.color = color;
    }

    /// Switch between the eraser (background color) and the last color.
    ///
    /// Keyed purely on whether the active color equals the background, so a
    /// user-picked white also counts as "eraser on".
    pub fn toggle_eraser(&mut self) {
        if self.is_erasing() {
            self.set_color(self.previous_color);
        } else {
            self.set_color(BACKGROUND);
        }
    }

    pub fn set_brush_width(&mut self, pixels: u32) -> CanvasResult<()> {
        self.width = BrushWidth::new(pixels)?;
        Ok(())
    }

    pub fn set_brush(&mut self, width: BrushWidth) {
        self.width = width;
    }

    pub fn step_brush_width(&mut self, step: Step) {
        self.width = self.width.step(step);
    }

    /// Adopt the color under `p` as the active color.
    pub fn pick_color_at(&mut self, p: Point, surface: &RasterSurface) -> CanvasResult<Color32> {
        let color = surface.get_pixel(p)?;
        self.set_color(color);
        Ok(color)
    }
}
