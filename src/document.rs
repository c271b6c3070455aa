use std::path::PathBuf;

use egui::Color32;

use crate::brush::{BrushWidth, Step};
use crate::config::CanvasConfig;
use crate::engine::StrokeEngine;
use crate::error::CanvasResult;
use crate::file_handler::ExportJob;
use crate::geometry::Point;
use crate::stroke::{DisplayList, Segment};
use crate::surface::RasterSurface;

/// One drawing session: the raster that gets saved, the vector layer that
/// is shown while drawing, and the stroke engine feeding both.
///
/// Every segment the engine draws into the surface is pushed to the display
/// list in the same call, and both are reset together, so the two never
/// disagree about what is on the canvas.
#[derive(Debug)]
pub struct Document {
    surface: RasterSurface,
    display: DisplayList,
    engine: StrokeEngine,
    version: u64,
}

impl Document {
    pub fn new(width: i64, height: i64) -> CanvasResult<Self> {
        Ok(Self {
            surface: RasterSurface::new(width, height)?,
            display: DisplayList::new(),
            engine: StrokeEngine::default(),
            version: 0,
        })
    }

    pub fn from_config(config: &CanvasConfig) -> CanvasResult<Self> {
        let mut doc = Self::new(config.width as i64, config.height as i64)?;
        doc.engine = StrokeEngine::new(config.color32(), config.brush_width);
        Ok(doc)
    }

    pub fn surface(&self) -> &RasterSurface {
        &self.surface
    }

    pub fn display(&self) -> &DisplayList {
        &self.display
    }

    pub fn engine(&self) -> &StrokeEngine {
        &self.engine
    }

    /// Bumped whenever the pixels change
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    fn mark_modified(&mut self) {
        self.version += 1;
    }

    pub fn on_pointer_down(&mut self, x: i32, y: i32) {
        self.engine.pointer_down(Point::new(x, y));
    }

    pub fn on_pointer_move(&mut self, x: i32, y: i32) -> Option<Segment> {
        let segment = self.engine.pointer_move(Point::new(x, y), &mut self.surface)?;
        self.display.push(segment);
        self.mark_modified();
        Some(segment)
    }

    pub fn on_pointer_up(&mut self) {
        self.engine.pointer_up();
    }

    pub fn on_pick_color(&mut self, x: i32, y: i32) -> CanvasResult<Color32> {
        self.engine.pick_color_at(Point::new(x, y), &self.surface)
    }

    pub fn set_color(&mut self, color: Color32) {
        self.engine.set_color(color);
    }

    pub fn toggle_eraser(&mut self) {
        self.engine.toggle_eraser();
    }

    pub fn set_brush_width(&mut self, pixels: u32) -> CanvasResult<()> {
        self.engine.set_brush_width(pixels)
    }

    pub fn set_brush(&mut self, width: BrushWidth) {
        self.engine.set_brush(width);
    }

    pub fn step_brush_width(&mut self, step: Step) {
        self.engine.step_brush_width(step);
    }

    pub fn clear(&mut self) {
        log::info!("Clearing {}x{} canvas", self.width(), self.height());
        self.surface.clear();
        self.display.clear();
        self.mark_modified();
    }

    /// Start over with a blank canvas of the new size.
    ///
    /// Nothing changes if the dimensions are rejected.
    pub fn resize(&mut self, width: i64, height: i64) -> CanvasResult<()> {
        self.surface.resize(width, height)?;
        log::info!("Canvas resized to {}x{}", width, height);
        self.display.clear();
        self.mark_modified();
        Ok(())
    }

    /// Write the canvas to `path` on the calling thread
    pub fn export_png(&self, path: impl Into<PathBuf>) -> CanvasResult<()> {
        let path = path.into();
        self.surface.export_png(&path)?;
        log::info!("Saved canvas to {}", path.display());
        Ok(())
    }

    /// Write a snapshot of the canvas on a worker thread
    pub fn begin_export(&self, path: impl Into<PathBuf>) -> ExportJob {
        ExportJob::spawn(self.surface.snapshot(), path.into())
    }
}
