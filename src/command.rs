use egui::Color32;

use crate::brush::Step;
use crate::document::Document;
use crate::error::CanvasResult;
use crate::geometry::Point;

/// Actions the UI can apply to a document.
///
/// These are fire-and-forget: there is no history, and a failing command
/// leaves the document exactly as it was.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Wipe the canvas to the background color
    Clear,
    /// Result of the color chooser
    SetColor(Color32),
    /// Sample the canvas under the pointer
    PickColor(Point),
    ToggleEraser,
    SetBrushWidth(u32),
    StepBrushWidth(Step),
    /// Result of the resize dialog
    Resize { width: i64, height: i64 },
}

impl Command {
    pub fn execute(&self, doc: &mut Document) -> CanvasResult<()> {
        log::debug!("Executing {:?}", self);
        match self {
            Command::Clear => {
                doc.clear();
                Ok(())
            }
            Command::SetColor(color) => {
                doc.set_color(*color);
                Ok(())
            }
            Command::PickColor(p) => {
                doc.on_pick_color(p.x, p.y)?;
                Ok(())
            }
            Command::ToggleEraser => {
                doc.toggle_eraser();
                Ok(())
            }
            Command::SetBrushWidth(pixels) => doc.set_brush_width(*pixels),
            Command::StepBrushWidth(step) => {
                doc.step_brush_width(*step);
                Ok(())
            }
            Command::Resize { width, height } => doc.resize(*width, *height),
        }
    }

    /// Short name for the tools panel and log lines
    pub fn label(&self) -> &'static str {
        match self {
            Command::Clear => "Clear",
            Command::SetColor(_) => "Set Color",
            Command::PickColor(_) => "Pick Color",
            Command::ToggleEraser => "Toggle Eraser",
            Command::SetBrushWidth(_) => "Set Brush Width",
            Command::StepBrushWidth(Step::Increase) => "Increase Brush",
            Command::StepBrushWidth(Step::Decrease) => "Decrease Brush",
            Command::Resize { .. } => "Resize",
        }
    }
}
