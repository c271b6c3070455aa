use eframe::egui;

use crate::brush::BrushWidth;

/// A square button previewing one brush width as a dot
pub struct BrushButton {
    pub width: BrushWidth,
    pub color: egui::Color32,
    pub selected: bool,
}

impl BrushButton {
    pub fn new(width: BrushWidth, color: egui::Color32, selected: bool) -> Self {
        Self {
            width,
            color,
            selected,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(32.0, 32.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                egui::Color32::from_rgb(100, 181, 246) // Light blue when selected
            } else if response.hovered() {
                egui::Color32::from_gray(220)
            } else {
                egui::Color32::from_gray(240)
            };

            ui.painter().rect_filled(rect, 4.0, bg_color);

            // Same diameter the raster brush uses
            let radius = (self.width.pixels() as f32 / 2.0).max(1.0);
            ui.painter().circle_filled(rect.center(), radius, self.color);

            if self.selected {
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243)),
                );
            }
        }

        response.on_hover_text(self.width.to_string())
    }
}
