use egui::Color32;

use crate::PaintApp;
use crate::command::Command;
use crate::surface::{self, MAX_PIXELS};

/// Dismissable message shown on top of the canvas
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Info(String),
    Error(String),
}

/// Text fields of the resize dialog, validated before anything is resized
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeDialog {
    pub width: String,
    pub height: String,
}

impl ResizeDialog {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.to_string(),
            height: height.to_string(),
        }
    }

    /// Both fields as positive integers, or a message saying what is wrong
    pub fn parse(&self) -> Result<(i64, i64), String> {
        let parse = |name: &str, value: &str| match value.trim().parse::<i64>() {
            Ok(v) if v > 0 => Ok(v),
            _ => Err(format!("{} must be a positive whole number", name)),
        };
        let (width, height) = (parse("Width", &self.width)?, parse("Height", &self.height)?);
        surface::check_dimensions(width, height)
            .map_err(|_| format!("Canvas is limited to {} pixels in total", MAX_PIXELS))?;
        Ok((width, height))
    }
}

pub fn color_dialog(app: &mut PaintApp, ctx: &egui::Context) {
    let Some(mut color) = app.color_dialog else {
        return;
    };
    let mut outcome = None;

    egui::Window::new("Choose Color")
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            egui::color_picker::color_picker_color32(ui, &mut color, egui::color_picker::Alpha::Opaque);
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    outcome = Some(true);
                }
                if ui.button("Cancel").clicked() {
                    outcome = Some(false);
                }
            });
        });

    match outcome {
        Some(true) => {
            app.color_dialog = None;
            app.execute(Command::SetColor(Color32::from_rgb(color.r(), color.g(), color.b())));
        }
        Some(false) => app.color_dialog = None,
        None => app.color_dialog = Some(color),
    }
}

pub fn resize_dialog(app: &mut PaintApp, ctx: &egui::Context) {
    let Some(dialog) = app.resize_dialog.as_mut() else {
        return;
    };
    let mut outcome = None;

    egui::Window::new("Resize Canvas")
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            egui::Grid::new("resize_grid").num_columns(2).show(ui, |ui| {
                ui.label("Width:");
                ui.text_edit_singleline(&mut dialog.width);
                ui.end_row();
                ui.label("Height:");
                ui.text_edit_singleline(&mut dialog.height);
                ui.end_row();
            });

            let parsed = dialog.parse();
            if let Err(message) = &parsed {
                ui.colored_label(Color32::RED, message.as_str());
            }
            ui.label("Resizing clears the canvas.");

            ui.horizontal(|ui| {
                if ui.add_enabled(parsed.is_ok(), egui::Button::new("OK")).clicked() {
                    outcome = parsed.ok().map(Some);
                }
                if ui.button("Cancel").clicked() {
                    outcome = Some(None);
                }
            });
        });

    if let Some(result) = outcome {
        app.resize_dialog = None;
        if let Some((width, height)) = result {
            app.execute(Command::Resize { width, height });
        }
    }
}

pub fn notification_window(app: &mut PaintApp, ctx: &egui::Context) {
    let Some(notification) = &app.notification else {
        return;
    };
    let (title, message) = match notification {
        Notification::Info(message) => ("Information", message.clone()),
        Notification::Error(message) => ("Error", message.clone()),
    };

    let mut dismissed = false;
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(message);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });

    if dismissed {
        app.notification = None;
    }
}
