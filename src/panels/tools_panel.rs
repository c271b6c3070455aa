use crate::PaintApp;
use crate::brush::{BrushWidth, Step};
use crate::command::Command;
use crate::components::BrushButton;
use crate::input::Shortcut;

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui
                .button("Clear")
                .on_hover_text(Shortcut::Clear.hint())
                .clicked()
            {
                app.execute(Command::Clear);
            }
            if ui
                .button("Choose Color")
                .on_hover_text(Shortcut::ChooseColor.hint())
                .clicked()
            {
                app.open_color_dialog();
            }
            if ui
                .button("Save")
                .on_hover_text(Shortcut::Save.hint())
                .clicked()
            {
                app.request_save();
            }
            if ui.button("Resize…").clicked() {
                app.open_resize_dialog();
            }

            ui.separator();

            // Color preview
            let engine = app.document().engine();
            let (color, current_width, erasing) =
                (engine.color(), engine.brush_width(), engine.is_erasing());
            let (rect, _) = ui.allocate_exact_size(egui::vec2(25.0, 25.0), egui::Sense::hover());
            ui.painter().rect_filled(rect, 2.0, color);
            ui.painter()
                .rect_stroke(rect, 2.0, egui::Stroke::new(1.0, egui::Color32::GRAY));

            let eraser_label = if erasing { "Brush" } else { "Eraser" };
            if ui
                .selectable_label(erasing, eraser_label)
                .on_hover_text(Shortcut::ToggleEraser.hint())
                .clicked()
            {
                app.execute(Command::ToggleEraser);
            }

            ui.separator();

            if ui
                .small_button("−")
                .on_hover_text(Shortcut::DecreaseBrush.hint())
                .clicked()
            {
                app.execute(Command::StepBrushWidth(Step::Decrease));
            }
            for width in BrushWidth::all() {
                if BrushButton::new(width, color, width == current_width)
                    .show(ui)
                    .clicked()
                {
                    app.execute(Command::SetBrushWidth(width.pixels()));
                }
            }
            if ui
                .small_button("+")
                .on_hover_text(Shortcut::IncreaseBrush.hint())
                .clicked()
            {
                app.execute(Command::StepBrushWidth(Step::Increase));
            }

            if app.is_exporting() {
                ui.separator();
                ui.spinner();
                ui.label("Saving…");
            }
        });
    });
}
