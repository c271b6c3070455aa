use crate::PaintApp;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::both().show(ui, |ui| {
            let size = egui::vec2(app.document().width() as f32, app.document().height() as f32);
            let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
            let canvas_rect = response.rect;

            app.handle_input(ctx, canvas_rect);

            app.renderer().render(&painter, canvas_rect, app.document().display());

            if response.hovered() {
                ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
            }
        });
    });
}
