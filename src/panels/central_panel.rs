use crate::CadApp;
use crate::shape::Shape;

/// Canvas area. `shapes` is this frame's snapshot of the document; shapes
/// placed by this frame's clicks are appended to it before drawing.
pub fn central_panel(app: &mut CadApp, ctx: &egui::Context, shapes: &mut Vec<Shape>) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click());
            let canvas_rect = response.rect;

            let placed = app.handle_input(ctx, canvas_rect);
            if !placed.is_empty() {
                // Refresh the shape count in the tool panel
                ctx.request_repaint();
            }
            shapes.extend(placed);

            let preview = app.preview();
            let hint = app.tool().hint();
            app.renderer()
                .render(&painter, canvas_rect, shapes, preview.as_ref(), &hint);
        });
}
