use crate::CadApp;
use crate::tool::ShapeKind;

pub fn tools_panel(app: &mut CadApp, ctx: &egui::Context, shape_count: usize) {
    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let active = app.active_kind();

            // Same effect as the number keys
            for kind in ShapeKind::ALL {
                let label = format!("{} {}", kind.hotkey(), kind);
                if ui.selectable_label(active == kind, label).clicked() {
                    log::info!("Shape kind selected from UI: {}", kind);
                    app.select_kind(kind);
                }
            }

            ui.separator();
            ui.label(format!("Shapes: {shape_count}"));
        });
    });
}
