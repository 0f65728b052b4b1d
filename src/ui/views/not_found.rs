use crate::app::KodeSiapApp;
use egui::{CentralPanel, Context, RichText};

pub fn ui_not_found(app: &mut KodeSiapApp, ctx: &Context, requested: &str) {
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(48.0);
            ui.label(RichText::new("Topik tidak ditemukan").heading().strong());
            ui.small(requested);
            ui.add_space(16.0);
            if ui.button("◀ Kembali ke Beranda").clicked() {
                app.volver_al_inicio();
            }
        });
    });
}
