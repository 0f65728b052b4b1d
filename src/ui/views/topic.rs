use crate::app::KodeSiapApp;
use crate::icons::Glyph;
use crate::model::Topic;
use crate::ui::layout::code_block;
use crate::ui::views::problem::ui_problem;
use egui::{CentralPanel, Context, RichText, ScrollArea};
use egui_commonmark::CommonMarkViewer;

pub fn ui_topic(app: &mut KodeSiapApp, ctx: &Context, topic: &Topic) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 900.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ScrollArea::vertical()
            .id_salt(("topic", &topic.id))
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.set_width(panel_width);

                if ui.button("◀ Kembali ke Beranda").clicked() {
                    app.volver_al_inicio();
                    return;
                }
                ui.add_space(12.0);

                // Cabecera del tema
                ui.horizontal(|ui| {
                    ui.label(RichText::new(Glyph::from_name(&topic.icon).symbol()).size(32.0));
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&topic.title).size(26.0).strong());
                        ui.label(&topic.description);
                    });
                });
                ui.add_space(16.0);

                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(panel_width - 16.0);
                    ui.label(RichText::new("📖 Konsep Dasar").heading());
                    ui.add_space(6.0);
                    CommonMarkViewer::new().show(ui, &mut app.cm_cache, &topic.concept);

                    ui.separator();
                    ui.label(RichText::new("</> Code Pattern").strong());
                    ui.small("Python Template");
                    code_block(
                        ui,
                        &format!("template_{}", topic.id),
                        panel_width - 16.0,
                        &topic.template_code,
                    );
                });

                // Lista de problemas, en orden del catálogo
                for (index, problem) in topic.problems.iter().enumerate() {
                    ui.add_space(20.0);
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(format!("{}", index + 1)).strong().size(18.0));
                        ui.label(
                            RichText::new(format!("Latihan: {}", problem.title))
                                .size(20.0)
                                .strong(),
                        );
                    });
                    ui.add_space(6.0);
                    ui_problem(app, ui, problem, panel_width - 16.0);
                }
                ui.add_space(32.0);
            });
    });
}
