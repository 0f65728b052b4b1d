use crate::app::KodeSiapApp;
use crate::ui::helpers::topic_card;
use egui::{CentralPanel, Context, RichText, ScrollArea};

pub fn ui_home(app: &mut KodeSiapApp, ctx: &Context) {
    // Precomputar tarjetas para no mantener el borrow en la iteración
    let cards = app.session.home_cards();

    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.label(RichText::new("Kuasai Technical Coding Test").size(32.0).strong());
                ui.add_space(8.0);
                ui.label(
                    "Platform interaktif lengkap dengan materi, template kode, dan latihan soal \
                     algoritma struktur data dalam Bahasa Indonesia.",
                );
                ui.add_space(24.0);
            });

            if cards.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.label(format!("Tidak ada topik untuk \"{}\"", app.session.query().trim()));
                });
                return;
            }

            let columns = ((ui.available_width() / 300.0).floor() as usize).clamp(1, 3);
            let card_w = (ui.available_width() / columns as f32) - 32.0;
            let mut target = None;

            egui::Grid::new("topic_grid")
                .spacing([12.0, 12.0])
                .show(ui, |ui| {
                    for (i, card) in cards.iter().enumerate() {
                        if topic_card(ui, card, card_w) {
                            target = Some(card.id.clone());
                        }
                        if (i + 1) % columns == 0 {
                            ui.end_row();
                        }
                    }
                });

            if let Some(id) = target {
                app.open_topic(&id);
            }
        });
    });
}
