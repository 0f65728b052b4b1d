// src/ui/helpers.rs
use crate::model::Difficulty;
use crate::view_models::TopicCard;
use egui::{Color32, Frame, Margin, RichText, Sense, Ui};

pub fn difficulty_color(difficulty: Difficulty) -> Color32 {
    match difficulty {
        Difficulty::Easy => Color32::from_rgb(22, 163, 74),
        Difficulty::Medium => Color32::from_rgb(202, 138, 4),
        Difficulty::Hard => Color32::from_rgb(220, 38, 38),
    }
}

pub fn difficulty_chip(ui: &mut Ui, difficulty: Difficulty) {
    ui.label(
        RichText::new(difficulty.as_str())
            .small()
            .strong()
            .color(difficulty_color(difficulty)),
    );
}

/// Tarjeta de tema en la portada. Devuelve true si se pulsó.
pub fn topic_card(ui: &mut Ui, card: &TopicCard, width: f32) -> bool {
    let response = Frame::group(ui.style())
        .inner_margin(Margin::same(14))
        .show(ui, |ui| {
            ui.set_width(width);
            ui.horizontal(|ui| {
                ui.label(RichText::new(card.glyph.symbol()).size(26.0));
                if card.completed {
                    ui.label(RichText::new("✅").color(Color32::from_rgb(22, 163, 74)));
                }
            });
            ui.label(RichText::new(&card.title).heading().strong());
            ui.label(&card.description);
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.small(card.badge());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new("Mulai Belajar ▶").strong());
                });
            });
        })
        .response;

    response.interact(Sense::click()).clicked()
}

/// Bloque etiqueta + valor monoespaciado (formatos, complejidades)
pub fn labeled_mono(ui: &mut Ui, label: &str, value: &str) {
    ui.vertical(|ui| {
        ui.label(RichText::new(label).strong());
        ui.label(RichText::new(value).monospace().small());
    });
}
