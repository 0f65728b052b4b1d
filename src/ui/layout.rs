use crate::app::KodeSiapApp;
use crate::model::ViewSelector;
use egui::{Button, Context, ProgressBar, RichText, ScrollArea, Ui};
use egui_code_editor::{CodeEditor, ColorTheme, Syntax};

pub fn top_panel(app: &mut KodeSiapApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if ui
                .add(Button::new(RichText::new("⌨ KodeSiap").strong()).frame(false))
                .clicked()
            {
                app.volver_al_inicio();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                // ----------- BOTÓN DE TEMA -----------
                let (label, hint) = if app.session.dark_mode() {
                    ("☀", "Switch to Light Mode")
                } else {
                    ("🌙", "Switch to Dark Mode")
                };
                if ui.button(label).on_hover_text(hint).clicked() {
                    app.toggle_dark_mode(ctx);
                }

                // Búsqueda, solo en la portada
                if app.session.view().is_home() {
                    ui.add(
                        egui::TextEdit::singleline(app.session.query_mut())
                            .hint_text("🔍 Cari topik...")
                            .desired_width(220.0),
                    );
                }
            });
        });
    });
}

pub fn side_panel(app: &mut KodeSiapApp, ctx: &Context) {
    let summary = app.session.progress_summary();
    let cards = app.session.sidebar_cards();

    egui::SidePanel::left("topics_panel")
        .resizable(false)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.add_space(12.0);
            ui.label(RichText::new("PROGRESS").small().strong());
            ui.add(ProgressBar::new(summary.ratio).desired_height(8.0));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                ui.small(summary.label());
            });
            ui.add_space(12.0);

            let mut target = None;
            ScrollArea::vertical().show(ui, |ui| {
                for card in &cards {
                    if ui.selectable_label(card.active, card.label()).clicked() {
                        target = Some(card.id.clone());
                    }
                }
            });
            if let Some(id) = target {
                app.navigate(ViewSelector::Topic(id));
            }
        });
}

/// Editor de entrada con ancho fijo
pub fn code_editor_input(ui: &mut Ui, id: &str, width: f32, rows: usize, text: &mut String) {
    let fontsize = ui.fonts(|f| f.row_height(&egui::TextStyle::Monospace.resolve(ui.style())));
    ScrollArea::vertical()
        .id_salt(format!("{id}_scroll"))
        .max_height(320.0)
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.set_width(width);
            CodeEditor::default()
                .id_source(id)
                .with_rows(rows)
                .with_fontsize(fontsize)
                .with_theme(ColorTheme::GITHUB_DARK)
                .with_syntax(Syntax::python())
                .with_numlines(true)
                .vscroll(false)
                .show(ui, text);
        });
}

/// Editor de sólo lectura (plantillas y soluciones)
pub fn code_block(ui: &mut Ui, id: &str, width: f32, code: &str) {
    let mut buf = code.to_owned();
    let rows = code.lines().count().max(1);
    let fontsize = ui.fonts(|f| f.row_height(&egui::TextStyle::Monospace.resolve(ui.style())));
    ui.scope(|ui| {
        ui.set_width(width);
        CodeEditor::default()
            .id_source(id)
            .with_rows(rows)
            .with_fontsize(fontsize)
            .with_theme(ColorTheme::GITHUB_DARK)
            .with_syntax(Syntax::python())
            .with_numlines(false)
            .vscroll(false)
            .show(ui, &mut buf);
    });
}

/// Dibuja dos botones del mismo tamaño en una fila; el primero puede
/// desactivarse. Devuelve (clic primero, clic segundo).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left: Button<'_>,
    right: Button<'_>,
    left_enabled: bool,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui
            .add_enabled_ui(left_enabled, |ui| ui.add_sized([btn_w, 32.0], left))
            .inner
            .clicked();
        clicked_right = ui.add_sized([btn_w, 32.0], right).clicked();
    });
    (clicked_left, clicked_right)
}
