mod helpers;
pub mod layout;
pub mod views;

use crate::app::KodeSiapApp;
use crate::navigation::{ResolvedView, resolve_view};
use crate::storage::PROGRESS_KEY;
use eframe::{App, Frame};
use egui::Context;
use layout::{side_panel, top_panel};
use std::sync::Arc;

impl App for KodeSiapApp {
    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        // El tema del sistema solo se conoce tras la primera pasada
        self.detect_system_theme(ctx);

        // Ejecuciones simuladas que ya vencieron
        self.poll_runs(ctx, frame);

        top_panel(self, ctx);
        side_panel(self, ctx);

        // La vista resuelta solo toma prestado el catálogo, no `self`
        let catalog = Arc::clone(self.session.catalog_arc());
        match resolve_view(self.session.view(), &catalog, self.session.query()) {
            ResolvedView::Home { .. } => views::home::ui_home(self, ctx),
            ResolvedView::Topic(topic) => views::topic::ui_topic(self, ctx, topic),
            ResolvedView::NotFound { requested } => {
                views::not_found::ui_not_found(self, ctx, &requested)
            }
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        storage.set_string(PROGRESS_KEY, self.session.progress().snapshot().to_json());
    }
}
