// src/session.rs

use crate::catalog::Catalog;
use crate::model::ViewSelector;
use crate::navigation::{self, ResolvedView};
use crate::progress::{ProgressStore, SolveOutcome};
use crate::storage::ProgressSlot;
use crate::view_models::{ProgressSummary, TopicCard};
use std::sync::Arc;

/// Estado de una sesión: catálogo, progreso, vista activa y tema.
///
/// Se crea una sola vez con [`Session::bootstrap`] y se pasa por referencia
/// a la interfaz; no hay estado global.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Arc<Catalog>,
    progress: ProgressStore,
    view: ViewSelector,
    query: String,
    dark_mode: bool,
    view_epoch: u64,
}

impl Session {
    /// Arranque: modo oscuro detectado (o claro si no se sabe), progreso
    /// leído de la ranura y reconciliado con el catálogo, vista de inicio.
    pub fn bootstrap(
        catalog: Arc<Catalog>,
        prefers_dark: Option<bool>,
        slot: &dyn ProgressSlot,
    ) -> Self {
        let dark_mode = prefers_dark.unwrap_or(false);

        let mut progress = ProgressStore::new(Arc::clone(&catalog));
        progress.load(slot.read().as_deref());

        log::info!(
            "Sesión iniciada: {} temas, {} problemas resueltos, modo {}",
            catalog.len(),
            progress.solved_count(),
            if dark_mode { "oscuro" } else { "claro" }
        );

        Self {
            catalog,
            progress,
            view: ViewSelector::Home,
            query: String::new(),
            dark_mode,
            view_epoch: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_arc(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn progress(&self) -> &ProgressStore {
        &self.progress
    }

    pub fn view(&self) -> &ViewSelector {
        &self.view
    }

    /// Cambia de vista. Cualquier cambio invalida las ejecuciones pendientes
    /// de la vista anterior.
    pub fn navigate(&mut self, selector: ViewSelector) {
        if self.view != selector {
            log::debug!("Navegando a {selector:?}");
            self.view = selector;
            self.view_epoch += 1;
        }
    }

    pub fn go_home(&mut self) {
        self.navigate(ViewSelector::Home);
    }

    pub fn view_epoch(&self) -> u64 {
        self.view_epoch
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query_mut(&mut self) -> &mut String {
        &mut self.query
    }

    pub fn resolve(&self) -> ResolvedView<'_> {
        navigation::resolve_view(&self.view, &self.catalog, &self.query)
    }

    /// Gancho de "resuelto" para la interfaz: registra y persiste
    pub fn on_solve(&mut self, problem_id: &str, slot: &mut dyn ProgressSlot) -> SolveOutcome {
        self.progress.record_solved(problem_id, slot)
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn set_dark_mode(&mut self, dark: bool) {
        self.dark_mode = dark;
    }

    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    pub fn progress_summary(&self) -> ProgressSummary {
        navigation::progress_summary(&self.progress, &self.catalog)
    }

    /// Tarjetas de todos los temas (barra lateral)
    pub fn sidebar_cards(&self) -> Vec<TopicCard> {
        let all: Vec<_> = self.catalog.topics().iter().collect();
        navigation::topic_cards(&all, &self.progress, &self.view)
    }

    /// Tarjetas filtradas por la búsqueda (inicio)
    pub fn home_cards(&self) -> Vec<TopicCard> {
        let filtered = navigation::filter_topics(&self.query, &self.catalog);
        navigation::topic_cards(&filtered, &self.progress, &self.view)
    }
}
