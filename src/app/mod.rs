use crate::catalog::Catalog;
use crate::evaluator::{Evaluator, LengthHeuristic, RunScheduler, STARTER_CODE};
use crate::session::Session;
use crate::storage::EframeReader;
use eframe::egui;
use egui_commonmark::CommonMarkCache;
use std::collections::HashMap;
use std::sync::Arc;

// Submódulos
pub mod actions;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RunStatus {
    #[default]
    Idle,
    Running,
    Success,
    Error,
}

/// Estado local del panel de un problema (editor, consola, solución)
#[derive(Clone, Debug)]
pub struct SolverState {
    pub code: String,
    pub show_solution: bool,
    pub status: RunStatus,
    pub output: String,
}

impl Default for SolverState {
    fn default() -> Self {
        Self {
            code: STARTER_CODE.to_string(),
            show_solution: false,
            status: RunStatus::Idle,
            output: String::new(),
        }
    }
}

pub struct KodeSiapApp {
    pub session: Session,
    pub solvers: HashMap<String, SolverState>,
    pub runs: RunScheduler,
    pub evaluator: Box<dyn Evaluator>,
    pub cm_cache: CommonMarkCache,
    /// Ya se consultó el tema del sistema (primera pasada de `update`)
    pub theme_detected: bool,
}

impl KodeSiapApp {
    /// Arranque: progreso guardado en el almacenamiento de eframe. El tema
    /// del sistema llega con la primera pasada (ver `detect_system_theme`).
    pub fn new(cc: &eframe::CreationContext<'_>, catalog: Arc<Catalog>) -> Self {
        let prefers_dark = cc.egui_ctx.system_theme().map(|t| t == egui::Theme::Dark);
        let session = Session::bootstrap(catalog, prefers_dark, &EframeReader(cc.storage));

        let app = Self::with_session(session, Box::new(LengthHeuristic));
        app.apply_visuals(&cc.egui_ctx);
        app
    }

    pub fn with_session(session: Session, evaluator: Box<dyn Evaluator>) -> Self {
        Self {
            session,
            solvers: HashMap::new(),
            runs: RunScheduler::new(),
            evaluator,
            cm_cache: CommonMarkCache::default(),
            theme_detected: false,
        }
    }

    pub fn apply_visuals(&self, ctx: &egui::Context) {
        if self.session.dark_mode() {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }
    }

    pub fn solver(&self, problem_id: &str) -> Option<&SolverState> {
        self.solvers.get(problem_id)
    }

    pub fn solver_mut(&mut self, problem_id: &str) -> &mut SolverState {
        self.solvers.entry(problem_id.to_string()).or_default()
    }
}
