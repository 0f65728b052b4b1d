use super::*;
use crate::evaluator::{FinishedRun, RunOutcome};
use crate::model::ViewSelector;
use crate::progress::SolveOutcome;
use crate::storage::{EframeSlot, NullSlot, ProgressSlot};
use std::time::Duration;

impl KodeSiapApp {
    /// Cambia de vista. Los paneles de la vista anterior se desmontan, así
    /// que su estado local se pierde y sus ejecuciones quedan obsoletas.
    pub fn navigate(&mut self, selector: ViewSelector) {
        if self.session.view() != &selector {
            self.solvers.clear();
        }
        self.session.navigate(selector);
    }

    pub fn open_topic(&mut self, topic_id: &str) {
        self.navigate(ViewSelector::topic(topic_id));
    }

    pub fn volver_al_inicio(&mut self) {
        self.navigate(ViewSelector::Home);
    }

    /// Aplica una vez el tema del sistema. Si en la primera pasada aún no
    /// se conoce, se queda el modo con el que arrancó la sesión.
    pub fn detect_system_theme(&mut self, ctx: &egui::Context) {
        if self.theme_detected {
            return;
        }
        self.theme_detected = true;
        if let Some(theme) = ctx.system_theme() {
            log::debug!("Tema del sistema: {theme:?}");
            self.session.set_dark_mode(theme == egui::Theme::Dark);
        }
        self.apply_visuals(ctx);
    }

    pub fn toggle_dark_mode(&mut self, ctx: &egui::Context) {
        self.theme_detected = true;
        self.session.toggle_dark_mode();
        self.apply_visuals(ctx);
    }

    /// Pulsar "Run Code": programa la evaluación simulada
    pub fn start_run(&mut self, problem_id: &str, now: f64) {
        let epoch = self.session.view_epoch();
        let code = self.solver_mut(problem_id).code.clone();
        if !self.runs.schedule(problem_id, &code, now, epoch) {
            return;
        }
        let solver = self.solver_mut(problem_id);
        solver.status = RunStatus::Running;
        solver.output = "Compiling and running tests...".into();
    }

    pub fn reset_code(&mut self, problem_id: &str) {
        self.solver_mut(problem_id).code = STARTER_CODE.to_string();
    }

    pub fn toggle_solution(&mut self, problem_id: &str) {
        let solver = self.solver_mut(problem_id);
        solver.show_solution = !solver.show_solution;
    }

    /// Recoge las ejecuciones vencidas y registra los aciertos
    pub fn poll_runs(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        if !self.runs.has_pending() {
            return;
        }
        let now = ctx.input(|i| i.time);
        let finished = self.collect_finished(now);

        if !finished.is_empty() {
            match frame.storage_mut() {
                Some(storage) => self.apply_finished(finished, &mut EframeSlot(storage)),
                None => self.apply_finished(finished, &mut NullSlot),
            }
        }

        if let Some(secs) = self.runs.next_due_in(now) {
            ctx.request_repaint_after(Duration::from_secs_f64(secs));
        }
    }

    pub fn collect_finished(&mut self, now: f64) -> Vec<FinishedRun> {
        let epoch = self.session.view_epoch();
        self.runs.poll(now, epoch, self.evaluator.as_ref(), self.session.catalog())
    }

    pub fn apply_finished(&mut self, finished: Vec<FinishedRun>, slot: &mut dyn ProgressSlot) {
        for run in finished {
            let success = run.outcome.is_success();
            {
                let solver = self.solver_mut(&run.problem_id);
                solver.status = if success { RunStatus::Success } else { RunStatus::Error };
                solver.output = run.outcome.log().to_string();
            }
            if let RunOutcome::Passed { .. } = run.outcome {
                if let SolveOutcome::Solved { topic_completed: true } =
                    self.session.on_solve(&run.problem_id, slot)
                {
                    log::info!("Todos los problemas del tema resueltos");
                }
            }
        }
    }
}
