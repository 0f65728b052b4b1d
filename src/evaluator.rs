// src/evaluator.rs

use crate::catalog::Catalog;
use crate::model::Problem;

/// Código inicial del editor (y el que restaura "reset")
pub const STARTER_CODE: &str = "def solution():\n    # Tulis kodemu disini\n    pass";

/// Retardo simulado de la ejecución, en segundos
pub const RUN_DELAY_SECS: f64 = 1.5;

/// Longitud mínima (sin espacios de los extremos) para dar el código por bueno
pub const MIN_CODE_LEN: usize = 20;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Passed { log: String },
    Failed { log: String },
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Passed { .. })
    }

    pub fn log(&self) -> &str {
        match self {
            RunOutcome::Passed { log } | RunOutcome::Failed { log } => log,
        }
    }
}

/// Decide si un envío es correcto. El núcleo solo registra el resultado.
pub trait Evaluator {
    fn evaluate(&self, code: &str, problem: &Problem) -> RunOutcome;
}

/// Evaluador simulado: no ejecuta nada, solo mira la longitud del código.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthHeuristic;

impl Evaluator for LengthHeuristic {
    fn evaluate(&self, code: &str, problem: &Problem) -> RunOutcome {
        if code.trim().chars().count() < MIN_CODE_LEN {
            return RunOutcome::Failed {
                log: format!(
                    "Error: Code seems too short.\nExpected Output: {}\nActual Output: (Empty)",
                    problem.sample_output
                ),
            };
        }

        let mut log = format!(
            "Test Case 1: Input [{}] -> Passed\n",
            problem.sample_input.replace('\n', ", ")
        );
        if problem.test_cases.is_empty() {
            log.push_str("Test Case 2: Hidden -> Passed\n");
        } else {
            for i in 0..problem.test_cases.len() {
                log.push_str(&format!("Test Case {}: Hidden -> Passed\n", i + 2));
            }
        }
        log.push_str("\nResult: Accepted");
        RunOutcome::Passed { log }
    }
}

/// Evaluador fijo para tests
#[derive(Debug, Clone)]
pub struct FixedEvaluator(pub RunOutcome);

impl Evaluator for FixedEvaluator {
    fn evaluate(&self, _code: &str, _problem: &Problem) -> RunOutcome {
        self.0.clone()
    }
}

#[derive(Debug, Clone)]
struct PendingRun {
    problem_id: String,
    code: String,
    due_at: f64,
    epoch: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishedRun {
    pub problem_id: String,
    pub outcome: RunOutcome,
}

/// Ejecuciones diferidas. Cada una lleva la época de la vista en la que se
/// lanzó; si al vencer la vista ya cambió, se descarta sin efectos.
#[derive(Debug, Default, Clone)]
pub struct RunScheduler {
    pending: Vec<PendingRun>,
}

impl RunScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Programa una ejecución. Devuelve `false` si ya había una en curso
    /// para ese problema.
    pub fn schedule(&mut self, problem_id: &str, code: &str, now: f64, epoch: u64) -> bool {
        if self.is_running(problem_id) {
            return false;
        }
        self.pending.push(PendingRun {
            problem_id: problem_id.to_string(),
            code: code.to_string(),
            due_at: now + RUN_DELAY_SECS,
            epoch,
        });
        true
    }

    pub fn is_running(&self, problem_id: &str) -> bool {
        self.pending.iter().any(|r| r.problem_id == problem_id)
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Segundos hasta la próxima ejecución (para pedir repintado)
    pub fn next_due_in(&self, now: f64) -> Option<f64> {
        self.pending
            .iter()
            .map(|r| (r.due_at - now).max(0.0))
            .min_by(|a, b| a.total_cmp(b))
    }

    pub fn poll(
        &mut self,
        now: f64,
        current_epoch: u64,
        evaluator: &dyn Evaluator,
        catalog: &Catalog,
    ) -> Vec<FinishedRun> {
        let (due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|r| r.due_at <= now);
        self.pending = waiting;

        due.into_iter()
            .filter_map(|run| {
                if run.epoch != current_epoch {
                    log::debug!("Ejecución de {} descartada: la vista cambió", run.problem_id);
                    return None;
                }
                let problem = catalog.problem(&run.problem_id)?;
                Some(FinishedRun {
                    outcome: evaluator.evaluate(&run.code, problem),
                    problem_id: run.problem_id,
                })
            })
            .collect()
    }
}
