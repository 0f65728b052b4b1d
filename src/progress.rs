// src/progress.rs

use crate::catalog::Catalog;
use crate::model::Topic;
use crate::storage::ProgressSlot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;

/// Formato persistido: `{ "topics": [...], "problems": [...] }`.
/// Ambos arrays son conjuntos; el orden no importa al leer.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedProgress {
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub problems: Vec<String>,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no hay progreso guardado")]
    Missing,
    #[error("progreso guardado corrupto: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl PersistedProgress {
    pub fn parse(blob: Option<&str>) -> Result<Self, LoadError> {
        let blob = blob.filter(|b| !b.trim().is_empty()).ok_or(LoadError::Missing)?;
        Ok(serde_json::from_str(blob)?)
    }

    pub fn to_json(&self) -> String {
        // Vec<String> siempre serializa
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveOutcome {
    /// El id no está en el catálogo: no se toca nada
    Unknown,
    AlreadySolved,
    Solved { topic_completed: bool },
}

/// Temas completados = temas cuyos problemas están todos resueltos.
pub fn derive_completed(catalog: &Catalog, solved: &BTreeSet<String>) -> BTreeSet<String> {
    catalog
        .topics()
        .iter()
        .filter(|t| is_fully_solved(t, solved))
        .map(|t| t.id.clone())
        .collect()
}

fn is_fully_solved(topic: &Topic, solved: &BTreeSet<String>) -> bool {
    !topic.problems.is_empty() && topic.problem_ids().all(|id| solved.contains(id))
}

/// Dueño único del progreso: problemas resueltos y temas completados.
#[derive(Debug, Clone)]
pub struct ProgressStore {
    catalog: Arc<Catalog>,
    solved: BTreeSet<String>,
    completed: BTreeSet<String>,
}

impl ProgressStore {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            solved: BTreeSet::new(),
            completed: BTreeSet::new(),
        }
    }

    /// Registra un problema resuelto y guarda el snapshot en `slot`.
    /// Idempotente; los ids desconocidos se ignoran.
    pub fn record_solved(&mut self, problem_id: &str, slot: &mut dyn ProgressSlot) -> SolveOutcome {
        let outcome = self.apply_solved(problem_id);
        if let SolveOutcome::Solved { .. } = outcome {
            slot.write(&self.snapshot().to_json());
        }
        outcome
    }

    fn apply_solved(&mut self, problem_id: &str) -> SolveOutcome {
        let catalog = Arc::clone(&self.catalog);
        let Some(topic) = catalog.owner_of(problem_id) else {
            log::debug!("Problema desconocido ignorado: {problem_id}");
            return SolveOutcome::Unknown;
        };

        if !self.solved.insert(problem_id.to_string()) {
            return SolveOutcome::AlreadySolved;
        }

        let topic_completed = is_fully_solved(topic, &self.solved);
        if topic_completed && self.completed.insert(topic.id.clone()) {
            log::info!("Tema completado: {}", topic.id);
        }
        log::info!("Problema resuelto: {problem_id} ({})", topic.id);

        SolveOutcome::Solved { topic_completed }
    }

    /// Restaura el progreso desde un blob persistido.
    ///
    /// Nunca falla: un blob ausente o corrupto deja el progreso vacío. Los ids
    /// que ya no existen en el catálogo se descartan y los temas completados
    /// se recalculan desde los problemas resueltos.
    pub fn load(&mut self, blob: Option<&str>) {
        let persisted = match PersistedProgress::parse(blob) {
            Ok(p) => p,
            Err(LoadError::Missing) => {
                log::debug!("Sin progreso guardado");
                PersistedProgress::default()
            }
            Err(e) => {
                log::warn!("Se ignora el progreso guardado: {e}");
                PersistedProgress::default()
            }
        };

        let total = persisted.problems.len();
        self.solved = persisted
            .problems
            .into_iter()
            .filter(|id| self.catalog.contains_problem(id))
            .collect();
        let dropped = total.saturating_sub(self.solved.len());
        if dropped > 0 {
            log::info!("Descartados {dropped} problemas que ya no existen en el catálogo");
        }

        self.completed = derive_completed(&self.catalog, &self.solved);

        let stored_topics: BTreeSet<String> = persisted.topics.into_iter().collect();
        if stored_topics != self.completed {
            log::debug!(
                "Temas guardados {:?} recalculados como {:?}",
                stored_topics,
                self.completed
            );
        }
    }

    /// Snapshot determinista (ordenado) para guardar
    pub fn snapshot(&self) -> PersistedProgress {
        PersistedProgress {
            topics: self.completed.iter().cloned().collect(),
            problems: self.solved.iter().cloned().collect(),
        }
    }

    pub fn is_solved(&self, problem_id: &str) -> bool {
        self.solved.contains(problem_id)
    }

    pub fn is_topic_completed(&self, topic_id: &str) -> bool {
        self.completed.contains(topic_id)
    }

    pub fn solved_ids(&self) -> &BTreeSet<String> {
        &self.solved
    }

    pub fn completed_ids(&self) -> &BTreeSet<String> {
        &self.completed
    }

    pub fn solved_count(&self) -> usize {
        self.solved.len()
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn solved_in_topic(&self, topic: &Topic) -> usize {
        topic.problem_ids().filter(|id| self.solved.contains(*id)).count()
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::small_catalog;
    use crate::storage::MemorySlot;

    fn assert_completion_matches(store: &ProgressStore) {
        let expected = derive_completed(store.catalog(), store.solved_ids());
        assert_eq!(store.completed_ids(), &expected);
    }

    #[test]
    fn topic_completes_when_last_problem_is_solved() {
        let mut store = ProgressStore::new(small_catalog());
        let mut slot = MemorySlot::new();

        let first = store.record_solved("p1", &mut slot);
        assert_eq!(first, SolveOutcome::Solved { topic_completed: false });
        assert!(!store.is_topic_completed("T1"));
        assert_completion_matches(&store);

        let second = store.record_solved("p2", &mut slot);
        assert_eq!(second, SolveOutcome::Solved { topic_completed: true });
        assert!(store.is_topic_completed("T1"));
        assert!(!store.is_topic_completed("T2"));
        assert_completion_matches(&store);
    }

    #[test]
    fn solving_twice_is_idempotent_and_writes_once() {
        let mut store = ProgressStore::new(small_catalog());
        let mut slot = MemorySlot::new();

        store.record_solved("p3", &mut slot);
        let after_once = store.snapshot();
        let again = store.record_solved("p3", &mut slot);

        assert_eq!(again, SolveOutcome::AlreadySolved);
        assert_eq!(store.snapshot(), after_once);
        assert_eq!(slot.writes(), 1);
        assert!(store.is_topic_completed("T2"));
    }

    #[test]
    fn unknown_problem_is_a_noop() {
        let mut store = ProgressStore::new(small_catalog());
        let mut slot = MemorySlot::new();

        assert_eq!(store.record_solved("ghost", &mut slot), SolveOutcome::Unknown);
        assert_eq!(store.solved_count(), 0);
        assert_eq!(store.completed_count(), 0);
        assert_eq!(slot.writes(), 0);
    }

    #[test]
    fn solve_writes_snapshot_through_slot() {
        let mut store = ProgressStore::new(small_catalog());
        let mut slot = MemorySlot::new();
        store.record_solved("p1", &mut slot);
        store.record_solved("p2", &mut slot);

        let stored = PersistedProgress::parse(slot.read().as_deref()).unwrap();
        assert_eq!(stored.problems, vec!["p1", "p2"]);
        assert_eq!(stored.topics, vec!["T1"]);
    }

    #[test]
    fn load_drops_ids_missing_from_catalog() {
        let mut store = ProgressStore::new(small_catalog());
        store.load(Some(r#"{"topics":["ghost"],"problems":["p1"]}"#));

        assert!(!store.is_topic_completed("ghost"));
        assert!(store.is_solved("p1"));
        assert_eq!(store.solved_count(), 1);
        assert_eq!(store.completed_count(), 0);

        store.load(Some(r#"{"topics":["ghost"],"problems":["nope"]}"#));
        assert_eq!(store.solved_count(), 0);
        assert_eq!(store.completed_count(), 0);
    }

    #[test]
    fn load_rederives_completed_topics() {
        let mut store = ProgressStore::new(small_catalog());
        // T1 marcado pero incompleto; T2 completo pero sin marcar
        store.load(Some(r#"{"topics":["T1"],"problems":["p1","p3"]}"#));

        assert!(!store.is_topic_completed("T1"));
        assert!(store.is_topic_completed("T2"));
        assert_completion_matches(&store);
    }

    #[test]
    fn missing_or_malformed_blob_yields_empty_state() {
        let fresh = ProgressStore::new(small_catalog()).snapshot();

        for blob in [None, Some("{invalid json"), Some(""), Some("[1,2,3]"), Some("null")] {
            let mut store = ProgressStore::new(small_catalog());
            store.load(Some(r#"{"topics":[],"problems":["p1"]}"#));
            store.load(blob);
            assert_eq!(store.snapshot(), fresh, "blob: {blob:?}");
        }
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let mut store = ProgressStore::new(small_catalog());
        store.load(Some(r#"{"problems":["p3"]}"#));
        assert!(store.is_solved("p3"));
        assert!(store.is_topic_completed("T2"));
    }

    #[test]
    fn snapshot_round_trips() {
        let mut store = ProgressStore::new(small_catalog());
        let mut slot = MemorySlot::new();
        store.record_solved("p2", &mut slot);
        store.record_solved("p3", &mut slot);

        let blob = store.snapshot().to_json();
        let mut restored = ProgressStore::new(small_catalog());
        restored.load(Some(&blob));

        assert_eq!(restored.solved_ids(), store.solved_ids());
        assert_eq!(restored.completed_ids(), store.completed_ids());
    }

    #[test]
    fn counts_solved_per_topic() {
        let catalog = small_catalog();
        let mut store = ProgressStore::new(Arc::clone(&catalog));
        store.record_solved("p1", &mut MemorySlot::new());
        let t1 = catalog.topic("T1").unwrap();
        assert_eq!(store.solved_in_topic(t1), 1);
    }
}
