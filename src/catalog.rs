// src/catalog.rs

use crate::model::{Problem, Topic};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Tema duplicado: {0}")]
    DuplicateTopic(String),

    #[error("Problema duplicado: {problem_id} (en {first_topic} y {second_topic})")]
    DuplicateProblem {
        problem_id: String,
        first_topic: String,
        second_topic: String,
    },

    #[error("El tema {0} no tiene problemas")]
    EmptyTopic(String),

    #[error("No se pudo parsear el catálogo YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Árbol inmutable Temas → Problemas.
///
/// Se construye una sola vez al arrancar; los índices inversos permiten
/// localizar el tema dueño de un problema sin recorrer todo el catálogo.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    topics: Vec<Topic>,
    topic_index: HashMap<String, usize>,
    problem_owner: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(topics: Vec<Topic>) -> Result<Self, CatalogError> {
        let mut topic_index = HashMap::new();
        let mut problem_owner: HashMap<String, usize> = HashMap::new();

        for (ti, topic) in topics.iter().enumerate() {
            if topic.problems.is_empty() {
                return Err(CatalogError::EmptyTopic(topic.id.clone()));
            }
            if topic_index.insert(topic.id.clone(), ti).is_some() {
                return Err(CatalogError::DuplicateTopic(topic.id.clone()));
            }
            for problem in &topic.problems {
                if let Some(&prev) = problem_owner.get(&problem.id) {
                    return Err(CatalogError::DuplicateProblem {
                        problem_id: problem.id.clone(),
                        first_topic: topics[prev].id.clone(),
                        second_topic: topic.id.clone(),
                    });
                }
                problem_owner.insert(problem.id.clone(), ti);
            }
        }

        Ok(Self {
            topics,
            topic_index,
            problem_owner,
        })
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    pub fn topic(&self, id: &str) -> Option<&Topic> {
        self.topic_index.get(id).map(|&ti| &self.topics[ti])
    }

    /// Tema al que pertenece un problema (O(1))
    pub fn owner_of(&self, problem_id: &str) -> Option<&Topic> {
        self.problem_owner.get(problem_id).map(|&ti| &self.topics[ti])
    }

    pub fn problem(&self, problem_id: &str) -> Option<&Problem> {
        self.owner_of(problem_id)?.problem(problem_id)
    }

    pub fn contains_topic(&self, id: &str) -> bool {
        self.topic_index.contains_key(id)
    }

    pub fn contains_problem(&self, id: &str) -> bool {
        self.problem_owner.contains_key(id)
    }

    // Aplanado, útil para stats globales
    pub fn all_problems(&self) -> impl Iterator<Item = &Problem> {
        self.topics.iter().flat_map(|t| t.problems.iter())
    }
}
