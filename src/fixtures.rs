// Catálogos mínimos para los tests unitarios

use crate::catalog::Catalog;
use crate::model::{Difficulty, Problem, TestCase, Topic};
use std::sync::Arc;

pub fn problem(id: &str) -> Problem {
    Problem {
        id: id.to_string(),
        title: format!("Problem {id}"),
        difficulty: Difficulty::Easy,
        description: format!("Descripción de {id}"),
        input_format: "Una línea".into(),
        output_format: "Un entero".into(),
        sample_input: "1 2".into(),
        sample_output: "3".into(),
        explanation: None,
        solution_code: "def solution():\n    return 3".into(),
        time_complexity: "O(1)".into(),
        space_complexity: "O(1)".into(),
        test_cases: vec![TestCase {
            input: "1 2".into(),
            output: "3".into(),
        }],
    }
}

pub fn topic(id: &str, title: &str, problem_ids: &[&str]) -> Topic {
    Topic {
        id: id.to_string(),
        title: title.to_string(),
        icon: "BookOpen".into(),
        description: format!("Sobre {title}"),
        concept: String::new(),
        template_code: String::new(),
        problems: problem_ids.iter().map(|p| problem(p)).collect(),
    }
}

/// T1 = [p1, p2], T2 = [p3]
pub fn small_catalog() -> Arc<Catalog> {
    Arc::new(
        Catalog::new(vec![
            topic("T1", "Arrays", &["p1", "p2"]),
            topic("T2", "Graphs", &["p3"]),
        ])
        .unwrap(),
    )
}
