use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub input: String,
    pub output: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Problem {
    pub id: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub description: String,
    pub input_format: String,
    pub output_format: String,
    pub sample_input: String,
    pub sample_output: String,
    #[serde(default)]
    pub explanation: Option<String>,
    pub solution_code: String,
    pub time_complexity: String,
    pub space_complexity: String,
    #[serde(default)]
    pub test_cases: Vec<TestCase>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Topic {
    pub id: String,
    pub title: String,
    /// Nombre simbólico del glifo, ver [`crate::icons::Glyph::from_name`]
    pub icon: String,
    pub description: String,
    pub concept: String,
    pub template_code: String,
    pub problems: Vec<Problem>,
}

impl Topic {
    pub fn problem(&self, id: &str) -> Option<&Problem> {
        self.problems.iter().find(|p| p.id == id)
    }

    pub fn problem_ids(&self) -> impl Iterator<Item = &str> {
        self.problems.iter().map(|p| p.id.as_str())
    }
}

/// Qué pantalla está activa: inicio o un tema concreto
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ViewSelector {
    #[default]
    Home,
    Topic(String),
}

impl ViewSelector {
    pub fn topic(id: impl Into<String>) -> Self {
        ViewSelector::Topic(id.into())
    }

    pub fn is_home(&self) -> bool {
        matches!(self, ViewSelector::Home)
    }
}
