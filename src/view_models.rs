// src/view_models.rs

use crate::icons::Glyph;

#[derive(Clone, Debug)]
pub struct TopicCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub glyph: Glyph,
    pub problem_count: usize,
    pub solved_count: usize,
    pub completed: bool,
    pub active: bool, // tema abierto ahora mismo
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressSummary {
    pub completed: usize,
    pub total: usize,
    pub ratio: f32,
}

impl TopicCard {
    pub fn label(&self) -> String {
        if self.completed {
            format!("{} {} ✅", self.glyph.symbol(), self.title)
        } else {
            format!("{} {}", self.glyph.symbol(), self.title)
        }
    }

    pub fn badge(&self) -> String {
        if self.solved_count == 0 {
            format!("{} Soal", self.problem_count)
        } else {
            format!("{}/{} Soal", self.solved_count, self.problem_count)
        }
    }
}

impl ProgressSummary {
    pub fn label(&self) -> String {
        format!("{} / {} Topik", self.completed, self.total)
    }
}
