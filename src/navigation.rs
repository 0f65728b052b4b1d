// src/navigation.rs

use crate::catalog::Catalog;
use crate::icons::Glyph;
use crate::model::{Topic, ViewSelector};
use crate::progress::ProgressStore;
use crate::view_models::{ProgressSummary, TopicCard};

/// Resultado de resolver un `ViewSelector` contra el catálogo
#[derive(Debug, Clone)]
pub enum ResolvedView<'a> {
    Home { topics: Vec<&'a Topic> },
    Topic(&'a Topic),
    NotFound { requested: String },
}

impl ResolvedView<'_> {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolvedView::NotFound { .. })
    }
}

pub fn resolve_view<'a>(
    selector: &ViewSelector,
    catalog: &'a Catalog,
    query: &str,
) -> ResolvedView<'a> {
    match selector {
        ViewSelector::Home => ResolvedView::Home {
            topics: filter_topics(query, catalog),
        },
        ViewSelector::Topic(id) => match catalog.topic(id) {
            Some(topic) => ResolvedView::Topic(topic),
            None => {
                log::warn!("Tema no encontrado: {id}");
                ResolvedView::NotFound {
                    requested: id.clone(),
                }
            }
        },
    }
}

/// Filtra por título o descripción, sin distinguir mayúsculas.
/// Conserva el orden del catálogo.
pub fn filter_topics<'a>(query: &str, catalog: &'a Catalog) -> Vec<&'a Topic> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return catalog.topics().iter().collect();
    }
    catalog
        .topics()
        .iter()
        .filter(|t| {
            t.title.to_lowercase().contains(&needle)
                || t.description.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Fracción de temas completados, en [0, 1]. Catálogo vacío => 0.
pub fn progress_ratio(progress: &ProgressStore, catalog: &Catalog) -> f32 {
    if catalog.is_empty() {
        return 0.0;
    }
    let completed = catalog
        .topics()
        .iter()
        .filter(|t| progress.is_topic_completed(&t.id))
        .count();
    (completed as f32 / catalog.len() as f32).clamp(0.0, 1.0)
}

pub fn progress_summary(progress: &ProgressStore, catalog: &Catalog) -> ProgressSummary {
    ProgressSummary {
        completed: progress.completed_count(),
        total: catalog.len(),
        ratio: progress_ratio(progress, catalog),
    }
}

pub fn topic_cards(
    topics: &[&Topic],
    progress: &ProgressStore,
    selector: &ViewSelector,
) -> Vec<TopicCard> {
    topics
        .iter()
        .map(|t| TopicCard {
            id: t.id.clone(),
            title: t.title.clone(),
            description: t.description.clone(),
            glyph: Glyph::from_name(&t.icon),
            problem_count: t.problems.len(),
            solved_count: progress.solved_in_topic(t),
            completed: progress.is_topic_completed(&t.id),
            active: matches!(selector, ViewSelector::Topic(id) if *id == t.id),
        })
        .collect()
}
