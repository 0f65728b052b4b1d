//! Propiedades del progreso y la navegación sobre el catálogo embebido.

use kodesiap::catalog::Catalog;
use kodesiap::data::read_catalog_embedded;
use kodesiap::navigation::{filter_topics, progress_ratio};
use kodesiap::progress::{PersistedProgress, ProgressStore, derive_completed};
use kodesiap::storage::{MemorySlot, ProgressSlot};
use proptest::prelude::*;
use std::sync::Arc;

fn catalog() -> Arc<Catalog> {
    Arc::new(read_catalog_embedded().expect("embedded catalog"))
}

fn problem_ids(catalog: &Catalog) -> Vec<String> {
    catalog.all_problems().map(|p| p.id.clone()).collect()
}

/// Secuencias de eventos "resuelto": ids reales mezclados con desconocidos
fn arb_events() -> impl Strategy<Value = Vec<String>> {
    let known = problem_ids(&catalog());
    let id = prop_oneof![
        4 => proptest::sample::select(known),
        1 => "[a-z]{1,6}-[0-9]".prop_map(|s| s),
    ];
    proptest::collection::vec(id, 0..40)
}

fn assert_completion_invariant(store: &ProgressStore, catalog: &Catalog) {
    for topic in catalog.topics() {
        let all_solved = topic.problems.iter().all(|p| store.is_solved(&p.id));
        assert_eq!(store.is_topic_completed(&topic.id), all_solved, "topic {}", topic.id);
    }
    for id in store.solved_ids() {
        assert!(catalog.contains_problem(id));
    }
}

proptest! {
    #[test]
    fn completion_holds_after_every_event(events in arb_events()) {
        let catalog = catalog();
        let mut store = ProgressStore::new(Arc::clone(&catalog));
        let mut slot = MemorySlot::new();
        for id in &events {
            store.record_solved(id, &mut slot);
            assert_completion_invariant(&store, &catalog);
        }
    }

    #[test]
    fn solving_twice_equals_solving_once(events in arb_events()) {
        let catalog = catalog();
        let mut once = ProgressStore::new(Arc::clone(&catalog));
        let mut twice = ProgressStore::new(Arc::clone(&catalog));
        let mut slot = MemorySlot::new();
        for id in &events {
            once.record_solved(id, &mut slot);
            twice.record_solved(id, &mut slot);
            twice.record_solved(id, &mut slot);
        }
        prop_assert_eq!(once.snapshot(), twice.snapshot());
    }

    #[test]
    fn snapshot_round_trips(events in arb_events()) {
        let catalog = catalog();
        let mut store = ProgressStore::new(Arc::clone(&catalog));
        let mut slot = MemorySlot::new();
        for id in &events {
            store.record_solved(id, &mut slot);
        }

        let mut restored = ProgressStore::new(Arc::clone(&catalog));
        restored.load(Some(&store.snapshot().to_json()));
        prop_assert_eq!(restored.solved_ids(), store.solved_ids());
        prop_assert_eq!(restored.completed_ids(), store.completed_ids());

        // lo último escrito en la ranura es el mismo estado
        let mut from_slot = ProgressStore::new(Arc::clone(&catalog));
        from_slot.load(slot.read().as_deref());
        prop_assert_eq!(from_slot.snapshot(), store.snapshot());
    }

    #[test]
    fn load_keeps_only_catalog_ids(
        problems in proptest::collection::vec("[a-z]{1,4}-[0-9]", 0..12),
        topics in proptest::collection::vec("[a-z-]{1,12}", 0..6),
    ) {
        let catalog = catalog();
        let blob = PersistedProgress { topics, problems: problems.clone() }.to_json();
        let mut store = ProgressStore::new(Arc::clone(&catalog));
        store.load(Some(&blob));

        for id in store.solved_ids() {
            prop_assert!(catalog.contains_problem(id));
        }
        for p in &problems {
            prop_assert_eq!(store.is_solved(p), catalog.contains_problem(p));
        }
        prop_assert_eq!(store.completed_ids(), &derive_completed(&catalog, store.solved_ids()));
    }

    #[test]
    fn ratio_stays_in_bounds(events in arb_events()) {
        let catalog = catalog();
        let mut store = ProgressStore::new(Arc::clone(&catalog));
        let mut slot = MemorySlot::new();
        for id in &events {
            store.record_solved(id, &mut slot);
            let ratio = progress_ratio(&store, &catalog);
            prop_assert!((0.0..=1.0).contains(&ratio));
        }
    }

    #[test]
    fn filter_matches_title_or_description(query in "[A-Za-z ]{0,6}") {
        let catalog = catalog();
        let needle = query.trim().to_lowercase();
        let expected: Vec<&str> = catalog
            .topics()
            .iter()
            .filter(|t| {
                needle.is_empty()
                    || t.title.to_lowercase().contains(&needle)
                    || t.description.to_lowercase().contains(&needle)
            })
            .map(|t| t.id.as_str())
            .collect();
        let got: Vec<&str> =
            filter_topics(&query, &catalog).iter().map(|t| t.id.as_str()).collect();
        prop_assert_eq!(got, expected);
    }
}

#[test]
fn solving_a_topic_in_order_completes_it() {
    let catalog = catalog();
    let mut store = ProgressStore::new(Arc::clone(&catalog));
    let mut slot = MemorySlot::new();

    store.record_solved("bs-1", &mut slot);
    assert!(!store.is_topic_completed("binary-search"));
    store.record_solved("bs-2", &mut slot);
    assert!(store.is_topic_completed("binary-search"));
    assert_eq!(progress_ratio(&store, &catalog), 1.0 / 8.0);
}

#[test]
fn ghost_ids_are_dropped_on_load() {
    let catalog = catalog();
    let mut store = ProgressStore::new(Arc::clone(&catalog));
    store.load(Some(r#"{"topics":["ghost"],"problems":["p1","bf-1"]}"#));
    assert!(!store.is_topic_completed("ghost"));
    assert!(!store.is_solved("p1"));
    assert!(store.is_solved("bf-1"));
}
