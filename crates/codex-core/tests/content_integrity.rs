//! Static content checks
//!
//! The pages index into these arrays directly, so the data must be
//! well formed.

use std::collections::HashSet;

use codex_core::content::{
    Dataset, ExperienceStatus, NeuralNode, Results, ACHIEVEMENTS, EXPERIENCES, HERO_CAPTION,
    NAV_ITEMS, NEURAL_EDGES, NEURAL_NODES, PROJECTS, SOCIAL_LINKS,
};

#[test]
fn test_project_ids_are_unique_anchors() {
    let ids: HashSet<_> = PROJECTS.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), PROJECTS.len());
    for id in ids {
        assert!(!id.contains(' '), "{id} is used as a URL fragment");
    }
}

#[test]
fn test_every_project_has_body() {
    for project in &PROJECTS {
        assert!(!project.summary.is_empty());
        assert!(!project.contributions.is_empty());
        assert!(!project.questions.is_empty());
        assert!(!project.display_title().starts_with("Project"));
    }
}

#[test]
fn test_results_tables_are_rectangular() {
    for results in PROJECTS.iter().filter_map(|p| p.results) {
        for dataset in Dataset::ALL {
            for group in results.bars(dataset) {
                assert!(group.values.iter().all(|v| *v <= 100), "accuracy is a percentage");
            }
            for row in results.patterns {
                assert_eq!(row.values(dataset).len(), Results::PATTERN_COLUMNS.len());
            }
        }
    }
}

#[test]
fn test_exactly_one_active_experience_last() {
    let active: Vec<_> = EXPERIENCES
        .iter()
        .enumerate()
        .filter(|(_, e)| e.status == ExperienceStatus::Active)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(active, vec![EXPERIENCES.len() - 1]);
    assert!(EXPERIENCES.iter().all(|e| e.details.len() <= 3));
}

#[test]
fn test_neural_edges_reference_known_nodes() {
    for (from, to) in NEURAL_EDGES {
        let a = NeuralNode::find(from).expect("edge source exists");
        let b = NeuralNode::find(to).expect("edge target exists");
        assert!(a.x < b.x, "edges run left to right");
    }
    let ids: HashSet<_> = NEURAL_NODES.iter().map(|n| n.id).collect();
    assert_eq!(ids.len(), NEURAL_NODES.len());
}

#[test]
fn test_small_collections() {
    assert_eq!(NAV_ITEMS.len(), 4);
    assert_eq!(ACHIEVEMENTS.len(), 3);
    assert!(SOCIAL_LINKS.iter().all(|s| s.href.starts_with("https://") || s.href.starts_with("mailto:")));
    let caption: String = HERO_CAPTION.iter().map(|s| s.text).collect();
    assert!(caption.starts_with("Welcome to my digital laboratory."));
    assert!(caption.ends_with("Cybersecurity."));
}
