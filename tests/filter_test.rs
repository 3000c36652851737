//! Tests for the posting list filter engine

use stint::domain::filter::ListFilterEngine;
use stint::domain::{InternshipPosting, CATEGORY_ALL};

fn posting(id: &str, title: &str, company: &str, location: &str, category: &str) -> InternshipPosting {
    InternshipPosting {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        category: category.to_string(),
        status: "active".to_string(),
        ..Default::default()
    }
}

fn sample_source() -> Vec<InternshipPosting> {
    vec![
        posting("1", "Backend Intern", "Acme", "Remote", "Technology"),
        posting("2", "Marketing Intern", "Beta", "NYC", "Marketing"),
        posting("3", "Design Fellow", "Acme", "Berlin", "Design"),
        posting("4", "Platform Intern", "Gamma", "Remote", "Technology"),
    ]
}

#[test]
fn empty_criteria_returns_source_in_order() {
    let mut engine = ListFilterEngine::new();
    engine.set_source(sample_source());
    engine.set_search("");
    engine.set_category(CATEGORY_ALL);

    let ids: Vec<&str> = engine.filtered().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4"]);
}

#[test]
fn search_matches_title_company_and_location_case_insensitively() {
    let mut engine = ListFilterEngine::new();
    engine.set_source(sample_source());

    // Title substring, different case
    engine.set_search("INTERN");
    let ids: Vec<&str> = engine.filtered().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "4"]);

    // Company substring
    engine.set_search("acme");
    let ids: Vec<&str> = engine.filtered().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);

    // Location substring
    engine.set_search("remote");
    let ids: Vec<&str> = engine.filtered().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "4"]);
}

#[test]
fn search_and_category_combine() {
    // The worked example: two postings, search "intern", category
    // "Technology" leaves only the backend role.
    let mut engine = ListFilterEngine::new();
    engine.set_source(vec![
        posting("1", "Backend Intern", "Acme", "Remote", "Technology"),
        posting("2", "Marketing Intern", "Beta", "NYC", "Marketing"),
    ]);
    engine.set_search("intern");
    engine.set_category("Technology");

    let filtered = engine.filtered();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "1");
}

#[test]
fn category_match_is_exact_and_case_sensitive() {
    let mut engine = ListFilterEngine::new();
    engine.set_source(sample_source());

    engine.set_category("Technology");
    assert_eq!(engine.filtered_len(), 2);

    // Lowercase is a different value, not a fuzzy match
    engine.set_category("technology");
    assert_eq!(engine.filtered_len(), 0);

    engine.set_category(CATEGORY_ALL);
    assert_eq!(engine.filtered_len(), 4);
}

#[test]
fn missing_fields_fail_their_subcondition_without_erroring() {
    let bare = InternshipPosting {
        id: "bare".to_string(),
        ..Default::default()
    };
    let mut engine = ListFilterEngine::new();
    engine.set_source(vec![bare]);

    // No criteria: the bare posting is visible
    assert_eq!(engine.filtered_len(), 1);

    // A search term cannot match empty fields
    engine.set_search("intern");
    assert_eq!(engine.filtered_len(), 0);

    // An empty category value does not equal a real category either
    engine.set_search("");
    engine.set_category("Technology");
    assert_eq!(engine.filtered_len(), 0);
}

#[test]
fn filtered_is_a_subset_in_source_order() {
    let mut engine = ListFilterEngine::new();
    engine.set_source(sample_source());
    engine.set_search("e");
    engine.set_category("Technology");

    let source_ids: Vec<&str> = engine.source().iter().map(|p| p.id.as_str()).collect();
    let filtered_ids: Vec<&str> = engine.filtered().iter().map(|p| p.id.as_str()).collect();

    // Subset
    for id in &filtered_ids {
        assert!(source_ids.contains(id));
    }
    // Source order preserved
    let positions: Vec<usize> = filtered_ids
        .iter()
        .map(|id| source_ids.iter().position(|s| s == id).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);

    // And exactly the postings satisfying both predicates
    for posting in engine.source() {
        let matches_search = ["e"].iter().any(|needle| {
            posting.title.to_lowercase().contains(needle)
                || posting.company.to_lowercase().contains(needle)
                || posting.location.to_lowercase().contains(needle)
        });
        let matches_category = posting.category == "Technology";
        assert_eq!(
            filtered_ids.contains(&posting.id.as_str()),
            matches_search && matches_category,
            "posting {} misclassified",
            posting.id
        );
    }
}

#[test]
fn each_keystroke_recomputes_immediately() {
    let mut engine = ListFilterEngine::new();
    engine.set_source(sample_source());

    engine.push_search_char('a');
    engine.push_search_char('c');
    engine.push_search_char('m');
    assert_eq!(engine.search(), "acm");
    assert_eq!(engine.filtered_len(), 2);

    engine.push_search_char('x');
    assert_eq!(engine.filtered_len(), 0);

    engine.pop_search_char();
    assert_eq!(engine.filtered_len(), 2);

    engine.clear_search();
    assert_eq!(engine.filtered_len(), 4);
}

#[test]
fn replacing_the_source_keeps_the_criteria() {
    let mut engine = ListFilterEngine::new();
    engine.set_source(sample_source());
    engine.set_search("intern");
    engine.set_category("Technology");
    assert_eq!(engine.filtered_len(), 2);

    engine.set_source(vec![posting(
        "9",
        "Compiler Intern",
        "Delta",
        "Remote",
        "Technology",
    )]);
    assert_eq!(engine.search(), "intern");
    assert_eq!(engine.category(), "Technology");
    assert_eq!(engine.filtered_len(), 1);
    assert_eq!(engine.filtered()[0].id, "9");
}
