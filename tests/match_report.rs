//! Match reporter tests: keyword containment against a reference text and
//! aggregation across many keyword lists.

use resume_fit::{aggregate_keywords, keywords_in_reference, RankedKeyword};

// ==================== Helpers ====================

fn keywords(pairs: &[(&str, f64)]) -> Vec<RankedKeyword> {
    pairs
        .iter()
        .map(|(term, weight)| RankedKeyword {
            term: term.to_string(),
            weight: *weight,
        })
        .collect()
}

fn terms(list: &[RankedKeyword]) -> Vec<&str> {
    list.iter().map(|kw| kw.term.as_str()).collect()
}

// ==================== Containment ====================

#[test]
fn test_keywords_found_and_missing_in_job_text() {
    let resume_keywords = keywords(&[
        ("python", 0.5),
        ("machine learning", 0.4),
        ("tensorflow", 0.35),
        ("docker", 0.3),
        ("react", 0.25),
        ("mongodb", 0.2),
    ]);
    let job_text = "We are seeking a Software Engineer with strong Python programming skills. \
                    Experience with machine learning and TensorFlow is required. \
                    Familiarity with Docker and containerization is a plus. \
                    Knowledge of AWS cloud services is preferred.";

    let coverage = keywords_in_reference(&resume_keywords, job_text);
    assert_eq!(
        terms(&coverage.found),
        vec!["python", "machine learning", "tensorflow", "docker"]
    );
    assert_eq!(terms(&coverage.missing), vec!["react", "mongodb"]);
    assert!((coverage.coverage_percent() - 400.0 / 6.0).abs() < 1e-9);
}

#[test]
fn test_containment_matches_whole_words_only() {
    let coverage = keywords_in_reference(&keywords(&[("java", 0.5)]), "javascript everywhere");
    assert!(coverage.found.is_empty());
    assert_eq!(terms(&coverage.missing), vec!["java"]);
}

#[test]
fn test_containment_normalizes_the_reference() {
    // Capitals and punctuation in the posting do not defeat the check.
    let coverage = keywords_in_reference(&keywords(&[("python", 0.5)]), "PYTHON, required!");
    assert_eq!(terms(&coverage.found), vec!["python"]);
}

#[test]
fn test_coverage_percent_of_empty_list_is_zero() {
    let coverage = keywords_in_reference(&[], "python everywhere");
    assert_eq!(coverage.coverage_percent(), 0.0);
}

// ==================== Aggregation ====================

#[test]
fn test_aggregate_counts_documents_not_occurrences() {
    let lists = vec![
        keywords(&[("python", 0.9), ("sql", 0.3)]),
        keywords(&[("python", 0.8), ("docker", 0.4)]),
        keywords(&[("docker", 0.7)]),
    ];
    let aggregated = aggregate_keywords(&lists);
    assert_eq!(
        aggregated,
        vec![
            ("docker".to_string(), 2),
            ("python".to_string(), 2),
            ("sql".to_string(), 1),
        ]
    );
}

#[test]
fn test_aggregate_dedupes_within_one_list() {
    let lists = vec![keywords(&[("python", 0.9), ("python", 0.5)])];
    let aggregated = aggregate_keywords(&lists);
    assert_eq!(aggregated, vec![("python".to_string(), 1)]);
}

#[test]
fn test_aggregate_empty_input() {
    assert!(aggregate_keywords(&[]).is_empty());
}
