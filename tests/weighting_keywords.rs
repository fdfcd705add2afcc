//! Weighting engine and keyword ranker tests.
//!
//! Covers determinism, weight positivity and zero-omission, document
//! frequency bounds, the feature cap, n-gram handling, representative-form
//! restoration, error cases, top-N ranking and ranked-list set operations.

use resume_fit::{
    intersection, match_score, top_n, DocFreqBound, DocumentVector, FitError, RankedKeyword,
    Vectorizer, WeightingOptions,
};

// ==================== Helpers ====================

/// Options with stemming off and unigrams only, for exact-count tests.
fn unigram_options() -> WeightingOptions {
    WeightingOptions {
        ngram_range: (1, 1),
        use_stemming: false,
        ..Default::default()
    }
}

fn vectorizer(options: WeightingOptions) -> Vectorizer {
    Vectorizer::new(options).expect("valid options")
}

fn keywords(pairs: &[(&str, f64)]) -> Vec<RankedKeyword> {
    pairs
        .iter()
        .map(|(term, weight)| RankedKeyword {
            term: term.to_string(),
            weight: *weight,
        })
        .collect()
}

// ==================== Weighting ====================

#[test]
fn test_fit_deterministic() {
    let docs = [
        "python machine learning tensorflow",
        "python flask django backend",
        "javascript react frontend",
    ];
    let vectorizer = vectorizer(WeightingOptions::default());
    let first = vectorizer.fit(&docs).expect("fit");
    for _ in 0..5 {
        let again = vectorizer.fit(&docs).expect("fit");
        assert_eq!(first.vectors, again.vectors);
    }
}

#[test]
fn test_weights_positive_and_zero_omitted() {
    let docs = ["python java sql", "python docker", "rust tokio async"];
    let batch = vectorizer(WeightingOptions::default()).fit(&docs).expect("fit");
    assert_eq!(batch.vectors.len(), docs.len());
    for vector in &batch.vectors {
        assert!(!vector.is_empty());
        for (term, &weight) in vector {
            assert!(weight > 0.0, "term {term:?} has non-positive weight");
        }
    }
    // A term absent from a document is absent as a key, not stored as zero.
    assert!(!batch.vectors[2].contains_key("python"));
}

#[test]
fn test_vectors_unit_normalized() {
    let docs = ["python python java", "sql server"];
    let batch = vectorizer(unigram_options()).fit(&docs).expect("fit");
    for vector in &batch.vectors {
        let norm: f64 = vector.values().map(|w| w * w).sum();
        assert!((norm - 1.0).abs() < 1e-9, "norm^2 was {norm}");
    }
}

#[test]
fn test_higher_count_means_higher_weight() {
    let docs = ["python python python java", "go rust"];
    let batch = vectorizer(unigram_options()).fit(&docs).expect("fit");
    let python = batch.vectors[0]["python"];
    let java = batch.vectors[0]["java"];
    assert!(python > java);
}

#[test]
fn test_ngrams_cover_phrases() {
    let docs = ["machine learning engineer", "machine learning researcher"];
    let options = WeightingOptions {
        use_stemming: false,
        ..Default::default()
    };
    let batch = vectorizer(options).fit(&docs).expect("fit");
    assert!(batch.vectors[0].contains_key("machine learning"));
    assert!(batch.vectors[0].contains_key("machine learning engineer"));
}

#[test]
fn test_stemming_restores_representative_forms() {
    let docs = ["development development python", "develop python"];
    let options = WeightingOptions {
        ngram_range: (1, 1),
        ..Default::default()
    };
    let batch = vectorizer(options).fit(&docs).expect("fit");
    // "development" was observed twice, "develop" once: the frequent form
    // names the feature in every vector.
    assert!(batch.vectors[0].contains_key("development"));
    assert!(batch.vectors[1].contains_key("development"));
    assert!(!batch.vectors[1].contains_key("develop"));
    assert_eq!(batch.stem_map.representative("develop"), Some("development"));
}

#[test]
fn test_stemming_rewrites_ngram_constituents() {
    let docs = ["machine learning", "machine learning"];
    let options = WeightingOptions {
        ngram_range: (1, 2),
        ..Default::default()
    };
    let batch = vectorizer(options).fit(&docs).expect("fit");
    for vector in &batch.vectors {
        assert!(vector.contains_key("machine"));
        assert!(vector.contains_key("learning"));
        assert!(vector.contains_key("machine learning"));
    }
}

#[test]
fn test_min_doc_freq_prunes_rare_terms() {
    let docs = ["python java", "python sql", "python go"];
    let options = WeightingOptions {
        min_doc_freq: DocFreqBound::Count(2),
        ..unigram_options()
    };
    let batch = vectorizer(options).fit(&docs).expect("fit");
    for vector in &batch.vectors {
        let terms: Vec<&str> = vector.keys().map(|t| t.as_str()).collect();
        assert_eq!(terms, vec!["python"]);
    }
}

#[test]
fn test_max_doc_freq_prunes_ubiquitous_terms() {
    let docs = ["python java", "python sql"];
    let options = WeightingOptions {
        max_doc_freq: DocFreqBound::Ratio(0.5),
        ..unigram_options()
    };
    let batch = vectorizer(options).fit(&docs).expect("fit");
    assert!(!batch.vectors[0].contains_key("python"));
    assert!(batch.vectors[0].contains_key("java"));
    assert!(batch.vectors[1].contains_key("sql"));
}

#[test]
fn test_max_features_keeps_highest_corpus_counts() {
    let docs = ["python python java", "python sql"];
    let options = WeightingOptions {
        max_features: Some(2),
        ..unigram_options()
    };
    let batch = vectorizer(options).fit(&docs).expect("fit");
    // "python" has the highest corpus count; "java" beats "sql" on the
    // lexical tie-break. "sql" is cut, so document 1 keeps python only.
    assert!(batch.vectors[0].contains_key("java"));
    let terms: Vec<&str> = batch.vectors[1].keys().map(|t| t.as_str()).collect();
    assert_eq!(terms, vec!["python"]);
}

// ==================== Error cases ====================

#[test]
fn test_empty_batch_is_an_error() {
    let err = vectorizer(WeightingOptions::default())
        .fit::<&str>(&[])
        .expect_err("empty batch");
    assert!(matches!(err, FitError::EmptyBatch));
}

#[test]
fn test_all_empty_documents_yield_empty_vocabulary_error() {
    let err = vectorizer(WeightingOptions::default())
        .fit(&["", ""])
        .expect_err("no terms");
    assert!(matches!(err, FitError::EmptyVocabulary(_)));
}

#[test]
fn test_unsatisfiable_doc_freq_bounds_yield_error() {
    let options = WeightingOptions {
        min_doc_freq: DocFreqBound::Count(5),
        ..unigram_options()
    };
    let err = vectorizer(options)
        .fit(&["python", "java"])
        .expect_err("bounds remove everything");
    assert!(matches!(err, FitError::EmptyVocabulary(_)));
}

#[test]
fn test_out_of_range_ratio_rejected_at_construction() {
    let options = WeightingOptions {
        max_doc_freq: DocFreqBound::Ratio(1.5),
        ..Default::default()
    };
    assert!(matches!(
        Vectorizer::new(options),
        Err(FitError::InvalidOption(_))
    ));
}

#[test]
fn test_inverted_ngram_range_yields_empty_vectors() {
    let options = WeightingOptions {
        ngram_range: (3, 1),
        ..Default::default()
    };
    let batch = vectorizer(options).fit(&["python java"]).expect("fit");
    assert_eq!(batch.vectors.len(), 1);
    assert!(batch.vectors[0].is_empty());
}

// ==================== Keyword ranker ====================

#[test]
fn test_top_n_truncates_descending() {
    let mut vector = DocumentVector::new();
    vector.insert("python".to_string(), 0.9);
    vector.insert("java".to_string(), 0.5);
    vector.insert("sql".to_string(), 0.1);

    let ranked = top_n(&vector, 2);
    assert_eq!(
        ranked,
        keywords(&[("python", 0.9), ("java", 0.5)])
    );
}

#[test]
fn test_top_n_zero_is_empty() {
    let mut vector = DocumentVector::new();
    vector.insert("python".to_string(), 0.9);
    assert!(top_n(&vector, 0).is_empty());
}

#[test]
fn test_top_n_equal_weights_rank_lexically() {
    let mut vector = DocumentVector::new();
    vector.insert("zig".to_string(), 0.5);
    vector.insert("ada".to_string(), 0.5);
    let ranked = top_n(&vector, 2);
    assert_eq!(ranked[0].term, "ada");
    assert_eq!(ranked[1].term, "zig");
}

#[test]
fn test_intersection_and_match_score() {
    let a = keywords(&[("python", 0.9), ("sql", 0.2)]);
    let b = keywords(&[("python", 0.8), ("docker", 0.3)]);

    let common = intersection(&a, &b);
    assert_eq!(common.into_iter().collect::<Vec<_>>(), vec!["python"]);

    let score = match_score(&a, &b);
    assert!((score - 100.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_match_score_bounds() {
    let a = keywords(&[("python", 0.9), ("sql", 0.2)]);
    let b = keywords(&[("docker", 0.3)]);
    assert_eq!(match_score(&a, &b), 0.0);
    assert_eq!(match_score(&a, &a), 100.0);
    assert_eq!(match_score(&[], &[]), 0.0);

    let score = match_score(&a, &b);
    assert!((0.0..=100.0).contains(&score));
}
