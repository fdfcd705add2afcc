//! Keyword ranking and ranked-list set operations.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::engine::weighting::DocumentVector;

/// One ranked keyword: a term and its weight in the source document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedKeyword {
    pub term: String,
    pub weight: f64,
}

/// Top `n` terms of a weighted vector, weight descending, equal weights in
/// lexical term order. `n == 0` yields an empty list.
pub fn top_n(vector: &DocumentVector, n: usize) -> Vec<RankedKeyword> {
    let mut ranked: Vec<RankedKeyword> = vector
        .iter()
        .map(|(term, &weight)| RankedKeyword {
            term: term.clone(),
            weight,
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.weight
            .partial_cmp(&a.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.term.cmp(&b.term))
    });
    ranked.truncate(n);
    ranked
}

/// Terms present in both ranked lists.
pub fn intersection(a: &[RankedKeyword], b: &[RankedKeyword]) -> BTreeSet<String> {
    let terms_b: BTreeSet<&str> = b.iter().map(|kw| kw.term.as_str()).collect();
    a.iter()
        .filter(|kw| terms_b.contains(kw.term.as_str()))
        .map(|kw| kw.term.clone())
        .collect()
}

/// Jaccard overlap of two ranked lists as a percentage:
/// `|intersection| / |union| * 100`, 0 when the union is empty.
pub fn match_score(a: &[RankedKeyword], b: &[RankedKeyword]) -> f64 {
    let terms_a: BTreeSet<&str> = a.iter().map(|kw| kw.term.as_str()).collect();
    let terms_b: BTreeSet<&str> = b.iter().map(|kw| kw.term.as_str()).collect();
    let union = terms_a.union(&terms_b).count();
    if union == 0 {
        return 0.0;
    }
    let shared = terms_a.intersection(&terms_b).count();
    shared as f64 / union as f64 * 100.0
}
