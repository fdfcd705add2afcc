//! Match reporting: keyword containment against a reference text and
//! keyword aggregation across many documents.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::engine::normalizer::{normalize, PunctuationMode};
use crate::engine::ranker::RankedKeyword;

/// Which of a document's ranked keywords appear in a reference text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordCoverage {
    /// Keywords present in the reference, in input order.
    pub found: Vec<RankedKeyword>,
    /// Keywords absent from the reference, in input order.
    pub missing: Vec<RankedKeyword>,
}

impl KeywordCoverage {
    /// Found keywords as a percentage of all keywords checked; 0 for an
    /// empty keyword list.
    pub fn coverage_percent(&self) -> f64 {
        let total = self.found.len() + self.missing.len();
        if total == 0 {
            return 0.0;
        }
        self.found.len() as f64 / total as f64 * 100.0
    }
}

/// Split a document's ranked keywords into those found in the reference
/// text and those missing from it.
///
/// The reference is normalized the same way pipeline input is; single-word
/// keywords match whole tokens, multi-word keywords match as whole-word
/// phrases of the joined text.
pub fn keywords_in_reference(
    keywords: &[RankedKeyword],
    reference_text: &str,
) -> KeywordCoverage {
    let normalized = normalize(reference_text, PunctuationMode::Strict);
    let padded = format!(" {normalized} ");
    let tokens: std::collections::BTreeSet<&str> = normalized.split_whitespace().collect();

    let mut found = Vec::new();
    let mut missing = Vec::new();
    for keyword in keywords {
        let present = if keyword.term.contains(' ') {
            padded.contains(&format!(" {} ", keyword.term))
        } else {
            tokens.contains(keyword.term.as_str())
        };
        if present {
            found.push(keyword.clone());
        } else {
            missing.push(keyword.clone());
        }
    }
    KeywordCoverage { found, missing }
}

/// Aggregate ranked keyword lists from many documents into (term, number of
/// documents whose list contains it), count descending, ties lexical.
pub fn aggregate_keywords(lists: &[Vec<RankedKeyword>]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for list in lists {
        let mut seen = std::collections::BTreeSet::new();
        for keyword in list {
            if seen.insert(keyword.term.as_str()) {
                *counts.entry(keyword.term.as_str()).or_insert(0) += 1;
            }
        }
    }
    let mut aggregated: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(term, count)| (term.to_string(), count))
        .collect();
    aggregated.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    aggregated
}
