//! Batch-scoped n-gram vocabulary with document-frequency bounds and a
//! feature cap.

use std::collections::BTreeMap;

use log::debug;

use crate::types::{FitError, FitResult};

/// A document-frequency bound, as an absolute document count or a fraction
/// of the batch size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DocFreqBound {
    /// Minimum/maximum number of documents a term must appear in.
    Count(u32),
    /// Minimum/maximum fraction of the batch, in [0, 1].
    Ratio(f64),
}

impl DocFreqBound {
    /// Resolve the bound to a document count for a batch of `doc_count`
    /// documents. Lower bounds round up, upper bounds round down, so a
    /// fractional bound never admits a term a stricter count bound would
    /// reject.
    fn resolve(&self, doc_count: usize, lower: bool) -> u32 {
        match *self {
            DocFreqBound::Count(count) => count,
            DocFreqBound::Ratio(ratio) => {
                let scaled = ratio * doc_count as f64;
                if lower {
                    scaled.ceil() as u32
                } else {
                    scaled.floor() as u32
                }
            }
        }
    }

    /// Validate that a fractional bound is within [0, 1].
    pub(crate) fn validate(&self, name: &str) -> FitResult<()> {
        if let DocFreqBound::Ratio(ratio) = *self {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(FitError::InvalidOption(format!(
                    "{name} ratio {ratio} is outside [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// The term vocabulary shared by every vector of one batch.
///
/// Terms are kept in sorted order; this is the feature-iteration order, so
/// equal-weight keywords downstream rank lexically.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    terms: Vec<String>,
    doc_freqs: Vec<u32>,
    doc_count: usize,
}

impl Vocabulary {
    /// Build the vocabulary from per-document term counts.
    ///
    /// Terms outside the document-frequency bounds are removed; if
    /// `max_features` is set, only the terms with the highest corpus-wide
    /// counts survive (ties lexical). A vocabulary that comes out empty is a
    /// configuration error, not a usable result: downstream it would make
    /// every similarity silently zero.
    pub fn build(
        doc_term_counts: &[BTreeMap<String, u32>],
        min_doc_freq: DocFreqBound,
        max_doc_freq: DocFreqBound,
        max_features: Option<usize>,
    ) -> FitResult<Self> {
        let doc_count = doc_term_counts.len();

        // term → (document frequency, corpus-wide count)
        let mut stats: BTreeMap<&str, (u32, u64)> = BTreeMap::new();
        for counts in doc_term_counts {
            for (term, &count) in counts {
                let entry = stats.entry(term.as_str()).or_insert((0, 0));
                entry.0 += 1;
                entry.1 += count as u64;
            }
        }

        if stats.is_empty() {
            return Err(FitError::EmptyVocabulary(
                "no terms observed in the batch".to_string(),
            ));
        }

        let min_count = min_doc_freq.resolve(doc_count, true);
        let max_count = max_doc_freq.resolve(doc_count, false);
        let candidate_count = stats.len();
        stats.retain(|_, &mut (df, _)| df >= min_count && df <= max_count);

        if stats.is_empty() {
            return Err(FitError::EmptyVocabulary(format!(
                "all {candidate_count} candidate terms removed by document-frequency bounds"
            )));
        }

        if let Some(limit) = max_features {
            if stats.len() > limit {
                let mut ranked: Vec<(&str, u32, u64)> = stats
                    .iter()
                    .map(|(&term, &(df, corpus))| (term, df, corpus))
                    .collect();
                ranked.sort_by(|a, b| b.2.cmp(&a.2).then(a.0.cmp(b.0)));
                ranked.truncate(limit);
                let kept: std::collections::HashSet<&str> =
                    ranked.iter().map(|(term, _, _)| *term).collect();
                stats.retain(|term, _| kept.contains(term));
            }
            if stats.is_empty() {
                return Err(FitError::EmptyVocabulary(
                    "feature cap of 0 leaves no terms".to_string(),
                ));
            }
        }

        let mut terms = Vec::with_capacity(stats.len());
        let mut doc_freqs = Vec::with_capacity(stats.len());
        for (term, (df, _)) in stats {
            terms.push(term.to_string());
            doc_freqs.push(df);
        }
        debug!(
            "vocabulary: {} terms over {} documents ({} candidates)",
            terms.len(),
            doc_count,
            candidate_count
        );

        Ok(Self {
            terms,
            doc_freqs,
            doc_count,
        })
    }

    /// Terms in sorted order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Document frequencies, parallel to [`Vocabulary::terms`].
    pub fn doc_freqs(&self) -> &[u32] {
        &self.doc_freqs
    }

    /// Number of documents the vocabulary was fit over.
    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    /// Document frequency of a term, 0 if the term is not in the vocabulary.
    pub fn doc_freq(&self, term: &str) -> u32 {
        self.terms
            .binary_search_by(|probe| probe.as_str().cmp(term))
            .map(|idx| self.doc_freqs[idx])
            .unwrap_or(0)
    }

    /// Whether the term survived into the vocabulary.
    pub fn contains(&self, term: &str) -> bool {
        self.terms
            .binary_search_by(|probe| probe.as_str().cmp(term))
            .is_ok()
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
