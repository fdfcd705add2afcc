//! Cosine similarity against a reference document with per-term
//! contribution breakdown.

use serde::{Deserialize, Serialize};

use crate::engine::weighting::{DocumentVector, Vectorizer, WeightedBatch};
use crate::types::FitResult;

/// One shared term's contribution to a similarity score: the product of the
/// two documents' weights for that term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub term: String,
    pub doc_weight: f64,
    pub reference_weight: f64,
    pub product: f64,
}

/// Similarity of one document against the reference, with the ranked
/// contribution breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSimilarity {
    /// Cosine similarity in [0, 1].
    pub similarity: f64,
    /// Shared terms sorted by product descending (ties lexical), truncated
    /// to the requested length.
    pub breakdown: Vec<Contribution>,
}

impl Vectorizer {
    /// Score every document against a reference document.
    ///
    /// `documents` and the reference are vectorized as one batch so the
    /// vocabulary and idf values are shared and the scores comparable.
    /// Because all vectors are unit-normalized by construction, cosine
    /// similarity is exactly their sparse dot product.
    pub fn similarity_with_breakdown<S: AsRef<str>>(
        &self,
        documents: &[S],
        reference: &str,
        breakdown_len: usize,
    ) -> FitResult<Vec<DocumentSimilarity>> {
        let mut batch: Vec<&str> = documents.iter().map(|doc| doc.as_ref()).collect();
        batch.push(reference);

        let WeightedBatch { mut vectors, .. } = self.fit(&batch)?;
        let reference_vector = match vectors.pop() {
            Some(vector) => vector,
            None => return Ok(Vec::new()),
        };

        Ok(vectors
            .iter()
            .map(|vector| DocumentSimilarity {
                similarity: cosine_similarity(vector, &reference_vector),
                breakdown: breakdown(vector, &reference_vector, breakdown_len),
            })
            .collect())
    }
}

/// Dot product of two sparse unit vectors, clamped to [0, 1].
pub fn cosine_similarity(a: &DocumentVector, b: &DocumentVector) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = small
        .iter()
        .filter_map(|(term, weight)| large.get(term).map(|other| weight * other))
        .sum();
    dot.clamp(0.0, 1.0)
}

/// Contribution breakdown: terms with nonzero weight in both vectors,
/// product descending, ties lexical, truncated to `len`.
fn breakdown(doc: &DocumentVector, reference: &DocumentVector, len: usize) -> Vec<Contribution> {
    let mut contributions: Vec<Contribution> = doc
        .iter()
        .filter_map(|(term, &doc_weight)| {
            reference.get(term).map(|&reference_weight| Contribution {
                term: term.clone(),
                doc_weight,
                reference_weight,
                product: doc_weight * reference_weight,
            })
        })
        .collect();
    contributions.sort_by(|a, b| {
        b.product
            .partial_cmp(&a.product)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.term.cmp(&b.term))
    });
    contributions.truncate(len);
    contributions
}

/// Interpretation band for a similarity score. Bands are half-open with the
/// lower boundary inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Excellent,
    Good,
    Moderate,
    Weak,
    Poor,
}

impl ScoreBand {
    /// Short lowercase band name.
    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "excellent",
            ScoreBand::Good => "good",
            ScoreBand::Moderate => "moderate",
            ScoreBand::Weak => "weak",
            ScoreBand::Poor => "poor",
        }
    }

    /// Human-facing interpretation of the band.
    pub fn description(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent match - very high alignment",
            ScoreBand::Good => "Good match - strong alignment",
            ScoreBand::Moderate => "Moderate match - some alignment",
            ScoreBand::Weak => "Weak match - limited alignment",
            ScoreBand::Poor => "Poor match - minimal alignment",
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// Band a similarity score: ≥0.8 excellent, ≥0.6 good, ≥0.4 moderate,
/// ≥0.2 weak, else poor.
pub fn interpret_score(score: f64) -> ScoreBand {
    if score >= 0.8 {
        ScoreBand::Excellent
    } else if score >= 0.6 {
        ScoreBand::Good
    } else if score >= 0.4 {
        ScoreBand::Moderate
    } else if score >= 0.2 {
        ScoreBand::Weak
    } else {
        ScoreBand::Poor
    }
}
