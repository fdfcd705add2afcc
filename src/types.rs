//! Core types and the error taxonomy shared across the pipeline.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias used throughout the crate.
pub type FitResult<T> = Result<T, FitError>;

/// Errors surfaced by the weighting and similarity engines.
///
/// Parameter misuse that callers commonly hit defensively (a top-N of zero,
/// an inverted n-gram range) yields empty results instead of an error; these
/// variants cover the cases where returning a degenerate value would silently
/// make every downstream score zero.
#[derive(Debug, Error)]
pub enum FitError {
    /// The document batch handed to the vectorizer was empty.
    #[error("document batch is empty")]
    EmptyBatch,

    /// Every candidate term was removed by the document-frequency bounds
    /// or the batch contained no usable tokens at all.
    #[error("vocabulary is empty after frequency filtering: {0}")]
    EmptyVocabulary(String),

    /// An option value is outside its valid range (e.g. a document-frequency
    /// ratio not in [0, 1]).
    #[error("invalid option: {0}")]
    InvalidOption(String),
}

/// A single input document: an opaque identifier plus raw text.
///
/// Produced by the caller (file loader, test fixture); immutable once handed
/// to the core. The pipeline never inspects `id`, it only carries it through
/// so reports can name their sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Caller-chosen identifier (typically a file name).
    pub id: String,
    /// Raw decoded text. Any PDF or markup extraction happens upstream.
    pub text: String,
}

impl Document {
    /// Create a document from an identifier and raw text.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}
