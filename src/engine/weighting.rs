//! Tf-idf weighting over a fixed document collection.
//!
//! The vocabulary and idf values are fit jointly across the whole batch, so
//! changing the batch changes every vector. Vectors are L2-normalized,
//! which reduces cosine similarity downstream to a sparse dot product.

use std::collections::BTreeMap;

use log::{debug, warn};

use crate::engine::stemmer::{Reducer, ReducerMode, StemMap};
use crate::index::vocabulary::{DocFreqBound, Vocabulary};
use crate::types::{FitError, FitResult};

/// Sparse term → weight mapping for one document. Every stored weight is
/// greater than zero; absent terms weigh exactly zero and are never
/// materialized. Equal-weight terms iterate in lexical order.
pub type DocumentVector = BTreeMap<String, f64>;

/// Options for one weighting batch.
#[derive(Debug, Clone, Copy)]
pub struct WeightingOptions {
    /// Keep only this many features, preferring the highest corpus-wide
    /// counts. `None` keeps everything.
    pub max_features: Option<usize>,
    /// Minimum document frequency for a term to enter the vocabulary.
    pub min_doc_freq: DocFreqBound,
    /// Maximum document frequency for a term to stay in the vocabulary.
    pub max_doc_freq: DocFreqBound,
    /// Inclusive n-gram size range. Single tokens are reduced before
    /// vectorization; multi-word phrases are kept intact.
    pub ngram_range: (usize, usize),
    /// Reduce single tokens to stems before building n-grams, and restore
    /// representative surface forms in the output vocabulary.
    pub use_stemming: bool,
}

impl Default for WeightingOptions {
    fn default() -> Self {
        Self {
            max_features: None,
            min_doc_freq: DocFreqBound::Count(1),
            max_doc_freq: DocFreqBound::Ratio(1.0),
            ngram_range: (1, 3),
            use_stemming: true,
        }
    }
}

/// Result of one weighting batch: one sparse vector per input document plus
/// the stem → representative-form accumulator built across the whole batch.
/// The accumulator is part of the result, never hidden state, so the
/// representative choice stays visible to callers.
#[derive(Debug)]
pub struct WeightedBatch {
    pub vectors: Vec<DocumentVector>,
    pub stem_map: StemMap,
}

/// Computes tf-idf weighted vectors for a document collection.
#[derive(Debug)]
pub struct Vectorizer {
    options: WeightingOptions,
    reducer: Reducer,
}

impl Vectorizer {
    /// Vectorizer with Snowball stemming as the reduction algorithm.
    pub fn new(options: WeightingOptions) -> FitResult<Self> {
        Self::with_reducer(options, ReducerMode::Stemming)
    }

    /// Vectorizer with an explicit reduction algorithm, selected once per
    /// call chain.
    pub fn with_reducer(options: WeightingOptions, mode: ReducerMode) -> FitResult<Self> {
        options.min_doc_freq.validate("min_doc_freq")?;
        options.max_doc_freq.validate("max_doc_freq")?;
        Ok(Self {
            options,
            reducer: Reducer::new(mode),
        })
    }

    pub fn options(&self) -> &WeightingOptions {
        &self.options
    }

    /// Fit the batch and return one weighted vector per document.
    ///
    /// Documents are cleaned, space-joined token strings as produced by
    /// [`Tokenizer::prepare`](crate::Tokenizer::prepare). An empty batch and
    /// a vocabulary emptied by the frequency bounds are usage errors; a
    /// degenerate n-gram range (max < min) yields empty vectors instead,
    /// since callers commonly request it defensively.
    pub fn fit<S: AsRef<str>>(&self, documents: &[S]) -> FitResult<WeightedBatch> {
        if documents.is_empty() {
            return Err(FitError::EmptyBatch);
        }

        let mut stem_map = StemMap::new();
        let token_streams: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| {
                let tokens: Vec<String> = doc
                    .as_ref()
                    .split_whitespace()
                    .map(str::to_string)
                    .collect();
                if self.options.use_stemming {
                    self.reducer.reduce_into(&tokens, &mut stem_map)
                } else {
                    tokens
                }
            })
            .collect();

        let (lo, hi) = self.options.ngram_range;
        if hi < lo || hi == 0 {
            warn!("degenerate n-gram range ({lo}, {hi}); returning empty vectors");
            return Ok(WeightedBatch {
                vectors: vec![DocumentVector::new(); documents.len()],
                stem_map,
            });
        }

        let doc_counts: Vec<BTreeMap<String, u32>> = token_streams
            .iter()
            .map(|tokens| ngram_counts(tokens, lo, hi))
            .collect();

        let vocabulary = Vocabulary::build(
            &doc_counts,
            self.options.min_doc_freq,
            self.options.max_doc_freq,
            self.options.max_features,
        )?;

        // Smoothed idf; strictly positive, so observed terms never weigh 0.
        let doc_num = vocabulary.doc_count() as f64;
        let idf: Vec<f64> = vocabulary
            .doc_freqs()
            .iter()
            .map(|&df| ((1.0 + doc_num) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let vectors: Vec<DocumentVector> = doc_counts
            .iter()
            .map(|counts| {
                let mut vector = DocumentVector::new();
                for (term, &idf_value) in vocabulary.terms().iter().zip(&idf) {
                    if let Some(&count) = counts.get(term) {
                        let display = self.display_term(term, &stem_map);
                        // Representative restoration can merge two vocabulary
                        // terms into one surface form; their weights add up.
                        *vector.entry(display).or_insert(0.0) += count as f64 * idf_value;
                    }
                }
                l2_normalize(&mut vector);
                vector
            })
            .collect();

        debug!(
            "fit {} documents against {} vocabulary terms",
            vectors.len(),
            vocabulary.len()
        );
        Ok(WeightedBatch { vectors, stem_map })
    }

    /// Rewrite a vocabulary term to representative surface forms: unigrams
    /// directly, n-gram constituents independently, rejoined with single
    /// spaces.
    fn display_term(&self, term: &str, stem_map: &StemMap) -> String {
        if !self.options.use_stemming {
            return term.to_string();
        }
        if term.contains(' ') {
            term.split(' ')
                .map(|word| stem_map.representative(word).unwrap_or(word))
                .collect::<Vec<_>>()
                .join(" ")
        } else {
            stem_map
                .representative(term)
                .unwrap_or(term)
                .to_string()
        }
    }
}

/// Raw n-gram counts for one token stream over the inclusive size range.
fn ngram_counts(tokens: &[String], lo: usize, hi: usize) -> BTreeMap<String, u32> {
    let mut counts = BTreeMap::new();
    for n in lo.max(1)..=hi {
        if n > tokens.len() {
            break;
        }
        for window in tokens.windows(n) {
            *counts.entry(window.join(" ")).or_insert(0) += 1;
        }
    }
    counts
}

/// Scale a sparse vector to unit Euclidean length. A vector with no mass is
/// left empty.
fn l2_normalize(vector: &mut DocumentVector) {
    let norm = vector.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for weight in vector.values_mut() {
            *weight /= norm;
        }
    }
}
