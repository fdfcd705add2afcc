//! Lexical keyword extraction and resume/job-posting similarity scoring.
//!
//! The crate is a pure, in-memory batch pipeline: raw document text is
//! normalized, tokenized and filtered against an injected [`Lexicon`],
//! reduced to stems with a readable representative form per stem, weighted
//! with tf-idf over 1- to 3-grams across the whole batch, and finally ranked
//! into keyword lists or scored against a reference document with cosine
//! similarity and a per-term contribution breakdown.
//!
//! Everything is recomputed fresh per call; nothing survives between calls
//! and nothing is mutated after creation. Matching is purely lexical —
//! exact token/n-gram overlap after stemming — with no embedding or fuzzy
//! matching.
//!
//! File loading and rendering live in the `rfit` binary; the library only
//! ever sees plain document strings.

pub mod engine;
pub mod index;
pub mod lexicon;
pub mod types;

pub use engine::normalizer::{normalize, PunctuationMode};
pub use engine::ranker::{intersection, match_score, top_n, RankedKeyword};
pub use engine::report::{aggregate_keywords, keywords_in_reference, KeywordCoverage};
pub use engine::similarity::{
    cosine_similarity, interpret_score, Contribution, DocumentSimilarity, ScoreBand,
};
pub use engine::stemmer::{Reducer, ReducerMode, StemMap};
pub use engine::tokenizer::{Tokenizer, TokenizerOptions};
pub use engine::weighting::{DocumentVector, Vectorizer, WeightedBatch, WeightingOptions};
pub use index::vocabulary::{DocFreqBound, Vocabulary};
pub use lexicon::Lexicon;
pub use types::{Document, FitError, FitResult};
