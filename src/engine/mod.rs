//! Pipeline stages: normalization, tokenization, token reduction, tf-idf
//! weighting, keyword ranking, similarity scoring and match reporting.

pub mod normalizer;
pub mod pos;
pub mod ranker;
pub mod report;
pub mod similarity;
pub mod stemmer;
pub mod tokenizer;
pub mod weighting;

pub use normalizer::{normalize, PunctuationMode};
pub use ranker::{intersection, match_score, top_n, RankedKeyword};
pub use report::{aggregate_keywords, keywords_in_reference, KeywordCoverage};
pub use similarity::{
    cosine_similarity, interpret_score, Contribution, DocumentSimilarity, ScoreBand,
};
pub use stemmer::{Reducer, ReducerMode, StemMap};
pub use tokenizer::{Tokenizer, TokenizerOptions};
pub use weighting::{DocumentVector, Vectorizer, WeightedBatch, WeightingOptions};
