//! Batch-scoped index structures shared by the weighting and similarity
//! engines.

pub mod vocabulary;

pub use vocabulary::{DocFreqBound, Vocabulary};
