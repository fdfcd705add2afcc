//! Tokenization and domain-aware token filtering.

use log::debug;

use crate::engine::normalizer::{normalize, PunctuationMode};
use crate::engine::pos::{self, PosTag};
use crate::lexicon::Lexicon;

/// Switches for the filtering stages.
#[derive(Debug, Clone, Copy)]
pub struct TokenizerOptions {
    /// Rewrite degree abbreviations ("bs", "phd") to expanded forms before
    /// splitting.
    pub expand_abbreviations: bool,
    /// Drop likely verbs/adjectives/adverbs that are not domain vocabulary.
    pub filter_pos: bool,
    /// Restrict output to recognized domain terms.
    pub domain_only: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            expand_abbreviations: true,
            filter_pos: true,
            domain_only: true,
        }
    }
}

/// Splits normalized text into tokens and filters them against an injected
/// [`Lexicon`].
#[derive(Debug, Clone)]
pub struct Tokenizer {
    lexicon: Lexicon,
    options: TokenizerOptions,
}

impl Tokenizer {
    /// Tokenizer with default options over the given lexicon.
    pub fn new(lexicon: Lexicon) -> Self {
        Self::with_options(lexicon, TokenizerOptions::default())
    }

    pub fn with_options(lexicon: Lexicon, options: TokenizerOptions) -> Self {
        Self { lexicon, options }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn options(&self) -> TokenizerOptions {
        self.options
    }

    /// Rewrite known degree abbreviations to their expanded forms using
    /// whole-word matching, so downstream stages see a uniform vocabulary
    /// for academic credentials.
    pub fn expand_abbreviations(&self, text: &str) -> String {
        let mut out: Vec<String> = Vec::new();
        for word in text.split_whitespace() {
            let lower = word.to_lowercase();
            match self.lexicon.expand_abbreviation(&lower) {
                Some(full) => out.push(full.to_string()),
                None => out.push(lower),
            }
        }
        out.join(" ")
    }

    /// Tokenize normalized text: abbreviation expansion, word split,
    /// stopword/single-character/month removal, optional POS filtering and
    /// domain-term extraction per the configured options.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let expanded;
        let text = if self.options.expand_abbreviations {
            expanded = self.expand_abbreviations(text);
            expanded.as_str()
        } else {
            text
        };

        let filtered: Vec<String> = text
            .split_whitespace()
            .map(|word| word.to_lowercase())
            .filter(|word| self.keep(word))
            .collect();

        let tokens = if self.options.domain_only {
            self.extract_domain_terms(&filtered)
        } else {
            filtered
        };
        debug!("tokenized {} chars into {} tokens", text.len(), tokens.len());
        tokens
    }

    /// Normalize raw text and tokenize it, rejoining with single spaces into
    /// the form the weighting engine consumes.
    pub fn prepare(&self, raw: &str) -> String {
        self.tokenize(&normalize(raw, PunctuationMode::Strict))
            .join(" ")
    }

    /// Filter decision for a single lowercase word.
    fn keep(&self, word: &str) -> bool {
        if word.chars().count() <= 1 || self.lexicon.is_stop_word(word) {
            return false;
        }
        // Dated resume entries: month and weekday names never survive.
        if self.lexicon.is_time_word(word) {
            return false;
        }
        if self.options.filter_pos {
            return self.is_relevant(word);
        }
        true
    }

    /// POS relevance: nouns and domain terms always kept; verbs and
    /// adjectives only when recognized as (part of) domain vocabulary;
    /// adverbs never.
    fn is_relevant(&self, word: &str) -> bool {
        match pos::tag(word) {
            PosTag::Adverb => false,
            PosTag::Verb | PosTag::Adjective => {
                self.lexicon.is_domain_term(word) || self.lexicon.is_within_domain_term(word)
            }
            PosTag::Noun => true,
        }
    }

    /// Scan the filtered token stream for domain vocabulary: multi-word
    /// phrases by containment over the joined text (at most once each, in
    /// lexicon order), single tokens by exact match or long-prefix
    /// containment in a single-word term.
    fn extract_domain_terms(&self, tokens: &[String]) -> Vec<String> {
        let joined = tokens.join(" ");
        let mut found: Vec<String> = self
            .lexicon
            .multi_word_terms()
            .filter(|term| joined.contains(*term))
            .map(|term| term.to_string())
            .collect();

        for token in tokens {
            if self.lexicon.is_domain_term(token) || self.lexicon.is_within_single_word_term(token)
            {
                found.push(token.clone());
            }
        }
        found
    }
}
