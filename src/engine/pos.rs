//! Heuristic part-of-speech tagging for filter decisions.
//!
//! Resumes and job posts are noun-phrase-dense; the tokenizer only needs to
//! know whether a word is likely a verb, adjective or adverb so it can
//! suppress filler ("developed", "strong", "quickly"). A deterministic
//! suffix-rule tagger is enough for that decision and keeps the pipeline free
//! of trained-model state. Anything the rules do not recognize is treated as
//! a noun, which is the safe default for this filter.

/// Coarse part-of-speech classes the filter distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

/// "-ly" words that are not adverbs.
const NON_ADVERB_LY: &[&str] = &[
    "anomaly", "apply", "assembly", "family", "monopoly", "multiply", "rely",
    "reply", "supply",
];

/// Common bare filler verbs that carry no suffix signal.
const COMMON_VERBS: &[&str] = &[
    "achieve", "assist", "build", "collaborate", "communicate", "contribute",
    "coordinate", "create", "deliver", "demonstrate", "develop", "drive",
    "ensure", "execute", "grow", "help", "join", "lead", "maintain", "manage",
    "mentor", "oversee", "participate", "perform", "provide", "seek", "want",
    "work", "write",
];

/// Common filler adjectives that carry no suffix signal.
const COMMON_ADJECTIVES: &[&str] = &[
    "best", "detail-oriented", "excellent", "fast", "good", "great", "hard",
    "high", "large", "new", "proficient", "senior", "skilled", "solid",
    "strong", "successful", "top",
];

/// Verb suffixes with the minimum token length they apply at.
const VERB_SUFFIXES: &[(&str, usize)] = &[("ing", 5), ("ed", 4), ("ize", 5), ("ise", 5)];

/// Adjective suffixes with the minimum token length they apply at.
const ADJECTIVE_SUFFIXES: &[(&str, usize)] = &[
    ("able", 6),
    ("ible", 6),
    ("ful", 5),
    ("ive", 5),
    ("less", 6),
    ("ous", 5),
];

/// Tag a single lowercase token.
pub fn tag(token: &str) -> PosTag {
    if token.ends_with("ly") && !NON_ADVERB_LY.contains(&token) && token.len() > 3 {
        return PosTag::Adverb;
    }
    if COMMON_VERBS.contains(&token) {
        return PosTag::Verb;
    }
    if COMMON_ADJECTIVES.contains(&token) {
        return PosTag::Adjective;
    }
    for (suffix, min_len) in VERB_SUFFIXES {
        if token.len() >= *min_len && token.ends_with(suffix) {
            return PosTag::Verb;
        }
    }
    for (suffix, min_len) in ADJECTIVE_SUFFIXES {
        if token.len() >= *min_len && token.ends_with(suffix) {
            return PosTag::Adjective;
        }
    }
    PosTag::Noun
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_rules() {
        assert_eq!(tag("quickly"), PosTag::Adverb);
        assert_eq!(tag("developed"), PosTag::Verb);
        assert_eq!(tag("developing"), PosTag::Verb);
        assert_eq!(tag("strong"), PosTag::Adjective);
        assert_eq!(tag("impressive"), PosTag::Adjective);
        assert_eq!(tag("database"), PosTag::Noun);
    }

    #[test]
    fn ly_exceptions_stay_nouns() {
        assert_eq!(tag("assembly"), PosTag::Noun);
        assert_eq!(tag("supply"), PosTag::Noun);
    }
}
