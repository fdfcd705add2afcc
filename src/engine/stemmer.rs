//! Token reduction (stemming or lemmatization) with representative-form
//! mapping, so downstream output stays human-readable.

use std::collections::HashMap;

use rust_stemmers::{Algorithm, Stemmer};

/// Irregular plural/participle forms the rule-based lemmatizer cannot derive.
const IRREGULAR_LEMMAS: &[(&str, &str)] = &[
    ("analyses", "analysis"),
    ("children", "child"),
    ("criteria", "criterion"),
    ("data", "datum"),
    ("feet", "foot"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("men", "man"),
    ("mice", "mouse"),
    ("people", "person"),
    ("theses", "thesis"),
    ("women", "woman"),
];

/// Which reduction algorithm a [`Reducer`] applies. A small closed variant
/// selected once per call chain; both arms satisfy the same
/// `reduce(token) -> canonical form` contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReducerMode {
    /// Snowball (Porter-family) suffix stripping. Stems are not guaranteed
    /// to be real words.
    #[default]
    Stemming,
    /// Dictionary lookup of irregular forms plus plural-suffix rules; output
    /// stays a real word.
    Lemmatization,
}

/// Reduces tokens to a canonical form.
pub struct Reducer {
    mode: ReducerMode,
    stemmer: Stemmer,
    lemmas: HashMap<&'static str, &'static str>,
}

impl Reducer {
    pub fn new(mode: ReducerMode) -> Self {
        Self {
            mode,
            stemmer: Stemmer::create(Algorithm::English),
            lemmas: IRREGULAR_LEMMAS.iter().copied().collect(),
        }
    }

    /// Snowball stemming reducer.
    pub fn stemming() -> Self {
        Self::new(ReducerMode::Stemming)
    }

    /// Dictionary/rule lemmatization reducer.
    pub fn lemmatization() -> Self {
        Self::new(ReducerMode::Lemmatization)
    }

    pub fn mode(&self) -> ReducerMode {
        self.mode
    }

    /// Reduce one token to its canonical form.
    pub fn reduce(&self, token: &str) -> String {
        match self.mode {
            ReducerMode::Stemming => self.stemmer.stem(token).into_owned(),
            ReducerMode::Lemmatization => self.lemmatize(token),
        }
    }

    /// Reduce a batch of tokens, recording every observed surface form in a
    /// [`StemMap`] so output can be restored to readable words.
    pub fn reduce_with_map(&self, tokens: &[String]) -> (Vec<String>, StemMap) {
        let mut map = StemMap::new();
        let reduced = self.reduce_into(tokens, &mut map);
        (reduced, map)
    }

    /// Like [`Reducer::reduce_with_map`] but accumulating into an existing
    /// map, for callers reducing many documents in one batch.
    pub fn reduce_into(&self, tokens: &[String], map: &mut StemMap) -> Vec<String> {
        tokens
            .iter()
            .map(|token| {
                let stem = self.reduce(token);
                map.record(&stem, token);
                stem
            })
            .collect()
    }

    fn lemmatize(&self, token: &str) -> String {
        if let Some(lemma) = self.lemmas.get(token) {
            return (*lemma).to_string();
        }
        if let Some(base) = token.strip_suffix("ies") {
            if base.len() > 1 {
                return format!("{base}y");
            }
        }
        if token.len() > 4
            && ["ches", "shes", "sses", "xes", "zes"]
                .iter()
                .any(|suffix| token.ends_with(suffix))
        {
            return token[..token.len() - 2].to_string();
        }
        if token.len() > 3
            && token.ends_with('s')
            && !token.ends_with("ss")
            && !token.ends_with("us")
            && !token.ends_with("is")
        {
            return token[..token.len() - 1].to_string();
        }
        token.to_string()
    }
}

impl std::fmt::Debug for Reducer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Stemmer does not implement Debug; report the mode only.
        f.debug_struct("Reducer").field("mode", &self.mode).finish()
    }
}

/// Batch-scoped mapping from each stem to the surface forms observed for it.
///
/// Built once per run and returned alongside the weighted vectors — never
/// hidden state. The representative form per stem is the most frequent
/// observed original; ties go to the shortest string, remaining ties to
/// lexicographic order, making the choice a deterministic total order.
#[derive(Debug, Default)]
pub struct StemMap {
    /// stem → (surface form, observation count), in first-seen order.
    observed: HashMap<String, Vec<(String, u32)>>,
}

impl StemMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observation of `original` reducing to `stem`.
    pub fn record(&mut self, stem: &str, original: &str) {
        let forms = self.observed.entry(stem.to_string()).or_default();
        match forms.iter_mut().find(|(form, _)| form == original) {
            Some((_, count)) => *count += 1,
            None => forms.push((original.to_string(), 1)),
        }
    }

    /// The representative surface form for a stem, if the stem was observed.
    pub fn representative(&self, stem: &str) -> Option<&str> {
        let forms = self.observed.get(stem)?;
        forms
            .iter()
            .min_by(|(form_a, count_a), (form_b, count_b)| {
                count_b
                    .cmp(count_a)
                    .then(form_a.len().cmp(&form_b.len()))
                    .then(form_a.cmp(form_b))
            })
            .map(|(form, _)| form.as_str())
    }

    /// Restore a stemmed token sequence to representative surface forms.
    /// Tokens without a recorded stem pass through unchanged.
    pub fn restore(&self, stems: &[String]) -> Vec<String> {
        stems
            .iter()
            .map(|stem| {
                self.representative(stem)
                    .unwrap_or(stem.as_str())
                    .to_string()
            })
            .collect()
    }

    /// Number of distinct stems observed.
    pub fn len(&self) -> usize {
        self.observed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }
}
