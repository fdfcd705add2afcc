//! Immutable vocabulary tables consumed by the tokenizer.
//!
//! The domain-term set, stopword list, degree-abbreviation map and
//! month/weekday set are injected into the [`Tokenizer`](crate::Tokenizer) as
//! one [`Lexicon`] value rather than read from module-level globals, so tests
//! can run against fixture vocabularies and other domains can supply their
//! own tables without touching the pipeline logic. [`Lexicon::tech`] builds
//! the default technology lexicon from the tables below.

use std::collections::{HashMap, HashSet};

/// Software / data / infrastructure vocabulary recognized by the default
/// lexicon. Multi-word entries are matched by containment over the joined
/// token stream; single-word entries by exact token match or long-prefix
/// containment ("scikit" inside "scikit-learn").
const TECH_TERMS: &[&str] = &[
    "agile",
    "ai",
    "airflow",
    "algorithm",
    "algorithms",
    "analytics",
    "android",
    "angular",
    "ansible",
    "api",
    "architect",
    "architecture",
    "artificial intelligence",
    "attention",
    "authentication",
    "authorization",
    "automation",
    "aws",
    "azure",
    "backend",
    "bash",
    "bert",
    "big data",
    "bitbucket",
    "blockchain",
    "cassandra",
    "classification",
    "cli",
    "cloud",
    "clustering",
    "cnn",
    "coding",
    "compiler",
    "computer science",
    "computer vision",
    "concurrency",
    "container",
    "containerization",
    "convolutional",
    "cpp",
    "crawler",
    "cryptography",
    "css",
    "data analysis",
    "data pipeline",
    "data science",
    "data structures",
    "data visualization",
    "database",
    "databases",
    "debugging",
    "deep learning",
    "deployment",
    "design patterns",
    "developer",
    "development",
    "devops",
    "distributed systems",
    "django",
    "dns",
    "docker",
    "dynamodb",
    "elasticsearch",
    "embedded systems",
    "encryption",
    "engineer",
    "engineering",
    "ethereum",
    "etl",
    "express",
    "fastapi",
    "feature engineering",
    "flask",
    "frontend",
    "fullstack",
    "functional programming",
    "git",
    "github",
    "gitlab",
    "golang",
    "gpt",
    "grafana",
    "graphql",
    "grpc",
    "gui",
    "hadoop",
    "hardware",
    "html",
    "http",
    "https",
    "hyperparameter",
    "inference",
    "interface",
    "ios",
    "iot",
    "java",
    "javascript",
    "jenkins",
    "jira",
    "junit",
    "jupyter",
    "jvm",
    "kafka",
    "kanban",
    "keras",
    "kotlin",
    "kubernetes",
    "linux",
    "load balancing",
    "logging",
    "lstm",
    "machine learning",
    "matlab",
    "matplotlib",
    "microservices",
    "mobile development",
    "mongodb",
    "monitoring",
    "multithreading",
    "mysql",
    "natural language processing",
    "networking",
    "neural networks",
    "nlp",
    "nodejs",
    "nosql",
    "numpy",
    "oauth",
    "object-oriented",
    "oop",
    "opencv",
    "optimization",
    "orchestration",
    "orm",
    "pandas",
    "parallel computing",
    "performance",
    "perl",
    "php",
    "pipeline",
    "postgresql",
    "preprocessing",
    "profiling",
    "programming",
    "prometheus",
    "python",
    "pytorch",
    "rds",
    "react",
    "recommendation",
    "redis",
    "regression",
    "reinforcement learning",
    "rest",
    "robotics",
    "ruby",
    "rust",
    "scala",
    "scalability",
    "schema",
    "scikit-learn",
    "scipy",
    "scraping",
    "scrum",
    "sdk",
    "seaborn",
    "security",
    "software",
    "software development",
    "software engineering",
    "spark",
    "spring",
    "sql",
    "sre",
    "ssl",
    "statistics",
    "supervised",
    "swift",
    "tdd",
    "tensorflow",
    "terraform",
    "testing",
    "tls",
    "transformer",
    "typescript",
    "ui",
    "unit testing",
    "unix",
    "unsupervised",
    "ux",
    "version control",
    "vue",
    "web development",
    "websocket",
];

/// Academic-degree abbreviations rewritten to a uniform surface form before
/// tokenization. Keys are matched as whole whitespace-delimited words.
const DEGREE_ABBREVIATIONS: &[(&str, &str)] = &[
    ("b.s.", "bachelor's degree"),
    ("b.s", "bachelor's degree"),
    ("bs", "bachelor's degree"),
    ("b.a.", "bachelor's degree"),
    ("b.a", "bachelor's degree"),
    ("ba", "bachelor's degree"),
    ("bachelor", "bachelor's degree"),
    ("bachelors", "bachelor's degree"),
    ("m.s.", "master's degree"),
    ("m.s", "master's degree"),
    ("ms", "master's degree"),
    ("m.a.", "master's degree"),
    ("m.a", "master's degree"),
    ("ma", "master's degree"),
    ("master", "master's degree"),
    ("masters", "master's degree"),
    ("mba", "master's degree"),
    ("m.b.a.", "master's degree"),
    ("phd", "doctorate"),
    ("ph.d.", "doctorate"),
    ("ph.d", "doctorate"),
];

/// Month and weekday names, always dropped so dated resume entries do not
/// pollute keyword lists.
const TIME_WORDS: &[&str] = &[
    "january", "february", "march", "april", "may", "june", "july", "august",
    "september", "october", "november", "december", "jan", "feb", "mar",
    "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "monday",
    "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday", "mon",
    "tue", "wed", "thu", "fri", "sat", "sun",
];

/// English function words removed during filtering.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "ain", "all", "am",
    "an", "and", "any", "are", "aren", "as", "at", "be", "because", "been",
    "before", "being", "below", "between", "both", "but", "by", "can",
    "couldn", "d", "did", "didn", "do", "does", "doesn", "doing", "don",
    "down", "during", "each", "few", "for", "from", "further", "had", "hadn",
    "has", "hasn", "have", "haven", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is",
    "isn", "it", "its", "itself", "just", "ll", "m", "ma", "me", "mightn",
    "more", "most", "mustn", "my", "myself", "needn", "no", "nor", "not",
    "now", "o", "of", "off", "on", "once", "only", "or", "other", "our",
    "ours", "ourselves", "out", "over", "own", "re", "s", "same", "shan",
    "she", "should", "shouldn", "so", "some", "such", "t", "than", "that",
    "the", "their", "theirs", "them", "themselves", "then", "there", "these",
    "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "ve", "very", "was", "wasn", "we", "were", "weren", "what", "when",
    "where", "which", "while", "who", "whom", "why", "will", "with", "won",
    "wouldn", "y", "you", "your", "yours", "yourself", "yourselves",
];

/// Immutable vocabulary tables for one domain/language.
#[derive(Debug, Clone)]
pub struct Lexicon {
    stop_words: HashSet<String>,
    /// All domain terms in sorted order; scan order is deterministic.
    domain_terms: Vec<String>,
    domain_set: HashSet<String>,
    abbreviations: HashMap<String, String>,
    time_words: HashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from caller-supplied tables. Domain terms are
    /// deduplicated and kept in sorted order.
    pub fn new(
        stop_words: impl IntoIterator<Item = String>,
        domain_terms: impl IntoIterator<Item = String>,
        abbreviations: impl IntoIterator<Item = (String, String)>,
        time_words: impl IntoIterator<Item = String>,
    ) -> Self {
        let domain_set: HashSet<String> = domain_terms.into_iter().collect();
        let mut domain_terms: Vec<String> = domain_set.iter().cloned().collect();
        domain_terms.sort();
        Self {
            stop_words: stop_words.into_iter().collect(),
            domain_terms,
            domain_set,
            abbreviations: abbreviations.into_iter().collect(),
            time_words: time_words.into_iter().collect(),
        }
    }

    /// The built-in technology lexicon (software / data / infrastructure
    /// vocabulary, English stopwords, degree abbreviations).
    pub fn tech() -> Self {
        Self::new(
            STOP_WORDS.iter().map(|s| s.to_string()),
            TECH_TERMS.iter().map(|s| s.to_string()),
            DEGREE_ABBREVIATIONS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
            TIME_WORDS.iter().map(|s| s.to_string()),
        )
    }

    /// Whether the word is an English function word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Whether the word names a month or weekday.
    pub fn is_time_word(&self, word: &str) -> bool {
        self.time_words.contains(word)
    }

    /// Expanded form of a degree abbreviation, if the word is one.
    pub fn expand_abbreviation(&self, word: &str) -> Option<&str> {
        self.abbreviations.get(word).map(|s| s.as_str())
    }

    /// Whether the token is an exact domain-vocabulary entry.
    pub fn is_domain_term(&self, token: &str) -> bool {
        self.domain_set.contains(token)
    }

    /// Whether the token occurs inside any domain term. Tokens of four
    /// characters or fewer never match, so short words like "go" do not
    /// latch onto "django".
    pub fn is_within_domain_term(&self, token: &str) -> bool {
        token.len() > 3 && self.domain_terms.iter().any(|term| term.contains(token))
    }

    /// Whether the token occurs inside any single-word domain term
    /// ("scikit" inside "scikit-learn").
    pub fn is_within_single_word_term(&self, token: &str) -> bool {
        token.len() > 3
            && self
                .domain_terms
                .iter()
                .any(|term| !term.contains(' ') && term.contains(token))
    }

    /// Multi-word domain terms in sorted order.
    pub fn multi_word_terms(&self) -> impl Iterator<Item = &str> {
        self.domain_terms
            .iter()
            .filter(|term| term.contains(' '))
            .map(|term| term.as_str())
    }

    /// Number of domain terms.
    pub fn domain_term_count(&self) -> usize {
        self.domain_terms.len()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::tech()
    }
}
