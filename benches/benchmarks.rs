//! Criterion benchmarks for the tokenization and weighting pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use resume_fit::{Lexicon, Tokenizer, Vectorizer, WeightingOptions};

const VOCAB: &[&str] = &[
    "python", "java", "docker", "kubernetes", "aws", "terraform", "sql",
    "postgresql", "redis", "kafka", "spark", "airflow", "tensorflow",
    "pytorch", "pandas", "numpy", "react", "typescript", "graphql", "linux",
    "engineer", "developer", "pipeline", "microservices", "testing",
];

/// Deterministic synthetic documents cycling through the vocabulary with
/// different strides, so documents overlap without being identical.
fn synthetic_docs(count: usize, words_per_doc: usize) -> Vec<String> {
    (0..count)
        .map(|doc| {
            (0..words_per_doc)
                .map(|word| VOCAB[(doc * 7 + word * (doc % 5 + 1)) % VOCAB.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn bench_prepare(c: &mut Criterion) {
    let tokenizer = Tokenizer::new(Lexicon::tech());
    let raw = "Senior Software Engineer with 7 years of Python, Docker and \
               Kubernetes experience. Built machine learning pipelines on AWS \
               (see https://example.com) using TensorFlow and Airflow. BS in \
               Computer Science, May 2016."
        .repeat(20);
    c.bench_function("tokenizer_prepare", |b| {
        b.iter(|| tokenizer.prepare(black_box(&raw)))
    });
}

fn bench_fit(c: &mut Criterion) {
    let docs = synthetic_docs(50, 200);
    let vectorizer = Vectorizer::new(WeightingOptions::default()).expect("valid options");
    c.bench_function("vectorizer_fit_50_docs", |b| {
        b.iter(|| vectorizer.fit(black_box(&docs)).expect("fit"))
    });
}

fn bench_similarity(c: &mut Criterion) {
    let docs = synthetic_docs(20, 200);
    let reference = synthetic_docs(1, 200).remove(0);
    let vectorizer = Vectorizer::new(WeightingOptions::default()).expect("valid options");
    c.bench_function("similarity_20_docs", |b| {
        b.iter(|| {
            vectorizer
                .similarity_with_breakdown(black_box(&docs), black_box(&reference), 20)
                .expect("fit")
        })
    });
}

criterion_group!(benches, bench_prepare, bench_fit, bench_similarity);
criterion_main!(benches);
