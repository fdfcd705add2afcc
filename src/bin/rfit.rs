//! rfit: extract resume keywords and score them against a job posting.
//!
//! Thin console front-end over the `resume_fit` library. Reads UTF-8 plain
//! text files only; PDF extraction is out of scope.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::info;
use serde_json::json;

use resume_fit::{
    aggregate_keywords, interpret_score, intersection, keywords_in_reference, match_score,
    top_n, Document, Lexicon, ReducerMode, Tokenizer, Vectorizer, WeightingOptions,
};

#[derive(Parser)]
#[command(name = "rfit", version, about = "Resume keyword extraction and job-fit scoring")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rank the top keywords of each document in one shared batch.
    Keywords {
        /// Plain-text document files.
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Number of keywords per document.
        #[arg(long, default_value_t = 15)]
        top: usize,
        /// Lemmatize instead of stemming.
        #[arg(long)]
        lemmatize: bool,
        /// Keep all tokens instead of restricting to domain vocabulary.
        #[arg(long)]
        all_terms: bool,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Score one resume against one job posting.
    Compare {
        /// Resume text file.
        resume: PathBuf,
        /// Job posting text file.
        job: PathBuf,
        /// Number of keywords per document.
        #[arg(long, default_value_t = 15)]
        top: usize,
        /// Number of contribution-breakdown rows.
        #[arg(long, default_value_t = 10)]
        breakdown: usize,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Rank many resumes against one job posting by similarity.
    Rank {
        /// Resume text files.
        #[arg(required = true)]
        resumes: Vec<PathBuf>,
        /// Job posting text file.
        #[arg(long)]
        job: PathBuf,
        /// Number of keywords per document.
        #[arg(long, default_value_t = 15)]
        top: usize,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::Keywords {
            files,
            top,
            lemmatize,
            all_terms,
            json,
        } => keywords_command(&files, top, lemmatize, all_terms, json),
        Command::Compare {
            resume,
            job,
            top,
            breakdown,
            json,
        } => compare_command(&resume, &job, top, breakdown, json),
        Command::Rank {
            resumes,
            job,
            top,
            json,
        } => rank_command(&resumes, &job, top, json),
    }
}

/// Load a plain-text file into a document named after the file.
fn load_document(path: &Path) -> Result<Document, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|err| format!("cannot read {}: {err}", path.display()))?;
    let id = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(Document::new(id, text))
}

fn load_documents(paths: &[PathBuf]) -> Result<Vec<Document>, Box<dyn Error>> {
    paths.iter().map(|path| load_document(path)).collect()
}

/// Normalize and tokenize every document into the joined form the
/// vectorizer consumes.
fn prepare_batch(documents: &[Document], domain_only: bool) -> Vec<String> {
    let options = resume_fit::TokenizerOptions {
        domain_only,
        ..Default::default()
    };
    let tokenizer = Tokenizer::with_options(Lexicon::tech(), options);
    documents
        .iter()
        .map(|doc| tokenizer.prepare(&doc.text))
        .collect()
}

fn vectorizer(lemmatize: bool) -> Result<Vectorizer, Box<dyn Error>> {
    let mode = if lemmatize {
        ReducerMode::Lemmatization
    } else {
        ReducerMode::Stemming
    };
    Ok(Vectorizer::with_reducer(WeightingOptions::default(), mode)?)
}

fn keywords_command(
    files: &[PathBuf],
    top: usize,
    lemmatize: bool,
    all_terms: bool,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let documents = load_documents(files)?;
    info!("extracting keywords from {} documents", documents.len());
    let prepared = prepare_batch(&documents, !all_terms);
    let batch = vectorizer(lemmatize)?.fit(&prepared)?;

    let ranked: Vec<_> = documents
        .iter()
        .zip(&batch.vectors)
        .map(|(doc, vector)| (doc.id.as_str(), top_n(vector, top)))
        .collect();

    if json {
        let out: Vec<_> = ranked
            .iter()
            .map(|(id, keywords)| json!({ "document": id, "keywords": keywords }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for (id, keywords) in &ranked {
        println!("Top keywords - {id}:");
        for (rank, keyword) in keywords.iter().enumerate() {
            println!(
                "{:3}. {:24} (score: {:.4})",
                rank + 1,
                keyword.term,
                keyword.weight
            );
        }
        println!();
    }
    Ok(())
}

fn compare_command(
    resume: &Path,
    job: &Path,
    top: usize,
    breakdown: usize,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let resume_doc = load_document(resume)?;
    let job_doc = load_document(job)?;
    let prepared = prepare_batch(std::slice::from_ref(&resume_doc), true);
    let job_prepared = prepare_batch(std::slice::from_ref(&job_doc), true);

    let vectorizer = vectorizer(false)?;
    let scored = vectorizer.similarity_with_breakdown(&prepared, &job_prepared[0], breakdown)?;
    let result = &scored[0];
    let band = interpret_score(result.similarity);

    let batch = vectorizer.fit(&[prepared[0].as_str(), job_prepared[0].as_str()])?;
    let resume_keywords = top_n(&batch.vectors[0], top);
    let job_keywords = top_n(&batch.vectors[1], top);
    let common = intersection(&resume_keywords, &job_keywords);
    let overlap = match_score(&resume_keywords, &job_keywords);
    let coverage = keywords_in_reference(&resume_keywords, &job_doc.text);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "resume": resume_doc.id,
                "job": job_doc.id,
                "similarity": result.similarity,
                "band": band.label(),
                "breakdown": result.breakdown,
                "common_keywords": common,
                "match_score": overlap,
                "coverage_percent": coverage.coverage_percent(),
                "missing_keywords": coverage.missing,
            }))?
        );
        return Ok(());
    }

    println!("Resume: {}", resume_doc.id);
    println!("Job:    {}", job_doc.id);
    println!();
    println!(
        "Similarity: {:.4} ({:.1}%) - {}",
        result.similarity,
        result.similarity * 100.0,
        band
    );
    if !result.breakdown.is_empty() {
        println!("\nTop contributing terms:");
        for contribution in &result.breakdown {
            println!(
                "  {:24} resume {:.4} x job {:.4} = {:.4}",
                contribution.term,
                contribution.doc_weight,
                contribution.reference_weight,
                contribution.product
            );
        }
    }
    println!("\nOverlapping keywords ({}):", common.len());
    if common.is_empty() {
        println!("  none in the top {top}");
    } else {
        println!(
            "  {}",
            common.iter().cloned().collect::<Vec<_>>().join(", ")
        );
    }
    println!("\nMatch score: {overlap:.2}%");
    println!(
        "Keyword coverage in job posting: {:.1}%",
        coverage.coverage_percent()
    );
    if !coverage.missing.is_empty() {
        println!("Missing from job posting:");
        for keyword in &coverage.missing {
            println!("  - {}", keyword.term);
        }
    }
    Ok(())
}

fn rank_command(
    resumes: &[PathBuf],
    job: &Path,
    top: usize,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let resume_docs = load_documents(resumes)?;
    let job_doc = load_document(job)?;
    info!("ranking {} resumes against {}", resume_docs.len(), job_doc.id);

    let prepared = prepare_batch(&resume_docs, true);
    let job_prepared = prepare_batch(std::slice::from_ref(&job_doc), true);

    let vectorizer = vectorizer(false)?;
    let scored = vectorizer.similarity_with_breakdown(&prepared, &job_prepared[0], 0)?;

    let mut order: Vec<usize> = (0..resume_docs.len()).collect();
    order.sort_by(|&a, &b| {
        scored[b]
            .similarity
            .partial_cmp(&scored[a].similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let batch = vectorizer.fit(&prepared)?;
    let keyword_lists: Vec<_> = batch
        .vectors
        .iter()
        .map(|vector| top_n(vector, top))
        .collect();
    let aggregated = aggregate_keywords(&keyword_lists);

    if json {
        let ranking: Vec<_> = order
            .iter()
            .map(|&idx| {
                json!({
                    "resume": resume_docs[idx].id,
                    "similarity": scored[idx].similarity,
                    "band": interpret_score(scored[idx].similarity).label(),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "job": job_doc.id,
                "ranking": ranking,
                "keyword_frequencies": aggregated,
            }))?
        );
        return Ok(());
    }

    println!("Job: {}\n", job_doc.id);
    for (rank, &idx) in order.iter().enumerate() {
        println!(
            "{:3}. {:32} {:.4} - {}",
            rank + 1,
            resume_docs[idx].id,
            scored[idx].similarity,
            interpret_score(scored[idx].similarity)
        );
    }
    println!("\nKeyword frequency across resumes:");
    for (term, count) in aggregated.iter().take(top) {
        println!("  {term:24} {count}");
    }
    Ok(())
}
