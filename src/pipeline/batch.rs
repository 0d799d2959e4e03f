// Batch summarization: many documents, bounded parallelism.
//
// Summarizing is CPU-bound and synchronous, so each document runs on tokio's
// blocking pool while `buffer_unordered` caps how many are in flight. Every
// task gets its own clone of the summarizer and builds its own frequency
// tables; nothing mutable is shared between documents. Files are read inside
// the task, so an unreadable file fails only its own entry.

use std::path::PathBuf;

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::summarizers::{Summarizer, SummarizerType, Summary};

/// A document to summarize and where it came from (file path, "stdin", ...).
#[derive(Debug, Clone)]
pub struct Document {
    pub source: String,
    pub text: String,
}

/// Where a batch entry's text comes from.
enum Input {
    Text(String),
    File(PathBuf),
}

/// The outcome for one document. A failure here does not abort the batch.
#[derive(Debug)]
pub struct DocumentSummary {
    pub source: String,
    pub result: Result<Summary>,
}

/// Summarize every document with the same algorithm.
///
/// `target_count` overrides the summarizer's configured count when set.
/// Results are returned in the same order as `documents`.
pub async fn run(
    summarizer: &Summarizer,
    documents: Vec<Document>,
    kind: SummarizerType,
    target_count: Option<usize>,
    concurrency: usize,
) -> Vec<DocumentSummary> {
    let inputs = documents
        .into_iter()
        .map(|doc| (doc.source, Input::Text(doc.text)))
        .collect();
    run_inputs(summarizer, inputs, kind, target_count, concurrency).await
}

/// Read and summarize every file. A file that cannot be read becomes an
/// error entry in its position; the rest of the batch still runs.
pub async fn run_files(
    summarizer: &Summarizer,
    paths: Vec<PathBuf>,
    kind: SummarizerType,
    target_count: Option<usize>,
    concurrency: usize,
) -> Vec<DocumentSummary> {
    let inputs = paths
        .into_iter()
        .map(|path| (path.display().to_string(), Input::File(path)))
        .collect();
    run_inputs(summarizer, inputs, kind, target_count, concurrency).await
}

async fn run_inputs(
    summarizer: &Summarizer,
    inputs: Vec<(String, Input)>,
    kind: SummarizerType,
    target_count: Option<usize>,
    concurrency: usize,
) -> Vec<DocumentSummary> {
    let total = inputs.len();
    let concurrency = concurrency.max(1);
    info!(documents = total, concurrency, summarizer = %kind, "Starting batch");

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::with_template("  Summarizing [{bar:30}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut results: Vec<(usize, DocumentSummary)> =
        stream::iter(inputs.into_iter().enumerate().map(|(position, (source, input))| {
            let summarizer = summarizer.clone();
            let pb = pb.clone();
            async move {
                let result = match read_input(input).await {
                    Ok(text) => summarize_blocking(summarizer, text, kind, target_count).await,
                    Err(e) => Err(e),
                };
                if let Err(e) = &result {
                    warn!(source = %source, error = %e, "Failed to summarize document, skipping");
                }
                pb.inc(1);
                (position, DocumentSummary { source, result })
            }
        }))
        .buffer_unordered(concurrency)
        .collect()
        .await;
    pb.finish_and_clear();

    results.sort_by_key(|(position, _)| *position);

    let succeeded = results.iter().filter(|(_, r)| r.result.is_ok()).count();
    info!(documents = total, succeeded, "Batch complete");

    results.into_iter().map(|(_, summary)| summary).collect()
}

async fn read_input(input: Input) -> Result<String> {
    match input {
        Input::Text(text) => Ok(text),
        Input::File(path) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display())),
    }
}

async fn summarize_blocking(
    summarizer: Summarizer,
    text: String,
    kind: SummarizerType,
    target_count: Option<usize>,
) -> Result<Summary> {
    let summary = tokio::task::spawn_blocking(move || {
        let count = target_count.unwrap_or_else(|| summarizer.target_count(kind));
        summarizer.summarize_with_count(&text, kind, count)
    })
    .await
    .context("summarization task panicked")??;
    Ok(summary)
}
