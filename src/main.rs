use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use tidbit::config::Config;
use tidbit::output::{json, terminal};
use tidbit::pipeline::batch::{self, Document};
use tidbit::summarizers::{Summarizer, SummarizerType};
use tidbit::text::segmenter::segment;

/// Tidbit: extractive summarization for article text.
///
/// Picks the handful of original sentences that best represent a document,
/// using one of three classic algorithms (Frequency, Luhn, SumBasic).
#[derive(Parser)]
#[command(name = "tidbit", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize one or more text files (or stdin when none are given)
    Summarize {
        /// Files to summarize
        files: Vec<PathBuf>,

        /// Summarizer to use: FREQUENCY, LUHN or SUMBASIC
        #[arg(short, long, default_value = "FREQUENCY")]
        algorithm: String,

        /// Maximum sentences in the summary (default depends on the algorithm)
        #[arg(short = 'n', long)]
        sentences: Option<usize>,

        /// Print JSON instead of formatted text
        #[arg(long)]
        json: bool,

        /// Number of files to summarize in parallel (default: TIDBIT_CONCURRENCY or 4)
        #[arg(long)]
        concurrency: Option<usize>,
    },

    /// List the available summarizers and their default sentence counts
    Types {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show how a text is split into sentences
    Segment {
        /// File to segment (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Run every summarizer on the same text
    Compare {
        /// File to summarize (stdin when omitted)
        file: Option<PathBuf>,

        /// Maximum sentences per summary (default depends on the algorithm)
        #[arg(short = 'n', long)]
        sentences: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tidbit=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Summarize {
            files,
            algorithm,
            sentences,
            json,
            concurrency,
        } => {
            // Reject an unknown summarizer before reading any input
            let kind: SummarizerType = algorithm.parse()?;
            let summarizer = Summarizer::from_config(&config);

            if files.len() <= 1 {
                let doc = read_document(files.first().map(PathBuf::as_path))?;
                let count = sentences.unwrap_or_else(|| summarizer.target_count(kind));
                let summary = summarizer.summarize_with_count(&doc.text, kind, count)?;

                if json {
                    println!("{}", json::summary_json(&summary)?);
                } else {
                    terminal::display_summary(&summary, Some(&doc.source));
                }
                return Ok(());
            }

            let concurrency = concurrency.unwrap_or(config.concurrency);

            info!(files = files.len(), "Summarizing batch");
            let results = batch::run_files(&summarizer, files, kind, sentences, concurrency).await;

            if json {
                println!("{}", json::batch_json(&results)?);
            } else {
                terminal::display_batch(&results);
            }

            if results.iter().all(|r| r.result.is_err()) {
                anyhow::bail!("No documents could be summarized");
            }
        }

        Commands::Types { json } => {
            let summarizer = Summarizer::from_config(&config);
            let types = summarizer.summarizer_types();
            if json {
                println!("{}", json::types_json(&types)?);
            } else {
                terminal::display_types(&types);
            }
        }

        Commands::Segment { file } => {
            let doc = read_document(file.as_deref())?;
            let sentences = segment(&doc.text);
            terminal::display_sentences(&sentences);
        }

        Commands::Compare { file, sentences } => {
            let doc = read_document(file.as_deref())?;
            let summarizer = Summarizer::from_config(&config);

            println!(
                "{}",
                format!("Comparing summarizers on {}", doc.source).bold()
            );

            let summaries: Vec<_> = SummarizerType::ALL
                .into_iter()
                .map(|kind| {
                    let count = sentences.unwrap_or_else(|| summarizer.target_count(kind));
                    let result = summarizer
                        .summarize_with_count(&doc.text, kind, count)
                        .map_err(|e| e.to_string());
                    (kind, result)
                })
                .collect();

            terminal::display_comparison(&summaries);
        }
    }

    Ok(())
}

/// Read a document from a file, or from stdin when no path is given.
fn read_document(path: Option<&Path>) -> Result<Document> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Ok(Document {
                source: path.display().to_string(),
                text,
            })
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read text from stdin")?;
            Ok(Document {
                source: "stdin".to_string(),
                text,
            })
        }
    }
}
