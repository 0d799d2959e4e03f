// Colored terminal output for summaries, sentence lists and comparisons.
//
// This module handles all terminal-specific formatting. The CLI delegates
// here once the summarizers have produced their results.

use colored::Colorize;

use crate::pipeline::batch::DocumentSummary;
use crate::summarizers::{Summary, SummarizerType, SummarizerTypeInfo};
use crate::text::segmenter::Sentence;

/// Display one summary, optionally titled with where the text came from.
pub fn display_summary(summary: &Summary, source: Option<&str>) {
    let title = match source {
        Some(source) => format!("=== {} summary of {} ===", summary.summarizer_type, source),
        None => format!("=== {} summary ===", summary.summarizer_type),
    };
    println!("\n{}", title.bold());

    if summary.is_empty() {
        println!("  {}", "(no sentences selected)".dimmed());
        return;
    }

    for sentence in &summary.sentences {
        println!("  {sentence}");
    }
}

/// Display every document of a batch, with failures in red.
pub fn display_batch(results: &[DocumentSummary]) {
    for doc in results {
        match &doc.result {
            Ok(summary) => display_summary(summary, Some(&doc.source)),
            Err(e) => println!(
                "\n{} {}: {}",
                "Failed".red().bold(),
                doc.source,
                format!("{e:#}").red()
            ),
        }
    }

    let failed = results.iter().filter(|r| r.result.is_err()).count();
    println!();
    println!("  Documents summarized: {}", results.len() - failed);
    if failed > 0 {
        println!("  {} {} failed", "!".red().bold(), failed);
    }
}

/// Display the capability listing.
pub fn display_types(types: &[SummarizerTypeInfo]) {
    println!("\n{}", "=== Available summarizers ===".bold());
    println!();
    println!(
        "  {:<12} {:>9}  {}",
        "Identifier".dimmed(),
        "Sentences".dimmed(),
        "Method".dimmed()
    );
    println!("  {}", "-".repeat(60).dimmed());
    for info in types {
        println!(
            "  {:<12} {:>9}  {}",
            info.identifier.as_str().bold(),
            info.default_sentences,
            describe(info.identifier)
        );
    }
}

/// Display segmented sentences, numbered by order index.
pub fn display_sentences(sentences: &[Sentence]) {
    println!(
        "\n{}",
        format!("=== {} sentences ===", sentences.len()).bold()
    );
    for sentence in sentences {
        println!(
            "  {:>4}. {}",
            sentence.index().to_string().dimmed(),
            sentence.text()
        );
    }
}

/// Display several summaries of the same text side by side (one block each).
pub fn display_comparison(summaries: &[(SummarizerType, Result<Summary, String>)]) {
    for (kind, result) in summaries {
        println!("\n{}", format!("--- {kind} ---").bold());
        match result {
            Ok(summary) if summary.is_empty() => {
                println!("  {}", "(no sentences selected)".dimmed())
            }
            Ok(summary) => {
                for (i, sentence) in summary.sentences.iter().enumerate() {
                    let preview = super::truncate_chars(sentence, 140);
                    println!("  {}. {}", i + 1, preview);
                }
            }
            Err(e) => println!("  {}", e.red()),
        }
    }
}

fn describe(kind: SummarizerType) -> &'static str {
    match kind {
        SummarizerType::Frequency => "word frequency, length-normalized",
        SummarizerType::Luhn => "significant-word clusters",
        SummarizerType::SumBasic => "probability with redundancy penalty",
    }
}
