// JSON payloads, shaped like the responses the summary API returned.

use anyhow::Result;
use serde::Serialize;

use crate::pipeline::batch::DocumentSummary;
use crate::summarizers::{Summary, SummarizerType, SummarizerTypeInfo};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TypesPayload<'a> {
    summarizer_types: &'a [SummarizerTypeInfo],
}

/// One document in a batch payload: either a summary or the error message.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchEntry<'a> {
    source: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    summarizer_type: Option<SummarizerType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// `{"summarizerType": "...", "summary": [...]}`
pub fn summary_json(summary: &Summary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

/// `{"summarizerTypes": [{"identifier": "...", "defaultSentences": n}, ...]}`
pub fn types_json(types: &[SummarizerTypeInfo]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&TypesPayload {
        summarizer_types: types,
    })?)
}

/// A JSON array with one entry per document, in input order.
pub fn batch_json(results: &[DocumentSummary]) -> Result<String> {
    let entries: Vec<BatchEntry<'_>> = results
        .iter()
        .map(|doc| match &doc.result {
            Ok(summary) => BatchEntry {
                source: &doc.source,
                summarizer_type: Some(summary.summarizer_type),
                summary: Some(&summary.sentences),
                error: None,
            },
            Err(e) => BatchEntry {
                source: &doc.source,
                summarizer_type: None,
                summary: None,
                error: Some(format!("{e:#}")),
            },
        })
        .collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}
