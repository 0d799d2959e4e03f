use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::summarizers::SummarizerType;

/// Documents summarized in parallel when no override is given.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Central configuration loaded from environment variables.
///
/// Nothing is required: with no variables set, the bundled English stop-word
/// list and each algorithm's default sentence count are used. The .env file
/// is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Stop-word list file (TIDBIT_STOP_WORDS). None means the bundled list.
    pub stop_words_path: Option<PathBuf>,
    /// Per-algorithm sentence count overrides
    pub target_counts: HashMap<SummarizerType, usize>,
    /// How many documents the batch pipeline summarizes at once
    pub concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stop_words_path: None,
            target_counts: HashMap::new(),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key -> value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let stop_words_path = lookup("TIDBIT_STOP_WORDS")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let mut target_counts = HashMap::new();
        for (kind, key) in [
            (SummarizerType::Frequency, "TIDBIT_FREQUENCY_SENTENCES"),
            (SummarizerType::Luhn, "TIDBIT_LUHN_SENTENCES"),
            (SummarizerType::SumBasic, "TIDBIT_SUMBASIC_SENTENCES"),
        ] {
            if let Some(count) = parse_count(&lookup, key)? {
                target_counts.insert(kind, count);
            }
        }

        let concurrency = parse_count(&lookup, "TIDBIT_CONCURRENCY")?
            .unwrap_or(DEFAULT_CONCURRENCY)
            .max(1);

        Ok(Self {
            stop_words_path,
            target_counts,
            concurrency,
        })
    }
}

fn parse_count<F>(lookup: &F, key: &str) -> Result<Option<usize>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => {
            let value = raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("{key} must be a non-negative integer, got {raw:?}"))?;
            Ok(Some(value))
        }
        _ => Ok(None),
    }
}
