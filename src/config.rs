//! Store configuration
//!
//! Bucket counts are fixed when a store is built; the indices never resize.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Bucket count for indices keyed by paper id
pub const BUCKETS_LARGE: usize = 10_000;

/// Bucket count for indices keyed by venue, field or author
pub const BUCKETS_SMALL: usize = 1_000;

/// Config loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Sizing and clock settings for a [`PaperStore`](crate::PaperStore)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Primary id -> paper index
    pub paper_buckets: usize,
    /// Citation counts
    pub citation_buckets: usize,
    /// Influencer -> imitators
    pub influence_buckets: usize,
    /// Query-scoped traversal marks
    pub marking_buckets: usize,
    pub venue_buckets: usize,
    pub field_buckets: usize,
    pub author_buckets: usize,
    /// Year the citation histogram counts back from.
    /// `None` means the current calendar year.
    pub current_year: Option<i32>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            paper_buckets: BUCKETS_LARGE,
            citation_buckets: BUCKETS_LARGE,
            influence_buckets: BUCKETS_LARGE,
            marking_buckets: BUCKETS_LARGE,
            venue_buckets: BUCKETS_SMALL,
            field_buckets: BUCKETS_SMALL,
            author_buckets: BUCKETS_SMALL,
            current_year: None,
        }
    }
}

impl StoreConfig {
    /// Small bucket counts for tests and tiny corpora
    pub fn compact() -> Self {
        Self {
            paper_buckets: 64,
            citation_buckets: 64,
            influence_buckets: 64,
            marking_buckets: 64,
            venue_buckets: 16,
            field_buckets: 16,
            author_buckets: 16,
            current_year: None,
        }
    }

    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = Some(year);
        self
    }

    /// Read a JSON config file. Missing keys keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// The configured year, or today's year
    pub fn resolve_current_year(&self) -> i32 {
        self.current_year
            .unwrap_or_else(|| chrono::Utc::now().year())
    }
}
