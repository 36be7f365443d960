//! Citation count index
//!
//! One row per cited paper id, incremented once per incoming reference edge.
//! Ids that were never cited have zero citations.

use super::hash_index::HashIndex;
use crate::graph::PaperId;

/// Paper id -> number of times it appears as a reference target
#[derive(Debug, Clone)]
pub struct CitationIndex {
    counts: HashIndex<PaperId, u32>,
    total: u64,
}

impl CitationIndex {
    pub fn new(bucket_count: usize) -> Self {
        Self {
            counts: HashIndex::new(bucket_count),
            total: 0,
        }
    }

    /// Record one citation of `cited`
    pub fn record(&mut self, cited: PaperId) {
        *self.counts.get_or_insert_with(cited, || 0) += 1;
        self.total += 1;
    }

    /// Citation count for `id`, zero if never cited
    pub fn count(&self, id: PaperId) -> u32 {
        self.counts.find(&id).copied().unwrap_or(0)
    }

    /// Sum of every recorded citation
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct cited ids
    pub fn cited_papers(&self) -> usize {
        self.counts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PaperId, u32)> + '_ {
        self.counts.iter().map(|(id, count)| (*id, *count))
    }
}
