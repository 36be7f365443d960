//! Influence index: the citation graph read backwards
//!
//! Each reference `imitator -> influencer` is stored under the influencer, so
//! "who cites X" is a single bucket scan. Influencer ids need not be stored
//! papers.

use super::hash_index::HashIndex;
use crate::graph::PaperId;

/// Influencer paper id -> imitator paper ids
#[derive(Debug, Clone)]
pub struct InfluenceIndex {
    edges: HashIndex<PaperId, PaperId>,
}

impl InfluenceIndex {
    pub fn new(bucket_count: usize) -> Self {
        Self {
            edges: HashIndex::new(bucket_count),
        }
    }

    /// Record that `imitator` references `influencer`
    pub fn add(&mut self, influencer: PaperId, imitator: PaperId) {
        self.edges.insert(influencer, imitator);
    }

    /// Papers referencing `influencer`, one entry per reference edge
    pub fn imitators<'a>(&'a self, influencer: &'a PaperId) -> impl Iterator<Item = PaperId> + 'a {
        self.edges.find_all(influencer).copied()
    }

    /// Number of influence edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
