//! In-memory paper storage
//!
//! Papers live in an arena (`Vec<Paper>`) addressed through a primary hash
//! index keyed by paper id. The citation graph is held purely as ids; every
//! traversal resolves ids back through [`PaperStore::find_paper`].

use super::paper::Paper;
use super::types::PaperId;
use crate::config::StoreConfig;
use crate::index::{HashIndex, IndexManager};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during store operations
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("Paper {0} already exists")]
    PaperAlreadyExists(PaperId),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Summary counts over a store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStatistics {
    pub papers: usize,
    /// Reference edges, dangling ones included
    pub references: usize,
    /// Reference edges whose target is not stored
    pub dangling_references: usize,
    pub distinct_venues: usize,
    pub distinct_fields: usize,
    pub distinct_authors: usize,
}

/// Owning store of papers plus every secondary index over them
///
/// - papers: arena of records in insertion order
/// - primary: PaperId -> arena slot
/// - indices: citation counts, venue/field/author catalogs, influence edges
#[derive(Debug, Clone)]
pub struct PaperStore {
    papers: Vec<Paper>,
    primary: HashIndex<PaperId, usize>,
    indices: IndexManager,
    config: StoreConfig,
}

impl PaperStore {
    /// Create a new empty store with default sizing
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        info!(
            paper_buckets = config.paper_buckets,
            citation_buckets = config.citation_buckets,
            "Creating paper store"
        );
        PaperStore {
            papers: Vec::new(),
            primary: HashIndex::new(config.paper_buckets),
            indices: IndexManager::new(&config),
            config,
        }
    }

    /// Insert a paper and file it in every secondary index.
    ///
    /// A paper whose id is already stored is rejected and nothing changes.
    pub fn insert_paper(&mut self, paper: Paper) -> GraphResult<()> {
        if self.primary.contains_key(&paper.id) {
            warn!("Rejecting duplicate paper {}", paper.id);
            return Err(GraphError::PaperAlreadyExists(paper.id));
        }

        self.indices.index_paper(&paper);

        let slot = self.papers.len();
        self.primary.insert(paper.id, slot);
        debug!(
            "Inserted paper {} ({} refs, {} authors, {} fields)",
            paper.id,
            paper.references.len(),
            paper.authors.len(),
            paper.fields.len()
        );
        self.papers.push(paper);
        Ok(())
    }

    /// Exact-id lookup
    pub fn find_paper(&self, id: PaperId) -> Option<&Paper> {
        self.primary
            .find(&id)
            .and_then(|&slot| self.papers.get(slot))
    }

    pub fn contains(&self, id: PaperId) -> bool {
        self.primary.contains_key(&id)
    }

    /// All papers in insertion order
    pub fn papers(&self) -> impl Iterator<Item = &Paper> {
        self.papers.iter()
    }

    pub fn paper_count(&self) -> usize {
        self.papers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }

    /// Times `id` appears as a reference target
    pub fn citation_count(&self, id: PaperId) -> u32 {
        self.indices.citations().count(id)
    }

    /// Papers that reference `id`, one entry per reference edge
    pub fn imitators(&self, id: PaperId) -> Vec<PaperId> {
        self.indices.influence().imitators(&id).collect()
    }

    pub fn indices(&self) -> &IndexManager {
        &self.indices
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn statistics(&self) -> StoreStatistics {
        let references = self.indices.influence().len();
        let dangling_references = self
            .indices
            .citations()
            .iter()
            .filter(|&(id, _)| !self.contains(id))
            .map(|(_, count)| count as usize)
            .sum();

        StoreStatistics {
            papers: self.papers.len(),
            references,
            dangling_references,
            distinct_venues: self.indices.venues().distinct_keys(),
            distinct_fields: self.indices.fields().distinct_keys(),
            distinct_authors: self.indices.authors().distinct_authors(),
        }
    }

    /// Drop every paper and index row, keeping the configuration
    pub fn clear(&mut self) {
        self.papers.clear();
        self.primary.clear();
        self.indices = IndexManager::new(&self.config);
    }
}

impl Default for PaperStore {
    fn default() -> Self {
        Self::new()
    }
}
