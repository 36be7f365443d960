//! Manager for the secondary indices
//!
//! Owns every index derived from the paper records and updates them together
//! from a single entry point, so a paper is either visible through all of
//! them or none.

use super::catalog::{AuthorIndex, TextIndex};
use super::citations::CitationIndex;
use super::influence::InfluenceIndex;
use super::marking::MarkingIndex;
use crate::config::StoreConfig;
use crate::graph::Paper;

/// All secondary indices of a paper store
#[derive(Debug, Clone)]
pub struct IndexManager {
    citations: CitationIndex,
    venues: TextIndex,
    fields: TextIndex,
    authors: AuthorIndex,
    influence: InfluenceIndex,
    marking_buckets: usize,
}

impl IndexManager {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            citations: CitationIndex::new(config.citation_buckets),
            venues: TextIndex::new(config.venue_buckets),
            fields: TextIndex::new(config.field_buckets),
            authors: AuthorIndex::new(config.author_buckets),
            influence: InfluenceIndex::new(config.influence_buckets),
            marking_buckets: config.marking_buckets,
        }
    }

    /// File `paper` in every index. Called exactly once per stored paper.
    pub(crate) fn index_paper(&mut self, paper: &Paper) {
        for field in &paper.fields {
            self.fields.add(field, paper.id);
        }

        for author in &paper.authors {
            self.authors.add(author.id, paper.id, paper.year);
        }

        for &reference in &paper.references {
            self.citations.record(reference);
            self.influence.add(reference, paper.id);
        }

        self.venues.add(&paper.venue, paper.id);
    }

    /// Fresh traversal marks for one query
    pub fn new_markings(&self) -> MarkingIndex {
        MarkingIndex::new(self.marking_buckets)
    }

    pub fn citations(&self) -> &CitationIndex {
        &self.citations
    }

    pub fn venues(&self) -> &TextIndex {
        &self.venues
    }

    pub fn fields(&self) -> &TextIndex {
        &self.fields
    }

    pub fn authors(&self) -> &AuthorIndex {
        &self.authors
    }

    pub fn influence(&self) -> &InfluenceIndex {
        &self.influence
    }
}

impl Default for IndexManager {
    fn default() -> Self {
        Self::new(&StoreConfig::default())
    }
}
