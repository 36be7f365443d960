//! Query-scoped traversal marks
//!
//! A `MarkingIndex` is allocated fresh for one traversal and dropped when the
//! query returns, so visited state never outlives the query that made it.
//! Presence of a row means "visited".

use super::hash_index::HashIndex;
use crate::graph::PaperId;

/// Transient per-paper traversal state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marking {
    /// Hop distance from the traversal root
    pub distance: i32,
    /// Citation count, filled on first use
    pub citations: Option<u32>,
}

/// Paper id -> traversal state for a single query
#[derive(Debug)]
pub struct MarkingIndex {
    marks: HashIndex<PaperId, Marking>,
}

impl MarkingIndex {
    pub fn new(bucket_count: usize) -> Self {
        Self {
            marks: HashIndex::new(bucket_count),
        }
    }

    /// Mark `id` at `distance`. Returns false if it was already marked,
    /// in which case the existing mark is left alone.
    pub fn mark(&mut self, id: PaperId, distance: i32) -> bool {
        if self.marks.contains_key(&id) {
            return false;
        }
        self.marks.insert(
            id,
            Marking {
                distance,
                citations: None,
            },
        );
        true
    }

    pub fn is_marked(&self, id: PaperId) -> bool {
        self.marks.contains_key(&id)
    }

    pub fn distance(&self, id: PaperId) -> Option<i32> {
        self.marks.find(&id).map(|m| m.distance)
    }

    /// Citation count for a marked paper, computed once by `lookup` and
    /// cached on the mark. Unmarked ids are looked up without caching.
    pub fn citations_with(&mut self, id: PaperId, lookup: impl FnOnce(PaperId) -> u32) -> u32 {
        match self.marks.find_mut(&id) {
            Some(mark) => *mark.citations.get_or_insert_with(|| lookup(id)),
            None => lookup(id),
        }
    }

    /// Number of marked papers
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}
