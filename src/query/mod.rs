//! Query engine
//!
//! Graph and aggregate queries over a [`PaperStore`]:
//! - `oldest_influence`: forward BFS over references
//! - `influenced_count`: bounded BFS over the inverse influence edges
//! - `venue_impact`, `top_cited_by_field`, `authors_with_field`: index scans with
//!   deterministic ordering
//! - `count_between`, `citation_histogram`: aggregates over years
//!
//! The engine borrows the store immutably. Traversal state lives in a
//! [`MarkingIndex`](crate::index::MarkingIndex) allocated per call and dropped
//! on return, so repeated queries always see a clean store.

mod aggregate;
mod ranking;
mod traversal;

use crate::graph::PaperStore;

/// Read-only query interface over a store
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    store: &'a PaperStore,
}

impl<'a> QueryEngine<'a> {
    pub fn new(store: &'a PaperStore) -> Self {
        Self { store }
    }
}

impl PaperStore {
    /// Query engine borrowing this store
    pub fn query(&self) -> QueryEngine<'_> {
        QueryEngine::new(self)
    }
}
