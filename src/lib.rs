//! Papergraph
//!
//! An in-memory analytical store for a corpus of academic publications. Each
//! paper carries metadata (title, venue, year, authors, fields) and a list of
//! outgoing references, forming a directed citation graph that may contain
//! cycles and dangling references.
//!
//! # Architecture
//!
//! - [`graph`]: paper records and the [`PaperStore`] arena
//! - [`index`]: fixed-bucket hash indices (citation counts, venue/field/author
//!   catalogs, inverse influence edges, query-scoped traversal marks)
//! - [`query`]: the [`QueryEngine`] and its six analytical queries
//! - [`loader`]: JSON corpus loading
//!
//! ## Example Usage
//!
//! ```rust
//! use papergraph::{Paper, PaperId, PaperStore};
//!
//! let mut store = PaperStore::new();
//! store.insert_paper(Paper::new(1u64, "A Relational Model", "CACM", 1970)).unwrap();
//! store
//!     .insert_paper(Paper::new(2u64, "System R", "TODS", 1976).with_references([1u64]))
//!     .unwrap();
//!
//! let query = store.query();
//! assert_eq!(query.oldest_influence(PaperId::new(2)), Some("A Relational Model"));
//! assert_eq!(query.influenced_count(PaperId::new(1), 1), 1);
//! assert_eq!(query.count_between(1970, 1980), 2);
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod graph;
pub mod index;
pub mod loader;
pub mod query;

// Re-export main types for convenience
pub use config::{ConfigError, StoreConfig};
pub use graph::{
    Author, AuthorId, GraphError, GraphResult, Paper, PaperId, PaperStore, StoreStatistics,
};
pub use loader::{load_json_array, load_json_lines, load_path, LoadError, LoadResult, PaperRecord};
pub use query::QueryEngine;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
