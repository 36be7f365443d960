//! Secondary indices
//!
//! Fixed-bucket hash indices over the paper store: citation counts, venue,
//! field and author catalogs, the inverse influence graph, and query-scoped
//! traversal marks.

pub mod catalog;
pub mod citations;
pub mod hash_index;
pub mod influence;
pub mod manager;
pub mod marking;

pub use catalog::{AuthorIndex, AuthoredPaper, TextIndex};
pub use citations::CitationIndex;
pub use hash_index::{BucketKey, HashIndex};
pub use influence::InfluenceIndex;
pub use manager::IndexManager;
pub use marking::{Marking, MarkingIndex};
