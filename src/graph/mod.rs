//! Citation graph data model
//!
//! Papers with metadata and outgoing reference ids, owned by a [`PaperStore`]
//! that keeps the secondary indices in step with every insert.

pub mod paper;
pub mod store;
pub mod types;

// Re-export main types
pub use paper::{Author, Paper};
pub use store::{GraphError, GraphResult, PaperStore, StoreStatistics};
pub use types::{AuthorId, PaperId};
