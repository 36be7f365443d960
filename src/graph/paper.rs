//! Paper and author records
//!
//! A paper owns its metadata and its outgoing reference list. References are
//! plain ids and may name papers that were never inserted.

use super::types::{AuthorId, PaperId};
use serde::{Deserialize, Serialize};

/// An author as listed on one paper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub id: AuthorId,
    /// Organization or institution
    pub org: String,
}

impl Author {
    pub fn new(name: impl Into<String>, id: impl Into<AuthorId>, org: impl Into<String>) -> Self {
        Author {
            name: name.into(),
            id: id.into(),
            org: org.into(),
        }
    }
}

/// A publication in the citation graph
///
/// Papers are built with [`Paper::new`] and the `with_*` methods, then handed
/// to [`PaperStore::insert_paper`](super::PaperStore::insert_paper), which takes
/// ownership of every field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    /// Unique identifier for this paper
    pub id: PaperId,

    pub title: String,

    pub venue: String,

    /// Publication year
    pub year: i32,

    /// Authors in declaration order
    pub authors: Vec<Author>,

    /// Field names in declaration order
    pub fields: Vec<String>,

    /// Outgoing citation edges (papers this one cites)
    pub references: Vec<PaperId>,
}

impl Paper {
    /// Create a paper with no authors, fields or references
    pub fn new(
        id: impl Into<PaperId>,
        title: impl Into<String>,
        venue: impl Into<String>,
        year: i32,
    ) -> Self {
        Paper {
            id: id.into(),
            title: title.into(),
            venue: venue.into(),
            year,
            authors: Vec::new(),
            fields: Vec::new(),
            references: Vec::new(),
        }
    }

    pub fn with_authors(mut self, authors: Vec<Author>) -> Self {
        self.authors = authors;
        self
    }

    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_references<I, R>(mut self, references: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<PaperId>,
    {
        self.references = references.into_iter().map(Into::into).collect();
        self
    }

    /// Check if the paper declares a field
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }

    /// Check if the paper cites `target`
    pub fn cites(&self, target: PaperId) -> bool {
        self.references.contains(&target)
    }

    /// Inclusive year range check
    pub fn published_between(&self, early: i32, late: i32) -> bool {
        early <= self.year && self.year <= late
    }

    /// Declared references, dangling and repeated ones included
    pub fn reference_count(&self) -> usize {
        self.references.len()
    }

    pub fn author_count(&self) -> usize {
        self.authors.len()
    }
}
