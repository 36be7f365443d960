//! Catalog indices: venue, field and author lookups
//!
//! These are denormalized join rows. A paper listing the same field twice
//! gets two field rows; readers deduplicate where it matters.

use super::hash_index::HashIndex;
use crate::graph::{AuthorId, PaperId};

/// Text key (venue or field name) -> paper ids
#[derive(Debug, Clone)]
pub struct TextIndex {
    rows: HashIndex<String, PaperId>,
}

impl TextIndex {
    pub fn new(bucket_count: usize) -> Self {
        Self {
            rows: HashIndex::new(bucket_count),
        }
    }

    pub fn add(&mut self, key: &str, paper: PaperId) {
        self.rows.insert(key.to_string(), paper);
    }

    /// Paper ids filed under `key`, in insertion order. An empty key matches nothing.
    pub fn papers<'a>(&'a self, key: &'a str) -> impl Iterator<Item = PaperId> + 'a {
        let key = if key.is_empty() { None } else { Some(key) };
        key.into_iter()
            .flat_map(move |k| self.rows.find_all(k).copied())
    }

    /// Number of rows under `key`
    pub fn count(&self, key: &str) -> usize {
        self.papers(key).count()
    }

    pub fn distinct_keys(&self) -> usize {
        self.rows.distinct_keys()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One (author, paper, year) row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthoredPaper {
    pub paper: PaperId,
    pub year: i32,
}

/// Author id -> papers they appear on, with the publication year
#[derive(Debug, Clone)]
pub struct AuthorIndex {
    rows: HashIndex<AuthorId, AuthoredPaper>,
}

impl AuthorIndex {
    pub fn new(bucket_count: usize) -> Self {
        Self {
            rows: HashIndex::new(bucket_count),
        }
    }

    pub fn add(&mut self, author: AuthorId, paper: PaperId, year: i32) {
        self.rows.insert(author, AuthoredPaper { paper, year });
    }

    pub fn papers<'a>(&'a self, author: &'a AuthorId) -> impl Iterator<Item = AuthoredPaper> + 'a {
        self.rows.find_all(author).copied()
    }

    pub fn distinct_authors(&self) -> usize {
        self.rows.distinct_keys()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
