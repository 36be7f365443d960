//! Core identifier types for the citation graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a paper, assigned by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PaperId(pub u64);

impl PaperId {
    pub fn new(id: u64) -> Self {
        PaperId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PaperId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PaperId({})", self.0)
    }
}

impl From<u64> for PaperId {
    fn from(id: u64) -> Self {
        PaperId(id)
    }
}

/// Identifier of an author as declared on a paper.
///
/// The same id may appear on many papers with independent name/org copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct AuthorId(pub u64);

impl AuthorId {
    pub fn new(id: u64) -> Self {
        AuthorId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthorId({})", self.0)
    }
}

impl From<u64> for AuthorId {
    fn from(id: u64) -> Self {
        AuthorId(id)
    }
}
