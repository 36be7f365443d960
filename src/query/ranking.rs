//! Venue, field and institution queries

use super::QueryEngine;
use crate::graph::{Paper, PaperId};
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use tracing::debug;

impl<'a> QueryEngine<'a> {
    /// Average citation count of the papers published at `venue`.
    ///
    /// Returns 0.0 when no paper matches.
    pub fn venue_impact(&self, venue: &str) -> f64 {
        let citations = self.store.indices().citations();
        let (papers, total) = self
            .store
            .indices()
            .venues()
            .papers(venue)
            .fold((0u64, 0u64), |(n, sum), id| (n + 1, sum + citations.count(id) as u64));

        if papers == 0 {
            return 0.0;
        }
        debug!("venue_impact({:?}): {} citations over {} papers", venue, total, papers);
        total as f64 / papers as f64
    }

    /// Titles of the `k` most cited papers in `field`, best first.
    ///
    /// Order: more citations, then more recent year, then smaller id. `k` is
    /// clamped to the number of papers in the field.
    pub fn top_cited_by_field(&self, field: &str, k: usize) -> Vec<&'a str> {
        let mut ranked: Vec<(&'a Paper, u32)> = self
            .field_papers(field)
            .into_iter()
            .map(|paper| (paper, self.store.citation_count(paper.id)))
            .collect();

        ranked.sort_by(|a, b| citation_rank(a, b));
        ranked.truncate(k);

        debug!("top_cited_by_field({:?}, {}) -> {} papers", field, k, ranked.len());
        ranked.into_iter().map(|(paper, _)| paper.title.as_str()).collect()
    }

    /// Number of distinct author names affiliated with `institution` across
    /// the papers of `field`.
    pub fn authors_with_field(&self, institution: &str, field: &str) -> usize {
        if institution.is_empty() {
            return 0;
        }

        let mut names: FxHashSet<&'a str> = FxHashSet::default();
        for paper in self.field_papers(field) {
            for author in &paper.authors {
                if author.org == institution {
                    names.insert(author.name.as_str());
                }
            }
        }

        debug!(
            "authors_with_field({:?}, {:?}) = {}",
            institution,
            field,
            names.len()
        );
        names.len()
    }

    /// Stored papers filed under `field`, each once, in index order
    fn field_papers(&self, field: &str) -> Vec<&'a Paper> {
        let store = self.store;
        let mut seen: FxHashSet<PaperId> = FxHashSet::default();
        store
            .indices()
            .fields()
            .papers(field)
            .filter(|id| seen.insert(*id))
            .filter_map(|id| store.find_paper(id))
            .collect()
    }
}

/// Higher citations first, then higher year, then lower id
fn citation_rank(a: &(&Paper, u32), b: &(&Paper, u32)) -> Ordering {
    let (a_paper, a_cites) = a;
    let (b_paper, b_cites) = b;
    b_cites
        .cmp(a_cites)
        .then_with(|| b_paper.year.cmp(&a_paper.year))
        .then_with(|| a_paper.id.cmp(&b_paper.id))
}
