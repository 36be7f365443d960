//! Year-based aggregates

use super::QueryEngine;
use crate::graph::{AuthorId, PaperId};
use rustc_hash::FxHashSet;
use tracing::{debug, warn};

/// Oldest paper age the histogram will bin
const MAX_HISTOGRAM_AGE: usize = 10_000;

impl<'a> QueryEngine<'a> {
    /// Number of papers published in `early..=late`
    pub fn count_between(&self, early: i32, late: i32) -> usize {
        self.store
            .papers()
            .filter(|paper| paper.published_between(early, late))
            .count()
    }

    /// Citations received by an author's papers, binned by age.
    ///
    /// Bin `i` holds the citations of papers published `i` years before the
    /// configured current year. The result has `current_year - oldest + 1`
    /// bins, or none if the author has no papers. Papers dated after the
    /// current year, or more than 10 000 years before it, are ignored.
    pub fn citation_histogram(&self, author: AuthorId) -> Vec<u64> {
        let current_year = self.store.config().resolve_current_year();
        let citations = self.store.indices().citations();

        let mut histogram: Vec<u64> = Vec::new();
        let mut seen: FxHashSet<PaperId> = FxHashSet::default();

        for row in self.store.indices().authors().papers(&author) {
            if !seen.insert(row.paper) {
                continue;
            }
            if row.year > current_year {
                warn!(
                    "Skipping {} dated {} after current year {}",
                    row.paper, row.year, current_year
                );
                continue;
            }

            let age = i64::from(current_year) - i64::from(row.year);
            let bin = match usize::try_from(age) {
                Ok(bin) if bin <= MAX_HISTOGRAM_AGE => bin,
                _ => {
                    warn!("Skipping {} dated {}, too old to bin", row.paper, row.year);
                    continue;
                }
            };
            if bin >= histogram.len() {
                histogram.resize(bin + 1, 0);
            }
            histogram[bin] += citations.count(row.paper) as u64;
        }

        debug!(
            "citation_histogram({}) -> {} bins from {}",
            author,
            histogram.len(),
            current_year
        );
        histogram
    }
}

#[cfg(test)]
mod tests {
    use crate::config::StoreConfig;
    use crate::graph::{Author, AuthorId, Paper, PaperStore};

    fn store(current_year: i32) -> PaperStore {
        PaperStore::with_config(StoreConfig::compact().with_current_year(current_year))
    }

    #[test]
    fn test_count_between() {
        let mut s = store(2024);
        for (id, year) in [(1u64, 1989), (2, 1990), (3, 1995), (4, 2000), (5, 2001)] {
            s.insert_paper(Paper::new(id, "t", "v", year)).unwrap();
        }
        let q = s.query();
        assert_eq!(q.count_between(1990, 2000), 3);
        assert_eq!(q.count_between(0, 3000), 5);
        assert_eq!(q.count_between(2001, 2001), 1);
        assert_eq!(q.count_between(2000, 1990), 0);
    }

    #[test]
    fn test_citation_histogram() {
        let ada = Author::new("Ada", 7u64, "Analytical");
        let mut s = store(2020);
        s.insert_paper(Paper::new(1u64, "a", "v", 2020).with_authors(vec![ada.clone()]))
            .unwrap();
        s.insert_paper(Paper::new(2u64, "b", "v", 2017).with_authors(vec![ada.clone()]))
            .unwrap();
        s.insert_paper(Paper::new(3u64, "c", "v", 2017).with_authors(vec![ada.clone()]))
            .unwrap();
        // Citing papers by someone else
        s.insert_paper(Paper::new(10u64, "x", "v", 2021).with_references([1u64, 2, 3]))
            .unwrap();
        s.insert_paper(Paper::new(11u64, "y", "v", 2021).with_references([2u64]))
            .unwrap();

        let histogram = s.query().citation_histogram(AuthorId::new(7));
        assert_eq!(histogram, vec![1, 0, 0, 3]);
    }

    #[test]
    fn test_histogram_unknown_author_and_future_papers() {
        let bob = Author::new("Bob", 1u64, "Org");
        let mut s = store(2000);
        s.insert_paper(Paper::new(1u64, "future", "v", 2005).with_authors(vec![bob.clone()]))
            .unwrap();
        s.insert_paper(Paper::new(2u64, "old", "v", 1998).with_authors(vec![bob.clone(), bob]))
            .unwrap();
        s.insert_paper(Paper::new(3u64, "citing", "v", 2000).with_references([2u64]))
            .unwrap();

        let q = s.query();
        assert!(q.citation_histogram(AuthorId::new(99)).is_empty());
        // Listed twice on paper 2, counted once
        assert_eq!(q.citation_histogram(AuthorId::new(1)), vec![0, 0, 1]);
    }

    #[test]
    fn test_histogram_skips_extreme_years() {
        let eve = Author::new("Eve", 3u64, "Org");
        let mut s = store(2024);
        for (id, year) in [(1u64, i32::MIN), (2, -1_000_000)] {
            s.insert_paper(Paper::new(id, "ancient", "v", year).with_authors(vec![eve.clone()]))
                .unwrap();
        }
        s.insert_paper(Paper::new(3u64, "recent", "v", 2022).with_authors(vec![eve]))
            .unwrap();
        s.insert_paper(Paper::new(4u64, "citing", "v", 2023).with_references([1u64, 3]))
            .unwrap();

        assert_eq!(s.query().citation_histogram(AuthorId::new(3)), vec![0, 0, 1]);
    }
}
