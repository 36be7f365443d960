//! Breadth-first traversals over the citation graph

use super::QueryEngine;
use crate::graph::{Paper, PaperId};
use crate::index::MarkingIndex;
use std::cmp::Ordering;
use std::collections::VecDeque;
use tracing::{debug, trace};

impl<'a> QueryEngine<'a> {
    /// Title of the oldest paper reachable from `root` through references.
    ///
    /// Every paper reachable by following references (not counting `root`
    /// itself) is a candidate. Ties on year go to the more cited paper, then
    /// to the smaller id. Dangling references are skipped. Returns `None` if
    /// `root` is unknown or reaches nothing.
    pub fn oldest_influence(&self, root: PaperId) -> Option<&'a str> {
        let root_paper = self.store.find_paper(root)?;

        let mut marks = self.store.indices().new_markings();
        let mut queue: VecDeque<&'a Paper> = VecDeque::new();
        let mut best: Option<&'a Paper> = None;

        marks.mark(root, 0);
        queue.push_back(root_paper);

        while let Some(paper) = queue.pop_front() {
            let distance = marks.distance(paper.id).unwrap_or(0);

            for &reference in &paper.references {
                let Some(cited) = self.store.find_paper(reference) else {
                    continue;
                };
                if !marks.mark(cited.id, distance + 1) {
                    continue;
                }
                trace!("Reached {} at distance {}", cited.id, distance + 1);

                best = match best {
                    Some(holder)
                        if self.influence_order(&mut marks, cited, holder) != Ordering::Less =>
                    {
                        Some(holder)
                    }
                    _ => Some(cited),
                };
                queue.push_back(cited);
            }
        }

        debug!(
            "oldest_influence({}) visited {} papers, winner {:?}",
            root,
            marks.len(),
            best.map(|p| p.id)
        );
        best.map(|p| p.title.as_str())
    }

    /// Orders candidates for `oldest_influence`; `Less` means `a` wins.
    fn influence_order(&self, marks: &mut MarkingIndex, a: &Paper, b: &Paper) -> Ordering {
        let citations = self.store.indices().citations();
        a.year
            .cmp(&b.year)
            .then_with(|| {
                let a_cites = marks.citations_with(a.id, |id| citations.count(id));
                let b_cites = marks.citations_with(b.id, |id| citations.count(id));
                b_cites.cmp(&a_cites)
            })
            .then_with(|| a.id.cmp(&b.id))
    }

    /// Number of papers influenced by `root` within `max_distance` hops.
    ///
    /// Follows influence edges (who cites whom) outward from `root`. Each
    /// paper is counted once, at its minimum hop distance, and only if that
    /// distance is at most `max_distance`. `root` is never counted.
    pub fn influenced_count(&self, root: PaperId, max_distance: i32) -> usize {
        if max_distance < 0 || !self.store.contains(root) {
            return 0;
        }

        let influence = self.store.indices().influence();
        let mut marks = self.store.indices().new_markings();
        let mut queue = VecDeque::new();
        let mut count = 0;

        marks.mark(root, 0);
        queue.push_back(root);

        while let Some(current) = queue.pop_front() {
            let distance = marks.distance(current).unwrap_or(0);
            // The queue is ordered by distance, so nothing further can be in range
            if distance >= max_distance {
                break;
            }

            for imitator in influence.imitators(&current) {
                if marks.mark(imitator, distance + 1) {
                    trace!("{} influenced at distance {}", imitator, distance + 1);
                    count += 1;
                    queue.push_back(imitator);
                }
            }
        }

        debug!(
            "influenced_count({}, {}) = {}",
            root, max_distance, count
        );
        count
    }
}
