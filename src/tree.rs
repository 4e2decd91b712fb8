use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::trace;

use crate::edge::{CandidateEdge, Weight};
use crate::location::Location;
use crate::union_find::Representatives;

/// Candidates ordered by ascending weight, equal weights in the order they were given.
///
/// Popping the heap empty is a heapsort; the tree builder consumes it one edge at a time instead.
fn sorted(candidates: &[CandidateEdge]) -> BinaryHeap<Reverse<(Weight, usize)>> {
    candidates.iter()
        .enumerate()
        .map(|(index, edge)| Reverse((edge.weight, index)))
        .collect()
}

/// Kruskal's algorithm: pick the lightest candidates that join two different sets until a single set remains.
///
/// Returns the accepted edges in acceptance order, or [`None`] if the candidates run out while `cells` is still split.
pub(crate) fn spanning_tree(cells: Vec<Location>, candidates: &[CandidateEdge]) -> Option<Vec<CandidateEdge>> {
    let mut reps = Representatives::new(cells);
    let mut worklist = sorted(candidates);
    let mut tree = Vec::new();

    while reps.multiple_self_reps() {
        let Reverse((_, index)) = worklist.pop()?;
        let edge = candidates[index];
        let (from, to) = (edge.endpoints.0, edge.endpoints.1);

        if reps.find(from) != reps.find(to) {
            trace!("accepting {:?} -- {:?} at weight {}", from, to, edge.weight);
            reps.union(to, from);
            tree.push(edge);
        }
    }

    Some(tree)
}
