use std::ops::Range;

use rand::Rng;
use unordered_pair::UnorderedPair;

use crate::location::{column_major, Dimension, Location};
use crate::shape::{SquareStep, Step};

/// Weight on a candidate edge. Lower weights are preferred when building the spanning tree.
pub type Weight = u32;

/// Weights drawn when no range is configured.
pub const DEFAULT_WEIGHTS: Range<Weight> = 0..1000;

/// A possible connection between two neighboring cells.
///
/// The order of `endpoints` only matters when the edge is accepted into a tree: the set holding `endpoints.1` is merged into the set holding `endpoints.0`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct CandidateEdge {
    /// The two cells this edge would join.
    pub endpoints: UnorderedPair<Location>,
    /// Sort key for the spanning tree builder.
    pub weight: Weight,
}

impl CandidateEdge {
    /// Construct an edge from `from` to `to`.
    pub fn new(from: Location, to: Location, weight: Weight) -> Self {
        Self {
            endpoints: UnorderedPair(from, to),
            weight,
        }
    }
}

/// Every adjacency of a complete `dims`-sized grid, each counted once, with weights drawn from `weights`.
///
/// Cells are visited column-major and each one offers its forward edges, so the result has `2·W·H − W − H` members.
pub(crate) fn random_candidates<R: Rng>(dims: (Dimension, Dimension), weights: &Range<Weight>, rng: &mut R) -> Vec<CandidateEdge> {
    let (w, h) = (dims.0.get(), dims.1.get());
    let mut candidates = Vec::with_capacity(2 * w * h - w - h);

    for location in column_major(dims) {
        for direction in SquareStep::FORWARD_VARIANTS {
            let neighbor = direction.attempt_from(location);
            if neighbor.within(dims) {
                candidates.push(CandidateEdge::new(location, neighbor, rng.random_range(weights.clone())));
            }
        }
    }

    candidates
}
