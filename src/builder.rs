use std::num::NonZero;
use std::ops::Range;

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::board::Grid;
use crate::edge::{random_candidates, CandidateEdge, Weight, DEFAULT_WEIGHTS};
use crate::location::{column_major, Dimension, Location};
use crate::shape::{BoardShape, SquareStep};
use crate::tree::spanning_tree;

/// Reasons a builder may become invalid while building.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum BuilderInvalidReason {
    /// The grid was given a width or height of zero, or a negative one through the JavaScript bindings.
    #[error("grid width and height must be positive")]
    ZeroDimension,
    /// A feature like the source or a candidate edge was placed outside the bounds specified by `dims` on a builder.
    #[error("{0:?} is outside the grid")]
    FeatureOutOfBounds(Location),
    /// A candidate edge joins two cells which are not neighbors.
    #[error("{0:?} and {1:?} are not neighbors")]
    NotAdjacent(Location, Location),
    /// The weight range has nothing in it to draw from.
    #[error("weight range is empty")]
    EmptyWeightRange,
    /// The supplied candidate edges leave part of the grid unreachable, so no spanning tree exists.
    #[error("candidate edges do not span the grid")]
    NotSpanning,
}

/// A builder for [`Grid`]s.
///
/// Builders mutate themselves while being configured but can be [`Clone`]d to save their state at some point.
/// An invalid setting is recorded rather than reported immediately; [`build`](Self::build) reports every recorded reason at once.
#[derive(Clone, Debug)]
pub struct GridBuilder {
    // width, height; None when either was zero
    dims: Option<(Dimension, Dimension)>,
    seed: u64,
    weights: Range<Weight>,
    source: Location,
    scramble: bool,
    candidates: Option<Vec<CandidateEdge>>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl Default for GridBuilder {
    fn default() -> Self {
        Self::with_dims((5, 5))
    }
}

impl GridBuilder {
    /// Construct a new [`Self`] with the specified dimensions, specified in `(width, height)` order.
    ///
    /// A zero width or height puts the builder in a [`ZeroDimension`](BuilderInvalidReason::ZeroDimension) invalid state.
    pub fn with_dims(dims: (usize, usize)) -> Self {
        let dims = NonZero::new(dims.0).zip(NonZero::new(dims.1));

        Self {
            dims,
            seed: 0,
            weights: DEFAULT_WEIGHTS,
            source: Location(0, 0),
            scramble: true,
            candidates: None,
            invalid_reasons: match dims {
                Some(_) => Vec::new(),
                None => vec![BuilderInvalidReason::ZeroDimension],
            },
        }
    }

    fn in_bounds(&self, location: Location) -> bool {
        self.dims.map_or(true, |dims| location.within(dims))
    }

    /// Seed for candidate weights and the initial scramble. The same seed always builds the same grid.
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.seed = seed;
        self
    }

    /// Draw candidate weights from `weights` instead of [`DEFAULT_WEIGHTS`].
    ///
    /// May cause the builder to enter an [`EmptyWeightRange`](BuilderInvalidReason::EmptyWeightRange) invalid state.
    pub fn weights(&mut self, weights: Range<Weight>) -> &mut Self {
        if weights.is_empty() {
            self.invalid_reasons.push(BuilderInvalidReason::EmptyWeightRange);
            return self;
        }

        self.weights = weights;
        self
    }

    /// Start the source at `location` instead of the top left corner.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) invalid state.
    pub fn source(&mut self, location: Location) -> &mut Self {
        if !self.in_bounds(location) {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds(location));
            return self;
        }

        self.source = location;
        self
    }

    /// Whether to turn every piece a random number of quarter turns once the radius is known. On by default.
    pub fn scramble(&mut self, scramble: bool) -> &mut Self {
        self.scramble = scramble;
        self
    }

    /// Build the spanning tree from `candidates` rather than from randomly weighted grid edges.
    ///
    /// The same pair of cells may appear more than once.
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) or [`NotAdjacent`](BuilderInvalidReason::NotAdjacent) invalid state.
    pub fn candidates(&mut self, candidates: Vec<CandidateEdge>) -> &mut Self {
        for edge in &candidates {
            let (from, to) = (edge.endpoints.0, edge.endpoints.1);
            if let Some(outside) = [from, to].into_iter().find(|location| !self.in_bounds(*location)) {
                self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds(outside));
                return self;
            }
            if SquareStep::direction_to(from, to).is_none() {
                self.invalid_reasons.push(BuilderInvalidReason::NotAdjacent(from, to));
                return self;
            }
        }

        self.candidates = Some(candidates);
        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Generate the grid: weigh candidates, pick the spanning tree, wire it, measure the radius, scramble, and send power.
    ///
    /// If the builder is invalid for any reason, every recorded [`BuilderInvalidReason`] is returned instead.
    pub fn build(&self) -> Result<Grid, Vec<BuilderInvalidReason>> {
        let dims = match self.dims {
            Some(dims) if self.invalid_reasons.is_empty() => dims,
            _ => return Err(self.invalid_reasons.clone()),
        };

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let candidates = match &self.candidates {
            Some(candidates) => candidates.clone(),
            None => random_candidates(dims, &self.weights, &mut rng),
        };

        let tree = spanning_tree(column_major(dims), &candidates)
            .ok_or_else(|| vec![BuilderInvalidReason::NotSpanning])?;

        let mut grid = Grid::unwired(dims, self.source);
        grid.apply_tree(tree);
        grid.refresh_adjacency();
        grid.radius = grid.measure_radius();

        if self.scramble {
            for location in column_major(dims) {
                for _ in 0..rng.random_range(0..4) {
                    grid.pieces[location.as_index()].rotate();
                }
            }
            grid.refresh_adjacency();
        }

        grid.send_power();
        debug!(
            "built {}x{} grid from seed {} with {} of {} candidates, radius {}",
            dims.0, dims.1, self.seed, grid.tree.len(), candidates.len(), grid.radius,
        );

        Ok(grid)
    }
}

impl Grid {
    /// Build a scrambled, powered `width` by `height` grid from `seed` with every other setting left at its default.
    pub fn generate(width: usize, height: usize, seed: u64) -> Result<Self, Vec<BuilderInvalidReason>> {
        GridBuilder::with_dims((width, height)).seed(seed).build()
    }
}
