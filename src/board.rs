use std::fmt::{Display, Formatter};

use log::debug;
use ndarray::Array2;
use petgraph::graphmap::UnGraphMap;
use strum::VariantArray;

use crate::cell::Piece;
use crate::edge::CandidateEdge;
use crate::location::{column_major, Dimension, Location};
use crate::shape::{BoardShape, SquareStep, Step};

/// Commands that cannot be carried out on a [`Grid`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum GridError {
    /// The command addressed a cell outside the grid.
    #[error("{0:?} is outside the grid")]
    OutOfBounds(Location),
}

/// A board of rotatable pipe pieces wired along a spanning tree, with a power source somewhere on it.
///
/// [`Grid`]s should be built using a [`GridBuilder`](crate::builder::GridBuilder), or [`Grid::generate`] for the defaults.
///
/// After every rotation the live adjacency is rebuilt and power is sent again, so queries never see stale wiring.
pub struct Grid {
    pub(crate) pieces: Array2<Piece>,
    // an edge exists only where both pieces open toward each other
    pub(crate) live: UnGraphMap<Location, ()>,
    pub(crate) dims: (Dimension, Dimension),
    pub(crate) source: Location,
    pub(crate) radius: usize,
    pub(crate) tree: Vec<CandidateEdge>,
}

impl Grid {
    /// A grid of unwired pieces with the source at `source`.
    pub(crate) fn unwired(dims: (Dimension, Dimension), source: Location) -> Self {
        let mut pieces = Array2::from_shape_simple_fn((dims.0.get(), dims.1.get()), Piece::default);
        pieces[source.as_index()].source = true;

        Self {
            pieces,
            live: UnGraphMap::with_capacity(dims.0.get() * dims.1.get(), dims.0.get() * dims.1.get()),
            dims,
            source,
            radius: 1,
            tree: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn piece(&self, location: Location) -> Option<&Piece> {
        self.pieces.get(location.as_index())
    }

    /// Open both ends of every edge in `tree`.
    pub(crate) fn apply_tree(&mut self, tree: Vec<CandidateEdge>) {
        for edge in &tree {
            let (from, to) = (edge.endpoints.0, edge.endpoints.1);
            // tree edges are validated as adjacent before they get here
            if let Some(direction) = SquareStep::direction_to(from, to) {
                self.pieces[from.as_index()].exits.insert(direction);
                self.pieces[to.as_index()].exits.insert(direction.invert());
            }
        }

        self.tree = tree;
    }

    // whether `neighbor`, one step in `direction` from `location`, is on the grid and both pieces open toward each other
    fn wired(&self, location: Location, direction: SquareStep, neighbor: Location) -> bool {
        match (self.piece(location), self.piece(neighbor)) {
            (Some(here), Some(there)) => here.opens(direction) && there.opens(direction.invert()),
            _ => false,
        }
    }

    /// The neighbor in `direction` from `location`, if it exists and both pieces open toward each other.
    pub(crate) fn wired_neighbor(&self, location: Location, direction: SquareStep) -> Option<Location> {
        let neighbor = direction.attempt_from(location);
        self.wired(location, direction, neighbor).then_some(neighbor)
    }

    /// Rebuild the live adjacency from the current connection flags.
    ///
    /// Each location's neighbors end up ordered left, top, right, bottom.
    pub fn refresh_adjacency(&mut self) {
        self.live.clear();
        let locations = column_major(self.dims);
        for location in &locations {
            self.live.add_node(*location);
        }

        for location in locations {
            for (direction, neighbor) in SquareStep::neighbors_of(location) {
                if self.wired(location, direction, neighbor) {
                    // re-adding an edge seen from the other side keeps its original position in both lists
                    self.live.add_edge(location, neighbor, ());
                }
            }
        }
    }

    /// Locations currently wired to `location`, ordered left, top, right, bottom.
    pub fn adjacent(&self, location: Location) -> Vec<Location> {
        match self.live.contains_node(location) {
            true => self.live.neighbors(location).collect(),
            false => Vec::new(),
        }
    }

    /// Turn the piece at `location` a quarter clockwise, then rewire and send power again.
    pub fn rotate(&mut self, location: Location) -> Result<(), GridError> {
        let piece = self.pieces.get_mut(location.as_index()).ok_or(GridError::OutOfBounds(location))?;
        piece.rotate();

        self.refresh_adjacency();
        self.send_power();
        Ok(())
    }

    /// Move the source one step in `direction`.
    ///
    /// The move only happens when the source piece and its neighbor open toward each other; otherwise nothing changes.
    /// Returns whether the source moved.
    pub fn move_source(&mut self, direction: SquareStep) -> bool {
        let Some(destination) = self.wired_neighbor(self.source, direction) else {
            debug!("source at {:?} cannot move {:?}", self.source, direction);
            return false;
        };

        self.pieces[self.source.as_index()].source = false;
        self.pieces[destination.as_index()].source = true;
        self.source = destination;
        self.send_power();
        true
    }

    /// Whether the piece at `location` currently receives power. Locations outside the grid are never lit.
    pub fn is_lit(&self, location: Location) -> bool {
        self.piece(location).is_some_and(|piece| piece.lit)
    }

    /// Hops from `location` to the source over live adjacency, or [`None`] if they are not connected.
    pub fn distance_to_source(&self, location: Location) -> Option<usize> {
        self.distance(location, self.source)
    }

    /// Whether every piece is lit.
    pub fn is_won(&self) -> bool {
        self.pieces.iter().all(|piece| piece.lit)
    }

    /// Number of lit pieces.
    pub fn lit_count(&self) -> usize {
        self.pieces.iter().filter(|piece| piece.lit).count()
    }

    /// Where the source currently is.
    pub fn source(&self) -> Location {
        self.source
    }

    /// Hop budget of the source, fixed when the grid was built.
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Width and height.
    pub fn dims(&self) -> (usize, usize) {
        (self.dims.0.get(), self.dims.1.get())
    }

    /// The spanning tree the grid was wired along, in the order its edges were accepted.
    pub fn tree(&self) -> &[CandidateEdge] {
        &self.tree
    }

    /// The directions the piece at `location` currently opens toward.
    pub fn exits(&self, location: Location) -> Option<Vec<SquareStep>> {
        self.piece(location).map(|piece| {
            SquareStep::VARIANTS.iter().copied().filter(|direction| piece.opens(*direction)).collect()
        })
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut out = String::with_capacity(self.dims.1.get() * (self.dims.0.get() + 1));

        for row in 0..self.dims.1.get() {
            for col in 0..self.dims.0.get() {
                out.push(self.pieces[(col, row)].glyph());
            }
            out.push('\n');
        }

        write!(f, "{}", out)
    }
}
