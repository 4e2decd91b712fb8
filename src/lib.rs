#![warn(missing_docs)]

//! # `powerline`
//!
//! The board logic of a rotate-the-pipes puzzle in the style of LightEmAll: every cell holds a pipe piece, the pieces are wired along a random spanning tree of the grid, and then each one is turned at random.
//! The player turns pieces back and steers the power source; a piece is lit when it is wired to the source within the source's hop budget, and the game is won once every piece is lit.
//!
//! Begin with a [`GridBuilder`], or [`Grid::generate`] for the defaults, then drive the resulting [`Grid`] with [`Grid::rotate`] and [`Grid::move_source`] and query it with [`Grid::is_lit`], [`Grid::distance_to_source`] and [`Grid::is_won`].
//! Drawing the board is up to the caller; [`Grid`] implements [`Display`](std::fmt::Display) as a plain text sketch.
//!
//! # Internals
//! A board is built in a few passes:
//!
//! 1. Every pair of neighboring cells becomes a candidate edge with a weight drawn from a seeded generator.
//! 2. Kruskal's algorithm picks a spanning tree: candidates come off a binary heap lightest first, and a union-find map over cells rejects any candidate whose endpoints are already joined.
//! 3. Each tree edge opens the two pieces it joins toward each other. The live adjacency, a graph holding only the connections both pieces agree on, is derived from those openings and rebuilt after every turn of a piece.
//! 4. Two breadth-first searches find the ends of the tree's longest path; half its length plus one becomes the source's hop budget, fixed for the life of the grid.
//! 5. Pieces are scrambled, and power is sent: a depth-first walk from the source lights wired pieces until the budget runs out.

pub use board::{Grid, GridError};
pub use builder::{BuilderInvalidReason, GridBuilder};
pub use edge::{CandidateEdge, Weight, DEFAULT_WEIGHTS};
pub use location::Location;
pub use power::Hops;
pub use shape::SquareStep;

pub(crate) mod board;
mod tests;
pub(crate) mod location;
pub mod shape;
pub(crate) mod cell;
pub(crate) mod edge;
pub(crate) mod union_find;
pub(crate) mod tree;
pub(crate) mod search;
pub(crate) mod power;
pub mod builder;
#[cfg(feature = "wasm")]
pub mod wasm;
