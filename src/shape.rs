use std::hash::Hash;

use itertools::Itertools;
use strum::VariantArray;

use crate::location::Location;

/// Functionality that a direction type must provide for cells to be wired along it.
///
/// [`SquareStep`] is the built-in implementation.
pub trait Step: Sized + Copy + VariantArray + PartialEq + Eq + Hash + Ord + PartialOrd {
    /// Attempt the step from `location` in the direction specified by `self` and return the resultant [`Location`].
    ///
    /// The result may lie outside the grid; stepping off the low edge wraps to a huge coordinate, which no grid contains.
    fn attempt_from(&self, location: Location) -> Location;
    /// The static array of all "forward" directions.
    ///
    /// Forward directions are those which, upon stepping from one location to another, cause the destination location to be indexed higher than the origin location.
    /// For [`SquareStep`] and the column-major cell array, [`Right`](SquareStep::Right) and [`Down`](SquareStep::Down) are forward directions.
    const FORWARD_VARIANTS: &'static [Self];
    /// Invert the direction specified by `self`.
    fn invert(&self) -> Self;
    /// The direction `self` points to after its cell is turned a quarter clockwise.
    fn clockwise(&self) -> Self;
}

/// The four directions of a rectangular grid, in the order cells are scanned for neighbors.
///
/// Declaration order is clockwise, so [`Step::clockwise`] is "the next variant".
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum SquareStep {
    /// Toward column - 1.
    Left,
    /// Toward row - 1.
    Up,
    /// Toward column + 1.
    Right,
    /// Toward row + 1.
    Down,
}

impl Step for SquareStep {
    fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Left => location.offset_by((-1, 0)),
            Self::Up => location.offset_by((0, -1)),
            Self::Right => location.offset_by((1, 0)),
            Self::Down => location.offset_by((0, 1)),
        }
    }

    const FORWARD_VARIANTS: &'static [Self] = &[Self::Right, Self::Down];

    fn invert(&self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
        }
    }

    fn clockwise(&self) -> Self {
        match self {
            Self::Left => Self::Up,
            Self::Up => Self::Right,
            Self::Right => Self::Down,
            Self::Down => Self::Left,
        }
    }
}

impl SquareStep {
    // bit used to pick a glyph for a set of exits
    pub(crate) fn mask(&self) -> usize {
        match self {
            Self::Left => 1,
            Self::Up => 2,
            Self::Right => 4,
            Self::Down => 8,
        }
    }
}

/// Functionality on top of [`Step`] with identical implementation across all directions.
pub trait BoardShape: Step {
    /// Get all neighbors of a [`Location`] in "theory", by attempting every step direction in `Self::VARIANTS`.
    ///
    /// Pairs come back in declaration order, so for [`SquareStep`] they run left, up, right, down; some may lie off the grid.
    fn neighbors_of(location: Location) -> Vec<(Self, Location)>;
    /// Determine the direction from `a` to `b` by calling [`attempt_from`](Step::attempt_from) until one works.
    ///
    /// Returns [`None`] unless `a` and `b` are geometric neighbors.
    fn direction_to(a: Location, b: Location) -> Option<Self>;
}

impl<Sh> BoardShape for Sh
where
    Sh: Step,
{
    fn neighbors_of(location: Location) -> Vec<(Self, Location)> {
        Self::VARIANTS.iter()
            .map(|dir| (*dir, dir.attempt_from(location)))
            .collect_vec()
    }

    fn direction_to(a: Location, b: Location) -> Option<Self> {
        Self::VARIANTS.iter().find(|dir| dir.attempt_from(a) == b).copied()
    }
}
