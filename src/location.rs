use std::num::NonZero;

use itertools::Itertools;

pub(crate) type Coord = usize;
pub(crate) type Dimension = NonZero<Coord>;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
/// A location `(col, row)` on a grid. The top left corner is `Location(0, 0)`.
pub struct Location(pub Coord, pub Coord);

impl Location {
    // cells are stored column-major, so the array index is (col, row) as-is
    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.0, self.1)
    }

    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }

    pub(crate) fn within(&self, dims: (Dimension, Dimension)) -> bool {
        self.0 < dims.0.get() && self.1 < dims.1.get()
    }
}

/// Every location of a `dims`-sized grid in column-major order.
pub(crate) fn column_major(dims: (Dimension, Dimension)) -> Vec<Location> {
    (0..dims.0.get())
        .cartesian_product(0..dims.1.get())
        .map(|(col, row)| Location(col, row))
        .collect_vec()
}
