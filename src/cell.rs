use std::collections::HashSet;

use crate::shape::{SquareStep, Step};

// indexed by the sum of SquareStep::mask over a cell's exits
const GLYPHS: [char; 16] = [
    ' ', '╴', '╵', '┘', '╶', '─', '└', '┴', '╷', '┐', '│', '┤', '┌', '┬', '├', '┼',
];

/// One rotatable tile of pipe.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Piece {
    /// Directions this piece has a pipe opening toward, regardless of whether the neighbor agrees.
    pub(crate) exits: HashSet<SquareStep>,
    pub(crate) source: bool,
    pub(crate) lit: bool,
}

impl Piece {
    /// Turn the piece a quarter clockwise: left goes to top, top to right, right to bottom and bottom to left.
    pub(crate) fn rotate(&mut self) {
        self.exits = self.exits.iter().map(Step::clockwise).collect();
    }

    #[inline]
    pub(crate) fn opens(&self, direction: SquareStep) -> bool {
        self.exits.contains(&direction)
    }

    pub(crate) fn glyph(&self) -> char {
        GLYPHS[self.exits.iter().map(SquareStep::mask).sum::<usize>()]
    }
}
