use strum::VariantArray;

use crate::board::Grid;
use crate::location::Location;
use crate::shape::SquareStep;

/// Remaining hop budget during propagation. Goes negative on the pieces at the edge of the lit area.
pub type Hops = isize;

// one level of the depth-first walk; `next` indexes SquareStep::VARIANTS
struct Frame {
    at: Location,
    hops: Hops,
    next: usize,
}

impl Grid {
    /// Recompute which pieces are lit, walking from the source with `hops` of budget.
    ///
    /// Every call starts a fresh pass: all pieces go dark first, whatever `hops` is. The source is lit, and from any lit piece with a non-negative budget, every wired and still dark neighbor is lit with one hop less.
    /// Neighbors are tried left, top, right, bottom, depth first.
    pub fn propagate(&mut self, hops: Hops) {
        for piece in self.pieces.iter_mut() {
            piece.lit = false;
        }

        self.pieces[self.source.as_index()].lit = true;
        let mut stack = vec![Frame { at: self.source, hops, next: 0 }];

        while let Some(frame) = stack.last_mut() {
            let Some(direction) = SquareStep::VARIANTS.get(frame.next) else {
                stack.pop();
                continue;
            };
            frame.next += 1;

            let (at, hops) = (frame.at, frame.hops);
            if hops < 0 {
                continue;
            }

            if let Some(neighbor) = self.wired_neighbor(at, *direction) {
                let piece = &mut self.pieces[neighbor.as_index()];
                if !piece.lit {
                    piece.lit = true;
                    stack.push(Frame { at: neighbor, hops: hops - 1, next: 0 });
                }
            }
        }
    }

    /// [`propagate`](Self::propagate) with the grid's full radius.
    pub fn send_power(&mut self) {
        self.propagate(self.radius as Hops);
    }
}
