use std::collections::{HashSet, VecDeque};

use crate::board::Grid;
use crate::location::Location;

impl Grid {
    /// Breadth-first search over live adjacency for the number of hops from `from` to `to`.
    ///
    /// Returns [`None`] when `to` cannot be reached, which is routine once rotations have split the grid.
    pub fn distance(&self, from: Location, to: Location) -> Option<usize> {
        let mut queue = VecDeque::from([(from, 0)]);
        let mut seen = HashSet::new();

        while let Some((next, depth)) = queue.pop_front() {
            if next == to {
                return Some(depth);
            }
            if seen.insert(next) {
                queue.extend(self.adjacent(next).into_iter()
                    .filter(|neighbor| !seen.contains(neighbor))
                    .map(|neighbor| (neighbor, depth + 1)));
            }
        }

        None
    }

    /// The last piece a breadth-first search from `start` reaches, provided it is a leaf.
    ///
    /// The search stops at a dequeued piece when the queue has just run dry and its only live neighbor was already visited.
    /// In a tree that piece is an end of a longest path through the component; if the search never stops that way, `start` is returned.
    pub(crate) fn furthest_from(&self, start: Location) -> Location {
        let mut queue = VecDeque::from([start]);
        let mut seen = HashSet::new();

        while let Some(next) = queue.pop_front() {
            let adjacent = self.adjacent(next);
            if queue.is_empty() && adjacent.len() == 1 && seen.contains(&adjacent[0]) {
                return next;
            }
            if seen.insert(next) {
                queue.extend(adjacent.into_iter().filter(|neighbor| !seen.contains(neighbor)));
            }
        }

        start
    }

    /// Half the diameter of the source's component, rounded down, plus one.
    pub(crate) fn measure_radius(&self) -> usize {
        let one_end = self.furthest_from(self.source);
        let other_end = self.furthest_from(one_end);
        let diameter = self.distance(other_end, one_end).unwrap_or(0);

        diameter / 2 + 1
    }
}
