use std::collections::HashMap;

use crate::location::Location;

/// Disjoint sets of cells, kept as a map from each cell to a cell in the same set.
///
/// Following the map from any cell ends at a cell mapped to itself, the representative of the set.
/// A cell with no entry is its own representative.
pub(crate) struct Representatives {
    // scanned in this order by `multiple_self_reps`
    members: Vec<Location>,
    map: HashMap<Location, Location>,
}

impl Representatives {
    /// Every member starts out in a set of its own.
    pub(crate) fn new(members: Vec<Location>) -> Self {
        let map = members.iter().map(|&location| (location, location)).collect();
        Self { members, map }
    }

    pub(crate) fn find(&self, location: Location) -> Location {
        let mut current = location;
        loop {
            match self.map.get(&current) {
                Some(&next) if next != current => current = next,
                _ => return current,
            }
        }
    }

    /// Point the representative of `a`'s set at the representative of `b`'s set.
    pub(crate) fn union(&mut self, a: Location, b: Location) {
        let (rep_a, rep_b) = (self.find(a), self.find(b));
        self.map.insert(rep_a, rep_b);
    }

    /// Whether at least two members are still their own representative.
    pub(crate) fn multiple_self_reps(&self) -> bool {
        self.members.iter()
            .filter(|&&location| self.self_represented(location))
            .nth(1)
            .is_some()
    }

    #[inline]
    fn self_represented(&self, location: Location) -> bool {
        self.map.get(&location).map_or(true, |&rep| rep == location)
    }
}
