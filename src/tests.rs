#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use itertools::Itertools;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::board::{Grid, GridError};
    use crate::builder::{BuilderInvalidReason, GridBuilder};
    use crate::edge::{random_candidates, CandidateEdge, DEFAULT_WEIGHTS};
    use crate::location::{column_major, Location};
    use crate::shape::{BoardShape, SquareStep};
    use crate::tree::spanning_tree;
    use crate::union_find::Representatives;

    // cells of the reference 3x3 board, numbered down each column
    fn p(n: usize) -> Location {
        Location((n - 1) / 3, (n - 1) % 3)
    }

    /// Every adjacency of a 3x3 board listed once from each side, with fixed weights.
    fn reference_candidates() -> Vec<CandidateEdge> {
        [
            (5, 2, 886), (5, 4, 700), (5, 8, 805), (5, 6, 23),
            (7, 8, 469), (1, 4, 774), (1, 2, 82), (2, 1, 375),
            (2, 5, 992), (2, 3, 433), (3, 2, 446), (3, 6, 156),
            (4, 1, 146), (4, 7, 316), (4, 5, 513), (6, 3, 171),
            (6, 5, 974), (6, 9, 935), (7, 4, 476), (8, 5, 754),
            (8, 7, 492), (8, 9, 210), (9, 6, 644), (9, 8, 471),
        ].into_iter()
            .map(|(from, to, weight)| CandidateEdge::new(p(from), p(to), weight))
            .collect_vec()
    }

    /// A 3x3 tree shaped like a sideways H: three columns joined across the middle row.
    fn cross_candidates() -> Vec<CandidateEdge> {
        [
            ((0, 0), (0, 1)), ((0, 1), (0, 2)),
            ((1, 0), (1, 1)), ((1, 1), (1, 2)),
            ((2, 0), (2, 1)), ((2, 1), (2, 2)),
            ((0, 1), (1, 1)), ((1, 1), (2, 1)),
        ].into_iter()
            .enumerate()
            .map(|(weight, ((c1, r1), (c2, r2)))| CandidateEdge::new(Location(c1, r1), Location(c2, r2), weight as u32))
            .collect_vec()
    }

    fn cross_board(source: Location) -> Grid {
        GridBuilder::with_dims((3, 3))
            .candidates(cross_candidates())
            .source(source)
            .scramble(false)
            .build()
            .unwrap()
    }

    fn reference_board() -> Grid {
        GridBuilder::with_dims((3, 3))
            .candidates(reference_candidates())
            .scramble(false)
            .build()
            .unwrap()
    }

    fn lit_counts(grid: &mut Grid, budgets: std::ops::Range<isize>) -> Vec<usize> {
        budgets.map(|hops| {
            grid.propagate(hops);
            grid.lit_count()
        }).collect_vec()
    }

    #[test]
    fn reference_tree_takes_lightest_edges() {
        let tree = spanning_tree(column_major((NonZero::new(3).unwrap(), NonZero::new(3).unwrap())), &reference_candidates()).unwrap();

        assert_eq!(tree.iter().map(|edge| edge.weight).collect_vec(), vec![23, 82, 146, 156, 210, 316, 433, 469]);
    }

    #[test]
    fn reference_board_unscrambled() {
        let grid = reference_board();

        assert_eq!(format!("{}", grid), "┌─┐
│╷│
└┘╵
");
        assert_eq!(grid.tree().len(), 8);
        // the tree is a single path of eight hops
        assert_eq!(grid.distance(p(5), p(9)), Some(8));
        assert_eq!(grid.radius(), 5);
        assert_eq!(grid.distance_to_source(p(9)), Some(4));
        assert!(grid.is_won());
    }

    #[test]
    fn cross_center_sees_all_four_neighbors() {
        let grid = cross_board(Location(1, 1));

        assert_eq!(format!("{}", grid), "╷╷╷
├┼┤
╵╵╵
");
        assert_eq!(grid.adjacent(Location(1, 1)), vec![Location(0, 1), Location(1, 0), Location(2, 1), Location(1, 2)]);
        assert_eq!(grid.radius(), 3);
    }

    #[test]
    fn cross_distances_and_ends() {
        let mut grid = cross_board(Location(1, 1));

        assert_eq!(grid.distance(Location(0, 0), Location(1, 0)), Some(3));
        assert_eq!(grid.distance(Location(2, 0), Location(0, 2)), Some(4));
        assert_eq!(grid.furthest_from(Location(0, 0)), Location(2, 2));
        assert_eq!(grid.furthest_from(Location(2, 2)), Location(0, 2));

        // (1, 2) turns to face right, but (2, 2) only opens up
        grid.rotate(Location(1, 2)).unwrap();
        assert!(grid.adjacent(Location(1, 2)).is_empty());
        assert_eq!(grid.furthest_from(Location(1, 2)), Location(1, 2));
        assert_eq!(grid.distance(Location(1, 2), Location(1, 1)), None);
    }

    #[test]
    fn neighbors_scanned_clockwise_from_left() {
        assert_eq!(SquareStep::neighbors_of(Location(1, 1)), vec![
            (SquareStep::Left, Location(0, 1)),
            (SquareStep::Up, Location(1, 0)),
            (SquareStep::Right, Location(2, 1)),
            (SquareStep::Down, Location(1, 2)),
        ]);

        // the corner's off-grid neighbors never make it into the live adjacency
        let grid = cross_board(Location(1, 1));
        assert_eq!(grid.adjacent(Location(0, 0)), vec![Location(0, 1)]);
        assert_eq!(grid.live.edge_count(), 8);
    }

    #[test]
    fn lit_area_grows_with_budget() {
        let mut from_center = cross_board(Location(1, 1));
        assert_eq!(lit_counts(&mut from_center, 0..4), vec![5, 9, 9, 9]);

        let mut from_corner = cross_board(Location(0, 0));
        assert_eq!(from_corner.radius(), 3);
        assert_eq!(lit_counts(&mut from_corner, 0..5), vec![2, 4, 7, 9, 9]);
    }

    #[test]
    fn propagation_resets_between_passes() {
        let mut grid = cross_board(Location(0, 0));
        grid.propagate(3);
        assert!(grid.is_won());

        grid.propagate(0);
        assert!(grid.is_lit(Location(0, 1)));
        assert!(!grid.is_lit(Location(2, 2)));
        assert!(!grid.is_won());
    }

    #[test]
    fn leaf_turned_away_goes_dark() {
        let mut grid = reference_board();
        let leaf = p(9);

        grid.rotate(leaf).unwrap();
        grid.rotate(leaf).unwrap();

        assert_eq!(grid.distance_to_source(leaf), None);
        assert_eq!(grid.distance(leaf, leaf), Some(0));
        assert!(grid.adjacent(leaf).is_empty());
        assert!(!grid.is_lit(leaf));
        assert!(!grid.is_won());
        assert_eq!(grid.lit_count(), 8);
        assert_eq!(grid.radius(), 5);

        grid.rotate(leaf).unwrap();
        grid.rotate(leaf).unwrap();

        assert_eq!(grid.distance_to_source(leaf), Some(4));
        assert!(grid.is_won());
    }

    #[test]
    fn rotation_turns_clockwise() {
        let mut grid = reference_board();
        // top left corner opens right and down
        grid.rotate(Location(0, 0)).unwrap();
        assert_eq!(grid.exits(Location(0, 0)), Some(vec![SquareStep::Left, SquareStep::Down]));
        grid.rotate(Location(0, 0)).unwrap();
        assert_eq!(grid.exits(Location(0, 0)), Some(vec![SquareStep::Left, SquareStep::Up]));
    }

    #[test]
    fn rotate_outside_grid() {
        let mut grid = reference_board();
        assert_eq!(grid.rotate(Location(3, 0)), Err(GridError::OutOfBounds(Location(3, 0))));
        assert_eq!(grid.exits(Location(0, 3)), None);
        assert!(!grid.is_lit(Location(7, 7)));
        assert_eq!(grid.distance_to_source(Location(7, 7)), None);
    }

    #[test]
    fn source_follows_wiring() {
        let mut grid = cross_board(Location(1, 1));

        assert!(grid.move_source(SquareStep::Left));
        assert_eq!(grid.source(), Location(0, 1));
        // off the board
        assert!(!grid.move_source(SquareStep::Left));
        assert!(grid.move_source(SquareStep::Up));
        // (0, 0) only opens down
        assert!(!grid.move_source(SquareStep::Right));
        assert_eq!(grid.source(), Location(0, 0));

        assert_eq!(grid.pieces.iter().filter(|piece| piece.source).count(), 1);
        assert!(grid.pieces[(0, 0)].source);
        assert_eq!(grid.distance_to_source(Location(2, 2)), Some(4));
        assert!(grid.is_won());
    }

    #[test]
    fn source_cannot_cross_a_broken_connection() {
        let mut grid = cross_board(Location(1, 1));
        // (0, 1) opens up, right and down; one turn leaves it opening left, right and down
        grid.rotate(Location(0, 1)).unwrap();
        assert!(grid.move_source(SquareStep::Left));

        // left, up and down: no longer facing the center
        grid.rotate(Location(0, 1)).unwrap();
        assert!(!grid.move_source(SquareStep::Right));
        assert_eq!(grid.source(), Location(0, 1));
        assert_eq!(grid.lit_count(), 3);
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert_eq!(GridBuilder::with_dims((0, 3)).build().err(), Some(vec![BuilderInvalidReason::ZeroDimension]));
        assert_eq!(Grid::generate(3, 0, 7).err(), Some(vec![BuilderInvalidReason::ZeroDimension]));
    }

    #[cfg(feature = "wasm")]
    #[test]
    fn js_dimensions_must_be_positive() {
        use crate::wasm::dims_from_js;

        assert_eq!(dims_from_js(4, 3), Ok((4, 3)));
        assert_eq!(dims_from_js(-1, 3), Err(vec![BuilderInvalidReason::ZeroDimension]));
        assert_eq!(dims_from_js(3, 0), Err(vec![BuilderInvalidReason::ZeroDimension]));
        assert_eq!(dims_from_js(i32::MIN, i32::MIN), Err(vec![BuilderInvalidReason::ZeroDimension]));
    }

    #[test]
    fn invalid_features_recorded() {
        let mut builder = GridBuilder::with_dims((2, 2));
        assert!(builder.is_valid().is_none());

        builder
            .source(Location(2, 0))
            .candidates(vec![CandidateEdge::new(Location(0, 0), Location(1, 1), 5)])
            .weights(10..10);

        assert_eq!(builder.is_valid(), Some(&vec![
            BuilderInvalidReason::FeatureOutOfBounds(Location(2, 0)),
            BuilderInvalidReason::NotAdjacent(Location(0, 0), Location(1, 1)),
            BuilderInvalidReason::EmptyWeightRange,
        ]));
        assert_eq!(builder.build().err().map(|reasons| reasons.len()), Some(3));
    }

    #[test]
    fn candidates_must_span() {
        let result = GridBuilder::with_dims((2, 2))
            .candidates(vec![CandidateEdge::new(Location(0, 0), Location(0, 1), 1)])
            .build();

        assert_eq!(result.err(), Some(vec![BuilderInvalidReason::NotSpanning]));
    }

    #[test]
    fn single_cell() {
        let grid = Grid::generate(1, 1, 3).unwrap();

        assert!(grid.tree().is_empty());
        assert_eq!(grid.radius(), 1);
        assert_eq!(grid.distance_to_source(Location(0, 0)), Some(0));
        assert!(grid.is_won());
        assert_eq!(format!("{}", grid), " \n");
    }

    #[test]
    fn same_seed_same_grid() {
        let a = Grid::generate(6, 4, 99).unwrap();
        let b = Grid::generate(6, 4, 99).unwrap();

        assert_eq!(a.to_string(), b.to_string());
        assert_eq!(a.tree(), b.tree());
        assert_eq!(a.radius(), b.radius());
    }

    #[test]
    fn fresh_large_grid_is_not_won() {
        let grid = Grid::generate(10, 10, 2024).unwrap();

        assert_eq!(grid.tree().len(), 99);
        assert!(grid.is_lit(grid.source()));
        assert!(!grid.is_won());
    }

    #[test]
    fn union_points_first_set_at_second() {
        let cells = vec![Location(0, 0), Location(0, 1), Location(1, 0)];
        let mut reps = Representatives::new(cells);
        assert!(reps.multiple_self_reps());

        reps.union(Location(0, 0), Location(0, 1));
        assert_eq!(reps.find(Location(0, 0)), Location(0, 1));
        assert!(reps.multiple_self_reps());

        reps.union(Location(1, 0), Location(0, 0));
        assert_eq!(reps.find(Location(1, 0)), Location(0, 1));
        assert!(!reps.multiple_self_reps());
    }

    #[test]
    fn find_without_entry_is_self() {
        let reps = Representatives::new(vec![Location(0, 0)]);
        assert_eq!(reps.find(Location(4, 4)), Location(4, 4));
    }

    proptest! {
        #[test]
        fn candidate_count_matches_grid(w in 1usize..10, h in 1usize..10, seed in any::<u64>()) {
            let dims = (NonZero::new(w).unwrap(), NonZero::new(h).unwrap());
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let candidates = random_candidates(dims, &DEFAULT_WEIGHTS, &mut rng);

            prop_assert_eq!(candidates.len(), 2 * w * h - w - h);
            prop_assert!(candidates.iter().all(|edge| DEFAULT_WEIGHTS.contains(&edge.weight)));
        }

        #[test]
        fn tree_spans_grid(w in 1usize..9, h in 1usize..9, seed in any::<u64>()) {
            let grid = GridBuilder::with_dims((w, h)).seed(seed).scramble(false).build().unwrap();

            prop_assert_eq!(grid.tree().len(), w * h - 1);
            prop_assert_eq!(grid.live.edge_count(), w * h - 1);
            // n - 1 edges reaching every cell means no cycles
            for location in column_major(grid.dims) {
                prop_assert!(grid.distance(Location(0, 0), location).is_some());
            }
        }

        #[test]
        fn find_is_idempotent(unions in prop::collection::vec((0usize..16, 0usize..16), 0..24)) {
            let cells = (0..16).map(|i| Location(i / 4, i % 4)).collect_vec();
            let mut reps = Representatives::new(cells.clone());
            for (a, b) in unions {
                if reps.find(cells[a]) != reps.find(cells[b]) {
                    reps.union(cells[a], cells[b]);
                }
            }

            for cell in cells {
                prop_assert_eq!(reps.find(reps.find(cell)), reps.find(cell));
            }
        }

        #[test]
        fn distance_is_symmetric(
            w in 1usize..7, h in 1usize..7, seed in any::<u64>(),
            a in 0usize..36, b in 0usize..36,
        ) {
            let grid = Grid::generate(w, h, seed).unwrap();
            let a = Location(a % w, (a / w) % h);
            let b = Location(b % w, (b / w) % h);

            prop_assert_eq!(grid.distance(a, a), Some(0));
            prop_assert_eq!(grid.distance(a, b), grid.distance(b, a));
        }

        #[test]
        fn four_turns_are_identity(w in 1usize..6, h in 1usize..6, seed in any::<u64>(), at in 0usize..25) {
            let mut grid = Grid::generate(w, h, seed).unwrap();
            let location = Location(at % w, (at / w) % h);
            let before = grid.exits(location);
            let drawn = grid.to_string();
            let lit = grid.lit_count();

            for _ in 0..4 {
                grid.rotate(location).unwrap();
            }

            prop_assert_eq!(grid.exits(location), before);
            prop_assert_eq!(grid.to_string(), drawn);
            prop_assert_eq!(grid.lit_count(), lit);
        }

        #[test]
        fn radius_survives_rotation(
            w in 1usize..6, h in 1usize..6, seed in any::<u64>(),
            turns in prop::collection::vec(0usize..25, 0..20),
        ) {
            let mut grid = Grid::generate(w, h, seed).unwrap();
            let radius = grid.radius();
            prop_assert!(radius >= 1);

            for at in turns {
                grid.rotate(Location(at % w, (at / w) % h)).unwrap();
                prop_assert_eq!(grid.radius(), radius);
                prop_assert!(grid.is_lit(grid.source()));
                prop_assert_eq!(grid.is_won(), grid.lit_count() == w * h);
            }
        }
    }
}
