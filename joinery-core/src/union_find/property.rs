//! Property-based tests for the union-find variants.
//!
//! Every variant is checked against a Floyd-Warshall transitive closure of the
//! same pair stream, which also makes the variants agree with each other.

use proptest::prelude::*;

use crate::test_utils::{
    EdgeListFixture, distance_matrix, edge_list_strategy, suite_proptest_config,
};

use super::{DisjointSet, UnionFind, UnionFindVariant};

const MAX_ELEMENTS: usize = 24;
const MAX_PAIRS: usize = 48;

fn run_closure_property(
    variant: UnionFindVariant,
    fixture: &EdgeListFixture,
) -> Result<(), TestCaseError> {
    let closure = distance_matrix(fixture);
    let mut set = DisjointSet::from_pairs(variant, fixture.vertex_count, fixture.edges.clone());

    for (p, row) in closure.iter().enumerate() {
        for (q, distance) in row.iter().enumerate() {
            prop_assert_eq!(
                set.connected(p, q),
                distance.is_some(),
                "variant {} disagrees with the closure on ({}, {})",
                variant,
                p,
                q
            );
        }
    }
    Ok(())
}

fn run_count_property(
    variant: UnionFindVariant,
    fixture: &EdgeListFixture,
) -> Result<(), TestCaseError> {
    let mut set = DisjointSet::new(variant, fixture.vertex_count);
    let mut merged = 0;
    for &(p, q) in &fixture.edges {
        if set.union(p, q) {
            merged += 1;
        }
    }
    prop_assert_eq!(set.count(), fixture.vertex_count - merged);
    prop_assert_eq!(set.components().len(), set.count());
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(256))]

    #[test]
    fn connected_matches_transitive_closure(
        variant in any::<UnionFindVariant>(),
        fixture in edge_list_strategy(MAX_ELEMENTS, MAX_PAIRS),
    ) {
        run_closure_property(variant, &fixture)?;
    }

    #[test]
    fn count_tracks_effective_unions(
        variant in any::<UnionFindVariant>(),
        fixture in edge_list_strategy(MAX_ELEMENTS, MAX_PAIRS),
    ) {
        run_count_property(variant, &fixture)?;
    }

    #[test]
    fn variants_produce_identical_partitions(
        fixture in edge_list_strategy(MAX_ELEMENTS, MAX_PAIRS),
    ) {
        let partitions: Vec<Vec<Vec<usize>>> = UnionFindVariant::ALL
            .iter()
            .map(|&variant| {
                DisjointSet::from_pairs(variant, fixture.vertex_count, fixture.edges.clone())
                    .components()
            })
            .collect();
        prop_assert_eq!(&partitions[0], &partitions[1]);
        prop_assert_eq!(&partitions[1], &partitions[2]);
    }
}
