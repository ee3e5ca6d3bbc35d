//! Property-based tests for the whole-graph analyses.
//!
//! Component labelling is cross-checked against a [`DisjointSet`] built from
//! the same edges, cycle detection against the forest edge bound
//! `E <= V - C`, and bipartiteness against the parity of shortest distances
//! from each component's lowest vertex.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::test_utils::{
    EdgeListFixture, distance_matrix, edge_list_strategy, random_fixture, suite_proptest_config,
};
use crate::{DisjointSet, UnionFind, UnionFindVariant};

use super::{Bipartite, ConnectedComponents, Cycle};

const MAX_VERTICES: usize = 20;
const MAX_EDGES: usize = 30;

fn run_components_property(
    fixture: &EdgeListFixture,
    variant: UnionFindVariant,
) -> Result<(), TestCaseError> {
    let components = ConnectedComponents::new(&fixture.graph());
    let mut set = DisjointSet::from_pairs(variant, fixture.vertex_count, fixture.edges.clone());

    prop_assert_eq!(components.count(), set.count());
    prop_assert_eq!(components.components(), set.components());
    for v in 0..fixture.vertex_count {
        for w in 0..fixture.vertex_count {
            prop_assert_eq!(components.connected(v, w), set.connected(v, w));
        }
    }
    Ok(())
}

fn run_cycle_property(fixture: &EdgeListFixture) -> Result<(), TestCaseError> {
    let graph = fixture.graph();
    let components = ConnectedComponents::new(&graph);
    let forest_edges = graph.vertex_count() - components.count();
    prop_assert_eq!(
        Cycle::new(&graph).has_cycle(),
        graph.edge_count() > forest_edges
    );
    Ok(())
}

fn run_bipartite_property(fixture: &EdgeListFixture) -> Result<(), TestCaseError> {
    let graph = fixture.graph();
    let dist = distance_matrix(fixture);
    let components = ConnectedComponents::new(&graph);
    let roots: Vec<usize> = components
        .components()
        .iter()
        .filter_map(|members| members.first().copied())
        .collect();
    let parity = |v: usize| dist[roots[components.id(v)]][v].map(|d| d & 1 == 1);
    let expected = fixture
        .edges
        .iter()
        .all(|&(v, w)| parity(v) != parity(w));

    let bipartite = Bipartite::new(&graph);
    prop_assert_eq!(bipartite.is_bipartite(), expected);
    if expected {
        for &(v, w) in &fixture.edges {
            prop_assert_ne!(bipartite.color(v), bipartite.color(w));
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(256))]

    #[test]
    fn components_match_disjoint_set(
        fixture in edge_list_strategy(MAX_VERTICES, MAX_EDGES),
        variant in any::<UnionFindVariant>(),
    ) {
        run_components_property(&fixture, variant)?;
    }

    #[test]
    fn cycle_matches_forest_edge_bound(fixture in edge_list_strategy(MAX_VERTICES, MAX_EDGES)) {
        run_cycle_property(&fixture)?;
    }

    #[test]
    fn bipartite_matches_distance_parity(fixture in edge_list_strategy(MAX_VERTICES, MAX_EDGES)) {
        run_bipartite_property(&fixture)?;
    }
}

#[rstest::rstest]
#[case::sparse_42(42, 40, 30)]
#[case::sparse_999(999, 40, 30)]
#[case::dense_42(42, 30, 120)]
#[case::dense_7777(7777, 30, 120)]
fn components_ignore_edge_order(
    #[case] seed: u64,
    #[case] vertex_count: usize,
    #[case] edge_count: usize,
) {
    let fixture = random_fixture(seed, vertex_count, edge_count);
    let mut shuffled = fixture.clone();
    shuffled.edges.shuffle(&mut SmallRng::seed_from_u64(seed));

    let expected = ConnectedComponents::new(&fixture.graph()).components();
    assert_eq!(ConnectedComponents::new(&shuffled.graph()).components(), expected);
    for variant in UnionFindVariant::ALL {
        let mut set = DisjointSet::from_pairs(variant, vertex_count, shuffled.edges.clone());
        assert_eq!(set.components(), expected, "variant {variant}");
    }
    run_cycle_property(&fixture).expect("cycle property must hold");
    run_bipartite_property(&fixture).expect("bipartite property must hold");
}
