//! Property-based tests comparing the path engines with each other and with
//! a brute-force distance oracle.

use proptest::prelude::*;

use crate::test_utils::{EdgeListFixture, distance_matrix, edge_list_strategy, suite_proptest_config};

use super::{BreadthFirstPaths, DepthFirstPaths, DfsStrategy, Paths};

const MAX_VERTICES: usize = 20;
const MAX_EDGES: usize = 40;

/// Checks that `path` starts at `v`, ends at the source and follows edges.
fn check_path_shape(
    fixture: &EdgeListFixture,
    paths: &dyn Paths,
    v: usize,
) -> Result<(), TestCaseError> {
    let graph = fixture.graph();
    let Some(path) = paths.path_to(v) else {
        prop_assert!(!paths.has_path_to(v));
        return Ok(());
    };
    prop_assert_eq!(path.first().copied(), Some(v));
    prop_assert_eq!(path.last().copied(), Some(paths.source()));
    prop_assert!(path.len() <= fixture.vertex_count);
    for step in path.windows(2) {
        prop_assert!(
            graph.adj(step[0]).contains(&step[1]),
            "{} - {} is not an edge",
            step[0],
            step[1]
        );
    }
    Ok(())
}

fn run_engine_agreement_property(
    fixture: &EdgeListFixture,
    source: usize,
) -> Result<(), TestCaseError> {
    let graph = fixture.graph();
    let oracle = distance_matrix(fixture);
    let dfs = DepthFirstPaths::new(&graph, source);
    let bfs = BreadthFirstPaths::new(&graph, source);

    prop_assert_eq!(dfs.reachable_count(), bfs.reachable_count());
    for v in 0..fixture.vertex_count {
        let expected = oracle[source][v];
        prop_assert_eq!(dfs.has_path_to(v), expected.is_some());
        prop_assert_eq!(bfs.has_path_to(v), expected.is_some());
        prop_assert_eq!(bfs.distance_to(v), expected);

        let bfs_edges = bfs.path_to(v).map(|path| path.len() - 1);
        let dfs_edges = dfs.path_to(v).map(|path| path.len() - 1);
        prop_assert_eq!(bfs_edges, expected);
        prop_assert!(bfs_edges <= dfs_edges);

        check_path_shape(fixture, &dfs, v)?;
        check_path_shape(fixture, &bfs, v)?;
    }
    Ok(())
}

fn run_strategy_agreement_property(
    fixture: &EdgeListFixture,
    source: usize,
) -> Result<(), TestCaseError> {
    let graph = fixture.graph();
    let iterative = DepthFirstPaths::with_strategy(&graph, source, DfsStrategy::Iterative);
    let recursive = DepthFirstPaths::with_strategy(&graph, source, DfsStrategy::Recursive);
    for v in 0..fixture.vertex_count {
        prop_assert_eq!(iterative.has_path_to(v), recursive.has_path_to(v));
        prop_assert_eq!(iterative.edge_to(v), recursive.edge_to(v));
    }
    Ok(())
}

fn fixture_and_source() -> impl Strategy<Value = (EdgeListFixture, usize)> {
    edge_list_strategy(MAX_VERTICES, MAX_EDGES).prop_flat_map(|fixture| {
        let vertex_count = fixture.vertex_count;
        (Just(fixture), 0..vertex_count)
    })
}

proptest! {
    #![proptest_config(suite_proptest_config(256))]

    #[test]
    fn engines_agree_with_the_distance_oracle((fixture, source) in fixture_and_source()) {
        run_engine_agreement_property(&fixture, source)?;
    }

    #[test]
    fn dfs_strategies_build_identical_trees((fixture, source) in fixture_and_source()) {
        run_strategy_agreement_property(&fixture, source)?;
    }
}
