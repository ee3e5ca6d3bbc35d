#![expect(clippy::expect_used, reason = "tests require contextual panics")]
//! Integration tests for the graph and pair-stream text loaders.
use std::io::{self, BufRead, Cursor, Read};

use joinery_core::{JoineryError, UnionFind, UnionFindVariant};
use joinery_providers_text::{
    MAX_ELEMENTS, TextProviderError, TextProviderErrorCode, read_disjoint_set, read_graph,
};
use rstest::rstest;

const TINY_GRAPH: &str = "13\n13\n0 5\n4 3\n0 1\n9 12\n6 4\n5 4\n0 2\n11 12\n9 10\n0 6\n7 8\n9 11\n5 3\n";

const TINY_PAIRS: &str = "10\n4 3\n3 8\n6 5\n9 4\n2 1\n8 9\n5 0\n7 2\n6 1\n1 0\n6 7\n";

#[rstest]
fn read_graph_builds_adjacency_in_file_order() {
    let graph = read_graph(Cursor::new(TINY_GRAPH)).expect("graph must load");
    assert_eq!(graph.vertex_count(), 13);
    assert_eq!(graph.edge_count(), 13);
    assert_eq!(graph.adj(0), &[5, 1, 2, 6]);
    assert_eq!(graph.adj(12), &[9, 11]);
}

#[rstest]
#[case::single_line("3 2 0 1 1 2")]
#[case::ragged_lines("3\n2 0\n1 1\n\n 2 \n")]
#[case::trailing_tokens("3 2 0 1 1 2 9 9 9")]
fn read_graph_ignores_layout(#[case] raw: &str) {
    let graph = read_graph(Cursor::new(raw)).expect("graph must load");
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.adj(1), &[0, 2]);
}

#[rstest]
#[case::empty("", TextProviderErrorCode::MissingHeader)]
#[case::no_edge_count("4\n", TextProviderErrorCode::MissingHeader)]
#[case::bad_header("four 1 0 1", TextProviderErrorCode::InvalidInteger)]
#[case::negative_vertex("3 1 -1 2", TextProviderErrorCode::InvalidInteger)]
#[case::truncated_pair("3 2 0 1 2", TextProviderErrorCode::TruncatedPair)]
#[case::missing_edges("3 3 0 1 1 2", TextProviderErrorCode::MissingEdges)]
#[case::out_of_range("3 1 0 3", TextProviderErrorCode::OutOfRange)]
#[case::huge_vertex_count("2305843009213693952 0", TextProviderErrorCode::CountTooLarge)]
#[case::max_vertex_count("18446744073709551615 0", TextProviderErrorCode::CountTooLarge)]
#[case::just_over_limit("16777217 0", TextProviderErrorCode::CountTooLarge)]
fn read_graph_rejects_malformed_input(#[case] raw: &str, #[case] expected: TextProviderErrorCode) {
    let err = read_graph(Cursor::new(raw)).expect_err("malformed input must fail");
    assert_eq!(err.code(), expected, "{err}");
}

#[rstest]
fn read_graph_reports_position_details() {
    let invalid = read_graph(Cursor::new("3 2\n0 1\n1 x\n")).expect_err("token must be rejected");
    assert!(matches!(
        invalid,
        TextProviderError::InvalidInteger { line: 3, ref token } if token == "x"
    ));

    let missing = read_graph(Cursor::new("3 3 0 1 1 2")).expect_err("edges are missing");
    assert!(matches!(
        missing,
        TextProviderError::MissingEdges {
            expected: 3,
            found: 2
        }
    ));

    let out_of_range =
        read_graph(Cursor::new("2 2 0 1 1 2")).expect_err("vertex 2 is out of range");
    assert!(matches!(
        out_of_range,
        TextProviderError::OutOfRange {
            pair: 1,
            source: JoineryError::VertexOutOfRange {
                vertex: 2,
                vertex_count: 2
            }
        }
    ));
}

#[rstest]
#[case::quick_find(UnionFindVariant::QuickFind)]
#[case::quick_union(UnionFindVariant::QuickUnion)]
#[case::weighted(UnionFindVariant::WeightedQuickUnion)]
fn read_disjoint_set_applies_every_pair(#[case] variant: UnionFindVariant) {
    let mut set = read_disjoint_set(Cursor::new(TINY_PAIRS), variant).expect("pairs must load");
    assert_eq!(set.variant(), variant);
    assert_eq!(set.len(), 10);
    assert_eq!(set.count(), 2);
    assert!(set.connected(0, 7));
    assert!(set.connected(3, 9));
    assert!(!set.connected(0, 9));
}

#[rstest]
fn read_disjoint_set_accepts_header_only() {
    let set = read_disjoint_set(Cursor::new("5\n"), UnionFindVariant::default())
        .expect("header-only input must load");
    assert_eq!(set.count(), 5);
}

#[rstest]
#[case::empty("", TextProviderErrorCode::MissingHeader)]
#[case::truncated_pair("4 0 1 2", TextProviderErrorCode::TruncatedPair)]
#[case::bad_token("4 0 1 2 three", TextProviderErrorCode::InvalidInteger)]
#[case::out_of_range("4 0 1 2 4", TextProviderErrorCode::OutOfRange)]
#[case::huge_element_count("18446744073709551615", TextProviderErrorCode::CountTooLarge)]
#[case::just_over_limit("16777217 0 1", TextProviderErrorCode::CountTooLarge)]
fn read_disjoint_set_rejects_malformed_input(
    #[case] raw: &str,
    #[case] expected: TextProviderErrorCode,
) {
    let err = read_disjoint_set(Cursor::new(raw), UnionFindVariant::QuickUnion)
        .expect_err("malformed input must fail");
    assert_eq!(err.code(), expected, "{err}");
}

#[rstest]
#[case::quick_find(UnionFindVariant::QuickFind)]
#[case::quick_union(UnionFindVariant::QuickUnion)]
#[case::weighted(UnionFindVariant::WeightedQuickUnion)]
fn oversized_headers_fail_before_allocating(#[case] variant: UnionFindVariant) {
    let elements = read_disjoint_set(Cursor::new("18446744073709551615"), variant)
        .expect_err("element count must be capped");
    assert!(matches!(
        elements,
        TextProviderError::CountTooLarge {
            field: "element count",
            value: usize::MAX,
            limit: MAX_ELEMENTS,
        }
    ));
    assert_eq!(elements.code().as_str(), "TEXT_COUNT_TOO_LARGE");

    let vertices = read_graph(Cursor::new("2305843009213693952 0"))
        .expect_err("vertex count must be capped");
    assert!(matches!(
        vertices,
        TextProviderError::CountTooLarge {
            field: "vertex count",
            value: 2_305_843_009_213_693_952,
            limit: MAX_ELEMENTS,
        }
    ));
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("boom"))
    }
}

impl BufRead for FailingReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Err(io::Error::other("boom"))
    }

    fn consume(&mut self, _amt: usize) {}
}

#[rstest]
fn loaders_propagate_io_errors() {
    let graph_err = read_graph(FailingReader).expect_err("read failure must surface");
    assert!(matches!(graph_err, TextProviderError::Io(_)));
    assert_eq!(graph_err.code().as_str(), "TEXT_IO");

    let set_err = read_disjoint_set(FailingReader, UnionFindVariant::QuickFind)
        .expect_err("read failure must surface");
    assert!(matches!(set_err, TextProviderError::Io(_)));
}
