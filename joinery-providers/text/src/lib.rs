//! Text loaders for graphs and union-find pair streams.
//!
//! Both formats are whitespace-separated non-negative integers; line breaks
//! carry no meaning beyond separating tokens.
//!
//! - Graph: vertex count `V`, edge count `E`, then `E` pairs `v w`. Anything
//!   after the last declared pair is ignored.
//! - Union-find: element count `N`, then pairs `p q` until end of input.
//!
//! Loading is all or nothing: any malformed token, truncated pair or
//! out-of-range id fails the whole load with a [`TextProviderError`].
//! Header counts that size an allocation (`V` and `N`) are capped at
//! [`MAX_ELEMENTS`] and rejected before any memory is reserved.

mod errors;
mod tokens;

use std::io::BufRead;

use joinery_core::{DisjointSet, Graph, UnionFind, UnionFindVariant};
use tracing::debug;

pub use crate::errors::{TextProviderError, TextProviderErrorCode};
use crate::tokens::Tokens;

/// Largest vertex or element count either loader will allocate for.
pub const MAX_ELEMENTS: usize = 1 << 24;

fn bounded(field: &'static str, value: usize) -> Result<usize, TextProviderError> {
    if value > MAX_ELEMENTS {
        return Err(TextProviderError::CountTooLarge {
            field,
            value,
            limit: MAX_ELEMENTS,
        });
    }
    Ok(value)
}

/// Reads a graph in `V E v0 w0 v1 w1 ...` form.
///
/// # Errors
/// Returns [`TextProviderError`] when reading fails, a header is missing, a
/// token is not a non-negative integer, `V` exceeds [`MAX_ELEMENTS`], fewer
/// than `E` pairs are present, or an edge names a vertex outside `0..V`.
///
/// # Examples
/// ```
/// use std::io::Cursor;
///
/// use joinery_providers_text::read_graph;
///
/// let graph = read_graph(Cursor::new("3\n2\n0 1\n1 2\n"))?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.adj(1), &[0, 2]);
/// # Ok::<(), joinery_providers_text::TextProviderError>(())
/// ```
pub fn read_graph<R: BufRead>(reader: R) -> Result<Graph, TextProviderError> {
    let mut tokens = Tokens::new(reader);
    let vertex_count = bounded("vertex count", tokens.header("vertex count")?)?;
    let edge_count = tokens.header("edge count")?;

    let mut graph = Graph::new(vertex_count);
    for pair in 0..edge_count {
        let Some((v, w)) = tokens.pair(pair)? else {
            return Err(TextProviderError::MissingEdges {
                expected: edge_count,
                found: pair,
            });
        };
        graph
            .try_add_edge(v, w)
            .map_err(|source| TextProviderError::OutOfRange { pair, source })?;
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

/// Reads an `N p0 q0 p1 q1 ...` pair stream into a [`DisjointSet`] of the
/// requested variant, unioning each pair that is not already connected.
///
/// # Errors
/// Returns [`TextProviderError`] when reading fails, the element count is
/// missing or above [`MAX_ELEMENTS`], a token is not a non-negative integer,
/// the stream ends halfway
/// through a pair, or a pair names an element outside `0..N`.
///
/// # Examples
/// ```
/// use std::io::Cursor;
///
/// use joinery_core::{UnionFind, UnionFindVariant};
/// use joinery_providers_text::read_disjoint_set;
///
/// let mut set = read_disjoint_set(Cursor::new("4 0 1 2 3 1 0"), UnionFindVariant::QuickFind)?;
/// assert_eq!(set.count(), 2);
/// assert!(set.connected(2, 3));
/// # Ok::<(), joinery_providers_text::TextProviderError>(())
/// ```
pub fn read_disjoint_set<R: BufRead>(
    reader: R,
    variant: UnionFindVariant,
) -> Result<DisjointSet, TextProviderError> {
    let mut tokens = Tokens::new(reader);
    let len = bounded("element count", tokens.header("element count")?)?;

    let mut set = DisjointSet::new(variant, len);
    let mut pairs = 0;
    let mut merged = 0;
    while let Some((p, q)) = tokens.pair(pairs)? {
        let connected = set
            .try_connected(p, q)
            .map_err(|source| TextProviderError::OutOfRange {
                pair: pairs,
                source,
            })?;
        if !connected {
            set.union(p, q);
            merged += 1;
        }
        pairs += 1;
    }

    debug!(
        %variant,
        elements = len,
        pairs,
        merged,
        components = set.count(),
        "pair stream loaded"
    );
    Ok(set)
}
