//! Joinery core library.
//!
//! Two families of connectivity algorithms over dense integer ids:
//!
//! - [`UnionFind`] implementations ([`QuickFind`], [`QuickUnion`],
//!   [`WeightedQuickUnion`]) answering incremental connectivity queries, with
//!   [`DisjointSet`] selecting one at construction time.
//! - An undirected multigraph ([`Graph`]) with depth-first and breadth-first
//!   path engines ([`DepthFirstPaths`], [`BreadthFirstPaths`]) and one-shot
//!   analyses ([`ConnectedComponents`], [`Cycle`], [`Bipartite`]).
//!
//! Index arguments are assumed to be in range; the plain operations panic on
//! out-of-range ids while the `try_*` counterparts return [`JoineryError`].
#![cfg_attr(docsrs, feature(doc_cfg))]

mod analysis;
mod error;
mod graph;
mod paths;
#[cfg(test)]
mod test_utils;
mod union_find;

pub use crate::{
    analysis::{Bipartite, ConnectedComponents, Cycle},
    error::{JoineryError, JoineryErrorCode, Result},
    graph::Graph,
    paths::{BreadthFirstPaths, DepthFirstPaths, DfsStrategy, Paths},
    union_find::{
        DisjointSet, QuickFind, QuickUnion, UnionFind, UnionFindVariant, WeightedQuickUnion,
    },
};
