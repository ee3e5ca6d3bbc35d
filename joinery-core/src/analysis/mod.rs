//! Whole-graph analyses computed once at construction.
//!
//! Each analysis runs a depth-first traversal over every vertex, restarting
//! from the lowest unvisited id whenever a component is exhausted. The
//! traversals keep their own explicit stacks, so graph depth never touches
//! the call stack.

mod bipartite;
mod components;
mod cycle;

#[cfg(test)]
mod property;

pub use self::{bipartite::Bipartite, components::ConnectedComponents, cycle::Cycle};
