//! # Maximum Clique Local Search
//!
//! A Rust library for approximating the Maximum Clique problem on undirected
//! graphs with randomized greedy local search.
//!
//! This crate provides:
//! - A compact adjacency-set graph model with O(1) adjacency queries.
//! - A single-trial greedy **clique builder** that grows a random start vertex
//!   into a locally maximal clique.
//! - A **search driver** that repeats independent trials and keeps the largest
//!   clique found, sequentially or across parallel chains.
//! - A deterministic **validator** that certifies a reported vertex set really
//!   is a clique.
//! - A DIMACS `.clq` parser for the standard benchmark instances.
//!
//! The search trades optimality for speed: it returns the best clique observed
//! across a bounded number of trials, with no completeness guarantee.
//!
//! ## Quick Start
//!
//! ```
//! use maxclique::graph::Graph;
//! use maxclique::search::{search, SearchConfig};
//! use maxclique::validate::validate_clique;
//!
//! // A triangle: every trial reaches the unique maximum clique {0, 1, 2}.
//! let graph = Graph::from_edges(3, [(0, 1), (1, 2), (0, 2)]).unwrap();
//! let cfg = SearchConfig {
//!     iterations: 10,
//!     seed: Some(12345),
//!     ..Default::default()
//! };
//!
//! let best = search(&graph, &cfg).unwrap();
//! assert_eq!(best.len(), 3);
//! validate_clique(&graph, &best).unwrap();
//! ```
//!
//! ## Reproducibility
//!
//! All stochastic choices are drawn from an explicitly seeded generator owned
//! by the search run. Given the same graph, seed, and configuration,
//! [`search::search`] returns an identical result on every call. The parallel
//! driver is deterministic for a fixed seed and chain count, but follows a
//! different draw sequence than the sequential path.
//!
//! ## Modules
//!
//! - [`graph`]: Immutable adjacency-set graph model and the vertex bitset.
//! - [`construction`]: Working clique set and the single-trial growth routine.
//! - [`search`]: Trial repetition, best-clique tracking, parallel chains.
//! - [`validate`]: Post-hoc certification of reported cliques.
//! - [`dimacs`]: DIMACS `.clq` instance parsing.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::many_single_char_names)] // Mathematical variable names
#![allow(clippy::needless_range_loop)] // Often clearer for vertex indexing

pub mod construction;
pub mod dimacs;
pub mod graph;
pub mod search;
pub mod validate;

/// Re-export commonly used types for convenience.
pub mod prelude {
    pub use crate::construction::Clique;
    pub use crate::dimacs::{load_dimacs, parse_dimacs};
    pub use crate::graph::{Graph, VertexSet};
    pub use crate::search::{search, search_parallel, SearchConfig};
    pub use crate::validate::validate_clique;
}
