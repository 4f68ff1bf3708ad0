//! # bcc_forge
//!
//! A Rust library for producing and analyzing undirected test graphs whose
//! biconnected components have a known shape.
//!
//! - [`synthesis`] builds single blocks (complete graphs, cycles, random dense
//!   graphs) over disjoint vertex ranges,
//! - [`assembly`] joins blocks into a tree through one bridge vertex per block,
//! - [`bridges`] finds every bridge with an iterative low-link DFS and counts the
//!   components left once the bridges are cut,
//! - [`reduce`] deletes bridges until a target component count is reached.
//!
//! Graphs travel between these layers as plain edge lists, see [`input`] and
//! [`output`] for the "u v" text format.
//!
//! ```
//! use bcc_forge::bridges::analyze;
//!
//! let edges = vec![(1, 2), (2, 3), (3, 1), (3, 4), (4, 5)];
//! let analysis = analyze(5, &edges).unwrap();
//! assert_eq!(analysis.bridges, vec![(3, 4), (4, 5)]);
//! assert_eq!(analysis.bcc_count, 3);
//! ```

pub mod allocator;
pub mod assembly;
pub mod bridges;
pub mod config;
pub mod debugging;
pub mod error;
pub mod input;
pub mod output;
pub mod reduce;
pub mod shift;
pub mod synthesis;
pub mod testing;
pub mod types;

pub use error::{Error, Result};
pub use types::{Edge, EdgeLabel, UnGraph, Vertex};
