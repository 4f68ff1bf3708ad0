//! Helpers shared by the unit tests and the property tests: exhaustive and
//! random graph sources plus a slow but obvious bridge oracle.

pub mod graph_enumerator;
pub mod oracle;
pub mod random_graphs;
