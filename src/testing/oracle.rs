use petgraph::algo::connected_components;
use petgraph::graph::NodeIndex;

use crate::types::{Edge, EdgeLabel, UnGraph, Vertex, normalized, to_ungraph};

/// Whether the edge-bearing vertices of `edges` form a single component.
pub fn is_connected(edges: &[Edge]) -> bool {
    connected_components(&to_ungraph(edges, &[])) <= 1
}

/// Connected components over the fixed vertex set `1..=n`, skipping edge `skip`.
fn component_count(n: usize, edges: &[Edge], skip: Option<usize>) -> usize {
    let mut graph = UnGraph::new_undirected();
    for v in 1..=n as Vertex {
        graph.add_node(v);
    }
    for (i, &(u, v)) in edges.iter().enumerate() {
        if Some(i) == skip {
            continue;
        }
        graph.add_edge(
            NodeIndex::new(u as usize - 1),
            NodeIndex::new(v as usize - 1),
            EdgeLabel::Block,
        );
    }
    connected_components(&graph)
}

/// Brute force bridges: edges whose removal increases the component count.
///
/// Returned normalized and sorted, so it can be compared with any discovery order.
pub fn brute_force_bridges(n: usize, edges: &[Edge]) -> Vec<Edge> {
    let base = component_count(n, edges, None);
    let mut bridges: Vec<Edge> = (0..edges.len())
        .filter(|&i| component_count(n, edges, Some(i)) > base)
        .map(|i| normalized(edges[i]))
        .collect();
    bridges.sort_unstable();
    bridges
}
