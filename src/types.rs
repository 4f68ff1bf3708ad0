use hashbrown::{HashMap, HashSet};
use petgraph::graph::NodeIndex;

/// Vertex identifier. Generated graphs number vertices from 1.
pub type Vertex = u32;

/// Undirected edge. The tuple keeps the orientation it was written with.
pub type Edge = (Vertex, Vertex);

/// Enum representing the role of an edge in an analyzed graph.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EdgeLabel {
    Block,
    Bridge,
}

/// Wrapper for petgraph's graph type. Node weights are the original vertex ids.
pub type UnGraph = petgraph::graph::UnGraph<Vertex, EdgeLabel>;

/// Returns the edge with its smaller endpoint first.
pub fn normalized((u, v): Edge) -> Edge {
    if u <= v { (u, v) } else { (v, u) }
}

/// Largest endpoint appearing in `edges`, 0 for an empty list.
pub fn max_vertex(edges: &[Edge]) -> usize {
    edges
        .iter()
        .map(|&(u, v)| u.max(v) as usize)
        .max()
        .unwrap_or(0)
}

/// Builds a petgraph graph out of an edge list.
///
/// Nodes are created in order of first appearance. Edges listed in `bridges`
/// (in either orientation) get [`EdgeLabel::Bridge`], all others [`EdgeLabel::Block`].
pub fn to_ungraph(edges: &[Edge], bridges: &[Edge]) -> UnGraph {
    let bridge_set: HashSet<Edge> = bridges.iter().map(|&e| normalized(e)).collect();
    let mut graph = UnGraph::new_undirected();
    let mut nodes: HashMap<Vertex, NodeIndex> = HashMap::new();

    for &(u, v) in edges {
        let a = *nodes.entry(u).or_insert_with(|| graph.add_node(u));
        let b = *nodes.entry(v).or_insert_with(|| graph.add_node(v));
        let label = if bridge_set.contains(&normalized((u, v))) {
            EdgeLabel::Bridge
        } else {
            EdgeLabel::Block
        };
        graph.add_edge(a, b, label);
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_ungraph_labels_bridges() {
        let edges = vec![(1, 2), (2, 3), (3, 1), (3, 4)];
        let graph = to_ungraph(&edges, &[(4, 3)]);
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 4);
        let bridges = graph
            .edge_weights()
            .filter(|&&w| w == EdgeLabel::Bridge)
            .count();
        assert_eq!(bridges, 1);
    }

    #[test]
    fn test_max_vertex() {
        assert_eq!(max_vertex(&[]), 0);
        assert_eq!(max_vertex(&[(3, 9), (12, 1)]), 12);
    }
}
