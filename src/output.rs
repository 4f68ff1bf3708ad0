use std::path::Path;

use petgraph::visit::EdgeRef;

use crate::bridges::BridgeAnalysis;
use crate::error::Result;
use crate::synthesis::path_edges;
use crate::types::{Edge, EdgeLabel, to_ungraph};

/// Returns the edge list in the "u v" line format, one line per edge.
pub fn to_edge_list_string(edges: &[Edge]) -> String {
    let mut output = String::with_capacity(edges.len() * 8);
    for (u, v) in edges {
        output.push_str(&format!("{} {}\n", u, v));
    }
    output
}

/// Path with `n` edges in the edge list format, followed by a blank line.
pub fn path_to_string(n: usize) -> Result<String> {
    let mut output = to_edge_list_string(&path_edges(n)?);
    output.push('\n');
    Ok(output)
}

/// Returns a graph in DOT format.
///
/// It shows your vertex ids, not petgraph's internal indices.
///
/// Block edges are solid and bridges are dashed red.
///
/// Intended to be used with `neato`.
pub fn draw_graph(edges: &[Edge], analysis: &BridgeAnalysis) -> String {
    let graph = to_ungraph(edges, &analysis.bridges);
    let mut output = String::from("graph {\n");
    output.push_str("  mode=sgd;\n");
    output.push_str("  maxiter=1000;\n");
    output.push_str("  node [shape=circle, style=filled, fillcolor=lightblue];\n");

    for node_idx in graph.node_indices() {
        output.push_str(&format!(
            "  {} [label=\"{}\"];\n",
            node_idx.index(),
            graph[node_idx]
        ));
    }

    for edge in graph.edge_references() {
        let (a, b) = (edge.source().index(), edge.target().index());
        let style = match edge.weight() {
            EdgeLabel::Bridge => "dashed, color=red",
            EdgeLabel::Block => "solid",
        };
        output.push_str(&format!("  {} -- {} [style={}];\n", a, b, style));
    }
    output.push_str("}\n");
    output
}

/// Writes an edge list to a file.
pub fn write_edges(edges: &[Edge], path: impl AsRef<Path>) -> Result<()> {
    to_file(&to_edge_list_string(edges), path)
}

/// Writes a string to a file.
pub fn to_file(content: &str, path: impl AsRef<Path>) -> Result<()> {
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridges::analyze;
    use crate::input;

    #[test]
    fn test_edge_list_format() {
        assert_eq!(to_edge_list_string(&[(1, 2), (10, 3)]), "1 2\n10 3\n");
        assert_eq!(to_edge_list_string(&[]), "");
    }

    #[test]
    fn test_path_has_trailing_blank_line() {
        assert_eq!(path_to_string(2).unwrap(), "1 2\n2 3\n\n");
        assert!(path_to_string(0).is_err());
    }

    #[test]
    fn test_written_list_reads_back() {
        let edges = vec![(1, 2), (2, 3), (3, 1), (3, 4)];
        let text = path_to_string(3).unwrap() + &to_edge_list_string(&edges);
        let read = input::from_str(&text).unwrap();
        assert_eq!(read.len(), 7);
        assert_eq!(&read[3..], &edges[..]);
    }

    #[test]
    fn test_draw_graph_dashes_bridges() {
        let edges = vec![(1, 2), (2, 3), (3, 1), (3, 4)];
        let analysis = analyze(4, &edges).unwrap();
        let dot = draw_graph(&edges, &analysis);
        assert!(dot.starts_with("graph {"));
        assert_eq!(dot.matches("dashed").count(), 1);
        assert_eq!(dot.matches("solid").count(), 3);
        assert!(dot.contains("[label=\"4\"]"));
    }

    #[test]
    fn test_write_edges_to_file() {
        let path = std::env::temp_dir().join(format!("bcc_forge_output_{}.txt", std::process::id()));
        write_edges(&[(5, 6)], &path).unwrap();
        assert_eq!(input::from_file(&path).unwrap(), vec![(5, 6)]);
        std::fs::remove_file(&path).unwrap();
    }
}
