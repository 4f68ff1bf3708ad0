use dot::{Edges, GraphWalk, Labeller, Nodes, Style};

use crate::bridges::{DfsEdgeLabel, LowLinkTree};
use crate::error::Result;
use crate::types::Vertex;

type Node = Vertex;

#[derive(Debug, Clone)]
struct Edge {
    id: usize,
    source: Node,
    target: Node,
    label: DfsEdgeLabel,
    bridge: bool,
}

struct Graph<'a> {
    tree: &'a LowLinkTree,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl<'a> Labeller<'a, Node, Edge> for Graph<'a> {
    fn graph_id(&'a self) -> dot::Id<'a> {
        dot::Id::new("LowLink").expect("static graph id is a valid identifier")
    }

    fn node_id(&'a self, n: &Node) -> dot::Id<'a> {
        dot::Id::new(format!("N{}", n)).expect("N followed by digits is a valid identifier")
    }

    fn node_label(&'a self, n: &Node) -> dot::LabelText<'a> {
        let show = |value: Option<usize>| value.map_or("-".to_string(), |x| x.to_string());
        dot::LabelText::label(format!(
            "{}\ndisc:{} low:{}\np:{}",
            n,
            show(self.tree.discovery(*n)),
            show(self.tree.low(*n)),
            match self.tree.parent_edge(*n) {
                Some(eid) => format!("e{}", eid),
                None => "Root".to_string(),
            },
        ))
    }

    fn edge_label(&'a self, e: &Edge) -> dot::LabelText<'a> {
        dot::LabelText::label(format!(
            "e{} {}{}",
            e.id,
            e.label,
            if e.bridge { " bridge" } else { "" }
        ))
    }

    fn edge_style(&'a self, e: &Edge) -> Style {
        match (e.label, e.bridge) {
            (_, true) => Style::Bold,
            (DfsEdgeLabel::Back, _) => Style::Dotted,
            _ => Style::None,
        }
    }
}

impl<'a> GraphWalk<'a, Node, Edge> for Graph<'a> {
    fn nodes(&'a self) -> Nodes<'a, Node> {
        self.nodes.iter().cloned().collect()
    }

    fn edges(&'a self) -> Edges<'a, Edge> {
        self.edges.as_slice().into()
    }

    fn source(&'a self, e: &Edge) -> Node {
        e.source
    }

    fn target(&'a self, e: &Edge) -> Node {
        e.target
    }
}

/// Renders the DFS forest of a low-link traversal in dot format.
///
/// Nodes show their discovery time, low-link and the tree edge they were
/// reached by. Tree edges point from parent to child, back edges from the
/// later discovered end to the earlier one and are dotted. Bridges are bold.
///
/// Use returned string with `dot` not `neato`.
pub fn draw_low_link(tree: &LowLinkTree) -> Result<String> {
    let bridge_ids = tree.bridge_ids();
    let mut graph = Graph { tree, nodes: tree.vertices().collect(), edges: Vec::new() };

    for (id, &(u, v)) in tree.edges().iter().enumerate() {
        let label = tree.edge_label(id);
        if label == DfsEdgeLabel::Unvisited {
            continue;
        }
        let u_first = tree.discovery(u) <= tree.discovery(v);
        let (source, target) = match (label, u_first) {
            (DfsEdgeLabel::Tree, true) | (DfsEdgeLabel::Back, false) => (u, v),
            _ => (v, u),
        };
        graph.edges.push(Edge { id, source, target, label, bridge: bridge_ids.contains(&id) });
    }

    let mut buffer = Vec::new();
    dot::render(&graph, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
