use fixedbitset::FixedBitSet;
use radsort::sort_by_key;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{Edge, Vertex};

/// Adjacency lists indexed by vertex id, entries are `(neighbour, edge id)`.
///
/// Both orientations of each edge are inserted in edge-list order, so neighbours
/// are visited in order of first appearance.
fn build_adjacency(n: usize, edges: &[Edge]) -> Result<Vec<Vec<(usize, usize)>>> {
    let mut adj = vec![Vec::new(); n + 1];
    for (eid, &(u, v)) in edges.iter().enumerate() {
        for w in [u, v] {
            if w == 0 || w as usize > n {
                return Err(Error::VertexOutOfRange { vertex: w, vertex_count: n });
            }
        }
        adj[u as usize].push((v as usize, eid));
        adj[v as usize].push((u as usize, eid));
    }
    Ok(adj)
}

/// Enum to mark edges in the DFS forest.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DfsEdgeLabel {
    Unvisited,
    Tree,
    Back,
}

impl std::fmt::Display for DfsEdgeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DfsEdgeLabel::Unvisited => write!(f, "Unvisited"),
            DfsEdgeLabel::Tree => write!(f, "Tree"),
            DfsEdgeLabel::Back => write!(f, "Back"),
        }
    }
}

/// Discovery times, low-links and edge labels of a DFS forest over a graph.
#[derive(Debug)]
pub struct LowLinkTree {
    edges: Vec<Edge>,
    adj: Vec<Vec<(usize, usize)>>,
    visited: FixedBitSet,
    discovery: Vec<usize>,
    low: Vec<usize>,
    parent_edge: Vec<Option<usize>>,
    edge_labels: Vec<DfsEdgeLabel>,
    time: usize,
    // (edge id, parent, child) in the order the children finished
    bridges: Vec<(usize, usize, usize)>,
}

#[derive(Clone, Copy)]
struct Frame {
    vertex: usize,
    parent_edge: Option<usize>,
    next: usize,
}

impl LowLinkTree {
    fn new(n: usize, edges: &[Edge], adj: Vec<Vec<(usize, usize)>>) -> Self {
        Self {
            edges: edges.to_vec(),
            adj,
            visited: FixedBitSet::with_capacity(n + 1),
            discovery: vec![usize::MAX; n + 1],
            low: vec![usize::MAX; n + 1],
            parent_edge: vec![None; n + 1],
            edge_labels: vec![DfsEdgeLabel::Unvisited; edges.len()],
            time: 0,
            bridges: Vec::new(),
        }
    }

    fn enter(&mut self, u: usize, parent_edge: Option<usize>) {
        self.visited.insert(u);
        self.discovery[u] = self.time;
        self.low[u] = self.time;
        self.parent_edge[u] = parent_edge;
        self.time += 1;
    }

    /// Iterative DFS from `root`.
    ///
    /// The parent is skipped by edge id, not by vertex, so a parallel edge back
    /// to the parent counts as a back edge.
    fn dfs(&mut self, root: usize) {
        self.enter(root, None);
        let mut stack = vec![Frame { vertex: root, parent_edge: None, next: 0 }];

        while let Some(frame) = stack.last_mut() {
            let u = frame.vertex;
            if let Some(&(v, eid)) = self.adj[u].get(frame.next) {
                frame.next += 1;
                if Some(eid) == frame.parent_edge {
                    continue;
                }
                if !self.visited.contains(v) {
                    self.edge_labels[eid] = DfsEdgeLabel::Tree;
                    self.enter(v, Some(eid));
                    stack.push(Frame { vertex: v, parent_edge: Some(eid), next: 0 });
                } else {
                    if self.edge_labels[eid] == DfsEdgeLabel::Unvisited {
                        self.edge_labels[eid] = DfsEdgeLabel::Back;
                    }
                    self.low[u] = self.low[u].min(self.discovery[v]);
                }
                continue;
            }

            // all neighbours of u are done, hand its low-link to the parent
            let parent_edge = frame.parent_edge;
            stack.pop();
            if let (Some(eid), Some(parent)) = (parent_edge, stack.last()) {
                let p = parent.vertex;
                self.low[p] = self.low[p].min(self.low[u]);
                if self.low[u] > self.discovery[p] {
                    self.bridges.push((eid, p, u));
                }
            }
        }
    }

    /// Vertices reached by the traversal, in increasing id order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.visited.ones().map(|v| v as Vertex)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn discovery(&self, v: Vertex) -> Option<usize> {
        self.discovery.get(v as usize).copied().filter(|&d| d != usize::MAX)
    }

    pub fn low(&self, v: Vertex) -> Option<usize> {
        self.low.get(v as usize).copied().filter(|&l| l != usize::MAX)
    }

    /// Edge id of the tree edge leading into `v`, `None` for roots and unvisited vertices.
    pub fn parent_edge(&self, v: Vertex) -> Option<usize> {
        self.parent_edge.get(v as usize).copied().flatten()
    }

    pub fn edge_label(&self, eid: usize) -> DfsEdgeLabel {
        self.edge_labels[eid]
    }

    /// Edge ids of all bridges, ordered by discovery time of their tree edge.
    pub fn bridge_ids(&self) -> Vec<usize> {
        let mut found = self.bridges.clone();
        sort_by_key(&mut found, |&(_, _, child)| self.discovery[child]);
        found.into_iter().map(|(eid, _, _)| eid).collect()
    }

    /// Bridges as `(dfs parent, dfs child)` pairs, ordered by discovery time of their tree edge.
    pub fn bridges(&self) -> Vec<Edge> {
        let mut found = self.bridges.clone();
        sort_by_key(&mut found, |&(_, _, child)| self.discovery[child]);
        found
            .into_iter()
            .map(|(_, p, c)| (p as Vertex, c as Vertex))
            .collect()
    }

    /// Counts connected components after cutting every bridge.
    ///
    /// Only vertices with at least one incident edge are counted.
    pub fn count_components(&self) -> usize {
        let mut cut = FixedBitSet::with_capacity(self.edges.len());
        for &(eid, _, _) in &self.bridges {
            cut.insert(eid);
        }

        let mut seen = FixedBitSet::with_capacity(self.adj.len());
        let mut stack = Vec::new();
        let mut count = 0;
        for s in 1..self.adj.len() {
            if self.adj[s].is_empty() || seen.contains(s) {
                continue;
            }
            count += 1;
            seen.insert(s);
            stack.push(s);
            while let Some(u) = stack.pop() {
                for &(w, eid) in &self.adj[u] {
                    if !seen.contains(w) && !cut.contains(eid) {
                        seen.insert(w);
                        stack.push(w);
                    }
                }
            }
        }
        count
    }
}

/// Runs the low-link DFS over the graph on vertices `1..=n`.
///
/// Roots are tried in increasing id order, isolated vertices are never visited.
/// Fails with [`Error::VertexOutOfRange`] when an endpoint is 0 or above `n`.
pub fn low_link_tree(n: usize, edges: &[Edge]) -> Result<LowLinkTree> {
    let adj = build_adjacency(n, edges)?;
    let mut tree = LowLinkTree::new(n, edges, adj);
    for root in 1..=n {
        if !tree.visited.contains(root) && !tree.adj[root].is_empty() {
            tree.dfs(root);
        }
    }
    Ok(tree)
}

/// Bridges of a graph and the number of its biconnected components.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BridgeAnalysis {
    /// Bridges as `(dfs parent, dfs child)`, ordered by discovery of their tree edge.
    pub bridges: Vec<Edge>,
    /// Components left after removing all bridges.
    pub bcc_count: usize,
}

/// Finds every bridge of the graph on vertices `1..=n` and counts its biconnected
/// components.
///
/// A component here is a connected component of the graph with all bridges
/// removed, so a single edge that is a bridge leaves two components behind.
/// Vertices without any incident edge are not part of the graph and do not add to
/// the count.
///
/// Parallel edges are allowed. Two parallel edges between the same vertices are
/// never bridges.
pub fn analyze(n: usize, edges: &[Edge]) -> Result<BridgeAnalysis> {
    let tree = low_link_tree(n, edges)?;
    let analysis = BridgeAnalysis { bridges: tree.bridges(), bcc_count: tree.count_components() };

    debug!(
        vertices = n,
        edges = edges.len(),
        bridges = analysis.bridges.len(),
        bcc_count = analysis.bcc_count,
        "analyzed graph"
    );

    Ok(analysis)
}
