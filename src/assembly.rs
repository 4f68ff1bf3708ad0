use rand::Rng;
use tracing::{debug, info};

use crate::error::Result;
use crate::synthesis::{Block, BlockShape, BlockSpec, BlockSynthesizer};
use crate::types::{Edge, Vertex};

/// Links bridge vertices into a random spanning tree.
///
/// The tree grows from the first vertex: every step joins a uniformly chosen
/// vertex that is already in the tree with a uniformly chosen one that is not.
/// Returns `len - 1` edges, none for zero or one vertex.
pub fn link_bridge_vertices<R: Rng + ?Sized>(bridge_vertices: &[Vertex], rng: &mut R) -> Vec<Edge> {
    let Some((&first, rest)) = bridge_vertices.split_first() else {
        return Vec::new();
    };

    let mut connected = vec![first];
    let mut available = rest.to_vec();
    let mut links = Vec::with_capacity(available.len());
    while !available.is_empty() {
        let u = connected[rng.random_range(0..connected.len())];
        let v = available.remove(rng.random_range(0..available.len()));
        debug!(u, v, "linking blocks");
        links.push((u, v));
        connected.push(v);
    }
    links
}

/// Joins blocks into one graph whose block-cut tree is a tree over the blocks.
///
/// The result lists all block edges in block order, followed by the linking
/// edges. Blocks are left untouched, so when each of them is 2-edge-connected the
/// graph has exactly `blocks.len()` biconnected components.
pub fn assemble_tree<R: Rng + ?Sized>(blocks: &[Block], rng: &mut R) -> Vec<Edge> {
    let bridge_vertices: Vec<Vertex> = blocks.iter().map(|b| b.bridge_vertex).collect();
    let mut edges: Vec<Edge> = blocks.iter().flat_map(|b| b.edges.iter().copied()).collect();
    edges.extend(link_bridge_vertices(&bridge_vertices, rng));
    edges
}

/// Summary of a block inside an assembled graph.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockSummary {
    pub shape: BlockShape,
    pub size: usize,
    pub edge_count: usize,
    pub bridge_vertex: Vertex,
}

impl From<&Block> for BlockSummary {
    fn from(block: &Block) -> Self {
        Self {
            shape: block.shape,
            size: block.vertices.clone().count(),
            edge_count: block.edges.len(),
            bridge_vertex: block.bridge_vertex,
        }
    }
}

/// A generated graph made of blocks joined into a tree.
#[derive(Clone, Debug)]
pub struct AssembledGraph {
    pub edges: Vec<Edge>,
    pub blocks: Vec<BlockSummary>,
    /// Edges added between bridge vertices, also present at the end of `edges`.
    pub links: Vec<Edge>,
    pub vertex_count: usize,
}

impl<R: Rng> BlockSynthesizer<R> {
    /// Allocates every requested block in order and joins them into a tree.
    pub fn generate_tree(&mut self, specs: &[BlockSpec]) -> Result<AssembledGraph> {
        let blocks = specs
            .iter()
            .map(|spec| self.allocate_block(spec))
            .collect::<Result<Vec<_>>>()?;

        let edges = assemble_tree(&blocks, self.rng_mut());
        let block_edges: usize = blocks.iter().map(|b| b.edges.len()).sum();
        let links = edges[block_edges..].to_vec();
        let vertex_count = self.allocator().allocated();

        info!(
            blocks = blocks.len(),
            vertices = vertex_count,
            edges = edges.len(),
            "generated block tree"
        );

        Ok(AssembledGraph {
            edges,
            blocks: blocks.iter().map(BlockSummary::from).collect(),
            links,
            vertex_count,
        })
    }
}
