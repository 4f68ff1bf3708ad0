use std::ops::RangeInclusive;
use std::str::FromStr;

use hashbrown::HashSet;
use rand::Rng;
use rand::seq::index;
use tracing::debug;

use crate::allocator::VertexAllocator;
use crate::error::{Error, Result};
use crate::types::{Edge, Vertex, normalized};

/// Cap on the number of edges a dense block grows to.
pub const MAX_DENSE_EDGES: usize = 20;

/// Density used when a dense block does not specify one.
pub const DEFAULT_DENSITY: f64 = 0.7;

/// Shape of a single synthesized block.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum BlockShape {
    Complete,
    Cycle,
    Dense,
}

impl BlockShape {
    pub const ALL: [BlockShape; 3] = [BlockShape::Complete, BlockShape::Cycle, BlockShape::Dense];

    pub fn name(&self) -> &'static str {
        match self {
            BlockShape::Complete => "complete",
            BlockShape::Cycle => "cycle",
            BlockShape::Dense => "dense",
        }
    }

    /// Smallest block size the shape accepts.
    pub fn min_size(&self) -> usize {
        match self {
            BlockShape::Complete | BlockShape::Dense => 1,
            BlockShape::Cycle => 3,
        }
    }
}

impl std::fmt::Display for BlockShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BlockShape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "complete" => Ok(BlockShape::Complete),
            "cycle" => Ok(BlockShape::Cycle),
            "dense" => Ok(BlockShape::Dense),
            _ => Err(Error::UnknownShape(s.to_string())),
        }
    }
}

/// Request for one block: shape, number of vertices and (for dense blocks) density.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BlockSpec {
    pub shape: BlockShape,
    pub size: usize,
    pub density: f64,
}

impl BlockSpec {
    pub fn complete(size: usize) -> Self {
        Self { shape: BlockShape::Complete, size, density: 1.0 }
    }

    pub fn cycle(size: usize) -> Self {
        Self { shape: BlockShape::Cycle, size, density: 1.0 }
    }

    pub fn dense(size: usize, density: f64) -> Self {
        Self { shape: BlockShape::Dense, size, density }
    }
}

/// A synthesized block together with its vertex range and designated bridge vertex.
#[derive(Clone, Debug)]
pub struct Block {
    pub shape: BlockShape,
    pub edges: Vec<Edge>,
    pub vertices: RangeInclusive<Vertex>,
    pub bridge_vertex: Vertex,
}

/// Checks a block size against its shape and the id space left after `first`.
///
/// Returns the size as a [`Vertex`], so callers never narrow it themselves.
fn check_size(shape: &'static str, min: usize, first: Vertex, size: usize) -> Result<Vertex> {
    // ids first..first + size must stay representable
    let max = (Vertex::MAX - first) as usize;
    match Vertex::try_from(size) {
        Ok(n) if size >= min && size <= max => Ok(n),
        _ => Err(Error::InvalidSize { shape, size, min, max }),
    }
}

fn check_block_size(shape: BlockShape, first: Vertex, size: usize) -> Result<Vertex> {
    check_size(shape.name(), shape.min_size(), first, size)
}

fn check_density(density: f64) -> Result<()> {
    // NaN falls outside of the range as well
    if !(0.0..=1.0).contains(&density) {
        return Err(Error::InvalidDensity(density));
    }
    Ok(())
}

/// All pairs `(a, b)` with `a < b` over `first..first + n`, in lexicographic order.
fn all_pairs(first: Vertex, n: Vertex) -> impl Iterator<Item = Edge> {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| (first + i, first + j)))
}

/// Complete graph on `n` consecutive vertices starting at `first`.
pub fn complete_edges(first: Vertex, n: usize) -> Result<Vec<Edge>> {
    let n = check_block_size(BlockShape::Complete, first, n)?;
    Ok(all_pairs(first, n).collect())
}

/// Simple cycle `first -> first + 1 -> ... -> first + n - 1 -> first`.
pub fn cycle_edges(first: Vertex, n: usize) -> Result<Vec<Edge>> {
    let n = check_block_size(BlockShape::Cycle, first, n)?;
    Ok((0..n).map(|i| (first + i, first + (i + 1) % n)).collect())
}

/// Random connected graph on `n` consecutive vertices starting at `first`.
///
/// A random spanning tree comes first: every step attaches a uniformly chosen
/// unconnected vertex to a uniformly chosen connected one. Then extra non-tree
/// pairs are sampled without replacement until the block has
/// `min(MAX_DENSE_EDGES, floor(n(n-1)/2 * density))` edges. The tree is never cut
/// down, so blocks with more than `MAX_DENSE_EDGES + 1` vertices keep `n - 1` edges.
pub fn dense_edges<R: Rng + ?Sized>(
    first: Vertex,
    n: usize,
    density: f64,
    rng: &mut R,
) -> Result<Vec<Edge>> {
    check_density(density)?;
    let size = check_block_size(BlockShape::Dense, first, n)?;

    let max_edges = n * (n - 1) / 2;
    let target = MAX_DENSE_EDGES.min((max_edges as f64 * density).floor() as usize);

    let mut edges = Vec::with_capacity(target.max(n - 1));
    let mut connected = vec![first];
    let mut available: Vec<Vertex> = (1..size).map(|i| first + i).collect();
    while !available.is_empty() {
        let u = connected[rng.random_range(0..connected.len())];
        let v = available.remove(rng.random_range(0..available.len()));
        edges.push((u, v));
        connected.push(v);
    }

    let tree: HashSet<Edge> = edges.iter().map(|&e| normalized(e)).collect();
    let candidates: Vec<Edge> = all_pairs(first, size).filter(|e| !tree.contains(e)).collect();
    let extra = target.saturating_sub(edges.len()).min(candidates.len());
    if extra > 0 {
        edges.extend(index::sample(rng, candidates.len(), extra).into_iter().map(|i| candidates[i]));
    }

    Ok(edges)
}

/// Path `1 - 2 - ... - n + 1` made of `n` edges.
pub fn path_edges(n: usize) -> Result<Vec<Edge>> {
    let n = check_size("path", 1, 1, n)?;
    Ok((1..=n).map(|i| (i, i + 1)).collect())
}

/// Picks `count` random block requests, sized so that every block stays small.
///
/// Complete blocks stay within `MAX_DENSE_EDGES` edges, cycles take 3 to 15
/// vertices and dense blocks 4 to 10 at [`DEFAULT_DENSITY`].
pub fn random_block_specs<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<BlockSpec> {
    // largest n with n(n-1)/2 <= MAX_DENSE_EDGES
    let max_complete = ((1.0 + (1.0 + 8.0 * MAX_DENSE_EDGES as f64).sqrt()) / 2.0) as usize;

    (0..count)
        .map(|_| match BlockShape::ALL[rng.random_range(0..BlockShape::ALL.len())] {
            BlockShape::Complete => BlockSpec::complete(rng.random_range(3..=max_complete.min(8))),
            BlockShape::Cycle => BlockSpec::cycle(rng.random_range(3..=15)),
            BlockShape::Dense => BlockSpec::dense(rng.random_range(4..=10), DEFAULT_DENSITY),
        })
        .collect()
}

/// Generates blocks over disjoint vertex ranges.
///
/// The synthesizer owns the vertex allocator and the random source, so a
/// seeded `R` makes every block and bridge vertex reproducible.
pub struct BlockSynthesizer<R: Rng> {
    allocator: VertexAllocator,
    rng: R,
}

impl<R: Rng> BlockSynthesizer<R> {
    pub fn new(rng: R) -> Self {
        Self { allocator: VertexAllocator::new(), rng }
    }

    pub fn allocator(&self) -> &VertexAllocator {
        &self.allocator
    }

    pub(crate) fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Complete graph over the next `n` free ids. Does not reserve them.
    pub fn generate_complete(&self, n: usize) -> Result<Vec<Edge>> {
        complete_edges(self.allocator.next_free(), n)
    }

    /// Cycle over the next `n` free ids. Does not reserve them.
    pub fn generate_cycle(&self, n: usize) -> Result<Vec<Edge>> {
        cycle_edges(self.allocator.next_free(), n)
    }

    /// Dense random block over the next `n` free ids. Does not reserve them.
    pub fn generate_dense(&mut self, n: usize, density: f64) -> Result<Vec<Edge>> {
        dense_edges(self.allocator.next_free(), n, density, &mut self.rng)
    }

    /// Generates one block, picks its bridge vertex and reserves its ids.
    ///
    /// Nothing is reserved when the request is rejected.
    pub fn allocate_block(&mut self, spec: &BlockSpec) -> Result<Block> {
        let edges = match spec.shape {
            BlockShape::Complete => self.generate_complete(spec.size)?,
            BlockShape::Cycle => self.generate_cycle(spec.size)?,
            BlockShape::Dense => self.generate_dense(spec.size, spec.density)?,
        };

        let vertices = self.allocator.reserve(spec.size).ok_or(Error::InvalidSize {
            shape: spec.shape.name(),
            size: spec.size,
            min: spec.shape.min_size(),
            max: (Vertex::MAX - self.allocator.next_free()) as usize,
        })?;
        let bridge_vertex = self.rng.random_range(vertices.clone());

        debug!(
            shape = %spec.shape,
            size = spec.size,
            edges = edges.len(),
            bridge_vertex,
            "allocated block"
        );

        Ok(Block { shape: spec.shape, edges, vertices, bridge_vertex })
    }
}
