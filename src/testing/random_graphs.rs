use crate::types::{Edge, Vertex};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Random connected multigraph on vertices `1..=n` with `m >= n - 1` edges.
///
/// A random tree comes first, the remaining edges join random distinct vertices
/// and may repeat existing ones.
pub fn random_graph(n: usize, m: usize, seed: u64) -> Vec<Edge> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::with_capacity(m);

    for i in 2..=n as Vertex {
        let j = rng.random_range(1..i);
        edges.push((i, j));
    }

    if n < 2 {
        return edges;
    }
    for _ in edges.len()..m {
        let s = rng.random_range(1..=n as Vertex);
        let mut t = rng.random_range(1..=n as Vertex);
        while t == s {
            t = rng.random_range(1..=n as Vertex);
        }
        edges.push((s, t));
    }

    edges
}

/// Random tree on vertices `1..=n`, every edge of which is a bridge.
pub fn random_tree(n: usize, seed: u64) -> Vec<Edge> {
    random_graph(n, n.saturating_sub(1), seed)
}
