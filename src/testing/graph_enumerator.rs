use crate::types::{Edge, Vertex};

/// Enumerates every simple graph on vertices `1..=n` as an edge list.
///
/// Bit `k` of the mask switches on the `k`-th pair in lexicographic order.
pub struct GraphEnumeratorState {
    pub n: usize,
    pub mask: usize,
    pub last_mask: usize,
}

impl GraphEnumeratorState {
    /// Starts at the empty graph and stops after the complete one.
    pub fn new(n: usize) -> Self {
        let pairs = n * n.saturating_sub(1) / 2;
        Self { n, mask: 0, last_mask: 1 << pairs }
    }
}

impl Iterator for GraphEnumeratorState {
    type Item = Vec<Edge>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.mask == self.last_mask {
            return None;
        }

        let mut edges = Vec::new();
        let mut check = 0;
        for i in 1..=self.n as Vertex {
            for j in (i + 1)..=self.n as Vertex {
                if self.mask & (1 << check) != 0 {
                    edges.push((i, j));
                }
                check += 1;
            }
        }

        self.mask = self.mask.wrapping_add(1);
        Some(edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerates_all_graphs() {
        assert_eq!(GraphEnumeratorState::new(3).count(), 8);
        assert_eq!(GraphEnumeratorState::new(4).count(), 64);
        assert_eq!(GraphEnumeratorState::new(3).last(), Some(vec![(1, 2), (1, 3), (2, 3)]));
    }
}
