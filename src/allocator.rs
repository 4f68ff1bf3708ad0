use std::ops::RangeInclusive;

use crate::types::Vertex;

/// Hands out contiguous, never reused ranges of vertex ids.
///
/// Every block of one generation run draws from the same allocator, so two
/// blocks never share a vertex. Numbering starts at 1.
#[derive(Debug, Clone)]
pub struct VertexAllocator {
    next: Vertex,
}

impl Default for VertexAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// First id the next reservation will receive.
    pub fn next_free(&self) -> Vertex {
        self.next
    }

    /// Number of ids handed out so far.
    pub fn allocated(&self) -> usize {
        (self.next - 1) as usize
    }

    /// Reserves `n` consecutive ids and returns them.
    ///
    /// Returns `None` and reserves nothing if the ids would run past `Vertex::MAX`.
    pub fn reserve(&mut self, n: usize) -> Option<RangeInclusive<Vertex>> {
        let start = self.next;
        self.next = Vertex::try_from(n).ok().and_then(|n| start.checked_add(n))?;
        Some(start..=self.next - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reservations_are_disjoint() {
        let mut alloc = VertexAllocator::new();
        assert_eq!(alloc.reserve(4), Some(1..=4));
        assert_eq!(alloc.reserve(3), Some(5..=7));
        assert_eq!(alloc.next_free(), 8);
        assert_eq!(alloc.allocated(), 7);
    }

    #[test]
    fn test_empty_reservation() {
        let mut alloc = VertexAllocator::new();
        let range = alloc.reserve(0).unwrap();
        assert!(range.is_empty());
        assert_eq!(alloc.next_free(), 1);
    }

    #[test]
    fn test_reservation_past_id_space_is_refused() {
        let mut alloc = VertexAllocator::new();
        assert_eq!(alloc.reserve(Vertex::MAX as usize), None);
        assert_eq!(alloc.reserve((1usize << 32) + 3), None);
        assert_eq!(alloc.next_free(), 1);
        assert_eq!(alloc.reserve(Vertex::MAX as usize - 1), Some(1..=Vertex::MAX - 1));
    }
}
