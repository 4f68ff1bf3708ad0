use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{Edge, Vertex};

fn shift_vertex(vertex: Vertex, delta: i64) -> Result<Vertex> {
    i64::from(vertex)
        .checked_add(delta)
        .and_then(|x| Vertex::try_from(x).ok())
        .ok_or(Error::InvalidShift { vertex, delta })
}

/// Adds `delta` to both endpoints of every edge, keeping edge order.
///
/// Fails if any shifted id would leave the `u32` range, nothing is returned in
/// that case.
pub fn shift_vertices(edges: &[Edge], delta: i64) -> Result<Vec<Edge>> {
    let shifted = edges
        .iter()
        .map(|&(u, v)| Ok((shift_vertex(u, delta)?, shift_vertex(v, delta)?)))
        .collect::<Result<Vec<_>>>()?;
    debug!(edges = shifted.len(), delta, "shifted vertex ids");
    Ok(shifted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input;
    use crate::output::to_edge_list_string;

    #[test]
    fn test_shift_twice_equals_shift_by_two() {
        let edges = vec![(0, 1), (1, 2), (2, 0)];
        let twice = shift_vertices(&shift_vertices(&edges, 1).unwrap(), 1).unwrap();
        assert_eq!(twice, shift_vertices(&edges, 2).unwrap());
        assert_eq!(twice, vec![(2, 3), (3, 4), (4, 2)]);
    }

    #[test]
    fn test_shift_and_back() {
        let edges = vec![(4, 1), (1, 9), (9, 4)];
        let back = shift_vertices(&shift_vertices(&edges, 1).unwrap(), -1).unwrap();
        assert_eq!(back, edges);
    }

    #[test]
    fn test_shift_below_zero_fails() {
        assert!(matches!(
            shift_vertices(&[(3, 0)], -1),
            Err(Error::InvalidShift { vertex: 0, delta: -1 })
        ));
        assert!(shift_vertices(&[(Vertex::MAX, 1)], 1).is_err());
        assert!(matches!(
            shift_vertices(&[(1, 2)], i64::MAX),
            Err(Error::InvalidShift { vertex: 1, delta: i64::MAX })
        ));
        assert!(shift_vertices(&[(1, 2)], i64::MIN).is_err());
    }

    #[test]
    fn test_zero_based_file_to_one_based() {
        let edges = input::from_str("0 1\n\n1 2\n").unwrap();
        let shifted = shift_vertices(&edges, 1).unwrap();
        assert_eq!(to_edge_list_string(&shifted), "1 2\n2 3\n");
    }
}
