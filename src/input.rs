use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::{Edge, Vertex, max_vertex};

/// Reads an edge list from a file.
///
/// Undirected graph input:
/// - one line, one edge in format "u v",
/// - vertex ids are non-negative integers, generated graphs number them from 1,
/// - blank lines are skipped.
///
/// <div class="warning">
///
/// > Any other line, e.g. `1 2 3`, `1,2` or `a b`, fails with [`Error::MalformedEdgeLine`].
///
/// </div>
///
/// Example input:
/// ```text
/// 1 2
/// 2 3
/// 3 1
/// 3 4
/// 4 5
/// ```
pub fn from_file(path: impl AsRef<Path>) -> Result<Vec<Edge>> {
    let file = File::open(path)?;
    parse_edges(BufReader::new(file))
}

/// This is equivalent to [`from_file`], but takes string as an input.
pub fn from_str(input: &str) -> Result<Vec<Edge>> {
    parse_edges(BufReader::new(Cursor::new(input)))
}

/// Reads an edge list and the vertex count implied by its largest endpoint.
pub fn graph_from_file(path: impl AsRef<Path>) -> Result<(usize, Vec<Edge>)> {
    let edges = from_file(path)?;
    Ok((max_vertex(&edges), edges))
}

/// Parses one edge line; `None` for a line that is blank after trimming.
pub fn parse_edge_line(line: &str, line_number: usize) -> Result<Option<Edge>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let malformed = || Error::MalformedEdgeLine { line_number, line: line.to_string() };
    let mut parts = line.split_whitespace();
    let (Some(u), Some(v), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };
    let u: Vertex = u.parse().map_err(|_| malformed())?;
    let v: Vertex = v.parse().map_err(|_| malformed())?;
    Ok(Some((u, v)))
}

fn parse_edges<R: BufRead>(reader: R) -> Result<Vec<Edge>> {
    let mut edges = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        if let Some(edge) = parse_edge_line(&line?, i + 1)? {
            edges.push(edge);
        }
    }
    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let edges = from_str("1 2\n2 3\n\n  3   1 \n").unwrap();
        assert_eq!(edges, vec![(1, 2), (2, 3), (3, 1)]);
    }

    #[test]
    fn test_empty_input() {
        assert!(from_str("").unwrap().is_empty());
        assert!(from_str("\n\n").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_lines() {
        for (input, bad_line) in [
            ("1 2\n1 2 3\n", 2),
            ("1,2\n", 1),
            ("a b\n", 1),
            ("1 2\n\n7\n", 3),
            ("1 -2\n", 1),
        ] {
            match from_str(input) {
                Err(Error::MalformedEdgeLine { line_number, .. }) => assert_eq!(line_number, bad_line),
                other => panic!("expected malformed line for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(from_file("/definitely/not/here.txt"), Err(Error::Io(_))));
    }
}
