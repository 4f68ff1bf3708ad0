use thiserror::Error;

use crate::types::Vertex;

/// Every failure the synthesis, analysis and I/O layers can report.
///
/// Generators never clamp a bad request into a valid one: a size or density that
/// violates the shape's preconditions is returned as an error instead of a graph.
#[derive(Error, Debug)]
pub enum Error {
    /// Requested block size is below the minimum of its shape or does not fit
    /// into the vertex ids left.
    #[error("{shape} block needs {min} to {max} vertices, got {size}")]
    InvalidSize {
        shape: &'static str,
        size: usize,
        min: usize,
        max: usize,
    },

    /// Density must be a finite number in `[0, 1]`.
    #[error("density {0} is outside of [0, 1]")]
    InvalidDensity(f64),

    #[error("unknown block shape '{0}', expected one of: complete, cycle, dense")]
    UnknownShape(String),

    /// A line of an edge list that is not exactly two integer tokens.
    #[error("line {line_number}: expected 'u v', got '{line}'")]
    MalformedEdgeLine { line_number: usize, line: String },

    /// Bridge reduction ran out of bridges before reaching the target count.
    #[error("ran out of bridges at {reached} components, target was {target}")]
    TargetUnreachable { target: usize, reached: usize },

    #[error("vertex {vertex} is outside of 1..={vertex_count}")]
    VertexOutOfRange { vertex: Vertex, vertex_count: usize },

    #[error("shifting vertex {vertex} by {delta} leaves the vertex id range")]
    InvalidShift { vertex: Vertex, delta: i64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
