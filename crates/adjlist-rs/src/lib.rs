use std::{error::Error, fmt::Display};

pub mod graph;

pub use graph::VertexRange;
pub use graph::adjacency_list::AdjacencyListGraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    VertexOutOfRange { vertex: usize, vertex_count: usize },
    InvalidRange { min: usize, max: usize },
}

impl Error for GraphError {}

impl Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VertexOutOfRange {
                vertex,
                vertex_count,
            } => write!(
                f,
                "vertex {} is out of range for a graph with {} vertices",
                vertex, vertex_count
            ),
            Self::InvalidRange { min, max } => {
                write!(f, "invalid vertex range: min {} exceeds max {}", min, max)
            }
        }
    }
}

/// Operations every graph representation has to provide, independent of the
/// storage strategy. Vertices are the integers `0..vertex_count()`.
pub trait Graph {
    fn vertex_count(&self) -> usize;

    /// Insert an undirected edge between `u` and `v`.
    ///
    /// Fails with [`GraphError::VertexOutOfRange`] if either id is not a
    /// vertex of the graph; in that case no state is changed.
    fn add_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError>;

    /// Iterate over the vertices adjacent to `u`, most recently inserted
    /// edge first. A vertex without edges yields an empty iterator.
    fn adjacent<'a>(&'a self, u: usize) -> Result<impl Iterator<Item = usize> + 'a, GraphError>;

    /// Enumerate the vertex ids `0..vertex_count()` in ascending order.
    /// Every call hands out a fresh iterator.
    fn vertices(&self) -> impl Iterator<Item = usize>;
}
