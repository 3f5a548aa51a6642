use std::collections::VecDeque;

use log::info;

use crate::{Graph, GraphError, graph::VertexRange};

/// Undirected graph over the fixed vertex set `0..vertex_count`, stored as
/// one neighbor list per vertex.
///
/// The vertex count is set at construction and never changes; the structure
/// is append-only. [`Graph::add_edge`] prepends, so neighbor iteration runs
/// most-recent-first. Duplicate edges and self-loops are stored exactly as
/// given: inserting the same edge twice leaves two entries in each affected
/// list, and `add_edge(u, u)` puts `u` into its own list twice in one call.
/// Callers that need a simple graph have to deduplicate themselves.
///
/// There is no internal synchronization. Mutating a shared graph from
/// several threads requires external locking by the caller.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyListGraph {
    lists: Vec<VecDeque<usize>>,
    edge_count: usize,
}

impl AdjacencyListGraph {
    /// Construct a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> AdjacencyListGraph {
        let g = Self {
            lists: vec![VecDeque::new(); vertex_count],
            edge_count: 0,
        };

        info!(
            "Created adjacency-list graph (vertex_count: {:?})",
            g.vertex_count()
        );

        g
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex >= self.lists.len() {
            return Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.lists.len(),
            });
        }

        Ok(())
    }

    /// Whether `v` occurs in `u`'s neighbor list.
    ///
    /// Scans exactly the list of `u`, in O(degree(u)). Symmetry
    /// (`has_edge(u, v) == has_edge(v, u)`) holds for every graph built
    /// through [`Graph::add_edge`] but is never assumed here, so a violated
    /// invariant stays observable from both directions.
    pub fn has_edge(&self, u: usize, v: usize) -> Result<bool, GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        Ok(self.lists[u].contains(&v))
    }

    /// Number of entries in `u`'s neighbor list, duplicates included.
    pub fn degree(&self, u: usize) -> Result<usize, GraphError> {
        self.check_vertex(u)?;

        Ok(self.lists[u].len())
    }

    /// Number of edges inserted so far. A self-loop counts as one edge.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl Graph for AdjacencyListGraph {
    fn vertex_count(&self) -> usize {
        self.lists.len()
    }

    fn add_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        self.lists[u].push_front(v);
        self.lists[v].push_front(u);
        self.edge_count += 1;

        Ok(())
    }

    fn adjacent<'a>(&'a self, u: usize) -> Result<impl Iterator<Item = usize> + 'a, GraphError> {
        self.check_vertex(u)?;

        Ok(self.lists[u].iter().copied())
    }

    fn vertices(&self) -> impl Iterator<Item = usize> {
        VertexRange::from_count(self.lists.len())
    }
}
