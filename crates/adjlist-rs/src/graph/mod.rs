use std::iter::FusedIterator;

use crate::GraphError;

pub mod adjacency_list;

/// Bounded counter over the vertex ids `min..max`, produced on demand.
///
/// Nothing is materialized; restarting enumeration means constructing a new
/// range, which is what [`crate::Graph::vertices`] does on every call.
#[derive(Debug, Clone)]
pub struct VertexRange {
    next: usize,
    max: usize,
}

impl VertexRange {
    /// Create a range over `min..max`.
    ///
    /// Fails with [`GraphError::InvalidRange`] if `min > max`. `min == max`
    /// is a valid, empty range.
    pub fn new(min: usize, max: usize) -> Result<VertexRange, GraphError> {
        if min > max {
            return Err(GraphError::InvalidRange { min, max });
        }

        Ok(Self { next: min, max })
    }

    // 0 <= max always holds, so the guard of `new` can never fire here.
    pub(crate) fn from_count(vertex_count: usize) -> VertexRange {
        Self {
            next: 0,
            max: vertex_count,
        }
    }
}

impl Iterator for VertexRange {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.next >= self.max {
            return None;
        }

        let value = self.next;
        self.next += 1;

        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.max - self.next;

        (remaining, Some(remaining))
    }
}

impl FusedIterator for VertexRange {}
