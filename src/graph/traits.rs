use std::fmt::Debug;
use num_traits::Zero;

use crate::{Error, Result};

/// Trait representing a weighted directed graph over vertices `0..vertex_count()`
///
/// A zero weight is never reported as an edge.
pub trait Graph<W>: Debug
where
    W: Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex, in ascending target order
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns an iterator over the incoming edges to a vertex, in ascending source order
    fn incoming_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Fails with `IndexOutOfRange` unless the vertex exists in the graph
    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if self.has_vertex(vertex) {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index: vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W>;
}
