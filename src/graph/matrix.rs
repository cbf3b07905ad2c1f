use crate::graph::traits::Graph;
use crate::{Error, Result};
use num_traits::Zero;
use std::fmt::Debug;

/// A dense directed graph stored as a row-major adjacency matrix
///
/// Entry `(u, v)` is the weight of edge `u -> v`; zero means there is no edge,
/// so zero-weight edges and self-loops of weight zero cannot be expressed.
/// The matrix is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix<W>
where
    W: Zero + Debug + Copy,
{
    /// Number of vertices in the graph
    vertex_count: usize,

    /// `vertex_count * vertex_count` weights, row by row
    weights: Vec<W>,
}

impl<W> AdjacencyMatrix<W>
where
    W: Zero + Debug + Copy,
{
    /// Builds a graph from square matrix rows
    ///
    /// The vertex count is the number of rows; every row must have exactly
    /// that many columns.
    pub fn from_rows(rows: Vec<Vec<W>>) -> Result<Self> {
        let vertex_count = rows.len();
        if vertex_count == 0 {
            return Err(Error::EmptyGraph);
        }

        let mut weights = reserve_weights(vertex_count)?;
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != vertex_count {
                return Err(Error::DimensionMismatch {
                    row,
                    expected: vertex_count,
                    found: values.len(),
                });
            }
            weights.extend(values);
        }

        Ok(AdjacencyMatrix {
            vertex_count,
            weights,
        })
    }

    /// Builds a graph with `vertex_count` vertices from an edge list
    ///
    /// Later duplicates overwrite earlier ones. A zero weight leaves the pair unconnected.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize, W)]) -> Result<Self> {
        if vertex_count == 0 {
            return Err(Error::EmptyGraph);
        }

        let mut weights = reserve_weights(vertex_count)?;
        weights.resize(vertex_count * vertex_count, W::zero());
        for &(from, to, weight) in edges {
            for index in [from, to] {
                if index >= vertex_count {
                    return Err(Error::IndexOutOfRange {
                        index,
                        vertex_count,
                    });
                }
            }
            weights[from * vertex_count + to] = weight;
        }

        Ok(AdjacencyMatrix {
            vertex_count,
            weights,
        })
    }

    /// Returns the raw weights of one row (zero = no edge)
    pub fn row(&self, vertex: usize) -> &[W] {
        let start = vertex * self.vertex_count;
        &self.weights[start..start + self.vertex_count]
    }

    /// Iterates over all rows in vertex order
    pub fn rows(&self) -> impl Iterator<Item = &[W]> + '_ {
        self.weights.chunks(self.vertex_count)
    }

    /// Returns the raw matrix entry for `(from, to)`, zero included
    pub fn weight(&self, from: usize, to: usize) -> W {
        self.weights[from * self.vertex_count + to]
    }
}

/// Empty buffer with room for a `vertex_count x vertex_count` matrix
///
/// Fails with `GraphTooLarge` when the size overflows or cannot be allocated.
fn reserve_weights<W>(vertex_count: usize) -> Result<Vec<W>> {
    let too_large = || Error::GraphTooLarge { vertex_count };
    let len = vertex_count.checked_mul(vertex_count).ok_or_else(too_large)?;

    let mut weights = Vec::new();
    weights.try_reserve_exact(len).map_err(|_| too_large())?;
    Ok(weights)
}

impl<W> Graph<W> for AdjacencyMatrix<W>
where
    W: Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.weights.iter().filter(|w| !w.is_zero()).count()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if !self.has_vertex(vertex) {
            return Box::new(std::iter::empty());
        }
        Box::new(
            self.row(vertex)
                .iter()
                .enumerate()
                .filter(|(_, w)| !w.is_zero())
                .map(|(to, w)| (to, *w)),
        )
    }

    fn incoming_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if !self.has_vertex(vertex) {
            return Box::new(std::iter::empty());
        }
        Box::new(
            (0..self.vertex_count)
                .map(move |from| (from, self.weight(from, vertex)))
                .filter(|(_, w)| !w.is_zero()),
        )
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return None;
        }
        let weight = self.weight(from, to);
        if weight.is_zero() {
            None
        } else {
            Some(weight)
        }
    }
}
