use crate::graph::AdjacencyMatrix;
use crate::{Error, Result};
use rand::prelude::*;

/// Generates a random DAG with n vertices
///
/// Vertices are shuffled into a hidden rank order and each forward pair (by rank)
/// gets an edge with probability `edge_probability`, so the identity order is
/// usually not topological. Weights are drawn from `1..=max_weight`.
///
/// Fails with `InvalidParameter` unless `edge_probability` is in `[0, 1]` and
/// `max_weight` is positive.
pub fn generate_random_dag<R: Rng>(
    n: usize,
    edge_probability: f64,
    max_weight: i64,
    rng: &mut R,
) -> Result<AdjacencyMatrix<i64>> {
    check_max_weight(max_weight)?;
    // NaN fails this range check too
    if !(0.0..=1.0).contains(&edge_probability) {
        return Err(Error::InvalidParameter {
            name: "edge_probability",
            message: format!("{} is not in [0, 1]", edge_probability),
        });
    }

    let mut rank: Vec<usize> = (0..n).collect();
    rank.shuffle(rng);

    let mut edges = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_bool(edge_probability) {
                edges.push((rank[i], rank[j], rng.gen_range(1..=max_weight)));
            }
        }
    }

    AdjacencyMatrix::from_edges(n, &edges)
}

/// Generates a chain 0 -> 1 -> ... -> n-1 with a constant weight on every edge
pub fn generate_chain(n: usize, weight: i64) -> Result<AdjacencyMatrix<i64>> {
    let edges: Vec<_> = (1..n).map(|v| (v - 1, v, weight)).collect();
    AdjacencyMatrix::from_edges(n, &edges)
}

/// Generates `diamonds` unit-weight diamonds joined end to end
///
/// Diamond `i` spans vertices `3i..=3i+3`; the last vertex is `3 * diamonds`.
/// Every one of the `2^diamonds` paths from 0 to the last vertex is optimal.
pub fn generate_diamond_ladder(diamonds: usize) -> Result<AdjacencyMatrix<i64>> {
    let n = 3 * diamonds + 1;
    let mut edges = Vec::with_capacity(4 * diamonds);

    for i in 0..diamonds {
        let top = 3 * i;
        let (left, right, bottom) = (top + 1, top + 2, top + 3);
        edges.push((top, left, 1));
        edges.push((top, right, 1));
        edges.push((left, bottom, 1));
        edges.push((right, bottom, 1));
    }

    AdjacencyMatrix::from_edges(n, &edges)
}

/// Generates a layered DAG: every vertex of layer k links to every vertex of layer k+1
///
/// Vertex ids run layer by layer, `width` per layer. Weights are drawn from
/// `1..=max_weight`; a non-positive `max_weight` fails with `InvalidParameter`.
pub fn generate_layered<R: Rng>(
    layers: usize,
    width: usize,
    max_weight: i64,
    rng: &mut R,
) -> Result<AdjacencyMatrix<i64>> {
    check_max_weight(max_weight)?;
    let n = layers * width;
    let mut edges = Vec::new();

    for layer in 1..layers {
        for a in 0..width {
            for b in 0..width {
                let from = (layer - 1) * width + a;
                let to = layer * width + b;
                edges.push((from, to, rng.gen_range(1..=max_weight)));
            }
        }
    }

    AdjacencyMatrix::from_edges(n, &edges)
}

fn check_max_weight(max_weight: i64) -> Result<()> {
    if max_weight > 0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            name: "max_weight",
            message: format!("{} is not positive", max_weight),
        })
    }
}
