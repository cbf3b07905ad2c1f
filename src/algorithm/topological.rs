use std::collections::VecDeque;
use std::fmt::Debug;
use num_traits::Zero;

use crate::graph::Graph;
use crate::{Error, Result};

/// Orders all vertices so that every edge points forward, using Kahn's algorithm
///
/// Zero in-degree vertices are seeded in ascending index order and processed
/// FIFO, so the order is deterministic for a given graph. Fails with
/// `CycleDetected` if some vertices can never reach zero in-degree.
pub fn topological_order<W, G>(graph: &G) -> Result<Vec<usize>>
where
    W: Zero + Debug + Copy,
    G: Graph<W>,
{
    let n = graph.vertex_count();

    let mut in_degree = vec![0usize; n];
    for from in 0..n {
        for (to, _) in graph.outgoing_edges(from) {
            in_degree[to] += 1;
        }
    }

    let mut queue: VecDeque<usize> = (0..n).filter(|&v| in_degree[v] == 0).collect();
    let mut order = Vec::with_capacity(n);

    while let Some(u) = queue.pop_front() {
        order.push(u);
        for (v, _) in graph.outgoing_edges(u) {
            in_degree[v] -= 1;
            if in_degree[v] == 0 {
                queue.push_back(v);
            }
        }
    }

    if order.len() != n {
        log::debug!("Kahn ordering stopped after {} of {} vertices", order.len(), n);
        return Err(Error::CycleDetected {
            sorted: order.len(),
            vertex_count: n,
        });
    }

    Ok(order)
}

/// Returns true if `order` is a permutation of the graph's vertices with every edge pointing forward
pub fn is_topological_order<W, G>(graph: &G, order: &[usize]) -> bool
where
    W: Zero + Debug + Copy,
    G: Graph<W>,
{
    let n = graph.vertex_count();
    if order.len() != n {
        return false;
    }

    let mut position = vec![usize::MAX; n];
    for (i, &v) in order.iter().enumerate() {
        if v >= n || position[v] != usize::MAX {
            return false;
        }
        position[v] = i;
    }

    (0..n).all(|u| graph.outgoing_edges(u).all(|(v, _)| position[u] < position[v]))
}
