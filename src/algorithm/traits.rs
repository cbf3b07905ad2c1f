use std::fmt::Debug;
use num_traits::{CheckedAdd, Zero};
use serde::Serialize;

use crate::graph::Graph;
use crate::Result;

/// Edge weight usable by the longest path engine
///
/// Zero doubles as "no edge"; addition must be checked so overflow is reported.
pub trait Weight: Copy + Ord + Debug + Zero + CheckedAdd {}

impl<T> Weight for T where T: Copy + Ord + Debug + Zero + CheckedAdd {}

/// Result of a longest path computation between `source` and `target`
///
/// Built once at the end of a computation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LongestPathResult<W>
where
    W: Weight,
{
    /// Number of vertices in the graph
    pub vertex_count: usize,

    /// Source vertex ID
    pub source: usize,

    /// Target vertex ID
    pub target: usize,

    /// Topological order used for the relaxation pass
    pub topological_order: Vec<usize>,

    /// Best distance from source to each vertex, `None` if unreachable
    pub distances: Vec<Option<W>>,

    /// First predecessor discovered on a best path to each vertex
    pub predecessors: Vec<Option<usize>>,

    /// Every predecessor achieving the best distance, in discovery order
    pub predecessor_sets: Vec<Vec<usize>>,

    /// Weight of the longest path to target, `None` if there is no path
    pub total_weight: Option<W>,

    /// One optimal path from source to target (empty if unreachable)
    pub path: Vec<usize>,

    /// All tied optimal paths from source to target (empty if unreachable)
    pub all_paths: Vec<Vec<usize>>,

    /// Number of tied optimal paths, saturating at `u128::MAX`
    pub optimal_path_count: u128,
}

impl<W> LongestPathResult<W>
where
    W: Weight,
{
    /// Returns true if the target can be reached from the source
    pub fn is_reachable(&self) -> bool {
        self.total_weight.is_some()
    }

    /// Sums the edge weights along `path`
    ///
    /// Returns `None` if a hop is not an edge of `graph` or the sum overflows.
    /// A single-vertex path weighs zero.
    pub fn path_weight<G: Graph<W>>(graph: &G, path: &[usize]) -> Option<W> {
        path.windows(2).try_fold(W::zero(), |acc, hop| {
            acc.checked_add(&graph.get_edge_weight(hop[0], hop[1])?)
        })
    }
}

/// Trait for longest path algorithms on DAGs
pub trait LongestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute the longest path from `source` to `target` along with all ties
    fn compute_longest_path(&self, graph: &G, source: usize, target: usize) -> Result<LongestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the witness path from source to any vertex as a sequence of vertices
    ///
    /// Follows the single predecessor pointers, so this is the same path that
    /// `result.path` holds when `vertex` is the target.
    fn get_path(&self, result: &LongestPathResult<W>, vertex: usize) -> Option<Vec<usize>> {
        if vertex >= result.vertex_count || result.distances[vertex].is_none() {
            return None;
        }

        let mut path = vec![vertex];
        let mut current = vertex;
        while current != result.source {
            current = result.predecessors[current]?;
            path.push(current);

            // A valid predecessor chain is never longer than the vertex count
            if path.len() > result.vertex_count {
                log::warn!("Predecessor chain from {} does not reach source {}", vertex, result.source);
                return None;
            }
        }

        path.reverse();
        Some(path)
    }
}
