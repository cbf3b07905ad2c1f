use crate::algorithm::paths::{count_optimal_paths, enumerate_optimal_paths};
use crate::algorithm::topological::{is_topological_order, topological_order};
use crate::algorithm::{LongestPathAlgorithm, LongestPathResult, Weight};
use crate::graph::Graph;
use crate::{Error, Result};

/// Longest path on a DAG by dynamic programming over a topological order
///
/// Besides the best distance to every vertex, the relaxation keeps the full
/// set of predecessors that tie for each best distance so that all optimal
/// paths to the target can be listed.
#[derive(Debug, Clone, Default)]
pub struct DagLongestPath {
    /// Upper bound on the number of tied paths to enumerate (None = unlimited)
    max_paths: Option<usize>,
}

impl DagLongestPath {
    /// Creates a new instance with unlimited path enumeration
    pub fn new() -> Self {
        DagLongestPath { max_paths: None }
    }

    /// Fail with `TooManyPaths` instead of enumerating more than `limit` tied paths
    pub fn with_max_paths(mut self, limit: usize) -> Self {
        self.max_paths = Some(limit);
        self
    }

    /// Returns the configured path limit
    pub fn max_paths(&self) -> Option<usize> {
        self.max_paths
    }

    /// Runs the relaxation pass and path reconstruction over a precomputed order
    ///
    /// `order` must be a topological order of `graph`, as returned by
    /// [`topological_order`]; anything else fails with `InvalidOrder`.
    pub fn longest_path_with_order<W, G>(
        &self,
        graph: &G,
        order: Vec<usize>,
        source: usize,
        target: usize,
    ) -> Result<LongestPathResult<W>>
    where
        W: Weight,
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        graph.check_vertex(source)?;
        graph.check_vertex(target)?;
        if !is_topological_order::<W, G>(graph, &order) {
            return Err(Error::InvalidOrder { vertex_count: n });
        }

        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut predecessor_sets: Vec<Vec<usize>> = vec![Vec::new(); n];
        distances[source] = Some(W::zero());

        for &u in &order {
            // Unreachable vertices cannot improve anything downstream
            let Some(dist_u) = distances[u] else {
                continue;
            };

            for (v, weight) in graph.outgoing_edges(u) {
                let candidate = dist_u
                    .checked_add(&weight)
                    .ok_or(Error::WeightOverflow { from: u, to: v })?;

                match distances[v] {
                    Some(current) if candidate < current => {}
                    Some(current) if candidate == current => {
                        log::trace!("Tie into {} from {} at {:?}", v, u, candidate);
                        predecessor_sets[v].push(u);
                    }
                    _ => {
                        log::trace!("Improved {} via {} to {:?}", v, u, candidate);
                        distances[v] = Some(candidate);
                        predecessors[v] = Some(u);
                        predecessor_sets[v].clear();
                        predecessor_sets[v].push(u);
                    }
                }
            }
        }

        let total_weight = distances[target];
        let (path, all_paths, optimal_path_count) = if total_weight.is_some() {
            let count = count_optimal_paths(&order, &predecessor_sets, source)[target];
            if let Some(limit) = self.max_paths {
                if count > limit as u128 {
                    return Err(Error::TooManyPaths { count, limit });
                }
            }

            let path = witness_path(&predecessors, source, target);
            let all_paths = enumerate_optimal_paths(&order, &predecessor_sets, source, target);
            log::debug!(
                "Longest path {} -> {} weighs {:?} with {} optimal path(s)",
                source,
                target,
                total_weight,
                all_paths.len()
            );
            (path, all_paths, count)
        } else {
            log::debug!("No path from {} to {}", source, target);
            (Vec::new(), Vec::new(), 0)
        };

        Ok(LongestPathResult {
            vertex_count: n,
            source,
            target,
            topological_order: order,
            distances,
            predecessors,
            predecessor_sets,
            total_weight,
            path,
            all_paths,
            optimal_path_count,
        })
    }
}

impl<W, G> LongestPathAlgorithm<W, G> for DagLongestPath
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "DAG longest path (topological order + DP)"
    }

    fn compute_longest_path(&self, graph: &G, source: usize, target: usize) -> Result<LongestPathResult<W>> {
        graph.check_vertex(source)?;
        graph.check_vertex(target)?;

        log::debug!(
            "Computing longest path {} -> {} on {} vertices",
            source,
            target,
            graph.vertex_count()
        );
        let order = topological_order::<W, G>(graph)?;
        self.longest_path_with_order(graph, order, source, target)
    }
}

/// Follows single predecessor pointers from a reachable target back to source
fn witness_path(predecessors: &[Option<usize>], source: usize, target: usize) -> Vec<usize> {
    let mut path = vec![target];
    let mut current = target;
    while current != source {
        match predecessors[current] {
            Some(p) => {
                path.push(p);
                current = p;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
