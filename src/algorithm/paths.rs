//! Expansion of the predecessor multigraph into tied optimal paths
//!
//! Both passes walk the topological order instead of recursing from the target,
//! so depth is never bounded by the call stack. Every predecessor of a vertex
//! precedes it in the order, which makes a per-vertex slot final by the time
//! any successor reads it.

/// Marks the vertices that lie on at least one optimal path into `target`
///
/// Walks predecessor sets backwards from `target` with an explicit stack.
pub fn vertices_on_optimal_paths(predecessor_sets: &[Vec<usize>], target: usize) -> Vec<bool> {
    let mut marked = vec![false; predecessor_sets.len()];
    let mut stack = vec![target];
    marked[target] = true;

    while let Some(v) = stack.pop() {
        for &p in &predecessor_sets[v] {
            if !marked[p] {
                marked[p] = true;
                stack.push(p);
            }
        }
    }

    marked
}

/// Counts optimal paths from `source` to every vertex, saturating at `u128::MAX`
///
/// `counts[source]` is 1; any vertex with an empty predecessor set other than
/// the source counts 0.
pub fn count_optimal_paths(order: &[usize], predecessor_sets: &[Vec<usize>], source: usize) -> Vec<u128> {
    let mut counts = vec![0u128; predecessor_sets.len()];
    counts[source] = 1;

    for &v in order {
        if v == source {
            continue;
        }
        counts[v] = predecessor_sets[v]
            .iter()
            .fold(0u128, |acc, &p| acc.saturating_add(counts[p]));
    }

    counts
}

/// Enumerates every optimal path from `source` to `target`
///
/// Slots are filled in topological order for the vertices that can reach the
/// target through predecessor sets; every other slot stays empty. Paths into a
/// vertex are listed predecessor by predecessor, in discovery order.
pub fn enumerate_optimal_paths(
    order: &[usize],
    predecessor_sets: &[Vec<usize>],
    source: usize,
    target: usize,
) -> Vec<Vec<usize>> {
    let on_path = vertices_on_optimal_paths(predecessor_sets, target);
    if !on_path[source] {
        return Vec::new();
    }

    let mut slots: Vec<Vec<Vec<usize>>> = vec![Vec::new(); predecessor_sets.len()];
    slots[source].push(vec![source]);

    for &v in order {
        if v == source || !on_path[v] {
            continue;
        }

        let mut paths = Vec::new();
        for &p in &predecessor_sets[v] {
            for prefix in &slots[p] {
                let mut path = Vec::with_capacity(prefix.len() + 1);
                path.extend_from_slice(prefix);
                path.push(v);
                paths.push(path);
            }
        }
        slots[v] = paths;

        if v == target {
            break;
        }
    }

    std::mem::take(&mut slots[target])
}
