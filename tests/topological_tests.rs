use dag_longest_path::algorithm::topological::{is_topological_order, topological_order};
use dag_longest_path::graph::generators::{generate_chain, generate_random_dag};
use dag_longest_path::{AdjacencyMatrix, Error};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_single_vertex_order() {
    let graph = AdjacencyMatrix::from_rows(vec![vec![0i64]]).unwrap();
    assert_eq!(topological_order(&graph).unwrap(), vec![0]);
}

#[test]
fn test_seeds_in_ascending_index_and_fifo() {
    // 3 -> 0, 2 -> 1, 1 -> 0: zero in-degree vertices are 2 and 3
    let graph = AdjacencyMatrix::from_edges(4, &[(3, 0, 1i64), (2, 1, 1), (1, 0, 1)]).unwrap();
    let order = topological_order(&graph).unwrap();

    // Seeds [2, 3]; popping 2 releases 1, queued behind 3
    assert_eq!(order, vec![2, 3, 1, 0]);
    assert!(is_topological_order(&graph, &order));
}

#[test]
fn test_isolated_vertices_are_ordered() {
    let graph = AdjacencyMatrix::from_edges(4, &[(2, 1, 7i64)]).unwrap();
    assert_eq!(topological_order(&graph).unwrap(), vec![0, 2, 3, 1]);
}

#[test]
fn test_two_cycle_is_detected() {
    let graph = AdjacencyMatrix::from_edges(2, &[(0, 1, 1i64), (1, 0, 1)]).unwrap();
    match topological_order(&graph) {
        Err(Error::CycleDetected { sorted, vertex_count }) => {
            assert_eq!(sorted, 0);
            assert_eq!(vertex_count, 2);
        }
        other => panic!("expected CycleDetected, got {:?}", other),
    }
}

#[test]
fn test_cycle_behind_acyclic_prefix_is_detected() {
    // 0 -> 1 -> 2 -> 1: vertex 0 sorts, the cycle does not
    let graph = AdjacencyMatrix::from_edges(3, &[(0, 1, 1i64), (1, 2, 1), (2, 1, 1)]).unwrap();
    assert!(matches!(
        topological_order(&graph),
        Err(Error::CycleDetected { sorted: 1, vertex_count: 3 })
    ));
}

#[test]
fn test_self_loop_is_a_cycle() {
    let graph = AdjacencyMatrix::from_edges(2, &[(0, 1, 1i64), (1, 1, 4)]).unwrap();
    assert!(matches!(topological_order(&graph), Err(Error::CycleDetected { .. })));
}

#[test]
fn test_chain_order_is_identity() {
    let graph = generate_chain(50, 3).unwrap();
    assert_eq!(topological_order(&graph).unwrap(), (0..50).collect::<Vec<_>>());
}

#[test]
fn test_random_dags_produce_valid_orders() {
    let mut rng = StdRng::seed_from_u64(7);
    for n in 1..40 {
        let graph = generate_random_dag(n, 0.25, 10, &mut rng).unwrap();
        let order = topological_order(&graph).unwrap();
        assert!(is_topological_order(&graph, &order), "invalid order for n = {}", n);
    }
}

#[test]
fn test_is_topological_order_rejects_bad_orders() {
    let graph = AdjacencyMatrix::from_edges(3, &[(0, 1, 1i64), (1, 2, 1)]).unwrap();
    assert!(is_topological_order(&graph, &[0, 1, 2]));
    assert!(!is_topological_order(&graph, &[1, 0, 2]));
    assert!(!is_topological_order(&graph, &[0, 1]));
    assert!(!is_topological_order(&graph, &[0, 1, 1]));
    assert!(!is_topological_order(&graph, &[0, 1, 3]));
}
