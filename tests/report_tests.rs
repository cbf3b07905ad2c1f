use dag_longest_path::algorithm::LongestPathAlgorithm;
use dag_longest_path::report::{render_json, render_text};
use dag_longest_path::{AdjacencyMatrix, DagLongestPath};
use serde_json::Value;

#[test]
fn test_text_report_for_reachable_target() {
    let graph =
        AdjacencyMatrix::from_edges(4, &[(0, 1, 1i64), (0, 2, 1), (1, 3, 1), (2, 3, 1)]).unwrap();
    let result = DagLongestPath::new().compute_longest_path(&graph, 0, 3).unwrap();
    let text = render_text(&graph, &result);

    assert!(text.contains("Vertices: 4"));
    assert!(text.contains("0 1 1 0\n"));
    assert!(text.contains("Topological order:\n0 1 2 3\n"));
    assert!(text.contains("Longest distances from source (-inf = unreachable):\n0 1 1 2\n"));
    assert!(text.contains("Predecessors (-1 = none):\n-1 0 0 1\n"));
    assert!(text.contains("Path s -> t: 0 1 3\n"));
    assert!(text.contains("Total weight: 2\n"));
    assert!(text.contains("Optimal paths (2):\n  1. 0 1 3\n  2. 0 2 3\n"));
}

#[test]
fn test_text_report_for_unreachable_target() {
    let graph = AdjacencyMatrix::from_edges(3, &[(1, 2, 4i64)]).unwrap();
    let result = DagLongestPath::new().compute_longest_path(&graph, 0, 2).unwrap();
    let text = render_text(&graph, &result);

    assert!(text.contains("0 -inf -inf\n"));
    assert!(text.contains("No path from 0 to 2."));
    assert!(!text.contains("Total weight"));
}

#[test]
fn test_json_report() {
    let graph = AdjacencyMatrix::from_edges(3, &[(0, 1, 2i64), (1, 2, 3), (0, 2, 4)]).unwrap();
    let result = DagLongestPath::new().compute_longest_path(&graph, 1, 2).unwrap();
    let doc: Value = serde_json::from_str(&render_json(&graph, &result).unwrap()).unwrap();

    assert_eq!(doc["matrix"][0], serde_json::json!([0, 2, 4]));
    assert_eq!(doc["source"], 1);
    assert_eq!(doc["distances"], serde_json::json!([null, 0, 3]));
    assert_eq!(doc["predecessors"], serde_json::json!([null, null, 1]));
    assert_eq!(doc["total_weight"], 3);
    assert_eq!(doc["path"], serde_json::json!([1, 2]));
    assert_eq!(doc["all_paths"], serde_json::json!([[1, 2]]));
    assert_eq!(doc["optimal_path_count"], 1);
}

#[test]
fn test_json_report_without_path() {
    let graph = AdjacencyMatrix::from_rows(vec![vec![0i64, 0], vec![0, 0]]).unwrap();
    let result = DagLongestPath::new().compute_longest_path(&graph, 1, 0).unwrap();
    let doc: Value = serde_json::from_str(&render_json(&graph, &result).unwrap()).unwrap();

    assert_eq!(doc["total_weight"], Value::Null);
    assert_eq!(doc["all_paths"], serde_json::json!([]));
}
