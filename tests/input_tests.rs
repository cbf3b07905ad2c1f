use dag_longest_path::graph::Graph;
use dag_longest_path::{parse_input, read_input, Error, ProblemInput};

const SAMPLE: &str = "\
# longest path sample
3            # vertices

0 2 4        # row 0
0 0 3
0 0 0
0 2          # source target
trailing lines are ignored
";

#[test]
fn test_parse_sample_with_comments() {
    let input: ProblemInput<i64> = parse_input(SAMPLE).unwrap();

    assert_eq!(input.graph.vertex_count(), 3);
    assert_eq!(input.graph.row(0), &[0, 2, 4]);
    assert_eq!(input.graph.get_edge_weight(1, 2), Some(3));
    assert_eq!(input.graph.edge_count(), 3);
    assert_eq!((input.source, input.target), (0, 2));
}

#[test]
fn test_comment_only_input_is_empty() {
    let err = parse_input::<i64>("# nothing here\n\n   # still nothing\n").unwrap_err();
    assert!(matches!(err, Error::EmptyInput));
}

#[test]
fn test_zero_vertices_is_rejected() {
    let err = parse_input::<i64>("0\n0 0\n").unwrap_err();
    assert!(matches!(err, Error::EmptyGraph));
}

#[test]
fn test_short_row_is_a_dimension_mismatch() {
    let err = parse_input::<i64>("3\n0 1 0\n0 0\n0 0 0\n0 2\n").unwrap_err();
    assert!(matches!(
        err,
        Error::DimensionMismatch { row: 1, expected: 3, found: 2 }
    ));
}

#[test]
fn test_missing_rows_and_endpoints() {
    let err = parse_input::<i64>("3\n0 1 0\n0 0 1\n").unwrap_err();
    assert!(matches!(err, Error::MissingLine { expected: "matrix row" }));

    let err = parse_input::<i64>("2\n0 1\n0 0\n").unwrap_err();
    assert!(matches!(err, Error::MissingLine { expected: "source and target" }));
}

#[test]
fn test_bad_token_reports_physical_line() {
    let err = parse_input::<i64>("# header\n2\n0 x\n0 0\n0 1\n").unwrap_err();
    match err {
        Error::Parse { line, message } => {
            assert_eq!(line, 3);
            assert!(message.contains("\"x\""), "message was {}", message);
        }
        other => panic!("expected Parse, got {:?}", other),
    }
}

#[test]
fn test_endpoint_line_needs_exactly_two_values() {
    let err = parse_input::<i64>("2\n0 1\n0 0\n0 1 1\n").unwrap_err();
    assert!(matches!(err, Error::Parse { line: 4, .. }));

    let err = parse_input::<i64>("2\n0 1\n0 0\n1\n").unwrap_err();
    assert!(matches!(err, Error::Parse { line: 4, .. }));
}

#[test]
fn test_endpoints_out_of_range() {
    let err = parse_input::<i64>("2\n0 1\n0 0\n0 2\n").unwrap_err();
    assert!(matches!(err, Error::IndexOutOfRange { index: 2, vertex_count: 2 }));

    let err = parse_input::<i64>("2\n0 1\n0 0\n-1 0\n").unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
}

#[test]
fn test_negative_weights_parse() {
    let input: ProblemInput<i64> = parse_input("2\n0 -7\n0 0\n0 1\n").unwrap();
    assert_eq!(input.graph.get_edge_weight(0, 1), Some(-7));
}

#[test]
fn test_read_input_from_file() {
    let path = std::env::temp_dir().join(format!("dag_longest_path_input_{}.txt", std::process::id()));
    std::fs::write(&path, SAMPLE).unwrap();

    let input: ProblemInput<i64> = read_input(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(input.graph.vertex_count(), 3);
}

#[test]
fn test_read_missing_file_is_io_error() {
    let err = read_input::<i64, _>("/definitely/not/here/input.txt").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_huge_vertex_count_with_short_body() {
    // The declared count must not drive an allocation before rows are read
    let err = parse_input::<i64>("100000000000000000\n0 0\n").unwrap_err();
    assert!(matches!(err, Error::MissingLine { expected: "matrix row" }));
}
