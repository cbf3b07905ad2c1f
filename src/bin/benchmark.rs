use std::time::{Duration, Instant};
use rand::rngs::StdRng;
use rand::SeedableRng;
use dag_longest_path::algorithm::{LongestPathAlgorithm, topological::topological_order};
use dag_longest_path::graph::generators::{generate_diamond_ladder, generate_random_dag};
use dag_longest_path::graph::{AdjacencyMatrix, Graph};
use dag_longest_path::DagLongestPath;

// Function to benchmark the full computation between the first and last vertex
fn benchmark_longest_path(graph: &AdjacencyMatrix<i64>) -> dag_longest_path::Result<(Duration, Duration)> {
    let n = graph.vertex_count();

    let start = Instant::now();
    topological_order(graph)?;
    let sort_time = start.elapsed();

    let start = Instant::now();
    let result = DagLongestPath::new().compute_longest_path(graph, 0, n - 1)?;
    let total_time = start.elapsed();

    match result.total_weight {
        Some(weight) => println!(
            "  - weight {} over {} hops, {} optimal path(s) in {:?}",
            weight,
            result.path.len().saturating_sub(1),
            result.optimal_path_count,
            total_time
        ),
        None => println!("  - no path from 0 to {} ({:?})", n - 1, total_time),
    }

    Ok((sort_time, total_time))
}

fn main() -> dag_longest_path::Result<()> {
    env_logger::init();

    // Dense matrices grow quadratically, so stay well below a million vertices
    let graph_sizes = [100, 500, 1_000, 2_000, 4_000];
    let edge_probability = 0.05;
    let mut rng = StdRng::seed_from_u64(42);

    println!("=====================================================");
    println!("Benchmark: DAG longest path on random dense matrices");
    println!("Edge probability: {}", edge_probability);
    println!("=====================================================");

    let mut results = Vec::new();
    for &size in &graph_sizes {
        println!("\nGenerating random DAG with {} vertices...", size);
        let graph = generate_random_dag(size, edge_probability, 100, &mut rng)?;
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let (sort_time, total_time) = benchmark_longest_path(&graph)?;
        results.push((size, graph.edge_count(), sort_time, total_time));
    }

    println!("\nTie enumeration on diamond ladders:");
    for diamonds in [4, 8, 12, 16] {
        let graph = generate_diamond_ladder(diamonds)?;
        println!("{} diamonds ({} vertices):", diamonds, graph.vertex_count());
        benchmark_longest_path(&graph)?;
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<10} | {:<15} | {:<15}", "Vertices", "Edges", "Sort (ms)", "Total (ms)");
    println!("-----------------------------------------------------");

    for (size, edges, sort_time, total_time) in &results {
        println!(
            "{:<10} | {:<10} | {:<15.3} | {:<15.3}",
            size,
            edges,
            sort_time.as_secs_f64() * 1000.0,
            total_time.as_secs_f64() * 1000.0
        );
    }

    Ok(())
}
