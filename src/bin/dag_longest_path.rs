use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dag_longest_path::algorithm::LongestPathAlgorithm;
use dag_longest_path::report::{render_json, render_text};
use dag_longest_path::{read_input, AdjacencyMatrix, DagLongestPath, ProblemInput};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Longest path between two vertices of a weighted DAG
#[derive(Parser, Debug)]
#[command(name = "dag_longest_path", version, about, long_about = None)]
struct Cli {
    /// Input file: vertex count, adjacency matrix rows, then "source target"
    #[arg(default_value = "input.txt")]
    file: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Refuse to enumerate more than this many tied optimal paths
    #[arg(long)]
    max_paths: Option<usize>,
}

fn run(cli: &Cli) -> Result<String> {
    let ProblemInput {
        graph,
        source,
        target,
    } = read_input::<i64, _>(&cli.file)
        .with_context(|| format!("failed to load {}", cli.file.display()))?;

    let mut algorithm = DagLongestPath::new();
    if let Some(limit) = cli.max_paths {
        algorithm = algorithm.with_max_paths(limit);
    }

    let result = algorithm.compute_longest_path(&graph, source, target)?;
    log::info!(
        "{}: {} -> {} = {:?}",
        <DagLongestPath as LongestPathAlgorithm<i64, AdjacencyMatrix<i64>>>::name(&algorithm),
        source,
        target,
        result.total_weight
    );

    let rendered = match cli.format {
        Format::Text => format!("File: {}\n{}", cli.file.display(), render_text(&graph, &result)),
        Format::Json => render_json(&graph, &result)?,
    };
    Ok(rendered)
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
