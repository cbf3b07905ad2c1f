//! Rendering of a computed result as a text report or a JSON document

use std::fmt::{self, Display};

use serde::Serialize;

use crate::algorithm::{LongestPathResult, Weight};
use crate::graph::AdjacencyMatrix;
use crate::Result;

/// Everything a report shows: the echoed matrix plus the computed result
#[derive(Debug, Serialize)]
pub struct ReportDocument<'a, W>
where
    W: Weight,
{
    pub matrix: Vec<&'a [W]>,
    #[serde(flatten)]
    pub result: &'a LongestPathResult<W>,
}

impl<'a, W> ReportDocument<'a, W>
where
    W: Weight,
{
    pub fn new(graph: &'a AdjacencyMatrix<W>, result: &'a LongestPathResult<W>) -> Self {
        ReportDocument {
            matrix: graph.rows().collect(),
            result,
        }
    }
}

/// Pretty-printed JSON; unreachable distances and missing predecessors are `null`
pub fn render_json<W>(graph: &AdjacencyMatrix<W>, result: &LongestPathResult<W>) -> Result<String>
where
    W: Weight + Serialize,
{
    Ok(serde_json::to_string_pretty(&ReportDocument::new(graph, result))?)
}

fn join<I, T>(items: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Human-readable report, rendered through `Display`
pub struct TextReport<'a, W>
where
    W: Weight,
{
    graph: &'a AdjacencyMatrix<W>,
    result: &'a LongestPathResult<W>,
}

impl<'a, W> TextReport<'a, W>
where
    W: Weight,
{
    pub fn new(graph: &'a AdjacencyMatrix<W>, result: &'a LongestPathResult<W>) -> Self {
        TextReport { graph, result }
    }
}

impl<W> Display for TextReport<'_, W>
where
    W: Weight + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;

        writeln!(f, "=== Longest path in a DAG (topological order + DP) ===")?;
        writeln!(f, "Vertices: {}", result.vertex_count)?;
        writeln!(f)?;
        writeln!(f, "Adjacency matrix (0 = no edge):")?;
        for row in self.graph.rows() {
            writeln!(f, "{}", join(row))?;
        }

        writeln!(f)?;
        writeln!(f, "Source: {}", result.source)?;
        writeln!(f, "Target: {}", result.target)?;

        writeln!(f)?;
        writeln!(f, "Topological order:")?;
        writeln!(f, "{}", join(&result.topological_order))?;

        writeln!(f)?;
        writeln!(f, "Longest distances from source (-inf = unreachable):")?;
        let distances = result.distances.iter().map(|d| match d {
            Some(d) => d.to_string(),
            None => "-inf".to_string(),
        });
        writeln!(f, "{}", join(distances))?;

        writeln!(f)?;
        writeln!(f, "Predecessors (-1 = none):")?;
        let predecessors = result.predecessors.iter().map(|p| match p {
            Some(p) => p.to_string(),
            None => "-1".to_string(),
        });
        writeln!(f, "{}", join(predecessors))?;

        writeln!(f)?;
        match result.total_weight {
            None => writeln!(f, "No path from {} to {}.", result.source, result.target),
            Some(total) => {
                writeln!(f, "Path s -> t: {}", join(&result.path))?;
                writeln!(f, "Total weight: {}", total)?;
                writeln!(f)?;
                writeln!(f, "Optimal paths ({}):", result.optimal_path_count)?;
                for (i, path) in result.all_paths.iter().enumerate() {
                    writeln!(f, "  {}. {}", i + 1, join(path))?;
                }
                Ok(())
            }
        }
    }
}

/// Renders the human-readable report to a string
pub fn render_text<W>(graph: &AdjacencyMatrix<W>, result: &LongestPathResult<W>) -> String
where
    W: Weight + Display,
{
    TextReport::new(graph, result).to_string()
}
