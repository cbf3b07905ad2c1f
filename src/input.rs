//! Text input format
//!
//! ```text
//! # comments run from '#' to end of line
//! 3            # vertex count
//! 0 2 4        # one row per vertex, 0 = no edge
//! 0 0 3
//! 0 0 0
//! 0 2          # source target
//! ```

use std::fmt::{Debug, Display};
use std::path::Path;
use std::str::FromStr;

use num_traits::Zero;

use crate::graph::{AdjacencyMatrix, Graph};
use crate::{Error, Result};

/// A parsed problem: the graph plus the two endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemInput<W>
where
    W: Zero + Debug + Copy,
{
    pub graph: AdjacencyMatrix<W>,
    pub source: usize,
    pub target: usize,
}

/// Reads and parses an input file
pub fn read_input<W, P>(path: P) -> Result<ProblemInput<W>>
where
    W: Zero + Debug + Copy + FromStr,
    W::Err: Display,
    P: AsRef<Path>,
{
    let text = std::fs::read_to_string(path.as_ref())?;
    parse_input(&text)
}

/// Parses the text input format
///
/// Validates the matrix shape and that source and target are vertex indices.
/// Lines after the source/target line are ignored.
pub fn parse_input<W>(text: &str) -> Result<ProblemInput<W>>
where
    W: Zero + Debug + Copy + FromStr,
    W::Err: Display,
{
    // (1-based physical line number, content without comment)
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, raw)| (i + 1, raw.split('#').next().unwrap_or("").trim()))
        .filter(|(_, line)| !line.is_empty());

    let (line_no, line) = lines.next().ok_or(Error::EmptyInput)?;
    let vertex_count: usize = parse_token(line_no, line, "vertex count")?;
    if vertex_count == 0 {
        return Err(Error::EmptyGraph);
    }

    // Rows are pushed as they are read; the count is untrusted until then
    let mut rows = Vec::new();
    for row in 0..vertex_count {
        let (line_no, line) = lines.next().ok_or(Error::MissingLine {
            expected: "matrix row",
        })?;
        let values = line
            .split_whitespace()
            .map(|token| parse_token::<W>(line_no, token, "edge weight"))
            .collect::<Result<Vec<_>>>()?;
        if values.len() != vertex_count {
            return Err(Error::DimensionMismatch {
                row,
                expected: vertex_count,
                found: values.len(),
            });
        }
        rows.push(values);
    }

    let (line_no, line) = lines.next().ok_or(Error::MissingLine {
        expected: "source and target",
    })?;
    let mut tokens = line.split_whitespace();
    let (Some(source), Some(target), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(Error::Parse {
            line: line_no,
            message: format!("expected \"source target\", found {:?}", line),
        });
    };
    let source: usize = parse_token(line_no, source, "source")?;
    let target: usize = parse_token(line_no, target, "target")?;

    let graph = AdjacencyMatrix::from_rows(rows)?;
    graph.check_vertex(source)?;
    graph.check_vertex(target)?;

    log::debug!(
        "Parsed {} vertices, source {}, target {}",
        vertex_count,
        source,
        target
    );

    Ok(ProblemInput {
        graph,
        source,
        target,
    })
}

fn parse_token<T>(line: usize, token: &str, what: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    token.parse().map_err(|e: T::Err| Error::Parse {
        line,
        message: format!("invalid {} {:?}: {}", what, token, e),
    })
}
