//! Text front end: the `N`, `M`, `key target cost` input protocol and the
//! two-line report printed by the `sssp` binary.

use log::debug;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::FrontierStrategy;
use crate::graph::DirectedGraph;
use crate::{Dijkstra, Error, Result};

/// Marker printed for an unreachable distance
pub const INFINITY_MARKER: &str = "inf";

/// Marker printed for a vertex without a parent
pub const NO_PARENT_MARKER: &str = "None";

/// A fully materialized graph description as read from the input stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphInput {
    pub vertex_count: usize,
    /// Directed edges as `(from, to, cost)`, in input order
    pub edges: Vec<(usize, usize, i64)>,
}

/// Options for a single driver run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverConfig {
    pub source: usize,
    pub strategy: FrontierStrategy,
    /// Emit JSON instead of the two-line text report
    pub json: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            source: 0,
            strategy: FrontierStrategy::Lazy,
            json: false,
        }
    }
}

/// JSON shape of a finished run; `null` marks unreachable distances and missing parents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub source: usize,
    pub distances: Vec<Option<i128>>,
    pub parents: Vec<Option<usize>>,
}

impl From<&ShortestPathResult<i128>> for Report {
    fn from(result: &ShortestPathResult<i128>) -> Self {
        Report {
            source: result.source,
            distances: (0..result.distances.len())
                .map(|v| result.distance(v))
                .collect(),
            parents: result.parents.clone(),
        }
    }
}

struct Tokens<'a> {
    inner: std::iter::Enumerate<std::str::SplitWhitespace<'a>>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Tokens {
            inner: input.split_whitespace().enumerate(),
        }
    }

    fn next<T: FromStr>(&mut self, expected: &'static str) -> Result<T> {
        let (position, token) = self
            .inner
            .next()
            .ok_or(Error::UnexpectedEnd { expected })?;
        token.parse().map_err(|_| Error::Parse {
            token: token.to_string(),
            position,
        })
    }
}

/// Parses `N`, `M` and `M` triples `key target cost` separated by any whitespace
///
/// Only the syntax is checked here. Endpoint ranges and cost signs are
/// validated when the graph is built in [`run`]. Tokens after the last edge
/// are ignored.
pub fn parse_input(input: &str) -> Result<GraphInput> {
    let mut tokens = Tokens::new(input);
    let vertex_count = tokens.next::<usize>("vertex count")?;
    let edge_count = tokens.next::<usize>("edge count")?;

    let mut edges = Vec::with_capacity(edge_count.min(1 << 16));
    for _ in 0..edge_count {
        let from = tokens.next::<usize>("edge source")?;
        let to = tokens.next::<usize>("edge target")?;
        let cost = tokens.next::<i64>("edge cost")?;
        edges.push((from, to, cost));
    }

    debug!("parsed {} vertices and {} edges", vertex_count, edges.len());
    Ok(GraphInput {
        vertex_count,
        edges,
    })
}

/// Builds the graph described by `input` and computes shortest paths from `config.source`
///
/// Costs are read as `i64` but summed as `i128`, so no simple path over
/// `i64` costs can reach the `i128::MAX` sentinel.
pub fn run(input: &GraphInput, config: &DriverConfig) -> Result<ShortestPathResult<i128>> {
    let edges = input
        .edges
        .iter()
        .map(|&(from, to, cost)| (from, to, i128::from(cost)));
    let graph = DirectedGraph::from_edges(input.vertex_count, edges)?;
    let dijkstra = Dijkstra::new().with_strategy(config.strategy);
    debug!(
        "running {} from source {}",
        <Dijkstra as ShortestPathAlgorithm<i128, DirectedGraph<i128>>>::name(&dijkstra),
        config.source
    );
    dijkstra.compute_shortest_paths(&graph, config.source)
}

/// Renders the `distances: [...]` and `parents: [...]` lines
pub fn format_report(result: &ShortestPathResult<i128>) -> String {
    let distances: Vec<String> = (0..result.distances.len())
        .map(|v| match result.distance(v) {
            Some(distance) => distance.to_string(),
            None => INFINITY_MARKER.to_string(),
        })
        .collect();
    let parents: Vec<String> = result
        .parents
        .iter()
        .map(|parent| match parent {
            Some(parent) => parent.to_string(),
            None => NO_PARENT_MARKER.to_string(),
        })
        .collect();

    format!(
        "distances: [{}]\nparents: [{}]",
        distances.join(", "),
        parents.join(", ")
    )
}

/// Renders the result as a JSON [`Report`]
pub fn format_json(result: &ShortestPathResult<i128>) -> Result<String> {
    Ok(serde_json::to_string(&Report::from(result))?)
}

/// Parses, runs and formats in one call
pub fn run_text(input: &str, config: &DriverConfig) -> Result<String> {
    let parsed = parse_input(input)?;
    let result = run(&parsed, config)?;
    if config.json {
        format_json(&result)
    } else {
        Ok(format_report(&result))
    }
}
