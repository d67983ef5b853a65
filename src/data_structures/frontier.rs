use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::graph::Weight;

/// The working set of unsettled vertices, ordered by tentative distance
///
/// Every vertex starts present and is removed exactly once, by the
/// `extract_min` call that returns it. Entries compare as `(key, vertex)`, so
/// among equal keys the lower vertex id is extracted first.
pub trait PriorityFrontier<W>
where
    W: Weight,
{
    /// Creates a frontier holding every vertex `v` with priority `keys[v]`
    fn from_keys(keys: &[W]) -> Self
    where
        Self: Sized;

    /// Returns true once every vertex has been extracted
    fn is_empty(&self) -> bool;

    /// Number of vertices not yet extracted
    fn len(&self) -> usize;

    /// Removes and returns the present vertex with the smallest current key
    fn extract_min(&mut self) -> Option<(usize, W)>;

    /// Records that a present vertex's key has dropped to `key`
    fn update(&mut self, vertex: usize, key: W);
}

/// Selects the frontier implementation used by [`crate::Dijkstra`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrontierStrategy {
    /// Push a fresh entry per update and skip stale ones on extraction
    #[default]
    Lazy,
    /// Re-heapify the whole frontier after every update
    Rebuild,
}

impl FrontierStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FrontierStrategy::Lazy => "lazy",
            FrontierStrategy::Rebuild => "rebuild",
        }
    }
}

impl fmt::Display for FrontierStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FrontierStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lazy" => Ok(FrontierStrategy::Lazy),
            "rebuild" => Ok(FrontierStrategy::Rebuild),
            other => Err(format!("unknown frontier strategy: {}", other)),
        }
    }
}
