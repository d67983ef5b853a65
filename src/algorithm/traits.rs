use log::warn;

use crate::graph::{Graph, Weight};
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult<W>
where
    W: Weight,
{
    /// Distances from source to each vertex; `W::infinity()` when unreachable
    pub distances: Vec<W>,

    /// Predecessor vertices in the shortest path tree
    pub parents: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    /// Distance to `vertex`, or `None` if it is unreachable or out of range
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances
            .get(vertex)
            .copied()
            .filter(|distance| !distance.is_infinite())
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Number of vertices reachable from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| !d.is_infinite()).count()
    }

    /// Reconstructs the shortest path from the source to `target` by walking parent pointers
    ///
    /// Returns `None` for unreachable targets. The walk is bounded by the
    /// vertex count, so a corrupted parent table cannot loop forever.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;

        while current != self.source {
            match self.parents[current] {
                Some(parent) => current = parent,
                None => {
                    warn!("vertex {} has no parent but is not the source", current);
                    return None;
                }
            }
            path.push(current);

            if path.len() > self.parents.len() {
                warn!("parent chain from {} exceeds graph size, likely a cycle", target);
                return None;
            }
        }

        path.reverse();
        Some(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        result.path_to(target)
    }
}
