use crate::algorithm::engine::ShortestPathEngine;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{FrontierStrategy, RebuildFrontier};
use crate::graph::{Graph, Weight};
use crate::Result;

/// Classic Dijkstra's algorithm implementation
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra {
    /// Frontier implementation used for each run
    strategy: FrontierStrategy,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance using the lazy frontier
    pub fn new() -> Self {
        Dijkstra::default()
    }

    /// Set the frontier strategy
    pub fn with_strategy(mut self, strategy: FrontierStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> FrontierStrategy {
        self.strategy
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        match self.strategy {
            FrontierStrategy::Lazy => "Dijkstra (lazy frontier)",
            FrontierStrategy::Rebuild => "Dijkstra (rebuild frontier)",
        }
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        match self.strategy {
            FrontierStrategy::Lazy => ShortestPathEngine::new(graph, source)?.process(),
            FrontierStrategy::Rebuild => {
                ShortestPathEngine::<W, G, RebuildFrontier<W>>::with_frontier(graph, source)?
                    .process()
            }
        }
    }
}
