use log::{debug, trace};

use crate::algorithm::ShortestPathResult;
use crate::data_structures::{LazyFrontier, PriorityFrontier};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Lifecycle of a [`ShortestPathEngine`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Unsettled vertices remain in the frontier
    Running,
    /// Every vertex has been settled
    Done,
}

/// Dijkstra's algorithm over a borrowed graph
///
/// The engine owns the distance table, the parent table and the frontier for
/// one run from one source. Each call to [`step`](Self::step) settles the
/// unsettled vertex of smallest tentative distance and relaxes its outgoing
/// edges. With non-negative costs a settled distance is final, so vertices
/// are never revisited.
#[derive(Debug)]
pub struct ShortestPathEngine<'g, W, G, F = LazyFrontier<W>>
where
    W: Weight,
    G: Graph<W>,
    F: PriorityFrontier<W>,
{
    graph: &'g G,
    source: usize,
    distances: Vec<W>,
    parents: Vec<Option<usize>>,
    settled: Vec<bool>,
    frontier: F,
    state: EngineState,
}

impl<'g, W, G> ShortestPathEngine<'g, W, G, LazyFrontier<W>>
where
    W: Weight,
    G: Graph<W>,
{
    /// Creates an engine backed by the lazy-deletion frontier
    pub fn new(graph: &'g G, source: usize) -> Result<Self> {
        Self::with_frontier(graph, source)
    }
}

impl<'g, W, G, F> ShortestPathEngine<'g, W, G, F>
where
    W: Weight,
    G: Graph<W>,
    F: PriorityFrontier<W>,
{
    /// Creates an engine using frontier implementation `F`
    ///
    /// Fails with [`Error::InvalidReference`] if `source` is not a vertex of a
    /// non-empty graph. An empty graph starts (and stays) `Done`.
    pub fn with_frontier(graph: &'g G, source: usize) -> Result<Self> {
        let n = graph.vertex_count();
        if n > 0 && source >= n {
            return Err(Error::InvalidReference {
                vertex: source,
                vertex_count: n,
            });
        }

        let mut distances = vec![W::infinity(); n];
        if n > 0 {
            distances[source] = W::zero();
        }
        let frontier = F::from_keys(&distances);
        let state = if frontier.is_empty() {
            EngineState::Done
        } else {
            EngineState::Running
        };

        Ok(ShortestPathEngine {
            graph,
            source,
            distances,
            parents: vec![None; n],
            settled: vec![false; n],
            frontier,
            state,
        })
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn source(&self) -> usize {
        self.source
    }

    /// Current tentative distances
    pub fn distances(&self) -> &[W] {
        &self.distances
    }

    /// Current parent pointers
    pub fn parents(&self) -> &[Option<usize>] {
        &self.parents
    }

    pub fn is_settled(&self, vertex: usize) -> bool {
        self.settled.get(vertex).copied().unwrap_or(false)
    }

    /// Settles one vertex and relaxes its outgoing edges
    ///
    /// Returns the settled vertex, or `None` once the engine is `Done`. A
    /// relaxation whose sum does not fit below `W::infinity()` fails with
    /// [`Error::CostOverflow`] and leaves the engine `Done`.
    pub fn step(&mut self) -> Result<Option<usize>> {
        if self.state == EngineState::Done {
            return Ok(None);
        }

        let Some((u, key)) = self.frontier.extract_min() else {
            self.state = EngineState::Done;
            return Ok(None);
        };
        debug_assert!(!self.settled[u], "vertex {} extracted twice", u);
        debug_assert!(key == self.distances[u], "stale key extracted for vertex {}", u);
        self.settled[u] = true;

        let dist_u = self.distances[u];
        if dist_u.is_infinite() {
            trace!("settled unreachable vertex {}", u);
        } else {
            trace!("settled vertex {} at distance {}", u, dist_u);
            let graph = self.graph;
            for (v, cost) in graph.outgoing_edges(u) {
                if let Err(err) = self.relax(u, dist_u, v, cost) {
                    self.state = EngineState::Done;
                    return Err(err);
                }
            }
        }

        if self.frontier.is_empty() {
            self.state = EngineState::Done;
        }
        Ok(Some(u))
    }

    /// The only place a distance changes
    fn relax(&mut self, u: usize, dist_u: W, v: usize, cost: W) -> Result<()> {
        let candidate = dist_u
            .checked_sum(cost)
            .ok_or(Error::CostOverflow { from: u, to: v })?;
        if candidate < self.distances[v] {
            debug_assert!(!self.settled[v], "relaxing settled vertex {} from {}", v, u);
            trace!("relax {} -> {}: {} => {}", u, v, self.distances[v], candidate);
            self.distances[v] = candidate;
            self.parents[v] = Some(u);
            self.frontier.update(v, candidate);
        }
        Ok(())
    }

    /// Runs the engine to completion and returns the distance and parent tables
    pub fn process(mut self) -> Result<ShortestPathResult<W>> {
        let mut settled = 0usize;
        while self.step()?.is_some() {
            settled += 1;
        }
        debug!(
            "settled {} vertices from source {} ({} reachable)",
            settled,
            self.source,
            self.distances.iter().filter(|d| !d.is_infinite()).count()
        );

        Ok(ShortestPathResult {
            distances: self.distances,
            parents: self.parents,
            source: self.source,
        })
    }
}
