use log::trace;

use crate::graph::directed::DirectedGraph;
use crate::graph::traits::Weight;
use crate::{Error, Result};

/// Accumulates validated edges for a [`DirectedGraph`]
///
/// The vertex set is fixed up front. Edges whose endpoints fall outside it,
/// or whose cost is negative, are rejected before anything is stored.
#[derive(Debug, Clone)]
pub struct GraphBuilder<W>
where
    W: Weight,
{
    adjacency: Vec<Vec<(usize, W)>>,
}

impl<W> GraphBuilder<W>
where
    W: Weight,
{
    /// Starts a graph with vertices `0..vertices`
    ///
    /// Panics if the adjacency table cannot be allocated; use
    /// [`try_new`](Self::try_new) for vertex counts read from input.
    pub fn new(vertices: usize) -> Self {
        GraphBuilder {
            adjacency: vec![Vec::new(); vertices],
        }
    }

    /// Starts a graph with vertices `0..vertices`, failing with
    /// [`Error::TooManyVertices`] if the adjacency table cannot be allocated
    pub fn try_new(vertices: usize) -> Result<Self> {
        let mut adjacency = Vec::new();
        adjacency
            .try_reserve_exact(vertices)
            .map_err(|_| Error::TooManyVertices { vertices })?;
        adjacency.resize_with(vertices, Vec::new);
        Ok(GraphBuilder { adjacency })
    }

    /// Number of vertices the finished graph will have
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Adds the directed edge `from -> to`, overwriting an earlier cost for the same pair
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<&mut Self> {
        let vertex_count = self.vertex_count();
        for vertex in [from, to] {
            if vertex >= vertex_count {
                return Err(Error::InvalidReference {
                    vertex,
                    vertex_count,
                });
            }
        }
        if weight.is_negative() {
            return Err(Error::NegativeWeight {
                from,
                to,
                weight: weight.to_string(),
            });
        }

        let edges = &mut self.adjacency[from];
        match edges.iter_mut().find(|(target, _)| *target == to) {
            Some(edge) => {
                trace!("overwriting edge {} -> {}: {} => {}", from, to, edge.1, weight);
                edge.1 = weight;
            }
            None => edges.push((to, weight)),
        }
        Ok(self)
    }

    /// Freezes the accumulated edges into an immutable graph
    pub fn build(self) -> DirectedGraph<W> {
        DirectedGraph::from_adjacency(self.adjacency)
    }
}
