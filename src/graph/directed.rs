use crate::graph::builder::GraphBuilder;
use crate::graph::traits::{Graph, Weight};
use crate::Result;

/// A static directed graph stored as one adjacency list per vertex
///
/// Vertex ids index straight into `adjacency`. Instances are only produced by
/// [`GraphBuilder`], so every stored target is in range and every cost is
/// non-negative.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Weight,
{
    /// Outgoing edges for each vertex: adjacency[v] = [(target_vertex, weight)]
    adjacency: Vec<Vec<(usize, W)>>,

    /// Total number of distinct (from, to) pairs
    edge_count: usize,
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a graph with `vertices` vertices and no edges
    pub fn with_vertices(vertices: usize) -> Self {
        DirectedGraph {
            adjacency: vec![Vec::new(); vertices],
            edge_count: 0,
        }
    }

    /// Builds a graph from an edge list, validating every edge.
    ///
    /// A repeated `(from, to)` pair keeps the last cost given. A vertex count
    /// too large to allocate fails with [`crate::Error::TooManyVertices`].
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut builder = GraphBuilder::try_new(vertices)?;
        for (from, to, weight) in edges {
            builder.add_edge(from, to, weight)?;
        }
        Ok(builder.build())
    }

    pub(crate) fn from_adjacency(adjacency: Vec<Vec<(usize, W)>>) -> Self {
        let edge_count = adjacency.iter().map(|edges| edges.len()).sum();
        DirectedGraph {
            adjacency,
            edge_count,
        }
    }

    /// Borrow the outgoing edges of a vertex as a slice
    pub fn neighbors(&self, vertex: usize) -> &[(usize, W)] {
        self.adjacency
            .get(vertex)
            .map(|edges| edges.as_slice())
            .unwrap_or(&[])
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        Box::new(self.neighbors(vertex).iter().copied())
    }
}
