//! Generic directed weighted graph and shortest-path search.
//!
//! Nothing here knows about stops or buses. The itinerary engine builds a
//! graph once, hands it to a [`Router`], and queries it repeatedly.

mod router;

pub use router::{RouteInfo, Router, Weight};

/// Index of a vertex. Vertices are `0..vertex_count`.
pub type VertexId = usize;

/// Index of an edge, in insertion order.
pub type EdgeId = usize;

/// A directed edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W> {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: W,
}

/// Directed graph with a fixed vertex count and append-only edges.
#[derive(Debug, Clone)]
pub struct DirectedWeightedGraph<W> {
    edges: Vec<Edge<W>>,
    incidence: Vec<Vec<EdgeId>>,
}

impl<W: Copy> DirectedWeightedGraph<W> {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            incidence: vec![Vec::new(); vertex_count],
        }
    }

    /// Add an edge and return its id.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is not a vertex of this graph.
    pub fn add_edge(&mut self, edge: Edge<W>) -> EdgeId {
        assert!(
            edge.from < self.incidence.len() && edge.to < self.incidence.len(),
            "edge {} -> {} out of range for {} vertices",
            edge.from,
            edge.to,
            self.incidence.len()
        );
        let id = self.edges.len();
        self.incidence[edge.from].push(id);
        self.edges.push(edge);
        id
    }

    /// Get an edge by id.
    pub fn edge(&self, id: EdgeId) -> &Edge<W> {
        &self.edges[id]
    }

    /// Edges leaving `vertex`, in insertion order.
    pub fn incident_edges(&self, vertex: VertexId) -> &[EdgeId] {
        &self.incidence[vertex]
    }

    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
