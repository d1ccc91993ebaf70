//! Dijkstra shortest paths over a [`DirectedWeightedGraph`].

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::ops::Add;

use tracing::trace;

use super::{DirectedWeightedGraph, EdgeId, VertexId};

/// Edge weights usable by the router.
///
/// Weights must be totally ordered and non-negative; `Default` is zero.
/// Floating-point weights can be wrapped in `ordered_float::OrderedFloat`.
pub trait Weight: Copy + Ord + Add<Output = Self> + Default {}

impl<T: Copy + Ord + Add<Output = T> + Default> Weight for T {}

/// A minimum-weight path.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteInfo<W> {
    /// Total weight of the path.
    pub weight: W,
    /// Edges in travel order.
    pub edges: Vec<EdgeId>,
}

/// Shortest-path engine owning a finished graph.
///
/// Construction is linear in the graph size; each query is a single
/// Dijkstra run, O((V + E) log V).
#[derive(Debug, Clone)]
pub struct Router<W> {
    graph: DirectedWeightedGraph<W>,
}

impl<W: Weight> Router<W> {
    /// Take ownership of a fully built graph.
    pub fn new(graph: DirectedWeightedGraph<W>) -> Self {
        Self { graph }
    }

    /// The underlying graph.
    pub fn graph(&self) -> &DirectedWeightedGraph<W> {
        &self.graph
    }

    /// Find a minimum-weight path from `from` to `to`.
    ///
    /// Returns `None` if `to` is unreachable or either vertex is out of
    /// range. A route from a vertex to itself is empty with zero weight.
    /// Ties are resolved by vertex id, so results are deterministic.
    pub fn build_route(&self, from: VertexId, to: VertexId) -> Option<RouteInfo<W>> {
        let n = self.graph.vertex_count();
        if from >= n || to >= n {
            return None;
        }
        if from == to {
            return Some(RouteInfo {
                weight: W::default(),
                edges: Vec::new(),
            });
        }

        let mut dist: Vec<Option<W>> = vec![None; n];
        let mut prev_edge: Vec<Option<EdgeId>> = vec![None; n];
        let mut heap = BinaryHeap::new();

        dist[from] = Some(W::default());
        heap.push(Reverse((W::default(), from)));

        while let Some(Reverse((cost, vertex))) = heap.pop() {
            if vertex == to {
                break;
            }
            // Stale heap entry
            if dist[vertex].is_some_and(|best| cost > best) {
                continue;
            }

            for &edge_id in self.graph.incident_edges(vertex) {
                let edge = self.graph.edge(edge_id);
                let candidate = cost + edge.weight;
                if dist[edge.to].is_none_or(|best| candidate < best) {
                    dist[edge.to] = Some(candidate);
                    prev_edge[edge.to] = Some(edge_id);
                    heap.push(Reverse((candidate, edge.to)));
                }
            }
        }

        let weight = dist[to]?;
        let mut edges = Vec::new();
        let mut vertex = to;
        while let Some(edge_id) = prev_edge[vertex] {
            edges.push(edge_id);
            vertex = self.graph.edge(edge_id).from;
            if vertex == from {
                break;
            }
        }
        edges.reverse();

        trace!(from, to, edges = edges.len(), "route found");
        Some(RouteInfo { weight, edges })
    }
}
