//! Conversion of the catalogue into a routable graph.
//!
//! Every stop gets two vertices: *wait* (standing at the stop) and *board*
//! (on a bus about to leave it). A WAIT edge joins them with the configured
//! wait time. For each bus direction, a RIDE edge runs from the board vertex
//! of every stop to the wait vertex of every later stop in that direction,
//! weighted with the accumulated riding time. Riding edges are never merged
//! across buses, so each one names exactly the bus to take.

use ordered_float::OrderedFloat;
use tracing::debug;

use crate::catalogue::TransportCatalogue;
use crate::domain::{BusId, StopId};
use crate::graph::{DirectedWeightedGraph, Edge, EdgeId, Router, VertexId};

use super::RoutingSettings;

/// Edge weight in minutes.
pub type Minutes = OrderedFloat<f64>;

/// What traversing an edge means to a passenger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Wait at `stop` for the next bus.
    Wait { stop: StopId },
    /// Ride `bus` across `span_count` consecutive stop-to-stop hops.
    Ride { bus: BusId, span_count: usize },
}

/// Wait and board vertices per stop, indexed by `StopId`.
#[derive(Debug, Clone, Default)]
struct StopVertices {
    wait: Vec<VertexId>,
    board: Vec<VertexId>,
}

/// The itinerary graph with its solver, built once per catalogue.
#[derive(Debug, Clone)]
pub struct ItineraryGraph {
    router: Router<Minutes>,
    vertices: StopVertices,
    /// Meaning of each edge, indexed by `EdgeId`.
    edge_kinds: Vec<EdgeKind>,
}

impl ItineraryGraph {
    /// Build the graph for every stop and bus in `catalogue`.
    pub fn build(catalogue: &TransportCatalogue, settings: &RoutingSettings) -> Self {
        let mut builder = GraphBuilder::new(catalogue.stop_count());

        for stop in (0..catalogue.stop_count()).map(StopId) {
            builder.add_wait_edge(stop, settings.bus_wait_time());
        }

        for (bus_id, bus) in catalogue.buses() {
            for direction in bus.directions() {
                builder.add_ride_edges(catalogue, settings, bus_id, &direction);
            }
        }

        let GraphBuilder {
            graph,
            vertices,
            edge_kinds,
        } = builder;
        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "itinerary graph built"
        );

        Self {
            router: Router::new(graph),
            vertices,
            edge_kinds,
        }
    }

    /// The vertex for waiting at `stop`.
    pub fn wait_vertex(&self, stop: StopId) -> VertexId {
        self.vertices.wait[stop.index()]
    }

    /// The vertex for being on a bus leaving `stop`.
    pub fn board_vertex(&self, stop: StopId) -> VertexId {
        self.vertices.board[stop.index()]
    }

    /// Meaning of an edge.
    pub fn edge_kind(&self, id: EdgeId) -> EdgeKind {
        self.edge_kinds[id]
    }

    /// Weighted endpoints of an edge.
    pub fn edge(&self, id: EdgeId) -> &Edge<Minutes> {
        self.router.graph().edge(id)
    }

    /// The shortest-path solver over this graph.
    pub fn router(&self) -> &Router<Minutes> {
        &self.router
    }

    pub fn edge_count(&self) -> usize {
        self.edge_kinds.len()
    }
}

struct GraphBuilder {
    graph: DirectedWeightedGraph<Minutes>,
    vertices: StopVertices,
    edge_kinds: Vec<EdgeKind>,
}

impl GraphBuilder {
    fn new(stop_count: usize) -> Self {
        let vertices = StopVertices {
            wait: (0..stop_count).map(|i| 2 * i).collect(),
            board: (0..stop_count).map(|i| 2 * i + 1).collect(),
        };
        Self {
            graph: DirectedWeightedGraph::new(2 * stop_count),
            vertices,
            edge_kinds: Vec::new(),
        }
    }

    fn add_edge(&mut self, from: VertexId, to: VertexId, minutes: f64, kind: EdgeKind) {
        let id = self.graph.add_edge(Edge {
            from,
            to,
            weight: OrderedFloat(minutes),
        });
        debug_assert_eq!(id, self.edge_kinds.len());
        self.edge_kinds.push(kind);
    }

    fn add_wait_edge(&mut self, stop: StopId, wait_time: f64) {
        let (wait, board) = (
            self.vertices.wait[stop.index()],
            self.vertices.board[stop.index()],
        );
        self.add_edge(wait, board, wait_time, EdgeKind::Wait { stop });
    }

    /// Add a ride edge from every stop of `stops` to every later stop.
    fn add_ride_edges(
        &mut self,
        catalogue: &TransportCatalogue,
        settings: &RoutingSettings,
        bus: BusId,
        stops: &[StopId],
    ) {
        for (i, &origin) in stops.iter().enumerate() {
            let board = self.vertices.board[origin.index()];
            let mut minutes = 0.0;
            for j in (i + 1)..stops.len() {
                minutes += settings.ride_time(catalogue.distance(stops[j - 1], stops[j]));
                let wait = self.vertices.wait[stops[j].index()];
                self.add_edge(
                    board,
                    wait,
                    minutes,
                    EdgeKind::Ride {
                        bus,
                        span_count: j - i,
                    },
                );
            }
        }
    }
}
