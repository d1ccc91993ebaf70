//! Fastest itineraries between stops.
//!
//! [`TransportRouter`] turns a finished catalogue into an [`ItineraryGraph`]
//! once, then answers any number of point-to-point queries against it. A
//! query only reads: it resolves the stop names, runs the shortest-path
//! search between the two wait vertices, and reads each edge back as a leg.

mod graph_builder;
mod itinerary;
mod settings;

use tracing::trace;

use crate::catalogue::TransportCatalogue;
use crate::graph::RouteInfo;

pub use graph_builder::{EdgeKind, ItineraryGraph, Minutes};
pub use itinerary::{Itinerary, Leg};
pub use settings::{InvalidRoutingSettings, RoutingSettings, time_from_distance};

/// Error from an itinerary query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// The stop is not in the catalogue
    #[error("unknown stop: {0}")]
    UnknownStop(String),

    /// No combination of buses connects the stops
    #[error("no route from {from} to {to}")]
    NoRoute { from: String, to: String },
}

/// Itinerary engine over a read-only catalogue.
pub struct TransportRouter<'a> {
    catalogue: &'a TransportCatalogue,
    settings: RoutingSettings,
    graph: ItineraryGraph,
}

impl<'a> TransportRouter<'a> {
    /// Build the itinerary graph for `catalogue`.
    ///
    /// The catalogue must be fully populated; later additions are not seen.
    pub fn new(catalogue: &'a TransportCatalogue, settings: RoutingSettings) -> Self {
        let graph = ItineraryGraph::build(catalogue, &settings);
        Self {
            catalogue,
            settings,
            graph,
        }
    }

    /// Settings the graph was built with.
    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    /// The underlying graph.
    pub fn graph(&self) -> &ItineraryGraph {
        &self.graph
    }

    /// Find the fastest itinerary from one stop to another.
    ///
    /// A stop to itself is an empty itinerary. Unknown stops and
    /// unconnected stops are reported as errors, never as panics.
    pub fn find_route(&self, from: &str, to: &str) -> Result<Itinerary, RouteError> {
        let resolve = |name: &str| {
            self.catalogue
                .stop_id(name)
                .ok_or_else(|| RouteError::UnknownStop(name.to_string()))
        };
        let (from_id, to_id) = (resolve(from)?, resolve(to)?);

        if from_id == to_id {
            return Ok(Itinerary::empty());
        }

        let route = self
            .graph
            .router()
            .build_route(self.graph.wait_vertex(from_id), self.graph.wait_vertex(to_id))
            .ok_or_else(|| RouteError::NoRoute {
                from: from.to_string(),
                to: to.to_string(),
            })?;

        let itinerary = self.to_itinerary(&route);
        trace!(
            from,
            to,
            total_time = itinerary.total_time,
            legs = itinerary.legs.len(),
            "itinerary found"
        );
        Ok(itinerary)
    }

    fn to_itinerary(&self, route: &RouteInfo<Minutes>) -> Itinerary {
        let legs = route
            .edges
            .iter()
            .map(|&id| {
                let time = self.graph.edge(id).weight.into_inner();
                match self.graph.edge_kind(id) {
                    EdgeKind::Wait { stop } => Leg::Wait { stop, time },
                    EdgeKind::Ride { bus, span_count } => Leg::Ride {
                        bus,
                        span_count,
                        time,
                    },
                }
            })
            .collect();

        Itinerary {
            total_time: route.weight.into_inner(),
            legs,
        }
    }
}
