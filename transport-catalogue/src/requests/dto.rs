//! Serde types for the JSON request document and its responses.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::catalogue::{BusStats, TransportCatalogue};
use crate::render::RenderSettings;
use crate::router::{Itinerary, Leg};

/// A whole request document.
///
/// Every section is optional; a document with only `stat_requests` answers
/// every query against an empty catalogue.
#[derive(Debug, Default, Deserialize)]
pub struct RequestDocument {
    /// Stops and buses to load.
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,

    /// Itinerary graph parameters. Required by `Route` queries.
    #[serde(default)]
    pub routing_settings: Option<RoutingSettingsRequest>,

    /// Map styling. Required by `Map` queries.
    #[serde(default)]
    pub render_settings: Option<RenderSettings>,

    /// Queries, answered in order.
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

/// A stop or bus declaration.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop(StopRequest),
    Bus(BusRequest),
}

#[derive(Debug, Clone, Deserialize)]
pub struct StopRequest {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,

    /// Road distance in meters from this stop to each named neighbour, in
    /// document order. A repeated neighbour is kept, so the catalogue can
    /// report the redeclaration.
    #[serde(default, deserialize_with = "map_entries")]
    pub road_distances: Vec<(String, u32)>,
}

/// Read a JSON object as its entries, keeping repeated keys.
fn map_entries<'de, D>(deserializer: D) -> Result<Vec<(String, u32)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = Vec<(String, u32)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an object of stop names to distances in meters")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor)
}

#[derive(Debug, Clone, Deserialize)]
pub struct BusRequest {
    pub name: String,

    /// Stops as declared. A roundtrip lists its first stop again at the end.
    pub stops: Vec<String>,

    pub is_roundtrip: bool,
}

/// Raw routing settings. Both fields are mandatory.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RoutingSettingsRequest {
    /// Minutes.
    pub bus_wait_time: f64,
    /// km/h.
    pub bus_velocity: f64,
}

/// A query against the loaded catalogue.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Bus { id: i64, name: String },
    Stop { id: i64, name: String },
    Map { id: i64 },
    Route { id: i64, from: String, to: String },
}

impl StatRequest {
    pub fn id(&self) -> i64 {
        match self {
            StatRequest::Bus { id, .. }
            | StatRequest::Stop { id, .. }
            | StatRequest::Map { id }
            | StatRequest::Route { id, .. } => *id,
        }
    }
}

/// One answer, serialized as a flat JSON object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Bus(BusResponse),
    Stop(StopResponse),
    Map(MapResponse),
    Route(RouteResponse),
    NotFound(NotFoundResponse),
}

impl Response {
    pub fn not_found(request_id: i64) -> Self {
        Response::NotFound(NotFoundResponse {
            request_id,
            error_message: "not found".to_string(),
        })
    }

    pub fn request_id(&self) -> i64 {
        match self {
            Response::Bus(r) => r.request_id,
            Response::Stop(r) => r.request_id,
            Response::Map(r) => r.request_id,
            Response::Route(r) => r.request_id,
            Response::NotFound(r) => r.request_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusResponse {
    pub curvature: f64,
    pub request_id: i64,
    /// Meters.
    pub route_length: u64,
    pub stop_count: usize,
    pub unique_stop_count: usize,
}

impl BusResponse {
    pub fn new(request_id: i64, stats: &BusStats) -> Self {
        Self {
            curvature: stats.curvature,
            request_id,
            route_length: stats.route_length,
            stop_count: stats.stop_count,
            unique_stop_count: stats.unique_stop_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopResponse {
    /// Bus names, sorted.
    pub buses: Vec<String>,
    pub request_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapResponse {
    /// The SVG document.
    pub map: String,
    pub request_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResponse {
    pub items: Vec<RouteItem>,
    pub request_id: i64,
    /// Minutes.
    pub total_time: f64,
}

impl RouteResponse {
    pub fn new(request_id: i64, itinerary: &Itinerary, catalogue: &TransportCatalogue) -> Self {
        Self {
            items: itinerary
                .legs
                .iter()
                .map(|leg| RouteItem::new(leg, catalogue))
                .collect(),
            request_id,
            total_time: itinerary.total_time,
        }
    }
}

/// One leg of an itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RouteItem {
    Wait {
        stop_name: String,
        time: f64,
    },
    Bus {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

impl RouteItem {
    fn new(leg: &Leg, catalogue: &TransportCatalogue) -> Self {
        let name = leg.name(catalogue).to_string();
        match *leg {
            Leg::Wait { time, .. } => RouteItem::Wait {
                stop_name: name,
                time,
            },
            Leg::Ride {
                span_count, time, ..
            } => RouteItem::Bus {
                bus: name,
                span_count,
                time,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotFoundResponse {
    pub error_message: String,
    pub request_id: i64,
}
