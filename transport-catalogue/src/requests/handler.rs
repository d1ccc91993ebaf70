//! Loading a request document and answering its queries.

use std::io::{Read, Write};

use tracing::{debug, trace};

use crate::catalogue::TransportCatalogue;
use crate::domain::Coordinates;
use crate::render::MapRenderer;
use crate::router::{RoutingSettings, TransportRouter};

use super::dto::{
    BaseRequest, BusResponse, MapResponse, RequestDocument, Response, RouteResponse,
    StatRequest, StopResponse,
};
use super::error::RequestError;

/// A loaded catalogue plus the validated settings from its document.
#[derive(Debug)]
pub struct RequestHandler {
    catalogue: TransportCatalogue,
    routing: Option<RoutingSettings>,
    renderer: Option<MapRenderer>,
    /// Road distances declared again with a different value.
    redeclared_distances: usize,
}

impl RequestHandler {
    /// Build the catalogue and validate both settings sections.
    ///
    /// Stops are registered first, then road distances, then buses, so
    /// declaration order inside `base_requests` does not matter.
    pub fn load(document: &RequestDocument) -> Result<Self, RequestError> {
        let routing = document
            .routing_settings
            .map(|raw| RoutingSettings::new(raw.bus_wait_time, raw.bus_velocity))
            .transpose()?;
        let renderer = document
            .render_settings
            .clone()
            .map(MapRenderer::new)
            .transpose()?;

        let mut catalogue = TransportCatalogue::new();
        let stops = document.base_requests.iter().filter_map(|r| match r {
            BaseRequest::Stop(stop) => Some(stop),
            BaseRequest::Bus(_) => None,
        });
        let buses = document.base_requests.iter().filter_map(|r| match r {
            BaseRequest::Bus(bus) => Some(bus),
            BaseRequest::Stop(_) => None,
        });

        for stop in stops.clone() {
            catalogue.add_stop(
                stop.name.as_str(),
                Coordinates::new(stop.latitude, stop.longitude),
            )?;
        }
        let mut redeclared = 0usize;
        for stop in stops {
            for (to, meters) in &stop.road_distances {
                if catalogue.set_distance(&stop.name, to, *meters)?.is_some() {
                    redeclared += 1;
                }
            }
        }
        for bus in buses {
            catalogue.add_bus(bus.name.as_str(), bus.stops.as_slice(), bus.is_roundtrip)?;
        }

        debug!(
            stops = catalogue.stop_count(),
            buses = catalogue.bus_count(),
            redeclared,
            "catalogue loaded"
        );

        Ok(Self {
            catalogue,
            routing,
            renderer,
            redeclared_distances: redeclared,
        })
    }

    pub fn catalogue(&self) -> &TransportCatalogue {
        &self.catalogue
    }

    /// How many road distances were overwritten with a different value
    /// while loading. Each one was also logged as a warning.
    pub fn redeclared_distances(&self) -> usize {
        self.redeclared_distances
    }

    /// Answer `requests` in order.
    ///
    /// Fails before answering anything if a query needs a settings section
    /// the document lacks. The itinerary graph is built on the first
    /// `Route` query and reused for the rest.
    pub fn answer(&self, requests: &[StatRequest]) -> Result<Vec<Response>, RequestError> {
        self.check_sections(requests)?;

        let mut router: Option<TransportRouter<'_>> = None;
        let mut responses = Vec::with_capacity(requests.len());

        for request in requests {
            let id = request.id();
            let response = match request {
                StatRequest::Bus { name, .. } => match self.catalogue.bus_stats(name) {
                    Some(stats) => Response::Bus(BusResponse::new(id, &stats)),
                    None => Response::not_found(id),
                },
                StatRequest::Stop { name, .. } => match self.catalogue.buses_serving(name) {
                    Some(buses) => Response::Stop(StopResponse {
                        buses: buses.into_iter().map(|bus| bus.name.clone()).collect(),
                        request_id: id,
                    }),
                    None => Response::not_found(id),
                },
                StatRequest::Map { .. } => {
                    let renderer = self.renderer.as_ref().ok_or(MISSING_RENDER)?;
                    Response::Map(MapResponse {
                        map: renderer.render(&self.catalogue)?,
                        request_id: id,
                    })
                }
                StatRequest::Route { from, to, .. } => {
                    let settings = self.routing.ok_or(MISSING_ROUTING)?;
                    let router = router
                        .get_or_insert_with(|| TransportRouter::new(&self.catalogue, settings));
                    match router.find_route(from, to) {
                        Ok(itinerary) => {
                            Response::Route(RouteResponse::new(id, &itinerary, &self.catalogue))
                        }
                        Err(err) => {
                            trace!(id, %err, "route request not answered");
                            Response::not_found(id)
                        }
                    }
                }
            };
            responses.push(response);
        }

        Ok(responses)
    }

    fn check_sections(&self, requests: &[StatRequest]) -> Result<(), RequestError> {
        for request in requests {
            match request {
                StatRequest::Route { .. } if self.routing.is_none() => {
                    return Err(MISSING_ROUTING);
                }
                StatRequest::Map { .. } if self.renderer.is_none() => {
                    return Err(MISSING_RENDER);
                }
                _ => {}
            }
        }
        Ok(())
    }
}

const MISSING_ROUTING: RequestError = RequestError::MissingSection {
    request: "Route",
    section: "routing_settings",
};

const MISSING_RENDER: RequestError = RequestError::MissingSection {
    request: "Map",
    section: "render_settings",
};

/// Load a document and answer all of its queries.
pub fn process(document: &RequestDocument) -> Result<Vec<Response>, RequestError> {
    RequestHandler::load(document)?.answer(&document.stat_requests)
}

/// Read a document from `input`, answer it, and write the JSON response
/// array to `output`.
pub fn run(input: impl Read, mut output: impl Write, pretty: bool) -> Result<(), RequestError> {
    let document: RequestDocument = serde_json::from_reader(input)?;
    let responses = process(&document)?;

    if pretty {
        serde_json::to_writer_pretty(&mut output, &responses)?;
    } else {
        serde_json::to_writer(&mut output, &responses)?;
    }
    writeln!(output)?;
    output.flush()?;
    Ok(())
}
