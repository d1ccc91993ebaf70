//! The transport catalogue: canonical stops, buses and road distances.
//!
//! The catalogue owns every entity in append-only arenas. It is populated
//! once (stops, then distances, then buses) and only read afterwards.

mod distances;
mod stats;

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::{debug, warn};

use crate::domain::{Bus, BusId, CatalogueError, Coordinates, Stop, StopId};

pub use distances::DistanceIndex;
pub use stats::BusStats;

/// In-memory transit network.
#[derive(Debug, Clone, Default)]
pub struct TransportCatalogue {
    stops: Vec<Stop>,
    buses: Vec<Bus>,
    stop_ids: HashMap<String, StopId>,
    /// Sorted so bus iteration is deterministic.
    bus_ids: BTreeMap<String, BusId>,
    /// Buses calling at each stop, indexed by `StopId`.
    stop_buses: Vec<BTreeSet<BusId>>,
    distances: DistanceIndex,
}

impl TransportCatalogue {
    /// Create an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stop. Names must be unique.
    pub fn add_stop(
        &mut self,
        name: impl Into<String>,
        coordinates: Coordinates,
    ) -> Result<StopId, CatalogueError> {
        let name = name.into();
        if self.stop_ids.contains_key(&name) {
            return Err(CatalogueError::DuplicateStop(name));
        }

        let id = StopId(self.stops.len());
        self.stop_ids.insert(name.clone(), id);
        self.stops.push(Stop::new(name, coordinates));
        self.stop_buses.push(BTreeSet::new());
        Ok(id)
    }

    /// Register a bus over already-registered stops.
    ///
    /// `stops` is the declared sequence; linear buses are expanded on
    /// traversal, not here.
    pub fn add_bus<S: AsRef<str>>(
        &mut self,
        name: impl Into<String>,
        stops: &[S],
        is_roundtrip: bool,
    ) -> Result<BusId, CatalogueError> {
        let name = name.into();
        if self.bus_ids.contains_key(&name) {
            return Err(CatalogueError::DuplicateBus(name));
        }

        let route = stops
            .iter()
            .map(|stop| {
                self.stop_id(stop.as_ref())
                    .ok_or_else(|| CatalogueError::UnknownStop {
                        bus: name.clone(),
                        stop: stop.as_ref().to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let id = BusId(self.buses.len());
        for stop in &route {
            self.stop_buses[stop.index()].insert(id);
        }
        debug!(bus = %name, stops = route.len(), is_roundtrip, "registered bus");
        self.bus_ids.insert(name.clone(), id);
        self.buses.push(Bus::new(name, route, is_roundtrip));
        Ok(id)
    }

    /// Declare the road distance from one stop to another, in meters.
    ///
    /// Redeclaring a pair keeps the last value. When the value changes, a
    /// warning is logged and the replaced value is returned.
    pub fn set_distance(
        &mut self,
        from: &str,
        to: &str,
        meters: u32,
    ) -> Result<Option<u32>, CatalogueError> {
        let resolve = |stop: &str| {
            self.stop_id(stop)
                .ok_or_else(|| CatalogueError::UnknownDistanceStop {
                    from: from.to_string(),
                    to: to.to_string(),
                    stop: stop.to_string(),
                })
        };
        let (from_id, to_id) = (resolve(from)?, resolve(to)?);

        let replaced = self.distances.set(from_id, to_id, meters);
        if let Some(previous) = replaced {
            warn!(
                from,
                to, previous, current = meters, "road distance redeclared with a different value"
            );
        }
        Ok(replaced)
    }

    /// Road distance between two stops, with reverse-direction fallback.
    /// Unknown pairs are zero.
    pub fn distance(&self, from: StopId, to: StopId) -> u32 {
        self.distances.get(from, to)
    }

    /// Look up a stop handle by name.
    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_ids.get(name).copied()
    }

    /// Look up a stop by name.
    pub fn find_stop(&self, name: &str) -> Option<&Stop> {
        self.stop_id(name).map(|id| self.stop(id))
    }

    /// Look up a bus handle by name.
    pub fn bus_id(&self, name: &str) -> Option<BusId> {
        self.bus_ids.get(name).copied()
    }

    /// Look up a bus by name.
    pub fn find_bus(&self, name: &str) -> Option<&Bus> {
        self.bus_id(name).map(|id| self.bus(id))
    }

    /// Resolve a stop handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle did not come from this catalogue.
    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.index()]
    }

    /// Resolve a bus handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle did not come from this catalogue.
    pub fn bus(&self, id: BusId) -> &Bus {
        &self.buses[id.index()]
    }

    /// All stops in registration order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// All buses ordered by name.
    pub fn buses(&self) -> impl Iterator<Item = (BusId, &Bus)> + '_ {
        self.bus_ids.values().map(|&id| (id, self.bus(id)))
    }

    /// Statistics for the named bus, or `None` if it is unknown.
    pub fn bus_stats(&self, name: &str) -> Option<BusStats> {
        let bus = self.find_bus(name)?;
        Some(BusStats::compute(bus, &self.stops, &self.distances))
    }

    /// Buses calling at the named stop, ordered by name.
    ///
    /// Returns `None` for an unknown stop and an empty list for a stop that
    /// no bus serves.
    pub fn buses_serving(&self, stop_name: &str) -> Option<Vec<&Bus>> {
        let id = self.stop_id(stop_name)?;
        let mut buses: Vec<&Bus> = self.stop_buses[id.index()]
            .iter()
            .map(|&bus| self.bus(bus))
            .collect();
        buses.sort_by(|a, b| a.name.cmp(&b.name));
        Some(buses)
    }

    /// Returns true if at least one bus calls at the stop.
    pub fn is_served(&self, id: StopId) -> bool {
        !self.stop_buses[id.index()].is_empty()
    }

    /// Number of registered stops.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Number of registered buses.
    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }
}
