//! Itinerary types.
//!
//! An `Itinerary` is the passenger-facing reading of a shortest path: a
//! sequence of waits and rides with the time each takes.

use crate::catalogue::TransportCatalogue;
use crate::domain::{BusId, StopId};

/// One step of an itinerary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Leg {
    /// Wait at a stop for the next bus.
    Wait { stop: StopId, time: f64 },
    /// Ride a bus for `span_count` stop-to-stop hops.
    Ride {
        bus: BusId,
        span_count: usize,
        time: f64,
    },
}

impl Leg {
    /// Minutes spent on this leg.
    pub fn time(&self) -> f64 {
        match self {
            Leg::Wait { time, .. } | Leg::Ride { time, .. } => *time,
        }
    }

    /// Returns true if this is a wait.
    pub fn is_wait(&self) -> bool {
        matches!(self, Leg::Wait { .. })
    }

    /// Returns true if this is a ride.
    pub fn is_ride(&self) -> bool {
        matches!(self, Leg::Ride { .. })
    }

    /// The stop (for a wait) or bus (for a ride) name.
    pub fn name<'c>(&self, catalogue: &'c TransportCatalogue) -> &'c str {
        match self {
            Leg::Wait { stop, .. } => &catalogue.stop(*stop).name,
            Leg::Ride { bus, .. } => &catalogue.bus(*bus).name,
        }
    }
}

/// The fastest way between two stops.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Itinerary {
    /// Total minutes, as reported by the solver.
    pub total_time: f64,
    /// Legs in travel order.
    pub legs: Vec<Leg>,
}

impl Itinerary {
    /// The itinerary from a stop to itself: no legs, no time.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if there is nothing to do.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Sum of leg times, in travel order.
    pub fn legs_time(&self) -> f64 {
        self.legs.iter().map(Leg::time).fold(0.0, |acc, t| acc + t)
    }

    /// Number of buses boarded.
    pub fn ride_count(&self) -> usize {
        self.legs.iter().filter(|leg| leg.is_ride()).count()
    }

    /// Number of changes between buses.
    pub fn transfer_count(&self) -> usize {
        self.ride_count().saturating_sub(1)
    }
}
