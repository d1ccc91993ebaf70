//! Aggregate statistics for a bus route.

use std::collections::HashSet;

use crate::domain::{Bus, Stop, compute_distance};

use super::DistanceIndex;

/// Summary of a bus route, computed over its expanded route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusStats {
    /// Stop calls along the expanded route.
    pub stop_count: usize,
    /// Distinct stops served.
    pub unique_stop_count: usize,
    /// Road length in meters.
    pub route_length: u64,
    /// Straight-line length in meters.
    pub geo_length: f64,
    /// Road length over straight-line length.
    ///
    /// Exactly 1.0 when the straight-line length is zero (a single stop or
    /// coincident stops), so the value is always finite.
    pub curvature: f64,
}

impl BusStats {
    /// Compute statistics for `bus`, resolving its stops in `stops`.
    pub(super) fn compute(bus: &Bus, stops: &[Stop], distances: &DistanceIndex) -> Self {
        let route: Vec<_> = bus.route().collect();
        let unique_stop_count = route.iter().collect::<HashSet<_>>().len();

        let mut route_length = 0u64;
        let mut geo_length = 0.0;
        for pair in route.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            route_length += u64::from(distances.get(from, to));
            geo_length += compute_distance(
                stops[from.index()].coordinates,
                stops[to.index()].coordinates,
            );
        }

        Self {
            stop_count: route.len(),
            unique_stop_count,
            route_length,
            geo_length,
            curvature: curvature(route_length, geo_length),
        }
    }
}

fn curvature(route_length: u64, geo_length: f64) -> f64 {
    if geo_length > 0.0 {
        route_length as f64 / geo_length
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinates, StopId};

    fn stops() -> Vec<Stop> {
        vec![
            Stop::new("A", Coordinates::new(55.611087, 37.20829)),
            Stop::new("B", Coordinates::new(55.595884, 37.209755)),
            Stop::new("C", Coordinates::new(55.632761, 37.333324)),
        ]
    }

    #[test]
    fn roundtrip_counts() {
        let bus = Bus::new("r", vec![StopId(0), StopId(1), StopId(2), StopId(0)], true);
        let stats = BusStats::compute(&bus, &stops(), &DistanceIndex::new());
        assert_eq!(stats.stop_count, 4);
        assert_eq!(stats.unique_stop_count, 3);
    }

    #[test]
    fn linear_counts_and_length() {
        let mut distances = DistanceIndex::new();
        distances.set(StopId(0), StopId(1), 3900);
        distances.set(StopId(1), StopId(2), 9900);
        distances.set(StopId(2), StopId(1), 100);

        let bus = Bus::new("l", vec![StopId(0), StopId(1), StopId(2)], false);
        let stats = BusStats::compute(&bus, &stops(), &distances);

        assert_eq!(stats.stop_count, 5);
        assert_eq!(stats.unique_stop_count, 3);
        // A->B, B->C, C->B, B->A (fallback)
        assert_eq!(stats.route_length, 3900 + 9900 + 100 + 3900);

        let stops = stops();
        let hop = |a: usize, b: usize| compute_distance(stops[a].coordinates, stops[b].coordinates);
        let geo = hop(0, 1) + hop(1, 2) + hop(2, 1) + hop(1, 0);
        assert!((stats.geo_length - geo).abs() < 1e-6);
        assert!((stats.curvature - stats.route_length as f64 / stats.geo_length).abs() < 1e-12);
        // Road shorter than the straight line here, and that is reported as is
        assert!(stats.curvature < 1.0);
    }

    #[test]
    fn curvature_is_road_over_geo() {
        let mut distances = DistanceIndex::new();
        distances.set(StopId(0), StopId(1), 3900);
        let bus = Bus::new("r", vec![StopId(0), StopId(1), StopId(0)], true);
        let stats = BusStats::compute(&bus, &stops(), &distances);

        let geo = 2.0 * compute_distance(stops()[0].coordinates, stops()[1].coordinates);
        assert_eq!(stats.route_length, 7800);
        assert!((stats.geo_length - geo).abs() < 1e-9);
        assert!((stats.curvature - 7800.0 / geo).abs() < 1e-12);
    }

    #[test]
    fn single_stop_curvature_is_one() {
        let bus = Bus::new("s", vec![StopId(0)], true);
        let stats = BusStats::compute(&bus, &stops(), &DistanceIndex::new());
        assert_eq!(stats.geo_length, 0.0);
        assert_eq!(stats.curvature, 1.0);
    }

    #[test]
    fn coincident_stops_curvature_is_one() {
        let stops = vec![
            Stop::new("X", Coordinates::new(10.0, 10.0)),
            Stop::new("Y", Coordinates::new(10.0, 10.0)),
        ];
        let mut distances = DistanceIndex::new();
        distances.set(StopId(0), StopId(1), 50);
        let bus = Bus::new("c", vec![StopId(0), StopId(1)], false);
        let stats = BusStats::compute(&bus, &stops, &distances);
        assert_eq!(stats.route_length, 100);
        assert_eq!(stats.curvature, 1.0);
    }

    #[test]
    fn empty_route() {
        let bus = Bus::new("e", vec![], true);
        let stats = BusStats::compute(&bus, &stops(), &DistanceIndex::new());
        assert_eq!(stats.stop_count, 0);
        assert_eq!(stats.unique_stop_count, 0);
        assert_eq!(stats.route_length, 0);
        assert_eq!(stats.curvature, 1.0);
    }
}
