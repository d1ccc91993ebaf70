//! Bus route types.
//!
//! A bus stores its stops exactly as declared. A linear (non-roundtrip) bus
//! runs the declared sequence forward and then back again, so its *expanded*
//! route `[A, B, C]` is `[A, B, C, B, A]`. A roundtrip bus declares its full
//! loop, typically ending where it started.

use std::fmt;

use super::StopId;

/// Stable handle to a bus owned by a catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BusId(pub usize);

impl BusId {
    /// Returns the handle as an array index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for BusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named bus route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bus {
    /// Unique bus name.
    pub name: String,
    /// Stops in declared order.
    pub stops: Vec<StopId>,
    /// Whether the declared stops already form the full loop.
    pub is_roundtrip: bool,
}

impl Bus {
    /// Creates a new bus.
    pub fn new(name: impl Into<String>, stops: Vec<StopId>, is_roundtrip: bool) -> Self {
        Self {
            name: name.into(),
            stops,
            is_roundtrip,
        }
    }

    /// Iterates the expanded route: forward, then (for linear buses) back
    /// again without repeating the turnaround stop.
    ///
    /// # Examples
    ///
    /// ```
    /// use transport_catalogue::domain::{Bus, StopId};
    ///
    /// let bus = Bus::new("750", vec![StopId(0), StopId(1), StopId(2)], false);
    /// let route: Vec<_> = bus.route().map(|s| s.0).collect();
    /// assert_eq!(route, vec![0, 1, 2, 1, 0]);
    /// ```
    pub fn route(&self) -> impl Iterator<Item = StopId> + '_ {
        let back: &[StopId] = if self.is_roundtrip || self.stops.is_empty() {
            &[]
        } else {
            &self.stops[..self.stops.len() - 1]
        };
        self.stops.iter().chain(back.iter().rev()).copied()
    }

    /// Number of stop calls along the expanded route.
    pub fn route_len(&self) -> usize {
        match (self.is_roundtrip, self.stops.len()) {
            (true, n) | (false, n @ 0) => n,
            (false, n) => 2 * n - 1,
        }
    }

    /// The directional stop sequences actually operated: the declared order,
    /// plus the reversed order for linear buses.
    pub fn directions(&self) -> Vec<Vec<StopId>> {
        let forward = self.stops.clone();
        if self.is_roundtrip {
            vec![forward]
        } else {
            let backward = self.stops.iter().rev().copied().collect();
            vec![forward, backward]
        }
    }

    /// The far terminus of a linear bus, when it differs from the first stop.
    ///
    /// Roundtrip buses have a single terminus and return `None`.
    pub fn turnaround_stop(&self) -> Option<StopId> {
        if self.is_roundtrip {
            return None;
        }
        let first = *self.stops.first()?;
        let last = *self.stops.last()?;
        (first != last).then_some(last)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The expanded route length always matches route_len
        #[test]
        fn route_len_matches_iterator(stops in proptest::collection::vec(0usize..10, 0..12), roundtrip: bool) {
            let bus = Bus::new("b", stops.into_iter().map(StopId).collect(), roundtrip);
            prop_assert_eq!(bus.route().count(), bus.route_len());
        }

        /// A linear route is a palindrome
        #[test]
        fn linear_route_is_palindrome(stops in proptest::collection::vec(0usize..10, 1..12)) {
            let bus = Bus::new("b", stops.into_iter().map(StopId).collect(), false);
            let route: Vec<_> = bus.route().collect();
            let mut reversed = route.clone();
            reversed.reverse();
            prop_assert_eq!(route, reversed);
        }
    }
}
