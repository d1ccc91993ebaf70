//! Stop types.

use std::fmt;

use super::Coordinates;

/// Stable handle to a stop owned by a catalogue.
///
/// Handles are dense indices assigned in registration order, so they can be
/// used directly to index per-stop arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StopId(pub usize);

impl StopId {
    /// Returns the handle as an array index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named point where buses call.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    /// Unique stop name.
    pub name: String,
    /// Geographic position.
    pub coordinates: Coordinates,
}

impl Stop {
    /// Creates a new stop.
    pub fn new(name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            name: name.into(),
            coordinates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_id_index() {
        assert_eq!(StopId(7).index(), 7);
        assert_eq!(StopId(7).to_string(), "#7");
    }

    #[test]
    fn stop_id_ordering_follows_index() {
        assert!(StopId(1) < StopId(2));
    }
}
