//! Road distances between stops.
//!
//! Distances are declared per ordered pair and looked up with a fallback:
//! `(A, B)` if declared, else `(B, A)`, else zero.

use std::collections::HashMap;

use crate::domain::StopId;

/// Pairwise road distance table, in meters.
#[derive(Debug, Clone, Default)]
pub struct DistanceIndex {
    distances: HashMap<(StopId, StopId), u32>,
}

impl DistanceIndex {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the road distance from `from` to `to`.
    ///
    /// Redeclaring a pair overwrites it. Returns the replaced value when it
    /// differed from the new one, so callers can report the conflict.
    pub fn set(&mut self, from: StopId, to: StopId, meters: u32) -> Option<u32> {
        self.distances
            .insert((from, to), meters)
            .filter(|previous| *previous != meters)
    }

    /// The distance exactly as declared for this ordered pair.
    pub fn declared(&self, from: StopId, to: StopId) -> Option<u32> {
        self.distances.get(&(from, to)).copied()
    }

    /// Road distance from `from` to `to`, falling back to the reverse
    /// direction and then to zero.
    pub fn get(&self, from: StopId, to: StopId) -> u32 {
        self.declared(from, to)
            .or_else(|| self.declared(to, from))
            .unwrap_or(0)
    }

    /// Number of declared ordered pairs.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns true if no distance has been declared.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}
