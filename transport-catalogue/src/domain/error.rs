//! Domain error types.
//!
//! These errors represent data-integrity violations while the catalogue is
//! being populated. Lookups of absent entities are not errors: they return
//! `None` so callers can answer "not found" without aborting a batch.

/// Errors raised while registering stops, buses and distances.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueError {
    /// A stop with this name is already registered
    #[error("stop {0:?} is already registered")]
    DuplicateStop(String),

    /// A bus with this name is already registered
    #[error("bus {0:?} is already registered")]
    DuplicateBus(String),

    /// A bus references a stop that was never registered
    #[error("bus {bus:?} references unknown stop {stop:?}")]
    UnknownStop { bus: String, stop: String },

    /// A road distance references a stop that was never registered
    #[error("road distance {from:?} -> {to:?} references unknown stop {stop:?}")]
    UnknownDistanceStop {
        from: String,
        to: String,
        stop: String,
    },
}
