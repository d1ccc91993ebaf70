//! Domain types for the transport catalogue.
//!
//! Stops and buses are plain values owned by the catalogue. Everything else
//! refers to them through `StopId` and `BusId` handles, which stay valid for
//! the catalogue's lifetime because entities are never removed.

mod bus;
mod error;
mod geo;
mod stop;

pub use bus::{Bus, BusId};
pub use error::CatalogueError;
pub use geo::{Coordinates, EARTH_RADIUS_M, compute_distance};
pub use stop::{Stop, StopId};
