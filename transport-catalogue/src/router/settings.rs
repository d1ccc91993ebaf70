//! Routing configuration for the itinerary engine.

const METERS_PER_KM: f64 = 1000.0;
const MINUTES_PER_HOUR: f64 = 60.0;

/// Error returned when routing settings are out of range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid routing settings: {reason}")]
pub struct InvalidRoutingSettings {
    reason: &'static str,
}

/// Parameters for building the itinerary graph.
///
/// There is no `Default`: the caller must state the bus velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutingSettings {
    /// Time spent waiting for any bus at a stop (minutes).
    bus_wait_time: f64,

    /// Bus speed (km/h).
    bus_velocity: f64,
}

impl RoutingSettings {
    /// Create settings, rejecting negative or non-finite wait times and
    /// non-positive or non-finite velocities.
    ///
    /// # Examples
    ///
    /// ```
    /// use transport_catalogue::router::RoutingSettings;
    ///
    /// let settings = RoutingSettings::new(6.0, 40.0).unwrap();
    /// assert_eq!(settings.bus_wait_time(), 6.0);
    ///
    /// assert!(RoutingSettings::new(6.0, 0.0).is_err());
    /// assert!(RoutingSettings::new(-1.0, 40.0).is_err());
    /// ```
    pub fn new(bus_wait_time: f64, bus_velocity: f64) -> Result<Self, InvalidRoutingSettings> {
        if !bus_wait_time.is_finite() || bus_wait_time < 0.0 {
            return Err(InvalidRoutingSettings {
                reason: "bus wait time must be a non-negative number of minutes",
            });
        }
        if !bus_velocity.is_finite() || bus_velocity <= 0.0 {
            return Err(InvalidRoutingSettings {
                reason: "bus velocity must be a positive number of km/h",
            });
        }
        Ok(Self {
            bus_wait_time,
            bus_velocity,
        })
    }

    /// Wait time at a stop, in minutes.
    pub fn bus_wait_time(&self) -> f64 {
        self.bus_wait_time
    }

    /// Bus velocity, in km/h.
    pub fn bus_velocity(&self) -> f64 {
        self.bus_velocity
    }

    /// Riding time over `meters` at the configured velocity.
    pub fn ride_time(&self, meters: u32) -> f64 {
        time_from_distance(meters, self.bus_velocity)
    }
}

/// Minutes needed to cover `meters` at `velocity_kmh`.
pub fn time_from_distance(meters: u32, velocity_kmh: f64) -> f64 {
    (f64::from(meters) / METERS_PER_KM) / velocity_kmh * MINUTES_PER_HOUR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_settings() {
        let settings = RoutingSettings::new(6.0, 40.0).unwrap();
        assert_eq!(settings.bus_wait_time(), 6.0);
        assert_eq!(settings.bus_velocity(), 40.0);
    }

    #[test]
    fn zero_wait_is_allowed() {
        assert!(RoutingSettings::new(0.0, 1.0).is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(RoutingSettings::new(-0.5, 40.0).is_err());
        assert!(RoutingSettings::new(f64::NAN, 40.0).is_err());
        assert!(RoutingSettings::new(6.0, -40.0).is_err());
        assert!(RoutingSettings::new(6.0, f64::INFINITY).is_err());

        let err = RoutingSettings::new(6.0, 0.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid routing settings: bus velocity must be a positive number of km/h"
        );
    }

    #[test]
    fn ride_time_formula() {
        let settings = RoutingSettings::new(6.0, 40.0).unwrap();
        assert_eq!(settings.ride_time(3900), (3900.0 / 1000.0) / 40.0 * 60.0);
        assert!((settings.ride_time(3900) - 5.85).abs() < 1e-12);
        assert_eq!(settings.ride_time(0), 0.0);
    }

    #[test]
    fn one_km_at_sixty() {
        assert_eq!(time_from_distance(1000, 60.0), 1.0);
    }
}
