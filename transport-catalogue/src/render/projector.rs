//! Projection of geographic coordinates onto the map canvas.

use crate::domain::Coordinates;

const EPSILON: f64 = 1e-6;

fn is_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// A point on the canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Scales a set of coordinates to fit a `width` x `height` canvas.
///
/// Longitude grows to the right and latitude grows upwards. A single zoom
/// factor is used for both axes, so shapes are not distorted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereProjector {
    padding: f64,
    min_lng: f64,
    max_lat: f64,
    zoom: f64,
}

impl SphereProjector {
    /// Fit `points` into the canvas, leaving `padding` on every side.
    ///
    /// With no points, or all points coincident, every coordinate maps to
    /// `(padding, padding)`.
    pub fn new(
        points: impl IntoIterator<Item = Coordinates>,
        width: f64,
        height: f64,
        padding: f64,
    ) -> Self {
        let mut points = points.into_iter().peekable();
        let Some(first) = points.peek().copied() else {
            return Self {
                padding,
                min_lng: 0.0,
                max_lat: 0.0,
                zoom: 0.0,
            };
        };

        let (mut min_lng, mut max_lng) = (first.lng, first.lng);
        let (mut min_lat, mut max_lat) = (first.lat, first.lat);
        for p in points {
            min_lng = min_lng.min(p.lng);
            max_lng = max_lng.max(p.lng);
            min_lat = min_lat.min(p.lat);
            max_lat = max_lat.max(p.lat);
        }

        let width_zoom =
            (!is_zero(max_lng - min_lng)).then(|| (width - 2.0 * padding) / (max_lng - min_lng));
        let height_zoom =
            (!is_zero(max_lat - min_lat)).then(|| (height - 2.0 * padding) / (max_lat - min_lat));

        let zoom = match (width_zoom, height_zoom) {
            (Some(w), Some(h)) => w.min(h),
            (Some(z), None) | (None, Some(z)) => z,
            (None, None) => 0.0,
        };

        Self {
            padding,
            min_lng,
            max_lat,
            zoom,
        }
    }

    /// Project coordinates onto the canvas.
    pub fn project(&self, coords: Coordinates) -> Point {
        Point {
            x: (coords.lng - self.min_lng) * self.zoom + self.padding,
            y: (self.max_lat - coords.lat) * self.zoom + self.padding,
        }
    }
}
