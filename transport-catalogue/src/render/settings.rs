//! Map styling.

use std::fmt;

use serde::Deserialize;

/// Error returned when render settings cannot produce a map.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid render settings: {reason}")]
pub struct InvalidRenderSettings {
    reason: &'static str,
}

/// An SVG color: a name, `rgb(...)` or `rgba(...)`.
///
/// Deserializes from a string, `[r, g, b]` or `[r, g, b, opacity]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Named(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, f64),
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(name) => f.write_str(name),
            Color::Rgb(r, g, b) => write!(f, "rgb({r},{g},{b})"),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({r},{g},{b},{a})"),
        }
    }
}

/// A label offset in pixels. Deserializes from `[dx, dy]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(from = "[f64; 2]")]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

impl From<[f64; 2]> for Offset {
    fn from([dx, dy]: [f64; 2]) -> Self {
        Self { dx, dy }
    }
}

/// Styling parameters for the SVG map.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RenderSettings {
    pub width: f64,
    pub height: f64,
    /// Margin between the map edge and the outermost stop.
    pub padding: f64,
    pub line_width: f64,
    pub stop_radius: f64,
    pub bus_label_font_size: u32,
    pub bus_label_offset: Offset,
    pub stop_label_font_size: u32,
    pub stop_label_offset: Offset,
    pub underlayer_color: Color,
    pub underlayer_width: f64,
    /// Route colors, assigned to buses in name order and reused cyclically.
    pub color_palette: Vec<Color>,
}

impl RenderSettings {
    /// Check that the settings can be used to draw a map.
    pub fn validate(&self) -> Result<(), InvalidRenderSettings> {
        if self.color_palette.is_empty() {
            return Err(InvalidRenderSettings {
                reason: "color palette must not be empty",
            });
        }
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(InvalidRenderSettings {
                reason: "width and height must be positive",
            });
        }
        if self.padding < 0.0 || 2.0 * self.padding > self.width.min(self.height) {
            return Err(InvalidRenderSettings {
                reason: "padding must fit within half of the smaller dimension",
            });
        }
        Ok(())
    }

    /// Palette color for the `index`-th rendered bus.
    pub fn route_color(&self, index: usize) -> &Color {
        &self.color_palette[index % self.color_palette.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "width": 1200.0,
            "height": 1200.0,
            "padding": 50.0,
            "line_width": 14.0,
            "stop_radius": 5.0,
            "bus_label_font_size": 20,
            "bus_label_offset": [7.0, 15.0],
            "stop_label_font_size": 20,
            "stop_label_offset": [7.0, -3.0],
            "underlayer_color": [255, 255, 255, 0.85],
            "underlayer_width": 3.0,
            "color_palette": ["green", [255, 160, 0], "red"]
        }"#
    }

    #[test]
    fn deserialize_settings() {
        let settings: RenderSettings = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(settings.bus_label_offset, Offset { dx: 7.0, dy: 15.0 });
        assert_eq!(settings.underlayer_color, Color::Rgba(255, 255, 255, 0.85));
        assert_eq!(
            settings.color_palette,
            vec![
                Color::Named("green".into()),
                Color::Rgb(255, 160, 0),
                Color::Named("red".into()),
            ]
        );
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn color_display() {
        assert_eq!(Color::Named("white".into()).to_string(), "white");
        assert_eq!(Color::Rgb(255, 160, 0).to_string(), "rgb(255,160,0)");
        assert_eq!(
            Color::Rgba(255, 255, 255, 0.85).to_string(),
            "rgba(255,255,255,0.85)"
        );
    }

    #[test]
    fn bad_color_rejected() {
        assert!(serde_json::from_str::<Color>("[1, 2]").is_err());
        assert!(serde_json::from_str::<Color>("[1, 2, 300]").is_err());
    }

    #[test]
    fn palette_cycles() {
        let settings: RenderSettings = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(settings.route_color(0), &Color::Named("green".into()));
        assert_eq!(settings.route_color(3), &Color::Named("green".into()));
        assert_eq!(settings.route_color(4), &Color::Rgb(255, 160, 0));
    }

    #[test]
    fn empty_palette_invalid() {
        let mut settings: RenderSettings = serde_json::from_str(sample_json()).unwrap();
        settings.color_palette.clear();
        assert_eq!(
            settings.validate().unwrap_err().to_string(),
            "invalid render settings: color palette must not be empty"
        );
    }

    #[test]
    fn oversized_padding_invalid() {
        let mut settings: RenderSettings = serde_json::from_str(sample_json()).unwrap();
        settings.padding = 700.0;
        assert!(settings.validate().is_err());
    }
}
