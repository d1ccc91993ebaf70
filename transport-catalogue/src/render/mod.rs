//! SVG map of the bus network.
//!
//! The map is drawn in four layers, bottom to top: route lines, bus name
//! labels, stop circles, stop name labels. Buses are drawn in name order and
//! stops in stop-name order, so the output is byte-for-byte reproducible.

mod number;
mod projector;
mod settings;

use std::collections::BTreeMap;

use askama::Template;
use tracing::debug;

use crate::catalogue::TransportCatalogue;
use crate::domain::Bus;

use number::SvgNumber;

pub use projector::{Point, SphereProjector};
pub use settings::{Color, InvalidRenderSettings, Offset, RenderSettings};

/// One bus route line.
#[derive(Debug, Clone)]
struct RouteLine<'a> {
    points: String,
    color: &'a Color,
}

/// A bus name at one of its termini.
#[derive(Debug, Clone)]
struct BusLabel<'a> {
    name: &'a str,
    x: SvgNumber,
    y: SvgNumber,
    color: &'a Color,
}

/// A served stop.
#[derive(Debug, Clone)]
struct StopMark<'a> {
    name: &'a str,
    x: SvgNumber,
    y: SvgNumber,
}

/// Numeric styling, formatted for attributes.
#[derive(Debug, Clone)]
struct Style<'a> {
    line_width: SvgNumber,
    stop_radius: SvgNumber,
    underlayer_color: &'a Color,
    underlayer_width: SvgNumber,
    bus_label_font_size: u32,
    bus_label_dx: SvgNumber,
    bus_label_dy: SvgNumber,
    stop_label_font_size: u32,
    stop_label_dx: SvgNumber,
    stop_label_dy: SvgNumber,
}

impl<'a> Style<'a> {
    fn new(settings: &'a RenderSettings) -> Self {
        Self {
            line_width: SvgNumber(settings.line_width),
            stop_radius: SvgNumber(settings.stop_radius),
            underlayer_color: &settings.underlayer_color,
            underlayer_width: SvgNumber(settings.underlayer_width),
            bus_label_font_size: settings.bus_label_font_size,
            bus_label_dx: SvgNumber(settings.bus_label_offset.dx),
            bus_label_dy: SvgNumber(settings.bus_label_offset.dy),
            stop_label_font_size: settings.stop_label_font_size,
            stop_label_dx: SvgNumber(settings.stop_label_offset.dx),
            stop_label_dy: SvgNumber(settings.stop_label_offset.dy),
        }
    }
}

#[derive(Template)]
#[template(path = "map.svg", escape = "html")]
struct MapTemplate<'a> {
    style: Style<'a>,
    routes: Vec<RouteLine<'a>>,
    bus_labels: Vec<BusLabel<'a>>,
    stops: Vec<StopMark<'a>>,
}

/// Renders a catalogue as an SVG document.
#[derive(Debug, Clone)]
pub struct MapRenderer {
    settings: RenderSettings,
}

impl MapRenderer {
    /// Create a renderer, rejecting settings that cannot draw a map.
    pub fn new(settings: RenderSettings) -> Result<Self, InvalidRenderSettings> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Draw every bus with at least one stop.
    pub fn render(&self, catalogue: &TransportCatalogue) -> Result<String, askama::Error> {
        let buses: Vec<&Bus> = catalogue
            .buses()
            .map(|(_, bus)| bus)
            .filter(|bus| !bus.stops.is_empty())
            .collect();

        let projector = SphereProjector::new(
            buses
                .iter()
                .flat_map(|bus| bus.stops.iter())
                .map(|&stop| catalogue.stop(stop).coordinates),
            self.settings.width,
            self.settings.height,
            self.settings.padding,
        );
        let at = |stop| projector.project(catalogue.stop(stop).coordinates);

        let mut routes = Vec::with_capacity(buses.len());
        let mut bus_labels = Vec::new();
        let mut stops = BTreeMap::new();

        for (index, bus) in buses.iter().enumerate() {
            let color = self.settings.route_color(index);

            let points: Vec<String> = bus
                .route()
                .map(|stop| {
                    let p = at(stop);
                    format!("{},{}", SvgNumber(p.x), SvgNumber(p.y))
                })
                .collect();
            routes.push(RouteLine {
                points: points.join(" "),
                color,
            });

            let termini = bus.stops.first().copied().into_iter().chain(bus.turnaround_stop());
            for stop in termini {
                let p = at(stop);
                bus_labels.push(BusLabel {
                    name: &bus.name,
                    x: SvgNumber(p.x),
                    y: SvgNumber(p.y),
                    color,
                });
            }

            for &stop in &bus.stops {
                let name = catalogue.stop(stop).name.as_str();
                stops.entry(name).or_insert_with(|| at(stop));
            }
        }

        debug!(
            buses = routes.len(),
            stops = stops.len(),
            "rendering map"
        );

        MapTemplate {
            style: Style::new(&self.settings),
            routes,
            bus_labels,
            stops: stops
                .into_iter()
                .map(|(name, p)| StopMark {
                    name,
                    x: SvgNumber(p.x),
                    y: SvgNumber(p.y),
                })
                .collect(),
        }
        .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinates;

    fn settings() -> RenderSettings {
        RenderSettings {
            width: 600.0,
            height: 400.0,
            padding: 50.0,
            line_width: 14.0,
            stop_radius: 5.0,
            bus_label_font_size: 20,
            bus_label_offset: Offset { dx: 7.0, dy: 15.0 },
            stop_label_font_size: 18,
            stop_label_offset: Offset { dx: 7.0, dy: -3.0 },
            underlayer_color: Color::Rgba(255, 255, 255, 0.85),
            underlayer_width: 3.0,
            color_palette: vec![Color::Named("green".into()), Color::Rgb(255, 160, 0)],
        }
    }

    fn catalogue() -> TransportCatalogue {
        let mut catalogue = TransportCatalogue::new();
        catalogue
            .add_stop("A", Coordinates::new(10.0, 20.0))
            .unwrap();
        catalogue
            .add_stop("B", Coordinates::new(11.0, 22.0))
            .unwrap();
        catalogue
            .add_stop("C & <D>", Coordinates::new(10.5, 21.0))
            .unwrap();
        catalogue
            .add_stop("Unserved", Coordinates::new(80.0, 80.0))
            .unwrap();
        catalogue.add_bus("2", &["B", "C & <D>"], true).unwrap();
        catalogue.add_bus("1", &["A", "B"], false).unwrap();
        catalogue.add_bus("0-empty", &[] as &[&str], true).unwrap();
        catalogue
    }

    #[test]
    fn rejects_empty_palette() {
        let mut settings = settings();
        settings.color_palette.clear();
        assert!(MapRenderer::new(settings).is_err());
    }

    #[test]
    fn keeps_validated_settings() {
        let renderer = MapRenderer::new(settings()).unwrap();
        assert_eq!(renderer.settings(), &settings());
    }

    #[test]
    fn document_structure() {
        let renderer = MapRenderer::new(settings()).unwrap();
        let svg = renderer.render(&catalogue()).unwrap();

        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>"));
        assert!(svg.contains("<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn routes_in_name_order_with_cycling_palette() {
        let renderer = MapRenderer::new(settings()).unwrap();
        let svg = renderer.render(&catalogue()).unwrap();

        let polylines: Vec<_> = svg.lines().filter(|l| l.contains("<polyline")).collect();
        assert_eq!(polylines.len(), 2);
        // Bus "1" first: A -> B -> A, drawn in green
        assert!(polylines[0].contains("points=\"50,300 550,50 50,300\""));
        assert!(polylines[0].contains("stroke=\"green\""));
        assert!(polylines[1].contains("stroke=\"rgb(255,160,0)\""));
    }

    #[test]
    fn linear_bus_labelled_at_both_ends() {
        let renderer = MapRenderer::new(settings()).unwrap();
        let svg = renderer.render(&catalogue()).unwrap();

        let bus_one_labels = svg
            .lines()
            .filter(|l| l.contains("font-weight=\"bold\"") && l.ends_with(">1</text>"))
            .count();
        // Underlayer and label at each of two termini
        assert_eq!(bus_one_labels, 4);

        let bus_two_labels = svg
            .lines()
            .filter(|l| l.contains("font-weight=\"bold\"") && l.ends_with(">2</text>"))
            .count();
        assert_eq!(bus_two_labels, 2);
    }

    #[test]
    fn only_served_stops_drawn_and_escaped() {
        let renderer = MapRenderer::new(settings()).unwrap();
        let svg = renderer.render(&catalogue()).unwrap();

        assert_eq!(svg.lines().filter(|l| l.contains("<circle")).count(), 3);
        assert!(!svg.contains("Unserved"));
        assert!(svg.contains("C &amp; &lt;D&gt;"));
        assert!(!svg.contains("C & <D>"));
    }

    #[test]
    fn coordinates_use_six_significant_digits() {
        let mut catalogue = TransportCatalogue::new();
        catalogue
            .add_stop("P", Coordinates::new(10.0, 20.0))
            .unwrap();
        catalogue
            .add_stop("Q", Coordinates::new(13.0, 23.0))
            .unwrap();
        catalogue
            .add_stop("R", Coordinates::new(11.0, 21.0))
            .unwrap();
        catalogue.add_bus("7", &["P", "R", "Q"], true).unwrap();

        let mut settings = settings();
        settings.line_width = 2.0 / 3.0;
        let svg = MapRenderer::new(settings).unwrap().render(&catalogue).unwrap();

        // Zoom is 300 / 3 = 100; R lands at (150, 250) and P at (50, 350)
        assert!(svg.contains("points=\"50,350 150,250 350,50\""));
        assert!(svg.contains("stroke-width=\"0.666667\""));
        assert!(svg.contains("cx=\"150\" cy=\"250\""));
    }

    #[test]
    fn empty_catalogue_renders_empty_document() {
        let renderer = MapRenderer::new(settings()).unwrap();
        let svg = renderer.render(&TransportCatalogue::new()).unwrap();
        assert!(!svg.contains("<polyline"));
        assert!(!svg.contains("<circle"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}
