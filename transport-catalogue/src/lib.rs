//! Transit catalogue and itinerary planner.
//!
//! Answers two kinds of question about a bus network: "what does this route
//! look like?" (length, curvature, stop counts) and "what is the fastest way
//! from here to there?" (waits and rides across any number of buses).
//!
//! The network is loaded once into a [`catalogue::TransportCatalogue`]. A
//! [`router::TransportRouter`] then builds the itinerary graph from it and
//! answers route queries. [`requests`] drives both from a JSON document.

pub mod catalogue;
pub mod domain;
pub mod graph;
pub mod render;
pub mod requests;
pub mod router;
