//! Errors that abort a whole request document.

use crate::domain::CatalogueError;
use crate::render::InvalidRenderSettings;
use crate::router::InvalidRoutingSettings;

/// A document-level failure. Per-query misses are answered with
/// `"not found"` instead.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON or does not match the schema
    #[error("malformed request document: {0}")]
    Json(#[from] serde_json::Error),

    /// Base requests are inconsistent
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    #[error(transparent)]
    RoutingSettings(#[from] InvalidRoutingSettings),

    #[error(transparent)]
    RenderSettings(#[from] InvalidRenderSettings),

    /// A query needs a settings section the document does not have
    #[error("{request} requests need `{section}`")]
    MissingSection {
        request: &'static str,
        section: &'static str,
    },

    /// The map template failed
    #[error("failed to render map: {0}")]
    Render(#[from] askama::Error),
}
