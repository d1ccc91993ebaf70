//! JSON request documents.
//!
//! A document declares the network (`base_requests`), optional routing and
//! render settings, and a batch of queries (`stat_requests`). The answer is
//! a JSON array with one object per query, in query order.

mod dto;
mod error;
mod handler;

pub use dto::{
    BaseRequest, BusRequest, BusResponse, MapResponse, NotFoundResponse, RequestDocument,
    Response, RouteItem, RouteResponse, RoutingSettingsRequest, StatRequest, StopRequest,
    StopResponse,
};
pub use error::RequestError;
pub use handler::{RequestHandler, process, run};
