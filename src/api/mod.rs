//! Remote API clients.
//!
//! Two collaborators are consumed:
//! - the public geographic reference API (states and their cities), see [`ibge`]
//! - the application backend (collection points), see [`backend`]
//!
//! Each is behind a trait so the shell and tests can substitute fakes. JSON
//! is decoded into private wire structs with optional fields and validated
//! into model types here, at the boundary; schema violations surface as
//! [`ErrorKind::MalformedResponse`](crate::model::ErrorKind::MalformedResponse).

pub mod backend;
mod http;
pub mod ibge;

pub use backend::HttpPointsApi;
pub use http::HttpClient;
pub use ibge::HttpGeoApi;

use crate::model::{ApiError, FederativeUnit, Municipality, PointDetail, PointId, PointSummary};
use serde::de::DeserializeOwned;
use std::fmt;

/// Geographic reference data: Brazilian states and their cities.
pub trait GeoApi: Send + Sync {
    /// List every state.
    fn states(&self) -> Result<Vec<FederativeUnit>, ApiError>;

    /// List the cities of the state with the given abbreviation.
    fn cities(&self, uf: &str) -> Result<Vec<Municipality>, ApiError>;
}

/// Collection points served by the application backend.
pub trait PointsApi: Send + Sync {
    /// Fetch one point and its accepted items.
    fn point(&self, id: PointId) -> Result<PointDetail, ApiError>;

    /// List the points registered in a city.
    fn points(&self, uf: &str, city: &str) -> Result<Vec<PointSummary>, ApiError>;
}

/// Decode a JSON body, mapping syntax and shape errors to `MalformedResponse`.
pub(crate) fn decode<T: DeserializeOwned>(endpoint: &str, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::malformed(endpoint, e))
}

/// Unwrap a field that the schema requires.
pub(crate) fn required<T>(
    endpoint: &str,
    context: impl fmt::Display,
    field: &str,
    value: Option<T>,
) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::malformed(endpoint, format!("{context}: missing field `{field}`")))
}
