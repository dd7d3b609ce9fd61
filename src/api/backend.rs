//! Application backend: collection points.
//!
//! ```text
//! GET {base}/points/{id}           -> { "point": {...}, "items": [{ "title": ... }] }
//! GET {base}/points?city=..&uf=..  -> [{ "id": 1, "name": ..., ... }]
//! ```

use super::{decode, required, HttpClient, PointsApi};
use crate::model::{ApiError, CollectionPoint, Item, PointDetail, PointId, PointSummary};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct DetailWire {
    point: Option<PointWire>,
    items: Option<Vec<ItemWire>>,
}

#[derive(Debug, Deserialize)]
struct PointWire {
    id: Option<u32>,
    image_url: Option<String>,
    name: Option<String>,
    email: Option<String>,
    whatsapp: Option<Value>,
    city: Option<String>,
    uf: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ItemWire {
    title: Option<String>,
}

/// Phone numbers are stored as text but some deployments serialise them as
/// numbers; both are accepted.
fn phone_number(endpoint: &str, context: &str, value: Option<Value>) -> Result<String, ApiError> {
    match required(endpoint, context, "whatsapp", value)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(ApiError::malformed(
            endpoint,
            format!("{context}: `whatsapp` must be a string, got {other}"),
        )),
    }
}

fn non_empty_name(endpoint: &str, context: &str, name: Option<String>) -> Result<String, ApiError> {
    let name = required(endpoint, context, "name", name)?;
    if name.trim().is_empty() {
        return Err(ApiError::malformed(endpoint, format!("{context}: `name` is empty")));
    }
    Ok(name)
}

fn into_point(endpoint: &str, wire: PointWire) -> Result<CollectionPoint, ApiError> {
    let context = "point";
    Ok(CollectionPoint {
        name: non_empty_name(endpoint, context, wire.name)?,
        image_url: required(endpoint, context, "image_url", wire.image_url)?,
        email: required(endpoint, context, "email", wire.email)?,
        whatsapp: phone_number(endpoint, context, wire.whatsapp)?,
        city: required(endpoint, context, "city", wire.city)?,
        uf: required(endpoint, context, "uf", wire.uf)?,
    })
}

/// Validate a point detail payload.
///
/// A missing `items` array is treated as "no items".
///
/// # Errors
///
/// `MalformedResponse` if `point` is absent, a required point field is
/// missing, or an item lacks a `title`.
pub fn parse_point_detail(endpoint: &str, body: &str) -> Result<PointDetail, ApiError> {
    let wire: DetailWire = decode(endpoint, body)?;

    let point = into_point(endpoint, required(endpoint, "response", "point", wire.point)?)?;

    let items = wire
        .items
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            required(endpoint, format!("items[{i}]"), "title", item.title)
                .map(|title| Item { title })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PointDetail { point, items })
}

/// Validate a points list payload.
///
/// # Errors
///
/// `MalformedResponse` if the body is not an array, or an entry lacks a
/// positive `id` or a non-empty `name`.
pub fn parse_point_list(endpoint: &str, body: &str) -> Result<Vec<PointSummary>, ApiError> {
    let wire: Vec<PointWire> = decode(endpoint, body)?;

    wire.into_iter()
        .enumerate()
        .map(|(i, point)| {
            let context = format!("points[{i}]");
            let raw_id = required(endpoint, &context, "id", point.id)?;
            let id = PointId::new(raw_id)
                .map_err(|e| ApiError::malformed(endpoint, format!("{context}: {e}")))?;
            Ok(PointSummary {
                id,
                name: non_empty_name(endpoint, &context, point.name)?,
                image_url: point.image_url.unwrap_or_default(),
                city: point.city.unwrap_or_default(),
                uf: point.uf.unwrap_or_default(),
            })
        })
        .collect()
}

/// [`PointsApi`] backed by the application's HTTP backend.
#[derive(Debug, Clone)]
pub struct HttpPointsApi {
    http: HttpClient,
}

impl HttpPointsApi {
    /// Build a client for the given base URL.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        Ok(Self {
            http: HttpClient::new(base_url, timeout)?,
        })
    }
}

impl PointsApi for HttpPointsApi {
    fn point(&self, id: PointId) -> Result<PointDetail, ApiError> {
        let url = self.http.endpoint(&format!("points/{id}"))?;
        let body = self.http.get_text(&url)?;
        parse_point_detail(url.as_str(), &body)
    }

    fn points(&self, uf: &str, city: &str) -> Result<Vec<PointSummary>, ApiError> {
        let mut url = self.http.endpoint("points")?;
        url.query_pairs_mut()
            .append_pair("city", city)
            .append_pair("uf", uf);
        let body = self.http.get_text(&url)?;
        parse_point_list(url.as_str(), &body)
    }
}
