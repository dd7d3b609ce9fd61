//! IBGE localidades API: states and their cities.
//!
//! ```text
//! GET {base}/estados                  -> [{ "sigla": "SP", "nome": "São Paulo", ... }]
//! GET {base}/estados/{uf}/municipios  -> [{ "nome": "Campinas", ... }]
//! ```
//!
//! Extra fields (ids, regions, microregions) are ignored.

use super::{decode, required, GeoApi, HttpClient};
use crate::model::{ApiError, FederativeUnit, Municipality};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct UfWire {
    sigla: Option<String>,
    nome: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CityWire {
    nome: Option<String>,
}

/// Validate a states payload.
///
/// # Errors
///
/// `MalformedResponse` if the body is not a JSON array or an entry lacks a
/// non-empty `sigla` or `nome`.
pub fn parse_states(endpoint: &str, body: &str) -> Result<Vec<FederativeUnit>, ApiError> {
    let wire: Vec<UfWire> = decode(endpoint, body)?;

    wire.into_iter()
        .enumerate()
        .map(|(i, uf)| {
            let context = format!("estados[{i}]");
            let sigla = required(endpoint, &context, "sigla", uf.sigla)?;
            let nome = required(endpoint, &context, "nome", uf.nome)?;
            FederativeUnit::new(sigla, nome)
                .map_err(|e| ApiError::malformed(endpoint, format!("{context}: {e}")))
        })
        .collect()
}

/// Validate a cities payload.
///
/// # Errors
///
/// `MalformedResponse` if the body is not a JSON array or an entry lacks a
/// non-empty `nome`.
pub fn parse_cities(endpoint: &str, body: &str) -> Result<Vec<Municipality>, ApiError> {
    let wire: Vec<CityWire> = decode(endpoint, body)?;

    wire.into_iter()
        .enumerate()
        .map(|(i, city)| {
            let context = format!("municipios[{i}]");
            let nome = required(endpoint, &context, "nome", city.nome)?;
            Municipality::new(nome)
                .map_err(|e| ApiError::malformed(endpoint, format!("{context}: {e}")))
        })
        .collect()
}

/// [`GeoApi`] backed by the IBGE HTTP service.
#[derive(Debug, Clone)]
pub struct HttpGeoApi {
    http: HttpClient,
}

impl HttpGeoApi {
    /// Build a client for the given base URL.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        Ok(Self {
            http: HttpClient::new(base_url, timeout)?,
        })
    }
}

impl GeoApi for HttpGeoApi {
    fn states(&self) -> Result<Vec<FederativeUnit>, ApiError> {
        let url = self.http.endpoint("estados")?;
        let body = self.http.get_text(&url)?;
        parse_states(url.as_str(), &body)
    }

    fn cities(&self, uf: &str) -> Result<Vec<Municipality>, ApiError> {
        if uf.is_empty() || !uf.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ApiError::invalid_url(
                "estados/{uf}/municipios",
                format!("not a state abbreviation: {uf:?}"),
            ));
        }
        let url = self.http.endpoint(&format!("estados/{uf}/municipios"))?;
        let body = self.http.get_text(&url)?;
        parse_cities(url.as_str(), &body)
    }
}
