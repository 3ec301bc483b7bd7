//! Clients for the upstream data sources.
//!
//! Each source sits behind a trait so the service can be exercised with
//! in-process fakes. The HTTP implementations make exactly one attempt per
//! call, bounded by the provider's configured timeout.

pub mod countries;
pub mod exchange_rates;
pub mod vehicles;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

use crate::models::CountryInfo;

pub use countries::HttpCountries;
pub use exchange_rates::HttpExchangeRates;
pub use vehicles::HttpVehicleCatalog;

/// Why an upstream lookup produced no usable value
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid provider URL: {0}")]
    InvalidUrl(String),
    #[error("request timed out")]
    Timeout,
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("upstream returned status {0}")]
    Status(StatusCode),
    #[error("malformed response body: {0}")]
    Decode(String),
    #[error("response is missing field '{0}'")]
    MissingField(&'static str),
    #[error("currency '{0}' not present in rate table")]
    MissingCurrency(String),
    #[error("response contained no records")]
    EmptyResult,
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err)
        }
    }
}

/// Live currency conversion rates
#[async_trait]
pub trait ExchangeRateSource: Send + Sync {
    /// Units of `target` per one unit of `base`
    async fn rate(&self, base: &str, target: &str) -> Result<f64, FetchError>;
}

/// Country metadata lookup by name
#[async_trait]
pub trait CountrySource: Send + Sync {
    async fn country_by_name(&self, name: &str) -> Result<CountryInfo, FetchError>;
}

/// Vehicle model catalog
#[async_trait]
pub trait VehicleCatalog: Send + Sync {
    /// All model names listed under `brand`, in catalog order
    async fn models_for_make(&self, brand: &str) -> Result<Vec<String>, FetchError>;
}

/// Append percent-encoded path segments to a provider base URL
pub(crate) fn endpoint_url(base_url: &str, segments: &[&str]) -> Result<Url, FetchError> {
    let mut url = Url::parse(base_url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| FetchError::InvalidUrl(base_url.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// GET `url` and decode a JSON body, failing on any non-success status
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    client: &Client,
    url: Url,
    timeout: Duration,
) -> Result<T, FetchError> {
    tracing::debug!(url = %url, "Calling upstream provider");

    let response = client.get(url).timeout(timeout).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    Ok(response.json::<T>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_appends_segments() {
        let url = endpoint_url("https://open.er-api.com/v6", &["latest", "USD"]).unwrap();
        assert_eq!(url.as_str(), "https://open.er-api.com/v6/latest/USD");
    }

    #[test]
    fn test_endpoint_url_handles_trailing_slash() {
        let url = endpoint_url("https://restcountries.com/v3.1/", &["name", "Japan"]).unwrap();
        assert_eq!(url.as_str(), "https://restcountries.com/v3.1/name/Japan");
    }

    #[test]
    fn test_endpoint_url_encodes_segments() {
        let url = endpoint_url("https://example.com/api", &["getmodelsformake", "Land Rover/X"])
            .unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/getmodelsformake/Land%20Rover%2FX");
    }

    #[test]
    fn test_endpoint_url_rejects_garbage() {
        assert!(matches!(
            endpoint_url("not a url", &["x"]),
            Err(FetchError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(
            FetchError::MissingCurrency("COP".to_string()).to_string(),
            "currency 'COP' not present in rate table"
        );
        assert_eq!(FetchError::Status(StatusCode::NOT_FOUND).to_string(), "upstream returned status 404 Not Found");
    }
}
