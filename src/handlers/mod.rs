pub mod comparison;
pub mod exchange_rate;
pub mod health;
pub mod import;
pub mod info;
pub mod metrics_handler;
pub mod vehicle;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::error::AppError;
use crate::service::ImportEstimationService;

/// Shared state for the API routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ImportEstimationService>,
}

impl AppState {
    pub fn new(service: ImportEstimationService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Query string extractor whose rejection names the offending parameter
///
/// Decodes like axum's `Query`, but tracks the deserializer path so a
/// malformed value is reported against its field.
#[derive(Debug)]
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = parts.uri.query().unwrap_or_default();
        let deserializer =
            serde_urlencoded::Deserializer::new(form_urlencoded::parse(query.as_bytes()));
        let value = serde_path_to_error::deserialize(deserializer)?;
        Ok(ApiQuery(value))
    }
}

pub(crate) fn default_currency() -> String {
    "USD".to_string()
}

pub(crate) fn default_country() -> String {
    "japan".to_string()
}
