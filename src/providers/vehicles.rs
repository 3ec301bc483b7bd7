use async_trait::async_trait;
use reqwest::Client;

use super::{endpoint_url, fetch_json, FetchError, VehicleCatalog};
use crate::config::ProviderConfig;
use crate::models::upstream::ModelsForMakeResponse;

/// Vehicle catalog speaking the `GET /getmodelsformake/{brand}?format=json` protocol
#[derive(Clone)]
pub struct HttpVehicleCatalog {
    client: Client,
    config: ProviderConfig,
}

impl HttpVehicleCatalog {
    pub fn new(client: Client, config: ProviderConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl VehicleCatalog for HttpVehicleCatalog {
    async fn models_for_make(&self, brand: &str) -> Result<Vec<String>, FetchError> {
        let mut url = endpoint_url(&self.config.base_url, &["getmodelsformake", brand])?;
        url.query_pairs_mut().append_pair("format", "json");

        let body: ModelsForMakeResponse =
            fetch_json(&self.client, url, self.config.timeout()).await?;

        Ok(body.results.into_iter().map(|m| m.model_name).collect())
    }
}
