use async_trait::async_trait;
use reqwest::Client;

use super::{endpoint_url, fetch_json, ExchangeRateSource, FetchError};
use crate::config::ProviderConfig;
use crate::models::upstream::LatestRatesResponse;

/// Currency provider speaking the `GET /latest/{base}` protocol
#[derive(Clone)]
pub struct HttpExchangeRates {
    client: Client,
    config: ProviderConfig,
}

impl HttpExchangeRates {
    pub fn new(client: Client, config: ProviderConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl ExchangeRateSource for HttpExchangeRates {
    async fn rate(&self, base: &str, target: &str) -> Result<f64, FetchError> {
        let url = endpoint_url(&self.config.base_url, &["latest", base])?;
        let body: LatestRatesResponse = fetch_json(&self.client, url, self.config.timeout()).await?;

        if body.rates.is_none() {
            return Err(FetchError::MissingField("rates"));
        }
        body.rate_for(target)
            .ok_or_else(|| FetchError::MissingCurrency(target.to_string()))
    }
}
