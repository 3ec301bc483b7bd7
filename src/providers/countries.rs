use async_trait::async_trait;
use reqwest::Client;

use super::{endpoint_url, fetch_json, CountrySource, FetchError};
use crate::config::ProviderConfig;
use crate::models::upstream::CountryRecord;
use crate::models::CountryInfo;

/// Country provider speaking the `GET /name/{name}` protocol
#[derive(Clone)]
pub struct HttpCountries {
    client: Client,
    config: ProviderConfig,
}

impl HttpCountries {
    pub fn new(client: Client, config: ProviderConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl CountrySource for HttpCountries {
    async fn country_by_name(&self, name: &str) -> Result<CountryInfo, FetchError> {
        let url = endpoint_url(&self.config.base_url, &["name", name])?;
        let records: Vec<CountryRecord> =
            fetch_json(&self.client, url, self.config.timeout()).await?;

        let first = records.into_iter().next().ok_or(FetchError::EmptyResult)?;
        country_info(first)
    }
}

/// Reduce the first matching record to the fields the API exposes
fn country_info(record: CountryRecord) -> Result<CountryInfo, FetchError> {
    let capital = record
        .capital
        .into_iter()
        .next()
        .ok_or(FetchError::MissingField("capital"))?;
    let currency_code = record
        .currencies
        .keys()
        .next()
        .cloned()
        .ok_or(FetchError::MissingField("currencies"))?;

    Ok(CountryInfo {
        name: record.name.common,
        capital,
        region: record.region,
        currency_code,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> CountryRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_country_info_takes_first_capital_and_currency() {
        let info = country_info(record(
            r#"{
                "name": {"common": "South Africa"},
                "capital": ["Pretoria", "Bloemfontein", "Cape Town"],
                "region": "Africa",
                "currencies": {"ZAR": {"name": "South African rand", "symbol": "R"}}
            }"#,
        ))
        .unwrap();

        assert_eq!(info.name, "South Africa");
        assert_eq!(info.capital, "Pretoria");
        assert_eq!(info.region, "Africa");
        assert_eq!(info.currency_code, "ZAR");
    }

    #[test]
    fn test_country_info_without_capital_fails() {
        let result = country_info(record(
            r#"{
                "name": {"common": "Antarctica"},
                "region": "Antarctic"
            }"#,
        ));

        assert!(matches!(result, Err(FetchError::MissingField("capital"))));
    }

    #[test]
    fn test_country_info_without_currencies_fails() {
        let result = country_info(record(
            r#"{
                "name": {"common": "Somewhere"},
                "capital": ["Town"],
                "region": "Nowhere",
                "currencies": {}
            }"#,
        ));

        assert!(matches!(result, Err(FetchError::MissingField("currencies"))));
    }
}
