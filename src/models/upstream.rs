//! Payloads returned by the three upstream providers.
//!
//! Only the fields this service reads are modelled; everything else is ignored.

use serde::Deserialize;
use std::collections::HashMap;

/// `GET /latest/{base}` on the currency provider
///
/// Rate values stay untyped so one odd entry does not sink the whole table.
#[derive(Debug, Deserialize)]
pub struct LatestRatesResponse {
    #[serde(default)]
    pub rates: Option<HashMap<String, serde_json::Value>>,
}

impl LatestRatesResponse {
    /// Numeric rate for `currency`, if the table lists one
    pub fn rate_for(&self, currency: &str) -> Option<f64> {
        self.rates.as_ref()?.get(currency)?.as_f64()
    }
}

/// One element of the `GET /name/{name}` array on the country provider
#[derive(Debug, Deserialize)]
pub struct CountryRecord {
    pub name: CountryName,
    #[serde(default)]
    pub capital: Vec<String>,
    pub region: String,
    /// Keyed by ISO currency code, in document order
    #[serde(default)]
    pub currencies: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct CountryName {
    pub common: String,
}

/// `GET /getmodelsformake/{brand}?format=json` on the vehicle catalog
#[derive(Debug, Deserialize)]
pub struct ModelsForMakeResponse {
    #[serde(rename = "Results")]
    pub results: Vec<CatalogModel>,
}

#[derive(Debug, Deserialize)]
pub struct CatalogModel {
    #[serde(rename = "Model_Name")]
    pub model_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_currencies_keep_document_order() {
        let json = r#"{
            "name": {"common": "Panama", "official": "Republic of Panama"},
            "capital": ["Panama City"],
            "region": "Americas",
            "currencies": {"PAB": {"name": "Panamanian balboa"}, "USD": {"name": "United States dollar"}}
        }"#;

        let record: CountryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.currencies.keys().next().map(String::as_str), Some("PAB"));
    }

    #[test]
    fn test_catalog_ignores_extra_fields() {
        let json = r#"{
            "Count": 1,
            "Message": "Response returned successfully",
            "Results": [{"Make_ID": 448, "Make_Name": "TOYOTA", "Model_ID": 2469, "Model_Name": "Corolla"}]
        }"#;

        let response: ModelsForMakeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results[0].model_name, "Corolla");
    }

    #[test]
    fn test_rates_missing_is_none() {
        let json = r#"{"result": "error", "error-type": "unsupported-code"}"#;
        let response: LatestRatesResponse = serde_json::from_str(json).unwrap();
        assert!(response.rates.is_none());
    }

    #[test]
    fn test_rate_lookup_ignores_unrelated_entries() {
        let json = r#"{"result": "success", "rates": {"USD": 1, "COP": 4012.5, "XXX": "n/a", "VES": null}}"#;
        let response: LatestRatesResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.rate_for("COP"), Some(4012.5));
        assert_eq!(response.rate_for("USD"), Some(1.0));
        assert_eq!(response.rate_for("XXX"), None);
        assert_eq!(response.rate_for("EUR"), None);
    }
}
