//! Request-level orchestration: upstream lookups, fallbacks and pricing.
//!
//! Every lookup yields a `Result<_, FetchError>`; the `resolve_*` functions
//! turn each failure into that lookup's fallback value, so no operation here
//! can fail.

use reqwest::Client;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

use crate::config::{Config, PricingConfig};
use crate::metrics;
use crate::models::{
    ComparisonResult, CountryInfo, CountryLookup, ExchangeRate, ImportEstimate, ServiceInfo,
    VehicleInfo,
};
use crate::pricing::{self, LOCAL_CURRENCY};
use crate::providers::{
    CountrySource, ExchangeRateSource, FetchError, HttpCountries, HttpExchangeRates,
    HttpVehicleCatalog, VehicleCatalog,
};

/// Maximum number of catalog models echoed back as suggestions
pub const MAX_SUGGESTIONS: usize = 5;

pub const SERVICE_NAME: &str = "CarImport";
pub const SERVICE_DESCRIPTION: &str =
    "API para analizar el costo de importación de un vehículo utilizando APIs externas.";
pub const ENDPOINTS: [&str; 4] = ["/divisas", "/importacion", "/comparacion", "/vehiculo"];

/// Stateless estimator over three injectable upstream sources
#[derive(Clone)]
pub struct ImportEstimationService {
    rates: Arc<dyn ExchangeRateSource>,
    countries: Arc<dyn CountrySource>,
    catalog: Arc<dyn VehicleCatalog>,
    pricing: PricingConfig,
}

impl ImportEstimationService {
    pub fn new(
        rates: Arc<dyn ExchangeRateSource>,
        countries: Arc<dyn CountrySource>,
        catalog: Arc<dyn VehicleCatalog>,
        pricing: PricingConfig,
    ) -> Self {
        Self {
            rates,
            countries,
            catalog,
            pricing,
        }
    }

    /// Build the service with HTTP clients for every configured provider
    pub fn from_config(config: &Config, client: Client) -> Self {
        let providers = &config.providers;
        Self::new(
            Arc::new(HttpExchangeRates::new(client.clone(), providers.exchange_rates.clone())),
            Arc::new(HttpCountries::new(client.clone(), providers.countries.clone())),
            Arc::new(HttpVehicleCatalog::new(client, providers.vehicles.clone())),
            config.pricing.clone(),
        )
    }

    pub fn service_info(&self) -> ServiceInfo {
        ServiceInfo {
            nombre_api: SERVICE_NAME,
            descripcion: SERVICE_DESCRIPTION,
            version: env!("CARGO_PKG_VERSION"),
            endpoints: ENDPOINTS.to_vec(),
        }
    }

    /// Look up `base -> target`, substituting the fallback rate on any failure
    pub async fn exchange_rate(&self, base: &str, target: &str) -> ExchangeRate {
        let started = Instant::now();
        let result = self.rates.rate(base, target).await;
        metrics::record_lookup("exchange_rates", result.is_ok(), started.elapsed());

        let (rate, valid) = resolve_rate(result, self.pricing.fallback_exchange_rate, base, target);
        ExchangeRate {
            base_currency: base.to_string(),
            target_currency: target.to_string(),
            rate,
            valid,
        }
    }

    pub async fn import_cost(
        &self,
        origin_price: f64,
        currency: &str,
        country_of_origin: &str,
    ) -> ImportEstimate {
        let exchange = self.exchange_rate(currency, LOCAL_CURRENCY).await;
        pricing::estimate_import(origin_price, currency, country_of_origin, &exchange, &self.pricing)
    }

    pub async fn compare_with_local(
        &self,
        origin_price: f64,
        local_price: f64,
        currency: &str,
        country_of_origin: &str,
    ) -> ComparisonResult {
        let estimate = self.import_cost(origin_price, currency, country_of_origin).await;
        pricing::compare_with_local(local_price, &estimate)
    }

    /// Enrich an import estimate with country metadata and catalog data
    ///
    /// The three lookups run concurrently and each falls back on its own.
    pub async fn vehicle_info(
        &self,
        brand: &str,
        model: &str,
        country_of_origin: &str,
        origin_price: f64,
        currency: &str,
    ) -> VehicleInfo {
        let (country_info, models, import_analysis) = tokio::join!(
            self.country_lookup(country_of_origin),
            self.catalog_lookup(brand),
            self.import_cost(origin_price, currency, country_of_origin),
        );

        let model_found_in_catalog = models.iter().any(|m| m == model);
        let suggestions = models.into_iter().take(MAX_SUGGESTIONS).collect();

        VehicleInfo {
            brand: brand.to_string(),
            model_queried: model.to_string(),
            model_found_in_catalog,
            suggestions,
            country_info,
            import_analysis,
        }
    }

    async fn country_lookup(&self, country: &str) -> CountryLookup {
        let name = capitalize(country);
        let started = Instant::now();
        let result = self.countries.country_by_name(&name).await;
        metrics::record_lookup("countries", result.is_ok(), started.elapsed());

        resolve_country(result, &name)
    }

    async fn catalog_lookup(&self, brand: &str) -> Vec<String> {
        let started = Instant::now();
        let result = self.catalog.models_for_make(brand).await;
        metrics::record_lookup("vehicles", result.is_ok(), started.elapsed());

        resolve_models(result, brand)
    }
}

/// Exchange rate policy: any failure becomes `(fallback, false)`
fn resolve_rate(
    result: Result<f64, FetchError>,
    fallback: f64,
    base: &str,
    target: &str,
) -> (f64, bool) {
    match result {
        Ok(rate) => {
            debug!(from = base, to = target, rate, "Exchange rate resolved");
            (rate, true)
        }
        Err(e) => {
            warn!(from = base, to = target, error = %e, fallback, "Exchange rate lookup failed, using fallback rate");
            (fallback, false)
        }
    }
}

/// Country policy: any failure becomes the error marker
fn resolve_country(result: Result<CountryInfo, FetchError>, name: &str) -> CountryLookup {
    match result {
        Ok(info) => CountryLookup::Found(info),
        Err(e) => {
            warn!(country = name, error = %e, "Country lookup failed");
            CountryLookup::unavailable()
        }
    }
}

/// Catalog policy: any failure becomes an empty model list
fn resolve_models(result: Result<Vec<String>, FetchError>, brand: &str) -> Vec<String> {
    match result {
        Ok(models) => {
            debug!(brand, count = models.len(), "Catalog models resolved");
            models
        }
        Err(e) => {
            warn!(brand, error = %e, "Vehicle catalog lookup failed");
            Vec::new()
        }
    }
}

/// Upper-case the first character and lower-case the rest
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
