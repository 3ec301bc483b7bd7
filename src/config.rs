use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable prefix, e.g. `CAR_IMPORT__SERVER__PORT=9000`
pub const ENV_PREFIX: &str = "CAR_IMPORT";

/// API routes that the metrics endpoint must not shadow
const RESERVED_PATHS: &[&str] = &["/", "/divisas", "/importacion", "/comparacion", "/vehiculo", "/health"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub pricing: PricingConfig,
    pub providers: ProvidersConfig,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

/// Tariff stack and fallback rate applied to every estimate
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PricingConfig {
    /// Import duty
    pub tariff_rate: f64,
    /// Value added tax
    pub vat_rate: f64,
    /// Port, registration and other fees
    pub other_fees_rate: f64,
    /// Rate substituted when the currency provider fails
    pub fallback_exchange_rate: f64,
}

impl PricingConfig {
    /// Multiplier applied to the converted price: `1 + tariff + vat + other fees`
    pub fn surcharge_multiplier(&self) -> f64 {
        1.0 + self.tariff_rate + self.vat_rate + self.other_fees_rate
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tariff_rate: 0.15,
            vat_rate: 0.19,
            other_fees_rate: 0.05,
            fallback_exchange_rate: 4000.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProvidersConfig {
    pub exchange_rates: ProviderConfig,
    pub countries: ProviderConfig,
    pub vehicles: ProviderConfig,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            exchange_rates: ProviderConfig::new("https://open.er-api.com/v6"),
            countries: ProviderConfig::new("https://restcountries.com/v3.1"),
            vehicles: ProviderConfig::new("https://vpic.nhtsa.dot.gov/api/vehicles"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl ProviderConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_seconds: 5,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub endpoint: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "/metrics".to_string(),
        }
    }
}

/// Load configuration from defaults, an optional TOML file and the environment
///
/// Later sources override earlier ones. A missing file is not an error, so the
/// service starts with built-in defaults when nothing is configured.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::Config::try_from(&Config::default())?)
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.server.host.trim().is_empty() {
        anyhow::bail!("Server host cannot be empty");
    }

    if cfg.server.port == 0 {
        anyhow::bail!("Server port must be greater than zero");
    }

    match cfg.server.log_format.as_str() {
        "text" | "json" => {}
        other => anyhow::bail!("Invalid log format '{}', expected 'text' or 'json'", other),
    }

    let rates = [
        ("tariff_rate", cfg.pricing.tariff_rate),
        ("vat_rate", cfg.pricing.vat_rate),
        ("other_fees_rate", cfg.pricing.other_fees_rate),
    ];
    for (name, value) in rates {
        if !value.is_finite() || value < 0.0 {
            anyhow::bail!("Pricing {} must be a non-negative number, got {}", name, value);
        }
    }

    let fallback = cfg.pricing.fallback_exchange_rate;
    if !fallback.is_finite() || fallback <= 0.0 {
        anyhow::bail!("Fallback exchange rate must be positive, got {}", fallback);
    }

    let providers = [
        ("exchange_rates", &cfg.providers.exchange_rates),
        ("countries", &cfg.providers.countries),
        ("vehicles", &cfg.providers.vehicles),
    ];
    for (name, provider) in providers {
        if !provider.base_url.starts_with("http://") && !provider.base_url.starts_with("https://") {
            anyhow::bail!(
                "Provider '{}' base_url must be an http(s) URL, got '{}'",
                name,
                provider.base_url
            );
        }
        if provider.timeout_seconds == 0 {
            anyhow::bail!("Provider '{}' timeout_seconds must be greater than zero", name);
        }
    }

    if cfg.metrics.enabled {
        if !cfg.metrics.endpoint.starts_with('/') {
            anyhow::bail!("Metrics endpoint must start with '/', got '{}'", cfg.metrics.endpoint);
        }
        if RESERVED_PATHS.contains(&cfg.metrics.endpoint.as_str()) {
            anyhow::bail!("Metrics endpoint '{}' collides with an API route", cfg.metrics.endpoint);
        }
    }

    Ok(())
}
