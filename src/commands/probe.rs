use anyhow::Result;
use car_import::config::Config;
use car_import::providers::{
    CountrySource, ExchangeRateSource, FetchError, HttpCountries, HttpExchangeRates,
    HttpVehicleCatalog, VehicleCatalog,
};
use colored::Colorize;
use tracing::info;

const PROBE_CURRENCY: &str = "USD";
const PROBE_COUNTRY: &str = "Japan";
const PROBE_BRAND: &str = "Toyota";

/// Execute the probe command
///
/// Makes one real call to each upstream provider and reports the outcome.
/// Fails if any provider would have triggered a fallback.
pub async fn execute(cfg: &Config) -> Result<()> {
    println!("{}", "Probing upstream providers...".yellow());

    let client = reqwest::Client::new();
    let providers = &cfg.providers;

    let rates = HttpExchangeRates::new(client.clone(), providers.exchange_rates.clone());
    let countries = HttpCountries::new(client.clone(), providers.countries.clone());
    let catalog = HttpVehicleCatalog::new(client, providers.vehicles.clone());

    let (rate, country, models) = tokio::join!(
        rates.rate(PROBE_CURRENCY, "COP"),
        countries.country_by_name(PROBE_COUNTRY),
        catalog.models_for_make(PROBE_BRAND),
    );

    let results = [
        report(
            "exchange rates",
            &providers.exchange_rates.base_url,
            rate.map(|r| format!("1 {} = {} COP", PROBE_CURRENCY, r)),
        ),
        report(
            "countries",
            &providers.countries.base_url,
            country.map(|c| format!("{}: capital {}, currency {}", c.name, c.capital, c.currency_code)),
        ),
        report(
            "vehicles",
            &providers.vehicles.base_url,
            models.map(|m| format!("{} models listed for {}", m.len(), PROBE_BRAND)),
        ),
    ];

    let failed = results.iter().filter(|ok| !**ok).count();
    if failed > 0 {
        anyhow::bail!("{} of {} providers failed; their fallbacks would be used", failed, results.len());
    }

    println!();
    println!("{}", "✓ All providers answered".green());
    info!("Provider probe successful");
    Ok(())
}

fn report(name: &str, base_url: &str, outcome: Result<String, FetchError>) -> bool {
    match outcome {
        Ok(detail) => {
            println!("  {} {} ({}) {}", "✓".green(), name.bold(), base_url, detail.dimmed());
            true
        }
        Err(e) => {
            println!("  {} {} ({}) {}", "✗".red(), name.bold(), base_url, e.to_string().red());
            false
        }
    }
}
