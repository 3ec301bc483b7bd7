use anyhow::Result;
use car_import::config::Config;
use colored::Colorize;
use std::path::Path;
use tracing::info;

/// Execute the config show command
///
/// Prints the effective configuration (defaults, file and environment merged) as TOML
pub fn show(cfg: &Config) -> Result<()> {
    println!("{}", "Current Configuration:".green().bold());
    println!();

    let toml_string = toml::to_string_pretty(cfg)?;
    println!("{}", toml_string);

    info!("Configuration displayed successfully");
    Ok(())
}

/// Execute the config validate command
///
/// Loading already validated the configuration; this prints a summary of it
pub fn validate(cfg: &Config, path: &Path) {
    let source = if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", path.display())
    };

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  {}: {}", "Source".cyan(), source);
    println!("  {}: {}:{}", "Server".cyan(), cfg.server.host, cfg.server.port);
    println!(
        "  {}: {} ({})",
        "Logging".cyan(),
        cfg.server.log_level,
        cfg.server.log_format
    );
    println!(
        "  {}: tariff {:.2}, VAT {:.2}, other {:.2} (x{:.2})",
        "Tariff stack".cyan(),
        cfg.pricing.tariff_rate,
        cfg.pricing.vat_rate,
        cfg.pricing.other_fees_rate,
        cfg.pricing.surcharge_multiplier()
    );
    println!(
        "  {}: {}",
        "Fallback rate".cyan(),
        cfg.pricing.fallback_exchange_rate
    );
    println!("{}", "  Providers:".cyan());
    for (name, provider) in [
        ("exchange rates", &cfg.providers.exchange_rates),
        ("countries", &cfg.providers.countries),
        ("vehicles", &cfg.providers.vehicles),
    ] {
        println!(
            "    {}: {} ({}s timeout)",
            name, provider.base_url, provider.timeout_seconds
        );
    }
    println!(
        "  {}: {}",
        "Metrics".cyan(),
        if cfg.metrics.enabled {
            cfg.metrics.endpoint.as_str().green()
        } else {
            "disabled".red()
        }
    );

    info!("Configuration validation successful");
}
