use car_import::config::{load_config, Config};
use std::io::Write;
use std::path::Path;

#[test]
fn test_example_config_loads_and_matches_defaults() -> anyhow::Result<()> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config.example.toml");
    let cfg = load_config(&path)?;
    let defaults = Config::default();

    assert_eq!(cfg.server.port, defaults.server.port);
    assert_eq!(cfg.pricing, defaults.pricing);
    assert_eq!(
        cfg.providers.exchange_rates.base_url,
        defaults.providers.exchange_rates.base_url
    );
    assert_eq!(cfg.metrics.endpoint, "/metrics");
    Ok(())
}

#[test]
fn test_partial_file_overrides_only_given_keys() -> anyhow::Result<()> {
    let dir = std::env::temp_dir().join(format!("car-import-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("partial.toml");

    let mut file = std::fs::File::create(&path)?;
    writeln!(file, "[pricing]")?;
    writeln!(file, "fallback_exchange_rate = 4200.0")?;
    writeln!(file, "[providers.countries]")?;
    writeln!(file, "timeout_seconds = 2")?;
    drop(file);

    let cfg = load_config(&path)?;
    std::fs::remove_dir_all(&dir)?;

    assert_eq!(cfg.pricing.fallback_exchange_rate, 4200.0);
    assert_eq!(cfg.pricing.tariff_rate, 0.15);
    assert_eq!(cfg.providers.countries.timeout_seconds, 2);
    assert_eq!(cfg.providers.countries.base_url, "https://restcountries.com/v3.1");
    Ok(())
}

#[test]
fn test_invalid_file_is_rejected() -> anyhow::Result<()> {
    let dir = std::env::temp_dir().join(format!("car-import-invalid-{}", std::process::id()));
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("invalid.toml");
    std::fs::write(&path, "[server]\nlog_format = \"yaml\"\n")?;

    let result = load_config(&path);
    std::fs::remove_dir_all(&dir)?;

    let err = result.expect_err("unknown log format must be rejected");
    assert!(err.to_string().contains("Invalid log format"));
    Ok(())
}
