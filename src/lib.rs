pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod pricing;
pub mod providers;
pub mod server;
pub mod service;
pub mod signals;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging
///
/// `RUST_LOG` takes precedence over `level`. `format` is either `"text"` or `"json"`.
/// This function can only be called once per process.
pub fn init_tracing(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);

    if format == "json" {
        registry.with(fmt::layer().json().with_target(true)).init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }
}
