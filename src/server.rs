use anyhow::Result;
use axum::{routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    config::Config,
    handlers::{self, AppState},
    metrics,
    service::ImportEstimationService,
    signals::setup_signal_handlers,
};

/// Start the CarImport server
///
/// This function:
/// 1. Initializes metrics (when enabled)
/// 2. Sets up signal handlers for graceful shutdown
/// 3. Builds the service and the Axum application
/// 4. Binds to the configured address
/// 5. Serves requests with graceful shutdown support
pub async fn start_server(config: Config) -> Result<()> {
    let metrics_handle = if config.metrics.enabled {
        info!("Initializing Prometheus metrics...");
        Some(Arc::new(metrics::init_metrics()?))
    } else {
        None
    };

    let (shutdown_tx, signal_handle) = setup_signal_handlers();
    let mut shutdown_rx = shutdown_tx.subscribe();

    // Timeouts are applied per request from each provider's config
    let http_client = reqwest::Client::builder()
        .user_agent(concat!("car-import/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let service = ImportEstimationService::from_config(&config, http_client);

    let app = create_router(AppState::new(service), metrics_handle, &config.metrics.endpoint);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    info!("Starting CarImport on {}", addr);
    info!(
        exchange_rates = %config.providers.exchange_rates.base_url,
        countries = %config.providers.countries.base_url,
        vehicles = %config.providers.vehicles.base_url,
        "Upstream providers configured"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
            info!("Shutdown signal received, draining connections...");
        })
        .await?;

    signal_handle.await?;
    info!("Server stopped gracefully");

    Ok(())
}

/// Create the Axum router with all routes and middleware
pub fn create_router(
    app_state: AppState,
    metrics_handle: Option<Arc<PrometheusHandle>>,
    metrics_endpoint: &str,
) -> Router {
    let api_routes = Router::new()
        .route("/", get(handlers::info::service_info))
        .route("/divisas", get(handlers::exchange_rate::exchange_rate))
        .route("/importacion", get(handlers::import::import_estimate))
        .route("/comparacion", get(handlers::comparison::compare))
        .route("/vehiculo", get(handlers::vehicle::vehicle_info))
        .with_state(app_state);

    let mut app = Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(api_routes);

    if let Some(handle) = metrics_handle {
        let metrics_routes = Router::new()
            .route(metrics_endpoint, get(handlers::metrics_handler::metrics))
            .with_state(handle);
        app = app.merge(metrics_routes);
    }

    app.layer(TraceLayer::new_for_http())
}
