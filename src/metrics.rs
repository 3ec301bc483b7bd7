use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

/// Install the Prometheus recorder as the global metrics recorder
///
/// Fails if a recorder is already installed in this process.
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    init_metric_descriptions();

    Ok(handle)
}

/// Initialize metric descriptions (can be called multiple times safely)
fn init_metric_descriptions() {
    describe_counter!(
        "car_import_requests_total",
        "Total number of API requests by endpoint"
    );
    describe_counter!(
        "car_import_upstream_lookups_total",
        "Upstream lookups by source and outcome (success or fallback)"
    );
    describe_histogram!(
        "car_import_upstream_duration_seconds",
        "Upstream lookup duration in seconds"
    );
    describe_gauge!(
        "car_import_info",
        "Service version information"
    );

    gauge!("car_import_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
}

/// Record an API request
pub fn record_request(endpoint: &'static str) {
    counter!("car_import_requests_total", "endpoint" => endpoint).increment(1);
}

/// Record the outcome of one upstream lookup
pub fn record_lookup(source: &'static str, success: bool, duration: Duration) {
    let outcome = if success { "success" } else { "fallback" };
    counter!(
        "car_import_upstream_lookups_total",
        "source" => source,
        "outcome" => outcome,
    )
    .increment(1);

    histogram!("car_import_upstream_duration_seconds", "source" => source)
        .record(duration.as_secs_f64());
}
