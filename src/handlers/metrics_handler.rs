use axum::{extract::State, http::header, response::IntoResponse};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Handle the metrics endpoint in Prometheus text format
pub async fn metrics(State(handle): State<Arc<PrometheusHandle>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        handle.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_metrics_handler_renders_recorded_counters() {
        // Local recorder so the global one stays free for the server
        let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
        let handle = Arc::new(recorder.handle());

        metrics::with_local_recorder(&recorder, || {
            crate::metrics::record_request("/importacion");
        });

        let response = metrics(State(handle)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.contains("car_import_requests_total"));
    }
}
