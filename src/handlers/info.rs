use axum::{extract::State, Json};

use super::AppState;
use crate::metrics;
use crate::models::ServiceInfo;

/// Handle `/`: static service descriptor
pub async fn service_info(State(state): State<AppState>) -> Json<ServiceInfo> {
    metrics::record_request("/");
    Json(state.service.service_info())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{all_down, get_json};
    use axum::{http::StatusCode, routing::get, Router};

    #[tokio::test]
    async fn test_service_info() {
        let app = Router::new().route("/", get(service_info)).with_state(all_down());

        let (status, body) = get_json(app, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["nombre_api"], "CarImport");
        assert!(body["descripción"].as_str().unwrap().contains("importación"));
        assert_eq!(body["endpoints"].as_array().unwrap().len(), 4);
    }
}
