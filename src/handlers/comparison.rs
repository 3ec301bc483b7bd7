use axum::{extract::State, Json};
use serde::Deserialize;

use super::{default_country, default_currency, AppState, ApiQuery};
use crate::metrics;
use crate::models::ComparisonResult;

#[derive(Debug, Deserialize)]
pub struct ComparisonQuery {
    pub precio_origen: f64,
    pub precio_local_cop: f64,
    #[serde(default = "default_currency")]
    pub moneda: String,
    #[serde(default = "default_country")]
    pub pais_origen: String,
}

/// Handle `/comparacion`
pub async fn compare(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ComparisonQuery>,
) -> Json<ComparisonResult> {
    metrics::record_request("/comparacion");
    Json(
        state
            .service
            .compare_with_local(
                query.precio_origen,
                query.precio_local_cop,
                &query.moneda,
                &query.pais_origen,
            )
            .await,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{all_down, get_json};
    use axum::{http::StatusCode, routing::get, Router};

    fn app() -> Router {
        Router::new().route("/comparacion", get(compare)).with_state(all_down())
    }

    #[tokio::test]
    async fn test_local_is_cheaper_with_fallback_rate() {
        let (status, body) = get_json(app(), "/comparacion?precio_origen=100&precio_local_cop=500000&moneda=USD").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["precio_local_COP"], 500000.0);
        assert_eq!(body["precio_importado_estimado_COP"], 556000.0);
        assert_eq!(body["diferencia_COP"], -56000.0);
        assert_eq!(body["más_barato"], "local");
        assert_eq!(body["api_tasa_ok"], false);
    }

    #[tokio::test]
    async fn test_tie_is_imported() {
        let (_, body) = get_json(app(), "/comparacion?precio_origen=100&precio_local_cop=556000").await;

        assert_eq!(body["diferencia_COP"], 0.0);
        assert_eq!(body["más_barato"], "importado");
    }

    #[tokio::test]
    async fn test_missing_local_price_is_rejected() {
        let (status, body) = get_json(app(), "/comparacion?precio_origen=100").await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["loc"][1], "precio_local_cop");
    }
}
