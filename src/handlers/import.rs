use axum::{extract::State, Json};
use serde::Deserialize;

use super::{default_country, default_currency, AppState, ApiQuery};
use crate::metrics;
use crate::models::ImportEstimate;

#[derive(Debug, Deserialize)]
pub struct ImportQuery {
    pub precio_origen: f64,
    #[serde(default = "default_currency")]
    pub moneda: String,
    #[serde(default = "default_country")]
    pub pais_origen: String,
}

/// Handle `/importacion`
pub async fn import_estimate(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ImportQuery>,
) -> Json<ImportEstimate> {
    metrics::record_request("/importacion");
    Json(
        state
            .service
            .import_cost(query.precio_origen, &query.moneda, &query.pais_origen)
            .await,
    )
}
