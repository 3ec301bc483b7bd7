use axum::{extract::State, Json};
use serde::Deserialize;

use super::{default_currency, AppState, ApiQuery};
use crate::metrics;
use crate::models::VehicleInfo;

#[derive(Debug, Deserialize)]
pub struct VehicleQuery {
    pub marca: String,
    pub modelo: String,
    pub pais_origen: String,
    pub precio_origen: f64,
    #[serde(default = "default_currency")]
    pub moneda: String,
}

/// Handle `/vehiculo`
pub async fn vehicle_info(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<VehicleQuery>,
) -> Json<VehicleInfo> {
    metrics::record_request("/vehiculo");
    Json(
        state
            .service
            .vehicle_info(
                &query.marca,
                &query.modelo,
                &query.pais_origen,
                query.precio_origen,
                &query.moneda,
            )
            .await,
    )
}
