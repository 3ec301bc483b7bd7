use axum::{extract::State, Json};
use serde::Deserialize;

use super::{default_currency, AppState, ApiQuery};
use crate::metrics;
use crate::models::ExchangeRate;
use crate::pricing::LOCAL_CURRENCY;

#[derive(Debug, Deserialize)]
pub struct ExchangeRateQuery {
    #[serde(default = "default_currency")]
    pub moneda_base: String,
    #[serde(default = "default_target")]
    pub moneda_objetivo: String,
}

fn default_target() -> String {
    LOCAL_CURRENCY.to_string()
}

/// Handle `/divisas`
///
/// Always answers 200; a failed upstream shows up as `api_valida: false`.
pub async fn exchange_rate(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ExchangeRateQuery>,
) -> Json<ExchangeRate> {
    metrics::record_request("/divisas");
    Json(
        state
            .service
            .exchange_rate(&query.moneda_base, &query.moneda_objetivo)
            .await,
    )
}
