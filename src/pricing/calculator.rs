//! Import cost arithmetic.
//!
//! Pure functions over explicit inputs; no network access.

use rust_decimal::prelude::*;

use crate::config::PricingConfig;
use crate::models::{CheaperOption, ComparisonResult, ExchangeRate, ImportEstimate};

/// Round to 2 decimal places
///
/// Rounds the exact binary value of `amount`, so `2.675` (stored as
/// `2.67499...`) becomes `2.67`. Exact halves go to the even cent.
/// Non-finite input is returned unchanged.
pub fn round_money(amount: f64) -> f64 {
    let Some(exact) = Decimal::from_f64_retain(amount) else {
        return amount;
    };
    let mut cents = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    cents.rescale(2);
    cents.mantissa() as f64 / 100.0
}

/// Convert an origin price into pesos and apply the tariff stack
///
/// The country is carried through for display only; the same tariff stack
/// applies to every origin.
pub fn estimate_import(
    origin_price: f64,
    origin_currency: &str,
    country_of_origin: &str,
    exchange: &ExchangeRate,
    pricing: &PricingConfig,
) -> ImportEstimate {
    let price_in_cop = origin_price * exchange.rate;
    let final_price = price_in_cop * pricing.surcharge_multiplier();

    ImportEstimate {
        country_of_origin: country_of_origin.to_string(),
        origin_price,
        origin_currency: origin_currency.to_string(),
        rate: exchange.rate,
        price_in_cop: round_money(price_in_cop),
        final_estimated_price: round_money(final_price),
        rate_source_valid: exchange.valid,
    }
}

/// Compare a local price against an import estimate
pub fn compare_with_local(local_price: f64, estimate: &ImportEstimate) -> ComparisonResult {
    let difference = local_price - estimate.final_estimated_price;

    ComparisonResult {
        local_price,
        imported_estimated_price: estimate.final_estimated_price,
        difference,
        cheaper_option: cheaper_option(difference),
        rate_source_valid: estimate.rate_source_valid,
    }
}

/// A tie counts as importing
pub fn cheaper_option(difference: f64) -> CheaperOption {
    if difference < 0.0 {
        CheaperOption::Local
    } else {
        CheaperOption::Imported
    }
}
