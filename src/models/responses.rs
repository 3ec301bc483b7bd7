//! JSON bodies returned by the API.
//!
//! Key names are part of the public contract with existing consumers and
//! are kept in Spanish.

use serde::Serialize;

/// Static service descriptor returned by `/`
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub nombre_api: &'static str,
    #[serde(rename = "descripción")]
    pub descripcion: &'static str,
    pub version: &'static str,
    pub endpoints: Vec<&'static str>,
}

/// Rate between two currencies; `valid == false` marks the fallback rate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExchangeRate {
    #[serde(rename = "moneda_base")]
    pub base_currency: String,
    #[serde(rename = "moneda_objetivo")]
    pub target_currency: String,
    #[serde(rename = "tasa_cambio")]
    pub rate: f64,
    #[serde(rename = "api_valida")]
    pub valid: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportEstimate {
    #[serde(rename = "pais_origen")]
    pub country_of_origin: String,
    #[serde(rename = "precio_origen")]
    pub origin_price: f64,
    #[serde(rename = "moneda_origen")]
    pub origin_currency: String,
    #[serde(rename = "tasa_cambio")]
    pub rate: f64,
    #[serde(rename = "precio_en_COP")]
    pub price_in_cop: f64,
    #[serde(rename = "precio_final_estimado_COP")]
    pub final_estimated_price: f64,
    #[serde(rename = "api_tasa_ok")]
    pub rate_source_valid: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CheaperOption {
    #[serde(rename = "local")]
    Local,
    #[serde(rename = "importado")]
    Imported,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    #[serde(rename = "precio_local_COP")]
    pub local_price: f64,
    #[serde(rename = "precio_importado_estimado_COP")]
    pub imported_estimated_price: f64,
    #[serde(rename = "diferencia_COP")]
    pub difference: f64,
    #[serde(rename = "más_barato")]
    pub cheaper_option: CheaperOption,
    #[serde(rename = "api_tasa_ok")]
    pub rate_source_valid: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryInfo {
    #[serde(rename = "nombre")]
    pub name: String,
    pub capital: String,
    pub region: String,
    #[serde(rename = "moneda")]
    pub currency_code: String,
}

/// Message shown in place of country data when the country provider fails
pub const COUNTRY_UNAVAILABLE: &str = "API de países no respondió";

/// Country data, or an error marker when the lookup fell back
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CountryLookup {
    Found(CountryInfo),
    Unavailable { error: &'static str },
}

impl CountryLookup {
    pub fn unavailable() -> Self {
        Self::Unavailable {
            error: COUNTRY_UNAVAILABLE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleInfo {
    #[serde(rename = "marca")]
    pub brand: String,
    #[serde(rename = "modelo_buscado")]
    pub model_queried: String,
    #[serde(rename = "modelo_encontrado_en_api")]
    pub model_found_in_catalog: bool,
    #[serde(rename = "sugerencias")]
    pub suggestions: Vec<String>,
    #[serde(rename = "pais_origen")]
    pub country_info: CountryLookup,
    #[serde(rename = "analisis_importacion")]
    pub import_analysis: ImportEstimate,
}
