pub mod responses;
pub mod upstream;

pub use responses::{
    CheaperOption, ComparisonResult, CountryInfo, CountryLookup, ExchangeRate, ImportEstimate,
    ServiceInfo, VehicleInfo,
};
