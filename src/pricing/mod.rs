pub mod calculator;

pub use calculator::{cheaper_option, compare_with_local, estimate_import, round_money};

/// Currency every estimate is expressed in
pub const LOCAL_CURRENCY: &str = "COP";
