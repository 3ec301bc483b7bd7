//! Command implementations for the CLI
//!
//! - start: Start the API server
//! - config: Configuration display and validation
//! - probe: Check upstream provider reachability

pub mod config;
pub mod probe;
pub mod start;
