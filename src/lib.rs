pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::engine::TrackerEngine;
pub use crate::core::geo::HttpGeoResolver;
pub use crate::core::ip::HttpIpFetcher;
pub use crate::core::passes::HttpPassPredictor;
pub use crate::utils::error::{Result, TrackerError};
