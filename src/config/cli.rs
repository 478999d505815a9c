use crate::domain::ports::Endpoints;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_IP_ENDPOINT: &str = "https://api.ipify.org?format=json";
pub const DEFAULT_GEO_ENDPOINT: &str = "https://freegeoip.app/json";
pub const DEFAULT_PASS_ENDPOINT: &str = "https://iss-pass.herokuapp.com/json/";

/// A bare run needs no flags: the defaults are the production endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "iss-watch")]
#[command(about = "Prints upcoming ISS flyover times for your current location")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_IP_ENDPOINT)]
    pub ip_endpoint: String,

    #[arg(long, default_value = DEFAULT_GEO_ENDPOINT)]
    pub geo_endpoint: String,

    #[arg(long, default_value = DEFAULT_PASS_ENDPOINT)]
    pub pass_endpoint: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Endpoints for CliConfig {
    fn ip_endpoint(&self) -> &str {
        &self.ip_endpoint
    }

    fn geo_endpoint(&self) -> &str {
        &self.geo_endpoint
    }

    fn pass_endpoint(&self) -> &str {
        &self.pass_endpoint
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("ip_endpoint", &self.ip_endpoint)?;
        validate_url("geo_endpoint", &self.geo_endpoint)?;
        validate_url("pass_endpoint", &self.pass_endpoint)?;
        Ok(())
    }
}
