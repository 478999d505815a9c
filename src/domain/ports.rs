use crate::domain::model::{Coordinates, IpAddress, PassRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Resolves the caller's public IP address. One request per invocation, no
/// retries.
#[async_trait]
pub trait IpFetcher: Send + Sync {
    async fn fetch(&self) -> Result<IpAddress>;
}

/// Resolves approximate coordinates for the given IP. Implementations must
/// look up exactly the IP they are handed.
#[async_trait]
pub trait GeoResolver: Send + Sync {
    async fn resolve(&self, ip: &IpAddress) -> Result<Coordinates>;
}

/// Resolves upcoming ISS flyovers for the given coordinates. An empty list
/// is a valid result.
#[async_trait]
pub trait PassPredictor: Send + Sync {
    async fn predict(&self, coords: &Coordinates) -> Result<Vec<PassRecord>>;
}

pub trait Endpoints: Send + Sync {
    fn ip_endpoint(&self) -> &str;
    fn geo_endpoint(&self) -> &str;
    fn pass_endpoint(&self) -> &str;
}
