use crate::domain::model::{Coordinates, IpAddress};
use crate::domain::ports::{Endpoints, GeoResolver};
use crate::utils::error::{Result, Stage, TrackerError};
use async_trait::async_trait;
use reqwest::Client;

/// Maps an IP address to approximate coordinates via a geolocation-by-IP
/// service. The IP is embedded in the request path.
pub struct HttpGeoResolver {
    client: Client,
    endpoint: String,
}

impl HttpGeoResolver {
    pub fn new<E: Endpoints>(config: &E) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.geo_endpoint().to_string(),
        }
    }
}

#[async_trait]
impl GeoResolver for HttpGeoResolver {
    async fn resolve(&self, ip: &IpAddress) -> Result<Coordinates> {
        // The lookup must target the IP we were handed, nothing else
        let url = format!("{}/{}", self.endpoint.trim_end_matches('/'), ip);
        tracing::debug!("Resolving coordinates for {} via {}", ip, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| TrackerError::Transport {
                stage: Stage::Geo,
                source,
            })?;

        let status = response.status();
        tracing::debug!("Geolocation response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|source| TrackerError::Transport {
                stage: Stage::Geo,
                source,
            })?;

        if !status.is_success() {
            return Err(TrackerError::Remote {
                stage: Stage::Geo,
                status: status.as_u16(),
                body,
            });
        }

        let coords: Coordinates =
            serde_json::from_str(&body).map_err(|source| TrackerError::Malformed {
                stage: Stage::Geo,
                source,
            })?;

        Ok(coords)
    }
}
