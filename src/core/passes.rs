use crate::domain::model::{Coordinates, PassRecord};
use crate::domain::ports::{Endpoints, PassPredictor};
use crate::utils::error::{Result, Stage, TrackerError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Flyover 回應：`{"response": [{"risetime": ..., "duration": ...}, ...]}`
#[derive(Debug, Deserialize)]
struct PassesEnvelope {
    response: Vec<PassRecord>,
}

/// Fetches the upcoming ISS flyovers for a location. Latitude and longitude
/// ride along as query parameters, in whatever form the geolocation service
/// produced them.
pub struct HttpPassPredictor {
    client: Client,
    endpoint: String,
}

impl HttpPassPredictor {
    pub fn new<E: Endpoints>(config: &E) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.pass_endpoint().to_string(),
        }
    }
}

#[async_trait]
impl PassPredictor for HttpPassPredictor {
    async fn predict(&self, coords: &Coordinates) -> Result<Vec<PassRecord>> {
        tracing::debug!(
            "Requesting flyovers for lat={} lon={} from {}",
            coords.latitude,
            coords.longitude,
            self.endpoint
        );

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("lat", coords.latitude.to_string()),
                ("lon", coords.longitude.to_string()),
            ])
            .send()
            .await
            .map_err(|source| TrackerError::Transport {
                stage: Stage::Passes,
                source,
            })?;

        let status = response.status();
        tracing::debug!("Flyover response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|source| TrackerError::Transport {
                stage: Stage::Passes,
                source,
            })?;

        if !status.is_success() {
            return Err(TrackerError::Remote {
                stage: Stage::Passes,
                status: status.as_u16(),
                body,
            });
        }

        let envelope: PassesEnvelope =
            serde_json::from_str(&body).map_err(|source| TrackerError::Malformed {
                stage: Stage::Passes,
                source,
            })?;

        Ok(envelope.response)
    }
}
