use crate::domain::model::IpAddress;
use crate::domain::ports::{Endpoints, IpFetcher};
use crate::utils::error::{Result, Stage, TrackerError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// IP-echo 回應：`{"ip": "<string>"}`
#[derive(Debug, Deserialize)]
struct IpEnvelope {
    ip: IpAddress,
}

/// Asks a public IP-echo service which address this machine appears as.
pub struct HttpIpFetcher {
    client: Client,
    endpoint: String,
}

impl HttpIpFetcher {
    pub fn new<E: Endpoints>(config: &E) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.ip_endpoint().to_string(),
        }
    }
}

#[async_trait]
impl IpFetcher for HttpIpFetcher {
    async fn fetch(&self) -> Result<IpAddress> {
        tracing::debug!("Requesting public IP from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|source| TrackerError::Transport {
                stage: Stage::Ip,
                source,
            })?;

        let status = response.status();
        tracing::debug!("IP echo response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|source| TrackerError::Transport {
                stage: Stage::Ip,
                source,
            })?;

        if !status.is_success() {
            return Err(TrackerError::Remote {
                stage: Stage::Ip,
                status: status.as_u16(),
                body,
            });
        }

        let envelope: IpEnvelope =
            serde_json::from_str(&body).map_err(|source| TrackerError::Malformed {
                stage: Stage::Ip,
                source,
            })?;

        Ok(envelope.ip)
    }
}
