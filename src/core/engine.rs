use crate::domain::model::PassRecord;
use crate::domain::ports::{GeoResolver, IpFetcher, PassPredictor};
use crate::utils::error::Result;

/// Runs the three lookups in order: public IP, then coordinates for that IP,
/// then flyovers for those coordinates. Each stage's output is the next
/// stage's sole input; the first failure aborts the chain.
pub struct TrackerEngine<I: IpFetcher, G: GeoResolver, P: PassPredictor> {
    ip_fetcher: I,
    geo_resolver: G,
    pass_predictor: P,
}

impl<I: IpFetcher, G: GeoResolver, P: PassPredictor> TrackerEngine<I, G, P> {
    pub fn new(ip_fetcher: I, geo_resolver: G, pass_predictor: P) -> Self {
        Self {
            ip_fetcher,
            geo_resolver,
            pass_predictor,
        }
    }

    pub async fn next_passes(&self) -> Result<Vec<PassRecord>> {
        tracing::info!("Looking up public IP...");
        let ip = self.ip_fetcher.fetch().await?;
        tracing::info!("Public IP: {}", ip);

        tracing::info!("Resolving location for {}...", ip);
        let location = self.geo_resolver.resolve(&ip).await?;
        tracing::info!("Location: {}, {}", location.latitude, location.longitude);

        tracing::info!("Fetching upcoming flyovers...");
        let passes = self.pass_predictor.predict(&location).await?;
        tracing::info!("Received {} upcoming flyovers", passes.len());

        Ok(passes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Coordinate, Coordinates, IpAddress};
    use crate::utils::error::{Stage, TrackerError};
    use async_trait::async_trait;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    struct StubIpFetcher {
        // None 表示失敗
        ip: Option<String>,
    }

    #[async_trait]
    impl IpFetcher for StubIpFetcher {
        async fn fetch(&self) -> Result<IpAddress> {
            match &self.ip {
                Some(ip) => Ok(IpAddress::from(ip.as_str())),
                None => Err(TrackerError::Remote {
                    stage: Stage::Ip,
                    status: 500,
                    body: "ip echo down".to_string(),
                }),
            }
        }
    }

    struct RecordingGeoResolver {
        coords: Option<Coordinates>,
        seen_ips: Arc<Mutex<Vec<IpAddress>>>,
    }

    impl RecordingGeoResolver {
        fn returning(lat: &str, lon: &str) -> Self {
            Self {
                coords: Some(Coordinates {
                    latitude: Coordinate::from(lat),
                    longitude: Coordinate::from(lon),
                }),
                seen_ips: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn failing() -> Self {
            Self {
                coords: None,
                seen_ips: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl GeoResolver for RecordingGeoResolver {
        async fn resolve(&self, ip: &IpAddress) -> Result<Coordinates> {
            self.seen_ips.lock().await.push(ip.clone());
            match &self.coords {
                Some(coords) => Ok(coords.clone()),
                None => Err(TrackerError::Remote {
                    stage: Stage::Geo,
                    status: 500,
                    body: "geolocation backend on fire".to_string(),
                }),
            }
        }
    }

    struct StubPassPredictor {
        passes: Vec<PassRecord>,
        called: Arc<Mutex<bool>>,
    }

    impl StubPassPredictor {
        fn returning(passes: Vec<PassRecord>) -> Self {
            Self {
                passes,
                called: Arc::new(Mutex::new(false)),
            }
        }
    }

    #[async_trait]
    impl PassPredictor for StubPassPredictor {
        async fn predict(&self, _coords: &Coordinates) -> Result<Vec<PassRecord>> {
            *self.called.lock().await = true;
            Ok(self.passes.clone())
        }
    }

    #[tokio::test]
    async fn round_trip_delivers_the_predicted_passes() {
        let expected = vec![PassRecord {
            risetime: 1000000000,
            duration: 600,
        }];

        let geo = RecordingGeoResolver::returning("10.0", "20.0");
        let seen_ips = geo.seen_ips.clone();
        let engine = TrackerEngine::new(
            StubIpFetcher {
                ip: Some("1.2.3.4".to_string()),
            },
            geo,
            StubPassPredictor::returning(expected.clone()),
        );

        let passes = engine.next_passes().await.unwrap();

        assert_eq!(passes, expected);
        assert_eq!(*seen_ips.lock().await, vec![IpAddress::from("1.2.3.4")]);
    }

    #[tokio::test]
    async fn geo_resolver_receives_exactly_the_fetched_ip() {
        let ip = "2001:448a:2061:4b52:50a1:d213:f0a9:c802";
        let geo = RecordingGeoResolver::returning("-6.1741", "106.8296");
        let seen_ips = geo.seen_ips.clone();
        let engine = TrackerEngine::new(
            StubIpFetcher {
                ip: Some(ip.to_string()),
            },
            geo,
            StubPassPredictor::returning(Vec::new()),
        );

        engine.next_passes().await.unwrap();

        let seen = seen_ips.lock().await;
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], IpAddress::from(ip));
    }

    #[tokio::test]
    async fn ip_failure_short_circuits_the_chain() {
        let geo = RecordingGeoResolver::returning("10.0", "20.0");
        let seen_ips = geo.seen_ips.clone();
        let predictor = StubPassPredictor::returning(Vec::new());
        let predictor_called = predictor.called.clone();
        let engine = TrackerEngine::new(StubIpFetcher { ip: None }, geo, predictor);

        let err = engine.next_passes().await.unwrap_err();

        match err {
            TrackerError::Remote { stage, status, body } => {
                assert_eq!(stage, Stage::Ip);
                assert_eq!(status, 500);
                assert_eq!(body, "ip echo down");
            }
            other => panic!("expected Remote error, got {:?}", other),
        }
        assert!(seen_ips.lock().await.is_empty());
        assert!(!*predictor_called.lock().await);
    }

    #[tokio::test]
    async fn geo_failure_propagates_unchanged_and_skips_prediction() {
        let predictor = StubPassPredictor::returning(vec![PassRecord {
            risetime: 1,
            duration: 1,
        }]);
        let predictor_called = predictor.called.clone();
        let engine = TrackerEngine::new(
            StubIpFetcher {
                ip: Some("1.2.3.4".to_string()),
            },
            RecordingGeoResolver::failing(),
            predictor,
        );

        let err = engine.next_passes().await.unwrap_err();

        match err {
            TrackerError::Remote { stage, status, body } => {
                assert_eq!(stage, Stage::Geo);
                assert_eq!(status, 500);
                assert_eq!(body, "geolocation backend on fire");
            }
            other => panic!("expected Remote error, got {:?}", other),
        }
        assert!(!*predictor_called.lock().await);
    }

    #[tokio::test]
    async fn empty_pass_list_is_a_successful_outcome() {
        let engine = TrackerEngine::new(
            StubIpFetcher {
                ip: Some("1.2.3.4".to_string()),
            },
            RecordingGeoResolver::returning("0", "0"),
            StubPassPredictor::returning(Vec::new()),
        );

        let passes = engine.next_passes().await.unwrap();
        assert!(passes.is_empty());
    }
}
