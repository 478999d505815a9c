use thiserror::Error;

/// Which lookup in the chain an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Ip,
    Geo,
    Passes,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Ip => "IP lookup",
            Stage::Geo => "geolocation lookup",
            Stage::Passes => "flyover lookup",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum TrackerError {
    /// The request never completed: DNS failure, refused connection, timeout.
    #[error("{stage} request failed: {source}")]
    Transport {
        stage: Stage,
        #[source]
        source: reqwest::Error,
    },

    /// A response arrived, but with a non-success status.
    #[error("{stage} returned status {status}: {body}")]
    Remote {
        stage: Stage,
        status: u16,
        body: String,
    },

    /// A success response whose body could not be decoded.
    #[error("{stage} returned an undecodable body: {source}")]
    Malformed {
        stage: Stage,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Remote,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TrackerError {
    pub fn stage(&self) -> Option<Stage> {
        match self {
            TrackerError::Transport { stage, .. }
            | TrackerError::Remote { stage, .. }
            | TrackerError::Malformed { stage, .. } => Some(*stage),
            TrackerError::InvalidConfigValue { .. } => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            TrackerError::Transport { .. } => ErrorCategory::Network,
            TrackerError::Remote { .. } => ErrorCategory::Remote,
            TrackerError::Malformed { .. } => ErrorCategory::Data,
            TrackerError::InvalidConfigValue { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 暫時性網絡問題
            TrackerError::Transport { .. } => ErrorSeverity::Medium,
            TrackerError::Remote { .. } => ErrorSeverity::High,
            TrackerError::Malformed { .. } => ErrorSeverity::High,
            TrackerError::InvalidConfigValue { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TrackerError::Transport { stage, .. } => {
                format!("Could not reach the {} service.", stage)
            }
            TrackerError::Remote { stage, status, .. } => {
                format!("The {} service responded with HTTP {}.", stage, status)
            }
            TrackerError::Malformed { stage, .. } => {
                format!(
                    "The {} service sent back a response that could not be read.",
                    stage
                )
            }
            TrackerError::InvalidConfigValue { field, .. } => {
                format!("Configuration value for '{}' is invalid.", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TrackerError::Transport { .. } => {
                "Check the network connection and that the endpoint is reachable, then run again."
            }
            TrackerError::Remote { .. } => {
                "The remote service may be down or rate limiting. Try again later."
            }
            TrackerError::Malformed { .. } => {
                "The service may have changed its response format. Re-run with --verbose to inspect the exchange."
            }
            TrackerError::InvalidConfigValue { .. } => {
                "Endpoint flags must be plain http or https URLs."
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
