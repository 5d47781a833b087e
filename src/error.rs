use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between a parsed command and a rendered card.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("No data found for {0}.")]
    PlayerNotFound(String),
    #[error("Could not fetch player ID for {name} (status: {status})")]
    Lookup { name: String, status: StatusCode },
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned status {status}")]
    Status { url: String, status: StatusCode },
    #[error("unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("no current season reported by the PUBG API")]
    NoCurrentSeason,
    #[error("no matches to aggregate")]
    EmptyInput,
    #[error("Rocket League stats are not configured on this bot")]
    NotConfigured,
}

/// The two user-facing buckets an error is reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Generic,
}

impl StatsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StatsError::PlayerNotFound(_) | StatsError::Lookup { .. } => ErrorKind::NotFound,
            _ => ErrorKind::Generic,
        }
    }
}
