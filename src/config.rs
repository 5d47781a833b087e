use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

use crate::api::pubg;
use crate::data::matches::fetcher::MatchFailurePolicy;

pub const METADATA_BASE_URL: &str =
    "http://metadata.google.internal/computeMetadata/v1/instance/attributes";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing {0}: set it in the environment, .env or instance metadata")]
    Missing(&'static str),
    #[error("invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub pubg_api_key: String,
    pub pubg_base_url: String,
    pub pubg_shard: String,
    pub match_failure_policy: MatchFailurePolicy,
    pub rl_base_url: Option<String>,
    pub rl_api_key: Option<String>,
    pub rl_default_platform: String,
}

/// Instance attribute lookups on the cloud metadata server.
pub struct MetadataSource {
    client: reqwest::Client,
    base_url: String,
}

impl MetadataSource {
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap_or_default();
        Self { client, base_url: base_url.trim_end_matches('/').to_string() }
    }

    pub async fn attribute(&self, key: &str) -> Option<String> {
        let url = format!("{}/{}", self.base_url, key);
        match self.client.get(&url).header("Metadata-Flavor", "Google").send().await {
            Ok(res) if res.status() == StatusCode::OK => res.text().await.ok(),
            Ok(_) => None,
            Err(e) => {
                warn!(key, error = %e, "could not read key from instance metadata");
                None
            }
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

async fn env_or_metadata(key: &str, metadata: &MetadataSource) -> Option<String> {
    match non_empty(std::env::var(key).ok()) {
        Some(v) => Some(v),
        None => non_empty(metadata.attribute(key).await),
    }
}

impl Config {
    /// Reads `.env`, then the process environment, falling back to instance
    /// metadata for the two secrets.
    pub async fn load() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        let metadata = MetadataSource::new(METADATA_BASE_URL);

        let discord_token = env_or_metadata("DISCORD_BOT_TOKEN", &metadata)
            .await
            .ok_or(ConfigError::Missing("DISCORD_BOT_TOKEN"))?;
        let pubg_api_key = env_or_metadata("PUBG_API_KEY", &metadata)
            .await
            .ok_or(ConfigError::Missing("PUBG_API_KEY"))?;

        Self::from_parts(discord_token, pubg_api_key, |key| std::env::var(key).ok())
    }

    pub fn from_parts(
        discord_token: String,
        pubg_api_key: String,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let match_failure_policy = match non_empty(var("PUBG_MATCH_FAILURE_POLICY")) {
            Some(raw) => raw
                .parse::<MatchFailurePolicy>()
                .map_err(|reason| ConfigError::Invalid { key: "PUBG_MATCH_FAILURE_POLICY", reason })?,
            None => MatchFailurePolicy::default(),
        };

        Ok(Config {
            discord_token,
            pubg_api_key,
            pubg_base_url: non_empty(var("PUBG_API_BASE_URL")).unwrap_or_else(|| pubg::DEFAULT_BASE_URL.to_string()),
            pubg_shard: non_empty(var("PUBG_SHARD")).unwrap_or_else(|| "steam".to_string()),
            match_failure_policy,
            rl_base_url: non_empty(var("RL_API_BASE_URL")),
            rl_api_key: non_empty(var("RL_API_KEY")),
            rl_default_platform: non_empty(var("RL_DEFAULT_PLATFORM")).unwrap_or_else(|| "steam".to_string()),
        })
    }
}
