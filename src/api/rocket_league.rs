use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::data::rocket_league::{PlayerRef, RlMatch, RlMatchList, RlProfile};
use crate::error::StatsError;

#[async_trait]
pub trait RocketLeagueApi: Send + Sync {
    async fn profile(&self, player: &PlayerRef) -> Result<RlProfile, StatsError>;

    /// Most recent first, at most `limit` entries.
    async fn recent_matches(&self, player: &PlayerRef, limit: usize) -> Result<Vec<RlMatch>, StatsError>;
}

#[derive(Debug, Clone)]
pub struct RocketLeagueClient {
    client: reqwest::Client,
    base_url: String,
}

impl RocketLeagueClient {
    pub fn new(base_url: &str, api_key: Option<&str>) -> Result<Self, crate::Error> {
        let mut headers = HeaderMap::new();
        if let Some(key) = api_key {
            headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {key}"))?);
        }
        headers.insert(USER_AGENT, HeaderValue::from_static("chickenhawk/0.1.0"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn player_url(&self, player: &PlayerRef) -> String {
        format!(
            "{}/players/{}/{}",
            self.base_url,
            urlencoding::encode(&player.platform),
            urlencoding::encode(&player.id)
        )
    }

    async fn get<T: DeserializeOwned>(&self, url: &str, player: &PlayerRef) -> Result<T, StatsError> {
        let res = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| StatsError::Network { url: url.to_owned(), source })?;

        let status = res.status();
        if status == StatusCode::NOT_FOUND {
            return Err(StatsError::PlayerNotFound(player.id.clone()));
        }
        if !status.is_success() {
            return Err(StatsError::Status { url: url.to_owned(), status });
        }
        res.json::<T>()
            .await
            .map_err(|source| StatsError::Decode { url: url.to_owned(), source })
    }
}

#[async_trait]
impl RocketLeagueApi for RocketLeagueClient {
    async fn profile(&self, player: &PlayerRef) -> Result<RlProfile, StatsError> {
        let url = self.player_url(player);
        self.get(&url, player).await
    }

    async fn recent_matches(&self, player: &PlayerRef, limit: usize) -> Result<Vec<RlMatch>, StatsError> {
        let url = format!("{}/matches?limit={limit}", self.player_url(player));
        let list: RlMatchList = self.get(&url, player).await?;
        Ok(list.matches.into_iter().take(limit).collect())
    }
}
