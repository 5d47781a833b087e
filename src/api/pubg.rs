use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;

use crate::data::matches::match_data::{
    GameModeStats, MatchDocument, PlayerDocument, PlayerSearch, SeasonList, SeasonStatsDocument,
};
use crate::error::StatsError;

pub const DEFAULT_BASE_URL: &str = "https://api.pubg.com";
pub const LIFETIME_SEASON: &str = "lifetime";

/// The PUBG endpoints the bot depends on.
#[async_trait]
pub trait PubgApi: Send + Sync {
    /// Account id for an exact display name. `Ok(None)` when the search
    /// succeeds but returns no accounts.
    async fn search_player(&self, name: &str) -> Result<Option<String>, StatsError>;

    /// Match ids referenced by the player profile, in API order.
    async fn recent_match_ids(&self, account_id: &str) -> Result<Vec<String>, StatsError>;

    async fn match_detail(&self, match_id: &str) -> Result<MatchDocument, StatsError>;

    async fn current_season_id(&self) -> Result<String, StatsError>;

    /// Stats for one mode in one season (`lifetime` is accepted as a season id).
    async fn mode_stats(
        &self,
        account_id: &str,
        season_id: &str,
        mode: &str,
    ) -> Result<Option<GameModeStats>, StatsError>;
}

#[derive(Debug, Clone)]
pub struct PubgClient {
    client: reqwest::Client,
    base_url: String,
    shard: String,
}

impl PubgClient {
    pub fn new(api_key: &str, base_url: &str, shard: &str) -> Result<Self, crate::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {api_key}"))?);
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.api+json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("chickenhawk/0.1.0"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            shard: shard.to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/shards/{}/{}", self.base_url, self.shard, path)
    }

    async fn send(&self, url: &str) -> Result<reqwest::Response, StatsError> {
        self.client
            .get(url)
            .send()
            .await
            .map_err(|source| StatsError::Network { url: url.to_owned(), source })
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, StatsError> {
        let res = self.send(url).await?;
        if !res.status().is_success() {
            return Err(StatsError::Status { url: url.to_owned(), status: res.status() });
        }
        res.json::<T>()
            .await
            .map_err(|source| StatsError::Decode { url: url.to_owned(), source })
    }
}

#[async_trait]
impl PubgApi for PubgClient {
    async fn search_player(&self, name: &str) -> Result<Option<String>, StatsError> {
        let url = self.url(&format!("players?filter[playerNames]={}", urlencoding::encode(name)));
        let res = self.send(&url).await?;
        if !res.status().is_success() {
            return Err(StatsError::Lookup { name: name.to_string(), status: res.status() });
        }
        let body: PlayerSearch = res
            .json()
            .await
            .map_err(|source| StatsError::Decode { url: url.clone(), source })?;
        Ok(body.data.into_iter().next().map(|p| p.id))
    }

    async fn recent_match_ids(&self, account_id: &str) -> Result<Vec<String>, StatsError> {
        let url = self.url(&format!("players/{account_id}"));
        let doc: PlayerDocument = self.get(&url).await?;
        Ok(doc
            .data
            .relationships
            .matches
            .data
            .into_iter()
            .map(|m| m.id)
            .collect())
    }

    async fn match_detail(&self, match_id: &str) -> Result<MatchDocument, StatsError> {
        let url = self.url(&format!("matches/{match_id}"));
        self.get(&url).await
    }

    async fn current_season_id(&self) -> Result<String, StatsError> {
        let url = self.url("seasons");
        let seasons: SeasonList = self.get(&url).await?;
        seasons
            .data
            .into_iter()
            .find(|s| s.attributes.is_current_season)
            .map(|s| s.id)
            .ok_or(StatsError::NoCurrentSeason)
    }

    async fn mode_stats(
        &self,
        account_id: &str,
        season_id: &str,
        mode: &str,
    ) -> Result<Option<GameModeStats>, StatsError> {
        let url = self.url(&format!("players/{account_id}/seasons/{season_id}"));
        let mut doc: SeasonStatsDocument = self.get(&url).await?;
        Ok(doc.data.attributes.game_mode_stats.remove(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn client(server: &Server) -> PubgClient {
        PubgClient::new("test-key", &server.url(), "steam").unwrap()
    }

    #[tokio::test]
    async fn search_returns_first_account() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/shards/steam/players")
            .match_query(Matcher::UrlEncoded("filter[playerNames]".into(), "Ghost".into()))
            .match_header("authorization", "Bearer test-key")
            .match_header("accept", "application/vnd.api+json")
            .with_status(200)
            .with_body(r#"{"data":[{"type":"player","id":"account.abc"},{"type":"player","id":"account.def"}]}"#)
            .create_async()
            .await;

        let id = client(&server).search_player("Ghost").await.unwrap();
        assert_eq!(id.as_deref(), Some("account.abc"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn empty_search_is_none() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/shards/steam/players")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"data":[]}"#)
            .create_async()
            .await;

        assert_eq!(client(&server).search_player("Nobody").await.unwrap(), None);
    }

    #[tokio::test]
    async fn failed_search_is_a_lookup_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/shards/steam/players")
            .match_query(Matcher::Any)
            .with_status(404)
            .with_body(r#"{"errors":[{"title":"Not Found"}]}"#)
            .create_async()
            .await;

        let err = client(&server).search_player("Nobody").await.unwrap_err();
        assert!(matches!(err, StatsError::Lookup { status, .. } if status.as_u16() == 404));
    }

    #[tokio::test]
    async fn match_ids_keep_api_order() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/shards/steam/players/account.abc")
            .with_status(200)
            .with_body(
                r#"{"data":{"type":"player","id":"account.abc","relationships":{"matches":{"data":[
                    {"type":"match","id":"m3"},{"type":"match","id":"m1"},{"type":"match","id":"m2"}]}}}}"#,
            )
            .create_async()
            .await;

        let ids = client(&server).recent_match_ids("account.abc").await.unwrap();
        assert_eq!(ids, vec!["m3", "m1", "m2"]);
    }

    #[tokio::test]
    async fn profile_without_relationships_fails_to_decode() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/shards/steam/players/account.abc")
            .with_status(200)
            .with_body(r#"{"data":{"type":"player","id":"account.abc"}}"#)
            .create_async()
            .await;

        let err = client(&server).recent_match_ids("account.abc").await.unwrap_err();
        assert!(matches!(err, StatsError::Decode { .. }));
    }

    #[tokio::test]
    async fn picks_the_current_season() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/shards/steam/seasons")
            .with_status(200)
            .with_body(
                r#"{"data":[
                    {"type":"season","id":"division.bro.official.pc-2018-33","attributes":{"isCurrentSeason":false,"isOffseason":false}},
                    {"type":"season","id":"division.bro.official.pc-2018-34","attributes":{"isCurrentSeason":true,"isOffseason":false}}]}"#,
            )
            .create_async()
            .await;

        let season = client(&server).current_season_id().await.unwrap();
        assert_eq!(season, "division.bro.official.pc-2018-34");
    }

    #[tokio::test]
    async fn no_current_season_is_an_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/shards/steam/seasons")
            .with_status(200)
            .with_body(r#"{"data":[]}"#)
            .create_async()
            .await;

        let err = client(&server).current_season_id().await.unwrap_err();
        assert!(matches!(err, StatsError::NoCurrentSeason));
    }

    #[tokio::test]
    async fn mode_stats_selects_the_requested_mode() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/shards/steam/players/account.abc/seasons/lifetime")
            .with_status(200)
            .with_body(
                r#"{"data":{"type":"playerSeason","attributes":{"gameModeStats":{
                    "solo":{"roundsPlayed":3,"kills":1,"losses":3},
                    "squad-fpp":{"roundsPlayed":120,"kills":95,"losses":112,"wins":8}}}}}"#,
            )
            .create_async()
            .await;

        let api = client(&server);
        let stats = api
            .mode_stats("account.abc", LIFETIME_SEASON, "squad-fpp")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stats.rounds_played, 120);
        assert_eq!(stats.losses, 112);
    }

    #[tokio::test]
    async fn match_detail_server_error_is_a_status_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/shards/steam/matches/m1")
            .with_status(503)
            .create_async()
            .await;

        let err = client(&server).match_detail("m1").await.unwrap_err();
        assert!(matches!(err, StatsError::Status { status, .. } if status.as_u16() == 503));
    }
}
