// In-memory stand-ins for the stat providers, shared by the unit tests.
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::api::pubg::PubgApi;
use crate::api::rocket_league::RocketLeagueApi;
use crate::data::matches::match_data::{GameModeStats, MatchDocument};
use crate::data::rocket_league::{PlayerRef, RlMatch, RlProfile};
use crate::error::StatsError;

#[derive(Default)]
pub struct FakePubg {
    pub accounts: HashMap<String, String>,
    pub lookup_status: Option<StatusCode>,
    pub match_ids: Vec<String>,
    pub matches: HashMap<String, Value>,
    pub current_season: Option<String>,
    pub modes: HashMap<String, HashMap<String, GameModeStats>>,
    pub searches: AtomicUsize,
    pub detail_calls: Mutex<Vec<String>>,
}

impl FakePubg {
    pub fn with_account(name: &str, account_id: &str) -> Self {
        let mut fake = Self::default();
        fake.accounts.insert(name.to_string(), account_id.to_string());
        fake
    }

    pub fn add_match(&mut self, match_id: &str, doc: Value) {
        self.match_ids.push(match_id.to_string());
        self.matches.insert(match_id.to_string(), doc);
    }

    pub fn search_count(&self) -> usize {
        self.searches.load(Ordering::SeqCst)
    }
}

/// A match where `subject` played on a roster with `teammates`, plus one
/// opposing roster.
pub fn match_doc(
    map: &str,
    subject: &str,
    kills: u32,
    death_type: &str,
    rank: u32,
    teammates: &[&str],
) -> Value {
    let mut included = vec![participant("p-subject", subject, kills, death_type)];
    let mut members = vec![json!({ "type": "participant", "id": "p-subject" })];
    for (i, mate) in teammates.iter().enumerate() {
        let id = format!("p-mate-{i}");
        included.push(participant(&id, mate, 1, "byplayer"));
        members.push(json!({ "type": "participant", "id": id }));
    }
    included.push(participant("p-enemy", "Enemy", 4, "alive"));
    included.push(json!({ "type": "roster", "id": "r-subject",
        "attributes": { "stats": { "rank": rank, "teamId": 1 } },
        "relationships": { "participants": { "data": members } } }));
    included.push(json!({ "type": "roster", "id": "r-enemy",
        "attributes": { "stats": { "rank": if rank == 1 { 2 } else { 1 }, "teamId": 2 } },
        "relationships": { "participants": { "data": [ { "type": "participant", "id": "p-enemy" } ] } } }));

    json!({
        "data": { "type": "match", "id": "ignored", "attributes": { "mapName": map, "gameMode": "squad-fpp" } },
        "included": included,
    })
}

fn participant(id: &str, name: &str, kills: u32, death_type: &str) -> Value {
    json!({ "type": "participant", "id": id, "attributes": { "stats": {
        "name": name, "kills": kills, "deathType": death_type,
        "timeSurvived": 900.0, "damageDealt": 150.2 } } })
}

fn status_error(url: &str, status: StatusCode) -> StatsError {
    StatsError::Status { url: url.to_string(), status }
}

#[async_trait]
impl PubgApi for FakePubg {
    async fn search_player(&self, name: &str) -> Result<Option<String>, StatsError> {
        self.searches.fetch_add(1, Ordering::SeqCst);
        if let Some(status) = self.lookup_status {
            return Err(StatsError::Lookup { name: name.to_string(), status });
        }
        Ok(self.accounts.get(name).cloned())
    }

    async fn recent_match_ids(&self, _account_id: &str) -> Result<Vec<String>, StatsError> {
        Ok(self.match_ids.clone())
    }

    async fn match_detail(&self, match_id: &str) -> Result<MatchDocument, StatsError> {
        self.detail_calls.lock().unwrap().push(match_id.to_string());
        let doc = self
            .matches
            .get(match_id)
            .ok_or_else(|| status_error(&format!("matches/{match_id}"), StatusCode::INTERNAL_SERVER_ERROR))?;
        Ok(serde_json::from_value(doc.clone()).unwrap())
    }

    async fn current_season_id(&self) -> Result<String, StatsError> {
        self.current_season.clone().ok_or(StatsError::NoCurrentSeason)
    }

    async fn mode_stats(
        &self,
        _account_id: &str,
        season_id: &str,
        mode: &str,
    ) -> Result<Option<GameModeStats>, StatsError> {
        let season = self
            .modes
            .get(season_id)
            .ok_or_else(|| status_error(&format!("seasons/{season_id}"), StatusCode::NOT_FOUND))?;
        Ok(season.get(mode).cloned())
    }
}

#[derive(Default)]
pub struct FakeRocketLeague {
    pub profiles: HashMap<String, RlProfile>,
    pub matches: HashMap<String, Vec<RlMatch>>,
}

#[async_trait]
impl RocketLeagueApi for FakeRocketLeague {
    async fn profile(&self, player: &PlayerRef) -> Result<RlProfile, StatsError> {
        self.profiles
            .get(&player.id)
            .cloned()
            .ok_or_else(|| StatsError::PlayerNotFound(player.id.clone()))
    }

    async fn recent_matches(&self, player: &PlayerRef, limit: usize) -> Result<Vec<RlMatch>, StatsError> {
        let matches = self
            .matches
            .get(&player.id)
            .ok_or_else(|| StatsError::PlayerNotFound(player.id.clone()))?;
        Ok(matches.iter().take(limit).cloned().collect())
    }
}
