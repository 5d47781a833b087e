use std::str::FromStr;
use std::sync::Arc;
use tracing::warn;

use crate::api::pubg::{PubgApi, LIFETIME_SEASON};
use crate::data::identity_cache::IdentifierCache;
use crate::data::matches::record::MatchRecord;
use crate::data::matches::summary::{ModeSummary, SQUAD_MODE};
use crate::error::StatsError;

pub const RECENT_MATCH_LIMIT: usize = 10;

/// What to do when one match's detail request fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchFailurePolicy {
    /// Fail the whole fetch with that match's error.
    #[default]
    Abort,
    /// Drop the match, as if the player were not in it.
    Skip,
}

impl FromStr for MatchFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "abort" => Ok(MatchFailurePolicy::Abort),
            "skip" => Ok(MatchFailurePolicy::Skip),
            other => Err(format!("unknown match failure policy '{other}'. Allowed: abort, skip")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonScope {
    Current,
    Lifetime,
}

pub struct MatchFetcher<A> {
    api: Arc<A>,
    cache: Arc<IdentifierCache>,
    policy: MatchFailurePolicy,
}

impl<A: PubgApi> MatchFetcher<A> {
    pub fn new(api: Arc<A>, cache: Arc<IdentifierCache>, policy: MatchFailurePolicy) -> Self {
        Self { api, cache, policy }
    }

    #[cfg(test)]
    pub fn cache(&self) -> &IdentifierCache {
        &self.cache
    }

    /// Up to [`RECENT_MATCH_LIMIT`] matches in the order the API lists them.
    /// Details are requested one at a time.
    pub async fn fetch_recent_matches(&self, player_name: &str) -> Result<Vec<MatchRecord>, StatsError> {
        let account_id = self.cache.resolve(self.api.as_ref(), player_name).await?;
        let match_ids = self.api.recent_match_ids(&account_id).await?;

        let mut matches = Vec::new();
        for match_id in match_ids.iter().take(RECENT_MATCH_LIMIT) {
            let doc = match self.api.match_detail(match_id).await {
                Ok(doc) => doc,
                Err(e) => match self.policy {
                    MatchFailurePolicy::Abort => return Err(e),
                    MatchFailurePolicy::Skip => {
                        warn!(player = player_name, match_id = %match_id, error = %e, "skipping match");
                        continue;
                    }
                },
            };
            if let Some(record) = MatchRecord::from_document(match_id, &doc, player_name) {
                matches.push(record);
            }
        }
        Ok(matches)
    }

    pub async fn fetch_mode_summary(&self, player_name: &str, scope: SeasonScope) -> Result<ModeSummary, StatsError> {
        let account_id = self.cache.resolve(self.api.as_ref(), player_name).await?;
        let season_id = match scope {
            SeasonScope::Current => self.api.current_season_id().await?,
            SeasonScope::Lifetime => LIFETIME_SEASON.to_string(),
        };
        let stats = self.api.mode_stats(&account_id, &season_id, SQUAD_MODE).await?;
        Ok(ModeSummary::from_mode_stats(stats.as_ref()))
    }
}
