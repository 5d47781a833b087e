use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::api::pubg::PubgApi;
use crate::error::StatsError;

/// Display name -> PUBG account id, filled on first lookup and kept for the
/// life of the process. Entries are never refreshed.
#[derive(Debug, Default)]
pub struct IdentifierCache {
    entries: RwLock<HashMap<String, String>>,
}

impl IdentifierCache {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_entries(entries: HashMap<String, String>) -> Self {
        Self { entries: RwLock::new(entries) }
    }

    pub async fn get(&self, display_name: &str) -> Option<String> {
        self.entries.read().await.get(display_name).cloned()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Two concurrent misses for the same name may both hit the API; the
    /// later write wins.
    pub async fn resolve<A>(&self, api: &A, display_name: &str) -> Result<String, StatsError>
    where
        A: PubgApi + ?Sized,
    {
        if let Some(account_id) = self.get(display_name).await {
            debug!(player = display_name, "account id cache hit");
            return Ok(account_id);
        }

        let account_id = api
            .search_player(display_name)
            .await?
            .ok_or_else(|| StatsError::PlayerNotFound(display_name.to_string()))?;

        self.entries
            .write()
            .await
            .insert(display_name.to_string(), account_id.clone());
        Ok(account_id)
    }
}
