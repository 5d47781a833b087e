pub mod card;
pub mod general;
pub mod pubg;
pub mod rocket_league;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::api::pubg::PubgApi;
use crate::api::rocket_league::RocketLeagueApi;
use crate::data::matches::fetcher::MatchFetcher;
use crate::error::{ErrorKind, StatsError};
use crate::handlers::command_handler::Command;
use card::Card;

/// One message sent back to the channel a command came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outgoing {
    Text(String),
    Card(Card),
}

#[async_trait]
pub trait Reply: Send + Sync {
    async fn send(&self, message: Outgoing) -> Result<(), crate::Error>;
}

/// Provider handles shared by every command.
pub struct Services<P, R> {
    pub pubg: MatchFetcher<P>,
    pub pubg_shard: String,
    pub rocket_league: Option<R>,
    pub rl_default_platform: String,
}

pub fn error_message(player: &str, err: &StatsError) -> String {
    match err.kind() {
        ErrorKind::NotFound => {
            format!("❌ No data found for player **{player}**. Make sure the name is correct.")
        }
        ErrorKind::Generic => format!("⚠️ Error: {err}"),
    }
}

/// Sends `card`, or the error text in its place. Errors from the providers
/// stop here; only failures to talk to Discord propagate.
pub(crate) async fn deliver<S: Reply>(
    player: &str,
    what: &str,
    card: Result<Card, &StatsError>,
    reply: &S,
) -> Result<(), crate::Error> {
    match card {
        Ok(card) => {
            reply.send(Outgoing::Card(card)).await?;
            info!(player, "sent {what}");
        }
        Err(e) => {
            warn!(player, error = %e, "{what} failed");
            reply.send(Outgoing::Text(error_message(player, e))).await?;
        }
    }
    Ok(())
}

pub async fn execute<P, R, S>(command: &Command, services: &Services<P, R>, reply: &S) -> Result<(), crate::Error>
where
    P: PubgApi,
    R: RocketLeagueApi,
    S: Reply,
{
    match command {
        Command::Usage => reply.send(Outgoing::Card(general::usage_card())).await,
        Command::Test => reply.send(Outgoing::Text(general::TEST_REPLY.to_string())).await,
        Command::PubgStats(player) => pubg::stats(player, services, reply).await,
        Command::PubgLog(player) => pubg::log(player, services, reply).await,
        Command::PubgSummary(player) => pubg::summary(player, services, reply).await,
        Command::RlStats(player) => rocket_league::stats(player, services, reply).await,
        Command::RlLog(player) => rocket_league::log(player, services, reply).await,
    }
}
