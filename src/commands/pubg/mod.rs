pub mod log;
pub mod stats;

use crate::api::pubg::PubgApi;
use crate::commands::{deliver, Outgoing, Reply, Services};
use crate::data::matches::fetcher::SeasonScope;
use crate::data::matches::record::MatchRecord;
use crate::data::matches::summary::RecentSummary;

async fn send_recent_summary<S: Reply>(player: &str, records: &[MatchRecord], reply: &S) -> Result<(), crate::Error> {
    match RecentSummary::from_records(records) {
        Ok(summary) => deliver(player, "recent summary", Ok(stats::summary_card(player, &summary)), reply).await,
        Err(e) => deliver(player, "recent summary", Err(&e), reply).await,
    }
}

async fn send_mode_summary<P: PubgApi, R, S: Reply>(
    player: &str,
    scope: SeasonScope,
    services: &Services<P, R>,
    reply: &S,
) -> Result<(), crate::Error> {
    let what = match scope {
        SeasonScope::Current => "season stats",
        SeasonScope::Lifetime => "lifetime stats",
    };
    let summary = match services.pubg.fetch_mode_summary(player, scope).await {
        Ok(summary) => summary,
        Err(e) => return deliver(player, what, Err(&e), reply).await,
    };
    let card = match scope {
        SeasonScope::Current => stats::season_card(player, &summary),
        SeasonScope::Lifetime => stats::lifetime_card(player, &summary),
    };
    deliver(player, what, Ok(card), reply).await
}

/// `!pubgstats`: recent summary, season, lifetime.
pub async fn stats<P: PubgApi, R, S: Reply>(player: &str, services: &Services<P, R>, reply: &S) -> Result<(), crate::Error> {
    reply
        .send(Outgoing::Text(format!("Fetching all PUBG stats for {player}... please wait ⏳")))
        .await?;
    match services.pubg.fetch_recent_matches(player).await {
        Ok(records) => send_recent_summary(player, &records, reply).await?,
        Err(e) => deliver(player, "recent summary", Err(&e), reply).await?,
    }
    send_mode_summary(player, SeasonScope::Current, services, reply).await?;
    send_mode_summary(player, SeasonScope::Lifetime, services, reply).await
}

/// `!pubglog`: one card with the last matches.
pub async fn log<P: PubgApi, R, S: Reply>(player: &str, services: &Services<P, R>, reply: &S) -> Result<(), crate::Error> {
    reply
        .send(Outgoing::Text(format!("Fetching last 10 matches for {player}... please wait ⏳")))
        .await?;
    match services.pubg.fetch_recent_matches(player).await {
        Ok(records) => {
            let card = log::log_card(player, &services.pubg_shard, &records);
            deliver(player, "match log", Ok(card), reply).await
        }
        Err(e) => deliver(player, "match log", Err(&e), reply).await,
    }
}

/// `!pubgsummary`: everything, with the recent matches fetched once for both
/// the summary and the log.
pub async fn summary<P: PubgApi, R, S: Reply>(player: &str, services: &Services<P, R>, reply: &S) -> Result<(), crate::Error> {
    reply
        .send(Outgoing::Text(format!("Fetching full PUBG summary for {player}... please wait ⏳")))
        .await?;
    match services.pubg.fetch_recent_matches(player).await {
        Ok(records) => {
            send_recent_summary(player, &records, reply).await?;
            let card = log::log_card(player, &services.pubg_shard, &records);
            deliver(player, "match log", Ok(card), reply).await?;
        }
        Err(e) => deliver(player, "recent matches", Err(&e), reply).await?,
    }
    send_mode_summary(player, SeasonScope::Current, services, reply).await?;
    send_mode_summary(player, SeasonScope::Lifetime, services, reply).await
}
