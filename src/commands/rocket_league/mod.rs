pub mod log;
pub mod stats;

use crate::api::rocket_league::RocketLeagueApi;
use crate::commands::{deliver, Outgoing, Reply, Services};
use crate::data::rocket_league::PlayerRef;
use crate::error::StatsError;

const RECENT_MATCH_LIMIT: usize = 10;

/// `!rlstats`: one profile request feeds both the season and lifetime card.
pub async fn stats<P, R: RocketLeagueApi, S: Reply>(
    player: &str,
    services: &Services<P, R>,
    reply: &S,
) -> Result<(), crate::Error> {
    reply
        .send(Outgoing::Text(format!("Fetching Rocket League stats for {player}... please wait ⏳")))
        .await?;
    let Some(api) = services.rocket_league.as_ref() else {
        return deliver(player, "rocket league stats", Err(&StatsError::NotConfigured), reply).await;
    };
    let target = PlayerRef::parse(player, &services.rl_default_platform);
    match api.profile(&target).await {
        Ok(profile) => {
            deliver(player, "rocket league season", Ok(stats::current_card(&profile)), reply).await?;
            deliver(player, "rocket league lifetime", Ok(stats::lifetime_card(&profile)), reply).await
        }
        Err(e) => deliver(player, "rocket league stats", Err(&e), reply).await,
    }
}

/// `!rllog`
pub async fn log<P, R: RocketLeagueApi, S: Reply>(
    player: &str,
    services: &Services<P, R>,
    reply: &S,
) -> Result<(), crate::Error> {
    reply
        .send(Outgoing::Text(format!(
            "Fetching recent Rocket League matches for {player}... please wait ⏳"
        )))
        .await?;
    let Some(api) = services.rocket_league.as_ref() else {
        return deliver(player, "rocket league log", Err(&StatsError::NotConfigured), reply).await;
    };
    let target = PlayerRef::parse(player, &services.rl_default_platform);
    match api.recent_matches(&target, RECENT_MATCH_LIMIT).await {
        Ok(matches) => deliver(player, "rocket league log", Ok(log::log_card(player, &matches)), reply).await,
        Err(e) => deliver(player, "rocket league log", Err(&e), reply).await,
    }
}

#[cfg(test)]
mod tests {
    use crate::api::fake::{FakePubg, FakeRocketLeague};
    use crate::commands::testing::{services, RecordingReply};
    use crate::commands::{execute, Outgoing};
    use crate::data::rocket_league::{RlMatch, RlProfile, RlSeason};
    use crate::handlers::command_handler::parse_command;

    fn squishy() -> FakeRocketLeague {
        let mut rl = FakeRocketLeague::default();
        rl.profiles.insert(
            "Squishy".into(),
            RlProfile {
                name: "Squishy".into(),
                season: RlSeason { number: 14, matches: 10, wins: 6, ..Default::default() },
                ..Default::default()
            },
        );
        let matches = (0..12)
            .map(|i| RlMatch { playlist: "Ranked Duel".into(), won: i % 2 == 0, ..Default::default() })
            .collect();
        rl.matches.insert("Squishy".into(), matches);
        rl
    }

    #[tokio::test]
    async fn rlstats_sends_season_then_lifetime() {
        let reply = RecordingReply::default();
        execute(&parse_command("!rlstats epic|Squishy").unwrap(), &services(FakePubg::default(), Some(squishy())), &reply)
            .await
            .unwrap();

        assert_eq!(
            reply.texts(),
            vec!["Fetching Rocket League stats for epic|Squishy... please wait ⏳".to_string()]
        );
        let titles: Vec<String> = reply.cards().into_iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["Squishy — Rocket League Season 14", "Squishy — Rocket League Lifetime"]);
    }

    #[tokio::test]
    async fn rllog_caps_at_ten_matches() {
        let reply = RecordingReply::default();
        execute(&parse_command("!rllog Squishy").unwrap(), &services(FakePubg::default(), Some(squishy())), &reply)
            .await
            .unwrap();

        let cards = reply.cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "Squishy — Last 10 Matches (Rocket League)");
        assert_eq!(cards[0].fields.len(), 10);
        assert!(cards[0].fields[0].name.starts_with("🏆 MATCH **1** - Ranked Duel - Win"));
    }

    #[tokio::test]
    async fn unknown_rocket_league_player() {
        let reply = RecordingReply::default();
        execute(&parse_command("!rlstats steam|Ghost").unwrap(), &services(FakePubg::default(), Some(squishy())), &reply)
            .await
            .unwrap();

        let messages = reply.messages();
        assert_eq!(messages.len(), 2);
        assert!(matches!(
            &messages[1],
            Outgoing::Text(t) if t == "❌ No data found for player **steam|Ghost**. Make sure the name is correct."
        ));
    }

    #[tokio::test]
    async fn unconfigured_rocket_league_reports_an_error() {
        let reply = RecordingReply::default();
        execute(&parse_command("!rllog Squishy").unwrap(), &services(FakePubg::default(), None), &reply)
            .await
            .unwrap();

        assert_eq!(
            reply.texts()[1],
            "⚠️ Error: Rocket League stats are not configured on this bot"
        );
        assert!(reply.cards().is_empty());
    }
}
