use crate::commands::card::Card;
use crate::data::rocket_league::{percentage, RlProfile, RlRank};

const CURRENT_COLOR: u32 = 0x1F8EFA;
const LIFETIME_COLOR: u32 = 0xF5A623;

fn rank_value(rank: Option<&RlRank>) -> String {
    rank.map_or_else(|| "Unranked".to_string(), ToString::to_string)
}

pub fn current_card(profile: &RlProfile) -> Card {
    let season = &profile.season;
    Card::new(
        format!("{} — Rocket League Season {}", profile.name, season.number),
        CURRENT_COLOR,
    )
    .field("Ranked Duel (1v1)", rank_value(season.ranks.duel.as_ref()), true)
    .field("Ranked Doubles (2v2)", rank_value(season.ranks.doubles.as_ref()), true)
    .field("Ranked Standard (3v3)", rank_value(season.ranks.standard.as_ref()), true)
    .field("Matches", season.matches.to_string(), true)
    .field("Wins", season.wins.to_string(), true)
    .field("Goals", season.goals.to_string(), true)
    .field("Assists", season.assists.to_string(), true)
    .field("Saves", season.saves.to_string(), true)
    .field("MVPs", season.mvps.to_string(), true)
}

pub fn lifetime_card(profile: &RlProfile) -> Card {
    let life = &profile.lifetime;
    Card::new(format!("{} — Rocket League Lifetime", profile.name), LIFETIME_COLOR)
        .field("Matches", life.matches.to_string(), true)
        .field("Wins", life.wins.to_string(), true)
        .field("Win Rate", percentage(life.wins, life.matches), true)
        .field("Goals", life.goals.to_string(), true)
        .field("Assists", life.assists.to_string(), true)
        .field("Saves", life.saves.to_string(), true)
        .field("Shots", life.shots.to_string(), true)
        .field("Shooting %", percentage(life.goals, life.shots), true)
        .field("MVPs", life.mvps.to_string(), true)
}
