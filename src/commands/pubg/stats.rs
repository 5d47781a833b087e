use crate::commands::card::Card;
use crate::data::matches::summary::{ModeSummary, RecentSummary};

const SUMMARY_COLOR: u32 = 0xFFD700;
const SEASON_COLOR: u32 = 0x3399FF;
const LIFETIME_COLOR: u32 = 0x800080;

pub fn summary_card(player: &str, summary: &RecentSummary) -> Card {
    Card::new(format!("{player} — Last 10 Matches (Summary)"), SUMMARY_COLOR)
        .field("K/D", summary.kd.to_string(), false)
        .field("Most Kills", summary.most_kills.to_string(), false)
        .field("Total Kills", summary.total_kills.to_string(), false)
        .field("Total Deaths", summary.total_deaths.to_string(), false)
}

fn mode_card(title: String, color: u32, summary: &ModeSummary) -> Card {
    Card::new(title, color)
        .field("Games Played", summary.games_played.to_string(), false)
        .field("K/D", summary.kd().to_string(), false)
}

pub fn season_card(player: &str, summary: &ModeSummary) -> Card {
    mode_card(format!("{player} — Current Season"), SEASON_COLOR, summary)
}

pub fn lifetime_card(player: &str, summary: &ModeSummary) -> Card {
    mode_card(format!("{player} — Lifetime Stats"), LIFETIME_COLOR, summary)
}
