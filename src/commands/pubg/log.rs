use crate::commands::card::Card;
use crate::data::matches::record::MatchRecord;
use crate::data::matches::summary::KdRatio;

const LOG_COLOR: u32 = 0xFFFFFF;

fn entry_title(number: usize, m: &MatchRecord) -> String {
    let crown = if m.placement == Some(1) { "🏆 " } else { "" };
    let placement = match m.placement {
        Some(1) => "**1**".to_string(),
        Some(p) => p.to_string(),
        None => "N/A".to_string(),
    };
    format!("{crown}MATCH **{number}** - {} - Placement: {placement}", m.map)
}

fn entry_body(player: &str, shard: &str, m: &MatchRecord) -> String {
    let kd = KdRatio::new(m.kills, m.deaths);
    let teammates = if m.teammates.is_empty() {
        "None".to_string()
    } else {
        m.teammates.join(", ")
    };
    format!(
        "Time Alive: {}m\nKills: {} | Deaths: {} | Damage: {} | **K/D: {kd}**\nTeammates: {teammates}\n🔗 [View Match Details](https://pubglookup.com/players/{shard}/{}/matches/{})",
        m.time_alive_minutes,
        m.kills,
        m.deaths,
        m.damage,
        urlencoding::encode(player),
        m.match_id,
    )
}

/// One field per match, numbered from 1 in the order given.
pub fn log_card(player: &str, shard: &str, matches: &[MatchRecord]) -> Card {
    let card = Card::new(format!("{player} — Last 10 Matches (Log)"), LOG_COLOR);
    if matches.is_empty() {
        return card.description("No recent matches found.");
    }
    matches.iter().enumerate().fold(card, |card, (i, m)| {
        card.field(entry_title(i + 1, m), entry_body(player, shard, m), false)
    })
}
