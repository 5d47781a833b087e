use chrono::DateTime;

use crate::commands::card::Card;
use crate::data::rocket_league::RlMatch;

const LOG_COLOR: u32 = 0x2ECC71;

fn entry_title(number: usize, m: &RlMatch) -> String {
    let (crown, outcome) = if m.won { ("🏆 ", "Win") } else { ("", "Loss") };
    format!(
        "{crown}MATCH **{number}** - {} - {outcome} {}-{}",
        m.playlist, m.team_score, m.opponent_score
    )
}

fn entry_body(m: &RlMatch) -> String {
    let mut body = format!(
        "Goals: {} | Assists: {} | Saves: {} | Shots: {}",
        m.goals, m.assists, m.saves, m.shots
    );
    if m.mvp {
        body.push_str("\n⭐ MVP");
    }
    // Discord renders <t:..:R> as "3 hours ago"
    if let Some(ts) = m
        .played_at
        .as_deref()
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
    {
        body.push_str(&format!("\n<t:{}:R>", ts.timestamp()));
    }
    body
}

pub fn log_card(name: &str, matches: &[RlMatch]) -> Card {
    let card = Card::new(format!("{name} — Last 10 Matches (Rocket League)"), LOG_COLOR);
    if matches.is_empty() {
        return card.description("No recent matches found.");
    }
    matches
        .iter()
        .enumerate()
        .fold(card, |card, (i, m)| card.field(entry_title(i + 1, m), entry_body(m), false))
}
