use crate::data::matches::maps::{lookup_map, MapInfo};
use crate::data::matches::match_data::MatchDocument;

/// One match as seen by the queried player.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord {
    pub match_id: String,
    pub placement: Option<u32>,
    pub map: MapInfo,
    pub time_alive_minutes: u32,
    pub kills: u32,
    pub deaths: u32,
    pub damage: u32,
    pub teammates: Vec<String>,
}

/// 0 when the recorded death type is exactly `alive`, 1 otherwise.
pub fn death_flag(death_type: &str) -> u32 {
    if death_type == "alive" { 0 } else { 1 }
}

pub fn minutes_alive(seconds: f64) -> u32 {
    (seconds.max(0.0) / 60.0).floor() as u32
}

impl MatchRecord {
    /// Builds the record for `player_name` (matched case-insensitively), or
    /// `None` when that player is not among the match participants.
    pub fn from_document(match_id: &str, doc: &MatchDocument, player_name: &str) -> Option<Self> {
        let wanted = player_name.to_lowercase();
        let subject = doc
            .participants()
            .find(|p| p.attributes.stats.name.to_lowercase() == wanted)?;

        let mut teammates = Vec::new();
        let mut placement = None;
        if let Some(roster) = doc.rosters().find(|r| r.contains(&subject.id)) {
            teammates = roster
                .relationships
                .participants
                .data
                .iter()
                .filter(|member| member.id != subject.id)
                .filter_map(|member| doc.participants().find(|p| p.id == member.id))
                .map(|p| p.attributes.stats.name.clone())
                .collect();
            placement = roster.attributes.stats.rank;
        }

        let stats = &subject.attributes.stats;
        Some(MatchRecord {
            match_id: match_id.to_string(),
            placement,
            map: lookup_map(&doc.data.attributes.map_name),
            time_alive_minutes: minutes_alive(stats.time_survived),
            kills: stats.kills,
            deaths: death_flag(&stats.death_type),
            damage: stats.damage_dealt.max(0.0).round_ties_even() as u32,
            teammates,
        })
    }
}
