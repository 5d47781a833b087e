// Wire types for the PUBG JSON:API documents this bot reads.
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ResourceRef {
    pub id: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RelationshipList {
    #[serde(default)]
    pub data: Vec<ResourceRef>,
}

// players?filter[playerNames]=
#[derive(Debug, Deserialize, Clone, Default)]
pub struct PlayerSearch {
    #[serde(default)]
    pub data: Vec<ResourceRef>,
}

// players/{accountId}
#[derive(Debug, Deserialize, Clone)]
pub struct PlayerDocument {
    pub data: PlayerResource,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlayerResource {
    pub relationships: PlayerRelationships,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlayerRelationships {
    pub matches: RelationshipList,
}

// matches/{matchId}
#[derive(Debug, Deserialize, Clone)]
pub struct MatchDocument {
    pub data: MatchResource,
    #[serde(default)]
    pub included: Vec<Included>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MatchResource {
    pub attributes: MatchAttributes,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct MatchAttributes {
    pub map_name: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Included {
    Participant(Participant),
    Roster(Roster),
    // assets and anything else the API adds later
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Participant {
    pub id: String,
    pub attributes: ParticipantAttributes,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ParticipantAttributes {
    pub stats: ParticipantStats,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipantStats {
    pub name: String,
    pub kills: u32,
    pub death_type: String,
    pub time_survived: f64,
    pub damage_dealt: f64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Roster {
    pub attributes: RosterAttributes,
    pub relationships: RosterRelationships,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RosterAttributes {
    pub stats: RosterStats,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RosterStats {
    pub rank: Option<u32>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RosterRelationships {
    pub participants: RelationshipList,
}

impl Roster {
    pub fn contains(&self, participant_id: &str) -> bool {
        self.relationships
            .participants
            .data
            .iter()
            .any(|p| p.id == participant_id)
    }
}

impl MatchDocument {
    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.included.iter().filter_map(|i| match i {
            Included::Participant(p) => Some(p),
            _ => None,
        })
    }

    pub fn rosters(&self) -> impl Iterator<Item = &Roster> {
        self.included.iter().filter_map(|i| match i {
            Included::Roster(r) => Some(r),
            _ => None,
        })
    }
}

// seasons
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SeasonList {
    #[serde(default)]
    pub data: Vec<Season>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Season {
    pub id: String,
    pub attributes: SeasonAttributes,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SeasonAttributes {
    pub is_current_season: bool,
}

// players/{accountId}/seasons/{seasonId}
#[derive(Debug, Deserialize, Clone)]
pub struct SeasonStatsDocument {
    pub data: SeasonStatsResource,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeasonStatsResource {
    pub attributes: SeasonStatsAttributes,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SeasonStatsAttributes {
    #[serde(default)]
    pub game_mode_stats: HashMap<String, GameModeStats>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GameModeStats {
    pub rounds_played: u32,
    pub kills: u32,
    pub losses: u32,
}
