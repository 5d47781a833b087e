use serde::Deserialize;
use std::fmt;

/// A Rocket League account as typed in chat: `Platform|id` or a bare id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRef {
    pub platform: String,
    pub id: String,
}

impl PlayerRef {
    pub fn parse(input: &str, default_platform: &str) -> Self {
        match input.split_once('|') {
            Some((platform, id)) if !platform.trim().is_empty() && !id.trim().is_empty() => PlayerRef {
                platform: platform.trim().to_lowercase(),
                id: id.trim().to_string(),
            },
            _ => PlayerRef {
                platform: default_platform.to_lowercase(),
                id: input.trim().to_string(),
            },
        }
    }
}

impl fmt::Display for PlayerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.platform, self.id)
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RlProfile {
    pub name: String,
    #[serde(default)]
    pub season: RlSeason,
    #[serde(default)]
    pub lifetime: RlLifetime,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RlSeason {
    pub number: u32,
    pub ranks: RlRanks,
    pub matches: u32,
    pub wins: u32,
    pub goals: u32,
    pub assists: u32,
    pub saves: u32,
    pub mvps: u32,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct RlRanks {
    pub duel: Option<RlRank>,
    pub doubles: Option<RlRank>,
    pub standard: Option<RlRank>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct RlRank {
    pub tier: String,
    #[serde(default)]
    pub division: Option<u8>,
    #[serde(default)]
    pub mmr: Option<u32>,
}

impl fmt::Display for RlRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tier)?;
        if let Some(div) = self.division {
            write!(f, " Div {div}")?;
        }
        if let Some(mmr) = self.mmr {
            write!(f, " ({mmr} MMR)")?;
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RlLifetime {
    pub matches: u32,
    pub wins: u32,
    pub goals: u32,
    pub assists: u32,
    pub saves: u32,
    pub shots: u32,
    pub mvps: u32,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct RlMatchList {
    #[serde(default)]
    pub matches: Vec<RlMatch>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RlMatch {
    #[serde(default)]
    pub playlist: String,
    #[serde(default)]
    pub won: bool,
    #[serde(default)]
    pub team_score: u32,
    #[serde(default)]
    pub opponent_score: u32,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub saves: u32,
    #[serde(default)]
    pub shots: u32,
    #[serde(default)]
    pub mvp: bool,
    #[serde(default)]
    pub played_at: Option<String>,
}

/// `part / whole` as a percentage with one decimal, `-` when `whole` is 0.
pub fn percentage(part: u32, whole: u32) -> String {
    if whole == 0 {
        return "-".to_string();
    }
    format!("{:.1}%", f64::from(part) * 100.0 / f64::from(whole))
}
