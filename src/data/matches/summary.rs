use std::fmt;

use crate::data::matches::match_data::GameModeStats;
use crate::data::matches::record::MatchRecord;
use crate::error::StatsError;

/// The only mode reported in season and lifetime cards.
pub const SQUAD_MODE: &str = "squad-fpp";

/// Kill/death ratio. With no deaths the ratio is the raw kill count and prints
/// as a bare integer; otherwise it is rounded half-up to two decimals, kept in
/// hundredths, and always prints with a fractional part (`3.0`, `1.5`, `1.25`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KdRatio {
    Kills(u32),
    Hundredths(u64),
}

impl KdRatio {
    pub fn new(kills: u32, deaths: u32) -> Self {
        if deaths == 0 {
            return KdRatio::Kills(kills);
        }
        let kills = u64::from(kills);
        let deaths = u64::from(deaths);
        KdRatio::Hundredths((kills * 200 + deaths) / (deaths * 2))
    }
}

impl fmt::Display for KdRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            KdRatio::Kills(k) => write!(f, "{k}"),
            KdRatio::Hundredths(h) => {
                let (whole, frac) = (h / 100, h % 100);
                if frac == 0 {
                    write!(f, "{whole}.0")
                } else if frac % 10 == 0 {
                    write!(f, "{whole}.{}", frac / 10)
                } else {
                    write!(f, "{whole}.{frac:02}")
                }
            }
        }
    }
}

/// Rollup of the recent-match log.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentSummary {
    pub total_kills: u32,
    pub total_deaths: u32,
    pub kd: KdRatio,
    pub most_kills: u32,
}

pub fn most_kills(records: &[MatchRecord]) -> Result<u32, StatsError> {
    records.iter().map(|m| m.kills).max().ok_or(StatsError::EmptyInput)
}

impl RecentSummary {
    pub fn from_records(records: &[MatchRecord]) -> Result<Self, StatsError> {
        let most_kills = most_kills(records)?;
        let total_kills = records.iter().map(|m| m.kills).sum();
        let total_deaths = records.iter().map(|m| m.deaths).sum();
        Ok(RecentSummary {
            total_kills,
            total_deaths,
            kd: KdRatio::new(total_kills, total_deaths),
            most_kills,
        })
    }
}

/// Season or lifetime totals for [`SQUAD_MODE`].
#[derive(Debug, Clone, PartialEq)]
pub struct ModeSummary {
    pub games_played: u32,
    pub kills: u32,
    pub deaths: u32,
}

impl ModeSummary {
    /// An absent mode counts as zero games rather than an error.
    pub fn from_mode_stats(stats: Option<&GameModeStats>) -> Self {
        let stats = stats.cloned().unwrap_or_default();
        ModeSummary {
            games_played: stats.rounds_played,
            kills: stats.kills,
            deaths: stats.losses,
        }
    }

    pub fn kd(&self) -> KdRatio {
        KdRatio::new(self.kills, self.deaths)
    }
}
