use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Placeholder shown while a stat has not been fetched yet.
pub const PENDING_TEXT: &str = "Loading...";
/// Placeholder substituted for a stat whose endpoint failed.
pub const FAILED_TEXT: &str = "Error loading data";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatId {
    Trae,
    WeeklyAverage,
    BestWeek,
    WorstWeek,
    LongestStreak,
    Sleeper,
    Bust,
    Clutch,
    BestMatchup,
    WorstMatchup,
    BiggestComeback,
    BonusTitles,
    MissingPoints,
}

impl StatId {
    pub const ALL: [StatId; 13] = [
        StatId::Trae,
        StatId::WeeklyAverage,
        StatId::BestWeek,
        StatId::WorstWeek,
        StatId::LongestStreak,
        StatId::Sleeper,
        StatId::Bust,
        StatId::Clutch,
        StatId::BestMatchup,
        StatId::WorstMatchup,
        StatId::BiggestComeback,
        StatId::BonusTitles,
        StatId::MissingPoints,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatId::Trae => "trae",
            StatId::WeeklyAverage => "weeklyAverage",
            StatId::BestWeek => "bestWeek",
            StatId::WorstWeek => "worstWeek",
            StatId::LongestStreak => "longestStreak",
            StatId::Sleeper => "sleeper",
            StatId::Bust => "bust",
            StatId::Clutch => "clutch",
            StatId::BestMatchup => "bestMatchup",
            StatId::WorstMatchup => "worstMatchup",
            StatId::BiggestComeback => "biggestComeback",
            StatId::BonusTitles => "bonusTitles",
            StatId::MissingPoints => "missingPoints",
        }
    }

    /// Backend path serving this stat, relative to the configured base URL.
    pub fn endpoint(&self) -> &'static str {
        match self {
            StatId::Trae => "/team/find-trae",
            StatId::WeeklyAverage => "/team/weekly-average",
            StatId::BestWeek => "/team/best-week",
            StatId::WorstWeek => "/team/worst-week",
            StatId::LongestStreak => "/team/longest-streak",
            StatId::Sleeper => "/team/sleeper",
            StatId::Bust => "/team/bust",
            StatId::Clutch => "/team/clutch",
            StatId::BestMatchup => "/team/best-matchup",
            StatId::WorstMatchup => "/team/worst-matchup",
            StatId::BiggestComeback => "/team/biggest-comeback",
            StatId::BonusTitles => "/team/bonus-titles",
            StatId::MissingPoints => "/team/missing-points",
        }
    }
}

impl std::fmt::Display for StatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow::anyhow!("Unknown stat identifier: {}", s))
    }
}

/// One stat payload as it arrived (or failed to arrive) from the backend.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RawStat {
    #[default]
    Pending,
    Failed,
    Ready(String),
}

impl RawStat {
    pub fn is_ready(&self) -> bool {
        matches!(self, RawStat::Ready(_))
    }
}

/// Every stat fetched for one initialized session.
///
/// Built in one piece once all fetches have settled; never patched afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatsBundle {
    stats: HashMap<StatId, RawStat>,
}

impl StatsBundle {
    pub fn from_results<I>(results: I) -> Self
    where
        I: IntoIterator<Item = (StatId, RawStat)>,
    {
        Self {
            stats: results.into_iter().collect(),
        }
    }

    pub fn get(&self, id: StatId) -> &RawStat {
        static PENDING: RawStat = RawStat::Pending;
        self.stats.get(&id).unwrap_or(&PENDING)
    }

    pub fn failed_count(&self) -> usize {
        self.stats
            .values()
            .filter(|s| matches!(s, RawStat::Failed))
            .count()
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}
