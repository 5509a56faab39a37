use crate::models::StatId;

pub const PAGE_COUNT: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Orange,
    Blue,
    Green,
    Red,
    Purple,
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatStyle {
    /// Scalars as headline text, record lists as a label/value table.
    Auto,
    /// Rounded to one decimal place with a unit suffix.
    Numeric { unit: &'static str },
    /// One chip per title, with catalog explanations.
    Badges,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Welcome,
    Stat { id: StatId, style: StatStyle },
    Recap,
    Closing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidePage {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub accent: Accent,
    pub kind: PageKind,
}

impl SlidePage {
    pub fn stat(&self) -> Option<StatId> {
        match self.kind {
            PageKind::Stat { id, .. } => Some(id),
            _ => None,
        }
    }
}

const fn stat_page(
    title: &'static str,
    subtitle: &'static str,
    accent: Accent,
    id: StatId,
    style: StatStyle,
) -> SlidePage {
    SlidePage {
        title,
        subtitle,
        accent,
        kind: PageKind::Stat { id, style },
    }
}

pub static DECK: [SlidePage; PAGE_COUNT] = [
    SlidePage {
        title: "Your Fantasy Basketball Wrapped",
        subtitle: "A deep dive into your season",
        accent: Accent::Orange,
        kind: PageKind::Welcome,
    },
    stat_page(
        "Trae Young Hunt",
        "Did he make your roster?",
        Accent::Orange,
        StatId::Trae,
        StatStyle::Auto,
    ),
    stat_page(
        "Weekly Average",
        "Points per week",
        Accent::Blue,
        StatId::WeeklyAverage,
        StatStyle::Numeric { unit: "pts" },
    ),
    stat_page(
        "Best Week",
        "Your highest scoring week",
        Accent::Green,
        StatId::BestWeek,
        StatStyle::Auto,
    ),
    stat_page(
        "Worst Week",
        "Room for improvement",
        Accent::Red,
        StatId::WorstWeek,
        StatStyle::Auto,
    ),
    stat_page(
        "Longest Streaks",
        "Win and loss streaks",
        Accent::Purple,
        StatId::LongestStreak,
        StatStyle::Auto,
    ),
    stat_page(
        "Sleeper Star",
        "Exceeded expectations",
        Accent::Yellow,
        StatId::Sleeper,
        StatStyle::Auto,
    ),
    stat_page(
        "Biggest Bust",
        "Underperformed projections",
        Accent::Red,
        StatId::Bust,
        StatStyle::Auto,
    ),
    stat_page(
        "Clutch Player",
        "Came through when needed",
        Accent::Orange,
        StatId::Clutch,
        StatStyle::Auto,
    ),
    stat_page(
        "Best Matchup",
        "Your favorite opponent",
        Accent::Green,
        StatId::BestMatchup,
        StatStyle::Auto,
    ),
    stat_page(
        "Worst Matchup",
        "Your kryptonite team",
        Accent::Red,
        StatId::WorstMatchup,
        StatStyle::Auto,
    ),
    stat_page(
        "Biggest Comeback",
        "The deficit you erased",
        Accent::Purple,
        StatId::BiggestComeback,
        StatStyle::Auto,
    ),
    stat_page(
        "Missing Points",
        "Left on your bench on short-handed days",
        Accent::Blue,
        StatId::MissingPoints,
        StatStyle::Numeric { unit: "pts" },
    ),
    stat_page(
        "Bonus Titles",
        "Superlatives earned around the league",
        Accent::Yellow,
        StatId::BonusTitles,
        StatStyle::Badges,
    ),
    SlidePage {
        title: "Season in Review",
        subtitle: "Everything at a glance",
        accent: Accent::Blue,
        kind: PageKind::Recap,
    },
    SlidePage {
        title: "That's a Wrap",
        subtitle: "Thanks for playing. Try another league?",
        accent: Accent::Orange,
        kind: PageKind::Closing,
    },
];
