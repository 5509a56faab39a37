use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::slides::formatter::{strip_quotes, FormattedStat};

static CATALOG: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "underdog",
            "Your roster outscored its preseason projections by more than anyone else's.",
        ),
        (
            "overrated",
            "Your roster fell furthest short of its preseason projections.",
        ),
        (
            "cakewalk",
            "Biggest gap between points scored and points allowed. Nobody could keep up.",
        ),
        (
            "toughie",
            "Points allowed outran points scored by more than any other team.",
        ),
        (
            "quick hands",
            "Most free-agent pickups on the roster. Always first to the waiver wire.",
        ),
        (
            "longest win streak",
            "No team in the league strung together more consecutive wins.",
        ),
        (
            "longest loss streak",
            "No team in the league dropped more matchups in a row.",
        ),
        (
            "participation trophy",
            "No other titles this season, but you showed up every week.",
        ),
    ])
});

/// Explanation for a bonus title, keyed by its lowercased, trimmed name.
pub fn explain(title: &str) -> Option<&'static str> {
    CATALOG.get(title.trim().to_lowercase().as_str()).copied()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleBadge {
    pub display_text: String,
    pub explanation: Option<&'static str>,
}

impl TitleBadge {
    pub fn new(display_text: impl Into<String>) -> Self {
        let display_text = display_text.into();
        let explanation = explain(&display_text);
        Self {
            display_text,
            explanation,
        }
    }
}

/// Badges for the bonus-titles slide.
///
/// Records contribute their value. A scalar is split on commas, with list
/// brackets and per-item quotes peeled off, so a JSON array of names works too.
pub fn badges(stat: &FormattedStat) -> Vec<TitleBadge> {
    match stat {
        FormattedStat::RecordList(records) => records
            .iter()
            .filter(|r| !r.value.is_empty())
            .map(|r| TitleBadge::new(r.value.as_str()))
            .collect(),
        FormattedStat::Scalar(text) => text
            .trim()
            .trim_start_matches('[')
            .trim_end_matches(']')
            .split(',')
            .map(|item| strip_quotes(item.trim()).trim())
            .filter(|item| !item.is_empty())
            .map(TitleBadge::new)
            .collect(),
    }
}

/// Which badge, if any, is showing its tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BadgeHover {
    hovered: Option<usize>,
}

impl BadgeHover {
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn next(&mut self, count: usize) {
        if count == 0 {
            self.hovered = None;
            return;
        }
        self.hovered = Some(match self.hovered {
            Some(i) if i + 1 < count => i + 1,
            Some(_) => 0,
            None => 0,
        });
    }

    pub fn previous(&mut self, count: usize) {
        if count == 0 {
            self.hovered = None;
            return;
        }
        self.hovered = Some(match self.hovered {
            Some(i) if i > 0 && i < count => i - 1,
            _ => count - 1,
        });
    }

    pub fn clear(&mut self) {
        self.hovered = None;
    }

    /// Tooltip text for the hovered badge, if it has a catalog entry.
    pub fn tooltip(&self, badges: &[TitleBadge]) -> Option<&'static str> {
        self.hovered
            .and_then(|i| badges.get(i))
            .and_then(|b| b.explanation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slides::formatter::format_text;

    #[test]
    fn hover_cycles_and_clears() {
        let found = badges(&format_text("underdog, Sixth Man"));
        let mut hover = BadgeHover::default();
        assert_eq!(hover.tooltip(&found), None);

        hover.next(found.len());
        assert_eq!(hover.hovered(), Some(0));
        assert_eq!(hover.tooltip(&found), explain("underdog"));

        hover.next(found.len());
        assert_eq!(hover.tooltip(&found), None);

        hover.next(found.len());
        assert_eq!(hover.hovered(), Some(0));

        hover.previous(found.len());
        assert_eq!(hover.hovered(), Some(1));

        hover.clear();
        assert_eq!(hover.hovered(), None);
    }

    #[test]
    fn lookup_ignores_case_and_padding() {
        assert!(explain("  Quick Hands ").is_some());
        assert!(explain("UNDERDOG").is_some());
        assert_eq!(explain("quick"), None);
    }

    #[test]
    fn json_list_becomes_badges() {
        let found = badges(&format_text("[\"underdog\", \"quick hands\"]"));
        let names: Vec<&str> = found.iter().map(|b| b.display_text.as_str()).collect();
        assert_eq!(names, vec!["underdog", "quick hands"]);
        assert!(found.iter().all(|b| b.explanation.is_some()));
    }

    #[test]
    fn unknown_title_has_no_tooltip() {
        let found = badges(&format_text("Sixth Man"));
        assert_eq!(found, vec![TitleBadge {
            display_text: "Sixth Man".to_string(),
            explanation: None,
        }]);
    }

    #[test]
    fn records_contribute_values() {
        let found = badges(&format_text("Title: cakewalk, Title: toughie"));
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].display_text, "toughie");
    }
}
