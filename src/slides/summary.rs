use crate::models::{StatId, StatsBundle};
use crate::slides::{badges, format, format_numeric, parse_numeric, PageKind, StatStyle, DECK};
use crate::utils::format::with_unit;

/// A stat reduced to the single line it would show on its own slide.
pub fn summarize(bundle: &StatsBundle, id: StatId, style: StatStyle) -> String {
    let raw = bundle.get(id);
    match style {
        StatStyle::Numeric { unit } => {
            with_unit(&format_numeric(raw), unit, parse_numeric(raw).is_some())
        }
        StatStyle::Badges => {
            let found = badges(&format(raw));
            if found.is_empty() {
                format(raw).rendered_text()
            } else {
                found
                    .iter()
                    .map(|b| b.display_text.as_str())
                    .collect::<Vec<_>>()
                    .join(" · ")
            }
        }
        StatStyle::Auto => format(raw).rendered_text(),
    }
}

/// One `(title, summary)` pair per stat page, in deck order.
pub fn recap_lines(bundle: &StatsBundle) -> Vec<(&'static str, String)> {
    DECK.iter()
        .filter_map(|page| match page.kind {
            PageKind::Stat { id, style } => Some((page.title, summarize(bundle, id, style))),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawStat;

    #[test]
    fn recap_covers_every_stat_page() {
        let bundle = StatsBundle::from_results([
            (StatId::WeeklyAverage, RawStat::Ready("101.34".to_string())),
            (StatId::Bust, RawStat::Failed),
            (
                StatId::BonusTitles,
                RawStat::Ready("[\"cakewalk\", \"quick hands\"]".to_string()),
            ),
        ]);
        let lines = recap_lines(&bundle);
        assert_eq!(lines.len(), StatId::ALL.len());

        let find = |title: &str| {
            lines
                .iter()
                .find(|(t, _)| *t == title)
                .map(|(_, s)| s.clone())
                .unwrap()
        };
        assert_eq!(find("Weekly Average"), "101.3 pts");
        assert_eq!(find("Biggest Bust"), "Error loading data");
        assert_eq!(find("Bonus Titles"), "cakewalk · quick hands");
        assert_eq!(find("Clutch Player"), "Loading...");
    }

    #[test]
    fn non_numeric_average_keeps_text_without_unit() {
        let bundle = StatsBundle::from_results([(
            StatId::WeeklyAverage,
            RawStat::Ready("\"n/a\"".to_string()),
        )]);
        let style = StatStyle::Numeric { unit: "pts" };
        assert_eq!(summarize(&bundle, StatId::WeeklyAverage, style), "n/a");
    }
}
