use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::slides::{BadgeHover, TitleBadge};
use crate::tui::theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    badges: &[TitleBadge],
    hover: &BadgeHover,
    accent: Style,
) {
    let mut chips = Vec::new();
    for (i, badge) in badges.iter().enumerate() {
        let style = if hover.hovered() == Some(i) {
            accent.add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            accent.add_modifier(Modifier::BOLD)
        };
        chips.push(Span::styled(format!(" ★ {} ", badge.display_text), style));
        chips.push(Span::raw("  "));
    }

    let mut lines = vec![Line::from(""), Line::from(chips), Line::from(""), Line::from("")];

    if let Some(explanation) = hover.tooltip(badges) {
        lines.push(Line::from(Span::styled(explanation, theme::bold())));
    } else if hover.hovered().is_none() && badges.iter().any(|b| b.explanation.is_some()) {
        lines.push(Line::from(Span::styled(
            "↑↓ to see what a title means",
            theme::dim(),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
