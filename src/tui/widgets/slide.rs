use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use tui_big_text::{BigText, PixelSize};

use crate::models::StatsBundle;
use crate::slides::{
    badges, format, format_numeric, parse_numeric, recap_lines, BadgeHover, FormattedStat,
    PageKind, SlidePage, StatStyle,
};
use crate::tui::theme;
use crate::tui::widgets;
use crate::utils::format::{truncate_to_width, with_unit};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    page: &SlidePage,
    bundle: &StatsBundle,
    hover: &BadgeHover,
    dimmed: bool,
) {
    let accent = theme::accent(page.accent);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let accent = if dimmed {
        accent.add_modifier(Modifier::DIM)
    } else {
        accent
    };

    match page.kind {
        PageKind::Welcome => render_welcome(frame, inner, page, accent),
        PageKind::Stat { id, style } => match style {
            StatStyle::Auto => render_stat(frame, inner, &format(bundle.get(id)), accent),
            StatStyle::Numeric { unit } => {
                let raw = bundle.get(id);
                let is_number = parse_numeric(raw).is_some();
                let text = with_unit(&format_numeric(raw), unit, is_number);
                render_headline(frame, inner, &text, accent, is_number);
            }
            StatStyle::Badges => {
                let found = badges(&format(bundle.get(id)));
                widgets::badges::render(frame, centered_band(inner, 8), &found, hover, accent);
            }
        },
        PageKind::Recap => render_recap(frame, inner, bundle),
        PageKind::Closing => render_closing(frame, inner, page, accent),
    }
}

fn render_welcome(frame: &mut Frame, area: Rect, page: &SlidePage, accent: Style) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let banner = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(accent.add_modifier(Modifier::BOLD))
        .lines(vec!["WRAPPED".into()])
        .alignment(Alignment::Center)
        .build();
    frame.render_widget(banner, chunks[1]);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(page.title, theme::bold())),
        Line::from(""),
        Line::from(Span::styled(page.subtitle, theme::dim())),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled("Press  →  or  Space  to begin", theme::dim())),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        chunks[3],
    );
}

fn render_stat(frame: &mut Frame, area: Rect, stat: &FormattedStat, accent: Style) {
    match stat {
        FormattedStat::Scalar(text) => render_headline(frame, area, text, accent, false),
        FormattedStat::RecordList(records) => {
            let label_width = records
                .iter()
                .filter_map(|r| r.label.as_ref())
                .map(|l| l.chars().count())
                .max()
                .unwrap_or(0)
                .min(24);
            let value_width = (area.width as usize).saturating_sub(label_width + 8);

            let mut lines = vec![Line::from("")];
            for record in records {
                let value = truncate_to_width(&record.value, value_width);
                let line = match &record.label {
                    Some(label) => Line::from(vec![
                        Span::styled(
                            format!("{:>width$}  ", label, width = label_width),
                            theme::dim(),
                        ),
                        Span::styled(value, accent.add_modifier(Modifier::BOLD)),
                    ]),
                    None => Line::from(Span::styled(value, accent.add_modifier(Modifier::BOLD))),
                };
                lines.push(line);
                lines.push(Line::from(""));
            }

            let height = lines.len() as u16;
            frame.render_widget(
                Paragraph::new(lines).alignment(Alignment::Center),
                centered_band(area, height),
            );
        }
    }
}

fn render_headline(frame: &mut Frame, area: Rect, text: &str, accent: Style, big: bool) {
    // Big glyphs are 4 columns wide in quadrant mode; fall back when they won't fit.
    let fits_big = big && (text.chars().count() as u16) * 4 <= area.width;
    if fits_big {
        let banner = BigText::builder()
            .pixel_size(PixelSize::Quadrant)
            .style(accent.add_modifier(Modifier::BOLD))
            .lines(vec![text.to_string().into()])
            .alignment(Alignment::Center)
            .build();
        frame.render_widget(banner, centered_band(area, 4));
        return;
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        accent.add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, centered_band(area, 3));
}

fn render_recap(frame: &mut Frame, area: Rect, bundle: &StatsBundle) {
    let value_width = (area.width as usize).saturating_sub(24);
    let mut lines = vec![Line::from("")];
    for (title, summary) in recap_lines(bundle) {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<18}", title), theme::dim()),
            Span::styled(truncate_to_width(&summary, value_width), theme::bold()),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_closing(frame: &mut Frame, area: Rect, page: &SlidePage, accent: Style) {
    let lines = vec![
        Line::from(Span::styled(page.title, accent.add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::styled(page.subtitle, theme::dim())),
        Line::from(""),
        Line::from(""),
        Line::from(vec![
            Span::styled("[r]", theme::orange()),
            Span::styled(" try another league    ", theme::dim()),
            Span::styled("[q]", theme::orange()),
            Span::styled(" quit", theme::dim()),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered_band(area, 6),
    );
}

fn centered_band(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect {
        x: area.x,
        y: area.y + (area.height - height) / 2,
        width: area.width,
        height,
    }
}
