use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::slides::SlidePage;
use crate::tui::theme;
use crate::utils::format::progress_bar;

/// Slide title plus one dot per page; a bar replaces the subtitle mid-transition.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    page: &SlidePage,
    current: usize,
    total: usize,
    transition: Option<f64>,
) {
    let accent = theme::accent(page.accent);

    let mut dots = Vec::with_capacity(total);
    for i in 0..total {
        let span = if i < current {
            Span::styled("● ", accent)
        } else if i == current {
            Span::styled("◉ ", accent.add_modifier(Modifier::BOLD))
        } else {
            Span::styled("○ ", theme::dim())
        };
        dots.push(span);
    }

    let title_line = Line::from(Span::styled(page.title, accent.add_modifier(Modifier::BOLD)));
    let detail_line = match transition {
        Some(progress) => Line::from(Span::styled(
            progress_bar((progress * 100.0).round() as u32, 100, 24),
            accent,
        )),
        None => Line::from(Span::styled(page.subtitle, theme::dim())),
    };

    let text = vec![Line::from(dots), title_line, detail_line];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(accent)
        .style(theme::base());

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
