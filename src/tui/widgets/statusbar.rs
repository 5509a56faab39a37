use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, on_badges: bool) {
    let mut hints = vec![
        ("[←]", " back  "),
        ("[→/Space]", " next  "),
    ];
    if on_badges {
        hints.push(("[↑↓]", " inspect title  "));
    }
    hints.extend([
        ("[r]", " another league  "),
        ("[?]", " help  "),
        ("[q]", " quit"),
    ]);

    let mut spans = Vec::new();
    for (key, label) in &hints {
        spans.push(Span::styled(*key, theme::orange()));
        spans.push(Span::styled(*label, theme::dim()));
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
