use ratatui::style::{Color, Modifier, Style};

use crate::slides::Accent;

pub const BG: Color = Color::Rgb(16, 14, 20);
pub const SURFACE: Color = Color::Rgb(26, 23, 33);
pub const BORDER: Color = Color::Rgb(58, 52, 70);
pub const TEXT: Color = Color::Rgb(236, 232, 244);
pub const TEXT_DIM: Color = Color::Rgb(140, 132, 156);
pub const ORANGE: Color = Color::Rgb(249, 115, 22);
pub const BLUE: Color = Color::Rgb(59, 130, 246);
pub const GREEN: Color = Color::Rgb(34, 197, 94);
pub const RED: Color = Color::Rgb(239, 68, 68);
pub const PURPLE: Color = Color::Rgb(168, 85, 247);
pub const YELLOW: Color = Color::Rgb(250, 204, 21);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn orange() -> Style {
    Style::default().fg(ORANGE)
}

pub fn red() -> Style {
    Style::default().fg(RED)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub fn border() -> Style {
    Style::default().fg(BORDER)
}

pub fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Orange => ORANGE,
        Accent::Blue => BLUE,
        Accent::Green => GREEN,
        Accent::Red => RED,
        Accent::Purple => PURPLE,
        Accent::Yellow => YELLOW,
    }
}

pub fn accent(accent: Accent) -> Style {
    Style::default().fg(accent_color(accent))
}
