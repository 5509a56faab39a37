use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{AuthMethod, Credentials};
use crate::tui::theme;
use crate::utils::format::{mask, truncate_to_width};

// ─── Form fields ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    LeagueId,
    Year,
    AuthMode,
    /// ESPN_S2 cookie, or username.
    Primary,
    /// SWID cookie, or password.
    Secondary,
    Submit,
}

const FIELD_ORDER: [Field; 6] = [
    Field::LeagueId,
    Field::Year,
    Field::AuthMode,
    Field::Primary,
    Field::Secondary,
    Field::Submit,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    None,
    Submit(Credentials),
    Quit,
}

// ─── Form state ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct LoginForm {
    pub focus: Field,
    pub league_id: String,
    pub year: String,
    pub use_login: bool,
    pub espn_s2: String,
    pub swid: String,
    pub username: String,
    pub password: String,
    pub error: Option<String>,
    default_year: i32,
}

impl LoginForm {
    pub fn new(default_year: i32) -> Self {
        Self {
            focus: Field::LeagueId,
            league_id: String::new(),
            year: default_year.to_string(),
            use_login: false,
            espn_s2: String::new(),
            swid: String::new(),
            username: String::new(),
            password: String::new(),
            error: None,
            default_year,
        }
    }

    /// Back to a blank form, as when switching to another league.
    pub fn clear(&mut self) {
        *self = Self::new(self.default_year);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        if key.kind != KeyEventKind::Press {
            return FormAction::None;
        }

        match key.code {
            KeyCode::Esc => return FormAction::Quit,
            KeyCode::Tab | KeyCode::Down => self.move_focus(1),
            KeyCode::BackTab | KeyCode::Up => self.move_focus(-1),
            KeyCode::Enter => {
                if self.focus != Field::Submit && self.focus != Field::Secondary {
                    self.move_focus(1);
                    return FormAction::None;
                }
                return match self.build_credentials() {
                    Ok(credentials) => {
                        self.error = None;
                        FormAction::Submit(credentials)
                    }
                    Err(e) => {
                        self.error = Some(e);
                        FormAction::None
                    }
                };
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
                if self.focus == Field::AuthMode =>
            {
                self.use_login = !self.use_login;
                self.error = None;
            }
            KeyCode::Backspace => {
                if let Some(input) = self.active_input() {
                    input.pop();
                }
                self.error = None;
            }
            KeyCode::Char(c) => {
                let digits_only = matches!(self.focus, Field::LeagueId | Field::Year);
                if digits_only && !c.is_ascii_digit() {
                    return FormAction::None;
                }
                if let Some(input) = self.active_input() {
                    input.push(c);
                }
                self.error = None;
            }
            _ => {}
        }
        FormAction::None
    }

    fn move_focus(&mut self, step: isize) {
        let pos = FIELD_ORDER
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0) as isize;
        let len = FIELD_ORDER.len() as isize;
        self.focus = FIELD_ORDER[(pos + step).rem_euclid(len) as usize];
    }

    fn active_input(&mut self) -> Option<&mut String> {
        match (self.focus, self.use_login) {
            (Field::LeagueId, _) => Some(&mut self.league_id),
            (Field::Year, _) => Some(&mut self.year),
            (Field::Primary, false) => Some(&mut self.espn_s2),
            (Field::Secondary, false) => Some(&mut self.swid),
            (Field::Primary, true) => Some(&mut self.username),
            (Field::Secondary, true) => Some(&mut self.password),
            _ => None,
        }
    }

    pub fn build_credentials(&self) -> Result<Credentials, String> {
        let league_id = self
            .league_id
            .trim()
            .parse::<i64>()
            .map_err(|_| "Enter your numeric league ID".to_string())?;
        let year = self
            .year
            .trim()
            .parse::<i32>()
            .map_err(|_| "Enter the season year (e.g. 2025)".to_string())?;

        let auth = if self.use_login {
            if self.username.trim().is_empty() || self.password.is_empty() {
                return Err("Enter your ESPN username and password".to_string());
            }
            AuthMethod::Login {
                username: self.username.trim().to_string(),
                password: self.password.clone(),
            }
        } else {
            if self.espn_s2.trim().is_empty() || self.swid.trim().is_empty() {
                return Err("Enter both the ESPN_S2 and SWID cookies".to_string());
            }
            AuthMethod::Cookies {
                espn_s2: self.espn_s2.trim().to_string(),
                swid: self.swid.trim().to_string(),
            }
        };

        Ok(Credentials {
            league_id,
            year,
            auth,
        })
    }
}

// ─── Rendering ────────────────────────────────────────────────────────────────

pub fn draw(frame: &mut Frame, form: &LoginForm, busy: Option<&str>) {
    let area = frame.area();
    frame.render_widget(Block::default().style(theme::base()), area);

    let vchunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(24),
            Constraint::Min(0),
        ])
        .split(area);

    let hchunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(64),
            Constraint::Min(0),
        ])
        .split(vchunks[1]);

    let box_area = hchunks[1];
    frame.render_widget(Clear, box_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::orange())
        .style(theme::surface())
        .title(Span::styled(
            "  Fantasy Basketball Wrapped  ",
            theme::orange().add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center);

    let input_width = box_area.width.saturating_sub(24) as usize;
    let (primary_label, secondary_label) = if form.use_login {
        ("Username", "Password")
    } else {
        ("ESPN_S2", "SWID")
    };
    let (primary, secondary) = if form.use_login {
        (form.username.clone(), mask(&form.password))
    } else {
        (form.espn_s2.clone(), form.swid.clone())
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Enter your ESPN Fantasy credentials to get started",
            theme::dim(),
        )),
        Line::from(""),
        input_line("League ID", &form.league_id, form.focus == Field::LeagueId, input_width),
        Line::from(""),
        input_line("Year", &form.year, form.focus == Field::Year, input_width),
        Line::from(""),
        auth_line(form),
        Line::from(""),
        input_line(primary_label, &primary, form.focus == Field::Primary, input_width),
        Line::from(""),
        input_line(secondary_label, &secondary, form.focus == Field::Secondary, input_width),
        Line::from(""),
        Line::from(""),
    ];

    let button = match busy {
        Some(status) => Span::styled(format!("  {}  ", status), theme::dim()),
        None if form.focus == Field::Submit => Span::styled(
            "▶ Get My Wrapped ◀",
            theme::orange().add_modifier(Modifier::BOLD | Modifier::REVERSED),
        ),
        None => Span::styled("  Get My Wrapped  ", theme::orange().add_modifier(Modifier::BOLD)),
    };
    lines.push(Line::from(button).alignment(Alignment::Center));
    lines.push(Line::from(""));

    match &form.error {
        Some(err) => lines.push(
            Line::from(Span::styled(format!("✗  {}", err), theme::red())).alignment(Alignment::Center),
        ),
        None => lines.push(Line::from("")),
    }

    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            "Tab/↑↓  move   ·   ←→  auth mode   ·   Enter  submit   ·   Esc  quit",
            theme::dim(),
        ))
        .alignment(Alignment::Center),
    );

    let para = Paragraph::new(lines).block(block);
    frame.render_widget(para, box_area);
}

fn input_line(label: &str, value: &str, focused: bool, width: usize) -> Line<'static> {
    let cursor = if focused { "█" } else { "" };
    let shown = truncate_to_width(value, width.saturating_sub(1));
    let value_style = if focused {
        theme::orange().add_modifier(Modifier::BOLD)
    } else {
        theme::bold()
    };
    let label_style = if focused { theme::orange() } else { theme::dim() };

    Line::from(vec![
        Span::styled(format!("  {:<12}", label), label_style),
        Span::styled(format!("{}{}", shown, cursor), value_style),
    ])
}

fn auth_line(form: &LoginForm) -> Line<'static> {
    let focused = form.focus == Field::AuthMode;
    let option = |selected: bool, text: &'static str| {
        if selected {
            vec![
                Span::styled("◉ ", theme::orange()),
                Span::styled(text, theme::orange().add_modifier(Modifier::BOLD)),
            ]
        } else {
            vec![Span::styled("○ ", theme::dim()), Span::styled(text, theme::dim())]
        }
    };

    let label_style = if focused { theme::orange() } else { theme::dim() };
    let mut spans = vec![Span::styled(format!("  {:<12}", "Sign in"), label_style)];
    spans.extend(option(!form.use_login, "ESPN cookies"));
    spans.push(Span::raw("   "));
    spans.extend(option(form.use_login, "ESPN login"));
    Line::from(spans)
}
