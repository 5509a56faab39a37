use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    DefaultTerminal, Frame,
};

use crate::config::AppConfig;
use crate::models::{StatId, StatsBundle};
use crate::session::{SessionController, SessionPhase, StatSource};
use crate::slides::{badges, format, BadgeHover, Intent, PageKind, StatStyle, DECK};
use crate::tui::events::{Event, EventHandler};
use crate::tui::login::{self, FormAction, LoginForm};
use crate::tui::theme;
use crate::tui::widgets::{header, slide, statusbar};

pub struct App {
    pub config: AppConfig,
    pub session: SessionController,
    pub form: LoginForm,
    pub hover: BadgeHover,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig, source: Arc<dyn StatSource>) -> Self {
        let form = LoginForm::new(config.session.default_year);
        App {
            config,
            session: SessionController::new(source),
            form,
            hover: BadgeHover::default(),
            show_help: false,
            should_quit: false,
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if self.session.poll() {
            if let Some(err) = self.session.last_error() {
                self.form.error = Some(err.to_string());
            }
        }
        if self.session.navigation_mut().tick(now) {
            self.hover.clear();
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Some terminals also report release and repeat events.
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.session.phase() {
            SessionPhase::Uninitialized => match self.form.handle_key(key) {
                FormAction::Submit(credentials) => self.session.begin(credentials),
                FormAction::Quit => self.should_quit = true,
                FormAction::None => {}
            },
            SessionPhase::Initializing | SessionPhase::Loading => match key.code {
                KeyCode::Esc => self.session.reset(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            SessionPhase::Ready => self.handle_slide_key(key, now),
        }
    }

    fn handle_slide_key(&mut self, key: KeyEvent, now: Instant) {
        if self.show_help {
            self.show_help = false;
            return;
        }

        if let Some(intent) = slide_intent_for_key(key.code) {
            self.navigate(intent, now);
            return;
        }

        match key.code {
            KeyCode::Up => self.hover.previous(self.badge_count()),
            KeyCode::Down | KeyCode::Tab => self.hover.next(self.badge_count()),
            KeyCode::Esc if self.hover.hovered().is_some() => self.hover.clear(),
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('r') => self.try_another_league(),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, width: u16, now: Instant) {
        if !self.session.is_ready() || self.show_help {
            return;
        }
        if let Some(intent) = slide_intent_for_mouse(&mouse, width) {
            self.navigate(intent, now);
        }
    }

    fn navigate(&mut self, intent: Intent, now: Instant) {
        if !self.session.is_ready() {
            return;
        }
        if self.session.navigation_mut().handle(intent, now) {
            self.hover.clear();
        }
    }

    /// Drops the current league and returns to a blank credentials form.
    pub fn try_another_league(&mut self) {
        self.session.reset();
        self.form.clear();
        self.hover.clear();
        self.show_help = false;
    }

    fn badge_count(&self) -> usize {
        let page = &DECK[self.session.navigation().current_index()];
        match (page.kind, self.session.bundle()) {
            (
                PageKind::Stat {
                    id,
                    style: StatStyle::Badges,
                },
                Some(bundle),
            ) => badges(&format(bundle.get(id))).len(),
            _ => 0,
        }
    }

    pub fn draw(&self, frame: &mut Frame, now: Instant) {
        match self.session.phase() {
            SessionPhase::Uninitialized => login::draw(frame, &self.form, None),
            SessionPhase::Initializing => login::draw(frame, &self.form, Some("Signing in…")),
            SessionPhase::Loading => draw_loading(frame),
            SessionPhase::Ready => {
                let empty = StatsBundle::default();
                let bundle = self.session.bundle().unwrap_or(&empty);
                self.draw_slides(frame, bundle, now);
                if self.show_help {
                    draw_help_overlay(frame);
                }
            }
        }
    }

    fn draw_slides(&self, frame: &mut Frame, bundle: &StatsBundle, now: Instant) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // header
                Constraint::Min(0),    // slide
                Constraint::Length(1), // status bar
            ])
            .split(area);

        let nav = self.session.navigation();
        let index = nav.current_index();
        let page = &DECK[index];
        let progress = nav.transition_progress(now);

        header::render(frame, chunks[0], page, index, nav.page_count(), progress);
        slide::render(
            frame,
            chunks[1],
            page,
            bundle,
            &self.hover,
            progress.is_some(),
        );
        let on_badges = matches!(
            page.kind,
            PageKind::Stat {
                style: StatStyle::Badges,
                ..
            }
        );
        statusbar::render(frame, chunks[2], on_badges);
    }
}

/// Keyboard → navigation intent. Only consulted while a session is ready.
pub fn slide_intent_for_key(code: KeyCode) -> Option<Intent> {
    match code {
        KeyCode::Right | KeyCode::Char(' ') => Some(Intent::Next),
        KeyCode::Left => Some(Intent::Previous),
        _ => None,
    }
}

/// Pointer → navigation intent: click either half of the screen, or scroll.
pub fn slide_intent_for_mouse(mouse: &MouseEvent, width: u16) -> Option<Intent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if mouse.column < width / 2 => {
            Some(Intent::Previous)
        }
        MouseEventKind::Down(MouseButton::Left) => Some(Intent::Next),
        MouseEventKind::ScrollDown => Some(Intent::Next),
        MouseEventKind::ScrollUp => Some(Intent::Previous),
        _ => None,
    }
}

fn draw_loading(frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(Block::default().style(theme::base()), area);

    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "Crunching your season…",
            theme::orange().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Fetching {} stats from your league.", StatId::ALL.len()),
            theme::dim(),
        )),
        Line::from(Span::styled(
            "Box-score stats can take a while.  Esc to cancel.",
            theme::dim(),
        )),
    ];

    let para = Paragraph::new(lines).alignment(Alignment::Center);
    let vchunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Min(0)])
        .split(area);
    frame.render_widget(para, vchunks[1]);
}

fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Center a help box; short terminals get the full height.
    let height = (area.height / 2).max(12).min(area.height);
    let popup_area = Rect {
        x: area.x + area.width / 4,
        y: area.y + (area.height - height) / 2,
        width: area.width / 2,
        height,
    }
    .intersection(area);

    frame.render_widget(Clear, popup_area);

    let bindings = [
        ("  [→] / Space  ", "Next slide"),
        ("  [←]          ", "Previous slide"),
        ("  click        ", "Right half next · left half back"),
        ("  [↑ ↓]        ", "Inspect bonus titles"),
        ("  [r]          ", "Try another league"),
        ("  [?]          ", "Toggle help"),
        ("  [q] / Esc    ", "Quit"),
    ];

    let mut help_text = vec![
        Line::from(Span::styled(
            "  Keybindings",
            theme::orange().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (key, action) in bindings {
        help_text.push(Line::from(vec![
            Span::styled(key, theme::orange()),
            Span::styled(action, theme::dim()),
        ]));
    }

    let block = Block::default()
        .title(Span::styled(" Help ", theme::orange()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::orange())
        .style(theme::surface());

    let paragraph = Paragraph::new(help_text).block(block);
    frame.render_widget(paragraph, popup_area);
}

/// Raw mode plus optional mouse capture, released on drop however the loop exits.
struct TerminalSession {
    terminal: DefaultTerminal,
    mouse: bool,
}

impl TerminalSession {
    fn start(mouse: bool) -> Result<Self> {
        let session = Self {
            terminal: ratatui::init(),
            mouse,
        };
        if mouse {
            crossterm::execute!(std::io::stdout(), EnableMouseCapture)
                .context("enabling mouse capture")?;
        }
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.mouse {
            let _ = crossterm::execute!(std::io::stdout(), DisableMouseCapture);
        }
        ratatui::restore();
    }
}

/// Run the TUI event loop.
pub fn run(config: AppConfig, source: Arc<dyn StatSource>) -> Result<()> {
    let tick_rate_ms = config.ui.tick_rate_ms;
    let mouse = config.ui.mouse;
    let mut app = App::new(config, source);

    let mut term = TerminalSession::start(mouse)?;
    let events = EventHandler::new(tick_rate_ms);

    loop {
        term.terminal.draw(|frame| app.draw(frame, Instant::now()))?;

        match events.next()? {
            Event::Key(key) => app.handle_key(key, Instant::now()),
            Event::Mouse(mouse_event) => {
                let width = term.terminal.size()?.width;
                app.handle_mouse(mouse_event, width, Instant::now());
            }
            Event::Tick => app.tick(Instant::now()),
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuthMethod, Credentials};
    use crate::session::{InitError, StatFetchError};
    use crate::slides::{NavState, SETTLE_DELAY};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::mpsc::{self, Receiver, Sender};
    use std::sync::Mutex;
    use std::thread;
    use std::time::Duration;

    struct CannedSource;

    impl StatSource for CannedSource {
        fn initialize(&self, _credentials: &Credentials) -> Result<(), InitError> {
            Ok(())
        }

        fn fetch(&self, id: StatId) -> Result<String, StatFetchError> {
            match id {
                StatId::BonusTitles => Ok("[\"underdog\", \"toughie\"]".to_string()),
                _ => Ok("\"ok\"".to_string()),
            }
        }
    }

    fn credentials() -> Credentials {
        Credentials {
            league_id: 7,
            year: 2025,
            auth: AuthMethod::Cookies {
                espn_s2: "s2".to_string(),
                swid: "{SWID}".to_string(),
            },
        }
    }

    fn ready_app() -> App {
        let mut app = App::new(AppConfig::default(), Arc::new(CannedSource));
        app.session.initialize(&credentials()).unwrap();
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn keys_map_to_intents() {
        assert_eq!(slide_intent_for_key(KeyCode::Right), Some(Intent::Next));
        assert_eq!(slide_intent_for_key(KeyCode::Char(' ')), Some(Intent::Next));
        assert_eq!(slide_intent_for_key(KeyCode::Left), Some(Intent::Previous));
        assert_eq!(slide_intent_for_key(KeyCode::Up), None);
    }

    #[test]
    fn clicks_map_by_screen_half() {
        let click = |column| MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row: 3,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(slide_intent_for_mouse(&click(10), 100), Some(Intent::Previous));
        assert_eq!(slide_intent_for_mouse(&click(60), 100), Some(Intent::Next));
    }

    #[test]
    fn navigation_keys_ignored_before_session() {
        let mut app = App::new(AppConfig::default(), Arc::new(CannedSource));
        let now = Instant::now();
        app.handle_key(key(KeyCode::Right), now);
        app.tick(now + SETTLE_DELAY);
        assert_eq!(app.session.navigation().current_index(), 0);
        assert!(!app.session.navigation().is_transitioning());
    }

    #[test]
    fn rapid_next_advances_once() {
        let mut app = ready_app();
        let now = Instant::now();
        app.handle_key(key(KeyCode::Right), now);
        app.handle_key(key(KeyCode::Char(' ')), now + Duration::from_millis(40));
        app.tick(now + SETTLE_DELAY + Duration::from_millis(40));
        assert_eq!(app.session.navigation().current_index(), 1);
    }

    #[test]
    fn badge_hover_only_counts_bonus_page() {
        let mut app = ready_app();
        app.handle_key(key(KeyCode::Down), Instant::now());
        assert_eq!(app.hover.hovered(), None);

        let mut now = Instant::now();
        while DECK[app.session.navigation().current_index()].stat() != Some(StatId::BonusTitles) {
            app.handle_key(key(KeyCode::Right), now);
            now += SETTLE_DELAY;
            app.tick(now);
        }
        app.handle_key(key(KeyCode::Down), now);
        assert_eq!(app.hover.hovered(), Some(0));

        app.handle_key(key(KeyCode::Esc), now);
        assert_eq!(app.hover.hovered(), None);
        assert!(!app.should_quit);
    }

    #[test]
    fn reset_returns_to_blank_form() {
        let mut app = ready_app();
        let now = Instant::now();
        app.handle_key(key(KeyCode::Right), now);
        app.tick(now + SETTLE_DELAY);
        app.form.league_id = "7".to_string();

        app.handle_key(key(KeyCode::Char('r')), now + SETTLE_DELAY);
        assert_eq!(app.session.phase(), SessionPhase::Uninitialized);
        assert!(app.session.bundle().is_none());
        assert_eq!(app.session.navigation().current_index(), 0);
        assert!(app.form.league_id.is_empty());
    }

    /// Holds `initialize` and every `fetch` until the matching sender sends or drops.
    struct GatedSource {
        init_gate: Mutex<Receiver<()>>,
        fetch_gate: Mutex<Receiver<()>>,
    }

    impl StatSource for GatedSource {
        fn initialize(&self, _credentials: &Credentials) -> Result<(), InitError> {
            let _ = self.init_gate.lock().unwrap().recv();
            Ok(())
        }

        fn fetch(&self, id: StatId) -> Result<String, StatFetchError> {
            let _ = self.fetch_gate.lock().unwrap().recv();
            CannedSource.fetch(id)
        }
    }

    fn gated_app() -> (App, Sender<()>, Sender<()>) {
        let (init_tx, init_rx) = mpsc::channel();
        let (fetch_tx, fetch_rx) = mpsc::channel();
        let source = GatedSource {
            init_gate: Mutex::new(init_rx),
            fetch_gate: Mutex::new(fetch_rx),
        };
        let app = App::new(AppConfig::default(), Arc::new(source));
        (app, init_tx, fetch_tx)
    }

    fn wait_for_phase(app: &mut App, phase: SessionPhase) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while app.session.phase() != phase && Instant::now() < deadline {
            app.tick(Instant::now());
            thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(app.session.phase(), phase);
    }

    fn press_navigation_keys(app: &mut App) {
        let now = Instant::now();
        app.handle_key(key(KeyCode::Right), now);
        app.handle_key(key(KeyCode::Char(' ')), now);
        app.tick(now + SETTLE_DELAY);
        assert_eq!(app.session.navigation().raw_state(), NavState::Idle(0));
    }

    #[test]
    fn navigation_keys_ignored_while_loading() {
        let (mut app, init_tx, fetch_tx) = gated_app();
        app.session.begin(credentials());
        assert_eq!(app.session.phase(), SessionPhase::Initializing);
        press_navigation_keys(&mut app);

        init_tx.send(()).unwrap();
        wait_for_phase(&mut app, SessionPhase::Loading);
        press_navigation_keys(&mut app);

        drop(fetch_tx);
        wait_for_phase(&mut app, SessionPhase::Ready);
        assert_eq!(app.session.navigation().raw_state(), NavState::Idle(0));
    }

    #[test]
    fn help_overlay_fits_short_terminals() {
        let mut app = ready_app();
        app.show_help = true;
        for (width, height) in [(60, 8), (60, 11), (60, 12), (60, 13), (60, 14), (60, 40), (3, 3)] {
            let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
            terminal
                .draw(|frame| app.draw(frame, Instant::now()))
                .unwrap();
        }
    }
}
