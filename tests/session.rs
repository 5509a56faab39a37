use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use fantasy_wrapped::models::{AuthMethod, Credentials, RawStat, StatId};
use fantasy_wrapped::session::{
    fetch_all, load_bundle, InitError, SessionController, SessionPhase, StatFetchError, StatSource,
};
use fantasy_wrapped::slides::{recap_lines, Intent, NavState, DECK, PAGE_COUNT, SETTLE_DELAY};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

/// Serves the fixture league, optionally failing initialize or single stats.
struct FixtureSource {
    stats: HashMap<StatId, String>,
    failing: Vec<StatId>,
    reject: Option<InitError>,
}

impl FixtureSource {
    fn new() -> Self {
        let raw: HashMap<String, String> = serde_json::from_str(&read_fixture("league_stats.json"))
            .expect("fixture should parse");
        let stats = raw
            .into_iter()
            .map(|(name, body)| (name.parse().expect("known stat name"), body))
            .collect();
        Self {
            stats,
            failing: Vec::new(),
            reject: None,
        }
    }

    fn failing(mut self, id: StatId) -> Self {
        self.failing.push(id);
        self
    }

    fn rejecting(mut self, err: InitError) -> Self {
        self.reject = Some(err);
        self
    }
}

impl StatSource for FixtureSource {
    fn initialize(&self, _credentials: &Credentials) -> Result<(), InitError> {
        match &self.reject {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn fetch(&self, id: StatId) -> Result<String, StatFetchError> {
        if self.failing.contains(&id) {
            return Err(StatFetchError::Status {
                endpoint: id.endpoint().to_string(),
                status: 500,
            });
        }
        self.stats.get(&id).cloned().ok_or(StatFetchError::Status {
            endpoint: id.endpoint().to_string(),
            status: 404,
        })
    }
}

fn cookies() -> Credentials {
    Credentials {
        league_id: 1234,
        year: 2025,
        auth: AuthMethod::Cookies {
            espn_s2: "AEB...s2".to_string(),
            swid: "{0000-AAAA}".to_string(),
        },
    }
}

fn wait_for_ready(session: &mut SessionController) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while session.phase() != SessionPhase::Ready && Instant::now() < deadline {
        session.poll();
        if session.phase() == SessionPhase::Uninitialized {
            break;
        }
        thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn one_failed_stat_does_not_sink_the_deck() {
    let source = FixtureSource::new().failing(StatId::Bust);
    let bundle = load_bundle(&source, &cookies()).expect("load should succeed");

    assert_eq!(bundle.len(), StatId::ALL.len());
    assert_eq!(bundle.failed_count(), 1);
    assert_eq!(bundle.get(StatId::Bust), &RawStat::Failed);
    assert!(StatId::ALL
        .iter()
        .filter(|&&id| id != StatId::Bust)
        .all(|&id| bundle.get(id).is_ready()));
    assert_eq!(DECK.len(), PAGE_COUNT);
    assert_eq!(recap_lines(&bundle).len(), StatId::ALL.len());
}

#[test]
fn fetch_all_settles_every_stat() {
    let source = FixtureSource::new();
    let bundle = fetch_all(&source);
    assert_eq!(bundle.len(), StatId::ALL.len());
    assert_eq!(bundle.failed_count(), 0);
}

#[test]
fn rejected_initialize_surfaces_server_detail() {
    let source = Arc::new(FixtureSource::new().rejecting(InitError::Rejected {
        status: 401,
        detail: "League is private. Check your cookies.".to_string(),
    }));
    let mut session = SessionController::new(source);

    let err = session.initialize(&cookies()).expect_err("should be rejected");
    assert_eq!(err.to_string(), "League is private. Check your cookies.");
    assert_eq!(session.phase(), SessionPhase::Uninitialized);
    assert!(session.bundle().is_none());
    assert!(session.last_error().is_some());
}

#[test]
fn incomplete_credentials_never_reach_the_server() {
    let source = Arc::new(FixtureSource::new());
    let mut session = SessionController::new(source);
    let mut creds = cookies();
    creds.auth = AuthMethod::Login {
        username: "me@example.com".to_string(),
        password: String::new(),
    };
    let err = session.initialize(&creds).expect_err("blank password");
    assert!(matches!(err, InitError::InvalidCredentials(_)));
}

#[test]
fn background_session_reaches_ready() {
    let mut session = SessionController::new(Arc::new(FixtureSource::new()));
    session.begin(cookies());
    assert_eq!(session.phase(), SessionPhase::Initializing);

    wait_for_ready(&mut session);
    assert_eq!(session.phase(), SessionPhase::Ready);
    assert_eq!(session.bundle().map(|b| b.len()), Some(StatId::ALL.len()));
    assert_eq!(session.navigation().raw_state(), NavState::Idle(0));
}

#[test]
fn background_rejection_returns_to_uninitialized() {
    let source = FixtureSource::new().rejecting(InitError::Rejected {
        status: 400,
        detail: "Invalid league id".to_string(),
    });
    let mut session = SessionController::new(Arc::new(source));
    session.begin(cookies());
    wait_for_ready(&mut session);

    assert_eq!(session.phase(), SessionPhase::Uninitialized);
    assert_eq!(
        session.last_error().map(|e| e.to_string()),
        Some("Invalid league id".to_string())
    );
}

#[test]
fn reset_rewinds_to_first_slide() {
    let mut session = SessionController::new(Arc::new(FixtureSource::new()));
    session.initialize(&cookies()).expect("load should succeed");

    let mut now = Instant::now();
    for _ in 0..3 {
        session.navigation_mut().handle(Intent::Next, now);
        now += SETTLE_DELAY;
        session.navigation_mut().tick(now);
    }
    assert_eq!(session.navigation().current_index(), 3);

    session.reset();
    assert_eq!(session.phase(), SessionPhase::Uninitialized);
    assert!(session.bundle().is_none());
    assert_eq!(session.navigation().raw_state(), NavState::Idle(0));
}

/// Records every backend call; initialize for `held_league` waits on a gate.
struct RecordingSource {
    calls: Mutex<Vec<String>>,
    held_league: i64,
    gate: Mutex<Receiver<()>>,
}

impl StatSource for RecordingSource {
    fn initialize(&self, credentials: &Credentials) -> Result<(), InitError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("init {}", credentials.league_id));
        if credentials.league_id == self.held_league {
            let _ = self.gate.lock().unwrap().recv();
        }
        Ok(())
    }

    fn fetch(&self, id: StatId) -> Result<String, StatFetchError> {
        self.calls.lock().unwrap().push("fetch".to_string());
        Ok(format!("\"{}\"", id))
    }
}

#[test]
fn abandoned_session_never_fetches_after_a_newer_initialize() {
    let (release, gate) = mpsc::channel();
    let source = Arc::new(RecordingSource {
        calls: Mutex::new(Vec::new()),
        held_league: 1,
        gate: Mutex::new(gate),
    });
    let mut session = SessionController::new(source.clone());

    let mut first = cookies();
    first.league_id = 1;
    session.begin(first);

    let deadline = Instant::now() + Duration::from_secs(5);
    while source.calls.lock().unwrap().is_empty() && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(5));
    }

    // Esc, then submit another league while the first POST is still out.
    session.reset();
    let mut second = cookies();
    second.league_id = 2;
    session.begin(second);
    release.send(()).unwrap();

    wait_for_ready(&mut session);
    assert_eq!(session.phase(), SessionPhase::Ready);

    let calls = source.calls.lock().unwrap().clone();
    assert_eq!(calls[0], "init 1");
    assert_eq!(calls[1], "init 2");
    assert_eq!(calls.len(), 2 + StatId::ALL.len());
    assert!(calls[2..].iter().all(|c| c == "fetch"));
}

#[test]
fn initialize_returns_the_published_bundle() {
    let mut session = SessionController::new(Arc::new(FixtureSource::new().failing(StatId::Sleeper)));
    let returned = session.initialize(&cookies()).expect("load should succeed").clone();
    assert_eq!(returned.len(), StatId::ALL.len());
    assert_eq!(returned.get(StatId::Sleeper), &RawStat::Failed);
    assert_eq!(session.bundle(), Some(&returned));
}
