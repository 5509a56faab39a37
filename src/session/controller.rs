use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;

use rayon::prelude::*;

use crate::models::{Credentials, RawStat, StatId, StatsBundle};
use crate::session::error::InitError;
use crate::session::source::StatSource;
use crate::slides::NavigationController;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Uninitialized,
    Initializing,
    Loading,
    Ready,
}

#[derive(Debug)]
enum SessionEvent {
    Initialized,
    Loaded(StatsBundle),
    Failed(InitError),
}

/// Owns the fetched bundle and the slide navigation for one league at a time.
///
/// The backend keeps a single active league, so only one initialize-then-fetch run
/// talks to it at a time. A worker abandoned by [`reset`] finishes its in-flight
/// request while holding `backend`, then sees `generation` has moved on and exits
/// without fetching. The next run waits for it and re-initializes afterwards.
///
/// [`reset`]: SessionController::reset
pub struct SessionController {
    source: Arc<dyn StatSource>,
    phase: SessionPhase,
    bundle: Option<StatsBundle>,
    last_error: Option<InitError>,
    navigation: NavigationController,
    inflight: Option<Receiver<SessionEvent>>,
    generation: Arc<AtomicU64>,
    backend: Arc<Mutex<()>>,
}

impl SessionController {
    pub fn new(source: Arc<dyn StatSource>) -> Self {
        Self {
            source,
            phase: SessionPhase::Uninitialized,
            bundle: None,
            last_error: None,
            navigation: NavigationController::default(),
            inflight: None,
            generation: Arc::new(AtomicU64::new(0)),
            backend: Arc::new(Mutex::new(())),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == SessionPhase::Ready
    }

    pub fn bundle(&self) -> Option<&StatsBundle> {
        self.bundle.as_ref()
    }

    pub fn last_error(&self) -> Option<&InitError> {
        self.last_error.as_ref()
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    pub fn navigation_mut(&mut self) -> &mut NavigationController {
        &mut self.navigation
    }

    /// Initializes and loads every stat on the calling thread.
    pub fn initialize(&mut self, credentials: &Credentials) -> Result<&StatsBundle, InitError> {
        self.reset();
        self.phase = SessionPhase::Initializing;
        let loaded = {
            let _backend = lock_backend(&self.backend);
            load_bundle(self.source.as_ref(), credentials)
        };
        match loaded {
            Ok(bundle) => Ok(self.publish(bundle)),
            Err(err) => {
                self.fail(err.clone());
                Err(err)
            }
        }
    }

    /// Starts initialization on a worker thread; progress arrives through [`poll`].
    ///
    /// [`poll`]: SessionController::poll
    pub fn begin(&mut self, credentials: Credentials) {
        self.reset();
        self.phase = SessionPhase::Initializing;

        let (tx, rx) = mpsc::channel();
        let source = Arc::clone(&self.source);
        let backend = Arc::clone(&self.backend);
        let generation = Arc::clone(&self.generation);
        let run = generation.load(Ordering::SeqCst);
        self.inflight = Some(rx);

        thread::spawn(move || {
            let _backend = lock_backend(&backend);
            let current = || generation.load(Ordering::SeqCst) == run;
            if !current() {
                return;
            }
            if let Err(err) = validate(&credentials).and_then(|_| source.initialize(&credentials))
            {
                let _ = tx.send(SessionEvent::Failed(err));
                return;
            }
            if !current() || tx.send(SessionEvent::Initialized).is_err() {
                log::debug!("dropping superseded session for league {}", credentials.league_id);
                return;
            }
            let _ = tx.send(SessionEvent::Loaded(fetch_all(source.as_ref())));
        });
    }

    /// Drains worker progress. Returns true if the phase changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        loop {
            let Some(rx) = self.inflight.as_ref() else {
                return changed;
            };
            match rx.try_recv() {
                Ok(SessionEvent::Initialized) => {
                    self.phase = SessionPhase::Loading;
                    changed = true;
                }
                Ok(SessionEvent::Loaded(bundle)) => {
                    self.inflight = None;
                    self.publish(bundle);
                    return true;
                }
                Ok(SessionEvent::Failed(err)) => {
                    self.inflight = None;
                    self.fail(err);
                    return true;
                }
                Err(TryRecvError::Empty) => return changed,
                Err(TryRecvError::Disconnected) => {
                    self.inflight = None;
                    self.fail(InitError::Request("stats worker stopped unexpectedly".to_string()));
                    return true;
                }
            }
        }
    }

    /// Drops the bundle and any in-flight work, and rewinds to the first slide.
    pub fn reset(&mut self) {
        if self.bundle.is_some() {
            log::info!("resetting session");
        }
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.inflight = None;
        self.bundle = None;
        self.last_error = None;
        self.phase = SessionPhase::Uninitialized;
        self.navigation.reset();
    }

    fn publish(&mut self, bundle: StatsBundle) -> &StatsBundle {
        log::info!(
            "session ready: {} stats, {} failed",
            bundle.len(),
            bundle.failed_count()
        );
        self.last_error = None;
        self.navigation.reset();
        self.phase = SessionPhase::Ready;
        self.bundle.insert(bundle)
    }

    fn fail(&mut self, err: InitError) {
        log::warn!("initialization failed: {}", err);
        self.bundle = None;
        self.last_error = Some(err);
        self.phase = SessionPhase::Uninitialized;
    }
}

fn lock_backend(backend: &Mutex<()>) -> MutexGuard<'_, ()> {
    // Guards no data; a poisoned lock is still usable.
    backend.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn validate(credentials: &Credentials) -> Result<(), InitError> {
    if credentials.is_complete() {
        Ok(())
    } else {
        Err(InitError::InvalidCredentials(format!(
            "Fill in every {} field before continuing.",
            credentials.auth.label()
        )))
    }
}

/// Posts credentials, then fetches every stat. Individual stat failures become
/// [`RawStat::Failed`] entries; only the initialize call can fail the whole load.
pub fn load_bundle(source: &dyn StatSource, credentials: &Credentials) -> Result<StatsBundle, InitError> {
    validate(credentials)?;
    source.initialize(credentials)?;
    log::info!(
        "initialized league {} ({}), fetching {} stats",
        credentials.league_id,
        credentials.year,
        StatId::ALL.len()
    );
    Ok(fetch_all(source))
}

/// Fetches all stats concurrently and waits for every one to settle.
pub fn fetch_all(source: &dyn StatSource) -> StatsBundle {
    let pool = build_fetch_pool();
    let results: Vec<(StatId, RawStat)> = with_fetch_pool(&pool, || {
        StatId::ALL
            .par_iter()
            .map(|&id| match source.fetch(id) {
                Ok(text) => (id, RawStat::Ready(text)),
                Err(err) => {
                    log::warn!("{} unavailable: {}", id, err);
                    (id, RawStat::Failed)
                }
            })
            .collect()
    });
    StatsBundle::from_results(results)
}

fn build_fetch_pool() -> Option<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(StatId::ALL.len())
        .build()
        .ok()
}

fn with_fetch_pool<T>(pool: &Option<rayon::ThreadPool>, action: impl FnOnce() -> T + Send) -> T
where
    T: Send,
{
    if let Some(pool) = pool.as_ref() {
        pool.install(action)
    } else {
        action()
    }
}
