//! Slide navigation state machine.
//!
//! ```text
//!   Idle(i) --Next [i < last]--> Transitioning(i, i+1) --settle--> Idle(i+1)
//!   Idle(i) --Prev [i > 0]-----> Transitioning(i, i-1) --settle--> Idle(i-1)
//!   any     --Reset------------> Idle(0)
//! ```
//!
//! Intents that arrive while a transition is in flight are dropped, which makes
//! the settle window a debounce: rapid input can never skip a page. Time is passed
//! in explicitly so callers (the UI tick, tests) decide what "now" is.

use std::time::{Duration, Instant};

use crate::slides::deck::PAGE_COUNT;

pub const SETTLE_DELAY: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Next,
    Previous,
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Idle(usize),
    Transitioning {
        from: usize,
        to: usize,
        started: Instant,
    },
}

/// Snapshot of the navigation state as the renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub current_index: usize,
    pub transitioning: bool,
}

#[derive(Debug, Clone)]
pub struct NavigationController {
    state: NavState,
    page_count: usize,
    settle: Duration,
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new(PAGE_COUNT)
    }
}

impl NavigationController {
    pub fn new(page_count: usize) -> Self {
        Self {
            state: NavState::Idle(0),
            page_count: page_count.max(1),
            settle: SETTLE_DELAY,
        }
    }

    pub fn raw_state(&self) -> NavState {
        self.state
    }

    pub fn state(&self) -> NavigationState {
        NavigationState {
            current_index: self.current_index(),
            transitioning: self.is_transitioning(),
        }
    }

    /// The committed slide. During a transition this is still the origin.
    pub fn current_index(&self) -> usize {
        match self.state {
            NavState::Idle(index) => index,
            NavState::Transitioning { from, .. } => from,
        }
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.state, NavState::Transitioning { .. })
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Fraction of the settle window elapsed, while a transition is in flight.
    pub fn transition_progress(&self, now: Instant) -> Option<f64> {
        match self.state {
            NavState::Idle(_) => None,
            NavState::Transitioning { started, .. } => {
                let elapsed = now.saturating_duration_since(started).as_secs_f64();
                Some((elapsed / self.settle.as_secs_f64()).min(1.0))
            }
        }
    }

    /// Commits a transition whose settle window has passed. Returns true on commit.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let NavState::Transitioning { to, started, .. } = self.state {
            if now.saturating_duration_since(started) >= self.settle {
                self.state = NavState::Idle(to);
                return true;
            }
        }
        false
    }

    /// Applies an intent. Returns true when it was honored.
    pub fn handle(&mut self, intent: Intent, now: Instant) -> bool {
        if intent == Intent::Reset {
            self.reset();
            return true;
        }

        // A timer tick may not have run yet; settle first so state is current.
        self.tick(now);

        let NavState::Idle(index) = self.state else {
            log::trace!("dropping {:?} during transition", intent);
            return false;
        };

        let target = match intent {
            Intent::Next if index + 1 < self.page_count => index + 1,
            Intent::Previous if index > 0 => index - 1,
            _ => return false,
        };

        self.state = NavState::Transitioning {
            from: index,
            to: target,
            started: now,
        };
        true
    }

    pub fn reset(&mut self) {
        self.state = NavState::Idle(0);
    }
}
