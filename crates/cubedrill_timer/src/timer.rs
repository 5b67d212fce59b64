//! Input state machine for a stackmat-style timer.
//!
//! Hold the start key until the timer is ready, release it to start, and
//! press any key to stop.

use std::time::Duration;

use cubedrill_prefs::{TimerPreferences, duration_from_secs};
use strum::Display;
use web_time::Instant;

use crate::{Scramble, Solve};

/// State of the timer.
#[derive(Display, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TimerState {
    /// Waiting for the start key.
    Idle,
    /// Start key is held, but not for long enough yet.
    Holding,
    /// Start key has been held long enough; releasing it starts the timer.
    Ready,
    /// Timing a solve.
    Running,
}

/// Key that the timer responds to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TimerKey {
    /// Key that starts the timer (the space bar).
    Start,
    /// Any other key. Only stops the timer.
    Other,
}

/// Speed-solving timer.
#[derive(Debug, Clone)]
pub struct SpeedTimer {
    state: TimerState,
    hold_duration: Duration,
    scramble_length: usize,
    scramble: Scramble,

    /// When the start key was pressed, while holding.
    hold_start: Option<Instant>,
    /// When the timer started, while running.
    start: Option<Instant>,
    /// Time shown when not running.
    last_time: Duration,
}
impl SpeedTimer {
    /// Constructs an idle timer with a new scramble.
    pub fn new(prefs: &TimerPreferences) -> Self {
        Self {
            state: TimerState::Idle,
            hold_duration: duration_from_secs(prefs.hold_duration),
            scramble_length: prefs.scramble_length,
            scramble: Scramble::new(prefs.scramble_length),

            hold_start: None,
            start: None,
            last_time: Duration::ZERO,
        }
    }

    /// Returns the state of the timer.
    pub fn state(&self) -> TimerState {
        self.state
    }
    /// Returns how long the start key must be held before the timer is ready.
    pub fn hold_duration(&self) -> Duration {
        self.hold_duration
    }
    /// Returns the scramble for the next solve.
    pub fn scramble(&self) -> &Scramble {
        &self.scramble
    }
    /// Replaces the scramble for the next solve.
    pub fn new_scramble(&mut self) {
        self.scramble = Scramble::new(self.scramble_length);
    }

    /// Returns the time to display: the running time while running, the last
    /// solve time when idle, and zero while holding.
    pub fn display_time(&self, now: Instant) -> Duration {
        match (self.state, self.start) {
            (TimerState::Running, Some(start)) => now.saturating_duration_since(start),
            _ => self.last_time,
        }
    }

    /// Promotes the timer from holding to ready once the start key has been
    /// held long enough.
    pub fn tick(&mut self, now: Instant) {
        if self.state == TimerState::Holding
            && let Some(hold_start) = self.hold_start
            && now.saturating_duration_since(hold_start) >= self.hold_duration
        {
            log::trace!("timer ready");
            self.state = TimerState::Ready;
        }
    }

    /// Handles a key press. Returns the completed solve if this stopped the
    /// timer.
    pub fn key_down(&mut self, key: TimerKey, now: Instant) -> Option<Solve> {
        self.tick(now);
        match (self.state, key) {
            (TimerState::Running, _) => Some(self.stop(now)),
            (TimerState::Idle, TimerKey::Start) => {
                self.state = TimerState::Holding;
                self.hold_start = Some(now);
                self.last_time = Duration::ZERO;
                None
            }
            _ => None,
        }
    }

    /// Handles a key release.
    pub fn key_up(&mut self, key: TimerKey, now: Instant) {
        if key != TimerKey::Start {
            return;
        }
        self.tick(now);
        match self.state {
            TimerState::Ready => {
                log::trace!("timer started");
                self.state = TimerState::Running;
                self.start = Some(now);
            }
            TimerState::Holding => {
                log::trace!("start key released too early");
                self.state = TimerState::Idle;
            }
            TimerState::Idle | TimerState::Running => (),
        }
        self.hold_start = None;
    }

    fn stop(&mut self, now: Instant) -> Solve {
        let time = self.display_time(now);
        self.state = TimerState::Idle;
        self.start = None;
        self.last_time = time;

        let solve = Solve::new(time, self.scramble.to_string());
        self.new_scramble();
        solve
    }
}
