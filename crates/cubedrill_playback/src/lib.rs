//! Playback of a move sequence on an animated cube.
//!
//! The controller puts the cube into the state that the sequence solves,
//! then plays, steps, pauses, resets, and loops the sequence. It is driven by
//! calling [`PlaybackController::update()`] once per frame.

use std::time::Duration;

use cubedrill_core::{CubeSimulation, Lattice, TwistProgress, TwistRequest};
use cubedrill_notation::{parse_notation, setup_sequence};
use cubedrill_prefs::{AnimationPreferences, DEFAULT_PREFS, duration_from_secs};


/// Timing of playback.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PlaybackTiming {
    /// Duration of each twist while playing.
    pub twist_duration: Duration,
    /// Duration of a twist performed by [`PlaybackController::step()`].
    pub step_twist_duration: Duration,
    /// Pause after each twist while playing.
    pub settle_delay: Duration,
    /// Pause after the setup is reapplied at the end of the sequence.
    pub loop_pause: Duration,
}
impl Default for PlaybackTiming {
    fn default() -> Self {
        Self::from(&DEFAULT_PREFS.animation)
    }
}
impl From<&AnimationPreferences> for PlaybackTiming {
    fn from(prefs: &AnimationPreferences) -> Self {
        Self {
            twist_duration: duration_from_secs(prefs.twist_duration),
            step_twist_duration: duration_from_secs(prefs.step_twist_duration),
            settle_delay: duration_from_secs(prefs.settle_delay),
            loop_pause: duration_from_secs(prefs.loop_pause),
        }
    }
}

/// Something that happened during playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// The cube was put into the setup state.
    SetupApplied,
    /// The move at `index` started animating.
    TwistStarted {
        /// Index of the move in the sequence.
        index: usize,
        /// Move token.
        token: String,
    },
    /// The move at `index` finished and is now the current move.
    TwistCompleted {
        /// Index of the move in the sequence.
        index: usize,
    },
    /// The end of the sequence was reached while playing, so playback is
    /// starting over from the setup state.
    LoopRestarted,
}

/// Snapshot of the playback state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackState {
    /// Index of the last completed move, or `None` if the cube is in the
    /// setup state.
    pub index: Option<usize>,
    /// Whether the sequence is playing.
    pub running: bool,
    /// Index of the move currently animating, if any.
    pub animating_index: Option<usize>,
    /// Moves that solve the setup state.
    pub moves: Vec<String>,
    /// Moves that produce the setup state from a solved cube.
    pub setup: Vec<String>,
}

/// Controller for playing a move sequence.
#[derive(Debug, Clone)]
pub struct PlaybackController {
    sim: CubeSimulation,
    timing: PlaybackTiming,

    moves: Vec<String>,
    setup: Vec<String>,

    index: Option<usize>,
    running: bool,
    animating_index: Option<usize>,
    /// Time remaining before the next move may start.
    wait: Option<Duration>,
    /// Whether to reapply the setup once the twist in flight completes.
    pending_reset: bool,

    events: Vec<PlaybackEvent>,
}
impl Default for PlaybackController {
    fn default() -> Self {
        Self::new(PlaybackTiming::default())
    }
}
impl PlaybackController {
    /// Constructs a controller with an empty sequence and a solved cube.
    pub fn new(timing: PlaybackTiming) -> Self {
        Self {
            sim: CubeSimulation::new(),
            timing,

            moves: vec![],
            setup: vec![],

            index: None,
            running: false,
            animating_index: None,
            wait: None,
            pending_reset: false,

            events: vec![],
        }
    }

    /// Returns the cube, including any twist in flight.
    pub fn simulation(&self) -> &CubeSimulation {
        &self.sim
    }
    /// Returns the at-rest state of the cube.
    pub fn lattice(&self) -> &Lattice {
        self.sim.lattice()
    }
    /// Returns the playback timing.
    pub fn timing(&self) -> PlaybackTiming {
        self.timing
    }
    /// Sets the playback timing. Takes effect from the next twist or pause.
    pub fn set_timing(&mut self, timing: PlaybackTiming) {
        self.timing = timing;
    }
    /// Returns whether the sequence is playing.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns a snapshot of the playback state.
    pub fn state(&self) -> PlaybackState {
        PlaybackState {
            index: self.index,
            running: self.running,
            animating_index: self.animating_index,
            moves: self.moves.clone(),
            setup: self.setup.clone(),
        }
    }

    /// Loads a sequence from notation and puts the cube into its setup
    /// state. Any twist in flight is discarded.
    pub fn load(&mut self, notation: &str) {
        self.load_moves(parse_notation(notation));
    }
    /// Loads a sequence of move tokens and puts the cube into its setup
    /// state. Any twist in flight is discarded.
    pub fn load_moves(&mut self, moves: Vec<String>) {
        log::debug!("loading {} moves", moves.len());
        self.setup = setup_sequence(&moves);
        self.moves = moves;

        self.running = false;
        self.animating_index = None;
        self.wait = None;
        self.pending_reset = false;
        self.apply_setup();
    }

    /// Starts playing from the move after the current one. If the current
    /// move is the last one, playback starts over from the setup state.
    pub fn play(&mut self) {
        if self.moves.is_empty() || self.running {
            return;
        }
        log::debug!("playing from move {}", self.next_index());
        self.running = true;
    }

    /// Stops playing once the twist in flight (if any) completes.
    pub fn pause(&mut self) {
        if self.running {
            log::debug!("pausing");
        }
        self.running = false;
        self.wait = None;
    }

    /// Animates the next move, whether or not the sequence is playing.
    /// Returns `false` if a twist is already in flight or there is no next
    /// move.
    pub fn step(&mut self) -> bool {
        let next = self.next_index();
        if self.sim.is_animating() || next >= self.moves.len() {
            return false;
        }
        self.wait = None;
        self.start_move(next, self.timing.step_twist_duration);
        true
    }

    /// Stops playing and returns the cube to the setup state. If a twist is in
    /// flight, this happens once it completes.
    pub fn reset(&mut self) {
        log::debug!("resetting");
        self.running = false;
        self.wait = None;
        if self.sim.is_animating() {
            self.pending_reset = true;
        } else {
            self.apply_setup();
        }
    }

    /// Advances playback by `delta` and returns what happened since the last
    /// update.
    pub fn update(&mut self, delta: Duration) -> Vec<PlaybackEvent> {
        if self.sim.is_animating() {
            if let TwistProgress::Completed(_) = self.sim.step(delta)
                && let Some(index) = self.animating_index.take()
            {
                self.finish_move(index);
            }
        } else if let Some(remaining) = self.wait.take() {
            let remaining = remaining.saturating_sub(delta);
            if !remaining.is_zero() {
                self.wait = Some(remaining);
            } else if self.running {
                self.advance();
            }
        } else if self.running {
            self.advance();
        }

        std::mem::take(&mut self.events)
    }

    fn next_index(&self) -> usize {
        self.index.map_or(0, |i| i + 1)
    }

    /// Starts the next move, or starts over if the sequence is done.
    fn advance(&mut self) {
        let next = self.next_index();
        if next < self.moves.len() {
            self.start_move(next, self.timing.twist_duration);
        } else {
            log::debug!("restarting sequence");
            self.apply_setup();
            self.events.push(PlaybackEvent::LoopRestarted);
            self.wait = Some(self.timing.loop_pause);
        }
    }

    fn start_move(&mut self, index: usize, duration: Duration) {
        let token = &self.moves[index];
        match self.sim.start_twist(token, duration) {
            TwistRequest::Started => {
                self.animating_index = Some(index);
                self.events.push(PlaybackEvent::TwistStarted {
                    index,
                    token: token.clone(),
                });
            }
            // Nothing to animate, so the move is done already.
            TwistRequest::NoOp => self.finish_move(index),
            TwistRequest::Rejected => {
                log::warn!("twist {token:?} rejected during playback");
            }
        }
    }

    fn finish_move(&mut self, index: usize) {
        self.index = Some(index);
        self.events.push(PlaybackEvent::TwistCompleted { index });

        if std::mem::take(&mut self.pending_reset) {
            self.apply_setup();
        } else if self.running {
            self.wait = Some(self.timing.settle_delay);
        }
    }

    fn apply_setup(&mut self) {
        self.sim.jump_to(&self.setup);
        self.index = None;
        self.events.push(PlaybackEvent::SetupApplied);
    }
}
