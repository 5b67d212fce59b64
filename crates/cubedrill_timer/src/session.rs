//! Recorded solves and their statistics.

use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// String shown in place of a time that is unavailable.
pub const NO_TIME: &str = "-.--";

/// Error produced when loading or saving a session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization error
    #[error("invalid session file: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// Single timed solve.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Solve {
    /// Solve time in milliseconds.
    pub time_ms: u64,
    /// Scramble that was solved.
    pub scramble: String,
    /// When the solve was completed.
    pub timestamp: DateTime<Utc>,
}
impl Solve {
    /// Constructs a solve completed now.
    pub fn new(time: Duration, scramble: String) -> Self {
        Self {
            time_ms: time.as_millis().try_into().unwrap_or(u64::MAX),
            scramble,
            timestamp: Utc::now(),
        }
    }

    /// Returns the solve time.
    pub fn time(&self) -> Duration {
        Duration::from_millis(self.time_ms)
    }
}

/// List of solves, newest first.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Session {
    solves: Vec<Solve>,
}
impl Session {
    /// Constructs an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a session from a file. A missing file is an empty session.
    pub fn load(path: &Path) -> Result<Self, SessionError> {
        match std::fs::read_to_string(path) {
            Ok(s) => Ok(serde_norway::from_str(&s)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::new()),
            Err(e) => Err(e.into()),
        }
    }
    /// Saves a session to a file, creating its directory if needed.
    pub fn save(&self, path: &Path) -> Result<(), SessionError> {
        if let Some(p) = path.parent() {
            std::fs::create_dir_all(p)?;
        }
        serde_norway::to_writer(std::fs::File::create(path)?, self)?;
        log::info!("saved {} solves to {}", self.len(), path.display());
        Ok(())
    }

    /// Returns all solves, newest first.
    pub fn solves(&self) -> &[Solve] {
        &self.solves
    }
    /// Returns the number of solves.
    pub fn len(&self) -> usize {
        self.solves.len()
    }
    /// Returns whether there are no solves.
    pub fn is_empty(&self) -> bool {
        self.solves.is_empty()
    }
    /// Adds a solve as the newest one.
    pub fn push(&mut self, solve: Solve) {
        self.solves.insert(0, solve);
    }
    /// Removes all solves.
    pub fn clear(&mut self) {
        self.solves.clear();
    }

    /// Returns the fastest solve time.
    pub fn best(&self) -> Option<Duration> {
        self.solves.iter().map(Solve::time).min()
    }

    /// Returns the average of the `n` most recent solves, excluding the single
    /// best and worst of them.
    ///
    /// Returns `None` if there are fewer than `n` solves, or if `n` is less
    /// than 3 (which would leave nothing to average).
    pub fn average_of(&self, n: usize) -> Option<Duration> {
        if n < 3 || self.solves.len() < n {
            return None;
        }
        let mut times = self.solves[..n].iter().map(|s| s.time_ms).collect::<Vec<_>>();
        times.sort_unstable();
        let trimmed = &times[1..n - 1];
        let total_ms: u64 = trimmed.iter().sum();
        Some(Duration::from_secs_f64(
            total_ms as f64 / trimmed.len() as f64 / 1000.0,
        ))
    }
}

/// Formats a time as seconds with two decimal places, or [`NO_TIME`] if
/// there is no time.
pub fn format_time(time: Option<Duration>) -> String {
    match time {
        Some(t) => format!("{:.2}", t.as_secs_f64()),
        None => NO_TIME.to_owned(),
    }
}
