//! User preferences.
//!
//! Preferences are layered from the built-in defaults, the user preferences
//! file, and environment variables prefixed with `CUBEDRILL_` (for example,
//! `CUBEDRILL_ANIMATION__TWIST_DURATION=0.5`).

#[macro_use]
extern crate lazy_static;

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub mod paths;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");
const ENV_PREFIX: &str = "CUBEDRILL";

/// Shortest duration that any timing preference is allowed to have.
pub const MIN_DURATION: Duration = Duration::from_millis(1);

lazy_static! {
    /// Built-in default preferences.
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

/// All user preferences.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Preferences {
    /// Algorithm playback.
    pub animation: AnimationPreferences,
    /// Speed timer.
    pub timer: TimerPreferences,
}
impl Default for Preferences {
    fn default() -> Self {
        DEFAULT_PREFS.clone()
    }
}
impl Preferences {
    /// Loads preferences from the defaults, the user preferences file, and
    /// the environment. If loading fails, then the user preferences file is
    /// backed up (if possible) and the default preferences are returned.
    pub fn load() -> Self {
        let mut config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));

        match paths::prefs_file() {
            Ok(path) => {
                config = config.add_source(config::File::from(path).required(false));
            }
            Err(e) => log::warn!("error locating user preferences: {e}"),
        }

        config = config.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        config
            .build()
            .and_then(|c| c.try_deserialize::<Preferences>())
            .unwrap_or_else(|e| {
                log::warn!("error loading preferences: {e}");
                if let Ok(path) = paths::prefs_file() {
                    paths::move_to_backup_file(path);
                }
                Preferences::default()
            })
    }
}

/// Timing of algorithm playback. All durations are in seconds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnimationPreferences {
    /// Duration of each twist while playing.
    pub twist_duration: f32,
    /// Duration of a twist performed by stepping manually.
    pub step_twist_duration: f32,
    /// Pause after each twist while playing.
    pub settle_delay: f32,
    /// Pause before the sequence restarts from the beginning.
    pub loop_pause: f32,
}

/// Speed timer settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TimerPreferences {
    /// How long the start key must be held before the timer is ready, in
    /// seconds.
    pub hold_duration: f32,
    /// Number of moves in a generated scramble.
    pub scramble_length: usize,
}

/// Converts a duration in seconds to a [`Duration`] of at least
/// [`MIN_DURATION`]. Negative and non-finite values become [`MIN_DURATION`].
///
/// The result is rounded to whole microseconds, so that values such as `0.3`
/// come out exact despite `f32` imprecision.
pub fn duration_from_secs(secs: f32) -> Duration {
    let micros = (f64::from(secs) * 1_000_000.0).round();
    if micros.is_finite() && micros > 0.0 {
        Duration::from_micros(micros as u64).max(MIN_DURATION)
    } else {
        MIN_DURATION
    }
}
