//! Speed-solving timer with scrambles and session statistics.

mod scramble;
mod session;
mod timer;

pub use scramble::{DEFAULT_SCRAMBLE_LENGTH, Scramble};
pub use session::{NO_TIME, Session, SessionError, Solve, format_time};
pub use timer::{SpeedTimer, TimerKey, TimerState};
