//! Falling-word game rules.
//!
//! Pure state and transitions, no I/O: frontends own the timers and the
//! rendering, the session owns everything that can change the outcome.

mod session;
mod types;

pub use session::{GameSession, KeyOutcome, Keystroke, Phase, StartError, TickOutcome};
pub use types::{
    BASE_SPEED, CANVAS_HEIGHT, CANVAS_WIDTH, Cue, FallingWord, LENGTH_PENALTY, MIN_SPEED,
    POINTS_PER_CHAR, SPAWN_PERIOD, WORD_MARGIN, points_for, speed_for,
};
