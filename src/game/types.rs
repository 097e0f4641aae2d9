//! Core domain types and tuning constants for the falling-word game.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Logical play-field width. All horizontal math is relative to this.
pub const CANVAS_WIDTH: f32 = 800.0;

/// Logical play-field height. A word past this line ends the session.
pub const CANVAS_HEIGHT: f32 = 600.0;

/// Horizontal margin kept free at the right edge so a word renders
/// inside the field.
pub const WORD_MARGIN: f32 = 100.0;

/// Fall speed of a zero-length word, in units per frame.
pub const BASE_SPEED: f32 = 4.0;

/// Speed subtracted per character of the word.
pub const LENGTH_PENALTY: f32 = 0.2;

/// No word falls slower than this.
pub const MIN_SPEED: f32 = 1.0;

/// Points awarded per character of a matched word.
pub const POINTS_PER_CHAR: u32 = 10;

/// Period of the spawn timer.
pub const SPAWN_PERIOD: std::time::Duration = std::time::Duration::from_secs(2);

/// One word currently falling through the play field.
///
/// `x` and `speed` are fixed at spawn; only `y` changes, once per frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallingWord {
    /// The text the player must type, verbatim.
    pub text: String,
    /// Horizontal position, assigned once at spawn.
    pub x: f32,
    /// Vertical position, advanced by `speed` every frame.
    pub y: f32,
    /// Units fallen per frame. Longer words fall slower.
    pub speed: f32,
}

impl FallingWord {
    /// Spawns a word at the top of the field with a random horizontal
    /// position and a speed derived from its length.
    pub fn spawn<R: Rng + ?Sized>(text: impl Into<String>, rng: &mut R) -> Self {
        let text = text.into();
        let x = rng.random_range(0.0..CANVAS_WIDTH - WORD_MARGIN);
        let speed = speed_for(&text);
        Self { text, x, y: 0.0, speed }
    }

    /// True once the word has fallen past the bottom boundary.
    pub fn past_bottom(&self) -> bool {
        self.y > CANVAS_HEIGHT
    }
}

/// Fall speed for a word of the given text, floor-clamped so nothing is
/// ever static on screen.
pub fn speed_for(text: &str) -> f32 {
    (BASE_SPEED - text.chars().count() as f32 * LENGTH_PENALTY).max(MIN_SPEED)
}

/// Points awarded for typing the given word.
pub fn points_for(text: &str) -> u32 {
    text.chars().count() as u32 * POINTS_PER_CHAR
}

/// Fire-and-forget audio cues emitted by the session. Frontends map
/// these to whatever sound they have; they never feed back into state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// A printable key was typed.
    Tap,
    /// A word was matched and removed.
    Success,
    /// A word reached the bottom; the session is over.
    Failure,
}
