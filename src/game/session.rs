//! The per-play-through session state machine.
//!
//! A session moves `Idle → Running → GameOver`, back to `Idle` via an
//! explicit stop, and back to `Running` via restart. Frame ticks, spawns,
//! and keystrokes are all methods on [`GameSession`]; callers drive them
//! from one serialized loop, so no locking happens here. Every mutating
//! entry point is a no-op unless the session is running — a timer
//! callback that fires late against a stopped session changes nothing.

use super::types::{Cue, FallingWord, points_for};
use crate::words::Difficulty;
use derive_more::{Display, Error};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, info, instrument};

/// Phase of a session's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No play-through in progress. The menu state.
    Idle,
    /// Words are falling and input is live.
    Running,
    /// A word reached the bottom; the final score is frozen.
    GameOver,
}

/// A single key event fed to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    /// A printable character.
    Char(char),
    /// Remove the last buffered character.
    Backspace,
}

/// What one frame tick did.
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// Session was not running; nothing moved.
    Skipped,
    /// All words advanced and stayed inside the field.
    Continue,
    /// A word crossed the bottom. The session is now [`Phase::GameOver`]
    /// and the frame was abandoned at the offending word.
    GameOver {
        /// Text of the word that reached the bottom.
        culprit: String,
        /// The frozen final score.
        final_score: u32,
    },
}

impl TickOutcome {
    /// Audio cue to fire for this outcome, if any.
    pub fn cue(&self) -> Option<Cue> {
        match self {
            TickOutcome::GameOver { .. } => Some(Cue::Failure),
            _ => None,
        }
    }
}

/// What one keystroke did.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome {
    /// Session was not running; the key was dropped.
    Skipped,
    /// The character was appended; the buffer matches no word yet.
    Typed,
    /// The last buffered character was removed (or the buffer was
    /// already empty, which is fine).
    Erased,
    /// The buffer exactly matched an active word, which was removed.
    Matched {
        /// Text of the removed word.
        text: String,
        /// Points added to the score.
        points: u32,
    },
}

impl KeyOutcome {
    /// Audio cues to fire for this outcome, in order.
    pub fn cues(&self) -> &'static [Cue] {
        match self {
            KeyOutcome::Typed => &[Cue::Tap],
            KeyOutcome::Matched { .. } => &[Cue::Tap, Cue::Success],
            KeyOutcome::Skipped | KeyOutcome::Erased => &[],
        }
    }
}

/// Errors starting a play-through.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum StartError {
    /// The supplied batch had no words to spawn from.
    #[display("cannot start a session with an empty word batch")]
    EmptyBatch,
}

/// All mutable state for one play-through.
///
/// The session never fetches words itself; the caller hands a batch to
/// [`GameSession::start`] once the fetch completes, which is what gates
/// the `Idle → Running` transition.
#[derive(Debug, Clone)]
pub struct GameSession {
    difficulty: Difficulty,
    phase: Phase,
    batch: Vec<String>,
    words: Vec<FallingWord>,
    typed: String,
    score: u32,
}

impl GameSession {
    /// Creates an idle session for the given tier.
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            phase: Phase::Idle,
            batch: Vec::new(),
            words: Vec::new(),
            typed: String::new(),
            score: 0,
        }
    }

    /// The tier this session plays.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while words fall and input is live.
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Current score. Monotonically non-decreasing while running; frozen
    /// after game over; reset by [`GameSession::start`].
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The player's accumulating keystroke buffer.
    pub fn typed(&self) -> &str {
        &self.typed
    }

    /// Words currently on the field, oldest spawn first.
    pub fn words(&self) -> &[FallingWord] {
        &self.words
    }

    /// The cached batch this session spawns from.
    pub fn batch(&self) -> &[String] {
        &self.batch
    }

    /// Begins a play-through with a freshly fetched batch, resetting
    /// score, field, and typed buffer. Valid from any phase: a difficulty
    /// select starts from `Idle`, a restart from `GameOver`.
    ///
    /// # Errors
    ///
    /// Returns [`StartError::EmptyBatch`] if the batch is empty; the
    /// session stays out of [`Phase::Running`] in that case.
    #[instrument(skip(self, batch), fields(difficulty = %self.difficulty, batch_len = batch.len()))]
    pub fn start(&mut self, batch: Vec<String>) -> Result<(), StartError> {
        if batch.is_empty() {
            return Err(StartError::EmptyBatch);
        }
        info!(difficulty = %self.difficulty, "Starting play-through");
        self.batch = batch;
        self.words.clear();
        self.typed.clear();
        self.score = 0;
        self.phase = Phase::Running;
        Ok(())
    }

    /// Advances every word by its speed. The first word past the bottom
    /// ends the session immediately; the rest of the frame is abandoned.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Skipped;
        }
        for i in 0..self.words.len() {
            self.words[i].y += self.words[i].speed;
            if self.words[i].past_bottom() {
                let culprit = self.words[i].text.clone();
                self.words.clear();
                self.phase = Phase::GameOver;
                info!(%culprit, final_score = self.score, "Word reached the bottom, game over");
                return TickOutcome::GameOver {
                    culprit,
                    final_score: self.score,
                };
            }
        }
        TickOutcome::Continue
    }

    /// Feeds one key event to the session.
    ///
    /// A printable character appends to the buffer and then checks for an
    /// exact match against the active words; the first match in spawn
    /// order is removed, at most one per keystroke. Backspace pops the
    /// buffer and never matches.
    pub fn keystroke(&mut self, key: Keystroke) -> KeyOutcome {
        if !self.is_running() {
            return KeyOutcome::Skipped;
        }
        match key {
            Keystroke::Backspace => {
                self.typed.pop();
                KeyOutcome::Erased
            }
            Keystroke::Char(c) => {
                self.typed.push(c);
                match self.words.iter().position(|w| w.text == self.typed) {
                    Some(i) => {
                        let word = self.words.remove(i);
                        let points = points_for(&word.text);
                        self.score += points;
                        self.typed.clear();
                        debug!(text = %word.text, points, score = self.score, "Word matched");
                        KeyOutcome::Matched {
                            text: word.text,
                            points,
                        }
                    }
                    None => KeyOutcome::Typed,
                }
            }
        }
    }

    /// Spawns one word drawn uniformly (with replacement across spawns)
    /// from the cached batch. Returns the new word, or `None` when the
    /// session is not running — a spawn timer firing after a stop must
    /// not leave anything behind.
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&FallingWord> {
        if !self.is_running() {
            return None;
        }
        let text = self.batch.choose(rng)?.clone();
        self.words.push(FallingWord::spawn(text, rng));
        self.words.last()
    }

    /// Returns the session to [`Phase::Idle`], clearing the field. The
    /// score is left alone (a later start resets it). Calling stop on an
    /// already idle session is a no-op.
    #[instrument(skip(self), fields(difficulty = %self.difficulty))]
    pub fn stop(&mut self) {
        if self.phase != Phase::Idle {
            debug!(from = ?self.phase, "Stopping session");
        }
        self.words.clear();
        self.phase = Phase::Idle;
    }
}
