//! Word catalogs and the per-difficulty batch supplier.
//!
//! The three catalogs are fixed at compile time. A batch is a uniform
//! random sample without replacement of at most [`BATCH_LIMIT`] words;
//! the client spawns from its batch with replacement for the rest of the
//! session, so the supplier is only consulted once per play-through.

use derive_more::{Display, Error};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Upper bound on the number of words in one batch.
pub const BATCH_LIMIT: usize = 50;

/// Short, common words.
const EASY: &[&str] = &[
    "cat", "dog", "run", "jump", "play", "house", "tree", "book", "fish", "bird",
    "sky", "sun", "moon", "star", "rain", "snow", "wind", "food", "cake", "milk",
    "bed", "desk", "door", "wall", "lamp", "ball", "park", "shop", "bike", "hand",
    "foot", "head", "face", "nose", "eyes", "song", "game", "time", "blue", "green",
    "red", "gold", "pink", "smile", "laugh", "dance", "walk", "talk", "eat", "drink",
];

/// Mid-length words.
const MEDIUM: &[&str] = &[
    "python", "garden", "window", "picture", "computer", "keyboard", "mountain",
    "butterfly", "sunshine", "rainbow", "printer", "monitor", "pencil", "library",
    "building", "chocolate", "airplane", "birthday", "sandwich", "weekend", "morning",
    "evening", "cooking", "drawing", "running", "dancing", "singing", "playing",
    "dolphin", "penguin", "turtle", "rabbit", "monkey", "giraffe", "peacock",
];

/// Long words.
const HARD: &[&str] = &[
    "algorithm", "programming", "dictionary", "javascript", "development",
    "technology", "experience", "understanding", "communication", "organization",
    "environment", "imagination", "preparation", "celebration", "achievement",
    "performance", "competition", "exploration", "innovation", "inspiration",
    "motivation", "dedication", "concentration", "determination", "appreciation",
];

/// Difficulty tier selecting one of the three word catalogs.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    /// Short, common words.
    Easy,
    /// Mid-length words.
    Medium,
    /// Long words.
    Hard,
}

impl Difficulty {
    /// Returns the full catalog for this tier.
    pub fn catalog(self) -> &'static [&'static str] {
        match self {
            Difficulty::Easy => EASY,
            Difficulty::Medium => MEDIUM,
            Difficulty::Hard => HARD,
        }
    }
}

/// Errors from the word supplier.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SupplyError {
    /// The requested tier is not one of easy/medium/hard.
    #[display("unknown difficulty: {requested}")]
    UnknownDifficulty {
        /// The tier string as the caller sent it.
        #[error(not(source))]
        requested: String,
    },
}

/// Parses a difficulty token, rejecting anything but the three tiers.
///
/// # Errors
///
/// Returns [`SupplyError::UnknownDifficulty`] for any other token. Callers
/// must surface this as a request-level failure, never fall back to a
/// default tier.
pub fn parse_difficulty(token: &str) -> Result<Difficulty, SupplyError> {
    token.parse().map_err(|_| SupplyError::UnknownDifficulty {
        requested: token.to_string(),
    })
}

/// Samples a batch for the tier using the given RNG.
///
/// The result has `min(BATCH_LIMIT, catalog len)` distinct words; every
/// subset of that size and every ordering is equally likely.
#[instrument(skip(rng))]
pub fn sample_with<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Vec<String> {
    let mut pool: Vec<&str> = difficulty.catalog().to_vec();
    pool.shuffle(rng);
    pool.truncate(BATCH_LIMIT);
    debug!(%difficulty, count = pool.len(), "Sampled word batch");
    pool.into_iter().map(str::to_owned).collect()
}

/// Samples a batch for the tier using the thread-local RNG.
pub fn sample(difficulty: Difficulty) -> Vec<String> {
    sample_with(difficulty, &mut rand::rng())
}
