//! Wordfall - a falling-words typing game.
//!
//! A stateless word server hands out per-difficulty batches and serves
//! the browser client; the same game rules run natively in the terminal
//! client and in the test suite.
//!
//! # Architecture
//!
//! - **Words**: static catalogs and the batch supplier
//! - **Game**: the per-play-through session state machine (pure, no I/O)
//! - **Server**: axum routes for the page shell and word batches
//! - **Tui**: ratatui frontend driving a session from one event loop

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod game;
pub mod server;
pub mod tui;
pub mod words;

// Crate-level exports - game rules
pub use game::{
    CANVAS_HEIGHT, CANVAS_WIDTH, Cue, FallingWord, GameSession, KeyOutcome, Keystroke, Phase,
    StartError, TickOutcome,
};

// Crate-level exports - word supplier
pub use words::{BATCH_LIMIT, Difficulty, SupplyError};

// Crate-level exports - wire types
pub use server::WordsResponse;
