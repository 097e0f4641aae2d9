//! Terminal client for the falling-words game.
//!
//! One cooperative loop owns everything that mutates state: the frame
//! timer, the spawn timer, keyboard input, and fetch completions all run
//! interleaved on this task, which is the whole concurrency story — the
//! only other task is the in-flight batch fetch, and its completion is
//! generation-checked before it touches the session.

mod app;
mod client;
mod ui;

pub use app::{Action, App, FetchRequest, Screen};
pub use client::{FetchError, WordsClient};

use crate::game::{Cue, SPAWN_PERIOD};
use crate::words::Difficulty;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Interval between frame ticks.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// How long the input poll blocks before the timers get a look in.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// A finished fetch, stamped with the generation it was requested under.
struct FetchComplete {
    generation: u64,
    result: Result<Vec<String>, FetchError>,
}

/// Runs the terminal client until the player quits.
pub async fn run(difficulty: Option<Difficulty>, server_url: Option<String>) -> Result<()> {
    // Log to a file so tracing output does not tear the TUI.
    let log_file = std::fs::File::create("wordfall_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting Wordfall terminal client");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, difficulty, server_url).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// The single serialized event loop.
async fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    difficulty: Option<Difficulty>,
    server_url: Option<String>,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: std::error::Error + Send + Sync + 'static,
{
    let words_client = WordsClient::new(server_url);
    let (tx, mut rx) = mpsc::unbounded_channel::<FetchComplete>();
    let mut app = App::new();

    // A difficulty on the command line skips the menu.
    if let Some(tier) = difficulty {
        if let Action::Fetch(request) = app.request_start(tier) {
            spawn_fetch(&words_client, request, tx.clone());
        }
    }

    let mut last_frame = Instant::now();
    let mut last_spawn = Instant::now();
    let mut was_playing = false;

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        // Completions for superseded play-throughs are dropped inside.
        while let Ok(done) = rx.try_recv() {
            app.on_words(done.generation, done.result);
        }

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match app.handle_key(key) {
                        Action::Quit => {
                            info!("Player quit");
                            return Ok(());
                        }
                        Action::Fetch(request) => spawn_fetch(&words_client, request, tx.clone()),
                        Action::None => {}
                    }
                }
            }
        }

        if app.is_playing() {
            if !was_playing {
                // Fresh play-through: both timers restart from now.
                last_frame = Instant::now();
                last_spawn = Instant::now();
            }
            if last_frame.elapsed() >= FRAME_INTERVAL {
                last_frame = Instant::now();
                app.on_frame();
            }
            if last_spawn.elapsed() >= SPAWN_PERIOD {
                last_spawn = Instant::now();
                app.on_spawn();
            }
        }
        was_playing = app.is_playing();

        for cue in app.drain_cues() {
            ring(cue);
        }
    }
}

/// Starts one batch fetch on a background task. The completion carries
/// the request's generation so the app can drop it if the play-through
/// was superseded meanwhile.
fn spawn_fetch(
    words_client: &WordsClient,
    request: FetchRequest,
    tx: mpsc::UnboundedSender<FetchComplete>,
) {
    debug!(?request, "Spawning fetch task");
    let words_client = words_client.clone();
    tokio::spawn(async move {
        let result = words_client.fetch(request.difficulty).await;
        // The receiver only goes away when the client is shutting down.
        let _ = tx.send(FetchComplete {
            generation: request.generation,
            result,
        });
    });
}

/// Maps a cue onto the one sound a terminal has.
fn ring(cue: Cue) {
    match cue {
        Cue::Tap => {}
        Cue::Success | Cue::Failure => {
            use std::io::Write;
            let mut out = io::stdout();
            let _ = out.write_all(b"\x07");
            let _ = out.flush();
        }
    }
}
