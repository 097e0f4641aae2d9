//! Application state for the terminal client.
//!
//! The [`App`] is pure: it owns the session and the screen bookkeeping,
//! and turns key events into [`Action`]s for the run loop to execute.
//! Timers, terminal I/O, and the fetch task all live in the run loop, so
//! everything here is exercised directly by the unit tests.

use crate::game::{Cue, GameSession, KeyOutcome, Keystroke, TickOutcome};
use crate::words::Difficulty;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::SeedableRng;
use rand::rngs::StdRng;
use strum::IntoEnumIterator;
use tracing::{debug, info, warn};

use super::client::FetchError;

/// Which screen the client is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Difficulty menu.
    Menu,
    /// Batch fetch in flight; the session is still idle.
    Loading,
    /// Live play field.
    Playing,
    /// Final score display.
    GameOver,
}

/// A fetch the run loop should start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    /// Generation stamped at request time; completions carrying an older
    /// stamp are dropped.
    pub generation: u64,
    /// Tier to fetch.
    pub difficulty: Difficulty,
}

/// What the run loop should do after a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing beyond what the app already did.
    None,
    /// Tear down the terminal and exit.
    Quit,
    /// Start the given word fetch.
    Fetch(FetchRequest),
}

/// Terminal client state: one session, one screen, one in-flight fetch.
pub struct App {
    session: GameSession,
    screen: Screen,
    cursor: usize,
    generation: u64,
    pending: Option<FetchRequest>,
    error: Option<String>,
    cues: Vec<Cue>,
    rng: StdRng,
}

impl App {
    /// Creates the app on the menu screen.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates the app with a caller-supplied RNG (seeded in tests).
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            session: GameSession::new(Difficulty::Easy),
            screen: Screen::Menu,
            cursor: 0,
            generation: 0,
            pending: None,
            error: None,
            cues: Vec::new(),
            rng,
        }
    }

    /// The current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The session backing the play field.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Menu cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The fetch failure shown on the menu, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True while the play field should tick and spawn.
    pub fn is_playing(&self) -> bool {
        self.screen == Screen::Playing && self.session.is_running()
    }

    /// Takes the cues queued since the last drain.
    pub fn drain_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }

    /// The tier under the menu cursor.
    fn selected_difficulty(&self) -> Difficulty {
        Difficulty::iter()
            .nth(self.cursor)
            .unwrap_or(Difficulty::Easy)
    }

    /// Stamps a new generation and asks the run loop to fetch a batch.
    pub fn request_start(&mut self, difficulty: Difficulty) -> Action {
        self.generation += 1;
        self.session = GameSession::new(difficulty);
        self.error = None;
        self.screen = Screen::Loading;
        let request = FetchRequest {
            generation: self.generation,
            difficulty,
        };
        self.pending = Some(request);
        info!(%difficulty, generation = self.generation, "Requesting word batch");
        Action::Fetch(request)
    }

    /// Returns to the menu, cancelling timers and any in-flight fetch.
    fn to_menu(&mut self) {
        self.generation += 1;
        self.pending = None;
        self.session.stop();
        self.screen = Screen::Menu;
    }

    /// Routes one key event by screen.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }
        match self.screen {
            Screen::Menu => self.handle_menu_key(key),
            Screen::Loading => match key.code {
                KeyCode::Esc => {
                    self.to_menu();
                    Action::None
                }
                _ => Action::None,
            },
            Screen::Playing => self.handle_play_key(key),
            Screen::GameOver => self.handle_game_over_key(key),
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) -> Action {
        let tiers = Difficulty::iter().count();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = (self.cursor + 1).min(tiers - 1);
                Action::None
            }
            KeyCode::Char(c @ '1'..='3') => {
                self.cursor = c as usize - '1' as usize;
                self.request_start(self.selected_difficulty())
            }
            KeyCode::Enter => self.request_start(self.selected_difficulty()),
            _ => Action::None,
        }
    }

    fn handle_play_key(&mut self, key: KeyEvent) -> Action {
        let outcome = match key.code {
            KeyCode::Esc => {
                self.to_menu();
                return Action::None;
            }
            KeyCode::Char(c) => self.session.keystroke(Keystroke::Char(c)),
            KeyCode::Backspace => self.session.keystroke(Keystroke::Backspace),
            _ => KeyOutcome::Skipped,
        };
        self.cues.extend(outcome.cues());
        Action::None
    }

    fn handle_game_over_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('r') => self.request_start(self.session.difficulty()),
            KeyCode::Char('m') | KeyCode::Esc => {
                self.to_menu();
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Applies a fetch completion. Stale generations are dropped whole —
    /// a slow fetch from a superseded play-through must not start one.
    pub fn on_words(&mut self, generation: u64, result: Result<Vec<String>, FetchError>) {
        let Some(pending) = self.pending else {
            debug!(generation, "Dropping fetch completion with nothing pending");
            return;
        };
        if pending.generation != generation {
            debug!(
                generation,
                current = pending.generation,
                "Dropping stale fetch completion"
            );
            return;
        }
        self.pending = None;
        match result {
            Ok(batch) => match self.session.start(batch) {
                Ok(()) => {
                    self.screen = Screen::Playing;
                }
                Err(e) => {
                    warn!(error = %e, "Fetched batch was unusable");
                    self.error = Some(e.to_string());
                    self.screen = Screen::Menu;
                }
            },
            Err(e) => {
                warn!(error = %e, "Word fetch failed");
                self.error = Some(e.to_string());
                self.screen = Screen::Menu;
            }
        }
    }

    /// One frame: advance the field, handle a game over.
    pub fn on_frame(&mut self) {
        let outcome = self.session.tick();
        self.cues.extend(outcome.cue());
        if let TickOutcome::GameOver { .. } = outcome {
            // Stamp a new generation so anything still in flight dies.
            self.generation += 1;
            self.pending = None;
            self.screen = Screen::GameOver;
        }
    }

    /// One spawn-timer firing.
    pub fn on_spawn(&mut self) {
        self.session.spawn(&mut self.rng);
    }

    /// Final score to show on the game-over screen.
    pub fn final_score(&self) -> u32 {
        self.session.score()
    }

    /// True when the menu cursor sits on the given row.
    pub fn cursor_on(&self, index: usize) -> bool {
        self.cursor == index
    }

    /// Seeds a deterministic spawn, for tests.
    #[cfg(test)]
    fn seeded() -> Self {
        Self::with_rng(StdRng::seed_from_u64(7))
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn batch() -> Vec<String> {
        vec!["cat".to_string(), "dog".to_string()]
    }

    #[test]
    fn menu_enter_requests_fetch_for_selected_tier() {
        let mut app = App::seeded();
        app.handle_key(press(KeyCode::Down));
        let action = app.handle_key(press(KeyCode::Enter));
        assert_eq!(
            action,
            Action::Fetch(FetchRequest {
                generation: 1,
                difficulty: Difficulty::Medium,
            })
        );
        assert_eq!(app.screen(), Screen::Loading);
    }

    #[test]
    fn fetch_completion_starts_the_session() {
        let mut app = App::seeded();
        app.handle_key(press(KeyCode::Enter));
        app.on_words(1, Ok(batch()));
        assert_eq!(app.screen(), Screen::Playing);
        assert!(app.session().is_running());
    }

    #[test]
    fn stale_fetch_completion_is_dropped() {
        let mut app = App::seeded();
        app.handle_key(press(KeyCode::Enter)); // generation 1
        app.handle_key(press(KeyCode::Esc)); // back to menu, generation 2
        app.on_words(1, Ok(batch()));
        assert_eq!(app.screen(), Screen::Menu);
        assert!(!app.session().is_running());

        // A fresh request still works afterwards.
        app.handle_key(press(KeyCode::Enter)); // generation 3
        app.on_words(3, Ok(batch()));
        assert_eq!(app.screen(), Screen::Playing);
    }

    #[test]
    fn fetch_failure_returns_to_menu_with_an_error() {
        let mut app = App::seeded();
        app.handle_key(press(KeyCode::Enter));
        app.on_words(1, Err(FetchError::Status { code: 500 }));
        assert_eq!(app.screen(), Screen::Menu);
        assert!(app.error().is_some());
        assert!(!app.session().is_running());
    }

    #[test]
    fn escape_during_play_stops_to_menu() {
        let mut app = App::seeded();
        app.handle_key(press(KeyCode::Enter));
        app.on_words(1, Ok(batch()));
        app.on_spawn();
        assert!(!app.session().words().is_empty());

        app.handle_key(press(KeyCode::Esc));
        assert_eq!(app.screen(), Screen::Menu);
        assert!(app.session().words().is_empty());
    }

    #[test]
    fn typing_during_play_reaches_the_session() {
        let mut app = App::seeded();
        app.handle_key(press(KeyCode::Enter));
        app.on_words(1, Ok(vec!["cat".to_string()]));
        app.on_spawn();

        for c in ['c', 'a', 't'] {
            app.handle_key(press(KeyCode::Char(c)));
        }
        assert_eq!(app.session().score(), 30);
        assert!(app.session().words().is_empty());
        let cues = app.drain_cues();
        assert_eq!(cues.last(), Some(&Cue::Success));
    }

    #[test]
    fn game_over_flows_to_restart_with_a_new_generation() {
        let mut app = App::seeded();
        app.handle_key(press(KeyCode::Enter));
        app.on_words(1, Ok(vec!["cat".to_string()]));
        app.on_spawn();

        // 4 units per frame from the top; 151 frames crosses 600.
        for _ in 0..200 {
            app.on_frame();
            if app.screen() == Screen::GameOver {
                break;
            }
        }
        assert_eq!(app.screen(), Screen::GameOver);
        assert_eq!(app.drain_cues().last(), Some(&Cue::Failure));

        let action = app.handle_key(press(KeyCode::Char('r')));
        let Action::Fetch(request) = action else {
            panic!("restart should fetch a fresh batch");
        };
        assert_eq!(request.difficulty, Difficulty::Easy);
        assert!(request.generation > 2);
    }
}
