//! End-to-end session flows through the public API only.

use rand::SeedableRng;
use rand::rngs::StdRng;
use wordfall::game::{GameSession, KeyOutcome, Keystroke, Phase, TickOutcome, speed_for};
use wordfall::words::{self, Difficulty};

fn rng() -> StdRng {
    StdRng::seed_from_u64(1)
}

#[test]
fn full_play_through_to_game_over() {
    let mut rng = rng();
    let mut session = GameSession::new(Difficulty::Easy);
    session
        .start(words::sample_with(Difficulty::Easy, &mut rng))
        .expect("easy catalog is never empty");
    assert_eq!(session.phase(), Phase::Running);

    let spawned = session.spawn(&mut rng).expect("running session spawns").clone();
    assert_eq!(session.words().len(), 1);
    assert_eq!(spawned.y, 0.0);
    assert_eq!(spawned.speed, speed_for(&spawned.text));

    // Left alone, the word falls off the bottom and ends the session.
    let mut ticks = 0u32;
    let outcome = loop {
        ticks += 1;
        assert!(ticks < 1000, "word never reached the bottom");
        match session.tick() {
            TickOutcome::Continue => continue,
            other => break other,
        }
    };
    assert_eq!(
        outcome,
        TickOutcome::GameOver {
            culprit: spawned.text.clone(),
            final_score: 0,
        }
    );
    assert_eq!(session.phase(), Phase::GameOver);

    // Enough frames to cross 600 logical units at this word's speed.
    assert_eq!(ticks, (600.0 / spawned.speed) as u32 + 1);
}

#[test]
fn typing_spawned_words_scores_and_clears() {
    let mut rng = rng();
    let mut session = GameSession::new(Difficulty::Easy);
    // A one-word batch makes every spawn predictable.
    session.start(vec!["cat".to_string()]).expect("start");
    session.spawn(&mut rng);

    for key in ['c', 'a'] {
        assert_eq!(session.keystroke(Keystroke::Char(key)), KeyOutcome::Typed);
    }
    let outcome = session.keystroke(Keystroke::Char('t'));
    assert_eq!(
        outcome,
        KeyOutcome::Matched {
            text: "cat".to_string(),
            points: 30,
        }
    );
    assert_eq!(session.score(), 30);
    assert_eq!(session.typed(), "");
    assert!(session.words().is_empty());

    // The session keeps running; the next spawn still works.
    assert!(session.spawn(&mut rng).is_some());
    assert_eq!(session.phase(), Phase::Running);
}

#[test]
fn restart_after_game_over_is_a_fresh_play_through() {
    let mut rng = rng();
    let mut session = GameSession::new(Difficulty::Medium);
    session.start(vec!["penguin".to_string()]).expect("start");
    session.spawn(&mut rng);
    while session.tick() == TickOutcome::Continue {}
    assert_eq!(session.phase(), Phase::GameOver);

    session
        .start(words::sample_with(Difficulty::Medium, &mut rng))
        .expect("restart");
    assert_eq!(session.phase(), Phase::Running);
    assert_eq!(session.score(), 0);
    assert_eq!(session.typed(), "");
    assert!(session.words().is_empty());
}

#[test]
fn stop_then_tick_and_spawn_are_inert() {
    let mut rng = rng();
    let mut session = GameSession::new(Difficulty::Hard);
    session.start(vec!["algorithm".to_string()]).expect("start");
    session.spawn(&mut rng);

    session.stop();
    assert_eq!(session.phase(), Phase::Idle);
    assert!(session.words().is_empty());
    assert_eq!(session.tick(), TickOutcome::Skipped);
    assert!(session.spawn(&mut rng).is_none());
    assert_eq!(session.keystroke(Keystroke::Char('a')), KeyOutcome::Skipped);
}
