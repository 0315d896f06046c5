//! Integration tests for whole games driven through intents and ticks

use std::time::{Duration, Instant};

use wordle_led::core::{Dictionary, GameEvent, GameState, IntentEffect, Stats, Word};
use wordle_led::types::{Intent, Outcome, Score, FLIP_FRAMES, MAX_GUESSES};

fn word(s: &str) -> Word {
    Word::parse(s).unwrap()
}

fn new_game(target: &str, words: &[&str]) -> GameState {
    let dict: Dictionary = words.iter().map(|w| word(w)).collect();
    GameState::new(word(target), dict, Stats::default())
}

fn type_word(g: &mut GameState, s: &str) {
    for b in s.bytes() {
        g.apply_intent(Intent::Letter(b));
    }
}

/// Submit a guess and tick until the reveal finishes. Returns every event.
fn play(g: &mut GameState, guess: &str, now: Instant) -> Vec<GameEvent> {
    type_word(g, guess);
    assert_eq!(g.apply_intent(Intent::Submit), IntentEffect::Submitted(word(guess)));
    let mut events = Vec::new();
    for _ in 0..FLIP_FRAMES {
        events.extend(g.tick(now));
    }
    events
}

#[test]
fn test_win_on_first_guess() {
    let mut g = new_game("PIZZA", &[]);
    let now = Instant::now();
    let events = play(&mut g, "pizza", now);

    assert_eq!(g.outcome(), Outcome::Won);
    assert_eq!(g.row(), 1);
    assert_eq!(g.finished_at(), Some(now));
    assert!(events.contains(&GameEvent::Finished(Outcome::Won)));
    assert_eq!(g.stats().played, 1);
    assert_eq!(g.stats().wins, 1);
    for c in 0..5 {
        assert_eq!(g.grid().get(0, c).unwrap().score, Score::Correct);
    }
}

#[test]
fn test_loss_only_after_sixth_reveal() {
    let mut g = new_game("PIZZA", &[]);
    let now = Instant::now();
    for i in 0..MAX_GUESSES - 1 {
        play(&mut g, "CLUNK", now);
        assert_eq!(g.outcome(), Outcome::Playing, "finished early after row {i}");
    }

    type_word(&mut g, "CLUNK");
    g.apply_intent(Intent::Submit);
    for _ in 0..FLIP_FRAMES - 1 {
        g.tick(now);
    }
    assert_eq!(g.outcome(), Outcome::Playing);
    let last = g.tick(now);
    assert!(last.contains(&GameEvent::Finished(Outcome::Lost)));
    assert_eq!(g.stats().current_streak, 0);
    assert_eq!(g.stats().played, 1);
}

#[test]
fn test_unknown_word_shakes_and_keeps_row() {
    let mut g = new_game("PIZZA", &["CRANE", "PIZZA"]);
    type_word(&mut g, "ZZZZZ");
    assert_eq!(
        g.apply_intent(Intent::Submit),
        IntentEffect::Rejected(word("ZZZZZ"))
    );
    assert!(g.shake().is_active());
    assert_eq!(g.row(), 0);
    assert_eq!(g.col(), 5);

    // The player can fix the guess while shaking.
    for _ in 0..5 {
        g.apply_intent(Intent::Backspace);
    }
    type_word(&mut g, "CRANE");
    assert_eq!(
        g.apply_intent(Intent::Submit),
        IntentEffect::Submitted(word("CRANE"))
    );
}

#[test]
fn test_input_is_locked_during_reveal() {
    let mut g = new_game("PIZZA", &[]);
    type_word(&mut g, "CRANE");
    g.apply_intent(Intent::Submit);
    let now = Instant::now();

    for _ in 0..FLIP_FRAMES - 1 {
        g.tick(now);
        assert_eq!(g.apply_intent(Intent::Letter(b'X')), IntentEffect::Ignored);
        assert_eq!(g.apply_intent(Intent::Backspace), IntentEffect::Ignored);
    }
    g.tick(now);
    assert!(!g.input_locked());
    assert!(matches!(
        g.apply_intent(Intent::Letter(b'X')),
        IntentEffect::Typed { row: 1, col: 0, .. }
    ));
}

#[test]
fn test_keys_never_downgrade() {
    let mut g = new_game("PIZZA", &[]);
    let now = Instant::now();
    play(&mut g, "PLUMB", now);
    assert_eq!(g.keys().get(b'P'), Some(Score::Correct));

    // P at position 2 would be Present on its own, but the key stays Correct.
    play(&mut g, "APRON", now);
    assert_eq!(g.keys().get(b'P'), Some(Score::Correct));
    assert_eq!(g.keys().get(b'A'), Some(Score::Present));
    assert_eq!(g.keys().get(b'Z'), None);
}

#[test]
fn test_finished_game_times_out_after_two_minutes() {
    let mut g = new_game("PIZZA", &[]);
    let now = Instant::now();
    play(&mut g, "PIZZA", now);

    assert!(!g.should_exit(now + Duration::from_secs(119)));
    assert!(g.should_exit(now + Duration::from_secs(120)));
    // Further ticks keep animating the end screen without recording again.
    g.tick(now);
    g.tick(now);
    assert_eq!(g.stats().played, 1);
    assert!(g.end_ticks() >= 3);
}
