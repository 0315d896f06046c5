//! Loading a session from files, including every fallback.

use std::fs;
use std::path::{Path, PathBuf};

use wordle_led::config::Config;
use wordle_led::core::{IntentEffect, Stats, Word};
use wordle_led::load_session;
use wordle_led::types::{Intent, DEFAULT_TARGET};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("wordle-led-session-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn config_in(dir: &Path) -> Config {
    Config {
        words_path: dir.join("valid_guesses.txt"),
        answer_path: dir.join("answer.txt"),
        stats_path: dir.join("stats.txt"),
        ..Config::default()
    }
}

#[test]
fn loads_words_answer_and_stats() {
    let dir = scratch_dir("full");
    let config = config_in(&dir);
    fs::write(&config.words_path, "crane\nslate\npizza\n").unwrap();
    fs::write(&config.answer_path, "slate\n").unwrap();
    fs::write(&config.stats_path, "4 3 2 3").unwrap();

    let (game, stats_file) = load_session(&config);
    assert_eq!(*game.target(), Word::parse("SLATE").unwrap());
    assert_eq!(game.dictionary().len(), 3);
    assert_eq!(
        *game.stats(),
        Stats {
            played: 4,
            wins: 3,
            current_streak: 2,
            max_streak: 3
        }
    );
    assert_eq!(stats_file.path(), config.stats_path.as_path());
}

#[test]
fn missing_files_fall_back_to_defaults() {
    let dir = scratch_dir("empty");
    let config = config_in(&dir);

    let (mut game, _) = load_session(&config);
    assert_eq!(game.target().to_string(), DEFAULT_TARGET);
    assert!(game.dictionary().is_empty());
    assert_eq!(*game.stats(), Stats::default());
    // A fresh stats file is written with zeros.
    assert_eq!(fs::read_to_string(&config.stats_path).unwrap(), "0 0 0 0");

    // Without a word list any five letters are accepted.
    for b in b"QXZJV" {
        game.apply_intent(Intent::Letter(*b));
    }
    assert!(matches!(
        game.apply_intent(Intent::Submit),
        IntentEffect::Submitted(_)
    ));
}

#[test]
fn invalid_answer_uses_fallback() {
    let dir = scratch_dir("bad-answer");
    let config = config_in(&dir);
    fs::write(&config.answer_path, "toolong\n").unwrap();
    fs::write(&config.stats_path, "7 x").unwrap();

    let (game, _) = load_session(&config);
    assert_eq!(*game.target(), Word::default());
    assert_eq!(game.stats().played, 7);
    assert_eq!(game.stats().wins, 0);
}
