use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};

use wordle_led::core::{Dictionary, GameState, Stats, Word};
use wordle_led::display::game_view::GREEN;
use wordle_led::display::{Display, FontSet, PixelBuffer};
use wordle_led::input::{intent_channel, IntentSender, ShutdownToken};
use wordle_led::store::StatsFile;
use wordle_led::types::{Intent, Outcome, FLIP_FRAMES};
use wordle_led::App;

#[derive(Default)]
struct Recorder {
    frames: usize,
    shutdowns: usize,
    last: Option<PixelBuffer>,
    fail_shutdown: bool,
}

impl Display for Recorder {
    fn present(&mut self, frame: &PixelBuffer) -> Result<()> {
        self.frames += 1;
        self.last = Some(frame.clone());
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        self.shutdowns += 1;
        if self.fail_shutdown {
            anyhow::bail!("panel went away");
        }
        Ok(())
    }
}

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("wordle-led-app-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    let _ = fs::remove_file(&path);
    path
}

struct Harness {
    app: App<Recorder>,
    tx: IntentSender,
    token: ShutdownToken,
}

fn harness(target: &str) -> Harness {
    let (tx, intents) = intent_channel(64);
    let token = ShutdownToken::new();
    let game = GameState::new(
        Word::parse(target).unwrap(),
        Dictionary::new(),
        Stats::default(),
    );
    let app = App::new(game, FontSet::builtin(), Recorder::default(), intents, token.clone());
    Harness { app, tx, token }
}

impl Harness {
    fn send_word(&self, w: &str) {
        for b in w.bytes() {
            self.tx.try_send(Intent::Letter(b)).unwrap();
        }
        self.tx.try_send(Intent::Submit).unwrap();
    }
}

#[test]
fn step_applies_queued_intents_then_presents() {
    let mut h = harness("PIZZA");
    for b in b"CRA" {
        h.tx.try_send(Intent::Letter(*b)).unwrap();
    }
    h.app.step(Instant::now()).unwrap();

    assert_eq!(h.app.game().col(), 3);
    assert_eq!(h.app.display().frames, 1);
    assert_eq!(h.app.display().last.as_ref(), Some(h.app.frame()));
    assert!(!h.token.is_cancelled());
}

#[test]
fn quit_intent_cancels_without_touching_the_game() {
    let mut h = harness("PIZZA");
    h.tx.try_send(Intent::Letter(b'A')).unwrap();
    h.tx.try_send(Intent::Quit).unwrap();
    h.app.step(Instant::now()).unwrap();

    assert!(h.token.is_cancelled());
    assert_eq!(h.app.game().col(), 1);
    // `run` returns immediately once cancelled.
    h.app.run().unwrap();
}

#[test]
fn winning_saves_stats_and_times_out() {
    let path = scratch("win-stats.txt");
    let mut h = harness("PIZZA");
    h.app = h.app.with_stats_file(StatsFile::new(&path));

    h.send_word("PIZZA");
    let now = Instant::now();
    for _ in 0..FLIP_FRAMES {
        h.app.step(now).unwrap();
    }

    assert_eq!(h.app.game().outcome(), Outcome::Won);
    assert!(!h.app.stats_dirty());
    assert_eq!(fs::read_to_string(&path).unwrap(), "1 1 1 1");
    // The victory screen shows the solved row in green.
    assert!(h.app.frame().count(GREEN) > 0);

    h.app.step(now + Duration::from_secs(60)).unwrap();
    assert!(!h.token.is_cancelled());
    h.app.step(now + Duration::from_secs(120)).unwrap();
    assert!(h.token.is_cancelled());
}

#[test]
fn shutdown_runs_once() {
    let mut h = harness("PIZZA");
    h.app.step(Instant::now()).unwrap();
    h.app.shutdown().unwrap();
    h.app.shutdown().unwrap();

    assert_eq!(h.app.display().shutdowns, 1);
    assert!(h.token.is_cancelled());
}

#[test]
fn panel_size_sets_the_frame() {
    let mut h = harness("PIZZA");
    h.app = h.app.with_panel_size(32, 64);
    h.app.step(Instant::now()).unwrap();
    let frame = h.app.display().last.as_ref().unwrap();
    assert_eq!(frame.pixels().len(), 32 * 64);
}

#[test]
fn finish_keeps_the_loop_result_when_shutdown_fails() {
    let (_tx, intents) = intent_channel(4);
    let game = GameState::new(
        Word::parse("PIZZA").unwrap(),
        Dictionary::new(),
        Stats::default(),
    );
    let display = Recorder {
        fail_shutdown: true,
        ..Recorder::default()
    };
    let mut app = App::new(game, FontSet::builtin(), display, intents, ShutdownToken::new());
    app.step(Instant::now()).unwrap();

    assert!(app.finish(Ok(())).is_ok());
    assert_eq!(app.display().shutdowns, 1);

    // A loop error still surfaces; shutdown does not run twice.
    let err = app.finish(Err(anyhow!("present failed"))).unwrap_err();
    assert_eq!(err.to_string(), "present failed");
    assert_eq!(app.display().shutdowns, 1);
}
