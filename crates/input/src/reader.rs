//! Background keyboard reader.
//!
//! Owns terminal raw mode and a thread that turns key events into [`Intent`]s
//! on a bounded queue. The game loop is the only consumer and drains the queue
//! once per tick, so all game state stays on one thread.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::terminal;
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{debug, warn};

use crate::map::map_key_event;
use crate::types::Intent;
use crate::ShutdownToken;

/// How often the reader wakes up to check for shutdown.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Sending end of the intent queue.
pub type IntentSender = mpsc::Sender<Intent>;

/// Receiving end of the intent queue.
pub struct IntentQueue {
    rx: mpsc::Receiver<Intent>,
}

impl IntentQueue {
    pub fn try_recv(&mut self) -> Option<Intent> {
        self.rx.try_recv().ok()
    }

    /// Everything queued right now, without blocking.
    pub fn drain(&mut self) -> impl Iterator<Item = Intent> + '_ {
        std::iter::from_fn(move || self.try_recv())
    }
}

/// Create a bounded intent queue.
pub fn intent_channel(capacity: usize) -> (IntentSender, IntentQueue) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (tx, IntentQueue { rx })
}

/// Queue an intent without blocking. Returns false once the queue is closed.
fn push(tx: &IntentSender, intent: Intent) -> bool {
    match tx.try_send(intent) {
        Ok(()) => true,
        Err(TrySendError::Full(dropped)) => {
            warn!(?dropped, "intent queue full, dropping key");
            true
        }
        Err(TrySendError::Closed(_)) => false,
    }
}

/// Raw-mode terminal reader thread.
pub struct InputReader {
    handle: Option<JoinHandle<()>>,
    shutdown: ShutdownToken,
    raw: bool,
}

impl InputReader {
    /// Enter raw mode and start reading keys.
    pub fn start(capacity: usize, shutdown: ShutdownToken) -> Result<(Self, IntentQueue)> {
        terminal::enable_raw_mode().context("failed to enable terminal raw mode")?;

        let (tx, queue) = intent_channel(capacity);
        let token = shutdown.clone();
        let spawned = thread::Builder::new()
            .name("wordle-input".into())
            .spawn(move || read_loop(tx, token));

        let handle = match spawned {
            Ok(h) => h,
            Err(e) => {
                let _ = terminal::disable_raw_mode();
                return Err(e).context("failed to spawn input thread");
            }
        };

        Ok((
            Self {
                handle: Some(handle),
                shutdown,
                raw: true,
            },
            queue,
        ))
    }

    /// Stop the reader thread and restore cooked mode. Safe to call twice.
    pub fn stop(&mut self) -> Result<()> {
        self.shutdown.cancel();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("input thread panicked");
            }
        }
        if self.raw {
            self.raw = false;
            terminal::disable_raw_mode().context("failed to restore terminal mode")?;
        }
        Ok(())
    }
}

impl Drop for InputReader {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}

fn read_loop(tx: IntentSender, shutdown: ShutdownToken) {
    while !shutdown.is_cancelled() {
        match event::poll(POLL_INTERVAL) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(e) => {
                warn!(error = %e, "terminal poll failed");
                shutdown.cancel();
                break;
            }
        }

        let key = match event::read() {
            Ok(Event::Key(key)) => key,
            Ok(_) => continue,
            Err(e) => {
                warn!(error = %e, "terminal read failed");
                shutdown.cancel();
                break;
            }
        };

        let Some(intent) = map_key_event(key) else {
            continue;
        };
        debug!(?intent, "key");

        if intent == Intent::Quit {
            shutdown.cancel();
        }
        if !push(&tx, intent) || intent == Intent::Quit {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_drains_in_order() {
        let (tx, mut queue) = intent_channel(8);
        assert!(push(&tx, Intent::Letter(b'A')));
        assert!(push(&tx, Intent::Backspace));
        assert!(push(&tx, Intent::Submit));

        let drained: Vec<Intent> = queue.drain().collect();
        assert_eq!(
            drained,
            vec![Intent::Letter(b'A'), Intent::Backspace, Intent::Submit]
        );
        assert_eq!(queue.try_recv(), None);
    }

    #[test]
    fn full_queue_drops_keys_but_stays_open() {
        let (tx, mut queue) = intent_channel(1);
        assert!(push(&tx, Intent::Letter(b'A')));
        assert!(push(&tx, Intent::Letter(b'B')));
        assert_eq!(queue.drain().count(), 1);
    }

    #[test]
    fn closed_queue_stops_the_reader() {
        let (tx, queue) = intent_channel(1);
        drop(queue);
        assert!(!push(&tx, Intent::Submit));
    }
}
