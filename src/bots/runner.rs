//! Background poller thread for a `BotSet`.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::store::GameStore;

use super::set::BotSet;

/// Polling interval of the bots.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1200);

/// Handle to a running poller. Dropping it stops the thread without
/// waiting for it.
pub struct BotRunner {
    stop: Sender<()>,
    handle: JoinHandle<BotSet>,
}

impl BotRunner {
    /// Stop polling and get the bot set back.
    ///
    /// Returns `None` if the poller thread panicked.
    pub fn stop(self) -> Option<BotSet> {
        // The thread may already be gone; joining tells us how it ended.
        let _ = self.stop.send(());
        match self.handle.join() {
            Ok(bots) => Some(bots),
            Err(_) => {
                log::warn!(target: "backgammon", "bot poller panicked");
                None
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl BotSet {
    /// Poll `store` every `interval` on a background thread.
    ///
    /// Poll failures are logged and the next round proceeds as usual.
    pub fn spawn<S>(mut self, store: Arc<S>, interval: Duration) -> BotRunner
    where
        S: GameStore + 'static,
    {
        let (stop, stopped) = mpsc::channel::<()>();
        let handle = thread::spawn(move || {
            let mut dice = self.fork_rng();
            loop {
                match self.poll(store.as_ref(), &mut dice) {
                    Ok(report) if report.moves + report.rolls + report.joined > 0 => {
                        log::debug!(target: "backgammon", "bot poll: {report:?}");
                    }
                    Ok(_) => {}
                    Err(err) => log::warn!(target: "backgammon", "bot poll failed: {err}"),
                }

                match stopped.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => continue,
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            self
        });

        BotRunner { stop, handle }
    }
}
