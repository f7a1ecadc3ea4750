//! Live sessions: an engine plus its feedback timer.
//!
//! `Session` owns a round engine for as long as the game screen is open.
//! Submitting an answer starts the feedback lock and spawns a timer task
//! that releases it after the engine's delay. The timer only holds a weak
//! reference: once the session is closed the release does nothing.
//!
//! Needs a tokio runtime (any flavor) for the timer task.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use log::debug;
use tokio::sync::Notify;

use crate::core::{Phase, SessionState};
use crate::rules::{AnswerOutcome, GameResult, RoundEngine};

/// A round engine driven by real time.
pub struct Session<E> {
    engine: Arc<Mutex<E>>,
    released: Arc<Notify>,
}

impl<E> std::fmt::Debug for Session<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

fn lock<E>(engine: &Mutex<E>) -> MutexGuard<'_, E> {
    engine.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<E: RoundEngine + Send + 'static> Session<E> {
    #[must_use]
    pub fn new(engine: E) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            released: Arc::new(Notify::new()),
        }
    }

    /// Read the engine.
    pub fn with<R>(&self, f: impl FnOnce(&E) -> R) -> R {
        f(&lock(&self.engine))
    }

    /// Copy of the current session state.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.with(|e| e.state().clone())
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.with(|e| e.state().phase())
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.with(|e| e.is_terminal())
    }

    /// Answer for the active team and schedule the feedback release.
    ///
    /// Returns `None` if the engine rejected the answer (locked or finished);
    /// no timer is started in that case.
    pub fn submit_answer(&self, answer: &str) -> Option<AnswerOutcome> {
        let outcome = lock(&self.engine).submit_answer(answer)?;

        let engine: Weak<Mutex<E>> = Arc::downgrade(&self.engine);
        let released = Arc::clone(&self.released);
        let delay = outcome.lock;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            match engine.upgrade() {
                Some(engine) => {
                    let advance = lock(&engine).release_feedback();
                    debug!("feedback released: {:?}", advance);
                    released.notify_waiters();
                }
                None => debug!("session closed before feedback release"),
            }
        });

        Some(outcome)
    }

    /// Wait until no feedback lock is held.
    pub async fn wait_released(&self) {
        loop {
            let notified = self.released.notified();
            if !matches!(self.phase(), Phase::Feedback(_)) {
                return;
            }
            notified.await;
        }
    }

    /// Tear the session down. Pending timers become no-ops.
    pub fn close(self) {
        debug!("session closed");
    }
}
