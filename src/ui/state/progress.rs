// SPDX-License-Identifier: MPL-2.0
//! Auto-advance progress timer
//!
//! This module drives a repeating 100 ms tick that fills a progress
//! percentage toward a configured duration, including:
//! - Completion callback on every full cycle (progress then restarts at 0%)
//! - Pause/resume toggling
//! - Restart and visual reset
//! - Deterministic teardown of the scheduled tick on drop

use super::observable::Observable;
use crate::config::TICK_INTERVAL_MS;
use crate::domain::{ProgressDuration, TimerState};
use crate::scheduler::TickScheduler;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::watch;

/// Callback invoked each time progress reaches 100%.
pub type CompletionCallback = Box<dyn FnMut() + Send + 'static>;

/// Interval between two progress ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(TICK_INTERVAL_MS);

/// Tick-side state. Everything a tick touches lives behind one lock, so
/// ticks are serialized against every timer operation.
struct Cycle {
    /// Milliseconds accumulated in the current cycle.
    elapsed_ms: u64,
    /// Incremented on every start/stop; ticks from older epochs are ignored.
    epoch: u64,
    on_complete: CompletionCallback,
}

struct Shared {
    duration: ProgressDuration,
    cycle: Mutex<Cycle>,
    progress: Observable<f32>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Cycle> {
        self.cycle.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs one tick scheduled during `epoch`.
    fn tick(&self, epoch: u64) {
        let mut cycle = self.lock();
        if cycle.epoch != epoch {
            tracing::trace!(epoch, current = cycle.epoch, "Ignoring stale progress tick");
            return;
        }

        cycle.elapsed_ms = cycle.elapsed_ms.saturating_add(TICK_INTERVAL_MS);
        if cycle.elapsed_ms >= self.duration.as_millis() {
            cycle.elapsed_ms = 0;
            self.progress.set(0.0);
            tracing::debug!("Progress complete");
            (cycle.on_complete)();
        } else {
            let percent = self.duration.percent_at(cycle.elapsed_ms);
            self.progress.set(percent);
            tracing::trace!(percent, "Progress tick");
        }
    }
}

/// Fills a progress percentage over a fixed duration, one tick at a time.
///
/// The timer is either stopped, running, or paused (see [`TimerState`]).
/// Progress is derived from an integer millisecond counter, so completion
/// always happens on tick `ceil(duration / 100 ms)` without cumulative
/// floating-point drift.
pub struct ProgressTimer<S: TickScheduler> {
    scheduler: S,
    handle: Option<S::Handle>,
    shared: Arc<Shared>,
    is_paused: Observable<bool>,
    is_running: Observable<bool>,
}

impl<S: TickScheduler> ProgressTimer<S> {
    /// Creates a stopped timer.
    ///
    /// `on_complete` runs synchronously inside the tick that reaches 100%,
    /// after progress has been reset to 0. It runs while the timer's tick
    /// state is locked, so it must not call back into its own timer (for
    /// example `reset_progress`); send a message instead and act on it later.
    pub fn new(
        duration: ProgressDuration,
        on_complete: impl FnMut() + Send + 'static,
        scheduler: S,
    ) -> Self {
        Self {
            scheduler,
            handle: None,
            shared: Arc::new(Shared {
                duration,
                cycle: Mutex::new(Cycle {
                    elapsed_ms: 0,
                    epoch: 0,
                    on_complete: Box::new(on_complete),
                }),
                progress: Observable::new(0.0),
            }),
            is_paused: Observable::new(false),
            is_running: Observable::new(false),
        }
    }

    /// Starts ticking. An already running tick is cancelled first.
    pub fn start_progress(&mut self) {
        self.cancel_tick();

        let epoch = self.shared.lock().epoch;
        let shared = Arc::clone(&self.shared);
        let handle = self
            .scheduler
            .schedule_repeating(TICK_INTERVAL, Box::new(move || shared.tick(epoch)));

        self.handle = Some(handle);
        self.is_running.set(true);
        tracing::debug!(
            duration_ms = self.shared.duration.as_millis(),
            progress = self.progress(),
            "Progress started"
        );
    }

    /// Cancels the active tick, if any. The paused flag is left untouched.
    pub fn stop_progress(&mut self) {
        if self.cancel_tick() {
            tracing::debug!(progress = self.progress(), "Progress stopped");
        }
    }

    /// Alternates between running and paused.
    pub fn toggle_pause(&mut self) {
        let was_paused = self.is_paused();
        if was_paused {
            self.start_progress();
        } else {
            self.stop_progress();
        }
        self.is_paused.set(!was_paused);
        tracing::debug!(paused = !was_paused, "Progress pause toggled");
    }

    /// Stops, zeroes progress, clears the paused flag, and starts again.
    pub fn restart_progress(&mut self) {
        self.stop_progress();
        self.reset_progress();
        self.is_paused.set(false);
        self.start_progress();
    }

    /// Zeroes progress without touching the run/pause lifecycle.
    pub fn reset_progress(&mut self) {
        self.shared.lock().elapsed_ms = 0;
        self.shared.progress.set(0.0);
    }

    /// Current progress in percent (0–100).
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.shared.progress.get()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.is_paused.get()
    }

    /// Returns true while a tick is scheduled.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    #[must_use]
    pub fn state(&self) -> TimerState {
        TimerState::from_flags(self.is_running(), self.is_paused())
    }

    #[must_use]
    pub fn duration(&self) -> ProgressDuration {
        self.shared.duration
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    #[must_use]
    pub fn subscribe_progress(&self) -> watch::Receiver<f32> {
        self.shared.progress.subscribe()
    }

    #[must_use]
    pub fn subscribe_paused(&self) -> watch::Receiver<bool> {
        self.is_paused.subscribe()
    }

    #[must_use]
    pub fn subscribe_running(&self) -> watch::Receiver<bool> {
        self.is_running.subscribe()
    }

    /// Cancels the scheduled tick and invalidates any tick already in flight.
    /// Returns true if a tick was active.
    fn cancel_tick(&mut self) -> bool {
        self.shared.lock().epoch += 1;
        let Some(handle) = self.handle.take() else {
            return false;
        };
        self.scheduler.cancel(handle);
        self.is_running.set(false);
        true
    }
}

impl<S: TickScheduler> Drop for ProgressTimer<S> {
    fn drop(&mut self) {
        self.cancel_tick();
    }
}

impl<S: TickScheduler> std::fmt::Debug for ProgressTimer<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressTimer")
            .field("duration", &self.shared.duration)
            .field("progress", &self.progress())
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}
