// SPDX-License-Identifier: MPL-2.0
//! Real-time scheduler backed by tokio tasks.

use super::{effective_interval, TickCallback, TickScheduler};
use crate::error::Result;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Runs each repeating tick in its own task on a tokio runtime.
///
/// Ticks of one task are strictly sequential: the next interval is only
/// awaited after the callback returned. A slow callback delays later ticks
/// instead of bunching them up.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    runtime: Handle,
}

/// Handle to a tick task. Cancelling aborts the task.
#[derive(Debug)]
pub struct TokioTick(JoinHandle<()>);

impl TokioTick {
    /// Returns true once the task has stopped running.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.0.is_finished()
    }
}

impl TokioScheduler {
    /// Creates a scheduler spawning on the given runtime.
    #[must_use]
    pub fn new(runtime: Handle) -> Self {
        Self { runtime }
    }

    /// Creates a scheduler spawning on the runtime of the calling context.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Runtime`](crate::error::Error::Runtime) when called
    /// outside a tokio runtime.
    pub fn current() -> Result<Self> {
        Ok(Self::new(Handle::try_current()?))
    }
}

impl TickScheduler for TokioScheduler {
    type Handle = TokioTick;

    fn schedule_repeating(&mut self, interval: Duration, mut tick: TickCallback) -> TokioTick {
        let period = effective_interval(interval);
        let task = self.runtime.spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                tick();
            }
        });
        TokioTick(task)
    }

    fn cancel(&mut self, handle: TokioTick) {
        handle.0.abort();
    }
}
