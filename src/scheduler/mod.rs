// SPDX-License-Identifier: MPL-2.0
//! Host timer facility.
//!
//! The progress timer never talks to a clock directly. It asks a
//! [`TickScheduler`] to run a callback at a fixed interval and keeps the
//! returned handle to cancel it later. Two schedulers are provided:
//!
//! - [`TokioScheduler`]: real time, one tokio task per repeating tick
//! - [`ManualScheduler`]: virtual time advanced explicitly by the host
//!   (iced tick subscriptions, tests, benchmarks)

mod manual;
mod realtime;

pub use self::manual::{ManualScheduler, ManualTick};
pub use self::realtime::{TokioScheduler, TokioTick};

use std::time::Duration;

/// Callback run on every tick.
pub type TickCallback = Box<dyn FnMut() + Send + 'static>;

/// Shortest interval a scheduler accepts; shorter requests are raised to it.
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Schedules repeating callbacks and cancels them through their handle.
pub trait TickScheduler {
    /// Token identifying one scheduled repeating callback.
    type Handle;

    /// Runs `tick` every `interval`, starting one interval from now.
    fn schedule_repeating(&mut self, interval: Duration, tick: TickCallback) -> Self::Handle;

    /// Stops the callback identified by `handle`. Cancelling twice is harmless.
    fn cancel(&mut self, handle: Self::Handle);
}

pub(crate) fn effective_interval(interval: Duration) -> Duration {
    interval.max(MIN_TICK_INTERVAL)
}
