// SPDX-License-Identifier: MPL-2.0
//! Virtual-time scheduler.
//!
//! Time only moves when the host calls [`ManualScheduler::advance`]. This is
//! how an iced application drives the progress timer from its own tick
//! subscription, and how tests step through time deterministically.

use super::{effective_interval, TickCallback, TickScheduler};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Handle to a tick registered on a [`ManualScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ManualTick(u64);

struct ScheduledTick {
    interval: Duration,
    next_due: Duration,
    /// Taken out while the callback runs so the clock is never locked
    /// during user code.
    callback: Option<TickCallback>,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    next_id: u64,
    ticks: BTreeMap<u64, ScheduledTick>,
}

impl Clock {
    /// Earliest tick due at or before `deadline`, ties broken by registration order.
    fn next_due(&self, deadline: Duration) -> Option<u64> {
        self.ticks
            .iter()
            .filter(|(_, tick)| tick.callback.is_some() && tick.next_due <= deadline)
            .min_by_key(|(id, tick)| (tick.next_due, **id))
            .map(|(id, _)| *id)
    }
}

/// Scheduler whose clock is advanced explicitly.
///
/// Clones share the same clock, so a host can keep one clone to advance
/// time while the progress timer owns another.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Arc<Mutex<Clock>>,
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let clock = self.lock();
        f.debug_struct("ManualScheduler")
            .field("now", &clock.now)
            .field("active", &clock.ticks.len())
            .finish()
    }
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.lock().now
    }

    /// Number of repeating ticks currently scheduled.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.lock().ticks.len()
    }

    /// Returns true if at least one tick is scheduled.
    #[must_use]
    pub fn has_active(&self) -> bool {
        self.active_count() > 0
    }

    /// Moves the clock forward by `by`, running every tick that falls due in
    /// chronological order. Returns the number of callbacks run.
    pub fn advance(&self, by: Duration) -> usize {
        let deadline = self.lock().now + by;
        let mut fired = 0;

        loop {
            let (id, mut callback) = {
                let mut clock = self.lock();
                let Some(id) = clock.next_due(deadline) else {
                    break;
                };
                let due = clock.ticks[&id].next_due;
                clock.now = due;
                let Some(callback) = clock.ticks.get_mut(&id).and_then(|t| t.callback.take())
                else {
                    break;
                };
                (id, callback)
            };

            callback();
            fired += 1;

            // The tick may have been cancelled from inside its own callback.
            let mut clock = self.lock();
            if let Some(tick) = clock.ticks.get_mut(&id) {
                tick.next_due += tick.interval;
                tick.callback = Some(callback);
            }
        }

        self.lock().now = deadline;
        fired
    }

    fn lock(&self) -> MutexGuard<'_, Clock> {
        self.clock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TickScheduler for ManualScheduler {
    type Handle = ManualTick;

    fn schedule_repeating(&mut self, interval: Duration, tick: TickCallback) -> ManualTick {
        let interval = effective_interval(interval);
        let mut clock = self.lock();
        let id = clock.next_id;
        clock.next_id += 1;
        let next_due = clock.now + interval;
        clock.ticks.insert(
            id,
            ScheduledTick {
                interval,
                next_due,
                callback: Some(tick),
            },
        );
        ManualTick(id)
    }

    fn cancel(&mut self, handle: ManualTick) {
        self.lock().ticks.remove(&handle.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn recording_tick(log: &Arc<Mutex<Vec<&'static str>>>, name: &'static str) -> TickCallback {
        let log = Arc::clone(log);
        Box::new(move || log.lock().unwrap().push(name))
    }

    #[test]
    fn nothing_fires_before_first_interval() {
        let mut scheduler = ManualScheduler::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&counter);
        scheduler.schedule_repeating(
            Duration::from_millis(100),
            Box::new(move || {
                c.fetch_add(1, Ordering::SeqCst);
            }),
        );

        assert_eq!(scheduler.advance(Duration::from_millis(99)), 0);
        assert_eq!(scheduler.advance(Duration::from_millis(1)), 1);
        assert_eq!(scheduler.advance(Duration::from_millis(1_000)), 10);
        assert_eq!(counter.load(Ordering::SeqCst), 11);
        assert_eq!(scheduler.now(), Duration::from_millis(1_100));
    }

    #[test]
    fn ticks_run_in_chronological_order() {
        let mut scheduler = ManualScheduler::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        scheduler.schedule_repeating(Duration::from_millis(30), recording_tick(&log, "slow"));
        scheduler.schedule_repeating(Duration::from_millis(20), recording_tick(&log, "fast"));

        scheduler.advance(Duration::from_millis(60));

        // fast@20, slow@30, fast@40, slow@60 and fast@60 (registration order on ties)
        assert_eq!(
            *log.lock().unwrap(),
            vec!["fast", "slow", "fast", "slow", "fast"]
        );
    }

    #[test]
    fn cancel_removes_tick() {
        let mut scheduler = ManualScheduler::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        let handle = scheduler.schedule_repeating(Duration::from_millis(10), recording_tick(&log, "a"));
        assert!(scheduler.has_active());

        scheduler.cancel(handle);
        scheduler.cancel(handle);

        assert!(!scheduler.has_active());
        assert_eq!(scheduler.advance(Duration::from_millis(100)), 0);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn clones_share_the_clock() {
        let mut owner = ManualScheduler::new();
        let driver = owner.clone();
        let log = Arc::new(Mutex::new(Vec::new()));
        owner.schedule_repeating(Duration::from_millis(50), recording_tick(&log, "tick"));

        assert_eq!(driver.active_count(), 1);
        assert_eq!(driver.advance(Duration::from_millis(100)), 2);
        assert_eq!(owner.now(), Duration::from_millis(100));
    }

    #[test]
    fn tick_cancelled_from_inside_callback_is_not_rescheduled() {
        let scheduler = ManualScheduler::new();
        let handle_slot: Arc<Mutex<Option<ManualTick>>> = Arc::new(Mutex::new(None));

        let mut canceller = scheduler.clone();
        let slot = Arc::clone(&handle_slot);
        let handle = scheduler.clone().schedule_repeating(
            Duration::from_millis(10),
            Box::new(move || {
                if let Some(handle) = slot.lock().unwrap().take() {
                    canceller.cancel(handle);
                }
            }),
        );
        *handle_slot.lock().unwrap() = Some(handle);

        assert_eq!(scheduler.advance(Duration::from_millis(100)), 1);
        assert!(!scheduler.has_active());
    }
}
