// SPDX-License-Identifier: MPL-2.0
//! Progress timer value objects.
//!
//! This module defines the auto-advance duration newtype and the run/pause
//! state machine of the progress timer.

use crate::config::defaults::{
    DEFAULT_PROGRESS_DURATION_MS, MIN_PROGRESS_DURATION_MS, TICK_INTERVAL_MS,
};
use std::time::Duration;

// =============================================================================
// ProgressDuration
// =============================================================================

/// Time needed for progress to go from 0% to 100%.
///
/// This newtype enforces validity at the type level: the value is never
/// shorter than one tick (100 ms), so progress is always finite and a
/// cycle completes after at least one tick. Longer durations are kept as
/// configured.
///
/// # Example
///
/// ```
/// use iced_spotlight::domain::ProgressDuration;
///
/// let duration = ProgressDuration::from_millis(1_000);
/// assert_eq!(duration.ticks_to_complete(), 10);
///
/// // Values shorter than one tick are raised to one tick
/// assert_eq!(ProgressDuration::from_millis(0).as_millis(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProgressDuration(u64);

impl ProgressDuration {
    /// Creates a duration from milliseconds, raising it to one tick if shorter.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        if millis < MIN_PROGRESS_DURATION_MS {
            tracing::warn!(
                requested = millis,
                effective = MIN_PROGRESS_DURATION_MS,
                "Progress duration clamped"
            );
            return Self(MIN_PROGRESS_DURATION_MS);
        }
        Self(millis)
    }

    /// Creates a duration from a [`Duration`], raising it to one tick if shorter.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self::from_millis(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }

    /// Returns the duration in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the duration as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Number of ticks after which progress reaches 100%.
    #[must_use]
    pub fn ticks_to_complete(self) -> u64 {
        self.0.div_ceil(TICK_INTERVAL_MS)
    }

    /// Converts elapsed milliseconds into a progress percentage (0–100).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent_at(self, elapsed_ms: u64) -> f32 {
        (elapsed_ms.min(self.0) as f32 / self.0 as f32) * 100.0
    }
}

impl Default for ProgressDuration {
    fn default() -> Self {
        Self(DEFAULT_PROGRESS_DURATION_MS)
    }
}

// =============================================================================
// TimerState
// =============================================================================

/// Lifecycle of the progress timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerState {
    /// No tick is scheduled.
    #[default]
    Stopped,
    /// Ticks are advancing progress.
    Running,
    /// No tick is scheduled and progress is retained until resumed.
    Paused,
}

impl TimerState {
    /// Derives the state from the two flags owned by the timer.
    #[must_use]
    pub fn from_flags(has_active_tick: bool, is_paused: bool) -> Self {
        match (has_active_tick, is_paused) {
            (true, _) => Self::Running,
            (false, true) => Self::Paused,
            (false, false) => Self::Stopped,
        }
    }

    /// Returns true if progress is currently advancing.
    #[must_use]
    pub fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    /// Returns true if the timer is paused.
    #[must_use]
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }

    /// Returns true if the timer is stopped.
    #[must_use]
    pub fn is_stopped(self) -> bool {
        matches!(self, Self::Stopped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_shorter_than_a_tick_is_raised_to_one_tick() {
        assert_eq!(
            ProgressDuration::from_millis(0).as_millis(),
            MIN_PROGRESS_DURATION_MS
        );
        assert_eq!(
            ProgressDuration::from_millis(1).as_millis(),
            MIN_PROGRESS_DURATION_MS
        );
        assert_eq!(ProgressDuration::from_millis(2_500).as_millis(), 2_500);
    }

    #[test]
    fn long_durations_are_kept() {
        assert_eq!(ProgressDuration::from_millis(900_000).as_millis(), 900_000);
        assert_eq!(ProgressDuration::from_millis(900_000).ticks_to_complete(), 9_000);
        assert_eq!(ProgressDuration::from_millis(u64::MAX).as_millis(), u64::MAX);
        assert_eq!(
            ProgressDuration::new(Duration::from_secs(3_600)).as_millis(),
            3_600_000
        );
    }

    #[test]
    fn duration_from_std_duration() {
        let duration = ProgressDuration::new(Duration::from_secs(3));
        assert_eq!(duration.as_millis(), 3_000);
        assert_eq!(duration.as_duration(), Duration::from_secs(3));
    }

    #[test]
    fn default_duration_is_expected_value() {
        assert_eq!(
            ProgressDuration::default().as_millis(),
            DEFAULT_PROGRESS_DURATION_MS
        );
    }

    #[test]
    fn ticks_to_complete_rounds_up() {
        assert_eq!(ProgressDuration::from_millis(1_000).ticks_to_complete(), 10);
        assert_eq!(ProgressDuration::from_millis(250).ticks_to_complete(), 3);
        assert_eq!(ProgressDuration::from_millis(100).ticks_to_complete(), 1);
    }

    #[test]
    fn percent_at_is_bounded() {
        let duration = ProgressDuration::from_millis(1_000);
        assert!((duration.percent_at(0)).abs() < f32::EPSILON);
        assert!((duration.percent_at(500) - 50.0).abs() < 1e-4);
        assert!((duration.percent_at(5_000) - 100.0).abs() < 1e-4);
    }

    #[test]
    fn timer_state_from_flags() {
        assert_eq!(TimerState::from_flags(true, false), TimerState::Running);
        assert_eq!(TimerState::from_flags(true, true), TimerState::Running);
        assert_eq!(TimerState::from_flags(false, true), TimerState::Paused);
        assert_eq!(TimerState::from_flags(false, false), TimerState::Stopped);
    }

    #[test]
    fn timer_state_checks() {
        assert_eq!(TimerState::default(), TimerState::Stopped);
        assert!(TimerState::Running.is_running());
        assert!(TimerState::Paused.is_paused());
        assert!(TimerState::Stopped.is_stopped());
        assert!(!TimerState::Paused.is_running());
    }
}
