// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Progress**: Auto-advance tick cadence and duration bounds
//! - **Zoom**: Focus zoom factor
//! - **Viewport**: Container resize handling

// ==========================================================================
// Progress Defaults
// ==========================================================================

/// Fixed cadence of the progress tick (in milliseconds).
pub const TICK_INTERVAL_MS: u64 = 100;

/// Default time to go from 0% to 100% progress (in milliseconds).
pub const DEFAULT_PROGRESS_DURATION_MS: u64 = 5_000;

/// Minimum progress duration (one tick).
pub const MIN_PROGRESS_DURATION_MS: u64 = TICK_INTERVAL_MS;

/// Whether a tour starts its progress timer as soon as it is launched.
pub const DEFAULT_AUTO_START: bool = true;

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Magnification applied when zooming into a focus point (1.0 = identity).
pub const ZOOM_FACTOR: f32 = 2.0;

// ==========================================================================
// Viewport Defaults
// ==========================================================================

/// Minimum container size change (in pixels) reported as a layout change.
pub const SIGNIFICANT_RESIZE_THRESHOLD_PX: f32 = 1.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Progress validation
    assert!(TICK_INTERVAL_MS > 0);
    assert!(MIN_PROGRESS_DURATION_MS > 0);
    assert!(DEFAULT_PROGRESS_DURATION_MS >= MIN_PROGRESS_DURATION_MS);

    // Zoom validation
    assert!(ZOOM_FACTOR > 1.0);

    // Viewport validation
    assert!(SIGNIFICANT_RESIZE_THRESHOLD_PX >= 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_defaults_are_valid() {
        assert_eq!(TICK_INTERVAL_MS, 100);
        assert_eq!(DEFAULT_PROGRESS_DURATION_MS % TICK_INTERVAL_MS, 0);
        assert!(DEFAULT_PROGRESS_DURATION_MS >= MIN_PROGRESS_DURATION_MS);
    }

    #[test]
    fn zoom_factor_is_double() {
        assert_eq!(ZOOM_FACTOR, 2.0);
    }
}
