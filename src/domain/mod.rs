// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value objects with no framework dependencies.
//!
//! This module contains pure domain types and business rules. It depends
//! on `std` only, to keep the geometry and timing rules testable in
//! isolation from the reactive and scheduling layers.
//!
//! # Modules
//!
//! - [`focus`]: Focus point coordinates ([`FocusPoint`])
//! - [`progress`]: Progress timer types ([`ProgressDuration`], [`TimerState`])
//! - [`zoom`]: Zoom geometry ([`ZoomTransform`])

pub mod focus;
pub mod progress;
pub mod zoom;

pub use focus::FocusPoint;
pub use progress::{ProgressDuration, TimerState};
pub use zoom::ZoomTransform;
