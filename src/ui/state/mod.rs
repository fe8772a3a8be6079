// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the three interactive behaviors of the viewer,
//! each owning a narrow slice of state and exposing it as observables for
//! the presentation layer to bind to.

pub mod focus;
pub mod observable;
pub mod progress;
pub mod viewport;
pub mod zoom;

// Re-export commonly used types for convenience
pub use focus::FocusPointSelector;
pub use observable::Observable;
pub use progress::{ProgressTimer, TICK_INTERVAL};
pub use viewport::{Container, Viewport, ViewportHandle};
pub use zoom::ZoomController;
