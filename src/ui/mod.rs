// SPDX-License-Identifier: MPL-2.0
//! Interactive viewer behaviors and their coordinator.
//!
//! The presentation layer follows the Elm-style "state down, messages up"
//! pattern: views bind to the observables exposed by [`state`], and send
//! [`tour::Message`]s back to the [`tour::FocusTour`] that owns them.
//!
//! - [`state`] - Focus point selection, progress timer, zoom, viewport
//! - [`tour`] - Coordinator wiring the three behaviors together

pub mod state;
pub mod tour;
