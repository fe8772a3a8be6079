// SPDX-License-Identifier: MPL-2.0
//! `iced_spotlight` provides the interactive behaviors of a focus-point image
//! viewer: cycling through predefined focus points, an auto-advance progress
//! timer with pause/resume, and a zoom transform that magnifies the image
//! toward the current focus point without revealing anything outside it.
//!
//! The behaviors are independent state modules under [`ui::state`], exposed
//! as observables for a presentation layer to bind to. [`ui::tour`] wires them
//! together, and [`scheduler`] abstracts the host timer facility.

pub mod config;
pub mod domain;
pub mod error;
pub mod scheduler;
pub mod ui;

#[cfg(test)]
mod test_utils;
