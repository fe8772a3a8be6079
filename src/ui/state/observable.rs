// SPDX-License-Identifier: MPL-2.0
//! Observable state cells.
//!
//! Every piece of component state a view binds to is stored in an
//! [`Observable`], a thin wrapper around a [`tokio::sync::watch`] channel.
//! Views either read the current value with [`Observable::get`] or hold a
//! [`watch::Receiver`] from [`Observable::subscribe`] and react to changes.

use tokio::sync::watch;

/// A value that notifies subscribers whenever it changes.
#[derive(Debug)]
pub struct Observable<T> {
    sender: watch::Sender<T>,
}

impl<T: Clone + PartialEq> Observable<T> {
    /// Creates a new observable holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            sender: watch::Sender::new(value),
        }
    }

    /// Returns a copy of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.sender.borrow().clone()
    }

    /// Replaces the current value.
    ///
    /// Subscribers are only notified if the value actually changed.
    /// Returns true if it did.
    pub fn set(&self, value: T) -> bool {
        self.sender.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        })
    }

    /// Returns a receiver that observes every subsequent change.
    ///
    /// The receiver starts with the current value marked as seen.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.sender.subscribe()
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl<T: Clone + PartialEq + Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
