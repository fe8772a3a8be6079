// SPDX-License-Identifier: MPL-2.0
//! Focus point selection
//!
//! Tracks which entry of a fixed, ordered focus point list is current and
//! cycles through it in both directions.

use super::observable::Observable;
use crate::domain::FocusPoint;
use crate::error::{Error, Result};
use std::sync::Arc;
use tokio::sync::watch;

/// Cyclic cursor over a non-empty list of focus points.
///
/// The list is shared with its owner and never changes during the selector's
/// lifetime, so `current_index` is always a valid index into it.
#[derive(Debug)]
pub struct FocusPointSelector {
    points: Arc<[FocusPoint]>,
    current_index: Observable<usize>,
    current_point: Observable<FocusPoint>,
}

impl FocusPointSelector {
    /// Creates a selector positioned on the first focus point.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyFocusPoints`] if `points` is empty.
    pub fn new(points: impl Into<Arc<[FocusPoint]>>) -> Result<Self> {
        let points = points.into();
        let first = *points.first().ok_or(Error::EmptyFocusPoints)?;
        Ok(Self {
            points,
            current_index: Observable::new(0),
            current_point: Observable::new(first),
        })
    }

    /// Selects the focus point at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FocusIndexOutOfRange`] and leaves the selection
    /// unchanged if `index` is not a valid index into the list.
    pub fn set_focus_point(&mut self, index: usize) -> Result<()> {
        if index >= self.points.len() {
            tracing::warn!(index, len = self.points.len(), "Rejected focus point index");
            return Err(Error::FocusIndexOutOfRange {
                index,
                len: self.points.len(),
            });
        }
        self.select(index);
        Ok(())
    }

    /// Advances to the next focus point, wrapping to the first after the last.
    pub fn next_focus_point(&mut self) {
        let next = (self.current_index() + 1) % self.points.len();
        self.select(next);
    }

    /// Goes back to the previous focus point, wrapping to the last from the first.
    pub fn previous_focus_point(&mut self) {
        let len = self.points.len();
        let previous = (self.current_index() + len - 1) % len;
        self.select(previous);
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index.get()
    }

    #[must_use]
    pub fn current_focus_point(&self) -> FocusPoint {
        self.current_point.get()
    }

    /// The shared focus point list.
    #[must_use]
    pub fn points(&self) -> &Arc<[FocusPoint]> {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a selector cannot be built from an empty list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn subscribe_index(&self) -> watch::Receiver<usize> {
        self.current_index.subscribe()
    }

    #[must_use]
    pub fn subscribe_focus_point(&self) -> watch::Receiver<FocusPoint> {
        self.current_point.subscribe()
    }

    fn select(&mut self, index: usize) {
        let point = self.points[index];
        self.current_index.set(index);
        self.current_point.set(point);
        tracing::debug!(index, x = point.x(), y = point.y(), "Focus point selected");
    }
}
