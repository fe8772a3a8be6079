// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! The zoom controller never caches container dimensions: it asks a
//! [`Container`] for its bounding box every time it computes a transform.
//! A [`Viewport`] is the host side of that query. The layout layer publishes
//! the measured size into it, and hands out [`ViewportHandle`]s that resolve
//! to the latest size, or to nothing while the container is not attached.

use crate::config::SIGNIFICANT_RESIZE_THRESHOLD_PX;
use iced::Size;
use tokio::sync::watch;

/// Something whose pixel size can be queried at call time.
pub trait Container {
    /// Current size, or `None` if the container is not attached or not visible.
    fn size(&self) -> Option<Size>;
}

/// A fixed size, always resolved. `None` models a container that never attaches.
impl Container for Option<Size> {
    fn size(&self) -> Option<Size> {
        *self
    }
}

impl Container for Size {
    fn size(&self) -> Option<Size> {
        Some(*self)
    }
}

/// Publishes the measured size of the image container.
#[derive(Debug)]
pub struct Viewport {
    bounds: watch::Sender<Option<Size>>,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// Creates a viewport that is not attached yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bounds: watch::Sender::new(None),
        }
    }

    /// Creates a viewport already attached with the given size.
    #[must_use]
    pub fn attached(size: Size) -> Self {
        Self {
            bounds: watch::Sender::new(Some(size)),
        }
    }

    /// Publishes a new container size.
    ///
    /// Returns true if the size changed significantly (or the container was
    /// not attached before), i.e. if dependent transforms must be recomputed.
    pub fn update(&self, size: Size) -> bool {
        let previous = self.bounds.send_replace(Some(size));
        let changed = match previous {
            Some(prev) => {
                (prev.width - size.width).abs() >= SIGNIFICANT_RESIZE_THRESHOLD_PX
                    || (prev.height - size.height).abs() >= SIGNIFICANT_RESIZE_THRESHOLD_PX
            }
            None => true,
        };
        if changed {
            tracing::debug!(width = size.width, height = size.height, "Viewport resized");
        }
        changed
    }

    /// Marks the container as detached (e.g. unmounted or hidden).
    pub fn detach(&self) {
        self.bounds.send_replace(None);
    }

    /// Returns the last published size.
    #[must_use]
    pub fn bounds(&self) -> Option<Size> {
        *self.bounds.borrow()
    }

    /// Returns a resolvable reference to this container.
    #[must_use]
    pub fn handle(&self) -> ViewportHandle {
        ViewportHandle(self.bounds.subscribe())
    }
}

/// Resolvable reference to a [`Viewport`].
///
/// Resolves to `None` once the viewport has been dropped.
#[derive(Debug, Clone)]
pub struct ViewportHandle(watch::Receiver<Option<Size>>);

impl Container for ViewportHandle {
    fn size(&self) -> Option<Size> {
        if self.0.has_changed().is_err() {
            return None;
        }
        *self.0.borrow()
    }
}
