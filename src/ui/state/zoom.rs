// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! This module handles the focus zoom of the image, including:
//! - Zooming toward a focus point at a fixed factor
//! - Clamping the translation so no area outside the image is revealed
//! - Resetting to the identity transform

use super::observable::Observable;
use super::viewport::Container;
use crate::config::ZOOM_FACTOR;
use crate::domain::{FocusPoint, ZoomTransform};
use iced::Vector;
use tokio::sync::watch;

/// Manages the zoom transform of the image inside its container.
///
/// Invariants: `is_zoomed_in == (scale != 1)`, and each translation axis
/// stays within `±size * (scale - 1) / 2` of the container size used for
/// the last zoom.
#[derive(Debug)]
pub struct ZoomController<C> {
    container: C,
    translate: Observable<Vector>,
    scale: Observable<f32>,
    is_zoomed_in: Observable<bool>,
}

impl<C: Container> ZoomController<C> {
    /// Creates an unzoomed controller for the given container.
    pub fn new(container: C) -> Self {
        Self {
            container,
            translate: Observable::new(Vector::new(0.0, 0.0)),
            scale: Observable::new(ZoomTransform::IDENTITY.scale),
            is_zoomed_in: Observable::new(false),
        }
    }

    /// Magnifies the image 2× toward `point`.
    ///
    /// The container size is queried now. If the container cannot be
    /// resolved, nothing changes and `false` is returned.
    pub fn zoom_to_focus_point(&mut self, point: FocusPoint) -> bool {
        let Some(size) = self.container.size() else {
            tracing::debug!("Zoom skipped: container not attached");
            return false;
        };
        let Some(transform) =
            ZoomTransform::focused_on(point, size.width, size.height, ZOOM_FACTOR)
        else {
            tracing::debug!(
                width = size.width,
                height = size.height,
                "Zoom skipped: invalid container size"
            );
            return false;
        };

        self.apply(transform);
        tracing::debug!(
            x = point.x(),
            y = point.y(),
            translate_x = transform.translate_x,
            translate_y = transform.translate_y,
            "Zoomed to focus point"
        );
        true
    }

    /// Returns to the identity transform. Always succeeds.
    pub fn reset_zoom(&mut self) {
        self.apply(ZoomTransform::IDENTITY);
    }

    #[must_use]
    pub fn translate(&self) -> Vector {
        self.translate.get()
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale.get()
    }

    #[must_use]
    pub fn is_zoomed_in(&self) -> bool {
        self.is_zoomed_in.get()
    }

    /// Snapshot of the current transform.
    #[must_use]
    pub fn transform(&self) -> ZoomTransform {
        let translate = self.translate();
        ZoomTransform {
            translate_x: translate.x,
            translate_y: translate.y,
            scale: self.scale(),
        }
    }

    #[must_use]
    pub fn container(&self) -> &C {
        &self.container
    }

    #[must_use]
    pub fn subscribe_translate(&self) -> watch::Receiver<Vector> {
        self.translate.subscribe()
    }

    #[must_use]
    pub fn subscribe_scale(&self) -> watch::Receiver<f32> {
        self.scale.subscribe()
    }

    #[must_use]
    pub fn subscribe_zoomed_in(&self) -> watch::Receiver<bool> {
        self.is_zoomed_in.subscribe()
    }

    fn apply(&mut self, transform: ZoomTransform) {
        self.translate
            .set(Vector::new(transform.translate_x, transform.translate_y));
        self.scale.set(transform.scale);
        self.is_zoomed_in.set(transform.is_zoomed_in());
    }
}
