// SPDX-License-Identifier: MPL-2.0
//! Focus zoom geometry.
//!
//! Pure computation of the translation and scale that magnify a container
//! toward a focus point without exposing anything outside its bounds.

use super::focus::FocusPoint;

/// Translation (in pixels) and scale applied to the zoomed image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomTransform {
    /// Horizontal offset in pixels.
    pub translate_x: f32,
    /// Vertical offset in pixels.
    pub translate_y: f32,
    /// Magnification (1.0 = identity).
    pub scale: f32,
}

impl ZoomTransform {
    /// No translation, no magnification.
    pub const IDENTITY: Self = Self {
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    /// Computes the transform that centers `point` under `factor` magnification
    /// inside a `width` × `height` container.
    ///
    /// The translation is clamped per axis to `±size * (factor - 1) / 2`, so the
    /// magnified image always covers the whole container.
    ///
    /// Returns `None` when the container size is negative or not finite.
    #[must_use]
    pub fn focused_on(point: FocusPoint, width: f32, height: f32, factor: f32) -> Option<Self> {
        if !is_valid_extent(width) || !is_valid_extent(height) || !factor.is_finite() {
            return None;
        }

        let (focus_x, focus_y) = point.to_pixels(width, height);
        let overflow = factor - 1.0;

        let max_x = max_translation(width, factor);
        let max_y = max_translation(height, factor);

        let translate_x = -((focus_x - width / 2.0) * overflow);
        let translate_y = -((focus_y - height / 2.0) * overflow);

        Some(Self {
            translate_x: translate_x.clamp(-max_x, max_x),
            translate_y: translate_y.clamp(-max_y, max_y),
            scale: factor,
        })
    }

    /// Returns true if this transform magnifies the image.
    #[must_use]
    pub fn is_zoomed_in(self) -> bool {
        (self.scale - 1.0).abs() > f32::EPSILON
    }
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Largest translation magnitude along one axis of length `extent`.
#[must_use]
pub fn max_translation(extent: f32, factor: f32) -> f32 {
    (extent * (factor - 1.0) / 2.0).abs()
}

fn is_valid_extent(extent: f32) -> bool {
    extent.is_finite() && extent >= 0.0
}
