// SPDX-License-Identifier: MPL-2.0
//! Focus point value object.

/// Valid range of a focus point coordinate, in percent of the container.
pub mod focus_bounds {
    /// Left/top edge of the container.
    pub const MIN_PERCENT: f32 = 0.0;
    /// Right/bottom edge of the container.
    pub const MAX_PERCENT: f32 = 100.0;
    /// Center of the container.
    pub const CENTER_PERCENT: f32 = 50.0;
}

/// A location on an image, expressed as percentages of the container size.
///
/// `x` is a percentage of the container width and `y` a percentage of its
/// height. Both are guaranteed to be within 0–100.
///
/// # Example
///
/// ```
/// use iced_spotlight::domain::FocusPoint;
///
/// let point = FocusPoint::new(25.0, 140.0);
/// assert_eq!(point.x(), 25.0);
/// assert_eq!(point.y(), 100.0); // Clamped to the bottom edge
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusPoint {
    x: f32,
    y: f32,
}

impl FocusPoint {
    /// The center of the container.
    pub const CENTER: Self = Self {
        x: focus_bounds::CENTER_PERCENT,
        y: focus_bounds::CENTER_PERCENT,
    };

    /// Creates a new focus point, clamping both coordinates to 0–100.
    ///
    /// A NaN coordinate is treated as the container center.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: clamp_percent(x),
            y: clamp_percent(y),
        }
    }

    /// Horizontal position in percent of the container width.
    #[must_use]
    pub fn x(self) -> f32 {
        self.x
    }

    /// Vertical position in percent of the container height.
    #[must_use]
    pub fn y(self) -> f32 {
        self.y
    }

    /// Converts to pixel coordinates inside a container of the given size.
    #[must_use]
    pub fn to_pixels(self, width: f32, height: f32) -> (f32, f32) {
        (self.x / 100.0 * width, self.y / 100.0 * height)
    }
}

impl Default for FocusPoint {
    fn default() -> Self {
        Self::CENTER
    }
}

fn clamp_percent(value: f32) -> f32 {
    if value.is_nan() {
        focus_bounds::CENTER_PERCENT
    } else {
        value.clamp(focus_bounds::MIN_PERCENT, focus_bounds::MAX_PERCENT)
    }
}
