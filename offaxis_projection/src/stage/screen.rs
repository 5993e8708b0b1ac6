/// Screen surface description.
///
/// A Screen is the rectangular projection surface (LED wall, monitor,
/// projection wall) the off-axis frustum is built against. It is defined
/// by its bottom-left and top-right corner positions in stage space.

use glam::Vec3;

use crate::error::{Error, Result};

/// Rectangular screen surface defined by two corner positions.
///
/// Coordinates are in stage space: x right, y up, z from the viewer
/// toward the screen. Both corners are expected to lie at the same z
/// (the screen plane is perpendicular to the viewing axis); rotated
/// screens are not supported. Use [`Screen::depth_skew`] to detect a
/// z mismatch between the corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Screen {
    /// Bottom-left corner position
    pub bottom_left: Vec3,
    /// Top-right corner position
    pub top_right: Vec3,
}

impl Screen {
    /// Create a screen from its two corner positions.
    pub fn new(bottom_left: Vec3, top_right: Vec3) -> Self {
        Self {
            bottom_left,
            top_right,
        }
    }

    /// Horizontal extent of the screen.
    pub fn width(&self) -> f32 {
        self.top_right.x - self.bottom_left.x
    }

    /// Vertical extent of the screen.
    pub fn height(&self) -> f32 {
        self.top_right.y - self.bottom_left.y
    }

    /// Midpoint between the two corners.
    pub fn center(&self) -> Vec3 {
        (self.bottom_left + self.top_right) * 0.5
    }

    /// Difference in z between the two corners.
    ///
    /// Zero for a properly axis-aligned screen. A non-zero value means
    /// the corner markers do not lie on a plane perpendicular to the
    /// viewing axis; the projection then assumes the bottom-left
    /// corner's plane.
    pub fn depth_skew(&self) -> f32 {
        self.top_right.z - self.bottom_left.z
    }

    /// Validate the screen geometry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateGeometry`] if a corner position is
    /// not finite, or if the top-right corner does not lie strictly
    /// above and to the right of the bottom-left corner.
    pub fn validate(&self) -> Result<()> {
        if !self.bottom_left.is_finite() || !self.top_right.is_finite() {
            return Err(Error::DegenerateGeometry(format!(
                "screen corners must be finite positions (bottom_left {}, top_right {})",
                self.bottom_left, self.top_right
            )));
        }

        if self.width() <= 0.0 {
            return Err(Error::DegenerateGeometry(format!(
                "screen has no horizontal extent: top_right.x ({}) must exceed bottom_left.x ({})",
                self.top_right.x, self.bottom_left.x
            )));
        }

        if self.height() <= 0.0 {
            return Err(Error::DegenerateGeometry(format!(
                "screen has no vertical extent: top_right.y ({}) must exceed bottom_left.y ({})",
                self.top_right.y, self.bottom_left.y
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "screen_tests.rs"]
mod tests;
