/// OffAxisProjection: result of one off-axis projection computation.
///
/// Created by `OffAxisProjection::compute()`. Contains the projection
/// matrix and the frustum bounds it was built from.
///
/// Ephemeral: recomputed every frame from the current stage positions.
/// No Arc, no Mutex.

use glam::{Mat4, Vec3};

use crate::error::Result;
use crate::stage::Screen;
use super::frustum::FrustumBounds;
use super::target::ProjectionTarget;

/// Result of an off-axis projection computation. Ephemeral, valid for
/// the stage positions it was computed from.
///
/// Created exclusively by `OffAxisProjection::compute()`, which
/// validates the geometry first; a value of this type always holds a
/// finite matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffAxisProjection {
    matrix: Mat4,
    bounds: FrustumBounds,
}

impl OffAxisProjection {
    /// Compute the off-axis projection for the given stage positions.
    ///
    /// Derives the frustum bounds from the viewpoint and the screen
    /// corners (see [`FrustumBounds::from_screen`]), validates them,
    /// and builds the asymmetric projection matrix. The derived near
    /// clip is the perpendicular distance from the viewpoint to the
    /// screen plane.
    ///
    /// # Errors
    ///
    /// Returns [`crate::offaxis::Error::DegenerateGeometry`] if the
    /// screen has no extent, the viewpoint does not lie strictly in
    /// front of the screen plane, or `far_clip` does not lie beyond
    /// the derived near clip.
    ///
    /// # Example
    ///
    /// ```
    /// use offaxis_projection::glam::Vec3;
    /// use offaxis_projection::offaxis::camera::OffAxisProjection;
    /// use offaxis_projection::offaxis::stage::Screen;
    ///
    /// let screen = Screen::new(Vec3::new(-1.0, -1.0, 5.0), Vec3::new(1.0, 1.0, 5.0));
    /// let projection = OffAxisProjection::compute(Vec3::ZERO, &screen, 100.0)?;
    ///
    /// assert_eq!(projection.near_clip(), 5.0);
    /// # Ok::<(), offaxis_projection::offaxis::Error>(())
    /// ```
    pub fn compute(viewpoint: Vec3, screen: &Screen, far_clip: f32) -> Result<Self> {
        screen.validate()?;

        let bounds = FrustumBounds::from_screen(viewpoint, screen, far_clip);
        bounds.validate()?;

        Ok(Self {
            matrix: bounds.projection_matrix(),
            bounds,
        })
    }

    /// The asymmetric projection matrix (OpenGL clip conventions).
    pub fn matrix(&self) -> &Mat4 {
        &self.matrix
    }

    /// Derived near clip: distance from the viewpoint to the screen plane.
    pub fn near_clip(&self) -> f32 {
        self.bounds.near
    }

    /// Frustum bounds the matrix was built from.
    pub fn bounds(&self) -> &FrustumBounds {
        &self.bounds
    }

    /// Hand the matrix and derived near clip to a projection target.
    pub fn apply_to(&self, target: &mut dyn ProjectionTarget) {
        target.apply_projection(self.matrix, self.bounds.near);
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
