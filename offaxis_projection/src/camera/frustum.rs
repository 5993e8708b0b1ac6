/// FrustumBounds: the six extents of an asymmetric view frustum.
///
/// Extents are measured on the near plane, relative to the viewpoint:
/// left/right along x, bottom/top along y, near/far along the viewing
/// axis. For an on-axis camera left == -right and bottom == -top; a
/// tracked viewpoint in front of a fixed screen generally yields
/// asymmetric extents.
///
/// The caller is responsible for supplying sensible extents.
/// `from_screen()` derives them from a screen and a viewpoint, but the
/// bounds may be filled in by other means.

use glam::{Mat4, Vec3, Vec4};

use crate::error::{Error, Result};
use crate::stage::Screen;

/// Six extents of an asymmetric (off-axis) view frustum.
///
/// Stage space: x right, y up, z from the viewpoint toward the screen.
/// The produced matrix follows OpenGL clip conventions (eye space looks
/// down -z, clip z covers [-1, 1]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumBounds {
    /// Left edge of the near plane, relative to the viewpoint
    pub left: f32,
    /// Right edge of the near plane, relative to the viewpoint
    pub right: f32,
    /// Bottom edge of the near plane, relative to the viewpoint
    pub bottom: f32,
    /// Top edge of the near plane, relative to the viewpoint
    pub top: f32,
    /// Distance from the viewpoint to the near plane (the screen plane)
    pub near: f32,
    /// Distance from the viewpoint to the far plane
    pub far: f32,
}

impl FrustumBounds {
    /// Derive frustum bounds from a viewpoint and a screen.
    ///
    /// Offsets both screen corners against the viewpoint: the x/y
    /// offsets become the lateral extents, and the bottom-left corner's
    /// z offset becomes the near distance (the screen plane itself).
    /// `far_clip` closes the frustum behind the screen.
    ///
    /// Unchecked: call [`FrustumBounds::validate`] before building a
    /// matrix from bounds that may be degenerate.
    pub fn from_screen(viewpoint: Vec3, screen: &Screen, far_clip: f32) -> Self {
        let to_bottom_left = screen.bottom_left - viewpoint;
        let to_top_right = screen.top_right - viewpoint;

        Self {
            left: to_bottom_left.x,
            right: to_top_right.x,
            bottom: to_bottom_left.y,
            top: to_top_right.y,
            near: to_bottom_left.z,
            far: far_clip,
        }
    }

    /// Width of the near plane (right - left).
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Height of the near plane (top - bottom).
    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    /// Validate the bounds against division-by-zero and sign errors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateGeometry`] if the width or height is
    /// not strictly positive, the near plane is not strictly in front
    /// of the viewpoint, the far plane does not lie beyond the near
    /// plane, or any of those quantities is not finite.
    pub fn validate(&self) -> Result<()> {
        let width = self.width();
        if width <= 0.0 || !width.is_finite() {
            return Err(Error::DegenerateGeometry(format!(
                "frustum width must be positive and finite, got {} (left {}, right {})",
                width, self.left, self.right
            )));
        }

        let height = self.height();
        if height <= 0.0 || !height.is_finite() {
            return Err(Error::DegenerateGeometry(format!(
                "frustum height must be positive and finite, got {} (bottom {}, top {})",
                height, self.bottom, self.top
            )));
        }

        if self.near <= 0.0 || !self.near.is_finite() {
            return Err(Error::DegenerateGeometry(format!(
                "near plane must lie strictly in front of the viewpoint, got near {}",
                self.near
            )));
        }

        if self.far <= self.near || !self.far.is_finite() {
            return Err(Error::DegenerateGeometry(format!(
                "far plane must lie beyond the near plane, got near {} and far {}",
                self.near, self.far
            )));
        }

        Ok(())
    }

    /// Build the asymmetric perspective projection matrix.
    ///
    /// Standard OpenGL frustum formulation, see
    /// <http://www.songho.ca/opengl/gl_projectionmatrix.html>:
    ///
    /// ```text
    /// | 2n/(r-l)      0       (r+l)/(r-l)       0      |
    /// |    0       2n/(t-b)   (t+b)/(t-b)       0      |
    /// |    0          0      -(f+n)/(f-n)  -2fn/(f-n)  |
    /// |    0          0           -1            0      |
    /// ```
    ///
    /// The third-column x/y terms skew the frustum off axis; they
    /// vanish when the bounds are symmetric.
    ///
    /// Unchecked: degenerate bounds (zero width or height, far == near)
    /// put NaN or infinite entries into the matrix. Call
    /// [`FrustumBounds::validate`] first, or use
    /// [`crate::camera::OffAxisProjection::compute`], which rejects them.
    pub fn projection_matrix(&self) -> Mat4 {
        let (l, r) = (self.left, self.right);
        let (b, t) = (self.bottom, self.top);
        let (n, f) = (self.near, self.far);

        // Column-major: each Vec4 is one column
        Mat4::from_cols(
            Vec4::new(2.0 * n / (r - l), 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 * n / (t - b), 0.0, 0.0),
            Vec4::new(
                (r + l) / (r - l),
                (t + b) / (t - b),
                -(f + n) / (f - n),
                -1.0,
            ),
            Vec4::new(0.0, 0.0, -2.0 * f * n / (f - n), 0.0),
        )
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
