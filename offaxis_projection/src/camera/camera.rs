/// Camera: low-level passive data container.
///
/// The Camera computes nothing. The caller (or a ProjectionRig) is
/// responsible for computing and setting the projection matrix and the
/// derived near clip; the camera only stores them.
///
/// The library does NOT store or manage cameras. They are tools
/// provided by the library, owned and driven by the caller.

use glam::Mat4;

use super::target::ProjectionTarget;

/// Low-level camera. A passive data container, computes nothing.
///
/// Holds the projection matrix and the clip planes. The far clip is
/// caller configuration (how deep the frustum reaches); the near clip
/// is an output of the off-axis computation (the distance from the
/// viewpoint to the screen plane) and is overwritten on every update.
#[derive(Debug, Clone)]
pub struct Camera {
    projection_matrix: Mat4,
    near_clip: f32,
    far_clip: f32,
}

impl Camera {
    /// Near clip before the first projection update
    pub const DEFAULT_NEAR_CLIP: f32 = 0.1;
    /// Far clip used by `Camera::default()`
    pub const DEFAULT_FAR_CLIP: f32 = 1000.0;

    /// Create a camera with the given far clip distance.
    ///
    /// The projection matrix starts as identity and the near clip at
    /// [`Camera::DEFAULT_NEAR_CLIP`]; both are replaced by the first
    /// projection update.
    pub fn new(far_clip: f32) -> Self {
        Self {
            projection_matrix: Mat4::IDENTITY,
            near_clip: Self::DEFAULT_NEAR_CLIP,
            far_clip,
        }
    }

    // ===== GETTERS =====

    /// Projection matrix (OpenGL clip conventions).
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Near clip distance.
    pub fn near_clip(&self) -> f32 {
        self.near_clip
    }

    /// Far clip distance.
    pub fn far_clip(&self) -> f32 {
        self.far_clip
    }

    /// Projection matrix as raw bytes, for GPU uniform upload.
    pub fn projection_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(&self.projection_matrix)
    }

    // ===== SETTERS (store, compute nothing) =====

    /// Set the projection matrix.
    pub fn set_projection(&mut self, matrix: Mat4) {
        self.projection_matrix = matrix;
    }

    /// Set the near clip distance.
    pub fn set_near_clip(&mut self, near_clip: f32) {
        self.near_clip = near_clip;
    }

    /// Set the far clip distance.
    ///
    /// Takes effect on the next projection update.
    pub fn set_far_clip(&mut self, far_clip: f32) {
        self.far_clip = far_clip;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FAR_CLIP)
    }
}

impl ProjectionTarget for Camera {
    fn far_clip(&self) -> f32 {
        self.far_clip
    }

    fn apply_projection(&mut self, matrix: Mat4, near_clip: f32) {
        self.projection_matrix = matrix;
        self.near_clip = near_clip;
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
