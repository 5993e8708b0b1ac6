/// ProjectionTarget: consumer side of the off-axis projection.
///
/// Anything camera-like that can receive a projection matrix and the
/// derived near clip each frame. The built-in Camera implements it;
/// callers with their own camera types implement it to drive them from
/// a ProjectionRig.

use glam::Mat4;

/// Consumer of computed off-axis projections.
///
/// `far_clip()` is read before each computation (the far plane is
/// target configuration, not tracking data); `apply_projection()`
/// receives the result.
pub trait ProjectionTarget: Send + Sync {
    /// Far clip distance to close the frustum with.
    fn far_clip(&self) -> f32;

    /// Accept a freshly computed projection matrix and derived near clip.
    fn apply_projection(&mut self, matrix: Mat4, near_clip: f32);
}
