/// ProjectionRig: wires a tracking source to the camera it drives.
///
/// The rig owns its collaborators: a tracking source supplying the
/// per-frame stage positions and the camera receiving the computed
/// projection. Built once from a RigDesc, then updated once per frame
/// by the caller's render loop.

use crate::camera::{Camera, OffAxisProjection};
use crate::error::{Error, Result};
use crate::stage::TrackingSource;

/// Tolerated z mismatch between the two corner markers before the rig
/// warns that the screen is not perpendicular to the viewing axis.
const DEPTH_SKEW_TOLERANCE: f32 = 1e-4;

/// Projection rig configuration.
///
/// Both slots are required: `ProjectionRig::new` rejects a desc with an
/// empty slot. The fields are Options so a desc can be assembled field
/// by field (editor bindings, deserialized setups) before the rig
/// validates it in one place.
#[derive(Default)]
pub struct RigDesc {
    /// Supplier of per-frame viewpoint and corner marker positions
    pub tracking: Option<Box<dyn TrackingSource>>,

    /// Camera driven by the rig
    pub camera: Option<Camera>,
}

/// Drives a camera's projection from tracked stage positions.
///
/// Each `update()` samples the tracking source, recomputes the off-axis
/// projection, and stores the matrix and derived near clip on the
/// camera. Nothing is cached between frames; moving the viewpoint or
/// the corner markers takes effect on the next update.
pub struct ProjectionRig {
    tracking: Box<dyn TrackingSource>,
    camera: Camera,
    depth_skew_warned: bool,
}

impl ProjectionRig {
    /// Helper to log errors before returning them (internal use)
    fn log_and_return_error(error: Error) -> Error {
        match &error {
            Error::MissingDependency(msg) => {
                crate::offaxis_error!("offaxis::Rig", "Missing dependency: {}", msg);
            }
            Error::DegenerateGeometry(msg) => {
                crate::offaxis_error!("offaxis::Rig", "Degenerate geometry: {}", msg);
            }
        }
        error
    }

    /// Build a rig from its configuration.
    ///
    /// Validates that both collaborators are present. A misconfigured
    /// desc is rejected here, once, instead of failing on every frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingDependency`] if the tracking source or
    /// the camera slot is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use offaxis_projection::glam::Vec3;
    /// use offaxis_projection::offaxis::{ProjectionRig, RigDesc};
    /// use offaxis_projection::offaxis::camera::Camera;
    /// use offaxis_projection::offaxis::stage::ManualTracking;
    ///
    /// let mut rig = ProjectionRig::new(RigDesc {
    ///     tracking: Some(Box::new(ManualTracking::new(
    ///         Vec3::ZERO,
    ///         Vec3::new(-1.0, -1.0, 5.0),
    ///         Vec3::new(1.0, 1.0, 5.0),
    ///     ))),
    ///     camera: Some(Camera::new(100.0)),
    /// })?;
    ///
    /// let projection = rig.update()?;
    /// assert_eq!(projection.near_clip(), 5.0);
    /// # Ok::<(), offaxis_projection::offaxis::Error>(())
    /// ```
    pub fn new(desc: RigDesc) -> Result<Self> {
        let tracking = desc.tracking.ok_or_else(|| {
            Self::log_and_return_error(Error::MissingDependency(
                "No tracking source assigned. Fill RigDesc::tracking with the stage's position source.".to_string(),
            ))
        })?;

        let camera = desc.camera.ok_or_else(|| {
            Self::log_and_return_error(Error::MissingDependency(
                "No camera assigned. Fill RigDesc::camera with the camera to drive.".to_string(),
            ))
        })?;

        crate::offaxis_info!(
            "offaxis::Rig",
            "Projection rig configured (far clip {})",
            camera.far_clip()
        );

        Ok(Self {
            tracking,
            camera,
            depth_skew_warned: false,
        })
    }

    /// Recompute the projection from the current tracked positions.
    ///
    /// Call once per frame. Samples the tracking source, computes the
    /// off-axis projection against the camera's far clip, stores the
    /// matrix and derived near clip on the camera, and returns the
    /// projection for inspection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateGeometry`] if the sampled positions
    /// do not form a usable frustum (zero-extent screen, viewpoint not
    /// strictly in front of the screen plane, far clip not beyond the
    /// derived near clip). The camera keeps its previous projection.
    pub fn update(&mut self) -> Result<OffAxisProjection> {
        let sample = self.tracking.sample();
        let screen = sample.screen();

        // Warn once per rig, not per frame
        let skew = screen.depth_skew();
        if !self.depth_skew_warned && skew.abs() > DEPTH_SKEW_TOLERANCE {
            crate::offaxis_warn!(
                "offaxis::Rig",
                "Screen corner markers differ in z by {:.4}; rotated screens are unsupported, using the bottom-left corner's plane",
                skew
            );
            self.depth_skew_warned = true;
        }

        let projection =
            OffAxisProjection::compute(sample.viewpoint, &screen, self.camera.far_clip())
                .map_err(Self::log_and_return_error)?;

        projection.apply_to(&mut self.camera);

        Ok(projection)
    }

    // ===== GETTERS =====

    /// Camera driven by the rig.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable access to the camera (e.g. to adjust the far clip).
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Consume the rig and take the camera out.
    pub fn into_camera(self) -> Camera {
        self.camera
    }
}

#[cfg(test)]
#[path = "rig_tests.rs"]
mod tests;
