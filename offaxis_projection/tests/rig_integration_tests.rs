//! Integration tests for the projection rig
//!
//! These tests drive a ProjectionRig across frames the way a render
//! loop would: tracked positions in, projection matrix and near clip
//! out, with the logging system observing the rig's diagnostics.
//!
//! Run with: cargo test --test rig_integration_tests

use offaxis_projection::glam::{Mat4, Vec3};
use offaxis_projection::offaxis::camera::{Camera, OffAxisProjection, ProjectionTarget};
use offaxis_projection::offaxis::log::{self, Logger, LogEntry, LogSeverity};
use offaxis_projection::offaxis::stage::{ManualTracking, Screen, TrackingSample, TrackingSource};
use offaxis_projection::offaxis::{Error, ProjectionRig, RigDesc};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST HELPERS
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        let mut entries = self.entries.lock().unwrap();
        entries.push(entry.clone());
    }
}

/// A 4m x 2.25m LED wall standing on the stage floor, 3.5m out
fn led_wall_tracking(viewpoint: Vec3) -> ManualTracking {
    ManualTracking::new(
        viewpoint,
        Vec3::new(-2.0, 0.0, 3.5),
        Vec3::new(2.0, 2.25, 3.5),
    )
}

// ============================================================================
// RIG LIFECYCLE TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_full_walkthrough() {
    // Build the rig: operator standing at eye height in front of the wall
    let mut rig = ProjectionRig::new(RigDesc {
        tracking: Some(Box::new(led_wall_tracking(Vec3::new(0.0, 1.6, 0.0)))),
        camera: Some(Camera::new(120.0)),
    })
    .unwrap();

    // First frame
    let projection = rig.update().unwrap();

    // Near clip is the distance to the wall plane
    assert_eq!(projection.near_clip(), 3.5);
    assert_eq!(rig.camera().near_clip(), 3.5);

    // Eye height makes the vertical extents asymmetric
    let bounds = projection.bounds();
    assert_eq!(bounds.left, -2.0);
    assert_eq!(bounds.right, 2.0);
    assert!((bounds.bottom - (-1.6)).abs() < 1e-6);
    assert!((bounds.top - 0.65).abs() < 1e-6);

    // The camera carries the matrix, ready for GPU upload
    assert_eq!(*rig.camera().projection_matrix(), *projection.matrix());
    assert_eq!(rig.camera().projection_bytes().len(), 64);

    // Take the camera out at the end of the session
    let camera = rig.into_camera();
    assert_eq!(camera.near_clip(), 3.5);
}

#[test]
#[serial]
fn test_integration_moving_viewpoint_keeps_wall_locked() {
    // Scripted dolly move: the viewpoint slides right across frames
    struct DollyTracking {
        frame: u32,
    }

    impl TrackingSource for DollyTracking {
        fn sample(&mut self) -> TrackingSample {
            let x = -1.5 + self.frame as f32 * 0.75;
            self.frame += 1;
            TrackingSample {
                viewpoint: Vec3::new(x, 1.6, 0.0),
                screen_bottom_left: Vec3::new(-2.0, 0.0, 3.5),
                screen_top_right: Vec3::new(2.0, 2.25, 3.5),
            }
        }
    }

    let mut rig = ProjectionRig::new(RigDesc {
        tracking: Some(Box::new(DollyTracking { frame: 0 })),
        camera: Some(Camera::new(120.0)),
    })
    .unwrap();

    for _ in 0..5 {
        let projection = rig.update().unwrap();
        let bounds = projection.bounds();
        let matrix = projection.matrix();

        // Wherever the viewpoint is, the wall corners stay locked to
        // the NDC corners: the image cannot slide off the wall
        let bottom_left =
            matrix.project_point3(Vec3::new(bounds.left, bounds.bottom, -bounds.near));
        let top_right = matrix.project_point3(Vec3::new(bounds.right, bounds.top, -bounds.near));

        assert!(bottom_left.abs_diff_eq(Vec3::new(-1.0, -1.0, -1.0), 1e-4));
        assert!(top_right.abs_diff_eq(Vec3::new(1.0, 1.0, -1.0), 1e-4));
    }
}

#[test]
#[serial]
fn test_integration_custom_projection_target() {
    // A caller-owned camera type driven through the ProjectionTarget seam
    struct UserCamera {
        projection: Mat4,
        near: f32,
        far: f32,
    }

    impl ProjectionTarget for UserCamera {
        fn far_clip(&self) -> f32 {
            self.far
        }

        fn apply_projection(&mut self, matrix: Mat4, near_clip: f32) {
            self.projection = matrix;
            self.near = near_clip;
        }
    }

    let mut user_camera = UserCamera {
        projection: Mat4::IDENTITY,
        near: 0.1,
        far: 90.0,
    };

    let screen = Screen::new(Vec3::new(-2.0, 0.0, 3.5), Vec3::new(2.0, 2.25, 3.5));
    let projection =
        OffAxisProjection::compute(Vec3::new(0.5, 1.6, 0.0), &screen, user_camera.far_clip())
            .unwrap();
    projection.apply_to(&mut user_camera);

    assert_eq!(user_camera.projection, *projection.matrix());
    assert_eq!(user_camera.near, 3.5);
}

// ============================================================================
// RIG LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_rig_reports_configuration() {
    let (test_logger, entries) = TestLogger::new();
    log::set_logger(test_logger);

    let _rig = ProjectionRig::new(RigDesc {
        tracking: Some(Box::new(led_wall_tracking(Vec3::new(0.0, 1.6, 0.0)))),
        camera: Some(Camera::new(120.0)),
    })
    .unwrap();

    let captured = entries.lock().unwrap();
    let info: Vec<_> = captured
        .iter()
        .filter(|e| e.severity == LogSeverity::Info)
        .collect();

    assert_eq!(info.len(), 1);
    assert_eq!(info[0].source, "offaxis::Rig");
    assert!(info[0].message.contains("configured"));

    drop(captured);
    log::reset_logger();
}

#[test]
#[serial]
fn test_integration_missing_dependency_is_logged() {
    let (test_logger, entries) = TestLogger::new();
    log::set_logger(test_logger);

    let result = ProjectionRig::new(RigDesc::default());
    assert!(matches!(result, Err(Error::MissingDependency(_))));

    let captured = entries.lock().unwrap();
    let errors: Vec<_> = captured
        .iter()
        .filter(|e| e.severity == LogSeverity::Error)
        .collect();

    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("Missing dependency"));
    // Error logs carry the call site
    assert!(errors[0].file.is_some());
    assert!(errors[0].line.is_some());

    drop(captured);
    log::reset_logger();
}

#[test]
#[serial]
fn test_integration_degenerate_update_is_logged() {
    let (test_logger, entries) = TestLogger::new();
    log::set_logger(test_logger);

    // Both corners at the same x: no horizontal extent
    let mut rig = ProjectionRig::new(RigDesc {
        tracking: Some(Box::new(ManualTracking::new(
            Vec3::ZERO,
            Vec3::new(2.0, 0.0, 3.5),
            Vec3::new(2.0, 2.25, 3.5),
        ))),
        camera: Some(Camera::new(120.0)),
    })
    .unwrap();

    let result = rig.update();
    assert!(matches!(result, Err(Error::DegenerateGeometry(_))));

    let captured = entries.lock().unwrap();
    let errors: Vec<_> = captured
        .iter()
        .filter(|e| e.severity == LogSeverity::Error)
        .collect();

    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("Degenerate geometry"));

    drop(captured);
    log::reset_logger();
}

#[test]
#[serial]
fn test_integration_depth_skew_warns_once() {
    let (test_logger, entries) = TestLogger::new();
    log::set_logger(test_logger);

    // Top-right marker 2cm deeper than bottom-left: warn, keep going
    let mut rig = ProjectionRig::new(RigDesc {
        tracking: Some(Box::new(ManualTracking::new(
            Vec3::new(0.0, 1.6, 0.0),
            Vec3::new(-2.0, 0.0, 3.5),
            Vec3::new(2.0, 2.25, 3.52),
        ))),
        camera: Some(Camera::new(120.0)),
    })
    .unwrap();

    for _ in 0..3 {
        rig.update().unwrap();
    }

    let captured = entries.lock().unwrap();
    let warnings: Vec<_> = captured
        .iter()
        .filter(|e| e.severity == LogSeverity::Warn)
        .collect();

    // Warned on the first update only, not once per frame
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].source, "offaxis::Rig");
    assert!(warnings[0].message.contains("differ in z"));

    drop(captured);
    log::reset_logger();
}

#[test]
#[serial]
fn test_integration_successful_updates_log_nothing() {
    let (test_logger, entries) = TestLogger::new();
    log::set_logger(test_logger);

    let mut rig = ProjectionRig::new(RigDesc {
        tracking: Some(Box::new(led_wall_tracking(Vec3::new(0.0, 1.6, 0.0)))),
        camera: Some(Camera::new(120.0)),
    })
    .unwrap();

    for _ in 0..10 {
        rig.update().unwrap();
    }

    // Only the configuration INFO: the per-frame path stays quiet
    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Info);

    drop(captured);
    log::reset_logger();
}
