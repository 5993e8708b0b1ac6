//! Unit tests for camera.rs
//!
//! Tests the passive Camera container: construction, getters/setters,
//! byte view, and the ProjectionTarget implementation.

use glam::{Mat4, Vec4};
use super::*;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_camera_new() {
    let camera = Camera::new(250.0);

    assert_eq!(*camera.projection_matrix(), Mat4::IDENTITY);
    assert_eq!(camera.near_clip(), Camera::DEFAULT_NEAR_CLIP);
    assert_eq!(camera.far_clip(), 250.0);
}

#[test]
fn test_camera_default() {
    let camera = Camera::default();

    assert_eq!(camera.far_clip(), Camera::DEFAULT_FAR_CLIP);
    assert_eq!(camera.near_clip(), Camera::DEFAULT_NEAR_CLIP);
    assert_eq!(*camera.projection_matrix(), Mat4::IDENTITY);
}

// ============================================================================
// Setters
// ============================================================================

#[test]
fn test_set_projection() {
    let mut camera = Camera::default();

    let new_proj = Mat4::perspective_rh_gl(std::f32::consts::FRAC_PI_2, 1.0, 0.5, 500.0);
    camera.set_projection(new_proj);

    assert_eq!(*camera.projection_matrix(), new_proj);
}

#[test]
fn test_set_near_clip() {
    let mut camera = Camera::default();

    camera.set_near_clip(3.5);

    assert_eq!(camera.near_clip(), 3.5);
}

#[test]
fn test_set_far_clip() {
    let mut camera = Camera::new(100.0);

    camera.set_far_clip(500.0);

    assert_eq!(camera.far_clip(), 500.0);
}

// ============================================================================
// projection_bytes
// ============================================================================

#[test]
fn test_projection_bytes_length() {
    let camera = Camera::default();

    // Mat4 is 16 f32 values
    assert_eq!(camera.projection_bytes().len(), 64);
}

#[test]
fn test_projection_bytes_content() {
    let mut camera = Camera::default();
    let matrix = Mat4::from_cols(
        Vec4::new(1.0, 2.0, 3.0, 4.0),
        Vec4::new(5.0, 6.0, 7.0, 8.0),
        Vec4::new(9.0, 10.0, 11.0, 12.0),
        Vec4::new(13.0, 14.0, 15.0, 16.0),
    );
    camera.set_projection(matrix);

    let bytes = camera.projection_bytes();
    let first = f32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);

    // Column-major: the first value is column 0, row 0
    assert_eq!(first, 1.0);
}

// ============================================================================
// ProjectionTarget implementation
// ============================================================================

#[test]
fn test_apply_projection_updates_matrix_and_near_clip() {
    let mut camera = Camera::new(100.0);
    let matrix = Mat4::perspective_rh_gl(std::f32::consts::FRAC_PI_4, 1.0, 5.0, 100.0);

    camera.apply_projection(matrix, 5.0);

    assert_eq!(*camera.projection_matrix(), matrix);
    assert_eq!(camera.near_clip(), 5.0);
    // Far clip is configuration, not touched by the update
    assert_eq!(camera.far_clip(), 100.0);
}

#[test]
fn test_camera_as_projection_target_trait_object() {
    let mut camera = Camera::new(80.0);
    let target: &mut dyn ProjectionTarget = &mut camera;

    assert_eq!(target.far_clip(), 80.0);

    target.apply_projection(Mat4::IDENTITY, 2.0);
    assert_eq!(camera.near_clip(), 2.0);
}

// ============================================================================
// Clone
// ============================================================================

#[test]
fn test_camera_clone() {
    let mut camera = Camera::new(60.0);
    camera.set_near_clip(4.0);

    let cloned = camera.clone();

    assert_eq!(cloned.far_clip(), 60.0);
    assert_eq!(cloned.near_clip(), 4.0);
    assert_eq!(*cloned.projection_matrix(), *camera.projection_matrix());
}
