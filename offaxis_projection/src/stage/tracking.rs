/// Tracking sources for the projection rig.
///
/// A TrackingSource supplies the per-frame stage positions: the
/// viewpoint and the two screen corner markers. Implementations range
/// from fixed values (ManualTracking) to scripted moves or live
/// tracking hardware.

use glam::Vec3;

use super::screen::Screen;

// ===== TRACKING SAMPLE =====

/// One frame's worth of tracked stage positions.
///
/// All three positions belong to the same instant: consumers never see
/// a half-updated frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackingSample {
    /// Viewpoint (eye) position
    pub viewpoint: Vec3,
    /// Bottom-left screen corner marker position
    pub screen_bottom_left: Vec3,
    /// Top-right screen corner marker position
    pub screen_top_right: Vec3,
}

impl TrackingSample {
    /// Assemble the screen surface from the two corner markers.
    pub fn screen(&self) -> Screen {
        Screen::new(self.screen_bottom_left, self.screen_top_right)
    }
}

// ===== TRACKING SOURCE =====

/// Strategy for supplying stage positions to a projection rig.
///
/// Sampled once per frame, before the projection is computed.
///
/// `&mut self` allows stateful implementations (scripted moves,
/// hardware polling) to advance between frames.
pub trait TrackingSource: Send + Sync {
    /// Sample the current viewpoint and screen corner positions.
    fn sample(&mut self) -> TrackingSample;
}

// ===== MANUAL TRACKING =====

/// Fixed tracking source: positions held in plain fields.
///
/// Suitable for static installations and tests. Reports the same
/// positions every frame until the fields are changed.
#[derive(Debug, Clone, Copy)]
pub struct ManualTracking {
    /// Viewpoint (eye) position
    pub viewpoint: Vec3,
    /// Bottom-left screen corner marker position
    pub screen_bottom_left: Vec3,
    /// Top-right screen corner marker position
    pub screen_top_right: Vec3,
}

impl ManualTracking {
    /// Create a manual tracking source from fixed positions.
    pub fn new(viewpoint: Vec3, screen_bottom_left: Vec3, screen_top_right: Vec3) -> Self {
        Self {
            viewpoint,
            screen_bottom_left,
            screen_top_right,
        }
    }
}

impl TrackingSource for ManualTracking {
    fn sample(&mut self) -> TrackingSample {
        TrackingSample {
            viewpoint: self.viewpoint,
            screen_bottom_left: self.screen_bottom_left,
            screen_top_right: self.screen_top_right,
        }
    }
}

#[cfg(test)]
#[path = "tracking_tests.rs"]
mod tests;
