//! Stage module: the physical setup the projection is computed from.
//!
//! Provides the screen surface description and the tracking sources
//! that supply per-frame viewpoint and corner marker positions.
//! The library does NOT own or move these positions: they come from
//! the caller's tracking system (or fixed values) every frame.

mod screen;
mod tracking;

pub use screen::Screen;
pub use tracking::{TrackingSource, TrackingSample, ManualTracking};
