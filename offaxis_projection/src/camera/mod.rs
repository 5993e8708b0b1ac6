//! Camera module: low-level camera, frustum bounds, and projection.
//!
//! Provides passive data containers and the off-axis projection math.
//! The library does NOT store or manage cameras: they are tools
//! provided by the library, owned and driven by the caller (directly
//! or through a ProjectionRig).

mod camera;
mod frustum;
mod projection;
mod target;

pub use camera::Camera;
pub use frustum::FrustumBounds;
pub use projection::OffAxisProjection;
pub use target::ProjectionTarget;
