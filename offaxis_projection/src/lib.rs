/*!
# Offaxis Projection

Off-axis (asymmetric) perspective projection for virtual production stages.

This crate computes the projection matrix that keeps rendered imagery
geometrically correct on a fixed physical screen (LED wall, monitor,
projection wall) while the viewer moves in front of it. The screen is a
window into the virtual world: the frustum is rebuilt every frame from
the tracked viewpoint and the two screen corner positions.

## Architecture

- **OffAxisProjection**: per-frame computation of the asymmetric matrix
- **FrustumBounds**: the six frustum extents derived from the stage
- **Screen / TrackingSource**: the stage side (surface and positions)
- **Camera / ProjectionTarget**: the consumer side (passive, driven)
- **ProjectionRig**: wires a tracking source to the camera it drives

Callers with their own camera types implement ProjectionTarget; callers
with their own tracking hardware implement TrackingSource.
*/

// Internal modules
mod error;
mod rig;
pub mod log;
pub mod camera;
pub mod stage;

// Main offaxis namespace module
pub mod offaxis {
    // Error types
    pub use crate::error::{Error, Result};

    // Projection rig
    pub use crate::rig::{ProjectionRig, RigDesc};

    // Logging sub-module (types only; the offaxis_* macros live at the
    // crate root via #[macro_export])
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        pub use crate::log::{set_logger, reset_logger};
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Stage sub-module
    pub mod stage {
        pub use crate::stage::*;
    }
}

// Re-export math library at crate root
pub use glam;
