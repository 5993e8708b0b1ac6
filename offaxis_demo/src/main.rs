//! Off-axis projection demo: a simulated virtual production stage.
//!
//! Drives a ProjectionRig from a scripted dolly move in front of a
//! fixed 4m x 2.25m LED wall and prints the per-frame projection
//! parameters. No window or GPU required.
//!
//! Run with: cargo run -p offaxis_demo

use offaxis_projection::glam::Vec3;
use offaxis_projection::offaxis::camera::Camera;
use offaxis_projection::offaxis::stage::{TrackingSample, TrackingSource};
use offaxis_projection::offaxis::{ProjectionRig, Result, RigDesc};
use offaxis_projection::{offaxis_error, offaxis_info};

const FRAME_COUNT: u32 = 24;

/// Scripted camera operator: walks right past the wall while the
/// corner markers stay put.
struct DollyTracking {
    frame: u32,
}

impl TrackingSource for DollyTracking {
    fn sample(&mut self) -> TrackingSample {
        // Sweep x from -1.5m to +1.5m over the run, eye height 1.6m
        let t = self.frame as f32 / (FRAME_COUNT - 1) as f32;
        self.frame += 1;

        TrackingSample {
            viewpoint: Vec3::new(-1.5 + 3.0 * t, 1.6, 0.0),
            screen_bottom_left: Vec3::new(-2.0, 0.0, 3.5),
            screen_top_right: Vec3::new(2.0, 2.25, 3.5),
        }
    }
}

fn run() -> Result<()> {
    let mut rig = ProjectionRig::new(RigDesc {
        tracking: Some(Box::new(DollyTracking { frame: 0 })),
        camera: Some(Camera::new(120.0)),
    })?;

    for frame in 0..FRAME_COUNT {
        let projection = rig.update()?;

        // Third-column x/y slots carry the off-axis skew
        let m = projection.matrix().to_cols_array_2d();
        offaxis_info!(
            "offaxis::demo",
            "frame {:02}: near {:.2}, bounds x [{:+.2}, {:+.2}], skew ({:+.3}, {:+.3})",
            frame,
            projection.near_clip(),
            projection.bounds().left,
            projection.bounds().right,
            m[2][0],
            m[2][1]
        );
    }

    let camera = rig.into_camera();
    offaxis_info!(
        "offaxis::demo",
        "final camera: near {:.2}, far {:.2}, {} matrix bytes ready for upload",
        camera.near_clip(),
        camera.far_clip(),
        camera.projection_bytes().len()
    );

    Ok(())
}

fn main() {
    if let Err(error) = run() {
        offaxis_error!("offaxis::demo", "Demo aborted: {}", error);
        std::process::exit(1);
    }
}
