//! Host-facing seams: the camera/projection service and per-frame data.

use glam::{Vec2, Vec3};
use web_time::Duration;

/// Camera and projection queries the interaction core depends on.
///
/// Injected by the host rather than looked up ambiently; tests supply a
/// fixed-value stub.
pub trait SceneCamera {
    /// Map a world position to screen space. X/Y are screen pixels,
    /// Z is the projection depth.
    fn world_to_screen(&self, world: Vec3) -> Vec3;

    /// Current screen size in pixels.
    fn screen_size(&self) -> Vec2;

    /// Camera world position.
    fn position(&self) -> Vec3;

    /// Distance from the camera to a world position, used by the
    /// interaction distance gate.
    fn distance_to(&self, world: Vec3) -> f32 {
        self.position().distance(world)
    }
}

/// Data sampled by the host once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Elapsed time since the previous tick.
    pub dt: Duration,
    /// Current pointer position in screen coordinates.
    pub pointer: Vec2,
}

impl FrameInput {
    /// Frame input with the given delta and a pointer at the origin.
    #[must_use]
    pub fn with_dt(dt: Duration) -> Self {
        Self {
            dt,
            pointer: Vec2::ZERO,
        }
    }
}
