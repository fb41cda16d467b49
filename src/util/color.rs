//! Color interpolation helpers shared by the fade engine.

use glam::Vec3;

/// Linear interpolation between two RGB colors.
#[inline]
pub fn lerp_color(t: f32, start: Vec3, end: Vec3) -> Vec3 {
    start + (end - start) * t
}

/// Uniform gray at the given intensity, used as the emission target
/// while a highlight is entering.
#[inline]
pub fn emission_gray(intensity: f32) -> Vec3 {
    Vec3::splat(intensity)
}
