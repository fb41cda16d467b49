use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How the fade engine interpolates toward its target color.
///
/// The original behavior lerps each frame from the *already-lerped*
/// current color, producing an exponential-ease convergence that never
/// quite lands on the target. The linear style lerps from a snapshot
/// taken at the transition and reaches the target exactly when the
/// fade progress saturates.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum FadeStyle {
    /// Lerp from the current displayed color (ease-style convergence).
    #[default]
    Exponential,
    /// Lerp from a fixed snapshot (true linear ramp).
    Linear,
}

/// Highlight color and fade parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Highlight", inline)]
#[serde(default)]
pub struct HighlightOptions {
    /// RGB color the surface fades toward while interacted.
    #[schemars(title = "Highlight Color")]
    pub color: [f32; 3],
    /// Fade speed of the color change (slow -> quick).
    #[schemars(title = "Fade Speed", range(min = 0.1, max = 20.0))]
    pub fade_speed: f32,
    /// Emission intensity in [0, 1]. Zero disables the emission channel.
    #[schemars(title = "Emission Intensity", range(min = 0.0, max = 1.0))]
    pub emission_intensity: f32,
    /// Interpolation strategy for the fade.
    #[schemars(title = "Fade Style")]
    pub fade_style: FadeStyle,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            color: [0.38, 0.97, 0.44],
            fade_speed: 4.0,
            emission_intensity: 0.0,
            fade_style: FadeStyle::Exponential,
        }
    }
}

impl HighlightOptions {
    /// Highlight color as a vector.
    #[must_use]
    pub fn color_vec(&self) -> Vec3 {
        Vec3::from_array(self.color)
    }
}
