use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which raw input events an instance reacts to.
///
/// Exactly one mode governs an instance; making this an enum (rather
/// than two independent flags) makes the exclusivity structural.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum InteractionMode {
    /// Hover enter/exit events from an external hit-testing service.
    #[default]
    Pointer,
    /// Click/tap toggles the interaction on and off.
    TouchClick,
    /// A screen-center gaze ray substitutes for the pointer.
    CenterScreen,
}

/// Input mode and gating parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Interaction", inline)]
#[serde(default)]
pub struct InteractionOptions {
    /// Input mode for this instance.
    #[schemars(title = "Mode")]
    pub mode: InteractionMode,
    /// Max camera-to-object distance for the interaction to trigger
    /// (1000 = far away, 6 = melee range).
    #[schemars(title = "Interaction Distance")]
    pub interaction_distance: f32,
    /// Cursor icon name swapped in while interacting (Pointer mode only).
    #[schemars(skip)]
    pub cursor_icon: Option<String>,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            mode: InteractionMode::Pointer,
            interaction_distance: 1000.0,
            cursor_icon: None,
        }
    }
}
