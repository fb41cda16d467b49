use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Animation clip played while interacted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Clip", inline)]
#[serde(default)]
pub struct ClipOptions {
    /// Clip name played on interaction enter. `None` disables clip
    /// playback entirely.
    #[schemars(skip)]
    pub clip: Option<String>,
    /// Loop the clip instead of playing it once.
    #[schemars(title = "Loop")]
    pub looped: bool,
    /// [Looped clips only] rewind to time 0 when the interaction exits,
    /// leaving the clip frozen on its first frame.
    #[schemars(title = "Reset On Exit")]
    pub reset_on_exit: bool,
}

impl Default for ClipOptions {
    fn default() -> Self {
        Self {
            clip: None,
            looped: true,
            reset_on_exit: false,
        }
    }
}
