//! Per-instance interaction options with TOML preset support.
//!
//! All tweakable settings (highlight fade, input mode gating, tooltip
//! styling and anchoring, clip playback) are consolidated here. Options
//! serialize to/from TOML so interaction presets can be stored on disk,
//! and are immutable once an instance is built from them.

mod clip;
mod highlight;
mod interaction;
mod tooltip;

use std::path::Path;

pub use clip::ClipOptions;
pub use highlight::{FadeStyle, HighlightOptions};
pub use interaction::{InteractionMode, InteractionOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use tooltip::{TooltipAlignment, TooltipOptions};

use crate::error::LimnError;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[highlight]`) work
/// correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Highlight color and fade parameters.
    pub highlight: HighlightOptions,
    /// Input mode and gating parameters.
    pub interaction: InteractionOptions,
    /// Tooltip text, styling and anchoring.
    pub tooltip: TooltipOptions,
    /// Animation clip playback.
    pub clip: ClipOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, LimnError> {
        let content = std::fs::read_to_string(path).map_err(LimnError::Io)?;
        toml::from_str(&content)
            .map_err(|e| LimnError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), LimnError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| LimnError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(LimnError::Io)?;
        }
        std::fs::write(path, content).map_err(LimnError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[highlight]
fade_speed = 8.0

[tooltip]
text = "Open"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.highlight.fade_speed, 8.0);
        assert_eq!(opts.tooltip.text, "Open");
        // Everything else should be default
        assert_eq!(opts.highlight.color, [0.38, 0.97, 0.44]);
        assert_eq!(opts.interaction.mode, InteractionMode::Pointer);
        assert_eq!(opts.interaction.interaction_distance, 1000.0);
        assert_eq!(opts.tooltip.offset, [-50.0, 30.0]);
        assert!(opts.clip.looped);
    }

    #[test]
    fn mode_parses_from_snake_case() {
        let toml_str = r#"
[interaction]
mode = "center_screen"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.interaction.mode, InteractionMode::CenterScreen);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("highlight"));
        assert!(props.contains_key("interaction"));
        assert!(props.contains_key("tooltip"));
        assert!(props.contains_key("clip"));

        // Host-resource references are not UI-exposed
        let interaction = &props["interaction"]["properties"];
        assert!(interaction.get("interaction_distance").is_some());
        assert!(interaction.get("cursor_icon").is_none());

        let tooltip = &props["tooltip"]["properties"];
        assert!(tooltip.get("text").is_some());
        assert!(tooltip.get("font").is_none());
    }
}
