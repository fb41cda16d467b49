use glam::{Vec2, Vec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Horizontal alignment of the tooltip text.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum TooltipAlignment {
    /// Anchored at the upper center of the label rect.
    #[default]
    Center,
    /// Anchored at the upper left of the label rect.
    Left,
    /// Anchored at the upper right of the label rect.
    Right,
}

/// Tooltip text, styling and anchoring options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Tooltip", inline)]
#[serde(default)]
pub struct TooltipOptions {
    /// Whether any tooltip output is produced at all.
    #[schemars(title = "Show Tooltip")]
    pub enabled: bool,
    /// Text shown while the object is interacted.
    #[schemars(title = "Text")]
    pub text: String,
    /// RGB color of the tooltip text.
    #[schemars(title = "Text Color")]
    pub color: [f32; 3],
    /// Font size of the tooltip text.
    #[schemars(title = "Text Size")]
    pub size: i32,
    /// Font name, if the host has one registered. `None` uses the
    /// host's default font.
    #[schemars(skip)]
    pub font: Option<String>,
    /// Text alignment within the label rect.
    #[schemars(title = "Alignment")]
    pub alignment: TooltipAlignment,
    /// Anchor the tooltip over the object instead of over the pointer.
    #[schemars(title = "Fixed To Object")]
    pub fixed_to_object: bool,
    /// Shrink the font size with camera distance.
    #[schemars(title = "Resize By Distance")]
    pub text_resized: bool,
    /// Screen-space offset of the label from its anchor.
    #[schemars(title = "Offset")]
    pub offset: [f32; 2],
    /// RGB color of the text shadow.
    #[schemars(title = "Shadow Color")]
    pub shadow_color: [f32; 3],
    /// Additional offset of the shadow pass, subtracted from the label
    /// position on both axes.
    #[schemars(title = "Shadow Offset")]
    pub shadow_offset: [f32; 2],
    /// Whether a host UI panel is bound to this instance. When set,
    /// panel show/hide effects and a per-frame panel position are
    /// produced.
    #[schemars(title = "Has Panel")]
    pub panel: bool,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            text: String::new(),
            color: [0.9, 0.9, 0.9],
            size: 20,
            font: None,
            alignment: TooltipAlignment::Center,
            fixed_to_object: false,
            text_resized: false,
            offset: [-50.0, 30.0],
            shadow_color: [0.1, 0.1, 0.1],
            shadow_offset: [-2.0, -2.0],
            panel: false,
        }
    }
}

impl TooltipOptions {
    /// Label offset as a vector.
    #[must_use]
    pub fn offset_vec(&self) -> Vec2 {
        Vec2::from_array(self.offset)
    }

    /// Shadow offset as a vector.
    #[must_use]
    pub fn shadow_offset_vec(&self) -> Vec2 {
        Vec2::from_array(self.shadow_offset)
    }

    /// Text color as a vector.
    #[must_use]
    pub fn color_vec(&self) -> Vec3 {
        Vec3::from_array(self.color)
    }

    /// Shadow color as a vector.
    #[must_use]
    pub fn shadow_color_vec(&self) -> Vec3 {
        Vec3::from_array(self.shadow_color)
    }
}
