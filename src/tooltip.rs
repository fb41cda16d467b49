//! Screen-space tooltip placement.
//!
//! Pure computation: given the tooltip options, the interaction mode and
//! the current frame's pointer/camera data, produce the label rect, the
//! shadow rect, the resolved text style and (when a panel is bound) the
//! panel's local position. The same inputs always produce the same
//! output; there is no hidden state.
//!
//! Three mutually exclusive anchor modes:
//! - pointer-anchored (default),
//! - center-screen-anchored (gaze mode),
//! - object-anchored (projected world position, with a perspective
//!   compensation heuristic on the vertical offset).

use glam::{Vec2, Vec3};

use crate::options::{InteractionMode, TooltipAlignment, TooltipOptions};

/// Fixed width of the label/shadow rects.
pub const LABEL_WIDTH: f32 = 100.0;
/// Fixed height of the label/shadow rects.
pub const LABEL_HEIGHT: f32 = 20.0;

/// Screen-space rectangle with origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

impl Rect {
    fn label(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            w: LABEL_WIDTH,
            h: LABEL_HEIGHT,
        }
    }
}

/// Resolved text style emitted with every draw.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelStyle {
    /// Text color.
    pub color: Vec3,
    /// Shadow pass color.
    pub shadow_color: Vec3,
    /// Font size after optional distance-based resizing.
    pub font_size: i32,
    /// Tooltip text renders bold.
    pub bold: bool,
    /// Font name, when the host has one registered.
    pub font: Option<String>,
    /// Horizontal alignment within the rect.
    pub alignment: TooltipAlignment,
}

/// One frame's tooltip output: two draw rects (shadow first), the text
/// and the resolved style, plus the bound panel's local position.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipDraw {
    /// Label rect.
    pub label: Rect,
    /// Shadow rect, offset behind the label.
    pub shadow: Rect,
    /// Panel position in panel-local coordinates (origin at screen
    /// center, Y up). `None` when no panel is bound.
    pub panel: Option<Vec3>,
    /// Visible text.
    pub text: String,
    /// Resolved text style.
    pub style: LabelStyle,
}

/// Per-frame inputs for placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementInput {
    /// Current pointer position in screen coordinates (Y down).
    pub pointer: Vec2,
    /// Screen size in pixels.
    pub screen: Vec2,
    /// Object's world position projected to screen space. Z carries the
    /// projection depth and is forwarded to the panel position in
    /// object-anchored mode.
    pub projected: Vec3,
    /// Distance from the camera to the object.
    pub camera_distance: f32,
}

/// Compute this frame's tooltip placement.
///
/// Returns `None` when the text is empty. Anchor selection:
/// object-anchored when `fixed_to_object` is set, otherwise
/// center-screen in gaze mode, otherwise pointer-anchored.
#[must_use]
pub fn place(
    opts: &TooltipOptions,
    mode: InteractionMode,
    text: &str,
    input: &PlacementInput,
) -> Option<TooltipDraw> {
    if text.is_empty() {
        return None;
    }

    let style = resolve_style(opts, input.camera_distance);
    let shadow_off = opts.shadow_offset_vec();
    let offset = opts.offset_vec();

    let (label, panel) = if opts.fixed_to_object {
        place_object(opts, offset, input)
    } else if mode == InteractionMode::CenterScreen {
        place_center(opts, offset, input)
    } else {
        place_pointer(opts, offset, input)
    };

    let shadow = Rect::label(label.x - shadow_off.x, label.y - shadow_off.y);

    Some(TooltipDraw {
        label,
        shadow,
        panel,
        text: text.to_owned(),
        style,
    })
}

/// Label anchored at the pointer; panel follows in local coordinates.
fn place_pointer(
    opts: &TooltipOptions,
    offset: Vec2,
    input: &PlacementInput,
) -> (Rect, Option<Vec3>) {
    let label =
        Rect::label(input.pointer.x + offset.x, input.pointer.y + offset.y);
    let panel = opts.panel.then(|| {
        Vec3::new(
            input.pointer.x + offset.x - input.screen.x / 2.0,
            -input.pointer.y + offset.y + input.screen.y / 2.0,
            0.0,
        )
    });
    (label, panel)
}

/// Label anchored at the screen center. The panel's own anchor is
/// already centered, so its position is just the configured offset.
fn place_center(
    opts: &TooltipOptions,
    offset: Vec2,
    input: &PlacementInput,
) -> (Rect, Option<Vec3>) {
    let center = input.screen / 2.0;
    let label = Rect::label(center.x + offset.x, center.y + offset.y);
    let panel = opts.panel.then(|| Vec3::new(offset.x, offset.y, 0.0));
    (label, panel)
}

/// Label anchored at the object's screen projection.
///
/// The vertical offset is divided by `distance / 10`: closer objects get
/// a proportionally larger screen-space offset, receding objects a
/// smaller one. A perspective-compensation heuristic, not projection
/// math.
fn place_object(
    opts: &TooltipOptions,
    offset: Vec2,
    input: &PlacementInput,
) -> (Rect, Option<Vec3>) {
    let proj = input.projected;
    let compensated_y = offset.y / (input.camera_distance / 10.0);
    let label = Rect::label(
        proj.x + offset.x,
        input.screen.y - proj.y + compensated_y,
    );
    let panel = opts.panel.then(|| {
        Vec3::new(
            proj.x + offset.x - input.screen.x / 2.0,
            proj.y - input.screen.y / 2.0 + compensated_y,
            proj.z,
        )
    });
    (label, panel)
}

fn resolve_style(opts: &TooltipOptions, camera_distance: f32) -> LabelStyle {
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    let font_size = if opts.text_resized {
        (opts.size as f32 - camera_distance / 3.0).round() as i32
    } else {
        opts.size
    };
    LabelStyle {
        color: opts.color_vec(),
        shadow_color: opts.shadow_color_vec(),
        font_size,
        bold: true,
        font: opts.font.clone(),
        alignment: opts.alignment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> PlacementInput {
        PlacementInput {
            pointer: Vec2::new(200.0, 120.0),
            screen: Vec2::new(800.0, 600.0),
            projected: Vec3::new(400.0, 300.0, 5.0),
            camera_distance: 20.0,
        }
    }

    #[test]
    fn empty_text_produces_no_output() {
        let opts = TooltipOptions::default();
        assert!(place(&opts, InteractionMode::Pointer, "", &input())
            .is_none());
    }

    #[test]
    fn pointer_anchored_rects() {
        let opts = TooltipOptions::default(); // offset (-50, 30)
        let draw =
            place(&opts, InteractionMode::Pointer, "door", &input()).unwrap();

        assert_eq!(draw.label.x, 150.0);
        assert_eq!(draw.label.y, 150.0);
        assert_eq!(draw.label.w, LABEL_WIDTH);
        assert_eq!(draw.label.h, LABEL_HEIGHT);
        // Shadow offset (-2, -2) is subtracted
        assert_eq!(draw.shadow.x, 152.0);
        assert_eq!(draw.shadow.y, 152.0);
        assert_eq!(draw.text, "door");
        assert!(draw.panel.is_none());
    }

    #[test]
    fn pointer_anchored_panel_is_screen_centered() {
        let opts = TooltipOptions {
            panel: true,
            ..TooltipOptions::default()
        };
        let draw =
            place(&opts, InteractionMode::Pointer, "door", &input()).unwrap();
        let panel = draw.panel.unwrap();

        // (200 - 50 - 400, -120 + 30 + 300, 0)
        assert_eq!(panel, Vec3::new(-250.0, 210.0, 0.0));
    }

    #[test]
    fn center_screen_anchored_rects() {
        let opts = TooltipOptions {
            panel: true,
            ..TooltipOptions::default()
        };
        let draw =
            place(&opts, InteractionMode::CenterScreen, "lever", &input())
                .unwrap();

        assert_eq!(draw.label.x, 350.0);
        assert_eq!(draw.label.y, 330.0);
        assert_eq!(draw.panel.unwrap(), Vec3::new(-50.0, 30.0, 0.0));
    }

    #[test]
    fn object_anchored_rects() {
        // Spec scenario: projection (400, 300), distance 20, offset
        // (-50, 30) => x = 350, y = screen.h - 300 + 30/(20/10).
        let opts = TooltipOptions {
            fixed_to_object: true,
            ..TooltipOptions::default()
        };
        let draw =
            place(&opts, InteractionMode::Pointer, "chest", &input())
                .unwrap();

        assert_eq!(draw.label.x, 350.0);
        assert_eq!(draw.label.y, 600.0 - 300.0 + 15.0);
    }

    #[test]
    fn object_anchored_panel_carries_depth() {
        let opts = TooltipOptions {
            fixed_to_object: true,
            panel: true,
            ..TooltipOptions::default()
        };
        let draw =
            place(&opts, InteractionMode::Pointer, "chest", &input())
                .unwrap();
        let panel = draw.panel.unwrap();

        // (400 - 50 - 400, 300 - 300 + 15, depth)
        assert_eq!(panel, Vec3::new(-50.0, 15.0, 5.0));
    }

    #[test]
    fn fixed_to_object_wins_over_center_screen() {
        let opts = TooltipOptions {
            fixed_to_object: true,
            ..TooltipOptions::default()
        };
        let fixed =
            place(&opts, InteractionMode::CenterScreen, "x", &input())
                .unwrap();
        let also_fixed =
            place(&opts, InteractionMode::Pointer, "x", &input()).unwrap();
        assert_eq!(fixed.label, also_fixed.label);
    }

    #[test]
    fn placement_is_idempotent() {
        let opts = TooltipOptions::default();
        let a = place(&opts, InteractionMode::Pointer, "door", &input());
        let b = place(&opts, InteractionMode::Pointer, "door", &input());
        assert_eq!(a, b);
    }

    #[test]
    fn text_resized_shrinks_with_distance() {
        let opts = TooltipOptions {
            text_resized: true,
            ..TooltipOptions::default()
        };
        let mut near = input();
        near.camera_distance = 6.0;
        let mut far = input();
        far.camera_distance = 30.0;

        let near_draw =
            place(&opts, InteractionMode::Pointer, "x", &near).unwrap();
        let far_draw =
            place(&opts, InteractionMode::Pointer, "x", &far).unwrap();

        // size 20: round(20 - 6/3) = 18, round(20 - 30/3) = 10
        assert_eq!(near_draw.style.font_size, 18);
        assert_eq!(far_draw.style.font_size, 10);
    }

    #[test]
    fn style_without_resize_uses_configured_size() {
        let opts = TooltipOptions::default();
        let draw =
            place(&opts, InteractionMode::Pointer, "x", &input()).unwrap();
        assert_eq!(draw.style.font_size, 20);
        assert!(draw.style.bold);
        assert_eq!(draw.style.alignment, TooltipAlignment::Center);
    }
}
