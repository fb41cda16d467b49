//! One object's interaction state machine.
//!
//! States: idle (not over), entering (over, fade in progress), exiting
//! (not over, fade-back in progress). Transitions are level-triggered:
//! re-entering before an exit fade completes simply resets progress and
//! flips direction. All guard failures are silent no-ops.

use glam::Vec3;
use log::trace;

use crate::effects::{ClipWrap, Effect, EffectQueue};
use crate::fade::Fade;
use crate::group::InstanceId;
use crate::options::{InteractionMode, Options};
use crate::scene::{FrameInput, SceneCamera};
use crate::surface::SurfaceBinding;
use crate::timer::{TimerPurpose, TimerQueue, PANEL_DELAY};
use crate::tooltip::{self, PlacementInput, TooltipDraw};

/// Interaction config plus the mutable state for a single object.
///
/// Instances live in an [`InteractionSet`](crate::group::InteractionSet)
/// arena; raw events are delivered through the set so group fan-out and
/// timers work.
pub struct Interaction {
    options: Options,
    world_position: Vec3,
    surface: SurfaceBinding,
    fade: Fade,
    over: bool,
    group_follower: bool,
    click_armed: bool,
    looked_by_cam: bool,
    current_text: String,
}

impl Interaction {
    /// Build an instance from immutable options, the object's world
    /// position and its captured surface binding.
    #[must_use]
    pub fn new(
        options: Options,
        world_position: Vec3,
        surface: SurfaceBinding,
    ) -> Self {
        Self {
            options,
            world_position,
            surface,
            fade: Fade::settled(),
            over: false,
            group_follower: false,
            click_armed: false,
            looked_by_cam: false,
            current_text: String::new(),
        }
    }

    /// The immutable options this instance was built from.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Current world position used for distance gating and
    /// object-anchored tooltips.
    #[must_use]
    pub fn world_position(&self) -> Vec3 {
        self.world_position
    }

    /// Update the object's world position (moving objects).
    pub fn set_world_position(&mut self, world_position: Vec3) {
        self.world_position = world_position;
    }

    /// Current material paint state for the host to copy back into its
    /// real materials.
    #[must_use]
    pub fn surface(&self) -> &SurfaceBinding {
        &self.surface
    }

    /// Whether the pointer/gaze is currently considered on this object.
    #[must_use]
    pub fn over(&self) -> bool {
        self.over
    }

    /// Whether this instance's visual state was triggered by another
    /// group member (suppresses its own tooltip).
    #[must_use]
    pub fn is_group_follower(&self) -> bool {
        self.group_follower
    }

    /// Gaze-mode sticky flag distinguishing "currently gazed" from
    /// transient re-entry.
    #[must_use]
    pub fn looked_by_cam(&self) -> bool {
        self.looked_by_cam
    }

    /// Whether a subsequent click may toggle the exit (touch mode).
    #[must_use]
    pub fn click_armed(&self) -> bool {
        self.click_armed
    }

    /// Normalized fade progress in [0, 1].
    #[must_use]
    pub fn fade_progress(&self) -> f32 {
        self.fade.progress().min(1.0)
    }

    /// Tooltip text currently shown (empty while not over).
    #[must_use]
    pub fn current_text(&self) -> &str {
        &self.current_text
    }

    pub(crate) fn set_follower(&mut self, follower: bool) {
        self.group_follower = follower;
    }

    pub(crate) fn set_looked(&mut self, looked: bool) {
        self.looked_by_cam = looked;
    }

    pub(crate) fn within_distance(&self, camera: &dyn SceneCamera) -> bool {
        camera.distance_to(self.world_position)
            < self.options.interaction.interaction_distance
    }

    /// Begin the interaction: reset the fade, show the tooltip text,
    /// request cursor/panel/clip side effects.
    pub(crate) fn enter(
        &mut self,
        id: InstanceId,
        effects: &mut EffectQueue,
        timers: &mut TimerQueue,
    ) {
        trace!("interaction enter ({id:?})");
        self.fade.reset(&self.surface);
        self.over = true;
        self.current_text
            .clone_from(&self.options.tooltip.text);

        if self.options.interaction.mode == InteractionMode::Pointer {
            if let Some(icon) = &self.options.interaction.cursor_icon {
                effects.push(
                    id,
                    Effect::SetCursor {
                        icon: Some(icon.clone()),
                    },
                );
            }
        }

        if self.has_panel() {
            timers.cancel(id, TimerPurpose::PanelHide);
            timers.schedule(id, TimerPurpose::PanelShow, PANEL_DELAY);
        }

        if let Some(clip) = self.options.clip.clip.clone() {
            if self.options.clip.reset_on_exit {
                effects.push(
                    id,
                    Effect::ClipSeek {
                        clip: clip.clone(),
                        time: 0.0,
                        speed: 1.0,
                    },
                );
            }
            let wrap = if self.options.clip.looped {
                ClipWrap::Loop
            } else {
                ClipWrap::Once
            };
            effects.push(
                id,
                Effect::ClipSetWrap {
                    clip: clip.clone(),
                    wrap,
                },
            );
            effects.push(id, Effect::ClipPlay { clip });
        }
    }

    /// End the interaction: reset the fade, clear the tooltip text,
    /// request cursor restore and panel/clip teardown.
    pub(crate) fn exit(
        &mut self,
        id: InstanceId,
        effects: &mut EffectQueue,
        timers: &mut TimerQueue,
    ) {
        trace!("interaction exit ({id:?})");
        self.fade.reset(&self.surface);
        self.over = false;
        self.click_armed = false;
        self.current_text.clear();

        if self.options.interaction.mode == InteractionMode::Pointer
            && self.options.interaction.cursor_icon.is_some()
        {
            effects.push(id, Effect::SetCursor { icon: None });
        }

        if self.has_panel() {
            timers.cancel(id, TimerPurpose::PanelShow);
            timers.schedule(id, TimerPurpose::PanelHide, PANEL_DELAY);
        }

        if let Some(clip) = self.options.clip.clip.clone() {
            if self.options.clip.looped {
                effects.push(id, Effect::ClipStop);
                if self.options.clip.reset_on_exit {
                    // Freeze-frame at the clip's first frame.
                    effects.push(
                        id,
                        Effect::ClipSeek {
                            clip: clip.clone(),
                            time: 0.0,
                            speed: 0.0,
                        },
                    );
                    effects.push(id, Effect::ClipPlay { clip });
                }
            }
        }
    }

    /// A deferred timer fired. Callbacks tolerate stale state: a later
    /// transition may have occurred since scheduling, so each applies
    /// only if the state still warrants it.
    pub(crate) fn fire_timer(
        &mut self,
        id: InstanceId,
        purpose: TimerPurpose,
        effects: &mut EffectQueue,
    ) {
        trace!("timer fired ({id:?}, {purpose:?})");
        match purpose {
            TimerPurpose::PanelShow => {
                if self.over && self.has_panel() {
                    effects.push(id, Effect::PanelActive { active: true });
                }
            }
            TimerPurpose::PanelHide => {
                if !self.over && self.has_panel() {
                    effects.push(id, Effect::PanelActive { active: false });
                }
            }
            TimerPurpose::ClickArm => {
                if self.over {
                    self.click_armed = true;
                }
            }
        }
    }

    /// Advance the fade one frame in the current direction.
    pub(crate) fn tick_fade(&mut self, dt: f32) {
        self.fade.advance(
            &mut self.surface,
            self.over,
            &self.options.highlight,
            dt,
        );
    }

    /// Compute this frame's tooltip output, if any.
    ///
    /// Followers never emit output even while `over` is true; gaze mode
    /// additionally requires the looked flag.
    pub(crate) fn draw(
        &self,
        input: &FrameInput,
        camera: &dyn SceneCamera,
    ) -> Option<TooltipDraw> {
        if !self.options.tooltip.enabled || !self.over || self.group_follower
        {
            return None;
        }
        if self.options.interaction.mode == InteractionMode::CenterScreen
            && !self.looked_by_cam
        {
            return None;
        }

        let placement = PlacementInput {
            pointer: input.pointer,
            screen: camera.screen_size(),
            projected: camera.world_to_screen(self.world_position),
            camera_distance: camera.distance_to(self.world_position),
        };
        tooltip::place(
            &self.options.tooltip,
            self.options.interaction.mode,
            &self.current_text,
            &placement,
        )
    }

    /// Return to a fresh exited configuration: flags cleared, paints
    /// snapped back to base, pending side effects reversed.
    pub(crate) fn reset(
        &mut self,
        id: InstanceId,
        effects: &mut EffectQueue,
        timers: &mut TimerQueue,
    ) {
        let was_over = self.over;
        self.over = false;
        self.group_follower = false;
        self.click_armed = false;
        self.looked_by_cam = false;
        self.current_text.clear();
        self.fade.settle();
        self.surface.reset_to_base();
        timers.cancel_all(id);

        if was_over {
            if self.options.interaction.mode == InteractionMode::Pointer
                && self.options.interaction.cursor_icon.is_some()
            {
                effects.push(id, Effect::SetCursor { icon: None });
            }
            if self.has_panel() {
                effects.push(id, Effect::PanelActive { active: false });
            }
        }
    }

    fn has_panel(&self) -> bool {
        self.options.tooltip.enabled && self.options.tooltip.panel
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};
    use web_time::Duration;

    use super::*;
    use crate::options::{ClipOptions, InteractionOptions, TooltipOptions};

    struct StubCamera;

    impl SceneCamera for StubCamera {
        fn world_to_screen(&self, world: Vec3) -> Vec3 {
            Vec3::new(world.x * 10.0, world.y * 10.0, world.z)
        }

        fn screen_size(&self) -> Vec2 {
            Vec2::new(800.0, 600.0)
        }

        fn position(&self) -> Vec3 {
            Vec3::ZERO
        }
    }

    const ID: InstanceId = InstanceId(0);

    fn instance(options: Options) -> Interaction {
        Interaction::new(
            options,
            Vec3::new(0.0, 0.0, 10.0),
            SurfaceBinding::capture(&[Vec3::splat(0.5)]),
        )
    }

    fn tooltip_options() -> Options {
        Options {
            tooltip: TooltipOptions {
                text: "door".to_owned(),
                ..TooltipOptions::default()
            },
            ..Options::default()
        }
    }

    #[test]
    fn enter_sets_state_and_resets_fade() {
        let mut inst = instance(tooltip_options());
        let mut effects = EffectQueue::default();
        let mut timers = TimerQueue::default();

        inst.tick_fade(0.1);
        inst.enter(ID, &mut effects, &mut timers);

        assert!(inst.over());
        assert_eq!(inst.fade_progress(), 0.0);
        assert_eq!(inst.current_text(), "door");
    }

    #[test]
    fn exit_clears_text_and_resets_fade() {
        let mut inst = instance(tooltip_options());
        let mut effects = EffectQueue::default();
        let mut timers = TimerQueue::default();

        inst.enter(ID, &mut effects, &mut timers);
        inst.tick_fade(0.05);
        inst.exit(ID, &mut effects, &mut timers);

        assert!(!inst.over());
        assert_eq!(inst.fade_progress(), 0.0);
        assert_eq!(inst.current_text(), "");
    }

    #[test]
    fn cursor_swap_only_in_pointer_mode() {
        let mut opts = tooltip_options();
        opts.interaction.cursor_icon = Some("hand".to_owned());
        let mut effects = EffectQueue::default();
        let mut timers = TimerQueue::default();

        let mut inst = instance(opts.clone());
        inst.enter(ID, &mut effects, &mut timers);
        let drained = effects.drain();
        assert!(drained.iter().any(|(_, e)| matches!(
            e,
            Effect::SetCursor { icon: Some(i) } if i == "hand"
        )));

        opts.interaction.mode = InteractionMode::TouchClick;
        let mut inst = instance(opts);
        inst.enter(ID, &mut effects, &mut timers);
        let drained = effects.drain();
        assert!(!drained
            .iter()
            .any(|(_, e)| matches!(e, Effect::SetCursor { .. })));
    }

    #[test]
    fn enter_clip_sequence_with_reset_and_loop() {
        let opts = Options {
            clip: ClipOptions {
                clip: Some("wiggle".to_owned()),
                looped: true,
                reset_on_exit: true,
            },
            ..Options::default()
        };
        let mut inst = instance(opts);
        let mut effects = EffectQueue::default();
        let mut timers = TimerQueue::default();

        inst.enter(ID, &mut effects, &mut timers);
        let drained: Vec<Effect> =
            effects.drain().into_iter().map(|(_, e)| e).collect();
        assert_eq!(
            drained,
            vec![
                Effect::ClipSeek {
                    clip: "wiggle".to_owned(),
                    time: 0.0,
                    speed: 1.0,
                },
                Effect::ClipSetWrap {
                    clip: "wiggle".to_owned(),
                    wrap: ClipWrap::Loop,
                },
                Effect::ClipPlay {
                    clip: "wiggle".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn exit_clip_freeze_frames_looped_clips() {
        let opts = Options {
            clip: ClipOptions {
                clip: Some("wiggle".to_owned()),
                looped: true,
                reset_on_exit: true,
            },
            ..Options::default()
        };
        let mut inst = instance(opts);
        let mut effects = EffectQueue::default();
        let mut timers = TimerQueue::default();

        inst.enter(ID, &mut effects, &mut timers);
        let _ = effects.drain();
        inst.exit(ID, &mut effects, &mut timers);
        let drained: Vec<Effect> =
            effects.drain().into_iter().map(|(_, e)| e).collect();
        assert_eq!(
            drained,
            vec![
                Effect::ClipStop,
                Effect::ClipSeek {
                    clip: "wiggle".to_owned(),
                    time: 0.0,
                    speed: 0.0,
                },
                Effect::ClipPlay {
                    clip: "wiggle".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn once_clips_are_left_running_on_exit() {
        let opts = Options {
            clip: ClipOptions {
                clip: Some("swing".to_owned()),
                looped: false,
                reset_on_exit: false,
            },
            ..Options::default()
        };
        let mut inst = instance(opts);
        let mut effects = EffectQueue::default();
        let mut timers = TimerQueue::default();

        inst.enter(ID, &mut effects, &mut timers);
        let _ = effects.drain();
        inst.exit(ID, &mut effects, &mut timers);
        assert!(effects.drain().is_empty());
    }

    #[test]
    fn stale_panel_show_is_dropped_after_exit() {
        let mut opts = tooltip_options();
        opts.tooltip.panel = true;
        let mut inst = instance(opts);
        let mut effects = EffectQueue::default();
        let mut timers = TimerQueue::default();

        inst.enter(ID, &mut effects, &mut timers);
        // Exit lands before the deferred show fires.
        inst.exit(ID, &mut effects, &mut timers);
        let _ = effects.drain();

        inst.fire_timer(ID, TimerPurpose::PanelShow, &mut effects);
        assert!(effects.drain().is_empty());

        inst.fire_timer(ID, TimerPurpose::PanelHide, &mut effects);
        let drained = effects.drain();
        assert_eq!(
            drained,
            vec![(ID, Effect::PanelActive { active: false })]
        );
    }

    #[test]
    fn follower_draw_is_suppressed() {
        let mut inst = instance(tooltip_options());
        let mut effects = EffectQueue::default();
        let mut timers = TimerQueue::default();

        inst.set_follower(true);
        inst.enter(ID, &mut effects, &mut timers);

        let input = FrameInput {
            dt: Duration::from_millis(16),
            pointer: Vec2::new(100.0, 100.0),
        };
        assert!(inst.over());
        assert!(inst.draw(&input, &StubCamera).is_none());

        inst.set_follower(false);
        assert!(inst.draw(&input, &StubCamera).is_some());
    }

    #[test]
    fn gaze_draw_requires_looked_flag() {
        let mut opts = tooltip_options();
        opts.interaction.mode = InteractionMode::CenterScreen;
        let mut inst = instance(opts);
        let mut effects = EffectQueue::default();
        let mut timers = TimerQueue::default();

        inst.enter(ID, &mut effects, &mut timers);
        let input = FrameInput::with_dt(Duration::from_millis(16));
        assert!(inst.draw(&input, &StubCamera).is_none());

        inst.set_looked(true);
        assert!(inst.draw(&input, &StubCamera).is_some());
    }

    #[test]
    fn reset_returns_to_fresh_exited_state() {
        let mut opts = tooltip_options();
        opts.tooltip.panel = true;
        let mut inst = instance(opts);
        let mut effects = EffectQueue::default();
        let mut timers = TimerQueue::default();

        inst.enter(ID, &mut effects, &mut timers);
        inst.tick_fade(0.05);
        let _ = effects.drain();

        inst.reset(ID, &mut effects, &mut timers);
        assert!(!inst.over());
        assert!(!inst.is_group_follower());
        assert!(!inst.click_armed());
        assert_eq!(inst.current_text(), "");
        assert_eq!(inst.surface().paints()[0].color, Vec3::splat(0.5));

        let drained = effects.drain();
        assert_eq!(
            drained,
            vec![(ID, Effect::PanelActive { active: false })]
        );
    }

    #[test]
    fn distance_gate_uses_interaction_distance() {
        let opts = Options {
            interaction: InteractionOptions {
                interaction_distance: 5.0,
                ..InteractionOptions::default()
            },
            ..Options::default()
        };
        let inst = instance(opts); // object at z = 10
        assert!(!inst.within_distance(&StubCamera));
    }
}
