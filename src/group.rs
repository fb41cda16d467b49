//! Arena of interaction instances with explicit group fan-out.
//!
//! Raw input events are delivered here, addressed by instance. The set
//! validates each event once on the origin instance (mode and distance
//! gates), then replicates the accepted transition to every member of
//! the origin's group — followers accept the propagated transition
//! unconditionally and are flagged so only the origin renders a
//! tooltip. Group membership is an explicit table supplied through
//! [`set_group`](InteractionSet::set_group), not discovered by walking
//! a scene hierarchy.

use log::debug;

use crate::effects::{Effect, EffectQueue};
use crate::instance::Interaction;
use crate::options::InteractionMode;
use crate::scene::{FrameInput, SceneCamera};
use crate::timer::{TimerPurpose, TimerQueue, CLICK_ARM_DELAY};
use crate::tooltip::TooltipDraw;

/// Stable index of an instance within an [`InteractionSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(pub(crate) usize);

impl InstanceId {
    /// Raw arena index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy)]
enum Transition {
    Enter,
    Exit,
}

/// Owns every interaction instance plus the timer queue and the pending
/// side-effect requests. The host's per-frame loop calls
/// [`tick`](Self::tick), copies paints out of each instance's surface,
/// renders [`tooltip_draws`](Self::tooltip_draws) and applies
/// [`drain_effects`](Self::drain_effects).
#[derive(Default)]
pub struct InteractionSet {
    instances: Vec<Interaction>,
    group_of: Vec<Option<usize>>,
    groups: Vec<Vec<InstanceId>>,
    timers: TimerQueue,
    effects: EffectQueue,
}

impl InteractionSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an instance to the arena. Instances start ungrouped.
    pub fn insert(&mut self, instance: Interaction) -> InstanceId {
        let id = InstanceId(self.instances.len());
        self.instances.push(instance);
        self.group_of.push(None);
        id
    }

    /// Declare a group: a transition accepted by any member fans out to
    /// all of them. An instance belongs to at most one group; grouping
    /// it again moves it out of its previous group. Unknown ids are
    /// ignored.
    pub fn set_group(&mut self, members: &[InstanceId]) {
        for member in members {
            if let Some(prior) =
                self.group_of.get(member.0).copied().flatten()
            {
                if let Some(group) = self.groups.get_mut(prior) {
                    group.retain(|m| m != member);
                }
            }
        }

        let mut group: Vec<InstanceId> = Vec::with_capacity(members.len());
        for member in members {
            if member.0 < self.instances.len() && !group.contains(member) {
                group.push(*member);
            }
        }

        let index = self.groups.len();
        for member in &group {
            self.group_of[member.0] = Some(index);
        }
        self.groups.push(group);
    }

    /// Number of instances in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether the arena is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Read access to an instance.
    #[must_use]
    pub fn get(&self, id: InstanceId) -> Option<&Interaction> {
        self.instances.get(id.0)
    }

    /// Iterate all instances in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Interaction> {
        self.instances.iter()
    }

    /// Update an instance's world position (moving objects).
    pub fn set_world_position(
        &mut self,
        id: InstanceId,
        world_position: glam::Vec3,
    ) {
        if let Some(inst) = self.instances.get_mut(id.0) {
            inst.set_world_position(world_position);
        }
    }

    /// Pointer entered the object (from the external hit-testing
    /// service). Pointer mode only; gated on interaction distance.
    pub fn pointer_enter(&mut self, id: InstanceId, camera: &dyn SceneCamera) {
        let Some(origin) = self.instances.get(id.0) else {
            return;
        };
        if origin.options().interaction.mode != InteractionMode::Pointer
            || origin.over()
            || !origin.within_distance(camera)
        {
            return;
        }
        debug!("pointer enter on {id:?}");
        self.fan_out(id, Transition::Enter, None);
    }

    /// Pointer left the object. Pointer mode only.
    pub fn pointer_exit(&mut self, id: InstanceId) {
        let Some(origin) = self.instances.get(id.0) else {
            return;
        };
        if origin.options().interaction.mode != InteractionMode::Pointer
            || !origin.over()
        {
            return;
        }
        debug!("pointer exit on {id:?}");
        self.fan_out(id, Transition::Exit, None);
    }

    /// Click/tap landed on the object. Touch/click mode only.
    ///
    /// A first click enters (distance-gated) and starts the 0.1 s
    /// debounce; once armed, a later click while over toggles the exit.
    pub fn click_down(&mut self, id: InstanceId, camera: &dyn SceneCamera) {
        let Some(origin) = self.instances.get(id.0) else {
            return;
        };
        if origin.options().interaction.mode != InteractionMode::TouchClick {
            return;
        }

        if origin.over() {
            if origin.click_armed() {
                debug!("click exit on {id:?}");
                self.fan_out(id, Transition::Exit, None);
            }
        } else if origin.within_distance(camera) {
            debug!("click enter on {id:?}");
            self.fan_out(id, Transition::Enter, None);
            self.timers
                .schedule(id, TimerPurpose::ClickArm, CLICK_ARM_DELAY);
        }
    }

    /// The gaze ray settled on the object. Center-screen mode only;
    /// idempotent via the looked flag, gated on interaction distance.
    pub fn gaze_enter(&mut self, id: InstanceId, camera: &dyn SceneCamera) {
        let Some(origin) = self.instances.get(id.0) else {
            return;
        };
        if origin.options().interaction.mode != InteractionMode::CenterScreen
            || origin.looked_by_cam()
            || !origin.within_distance(camera)
        {
            return;
        }
        debug!("gaze enter on {id:?}");
        self.fan_out(id, Transition::Enter, Some(true));
    }

    /// The gaze ray left the object. Center-screen mode only.
    pub fn gaze_exit(&mut self, id: InstanceId) {
        let Some(origin) = self.instances.get(id.0) else {
            return;
        };
        if origin.options().interaction.mode != InteractionMode::CenterScreen
            || !origin.looked_by_cam()
        {
            return;
        }
        debug!("gaze exit on {id:?}");
        self.fan_out(id, Transition::Exit, Some(false));
    }

    /// Per-frame update: fire due timers, then advance every fade.
    pub fn tick(&mut self, input: &FrameInput) {
        let fired = self.timers.advance(input.dt);
        for (id, purpose) in fired {
            if let Some(inst) = self.instances.get_mut(id.0) {
                inst.fire_timer(id, purpose, &mut self.effects);
            }
        }

        let dt = input.dt.as_secs_f32();
        for inst in &mut self.instances {
            inst.tick_fade(dt);
        }
    }

    /// This frame's tooltip output across all instances. Followers and
    /// idle instances contribute nothing.
    #[must_use]
    pub fn tooltip_draws(
        &self,
        input: &FrameInput,
        camera: &dyn SceneCamera,
    ) -> Vec<TooltipDraw> {
        self.instances
            .iter()
            .filter_map(|inst| inst.draw(input, camera))
            .collect()
    }

    /// Take the pending side-effect requests, oldest first.
    pub fn drain_effects(&mut self) -> Vec<(InstanceId, Effect)> {
        self.effects.drain()
    }

    /// Return an instance to a fresh exited configuration (object
    /// destroyed or disabled). Does not fan out: siblings keep their
    /// own state.
    pub fn reset(&mut self, id: InstanceId) {
        if let Some(inst) = self.instances.get_mut(id.0) {
            inst.reset(id, &mut self.effects, &mut self.timers);
        }
    }

    fn members_of(&self, id: InstanceId) -> Vec<InstanceId> {
        self.group_of
            .get(id.0)
            .copied()
            .flatten()
            .and_then(|gi| self.groups.get(gi).cloned())
            .unwrap_or_else(|| vec![id])
    }

    /// Replicate an accepted transition to every group member. Gates
    /// were already evaluated on the origin; followers accept
    /// unconditionally.
    fn fan_out(
        &mut self,
        origin: InstanceId,
        transition: Transition,
        looked: Option<bool>,
    ) {
        let members = self.members_of(origin);
        let Self {
            instances,
            timers,
            effects,
            ..
        } = self;

        for member in members {
            let Some(inst) = instances.get_mut(member.0) else {
                continue;
            };
            if let Some(looked) = looked {
                inst.set_looked(looked);
            }
            match transition {
                Transition::Enter => {
                    inst.set_follower(member != origin);
                    inst.enter(member, effects, timers);
                }
                Transition::Exit => {
                    inst.set_follower(false);
                    inst.exit(member, effects, timers);
                }
            }
        }
    }
}
