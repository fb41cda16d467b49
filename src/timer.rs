//! Single-threaded timer queue for deferred one-shot callbacks.
//!
//! Entries are keyed by (instance, purpose): scheduling an already
//! pending key replaces its delay, and a later transition can cancel a
//! stale entry outright. Timers fire on the first tick at or past their
//! expiry, on the same thread as everything else.

use rustc_hash::FxHashMap;
use web_time::Duration;

use crate::group::InstanceId;

/// Delay before a bound panel is shown or hidden after a transition,
/// avoiding flicker while its layout still depends on a just-updated
/// size/position.
pub(crate) const PANEL_DELAY: Duration = Duration::from_millis(50);

/// Delay after a click-entry before a subsequent click may toggle the
/// exit, so one physical click cannot do both.
pub(crate) const CLICK_ARM_DELAY: Duration = Duration::from_millis(100);

/// What a pending timer will do when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) enum TimerPurpose {
    /// Deferred tooltip-panel activation.
    PanelShow,
    /// Deferred tooltip-panel deactivation.
    PanelHide,
    /// Arm the touch/click debounce.
    ClickArm,
}

/// Pending delays keyed by (instance, purpose).
#[derive(Debug, Default)]
pub(crate) struct TimerQueue {
    pending: FxHashMap<(InstanceId, TimerPurpose), Duration>,
}

impl TimerQueue {
    /// Schedule a timer, replacing any pending entry for the same key.
    pub fn schedule(
        &mut self,
        id: InstanceId,
        purpose: TimerPurpose,
        delay: Duration,
    ) {
        let _ = self.pending.insert((id, purpose), delay);
    }

    /// Cancel a pending timer, if present.
    pub fn cancel(&mut self, id: InstanceId, purpose: TimerPurpose) {
        let _ = self.pending.remove(&(id, purpose));
    }

    /// Cancel every pending timer for an instance.
    pub fn cancel_all(&mut self, id: InstanceId) {
        self.pending.retain(|(owner, _), _| *owner != id);
    }

    /// Advance all pending timers by `dt` and return the keys that
    /// fired, in deterministic (instance, purpose) order.
    pub fn advance(
        &mut self,
        dt: Duration,
    ) -> Vec<(InstanceId, TimerPurpose)> {
        let mut fired = Vec::new();
        self.pending.retain(|key, remaining| {
            *remaining = remaining.saturating_sub(dt);
            if remaining.is_zero() {
                fired.push(*key);
                false
            } else {
                true
            }
        });
        fired.sort_unstable();
        fired
    }

    #[cfg(test)]
    pub fn is_pending(&self, id: InstanceId, purpose: TimerPurpose) -> bool {
        self.pending.contains_key(&(id, purpose))
    }
}
