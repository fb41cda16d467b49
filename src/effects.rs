//! Side-effect requests drained by the host each frame.
//!
//! The core never talks to cursor, panel or animation-clip services
//! directly; it queues fire-and-forget requests that the host applies
//! to whatever services actually exist. Missing collaborators simply
//! mean the host ignores the corresponding requests.

use crate::group::InstanceId;

/// Wrap mode requested for an interaction clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipWrap {
    /// Repeat the clip until stopped.
    Loop,
    /// Play the clip once and hold.
    Once,
}

/// A single side-effect request against a host service.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Swap the cursor icon; `None` restores the default cursor.
    SetCursor {
        /// Icon name, or `None` for the default.
        icon: Option<String>,
    },
    /// Show or hide the bound tooltip panel.
    PanelActive {
        /// Desired visibility.
        active: bool,
    },
    /// Seek a clip to a time at a playback speed.
    ClipSeek {
        /// Clip name.
        clip: String,
        /// Seek time in seconds.
        time: f32,
        /// Playback speed (0 freezes the frame).
        speed: f32,
    },
    /// Set a clip's wrap mode before playing it.
    ClipSetWrap {
        /// Clip name.
        clip: String,
        /// Requested wrap mode.
        wrap: ClipWrap,
    },
    /// Start playing a clip by name.
    ClipPlay {
        /// Clip name.
        clip: String,
    },
    /// Stop the currently playing clip.
    ClipStop,
}

/// FIFO of pending effect requests, tagged with the instance that
/// produced them.
#[derive(Debug, Default)]
pub(crate) struct EffectQueue {
    pending: Vec<(InstanceId, Effect)>,
}

impl EffectQueue {
    pub fn push(&mut self, id: InstanceId, effect: Effect) {
        self.pending.push((id, effect));
    }

    pub fn drain(&mut self) -> Vec<(InstanceId, Effect)> {
        std::mem::take(&mut self.pending)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
