//! Per-frame color/emission interpolation toward a highlight target.
//!
//! The fade is direction-agnostic: the same progress scalar drives both
//! the fade-in toward the highlight color and the fade-out back toward
//! each slot's base color. Progress resets to zero at every `over`
//! transition and advances by `fade_speed * dt` per frame until it
//! saturates at 1.

use glam::Vec3;

use crate::options::{FadeStyle, HighlightOptions};
use crate::surface::{MaterialPaint, SurfaceBinding};
use crate::util::color::{emission_gray, lerp_color};

/// Fade progress plus the paint snapshot captured at the last
/// transition (the lerp source for [`FadeStyle::Linear`]).
#[derive(Debug, Clone)]
pub(crate) struct Fade {
    progress: f32,
    start: Vec<MaterialPaint>,
}

impl Fade {
    /// A settled fade: no interpolation runs until the first reset.
    pub fn settled() -> Self {
        Self {
            progress: 1.0,
            start: Vec::new(),
        }
    }

    /// Reset progress to zero and snapshot the current paints.
    ///
    /// Called exactly at the instant `over` flips, in either direction.
    pub fn reset(&mut self, binding: &SurfaceBinding) {
        self.progress = 0.0;
        self.start.clear();
        self.start.extend_from_slice(binding.paints());
    }

    /// Raw fade progress. May overshoot 1 by up to one frame's advance.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Whether the fade has saturated.
    pub fn done(&self) -> bool {
        self.progress >= 1.0
    }

    /// Force the fade into its saturated state without touching paints.
    pub fn settle(&mut self) {
        self.progress = 1.0;
    }

    /// Apply one frame of interpolation, then advance progress.
    ///
    /// Apply-then-advance matches the source behavior: the factor used
    /// for a frame is the progress value *before* that frame's advance.
    /// Once progress saturates this is a no-op until the next reset.
    pub fn advance(
        &mut self,
        binding: &mut SurfaceBinding,
        entering: bool,
        highlight: &HighlightOptions,
        dt: f32,
    ) {
        if self.done() {
            return;
        }

        let t = self.progress;
        let highlight_color = highlight.color_vec();
        let emission_on = highlight.emission_intensity > 0.0;
        let emission_target = if entering {
            emission_gray(highlight.emission_intensity)
        } else {
            Vec3::ZERO
        };

        for (slot, (paint, base)) in binding.slots_mut().enumerate() {
            let target = if entering { highlight_color } else { base };
            let snapshot = self.start.get(slot).copied().unwrap_or(*paint);

            paint.color = match highlight.fade_style {
                FadeStyle::Exponential => lerp_color(t, paint.color, target),
                FadeStyle::Linear => lerp_color(t, snapshot.color, target),
            };

            if emission_on {
                paint.emission = match highlight.fade_style {
                    FadeStyle::Exponential => {
                        lerp_color(t, paint.emission, emission_target)
                    }
                    FadeStyle::Linear => {
                        lerp_color(t, snapshot.emission, emission_target)
                    }
                };
            }
        }

        self.progress += highlight.fade_speed * dt;

        // The linear ramp promises to land on the target exactly.
        if self.done() && highlight.fade_style == FadeStyle::Linear {
            for (paint, base) in binding.slots_mut() {
                paint.color = if entering { highlight_color } else { base };
                if emission_on {
                    paint.emission = emission_target;
                }
            }
        }
    }
}
