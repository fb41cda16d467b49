//! Paint state for the materials of one interactive object.
//!
//! The rendering subsystem is opaque to this crate: materials are
//! modeled as plain per-slot paint values that the fade engine writes
//! and the host copies back into its real material handles after each
//! tick. Base colors are captured once at binding time and are the
//! reference points that fade-out interpolates back toward.

use glam::Vec3;

/// Current displayed color and emission of one material slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialPaint {
    /// Displayed base color.
    pub color: Vec3,
    /// Displayed emission color.
    pub emission: Vec3,
}

/// Ordered per-material paint state with captured base colors.
///
/// Paints and base colors are parallel vectors paired by index, so two
/// slots referencing identical material colors stay unambiguous (no
/// identity scan).
#[derive(Debug, Clone, Default)]
pub struct SurfaceBinding {
    paints: Vec<MaterialPaint>,
    base_colors: Vec<Vec3>,
}

impl SurfaceBinding {
    /// Capture a binding from the object's current material colors.
    ///
    /// Each color becomes both the slot's starting paint and its
    /// read-only base reference. Emission starts at black.
    #[must_use]
    pub fn capture(colors: &[Vec3]) -> Self {
        let paints = colors
            .iter()
            .map(|&color| MaterialPaint {
                color,
                emission: Vec3::ZERO,
            })
            .collect();
        Self {
            paints,
            base_colors: colors.to_vec(),
        }
    }

    /// Number of material slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paints.len()
    }

    /// Whether the binding has no material slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paints.is_empty()
    }

    /// Current paint state, one entry per material slot. The host
    /// copies these into its real materials after each tick.
    #[must_use]
    pub fn paints(&self) -> &[MaterialPaint] {
        &self.paints
    }

    /// Base color recorded for a slot, if it exists.
    #[must_use]
    pub fn base_color(&self, slot: usize) -> Option<Vec3> {
        self.base_colors.get(slot).copied()
    }

    /// Iterate mutable paints alongside their base colors.
    pub(crate) fn slots_mut(
        &mut self,
    ) -> impl Iterator<Item = (&mut MaterialPaint, Vec3)> {
        self.paints.iter_mut().zip(self.base_colors.iter().copied())
    }

    /// Snap every slot back to its base color with zero emission.
    pub(crate) fn reset_to_base(&mut self) {
        for (paint, base) in
            self.paints.iter_mut().zip(self.base_colors.iter())
        {
            paint.color = *base;
            paint.emission = Vec3::ZERO;
        }
    }
}
