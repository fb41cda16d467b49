//! Shared utilities for the interaction core.
//!
//! Helpers for frame timing and color interpolation.

pub mod clock;
pub mod color;
