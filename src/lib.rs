// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]

//! Pointer/gaze interaction highlighting for interactive 3D scenes.
//!
//! Limn drives the visual side of "the pointer is over that object":
//! a smooth color/emission fade on the object's materials, an optional
//! fan-out of the interaction state across a group of sibling objects,
//! and a positioned floating label near the object or pointer.
//!
//! The crate owns no engine resources. Hit-testing, rendering, input
//! and clip playback stay with the host: raw events come in through
//! [`group::InteractionSet`], material paint state is read back from
//! each instance's [`surface::SurfaceBinding`], tooltip rectangles come
//! out of [`group::InteractionSet::tooltip_draws`], and cursor/panel/
//! clip requests are drained as [`effects::Effect`] values.
//!
//! # Key entry points
//!
//! - [`group::InteractionSet`] - the instance arena and event surface
//! - [`instance::Interaction`] - one object's config + state
//! - [`options::Options`] - per-instance configuration with TOML
//!   preset support
//! - [`tooltip::place`] - the pure placement function
//!
//! # Frame loop
//!
//! ```
//! use glam::Vec3;
//! use limn::group::InteractionSet;
//! use limn::instance::Interaction;
//! use limn::options::Options;
//! use limn::scene::{FrameInput, SceneCamera};
//! use limn::surface::SurfaceBinding;
//!
//! struct Camera;
//! impl SceneCamera for Camera {
//!     fn world_to_screen(&self, w: Vec3) -> Vec3 { w }
//!     fn screen_size(&self) -> glam::Vec2 { glam::Vec2::new(800.0, 600.0) }
//!     fn position(&self) -> Vec3 { Vec3::ZERO }
//! }
//!
//! let mut set = InteractionSet::new();
//! let id = set.insert(Interaction::new(
//!     Options::default(),
//!     Vec3::new(0.0, 0.0, 10.0),
//!     SurfaceBinding::capture(&[Vec3::splat(0.5)]),
//! ));
//!
//! // Per frame: deliver events, tick, read paints, draw, apply effects.
//! set.pointer_enter(id, &Camera);
//! set.tick(&FrameInput::with_dt(std::time::Duration::from_millis(16)));
//! let _paints = set.get(id).map(|i| i.surface().paints().to_vec());
//! let _draws = set.tooltip_draws(
//!     &FrameInput::with_dt(std::time::Duration::from_millis(16)),
//!     &Camera,
//! );
//! for (_id, _effect) in set.drain_effects() {
//!     // forward to cursor/panel/clip services
//! }
//! ```

pub mod effects;
pub mod error;
mod fade;
pub mod group;
pub mod instance;
pub mod options;
pub mod scene;
pub mod surface;
mod timer;
pub mod tooltip;
pub mod util;
