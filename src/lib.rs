// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
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
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Float literals in interaction math are compared exactly on purpose
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]

//! Scroll-synchronized interactive 3D showcase engine.
//!
//! Vitrine coordinates the motion of a column of 3D objects, one per
//! content section of a scrolling page: the camera tracks scroll position,
//! each object can be grabbed and spun with mouse or touch, released spins
//! decay under friction, and objects that nobody is touching either play
//! their own animation clips or breathe with a slow idle rotation.
//!
//! Rendering, asset decoding, and scene-graph construction are collaborator
//! concerns behind small traits; the crate only reads and writes object
//! transforms through [`scene::SceneHandle`].
//!
//! # Key entry points
//!
//! - [`engine::ShowcaseEngine`] - the per-frame coordinator
//! - [`scene::SectionRegistry`] - per-section object slots
//! - [`options::Options`] - runtime configuration (layout, interaction,
//!   camera, animation)
//! - [`input::InputEvent`] - platform-agnostic input events
//!
//! # Architecture
//!
//! Input events (scroll, pointer, touch, resize) mutate small pieces of
//! state synchronously as they arrive. Once per display refresh the host
//! calls [`ShowcaseEngine::tick`](engine::ShowcaseEngine::tick), which
//! advances the camera, external clip clocks, section tweens, inertia, and
//! idle rotation in a fixed order, then issues exactly one render call.
//! Everything runs on one logical thread; the motion sources never race
//! because they are sequenced, not locked.

pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod motion;
pub mod options;
pub mod picking;
pub mod render;
pub mod scene;
pub mod scroll;
pub mod util;

pub use engine::ShowcaseEngine;
pub use error::VitrineError;
pub use options::Options;
