//! The competing motion sources reconciled by the frame coordinator.
//!
//! Priority between the rotation writers is drag > inertia > idle, with
//! external clip playback independent of all three. Each source checks the
//! ones above it before touching a slot, so at most one of them governs a
//! given object's orientation at any instant.

/// Ambient "breathing" rotation for untouched objects.
pub mod idle;
/// Post-release angular velocity with friction decay.
pub mod inertia;
/// External animation clip clocks and the playback gate.
pub mod playback;
/// One-shot section-entered rotation tweens.
pub mod tween;

pub use inertia::InertiaEngine;
pub use playback::PlaybackMixer;
pub use tween::TweenEngine;
