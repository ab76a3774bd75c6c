//! Shared utilities: easing curves and frame timing.

/// Easing functions for animation interpolation.
pub mod easing;
/// Per-frame delta time and smoothed FPS tracking.
pub mod frame_clock;

pub use easing::EasingFunction;
pub use frame_clock::FrameClock;
