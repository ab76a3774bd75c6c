//! Ambient idle rotation.
//!
//! The default "breathing" motion for objects nobody is interacting with:
//! a constant-rate turn on x and y, the y axis slightly faster. Lowest
//! priority of the rotation writers; it yields to the playback gate, to a
//! live drag, and to residual inertia.

use crate::motion::inertia::InertiaEngine;
use crate::scene::{SceneHandle, SectionRegistry};

/// Idle y-axis rate as a multiple of the x-axis rate.
pub const IDLE_Y_RATIO: f32 = 1.2;

/// Apply one frame of idle rotation to every eligible slot.
///
/// A slot is skipped when it is playback-gated, currently dragged, or
/// still coasting on inertia.
pub fn step<H: SceneHandle>(
    registry: &mut SectionRegistry<H>,
    dt: f32,
    speed: f32,
    dragged: Option<usize>,
    inertia: &InertiaEngine,
) {
    for slot in 0..registry.len() {
        if registry.is_gated(slot)
            || dragged == Some(slot)
            || inertia.is_coasting(slot)
        {
            continue;
        }
        if let Some(handle) = registry.handle_mut(slot) {
            let rotation = &mut handle.transform_mut().rotation;
            rotation.x += dt * speed;
            rotation.y += dt * speed * IDLE_Y_RATIO;
        }
    }
}
