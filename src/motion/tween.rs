//! One-shot section-entered rotation tweens.
//!
//! Entering a section gives its object a flourish: a smooth eased angular
//! increment over a fixed duration. Tweens are keyed by slot and
//! fire-and-forget; starting a new tween on a slot that already has one
//! replaces it mid-flight (last-writer-wins, no queuing). The increment is
//! applied as per-frame deltas, `(ease(t1) - ease(t0)) * total`, so it
//! composes additively with whatever drag, inertia, or idle rotation does
//! to the same object in the same frame.

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::scene::{SceneHandle, SectionRegistry};
use crate::util::easing::EasingFunction;

/// Easing used for section flourishes.
pub const SECTION_EASE: EasingFunction = EasingFunction::QuadraticInOut;

struct RotationTween {
    /// Total rotation added over the tween's life.
    total: Vec3,
    duration: f32,
    easing: EasingFunction,
    elapsed: f32,
    /// Eased progress already applied, for incremental deltas.
    applied: f32,
}

/// Active rotation tweens, keyed by slot.
pub struct TweenEngine {
    active: FxHashMap<usize, RotationTween>,
}

impl TweenEngine {
    /// Engine with no active tweens.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: FxHashMap::default(),
        }
    }

    /// Start (or restart) a tween on `slot` adding `total` radians over
    /// `duration` seconds.
    pub fn start(
        &mut self,
        slot: usize,
        total: Vec3,
        duration: f32,
        easing: EasingFunction,
    ) {
        let _ = self.active.insert(
            slot,
            RotationTween {
                total,
                duration,
                easing,
                elapsed: 0.0,
                applied: 0.0,
            },
        );
    }

    /// Whether `slot` has a tween in flight.
    #[must_use]
    pub fn is_active(&self, slot: usize) -> bool {
        self.active.contains_key(&slot)
    }

    /// Number of tweens in flight.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Advance every active tween by `dt`, applying its incremental
    /// rotation and retiring completed ones.
    pub fn step<H: SceneHandle>(
        &mut self,
        registry: &mut SectionRegistry<H>,
        dt: f32,
    ) {
        self.active.retain(|&slot, tween| {
            tween.elapsed += dt;
            let t = if tween.duration > 0.0 {
                (tween.elapsed / tween.duration).min(1.0)
            } else {
                1.0
            };
            let eased = tween.easing.evaluate(t);

            if let Some(handle) = registry.handle_mut(slot) {
                handle.transform_mut().rotation +=
                    tween.total * (eased - tween.applied);
            }
            tween.applied = eased;

            t < 1.0
        });
    }
}

impl Default for TweenEngine {
    fn default() -> Self {
        Self::new()
    }
}
