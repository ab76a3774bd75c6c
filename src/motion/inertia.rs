//! Post-release rotational inertia.
//!
//! A sparse per-slot angular velocity store: absent entry means zero. The
//! drag controller writes entries while a grab is live; every frame the
//! engine applies each entry to its object and decays it by a constant
//! friction factor, deliberately per-frame rather than time-scaled to
//! match how drag deltas were captured. Once both components fall under
//! the epsilon the entry is dropped, returning the slot to the idle pool.

use glam::Vec2;
use rustc_hash::FxHashMap;

use crate::scene::{SceneHandle, SectionRegistry};

/// Velocity retained per frame after release.
pub const FRICTION: f32 = 0.95;

/// Below this per-axis speed the spin is considered stopped.
pub const VELOCITY_EPSILON: f32 = 1e-4;

/// Sparse per-slot angular velocity store with friction decay.
pub struct InertiaEngine {
    velocities: FxHashMap<usize, Vec2>,
}

impl InertiaEngine {
    /// Engine with no stored velocities.
    #[must_use]
    pub fn new() -> Self {
        Self {
            velocities: FxHashMap::default(),
        }
    }

    /// Current velocity for `slot`; zero when absent.
    ///
    /// `x` is the x-axis angular rate (vertical pointer movement), `y`
    /// the y-axis rate (horizontal pointer movement).
    #[must_use]
    pub fn velocity(&self, slot: usize) -> Vec2 {
        self.velocities.get(&slot).copied().unwrap_or(Vec2::ZERO)
    }

    /// Whether `slot` still has non-negligible spin.
    #[must_use]
    pub fn is_coasting(&self, slot: usize) -> bool {
        self.velocities.get(&slot).is_some_and(|v| {
            v.x.abs() > VELOCITY_EPSILON || v.y.abs() > VELOCITY_EPSILON
        })
    }

    /// Overwrite the velocity for `slot` (drag capture path).
    pub fn set(&mut self, slot: usize, velocity: Vec2) {
        let _ = self.velocities.insert(slot, velocity);
    }

    /// Zero the velocity for `slot` (grab start).
    pub fn reset(&mut self, slot: usize) {
        let _ = self.velocities.insert(slot, Vec2::ZERO);
    }

    /// Apply one frame of inertia: `rotation += v; v *= FRICTION` per
    /// stored entry, then snap-and-drop entries below the epsilon.
    ///
    /// The dragged slot is excluded entirely (neither applied nor
    /// decayed); its captured velocity waits for release. Entries for
    /// playback-gated slots are dropped without ever being applied: the
    /// gate outranks inertia for the life of the object.
    pub fn step<H: SceneHandle>(
        &mut self,
        registry: &mut SectionRegistry<H>,
        dragged: Option<usize>,
    ) {
        self.velocities.retain(|&slot, velocity| {
            if dragged == Some(slot) {
                return true;
            }
            if registry.is_gated(slot) {
                return false;
            }
            let Some(handle) = registry.handle_mut(slot) else {
                // Not populated yet; retry once the loader fills the slot
                return true;
            };

            let rotation = &mut handle.transform_mut().rotation;
            rotation.x += velocity.x;
            rotation.y += velocity.y;

            *velocity *= FRICTION;

            velocity.x.abs() >= VELOCITY_EPSILON
                || velocity.y.abs() >= VELOCITY_EPSILON
        });
    }
}

impl Default for InertiaEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::scene::{NodeId, Transform};

    struct TestHandle {
        id: NodeId,
        transform: Transform,
    }

    impl SceneHandle for TestHandle {
        fn node_id(&self) -> NodeId {
            self.id
        }
        fn transform(&self) -> &Transform {
            &self.transform
        }
        fn transform_mut(&mut self) -> &mut Transform {
            &mut self.transform
        }
    }

    fn registry(gated: &[bool]) -> SectionRegistry<TestHandle> {
        let mut registry = SectionRegistry::new(gated.len());
        for (i, &g) in gated.iter().enumerate() {
            registry.populate(
                i,
                TestHandle {
                    id: NodeId(i as u64 + 1),
                    transform: Transform::default(),
                },
                g,
            );
        }
        registry
    }

    #[test]
    fn absent_entry_reads_zero() {
        let inertia = InertiaEngine::new();
        assert_eq!(inertia.velocity(5), Vec2::ZERO);
        assert!(!inertia.is_coasting(5));
    }

    #[test]
    fn decays_by_friction_each_step() {
        let mut registry = registry(&[false]);
        let mut inertia = InertiaEngine::new();
        inertia.set(0, Vec2::new(0.0, 0.5));

        inertia.step(&mut registry, None);

        // Rotation got the pre-decay velocity; the store got one friction
        // step
        let rotation = registry.handle(0).unwrap().transform().rotation;
        assert_eq!(rotation, Vec3::new(0.0, 0.5, 0.0));
        assert_eq!(inertia.velocity(0), Vec2::new(0.0, 0.475));
    }

    #[test]
    fn reaches_exact_zero_in_bounded_ticks() {
        let mut registry = registry(&[false]);
        let mut inertia = InertiaEngine::new();
        inertia.set(0, Vec2::new(0.5, 0.5));

        let mut ticks = 0;
        while inertia.is_coasting(0) {
            inertia.step(&mut registry, None);
            ticks += 1;
            assert!(ticks < 500, "inertia never terminated");
        }

        // Terminal state is exact zero (absent entry), not a denormal tail
        assert_eq!(inertia.velocity(0), Vec2::ZERO);
        assert!(ticks < 200);
    }

    #[test]
    fn dragged_slot_is_untouched() {
        let mut registry = registry(&[false, false]);
        let mut inertia = InertiaEngine::new();
        inertia.set(0, Vec2::new(0.0, 0.5));
        inertia.set(1, Vec2::new(0.0, 0.5));

        inertia.step(&mut registry, Some(0));

        // Slot 0: no rotation applied, no decay
        assert_eq!(
            registry.handle(0).unwrap().transform().rotation,
            Vec3::ZERO
        );
        assert_eq!(inertia.velocity(0), Vec2::new(0.0, 0.5));
        // Slot 1 coasts normally
        assert_eq!(inertia.velocity(1), Vec2::new(0.0, 0.475));
    }

    #[test]
    fn gated_slot_entry_dropped_unapplied() {
        let mut registry = registry(&[true]);
        let mut inertia = InertiaEngine::new();
        inertia.set(0, Vec2::new(0.2, 0.2));

        inertia.step(&mut registry, None);

        assert_eq!(
            registry.handle(0).unwrap().transform().rotation,
            Vec3::ZERO
        );
        assert_eq!(inertia.velocity(0), Vec2::ZERO);
        assert!(!inertia.is_coasting(0));
    }

    #[test]
    fn unpopulated_slot_entry_is_kept_for_later() {
        let mut registry = SectionRegistry::<TestHandle>::new(2);
        let mut inertia = InertiaEngine::new();
        inertia.set(1, Vec2::new(0.0, 0.5));

        inertia.step(&mut registry, None);
        assert_eq!(inertia.velocity(1), Vec2::new(0.0, 0.5));
    }

    #[test]
    fn exact_zero_entry_is_dropped() {
        let mut registry = registry(&[false]);
        let mut inertia = InertiaEngine::new();
        inertia.reset(0);

        inertia.step(&mut registry, None);
        assert_eq!(inertia.velocity(0), Vec2::ZERO);
        assert_eq!(
            registry.handle(0).unwrap().transform().rotation,
            Vec3::ZERO
        );
    }
}
