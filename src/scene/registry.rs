//! Ordered per-section object slots.
//!
//! Slots are created empty at startup, populated exactly once by the load
//! completion path (with a loaded model or a fallback primitive), and never
//! destroyed. The registry also owns the node-id lookup used to resolve
//! hit-test results to the owning slot.

use rustc_hash::FxHashMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::handle::{NodeId, SceneHandle};
use crate::picking::HitInfo;

/// Result of a collaborator load attempt for one section.
pub enum LoadOutcome<H> {
    /// The asset loaded; `clip_count` animation clips came with it.
    Loaded {
        /// Root handle of the loaded object.
        handle: H,
        /// Number of externally supplied animation clips.
        clip_count: usize,
    },
    /// The asset could not be loaded; the reason is logged, a fallback
    /// primitive takes the slot.
    Failed(String),
}

/// Builds fallback primitive handles when a model fails to load.
///
/// Implemented by the rendering collaborator, which owns geometry.
pub trait ShapeFactory<H> {
    /// Construct a renderable primitive of the given shape.
    fn primitive(&mut self, shape: PrimitiveShape) -> H;
}

/// Fallback primitive shapes, one chosen per failed slot from the
/// configured list.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveShape {
    /// Torus ring.
    #[default]
    Torus,
    /// Cone.
    Cone,
    /// Torus knot.
    TorusKnot,
    /// Octahedron.
    Octahedron,
    /// Icosahedron.
    Icosahedron,
    /// Dodecahedron.
    Dodecahedron,
    /// Cube.
    Cube,
    /// UV sphere.
    Sphere,
}

/// One per-section slot.
struct Slot<H> {
    /// `None` until the loader completes for this section.
    handle: Option<H>,
    /// Set once at load time when the asset carries animation clips and
    /// playback is enabled; never cleared. Gated slots are off-limits to
    /// idle rotation and inertia.
    has_clips: bool,
}

/// Ordered list of per-section object slots plus the root-node lookup used
/// for hit resolution.
pub struct SectionRegistry<H> {
    slots: Vec<Slot<H>>,
    /// Registered slot-root node ids, for the ancestor-walk resolution.
    roots: FxHashMap<NodeId, usize>,
}

impl<H: SceneHandle> SectionRegistry<H> {
    /// Registry with `section_count` empty slots.
    #[must_use]
    pub fn new(section_count: usize) -> Self {
        Self {
            slots: (0..section_count)
                .map(|_| Slot {
                    handle: None,
                    has_clips: false,
                })
                .collect(),
            roots: FxHashMap::default(),
        }
    }

    /// Number of sections (populated or not).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the registry has no sections at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether slot `index` holds an object.
    #[must_use]
    pub fn is_populated(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|s| s.handle.is_some())
    }

    /// Whether slot `index` is driven by an external animation clip.
    ///
    /// Gated slots are never written by the idle or inertia paths.
    #[must_use]
    pub fn is_gated(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|s| s.has_clips)
    }

    /// The object in slot `index`, if populated.
    #[must_use]
    pub fn handle(&self, index: usize) -> Option<&H> {
        self.slots.get(index).and_then(|s| s.handle.as_ref())
    }

    /// Mutable access to the object in slot `index`, if populated.
    pub fn handle_mut(&mut self, index: usize) -> Option<&mut H> {
        self.slots.get_mut(index).and_then(|s| s.handle.as_mut())
    }

    /// Iterate over populated slots as `(index, handle)` pairs.
    pub fn populated(&self) -> impl Iterator<Item = (usize, &H)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.handle.as_ref().map(|h| (i, h)))
    }

    /// Populate slot `index` with a handle, registering its root node for
    /// hit resolution.
    ///
    /// Slots are populated exactly once; a second attempt is logged and
    /// ignored, as is an out-of-range index.
    pub fn populate(&mut self, index: usize, handle: H, has_clips: bool) {
        let Some(slot) = self.slots.get_mut(index) else {
            log::warn!("populate: no section slot {index}");
            return;
        };
        if slot.handle.is_some() {
            log::warn!("populate: slot {index} already populated, ignoring");
            return;
        }
        let _ = self.roots.insert(handle.node_id(), index);
        slot.handle = Some(handle);
        slot.has_clips = has_clips;
    }

    /// Resolve a hit-test result to the owning slot index.
    ///
    /// Walks from the intersected node up its ancestor chain and returns
    /// the first node registered as a slot root, i.e. the nearest ancestor
    /// that is itself a section object. `None` when the hit landed outside
    /// every registered object.
    #[must_use]
    pub fn resolve_hit(&self, hit: &HitInfo) -> Option<usize> {
        std::iter::once(hit.node)
            .chain(hit.ancestors.iter().copied())
            .find_map(|node| self.roots.get(&node).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::handle::Transform;

    struct TestHandle {
        id: NodeId,
        transform: Transform,
    }

    impl TestHandle {
        fn new(id: u64) -> Self {
            Self {
                id: NodeId(id),
                transform: Transform::default(),
            }
        }
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

    #[test]
    fn starts_empty() {
        let registry = SectionRegistry::<TestHandle>::new(4);
        assert_eq!(registry.len(), 4);
        for i in 0..4 {
            assert!(!registry.is_populated(i));
            assert!(!registry.is_gated(i));
            assert!(registry.handle(i).is_none());
        }
        assert_eq!(registry.populated().count(), 0);
    }

    #[test]
    fn populate_registers_root() {
        let mut registry = SectionRegistry::new(3);
        registry.populate(1, TestHandle::new(42), false);

        assert!(registry.is_populated(1));
        let hit = HitInfo {
            node: NodeId(42),
            ancestors: vec![],
        };
        assert_eq!(registry.resolve_hit(&hit), Some(1));
    }

    #[test]
    fn populate_is_exactly_once() {
        let mut registry = SectionRegistry::new(2);
        registry.populate(0, TestHandle::new(1), false);
        registry.populate(0, TestHandle::new(2), true);

        // Second populate ignored: original handle and gate kept
        assert_eq!(registry.handle(0).map(|h| h.node_id()), Some(NodeId(1)));
        assert!(!registry.is_gated(0));
    }

    #[test]
    fn populate_out_of_range_is_ignored() {
        let mut registry = SectionRegistry::new(1);
        registry.populate(5, TestHandle::new(1), false);
        assert_eq!(registry.populated().count(), 0);
    }

    #[test]
    fn gate_flag_is_recorded() {
        let mut registry = SectionRegistry::new(2);
        registry.populate(0, TestHandle::new(1), true);
        registry.populate(1, TestHandle::new(2), false);
        assert!(registry.is_gated(0));
        assert!(!registry.is_gated(1));
    }

    #[test]
    fn resolve_hit_walks_ancestors() {
        let mut registry = SectionRegistry::new(2);
        registry.populate(0, TestHandle::new(10), false);

        // Hit a nested primitive whose chain leads up to the slot root
        let hit = HitInfo {
            node: NodeId(99),
            ancestors: vec![NodeId(50), NodeId(10), NodeId(1)],
        };
        assert_eq!(registry.resolve_hit(&hit), Some(0));
    }

    #[test]
    fn resolve_hit_prefers_nearest_ancestor() {
        let mut registry = SectionRegistry::new(2);
        registry.populate(0, TestHandle::new(10), false);
        registry.populate(1, TestHandle::new(20), false);

        // Nearest registered ancestor wins if chains were ever nested
        let hit = HitInfo {
            node: NodeId(99),
            ancestors: vec![NodeId(20), NodeId(10)],
        };
        assert_eq!(registry.resolve_hit(&hit), Some(1));
    }

    #[test]
    fn resolve_hit_miss_is_none() {
        let mut registry = SectionRegistry::new(1);
        registry.populate(0, TestHandle::new(10), false);

        let hit = HitInfo {
            node: NodeId(7),
            ancestors: vec![NodeId(8)],
        };
        assert_eq!(registry.resolve_hit(&hit), None);
    }
}
