//! Hit-test collaborator contract.
//!
//! The coordinator never walks the collaborator's scene graph; it asks for
//! the nearest intersected primitive plus that primitive's ancestor chain,
//! then resolves the chain against registered section roots (see
//! [`SectionRegistry::resolve_hit`](crate::scene::SectionRegistry::resolve_hit)).

use glam::Vec2;

use crate::scene::NodeId;

/// Result of a ray cast through the pointer position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitInfo {
    /// The nearest intersected primitive.
    pub node: NodeId,
    /// Ancestors of `node`, nearest first, up to the scene root.
    pub ancestors: Vec<NodeId>,
}

/// Ray hit-testing, implemented by the rendering collaborator.
pub trait HitTester {
    /// Nearest hit under the pointer, or `None` for a miss.
    ///
    /// `pointer_ndc` is the pointer in normalized device coordinates
    /// ([-1, 1] on both axes, y up), as produced by
    /// [`Viewport::ndc`](crate::camera::Viewport::ndc).
    fn intersect(&self, pointer_ndc: Vec2) -> Option<HitInfo>;
}
