//! The seam between the coordinator and the rendering collaborator.
//!
//! The coordinator never constructs renderable objects; it receives opaque
//! handles from the loader and only ever touches their [`Transform`]. The
//! collaborator implements [`SceneHandle`] on whatever its scene-graph node
//! type is.

use glam::Vec3;

/// Stable identity of a node in the collaborator's scene graph.
///
/// Used to resolve hit-test results back to registered section roots; see
/// [`SectionRegistry::resolve_hit`](super::SectionRegistry::resolve_hit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

/// Mutable spatial state of a renderable object.
///
/// Rotation is a 3-axis Euler angle vector in radians, matching how every
/// motion source in this crate composes: all writers add angular deltas to
/// individual axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World-space position.
    pub position: Vec3,
    /// Euler rotation in radians (x, y, z).
    pub rotation: Vec3,
    /// Uniform scale.
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

/// A renderable object with a mutable 3D orientation and position.
///
/// Implemented by the rendering collaborator; the coordinator holds handles
/// in the [`SectionRegistry`](super::SectionRegistry) and is their only
/// writer between render calls.
pub trait SceneHandle {
    /// Stable identity of this object's root node.
    fn node_id(&self) -> NodeId;

    /// Read access to the object's transform.
    fn transform(&self) -> &Transform;

    /// Write access to the object's transform.
    fn transform_mut(&mut self) -> &mut Transform;
}
