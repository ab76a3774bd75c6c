//! Per-section object slots and the seam to the rendering collaborator.

/// Transform value and the opaque renderable handle trait.
pub mod handle;
/// Deterministic section placement and particle scatter.
pub mod layout;
/// The ordered slot list, population, and hit resolution.
pub mod registry;

pub use handle::{NodeId, SceneHandle, Transform};
pub use registry::{
    LoadOutcome, PrimitiveShape, SectionRegistry, ShapeFactory,
};
