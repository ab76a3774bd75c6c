//! Render collaborator contract.

use crate::camera::CameraRig;
use crate::scene::SectionRegistry;

/// Issues one frame of output from the current object transforms and
/// camera state.
///
/// Synchronous and side-effect only; the coordinator calls it exactly once
/// per tick, last, after every motion source has been applied.
pub trait Renderer<H> {
    /// Draw the scene.
    fn render(&mut self, registry: &SectionRegistry<H>, camera: &CameraRig);
}
