//! Deterministic placement of section objects and the particle field.
//!
//! Objects alternate sides of the page (text sits on the opposite side)
//! and descend one `objects_distance` per section. Fallback primitives use
//! the same formula as the models they replace, so a failed load lands
//! exactly where the intended object would have been.

use glam::Vec3;
use rand::Rng;

use crate::options::{LayoutOptions, ParticleOptions};

/// Base position for the object of section `index`: even sections sit on
/// the left, odd on the right, each one spacing lower than the last.
#[must_use]
pub fn section_anchor(index: usize, layout: &LayoutOptions) -> Vec3 {
    let x = if index % 2 == 0 {
        -layout.objects_x_offset
    } else {
        layout.objects_x_offset
    };
    Vec3::new(x, -layout.objects_distance * index as f32, 0.0)
}

/// Horizontal extent of the particle field.
const PARTICLE_SPREAD: f32 = 10.0;

/// Scatter particle positions spanning the full scroll range of
/// `section_count` sections.
pub fn scatter_particles<R: Rng + ?Sized>(
    particles: &ParticleOptions,
    section_count: usize,
    layout: &LayoutOptions,
    rng: &mut R,
) -> Vec<Vec3> {
    let span = layout.objects_distance * section_count as f32;
    (0..particles.count)
        .map(|_| {
            Vec3::new(
                (rng.random::<f32>() - 0.5) * PARTICLE_SPREAD,
                layout.objects_distance * 0.5 - rng.random::<f32>() * span,
                (rng.random::<f32>() - 0.5) * PARTICLE_SPREAD,
            )
        })
        .collect()
}
