use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::scene::PrimitiveShape;

/// Per-section model entry: asset path plus the spatial adjustments applied
/// when the load completes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct ModelSpec {
    /// Path string resolving to a loadable asset.
    pub path: String,
    /// Uniform scale applied to the loaded object.
    pub scale: f32,
    /// Initial Euler rotation in radians (x, y, z).
    pub rotation: [f32; 3],
    /// Offset added to the computed section anchor, for off-center models.
    pub position: [f32; 3],
}

impl ModelSpec {
    /// Spec for `path` with neutral adjustments.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }
}

impl Default for ModelSpec {
    fn default() -> Self {
        Self {
            path: String::new(),
            scale: 0.5,
            rotation: [0.0; 3],
            position: [0.0; 3],
        }
    }
}

/// Particle field parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Particles", inline)]
#[serde(default)]
pub struct ParticleOptions {
    /// Number of particles scattered across the scroll range.
    #[schemars(title = "Count", range(min = 0, max = 2000))]
    pub count: usize,
    /// Particle point size.
    #[schemars(title = "Size", range(min = 0.005, max = 0.2))]
    pub size: f32,
}

impl Default for ParticleOptions {
    fn default() -> Self {
        Self {
            count: 200,
            size: 0.03,
        }
    }
}

/// Section content: the model list (one entry per section), the fallback
/// shapes substituted on load failure, and the particle field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct SceneOptions {
    /// One model per content section, in section order.
    #[schemars(skip)]
    pub models: Vec<ModelSpec>,
    /// Fallback primitive per section, indexed like `models`; sections
    /// past the end of this list fall back to a torus.
    #[schemars(skip)]
    pub fallback_shapes: Vec<PrimitiveShape>,
    /// Particle field parameters.
    pub particles: ParticleOptions,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            models: (1..=6)
                .map(|i| ModelSpec::new(format!("models/model{i}.glb")))
                .collect(),
            fallback_shapes: vec![
                PrimitiveShape::Torus,
                PrimitiveShape::Cone,
                PrimitiveShape::TorusKnot,
                PrimitiveShape::Octahedron,
                PrimitiveShape::Icosahedron,
                PrimitiveShape::Dodecahedron,
            ],
            particles: ParticleOptions::default(),
        }
    }
}
