use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Camera projection and pointer parallax parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0))]
    pub fovy: f32,
    /// Camera distance from the object column.
    #[schemars(skip)]
    pub distance: f32,
    /// Pointer parallax strength (0 = none, 1 = strong).
    #[schemars(title = "Parallax", range(min = 0.0, max = 1.0))]
    pub parallax_strength: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 35.0,
            distance: 6.0,
            parallax_strength: 0.5,
        }
    }
}
