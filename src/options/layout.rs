use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Object placement spacing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
pub struct LayoutOptions {
    /// Vertical distance between section objects; also the camera travel
    /// per viewport height of scroll.
    #[schemars(title = "Section Spacing", range(min = 1.0, max = 10.0))]
    pub objects_distance: f32,
    /// How far left/right of center objects sit (text takes the other
    /// side).
    #[schemars(title = "Side Offset", range(min = 0.0, max = 5.0))]
    pub objects_x_offset: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            objects_distance: 4.0,
            objects_x_offset: 2.0,
        }
    }
}
