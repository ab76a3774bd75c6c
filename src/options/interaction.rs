use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drag-to-rotate behavior.
///
/// Friction and the stop epsilon are fixed constants in
/// [`motion::inertia`](crate::motion::inertia), not options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Interaction", inline)]
#[serde(default)]
pub struct InteractionOptions {
    /// Allow grabbing and spinning objects with mouse or touch.
    #[schemars(title = "Drag to Rotate")]
    pub enable_drag_rotation: bool,
    /// Radians of rotation per pixel of pointer movement.
    #[schemars(title = "Drag Sensitivity", range(min = 0.001, max = 0.02))]
    pub drag_sensitivity: f32,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            enable_drag_rotation: true,
            drag_sensitivity: 0.005,
        }
    }
}
