//! Centralized runtime options with TOML preset support.
//!
//! Every tunable the host page may set (section model list, layout
//! spacing, drag behavior, camera parallax, animation speeds) is
//! consolidated here and passed to the engine at construction; there is no
//! global mutable configuration. Options serialize to/from TOML for
//! presets; a JSON schema of the UI-exposed sections can be exported for
//! host settings panels.

mod animation;
mod camera;
mod interaction;
mod layout;
mod scene;

use std::path::Path;

pub use animation::{AnimationOptions, SectionTweenOptions};
pub use camera::CameraOptions;
pub use interaction::InteractionOptions;
pub use layout::LayoutOptions;
pub use scene::{ModelSpec, ParticleOptions, SceneOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::VitrineError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[interaction]`) work
/// correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Section model list, fallback shapes, and particle field.
    pub scene: SceneOptions,
    /// Object placement spacing.
    pub layout: LayoutOptions,
    /// Drag-to-rotate behavior.
    pub interaction: InteractionOptions,
    /// Camera projection and pointer parallax.
    pub camera: CameraOptions,
    /// Idle rotation, clip playback, and the section-entered tween.
    pub animation: AnimationOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError`] when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, VitrineError> {
        let content = std::fs::read_to_string(path).map_err(VitrineError::Io)?;
        toml::from_str(&content)
            .map_err(|e| VitrineError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError`] when serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), VitrineError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VitrineError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VitrineError::Io)?;
        }
        std::fs::write(path, content).map_err(VitrineError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[interaction]
drag_sensitivity = 0.01
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.interaction.drag_sensitivity, 0.01);
        // Everything else should be default
        assert!(opts.interaction.enable_drag_rotation);
        assert_eq!(opts.layout.objects_distance, 4.0);
        assert_eq!(opts.camera.parallax_strength, 0.5);
    }

    #[test]
    fn defaults_are_the_documented_values() {
        let opts = Options::default();
        assert_eq!(opts.scene.models.len(), 6);
        assert_eq!(opts.scene.models[0].path, "models/model1.glb");
        assert_eq!(opts.scene.models[0].scale, 0.5);
        assert_eq!(opts.scene.particles.count, 200);
        assert_eq!(opts.scene.particles.size, 0.03);
        assert_eq!(opts.layout.objects_x_offset, 2.0);
        assert_eq!(opts.interaction.drag_sensitivity, 0.005);
        assert_eq!(opts.animation.idle_speed, 0.1);
        assert!(opts.animation.play_clips);
        assert_eq!(opts.animation.section_tween.duration_secs, 1.5);
        assert_eq!(opts.animation.section_tween.rotation, [6.0, 3.0, 1.5]);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("layout"));
        assert!(props.contains_key("interaction"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("animation"));
        assert!(props.contains_key("scene"));
    }
}
