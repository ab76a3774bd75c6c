use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The one-shot spin applied to a section's object when the viewer scrolls
/// into that section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Section Tween", inline)]
#[serde(default)]
pub struct SectionTweenOptions {
    /// Tween duration in seconds.
    #[schemars(title = "Duration", range(min = 0.0, max = 5.0))]
    pub duration_secs: f32,
    /// Total added rotation in radians (x, y, z).
    #[schemars(skip)]
    pub rotation: [f32; 3],
}

impl Default for SectionTweenOptions {
    fn default() -> Self {
        Self {
            duration_secs: 1.5,
            rotation: [6.0, 3.0, 1.5],
        }
    }
}

/// Idle rotation, clip playback, and the section-entered tween.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
pub struct AnimationOptions {
    /// Play animation clips shipped with loaded models. A slot with
    /// playing clips is never idle-rotated.
    #[schemars(title = "Play Clips")]
    pub play_clips: bool,
    /// Idle "breathing" rotation rate in radians per second (x axis; the
    /// y axis turns 1.2x faster).
    #[schemars(title = "Idle Speed", range(min = 0.0, max = 0.5))]
    pub idle_speed: f32,
    /// Section-entered tween parameters.
    pub section_tween: SectionTweenOptions,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            play_clips: true,
            idle_speed: 0.1,
            section_tween: SectionTweenOptions::default(),
        }
    }
}
