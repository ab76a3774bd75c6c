//! Camera rig: scroll tracking plus pointer parallax.
//!
//! The camera itself rides the scroll position; a parallax group offset on
//! top of it eases toward the pointer every frame, so the view drifts
//! rather than snaps.

use glam::{Vec2, Vec3};

use crate::options::CameraOptions;

/// Parallax easing rate constant, in units of "fraction of remaining
/// distance per second".
pub const PARALLAX_RATE: f32 = 5.0;

/// Viewport dimensions in physical pixels, with pointer normalization
/// helpers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    /// Viewport of the given size; dimensions are clamped to at least one
    /// pixel so normalization never divides by zero.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    /// Width in physical pixels.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Height in physical pixels.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Width over height.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Pointer position normalized to [-0.5, 0.5] on both axes (y down),
    /// as consumed by the parallax easing.
    #[must_use]
    pub fn normalized(&self, pos: Vec2) -> Vec2 {
        Vec2::new(pos.x / self.width - 0.5, pos.y / self.height - 0.5)
    }

    /// Pointer position in normalized device coordinates ([-1, 1], y up),
    /// as consumed by hit testing.
    #[must_use]
    pub fn ndc(&self, pos: Vec2) -> Vec2 {
        Vec2::new(
            pos.x / self.width * 2.0 - 1.0,
            -(pos.y / self.height * 2.0 - 1.0),
        )
    }
}

/// The virtual camera: scroll-tracked height, eased parallax offset, and
/// projection parameters.
pub struct CameraRig {
    /// Camera position before the parallax offset: x stays centered, y
    /// follows scroll, z is the viewing distance.
    position: Vec3,
    /// Parallax group translation, eased toward the pointer target.
    group_offset: Vec2,
    aspect: f32,
    fovy: f32,
}

impl CameraRig {
    /// Rig from camera options and the initial viewport.
    #[must_use]
    pub fn new(options: &CameraOptions, viewport: Viewport) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, options.distance),
            group_offset: Vec2::ZERO,
            aspect: viewport.aspect(),
            fovy: options.fovy,
        }
    }

    /// Pin the camera's vertical position to the scroll-derived height.
    pub fn track_scroll(&mut self, y: f32) {
        self.position.y = y;
    }

    /// Ease the parallax offset toward the pointer-derived target.
    ///
    /// `cursor` is the normalized pointer from
    /// [`Viewport::normalized`]; the offset moves a `PARALLAX_RATE * dt`
    /// fraction of the remaining distance, never snapping.
    pub fn apply_parallax(&mut self, cursor: Vec2, strength: f32, dt: f32) {
        let target = Vec2::new(cursor.x * strength, -cursor.y * strength);
        self.group_offset += (target - self.group_offset) * PARALLAX_RATE * dt;
    }

    /// Recompute the projection aspect for a new viewport. Idempotent.
    pub fn resize(&mut self, viewport: Viewport) {
        self.aspect = viewport.aspect();
    }

    /// World-space eye position: scroll-tracked position plus the parallax
    /// offset.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.position + self.group_offset.extend(0.0)
    }

    /// Camera position before the parallax offset.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Current parallax group offset.
    #[must_use]
    pub fn group_offset(&self) -> Vec2 {
        self.group_offset
    }

    /// Projection aspect ratio.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn fovy(&self) -> f32 {
        self.fovy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rig() -> CameraRig {
        CameraRig::new(&CameraOptions::default(), Viewport::new(1600.0, 900.0))
    }

    #[test]
    fn viewport_normalization() {
        let vp = Viewport::new(1000.0, 500.0);
        assert_eq!(vp.normalized(Vec2::new(500.0, 250.0)), Vec2::ZERO);
        assert_eq!(
            vp.normalized(Vec2::new(1000.0, 0.0)),
            Vec2::new(0.5, -0.5)
        );
        assert_eq!(vp.ndc(Vec2::new(500.0, 250.0)), Vec2::ZERO);
        assert_eq!(vp.ndc(Vec2::new(1000.0, 500.0)), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn viewport_never_zero_sized() {
        let vp = Viewport::new(0.0, -5.0);
        assert_eq!(vp.width(), 1.0);
        assert_eq!(vp.height(), 1.0);
    }

    #[test]
    fn tracks_scroll_height() {
        let mut rig = rig();
        rig.track_scroll(-6.0);
        assert_eq!(rig.position().y, -6.0);
        assert_eq!(rig.eye().y, -6.0);
    }

    #[test]
    fn parallax_eases_toward_target() {
        let mut rig = rig();
        let cursor = Vec2::new(0.5, -0.5);

        rig.apply_parallax(cursor, 0.5, 0.016);
        let first = rig.group_offset();
        assert!(first.x > 0.0 && first.x < 0.25);
        assert!(first.y > 0.0);

        // Converges toward (0.25, 0.25) over many frames
        for _ in 0..500 {
            rig.apply_parallax(cursor, 0.5, 0.016);
        }
        assert!((rig.group_offset().x - 0.25).abs() < 1e-3);
        assert!((rig.group_offset().y - 0.25).abs() < 1e-3);
    }

    #[test]
    fn parallax_strength_zero_stays_centered() {
        let mut rig = rig();
        for _ in 0..100 {
            rig.apply_parallax(Vec2::new(0.5, 0.5), 0.0, 0.016);
        }
        assert_eq!(rig.group_offset(), Vec2::ZERO);
    }

    #[test]
    fn resize_updates_aspect() {
        let mut rig = rig();
        rig.resize(Viewport::new(800.0, 800.0));
        assert_eq!(rig.aspect(), 1.0);
        // Idempotent
        rig.resize(Viewport::new(800.0, 800.0));
        assert_eq!(rig.aspect(), 1.0);
    }
}
