//! The frame coordinator.
//!
//! [`ShowcaseEngine`] owns every piece of interaction state and reconciles
//! the competing motion sources once per display refresh. Input events
//! mutate state as they arrive; [`tick`](ShowcaseEngine::tick) integrates
//! over time and issues the frame's single render call.

mod input;
mod tick;

use glam::{Vec2, Vec3};
use rand::Rng;

use crate::camera::{CameraRig, Viewport};
use crate::input::drag::DragController;
use crate::input::CursorIcon;
use crate::motion::{InertiaEngine, PlaybackMixer, TweenEngine};
use crate::options::Options;
use crate::scene::{
    layout, LoadOutcome, SceneHandle, SectionRegistry, ShapeFactory,
};
use crate::scroll::ScrollTracker;
use crate::util::FrameClock;

/// Coordinates scroll, drag, inertia, idle rotation, and clip playback
/// over one set of section objects.
///
/// # Construction
///
/// Build with [`ShowcaseEngine::new`] from an [`Options`] value and the
/// initial viewport size. Slots start empty; the host kicks off asset
/// loads for [`Options::scene`] entries and reports each completion
/// through [`finish_load`](Self::finish_load).
///
/// # Frame loop
///
/// Forward input via [`handle_event`](Self::handle_event) as it arrives,
/// and call [`tick`](Self::tick) once per display refresh.
///
/// # Threading
///
/// Everything here assumes one logical writer thread: input handlers and
/// the tick callback run to completion on the same thread, which is why
/// the per-slot transforms, the velocity map, and the drag session need no
/// locking. A multi-threaded host must serialize `handle_event` and
/// `tick` calls itself, or funnel events through a queue drained before
/// each tick.
pub struct ShowcaseEngine<H> {
    /// Runtime configuration, fixed at construction.
    options: Options,
    /// Current viewport, for pointer normalization and camera aspect.
    viewport: Viewport,
    /// Per-section object slots.
    registry: SectionRegistry<H>,
    /// Scroll offset to section index mapping.
    scroll: ScrollTracker,
    /// Scroll-tracked camera with pointer parallax.
    camera: CameraRig,
    /// Grab-and-spin state machine.
    drag: DragController,
    /// Post-release spin decay.
    inertia: InertiaEngine,
    /// Section-entered flourishes.
    tweens: TweenEngine,
    /// External clip clocks.
    playback: PlaybackMixer,
    /// Frame delta and FPS tracking.
    clock: FrameClock,
    /// Normalized pointer position in [-0.5, 0.5], parallax input.
    cursor: Vec2,
}

impl<H: SceneHandle> ShowcaseEngine<H> {
    /// Engine with one empty slot per configured section model.
    #[must_use]
    pub fn new(options: Options, viewport_size: (f32, f32)) -> Self {
        let viewport = Viewport::new(viewport_size.0, viewport_size.1);
        let camera = CameraRig::new(&options.camera, viewport);
        let registry = SectionRegistry::new(options.scene.models.len());
        Self {
            options,
            viewport,
            registry,
            scroll: ScrollTracker::new(),
            camera,
            drag: DragController::new(),
            inertia: InertiaEngine::new(),
            tweens: TweenEngine::new(),
            playback: PlaybackMixer::new(),
            clock: FrameClock::new(),
            cursor: Vec2::ZERO,
        }
    }

    /// Complete an asset load for section `index`.
    ///
    /// On success the handle gets the configured scale/rotation and its
    /// section anchor position, and is gated from idle/inertia when it
    /// carries clips (and clip playback is enabled). On failure a
    /// primitive from the configured fallback list takes the slot, at the
    /// exact position the model would have had. Out-of-range indices are
    /// logged and ignored; nothing here is fatal.
    pub fn finish_load<F>(
        &mut self,
        index: usize,
        outcome: LoadOutcome<H>,
        factory: &mut F,
    ) where
        F: ShapeFactory<H>,
    {
        if index >= self.registry.len() {
            log::warn!("finish_load: no section slot {index}");
            return;
        }
        let anchor = layout::section_anchor(index, &self.options.layout);

        match outcome {
            LoadOutcome::Loaded {
                mut handle,
                clip_count,
            } => {
                if let Some(spec) = self.options.scene.models.get(index) {
                    let transform = handle.transform_mut();
                    transform.scale = spec.scale;
                    transform.rotation = Vec3::from_array(spec.rotation);
                    transform.position =
                        anchor + Vec3::from_array(spec.position);
                }
                let gated =
                    clip_count > 0 && self.options.animation.play_clips;
                if gated {
                    self.playback.register(index);
                }
                log::debug!(
                    "section {index}: model loaded ({clip_count} clips)"
                );
                self.registry.populate(index, handle, gated);
            }
            LoadOutcome::Failed(reason) => {
                log::warn!(
                    "section {index}: load failed ({reason}), using fallback \
                     shape"
                );
                let shape = self
                    .options
                    .scene
                    .fallback_shapes
                    .get(index)
                    .copied()
                    .unwrap_or_default();
                let mut handle = factory.primitive(shape);
                handle.transform_mut().position = anchor;
                self.registry.populate(index, handle, false);
            }
        }
    }

    /// Recompute viewport-dependent state for a new window size.
    /// Idempotent; safe to call at any point relative to the frame loop.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        self.camera.resize(self.viewport);
    }

    /// Scatter particle positions spanning the configured sections.
    pub fn particle_field<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Vec3> {
        layout::scatter_particles(
            &self.options.scene.particles,
            self.registry.len(),
            &self.options.layout,
            rng,
        )
    }

    /// Runtime configuration.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The per-section slots.
    #[must_use]
    pub fn registry(&self) -> &SectionRegistry<H> {
        &self.registry
    }

    /// The camera rig.
    #[must_use]
    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    /// Rounded section index as of the last scroll event.
    #[must_use]
    pub fn current_section(&self) -> i32 {
        self.scroll.current_section()
    }

    /// Cursor affordance the host should display.
    #[must_use]
    pub fn cursor_icon(&self) -> CursorIcon {
        self.drag.cursor()
    }

    /// Whether the host should suppress text selection (a drag is live).
    #[must_use]
    pub fn selection_suppressed(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Clip time for an externally animated slot, sampled by the rendering
    /// collaborator each frame. `None` for slots without clips.
    #[must_use]
    pub fn clip_clock(&self, index: usize) -> Option<f32> {
        self.playback.clock(index)
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.clock.fps()
    }
}


#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::testing::{TestFactory, TestHandle};
    use super::ShowcaseEngine;
    use crate::options::Options;
    use crate::scene::{layout, LoadOutcome, PrimitiveShape, SceneHandle};

    fn engine() -> ShowcaseEngine<TestHandle> {
        ShowcaseEngine::new(Options::default(), (1000.0, 1000.0))
    }

    #[test]
    fn slots_start_empty() {
        let engine = engine();
        assert_eq!(engine.registry().len(), 6);
        assert_eq!(engine.registry().populated().count(), 0);
    }

    #[test]
    fn loaded_model_gets_spec_transform() {
        let mut engine = engine();
        let mut factory = TestFactory::new();
        engine.options.scene.models[2].scale = 0.75;
        engine.options.scene.models[2].rotation = [0.1, 0.2, 0.3];
        engine.options.scene.models[2].position = [0.5, -0.5, 0.0];

        engine.finish_load(
            2,
            LoadOutcome::Loaded {
                handle: TestHandle::new(3),
                clip_count: 0,
            },
            &mut factory,
        );

        let handle = engine.registry().handle(2).unwrap();
        let anchor = layout::section_anchor(2, &engine.options().layout);
        assert_eq!(handle.transform().scale, 0.75);
        assert_eq!(handle.transform().rotation, Vec3::new(0.1, 0.2, 0.3));
        assert_eq!(
            handle.transform().position,
            anchor + Vec3::new(0.5, -0.5, 0.0)
        );
    }

    #[test]
    fn clips_gate_the_slot() {
        let mut engine = engine();
        let mut factory = TestFactory::new();

        engine.finish_load(
            0,
            LoadOutcome::Loaded {
                handle: TestHandle::new(1),
                clip_count: 2,
            },
            &mut factory,
        );
        engine.finish_load(
            1,
            LoadOutcome::Loaded {
                handle: TestHandle::new(2),
                clip_count: 0,
            },
            &mut factory,
        );

        assert!(engine.registry().is_gated(0));
        assert_eq!(engine.clip_clock(0), Some(0.0));
        assert!(!engine.registry().is_gated(1));
        assert_eq!(engine.clip_clock(1), None);
    }

    #[test]
    fn play_clips_disabled_never_gates() {
        let mut options = Options::default();
        options.animation.play_clips = false;
        let mut engine =
            ShowcaseEngine::<TestHandle>::new(options, (1000.0, 1000.0));
        let mut factory = TestFactory::new();

        engine.finish_load(
            0,
            LoadOutcome::Loaded {
                handle: TestHandle::new(1),
                clip_count: 3,
            },
            &mut factory,
        );
        assert!(!engine.registry().is_gated(0));
        assert_eq!(engine.clip_clock(0), None);
    }

    #[test]
    fn fallback_matches_model_position_for_all_slots() {
        let mut loaded = engine();
        let mut failed = engine();
        let mut factory = TestFactory::new();

        for k in 0..6 {
            loaded.finish_load(
                k,
                LoadOutcome::Loaded {
                    handle: TestHandle::new(k as u64 + 1),
                    clip_count: 0,
                },
                &mut factory,
            );
            failed.finish_load(
                k,
                LoadOutcome::Failed("unreachable".into()),
                &mut factory,
            );
        }

        for k in 0..6 {
            let model = loaded.registry().handle(k).unwrap();
            let fallback = failed.registry().handle(k).unwrap();
            assert_eq!(
                model.transform().position,
                fallback.transform().position,
                "slot {k} fallback landed elsewhere"
            );
        }
    }

    #[test]
    fn fallback_shape_keyed_by_slot() {
        let mut engine = engine();
        let mut factory = TestFactory::new();

        engine.finish_load(
            1,
            LoadOutcome::Failed("corrupt".into()),
            &mut factory,
        );
        assert_eq!(
            engine.registry().handle(1).unwrap().shape,
            Some(PrimitiveShape::Cone)
        );

        // Past the fallback list: default shape
        engine.options.scene.fallback_shapes.truncate(2);
        engine.finish_load(
            5,
            LoadOutcome::Failed("corrupt".into()),
            &mut factory,
        );
        assert_eq!(
            engine.registry().handle(5).unwrap().shape,
            Some(PrimitiveShape::Torus)
        );
    }

    #[test]
    fn out_of_range_load_is_ignored() {
        let mut engine = engine();
        let mut factory = TestFactory::new();
        engine.finish_load(
            17,
            LoadOutcome::Loaded {
                handle: TestHandle::new(1),
                clip_count: 0,
            },
            &mut factory,
        );
        assert_eq!(engine.registry().populated().count(), 0);
    }

    #[test]
    fn particle_field_spans_sections() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let engine = engine();
        let mut rng = StdRng::seed_from_u64(1);
        let field = engine.particle_field(&mut rng);
        assert_eq!(field.len(), engine.options().scene.particles.count);
    }
}
