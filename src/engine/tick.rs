//! The per-frame update.
//!
//! One tick, one strict sequence. Camera and parallax first, then the
//! rotation writers in priority order (clip clocks, tweens, inertia, idle),
//! then exactly one render call. The order is load-state agnostic: empty
//! slots fall through every step, and the tick on which a slot becomes
//! populated runs the same code as any other.

use web_time::Instant;

use super::ShowcaseEngine;
use crate::motion::idle;
use crate::render::Renderer;
use crate::scene::SceneHandle;

impl<H: SceneHandle> ShowcaseEngine<H> {
    /// Run one frame: integrate all motion sources and render.
    ///
    /// Call once per display refresh with the current time. Ticks must not
    /// overlap; the host schedules the next one after this call returns
    /// (see the threading note on [`ShowcaseEngine`]).
    pub fn tick<R>(&mut self, now: Instant, renderer: &mut R)
    where
        R: Renderer<H>,
    {
        let dt = self.clock.advance(now);

        // 1. Camera height follows scroll, every frame, event or not
        self.camera.track_scroll(self.scroll.camera_y(
            self.viewport.height(),
            self.options.layout.objects_distance,
        ));

        // 2. Parallax eases toward the pointer
        self.camera.apply_parallax(
            self.cursor,
            self.options.camera.parallax_strength,
            dt,
        );

        // 3. External clip clocks run unconditionally
        self.playback.advance(dt);

        // 4. Section flourishes, additive on top of everything below
        self.tweens.step(&mut self.registry, dt);

        // 5. Released spins coast and decay
        self.inertia.step(&mut self.registry, self.drag.dragged_index());

        // 6. Whatever is left breathes
        idle::step(
            &mut self.registry,
            dt,
            self.options.animation.idle_speed,
            self.drag.dragged_index(),
            &self.inertia,
        );

        // 7. One render of the full scene from the current camera
        renderer.render(&self.registry, &self.camera);
    }
}
