//! Event dispatch: scroll, pointer, touch, and resize.
//!
//! Events mutate state synchronously as they arrive; nothing here
//! integrates over time. Mouse and single-touch streams share one code
//! path into the drag controller.

use glam::Vec2;

use super::ShowcaseEngine;
use crate::input::{InputEvent, PointerButton};
use crate::picking::HitTester;
use crate::scene::SceneHandle;

impl<H: SceneHandle> ShowcaseEngine<H> {
    /// Feed one input event into the engine.
    ///
    /// `tester` is the collaborator's hit-test provider; it is consulted
    /// only for pointer moves outside a drag and for press/touch-start.
    pub fn handle_event<T>(&mut self, event: InputEvent, tester: &T)
    where
        T: HitTester + ?Sized,
    {
        match event {
            InputEvent::Scrolled { offset } => self.on_scrolled(offset),
            InputEvent::CursorMoved { x, y } => {
                let pos = Vec2::new(x, y);
                self.cursor = self.viewport.normalized(pos);
                self.pointer_moved(pos, tester);
            }
            InputEvent::PointerPressed { x, y, button } => {
                if button == PointerButton::Primary {
                    self.pointer_pressed(Vec2::new(x, y), tester);
                }
            }
            InputEvent::PointerReleased { button } => {
                if button == PointerButton::Primary {
                    self.drag.release();
                }
            }
            // Touch streams reuse the pointer path; only the first touch
            // point ever reaches the engine
            InputEvent::TouchStarted { x, y } => {
                self.pointer_pressed(Vec2::new(x, y), tester);
            }
            InputEvent::TouchMoved { x, y } => {
                self.pointer_moved(Vec2::new(x, y), tester);
            }
            InputEvent::TouchEnded => self.drag.release(),
            InputEvent::Resized { width, height } => {
                self.resize(width, height);
            }
        }
    }

    /// Scroll offset changed; fire the section flourish on a change.
    fn on_scrolled(&mut self, offset: f32) {
        let Some(index) =
            self.scroll.on_scroll(offset, self.viewport.height())
        else {
            return;
        };
        self.section_entered(index);
    }

    /// A new section came into view. Start its object's flourish, unless
    /// the slot is still loading (or out of range entirely).
    fn section_entered(&mut self, index: i32) {
        let Ok(slot) = usize::try_from(index) else {
            return;
        };
        if !self.registry.is_populated(slot) {
            return;
        }
        let tween = &self.options.animation.section_tween;
        self.tweens.start(
            slot,
            glam::Vec3::from_array(tween.rotation),
            tween.duration_secs,
            crate::motion::tween::SECTION_EASE,
        );
        log::debug!("section {index} entered");
    }

    fn pointer_moved<T>(&mut self, pos: Vec2, tester: &T)
    where
        T: HitTester + ?Sized,
    {
        if !self.options.interaction.enable_drag_rotation {
            return;
        }
        // No hit testing mid-drag; the session owns the pointer
        let hit = if self.drag.is_dragging() {
            None
        } else {
            tester.intersect(self.viewport.ndc(pos))
        };
        self.drag.on_pointer_move(
            pos,
            hit.as_ref(),
            &mut self.registry,
            &mut self.inertia,
            self.options.interaction.drag_sensitivity,
        );
    }

    fn pointer_pressed<T>(&mut self, pos: Vec2, tester: &T)
    where
        T: HitTester + ?Sized,
    {
        if !self.options.interaction.enable_drag_rotation
            || self.drag.is_dragging()
        {
            return;
        }
        let hit = tester.intersect(self.viewport.ndc(pos));
        self.drag.on_pointer_down(
            pos,
            hit.as_ref(),
            &self.registry,
            &mut self.inertia,
        );
    }
}
