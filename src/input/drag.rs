//! Grab-and-spin state machine.
//!
//! One pointer stream, three states: `Idle`, `Hovering` (cursor affordance
//! only), and `Dragging` with exactly one live session. Rotation deltas
//! are applied to the grabbed object as move events arrive; the same
//! deltas are mirrored into the inertia store so a released object keeps
//! spinning at its last drag speed.

use glam::Vec2;

use super::event::CursorIcon;
use crate::motion::inertia::InertiaEngine;
use crate::picking::HitInfo;
use crate::scene::{SceneHandle, SectionRegistry};

/// The one live drag session.
///
/// Holds the slot index only; the handle is re-resolved through the
/// registry on every use. Slots are populated once and never destroyed, so
/// the target always refers to a live object.
struct DragSession {
    target: usize,
    last_pointer: Vec2,
}

enum DragPhase {
    Idle,
    Hovering,
    Dragging(DragSession),
}

/// Tracks hover and the single drag session.
pub(crate) struct DragController {
    phase: DragPhase,
}

impl DragController {
    pub fn new() -> Self {
        Self {
            phase: DragPhase::Idle,
        }
    }

    /// Index of the object currently being dragged, if any.
    pub fn dragged_index(&self) -> Option<usize> {
        match &self.phase {
            DragPhase::Dragging(session) => Some(session.target),
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging(_))
    }

    /// Cursor affordance for the current state.
    pub fn cursor(&self) -> CursorIcon {
        match self.phase {
            DragPhase::Idle => CursorIcon::Default,
            DragPhase::Hovering => CursorIcon::Grab,
            DragPhase::Dragging(_) => CursorIcon::Grabbing,
        }
    }

    /// Pointer moved to `pos`.
    ///
    /// While dragging: rotate the grabbed object by the pointer delta and
    /// capture the same delta as its release velocity. Otherwise: update
    /// the hover affordance from the hit result.
    pub fn on_pointer_move<H: SceneHandle>(
        &mut self,
        pos: Vec2,
        hit: Option<&HitInfo>,
        registry: &mut SectionRegistry<H>,
        inertia: &mut InertiaEngine,
        sensitivity: f32,
    ) {
        if let DragPhase::Dragging(session) = &mut self.phase {
            let delta = pos - session.last_pointer;
            if let Some(handle) = registry.handle_mut(session.target) {
                let rotation = &mut handle.transform_mut().rotation;
                rotation.y += delta.x * sensitivity;
                rotation.x += delta.y * sensitivity;
            }
            // Same deltas as velocity, so inertia continues at the last
            // drag speed
            inertia.set(
                session.target,
                Vec2::new(delta.y * sensitivity, delta.x * sensitivity),
            );
            session.last_pointer = pos;
            return;
        }

        self.phase = match hit.and_then(|h| registry.resolve_hit(h)) {
            Some(_) => DragPhase::Hovering,
            None => DragPhase::Idle,
        };
    }

    /// Pointer or first touch went down at `pos`.
    ///
    /// Starts a session when the hit resolves to a registered slot; resets
    /// that slot's velocity so stale inertia never leaks into a fresh
    /// grab. A press while a session is already live is ignored
    /// (single-pointer model).
    pub fn on_pointer_down<H: SceneHandle>(
        &mut self,
        pos: Vec2,
        hit: Option<&HitInfo>,
        registry: &SectionRegistry<H>,
        inertia: &mut InertiaEngine,
    ) {
        if self.is_dragging() {
            return;
        }
        let Some(target) = hit.and_then(|h| registry.resolve_hit(h)) else {
            return;
        };
        inertia.reset(target);
        self.phase = DragPhase::Dragging(DragSession {
            target,
            last_pointer: pos,
        });
    }

    /// Any release signal: canvas pointer-up, window pointer-up, or
    /// touch-end. Idempotent; a release with no session is a no-op.
    pub fn release(&mut self) {
        self.phase = DragPhase::Idle;
    }
}
