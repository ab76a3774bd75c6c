/// Platform-agnostic input events.
///
/// The host translates its windowing/browser events into these and feeds
/// them to [`ShowcaseEngine::handle_event`](crate::ShowcaseEngine::handle_event).
/// With the `viewer` feature, `From` impls cover the winit types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Page scrolled to an absolute offset in physical pixels.
    Scrolled {
        /// New scroll offset (unbounded; negative during elastic
        /// overscroll).
        offset: f32,
    },
    /// Mouse cursor moved to an absolute position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed at the given position.
    PointerPressed {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
        /// Which button.
        button: PointerButton,
    },
    /// Mouse button released, anywhere in the window.
    PointerReleased {
        /// Which button.
        button: PointerButton,
    },
    /// First touch point went down.
    TouchStarted {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// First touch point moved.
    TouchMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Touch ended or was cancelled.
    TouchEnded,
    /// Window/viewport resized.
    Resized {
        /// New width in physical pixels.
        width: f32,
        /// New height in physical pixels.
        height: f32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary (left) mouse button.
    Primary,
    /// Secondary (right) mouse button.
    Secondary,
    /// Middle mouse button (wheel click).
    Middle,
}

/// Cursor affordance the host should show for the current drag state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorIcon {
    /// Nothing interactive under the pointer.
    #[default]
    Default,
    /// An object is under the pointer and can be grabbed.
    Grab,
    /// An object is being dragged.
    Grabbing,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for PointerButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Secondary,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Primary,
        }
    }
}

#[cfg(feature = "viewer")]
impl From<&winit::event::Touch> for InputEvent {
    fn from(touch: &winit::event::Touch) -> Self {
        let (x, y) =
            (touch.location.x as f32, touch.location.y as f32);
        match touch.phase {
            winit::event::TouchPhase::Started => Self::TouchStarted { x, y },
            winit::event::TouchPhase::Moved => Self::TouchMoved { x, y },
            winit::event::TouchPhase::Ended
            | winit::event::TouchPhase::Cancelled => Self::TouchEnded,
        }
    }
}
