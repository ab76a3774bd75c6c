use web_time::Instant;

/// Per-frame clock: delta time, total elapsed time, and a smoothed FPS
/// estimate.
///
/// The host passes the current [`Instant`] into
/// [`advance`](FrameClock::advance) once per frame; all time-scaled motion
/// uses the returned delta.
pub struct FrameClock {
    /// When the clock was created.
    started: Instant,
    /// Last frame timestamp.
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average.
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0).
    smoothing: f32,
}

impl FrameClock {
    /// Create a clock starting now.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last_frame: now,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
        }
    }

    /// Advance the clock to `now` and return the frame delta in seconds.
    pub fn advance(&mut self, now: Instant) -> f32 {
        let dt = now
            .saturating_duration_since(self.last_frame)
            .as_secs_f32();
        self.last_frame = now;

        if dt > 0.0 {
            let instant_fps = 1.0 / dt;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        dt
    }

    /// Total elapsed time in seconds since the clock was created.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> f32 {
        now.saturating_duration_since(self.started).as_secs_f32()
    }

    /// Get the current FPS (smoothed).
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
