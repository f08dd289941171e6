use web_time::Instant;

/// Per-frame delta-time clock with a smoothed FPS readout.
///
/// [`tick`](Self::tick) yields the non-negative elapsed-seconds value
/// that movement processing consumes
/// ([`Camera::translate`](crate::Camera::translate),
/// [`InputProcessor::advance`](crate::InputProcessor::advance)).
pub struct FrameTiming {
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTiming {
    /// Create a frame timer starting now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
        }
    }

    /// Call once per frame. Returns the seconds elapsed since the
    /// previous call (or since construction) and updates the FPS average.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let dt = elapsed.as_secs_f32();
        if dt > 0.0 {
            let instant_fps = 1.0 / dt;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        dt
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_yields_non_negative_dt() {
        let mut timing = FrameTiming::new();
        for _ in 0..3 {
            assert!(timing.tick() >= 0.0);
        }
    }

    #[test]
    fn tick_measures_elapsed_time() {
        let mut timing = FrameTiming::new();
        std::thread::sleep(std::time::Duration::from_millis(10));
        let dt = timing.tick();
        assert!(dt >= 0.01);
        assert!(dt < 1.0);
    }

    #[test]
    fn fps_stays_finite_and_positive() {
        let mut timing = FrameTiming::new();
        let _ = timing.tick();
        let _ = timing.tick();
        assert!(timing.fps().is_finite());
        assert!(timing.fps() > 0.0);
    }
}
