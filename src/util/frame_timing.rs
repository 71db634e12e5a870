//! Per-frame delta time and smoothed FPS measurement.

use std::time::Instant;

/// Per-frame delta time with a smoothed FPS readout.
pub struct FrameTiming {
    /// Last frame timestamp.
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average.
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0).
    smoothing: f32,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTiming {
    /// Create a new frame timer starting now.
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
    /// previous call and folds it into the smoothed FPS.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        if dt > 0.0 {
            let instant_fps = 1.0 / dt;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        dt
    }

    /// Get the current FPS (smoothed).
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::FrameTiming;

    #[test]
    fn dt_is_non_negative_and_fps_stays_finite() {
        let mut timing = FrameTiming::new();
        for _ in 0..5 {
            let dt = timing.tick();
            assert!(dt >= 0.0);
            assert!(timing.fps().is_finite());
            assert!(timing.fps() > 0.0);
        }
    }

    #[test]
    fn dt_reflects_elapsed_time() {
        let mut timing = FrameTiming::new();
        std::thread::sleep(std::time::Duration::from_millis(10));
        let dt = timing.tick();
        assert!(dt >= 0.01);
    }
}
