use std::time::Instant;

/// Seconds between FPS readings
pub const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Frame clock - reports delta time between ticks
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Seconds since the previous tick; advances the clock
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Frames-per-second averaged over [`FPS_UPDATE_INTERVAL`]
#[derive(Debug, Default, Clone)]
pub struct FpsCounter {
    frames: u32,
    elapsed: f32,
    fps: f32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one frame; returns the new reading when the interval rolls over
    pub fn record(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.elapsed += delta;

        if self.elapsed < FPS_UPDATE_INTERVAL {
            return None;
        }

        self.fps = self.frames as f32 / self.elapsed;
        self.frames = 0;
        self.elapsed = 0.0;
        Some(self.fps)
    }

    /// Last completed reading
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn clock_measures_delta() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        let delta = clock.tick();

        assert!(delta >= 0.009);
    }

    #[test]
    fn fps_reports_once_per_interval() {
        let mut counter = FpsCounter::new();
        for _ in 0..59 {
            assert_eq!(counter.record(1.0 / 60.0), None);
        }
        let fps = counter.record(1.0 / 60.0 + 0.001).expect("interval elapsed");
        assert!((fps - 60.0).abs() < 0.1);
        assert_eq!(counter.fps(), fps);
    }

    #[test]
    fn fps_starts_at_zero() {
        assert_eq!(FpsCounter::new().fps(), 0.0);
    }
}
