//! Frame timing and performance monitoring.

use std::collections::VecDeque;
use std::time::Instant;

/// Rolling window of frame durations, in seconds.
pub struct FrameTimer {
    samples: VecDeque<f64>,
    last_tick: Instant,
    window: usize,
}

impl FrameTimer {
    /// Create a frame timer with a default 240-sample rolling window.
    pub fn new() -> Self {
        Self {
            samples: VecDeque::new(),
            last_tick: Instant::now(),
            window: 240,
        }
    }

    /// Record the start of a new frame. Call once per frame.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_tick).as_secs_f64();
        self.last_tick = now;

        self.samples.push_back(dt);
        if self.samples.len() > self.window {
            self.samples.pop_front();
        }
    }

    /// Average frames per second over the sample window.
    pub fn average_fps(&self) -> f64 {
        let total: f64 = self.samples.iter().sum();
        if total <= 0.0 {
            return 0.0;
        }
        self.samples.len() as f64 / total
    }

    /// Average frame time in milliseconds.
    pub fn average_frame_ms(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let total: f64 = self.samples.iter().sum();
        total / self.samples.len() as f64 * 1000.0
    }

    /// Slowest frame in the window, in milliseconds.
    pub fn worst_frame_ms(&self) -> f64 {
        self.samples.iter().copied().fold(0.0, f64::max) * 1000.0
    }

    /// Number of frame samples currently stored.
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Drop all samples, e.g. after the scene changed size.
    pub fn reset(&mut self) {
        self.samples.clear();
        self.last_tick = Instant::now();
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn initial_stats_are_zero() {
        let timer = FrameTimer::new();
        assert_eq!(timer.average_fps(), 0.0);
        assert_eq!(timer.average_frame_ms(), 0.0);
        assert_eq!(timer.worst_frame_ms(), 0.0);
        assert_eq!(timer.sample_count(), 0);
    }

    #[test]
    fn stats_after_frames() {
        let mut timer = FrameTimer::new();
        for _ in 0..10 {
            std::thread::sleep(Duration::from_millis(1));
            timer.tick();
        }
        assert!(timer.average_fps() > 0.0);
        assert!(timer.average_frame_ms() > 0.0);
        assert!(timer.worst_frame_ms() >= timer.average_frame_ms());
        assert_eq!(timer.sample_count(), 10);
    }

    #[test]
    fn window_is_bounded() {
        let mut timer = FrameTimer::new();
        for _ in 0..500 {
            timer.tick();
        }
        assert!(timer.sample_count() <= 240);
    }

    #[test]
    fn reset_clears_samples() {
        let mut timer = FrameTimer::new();
        timer.tick();
        timer.reset();
        assert_eq!(timer.sample_count(), 0);
    }
}
