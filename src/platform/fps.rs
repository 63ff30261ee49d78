//! FPS counter helper.

use std::collections::VecDeque;
use std::time::Instant;

/// Frames averaged over
pub const FPS_SAMPLES: usize = 60;

/// Rolling frame-rate estimate from the last `FPS_SAMPLES` frame timestamps
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_times: VecDeque<Instant>,
    fps: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::with_capacity(FPS_SAMPLES + 1),
            fps: 0,
        }
    }

    /// Record a presented frame at `now`
    pub fn tick(&mut self, now: Instant) {
        self.frame_times.push_back(now);
        if self.frame_times.len() > FPS_SAMPLES {
            self.frame_times.pop_front();
        }

        if let (Some(oldest), Some(newest)) = (self.frame_times.front(), self.frame_times.back()) {
            let intervals = (self.frame_times.len() - 1) as f64;
            let elapsed = newest.duration_since(*oldest).as_secs_f64();
            if intervals > 0.0 && elapsed > 0.0 {
                self.fps = (intervals / elapsed).round() as u32;
            }
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn feed(counter: &mut FpsCounter, start: Instant, frames: u32, interval: Duration) -> Instant {
        let mut t = start;
        for _ in 0..frames {
            counter.tick(t);
            t += interval;
        }
        t
    }

    #[test]
    fn test_zero_until_two_frames() {
        let mut counter = FpsCounter::new();
        assert_eq!(counter.fps(), 0);
        counter.tick(Instant::now());
        assert_eq!(counter.fps(), 0);
    }

    #[test]
    fn test_steady_sixty() {
        let mut counter = FpsCounter::new();
        feed(&mut counter, Instant::now(), 120, Duration::from_micros(16_667));
        assert_eq!(counter.fps(), 60);
    }

    #[test]
    fn test_tracks_slowdown() {
        let mut counter = FpsCounter::new();
        let t = feed(&mut counter, Instant::now(), 60, Duration::from_micros(16_667));
        // A full window of 50ms frames pushes the old samples out
        feed(&mut counter, t, 61, Duration::from_millis(50));
        assert_eq!(counter.fps(), 20);
    }
}
