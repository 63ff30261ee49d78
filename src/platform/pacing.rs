//! Fixed frame-rate pacing
//!
//! Decides when the event loop should request the next redraw. Deadlines
//! advance by whole intervals so the cadence doesn't drift; after a long
//! stall the schedule restarts from now instead of bursting catch-up frames.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    next: Option<Instant>,
}

impl FramePacer {
    /// `target_fps` must be non-zero (checked by config validation)
    pub fn new(target_fps: u32) -> Self {
        Self {
            interval: Duration::from_secs_f64(1.0 / target_fps.max(1) as f64),
            next: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether a frame should be drawn at `now`
    pub fn is_due(&self, now: Instant) -> bool {
        self.next.is_none_or(|deadline| now >= deadline)
    }

    /// A frame was drawn at `now`; schedule the next one
    pub fn mark(&mut self, now: Instant) {
        self.next = Some(match self.next {
            Some(deadline) if now.saturating_duration_since(deadline) < self.interval => {
                deadline + self.interval
            }
            _ => now + self.interval,
        });
    }

    /// When the event loop should wake next, `None` before the first frame
    pub fn next_deadline(&self) -> Option<Instant> {
        self.next
    }
}
