//! Fixed-rate frame pacing
//!
//! The simulation moves a fixed number of pixels per tick, so game speed is
//! tied to the frame rate. [`FrameClock`] keeps that rate steady by sleeping
//! off whatever is left of each frame's budget.

use std::time::{Duration, Instant};

/// Blocks until the next frame is due
pub trait FramePacer {
    fn wait_for_next_frame(&mut self);
}

#[derive(Debug)]
pub struct FrameClock {
    frame_budget: Duration,
    frame_start: Instant,
}

impl FrameClock {
    /// `frame_rate` is in frames per second and must be nonzero
    pub fn new(frame_rate: u32) -> Self {
        FrameClock {
            frame_budget: Self::budget_for(frame_rate),
            frame_start: Instant::now(),
        }
    }

    fn budget_for(frame_rate: u32) -> Duration {
        Duration::from_secs(1) / frame_rate.max(1)
    }

    pub fn frame_budget(&self) -> Duration {
        self.frame_budget
    }

    /// Time left in the current frame; zero once the frame overran
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.frame_budget.saturating_sub(elapsed)
    }
}

impl FramePacer for FrameClock {
    fn wait_for_next_frame(&mut self) {
        let remaining = self.remaining(self.frame_start.elapsed());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.frame_start = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_for_sixty_fps() {
        let clock = FrameClock::new(60);
        assert_eq!(clock.frame_budget(), Duration::from_nanos(16_666_666));
    }

    #[test]
    fn test_remaining() {
        let clock = FrameClock::new(50);
        assert_eq!(clock.remaining(Duration::from_millis(5)), Duration::from_millis(15));
        assert_eq!(clock.remaining(Duration::from_millis(20)), Duration::ZERO);
        assert_eq!(clock.remaining(Duration::from_millis(45)), Duration::ZERO);
    }

    #[test]
    fn test_waits_about_one_frame() {
        let mut clock = FrameClock::new(100);
        clock.wait_for_next_frame();
        let start = Instant::now();
        clock.wait_for_next_frame();
        assert!(start.elapsed() >= Duration::from_millis(9));
    }
}
