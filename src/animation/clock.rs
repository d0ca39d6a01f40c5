//! Frame Clock
//!
//! Converts wall-clock delta time into discrete frame steps at a fixed rate.
//! Time is accumulated in f64 so residuals survive thousands of small
//! per-frame deltas without drifting.

/// Minimum tolerance (in frames) when deciding whether a whole step has
/// elapsed. Absorbs binary rounding so that e.g. 0.25s + 0.15s at 10 fps is
/// exactly four steps instead of three.
const STEP_EPSILON: f64 = 1e-6;

/// Tolerance per elapsed frame. Deltas arrive as f32, whose rounding error
/// grows with the size of the delta.
const STEP_RELATIVE_EPSILON: f64 = 4.0 * f32::EPSILON as f64;

/// Accumulates elapsed time and hands out whole frame advances.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameClock {
    /// Frames per second, always >= 1
    frame_rate: u32,
    /// Residual seconds not yet converted into a step, always >= 0
    accumulated: f64,
}

impl FrameClock {
    /// Create a clock. A rate of 0 is treated as 1.
    pub fn new(frame_rate: u32) -> Self {
        Self {
            frame_rate: frame_rate.max(1),
            accumulated: 0.0,
        }
    }

    /// Effective frames per second
    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    /// Seconds per frame step
    pub fn frame_time(&self) -> f64 {
        1.0 / self.frame_rate as f64
    }

    /// Residual seconds carried into the next tick
    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }

    /// Add `dt` seconds and return how many whole frame steps elapsed.
    ///
    /// Negative, NaN and infinite deltas count as zero.
    pub fn tick(&mut self, dt: f32) -> u64 {
        let dt = dt as f64;
        if dt.is_finite() && dt > 0.0 {
            self.accumulated += dt;
        }

        let frames = self.accumulated * self.frame_rate as f64;
        let tolerance = STEP_EPSILON.max(frames * STEP_RELATIVE_EPSILON);
        let steps = (frames + tolerance).floor();
        if steps < 1.0 {
            return 0;
        }

        let frame_time = self.frame_time();
        self.accumulated = (self.accumulated - steps * frame_time).max(0.0);
        // Only reachable when the step count saturated u64
        if self.accumulated >= frame_time {
            self.accumulated %= frame_time;
        }
        steps as u64
    }

    /// Drop any residual time
    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(super::DEFAULT_FRAME_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rate_is_one() {
        let clock = FrameClock::new(0);
        assert_eq!(clock.frame_rate(), 1);
        assert_eq!(clock.frame_time(), 1.0);
    }

    #[test]
    fn test_tick_keeps_residual() {
        let mut clock = FrameClock::new(10);
        assert_eq!(clock.tick(0.25), 2);
        assert!((clock.accumulated() - 0.05).abs() < 1e-6);

        // 0.05 residual + 0.15 = 0.2s = two whole steps, nothing left over
        assert_eq!(clock.tick(0.15), 2);
        assert!(clock.accumulated() < 1e-6);
    }

    #[test]
    fn test_small_ticks_sum_to_steps() {
        let mut clock = FrameClock::new(12);
        let mut steps = 0;
        for _ in 0..60 {
            steps += clock.tick(1.0 / 60.0);
        }
        // One second at 12 fps
        assert_eq!(steps, 12);
    }

    #[test]
    fn test_large_single_tick_counts_every_step() {
        for rate in [12u32, 24, 30, 60] {
            for k in 1..=400u64 {
                let mut clock = FrameClock::new(rate);
                assert_eq!(clock.tick(k as f32 / rate as f32), k, "rate={} k={}", rate, k);
            }
        }
    }

    #[test]
    fn test_degenerate_dt_ignored() {
        let mut clock = FrameClock::new(10);
        assert_eq!(clock.tick(-1.0), 0);
        assert_eq!(clock.tick(f32::NAN), 0);
        assert_eq!(clock.tick(f32::INFINITY), 0);
        assert_eq!(clock.accumulated(), 0.0);
    }

    #[test]
    fn test_reset_drops_residual() {
        let mut clock = FrameClock::new(4);
        clock.tick(0.1);
        assert!(clock.accumulated() > 0.0);
        clock.reset();
        assert_eq!(clock.accumulated(), 0.0);
    }
}
