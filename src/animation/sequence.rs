//! Frame Sequence
//!
//! An ordered list of frames played back by a [`FrameClock`]. When the
//! clock steps past the last frame the sequence either wraps to the start
//! (looping) or holds the last frame (clamped).

use super::clock::FrameClock;

/// Ordered frames plus playback position.
///
/// `F` is a frame handle. The sequence only clones handles around; the
/// images they point at belong to whoever loaded them.
#[derive(Debug, Clone)]
pub struct FrameSequence<F> {
    frames: Vec<F>,
    clock: FrameClock,
    looping: bool,
    /// Always a valid index into `frames` when `frames` is non-empty
    index: usize,
}

impl<F> FrameSequence<F> {
    /// Create a sequence. An empty frame list is valid and never yields a frame.
    pub fn new(frames: Vec<F>, frame_rate: u32, looping: bool) -> Self {
        Self {
            frames,
            clock: FrameClock::new(frame_rate),
            looping,
            index: 0,
        }
    }

    /// Advance playback by `dt` seconds.
    ///
    /// Looping sequences wrap to frame 0 past the end. Clamped sequences
    /// stop on the last frame and throw away the excess time.
    pub fn advance(&mut self, dt: f32) {
        if self.frames.is_empty() {
            return;
        }

        let steps = self.clock.tick(dt);
        if steps == 0 {
            return;
        }

        let len = self.frames.len() as u64;
        let index = self.index as u64;
        if steps < len - index {
            self.index = (index + steps) as usize;
        } else if self.looping {
            self.index = ((index + steps % len) % len) as usize;
        } else {
            self.index = self.frames.len() - 1;
            self.clock.reset();
        }
    }

    /// Frame to draw right now, `None` for an empty sequence
    pub fn current_frame(&self) -> Option<&F> {
        self.frames.get(self.index)
    }

    /// Current position, `None` for an empty sequence
    pub fn current_index(&self) -> Option<usize> {
        if self.frames.is_empty() {
            None
        } else {
            Some(self.index)
        }
    }

    /// Rewind to the first frame with no residual time
    pub fn reset(&mut self) {
        self.index = 0;
        self.clock.reset();
    }

    /// True for a clamped sequence resting on its last frame
    pub fn is_finished(&self) -> bool {
        !self.looping && !self.frames.is_empty() && self.index == self.frames.len() - 1
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[F] {
        &self.frames
    }

    pub fn frame_rate(&self) -> u32 {
        self.clock.frame_rate()
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Residual seconds not yet turned into a frame step
    pub fn accumulated_time(&self) -> f64 {
        self.clock.accumulated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut seq = FrameSequence::new(frames(4), 10, true);
        assert_eq!(seq.current_index(), Some(0));

        seq.advance(0.25);
        assert_eq!(seq.current_index(), Some(2));
        assert!((seq.accumulated_time() - 0.05).abs() < 1e-6);

        seq.advance(0.15);
        assert_eq!(seq.current_index(), Some(0));
        assert!(seq.accumulated_time() < 1e-6);
    }

    #[test]
    fn test_fragmented_advance_matches_single_call() {
        let rate = 8;
        for k in 0..20u32 {
            let mut whole = FrameSequence::new(frames(5), rate, true);
            whole.advance(k as f32 / rate as f32);

            let mut split = FrameSequence::new(frames(5), rate, true);
            // Deliver the same duration in quarter-frame slices
            for _ in 0..(k * 4) {
                split.advance(1.0 / (rate as f32 * 4.0));
            }

            let expected = (k as usize) % 5;
            assert_eq!(whole.current_index(), Some(expected), "k={}", k);
            assert_eq!(split.current_index(), Some(expected), "k={}", k);
        }
    }

    #[test]
    fn test_advance_determinism_at_common_rates() {
        for rate in [12u32, 60] {
            for k in 1..=400u32 {
                let mut whole = FrameSequence::new(frames(7), rate, true);
                whole.advance(k as f32 / rate as f32);
                assert_eq!(whole.current_index(), Some(k as usize % 7), "rate={} k={}", rate, k);
            }

            // Same total delivered one frame at a time
            let mut split = FrameSequence::new(frames(7), rate, true);
            for k in 1..=300u32 {
                split.advance(1.0 / rate as f32);
                assert_eq!(split.current_index(), Some(k as usize % 7), "rate={} k={}", rate, k);
            }
        }
    }

    #[test]
    fn test_long_clamped_sequence_reaches_last_frame() {
        let n = 51;
        let mut seq = FrameSequence::new(frames(n), 12, false);
        seq.advance((n - 1) as f32 / 12.0);
        assert_eq!(seq.current_index(), Some(n - 1));
        assert!(seq.is_finished());

        seq.advance(5.0);
        assert_eq!(seq.current_index(), Some(n - 1));
    }

    #[test]
    fn test_clamp_at_end() {
        let mut seq = FrameSequence::new(frames(4), 10, false);
        seq.advance(0.3);
        assert_eq!(seq.current_index(), Some(3));
        assert!(seq.is_finished());

        for _ in 0..50 {
            seq.advance(0.37);
        }
        assert_eq!(seq.current_index(), Some(3));
        assert_eq!(seq.current_frame(), Some(&3));
        // Excess time is discarded rather than piling up
        assert!(seq.accumulated_time() < seq.frames().len() as f64 * 0.1);
    }

    #[test]
    fn test_clamp_discards_overflow() {
        let mut seq = FrameSequence::new(frames(3), 10, false);
        seq.advance(10.0);
        assert_eq!(seq.current_index(), Some(2));
        assert_eq!(seq.accumulated_time(), 0.0);
    }

    #[test]
    fn test_empty_sequence_is_inert() {
        let mut seq: FrameSequence<usize> = FrameSequence::new(Vec::new(), 10, true);
        for _ in 0..100 {
            seq.advance(0.5);
        }
        assert!(seq.current_frame().is_none());
        assert!(seq.current_index().is_none());
        assert!(!seq.is_finished());
        seq.reset();
        assert!(seq.current_frame().is_none());
    }

    #[test]
    fn test_reset_round_trip() {
        let mut seq = FrameSequence::new(vec!["a", "b", "c"], 10, true);
        seq.advance(0.15);
        assert_eq!(seq.current_frame(), Some(&"b"));

        seq.reset();
        seq.advance(0.0);
        assert_eq!(seq.current_index(), Some(0));
        assert_eq!(seq.current_frame(), Some(&"a"));
        assert_eq!(seq.accumulated_time(), 0.0);
    }

    #[test]
    fn test_zero_frame_rate_plays_at_one_fps() {
        let mut seq = FrameSequence::new(frames(3), 0, true);
        assert_eq!(seq.frame_rate(), 1);
        seq.advance(0.9);
        assert_eq!(seq.current_index(), Some(0));
        seq.advance(0.1);
        assert_eq!(seq.current_index(), Some(1));
    }

    #[test]
    fn test_large_dt_wraps_without_overflow() {
        let mut seq = FrameSequence::new(frames(7), 60, true);
        seq.advance(1.0e9);
        let index = seq.current_index().unwrap();
        assert!(index < 7);
    }
}
