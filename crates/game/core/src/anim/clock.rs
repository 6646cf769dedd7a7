/// Accumulates step time and advances a frame index once a frame's duration
/// has elapsed.
///
/// This replaces a "wait until enough time has passed" coroutine with an
/// explicit accumulator driven by the step loop: callers [`accumulate`] the
/// step's elapsed time, then [`take_frames`] to consume every whole frame at
/// once.
///
/// [`accumulate`]: FrameClock::accumulate
/// [`take_frames`]: FrameClock::take_frames
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameClock {
    index: usize,
    timer: f32,
}

impl FrameClock {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Seconds accumulated toward the next frame.
    pub fn timer(&self) -> f32 {
        self.timer
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.timer = 0.0;
    }

    pub fn accumulate(&mut self, elapsed: f32) {
        self.timer += elapsed;
    }

    /// Consumes every whole frame duration accumulated so far and returns
    /// how many there were. The timer keeps the remainder, which is always
    /// below `seconds_per_frame`.
    ///
    /// The index is left alone; the caller decides how the frames map onto
    /// its sequence.
    pub fn take_frames(&mut self, seconds_per_frame: f32) -> usize {
        if !(seconds_per_frame > 0.0) || self.timer < seconds_per_frame {
            return 0;
        }
        let remainder = self.timer.rem_euclid(seconds_per_frame);
        let frames = ((self.timer - remainder) / seconds_per_frame).round();
        self.timer = if remainder < seconds_per_frame {
            remainder
        } else {
            0.0
        };
        // Float-to-int casts saturate, so absurd timers cannot wrap.
        (frames as usize).max(1)
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }
}
