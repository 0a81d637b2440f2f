/// Exponentially smoothed frame timing for the perf readout.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameStats {
    avg_frame_sec: f32,
    frames: u64,
}

impl FrameStats {
    // weight of the newest sample
    const BLEND: f32 = 0.1;

    pub fn record(&mut self, elapsed: f32) {
        if !(elapsed.is_finite() && elapsed > 0.0) {
            return;
        }
        self.avg_frame_sec = if self.frames == 0 {
            elapsed
        } else {
            self.avg_frame_sec + (elapsed - self.avg_frame_sec) * Self::BLEND
        };
        self.frames += 1;
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn frame_ms(&self) -> f32 {
        self.avg_frame_sec * 1000.0
    }

    pub fn fps(&self) -> f32 {
        if self.avg_frame_sec > 0.0 {
            1.0 / self.avg_frame_sec
        } else {
            0.0
        }
    }
}
