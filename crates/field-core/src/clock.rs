use crate::constants::TIME_SCALE;
use instant::Instant;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTiming {
    /// Seconds since the clock started.
    pub elapsed: f32,
    /// Seconds since the previous tick.
    pub dt: f32,
    /// Time value fed to the shader.
    pub shader_time: f32,
}

/// Monotonic per-frame clock driving the render tick.
pub struct FrameClock {
    start: Instant,
    last: Instant,
    frames: u64,
}

impl FrameClock {
    pub fn new(now: Instant) -> Self {
        Self {
            start: now,
            last: now,
            frames: 0,
        }
    }

    pub fn tick(&mut self, now: Instant) -> FrameTiming {
        let dt = (now - self.last).as_secs_f32();
        self.last = now;
        self.frames += 1;
        let elapsed = (now - self.start).as_secs_f32();
        FrameTiming {
            elapsed,
            dt,
            shader_time: elapsed * TIME_SCALE,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
