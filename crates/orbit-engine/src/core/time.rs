/// Fixed timestep accumulator.
///
/// The one clock every animation in the engine runs on. The host hands over
/// variable frame deltas; logic sees only whole steps of `dt`, so per-step
/// increments behave the same at 30, 60 or 144 Hz.
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
    /// Number of fixed steps handed out so far.
    frames: u64,
}

/// Cap on steps per host frame, so a long stall (tab in background)
/// does not turn into a burst of catch-up work.
const MAX_STEPS_PER_FRAME: u32 = 10;

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            frames: 0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if !(frame_dt > 0.0) {
            return 0;
        }
        self.accumulator += frame_dt;
        self.accumulator = self.accumulator.min(self.dt * MAX_STEPS_PER_FRAME as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        self.frames += steps as u64;
        steps
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Total fixed steps run since construction.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
