//! Frame pacing: variable host deltas in, whole simulation ticks out.

/// Converts variable animation-frame deltas into whole fixed-step ticks.
///
/// The simulation advances a fixed amount per tick (no delta-time scaling),
/// so perceived speed follows the display's refresh rate. The accumulator
/// only decides how many whole ticks a frame is worth, and caps catch-up
/// after a stall so a backgrounded tab cannot fast-forward the sky.
pub struct TickAccumulator {
    /// Seconds of frame time one tick is worth.
    dt: f32,
    /// Carried-over fraction of a tick.
    accumulator: f32,
}

impl TickAccumulator {
    /// Upper bound on ticks returned from a single `accumulate` call.
    pub const MAX_CATCHUP: u32 = 5;

    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time and return the number of whole ticks to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.max(0.0);
        self.accumulator = self.accumulator.min(self.dt * Self::MAX_CATCHUP as f32);
        let ticks = (self.accumulator / self.dt) as u32;
        self.accumulator -= ticks as f32 * self.dt;
        ticks
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_tick_exact() {
        let mut acc = TickAccumulator::new(1.0 / 60.0);
        assert_eq!(acc.accumulate(1.0 / 60.0), 1);
    }

    #[test]
    fn partial_frames_accumulate() {
        let mut acc = TickAccumulator::new(1.0 / 60.0);
        assert_eq!(acc.accumulate(0.008), 0);
        assert_eq!(acc.accumulate(0.010), 1);
    }

    #[test]
    fn stall_is_capped() {
        let mut acc = TickAccumulator::new(1.0 / 60.0);
        assert_eq!(acc.accumulate(10.0), TickAccumulator::MAX_CATCHUP);
    }

    #[test]
    fn negative_delta_is_ignored() {
        let mut acc = TickAccumulator::new(1.0 / 60.0);
        assert_eq!(acc.accumulate(-1.0), 0);
        assert_eq!(acc.accumulate(1.0 / 60.0), 1);
    }
}
