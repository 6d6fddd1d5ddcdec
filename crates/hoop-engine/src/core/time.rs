/// Fixed timestep accumulator.
/// Decouples simulation ticks from the host's refresh rate: a 144 Hz display
/// and a 30 Hz display produce the same trajectory.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
    /// Most ticks a single frame may run.
    max_steps: u32,
}

impl FixedTimestep {
    pub fn new(dt: f32, max_steps: u32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            max_steps: max_steps.max(1),
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    /// Negative or non-finite frame deltas add nothing.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if frame_dt.is_finite() && frame_dt > 0.0 {
            self.accumulator += frame_dt;
        }
        // Cap to prevent spiral of death
        self.accumulator = self.accumulator.min(self.dt * self.max_steps as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Interpolation alpha for rendering between ticks (0.0 to 1.0).
    pub fn alpha(&self) -> f32 {
        (self.accumulator / self.dt).clamp(0.0, 1.0)
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Drop any partial frame time (used when the loop restarts).
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_exact() {
        let mut ts = FixedTimestep::new(1.0 / 60.0, 10);
        let steps = ts.accumulate(1.0 / 60.0);
        assert_eq!(steps, 1);
    }

    #[test]
    fn accumulates_partial() {
        let mut ts = FixedTimestep::new(1.0 / 60.0, 10);
        let steps = ts.accumulate(0.008); // half a frame
        assert_eq!(steps, 0);
        let steps = ts.accumulate(0.010); // over one frame total
        assert_eq!(steps, 1);
    }

    #[test]
    fn caps_at_max_steps() {
        let mut ts = FixedTimestep::new(1.0 / 60.0, 10);
        let steps = ts.accumulate(1.0); // 60 frames worth, but capped at 10
        assert_eq!(steps, 10);
    }

    #[test]
    fn refresh_rate_does_not_change_tick_count() {
        let mut fast = FixedTimestep::new(1.0 / 60.0, 10);
        let mut slow = FixedTimestep::new(1.0 / 60.0, 10);
        let fast_steps: u32 = (0..144).map(|_| fast.accumulate(1.0 / 144.0)).sum();
        let slow_steps: u32 = (0..30).map(|_| slow.accumulate(1.0 / 30.0)).sum();
        assert!((fast_steps as i32 - slow_steps as i32).abs() <= 1);
        assert!((59..=60).contains(&fast_steps));
    }

    #[test]
    fn bad_frame_delta_adds_nothing() {
        let mut ts = FixedTimestep::new(1.0 / 60.0, 10);
        assert_eq!(ts.accumulate(-1.0), 0);
        assert_eq!(ts.accumulate(f32::NAN), 0);
        assert_eq!(ts.alpha(), 0.0);
    }

    #[test]
    fn alpha_is_between_zero_and_one() {
        let mut ts = FixedTimestep::new(1.0 / 60.0, 10);
        ts.accumulate(0.008);
        let a = ts.alpha();
        assert!(a >= 0.0 && a <= 1.0, "alpha was {}", a);
        ts.reset();
        assert_eq!(ts.alpha(), 0.0);
    }
}
