/// Fixed-timestep accumulator.
///
/// Measured frame deltas are accumulated and released as whole ticks of
/// `step` seconds, so animation speed does not depend on the frame rate.
/// At most `max_ticks` are released per frame; any excess backlog is dropped.
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f64,
    max_ticks: u32,
    accumulator: f64,
    time: f64,
}

impl FixedStep {
    /// Default cap on ticks released by a single `advance`.
    pub const DEFAULT_MAX_TICKS: u32 = 8;

    pub fn new(step: f64) -> Self {
        debug_assert!(step > 0.0, "fixed step must be positive");
        Self {
            step,
            max_ticks: Self::DEFAULT_MAX_TICKS,
            accumulator: 0.0,
            time: 0.0,
        }
    }

    pub fn with_max_ticks(mut self, max_ticks: u32) -> Self {
        self.max_ticks = max_ticks.max(1);
        self
    }

    /// Adds `dt` seconds and returns how many ticks to run now.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += f64::from(dt.max(0.0));

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_ticks {
            self.accumulator -= self.step;
            self.time += self.step;
            ticks += 1;
        }

        if self.accumulator >= self.step {
            log::trace!("fixed step backlog of {:.3}s dropped", self.accumulator);
            self.accumulator %= self.step;
        }

        ticks
    }

    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Simulated time: `step` times the number of ticks released so far.
    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Fraction of a tick left in the accumulator, in `[0, 1)`.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.accumulator / self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn releases_whole_ticks_and_keeps_remainder() {
        let mut fs = FixedStep::new(0.02);
        assert_eq!(fs.advance(0.05), 2);
        assert!((fs.alpha() - 0.5).abs() < 1e-4);
        assert_eq!(fs.advance(0.01), 1);
        assert!((fs.time() - 0.06).abs() < 1e-9);
    }

    #[test]
    fn short_frames_accumulate() {
        let mut fs = FixedStep::new(0.02);
        assert_eq!(fs.advance(0.008), 0);
        assert_eq!(fs.advance(0.008), 0);
        assert_eq!(fs.advance(0.008), 1);
    }

    #[test]
    fn backlog_is_capped() {
        let mut fs = FixedStep::new(0.02).with_max_ticks(3);
        assert_eq!(fs.advance(1.0), 3);
        assert!(fs.alpha() < 1.0);
        assert_eq!(fs.advance(0.0), 0);
    }

    #[test]
    fn negative_delta_is_ignored() {
        let mut fs = FixedStep::new(0.02);
        assert_eq!(fs.advance(-1.0), 0);
        assert_eq!(fs.time(), 0.0);
    }
}
