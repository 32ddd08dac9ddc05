use std::time::Duration;

/// One fixed-rate update tick.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StepTime {
    /// Length of the step.
    pub interval: Duration,

    /// `interval` in seconds.
    pub dt: f32,

    /// Monotonic step counter.
    pub step_index: u64,
}

/// Accumulator driving fixed-rate updates from variable frame times.
///
/// Each frame, feed the real elapsed time into [`accumulate`](Self::accumulate),
/// then call [`next_step`](Self::next_step) until it returns `None`. A step is
/// produced only while the accumulated time strictly exceeds one interval; the
/// remainder carries over to the next frame.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    interval: Duration,
    accumulated: Duration,
    step_index: u64,
}

impl FixedTimestep {
    /// Creates an accumulator with the given step length.
    pub fn new(interval: Duration) -> Self {
        debug_assert!(!interval.is_zero(), "fixed timestep interval must be non-zero");
        Self {
            interval,
            accumulated: Duration::ZERO,
            step_index: 0,
        }
    }

    /// Creates an accumulator stepping `rate_hz` times per second.
    pub fn from_rate(rate_hz: f64) -> Self {
        Self::new(Duration::from_secs_f64(1.0 / rate_hz))
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time banked but not yet consumed by a step.
    #[inline]
    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }

    /// Adds real elapsed time to the budget.
    pub fn accumulate(&mut self, elapsed: Duration) {
        self.accumulated = self.accumulated.saturating_add(elapsed);
    }

    /// Consumes one interval from the budget if more than one interval is banked.
    pub fn next_step(&mut self) -> Option<StepTime> {
        if self.accumulated <= self.interval {
            return None;
        }

        self.accumulated -= self.interval;

        let step = StepTime {
            interval: self.interval,
            dt: self.interval.as_secs_f32(),
            step_index: self.step_index,
        };
        self.step_index = self.step_index.wrapping_add(1);

        Some(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(ts: &mut FixedTimestep) -> Vec<StepTime> {
        std::iter::from_fn(|| ts.next_step()).collect()
    }

    #[test]
    fn sixty_hertz_interval() {
        let ts = FixedTimestep::from_rate(60.0);
        let nanos = ts.interval().as_nanos();
        assert!((16_666_666..=16_666_667).contains(&nanos));
    }

    #[test]
    fn less_than_one_interval_runs_nothing() {
        let mut ts = FixedTimestep::from_rate(60.0);
        ts.accumulate(Duration::from_millis(10));
        assert!(drain(&mut ts).is_empty());
        assert_eq!(ts.accumulated(), Duration::from_millis(10));
    }

    #[test]
    fn exactly_one_interval_is_not_enough() {
        let mut ts = FixedTimestep::new(Duration::from_millis(10));
        ts.accumulate(Duration::from_millis(10));
        assert!(ts.next_step().is_none());

        ts.accumulate(Duration::from_nanos(1));
        assert!(ts.next_step().is_some());
        assert_eq!(ts.accumulated(), Duration::from_nanos(1));
    }

    #[test]
    fn backlog_drains_in_whole_steps_and_keeps_remainder() {
        let mut ts = FixedTimestep::from_rate(60.0);
        ts.accumulate(Duration::from_millis(40));

        let steps = drain(&mut ts);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].step_index, 0);
        assert_eq!(steps[1].step_index, 1);
        assert_eq!(ts.accumulated(), Duration::from_millis(40) - ts.interval() * 2);
    }

    #[test]
    fn remainder_carries_into_next_frame() {
        let mut ts = FixedTimestep::new(Duration::from_millis(10));
        ts.accumulate(Duration::from_millis(6));
        assert!(drain(&mut ts).is_empty());

        ts.accumulate(Duration::from_millis(6));
        let steps = drain(&mut ts);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].interval, Duration::from_millis(10));
        assert_eq!(ts.accumulated(), Duration::from_millis(2));
    }
}
