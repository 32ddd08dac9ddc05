use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous tick.
    pub elapsed: Duration,

    /// `elapsed` in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Elapsed time is reported as measured unless a maximum delta is set, in which
/// case long stalls (debugger pauses, minimized windows) are cut down to it.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    max_delta: Option<Duration>,
}

impl FrameClock {
    /// Creates a clock that reports real elapsed time.
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            frame_index: 0,
            max_delta: None,
        }
    }

    /// Creates a clock whose reported delta never exceeds `max_delta`.
    pub fn with_max_delta(max_delta: Duration) -> Self {
        Self {
            max_delta: Some(max_delta),
            ..Self::new()
        }
    }

    /// Resets the clock baseline.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let mut elapsed = now.saturating_duration_since(self.last);

        if let Some(max) = self.max_delta {
            elapsed = elapsed.min(max);
        }

        self.last = now;

        let ft = FrameTime {
            elapsed,
            dt: elapsed.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_index_increments_per_tick() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
        assert_eq!(clock.tick().frame_index, 2);
    }

    #[test]
    fn elapsed_covers_sleep() {
        let mut clock = FrameClock::new();
        std::thread::sleep(Duration::from_millis(5));
        let ft = clock.tick();
        assert!(ft.elapsed >= Duration::from_millis(5));
        assert_eq!(ft.dt, ft.elapsed.as_secs_f32());
    }

    #[test]
    fn max_delta_caps_reported_time() {
        let mut clock = FrameClock::with_max_delta(Duration::from_millis(1));
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(clock.tick().elapsed, Duration::from_millis(1));
    }
}
